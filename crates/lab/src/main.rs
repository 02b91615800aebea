//! Poisson Lab.
//!
//! Simulates a homogeneous Poisson process with λ = 2 and shows four windows,
//! one after another:
//!
//! 1. the trajectory of one realization of 150 events,
//! 2. the distribution of the time of the fifth event,
//! 3. the distribution of intervals between events,
//! 4. the distribution of the number of events up to time 5.
//!
//! Distributions pool 150 trials of 100 events each. Close a window to move
//! on to the next one.
//!
//! # Usage
//!
//! ```text
//! cargo run -p poisson-lab
//! RUST_LOG=poisson_core=debug cargo run -p poisson-lab
//! ```

mod logging;

use std::error::Error;

use poisson_core::{Config, Experiment};
use poisson_plot::WindowRenderer;
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    logging::init();

    let config = Config::default();
    info!(
        rate = config.rate().get(),
        trajectory_events = config.trajectory_events(),
        events_per_trial = config.events_per_trial(),
        trials = config.trials(),
        event_index = config.event_index(),
        timestamp = config.timestamp(),
        "starting run"
    );

    let mut rng = StdRng::from_os_rng();
    Experiment::new(config).run(&mut rng, WindowRenderer::new())?;

    info!("run finished");
    Ok(())
}
