//! The four-step lab experiment.
//!
//! A run is split into two phases. [`Experiment::plan`] does all of the
//! sampling and binning and returns one [`Step`] per window; nothing is
//! displayed. [`Experiment::render`] then walks the steps in order, showing
//! each chart and turning each error into a warning.
//!
//! # Example
//!
//! ```
//! use poisson_core::{Config, Experiment, source::seeded};
//!
//! let experiment = Experiment::new(Config::default().with_event_index(100));
//! let steps = experiment.plan(&mut seeded(1));
//!
//! assert_eq!(steps.len(), 4);
//! assert!(steps[0].is_ok());
//! assert!(steps[1].is_err());
//! assert!(steps[2].is_ok());
//! assert!(steps[3].is_ok());
//! ```

use tracing::{info, warn};

use crate::{
    Config, Error, Histogram, PoissonProcess, Renderer, Trials,
    chart::{Chart, Rgb},
    source::UniformSource,
};

/// One display step: a chart to show, or the reason it was skipped.
pub type Step = Result<Chart, Error>;

const FREQUENCY: &str = "Frequency";

/// Builds the lab's charts from a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Experiment {
    config: Config,
}

impl Experiment {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn process(&self) -> PoissonProcess {
        PoissonProcess::with_rate(self.config.rate())
    }

    fn trials(&self) -> Trials {
        Trials::new(
            self.process(),
            self.config.events_per_trial(),
            self.config.trials(),
        )
    }

    /// Step line of the cumulative event count of one realization.
    pub fn trajectory<S: UniformSource + ?Sized>(&self, source: &mut S) -> Chart {
        let realization = self
            .process()
            .generate(source, self.config.trajectory_events());

        Chart::steps(
            format!(
                "Poisson process trajectory (λ = {})",
                self.config.rate().get()
            ),
            realization.trajectory(),
            Rgb::RED,
        )
        .labels("Time", "Event count")
        .x_min(0.0)
    }

    /// Histogram of the time of the configured event across trials.
    ///
    /// # Errors
    ///
    /// Returns an error if the event index is out of range for the per-trial
    /// event count, or if no samples were collected.
    pub fn event_time_histogram<S: UniformSource + ?Sized>(
        &self,
        source: &mut S,
    ) -> Result<Chart, Error> {
        let index = self.config.event_index();
        let samples = self.trials().event_times(source, index)?;
        let histogram = Histogram::continuous(&samples, self.config.bin_count())?;

        Ok(Chart::bars(
            format!("Histogram of the time of event {}", index + 1),
            &histogram,
            Rgb::GREEN,
        )
        .labels("Time of event", FREQUENCY)
        .x_min(samples.min().unwrap_or_default().max(0.0)))
    }

    /// Histogram of the pooled intervals between consecutive events.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyData`] if the trials produce no intervals.
    pub fn interval_histogram<S: UniformSource + ?Sized>(
        &self,
        source: &mut S,
    ) -> Result<Chart, Error> {
        let samples = self.trials().intervals(source)?;
        let histogram = Histogram::continuous(&samples, self.config.bin_count())?;

        Ok(Chart::bars(
            "Histogram of intervals between events",
            &histogram,
            Rgb::BLUE,
        )
        .labels("Interval between events", FREQUENCY)
        .x_min(samples.min().unwrap_or_default().max(0.0)))
    }

    /// Distribution of the number of events up to the configured timestamp.
    pub fn occurrence_histogram<S: UniformSource + ?Sized>(&self, source: &mut S) -> Chart {
        let timestamp = self.config.timestamp();
        let samples = self.trials().occurrences(source, timestamp);
        let histogram = Histogram::discrete(&samples);

        Chart::bars(
            format!("Distribution of the number of events up to time {timestamp}"),
            &histogram,
            Rgb::PURPLE,
        )
        .labels("Number of events", FREQUENCY)
        .x_min(0.0)
    }

    /// Computes every step of the run without displaying anything.
    ///
    /// Always returns four steps, in display order: trajectory, event time,
    /// intervals, occurrences. A failing step does not prevent later ones.
    pub fn plan<S: UniformSource + ?Sized>(&self, source: &mut S) -> Vec<Step> {
        vec![
            Ok(self.trajectory(source)),
            self.event_time_histogram(source),
            self.interval_histogram(source),
            Ok(self.occurrence_histogram(source)),
        ]
    }

    /// Displays planned steps in order.
    ///
    /// Charts go to [`Renderer::show`]; errors are logged and passed to
    /// [`Renderer::warn`] as their message.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the renderer itself. Step errors are
    /// never returned.
    pub fn render<R: Renderer>(steps: &[Step], mut renderer: R) -> Result<(), R::Error> {
        for step in steps {
            match step {
                Ok(chart) => {
                    info!(title = %chart.title, "showing chart");
                    renderer.show(chart)?;
                }
                Err(err) => {
                    warn!(kind = ?err.kind(), "skipping chart: {err}");
                    renderer.warn(&err.to_string())?;
                }
            }
        }
        Ok(())
    }

    /// Plans the run, then renders it.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the renderer.
    pub fn run<S, R>(&self, source: &mut S, renderer: R) -> Result<(), R::Error>
    where
        S: UniformSource + ?Sized,
        R: Renderer,
    {
        let steps = self.plan(source);
        Self::render(&steps, renderer)
    }
}
