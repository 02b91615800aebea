//! Native plot windows for Poisson Lab.
//!
//! [`WindowRenderer`] implements [`poisson_core::Renderer`] with `eframe` and
//! `egui_plot`. Every chart and every warning opens its own window and blocks
//! until that window is closed.
//!
//! # Example
//!
//! ```ignore
//! use poisson_core::{Config, Experiment};
//! use poisson_plot::WindowRenderer;
//!
//! let mut rng = rand::rng();
//! Experiment::new(Config::default()).run(&mut rng, WindowRenderer::new())?;
//! ```

mod app;
mod geometry;
mod window;

pub use window::WindowRenderer;
