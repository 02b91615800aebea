//! Core of Poisson Lab: a homogeneous Poisson process and the distributions
//! derived from it.
//!
//! This crate has no display code. It turns random draws into charts that a
//! [`Renderer`] can show:
//!
//! - [`PoissonProcess`]: generates a [`Realization`] of event times by
//!   inversion sampling of exponential gaps
//! - [`Trials`]: pools one statistic per realization into a [`SampleSet`]:
//!   time of the k-th event, intervals between events, events up to a time
//! - [`Histogram`]: continuous (fixed bin count over `[0, max]`) or discrete
//!   (one bin per observed integer) frequency distributions
//! - [`Experiment`]: plans the four lab charts from a [`Config`] and renders
//!   them in order
//!
//! Randomness is always passed in by the caller through a
//! [`source::UniformSource`]; any [`rand::Rng`] works.
//!
//! # Features
//!
//! - `serde`: derives `Serialize` for realizations, samples, histograms and
//!   charts.

pub mod chart;
pub mod constraint;
pub mod histogram;
pub mod source;

mod config;
mod error;
mod experiment;
mod process;
mod render;
mod sample;

pub use chart::{Chart, Rgb, Series};
pub use config::Config;
pub use error::{Error, ErrorKind};
pub use experiment::{Experiment, Step};
pub use histogram::{Bin, Histogram};
pub use process::{PoissonProcess, Rate, Realization, generate};
pub use render::Renderer;
pub use sample::{SampleSet, Trials};
