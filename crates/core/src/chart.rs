//! Plain descriptions of what to draw.
//!
//! A [`Chart`] carries everything a renderer needs for one window: title, axis
//! labels and a single series. Charts hold no references to the samples they
//! were built from.

use crate::histogram::{Bin, Histogram};

/// An RGB color hint for a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const RED: Self = Self(200, 40, 40);
    pub const GREEN: Self = Self(0, 128, 0);
    pub const BLUE: Self = Self(0, 0, 255);
    pub const PURPLE: Self = Self(128, 0, 128);
}

/// The data drawn in a chart.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Series {
    /// A step line through `[x, y]` points: the value holds at `y` from each
    /// point until the next one.
    Steps { points: Vec<[f64; 2]>, color: Rgb },

    /// A bar per histogram bin, each `width` wide.
    Bars {
        bins: Vec<Bin>,
        width: f64,
        color: Rgb,
    },
}

/// One window's worth of plot data.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,

    /// Lower bound of the x-axis, if the axis should not start at the data.
    pub x_min: Option<f64>,

    pub series: Series,
}

impl Chart {
    /// Creates a step-line chart.
    #[must_use]
    pub fn steps(title: impl Into<String>, points: Vec<[f64; 2]>, color: Rgb) -> Self {
        Self {
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            x_min: None,
            series: Series::Steps { points, color },
        }
    }

    /// Creates a bar chart from a histogram.
    #[must_use]
    pub fn bars(title: impl Into<String>, histogram: &Histogram, color: Rgb) -> Self {
        Self {
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            x_min: None,
            series: Series::Bars {
                bins: histogram.bins().to_vec(),
                width: histogram.width(),
                color,
            },
        }
    }

    /// Sets both axis labels.
    #[must_use]
    pub fn labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = x.into();
        self.y_label = y.into();
        self
    }

    /// Sets the lower bound of the x-axis.
    #[must_use]
    pub fn x_min(mut self, x_min: f64) -> Self {
        self.x_min = Some(x_min);
        self
    }
}
