use eframe::egui;
use poisson_core::{Chart, Renderer};
use tracing::debug;

use crate::app::{ChartApp, WarningApp};

const CHART_SIZE: [f32; 2] = [900.0, 600.0];
const WARNING_SIZE: [f32; 2] = [420.0, 140.0];

/// Shows each chart or warning in a native window, one at a time.
///
/// Construct with [`WindowRenderer::new`] and chain builder methods as needed.
#[derive(Debug, Clone, Copy)]
pub struct WindowRenderer {
    chart_size: [f32; 2],
    warning_title: &'static str,
}

impl WindowRenderer {
    /// Creates a renderer with a 900×600 chart window.
    #[must_use]
    pub fn new() -> Self {
        Self {
            chart_size: CHART_SIZE,
            warning_title: "Warning",
        }
    }

    /// Sets the inner size of chart windows, in points.
    #[must_use]
    pub fn chart_size(mut self, width: f32, height: f32) -> Self {
        self.chart_size = [width, height];
        self
    }

    /// Sets the title of warning windows.
    #[must_use]
    pub fn warning_title(mut self, title: &'static str) -> Self {
        self.warning_title = title;
        self
    }

    fn options(viewport: egui::ViewportBuilder) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport,
            ..eframe::NativeOptions::default()
        }
    }
}

impl Default for WindowRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for WindowRenderer {
    type Error = eframe::Error;

    /// Opens a blocking window displaying the chart.
    ///
    /// Blocks until the window is closed by the user.
    fn show(&mut self, chart: &Chart) -> Result<(), Self::Error> {
        debug!(title = %chart.title, "opening chart window");
        let app = ChartApp::new(chart.clone());

        let viewport = egui::ViewportBuilder::default()
            .with_title(chart.title.as_str())
            .with_inner_size(self.chart_size);

        eframe::run_native(
            &chart.title,
            Self::options(viewport),
            Box::new(move |_cc| Ok(Box::new(app))),
        )
    }

    /// Opens a blocking window with the message and an OK button.
    fn warn(&mut self, message: &str) -> Result<(), Self::Error> {
        debug!(message, "opening warning window");
        let app = WarningApp::new(message);

        let viewport = egui::ViewportBuilder::default()
            .with_title(self.warning_title)
            .with_inner_size(WARNING_SIZE)
            .with_resizable(false);

        eframe::run_native(
            self.warning_title,
            Self::options(viewport),
            Box::new(move |_cc| Ok(Box::new(app))),
        )
    }
}
