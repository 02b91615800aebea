//! The egui applications behind each window.

use eframe::egui::{self, Color32};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints};
use poisson_core::{Chart, Rgb, Series};

use crate::geometry::{bar_extent, bar_shapes, staircase};

fn color(rgb: Rgb) -> Color32 {
    let Rgb(r, g, b) = rgb;
    Color32::from_rgb(r, g, b)
}

/// Draws a single [`Chart`].
pub(crate) struct ChartApp {
    chart: Chart,
}

impl ChartApp {
    pub(crate) fn new(chart: Chart) -> Self {
        Self { chart }
    }

    /// Returns `[x_min, x_max]` and `y_max` for the default view, if the
    /// series has any data.
    fn bounds(&self) -> Option<([f64; 2], f64)> {
        let ([lo, hi], y_max) = match &self.chart.series {
            Series::Steps { points, .. } => {
                let last = points.last()?;
                ([0.0, last[0]], last[1])
            }
            Series::Bars { bins, width, .. } => {
                let extent = bar_extent(bins, *width)?;
                #[allow(clippy::cast_precision_loss)]
                let y_max = bins.iter().map(|bin| bin.count).max().unwrap_or(0) as f64;
                (extent, y_max)
            }
        };

        let lo = self.chart.x_min.map_or(lo, |x_min| x_min.min(hi));
        Some(([lo, hi], y_max))
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new(self.chart.title.as_str())
                .x_axis_label(self.chart.x_label.as_str())
                .y_axis_label(self.chart.y_label.as_str());

            if let Some(([x_min, x_max], y_max)) = self.bounds() {
                plot = plot
                    .default_x_bounds(x_min, x_max)
                    .default_y_bounds(0.0, (y_max * 1.05).max(1.0));
            }

            plot.show(ui, |plot_ui| match &self.chart.series {
                Series::Steps { points, color: rgb } => {
                    let vertices: PlotPoints = staircase(points).into_iter().collect();
                    plot_ui.line(Line::new("", vertices).color(color(*rgb)).width(2.0));
                }
                Series::Bars {
                    bins,
                    width,
                    color: rgb,
                } => {
                    let bars = bar_shapes(bins, *width)
                        .into_iter()
                        .map(|(center, height, bar_width)| {
                            Bar::new(center, height).width(bar_width)
                        })
                        .collect();
                    plot_ui.bar_chart(BarChart::new("", bars).color(color(*rgb)));
                }
            });
        });
    }
}

/// Shows a warning message with a button that closes the window.
pub(crate) struct WarningApp {
    message: String,
}

impl WarningApp {
    pub(crate) fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

impl eframe::App for WarningApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.label(self.message.as_str());
                ui.add_space(12.0);
                if ui.button("OK").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use poisson_core::{Histogram, SampleSet};

    #[test]
    fn step_bounds_span_origin_to_last_event() {
        let chart = Chart::steps("t", vec![[0.5, 1.0], [2.0, 2.0]], Rgb::RED);
        let app = ChartApp::new(chart);

        assert_eq!(app.bounds(), Some(([0.0, 2.0], 2.0)));
    }

    #[test]
    fn bar_bounds_respect_axis_minimum() {
        let histogram = Histogram::discrete(&SampleSet::from(vec![8_usize, 9, 9, 12]));
        let chart = Chart::bars("n", &histogram, Rgb::PURPLE).x_min(0.0);
        let app = ChartApp::new(chart);

        assert_eq!(app.bounds(), Some(([0.0, 12.5], 2.0)));
    }

    #[test]
    fn empty_series_has_no_bounds() {
        let histogram = Histogram::discrete(&SampleSet::default());
        let app = ChartApp::new(Chart::bars("n", &histogram, Rgb::PURPLE));

        assert_eq!(app.bounds(), None);
    }

    #[test]
    fn palette_maps_to_egui_colors() {
        assert_eq!(color(Rgb::GREEN), Color32::from_rgb(0, 128, 0));
        assert_eq!(color(Rgb::PURPLE), Color32::from_rgb(128, 0, 128));
    }
}
