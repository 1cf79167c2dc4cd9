//! Plotting utilities for the dipole simulation framework.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoint};

/// A runnable egui application for plotting time series.
#[derive(Default)]
pub struct PlotApp {
    series: Vec<Series>,
    x_label: String,
    y_label: String,
}

struct Series {
    name: String,
    points: Vec<PlotPoint>,
}

impl PlotApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels the plot axes.
    #[must_use]
    pub fn axis_labels(mut self, x_label: &str, y_label: &str) -> Self {
        self.x_label = x_label.to_string();
        self.y_label = y_label.to_string();
        self
    }

    /// Adds a named series of `[x, y]` points.
    #[must_use]
    pub fn add_series(mut self, name: &str, points: &[[f64; 2]]) -> Self {
        self.series.push(Series {
            name: name.to_string(),
            points: points.iter().copied().map(Into::into).collect(),
        });

        self
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn run(self, name: &str) -> Result<(), eframe::Error> {
        eframe::run_native(
            name,
            eframe::NativeOptions::default(),
            Box::new(|_cc| Ok(Box::new(self))),
        )
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("plot-id")
                .legend(Legend::default())
                .x_axis_label(self.x_label.clone())
                .y_axis_label(self.y_label.clone())
                .show(ui, |plot_ui| {
                    for series in &self.series {
                        let points = series.points.as_slice();
                        let name = &series.name;

                        plot_ui.line(Line::new(points).name(name));
                    }
                });
        });
    }
}
