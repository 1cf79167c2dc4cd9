//! # Interactive Dipole
//!
//! Drives the dipole model with sliders for the field frequency and the
//! damping coefficient. Every slider change triggers exactly one fresh
//! solve whose trajectory replaces the previous one; if a solve fails, the
//! previous trajectory stays on screen and the error is shown instead.
//!
//! To run this example:
//!
//! ```sh
//! cargo run --example interactive --release
//! ```

use dipole_components::dipole::{Dipole, Input};
use dipole_core::ode::State;
use dipole_solve::ode::{self, Config};
use eframe::egui;
use egui_plot::{Legend, Line, Plot, Points};
use uom::si::{angle::radian, f64::Angle};

/// Length of the simulated window, in seconds.
const SIM_TIME: f64 = 20.0;

/// Number of evaluation grid points, and therefore animation frames.
const SAMPLES: usize = 1000;

/// Seconds of wall time per animation frame.
const FRAME_INTERVAL: f64 = 0.02;

struct DipoleApp {
    field_frequency: f64,
    damping: f64,
    trajectory: Vec<State<2>>,
    error: Option<String>,
}

impl DipoleApp {
    fn new() -> Self {
        let mut app = Self {
            field_frequency: 1.0,
            damping: 0.1,
            trajectory: Vec::new(),
            error: None,
        };
        app.resolve();
        app
    }

    /// Model input for the current slider values.
    fn input(&self) -> Input {
        Input::default()
            .field_frequency_si(self.field_frequency)
            .damping_si(self.damping)
    }

    /// Runs one solve and replaces the trajectory wholesale, keeping the
    /// previous one if the solve fails.
    fn resolve(&mut self) {
        let grid: Vec<f64> = (0..SAMPLES)
            .map(|i| SIM_TIME * (i as f64) / ((SAMPLES - 1) as f64))
            .collect();

        match ode::solve_unobserved(
            &Dipole,
            &self.input(),
            [0.0, SIM_TIME],
            &grid,
            &Config::default(),
        ) {
            Ok(solution) => {
                self.trajectory = solution.trajectory;
                self.error = None;
            }
            Err(error) => self.error = Some(error.to_string()),
        }
    }

    fn angle_plot(&self, ui: &mut egui::Ui) {
        let points: Vec<[f64; 2]> = self
            .trajectory
            .iter()
            .map(|sample| [sample.t, sample.y[0]])
            .collect();

        Plot::new("angle")
            .legend(Legend::default())
            .x_axis_label("time (s)")
            .y_axis_label("angle (rad)")
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(points).name("θ"));
            });
    }

    fn animation_plot(&self, ui: &mut egui::Ui, ctx: &egui::Context) {
        if self.trajectory.is_empty() {
            return;
        }

        let frame =
            ((ctx.input(|input| input.time) / FRAME_INTERVAL) as usize) % self.trajectory.len();
        let angle = Angle::new::<radian>(self.trajectory[frame].y[0]);

        let [positive, negative] = self.input().parameters.charge_positions(angle);
        let positive = [positive[0].value, positive[1].value];
        let negative = [negative[0].value, negative[1].value];

        Plot::new("dipole")
            .data_aspect(1.0)
            .include_x(-0.2)
            .include_x(0.2)
            .include_y(-0.2)
            .include_y(0.2)
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(vec![positive, negative]));
                plot_ui.points(Points::new(vec![positive]).radius(5.0).name("+"));
                plot_ui.points(Points::new(vec![negative]).radius(5.0).name("−"));
            });
    }
}

impl eframe::App for DipoleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            let field_frequency = ui.add(
                egui::Slider::new(&mut self.field_frequency, 0.1..=10.0)
                    .step_by(0.1)
                    .text("field frequency (rad/s)"),
            );
            let damping = ui.add(
                egui::Slider::new(&mut self.damping, 0.1..=10.0)
                    .step_by(0.1)
                    .text("damping (kg·m²/s)"),
            );
            if field_frequency.changed() || damping.changed() {
                self.resolve();
            }
            if let Some(error) = &self.error {
                ui.colored_label(egui::Color32::RED, error);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns| {
                self.angle_plot(&mut columns[0]);
                self.animation_plot(&mut columns[1], ctx);
            });
        });

        ctx.request_repaint();
    }
}

fn main() {
    eframe::run_native(
        "Interactive Dipole",
        eframe::NativeOptions::default(),
        Box::new(|_cc| Ok(Box::new(DipoleApp::new()))),
    )
    .unwrap();
}
