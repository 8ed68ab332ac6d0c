//! Contains all application code, including application state and drawing logic

mod canvas;

use canvas::Canvas;
use maxwell1d::simulation::variables::{EPSIL, FACT, MU, Variable};
use maxwell1d::simulation::{Coupling, LeapfrogOrder, Simulation, SimulationConfig};

use egui::{Color32, Pos2, Rangef, Rect, Response, Sense, Style, Ui};
use std::time::Instant;
use strum::IntoEnumIterator;

const MONITOR_REFRESH_RATE: u32 = 60;
const ELECTRIC_COLOUR: Color32 = Color32::from_rgb(255, 165, 0);
const MAGNETIC_COLOUR: Color32 = Color32::from_rgb(20, 100, 255);
const WARNING_COLOUR: Color32 = Color32::from_rgb(255, 80, 80);
// headroom above the largest field magnitude in the run
const VERTICAL_MARGIN: f32 = 1.2;

fn zoom_to(range: &Rangef, zoom: f32, centre: f32) -> Rangef {
    Rangef {
        min: centre - range.span() / (2.0 * zoom),
        max: centre + range.span() / (2.0 * zoom),
    }
}

/// Slider over a `Variable`'s range with a reset button.
fn variable_slider(ui: &mut Ui, label: &str, hover: &str, value: &mut f64, variable: &Variable) {
    ui.label(label).on_hover_text(hover);
    ui.add(egui::Slider::new(value, variable.min..=variable.max).logarithmic(true));
    if ui.button("↺").on_hover_text("Reset").clicked() {
        *value = variable.default;
    }
}

pub struct MaxwellApp {
    simulation: Simulation,
    draft: SimulationConfig,
    error: Option<String>,
    paused: bool,
    frame: u32,
    frame_skip: usize,
    zoom: f32,
    world_centre: f32,
    zoom_centre: Option<f32>,
    dragging: Option<f32>,
    last_n_frames_start: Instant,
    last_n_frames_time_micros: f32,
}

impl MaxwellApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, simulation: Simulation, frame_skip: usize) -> Self {
        let draft = simulation.config().clone();
        let world_centre = Self::world(&simulation).center();
        Self {
            simulation,
            draft,
            error: None,
            paused: true,

            frame: 0,
            frame_skip,
            last_n_frames_start: Instant::now(),
            last_n_frames_time_micros: 1e6,

            world_centre,
            zoom: 1.0,
            zoom_centre: None,
            dragging: None,
        }
    }

    /// The whole periodic domain, `0..=zmax` in grid samples.
    fn world(simulation: &Simulation) -> Rangef {
        Rangef::new(0.0, simulation.history().zmax() as f32)
    }

    fn reset_view(&mut self) {
        self.zoom = 1.0;
        self.world_centre = Self::world(&self.simulation).center();
        self.zoom_centre = None;
        self.dragging = None;
    }

    fn apply_draft(&mut self) {
        if self.draft == *self.simulation.config() {
            return;
        }
        match self.simulation.recompute(self.draft.clone()) {
            Ok(()) => self.error = None,
            Err(e) => {
                log::error!("{}", e);
                self.error = Some(e.to_string());
                self.draft = self.simulation.config().clone();
            }
        }
    }

    fn mode_legend(&self) -> String {
        let modes = &self.simulation.config().modes;
        if modes.is_empty() {
            return "Modes: none".to_string();
        }
        let listed: Vec<String> = modes.iter().map(|mode| format!("({})", mode)).collect();
        format!("Modes: {}", listed.join(" "))
    }
}

impl eframe::App for MaxwellApp {
    /// Called each time the UI needs repainting
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.frame % MONITOR_REFRESH_RATE == MONITOR_REFRESH_RATE - 1 {
            self.last_n_frames_time_micros = self.last_n_frames_start.elapsed().as_micros() as f32;
            self.last_n_frames_start = Instant::now();
        }

        if !self.paused && self.simulation.update(self.frame_skip) {
            // reached tmax, rewind
            self.paused = true;
            self.simulation.reset();
        }
        self.frame = self.frame.wrapping_add(1);

        // draws the physical settings at the top of the window
        let settings = egui::TopBottomPanel::top("settings");
        let settings_drawn: Response = settings
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let constants = &mut self.draft.constants;
                    variable_slider(ui, "μ", "Permeability", &mut constants.mu, &MU);
                    ui.separator();
                    variable_slider(ui, "ε", "Permittivity", &mut constants.epsil, &EPSIL);
                    ui.separator();
                    variable_slider(ui, "fact", "Stability factor dt / 2dz", &mut constants.fact, &FACT);

                    ui.separator();

                    egui::ComboBox::from_label("Order")
                        .selected_text(self.draft.order.to_string())
                        .show_ui(ui, |ui| {
                            for order in LeapfrogOrder::iter() {
                                ui.selectable_value(&mut self.draft.order, order, order.to_string());
                            }
                        });
                    egui::ComboBox::from_label("B₀")
                        .selected_text(self.draft.coupling.to_string())
                        .show_ui(ui, |ui| {
                            for coupling in Coupling::iter() {
                                ui.selectable_value(&mut self.draft.coupling, coupling, coupling.to_string());
                            }
                        });
                });
                ui.horizontal(|ui| {
                    let constants = self.simulation.config().constants;
                    let courant = format!("Courant {:.3}", constants.courant());
                    if constants.is_stable() {
                        ui.label(courant);
                    } else {
                        ui.colored_label(WARNING_COLOUR, courant)
                            .on_hover_text("fact · c exceeds 1, the scheme is unstable");
                    }
                    ui.separator();
                    ui.label(self.mode_legend());
                    if let Some(error) = &self.error {
                        ui.separator();
                        ui.colored_label(WARNING_COLOUR, error);
                    }
                });
            })
            .response;

        self.apply_draft();

        // draws simulation controls at the bottom of the window
        let controls = egui::TopBottomPanel::bottom("controls");
        let controls_drawn: Response = controls
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(self.paused, egui::Button::new("▶"))
                        .on_hover_text("Play simulation")
                        .clicked()
                    {
                        self.paused = false;
                    }
                    if ui
                        .add_enabled(!self.paused, egui::Button::new("⏸"))
                        .on_hover_text("Pause simulation")
                        .clicked()
                    {
                        self.paused = true;
                    }
                    if ui
                        .add_enabled(self.simulation.step() > 0, egui::Button::new("⟲"))
                        .on_hover_text("Restart simulation")
                        .clicked()
                    {
                        self.paused = true;
                        self.simulation.reset();
                    }
                    if ui
                        .add_enabled(self.paused, egui::Button::new("⏭"))
                        .on_hover_text("Advance simulation by one frame")
                        .clicked()
                    {
                        self.simulation.update(self.frame_skip);
                    }
                    ui.add(egui::DragValue::new(&mut self.frame_skip).range(1..=1000))
                        .on_hover_text("Number of time steps per frame");

                    ui.separator();

                    ui.label("Zoom");
                    ui.add(egui::Slider::new(&mut self.zoom, 1.0..=10.0));
                    if ui.button("↺").on_hover_text("Reset view").clicked() {
                        self.reset_view();
                    }

                    ui.separator();

                    ui.label(format!(
                        "n = {}/{}  t = {:.2}",
                        self.simulation.step(),
                        self.simulation.history().tmax(),
                        self.simulation.time()
                    ));

                    ui.separator();

                    ui.label(format!("{0:.0} FPS", 6e7 / self.last_n_frames_time_micros));
                });
            })
            .response;

        let canvas_extent = Rect::from_two_pos(
            Pos2::new(ctx.screen_rect().left(), settings_drawn.rect.bottom()),
            Pos2::new(ctx.screen_rect().right(), controls_drawn.rect.top()),
        );

        let world = Self::world(&self.simulation);
        let pointer_pos = ctx.pointer_latest_pos().unwrap_or(Pos2::new(0.0, 0.0));
        let mut visible_world = zoom_to(&world, self.zoom, self.world_centre);
        let pointer_world_pos = ((pointer_pos.x - canvas_extent.left()) * visible_world.span()
            / canvas_extent.width())
            + visible_world.min;

        let scroll_delta = ctx.input(|input| input.smooth_scroll_delta.y);
        if scroll_delta == 0.0 {
            self.zoom_centre = None;
        } else if canvas_extent.contains(pointer_pos) {
            let zoom = (self.zoom + scroll_delta / 100.0).max(1.0);
            let future_visible_world = zoom_to(&world, zoom, self.world_centre);
            let zoom_centre = *self.zoom_centre.get_or_insert(pointer_world_pos);

            self.world_centre = zoom_centre
                .min(world.max - future_visible_world.span() / 2.0)
                .max(world.min + future_visible_world.span() / 2.0);
            self.zoom = zoom;
        }

        visible_world = zoom_to(&world, self.zoom, self.world_centre);
        let half_height = VERTICAL_MARGIN * self.simulation.max_abs() as f32;

        // draws the fields in the main panel of the window
        let style = Style::default();
        let _ = egui::CentralPanel::default()
            .frame(egui::Frame::canvas(&style))
            .show(ctx, |ui| {
                let canvas = Canvas::new(ui, canvas_extent, visible_world, half_height);

                if ui
                    .interact(canvas_extent, egui::Id::new("canvas-drag"), Sense::drag())
                    .dragged()
                {
                    let diff = self.dragging.unwrap_or(pointer_pos.x) - pointer_pos.x;
                    self.world_centre += diff * visible_world.span() / canvas_extent.width();
                    self.world_centre = self
                        .world_centre
                        .min(world.max - visible_world.span() / 2.0)
                        .max(world.min + visible_world.span() / 2.0);
                    self.dragging = Some(pointer_pos.x);
                } else {
                    self.dragging = None;
                }

                canvas.draw_grid_lines();
                canvas.draw_axes();

                let frame = self.simulation.frame();
                canvas.draw_profile(frame.ex, ELECTRIC_COLOUR);
                canvas.draw_profile(frame.by, MAGNETIC_COLOUR);
                canvas.draw_label("E and B magnitudes vs z axis", Color32::GRAY);
            })
            .response;

        ctx.request_repaint();
    }
}
