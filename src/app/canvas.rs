//! Helper struct for drawing field profiles in world space onto the screen.
//! The horizontal axis is z in grid samples, the vertical axis is field magnitude.

use egui::{Color32, Pos2, Rangef, Rect, Stroke, Ui};
use ndarray::ArrayView1;

const AXIS_STROKE: f32 = 2.0;
const CURVE_STROKE: f32 = 2.0;
const GRID_COLOUR: Color32 = Color32::from_rgb(25, 25, 25);
const AXIS_COLOUR: Color32 = Color32::from_rgb(60, 60, 60);

pub struct Canvas<'a> {
    ui: &'a Ui,
    screen_extent: Rect,
    range: Rect,
    x_scale: f32,
    y_scale: f32,
}

impl<'a> Canvas<'a> {
    /// `half_height` is the largest magnitude that still fits above (and below) the axis.
    pub fn new(ui: &'a Ui, screen_extent: Rect, visible_z: Rangef, half_height: f32) -> Self {
        let half_height = half_height.max(f32::EPSILON);
        let range = Rect::from_x_y_ranges(visible_z, Rangef::new(-half_height, half_height));

        Canvas {
            ui,
            screen_extent,
            range,
            x_scale: screen_extent.width() / range.width(),
            y_scale: screen_extent.height() / range.height(),
        }
    }

    fn world_to_screen_x(&self, x: f32) -> f32 {
        self.screen_extent.min.x + self.x_scale * (x - self.range.min.x)
    }

    // screen y grows downwards
    fn world_to_screen_y(&self, y: f32) -> f32 {
        self.screen_extent.max.y - self.y_scale * (y - self.range.min.y)
    }

    pub fn draw_grid_lines(&self) {
        const MAX_GRIDLINES: f32 = 20.0;
        let x_step = (self.range.x_range().span() / MAX_GRIDLINES).round().max(1.0);
        let y_step = self.range.y_range().span() / 8.0;

        let mut y = y_step * (self.range.min.y / y_step).round();
        while y < self.range.max.y {
            self.ui.painter().hline(
                self.screen_extent.x_range(),
                self.world_to_screen_y(y),
                Stroke::new(1.0, GRID_COLOUR),
            );
            y += y_step;
        }
        let mut x = x_step * (self.range.min.x / x_step).round();
        while x < self.range.max.x {
            self.ui.painter().vline(
                self.world_to_screen_x(x),
                self.screen_extent.y_range(),
                Stroke::new(1.0, GRID_COLOUR),
            );
            x += x_step;
        }
    }

    pub fn draw_axes(&self) {
        self.ui.painter().vline(
            self.world_to_screen_x(0.0),
            self.screen_extent.y_range(),
            Stroke::new(AXIS_STROKE, AXIS_COLOUR),
        );
        self.ui.painter().hline(
            self.screen_extent.x_range(),
            self.world_to_screen_y(0.0),
            Stroke::new(AXIS_STROKE, AXIS_COLOUR),
        );
    }

    /// Draws `values[i]` at `z = i` as a connected line.
    pub fn draw_profile(&self, values: ArrayView1<f64>, colour: Color32) {
        if values.len() < 2 {
            log::error!("Profile passed to draw_profile has fewer than two samples");
            return;
        }
        let screen_points: Vec<Pos2> = values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                Pos2::new(
                    self.world_to_screen_x(i as f32),
                    self.world_to_screen_y(value as f32),
                )
            })
            .collect();
        self.ui
            .painter()
            .line(screen_points, Stroke::new(CURVE_STROKE, colour));
    }

    pub fn draw_label(&self, text: &str, colour: Color32) {
        self.ui.painter().text(
            self.screen_extent.left_top() + egui::vec2(10.0, 10.0),
            egui::Align2::LEFT_TOP,
            text,
            egui::FontId::monospace(14.0),
            colour,
        );
    }
}
