// Raster backend: paints DrawCommands with the egui painter

use egui::{Align2, Color32, FontId, Painter, Pos2, Shape, Stroke, Vec2};

use super::DrawTarget;
use crate::replay::geometry::ScreenPoint;
use crate::replay::scene::Rgb;

/// Immediate-mode backend painting into an allocated egui region. Commands
/// arrive in surface coordinates; `origin` shifts them to the region's
/// top-left corner.
pub struct CanvasBackend<'p> {
    painter: &'p Painter,
    origin: Pos2,
}

impl<'p> CanvasBackend<'p> {
    pub fn new(painter: &'p Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }

    fn surface_pos(&self, point: ScreenPoint) -> Pos2 {
        self.origin + Vec2::new(point.x, point.y)
    }
}

fn ink(color: Rgb) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

impl DrawTarget for CanvasBackend<'_> {
    fn polyline(&mut self, points: &[ScreenPoint], width: f32, color: Rgb) {
        let points: Vec<Pos2> = points.iter().map(|point| self.surface_pos(*point)).collect();
        self.painter
            .add(Shape::line(points, Stroke::new(width, ink(color))));
    }

    fn marker(&mut self, center: ScreenPoint, radius: f32, color: Rgb) {
        self.painter
            .circle_filled(self.surface_pos(center), radius, ink(color));
    }

    fn label(&mut self, text: &str, anchor: ScreenPoint, size: f32, color: Rgb) {
        self.painter.text(
            self.surface_pos(anchor),
            Align2::LEFT_BOTTOM,
            text,
            FontId::proportional(size),
            ink(color),
        );
    }
}
