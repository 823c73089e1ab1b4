// Drawing backends module
// The scene renderer emits backend-agnostic DrawCommands; the consumers here
// interpret them for an immediate-mode raster surface (egui painter) or a
// retained-mode vector document (SVG)

pub mod canvas;
pub mod svg;

// Re-export commonly used types
pub use canvas::CanvasBackend;
pub use svg::{export_svg, render_frame_svg, SvgBackend};

use crate::replay::geometry::ScreenPoint;
use crate::replay::scene::{DrawCommand, Rgb};

/// One drawing surface the scene can be replayed into. Raster and vector
/// targets implement the same three primitives.
pub trait DrawTarget {
    fn polyline(&mut self, points: &[ScreenPoint], width: f32, color: Rgb);
    fn marker(&mut self, center: ScreenPoint, radius: f32, color: Rgb);
    fn label(&mut self, text: &str, anchor: ScreenPoint, size: f32, color: Rgb);
}

/// Replay a frame's command list into a target, in order
pub fn submit(target: &mut dyn DrawTarget, commands: &[DrawCommand]) {
    for command in commands {
        match command {
            DrawCommand::Polyline {
                points,
                width,
                color,
            } => target.polyline(points, *width, *color),
            DrawCommand::Marker {
                center,
                radius,
                color,
            } => target.marker(*center, *radius, *color),
            DrawCommand::Label {
                text,
                anchor,
                size,
                color,
            } => target.label(text, *anchor, *size, *color),
        }
    }
}
