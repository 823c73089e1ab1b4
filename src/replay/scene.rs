// Scene renderer: a pure function from session data and frame index to the
// backend-agnostic drawing commands for one frame

use crate::replay::geometry::{ScreenPoint, SurfaceConfig, ViewTransform};
use crate::session::RaceSession;

/// RGB color carried by draw commands, independent of any drawing backend
/// so the raster and vector consumers share one scene representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Marker colors, assigned per driver by ordinal position among the
/// session's unique ids, modulo the palette size. Assignment is stable for
/// the lifetime of a session: it depends only on id ordering, never on
/// per-frame content.
pub const DRIVER_PALETTE: [Rgb; 10] = [
    Rgb::new(255, 0, 0),     // red
    Rgb::new(0, 0, 255),     // blue
    Rgb::new(0, 128, 0),     // green
    Rgb::new(255, 255, 0),   // yellow
    Rgb::new(255, 165, 0),   // orange
    Rgb::new(128, 0, 128),   // purple
    Rgb::new(255, 192, 203), // pink
    Rgb::new(165, 42, 42),   // brown
    Rgb::new(0, 255, 255),   // cyan
    Rgb::new(255, 0, 255),   // magenta
];

/// Track outline and label ink
const INK: Rgb = Rgb::new(0, 0, 0);

/// Driver marker radius in surface units
pub const MARKER_RADIUS: f32 = 5.;
/// Label offset from the marker center
pub const LABEL_OFFSET: (f32, f32) = (10., -10.);
/// Label text size in surface units
pub const LABEL_SIZE: f32 = 12.;

/// One backend-agnostic drawing command
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Stroke an open polyline through surface-space points, in order
    Polyline {
        points: Vec<ScreenPoint>,
        width: f32,
        color: Rgb,
    },
    /// Fill a circular marker
    Marker {
        center: ScreenPoint,
        radius: f32,
        color: Rgb,
    },
    /// Draw a short text label anchored at its bottom-left corner
    Label {
        text: String,
        anchor: ScreenPoint,
        size: f32,
        color: Rgb,
    },
}

/// Stateless renderer producing the complete command list for one frame.
/// Rendering is a pure function of its inputs, so it is unit-testable
/// without a UI harness.
pub struct SceneRenderer {
    config: SurfaceConfig,
}

impl SceneRenderer {
    pub fn new(config: SurfaceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Render the frame at `frame_index`: the track outline first, then one
    /// marker and label per driver whose timeline reaches the frame.
    /// Drivers with exhausted timelines are skipped for this frame only.
    ///
    /// The caller supplies a transform it obtained from `ViewTransform::fit`,
    /// so degenerate geometry never reaches this point; it renders nothing
    /// because there is no transform to render with.
    pub fn render_frame(
        &self,
        session: &RaceSession,
        frame_index: usize,
        transform: &ViewTransform,
    ) -> Vec<DrawCommand> {
        let mut commands = Vec::new();

        if !session.track.is_empty() {
            commands.push(DrawCommand::Polyline {
                points: session
                    .track
                    .iter()
                    .map(|point| transform.map_point(*point))
                    .collect(),
                width: self.config.stroke_width,
                color: INK,
            });
        }

        for (ordinal, (driver, timeline)) in session.positions.iter().enumerate() {
            // timeline shorter than the current frame: skip this driver,
            // everyone else still renders
            let Some(point) = timeline.get(frame_index) else {
                continue;
            };

            let center = transform.map_point(*point);
            commands.push(DrawCommand::Marker {
                center,
                radius: MARKER_RADIUS,
                color: DRIVER_PALETTE[ordinal % DRIVER_PALETTE.len()],
            });
            commands.push(DrawCommand::Label {
                text: session.label_for(driver).to_string(),
                anchor: ScreenPoint::new(center.x + LABEL_OFFSET.0, center.y + LABEL_OFFSET.1),
                size: LABEL_SIZE,
                color: INK,
            });
        }

        commands
    }
}

impl Default for SceneRenderer {
    fn default() -> Self {
        Self::new(SurfaceConfig::default())
    }
}
