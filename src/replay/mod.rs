// Replay engine module
// Converts raw session geometry into surface-space drawing commands and
// drives the looping frame clock that animates driver positions

pub mod clock;
pub mod geometry;
pub mod playback;
pub mod scene;

// Re-export commonly used types
pub use clock::{FrameClock, ManualScheduler, TickHandle, TickScheduler};
pub use geometry::{BoundingBox, Projection, ScreenPoint, SurfaceConfig, ViewTransform};
pub use playback::PlaybackController;
pub use scene::{DrawCommand, Rgb, SceneRenderer, DRIVER_PALETTE};
