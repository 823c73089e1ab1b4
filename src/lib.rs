// Library interface for slipstream
// This allows integration tests to access internal modules

pub mod errors;
pub mod render;
pub mod replay;
pub mod session;
pub mod ui;

// Re-export commonly used types
pub use errors::ReplayError;
pub use replay::{
    DrawCommand, FrameClock, ManualScheduler, PlaybackController, Projection, SceneRenderer,
    SurfaceConfig, TickScheduler, ViewTransform,
};
pub use session::{FileRaceSource, RaceDataSource, RaceSession, Selection, TrackPoint};
