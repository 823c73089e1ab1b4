// Race session management module
// Provides the decoded session data model (track geometry, driver position
// timelines, driver abbreviations) and the file-backed data source

pub mod source;
pub mod types;

// Re-export commonly used types
pub use source::{FileRaceSource, RaceDataSource};
pub use types::{DriverId, RaceSession, Selection, TrackPoint};
