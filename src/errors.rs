// Error types for slipstream

use snafu::Snafu;
use std::{io, path::PathBuf};

#[derive(Debug, Snafu)]
pub enum ReplayError {
    // Errors for the replay engine. None of these are fatal: a degenerate
    // track renders nothing, empty timelines leave the clock idle.
    #[snafu(display("Track geometry has no drawable extent"))]
    DegenerateGeometry,
    #[snafu(display("No driver timelines available, playback not started"))]
    EmptyTimelines,
    #[snafu(display("Cannot start frame clock with {max_frames} frames"))]
    InvalidClock { max_frames: usize },

    // Errors for the session data source
    #[snafu(display("No session data found at {}", path.display()))]
    SessionNotFound { path: PathBuf },
    #[snafu(display("Error reading session file"))]
    SessionIoError { source: io::Error },
    #[snafu(display("Error parsing session file"))]
    SessionParseError { source: serde_json::Error },
    #[snafu(display("Could not find application data directory for session files"))]
    NoDataDir,

    // Config management errors
    #[snafu(display("Could not find application data directory to save config file"))]
    NoConfigDir,
    #[snafu(display("Error writing config file"))]
    ConfigIoError { source: io::Error },
    #[snafu(display("Error serializing config file"))]
    ConfigSerializeError { source: serde_json::Error },

    // Export errors
    #[snafu(display("Error writing SVG export"))]
    SvgExportError { source: io::Error },
}
