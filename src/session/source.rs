// File-backed implementation of the race data supply

use std::fs;
use std::path::PathBuf;

use itertools::Itertools;
use log::info;

use super::types::{RaceSession, Selection};
use crate::errors::ReplayError;

/// Trait defining the interface to the external data supply. The replay
/// engine only ever sees fully decoded, possibly empty, structures; any
/// transport or decoding concern stays behind this seam.
pub trait RaceDataSource {
    /// Load the decoded session snapshot for a selection
    fn load(&self, selection: &Selection) -> Result<RaceSession, ReplayError>;

    /// List the event names available for a year, sorted alphabetically
    fn available_events(&self, year: u16) -> Result<Vec<String>, ReplayError>;
}

/// Data source reading one JSON document per session from a local data
/// directory, laid out as `<root>/<year>/<normalized event name>.json`
pub struct FileRaceSource {
    root: PathBuf,
}

impl FileRaceSource {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a source rooted in the default application data directory
    pub fn new_default() -> Result<Self, ReplayError> {
        Ok(Self::new(Self::default_data_path()?))
    }

    /// Get the default session data path
    pub fn default_data_path() -> Result<PathBuf, ReplayError> {
        let app_data_dir = dirs::data_dir().ok_or(ReplayError::NoDataDir)?;
        Ok(app_data_dir.join("slipstream").join("sessions"))
    }

    /// Generate the file path for a given selection
    fn file_path_for_selection(&self, selection: &Selection) -> PathBuf {
        let filename = format!(
            "{}.json",
            Self::normalize_event_name(&selection.event_name)
        );
        self.root.join(selection.year.to_string()).join(filename)
    }

    /// Normalize an event name for consistent file naming
    fn normalize_event_name(event_name: &str) -> String {
        event_name
            .to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect()
    }
}

impl RaceDataSource for FileRaceSource {
    fn load(&self, selection: &Selection) -> Result<RaceSession, ReplayError> {
        let path = self.file_path_for_selection(selection);

        if !path.exists() {
            return Err(ReplayError::SessionNotFound { path });
        }

        let content =
            fs::read_to_string(&path).map_err(|e| ReplayError::SessionIoError { source: e })?;
        let session: RaceSession = serde_json::from_str(&content)
            .map_err(|e| ReplayError::SessionParseError { source: e })?;

        info!(
            "Loaded {:?}: {} track points, {} drivers, {} frames",
            path,
            session.track.len(),
            session.positions.len(),
            session.max_frames()
        );
        Ok(session)
    }

    fn available_events(&self, year: u16) -> Result<Vec<String>, ReplayError> {
        let year_dir = self.root.join(year.to_string());

        if !year_dir.exists() {
            return Ok(Vec::new());
        }

        let entries =
            fs::read_dir(&year_dir).map_err(|e| ReplayError::SessionIoError { source: e })?;

        Ok(entries
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                    return None;
                }
                Some(path.file_stem()?.to_string_lossy().into_owned())
            })
            .sorted()
            .collect())
    }
}
