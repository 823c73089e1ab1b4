// Core data structures for recorded race sessions

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Stable identifier for one driver/car within a session. The data source
/// uses the car number as the key, so this stays a plain string.
pub type DriverId = String;

/// One vertex in the data source's arbitrary coordinate space, used both for
/// track centerline geometry and for per-frame driver positions.
///
/// Field names on the wire are the upper-case `X`/`Y` the timing service
/// emits; extra per-sample fields (session time and the like) are ignored.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TrackPoint {
    #[serde(rename = "X")]
    pub x: f32,
    #[serde(rename = "Y")]
    pub y: f32,
}

impl TrackPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Identifies one recorded race session by championship year and event name
/// (e.g. 2024, "Monaco Grand Prix").
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Selection {
    pub year: u16,
    pub event_name: String,
}

impl Selection {
    pub fn new(year: u16, event_name: impl Into<String>) -> Self {
        Self {
            year,
            event_name: event_name.into(),
        }
    }
}

/// Read-only snapshot of everything the replay engine needs for one session:
/// the track centerline and each driver's position timeline, indexed by
/// frame. Populated once per selection and never mutated by the engine.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RaceSession {
    /// Ordered track centerline, first-to-last; not closed automatically
    #[serde(default)]
    pub track: Vec<TrackPoint>,
    /// Per-driver position timelines, one entry per frame index. A BTreeMap
    /// keeps iteration order deterministic, which palette assignment relies
    /// on, and collapses duplicate driver ids last-write-wins.
    #[serde(default)]
    pub positions: BTreeMap<DriverId, Vec<TrackPoint>>,
    /// Driver abbreviations for labeling; missing entries fall back to the
    /// raw driver id
    #[serde(default, rename = "drivers")]
    pub labels: HashMap<DriverId, String>,
}

impl RaceSession {
    /// Playback length in frames: the maximum observed timeline length
    /// across all drivers, 0 when no timelines are loaded. Shorter timelines
    /// stop contributing once exhausted.
    pub fn max_frames(&self) -> usize {
        self.positions
            .values()
            .map(Vec::len)
            .max()
            .unwrap_or_default()
    }

    /// Display label for a driver, falling back to the raw id
    pub fn label_for<'s>(&'s self, driver: &'s DriverId) -> &'s str {
        self.labels.get(driver).map_or(driver.as_str(), String::as_str)
    }

    /// True once at least one driver has at least one position sample
    pub fn has_timelines(&self) -> bool {
        self.positions.values().any(|timeline| !timeline.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_frames_is_longest_timeline() {
        let mut session = RaceSession::default();
        session
            .positions
            .insert("1".to_string(), vec![TrackPoint::new(0., 0.); 120]);
        session
            .positions
            .insert("44".to_string(), vec![TrackPoint::new(1., 1.); 80]);

        assert_eq!(session.max_frames(), 120);
    }

    #[test]
    fn test_max_frames_empty_session() {
        let session = RaceSession::default();
        assert_eq!(session.max_frames(), 0);
        assert!(!session.has_timelines());
    }

    #[test]
    fn test_label_fallback() {
        let mut session = RaceSession::default();
        session
            .labels
            .insert("1".to_string(), "VER".to_string());

        assert_eq!(session.label_for(&"1".to_string()), "VER");
        assert_eq!(session.label_for(&"44".to_string()), "44");
    }

    #[test]
    fn test_wire_format_field_names() {
        let session: RaceSession = serde_json::from_str(
            r#"{
                "track": [{"X": 0.0, "Y": 0.0}, {"X": 10.0, "Y": 5.0}],
                "positions": {"1": [{"X": 1.0, "Y": 2.0}]},
                "drivers": {"1": "VER"}
            }"#,
        )
        .unwrap();

        assert_eq!(session.track.len(), 2);
        assert_eq!(session.track[1], TrackPoint::new(10., 5.));
        assert_eq!(session.positions["1"][0], TrackPoint::new(1., 2.));
        assert_eq!(session.labels["1"], "VER");
    }

    #[test]
    fn test_duplicate_driver_keys_collapse_last_write_wins() {
        let session: RaceSession = serde_json::from_str(
            r#"{
                "positions": {
                    "1": [{"X": 0.0, "Y": 0.0}],
                    "1": [{"X": 9.0, "Y": 9.0}, {"X": 8.0, "Y": 8.0}]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(session.positions.len(), 1);
        assert_eq!(session.positions["1"].len(), 2);
        assert_eq!(session.positions["1"][0], TrackPoint::new(9., 9.));
    }

    #[test]
    fn test_extra_wire_fields_ignored() {
        // the timing service includes a SessionTime per sample; only X/Y
        // matter for playback
        let session: RaceSession = serde_json::from_str(
            r#"{"positions": {"16": [{"X": 3.0, "Y": 4.0, "SessionTime": "0 days 01:02:03"}]}}"#,
        )
        .unwrap();

        assert_eq!(session.positions["16"][0], TrackPoint::new(3., 4.));
    }
}
