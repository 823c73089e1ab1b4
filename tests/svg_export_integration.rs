// Integration test for the headless SVG export path

use std::fs;

use slipstream::render::{export_svg, render_frame_svg};
use slipstream::{FileRaceSource, RaceDataSource, Selection, SurfaceConfig};
use tempfile::TempDir;

fn write_fixture(temp_dir: &TempDir) -> FileRaceSource {
    let year_dir = temp_dir.path().join("2023");
    fs::create_dir_all(&year_dir).unwrap();
    fs::write(
        year_dir.join("british_grand_prix.json"),
        r#"{
            "track": [
                {"X": -50.0, "Y": -20.0},
                {"X": 50.0, "Y": -20.0},
                {"X": 50.0, "Y": 20.0}
            ],
            "positions": {
                "44": [{"X": 0.0, "Y": -20.0}, {"X": 10.0, "Y": -20.0}],
                "63": [{"X": -50.0, "Y": -20.0}]
            },
            "drivers": {"44": "HAM"}
        }"#,
    )
    .unwrap();
    FileRaceSource::new(temp_dir.path().to_path_buf())
}

#[test]
fn test_export_frame_to_svg_file() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_fixture(&temp_dir);
    let session = source
        .load(&Selection::new(2023, "British Grand Prix"))
        .unwrap();

    let document = render_frame_svg(&session, 0, &SurfaceConfig::default()).unwrap();
    let output = temp_dir.path().join("frame.svg");
    export_svg(&output, &document).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, document);

    // the 100x40 data extent plus 100 padding on every side
    assert!(written.contains("viewBox=\"0 0 300.00 240.00\""));
    assert!(written.contains("<path class=\"track-line\""));
    // both drivers render at frame 0; the unlabeled one falls back to its id
    assert_eq!(written.matches("<circle").count(), 2);
    assert!(written.contains(">HAM</text>"));
    assert!(written.contains(">63</text>"));
}

#[test]
fn test_export_second_frame_drops_exhausted_driver() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_fixture(&temp_dir);
    let session = source
        .load(&Selection::new(2023, "British Grand Prix"))
        .unwrap();

    // driver "63" only has one sample, so frame 1 renders "44" alone
    let document = render_frame_svg(&session, 1, &SurfaceConfig::default()).unwrap();
    assert_eq!(document.matches("<circle").count(), 1);
    assert!(document.contains(">HAM</text>"));
    assert!(!document.contains(">63</text>"));
}
