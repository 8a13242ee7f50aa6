use std::io::Cursor;
use std::io::Write;

use satrelay_lib::{
    load_constellation, parse_constellation, Error, EARTH_RADIUS_KM, ENDPOINT_ALTITUDE_KM, GOAL,
    START,
};

const DATASET: &str = "\
#SEED=0.27103688126584244
SAT0,33.33,-26.15,351.97
SAT1,-52.46,110.76,394.66
SAT2,-22.05,-35.09,529.27
ROUTE,65.93,-68.98,-44.26,-34.44
";

#[test]
fn parses_satellites_and_injects_terminals() {
    let constellation = parse_constellation(Cursor::new(DATASET)).expect("parses");

    assert_eq!(constellation.len(), 5);
    for id in ["SAT0", "SAT1", "SAT2", START, GOAL] {
        assert!(constellation.contains(id), "missing {id}");
    }
}

#[test]
fn terminals_sit_a_metre_above_the_surface() {
    let constellation = parse_constellation(Cursor::new(DATASET)).expect("parses");

    for id in [START, GOAL] {
        let radius = constellation.position(id).expect("terminal").length();
        assert!((radius - (EARTH_RADIUS_KM + ENDPOINT_ALTITUDE_KM)).abs() < 1e-9);
    }
}

#[test]
fn satellite_altitude_is_added_to_the_radius() {
    let constellation = parse_constellation(Cursor::new(DATASET)).expect("parses");

    let radius = constellation.position("SAT0").expect("satellite").length();
    assert!((radius - (EARTH_RADIUS_KM + 351.97)).abs() < 1e-9);
}

#[test]
fn first_line_is_skipped_as_the_seed_header() {
    // the header would otherwise parse as a malformed record
    let data = "anything goes here\nSAT0,0.0,0.0,500.0\nROUTE,0.0,0.0,10.0,10.0\n";
    let constellation = parse_constellation(Cursor::new(data)).expect("parses");
    assert_eq!(constellation.len(), 3);
}

#[test]
fn blank_lines_are_ignored() {
    let data = "#SEED=1\n\nSAT0,0.0,0.0,500.0\n\nROUTE,0.0,0.0,10.0,10.0\n\n";
    let constellation = parse_constellation(Cursor::new(data)).expect("parses");
    assert_eq!(constellation.len(), 3);
}

#[test]
fn wrong_field_count_is_an_invalid_record() {
    let data = "#SEED=1\nSAT0,0.0,0.0\nROUTE,0.0,0.0,10.0,10.0\n";
    let err = parse_constellation(Cursor::new(data)).unwrap_err();
    match err {
        Error::InvalidRecord { line, .. } => assert_eq!(line, 2),
        other => panic!("expected InvalidRecord, got {other}"),
    }
}

#[test]
fn non_numeric_coordinate_is_an_invalid_record() {
    let data = "#SEED=1\nSAT0,north,0.0,500.0\nROUTE,0.0,0.0,10.0,10.0\n";
    let err = parse_constellation(Cursor::new(data)).unwrap_err();
    assert!(matches!(err, Error::InvalidRecord { line: 2, .. }));
}

#[test]
fn duplicate_satellite_id_is_rejected() {
    let data = "#SEED=1\nSAT0,0.0,0.0,500.0\nSAT0,1.0,1.0,500.0\nROUTE,0.0,0.0,10.0,10.0\n";
    let err = parse_constellation(Cursor::new(data)).unwrap_err();
    match err {
        Error::DuplicateSatellite { id, line } => {
            assert_eq!(id, "SAT0");
            assert_eq!(line, 3);
        }
        other => panic!("expected DuplicateSatellite, got {other}"),
    }
}

#[test]
fn reserved_identifiers_are_rejected_for_satellites() {
    let data = "#SEED=1\nSTART,0.0,0.0,500.0\nROUTE,0.0,0.0,10.0,10.0\n";
    let err = parse_constellation(Cursor::new(data)).unwrap_err();
    assert!(matches!(err, Error::ReservedIdentifier { line: 2, .. }));
}

#[test]
fn missing_route_record_is_rejected() {
    let data = "#SEED=1\nSAT0,0.0,0.0,500.0\n";
    let err = parse_constellation(Cursor::new(data)).unwrap_err();
    assert!(matches!(err, Error::MissingRoute));
}

#[test]
fn second_route_record_is_rejected() {
    let data = "#SEED=1\nROUTE,0.0,0.0,10.0,10.0\nROUTE,5.0,5.0,15.0,15.0\n";
    let err = parse_constellation(Cursor::new(data)).unwrap_err();
    assert!(matches!(err, Error::DuplicateRoute { line: 3 }));
}

#[test]
fn load_reads_a_dataset_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(DATASET.as_bytes()).expect("write dataset");

    let constellation = load_constellation(file.path()).expect("loads");
    assert_eq!(constellation.len(), 5);
}

#[test]
fn load_surfaces_io_errors() {
    let missing = std::path::Path::new("/definitely/not/here.txt");
    let err = load_constellation(missing).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
