//! Tests for region code translation and override merging

use std::io::Write;

use tempfile::NamedTempFile;
use vmc_renamer::layout::{RegionMap, FALLBACK_REGION};
use vmc_renamer::RenamerError;

#[test]
fn test_default_forward_mapping() {
    let regions = RegionMap::default();

    assert_eq!(regions.region_for_letter('E'), "USA");
    assert_eq!(regions.region_for_letter('J'), "JPN");
    assert_eq!(regions.region_for_letter('P'), "EUR");
    assert_eq!(regions.region_for_letter('K'), "KOR");
    assert_eq!(regions.region_for_letter('D'), "GER");
    assert_eq!(regions.region_for_letter('F'), "FRA");
    assert_eq!(regions.region_for_letter('I'), "ITA");
    assert_eq!(regions.region_for_letter('S'), "ESP");
    assert_eq!(regions.region_for_letter('X'), "OTH");
}

#[test]
fn test_unmapped_letter_falls_back_to_oth() {
    let regions = RegionMap::default();

    assert_eq!(regions.region_for_letter('Q'), FALLBACK_REGION);
    assert_eq!(regions.region_for_letter('7'), FALLBACK_REGION);
}

#[test]
fn test_forward_lookup_is_case_insensitive() {
    let regions = RegionMap::default();

    assert_eq!(regions.region_for_letter('e'), "USA");
    assert_eq!(regions.letter_for_region("jpn"), Some('J'));
}

#[test]
fn test_default_round_trip_except_catch_all() {
    let regions = RegionMap::default();

    for letter in regions.letters() {
        let region = regions.region_for_letter(letter);
        let back = regions
            .letter_for_region(&region)
            .unwrap_or_else(|| panic!("No reverse mapping for {}", region));

        if region == FALLBACK_REGION {
            // Y and Z collapse onto X
            assert_eq!(back, 'X', "Catch-all should map back to X, got {}", back);
        } else {
            assert_eq!(back, letter, "Round trip failed for {} via {}", letter, region);
        }
    }
}

#[test]
fn test_catch_all_letters_are_lossy() {
    let regions = RegionMap::default();

    for letter in ['Y', 'Z'] {
        let region = regions.region_for_letter(letter);
        assert_eq!(region, "OTH");
        assert_ne!(regions.letter_for_region(&region), Some(letter));
    }
}

#[test]
fn test_reverse_lookup_unknown_region() {
    let regions = RegionMap::default();

    assert_eq!(regions.letter_for_region("AUS"), None);
}

#[test]
fn test_overrides_merge_into_defaults() {
    let regions = RegionMap::from_json_str(
        r#"{
            "letter_to_region3": { "u": "aus", "E": "NTS" },
            "region3_to_letter": { "aus": "u" }
        }"#,
    )
    .unwrap();

    // Overrides win and are uppercased
    assert_eq!(regions.region_for_letter('U'), "AUS");
    assert_eq!(regions.region_for_letter('E'), "NTS");
    assert_eq!(regions.letter_for_region("AUS"), Some('U'));

    // Untouched defaults survive
    assert_eq!(regions.region_for_letter('J'), "JPN");
    assert_eq!(regions.letter_for_region("USA"), Some('E'));
}

#[test]
fn test_partial_and_empty_overrides() {
    let only_reverse = RegionMap::from_json_str(r#"{ "region3_to_letter": { "OTH": "Z" } }"#).unwrap();
    assert_eq!(only_reverse.letter_for_region("OTH"), Some('Z'));
    assert_eq!(only_reverse.region_for_letter('E'), "USA");

    let empty = RegionMap::from_json_str("{}").unwrap();
    assert_eq!(empty, RegionMap::default());

    let nulls =
        RegionMap::from_json_str(r#"{ "letter_to_region3": null, "region3_to_letter": null }"#)
            .unwrap();
    assert_eq!(nulls, RegionMap::default());
}

#[test]
fn test_unknown_fields_are_ignored() {
    let regions = RegionMap::from_json_str(r#"{ "comment": "mine", "letter_to_region3": {} }"#).unwrap();
    assert_eq!(regions, RegionMap::default());
}

#[test]
fn test_malformed_json_is_parse_error() {
    let result = RegionMap::from_json_str(r#"{ "letter_to_region3": { "E": "#);

    assert!(
        matches!(result, Err(RenamerError::RegionMapParse(_))),
        "Expected parse error, got {:?}",
        result
    );
}

#[test]
fn test_multi_char_letter_is_rejected() {
    let result = RegionMap::from_json_str(r#"{ "letter_to_region3": { "EU": "EUR" } }"#);
    assert!(matches!(result, Err(RenamerError::InvalidRegionMap { .. })));

    let result = RegionMap::from_json_str(r#"{ "region3_to_letter": { "EUR": "" } }"#);
    assert!(matches!(result, Err(RenamerError::InvalidRegionMap { .. })));
}

#[test]
fn test_load_without_path_uses_defaults() {
    assert_eq!(RegionMap::load(None).unwrap(), RegionMap::default());
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "letter_to_region3": {{ "W": "TWN" }} }}"#).unwrap();

    let regions = RegionMap::load(Some(file.path())).unwrap();
    assert_eq!(regions.region_for_letter('W'), "TWN");
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let result = RegionMap::load(Some(&dir.path().join("nope.json")));

    assert!(matches!(result, Err(RenamerError::Io { .. })));
}
