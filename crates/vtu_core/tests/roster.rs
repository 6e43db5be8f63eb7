use std::sync::Once;

use vtu_core::{generate_usns, normalize_usns, RangeError, RangeSpec};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(fetch_logging::initialize_for_tests);
}

#[test]
fn generates_padded_ascending_sequence() {
    init_logging();
    let usns = generate_usns("1bi23ec", 1, 5);

    assert_eq!(
        usns,
        vec![
            "1BI23EC001",
            "1BI23EC002",
            "1BI23EC003",
            "1BI23EC004",
            "1BI23EC005",
        ]
    );
}

#[test]
fn single_element_range_yields_one_usn() {
    init_logging();
    assert_eq!(generate_usns("1BI23EC", 42, 42), vec!["1BI23EC042"]);
}

#[test]
fn indices_beyond_padding_width_widen_naturally() {
    init_logging();
    let usns = generate_usns("1BI23EC", 999, 1001);
    assert_eq!(usns, vec!["1BI23EC999", "1BI23EC1000", "1BI23EC1001"]);
}

#[test]
fn range_spec_rejects_short_prefix() {
    init_logging();
    assert_eq!(
        RangeSpec::new("1BI", 1, 5).unwrap_err(),
        RangeError::PrefixTooShort
    );
    // Whitespace does not count towards the prefix length.
    assert_eq!(
        RangeSpec::new("  1BI  ", 1, 5).unwrap_err(),
        RangeError::PrefixTooShort
    );
}

#[test]
fn range_spec_rejects_invalid_bounds() {
    init_logging();
    assert_eq!(
        RangeSpec::new("1BI23EC", 0, 5).unwrap_err(),
        RangeError::StartBelowOne
    );
    assert_eq!(
        RangeSpec::new("1BI23EC", 6, 5).unwrap_err(),
        RangeError::EndBeforeStart
    );
}

#[test]
fn range_spec_generates_through_bounds() {
    init_logging();
    let spec = RangeSpec::new("1bi23ec", 8, 10).expect("valid range");
    assert_eq!(
        spec.generate(),
        vec!["1BI23EC008", "1BI23EC009", "1BI23EC010"]
    );
}

#[test]
fn normalize_handles_mixed_separators() {
    init_logging();
    let roster = normalize_usns("1bi23ec001, 1bi23ec002;1bi23ec003\n1bi23ec004");
    assert_eq!(
        roster,
        vec!["1BI23EC001", "1BI23EC002", "1BI23EC003", "1BI23EC004"]
    );
}

#[test]
fn normalize_strips_whitespace_inside_tokens() {
    init_logging();
    assert_eq!(normalize_usns("1bi 23ec 001"), vec!["1BI23EC001"]);
}

#[test]
fn normalize_dedupes_keeping_first_occurrence() {
    init_logging();
    assert_eq!(normalize_usns("a1,A1;a1\nA1"), vec!["A1"]);

    let roster = normalize_usns("1BI23EC002\n1bi23ec001,1BI23EC002");
    assert_eq!(roster, vec!["1BI23EC002", "1BI23EC001"]);
}

#[test]
fn normalize_of_empty_or_blank_input_is_empty() {
    init_logging();
    assert_eq!(normalize_usns(""), Vec::<String>::new());
    assert_eq!(normalize_usns("   "), Vec::<String>::new());
    assert_eq!(normalize_usns("\n,;,\n  \n"), Vec::<String>::new());
}
