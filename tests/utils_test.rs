use lyrapid::utils::*;

// Helper to turn string literals into owned segments
fn segments(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_split_query_segments() {
    // Single segment
    assert_eq!(split_query_segments("/Bohemian%20Rhapsody"), segments(&["Bohemian%20Rhapsody"]));

    // Two segments
    assert_eq!(split_query_segments("/Bohemian/Queen"), segments(&["Bohemian", "Queen"]));

    // Leading and trailing slashes are ignored
    assert_eq!(split_query_segments("/Bohemian/Queen/"), segments(&["Bohemian", "Queen"]));

    // Root path yields no segments
    assert_eq!(split_query_segments("/"), Vec::<String>::new());
    assert_eq!(split_query_segments(""), Vec::<String>::new());

    // Interior empty segments are preserved, not collapsed
    assert_eq!(split_query_segments("/a//b"), segments(&["a", "", "b"]));
}

#[test]
fn test_decode_segments() {
    // Percent escapes are decoded per segment
    let decoded = decode_segments(&segments(&["Bohemian%20Rhapsody", "Queen"])).unwrap();
    assert_eq!(decoded, segments(&["Bohemian Rhapsody", "Queen"]));

    // An encoded slash stays inside its segment
    let decoded = decode_segments(&segments(&["AC%2FDC"])).unwrap();
    assert_eq!(decoded, segments(&["AC/DC"]));

    // Plain text passes through untouched
    let decoded = decode_segments(&segments(&["hello"])).unwrap();
    assert_eq!(decoded, segments(&["hello"]));

    // Invalid UTF-8 after decoding is an error
    assert!(decode_segments(&segments(&["%FF%FE"])).is_err());
}

#[test]
fn test_is_nullish_segment() {
    // All four sentinel values are recognized
    assert!(is_nullish_segment("None"));
    assert!(is_nullish_segment("N/A"));
    assert!(is_nullish_segment("null"));
    assert!(is_nullish_segment("undefined"));

    // Matching is exact, not case-insensitive or substring
    assert!(!is_nullish_segment("none"));
    assert!(!is_nullish_segment("null "));
    assert!(!is_nullish_segment("nullify"));
    assert!(!is_nullish_segment("Bohemian"));
}

#[test]
fn test_validate_query() {
    // One or two segments are valid
    assert!(validate_query(&segments(&["Bohemian"])));
    assert!(validate_query(&segments(&["Bohemian", "Queen"])));

    // Zero or more than two segments are invalid
    assert!(!validate_query(&segments(&[])));
    assert!(!validate_query(&segments(&["a", "b", "c"])));

    // A nullish sentinel anywhere invalidates the query
    assert!(!validate_query(&segments(&["null"])));
    assert!(!validate_query(&segments(&["Bohemian", "undefined"])));
    assert!(!validate_query(&segments(&["N/A", "Queen"])));
}

#[test]
fn test_build_search_text() {
    // Title only
    assert_eq!(build_search_text(&segments(&["Bohemian Rhapsody"])), "Bohemian Rhapsody");

    // Title and artist joined with a single space
    assert_eq!(
        build_search_text(&segments(&["Bohemian Rhapsody", "Queen"])),
        "Bohemian Rhapsody Queen"
    );
}

#[test]
fn test_client_ip() {
    // Missing header
    assert_eq!(client_ip(None), None);

    // Empty header falls back too
    assert_eq!(client_ip(Some("")), None);

    // Single address
    assert_eq!(client_ip(Some("52.5.229.222")), Some("52.5.229.222".to_string()));

    // First element of a proxy chain wins
    assert_eq!(
        client_ip(Some("52.5.229.222, 10.0.0.1, 172.16.0.1")),
        Some("52.5.229.222".to_string())
    );

    // Whitespace around the address is trimmed
    assert_eq!(client_ip(Some("  52.5.229.222 , 10.0.0.1")), Some("52.5.229.222".to_string()));
}

#[test]
fn test_normalize_release_date() {
    // None passes through
    assert_eq!(normalize_release_date(None), None);

    // ISO dates stay ISO
    assert_eq!(
        normalize_release_date(Some("1975-10-31".to_string())),
        Some("1975-10-31".to_string())
    );

    // Genius display format is converted
    assert_eq!(
        normalize_release_date(Some("October 31, 1975".to_string())),
        Some("1975-10-31".to_string())
    );

    // Unparseable values are preserved verbatim
    assert_eq!(
        normalize_release_date(Some("sometime in the 70s".to_string())),
        Some("sometime in the 70s".to_string())
    );
}
