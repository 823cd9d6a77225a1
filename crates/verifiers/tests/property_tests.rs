//! Property-based tests for verifiers.

use proptest::prelude::*;
use serde_json::json;
use verifiers::prelude::*;

// ============================================================================
// NORMALIZATION: normalize(normalize(x)) == normalize(x)
// ============================================================================

proptest! {
    #[test]
    fn normalize_is_idempotent(s in ".{0,40}", upper in any::<bool>()) {
        let once = normalize_string(&json!(s), upper);
        let twice = normalize_string(&json!(once.clone()), upper);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn normalized_output_is_plain_ascii(s in ".{0,40}") {
        let out = normalize_string(&json!(s), true);
        prop_assert!(out.chars().all(|c| c.is_ascii_uppercase()
            || c.is_ascii_digit()
            || matches!(c, '-' | ':' | ' ')));
        prop_assert!(!out.starts_with(' ') && !out.ends_with(' '));
        prop_assert!(!out.contains("  "));
    }

    #[test]
    fn trimmed_never_exceeds_plain(s in "[ a-z\t\n]{0,30}") {
        let plain = validate_string(&json!(s), ..).map(|v| v.len());
        let trimmed = validate_trimmed_string(&json!(s), ..).map(|v| v.len());
        prop_assert!(trimmed.unwrap() <= plain.unwrap());
    }
}

// ============================================================================
// DATES: day-first input comes back year-first
// ============================================================================

proptest! {
    #[test]
    fn day_first_dates_are_reordered(
        day in "[0-9]{2}",
        month in "[0-9]{2}",
        year in "[0-9]{4}",
        sep in prop::sample::select(vec!['-', '/', ' ']),
    ) {
        let input = format!("{day}{sep}{month}{sep}{year}");
        let out = normalize_date(&json!(input));
        prop_assert_eq!(out, format!("{year}-{month}-{day}"));
    }

    #[test]
    fn valid_calendar_dates_pass_strict(
        year in 1000_i32..=9999,
        month in 1_u32..=12,
        day in 1_u32..=28,
    ) {
        let input = format!("{day:02}-{month:02}-{year}");
        let out = DateValidator::strict().validate(&input);
        prop_assert_eq!(out, Ok(format!("{year}-{month:02}-{day:02}")));
    }
}

// ============================================================================
// INTEGERS: in-range values are accepted as-is
// ============================================================================

proptest! {
    #[test]
    fn integers_within_bounds_round_trip(n in -1000_i64..=1000) {
        prop_assert_eq!(validate_int(&json!(n.to_string()), -1000..=1000), Ok(n));
        prop_assert_eq!(validate_int(&json!(n), -1000..=1000), Ok(n));
    }

    #[test]
    fn integers_outside_bounds_fail(n in 101_i64..=10_000) {
        let err = validate_int(&json!(n), Bounds::between(0, 100)).unwrap_err();
        prop_assert_eq!(err.code(), "max");
    }
}

// ============================================================================
// EMAIL: domain check agrees with the text after '@'
// ============================================================================

proptest! {
    #[test]
    fn email_domain_agreement(
        local in "[a-z0-9._]{1,12}",
        host in "[a-z0-9]{1,10}\\.(com|org|io)",
        other in "[a-z0-9]{1,10}\\.(net|dev)",
    ) {
        let address = json!(format!("{local}@{host}"));
        prop_assert!(validate_email(&address, None));
        prop_assert!(validate_email(&address, Some(&host)));
        prop_assert!(!validate_email(&address, Some(&other)));
    }
}
