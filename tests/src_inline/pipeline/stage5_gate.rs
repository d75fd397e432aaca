use super::*;
use proptest::prelude::*;

#[test]
fn test_unverified_above_ceiling_is_capped() {
    assert_eq!(
        gate(111.25, false),
        VisibilityResult {
            display_score: 100.0,
            is_capped: true,
        }
    );
}

#[test]
fn test_ceiling_itself_is_not_capped() {
    assert_eq!(
        gate(100.0, false),
        VisibilityResult {
            display_score: 100.0,
            is_capped: false,
        }
    );
    assert!(!gate(100.004, false).is_capped);
    assert!(gate(100.01, false).is_capped);
}

#[test]
fn test_verified_is_never_capped() {
    assert_eq!(
        gate(150.456, true),
        VisibilityResult {
            display_score: 150.46,
            is_capped: false,
        }
    );
}

#[test]
fn test_below_ceiling_is_rounded() {
    assert_eq!(gate(55.554, false).display_score, 55.55);
    assert_eq!(gate(0.0, false).display_score, 0.0);
}

#[test]
fn test_gated_keeps_raw_for_owner() {
    let score = gated(111.25, false);
    assert_eq!(score.raw, 111.25);
    assert_eq!(score.persisted(), 100.0);
    assert!(score.is_capped());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_unverified_display_never_exceeds_ceiling(raw in 0.0f64..500.0) {
        let result = gate(raw, false);
        prop_assert!(result.display_score <= HONOR_CEILING);
        prop_assert_eq!(result.is_capped, round2(raw) > HONOR_CEILING);
    }

    #[test]
    fn prop_gate_is_idempotent(raw in 0.0f64..500.0, verified in any::<bool>()) {
        let once = gate(raw, verified);
        let twice = gate(once.display_score, verified);
        prop_assert_eq!(twice.display_score, once.display_score);
        prop_assert!(!twice.is_capped);
    }

    #[test]
    fn prop_verified_display_is_rounded_raw(raw in 0.0f64..500.0) {
        let result = gate(raw, true);
        prop_assert_eq!(result.display_score, round2(raw));
        prop_assert!(!result.is_capped);
    }
}
