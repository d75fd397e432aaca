use super::*;
use crate::model::athlete::Gender;
use crate::model::discipline::{Discipline, MetricId};
use crate::standards::{bracket_set, lookup_table};
use proptest::prelude::*;

fn identity() -> StandardTable {
    StandardTable::new(
        [0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0],
        Direction::HigherIsBetter,
    )
    .unwrap()
}

fn sprint_21_30() -> StandardTable {
    let bracket = bracket_set(Discipline::Power)[2];
    lookup_table(MetricId::Sprint, &bracket, Gender::Male).unwrap()
}

#[test]
fn test_boundaries_are_exact() {
    let profile = ScoringProfile::default_v1();
    let table = identity();
    for (idx, key) in PERCENTILE_KEYS.iter().enumerate() {
        let value = table.values()[idx];
        assert_eq!(interpolate(value, &table, &profile), f64::from(*key));
    }
}

#[test]
fn test_interior_and_floor() {
    let profile = ScoringProfile::default_v1();
    let table = identity();
    assert_eq!(interpolate(55.0, &table, &profile), 55.0);
    assert_eq!(interpolate(-5.0, &table, &profile), 0.0);
    assert_eq!(interpolate(0.0, &table, &profile), 0.0);
}

#[test]
fn test_interior_rounds_to_two_decimals() {
    let profile = ScoringProfile::default_v1();
    let table = StandardTable::new(
        [0.0, 3.0, 6.0, 9.0, 12.0, 15.0, 18.0, 21.0, 24.0, 27.0, 30.0],
        Direction::HigherIsBetter,
    )
    .unwrap();
    assert_eq!(interpolate(1.0, &table, &profile), 3.33);
}

#[test]
fn test_limit_break_and_soft_cap() {
    let profile = ScoringProfile::default_v1();
    let table = identity();
    assert_eq!(interpolate(110.0, &table, &profile), 110.0);
    assert_eq!(interpolate(120.0, &table, &profile), 120.0);
    assert_eq!(interpolate(130.0, &table, &profile), 125.0);
    assert_eq!(interpolate(150.0, &table, &profile), 135.0);
}

#[test]
fn test_flat_segment_snaps_to_upper() {
    let profile = ScoringProfile::default_v1();
    let table = StandardTable::new(
        [0.0, 10.0, 20.0, 30.0, 30.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0],
        Direction::HigherIsBetter,
    )
    .unwrap();
    assert_eq!(interpolate(30.0, &table, &profile), 40.0);
    assert_eq!(interpolate(25.0, &table, &profile), 25.0);
}

#[test]
fn test_flat_top_segment_has_no_extrapolation() {
    let profile = ScoringProfile::default_v1();
    let table = StandardTable::new(
        [0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 100.0, 100.0],
        Direction::HigherIsBetter,
    )
    .unwrap();
    assert_eq!(interpolate(100.0, &table, &profile), 100.0);
    assert_eq!(interpolate(180.0, &table, &profile), 100.0);
}

#[test]
fn test_sprint_faster_than_ceiling() {
    let profile = ScoringProfile::default_v1();
    let table = sprint_21_30();
    assert_eq!(interpolate(10.9, &table, &profile), 102.0);
    assert_eq!(interpolate(11.0, &table, &profile), 100.0);
    assert_eq!(interpolate(13.25, &table, &profile), 55.0);
    assert_eq!(interpolate(16.5, &table, &profile), 0.0);
}

#[test]
fn test_soft_cap_passthrough() {
    let profile = ScoringProfile::default_v1();
    assert_eq!(soft_cap(119.0, &profile), 119.0);
    assert_eq!(soft_cap(140.0, &profile), 130.0);
}

#[test]
fn test_non_finite_value_scores_zero() {
    let profile = ScoringProfile::default_v1();
    assert_eq!(interpolate(f64::NAN, &identity(), &profile), 0.0);
    assert_eq!(interpolate(f64::INFINITY, &identity(), &profile), 0.0);
    assert_eq!(interpolate(f64::NAN, &sprint_21_30(), &profile), 0.0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_higher_is_better_is_monotone(a in -20.0f64..400.0, b in -20.0f64..400.0) {
        let profile = ScoringProfile::default_v1();
        let table = identity();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(interpolate(lo, &table, &profile) <= interpolate(hi, &table, &profile));
    }

    #[test]
    fn prop_lower_is_better_is_monotone(a in 8.0f64..20.0, b in 8.0f64..20.0) {
        let profile = ScoringProfile::default_v1();
        let table = sprint_21_30();
        let (fast, slow) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(interpolate(fast, &table, &profile) >= interpolate(slow, &table, &profile));
    }

    #[test]
    fn prop_soft_cap_halves_marginal_gain(extra in 0.0f64..200.0) {
        let profile = ScoringProfile::default_v1();
        let table = identity();
        let above = interpolate(120.0 + extra, &table, &profile);
        prop_assert!((above - (120.0 + extra * 0.5)).abs() <= 0.011);
    }

    #[test]
    fn prop_scores_never_negative(value in -1000.0f64..1000.0) {
        let profile = ScoringProfile::default_v1();
        prop_assert!(interpolate(value, &identity(), &profile) >= 0.0);
    }
}
