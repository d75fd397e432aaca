use super::*;
use crate::model::athlete::Gender;
use crate::model::discipline::{Discipline, MetricId};
use crate::standards::defs::builtin_standards;

#[test]
fn test_builtin_tables_are_ordered() {
    for standards in builtin_standards() {
        for row in standards.rows {
            for values in [row.male, row.female] {
                let table = StandardTable::from_values(values, standards.direction);
                assert!(
                    table.validate().is_ok(),
                    "{} {} out of order",
                    standards.metric,
                    row.bracket
                );
            }
        }
    }
}

#[test]
fn test_every_bracket_has_a_table() {
    for discipline in Discipline::ALL {
        for bracket in bracket_set(discipline) {
            for metric in discipline.metrics() {
                for gender in [Gender::Male, Gender::Female] {
                    assert!(
                        lookup_table(*metric, bracket, gender).is_some(),
                        "missing {metric} {} {gender}",
                        bracket.key
                    );
                }
            }
        }
    }
}

#[test]
fn test_brackets_do_not_overlap() {
    for discipline in Discipline::ALL {
        let set = bracket_set(discipline);
        for (i, a) in set.iter().enumerate() {
            assert!(a.min <= a.max);
            for b in &set[i + 1..] {
                assert!(a.max < b.min || b.max < a.min, "{} overlaps {}", a.key, b.key);
            }
        }
    }
}

#[test]
fn test_new_rejects_out_of_order() {
    let mut values = [0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0];
    assert!(StandardTable::new(values, Direction::HigherIsBetter).is_ok());
    assert_eq!(
        StandardTable::new(values, Direction::LowerIsBetter),
        Err(TableError::NotMonotonic {
            percentile: 10,
            direction: Direction::LowerIsBetter,
        })
    );
    values[5] = 25.0;
    assert_eq!(
        StandardTable::new(values, Direction::HigherIsBetter),
        Err(TableError::NotMonotonic {
            percentile: 50,
            direction: Direction::HigherIsBetter,
        })
    );
    values[5] = f64::NAN;
    assert_eq!(
        StandardTable::new(values, Direction::HigherIsBetter),
        Err(TableError::NonFinite { percentile: 50 })
    );
}

#[test]
fn test_flat_segments_are_allowed() {
    let values = [0.0, 10.0, 20.0, 30.0, 30.0, 50.0, 60.0, 70.0, 80.0, 100.0, 100.0];
    assert!(StandardTable::new(values, Direction::HigherIsBetter).is_ok());
}

#[test]
fn test_lookup_male_smm_18_30() {
    let bracket = bracket_set(Discipline::Muscle)[2];
    assert_eq!(bracket.key, "18-30");
    let table = lookup_table(MetricId::SkeletalMuscleMass, &bracket, Gender::Male).unwrap();
    assert_eq!(table.at(0), Some(22.0));
    assert_eq!(table.at(90), Some(40.0));
    assert_eq!(table.at(100), Some(42.0));
    assert_eq!(table.at(55), None);
    assert_eq!(table.at(110), None);
}

#[test]
fn test_oriented_negates_lower_is_better() {
    let bracket = bracket_set(Discipline::Power)[2];
    let table = lookup_table(MetricId::Sprint, &bracket, Gender::Male).unwrap();
    assert_eq!(table.direction(), Direction::LowerIsBetter);
    let oriented = table.oriented();
    assert_eq!(oriented[0], -16.0);
    assert_eq!(oriented[10], -11.0);
    assert!(oriented.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_lift_tables_scale_with_anchor() {
    let bracket = bracket_set(Discipline::Strength)[0];
    let table = lookup_table(MetricId::Deadlift, &bracket, Gender::Female).unwrap();
    assert_eq!(table.at(100), Some(150.0));
    assert!((table.at(50).unwrap() - 75.0).abs() < 1e-9);
}
