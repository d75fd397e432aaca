use super::*;

fn athlete(age: u32, gender: Gender, height_cm: f64, weight_kg: f64) -> Athlete {
    Athlete {
        age: Some(age),
        gender: Some(gender),
        height_cm: Some(height_cm),
        weight_kg: Some(weight_kg),
        verified: false,
    }
}

#[test]
fn test_muscle_percent_is_rounded() {
    let profile = ScoringProfile::default_v1();
    let values = derive_values(
        &Measurement::Muscle { smm_kg: 40.0 },
        &athlete(25, Gender::Male, 180.0, 80.0),
        &profile,
    )
    .unwrap();
    assert_eq!(values.len(), 2);
    assert_eq!(values[0].metric, MetricId::SkeletalMuscleMass);
    assert_eq!(values[0].value, 40.0);
    assert_eq!(values[1].metric, MetricId::SkeletalMusclePercent);
    assert_eq!(values[1].value, 50.0);
    assert_eq!(skeletal_muscle_percent(31.0, 73.0), 42.47);
}

#[test]
fn test_ffmi_tall_adjustment() {
    let profile = ScoringProfile::default_v1();
    let ffmi = adjusted_ffmi(190.0, 90.0, 10.0, &profile);
    let raw = 81.0 / (1.9 * 1.9);
    assert!((ffmi - (raw + 0.6)).abs() < 1e-9);
}

#[test]
fn test_ffmi_never_subtracts_below_threshold() {
    let profile = ScoringProfile::default_v1();
    let ffmi = adjusted_ffmi(170.0, 70.0, 15.0, &profile);
    let raw = 59.5 / (1.7 * 1.7);
    assert!((ffmi - raw).abs() < 1e-9);
    assert_eq!(height_adjustment(1.8, &profile), 0.0);
    assert_eq!(height_adjustment(1.6, &profile), 0.0);
}

#[test]
fn test_ffmi_requires_height() {
    let profile = ScoringProfile::default_v1();
    let mut subject = athlete(25, Gender::Male, 180.0, 80.0);
    subject.height_cm = None;
    let err = derive_values(&Measurement::Ffmi { body_fat_pct: 12.0 }, &subject, &profile)
        .unwrap_err();
    assert_eq!(err, ScoreError::MissingInput("height"));
}

#[test]
fn test_body_fat_out_of_range() {
    let profile = ScoringProfile::default_v1();
    let subject = athlete(25, Gender::Male, 180.0, 80.0);
    assert!(matches!(
        derive_values(&Measurement::Ffmi { body_fat_pct: 100.0 }, &subject, &profile),
        Err(ScoreError::InvalidInput(_))
    ));
}

#[test]
fn test_power_keeps_provided_metrics_only() {
    let profile = ScoringProfile::default_v1();
    let values = derive_values(
        &Measurement::Power {
            vertical_jump_cm: Some(53.0),
            standing_long_jump_cm: None,
            sprint_s: Some(13.25),
        },
        &athlete(25, Gender::Male, 180.0, 80.0),
        &profile,
    )
    .unwrap();
    let metrics: Vec<_> = values.iter().map(|v| v.metric).collect();
    assert_eq!(metrics, vec![MetricId::VerticalJump, MetricId::Sprint]);
}

#[test]
fn test_power_without_any_metric() {
    let profile = ScoringProfile::default_v1();
    let err = derive_values(
        &Measurement::Power {
            vertical_jump_cm: None,
            standing_long_jump_cm: None,
            sprint_s: None,
        },
        &athlete(25, Gender::Male, 180.0, 80.0),
        &profile,
    )
    .unwrap_err();
    assert_eq!(err, ScoreError::MissingInput("power measurement"));
}

#[test]
fn test_muscle_missing_weight() {
    let profile = ScoringProfile::default_v1();
    let mut subject = athlete(25, Gender::Male, 180.0, 80.0);
    subject.weight_kg = None;
    let err = derive_values(&Measurement::Muscle { smm_kg: 30.0 }, &subject, &profile)
        .unwrap_err();
    assert_eq!(err, ScoreError::MissingInput("weight"));
}

#[test]
fn test_one_rep_max() {
    assert_eq!(one_rep_max(100.0, 1).unwrap(), 100.0);
    assert!((one_rep_max(100.0, 5).unwrap() - 112.5).abs() < 1e-9);
    assert!(one_rep_max(100.0, 0).is_err());
    assert!(one_rep_max(100.0, 37).is_err());
    assert!(one_rep_max(0.0, 3).is_err());
}

#[test]
fn test_dots_male_80kg() {
    let score = dots(140.0, 80.0, Gender::Male).unwrap();
    assert!((score - 96.5358).abs() < 1e-3);
    let female = dots(100.0, 60.0, Gender::Female).unwrap();
    assert!(female > 0.0);
}

#[test]
fn test_age_coefficient() {
    assert_eq!(age_coefficient(10), 1.23);
    assert!((age_coefficient(14) - 1.23).abs() < 1e-12);
    assert!((age_coefficient(18) - (1.23 - 4.0 / 9.0 * 0.23)).abs() < 1e-12);
    assert!((age_coefficient(23) - 1.0).abs() < 1e-12);
    assert_eq!(age_coefficient(30), 1.0);
    assert_eq!(age_coefficient(42), 1.045);
    assert_eq!(age_coefficient(57), 1.20);
    assert_eq!(age_coefficient(80), 1.45);
    assert_eq!(age_coefficient(95), 1.45);
}

#[test]
fn test_pull_up_adds_body_weight() {
    let profile = ScoringProfile::default_v1();
    let subject = athlete(30, Gender::Male, 180.0, 80.0);
    let values = derive_values(
        &Measurement::Strength {
            lifts: vec![LiftEntry {
                lift: MetricId::PullUp,
                weight_kg: 20.0,
                reps: 1,
            }],
        },
        &subject,
        &profile,
    )
    .unwrap();
    let expected = dots(100.0, 80.0, Gender::Male).unwrap();
    assert!((values[0].value - expected).abs() < 1e-9);
}

#[test]
fn test_strength_rejects_non_lift_metric() {
    let profile = ScoringProfile::default_v1();
    let subject = athlete(30, Gender::Male, 180.0, 80.0);
    let result = derive_values(
        &Measurement::Strength {
            lifts: vec![LiftEntry {
                lift: MetricId::Sprint,
                weight_kg: 20.0,
                reps: 1,
            }],
        },
        &subject,
        &profile,
    );
    assert!(matches!(result, Err(ScoreError::InvalidInput(_))));
}
