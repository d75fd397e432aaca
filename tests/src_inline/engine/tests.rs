use super::*;
use crate::model::measurement::LiftEntry;

fn athlete(age: u32, gender: Gender, verified: bool) -> Athlete {
    Athlete {
        age: Some(age),
        gender: Some(gender),
        height_cm: Some(180.0),
        weight_kg: Some(80.0),
        verified,
    }
}

#[test]
fn test_muscle_scenario_unverified() {
    let engine = ScoreEngine::default();
    let assessment = engine
        .score(
            &athlete(25, Gender::Male, false),
            &Measurement::Muscle { smm_kg: 40.0 },
        )
        .unwrap();

    assert_eq!(assessment.bracket, "18-30");
    let smm = assessment.metric(MetricId::SkeletalMuscleMass).unwrap();
    assert_eq!(smm.score.raw, 112.5);
    assert_eq!(smm.score.persisted(), 100.0);
    assert!(smm.score.is_capped());

    let percent = assessment.metric(MetricId::SkeletalMusclePercent).unwrap();
    assert_eq!(percent.value, 50.0);
    assert_eq!(percent.score.raw, 110.0);
    assert!(percent.score.is_capped());

    assert_eq!(assessment.composite.raw, 111.25);
    assert_eq!(assessment.composite.persisted(), 100.0);
    assert!(assessment.composite.is_capped());
}

#[test]
fn test_muscle_scenario_verified() {
    let engine = ScoreEngine::default();
    let assessment = engine
        .score(
            &athlete(25, Gender::Male, true),
            &Measurement::Muscle { smm_kg: 40.0 },
        )
        .unwrap();
    assert_eq!(assessment.composite.persisted(), 111.25);
    assert!(!assessment.composite.is_capped());
}

#[test]
fn test_muscle_below_ceiling() {
    let engine = ScoreEngine::default();
    let assessment = engine
        .score(
            &athlete(25, Gender::Male, false),
            &Measurement::Muscle { smm_kg: 34.0 },
        )
        .unwrap();
    assert_eq!(assessment.composite.persisted(), 73.75);
}

#[test]
fn test_ffmi_scenario() {
    let engine = ScoreEngine::default();
    let subject = Athlete {
        age: Some(28),
        gender: Some(Gender::Male),
        height_cm: Some(190.0),
        weight_kg: Some(90.0),
        verified: false,
    };
    let assessment = engine
        .score(&subject, &Measurement::Ffmi { body_fat_pct: 10.0 })
        .unwrap();
    assert!((assessment.metrics[0].value - 23.0377).abs() < 1e-3);
    assert_eq!(assessment.composite.persisted(), 87.92);
}

#[test]
fn test_power_averages_provided_metrics() {
    let engine = ScoreEngine::default();
    let assessment = engine
        .score(
            &athlete(25, Gender::Male, false),
            &Measurement::Power {
                vertical_jump_cm: Some(53.0),
                standing_long_jump_cm: None,
                sprint_s: Some(13.25),
            },
        )
        .unwrap();
    assert_eq!(assessment.metrics.len(), 2);
    assert_eq!(assessment.composite.persisted(), 52.5);
}

#[test]
fn test_sprint_limit_break() {
    let engine = ScoreEngine::default();
    let assessment = engine
        .score(
            &athlete(25, Gender::Male, true),
            &Measurement::Power {
                vertical_jump_cm: None,
                standing_long_jump_cm: None,
                sprint_s: Some(10.9),
            },
        )
        .unwrap();
    assert_eq!(assessment.composite.persisted(), 102.0);
}

#[test]
fn test_strength_squat() {
    let engine = ScoreEngine::default();
    let assessment = engine
        .score(
            &athlete(30, Gender::Male, false),
            &Measurement::Strength {
                lifts: vec![LiftEntry {
                    lift: MetricId::Squat,
                    weight_kg: 140.0,
                    reps: 1,
                }],
            },
        )
        .unwrap();
    assert_eq!(assessment.bracket, "all");
    assert!((assessment.composite.persisted() - 68.95).abs() < 0.011);
}

#[test]
fn test_cardio_and_run_5k() {
    let engine = ScoreEngine::default();
    let subject = athlete(25, Gender::Female, false);
    let cooper = engine
        .score(&subject, &Measurement::Cardio { distance_m: 1950.0 })
        .unwrap();
    assert_eq!(cooper.composite.persisted(), 50.0);

    let run = engine.score(&subject, &Measurement::run_5k(25, 0)).unwrap();
    assert_eq!(run.composite.persisted(), 80.0);

    let fast = engine.score(&subject, &Measurement::run_5k(19, 0)).unwrap();
    assert_eq!(fast.composite.raw, 104.0);
    assert_eq!(fast.composite.persisted(), 100.0);
}

#[test]
fn test_missing_gender_produces_no_result() {
    let engine = ScoreEngine::default();
    let mut subject = athlete(25, Gender::Male, false);
    subject.gender = None;
    assert_eq!(
        engine.score(&subject, &Measurement::Muscle { smm_kg: 30.0 }),
        Err(ScoreError::MissingInput("gender"))
    );
}

#[test]
fn test_unmapped_age_is_reported() {
    let engine = ScoreEngine::default();
    let result = engine.score(
        &athlete(11, Gender::Male, false),
        &Measurement::Power {
            vertical_jump_cm: Some(40.0),
            standing_long_jump_cm: None,
            sprint_s: None,
        },
    );
    assert_eq!(
        result,
        Err(ScoreError::UnmappedAge {
            discipline: Discipline::Power,
            age: 11,
        })
    );
}

#[test]
fn test_persist_bundle_tracks_each_cap() {
    let engine = ScoreEngine::default();
    let subject = athlete(25, Gender::Male, false);
    let measurement = Measurement::Muscle { smm_kg: 40.0 };
    let assessment = engine.score(&subject, &measurement).unwrap();
    let bundle = assessment.persist_bundle(&subject, &measurement);

    assert_eq!(bundle.score_key, "muscleMass");
    assert_eq!(bundle.final_score_to_persist, 100.0);
    assert!(bundle.final_was_capped);
    assert!(bundle.sub_scores_to_persist["smm"].was_capped);
    assert_eq!(bundle.sub_scores_to_persist["sm_percent"].score, 100.0);

    let json = serde_json::to_value(&bundle).unwrap();
    assert_eq!(json["finalScoreToPersist"], 100.0);
    assert_eq!(json["finalWasCapped"], true);
    assert_eq!(json["inputs"]["discipline"], "muscle");
    assert_eq!(json["inputs"]["smmKg"], 40.0);
    assert_eq!(json["athlete"]["weightKg"], 80.0);
}
