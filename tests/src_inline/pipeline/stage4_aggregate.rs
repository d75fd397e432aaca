use super::*;

#[test]
fn test_amplify_only_smm() {
    let profile = ScoringProfile::default_v1();
    assert_eq!(amplify(MetricId::SkeletalMuscleMass, 90.0, &profile), 112.5);
    assert_eq!(amplify(MetricId::SkeletalMusclePercent, 90.0, &profile), 90.0);
    assert_eq!(amplify(MetricId::Ffmi, 90.0, &profile), 90.0);
}

#[test]
fn test_aggregate_mean_of_provided() {
    assert_eq!(aggregate([Some(112.5), Some(110.0)]), Some(111.25));
    assert_eq!(aggregate([Some(50.0), None, Some(55.0)]), Some(52.5));
    assert_eq!(aggregate([Some(10.0), Some(10.0), Some(11.0)]), Some(10.33));
}

#[test]
fn test_aggregate_nothing_provided() {
    assert_eq!(aggregate([None, None]), None);
    assert_eq!(aggregate(Vec::<Option<f64>>::new()), None);
}

#[test]
fn test_ladder_score_requires_all_core_scores() {
    assert_eq!(
        ladder_score(&[Some(80.0), Some(70.0), Some(60.0), Some(90.0), Some(100.0)]),
        Some(80.0)
    );
    assert_eq!(
        ladder_score(&[Some(80.0), Some(70.0), None, Some(90.0), Some(100.0)]),
        None
    );
    assert_eq!(
        ladder_score(&[Some(80.0), Some(0.0), Some(60.0), Some(90.0), Some(100.0)]),
        None
    );
    assert_eq!(ladder_score(&[]), None);
}
