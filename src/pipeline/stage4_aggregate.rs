use crate::model::discipline::MetricId;
use crate::model::profile::ScoringProfile;
use crate::model::scores::round2;

/// Post-lookup adjustment. Only skeletal-muscle mass is amplified.
pub fn amplify(metric: MetricId, score: f64, profile: &ScoringProfile) -> f64 {
    match metric {
        MetricId::SkeletalMuscleMass => round2(score * profile.muscle_amplifier),
        _ => score,
    }
}

/// Mean of the provided sub-scores; absent entries do not count as zero.
pub fn aggregate<I>(sub_scores: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let mut sum = 0.0;
    let mut count = 0usize;
    for score in sub_scores.into_iter().flatten() {
        sum += score;
        count += 1;
    }
    if count == 0 {
        return None;
    }
    Some(round2(sum / count as f64))
}

/// Overall ladder score: requires every core discipline to hold a positive score.
pub fn ladder_score(core_scores: &[Option<f64>]) -> Option<f64> {
    if core_scores.is_empty() {
        return None;
    }
    let mut sum = 0.0;
    for score in core_scores {
        match score {
            Some(value) if *value > 0.0 => sum += value,
            _ => return None,
        }
    }
    Some(round2(sum / core_scores.len() as f64))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_aggregate.rs"]
mod tests;
