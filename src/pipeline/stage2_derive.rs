use crate::engine::ScoreError;
use crate::model::athlete::{Athlete, Gender};
use crate::model::discipline::MetricId;
use crate::model::measurement::{LiftEntry, Measurement};
use crate::model::profile::ScoringProfile;
use crate::model::scores::round2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedValue {
    pub metric: MetricId,
    pub value: f64,
}

const MALE_DOTS: [f64; 5] = [
    -0.000001093,
    0.0007391293,
    -0.191875104,
    24.0900756,
    -307.75076,
];
const FEMALE_DOTS: [f64; 5] = [
    -0.0000010706,
    0.0005158568,
    -0.1126655495,
    13.6175032,
    -57.96288,
];

const MAX_REPS: u32 = 36;

/// Turns one measurement into the values looked up in the standard tables.
pub fn derive_values(
    measurement: &Measurement,
    athlete: &Athlete,
    profile: &ScoringProfile,
) -> Result<Vec<DerivedValue>, ScoreError> {
    match measurement {
        Measurement::Muscle { smm_kg } => {
            let smm = positive("skeletal muscle mass", *smm_kg)?;
            let weight = required_weight(athlete)?;
            Ok(vec![
                DerivedValue {
                    metric: MetricId::SkeletalMuscleMass,
                    value: smm,
                },
                DerivedValue {
                    metric: MetricId::SkeletalMusclePercent,
                    value: skeletal_muscle_percent(smm, weight),
                },
            ])
        }
        Measurement::Ffmi { body_fat_pct } => {
            let weight = required_weight(athlete)?;
            let height_cm = athlete
                .height_cm
                .ok_or(ScoreError::MissingInput("height"))?;
            let height_cm = positive("height", height_cm)?;
            let body_fat = body_fat_percent(*body_fat_pct)?;
            Ok(vec![DerivedValue {
                metric: MetricId::Ffmi,
                value: adjusted_ffmi(height_cm, weight, body_fat, profile),
            }])
        }
        Measurement::Power {
            vertical_jump_cm,
            standing_long_jump_cm,
            sprint_s,
        } => {
            let mut values = Vec::with_capacity(3);
            for (metric, value) in [
                (MetricId::VerticalJump, vertical_jump_cm),
                (MetricId::StandingLongJump, standing_long_jump_cm),
                (MetricId::Sprint, sprint_s),
            ] {
                if let Some(value) = value {
                    values.push(DerivedValue {
                        metric,
                        value: positive(metric.as_str(), *value)?,
                    });
                }
            }
            if values.is_empty() {
                return Err(ScoreError::MissingInput("power measurement"));
            }
            Ok(values)
        }
        Measurement::Cardio { distance_m } => Ok(vec![DerivedValue {
            metric: MetricId::CooperDistance,
            value: positive("cooper distance", *distance_m)?,
        }]),
        Measurement::Run5k { total_seconds } => Ok(vec![DerivedValue {
            metric: MetricId::Run5kTime,
            value: positive("5 km time", *total_seconds)?,
        }]),
        Measurement::Strength { lifts } => {
            if lifts.is_empty() {
                return Err(ScoreError::MissingInput("lift"));
            }
            let body_weight = required_weight(athlete)?;
            let gender = athlete.gender.ok_or(ScoreError::MissingInput("gender"))?;
            let age = athlete.age.ok_or(ScoreError::MissingInput("age"))?;
            lifts
                .iter()
                .map(|entry| {
                    Ok(DerivedValue {
                        metric: entry.lift,
                        value: corrected_dots(entry, body_weight, gender, age)?,
                    })
                })
                .collect()
        }
    }
}

pub fn skeletal_muscle_percent(smm_kg: f64, weight_kg: f64) -> f64 {
    round2(smm_kg / weight_kg * 100.0)
}

/// FFMI with the tall-athlete correction applied above the height threshold.
pub fn adjusted_ffmi(
    height_cm: f64,
    weight_kg: f64,
    body_fat_pct: f64,
    profile: &ScoringProfile,
) -> f64 {
    let height_m = height_cm / 100.0;
    let fat_free_mass = weight_kg * (1.0 - body_fat_pct / 100.0);
    let raw = fat_free_mass / (height_m * height_m);
    raw + height_adjustment(height_m, profile)
}

pub fn height_adjustment(height_m: f64, profile: &ScoringProfile) -> f64 {
    if height_m > profile.ffmi_height_threshold_m {
        profile.ffmi_height_coefficient * (height_m - profile.ffmi_height_threshold_m)
    } else {
        0.0
    }
}

/// Brzycki estimate.
pub fn one_rep_max(weight_kg: f64, reps: u32) -> Result<f64, ScoreError> {
    let weight = positive("lift weight", weight_kg)?;
    match reps {
        0 => Err(ScoreError::InvalidInput("reps must be at least 1".to_string())),
        1 => Ok(weight),
        r if r > MAX_REPS => Err(ScoreError::InvalidInput(format!(
            "reps must be at most {MAX_REPS}, got {r}"
        ))),
        r => Ok(weight * 36.0 / (37.0 - f64::from(r))),
    }
}

pub fn dots(lifted_kg: f64, body_weight_kg: f64, gender: Gender) -> Result<f64, ScoreError> {
    let [a, b, c, d, e] = match gender {
        Gender::Male => MALE_DOTS,
        Gender::Female => FEMALE_DOTS,
    };
    let bw = body_weight_kg;
    let denominator = a * bw.powi(4) + b * bw.powi(3) + c * bw.powi(2) + d * bw + e;
    if !denominator.is_finite() || denominator <= 0.0 {
        return Err(ScoreError::InvalidInput(format!(
            "body weight {bw} kg is outside the DOTS range"
        )));
    }
    Ok(lifted_kg * 500.0 / denominator)
}

pub fn age_coefficient(age: u32) -> f64 {
    match age {
        0..14 => 1.23,
        14..=23 => 1.23 - (f64::from(age - 14) / 9.0) * 0.23,
        24..=40 => 1.0,
        41..=44 => 1.045,
        45..=49 => 1.11,
        50..=54 => 1.15,
        55..=59 => 1.20,
        60..=64 => 1.25,
        65..=69 => 1.30,
        70..=74 => 1.35,
        75..=79 => 1.40,
        _ => 1.45,
    }
}

fn corrected_dots(
    entry: &LiftEntry,
    body_weight: f64,
    gender: Gender,
    age: u32,
) -> Result<f64, ScoreError> {
    if !entry.lift.is_lift() {
        return Err(ScoreError::InvalidInput(format!(
            "{} is not a lift",
            entry.lift
        )));
    }
    let load = if entry.lift == MetricId::PullUp {
        if !entry.weight_kg.is_finite() || entry.weight_kg < 0.0 {
            return Err(ScoreError::InvalidInput(format!(
                "added pull-up weight must be non-negative, got {}",
                entry.weight_kg
            )));
        }
        body_weight + entry.weight_kg
    } else {
        entry.weight_kg
    };
    let one_rm = one_rep_max(load, entry.reps)?;
    Ok(dots(one_rm, body_weight, gender)? * age_coefficient(age))
}

fn required_weight(athlete: &Athlete) -> Result<f64, ScoreError> {
    let weight = athlete
        .weight_kg
        .ok_or(ScoreError::MissingInput("weight"))?;
    positive("weight", weight)
}

fn body_fat_percent(value: f64) -> Result<f64, ScoreError> {
    if !value.is_finite() || !(0.0..100.0).contains(&value) {
        return Err(ScoreError::InvalidInput(format!(
            "body fat must be within 0-100 %, got {value}"
        )));
    }
    Ok(value)
}

fn positive(name: &str, value: f64) -> Result<f64, ScoreError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ScoreError::InvalidInput(format!(
            "{name} must be a positive number, got {value}"
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_derive.rs"]
mod tests;
