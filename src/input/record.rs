use serde::{Deserialize, Deserializer};

use crate::input::lenient;
use crate::model::athlete::{Athlete, Gender};
use crate::model::discipline::{Discipline, MetricId};
use crate::model::measurement::{LiftEntry, Measurement};

fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

/// One fetched leaderboard row. Parsed once; every number is already an `Option<f64>`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub display_name: Option<String>,
    #[serde(deserialize_with = "lenient::opt_u32")]
    pub age: Option<u32>,
    #[serde(deserialize_with = "lenient::opt_gender")]
    pub gender: Option<Gender>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub height: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub weight: Option<f64>,
    #[serde(deserialize_with = "lenient::strict_true")]
    pub is_verified: bool,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub district: Option<String>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub ladder_score: Option<f64>,
    #[serde(deserialize_with = "or_default")]
    pub scores: StoredScores,
    #[serde(deserialize_with = "or_default")]
    pub score_caps: StoredCaps,
    #[serde(rename = "stats_totalLoginDays", deserialize_with = "lenient::opt_f64")]
    pub stats_total_login_days: Option<f64>,
    #[serde(rename = "stats_sbdTotal", deserialize_with = "lenient::opt_f64")]
    pub stats_sbd_total: Option<f64>,
    #[serde(rename = "stats_squat", deserialize_with = "lenient::opt_f64")]
    pub stats_squat: Option<f64>,
    #[serde(rename = "stats_bench", deserialize_with = "lenient::opt_f64")]
    pub stats_bench: Option<f64>,
    #[serde(rename = "stats_deadlift", deserialize_with = "lenient::opt_f64")]
    pub stats_deadlift: Option<f64>,
    #[serde(rename = "stats_ohp", deserialize_with = "lenient::opt_f64")]
    pub stats_ohp: Option<f64>,
    #[serde(rename = "stats_latPull", deserialize_with = "lenient::opt_f64")]
    pub stats_lat_pull: Option<f64>,
    #[serde(rename = "stats_bodyFat", deserialize_with = "lenient::opt_f64")]
    pub stats_body_fat: Option<f64>,
    #[serde(rename = "stats_ffmi", deserialize_with = "lenient::opt_f64")]
    pub stats_ffmi: Option<f64>,
    #[serde(rename = "stats_cooper", deserialize_with = "lenient::opt_f64")]
    pub stats_cooper: Option<f64>,
    #[serde(rename = "stats_5k", deserialize_with = "lenient::opt_f64")]
    pub stats_5k: Option<f64>,
    #[serde(rename = "stats_vertical", deserialize_with = "lenient::opt_f64")]
    pub stats_vertical: Option<f64>,
    #[serde(rename = "stats_broad", deserialize_with = "lenient::opt_f64")]
    pub stats_broad: Option<f64>,
    #[serde(rename = "stats_100m", deserialize_with = "lenient::opt_f64")]
    pub stats_100m: Option<f64>,
    #[serde(rename = "stats_smm", deserialize_with = "lenient::opt_f64")]
    pub stats_smm: Option<f64>,
    #[serde(rename = "stats_armSize", deserialize_with = "lenient::opt_f64")]
    pub stats_arm_size: Option<f64>,
    /// Profile-level arm measurement, older than `testInputs.armSize`.
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub arm_size: Option<f64>,
    #[serde(deserialize_with = "or_default")]
    pub test_inputs: TestInputs,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoredScores {
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub strength: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub explosive_power: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub explosive: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub power: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub cardio: Option<f64>,
    #[serde(rename = "run_5km", deserialize_with = "lenient::opt_f64")]
    pub run_5km: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub muscle_mass: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub body_fat: Option<f64>,
}

impl StoredScores {
    pub fn get(&self, discipline: Discipline) -> Option<f64> {
        match discipline {
            Discipline::Strength => self.strength,
            Discipline::Power => self.explosive_power.or(self.explosive).or(self.power),
            Discipline::Cardio => self.cardio,
            Discipline::Run5k => self.run_5km,
            Discipline::Muscle => self.muscle_mass,
            Discipline::Ffmi => self.body_fat,
        }
    }
}

/// Explicit `wasCapped` flags written alongside newer submissions.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoredCaps {
    #[serde(deserialize_with = "lenient::opt_bool")]
    pub strength: Option<bool>,
    #[serde(deserialize_with = "lenient::opt_bool")]
    pub explosive_power: Option<bool>,
    #[serde(deserialize_with = "lenient::opt_bool")]
    pub cardio: Option<bool>,
    #[serde(rename = "run_5km", deserialize_with = "lenient::opt_bool")]
    pub run_5km: Option<bool>,
    #[serde(deserialize_with = "lenient::opt_bool")]
    pub muscle_mass: Option<bool>,
    #[serde(deserialize_with = "lenient::opt_bool")]
    pub body_fat: Option<bool>,
    #[serde(deserialize_with = "lenient::opt_bool")]
    pub ladder_score: Option<bool>,
}

impl StoredCaps {
    pub fn get(&self, discipline: Discipline) -> Option<bool> {
        match discipline {
            Discipline::Strength => self.strength,
            Discipline::Power => self.explosive_power,
            Discipline::Cardio => self.cardio,
            Discipline::Run5k => self.run_5km,
            Discipline::Muscle => self.muscle_mass,
            Discipline::Ffmi => self.body_fat,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TestInputs {
    #[serde(deserialize_with = "or_default")]
    pub muscle: MuscleInputs,
    #[serde(deserialize_with = "or_default")]
    pub ffmi: FfmiInputs,
    #[serde(deserialize_with = "or_default")]
    pub power: PowerInputs,
    #[serde(deserialize_with = "or_default")]
    pub cardio: CardioInputs,
    #[serde(rename = "run_5km", deserialize_with = "or_default")]
    pub run_5km: Run5kInputs,
    #[serde(deserialize_with = "or_default")]
    pub strength: StrengthInputs,
    #[serde(deserialize_with = "or_default")]
    pub arm_size: ArmSizeInputs,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArmSizeInputs {
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub arm: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MuscleInputs {
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub smm: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FfmiInputs {
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub body_fat: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub height: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PowerInputs {
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub vertical_jump: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub standing_long_jump: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub sprint: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardioInputs {
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub distance: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Run5kInputs {
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub minutes: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub seconds: Option<f64>,
}

impl Run5kInputs {
    pub fn total_seconds(&self) -> Option<f64> {
        if self.minutes.is_none() && self.seconds.is_none() {
            return None;
        }
        positive(Some(
            self.minutes.unwrap_or(0.0) * 60.0 + self.seconds.unwrap_or(0.0),
        ))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StrengthInputs {
    #[serde(deserialize_with = "or_default")]
    pub squat: LiftInputs,
    #[serde(deserialize_with = "or_default")]
    pub bench_press: LiftInputs,
    #[serde(deserialize_with = "or_default")]
    pub deadlift: LiftInputs,
    #[serde(deserialize_with = "or_default")]
    pub lat_pulldown: LiftInputs,
    #[serde(deserialize_with = "or_default")]
    pub shoulder_press: LiftInputs,
    #[serde(deserialize_with = "or_default")]
    pub pull_up: LiftInputs,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LiftInputs {
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub weight: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_u32")]
    pub reps: Option<u32>,
}

impl StrengthInputs {
    pub fn lifts(&self) -> Vec<LiftEntry> {
        [
            (MetricId::Squat, &self.squat),
            (MetricId::BenchPress, &self.bench_press),
            (MetricId::Deadlift, &self.deadlift),
            (MetricId::LatPulldown, &self.lat_pulldown),
            (MetricId::ShoulderPress, &self.shoulder_press),
            (MetricId::PullUp, &self.pull_up),
        ]
        .into_iter()
        .filter_map(|(lift, inputs)| {
            let reps = inputs.reps.filter(|r| *r > 0)?;
            let weight_kg = if lift == MetricId::PullUp {
                inputs.weight.filter(|w| *w >= 0.0).unwrap_or(0.0)
            } else {
                positive(inputs.weight)?
            };
            Some(LiftEntry {
                lift,
                weight_kg,
                reps,
            })
        })
        .collect()
    }
}

impl UserRecord {
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or("anonymous")
    }

    pub fn athlete(&self) -> Athlete {
        Athlete {
            age: self.age,
            gender: self.gender,
            height_cm: positive(self.height),
            weight_kg: positive(self.weight),
            verified: self.is_verified,
        }
    }

    /// Arm circumference: the stored stat, then the test input, then the profile field.
    pub fn arm_size(&self) -> Option<f64> {
        positive(self.stats_arm_size)
            .or(positive(self.test_inputs.arm_size.arm))
            .or(positive(self.arm_size))
    }

    pub fn stored_score(&self, discipline: Discipline) -> Option<f64> {
        self.scores.get(discipline)
    }

    pub fn cap_flag(&self, discipline: Discipline) -> Option<bool> {
        self.score_caps.get(discipline)
    }

    /// Profile and measurement needed to score `discipline` again, when the record kept them.
    pub fn recompute_inputs(&self, discipline: Discipline) -> Option<(Athlete, Measurement)> {
        let mut athlete = self.athlete();
        let inputs = &self.test_inputs;
        let measurement = match discipline {
            Discipline::Muscle => {
                let smm = positive(self.stats_smm).or(positive(inputs.muscle.smm))?;
                if let Some(weight) = positive(inputs.muscle.weight) {
                    athlete.weight_kg = Some(weight);
                }
                Measurement::Muscle { smm_kg: smm }
            }
            Discipline::Ffmi => {
                let body_fat = positive(inputs.ffmi.body_fat).or(positive(self.stats_body_fat))?;
                if let Some(weight) = positive(inputs.ffmi.weight) {
                    athlete.weight_kg = Some(weight);
                }
                if let Some(height) = positive(inputs.ffmi.height) {
                    athlete.height_cm = Some(height);
                }
                Measurement::Ffmi {
                    body_fat_pct: body_fat,
                }
            }
            Discipline::Power => {
                let vertical = positive(inputs.power.vertical_jump).or(positive(self.stats_vertical));
                let broad =
                    positive(inputs.power.standing_long_jump).or(positive(self.stats_broad));
                let sprint = positive(inputs.power.sprint).or(positive(self.stats_100m));
                if vertical.is_none() && broad.is_none() && sprint.is_none() {
                    return None;
                }
                Measurement::Power {
                    vertical_jump_cm: vertical,
                    standing_long_jump_cm: broad,
                    sprint_s: sprint,
                }
            }
            Discipline::Cardio => Measurement::Cardio {
                distance_m: positive(inputs.cardio.distance).or(positive(self.stats_cooper))?,
            },
            Discipline::Run5k => Measurement::Run5k {
                total_seconds: inputs
                    .run_5km
                    .total_seconds()
                    .or(positive(self.stats_5k))?,
            },
            Discipline::Strength => {
                let lifts = inputs.strength.lifts();
                if lifts.is_empty() {
                    return None;
                }
                Measurement::Strength { lifts }
            }
        };
        Some((athlete, measurement))
    }

    pub fn has_raw_inputs(&self, discipline: Discipline) -> bool {
        self.recompute_inputs(discipline).is_some()
    }
}
