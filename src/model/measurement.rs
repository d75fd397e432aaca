use serde::{Deserialize, Serialize};

use crate::model::discipline::{Discipline, MetricId};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiftEntry {
    pub lift: MetricId,
    /// Load on the bar; for pull-ups the added weight on top of body weight.
    pub weight_kg: f64,
    pub reps: u32,
}

/// Raw inputs of one assessment, as entered on the test form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "discipline", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum Measurement {
    Strength {
        lifts: Vec<LiftEntry>,
    },
    Power {
        vertical_jump_cm: Option<f64>,
        standing_long_jump_cm: Option<f64>,
        sprint_s: Option<f64>,
    },
    Cardio {
        distance_m: f64,
    },
    #[serde(rename = "run_5km")]
    Run5k {
        total_seconds: f64,
    },
    Muscle {
        smm_kg: f64,
    },
    Ffmi {
        body_fat_pct: f64,
    },
}

impl Measurement {
    pub fn discipline(&self) -> Discipline {
        match self {
            Self::Strength { .. } => Discipline::Strength,
            Self::Power { .. } => Discipline::Power,
            Self::Cardio { .. } => Discipline::Cardio,
            Self::Run5k { .. } => Discipline::Run5k,
            Self::Muscle { .. } => Discipline::Muscle,
            Self::Ffmi { .. } => Discipline::Ffmi,
        }
    }

    pub fn run_5k(minutes: u32, seconds: u32) -> Self {
        Self::Run5k {
            total_seconds: f64::from(minutes) * 60.0 + f64::from(seconds),
        }
    }
}
