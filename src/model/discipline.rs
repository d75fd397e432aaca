use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
    Strength,
    Power,
    Cardio,
    #[serde(rename = "run_5km")]
    Run5k,
    Muscle,
    Ffmi,
}

impl Discipline {
    pub const ALL: [Discipline; 6] = [
        Discipline::Strength,
        Discipline::Power,
        Discipline::Cardio,
        Discipline::Run5k,
        Discipline::Muscle,
        Discipline::Ffmi,
    ];

    /// The five disciplines averaged into the overall ladder score.
    pub const CORE: [Discipline; 5] = [
        Discipline::Strength,
        Discipline::Power,
        Discipline::Cardio,
        Discipline::Muscle,
        Discipline::Ffmi,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strength" | "sbd" => Some(Self::Strength),
            "power" | "explosive" | "explosivepower" | "explosive_power" => Some(Self::Power),
            "cardio" | "cooper" => Some(Self::Cardio),
            "run5k" | "run_5km" | "5km" | "5k" => Some(Self::Run5k),
            "muscle" | "musclemass" | "muscle_mass" | "smm" => Some(Self::Muscle),
            "ffmi" | "bodyfat" | "body_fat" => Some(Self::Ffmi),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Power => "power",
            Self::Cardio => "cardio",
            Self::Run5k => "run_5km",
            Self::Muscle => "muscle",
            Self::Ffmi => "ffmi",
        }
    }

    /// Key under which the discipline's composite is persisted in `scores`.
    pub fn score_key(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Power => "explosivePower",
            Self::Cardio => "cardio",
            Self::Run5k => "run_5km",
            Self::Muscle => "muscleMass",
            Self::Ffmi => "bodyFat",
        }
    }

    pub fn metrics(self) -> &'static [MetricId] {
        match self {
            Self::Strength => &[
                MetricId::Squat,
                MetricId::BenchPress,
                MetricId::Deadlift,
                MetricId::LatPulldown,
                MetricId::ShoulderPress,
                MetricId::PullUp,
            ],
            Self::Power => &[
                MetricId::VerticalJump,
                MetricId::StandingLongJump,
                MetricId::Sprint,
            ],
            Self::Cardio => &[MetricId::CooperDistance],
            Self::Run5k => &[MetricId::Run5kTime],
            Self::Muscle => &[
                MetricId::SkeletalMuscleMass,
                MetricId::SkeletalMusclePercent,
            ],
            Self::Ffmi => &[MetricId::Ffmi],
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricId {
    Squat,
    BenchPress,
    Deadlift,
    LatPulldown,
    ShoulderPress,
    PullUp,
    VerticalJump,
    StandingLongJump,
    Sprint,
    CooperDistance,
    Run5kTime,
    SkeletalMuscleMass,
    SkeletalMusclePercent,
    Ffmi,
}

impl MetricId {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "squat" => Some(Self::Squat),
            "bench" | "bench_press" | "benchpress" => Some(Self::BenchPress),
            "deadlift" => Some(Self::Deadlift),
            "lat_pulldown" | "latpull" | "lat_pull" | "latpulldown" => Some(Self::LatPulldown),
            "shoulder_press" | "ohp" | "overhead_press" | "shoulderpress" => {
                Some(Self::ShoulderPress)
            }
            "pull_up" | "pullup" | "pull-up" | "pullups" => Some(Self::PullUp),
            "vertical_jump" | "vertical" => Some(Self::VerticalJump),
            "standing_long_jump" | "broad" | "long_jump" => Some(Self::StandingLongJump),
            "sprint" | "100m" => Some(Self::Sprint),
            "cooper" | "cooper_distance" => Some(Self::CooperDistance),
            "run_5km" | "5km" | "5k" => Some(Self::Run5kTime),
            "smm" | "skeletal_muscle_mass" => Some(Self::SkeletalMuscleMass),
            "sm_percent" | "skeletal_muscle_percent" => Some(Self::SkeletalMusclePercent),
            "ffmi" => Some(Self::Ffmi),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Squat => "squat",
            Self::BenchPress => "bench_press",
            Self::Deadlift => "deadlift",
            Self::LatPulldown => "lat_pulldown",
            Self::ShoulderPress => "shoulder_press",
            Self::PullUp => "pull_up",
            Self::VerticalJump => "vertical_jump",
            Self::StandingLongJump => "standing_long_jump",
            Self::Sprint => "sprint",
            Self::CooperDistance => "cooper_distance",
            Self::Run5kTime => "run_5km",
            Self::SkeletalMuscleMass => "smm",
            Self::SkeletalMusclePercent => "sm_percent",
            Self::Ffmi => "ffmi",
        }
    }

    pub fn discipline(self) -> Discipline {
        match self {
            Self::Squat
            | Self::BenchPress
            | Self::Deadlift
            | Self::LatPulldown
            | Self::ShoulderPress
            | Self::PullUp => Discipline::Strength,
            Self::VerticalJump | Self::StandingLongJump | Self::Sprint => Discipline::Power,
            Self::CooperDistance => Discipline::Cardio,
            Self::Run5kTime => Discipline::Run5k,
            Self::SkeletalMuscleMass | Self::SkeletalMusclePercent => Discipline::Muscle,
            Self::Ffmi => Discipline::Ffmi,
        }
    }

    /// Unit of the value fed to the interpolator.
    pub fn unit(self) -> &'static str {
        match self {
            Self::Squat
            | Self::BenchPress
            | Self::Deadlift
            | Self::LatPulldown
            | Self::ShoulderPress
            | Self::PullUp => "dots",
            Self::VerticalJump | Self::StandingLongJump => "cm",
            Self::Sprint | Self::Run5kTime => "s",
            Self::CooperDistance => "m",
            Self::SkeletalMuscleMass => "kg",
            Self::SkeletalMusclePercent => "%",
            Self::Ffmi => "kg/m2",
        }
    }

    pub fn is_lift(self) -> bool {
        self.discipline() == Discipline::Strength
    }
}

impl fmt::Display for MetricId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
