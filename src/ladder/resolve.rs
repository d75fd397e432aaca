use crate::engine::ScoreEngine;
use crate::input::UserRecord;
use crate::ladder::heal::{
    discipline_corroborated, final_guard, heal_discipline_score, heal_ladder_score,
    ladder_corroborated,
};
use crate::ladder::{Dimension, DisplayMetric, SubFilter, ValueFormat};
use crate::model::discipline::Discipline;
use crate::model::scores::round2;

/// Per-row display values for a leaderboard. Performs no I/O.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    engine: ScoreEngine,
}

fn stat(value: Option<f64>) -> Option<f64> {
    Some(value.unwrap_or(0.0))
}

fn metric(
    value: Option<f64>,
    unit: &'static str,
    label: &str,
    format: ValueFormat,
) -> DisplayMetric {
    DisplayMetric {
        value,
        unit,
        label: label.to_string(),
        format,
        sub_info: None,
    }
}

impl Resolver {
    pub fn new(engine: ScoreEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &ScoreEngine {
        &self.engine
    }

    /// Resolves string keys as stored by the views; unknown dimensions show the overall score.
    pub fn resolve_named(
        &self,
        user: &UserRecord,
        dimension: &str,
        sub_filter: Option<&str>,
    ) -> DisplayMetric {
        let dimension = Dimension::parse(dimension).unwrap_or(Dimension::Overall);
        let sub = dimension.sub_filter(sub_filter);
        self.resolve(user, dimension, sub)
    }

    pub fn resolve(&self, user: &UserRecord, dimension: Dimension, sub: SubFilter) -> DisplayMetric {
        match dimension {
            Dimension::Overall => self.overall(user, "Overall Score"),
            Dimension::LocalRank => self.overall(user, "Local Rank"),
            Dimension::LoginDays => metric(
                stat(user.stats_total_login_days),
                "days",
                "Login Days",
                ValueFormat::Integer,
            ),
            Dimension::Strength => self.strength(user, sub),
            Dimension::BodyFat => match sub {
                SubFilter::Ffmi => {
                    metric(stat(user.stats_ffmi), "", "FFMI", ValueFormat::TwoDecimals)
                }
                SubFilter::Score => self.discipline_score(user, Discipline::Ffmi, "Body Composition Score"),
                _ => metric(
                    stat(user.stats_body_fat),
                    "%",
                    "Body Fat",
                    ValueFormat::OneDecimal,
                ),
            },
            Dimension::Cardio => match sub {
                SubFilter::Run5k => metric(
                    stat(user.stats_5k),
                    "min",
                    "5 km Run",
                    ValueFormat::MinutesSeconds,
                ),
                SubFilter::Score => self.discipline_score(user, Discipline::Cardio, "Cardio Score"),
                _ => metric(
                    stat(user.stats_cooper),
                    "km",
                    "Cooper Test",
                    ValueFormat::Kilometers,
                ),
            },
            Dimension::Power => match sub {
                SubFilter::Broad => metric(
                    stat(user.stats_broad),
                    "cm",
                    "Standing Long Jump",
                    ValueFormat::OneDecimal,
                ),
                SubFilter::Sprint => metric(
                    stat(user.stats_100m),
                    "s",
                    "100 m Sprint",
                    ValueFormat::TwoDecimals,
                ),
                SubFilter::Score => self.discipline_score(user, Discipline::Power, "Power Score"),
                _ => metric(
                    stat(user.stats_vertical),
                    "cm",
                    "Vertical Jump",
                    ValueFormat::OneDecimal,
                ),
            },
            Dimension::Muscle => match sub {
                SubFilter::Weight => metric(
                    stat(user.stats_smm),
                    "kg",
                    "Skeletal Muscle Mass",
                    ValueFormat::OneDecimal,
                ),
                SubFilter::Ratio => metric(
                    muscle_ratio(user),
                    "%",
                    "Skeletal Muscle Ratio",
                    ValueFormat::TwoDecimals,
                ),
                _ => self.discipline_score(user, Discipline::Muscle, "Muscle Score"),
            },
            Dimension::ArmSize => metric(
                stat(user.arm_size()),
                "cm",
                "Arm Size",
                ValueFormat::OneDecimal,
            ),
        }
    }

    fn overall(&self, user: &UserRecord, label: &str) -> DisplayMetric {
        let outcome = heal_ladder_score(&self.engine, user);
        let value = final_guard(
            outcome.value(),
            ladder_corroborated(user),
            self.engine.profile(),
        );
        DisplayMetric {
            sub_info: outcome.note(),
            ..metric(value, "pts", label, ValueFormat::TwoDecimals)
        }
    }

    fn discipline_score(&self, user: &UserRecord, discipline: Discipline, label: &str) -> DisplayMetric {
        let outcome = heal_discipline_score(&self.engine, user, discipline);
        let value = final_guard(
            outcome.value(),
            discipline_corroborated(user, discipline),
            self.engine.profile(),
        );
        DisplayMetric {
            sub_info: outcome.note(),
            ..metric(value, "pts", label, ValueFormat::TwoDecimals)
        }
    }

    fn strength(&self, user: &UserRecord, sub: SubFilter) -> DisplayMetric {
        if sub == SubFilter::Score {
            return self.discipline_score(user, Discipline::Strength, "Strength Score");
        }
        let total = user.stats_sbd_total.unwrap_or(0.0);
        // Individual lifts fall back to the SBD total when not recorded.
        let lift = |value: Option<f64>| value.filter(|v| *v > 0.0).unwrap_or(total);
        let (value, label) = match sub {
            SubFilter::TotalFive => (
                total + user.stats_ohp.unwrap_or(0.0) + user.stats_lat_pull.unwrap_or(0.0),
                "Five-Lift Total",
            ),
            SubFilter::Squat => (lift(user.stats_squat), "Squat"),
            SubFilter::Bench => (lift(user.stats_bench), "Bench Press"),
            SubFilter::Deadlift => (lift(user.stats_deadlift), "Deadlift"),
            SubFilter::Ohp => (lift(user.stats_ohp), "Overhead Press"),
            SubFilter::LatPull => (lift(user.stats_lat_pull), "Lat Pulldown"),
            _ => (total, "SBD Total"),
        };
        DisplayMetric {
            sub_info: user
                .weight
                .filter(|w| *w > 0.0)
                .map(|w| format!("BW: {w}kg")),
            ..metric(Some(value), "kg", label, ValueFormat::OneDecimal)
        }
    }
}

/// Skeletal-muscle share of body weight; absent when either side is unusable.
fn muscle_ratio(user: &UserRecord) -> Option<f64> {
    let smm = user
        .stats_smm
        .or(user.test_inputs.muscle.smm)
        .filter(|v| *v > 0.0)?;
    let weight = user
        .test_inputs
        .muscle
        .weight
        .or(user.weight)
        .filter(|v| *v > 0.0)?;
    Some(round2(smm / weight * 100.0))
}
