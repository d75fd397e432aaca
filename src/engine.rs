use thiserror::Error;
use tracing::debug;

use crate::model::athlete::{Athlete, Gender};
use crate::model::discipline::{Discipline, MetricId};
use crate::model::measurement::Measurement;
use crate::model::profile::ScoringProfile;
use crate::model::scores::{Assessment, MetricScore};
use crate::pipeline::stage1_bracket::resolve_bracket;
use crate::pipeline::stage2_derive::derive_values;
use crate::pipeline::stage3_interpolate::interpolate;
use crate::pipeline::stage4_aggregate::{aggregate, amplify};
use crate::pipeline::stage5_gate::gated;
use crate::standards::lookup_table;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    #[error("missing input: {0}")]
    MissingInput(&'static str),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("age {age} has no {discipline} bracket")]
    UnmappedAge { discipline: Discipline, age: u32 },
    #[error("no {metric} standard for bracket {bracket} ({gender})")]
    StandardNotFound {
        metric: MetricId,
        bracket: &'static str,
        gender: Gender,
    },
}

/// The single scoring path shared by submissions and leaderboard recomputation.
#[derive(Debug, Clone, Default)]
pub struct ScoreEngine {
    profile: ScoringProfile,
}

impl ScoreEngine {
    pub fn new(profile: ScoringProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &ScoringProfile {
        &self.profile
    }

    pub fn score(
        &self,
        athlete: &Athlete,
        measurement: &Measurement,
    ) -> Result<Assessment, ScoreError> {
        let discipline = measurement.discipline();
        let gender = athlete.gender.ok_or(ScoreError::MissingInput("gender"))?;
        let age = athlete.age.ok_or(ScoreError::MissingInput("age"))?;
        let bracket = resolve_bracket(discipline, age)?;
        let derived = derive_values(measurement, athlete, &self.profile)?;

        let mut metrics = Vec::with_capacity(derived.len());
        for value in derived {
            let table = lookup_table(value.metric, bracket, gender).ok_or(
                ScoreError::StandardNotFound {
                    metric: value.metric,
                    bracket: bracket.key,
                    gender,
                },
            )?;
            let raw = amplify(
                value.metric,
                interpolate(value.value, &table, &self.profile),
                &self.profile,
            );
            metrics.push(MetricScore {
                metric: value.metric,
                value: value.value,
                score: gated(raw, athlete.verified),
            });
        }

        // Raw sub-scores are averaged; the gate applies to the composite afterwards.
        let composite_raw = aggregate(metrics.iter().map(|m| Some(m.score.raw)))
            .ok_or(ScoreError::MissingInput("measurement"))?;
        let composite = gated(composite_raw, athlete.verified);

        debug!(
            discipline = %discipline,
            bracket = bracket.key,
            gender = %gender,
            raw = composite.raw,
            persisted = composite.persisted(),
            capped = composite.is_capped(),
            "scored assessment"
        );

        Ok(Assessment {
            discipline,
            bracket: bracket.key,
            gender,
            verified: athlete.verified,
            metrics,
            composite,
        })
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/engine/tests.rs"]
mod tests;
