use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::athlete::{Athlete, Gender};
use crate::model::discipline::{Discipline, MetricId};
use crate::model::measurement::Measurement;

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityResult {
    pub display_score: f64,
    pub is_capped: bool,
}

/// A score together with what may be published for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatedScore {
    pub raw: f64,
    pub visibility: VisibilityResult,
}

impl GatedScore {
    pub fn persisted(&self) -> f64 {
        self.visibility.display_score
    }

    pub fn is_capped(&self) -> bool {
        self.visibility.is_capped
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricScore {
    pub metric: MetricId,
    pub value: f64,
    pub score: GatedScore,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub discipline: Discipline,
    pub bracket: &'static str,
    pub gender: Gender,
    pub verified: bool,
    pub metrics: Vec<MetricScore>,
    pub composite: GatedScore,
}

impl Assessment {
    pub fn metric(&self, metric: MetricId) -> Option<&MetricScore> {
        self.metrics.iter().find(|m| m.metric == metric)
    }

    pub fn persist_bundle(&self, athlete: &Athlete, measurement: &Measurement) -> PersistBundle {
        let sub_scores_to_persist = self
            .metrics
            .iter()
            .map(|m| {
                (
                    m.metric.as_str().to_string(),
                    PersistedScore {
                        score: m.score.persisted(),
                        was_capped: m.score.is_capped(),
                    },
                )
            })
            .collect();
        PersistBundle {
            discipline: self.discipline,
            score_key: self.discipline.score_key(),
            final_score_to_persist: self.composite.persisted(),
            final_was_capped: self.composite.is_capped(),
            sub_scores_to_persist,
            athlete: athlete.clone(),
            inputs: measurement.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedScore {
    pub score: f64,
    pub was_capped: bool,
}

/// Everything the persistence collaborator stores for one submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistBundle {
    pub discipline: Discipline,
    pub score_key: &'static str,
    pub final_score_to_persist: f64,
    pub final_was_capped: bool,
    pub sub_scores_to_persist: BTreeMap<String, PersistedScore>,
    pub athlete: Athlete,
    pub inputs: Measurement,
}
