//! Self-heal for persisted scores of exactly 100.
//!
//! Older clients clamped unverified scores to 100 before storing them, so a
//! stored 100 may be a real result or a clamp artefact. Where the record
//! carries the raw inputs, the score is recomputed with the same engine that
//! produces new submissions; otherwise a bare 100 is hidden.

use tracing::debug;

use crate::engine::ScoreEngine;
use crate::input::UserRecord;
use crate::model::discipline::Discipline;
use crate::model::profile::ScoringProfile;
use crate::pipeline::stage4_aggregate::ladder_score;
use crate::pipeline::stage5_gate::{HONOR_CEILING, gate};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HealOutcome {
    /// No score stored.
    Missing,
    Trusted(f64),
    Recomputed(f64),
    /// Suspicious and not recomputable.
    Hidden,
}

impl HealOutcome {
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Trusted(v) | Self::Recomputed(v) => Some(v),
            Self::Missing | Self::Hidden => None,
        }
    }

    pub fn note(self) -> Option<String> {
        match self {
            Self::Recomputed(_) => Some("recalculated from raw inputs".to_string()),
            Self::Hidden => Some("score unavailable".to_string()),
            Self::Missing | Self::Trusted(_) => None,
        }
    }
}

pub fn is_suspicious(score: f64, profile: &ScoringProfile) -> bool {
    (score - HONOR_CEILING).abs() <= profile.suspicious_epsilon
}

/// Publishable composite for `discipline` from the record's raw inputs.
pub fn recompute_discipline(
    engine: &ScoreEngine,
    user: &UserRecord,
    discipline: Discipline,
) -> Option<f64> {
    let (athlete, measurement) = user.recompute_inputs(discipline)?;
    match engine.score(&athlete, &measurement) {
        Ok(assessment) => Some(assessment.composite.persisted()),
        Err(err) => {
            debug!(user = user.label(), discipline = %discipline, error = %err, "recompute failed");
            None
        }
    }
}

pub fn heal_discipline_score(
    engine: &ScoreEngine,
    user: &UserRecord,
    discipline: Discipline,
) -> HealOutcome {
    let profile = engine.profile();
    let Some(stored) = user.stored_score(discipline) else {
        return HealOutcome::Missing;
    };
    if !is_suspicious(stored, profile) || user.cap_flag(discipline) == Some(false) {
        return HealOutcome::Trusted(stored);
    }
    match recompute_discipline(engine, user, discipline) {
        Some(recomputed) if !is_suspicious(recomputed, profile) => {
            debug!(
                user = user.label(),
                discipline = %discipline,
                stored,
                recomputed,
                "replaced suspicious score"
            );
            HealOutcome::Recomputed(recomputed)
        }
        Some(_) => HealOutcome::Trusted(stored),
        None => HealOutcome::Hidden,
    }
}

pub fn heal_ladder_score(engine: &ScoreEngine, user: &UserRecord) -> HealOutcome {
    let profile = engine.profile();
    let Some(stored) = user.ladder_score else {
        return HealOutcome::Missing;
    };
    if !is_suspicious(stored, profile) || user.score_caps.ladder_score == Some(false) {
        return HealOutcome::Trusted(stored);
    }
    let components: Vec<Option<f64>> = Discipline::CORE
        .iter()
        .map(|d| heal_discipline_score(engine, user, *d).value())
        .collect();
    match ladder_score(&components) {
        Some(average) => {
            let shown = gate(average, user.is_verified).display_score;
            if is_suspicious(shown, profile) {
                HealOutcome::Trusted(stored)
            } else {
                HealOutcome::Recomputed(shown)
            }
        }
        None => HealOutcome::Hidden,
    }
}

/// Whether a stored score of 100 for `discipline` is backed by anything.
pub fn discipline_corroborated(user: &UserRecord, discipline: Discipline) -> bool {
    user.cap_flag(discipline) == Some(false) || user.has_raw_inputs(discipline)
}

pub fn ladder_corroborated(user: &UserRecord) -> bool {
    user.score_caps.ladder_score == Some(false)
        || Discipline::CORE
            .iter()
            .all(|d| user.stored_score(*d).is_some())
}

/// Last check before a score leaves the resolver: an uncorroborated 100 is never shown.
pub fn final_guard(value: Option<f64>, corroborated: bool, profile: &ScoringProfile) -> Option<f64> {
    match value {
        Some(v) if is_suspicious(v, profile) && !corroborated => None,
        other => other,
    }
}
