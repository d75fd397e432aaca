use crate::model::scores::{GatedScore, VisibilityResult, round2};

/// Highest score an unverified athlete may publish.
pub const HONOR_CEILING: f64 = 100.0;

/// Honor lock: unverified scores above the ceiling are persisted as exactly the ceiling.
pub fn gate(raw: f64, verified: bool) -> VisibilityResult {
    let rounded = round2(raw);
    if !verified && rounded > HONOR_CEILING {
        VisibilityResult {
            display_score: HONOR_CEILING,
            is_capped: true,
        }
    } else {
        VisibilityResult {
            display_score: rounded,
            is_capped: false,
        }
    }
}

pub fn gated(raw: f64, verified: bool) -> GatedScore {
    GatedScore {
        raw: round2(raw),
        visibility: gate(raw, verified),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_gate.rs"]
mod tests;
