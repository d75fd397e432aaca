use crate::model::profile::ScoringProfile;
use crate::model::scores::round2;
use crate::standards::{Direction, PERCENTILE_KEYS, StandardTable};

/// Percentile score of `value` against `table`, rounded to two decimals.
///
/// Values past the 100th-percentile threshold keep earning points at the slope
/// of the last segment ("limit break"); above `soft_cap_start` that gain is
/// scaled by `soft_cap_factor`.
pub fn interpolate(value: f64, table: &StandardTable, profile: &ScoringProfile) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let t = table.oriented();
    let value = match table.direction() {
        Direction::HigherIsBetter => value,
        Direction::LowerIsBetter => -value,
    };

    if value >= t[10] {
        return round2(limit_break(value, t[9], t[10], profile));
    }
    if value <= t[0] {
        return 0.0;
    }

    for idx in 1..t.len() {
        if value < t[idx] {
            let upper = f64::from(PERCENTILE_KEYS[idx]);
            let lower = f64::from(PERCENTILE_KEYS[idx - 1]);
            let span = t[idx] - t[idx - 1];
            if span == 0.0 {
                return upper;
            }
            return round2(lower + (value - t[idx - 1]) / span * (upper - lower));
        }
    }
    100.0
}

fn limit_break(value: f64, t90: f64, t100: f64, profile: &ScoringProfile) -> f64 {
    let diff = t100 - t90;
    let slope = if diff > 0.0 { 10.0 / diff } else { 0.0 };
    let extended = 100.0 + (value - t100) * slope;
    soft_cap(extended, profile)
}

pub fn soft_cap(extended: f64, profile: &ScoringProfile) -> f64 {
    if extended > profile.soft_cap_start {
        profile.soft_cap_start + (extended - profile.soft_cap_start) * profile.soft_cap_factor
    } else {
        extended
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_interpolate.rs"]
mod tests;
