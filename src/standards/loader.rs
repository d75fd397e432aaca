use crate::model::athlete::Gender;
use crate::model::discipline::MetricId;
use crate::standards::StandardTable;
use crate::standards::brackets::AgeBracket;
use crate::standards::defs::{ANY_BRACKET, MetricStandards, builtin_standards};

pub fn metric_standards(metric: MetricId) -> Option<&'static MetricStandards> {
    builtin_standards().iter().find(|s| s.metric == metric)
}

/// Table for `(metric, bracket, gender)`, or `None` when the reference data has a gap.
pub fn lookup_table(
    metric: MetricId,
    bracket: &AgeBracket,
    gender: Gender,
) -> Option<StandardTable> {
    let standards = metric_standards(metric)?;
    let row = standards
        .rows
        .iter()
        .find(|row| row.bracket == bracket.key || row.bracket == ANY_BRACKET)?;
    let values = match gender {
        Gender::Male => row.male,
        Gender::Female => row.female,
    };
    Some(StandardTable::from_values(values, standards.direction))
}
