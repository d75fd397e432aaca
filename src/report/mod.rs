pub mod json;
pub mod text;

use crate::ladder::{Dimension, RankedRow, SortOrder, SubFilter};
use crate::model::athlete::Gender;
use crate::model::discipline::{Discipline, MetricId};
use crate::standards::StandardTable;

#[derive(Debug, Clone)]
pub struct LadderReport<'a> {
    pub dimension: Dimension,
    pub sub_filter: SubFilter,
    pub order: SortOrder,
    pub rows: &'a [RankedRow<'a>],
}

#[derive(Debug, Clone)]
pub struct StandardsReport {
    pub discipline: Discipline,
    pub bracket: &'static str,
    pub gender: Gender,
    pub tables: Vec<(MetricId, StandardTable)>,
}

pub fn format_score(value: f64) -> String {
    format!("{value:.2}")
}

/// Trims trailing zeros: `22.00` -> `22`, `20.125` stays.
pub fn format_threshold(value: f64) -> String {
    let text = format!("{value:.3}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
