use std::cmp::Ordering;

use serde::Serialize;

use crate::input::UserRecord;
use crate::ladder::{Dimension, DisplayMetric, Resolver, SubFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Times and body fat rank lowest first; everything else highest first.
pub fn sort_order(dimension: Dimension, sub: SubFilter) -> SortOrder {
    match (dimension, sub) {
        (Dimension::Cardio, SubFilter::Run5k)
        | (Dimension::Power, SubFilter::Sprint)
        | (Dimension::BodyFat, SubFilter::BodyFat) => SortOrder::Ascending,
        _ => SortOrder::Descending,
    }
}

#[derive(Debug, Clone)]
pub struct RankedRow<'a> {
    pub rank: usize,
    pub record: &'a UserRecord,
    pub metric: DisplayMetric,
}

pub fn rank_records<'a>(
    resolver: &Resolver,
    records: &'a [UserRecord],
    dimension: Dimension,
    sub: SubFilter,
) -> Vec<RankedRow<'a>> {
    let order = sort_order(dimension, sub);
    let mut rows: Vec<(&'a UserRecord, DisplayMetric)> = records
        .iter()
        .map(|record| (record, resolver.resolve(record, dimension, sub)))
        .collect();
    rows.sort_by(|a, b| compare(a.1.value, b.1.value, order));
    rows.into_iter()
        .enumerate()
        .map(|(idx, (record, metric))| RankedRow {
            rank: idx + 1,
            record,
            metric,
        })
        .collect()
}

// For ascending metrics a value of 0 or less is not a valid result.
fn sort_key(value: Option<f64>, order: SortOrder) -> Option<f64> {
    match order {
        SortOrder::Ascending => value.filter(|v| *v > 0.0),
        SortOrder::Descending => value,
    }
}

fn compare(a: Option<f64>, b: Option<f64>, order: SortOrder) -> Ordering {
    match (sort_key(a, order), sort_key(b, order)) {
        (Some(x), Some(y)) => match order {
            SortOrder::Ascending => x.total_cmp(&y),
            SortOrder::Descending => y.total_cmp(&x),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
