use serde_json::{Value, json};

use crate::model::scores::{Assessment, PersistBundle};
use crate::report::{LadderReport, StandardsReport};

pub fn render_assessment_json(
    assessment: &Assessment,
    bundle: &PersistBundle,
) -> Result<String, serde_json::Error> {
    let value = json!({
        "tool": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "assessment": assessment,
        "persist": bundle,
    });
    serde_json::to_string_pretty(&value)
}

pub fn render_ladder_json(report: &LadderReport<'_>) -> Result<String, serde_json::Error> {
    let rows: Vec<Value> = report
        .rows
        .iter()
        .map(|row| {
            json!({
                "rank": row.rank,
                "id": row.record.id,
                "name": row.record.label(),
                "display": row.metric.formatted(),
                "metric": row.metric,
            })
        })
        .collect();
    let value = json!({
        "dimension": report.dimension.as_str(),
        "subFilter": report.sub_filter,
        "order": report.order,
        "rows": rows,
    });
    serde_json::to_string_pretty(&value)
}

pub fn render_standards_json(report: &StandardsReport) -> Result<String, serde_json::Error> {
    let tables: Vec<Value> = report
        .tables
        .iter()
        .map(|(metric, table)| {
            json!({
                "metric": metric,
                "direction": table.direction(),
                "thresholds": table.values(),
            })
        })
        .collect();
    let value = json!({
        "discipline": report.discipline,
        "bracket": report.bracket,
        "gender": report.gender,
        "tables": tables,
    });
    serde_json::to_string_pretty(&value)
}
