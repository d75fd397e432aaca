use crate::model::scores::{Assessment, GatedScore};
use crate::report::{LadderReport, StandardsReport, format_score, format_threshold};
use crate::standards::PERCENTILE_KEYS;

fn score_cell(score: &GatedScore) -> String {
    if score.is_capped() {
        format!(
            "{} (published as {}, honor lock)",
            format_score(score.raw),
            format_score(score.persisted())
        )
    } else {
        format_score(score.raw)
    }
}

pub fn render_assessment_text(assessment: &Assessment) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} assessment ({}, {}, bracket {})\n",
        assessment.discipline,
        assessment.gender,
        if assessment.verified {
            "verified"
        } else {
            "unverified"
        },
        assessment.bracket
    ));
    for metric in &assessment.metrics {
        out.push_str(&format!(
            "  {:<22} {:>10.2} {:<6} score {}\n",
            metric.metric.as_str(),
            metric.value,
            metric.metric.unit(),
            score_cell(&metric.score)
        ));
    }
    out.push_str(&format!("Composite: {}\n", score_cell(&assessment.composite)));
    out
}

pub fn render_ladder_text(report: &LadderReport<'_>) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Leaderboard: {} / {:?} ({:?})\n",
        report.dimension.as_str(),
        report.sub_filter,
        report.order
    ));
    for row in report.rows {
        let unit = if row.metric.value.is_some() {
            row.metric.unit
        } else {
            ""
        };
        out.push_str(&format!(
            "{:>4}. {:<24} {:>12} {}",
            row.rank,
            row.record.label(),
            row.metric.formatted(),
            unit
        ));
        if let Some(info) = &row.metric.sub_info {
            out.push_str(&format!("  [{info}]"));
        }
        out.push('\n');
    }
    out
}

pub fn render_standards_text(report: &StandardsReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} standards, bracket {}, {}\n",
        report.discipline, report.bracket, report.gender
    ));
    out.push_str(&format!("{:<22}", "percentile"));
    for key in PERCENTILE_KEYS {
        out.push_str(&format!("{key:>9}"));
    }
    out.push('\n');
    for (metric, table) in &report.tables {
        out.push_str(&format!("{:<22}", metric.as_str()));
        for value in table.values() {
            out.push_str(&format!("{:>9}", format_threshold(*value)));
        }
        out.push('\n');
    }
    out
}
