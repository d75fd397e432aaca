pub mod heal;
pub mod rank;
pub mod resolve;

use serde::Serialize;

pub use rank::{RankedRow, SortOrder, rank_records};
pub use resolve::Resolver;

/// Rendered in place of a value that cannot be shown.
pub const PLACEHOLDER: &str = "--";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Overall,
    LoginDays,
    Strength,
    BodyFat,
    Cardio,
    Power,
    Muscle,
    LocalRank,
    ArmSize,
}

impl Dimension {
    pub const ALL: [Dimension; 9] = [
        Dimension::Overall,
        Dimension::LoginDays,
        Dimension::Strength,
        Dimension::BodyFat,
        Dimension::Cardio,
        Dimension::Power,
        Dimension::Muscle,
        Dimension::LocalRank,
        Dimension::ArmSize,
    ];

    /// Accepts both the stored field keys and short names.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "ladderScore" | "overall" => Some(Self::Overall),
            "stats_totalLoginDays" | "login_days" | "logins" => Some(Self::LoginDays),
            "stats_sbdTotal" | "strength" => Some(Self::Strength),
            "stats_bodyFat" | "body_fat" | "bodyfat" => Some(Self::BodyFat),
            "stats_cooper" | "cardio" => Some(Self::Cardio),
            "stats_vertical" | "power" | "explosive" => Some(Self::Power),
            "stats_ffmi" | "muscle" => Some(Self::Muscle),
            "local_district" | "local" => Some(Self::LocalRank),
            "stats_armSize" | "arm_size" | "arm" => Some(Self::ArmSize),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Overall => "ladderScore",
            Self::LoginDays => "stats_totalLoginDays",
            Self::Strength => "stats_sbdTotal",
            Self::BodyFat => "stats_bodyFat",
            Self::Cardio => "stats_cooper",
            Self::Power => "stats_vertical",
            Self::Muscle => "stats_ffmi",
            Self::LocalRank => "local_district",
            Self::ArmSize => "stats_armSize",
        }
    }

    /// Sub-filters offered for the dimension; the first is the default.
    pub fn sub_filters(self) -> &'static [SubFilter] {
        match self {
            Self::Overall | Self::LocalRank | Self::LoginDays | Self::ArmSize => &[SubFilter::Total],
            Self::Strength => &[
                SubFilter::Total,
                SubFilter::TotalFive,
                SubFilter::Squat,
                SubFilter::Bench,
                SubFilter::Deadlift,
                SubFilter::Ohp,
                SubFilter::LatPull,
                SubFilter::Score,
            ],
            Self::BodyFat => &[SubFilter::BodyFat, SubFilter::Ffmi, SubFilter::Score],
            Self::Cardio => &[SubFilter::Cooper, SubFilter::Run5k, SubFilter::Score],
            Self::Power => &[
                SubFilter::Vertical,
                SubFilter::Broad,
                SubFilter::Sprint,
                SubFilter::Score,
            ],
            Self::Muscle => &[SubFilter::Score, SubFilter::Weight, SubFilter::Ratio],
        }
    }

    pub fn default_sub_filter(self) -> SubFilter {
        self.sub_filters()[0]
    }

    /// Unknown or foreign sub-filters fall back to the default.
    pub fn sub_filter(self, value: Option<&str>) -> SubFilter {
        value
            .and_then(SubFilter::parse)
            .filter(|sub| self.sub_filters().contains(sub))
            .unwrap_or_else(|| self.default_sub_filter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubFilter {
    Total,
    TotalFive,
    Squat,
    Bench,
    Deadlift,
    Ohp,
    LatPull,
    BodyFat,
    Ffmi,
    Cooper,
    Run5k,
    Vertical,
    Broad,
    Sprint,
    Weight,
    Ratio,
    Score,
}

impl SubFilter {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "total" => Some(Self::Total),
            "total_five" => Some(Self::TotalFive),
            "squat" => Some(Self::Squat),
            "bench" => Some(Self::Bench),
            "deadlift" => Some(Self::Deadlift),
            "ohp" => Some(Self::Ohp),
            "latPull" | "lat_pull" => Some(Self::LatPull),
            "bodyFat" | "body_fat" => Some(Self::BodyFat),
            "ffmi" => Some(Self::Ffmi),
            "cooper" => Some(Self::Cooper),
            "5km" | "5k" => Some(Self::Run5k),
            "vertical" => Some(Self::Vertical),
            "broad" => Some(Self::Broad),
            "sprint" => Some(Self::Sprint),
            "weight" => Some(Self::Weight),
            "ratio" => Some(Self::Ratio),
            "score" => Some(Self::Score),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFormat {
    Integer,
    OneDecimal,
    TwoDecimals,
    /// Metres shown as kilometres.
    Kilometers,
    /// Seconds shown as `m:ss`.
    MinutesSeconds,
}

impl ValueFormat {
    pub fn render(self, value: Option<f64>) -> String {
        let Some(value) = value.filter(|v| v.is_finite()) else {
            return PLACEHOLDER.to_string();
        };
        match self {
            Self::Integer => group_thousands(value.floor() as i64),
            Self::OneDecimal => format!("{value:.1}"),
            Self::TwoDecimals => format!("{value:.2}"),
            Self::Kilometers => format!("{:.2}", value / 1000.0),
            Self::MinutesSeconds => {
                let total = value.max(0.0).floor() as u64;
                format!("{}:{:02}", total / 60, total % 60)
            }
        }
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// What a leaderboard row shows for the selected dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayMetric {
    pub value: Option<f64>,
    pub unit: &'static str,
    pub label: String,
    pub format: ValueFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_info: Option<String>,
}

impl DisplayMetric {
    pub fn formatted(&self) -> String {
        self.format.render(self.value)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/ladder/tests.rs"]
mod tests;
