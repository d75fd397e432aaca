use crate::model::discipline::MetricId;
use crate::standards::Direction;
use crate::standards::brackets::OPEN_BRACKET_KEY;

/// Row key matching every bracket of the discipline.
pub const ANY_BRACKET: &str = "*";

#[derive(Debug, Clone, Copy)]
pub struct BracketRow {
    pub bracket: &'static str,
    pub male: [f64; 11],
    pub female: [f64; 11],
}

#[derive(Debug, Clone, Copy)]
pub struct MetricStandards {
    pub metric: MetricId,
    pub direction: Direction,
    pub rows: &'static [BracketRow],
}

const fn row(bracket: &'static str, male: [f64; 11], female: [f64; 11]) -> BracketRow {
    BracketRow {
        bracket,
        male,
        female,
    }
}

const fn unisex(bracket: &'static str, values: [f64; 11]) -> BracketRow {
    row(bracket, values, values)
}

// Skeletal-muscle mass, kg.
const SMM: &[BracketRow] = &[
    row(
        "10-12",
        [6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0, 24.0, 26.0],
        [8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0],
    ),
    row(
        "13-17",
        [16.0, 18.0, 20.0, 22.0, 24.0, 26.0, 28.0, 30.0, 32.0, 34.0, 36.0],
        [14.0, 15.0, 16.0, 17.0, 18.0, 19.0, 20.0, 21.0, 22.0, 23.0, 24.0],
    ),
    row(
        "18-30",
        [22.0, 24.0, 26.0, 28.0, 30.0, 32.0, 34.0, 36.0, 38.0, 40.0, 42.0],
        [18.0, 19.0, 20.0, 21.0, 22.0, 23.0, 24.0, 25.0, 26.0, 27.0, 28.0],
    ),
    row(
        "31-40",
        [20.0, 22.0, 24.0, 26.0, 28.0, 30.0, 32.0, 34.0, 36.0, 38.0, 40.0],
        [17.0, 18.0, 19.0, 20.0, 21.0, 22.0, 23.0, 24.0, 25.0, 26.0, 27.0],
    ),
    row(
        "41-50",
        [18.0, 20.0, 22.0, 24.0, 26.0, 28.0, 30.0, 32.0, 34.0, 36.0, 38.0],
        [16.0, 17.0, 18.0, 19.0, 20.0, 21.0, 22.0, 23.0, 24.0, 25.0, 26.0],
    ),
    row(
        "51-60",
        [16.0, 18.0, 20.0, 22.0, 24.0, 26.0, 28.0, 30.0, 32.0, 34.0, 36.0],
        [15.0, 16.0, 17.0, 18.0, 19.0, 20.0, 21.0, 22.0, 23.0, 24.0, 25.0],
    ),
    row(
        "61-70",
        [14.0, 16.0, 18.0, 20.0, 22.0, 24.0, 26.0, 28.0, 30.0, 32.0, 34.0],
        [14.0, 15.0, 16.0, 17.0, 18.0, 19.0, 20.0, 21.0, 22.0, 23.0, 24.0],
    ),
    row(
        "71-80",
        [12.0, 14.0, 16.0, 18.0, 20.0, 22.0, 24.0, 26.0, 28.0, 30.0, 32.0],
        [12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0, 19.0, 20.0, 21.0, 22.0],
    ),
];

// Skeletal-muscle share of body weight, %.
const SM_PERCENT: &[BracketRow] = &[
    row(
        "10-12",
        [24.0, 26.0, 28.0, 30.0, 32.0, 34.0, 36.0, 38.0, 40.0, 42.0, 44.0],
        [18.0, 20.0, 22.0, 24.0, 26.0, 28.0, 30.0, 32.0, 34.0, 36.0, 38.0],
    ),
    row(
        "13-17",
        [26.0, 28.0, 30.0, 32.0, 34.0, 36.0, 38.0, 40.0, 42.0, 44.0, 46.0],
        [20.0, 22.0, 24.0, 26.0, 28.0, 30.0, 32.0, 34.0, 36.0, 38.0, 40.0],
    ),
    row(
        "18-30",
        [28.0, 30.0, 32.0, 34.0, 36.0, 38.0, 40.0, 42.0, 44.0, 46.0, 48.0],
        [22.0, 24.0, 26.0, 28.0, 30.0, 32.0, 34.0, 36.0, 38.0, 40.0, 42.0],
    ),
    row(
        "31-40",
        [26.0, 28.0, 30.0, 32.0, 34.0, 36.0, 38.0, 40.0, 42.0, 44.0, 46.0],
        [20.0, 22.0, 24.0, 26.0, 28.0, 30.0, 32.0, 34.0, 36.0, 38.0, 40.0],
    ),
    row(
        "41-50",
        [24.0, 26.0, 28.0, 30.0, 32.0, 34.0, 36.0, 38.0, 40.0, 42.0, 44.0],
        [18.0, 20.0, 22.0, 24.0, 26.0, 28.0, 30.0, 32.0, 34.0, 36.0, 38.0],
    ),
    row(
        "51-60",
        [22.0, 24.0, 26.0, 28.0, 30.0, 32.0, 34.0, 36.0, 38.0, 40.0, 42.0],
        [16.0, 18.0, 20.0, 22.0, 24.0, 26.0, 28.0, 30.0, 32.0, 34.0, 36.0],
    ),
    row(
        "61-70",
        [20.0, 22.0, 24.0, 26.0, 28.0, 30.0, 32.0, 34.0, 36.0, 38.0, 40.0],
        [14.0, 16.0, 18.0, 20.0, 22.0, 24.0, 26.0, 28.0, 30.0, 32.0, 34.0],
    ),
    row(
        "71-80",
        [18.0, 20.0, 22.0, 24.0, 26.0, 28.0, 30.0, 32.0, 34.0, 36.0, 38.0],
        [12.0, 14.0, 16.0, 18.0, 20.0, 22.0, 24.0, 26.0, 28.0, 30.0, 32.0],
    ),
];

// FFMI: linear to 60 points at the base index, then 40 more points up to the max index.
const FFMI: &[BracketRow] = &[row(
    ANY_BRACKET,
    [
        0.0,
        18.5 / 6.0,
        18.5 * 2.0 / 6.0,
        18.5 * 3.0 / 6.0,
        18.5 * 4.0 / 6.0,
        18.5 * 5.0 / 6.0,
        18.5,
        20.125,
        21.75,
        23.375,
        25.0,
    ],
    [
        0.0,
        15.5 / 6.0,
        15.5 * 2.0 / 6.0,
        15.5 * 3.0 / 6.0,
        15.5 * 4.0 / 6.0,
        15.5 * 5.0 / 6.0,
        15.5,
        16.875,
        18.25,
        19.625,
        21.0,
    ],
)];

// Vertical jump, cm.
const VERTICAL_JUMP: &[BracketRow] = &[
    row(
        "12-15",
        [20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 55.0, 60.0, 65.0, 70.0],
        [16.0, 20.0, 24.0, 28.0, 32.0, 36.0, 40.0, 44.0, 48.0, 52.0, 56.0],
    ),
    row(
        "16-20",
        [26.0, 31.0, 36.0, 41.0, 46.0, 51.0, 56.0, 61.0, 66.0, 71.0, 76.0],
        [18.0, 22.0, 26.0, 30.0, 34.0, 38.0, 42.0, 46.0, 50.0, 54.0, 58.0],
    ),
    row(
        "21-30",
        [28.0, 33.0, 38.0, 43.0, 48.0, 53.0, 58.0, 63.0, 68.0, 73.0, 78.0],
        [20.0, 24.0, 28.0, 32.0, 36.0, 40.0, 44.0, 48.0, 52.0, 56.0, 60.0],
    ),
    row(
        "31-40",
        [25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 55.0, 60.0, 65.0, 70.0, 75.0],
        [18.0, 22.0, 26.0, 30.0, 34.0, 38.0, 42.0, 46.0, 50.0, 54.0, 58.0],
    ),
    row(
        "41-50",
        [22.0, 26.0, 30.0, 34.0, 38.0, 42.0, 46.0, 50.0, 54.0, 58.0, 62.0],
        [15.0, 19.0, 23.0, 27.0, 31.0, 35.0, 39.0, 43.0, 47.0, 51.0, 55.0],
    ),
    row(
        "51-60",
        [18.0, 22.0, 26.0, 30.0, 34.0, 38.0, 42.0, 46.0, 50.0, 54.0, 58.0],
        [12.0, 15.0, 18.0, 21.0, 24.0, 27.0, 30.0, 33.0, 36.0, 39.0, 42.0],
    ),
    row(
        "61-70",
        [14.0, 17.0, 20.0, 23.0, 26.0, 29.0, 32.0, 35.0, 38.0, 41.0, 44.0],
        [10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0, 24.0, 26.0, 28.0, 30.0],
    ),
    row(
        "71-80",
        [10.0, 13.0, 16.0, 19.0, 22.0, 25.0, 28.0, 31.0, 34.0, 37.0, 40.0],
        [8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0, 24.0, 26.0, 28.0],
    ),
];

// Standing long jump, cm.
const STANDING_LONG_JUMP: &[BracketRow] = &[
    row(
        "12-15",
        [120.0, 132.0, 144.0, 156.0, 168.0, 180.0, 192.0, 204.0, 216.0, 228.0, 240.0],
        [105.0, 115.0, 125.0, 135.0, 145.0, 155.0, 165.0, 175.0, 185.0, 195.0, 205.0],
    ),
    row(
        "16-20",
        [150.0, 162.0, 174.0, 186.0, 198.0, 210.0, 222.0, 234.0, 246.0, 258.0, 270.0],
        [120.0, 130.0, 140.0, 150.0, 160.0, 170.0, 180.0, 190.0, 200.0, 210.0, 220.0],
    ),
    row(
        "21-30",
        [165.0, 177.0, 189.0, 201.0, 213.0, 225.0, 237.0, 249.0, 261.0, 273.0, 285.0],
        [125.0, 135.0, 145.0, 155.0, 165.0, 175.0, 185.0, 195.0, 205.0, 215.0, 225.0],
    ),
    row(
        "31-40",
        [155.0, 166.0, 177.0, 188.0, 199.0, 210.0, 221.0, 232.0, 243.0, 254.0, 265.0],
        [118.0, 127.0, 136.0, 145.0, 154.0, 163.0, 172.0, 181.0, 190.0, 199.0, 208.0],
    ),
    row(
        "41-50",
        [140.0, 150.0, 160.0, 170.0, 180.0, 190.0, 200.0, 210.0, 220.0, 230.0, 240.0],
        [105.0, 113.0, 121.0, 129.0, 137.0, 145.0, 153.0, 161.0, 169.0, 177.0, 185.0],
    ),
    row(
        "51-60",
        [125.0, 134.0, 143.0, 152.0, 161.0, 170.0, 179.0, 188.0, 197.0, 206.0, 215.0],
        [92.0, 99.0, 106.0, 113.0, 120.0, 127.0, 134.0, 141.0, 148.0, 155.0, 162.0],
    ),
    row(
        "61-70",
        [105.0, 113.0, 121.0, 129.0, 137.0, 145.0, 153.0, 161.0, 169.0, 177.0, 185.0],
        [78.0, 84.0, 90.0, 96.0, 102.0, 108.0, 114.0, 120.0, 126.0, 132.0, 138.0],
    ),
    row(
        "71-80",
        [85.0, 92.0, 99.0, 106.0, 113.0, 120.0, 127.0, 134.0, 141.0, 148.0, 155.0],
        [62.0, 67.0, 72.0, 77.0, 82.0, 87.0, 92.0, 97.0, 102.0, 107.0, 112.0],
    ),
];

// 100 m sprint, seconds. Lower is better, so values fall with percentile.
const SPRINT: &[BracketRow] = &[
    row(
        "12-15",
        [19.0, 18.4, 17.8, 17.2, 16.6, 16.0, 15.4, 14.8, 14.2, 13.6, 13.0],
        [21.0, 20.4, 19.8, 19.2, 18.6, 18.0, 17.4, 16.8, 16.2, 15.6, 15.0],
    ),
    row(
        "16-20",
        [17.0, 16.5, 16.0, 15.5, 15.0, 14.5, 14.0, 13.5, 13.0, 12.5, 12.0],
        [20.0, 19.4, 18.8, 18.2, 17.6, 17.0, 16.4, 15.8, 15.2, 14.6, 14.0],
    ),
    row(
        "21-30",
        [16.0, 15.5, 15.0, 14.5, 14.0, 13.5, 13.0, 12.5, 12.0, 11.5, 11.0],
        [19.5, 18.9, 18.3, 17.7, 17.1, 16.5, 15.9, 15.3, 14.7, 14.1, 13.5],
    ),
    row(
        "31-40",
        [17.0, 16.5, 16.0, 15.5, 15.0, 14.5, 14.0, 13.5, 13.0, 12.5, 12.0],
        [20.0, 19.4, 18.8, 18.2, 17.6, 17.0, 16.4, 15.8, 15.2, 14.6, 14.0],
    ),
    row(
        "41-50",
        [18.5, 17.9, 17.3, 16.7, 16.1, 15.5, 14.9, 14.3, 13.7, 13.1, 12.5],
        [21.5, 20.8, 20.1, 19.4, 18.7, 18.0, 17.3, 16.6, 15.9, 15.2, 14.5],
    ),
    row(
        "51-60",
        [20.0, 19.3, 18.6, 17.9, 17.2, 16.5, 15.8, 15.1, 14.4, 13.7, 13.0],
        [23.0, 22.2, 21.4, 20.6, 19.8, 19.0, 18.2, 17.4, 16.6, 15.8, 15.0],
    ),
    row(
        "61-70",
        [22.0, 21.2, 20.4, 19.6, 18.8, 18.0, 17.2, 16.4, 15.6, 14.8, 14.0],
        [25.0, 24.1, 23.2, 22.3, 21.4, 20.5, 19.6, 18.7, 17.8, 16.9, 16.0],
    ),
    row(
        "71-80",
        [25.0, 24.0, 23.0, 22.0, 21.0, 20.0, 19.0, 18.0, 17.0, 16.0, 15.0],
        [28.0, 27.0, 26.0, 25.0, 24.0, 23.0, 22.0, 21.0, 20.0, 19.0, 18.0],
    ),
];

// Cooper 12-minute run distance, metres.
const COOPER: &[BracketRow] = &[
    row(
        "13-14",
        [1500.0, 1620.0, 1740.0, 1860.0, 1980.0, 2100.0, 2220.0, 2340.0, 2460.0, 2580.0, 2700.0],
        [1300.0, 1410.0, 1520.0, 1630.0, 1740.0, 1850.0, 1960.0, 2070.0, 2180.0, 2290.0, 2400.0],
    ),
    row(
        "15-16",
        [1600.0, 1730.0, 1860.0, 1990.0, 2120.0, 2250.0, 2380.0, 2510.0, 2640.0, 2770.0, 2900.0],
        [1350.0, 1465.0, 1580.0, 1695.0, 1810.0, 1925.0, 2040.0, 2155.0, 2270.0, 2385.0, 2500.0],
    ),
    row(
        "17-20",
        [1700.0, 1840.0, 1980.0, 2120.0, 2260.0, 2400.0, 2540.0, 2680.0, 2820.0, 2960.0, 3100.0],
        [1400.0, 1520.0, 1640.0, 1760.0, 1880.0, 2000.0, 2120.0, 2240.0, 2360.0, 2480.0, 2600.0],
    ),
    row(
        "21-29",
        [1600.0, 1740.0, 1880.0, 2020.0, 2160.0, 2300.0, 2440.0, 2580.0, 2720.0, 2860.0, 3000.0],
        [1400.0, 1510.0, 1620.0, 1730.0, 1840.0, 1950.0, 2060.0, 2170.0, 2280.0, 2390.0, 2500.0],
    ),
    row(
        "30-39",
        [1500.0, 1630.0, 1760.0, 1890.0, 2020.0, 2150.0, 2280.0, 2410.0, 2540.0, 2670.0, 2800.0],
        [1300.0, 1405.0, 1510.0, 1615.0, 1720.0, 1825.0, 1930.0, 2035.0, 2140.0, 2245.0, 2350.0],
    ),
    row(
        "40-49",
        [1400.0, 1520.0, 1640.0, 1760.0, 1880.0, 2000.0, 2120.0, 2240.0, 2360.0, 2480.0, 2600.0],
        [1200.0, 1300.0, 1400.0, 1500.0, 1600.0, 1700.0, 1800.0, 1900.0, 2000.0, 2100.0, 2200.0],
    ),
    row(
        "50+",
        [1300.0, 1410.0, 1520.0, 1630.0, 1740.0, 1850.0, 1960.0, 2070.0, 2180.0, 2290.0, 2400.0],
        [1100.0, 1195.0, 1290.0, 1385.0, 1480.0, 1575.0, 1670.0, 1765.0, 1860.0, 1955.0, 2050.0],
    ),
];

// 5 km run, seconds: 45:00 scores 0, 20:00 scores 100.
const RUN_5K: &[BracketRow] = &[unisex(
    OPEN_BRACKET_KEY,
    [
        2700.0, 2550.0, 2400.0, 2250.0, 2100.0, 1950.0, 1800.0, 1650.0, 1500.0, 1350.0, 1200.0,
    ],
)];

pub const DEADLIFT_ANCHOR: f64 = 150.0;
pub const SQUAT_ANCHOR: f64 = 140.0;
pub const BENCH_PRESS_ANCHOR: f64 = 90.0;
pub const LAT_PULLDOWN_ANCHOR: f64 = 88.0;
pub const SHOULDER_PRESS_ANCHOR: f64 = 60.0;
pub const PULL_UP_ANCHOR: f64 = 88.0;

/// Age-corrected DOTS at each percentile: the anchor is the 100th percentile.
const fn anchor_row(anchor: f64) -> [BracketRow; 1] {
    [unisex(
        OPEN_BRACKET_KEY,
        [
            0.0,
            anchor * 0.1,
            anchor * 0.2,
            anchor * 0.3,
            anchor * 0.4,
            anchor * 0.5,
            anchor * 0.6,
            anchor * 0.7,
            anchor * 0.8,
            anchor * 0.9,
            anchor,
        ],
    )]
}

const SQUAT: &[BracketRow] = &anchor_row(SQUAT_ANCHOR);
const BENCH_PRESS: &[BracketRow] = &anchor_row(BENCH_PRESS_ANCHOR);
const DEADLIFT: &[BracketRow] = &anchor_row(DEADLIFT_ANCHOR);
const LAT_PULLDOWN: &[BracketRow] = &anchor_row(LAT_PULLDOWN_ANCHOR);
const SHOULDER_PRESS: &[BracketRow] = &anchor_row(SHOULDER_PRESS_ANCHOR);
const PULL_UP: &[BracketRow] = &anchor_row(PULL_UP_ANCHOR);

const fn higher(metric: MetricId, rows: &'static [BracketRow]) -> MetricStandards {
    MetricStandards {
        metric,
        direction: Direction::HigherIsBetter,
        rows,
    }
}

const fn lower(metric: MetricId, rows: &'static [BracketRow]) -> MetricStandards {
    MetricStandards {
        metric,
        direction: Direction::LowerIsBetter,
        rows,
    }
}

const BUILTIN_STANDARDS: &[MetricStandards] = &[
    higher(MetricId::Squat, SQUAT),
    higher(MetricId::BenchPress, BENCH_PRESS),
    higher(MetricId::Deadlift, DEADLIFT),
    higher(MetricId::LatPulldown, LAT_PULLDOWN),
    higher(MetricId::ShoulderPress, SHOULDER_PRESS),
    higher(MetricId::PullUp, PULL_UP),
    higher(MetricId::VerticalJump, VERTICAL_JUMP),
    higher(MetricId::StandingLongJump, STANDING_LONG_JUMP),
    lower(MetricId::Sprint, SPRINT),
    higher(MetricId::CooperDistance, COOPER),
    lower(MetricId::Run5kTime, RUN_5K),
    higher(MetricId::SkeletalMuscleMass, SMM),
    higher(MetricId::SkeletalMusclePercent, SM_PERCENT),
    higher(MetricId::Ffmi, FFMI),
];

pub fn builtin_standards() -> &'static [MetricStandards] {
    BUILTIN_STANDARDS
}

pub fn lift_anchor(metric: MetricId) -> Option<f64> {
    match metric {
        MetricId::Squat => Some(SQUAT_ANCHOR),
        MetricId::BenchPress => Some(BENCH_PRESS_ANCHOR),
        MetricId::Deadlift => Some(DEADLIFT_ANCHOR),
        MetricId::LatPulldown => Some(LAT_PULLDOWN_ANCHOR),
        MetricId::ShoulderPress => Some(SHOULDER_PRESS_ANCHOR),
        MetricId::PullUp => Some(PULL_UP_ANCHOR),
        _ => None,
    }
}
