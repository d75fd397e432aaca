use crate::model::discipline::Discipline;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBracket {
    pub key: &'static str,
    pub min: u32,
    pub max: u32,
}

impl AgeBracket {
    pub const fn new(key: &'static str, min: u32, max: u32) -> Self {
        Self { key, min, max }
    }

    pub fn contains(&self, age: u32) -> bool {
        age >= self.min && age <= self.max
    }
}

/// Key of the single bracket used by disciplines without age-specific tables.
pub const OPEN_BRACKET_KEY: &str = "all";

const MUSCLE_BRACKETS: &[AgeBracket] = &[
    AgeBracket::new("10-12", 10, 12),
    AgeBracket::new("13-17", 13, 17),
    AgeBracket::new("18-30", 18, 30),
    AgeBracket::new("31-40", 31, 40),
    AgeBracket::new("41-50", 41, 50),
    AgeBracket::new("51-60", 51, 60),
    AgeBracket::new("61-70", 61, 70),
    AgeBracket::new("71-80", 71, 80),
];

const POWER_BRACKETS: &[AgeBracket] = &[
    AgeBracket::new("12-15", 12, 15),
    AgeBracket::new("16-20", 16, 20),
    AgeBracket::new("21-30", 21, 30),
    AgeBracket::new("31-40", 31, 40),
    AgeBracket::new("41-50", 41, 50),
    AgeBracket::new("51-60", 51, 60),
    AgeBracket::new("61-70", 61, 70),
    AgeBracket::new("71-80", 71, 80),
];

// The 20-29 group only ever applies from 21, since 20 is claimed by 17-20.
const CARDIO_BRACKETS: &[AgeBracket] = &[
    AgeBracket::new("13-14", 13, 14),
    AgeBracket::new("15-16", 15, 16),
    AgeBracket::new("17-20", 17, 20),
    AgeBracket::new("21-29", 21, 29),
    AgeBracket::new("30-39", 30, 39),
    AgeBracket::new("40-49", 40, 49),
    AgeBracket::new("50+", 50, 120),
];

const OPEN_BRACKETS: &[AgeBracket] = &[AgeBracket::new(OPEN_BRACKET_KEY, 0, 150)];

pub fn bracket_set(discipline: Discipline) -> &'static [AgeBracket] {
    match discipline {
        Discipline::Muscle | Discipline::Ffmi => MUSCLE_BRACKETS,
        Discipline::Power => POWER_BRACKETS,
        Discipline::Cardio => CARDIO_BRACKETS,
        Discipline::Strength | Discipline::Run5k => OPEN_BRACKETS,
    }
}
