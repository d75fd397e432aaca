pub mod brackets;
pub mod defs;
pub mod loader;

use serde::Serialize;
use thiserror::Error;

pub use brackets::{AgeBracket, bracket_set};
pub use loader::lookup_table;

pub const PERCENTILE_KEYS: [u32; 11] = [0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("threshold at percentile {percentile} is not finite")]
    NonFinite { percentile: u32 },
    #[error("threshold at percentile {percentile} breaks {direction:?} ordering")]
    NotMonotonic {
        percentile: u32,
        direction: Direction,
    },
}

/// Raw value expected at each percentile 0, 10, ..., 100 (index = percentile / 10).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StandardTable {
    values: [f64; 11],
    direction: Direction,
}

impl StandardTable {
    /// Unchecked constructor for the built-in reference data.
    pub const fn from_values(values: [f64; 11], direction: Direction) -> Self {
        Self { values, direction }
    }

    pub fn new(values: [f64; 11], direction: Direction) -> Result<Self, TableError> {
        let table = Self { values, direction };
        table.validate()?;
        Ok(table)
    }

    pub fn validate(&self) -> Result<(), TableError> {
        for (idx, value) in self.values.iter().enumerate() {
            if !value.is_finite() {
                return Err(TableError::NonFinite {
                    percentile: PERCENTILE_KEYS[idx],
                });
            }
        }
        for idx in 1..self.values.len() {
            let ordered = match self.direction {
                Direction::HigherIsBetter => self.values[idx] >= self.values[idx - 1],
                Direction::LowerIsBetter => self.values[idx] <= self.values[idx - 1],
            };
            if !ordered {
                return Err(TableError::NotMonotonic {
                    percentile: PERCENTILE_KEYS[idx],
                    direction: self.direction,
                });
            }
        }
        Ok(())
    }

    pub fn values(&self) -> &[f64; 11] {
        &self.values
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn at(&self, percentile: u32) -> Option<f64> {
        if percentile % 10 != 0 || percentile > 100 {
            return None;
        }
        Some(self.values[(percentile / 10) as usize])
    }

    /// Thresholds as a non-decreasing sequence, negated for lower-is-better tables.
    pub fn oriented(&self) -> [f64; 11] {
        match self.direction {
            Direction::HigherIsBetter => self.values,
            Direction::LowerIsBetter => self.values.map(|v| -v),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/standards/tests.rs"]
mod tests;
