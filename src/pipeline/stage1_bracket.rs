use crate::engine::ScoreError;
use crate::model::discipline::Discipline;
use crate::standards::brackets::{AgeBracket, bracket_set};

/// Bracket of `age` within the discipline's own bracket set. First match wins.
pub fn resolve_bracket(discipline: Discipline, age: u32) -> Result<&'static AgeBracket, ScoreError> {
    bracket_set(discipline)
        .iter()
        .find(|bracket| bracket.contains(age))
        .ok_or(ScoreError::UnmappedAge { discipline, age })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_bracket.rs"]
mod tests;
