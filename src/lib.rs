pub mod engine;
pub mod input;
pub mod ladder;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod standards;

pub use engine::{ScoreEngine, ScoreError};
