pub mod athlete;
pub mod discipline;
pub mod measurement;
pub mod profile;
pub mod scores;
