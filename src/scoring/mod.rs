pub mod engine;
pub mod tables;

pub use engine::{calculate_points, compute_points, ScoreFactors, ScoreResult};
pub use tables::BASE_POINTS;
