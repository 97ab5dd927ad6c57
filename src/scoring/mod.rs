pub mod engine;
pub mod factors;
pub mod label;
pub mod next_steps;
pub mod qualification;

pub use engine::{compute_heuristic_score, FactorContribution, ScoreResult, MAX_SCORE};
pub use factors::{Factor, SizeCategory};
pub use label::ScoreLabel;
pub use next_steps::generate_next_steps;
pub use qualification::{compute_engagement_score, compute_qualification_score};
