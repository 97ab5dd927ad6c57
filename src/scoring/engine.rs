use chrono::{DateTime, Utc};
use serde::Serialize;

use super::factors::Factor;
use super::label::ScoreLabel;
use crate::leads::types::Lead;

/// Highest score any lead can hold.
pub const MAX_SCORE: u32 = 100;

#[derive(Debug, Clone, Serialize)]
pub struct FactorContribution {
    pub label: String,       // e.g. "Company size", "Recency"
    pub description: String, // e.g. "Enterprise", "last contact 3d ago"
    pub points: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    pub score: u32,
    pub label: ScoreLabel,
    pub breakdown: Vec<FactorContribution>,
}

/// Additive heuristic score over company size, funding, activity volume
/// and recency of last contact. Each factor is independent; the sum is
/// clamped to `MAX_SCORE`.
pub fn compute_heuristic_score(lead: &Lead, now: DateTime<Utc>) -> ScoreResult {
    let mut total = 0;
    let mut breakdown = Vec::new();

    for factor in Factor::ALL {
        let (points, description) = factor.evaluate(lead, now);
        total += points;

        // Only record factors that moved the score
        if points > 0 {
            breakdown.push(FactorContribution {
                label: factor.label().to_string(),
                description,
                points,
            });
        }
    }

    let score = total.min(MAX_SCORE);
    ScoreResult {
        score,
        label: ScoreLabel::from_score(score),
        breakdown,
    }
}
