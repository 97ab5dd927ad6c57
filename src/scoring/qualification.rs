use crate::leads::types::{Activity, ActivityType, Lead};

use super::engine::MAX_SCORE;

const QUALIFICATION_BASE: u32 = 50;

/// Employee-count bracket that earns the sweet-spot bonus.
const TARGET_SIZE_BRACKET: &str = "51-200";
const TARGET_INDUSTRY: &str = "Technology";

/// Sales-readiness score used by the analysis handler.
///
/// Deliberately a different rule set from `compute_heuristic_score`:
/// base 50, +10 for the 51-200 bracket, +10 for Technology, +15 past five
/// activities and another +15 past ten. Capped at `MAX_SCORE`.
pub fn compute_qualification_score(lead: &Lead) -> u32 {
    let company = lead.company_data.as_ref();
    let mut bonuses = Vec::new();

    if company.and_then(|c| c.size.as_deref()) == Some(TARGET_SIZE_BRACKET) {
        bonuses.push(10);
    }
    if company.and_then(|c| c.industry.as_deref()) == Some(TARGET_INDUSTRY) {
        bonuses.push(10);
    }

    let count = lead.activities.len();
    if count > 5 {
        bonuses.push(15);
    }
    if count > 10 {
        bonuses.push(15);
    }

    apply_bonuses(QUALIFICATION_BASE, &bonuses)
}

fn apply_bonuses(base: u32, bonuses: &[u32]) -> u32 {
    bonuses
        .iter()
        .fold(base, |score, bonus| score.saturating_add(*bonus))
        .min(MAX_SCORE)
}

/// Interaction intensity: per-type weights summed over every activity.
/// Not a percentage, so never clamped.
pub fn compute_engagement_score(activities: &[Activity]) -> u64 {
    activities.iter().map(|a| activity_weight(&a.kind)).sum()
}

pub fn activity_weight(kind: &ActivityType) -> u64 {
    match kind {
        ActivityType::Email => 2,
        ActivityType::Call => 3,
        ActivityType::Meeting => 4,
        ActivityType::Note => 1,
        ActivityType::Other(_) => 1,
    }
}
