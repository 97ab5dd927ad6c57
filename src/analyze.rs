use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::Serialize;

use crate::error::LeadError;
use crate::leads::{filter_by_status, Lead, LeadStore, Owner, StatusFilter};
use crate::scoring::{
    compute_engagement_score, compute_heuristic_score, compute_qualification_score,
    generate_next_steps, ScoreResult, MAX_SCORE,
};

/// Default threshold for `is_qualified`.
pub const DEFAULT_QUALIFY_THRESHOLD: u32 = 70;

/// Full analysis of one lead.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadAnalysis {
    pub engagement: u64,
    pub qualification: u32,
    pub next_steps: Vec<String>,
}

/// Heuristic score and label for one lead. Read-only.
pub fn score_lead<S: LeadStore + ?Sized>(
    store: &S,
    owner: &Owner,
    id: &str,
    now: DateTime<Utc>,
) -> Result<ScoreResult, LeadError> {
    let lead = store.find_lead(owner, id)?;
    let result = compute_heuristic_score(&lead, now);
    debug!("Lead {} scored {} ({})", id, result.score, result.label);
    Ok(result)
}

/// Engagement, qualification and next steps for one lead. The
/// qualification score replaces whatever score the lead held before.
pub fn analyze_lead<S: LeadStore + ?Sized>(
    store: &mut S,
    owner: &Owner,
    id: &str,
) -> Result<LeadAnalysis, LeadError> {
    let lead = store.find_lead(owner, id)?;

    let analysis = LeadAnalysis {
        engagement: compute_engagement_score(&lead.activities),
        qualification: compute_qualification_score(&lead),
        next_steps: generate_next_steps(&lead),
    };

    store.update_score(owner, id, analysis.qualification)?;
    info!(
        "Lead {} qualification {} -> {}",
        id, lead.score, analysis.qualification
    );

    Ok(analysis)
}

/// Manually set a lead's score, clamped to 0-100. Returns the stored value.
pub fn set_score<S: LeadStore + ?Sized>(
    store: &mut S,
    owner: &Owner,
    id: &str,
    score: i64,
) -> Result<u32, LeadError> {
    let clamped = score.clamp(0, MAX_SCORE as i64) as u32;
    store.update_score(owner, id, clamped)?;
    info!("Set lead {} score to {}", id, clamped);
    Ok(clamped)
}

/// Whether the lead's stored score meets the threshold.
pub fn is_qualified(lead: &Lead, threshold: u32) -> bool {
    lead.score >= threshold
}

/// Score every lead of `owner` that passes the filter, sorted by score
/// descending. Ties go to the lead contacted longest ago, then by name.
pub fn rank_leads<S: LeadStore + ?Sized>(
    store: &S,
    owner: &Owner,
    filter: &StatusFilter,
    now: DateTime<Utc>,
) -> Vec<(Lead, ScoreResult)> {
    let leads = filter_by_status(store.leads_for(owner), filter);
    debug!("Ranking {} leads for {}", leads.len(), owner);

    let mut scored: Vec<_> = leads
        .into_iter()
        .map(|lead| {
            let result = compute_heuristic_score(&lead, now);
            (lead, result)
        })
        .collect();

    scored.sort_by(|a, b| {
        b.1.score
            .cmp(&a.1.score)
            .then_with(|| last_contact_at(&a.0).cmp(&last_contact_at(&b.0)))
            .then_with(|| a.0.name.cmp(&b.0.name))
    });

    scored
}

/// Leads never contacted sort before any contacted lead.
fn last_contact_at(lead: &Lead) -> Option<DateTime<Utc>> {
    lead.last_contact().map(|a| a.created_at)
}
