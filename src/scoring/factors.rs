use chrono::{DateTime, Utc};

use crate::leads::types::Lead;

/// Company size categories recognized by the heuristic score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCategory {
    Enterprise,
    Large,
    Medium,
    Small,
}

impl SizeCategory {
    /// Parse a category name. Employee-count brackets ("51-200") and
    /// anything else unrecognized yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("enterprise") {
            Some(SizeCategory::Enterprise)
        } else if s.eq_ignore_ascii_case("large") {
            Some(SizeCategory::Large)
        } else if s.eq_ignore_ascii_case("medium") {
            Some(SizeCategory::Medium)
        } else if s.eq_ignore_ascii_case("small") {
            Some(SizeCategory::Small)
        } else {
            None
        }
    }

    pub fn points(&self) -> u32 {
        match self {
            SizeCategory::Enterprise => 25,
            SizeCategory::Large => 20,
            SizeCategory::Medium => 15,
            SizeCategory::Small => 10,
        }
    }
}

/// Funding bands, highest threshold first. Thresholds are exclusive.
const FUNDING_BANDS: &[(u64, u32)] = &[(10_000_000, 20), (5_000_000, 15), (1_000_000, 10)];

/// Activity-count bands, highest threshold first. Thresholds are exclusive.
const VOLUME_BANDS: &[(usize, u32)] = &[(5, 15), (2, 10)];

/// Days-since-contact bands, tightest first. Bounds are exclusive.
const RECENCY_BANDS: &[(i64, u32)] = &[(7, 10), (30, 5)];

/// A scoring factor evaluated against a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Factor {
    CompanySize,
    Funding,
    ActivityVolume,
    Recency,
}

impl Factor {
    pub const ALL: [Factor; 4] = [
        Factor::CompanySize,
        Factor::Funding,
        Factor::ActivityVolume,
        Factor::Recency,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Factor::CompanySize => "Company size",
            Factor::Funding => "Funding",
            Factor::ActivityVolume => "Activity volume",
            Factor::Recency => "Recency",
        }
    }

    /// Points this factor contributes, with a description of what matched.
    /// Absent or unrecognized inputs contribute zero.
    pub fn evaluate(&self, lead: &Lead, now: DateTime<Utc>) -> (u32, String) {
        match self {
            Factor::CompanySize => {
                let size = lead.company_data.as_ref().and_then(|c| c.size.as_deref());
                match size.and_then(SizeCategory::parse) {
                    Some(category) => (category.points(), format!("{:?}", category)),
                    None => (0, size.unwrap_or("unknown").to_string()),
                }
            }
            Factor::Funding => {
                let amount = lead
                    .company_data
                    .as_ref()
                    .and_then(|c| c.funding.as_ref())
                    .map(|f| f.amount);
                match amount {
                    Some(amount) => (funding_points(amount), format!("{} raised", amount)),
                    None => (0, "no funding on record".to_string()),
                }
            }
            Factor::ActivityVolume => {
                let count = lead.activities.len();
                (volume_points(count), format!("{} activities", count))
            }
            Factor::Recency => match lead.days_since_last_contact(now) {
                // Future timestamps still score as recent but display as today
                Some(days) => (
                    recency_points(days),
                    format!("last contact {}d ago", days.max(0)),
                ),
                None => (0, "never contacted".to_string()),
            },
        }
    }
}

pub fn funding_points(amount: u64) -> u32 {
    FUNDING_BANDS
        .iter()
        .find(|(threshold, _)| amount > *threshold)
        .map_or(0, |(_, points)| *points)
}

pub fn volume_points(count: usize) -> u32 {
    VOLUME_BANDS
        .iter()
        .find(|(threshold, _)| count > *threshold)
        .map_or(0, |(_, points)| *points)
}

pub fn recency_points(days: i64) -> u32 {
    RECENCY_BANDS
        .iter()
        .find(|(bound, _)| days < *bound)
        .map_or(0, |(_, points)| *points)
}
