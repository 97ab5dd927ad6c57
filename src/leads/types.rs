use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LeadError;

/// Authenticated identity that owns leads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Owner(String);

impl Owner {
    /// Build an owner from a configured identity. Blank identities are rejected.
    pub fn new(identity: &str) -> Result<Self, LeadError> {
        let identity = identity.trim();
        if identity.is_empty() {
            return Err(LeadError::Unauthorized);
        }
        Ok(Self(identity.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Converted,
    Lost,
}

impl LeadStatus {
    /// Converted and lost leads have left the pipeline.
    pub fn is_closed(&self) -> bool {
        matches!(self, LeadStatus::Converted | LeadStatus::Lost)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "NEW",
            LeadStatus::Contacted => "CONTACTED",
            LeadStatus::Qualified => "QUALIFIED",
            LeadStatus::Converted => "CONVERTED",
            LeadStatus::Lost => "LOST",
        }
    }
}

impl FromStr for LeadStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NEW" => Ok(LeadStatus::New),
            "CONTACTED" => Ok(LeadStatus::Contacted),
            "QUALIFIED" => Ok(LeadStatus::Qualified),
            "CONVERTED" => Ok(LeadStatus::Converted),
            "LOST" => Ok(LeadStatus::Lost),
            other => Err(format!(
                "unknown status '{}' (expected NEW, CONTACTED, QUALIFIED, CONVERTED or LOST)",
                other
            )),
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interaction kind. Strings outside the known set are kept as `Other`
/// so a lead book written by a newer tool still loads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityType {
    Email,
    Call,
    Meeting,
    Note,
    Other(String),
}

impl ActivityType {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "EMAIL" => ActivityType::Email,
            "CALL" => ActivityType::Call,
            "MEETING" => ActivityType::Meeting,
            "NOTE" => ActivityType::Note,
            _ => ActivityType::Other(s.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ActivityType::Email => "EMAIL",
            ActivityType::Call => "CALL",
            ActivityType::Meeting => "MEETING",
            ActivityType::Note => "NOTE",
            ActivityType::Other(raw) => raw,
        }
    }
}

impl From<String> for ActivityType {
    fn from(s: String) -> Self {
        ActivityType::parse(&s)
    }
}

impl From<ActivityType> for String {
    fn from(kind: ActivityType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Funding {
    /// Smallest currency unit.
    pub amount: u64,
    #[serde(default)]
    pub round: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Enrichment data about the lead's employer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyData {
    /// Either a size category ("Enterprise", "Large", "Medium", "Small")
    /// or an employee-count bracket such as "51-200".
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub funding: Option<Funding>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl CompanyData {
    pub fn has_website(&self) -> bool {
        self.website
            .as_deref()
            .is_some_and(|w| !w.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub owner: String,
    pub name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub title: Option<String>,
    pub status: LeadStatus,
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub company_data: Option<CompanyData>,
    pub created_at: DateTime<Utc>,
}

impl Lead {
    /// Activity with the greatest creation timestamp, whatever order the
    /// activities were stored in.
    pub fn last_contact(&self) -> Option<&Activity> {
        self.activities.iter().max_by_key(|a| a.created_at)
    }

    /// Days since the most recent activity, truncated to whole days.
    pub fn days_since_last_contact(&self, now: DateTime<Utc>) -> Option<i64> {
        self.last_contact()
            .map(|a| (now - a.created_at).num_days())
    }

    pub fn is_owned_by(&self, owner: &Owner) -> bool {
        self.owner == owner.as_str()
    }

    /// Return a short reference in the format "Name (Company)"
    pub fn display_name(&self) -> String {
        if self.company.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.company)
        }
    }
}
