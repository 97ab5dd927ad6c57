use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};

use super::types::{Activity, Lead, Owner};
use crate::error::LeadError;
use crate::scoring::MAX_SCORE;

const LEAD_BOOK_VERSION: u32 = 1;

/// Read/write access to leads, scoped by owner.
///
/// Leads owned by someone else are reported as `NotFound`, never as a
/// distinct error, so callers cannot probe for other owners' ids.
pub trait LeadStore {
    fn find_lead(&self, owner: &Owner, id: &str) -> Result<Lead, LeadError>;

    fn leads_for(&self, owner: &Owner) -> Vec<Lead>;

    /// Overwrite the stored score. No concurrency check.
    fn update_score(&mut self, owner: &Owner, id: &str, score: u32) -> Result<(), LeadError>;

    fn append_activity(
        &mut self,
        owner: &Owner,
        id: &str,
        activity: Activity,
    ) -> Result<(), LeadError>;

    fn insert_lead(&mut self, lead: Lead);
}

/// In-memory lead repository, persisted as a versioned JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadBook {
    pub version: u32,
    #[serde(default)]
    pub leads: Vec<Lead>,
}

impl Default for LeadBook {
    fn default() -> Self {
        Self::new()
    }
}

impl LeadBook {
    pub fn new() -> Self {
        Self {
            version: LEAD_BOOK_VERSION,
            leads: Vec::new(),
        }
    }

    fn find_mut(&mut self, owner: &Owner, id: &str) -> Result<&mut Lead, LeadError> {
        self.leads
            .iter_mut()
            .find(|lead| lead.id == id && lead.is_owned_by(owner))
            .ok_or_else(|| LeadError::NotFound(id.to_string()))
    }
}

impl LeadStore for LeadBook {
    fn find_lead(&self, owner: &Owner, id: &str) -> Result<Lead, LeadError> {
        self.leads
            .iter()
            .find(|lead| lead.id == id && lead.is_owned_by(owner))
            .cloned()
            .ok_or_else(|| LeadError::NotFound(id.to_string()))
    }

    fn leads_for(&self, owner: &Owner) -> Vec<Lead> {
        self.leads
            .iter()
            .filter(|lead| lead.is_owned_by(owner))
            .cloned()
            .collect()
    }

    fn update_score(&mut self, owner: &Owner, id: &str, score: u32) -> Result<(), LeadError> {
        let lead = self.find_mut(owner, id)?;
        let score = score.min(MAX_SCORE);
        debug!("Lead {}: score {} -> {}", id, lead.score, score);
        lead.score = score;
        Ok(())
    }

    fn append_activity(
        &mut self,
        owner: &Owner,
        id: &str,
        activity: Activity,
    ) -> Result<(), LeadError> {
        let lead = self.find_mut(owner, id)?;
        debug!("Lead {}: appending {} activity", id, activity.kind);
        // Keep oldest-first so the file reads chronologically
        let pos = lead
            .activities
            .partition_point(|a| a.created_at <= activity.created_at);
        lead.activities.insert(pos, activity);
        Ok(())
    }

    fn insert_lead(&mut self, lead: Lead) {
        debug!("Inserting lead {} for {}", lead.id, lead.owner);
        self.leads.push(lead);
    }
}

/// Get the default lead book path (~/.config/lead-scout/leads.json)
pub fn get_lead_book_path() -> PathBuf {
    crate::config::get_config_dir().join("leads.json")
}

/// Load the lead book from a JSON file
///
/// If the file doesn't exist, returns a new empty book.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_lead_book(path: &Path) -> Result<LeadBook> {
    if !path.exists() {
        debug!("No lead book at {}, starting empty", path.display());
        return Ok(LeadBook::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open lead book at {}", path.display()))?;

    let book: LeadBook = serde_json::from_reader(file)
        .with_context(|| format!("Failed to load lead book from {}", path.display()))?;

    if book.version != LEAD_BOOK_VERSION {
        anyhow::bail!("Unsupported lead book version: {}", book.version);
    }

    debug!("Loaded {} leads from {}", book.leads.len(), path.display());
    Ok(book)
}

/// Save the lead book to a JSON file atomically
///
/// Creates the parent directory if it doesn't exist.
pub fn save_lead_book(path: &Path, book: &LeadBook) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create lead book directory at {}", parent.display())
            })?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, book).context("Failed to serialize lead book")?;

    file.commit().context("Failed to save lead book")?;

    debug!("Saved {} leads to {}", book.leads.len(), path.display());
    Ok(())
}
