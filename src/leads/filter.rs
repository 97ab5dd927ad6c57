use super::types::{Lead, LeadStatus};

/// Which leads a listing should include.
#[derive(Debug, Clone, Default)]
pub struct StatusFilter {
    /// Explicit statuses to keep. Empty means "every open status".
    pub statuses: Vec<LeadStatus>,
    /// Keep converted and lost leads when no explicit statuses are given.
    pub include_closed: bool,
}

impl StatusFilter {
    pub fn matches(&self, status: LeadStatus) -> bool {
        if !self.statuses.is_empty() {
            return self.statuses.contains(&status);
        }
        self.include_closed || !status.is_closed()
    }
}

/// Keep only leads whose status passes the filter
pub fn filter_by_status(leads: Vec<Lead>, filter: &StatusFilter) -> Vec<Lead> {
    leads
        .into_iter()
        .filter(|lead| filter.matches(lead.status))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn create_test_lead(id: &str, status: LeadStatus) -> Lead {
        Lead {
            id: id.to_string(),
            owner: "alice".to_string(),
            name: format!("Lead {}", id),
            company: String::new(),
            title: None,
            status,
            score: 0,
            activities: vec![],
            company_data: None,
            created_at: Utc::now(),
        }
    }

    fn pipeline() -> Vec<Lead> {
        vec![
            create_test_lead("1", LeadStatus::New),
            create_test_lead("2", LeadStatus::Converted),
            create_test_lead("3", LeadStatus::Qualified),
            create_test_lead("4", LeadStatus::Lost),
        ]
    }

    #[test]
    fn test_default_filter_hides_closed() {
        let leads = filter_by_status(pipeline(), &StatusFilter::default());
        let ids: Vec<_> = leads.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_include_closed_keeps_everything() {
        let filter = StatusFilter {
            statuses: vec![],
            include_closed: true,
        };
        assert_eq!(filter_by_status(pipeline(), &filter).len(), 4);
    }

    #[test]
    fn test_explicit_statuses_win() {
        let filter = StatusFilter {
            statuses: vec![LeadStatus::Lost],
            include_closed: false,
        };
        let leads = filter_by_status(pipeline(), &filter);
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].id, "4");
    }
}
