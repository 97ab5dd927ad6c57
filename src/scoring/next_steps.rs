use crate::leads::types::{ActivityType, Lead};

pub const INITIAL_OUTREACH: &str = "Initial outreach needed";
pub const SCHEDULE_MEETING: &str = "Schedule first meeting";
pub const RESEARCH_WEBSITE: &str = "Research company website";
pub const REVIEW_FALLBACK: &str = "Review lead details and plan next action";

/// Suggested next actions, in fixed rule order. Every matching rule is
/// included; the review fallback appears only when nothing else matched.
pub fn generate_next_steps(lead: &Lead) -> Vec<String> {
    let mut steps = Vec::new();

    if lead.activities.is_empty() {
        steps.push(INITIAL_OUTREACH.to_string());
    } else if !lead
        .activities
        .iter()
        .any(|a| a.kind == ActivityType::Meeting)
    {
        steps.push(SCHEDULE_MEETING.to_string());
    }

    if !lead.company_data.as_ref().is_some_and(|c| c.has_website()) {
        steps.push(RESEARCH_WEBSITE.to_string());
    }

    if steps.is_empty() {
        steps.push(REVIEW_FALLBACK.to_string());
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::types::{Activity, CompanyData, LeadStatus};
    use chrono::Utc;

    fn sample_lead(kinds: &[ActivityType], website: Option<&str>) -> Lead {
        Lead {
            id: "lead-1".to_string(),
            owner: "alice".to_string(),
            name: "Test Lead".to_string(),
            company: "Acme".to_string(),
            title: None,
            status: LeadStatus::New,
            score: 0,
            activities: kinds
                .iter()
                .map(|kind| Activity {
                    kind: kind.clone(),
                    created_at: Utc::now(),
                    content: String::new(),
                })
                .collect(),
            company_data: Some(CompanyData {
                website: website.map(str::to_string),
                ..CompanyData::default()
            }),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_no_activities_no_website() {
        let lead = sample_lead(&[], None);
        assert_eq!(
            generate_next_steps(&lead),
            vec![INITIAL_OUTREACH, RESEARCH_WEBSITE]
        );
    }

    #[test]
    fn test_no_company_data_needs_research() {
        let mut lead = sample_lead(&[], Some("https://acme.test"));
        lead.company_data = None;
        assert_eq!(
            generate_next_steps(&lead),
            vec![INITIAL_OUTREACH, RESEARCH_WEBSITE]
        );
    }

    #[test]
    fn test_activities_without_meeting() {
        let lead = sample_lead(
            &[ActivityType::Email, ActivityType::Call],
            Some("https://acme.test"),
        );
        assert_eq!(generate_next_steps(&lead), vec![SCHEDULE_MEETING]);
    }

    #[test]
    fn test_fallback_when_nothing_fires() {
        let lead = sample_lead(
            &[ActivityType::Email, ActivityType::Meeting],
            Some("https://acme.test"),
        );
        assert_eq!(generate_next_steps(&lead), vec![REVIEW_FALLBACK]);
    }

    #[test]
    fn test_meeting_but_no_website() {
        let lead = sample_lead(&[ActivityType::Meeting], Some(""));
        assert_eq!(generate_next_steps(&lead), vec![RESEARCH_WEBSITE]);
    }

    #[test]
    fn test_recomputed_each_call() {
        let mut lead = sample_lead(&[], Some("https://acme.test"));
        assert_eq!(generate_next_steps(&lead), vec![INITIAL_OUTREACH]);

        lead.activities.push(Activity {
            kind: ActivityType::Meeting,
            created_at: Utc::now(),
            content: "kickoff".to_string(),
        });
        assert_eq!(generate_next_steps(&lead), vec![REVIEW_FALLBACK]);
    }
}
