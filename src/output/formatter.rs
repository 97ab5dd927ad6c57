use std::io::IsTerminal;
use chrono::Duration;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::analyze::LeadAnalysis;
use crate::leads::types::Lead;
use crate::scoring::{ScoreLabel, ScoreResult};

/// A lead with its heuristic score for display
pub struct ScoredLead<'a> {
    pub lead: &'a Lead,
    pub result: &'a ScoreResult,
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Color text by label band: green for High and up, yellow for Medium, red below
fn paint_label(label: ScoreLabel, text: &str, use_colors: bool) -> String {
    if !use_colors {
        return text.to_string();
    }
    match label {
        ScoreLabel::VeryHigh | ScoreLabel::High => text.green().to_string(),
        ScoreLabel::Medium => text.yellow().to_string(),
        ScoreLabel::Low | ScoreLabel::VeryLow => text.red().to_string(),
    }
}

/// Format a score with its label, e.g. "72 (High)"
pub fn format_score(score: u32, label: ScoreLabel, use_colors: bool) -> String {
    format!("{} ({})", score, paint_label(label, label.as_str(), use_colors))
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format leads as a ranked table with columns: Index, Score, Label, Name, Status
/// No headers.
/// Index column: 3 chars (fits "99."), right-aligned
/// Score column is right-aligned, 3 chars wide; label column is 9 wide (fits "Very High")
pub fn format_lead_table(leads: &[ScoredLead], use_colors: bool) -> String {
    if leads.is_empty() {
        return "No leads found.".to_string();
    }

    let term_width = get_terminal_width();

    let index_width = 3;
    let score_width = 3;
    let label_width = 9;
    let separator = "  ";

    leads
        .iter()
        .enumerate()
        .map(|(idx, scored)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_str = format!("{:>width$}", scored.result.score, width = score_width);
            // Pad before coloring so escape codes don't break alignment
            let label_str = format!("{:<width$}", scored.result.label.as_str(), width = label_width);
            let status = scored.lead.status.as_str();

            let fixed_width = index_width
                + 1
                + score_width
                + label_width
                + separator.len() * 3
                + status.len();

            let name = scored.lead.display_name();
            let name = match term_width {
                Some(width) if width > fixed_width + 10 => truncate_text(&name, width - fixed_width),
                Some(_) => truncate_text(&name, 20),
                None => name,
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    score_str.bold(),
                    separator,
                    paint_label(scored.result.label, &label_str, true),
                    separator,
                    name,
                    separator,
                    status.dimmed()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str, score_str, separator, label_str, separator, name, separator, status
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a lead with its score breakdown (for `score --explain` and verbose listing)
pub fn format_lead_detail(
    lead: &Lead,
    result: &ScoreResult,
    last_contact: Option<Duration>,
    use_colors: bool,
) -> String {
    let name = if use_colors {
        lead.display_name().bold().to_string()
    } else {
        lead.display_name()
    };
    let last_contact = last_contact
        .map(|d| format!("{} ago", format_age(d)))
        .unwrap_or_else(|| "never".to_string());

    let mut lines = vec![
        name,
        format!("  Id: {}", lead.id),
        format!("  Status: {}", lead.status),
        format!("  Activities: {}", lead.activities.len()),
        format!("  Last contact: {}", last_contact),
        format!("  Score: {}", format_score(result.score, result.label, use_colors)),
    ];

    for factor in &result.breakdown {
        lines.push(format!(
            "    {:+} {} ({})",
            factor.points, factor.label, factor.description
        ));
    }

    lines.join("\n")
}

/// Format the analysis of one lead as plain text
pub fn format_analysis(lead: &Lead, analysis: &LeadAnalysis, use_colors: bool) -> String {
    let qualification = ScoreLabel::from_score(analysis.qualification);
    let mut lines = vec![
        if use_colors {
            lead.display_name().bold().to_string()
        } else {
            lead.display_name()
        },
        format!("  Engagement: {}", analysis.engagement),
        format!(
            "  Qualification: {}",
            format_score(analysis.qualification, qualification, use_colors)
        ),
        "  Next steps:".to_string(),
    ];

    for step in &analysis.next_steps {
        lines.push(format!("    - {}", step));
    }

    lines.join("\n")
}

/// Format a duration into a human-readable age string
/// "2h" for hours, "3d" for days, "1w" for weeks
pub fn format_age(duration: Duration) -> String {
    let hours = duration.num_hours();
    let days = duration.num_days();
    let weeks = days / 7;

    if weeks >= 1 {
        format!("{}w", weeks)
    } else if days >= 1 {
        format!("{}d", days)
    } else if hours >= 1 {
        format!("{}h", hours)
    } else {
        let minutes = duration.num_minutes();
        if minutes >= 1 {
            format!("{}m", minutes)
        } else {
            "now".to_string()
        }
    }
}
