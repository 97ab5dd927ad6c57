pub mod formatter;

pub use formatter::{
    format_age, format_analysis, format_lead_detail, format_lead_table, format_score,
    should_use_colors, ScoredLead,
};
