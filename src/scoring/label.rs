use serde::Serialize;
use std::fmt;

/// Qualitative bucket of a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ScoreLabel {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl ScoreLabel {
    /// Bands are checked highest first with inclusive lower bounds.
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 90 => ScoreLabel::VeryHigh,
            s if s >= 70 => ScoreLabel::High,
            s if s >= 50 => ScoreLabel::Medium,
            s if s >= 30 => ScoreLabel::Low,
            _ => ScoreLabel::VeryLow,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreLabel::VeryHigh => "Very High",
            ScoreLabel::High => "High",
            ScoreLabel::Medium => "Medium",
            ScoreLabel::Low => "Low",
            ScoreLabel::VeryLow => "Very Low",
        }
    }
}

impl fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_boundaries() {
        assert_eq!(ScoreLabel::from_score(100), ScoreLabel::VeryHigh);
        assert_eq!(ScoreLabel::from_score(90), ScoreLabel::VeryHigh);
        assert_eq!(ScoreLabel::from_score(89), ScoreLabel::High);
        assert_eq!(ScoreLabel::from_score(70), ScoreLabel::High);
        assert_eq!(ScoreLabel::from_score(69), ScoreLabel::Medium);
        assert_eq!(ScoreLabel::from_score(50), ScoreLabel::Medium);
        assert_eq!(ScoreLabel::from_score(49), ScoreLabel::Low);
        assert_eq!(ScoreLabel::from_score(30), ScoreLabel::Low);
        assert_eq!(ScoreLabel::from_score(29), ScoreLabel::VeryLow);
        assert_eq!(ScoreLabel::from_score(0), ScoreLabel::VeryLow);
    }

    #[test]
    fn test_label_monotonic() {
        let labels: Vec<_> = (0..=100).map(ScoreLabel::from_score).collect();
        assert!(labels.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_label_display() {
        assert_eq!(ScoreLabel::VeryHigh.to_string(), "Very High");
        assert_eq!(ScoreLabel::VeryLow.to_string(), "Very Low");
        assert_eq!(
            serde_json::to_string(&ScoreLabel::VeryLow).unwrap(),
            "\"Very Low\""
        );
    }
}
