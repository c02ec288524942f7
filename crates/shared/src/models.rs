use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One story from the news feed, ready for the briefing prompt.
///
/// The description is resolved at fetch time: the feed's description when it
/// carries one, the title otherwise, so downstream stages never see a blank.
#[derive(Debug, Clone)]
pub struct Article {
    pub title: String,
    pub description: String,
}

/// The durable record published next to the audio file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BriefingMetadata {
    pub date: String,
    pub summary: String,
}

impl BriefingMetadata {
    /// The `summary` is the generated script verbatim; `date` is the run's
    /// wall-clock date in the broadcast's display format.
    pub fn new(summary: impl Into<String>, now: DateTime<Local>) -> Self {
        Self {
            date: now.format("%B %d, %Y").to_string(),
            summary: summary.into(),
        }
    }
}
