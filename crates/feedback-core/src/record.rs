//! Survey response record and display language types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One survey response, as mapped from a spreadsheet row.
///
/// Satisfaction scores use an implied 1-5 scale where 0 means the question
/// was not answered. The `date` field keeps the raw spreadsheet value
/// (`DD/MM/YYYY`, optionally followed by a time); calendar parsing happens
/// in the date filter, not here. Records are immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Satisfaction with the service (0 = unanswered).
    pub csat_service: i32,
    /// Satisfaction with delivery (0 = unanswered).
    pub csat_delivery: i32,
    /// Satisfaction with the platform (0 = unanswered).
    pub csat_platform: i32,
    /// Free text: why the customer chose us.
    pub why_us: String,
    /// Net Promoter Score answer, 0-10.
    pub nps: i32,
    /// Free text: what we could do better.
    pub what_better: String,
    /// Free text: ideas that would wow the customer.
    pub wow_ideas: String,
    /// Raw submission date field, `DD/MM/YYYY` prefix.
    pub date: String,
}

impl FeedbackRecord {
    /// Whether this respondent is an NPS promoter (score >= 9).
    pub fn is_promoter(&self) -> bool {
        self.nps >= 9
    }

    /// Whether this respondent is an NPS detractor (score <= 6).
    pub fn is_detractor(&self) -> bool {
        self.nps <= 6
    }

    /// Whether this respondent is an NPS passive (score 7-8).
    pub fn is_passive(&self) -> bool {
        !self.is_promoter() && !self.is_detractor()
    }

    /// The improvement-oriented comment for this record, if any.
    ///
    /// Prefers `what_better`, falls back to `wow_ideas`; blank text in both
    /// yields `None`.
    pub fn improvement_comment(&self) -> Option<&str> {
        let what_better = self.what_better.trim();
        if !what_better.is_empty() {
            return Some(what_better);
        }
        let wow_ideas = self.wow_ideas.trim();
        if !wow_ideas.is_empty() {
            return Some(wow_ideas);
        }
        None
    }

    /// Whether this record qualifies for the positive-highlight set:
    /// a promoter score with a non-blank "why us" comment.
    pub fn is_highlight_candidate(&self) -> bool {
        self.is_promoter() && !self.why_us.trim().is_empty()
    }
}

/// Display language for AI-generated text and banner messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Spanish.
    #[default]
    Es,
    /// Portuguese.
    Pt,
}

impl Language {
    /// The language tag, as used on the wire ("es" / "pt").
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::Pt => "pt",
        }
    }

    /// The language name used when instructing the model.
    pub fn prompt_name(&self) -> &'static str {
        match self {
            Language::Es => "Spanish",
            Language::Pt => "Portuguese",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "es" => Ok(Language::Es),
            "pt" => Ok(Language::Pt),
            other => Err(format!("unsupported language tag: {}", other)),
        }
    }
}
