//! Prompt input assembly and fingerprinting for enrichment backends.
//!
//! Backends build their own prompt wording, but the record selection and
//! text flattening rules live here so every implementation (and its test
//! double) agrees on which records reach the model.

use crate::record::FeedbackRecord;
use sha2::{Digest, Sha256};

/// Flattens every record's free-text answers into one block for sentiment
/// classification: one line per record, the three answers separated by
/// single spaces. Records without text still contribute a (blank) line.
pub fn combined_feedback_text(records: &[FeedbackRecord]) -> String {
    records
        .iter()
        .map(|r| format!("{} {} {}", r.why_us, r.what_better, r.wow_ideas))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The records that carry improvement-oriented free text. When this is
/// empty, the suggestions call is skipped entirely.
pub fn improvement_records(records: &[FeedbackRecord]) -> Vec<&FeedbackRecord> {
    records
        .iter()
        .filter(|r| r.improvement_comment().is_some())
        .collect()
}

/// The records that qualify for the positive-highlights prompt. When this
/// is empty, the highlights call is skipped entirely.
pub fn highlight_records(records: &[FeedbackRecord]) -> Vec<&FeedbackRecord> {
    records
        .iter()
        .filter(|r| r.is_highlight_candidate())
        .collect()
}

/// Compute a stable SHA-256 fingerprint for a prompt string.
pub fn hash_prompt(prompt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(prompt.as_bytes());
    let digest = hasher.finalize();
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        hex.push_str(&format!("{:02x}", byte));
    }
    hex
}
