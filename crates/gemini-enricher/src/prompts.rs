//! Prompt templates for the three enrichment calls.
//!
//! The templates are constants so their fingerprints stay stable across
//! requests; only the flattened feedback text and the language name vary.
//! Record selection rules live in `feedback_core::prompt` so test doubles
//! agree with the real backend about which records reach the model.

use feedback_core::{
    combined_feedback_text, highlight_records, improvement_records, FeedbackRecord, Language,
};

/// Sentiment classification instructions; the flattened comments follow.
pub const SENTIMENT_TEMPLATE: &str = "Analyze the sentiment of the following customer comments. \
Categorize them as 'positive', 'neutral', or 'negative'. Provide the output as a JSON object \
with the total count for each category, like {\"positive\": number, \"neutral\": number, \
\"negative\": number}. Do not include any other text, explanation, or markdown formatting. \
Comments: \n\n";

/// Improvement-suggestion instructions; `{language}` is substituted and the
/// selected comments follow.
pub const SUGGESTIONS_TEMPLATE: &str = "You are an expert business consultant. Based on the \
following customer feedback, provide 3-5 concrete, actionable improvement suggestions. For each \
suggestion, cite the original customer comment that inspired it. Respond in {language}, as a \
JSON array of objects with \"originalComment\" (the original, verbatim customer comment) and \
\"suggestion\" (your actionable suggestion). Respond with JSON only.\n\nFeedback:\n";

/// Positive-highlight instructions; `{language}` is substituted and the
/// promoter comments follow.
pub const HIGHLIGHTS_TEMPLATE: &str = "From the following list of positive customer feedback \
(NPS >= 9), identify the top 2-3 most impactful comments that highlight the company's \
strengths. For each, provide the original comment, its NPS score, and a brief reason explaining \
why this is a key strength. Respond in {language}, as a JSON array of objects with \
\"positiveComment\" (the original, verbatim comment), \"npsScore\" (the customer's NPS score) \
and \"reason\" (why this is a key strength). Respond with JSON only.\n\nPositive Feedback Data:\n";

/// Build the sentiment prompt. Always produced, even for blank comments;
/// the caller decides whether to ask at all.
pub fn sentiment_prompt(records: &[FeedbackRecord]) -> String {
    format!("{}{}", SENTIMENT_TEMPLATE, combined_feedback_text(records))
}

/// Build the suggestions prompt, or `None` when no record carries
/// improvement-oriented free text (in which case no model call is made).
pub fn suggestions_prompt(records: &[FeedbackRecord], language: Language) -> Option<String> {
    let selected = improvement_records(records);
    if selected.is_empty() {
        return None;
    }

    let feedback = selected
        .iter()
        .map(|record| {
            format!(
                "- Comment: \"{}\". NPS Score: {}",
                record.improvement_comment().unwrap_or_default(),
                record.nps
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let instructions = SUGGESTIONS_TEMPLATE.replace("{language}", language.prompt_name());
    Some(format!("{}{}", instructions, feedback))
}

/// Build the highlights prompt, or `None` when no record qualifies
/// (in which case no model call is made).
pub fn highlights_prompt(records: &[FeedbackRecord], language: Language) -> Option<String> {
    let selected = highlight_records(records);
    if selected.is_empty() {
        return None;
    }

    let feedback = selected
        .iter()
        .map(|record| {
            serde_json::json!({
                "comment": record.why_us,
                "nps": record.nps,
            })
            .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n");

    let instructions = HIGHLIGHTS_TEMPLATE.replace("{language}", language.prompt_name());
    Some(format!("{}{}", instructions, feedback))
}
