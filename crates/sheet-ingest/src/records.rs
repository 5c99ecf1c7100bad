//! Mapping parsed CSV rows into feedback records.
//!
//! The survey export has a fixed column layout; only positions 0-6 and 16
//! carry data this service uses. Everything in between is survey plumbing
//! (timestamps, consent checkboxes) and is ignored.

use crate::csv::parse_csv;
use feedback_core::FeedbackRecord;
use tracing::debug;

const COL_CSAT_SERVICE: usize = 0;
const COL_CSAT_DELIVERY: usize = 1;
const COL_CSAT_PLATFORM: usize = 2;
const COL_WHY_US: usize = 3;
const COL_NPS: usize = 4;
const COL_WHAT_BETTER: usize = 5;
const COL_WOW_IDEAS: usize = 6;
const COL_DATE: usize = 16;

/// Parses raw export text straight into feedback records.
pub fn parse_records(csv_text: &str) -> Vec<FeedbackRecord> {
    records_from_rows(parse_csv(csv_text))
}

/// Maps parsed rows into records.
///
/// The first row is the header and is discarded. A data row must have more
/// than 16 fields (the date column must exist) and a non-empty date to be
/// kept. Numeric answers use a whole-field integer parse with failure or
/// absence defaulting to 0, indistinguishable from "not answered".
pub fn records_from_rows(rows: Vec<Vec<String>>) -> Vec<FeedbackRecord> {
    let data_rows = rows.len().saturating_sub(1);

    let records: Vec<FeedbackRecord> = rows
        .into_iter()
        .skip(1)
        .filter(|row| row.len() > COL_DATE)
        .map(|row| FeedbackRecord {
            csat_service: int_field(&row, COL_CSAT_SERVICE),
            csat_delivery: int_field(&row, COL_CSAT_DELIVERY),
            csat_platform: int_field(&row, COL_CSAT_PLATFORM),
            why_us: text_field(&row, COL_WHY_US),
            nps: int_field(&row, COL_NPS),
            what_better: text_field(&row, COL_WHAT_BETTER),
            wow_ideas: text_field(&row, COL_WOW_IDEAS),
            date: text_field(&row, COL_DATE),
        })
        .filter(|record| !record.date.is_empty())
        .collect();

    debug!(
        kept = records.len(),
        seen = data_rows,
        "mapped spreadsheet rows into records"
    );

    records
}

fn int_field(row: &[String], index: usize) -> i32 {
    row.get(index)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(0)
}

fn text_field(row: &[String], index: usize) -> String {
    row.get(index).cloned().unwrap_or_default()
}
