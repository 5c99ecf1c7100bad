//! NPS and CSAT aggregation over a set of feedback records.
//!
//! - `compute_metrics` produces the full summary in one pass shape
//! - `csat_percentage` scores a single satisfaction channel
//!
//! All percentages are rounded to the nearest integer. Records whose
//! satisfaction score is 0 (unanswered) are excluded from that channel's
//! CSAT denominator but still count toward the NPS total.

use crate::record::FeedbackRecord;
use serde::{Deserialize, Serialize};

/// Aggregated metrics for one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSummary {
    /// Net Promoter Score breakdown.
    pub nps: NpsBreakdown,
    /// Per-channel customer satisfaction percentages.
    pub csat: CsatBreakdown,
}

/// Net Promoter Score and its bucket counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpsBreakdown {
    /// `round((promoters - detractors) / total * 100)`, in -100..=100.
    /// Half-ties round toward positive infinity.
    pub score: i32,
    /// Respondents scoring 9 or 10.
    pub promoters: u32,
    /// Respondents scoring 7 or 8.
    pub passives: u32,
    /// Respondents scoring 0 through 6.
    pub detractors: u32,
    /// All respondents; always `promoters + passives + detractors`.
    pub total: u32,
}

/// Satisfaction percentage per survey channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsatBreakdown {
    /// Service satisfaction, 0-100.
    pub service: u32,
    /// Delivery satisfaction, 0-100.
    pub delivery: u32,
    /// Platform satisfaction, 0-100.
    pub platform: u32,
}

/// Computes the full metrics summary for a record set.
///
/// An empty slice yields an all-zero summary rather than an error; the
/// caller decides whether an empty analysis window is worth reporting.
///
/// # Example
///
/// ```
/// use feedback_core::{compute_metrics, FeedbackRecord};
///
/// let records: Vec<FeedbackRecord> = [9, 9, 3, 7]
///     .into_iter()
///     .map(|nps| FeedbackRecord { nps, ..Default::default() })
///     .collect();
///
/// let summary = compute_metrics(&records);
/// assert_eq!(summary.nps.score, 25);
/// assert_eq!(summary.nps.promoters, 2);
/// assert_eq!(summary.nps.passives, 1);
/// assert_eq!(summary.nps.detractors, 1);
/// ```
pub fn compute_metrics(records: &[FeedbackRecord]) -> MetricsSummary {
    let total = records.len() as u32;
    let promoters = records.iter().filter(|r| r.is_promoter()).count() as u32;
    let detractors = records.iter().filter(|r| r.is_detractor()).count() as u32;
    let passives = total - promoters - detractors;

    let score = if total == 0 {
        0
    } else {
        let spread = promoters as f64 - detractors as f64;
        // Half-ties round toward positive infinity: a raw -12.5 reports
        // as -12, not -13.
        (spread / total as f64 * 100.0 + 0.5).floor() as i32
    };

    MetricsSummary {
        nps: NpsBreakdown {
            score,
            promoters,
            passives,
            detractors,
            total,
        },
        csat: CsatBreakdown {
            service: csat_percentage(records, |r| r.csat_service),
            delivery: csat_percentage(records, |r| r.csat_delivery),
            platform: csat_percentage(records, |r| r.csat_platform),
        },
    }
}

/// Percentage of satisfied respondents (score >= 4) among those who
/// answered the channel (score > 0). Returns 0 when nobody answered.
pub fn csat_percentage<F>(records: &[FeedbackRecord], score_of: F) -> u32
where
    F: Fn(&FeedbackRecord) -> i32,
{
    let answered: Vec<i32> = records
        .iter()
        .map(score_of)
        .filter(|score| *score > 0)
        .collect();

    if answered.is_empty() {
        return 0;
    }

    let satisfied = answered.iter().filter(|score| **score >= 4).count();
    (satisfied as f64 / answered.len() as f64 * 100.0).round() as u32
}
