//! One-shot feedback analysis report.
//!
//! Runs a single analyze pass against the configured spreadsheet and Gemini
//! enricher, then prints the dashboard to stdout, either as a localized text
//! report or as the raw JSON snapshot. Exits nonzero when the run ends in
//! the error state.

use chrono::NaiveDate;
use clap::Parser;
use dashboard::{Catalog, Dashboard, DateRange, Language, Snapshot};
use gemini_enricher::GeminiEnricher;
use sheet_ingest::SheetClient;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "report")]
#[command(about = "Analyze customer feedback and print the dashboard")]
struct Args {
    /// Inclusive start date (YYYY-MM-DD)
    #[arg(long)]
    start: Option<String>,

    /// Inclusive end date (YYYY-MM-DD)
    #[arg(long)]
    end: Option<String>,

    /// Report language: es or pt
    #[arg(long, default_value = "es")]
    language: String,

    /// Print the raw JSON snapshot instead of the text report
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let language: Language = args.language.parse()?;
    let range = DateRange::new(
        parse_date(args.start.as_deref(), "--start")?,
        parse_date(args.end.as_deref(), "--end")?,
    );

    let source = SheetClient::from_env()?;
    let enricher = GeminiEnricher::from_env()?;
    let dashboard = Dashboard::new(source, enricher);

    match dashboard.analyze(range, language).await {
        Ok(snapshot) => {
            info!(records = snapshot.record_count, "analysis complete");
            if args.json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                print!("{}", format_report(&snapshot));
            }
            Ok(())
        }
        Err(error) => {
            let snapshot = dashboard.snapshot().await;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                let catalog = Catalog::for_language(language);
                let banner = snapshot.error.unwrap_or_else(|| error.to_string());
                eprintln!("{}: {}", catalog.error_title, banner);
            }
            std::process::exit(1);
        }
    }
}

/// Parse an optional `YYYY-MM-DD` argument.
fn parse_date(value: Option<&str>, flag: &str) -> Result<Option<NaiveDate>, String> {
    match value {
        None => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| format!("invalid {}: expected YYYY-MM-DD", flag)),
    }
}

/// Render a snapshot as a localized text report.
fn format_report(snapshot: &Snapshot) -> String {
    let catalog = Catalog::for_language(snapshot.language);
    let mut out = String::new();

    out.push_str(catalog.title);
    out.push('\n');
    out.push_str(&"=".repeat(catalog.title.chars().count()));
    out.push_str("\n\n");

    if let Some(metrics) = &snapshot.metrics {
        out.push_str(&format!("{}: {}\n", catalog.nps_title, metrics.nps.score));
        out.push_str(&format!("  {}: {}\n", catalog.promoters, metrics.nps.promoters));
        out.push_str(&format!("  {}: {}\n", catalog.passives, metrics.nps.passives));
        out.push_str(&format!("  {}: {}\n", catalog.detractors, metrics.nps.detractors));
        out.push('\n');

        out.push_str(catalog.csat_title);
        out.push('\n');
        out.push_str(&format!("  {}: {}%\n", catalog.csat_service, metrics.csat.service));
        out.push_str(&format!("  {}: {}%\n", catalog.csat_delivery, metrics.csat.delivery));
        out.push_str(&format!("  {}: {}%\n", catalog.csat_platform, metrics.csat.platform));
        out.push('\n');
    }

    if let Some(sentiment) = &snapshot.sentiment {
        out.push_str(catalog.sentiment_title);
        out.push('\n');
        out.push_str(&format!("  {}: {}\n", catalog.positive, sentiment.positive));
        out.push_str(&format!("  {}: {}\n", catalog.neutral, sentiment.neutral));
        out.push_str(&format!("  {}: {}\n", catalog.negative, sentiment.negative));
        out.push('\n');
    }

    if let Some(suggestions) = &snapshot.suggestions {
        out.push_str(catalog.suggestions_title);
        out.push('\n');
        for suggestion in suggestions {
            out.push_str(&format!("  - \"{}\"\n", suggestion.original_comment));
            out.push_str(&format!("    {}\n", suggestion.suggestion));
        }
        out.push('\n');
    }

    if let Some(highlights) = &snapshot.highlights {
        out.push_str(catalog.highlights_title);
        out.push('\n');
        for highlight in highlights {
            out.push_str(&format!(
                "  - \"{}\" (NPS {})\n",
                highlight.positive_comment, highlight.nps_score
            ));
            out.push_str(&format!("    {}\n", highlight.reason));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard::{
        CsatBreakdown, MetricsSummary, NpsBreakdown, Phase, PositiveHighlight, SentimentTally,
        Suggestion,
    };

    fn ready_snapshot(language: Language) -> Snapshot {
        Snapshot {
            phase: Phase::Ready,
            language,
            data_loaded: true,
            record_count: 4,
            action_label: "Actualizar",
            metrics: Some(MetricsSummary {
                nps: NpsBreakdown {
                    score: 25,
                    promoters: 2,
                    passives: 1,
                    detractors: 1,
                    total: 4,
                },
                csat: CsatBreakdown {
                    service: 67,
                    delivery: 50,
                    platform: 50,
                },
            }),
            sentiment: Some(SentimentTally {
                positive: 2,
                neutral: 1,
                negative: 1,
            }),
            suggestions: Some(vec![Suggestion {
                original_comment: "El envío tardó demasiado".to_string(),
                suggestion: "Ofrecer envío exprés".to_string(),
            }]),
            highlights: Some(vec![PositiveHighlight {
                positive_comment: "El soporte es excelente".to_string(),
                nps_score: 10.0,
                reason: "La calidad del soporte fideliza".to_string(),
            }]),
            error: None,
        }
    }

    #[test]
    fn test_parse_date_accepts_iso() {
        let parsed = parse_date(Some("2024-03-10"), "--start").unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2024, 3, 10));
        assert_eq!(parse_date(None, "--start").unwrap(), None);
    }

    #[test]
    fn test_parse_date_rejects_slash_format() {
        assert!(parse_date(Some("10/03/2024"), "--start").is_err());
    }

    #[test]
    fn test_report_is_localized() {
        let spanish = format_report(&ready_snapshot(Language::Es));
        assert!(spanish.contains("Panel de Opiniones de Clientes"));
        assert!(spanish.contains("NPS (Net Promoter Score): 25"));
        assert!(spanish.contains("Promotores: 2"));
        assert!(spanish.contains("Atención al cliente: 67%"));

        let portuguese = format_report(&ready_snapshot(Language::Pt));
        assert!(portuguese.contains("Painel de Opiniões de Clientes"));
        assert!(portuguese.contains("Detratores: 1"));
        assert!(portuguese.contains("Atendimento ao cliente: 67%"));
    }

    #[test]
    fn test_report_lists_suggestions_and_highlights() {
        let report = format_report(&ready_snapshot(Language::Es));
        assert!(report.contains("- \"El envío tardó demasiado\""));
        assert!(report.contains("Ofrecer envío exprés"));
        assert!(report.contains("- \"El soporte es excelente\" (NPS 10)"));
    }

    #[test]
    fn test_report_skips_missing_sections() {
        let mut snapshot = ready_snapshot(Language::Es);
        snapshot.sentiment = None;
        snapshot.suggestions = None;
        snapshot.highlights = None;

        let report = format_report(&snapshot);
        assert!(report.contains("NPS (Net Promoter Score)"));
        assert!(!report.contains("Análisis de Sentimiento"));
        assert!(!report.contains("Sugerencias de Mejora"));
    }
}
