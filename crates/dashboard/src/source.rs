//! Feedback source trait and implementations.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use feedback_core::FeedbackRecord;
use sheet_ingest::{IngestError, SheetClient};

/// Trait for loading the raw feedback record set.
///
/// Abstracted to support different sources (Google Sheets, tests, etc.)
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch and parse every record the source currently holds.
    async fn load(&self) -> Result<Vec<FeedbackRecord>, IngestError>;
}

#[async_trait]
impl RecordSource for SheetClient {
    async fn load(&self) -> Result<Vec<FeedbackRecord>, IngestError> {
        self.fetch_records().await
    }
}

/// An in-memory source for testing that counts how often it is read.
///
/// Clones share the record set and the load counter, so a clone kept
/// outside the dashboard can observe how often the dashboard fetched.
#[derive(Debug, Clone, Default)]
pub struct FixtureSource {
    records: Arc<Vec<FeedbackRecord>>,
    loads: Arc<AtomicUsize>,
}

impl FixtureSource {
    /// Create a source serving the given records.
    pub fn new(records: Vec<FeedbackRecord>) -> Self {
        Self {
            records: Arc::new(records),
            loads: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times the source has been loaded.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordSource for FixtureSource {
    async fn load(&self) -> Result<Vec<FeedbackRecord>, IngestError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.as_ref().clone())
    }
}

/// A source for testing that fails every load with a network error.
#[derive(Debug, Clone, Default)]
pub struct FailingSource;

#[async_trait]
impl RecordSource for FailingSource {
    async fn load(&self) -> Result<Vec<FeedbackRecord>, IngestError> {
        Err(IngestError::Network("fixture source is unreachable".to_string()))
    }
}
