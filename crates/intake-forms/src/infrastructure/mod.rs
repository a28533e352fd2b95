//! Infrastructure layer
//!
//! Concrete [`SubmissionSink`] implementations: a structured-log sink for
//! production wiring and an in-memory sink for tests.

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::{error, info};

use crate::domain::submission::SubmissionRecord;
use crate::ports::SubmissionSink;

/// Logs each record as a single structured JSON line.
#[derive(Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SubmissionSink for TracingSink {
    async fn emit(&self, record: SubmissionRecord) {
        match serde_json::to_string(&record) {
            Ok(json) => info!(target: "intake_forms::submissions", %json, "form submitted"),
            Err(e) => error!(submission_id = %record.id, "failed to serialize record: {e}"),
        }
    }
}

/// Captures records in memory, keyed by record id.
#[derive(Default)]
pub struct MemorySink {
    records: DashMap<String, SubmissionRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<SubmissionRecord> {
        self.records.get(id).map(|r| r.clone())
    }

    /// All captured records, in no particular order.
    pub fn records(&self) -> Vec<SubmissionRecord> {
        self.records.iter().map(|r| r.clone()).collect()
    }
}

#[async_trait]
impl SubmissionSink for MemorySink {
    async fn emit(&self, record: SubmissionRecord) {
        self.records.insert(record.id.clone(), record);
    }
}
