//! Outbound ports
//!
//! Interfaces the infrastructure layer implements for the application core.

use async_trait::async_trait;

use crate::domain::submission::SubmissionRecord;

/// Receives one record per valid submission.
///
/// Emission is modeled as non-failing: the sink is a boundary collaborator
/// (log writer, forwarding call) and any trouble it runs into stays on its
/// side of the boundary.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn emit(&self, record: SubmissionRecord);
}
