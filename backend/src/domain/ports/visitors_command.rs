//! Driving port for logging visitors.
//!
//! Inbound adapters submit raw visitor details through this port; validation,
//! time stamping and persistence happen behind it.

use async_trait::async_trait;

use crate::domain::{Error, Visitor, VisitorDraft};

/// Domain use-case port for recording a visitor at the gate.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitorsCommand: Send + Sync {
    /// Validate and store a visitor, returning the stamped entry.
    async fn log_visitor(&self, draft: VisitorDraft) -> Result<Visitor, Error>;
}
