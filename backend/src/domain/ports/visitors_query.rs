//! Driving port for reading the visitor log.

use async_trait::async_trait;

use crate::domain::{Error, Visitor};

/// Domain use-case port for listing logged visitors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitorsQuery: Send + Sync {
    /// Every logged visitor, newest first.
    async fn list_visitors(&self) -> Result<Vec<Visitor>, Error>;
}
