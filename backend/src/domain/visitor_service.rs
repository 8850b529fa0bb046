//! Visitor log domain service.
//!
//! Implements the visitor driving ports over a [`VisitorRepository`]. The
//! service owns validation and time stamping so adapters only move data.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{info, warn};

use crate::domain::ports::{
    VisitorRepository, VisitorRepositoryError, VisitorsCommand, VisitorsQuery,
};
use crate::domain::{Error, Visitor, VisitorDraft, VisitorId};

/// Visitor service implementing [`VisitorsCommand`] and [`VisitorsQuery`].
#[derive(Clone)]
pub struct VisitorService<R> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> VisitorService<R> {
    /// Create a service over `repo`, stamping entries with `clock`.
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

fn map_repository_error(error: VisitorRepositoryError) -> Error {
    match error {
        VisitorRepositoryError::Connection { message } => {
            Error::internal(format!("visitor repository unavailable: {message}"))
        }
        VisitorRepositoryError::Query { message } => {
            Error::internal(format!("visitor repository error: {message}"))
        }
    }
}

#[async_trait]
impl<R> VisitorsCommand for VisitorService<R>
where
    R: VisitorRepository,
{
    async fn log_visitor(&self, draft: VisitorDraft) -> Result<Visitor, Error> {
        if let Err(err) = draft.validate() {
            return Err(Error::invalid_request("visitor details are incomplete")
                .with_details(json!({ "fields": err.to_json() })));
        }

        let visitor = Visitor::new(VisitorId::random(), draft, self.clock.utc());
        self.repo.save(&visitor).await.map_err(|err| {
            warn!(error = %err, "failed to save visitor");
            map_repository_error(err)
        })?;
        info!(visitor_id = %visitor.id(), "visitor logged");
        Ok(visitor)
    }
}

#[async_trait]
impl<R> VisitorsQuery for VisitorService<R>
where
    R: VisitorRepository,
{
    async fn list_visitors(&self) -> Result<Vec<Visitor>, Error> {
        self.repo
            .list_newest_first()
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "visitor_service_tests.rs"]
mod tests;
