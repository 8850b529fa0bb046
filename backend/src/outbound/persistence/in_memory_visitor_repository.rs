//! In-memory implementation of the visitor repository port.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::Visitor;
use crate::domain::ports::{VisitorRepository, VisitorRepositoryError};

/// Visitor log kept in a mutex-guarded vector in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryVisitorRepository {
    visitors: Mutex<Vec<Visitor>>,
}

impl InMemoryVisitorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<MutexGuard<'_, Vec<Visitor>>, VisitorRepositoryError> {
        self.visitors
            .lock()
            .map_err(|_| VisitorRepositoryError::connection("visitor log lock poisoned"))
    }
}

#[async_trait]
impl VisitorRepository for InMemoryVisitorRepository {
    async fn save(&self, visitor: &Visitor) -> Result<(), VisitorRepositoryError> {
        let mut entries = self.entries()?;
        entries.push(visitor.clone());
        debug!(stored = entries.len(), "visitor appended to log");
        Ok(())
    }

    async fn list_newest_first(&self) -> Result<Vec<Visitor>, VisitorRepositoryError> {
        // Walk backwards so the stable sort keeps the latest save first on
        // equal timestamps.
        let mut visitors: Vec<Visitor> = self.entries()?.iter().rev().cloned().collect();
        visitors.sort_by_key(|visitor| std::cmp::Reverse(visitor.timestamp()));
        Ok(visitors)
    }
}
