//! Driven port for visitor log persistence.
//!
//! The domain only needs to append entries and read them back newest first;
//! adapters decide how the log is stored.

use async_trait::async_trait;

use crate::domain::Visitor;

/// Persistence errors raised by visitor repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VisitorRepositoryError {
    /// The backing store could not be reached.
    #[error("visitor repository connection failed: {message}")]
    Connection { message: String },
    /// A read or write failed during execution.
    #[error("visitor repository query failed: {message}")]
    Query { message: String },
}

impl VisitorRepositoryError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitorRepository: Send + Sync {
    /// Append a visitor entry.
    async fn save(&self, visitor: &Visitor) -> Result<(), VisitorRepositoryError>;

    /// Every stored entry ordered by timestamp, newest first.
    async fn list_newest_first(&self) -> Result<Vec<Visitor>, VisitorRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(VisitorRepositoryError::connection("refused"), "visitor repository connection failed: refused")]
    #[case(VisitorRepositoryError::query("timeout"), "visitor repository query failed: timeout")]
    fn errors_render_their_message(#[case] error: VisitorRepositoryError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }
}
