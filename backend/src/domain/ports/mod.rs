//! Domain ports and supporting types for the hexagonal boundary.

mod visitor_repository;
mod visitors_command;
mod visitors_query;

#[cfg(test)]
pub use visitor_repository::MockVisitorRepository;
pub use visitor_repository::{VisitorRepository, VisitorRepositoryError};
#[cfg(test)]
pub use visitors_command::MockVisitorsCommand;
pub use visitors_command::VisitorsCommand;
#[cfg(test)]
pub use visitors_query::MockVisitorsQuery;
pub use visitors_query::VisitorsQuery;
