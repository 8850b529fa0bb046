//! Persistence adapters for the visitor log.
//!
//! The visitor log is held in process memory; entries do not survive a
//! restart.

mod in_memory_visitor_repository;

pub use in_memory_visitor_repository::InMemoryVisitorRepository;
