//! Secure Nest backend library: resident directory, visitor log and the
//! HTTP adapter serving them.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod settings;
