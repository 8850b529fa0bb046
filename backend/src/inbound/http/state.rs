//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and the resident list, and remain testable without
//! I/O.

use std::sync::{Arc, Mutex};

use crate::domain::ports::{VisitorsCommand, VisitorsQuery};
use crate::domain::{Error, ResidentList};

/// Resident list shared between actix workers.
///
/// The lock is taken for a single controller call and never held across an
/// `.await`.
#[derive(Clone)]
pub struct SharedResidentList(Arc<Mutex<ResidentList>>);

impl SharedResidentList {
    pub fn new(list: ResidentList) -> Self {
        Self(Arc::new(Mutex::new(list)))
    }

    /// Run `f` with exclusive access to the list.
    pub fn with<T>(&self, f: impl FnOnce(&mut ResidentList) -> T) -> Result<T, Error> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| Error::internal("resident list lock poisoned"))?;
        Ok(f(&mut guard))
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub visitors: Arc<dyn VisitorsCommand>,
    pub visitors_query: Arc<dyn VisitorsQuery>,
    pub residents: SharedResidentList,
}

impl HttpState {
    pub fn new(
        visitors: Arc<dyn VisitorsCommand>,
        visitors_query: Arc<dyn VisitorsQuery>,
        residents: SharedResidentList,
    ) -> Self {
        Self {
            visitors,
            visitors_query,
            residents,
        }
    }
}
