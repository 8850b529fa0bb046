//! Domain primitives, aggregates and services.
//!
//! Purpose: define the resident directory and visitor log independently of
//! any transport. Validation and list semantics live here; adapters only
//! translate.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Resident, ResidentDraft, ResidentId: resident records and raw input.
//! - resident validation helpers and [`ResidentList`], the list controller.
//! - Visitor, VisitorDraft and [`VisitorService`] behind the visitor ports.

pub mod error;
pub mod example_residents;
pub mod ports;
pub mod resident;
pub mod resident_list;
pub mod resident_validation;
pub mod visitor;
pub mod visitor_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::example_residents::seed_example_residents;
pub use self::resident::{
    Resident, ResidentDetails, ResidentDraft, ResidentField, ResidentId, SortField, SortOrder,
};
pub use self::resident_list::{
    FormMode, ResidentForm, ResidentList, ResidentListError, SortConfig,
};
pub use self::resident_validation::{
    NAME_MAX, NAME_MIN, ResidentErrors, ResidentValidationError, filter_residents,
    format_contact, is_duplicate_flat, sort_residents, validate_contact, validate_flat,
    validate_move_in_date, validate_name, validate_resident, validate_submission,
};
pub use self::visitor::{Visitor, VisitorDraft, VisitorField, VisitorId, VisitorValidationError};
pub use self::visitor_service::VisitorService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use secure_nest::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::not_found("no such resident"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
