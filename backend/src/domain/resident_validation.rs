//! Resident field validation, duplicate detection and listing helpers.
//!
//! Everything in this module is pure. Validators report failures as values
//! and never short-circuit across fields: [`validate_submission`] runs every
//! rule and returns one [`ResidentErrors`] mapping holding the first failure
//! seen for each field.

use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde_json::{Map, Value, json};

use super::resident::{
    Resident, ResidentDetails, ResidentDraft, ResidentField, ResidentId, SortField, SortOrder,
};

/// Minimum trimmed length of a resident name.
pub const NAME_MIN: usize = 3;
/// Maximum trimmed length of a resident name.
pub const NAME_MAX: usize = 50;

pub const FLAT_EXAMPLE: &str = "A-101";
pub const CONTACT_EXAMPLE: &str = "0333-1234567";
pub const MOVE_IN_DATE_EXAMPLE: &str = "2024-01-01";

const CONTACT_DIGITS: usize = 11;
const CONTACT_PREFIX_DIGITS: usize = 4;
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reasons a single resident field can be rejected.
///
/// The display text is the predicate of a sentence whose subject names the
/// field, see [`ResidentErrors::message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ResidentValidationError {
    #[error("is required")]
    MissingField,
    #[error("must be at least {min} characters long")]
    TooShort { min: usize },
    #[error("must be less than {max} characters")]
    TooLong { max: usize },
    #[error("can only contain letters and spaces")]
    InvalidCharacters,
    #[error("must be in format {example}")]
    InvalidFormat { example: &'static str },
    #[error("is already occupied")]
    DuplicateFlat,
    #[error("cannot be in the future")]
    FutureDate,
}

impl ResidentValidationError {
    /// Stable machine-readable code for API payloads.
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::TooShort { .. } => "too_short",
            Self::TooLong { .. } => "too_long",
            Self::InvalidCharacters => "invalid_characters",
            Self::InvalidFormat { .. } => "invalid_format",
            Self::DuplicateFlat => "duplicate_flat",
            Self::FutureDate => "future_date",
        }
    }
}

/// Per-field validation failures for one submission.
///
/// Holds at most one error per field; the first one recorded wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResidentErrors(BTreeMap<ResidentField, ResidentValidationError>);

impl ResidentErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `result` against `field`, keeping any earlier error.
    pub fn record(&mut self, field: ResidentField, result: Result<(), ResidentValidationError>) {
        if let Err(error) = result {
            self.0.entry(field).or_insert(error);
        }
    }

    /// Drop the error recorded for `field`, if any.
    pub fn clear(&mut self, field: ResidentField) {
        self.0.remove(&field);
    }

    pub fn get(&self, field: ResidentField) -> Option<ResidentValidationError> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ResidentField, ResidentValidationError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }

    /// Full sentence for the error recorded against `field`.
    ///
    /// ```
    /// use secure_nest::domain::{validate_resident, ResidentDraft, ResidentField};
    ///
    /// let draft = ResidentDraft::new("Ali Raza", "a-101", "0333-1234567", "2024-01-01");
    /// let errors = validate_resident(&draft).unwrap_err();
    /// assert_eq!(
    ///     errors.message(ResidentField::Flat).as_deref(),
    ///     Some("Flat number must be in format A-101"),
    /// );
    /// ```
    pub fn message(&self, field: ResidentField) -> Option<String> {
        self.get(field).map(|error| describe(field, error))
    }

    /// `Ok(())` when no field failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// JSON object keyed by wire field name, each entry holding the error
    /// `code` and display `message`.
    pub fn to_json(&self) -> Value {
        let fields: Map<String, Value> = self
            .iter()
            .map(|(field, error)| {
                (
                    field.as_str().to_owned(),
                    json!({ "code": error.code(), "message": describe(field, error) }),
                )
            })
            .collect();
        Value::Object(fields)
    }
}

impl fmt::Display for ResidentErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, error) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{}", describe(field, error))?;
        }
        Ok(())
    }
}

impl std::error::Error for ResidentErrors {}

fn describe(field: ResidentField, error: ResidentValidationError) -> String {
    match (field, error) {
        (_, ResidentValidationError::DuplicateFlat) => format!("This flat number {error}"),
        (ResidentField::Contact, ResidentValidationError::InvalidFormat { .. }) => {
            format!("Contact {error}")
        }
        _ => format!("{} {error}", field.label()),
    }
}

static NAME_RE: OnceLock<Regex> = OnceLock::new();
static FLAT_RE: OnceLock<Regex> = OnceLock::new();
static CONTACT_RE: OnceLock<Regex> = OnceLock::new();

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| {
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("resident regex {pattern} failed to compile: {error}"))
    })
}

fn name_regex() -> &'static Regex {
    // Length is enforced separately; this constrains allowed characters.
    compiled(&NAME_RE, r"^[A-Za-z\s]+$")
}

fn flat_regex() -> &'static Regex {
    compiled(&FLAT_RE, "^[A-Z]-[0-9]{3}$")
}

fn contact_regex() -> &'static Regex {
    compiled(&CONTACT_RE, "^[0-9]{4}-[0-9]{7}$")
}

/// Validate a resident name.
///
/// Length bounds apply to the trimmed value; the character check applies to
/// the value as entered.
pub fn validate_name(value: &str) -> Result<(), ResidentValidationError> {
    if value.is_empty() {
        return Err(ResidentValidationError::MissingField);
    }
    let length = value.trim().chars().count();
    if length < NAME_MIN {
        return Err(ResidentValidationError::TooShort { min: NAME_MIN });
    }
    if length > NAME_MAX {
        return Err(ResidentValidationError::TooLong { max: NAME_MAX });
    }
    if !name_regex().is_match(value) {
        return Err(ResidentValidationError::InvalidCharacters);
    }
    Ok(())
}

/// Validate a flat label such as `A-101`.
pub fn validate_flat(value: &str) -> Result<(), ResidentValidationError> {
    if value.is_empty() {
        return Err(ResidentValidationError::MissingField);
    }
    if !flat_regex().is_match(value) {
        return Err(ResidentValidationError::InvalidFormat {
            example: FLAT_EXAMPLE,
        });
    }
    Ok(())
}

/// Validate a contact number such as `0333-1234567`.
pub fn validate_contact(value: &str) -> Result<(), ResidentValidationError> {
    if value.is_empty() {
        return Err(ResidentValidationError::MissingField);
    }
    if !contact_regex().is_match(value) {
        return Err(ResidentValidationError::InvalidFormat {
            example: CONTACT_EXAMPLE,
        });
    }
    Ok(())
}

/// Run the name, flat and contact validators, reporting every failure.
pub fn validate_resident(draft: &ResidentDraft) -> Result<(), ResidentErrors> {
    let mut errors = ResidentErrors::new();
    errors.record(ResidentField::Name, validate_name(&draft.name));
    errors.record(ResidentField::Flat, validate_flat(&draft.flat));
    errors.record(ResidentField::Contact, validate_contact(&draft.contact));
    errors.into_result()
}

/// Parse a move-in date and reject dates after `today`.
pub fn validate_move_in_date(
    value: &str,
    today: NaiveDate,
) -> Result<NaiveDate, ResidentValidationError> {
    if value.trim().is_empty() {
        return Err(ResidentValidationError::MissingField);
    }
    let date = NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        ResidentValidationError::InvalidFormat {
            example: MOVE_IN_DATE_EXAMPLE,
        }
    })?;
    if date > today {
        return Err(ResidentValidationError::FutureDate);
    }
    Ok(date)
}

/// True when a resident other than `exclude_id` already occupies `flat`.
///
/// ```
/// use secure_nest::domain::is_duplicate_flat;
///
/// assert!(!is_duplicate_flat("A-101", &[], None));
/// ```
pub fn is_duplicate_flat(flat: &str, residents: &[Resident], exclude_id: Option<ResidentId>) -> bool {
    residents
        .iter()
        .any(|resident| resident.flat() == flat && Some(resident.id()) != exclude_id)
}

/// Canonicalise a contact number to `dddd-ddddddd`.
///
/// Input that does not hold exactly eleven digits is returned unchanged;
/// rejecting it is the validator's job.
///
/// ```
/// use secure_nest::domain::format_contact;
///
/// assert_eq!(format_contact("03331234567"), "0333-1234567");
/// assert_eq!(format_contact("12345"), "12345");
/// ```
pub fn format_contact(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != CONTACT_DIGITS {
        return raw.to_owned();
    }
    let (prefix, rest) = digits.split_at(CONTACT_PREFIX_DIGITS);
    format!("{prefix}-{rest}")
}

/// Validate a complete submission and produce storable details.
///
/// Runs the field validators, the duplicate-flat check (ignoring
/// `exclude_id`) and the move-in date rule. All checks run; a field keeps the
/// first error recorded against it.
pub fn validate_submission(
    draft: &ResidentDraft,
    residents: &[Resident],
    exclude_id: Option<ResidentId>,
    today: NaiveDate,
) -> Result<ResidentDetails, ResidentErrors> {
    let mut errors = validate_resident(draft).err().unwrap_or_default();
    if is_duplicate_flat(&draft.flat, residents, exclude_id) {
        errors.record(
            ResidentField::Flat,
            Err(ResidentValidationError::DuplicateFlat),
        );
    }
    let move_in_date = match validate_move_in_date(&draft.move_in_date, today) {
        Ok(date) => Some(date),
        Err(error) => {
            errors.record(ResidentField::MoveInDate, Err(error));
            None
        }
    };

    match move_in_date {
        Some(move_in_date) if errors.is_empty() => Ok(ResidentDetails {
            name: draft.name.clone(),
            flat: draft.flat.clone(),
            contact: format_contact(&draft.contact),
            move_in_date,
        }),
        _ => Err(errors),
    }
}

/// Residents matching `term`, in their original order.
pub fn filter_residents<'a>(residents: &'a [Resident], term: &str) -> Vec<&'a Resident> {
    residents
        .iter()
        .filter(|resident| resident.matches(term))
        .collect()
}

/// Return a sorted copy of `residents`.
///
/// Keys compare case-insensitively; equal keys keep their input order in
/// both directions.
pub fn sort_residents(residents: &[Resident], field: SortField, order: SortOrder) -> Vec<Resident> {
    let mut sorted = residents.to_vec();
    match order {
        SortOrder::Asc => sorted.sort_by_cached_key(|resident| resident.sort_key(field)),
        SortOrder::Desc => sorted.sort_by_cached_key(|resident| Reverse(resident.sort_key(field))),
    }
    sorted
}
