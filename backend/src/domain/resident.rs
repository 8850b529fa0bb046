//! Resident data model.
//!
//! A [`ResidentDraft`] carries raw form input exactly as the operator typed
//! it. Only [`crate::domain::resident_validation::validate_submission`] can
//! turn a draft into [`ResidentDetails`], and only the resident list can turn
//! details into a stored [`Resident`] with an identifier.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier assigned to a resident when it is first stored.
///
/// Identifiers are allocated by the resident list and never reused, even
/// after the resident they belonged to is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResidentId(u64);

impl ResidentId {
    /// Wrap a raw identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ResidentId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ResidentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Editable resident fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResidentField {
    Name,
    Flat,
    Contact,
    MoveInDate,
}

impl ResidentField {
    /// Every field in form order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Flat, Self::Contact, Self::MoveInDate];

    /// Human-readable label used as the subject of validation messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Flat => "Flat number",
            Self::Contact => "Contact number",
            Self::MoveInDate => "Move-in date",
        }
    }

    /// Wire name of the field, matching the JSON representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Flat => "flat",
            Self::Contact => "contact",
            Self::MoveInDate => "moveInDate",
        }
    }
}

impl fmt::Display for ResidentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw, unvalidated resident input.
///
/// # Examples
/// ```
/// use secure_nest::domain::{ResidentDraft, ResidentField};
///
/// let mut draft = ResidentDraft::new("Ali Raza", "A-101", "0333-1234567", "2024-01-01");
/// draft.set_field(ResidentField::Name, "Sara Khan");
/// assert_eq!(draft.field(ResidentField::Name), "Sara Khan");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResidentDraft {
    pub name: String,
    pub flat: String,
    pub contact: String,
    pub move_in_date: String,
}

impl ResidentDraft {
    /// Build a draft from its four raw values.
    pub fn new(
        name: impl Into<String>,
        flat: impl Into<String>,
        contact: impl Into<String>,
        move_in_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            flat: flat.into(),
            contact: contact.into(),
            move_in_date: move_in_date.into(),
        }
    }

    /// Raw value of `field`.
    pub fn field(&self, field: ResidentField) -> &str {
        match field {
            ResidentField::Name => &self.name,
            ResidentField::Flat => &self.flat,
            ResidentField::Contact => &self.contact,
            ResidentField::MoveInDate => &self.move_in_date,
        }
    }

    /// Replace the raw value of `field`.
    pub fn set_field(&mut self, field: ResidentField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ResidentField::Name => self.name = value,
            ResidentField::Flat => self.flat = value,
            ResidentField::Contact => self.contact = value,
            ResidentField::MoveInDate => self.move_in_date = value,
        }
    }
}

impl From<&Resident> for ResidentDraft {
    fn from(resident: &Resident) -> Self {
        Self {
            name: resident.name.clone(),
            flat: resident.flat.clone(),
            contact: resident.contact.clone(),
            move_in_date: resident.move_in_date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Field values that passed validation and are ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidentDetails {
    pub(crate) name: String,
    pub(crate) flat: String,
    pub(crate) contact: String,
    pub(crate) move_in_date: NaiveDate,
}

impl ResidentDetails {
    /// Contact number in canonical `dddd-ddddddd` form.
    pub fn contact(&self) -> &str {
        &self.contact
    }

    /// Parsed move-in date.
    pub fn move_in_date(&self) -> NaiveDate {
        self.move_in_date
    }
}

/// A stored resident record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resident {
    id: ResidentId,
    name: String,
    flat: String,
    contact: String,
    move_in_date: NaiveDate,
}

impl Resident {
    pub(crate) fn new(id: ResidentId, details: ResidentDetails) -> Self {
        let ResidentDetails {
            name,
            flat,
            contact,
            move_in_date,
        } = details;
        Self {
            id,
            name,
            flat,
            contact,
            move_in_date,
        }
    }

    pub fn id(&self) -> ResidentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn flat(&self) -> &str {
        &self.flat
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn move_in_date(&self) -> NaiveDate {
        self.move_in_date
    }

    /// Case-insensitive key for ordering by `field`.
    ///
    /// Dates use their ISO rendering, which orders chronologically.
    pub(crate) fn sort_key(&self, field: SortField) -> String {
        match field {
            SortField::Name => self.name.to_lowercase(),
            SortField::Flat => self.flat.to_lowercase(),
            SortField::Contact => self.contact.to_lowercase(),
            SortField::MoveInDate => self.move_in_date.format("%Y-%m-%d").to_string(),
        }
    }

    /// Search predicate: name and flat match case-insensitively, contact
    /// matches verbatim.
    pub(crate) fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.flat.to_lowercase().contains(&needle)
            || self.contact.contains(term)
    }
}

/// Column a resident listing is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    Name,
    Flat,
    Contact,
    MoveInDate,
}

/// Direction of a resident listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}
