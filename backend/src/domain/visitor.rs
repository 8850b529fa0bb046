//! Visitor log data model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use uuid::Uuid;

/// Identifier assigned to a visitor entry when it is logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitorId(Uuid);

impl VisitorId {
    /// Generate a new random [`VisitorId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for VisitorId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for VisitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Fields captured at the gate for each visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VisitorField {
    Name,
    ToVisit,
    Purpose,
}

impl VisitorField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::ToVisit => "toVisit",
            Self::Purpose => "purpose",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::ToVisit => "Resident to visit",
            Self::Purpose => "Purpose",
        }
    }
}

/// Raised when a visitor draft has blank fields.
///
/// Every blank field is listed, in form order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("visitor fields are required: {}", field_list(.missing))]
pub struct VisitorValidationError {
    missing: Vec<VisitorField>,
}

impl VisitorValidationError {
    pub fn missing(&self) -> &[VisitorField] {
        &self.missing
    }

    /// Field-keyed JSON object matching the resident error layout.
    pub fn to_json(&self) -> Value {
        let fields: Map<String, Value> = self
            .missing
            .iter()
            .map(|field| {
                (
                    field.as_str().to_owned(),
                    json!({
                        "code": "missing_field",
                        "message": format!("{} is required", field.label()),
                    }),
                )
            })
            .collect();
        Value::Object(fields)
    }
}

fn field_list(fields: &[VisitorField]) -> String {
    let names: Vec<&str> = fields.iter().map(|field| field.as_str()).collect();
    names.join(", ")
}

/// Unvalidated visitor details as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisitorDraft {
    pub name: String,
    pub to_visit: String,
    pub purpose: String,
}

impl VisitorDraft {
    pub fn new(
        name: impl Into<String>,
        to_visit: impl Into<String>,
        purpose: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            to_visit: to_visit.into(),
            purpose: purpose.into(),
        }
    }

    /// Check that no field is blank.
    ///
    /// # Examples
    /// ```
    /// use secure_nest::domain::{VisitorDraft, VisitorField};
    ///
    /// let err = VisitorDraft::new("Hamza", " ", "").validate().unwrap_err();
    /// assert_eq!(err.missing(), [VisitorField::ToVisit, VisitorField::Purpose]);
    /// ```
    pub fn validate(&self) -> Result<(), VisitorValidationError> {
        let missing: Vec<VisitorField> = [
            (VisitorField::Name, &self.name),
            (VisitorField::ToVisit, &self.to_visit),
            (VisitorField::Purpose, &self.purpose),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(VisitorValidationError { missing })
        }
    }
}

/// A logged visitor entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visitor {
    id: VisitorId,
    name: String,
    to_visit: String,
    purpose: String,
    timestamp: DateTime<Utc>,
}

impl Visitor {
    /// Stamp `draft` with an identifier and arrival time.
    ///
    /// Values are stored verbatim; call [`VisitorDraft::validate`] first.
    pub fn new(id: VisitorId, draft: VisitorDraft, timestamp: DateTime<Utc>) -> Self {
        let VisitorDraft {
            name,
            to_visit,
            purpose,
        } = draft;
        Self {
            id,
            name,
            to_visit,
            purpose,
            timestamp,
        }
    }

    pub fn id(&self) -> VisitorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn to_visit(&self) -> &str {
        &self.to_visit
    }

    pub fn purpose(&self) -> &str {
        &self.purpose
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    fn complete_draft_is_valid() {
        assert_eq!(VisitorDraft::new("Hamza", "A-101", "Delivery").validate(), Ok(()));
    }

    #[rstest]
    fn every_blank_field_is_reported() {
        let err = VisitorDraft::default().validate().expect_err("all blank");

        assert_eq!(
            err.missing(),
            [VisitorField::Name, VisitorField::ToVisit, VisitorField::Purpose]
        );
        assert_eq!(
            err.to_json()["toVisit"]["message"],
            "Resident to visit is required"
        );
        assert_eq!(
            err.to_string(),
            "visitor fields are required: name, toVisit, purpose"
        );
    }

    #[rstest]
    fn validation_error_is_a_standard_error() {
        let err = VisitorDraft::new("Hamza", "", "Guest")
            .validate()
            .expect_err("blank resident");
        let boxed: Box<dyn std::error::Error> = Box::new(err);

        assert_eq!(boxed.to_string(), "visitor fields are required: toVisit");
        assert!(boxed.source().is_none());
    }

    #[rstest]
    fn visitor_serialises_with_camel_case_keys() {
        let timestamp = Utc
            .with_ymd_and_hms(2024, 3, 1, 9, 15, 0)
            .single()
            .expect("valid timestamp");
        let visitor = Visitor::new(
            VisitorId::random(),
            VisitorDraft::new("Hamza", "Ali Raza", "Guest"),
            timestamp,
        );

        let value = serde_json::to_value(&visitor).expect("serialise visitor");

        assert_eq!(value["toVisit"], "Ali Raza");
        assert_eq!(value["timestamp"], "2024-03-01T09:15:00Z");
        assert_eq!(value["id"], visitor.id().to_string());
    }
}
