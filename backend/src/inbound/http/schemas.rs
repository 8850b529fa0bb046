//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic and do not derive `ToSchema`. The
//! wrappers here mirror their serialised shape and register under the domain
//! type's path.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    #[schema(example = "resident details are invalid")]
    message: String,
    /// Validation failures list each field under `fields` with its `code`
    /// and `message`.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Resident`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Resident, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ResidentSchema {
    #[schema(example = 1)]
    id: u64,
    #[schema(example = "Ali Raza")]
    name: String,
    #[schema(example = "A-101")]
    flat: String,
    #[schema(example = "0333-1234567")]
    contact: String,
    #[schema(value_type = String, format = Date, example = "2024-01-01")]
    move_in_date: String,
}

/// OpenAPI schema for [`crate::domain::Visitor`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Visitor, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct VisitorSchema {
    #[schema(value_type = String, format = Uuid)]
    id: String,
    #[schema(example = "Hamza Ali")]
    name: String,
    #[schema(example = "A-101")]
    to_visit: String,
    #[schema(example = "Delivery")]
    purpose: String,
    #[schema(value_type = String, format = DateTime, example = "2024-03-01T09:15:00Z")]
    timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_code_schema_lists_every_code() {
        let json = schema_json::<ErrorCodeSchema>();
        for code in ["invalid_request", "not_found", "internal_error"] {
            assert!(json.contains(code), "missing {code}");
        }
        // utoipa replaces :: with . in schema names
        assert_eq!(ErrorCodeSchema::name(), "crate.domain.ErrorCode");
    }

    #[test]
    fn resident_schema_uses_camel_case_fields() {
        let json = schema_json::<ResidentSchema>();
        assert!(json.contains("moveInDate"));
        assert_eq!(ResidentSchema::name(), "crate.domain.Resident");
    }

    #[test]
    fn visitor_schema_uses_camel_case_fields() {
        let json = schema_json::<VisitorSchema>();
        assert!(json.contains("toVisit"));
        assert!(!json.contains("to_visit"));
    }
}
