//! Resident directory API handlers.
//!
//! ```text
//! GET    /api/residents?search=khan&sortBy=moveInDate&order=desc
//! POST   /api/residents {"name":"Ali Raza","flat":"A-101","contact":"0333-1234567","moveInDate":"2024-01-01"}
//! PUT    /api/residents/1 {...}
//! DELETE /api/residents/1
//! POST   /api/residents/bulk-delete {"ids":[1,2]}
//! ```

use std::collections::BTreeSet;

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::domain::{
    Error, Resident, ResidentDraft, ResidentId, ResidentListError, SortField, SortOrder,
    filter_residents, sort_residents,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, ResidentSchema};
use crate::inbound::http::state::HttpState;

/// Query string for `GET /api/residents`.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase", default)]
#[into_params(parameter_in = Query)]
pub struct ResidentListQuery {
    /// Case-insensitive match on name or flat, verbatim match on contact.
    pub search: Option<String>,
    /// One of `name`, `flat`, `contact`, `moveInDate`.
    #[param(value_type = Option<String>, example = "name")]
    pub sort_by: Option<SortField>,
    /// `asc` or `desc`.
    #[param(value_type = Option<String>, example = "asc")]
    pub order: Option<SortOrder>,
}

/// Request body for creating or updating a resident.
///
/// Absent or `null` fields are treated as blank so every problem is reported
/// in one response.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ResidentRequest {
    #[schema(example = "Ali Raza")]
    pub name: Option<String>,
    #[schema(example = "A-101")]
    pub flat: Option<String>,
    #[schema(example = "0333-1234567")]
    pub contact: Option<String>,
    #[schema(example = "2024-01-01")]
    pub move_in_date: Option<String>,
}

impl From<ResidentRequest> for ResidentDraft {
    fn from(value: ResidentRequest) -> Self {
        Self::new(
            value.name.unwrap_or_default(),
            value.flat.unwrap_or_default(),
            value.contact.unwrap_or_default(),
            value.move_in_date.unwrap_or_default(),
        )
    }
}

/// Request body for `POST /api/residents/bulk-delete`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct BulkDeleteRequest {
    pub ids: Vec<u64>,
}

/// Response body for `POST /api/residents/bulk-delete`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct BulkDeleteResponse {
    /// Number of residents actually removed.
    pub deleted: usize,
}

fn map_list_error(err: ResidentListError) -> Error {
    match err {
        ResidentListError::Invalid(errors) => Error::invalid_request("resident details are invalid")
            .with_details(json!({ "fields": errors.to_json() })),
        ResidentListError::NotFound(id) => Error::not_found(format!("resident {id} not found")),
        ResidentListError::FormClosed => Error::internal("resident form is not open"),
    }
}

/// List residents, filtered and ordered.
#[utoipa::path(
    get,
    path = "/api/residents",
    params(ResidentListQuery),
    responses(
        (status = 200, description = "Matching residents", body = [ResidentSchema]),
        (status = 400, description = "Unknown sort field or order"),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["residents"],
    operation_id = "listResidents"
)]
#[get("/residents")]
pub async fn list_residents(
    state: web::Data<HttpState>,
    query: web::Query<ResidentListQuery>,
) -> ApiResult<web::Json<Vec<Resident>>> {
    let ResidentListQuery {
        search,
        sort_by,
        order,
    } = query.into_inner();
    let term = search.unwrap_or_default();
    let residents = state.residents.with(|list| {
        let matching: Vec<Resident> = filter_residents(list.residents(), &term)
            .into_iter()
            .cloned()
            .collect();
        sort_residents(
            &matching,
            sort_by.unwrap_or_default(),
            order.unwrap_or_default(),
        )
    })?;
    debug!(count = residents.len(), "residents listed");
    Ok(web::Json(residents))
}

/// Create a resident.
#[utoipa::path(
    post,
    path = "/api/residents",
    request_body = ResidentRequest,
    responses(
        (status = 201, description = "Resident created", body = ResidentSchema),
        (status = 400, description = "Per-field validation errors", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["residents"],
    operation_id = "createResident"
)]
#[post("/residents")]
pub async fn create_resident(
    state: web::Data<HttpState>,
    payload: web::Json<ResidentRequest>,
) -> ApiResult<HttpResponse> {
    let draft = ResidentDraft::from(payload.into_inner());
    let resident = state
        .residents
        .with(|list| list.create(&draft).cloned())?
        .map_err(map_list_error)?;
    Ok(HttpResponse::Created().json(resident))
}

/// Replace a resident's details, keeping its identifier.
#[utoipa::path(
    put,
    path = "/api/residents/{id}",
    params(("id" = u64, Path, description = "Resident identifier")),
    request_body = ResidentRequest,
    responses(
        (status = 200, description = "Resident updated", body = ResidentSchema),
        (status = 400, description = "Per-field validation errors", body = ErrorSchema),
        (status = 404, description = "Unknown resident", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["residents"],
    operation_id = "updateResident"
)]
#[put("/residents/{id}")]
pub async fn update_resident(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
    payload: web::Json<ResidentRequest>,
) -> ApiResult<web::Json<Resident>> {
    let id = ResidentId::new(path.into_inner());
    let draft = ResidentDraft::from(payload.into_inner());
    let resident = state
        .residents
        .with(|list| list.update(id, &draft).cloned())?
        .map_err(map_list_error)?;
    Ok(web::Json(resident))
}

/// Delete one resident.
#[utoipa::path(
    delete,
    path = "/api/residents/{id}",
    params(("id" = u64, Path, description = "Resident identifier")),
    responses(
        (status = 204, description = "Resident deleted"),
        (status = 404, description = "Unknown resident", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["residents"],
    operation_id = "deleteResident"
)]
#[delete("/residents/{id}")]
pub async fn delete_resident(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<HttpResponse> {
    let id = ResidentId::new(path.into_inner());
    state
        .residents
        .with(|list| list.delete(id))?
        .map_err(map_list_error)?;
    Ok(HttpResponse::NoContent().finish())
}

/// Delete several residents at once. Unknown identifiers are ignored.
#[utoipa::path(
    post,
    path = "/api/residents/bulk-delete",
    request_body = BulkDeleteRequest,
    responses(
        (status = 200, description = "Residents deleted", body = BulkDeleteResponse),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["residents"],
    operation_id = "bulkDeleteResidents"
)]
#[post("/residents/bulk-delete")]
pub async fn bulk_delete_residents(
    state: web::Data<HttpState>,
    payload: web::Json<BulkDeleteRequest>,
) -> ApiResult<web::Json<BulkDeleteResponse>> {
    let ids: BTreeSet<ResidentId> = payload
        .into_inner()
        .ids
        .into_iter()
        .map(ResidentId::new)
        .collect();
    let deleted = state.residents.with(|list| list.delete_many(&ids))?;
    Ok(web::Json(BulkDeleteResponse { deleted }))
}

#[cfg(test)]
#[path = "residents_tests.rs"]
mod tests;
