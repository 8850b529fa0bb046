//! Visitor log API handlers.
//!
//! ```text
//! POST /api/visitors {"name":"Hamza","toVisit":"A-101","purpose":"Delivery"}
//! GET /api/visitors
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Visitor, VisitorDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, VisitorSchema};
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/visitors`.
///
/// Absent or `null` fields are treated as blank so the response lists every
/// missing field instead of failing JSON extraction.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct VisitorRequest {
    #[schema(example = "Hamza Ali")]
    pub name: Option<String>,
    #[schema(example = "A-101")]
    pub to_visit: Option<String>,
    #[schema(example = "Delivery")]
    pub purpose: Option<String>,
}

impl From<VisitorRequest> for VisitorDraft {
    fn from(value: VisitorRequest) -> Self {
        Self::new(
            value.name.unwrap_or_default(),
            value.to_visit.unwrap_or_default(),
            value.purpose.unwrap_or_default(),
        )
    }
}

/// Log a visitor at the gate.
#[utoipa::path(
    post,
    path = "/api/visitors",
    request_body = VisitorRequest,
    responses(
        (status = 201, description = "Visitor logged", body = VisitorSchema),
        (status = 400, description = "Missing visitor details", body = ErrorSchema),
        (status = 500, description = "Visitor log unavailable", body = ErrorSchema)
    ),
    tags = ["visitors"],
    operation_id = "logVisitor"
)]
#[post("/visitors")]
pub async fn log_visitor(
    state: web::Data<HttpState>,
    payload: web::Json<VisitorRequest>,
) -> ApiResult<HttpResponse> {
    let visitor = state
        .visitors
        .log_visitor(VisitorDraft::from(payload.into_inner()))
        .await?;
    Ok(HttpResponse::Created().json(visitor))
}

/// List logged visitors, newest first.
#[utoipa::path(
    get,
    path = "/api/visitors",
    responses(
        (status = 200, description = "Visitors, newest first", body = [VisitorSchema]),
        (status = 500, description = "Visitor log unavailable", body = ErrorSchema)
    ),
    tags = ["visitors"],
    operation_id = "listVisitors"
)]
#[get("/visitors")]
pub async fn list_visitors(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Visitor>>> {
    let visitors = state.visitors_query.list_visitors().await?;
    Ok(web::Json(visitors))
}

#[cfg(test)]
#[path = "visitors_tests.rs"]
mod tests;
