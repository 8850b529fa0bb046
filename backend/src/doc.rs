//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the schema wrappers from [`crate::inbound::http::schemas`]. The
//! document backs Swagger UI in debug builds and the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::residents::{BulkDeleteRequest, BulkDeleteResponse, ResidentRequest};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, ResidentSchema, VisitorSchema};
use crate::inbound::http::visitors::VisitorRequest;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Secure Nest API",
        description = "Resident directory, visitor log and health probes for a residential building."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::visitors::log_visitor,
        crate::inbound::http::visitors::list_visitors,
        crate::inbound::http::residents::list_residents,
        crate::inbound::http::residents::create_resident,
        crate::inbound::http::residents::update_resident,
        crate::inbound::http::residents::delete_resident,
        crate::inbound::http::residents::bulk_delete_residents,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        ResidentSchema,
        VisitorSchema,
        ResidentRequest,
        VisitorRequest,
        BulkDeleteRequest,
        BulkDeleteResponse
    )),
    tags(
        (name = "residents", description = "Resident directory"),
        (name = "visitors", description = "Visitor log"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
