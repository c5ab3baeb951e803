//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Items API",
        version = "0.1.0",
        description = "CRUD REST API for items held in an in-memory store",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(crate::api::root::greeting),
    components(schemas(domain_items::MessageResponse, axum_helpers::HealthResponse)),
    nest(
        (path = "/api/items", api = domain_items::ApiDoc)
    ),
    tags(
        (name = "Root", description = "Greeting"),
        (name = "Items", description = "Item management endpoints")
    )
)]
pub struct ApiDoc;
