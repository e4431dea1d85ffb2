//! OpenAPI documentation and schema generation
//!
//! This module defines the OpenAPI specification for the launch-tracker REST
//! API using utoipa for compile-time spec generation.

use utoipa::OpenApi;

/// OpenAPI documentation for the launch-tracker REST API
///
/// The spec can be accessed via:
/// - `/openapi.json` - JSON format OpenAPI specification
/// - `/swagger-ui` - Interactive Swagger UI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "launch-tracker REST API",
        description = "Read-only queries over rocket launches: today's launches and failed launches in a date range",
        license(
            name = "MIT OR Apache-2.0"
        )
    ),
    servers(
        (url = "http://localhost:8082", description = "Local development server")
    ),
    paths(
        crate::api::routes::today,
        crate::api::routes::failed,
        crate::api::routes::health_check,
        crate::api::routes::openapi_spec,
    ),
    components(
        schemas(crate::types::Launch)
    ),
    tags(
        (name = "launches", description = "Launch queries"),
        (name = "system", description = "Health and API documentation")
    )
)]
pub struct ApiDoc;
