//! OpenAPI document for the HTTP API.
//!
//! Paths come from the `#[utoipa::path]` annotations on the controllers; request and
//! response schemas are collected from those annotations.

use axum::Json;
use utoipa::OpenApi;

use crate::server::controller::{application, catalog, comment, post, team};

#[derive(OpenApi)]
#[openapi(
    info(title = "teammate", description = "Find teammates for sim racing events"),
    paths(
        catalog::series,
        catalog::car_classes,
        catalog::cars,
        catalog::tracks,
        catalog::events,
        catalog::languages,
        post::search,
        post::mine,
        post::get,
        post::create,
        post::update,
        post::delete,
        application::apply,
        application::list_for_post,
        application::withdraw,
        application::list_mine,
        application::set_status,
        comment::list,
        comment::create,
        comment::reply,
        comment::delete,
        team::get,
        team::mine,
        team::remove_member,
        team::list_messages,
        team::create_message,
    )
)]
pub struct ApiDoc;

/// GET /api/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
