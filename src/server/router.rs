use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::server::{
    controller::{application, auth, catalog, comment, post as posts, team},
    openapi::openapi_json,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/openapi.json", get(openapi_json))
        .route("/api/auth/login", get(auth::login))
        .route("/api/auth/callback", get(auth::callback))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/catalog/series", get(catalog::series))
        .route("/api/catalog/car-classes", get(catalog::car_classes))
        .route("/api/catalog/cars", get(catalog::cars))
        .route("/api/catalog/tracks", get(catalog::tracks))
        .route("/api/catalog/events", get(catalog::events))
        .route("/api/catalog/languages", get(catalog::languages))
        .route("/api/posts", get(posts::search).post(posts::create))
        .route("/api/posts/mine", get(posts::mine))
        .route(
            "/api/posts/{post_id}",
            get(posts::get).put(posts::update).delete(posts::delete),
        )
        .route(
            "/api/posts/{post_id}/applications",
            get(application::list_for_post)
                .post(application::apply)
                .delete(application::withdraw),
        )
        .route("/api/applications/mine", get(application::list_mine))
        .route(
            "/api/applications/{application_id}/status",
            put(application::set_status),
        )
        .route(
            "/api/posts/{post_id}/comments",
            get(comment::list).post(comment::create),
        )
        .route(
            "/api/posts/{post_id}/comments/{comment_id}",
            delete(comment::delete),
        )
        .route(
            "/api/posts/{post_id}/comments/{comment_id}/replies",
            post(comment::reply),
        )
        .route("/api/posts/{post_id}/team", get(team::get))
        .route(
            "/api/posts/{post_id}/team/members/{user_id}",
            delete(team::remove_member),
        )
        .route(
            "/api/posts/{post_id}/team/messages",
            get(team::list_messages).post(team::create_message),
        )
        .route("/api/teams/mine", get(team::mine))
}
