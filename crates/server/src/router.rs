use axum::{
    routing::{get, post},
    Router,
};
use shared::api::Object;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{routes::users, AppState};

/// The whole http surface: the json api, the landing page and any other
/// static files under `assets_dir`
pub fn app(state: AppState) -> Router {
    let assets_dir = state.args.assets_dir.clone();

    Router::new()
        .route(
            Object::Users.path(),
            post(users::create_user).get(users::list_users),
        )
        .route(Object::UserExercises.path(), post(users::add_exercise))
        .route(Object::UserLogs.path(), get(users::fetch_logs))
        .route_service("/", ServeFile::new(assets_dir.join("index.html")))
        .fallback_service(ServeDir::new(&assets_dir))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
