use std::sync::Arc;

use axum::{
    extract::Request,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    services::ServeDir,
    trace::{DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::debug_span;

use crate::{
    data::{store::MemoryCourseStore, AppState},
    routes::{courses, departments, health},
};

pub fn make_app(store: MemoryCourseStore) -> Router {
    type State = Arc<AppState>;

    let state: State = Arc::new(AppState::new(store));

    Router::new()
        .nest_service("/assets", ServeDir::new("assets"))
        .route("/", get(departments::index))
        .route("/health", get(health::check))
        .route("/departments", get(departments::index))
        .nest(
            "/departments/:department_id",
            Router::new()
                .route("/", get(departments::show))
                .route("/courses", post(courses::create))
                .route("/courses/new", get(courses::new_form))
                .route("/courses/validate", post(courses::validate))
                .route("/dialog/close", get(courses::close_dialog))
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    departments::not_found,
                )),
        )
        .with_state(state)
        .layer(
            tower::ServiceBuilder::new().layer(
                TraceLayer::new_for_http()
                    .make_span_with(|request: &Request<_>| {
                        debug_span!(
                            "request",
                            method = %request.method(),
                            uri = %request.uri(),
                        )
                    })
                    .on_response(DefaultOnResponse::new().latency_unit(LatencyUnit::Micros)),
            ),
        )
}
