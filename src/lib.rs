pub mod config;
pub mod error;
pub mod state;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod store;
pub mod submission;
pub mod sweeper;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::{AppState, SharedState};
use crate::store::SubmissionStore;

pub fn build_app(store: Arc<dyn SubmissionStore>, config: Config) -> (Router, SharedState) {
    let max_body_size = config.max_body_size;
    let state: SharedState = Arc::new(AppState { config, store });

    // CORS wraps the body limit so 413s carry the cross-origin headers
    let app = routes::intake_routes()
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::cors::cors,
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    (app, state)
}
