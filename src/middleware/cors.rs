use axum::extract::{Request, State};
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::state::SharedState;

pub const ALLOW_METHODS: &str = "POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";

/// Answers OPTIONS on any path and adds the cross-origin headers to every
/// response except 404s. The request origin is not checked.
pub async fn cors(State(state): State<SharedState>, req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        apply(response.headers_mut(), &state.config.allowed_origin);
        return response;
    }

    let mut response = next.run(req).await;
    if response.status() != StatusCode::NOT_FOUND {
        apply(response.headers_mut(), &state.config.allowed_origin);
    }
    response
}

fn apply(headers: &mut HeaderMap, allowed_origin: &str) {
    match HeaderValue::from_str(allowed_origin) {
        Ok(origin) => {
            headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        }
        Err(e) => {
            tracing::warn!("Allowed origin is not a valid header value: {e}");
        }
    }
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOW_METHODS));
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOW_HEADERS));
}
