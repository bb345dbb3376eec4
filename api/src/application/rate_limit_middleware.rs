use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use menucraft_core::domain::rate_limit::ports::RateLimitService;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

const UNKNOWN_CLIENT: &str = "unknown";

/// Client address used as the rate limit key
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientAddress(pub String);

/// Middleware gating a route with the per-client fixed-window limiter.
/// Rejected requests get a 429 with `Retry-After`; nothing is queued.
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let client = client_address(&req, state.args.rate_limit.trust_forwarded_for);

    if let Err(e) = state.service.check_rate_limit(&client) {
        return ApiError::from(e).into_response();
    }

    req.extensions_mut().insert(ClientAddress(client));

    next.run(req).await
}

/// Peer address of the connection, or the first `X-Forwarded-For` hop when
/// the deployment sits behind a trusted proxy.
fn client_address(req: &Request, trust_forwarded_for: bool) -> String {
    if trust_forwarded_for
        && let Some(forwarded) = req
            .headers()
            .get("x-forwarded-for")
            .and_then(|h| h.to_str().ok())
        && let Some(first) = forwarded.split(',').next().map(str::trim)
        && !first.is_empty()
    {
        return first.to_string();
    }

    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}
