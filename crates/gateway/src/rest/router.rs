use axum::http::{header, HeaderValue};
use axum::routing::{any, get};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use super::health;
use crate::proxy::{self, ProxyState};

pub fn router(state: ProxyState) -> Router {
    let prefix = state.prefix().to_string();

    let proxied = Router::new()
        .route(&prefix, any(proxy::forward))
        .route(&format!("{prefix}/"), any(proxy::forward))
        .route(&format!("{prefix}/{{*rest}}"), any(proxy::forward))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .with_state(state);

    Router::new()
        .route("/healthz", get(health::healthz))
        .merge(proxied)
        .layer(CorsLayer::permissive())
}
