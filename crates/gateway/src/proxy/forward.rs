use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::extract::{Request, State};
use axum::http::{header, HeaderMap, HeaderName};
use axum::response::{IntoResponse, Response};
use http_body_util::LengthLimitError;

use super::error::ProxyError;
use super::rewrite::{rewrite_path, upstream_url};
use crate::config::ProxyConfig;

const HOP_BY_HOP: [HeaderName; 8] = [
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

#[derive(Debug, Clone)]
pub struct ProxyState {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    http: reqwest::Client,
    upstream: String,
    prefix: String,
    rewrite_to: String,
    max_body_bytes: usize,
}

impl ProxyState {
    pub fn new(cfg: &ProxyConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .no_proxy()
            .build()?;
        Ok(Self {
            inner: Arc::new(Inner {
                http,
                upstream: cfg.upstream.trim_end_matches('/').to_string(),
                prefix: cfg.prefix.clone(),
                rewrite_to: cfg.rewrite_to.clone(),
                max_body_bytes: cfg.max_body_bytes,
            }),
        })
    }

    pub fn prefix(&self) -> &str {
        &self.inner.prefix
    }

    pub fn upstream(&self) -> &str {
        &self.inner.upstream
    }
}

pub async fn forward(State(state): State<ProxyState>, req: Request) -> Response {
    match proxy_request(&state, req).await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(error = %e, upstream = %state.upstream(), "proxy request failed");
            e.into_response()
        }
    }
}

async fn proxy_request(state: &ProxyState, req: Request) -> Result<Response, ProxyError> {
    let inner = &state.inner;
    let (parts, body) = req.into_parts();

    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let rewritten = rewrite_path(path_and_query, &inner.prefix, &inner.rewrite_to)
        .ok_or_else(|| ProxyError::NotProxied(path_and_query.to_string()))?;
    let url = upstream_url(&inner.upstream, &rewritten);

    let body = to_bytes(body, inner.max_body_bytes).await.map_err(|e| {
        let too_large = std::error::Error::source(&e)
            .is_some_and(|s| s.downcast_ref::<LengthLimitError>().is_some());
        if too_large {
            ProxyError::TooLarge(inner.max_body_bytes)
        } else {
            ProxyError::Body(e)
        }
    })?;

    // reqwest sets Host and Content-Length for the outgoing request.
    let mut headers = end_to_end(&parts.headers);
    headers.remove(header::HOST);
    headers.remove(header::CONTENT_LENGTH);

    let mut request = inner.http.request(parts.method.clone(), &url).headers(headers);
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await.map_err(ProxyError::from_upstream)?;
    let status = upstream.status();
    let headers = end_to_end(upstream.headers());
    let bytes = upstream.bytes().await.map_err(ProxyError::from_upstream)?;

    tracing::debug!(
        method = %parts.method,
        path = %path_and_query,
        upstream = %url,
        status = status.as_u16(),
        "proxied request"
    );

    let mut resp = Response::new(Body::from(bytes));
    *resp.status_mut() = status;
    *resp.headers_mut() = headers;
    Ok(resp)
}

/// Copies `headers` without the hop-by-hop set and anything named in `Connection`.
fn end_to_end(headers: &HeaderMap) -> HeaderMap {
    let listed: Vec<HeaderName> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .filter_map(|name| HeaderName::from_bytes(name.trim().as_bytes()).ok())
        .collect();

    let mut out = headers.clone();
    for name in HOP_BY_HOP.iter().chain(&listed) {
        out.remove(name);
    }
    out
}
