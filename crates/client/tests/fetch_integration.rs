use std::net::SocketAddr;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use avgcalc_client::{NumberClient, Session};
use avgcalc_common::{FetchError, InvalidResponse, NumberKind};

fn stub_service() -> Router {
    Router::new()
        .route(
            "/primes",
            get(|| async { Json(serde_json::json!({ "numbers": [2, 3, 5, 7, 11] })) }),
        )
        .route(
            "/fibo",
            get(|| async { Json(serde_json::json!({ "numbers": [1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89] })) }),
        )
        .route(
            "/even",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                Json(serde_json::json!({ "numbers": [2, 4, 6] }))
            }),
        )
        .route("/rand", get(|| async { Json(serde_json::json!({})) }))
}

async fn spawn(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn client() -> NumberClient {
    let addr = spawn(stub_service()).await;
    NumberClient::new(&format!("http://{addr}")).unwrap()
}

async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

#[tokio::test]
async fn fetches_numbers() {
    let client = client().await;
    let numbers = client
        .fetch_numbers(NumberKind::Primes, &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(numbers, vec![2.0, 3.0, 5.0, 7.0, 11.0]);
}

#[tokio::test]
async fn slow_response_times_out() {
    let client = client().await;
    let started = std::time::Instant::now();
    let err = client
        .fetch_numbers(NumberKind::Even, &CancellationToken::new())
        .await
        .unwrap_err();
    assert_eq!(err, FetchError::Timeout);
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn empty_object_is_invalid() {
    let client = client().await;
    let err = client
        .fetch_numbers(NumberKind::Rand, &CancellationToken::new())
        .await
        .unwrap_err();
    assert_eq!(err, FetchError::InvalidResponse(InvalidResponse::Format));
    assert_eq!(err.to_string(), "Invalid response format");
}

#[tokio::test]
async fn error_status_is_invalid() {
    let app = Router::new().route(
        "/primes",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
    );
    let addr = spawn(app).await;
    let client = NumberClient::new(&format!("http://{addr}")).unwrap();
    let err = client
        .fetch_numbers(NumberKind::Primes, &CancellationToken::new())
        .await
        .unwrap_err();
    assert_eq!(err, FetchError::InvalidResponse(InvalidResponse::Status(503)));
}

#[tokio::test]
async fn refused_connection_is_unreachable() {
    let addr = closed_port().await;
    let client = NumberClient::new(&format!("http://{addr}")).unwrap();
    let err = client
        .fetch_numbers(NumberKind::Fibo, &CancellationToken::new())
        .await
        .unwrap_err();
    assert_eq!(err, FetchError::NetworkUnreachable);
}

#[tokio::test]
async fn session_tracks_windows_across_fetches() {
    let mut session = Session::new(client().await, 10);
    let cancel = CancellationToken::new();

    let state = session.request(NumberKind::Primes, &cancel).await;
    assert!(state.window_prev_state.is_empty());
    assert_eq!(state.window_curr_state, vec![2.0, 3.0, 5.0, 7.0, 11.0]);
    assert_eq!(state.avg, 5.6);

    let state = session.request(NumberKind::Fibo, &cancel).await;
    assert_eq!(state.window_prev_state, vec![2.0, 3.0, 5.0, 7.0, 11.0]);
    assert_eq!(state.numbers, vec![1.0, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0, 55.0, 89.0]);
    assert_eq!(state.window_curr_state, vec![1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0, 55.0, 89.0]);
    assert_eq!(state.avg, 23.1);
    assert!(state.error.is_none());
}

#[tokio::test]
async fn session_timeout_leaves_window_unchanged() {
    let mut session = Session::new(client().await, 10);
    let cancel = CancellationToken::new();
    session.request(NumberKind::Primes, &cancel).await;

    let state = session.request(NumberKind::Even, &cancel).await;
    assert_eq!(state.error.as_deref(), Some("Request timeout"));
    assert!(!state.loading);
    assert_eq!(state.window_curr_state, vec![2.0, 3.0, 5.0, 7.0, 11.0]);
    assert_eq!(state.numbers, vec![2.0, 3.0, 5.0, 7.0, 11.0]);
}

#[tokio::test]
async fn session_invalid_body_leaves_window_unchanged() {
    let mut session = Session::new(client().await, 10);
    let cancel = CancellationToken::new();
    session.request(NumberKind::Primes, &cancel).await;

    let state = session.request(NumberKind::Rand, &cancel).await;
    assert_eq!(state.error.as_deref(), Some("Invalid response format"));
    assert_eq!(state.window_curr_state, vec![2.0, 3.0, 5.0, 7.0, 11.0]);

    let state = session.request(NumberKind::Primes, &cancel).await;
    assert!(state.error.is_none());
}
