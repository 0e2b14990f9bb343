use std::{
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use axum::{
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use formpoint::{api::ApiClient, auth::ApiError, auth::Session, config::Settings};
use serde_json::json;

async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test server");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    addr
}

fn settings_for(addr: SocketAddr) -> Settings {
    Settings {
        api_base_url: format!("http://{addr}/api/v1"),
        payment_base_url: format!("http://{addr}/api/v1"),
        payment_client_key: None,
        access_token: None,
    }
}

fn user_payload() -> serde_json::Value {
    json!({
        "id": 1,
        "username": "dana",
        "email": "dana@example.com",
        "age": 29,
        "gender": "FEMALE",
        "account": null,
        "point": 1200,
        "workType": "IT"
    })
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers.get("authorization").and_then(|v| v.to_str().ok())
}

/// Protected route that only accepts the refreshed token.
fn guarded_userinfo() -> axum::routing::MethodRouter {
    get(|headers: HeaderMap| async move {
        if bearer(&headers) == Some("Bearer fresh-token") {
            Json(user_payload()).into_response()
        } else {
            StatusCode::UNAUTHORIZED.into_response()
        }
    })
}

#[tokio::test]
async fn expired_token_refreshes_once_and_replays() {
    let refresh_calls = Arc::new(AtomicUsize::new(0));
    let counter = refresh_calls.clone();
    let router = Router::new()
        .route("/api/v1/users/userinfo", guarded_userinfo())
        .route(
            "/api/v1/users/refresh",
            post(move || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Json(json!({ "accessToken": "fresh-token" }))
                }
            }),
        );
    let addr = spawn(router).await;

    let session = Session::new(Some("stale-token".to_string()));
    let api = ApiClient::new(&settings_for(addr), session.clone()).expect("client");

    let info = api.user_info().await.expect("refresh then replay succeeds");
    assert_eq!(info.username, "dana");
    assert_eq!(refresh_calls.load(Ordering::SeqCst), 1);
    assert_eq!(session.token().as_deref(), Some("fresh-token"));
    assert!(!session.is_logging_out());
}

#[tokio::test]
async fn failed_refresh_logs_out_at_most_once() {
    let router = Router::new()
        .route(
            "/api/v1/users/userinfo",
            get(|| async { StatusCode::UNAUTHORIZED }),
        )
        .route(
            "/api/v1/users/refresh",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
    let addr = spawn(router).await;

    let session = Session::new(Some("stale-token".to_string()));
    let api = ApiClient::new(&settings_for(addr), session.clone()).expect("client");

    let (first, second) = tokio::join!(api.user_info(), api.user_info());
    assert!(matches!(first, Err(ApiError::SessionExpired)));
    assert!(matches!(second, Err(ApiError::SessionExpired)));

    assert!(session.is_logging_out());
    assert_eq!(session.token(), None);
}

#[tokio::test]
async fn logout_latch_fires_for_the_first_caller_only() {
    let session = Session::new(Some("token".to_string()));
    assert!(session.begin_logout());
    assert!(!session.begin_logout());
    assert!(session.is_logging_out());
}

#[tokio::test]
async fn missing_token_passes_401_through_without_refresh() {
    let refresh_calls = Arc::new(AtomicUsize::new(0));
    let counter = refresh_calls.clone();
    let router = Router::new()
        .route(
            "/api/v1/users/userinfo",
            get(|| async { StatusCode::UNAUTHORIZED }),
        )
        .route(
            "/api/v1/users/refresh",
            post(move || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Json(json!({ "accessToken": "fresh-token" }))
                }
            }),
        );
    let addr = spawn(router).await;

    let session = Session::new(None);
    let api = ApiClient::new(&settings_for(addr), session.clone()).expect("client");

    let err = api.user_info().await.expect_err("stays unauthorized");
    assert!(matches!(
        err,
        ApiError::Status { status } if status == StatusCode::UNAUTHORIZED
    ));
    assert_eq!(refresh_calls.load(Ordering::SeqCst), 0);
    assert!(!session.is_logging_out());
}

#[tokio::test]
async fn second_401_on_replay_is_not_retried_again() {
    let refresh_calls = Arc::new(AtomicUsize::new(0));
    let counter = refresh_calls.clone();
    let router = Router::new()
        .route(
            "/api/v1/users/userinfo",
            get(|| async { StatusCode::UNAUTHORIZED }),
        )
        .route(
            "/api/v1/users/refresh",
            post(move || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Json(json!({ "accessToken": "fresh-token" }))
                }
            }),
        );
    let addr = spawn(router).await;

    let session = Session::new(Some("stale-token".to_string()));
    let api = ApiClient::new(&settings_for(addr), session).expect("client");

    let err = api.user_info().await.expect_err("replay 401 propagates");
    assert!(matches!(
        err,
        ApiError::Status { status } if status == StatusCode::UNAUTHORIZED
    ));
    assert_eq!(refresh_calls.load(Ordering::SeqCst), 1);
}
