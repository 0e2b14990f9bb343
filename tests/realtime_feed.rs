use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    extract::{
        ws::{Message as WsMessage, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use formpoint::{
    api::{types::ParticipantStatistics, ApiClient},
    auth::Session,
    config::Settings,
    realtime::{self, stomp::Frame, FeedState, StatisticsFeed},
};
use serde_json::json;
use tokio::sync::broadcast;

#[derive(Clone)]
struct BrokerState {
    pushes: broadcast::Sender<String>,
    /// Snapshot pushed immediately after the subscription lands.
    initial_push: Option<String>,
}

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

fn snapshot(response_cnt: i64) -> serde_json::Value {
    json!({
        "responseCnt": response_cnt,
        "maxResponse": 100,
        "genderDistribution": [{ "label": "MALE", "count": response_cnt }],
        "ageDistribution": [{ "label": "TWENTIES", "count": response_cnt }],
        "workDistribution": [{ "label": "IT", "count": response_cnt }],
    })
}

fn envelope(data: serde_json::Value) -> serde_json::Value {
    json!({ "code": 200, "message": "ok", "data": data })
}

async fn broker(ws: WebSocketUpgrade, State(state): State<BrokerState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| broker_session(socket, state))
}

/// Speak just enough of the broker protocol for a subscriber to attach.
async fn broker_session(mut socket: WebSocket, state: BrokerState) {
    let mut pushes = state.pushes.subscribe();

    let mut subscribed = false;
    while !subscribed {
        let Some(Ok(WsMessage::Text(text))) = socket.recv().await else {
            return;
        };
        let frame = Frame::decode(&text).expect("client frame decodes");
        match frame.command.as_str() {
            "CONNECT" => {
                let connected = Frame::new("CONNECTED").header("version", "1.2");
                if socket
                    .send(WsMessage::Text(connected.encode()))
                    .await
                    .is_err()
                {
                    return;
                }
            }
            "SUBSCRIBE" => subscribed = true,
            other => panic!("unexpected client frame {other}"),
        }
    }

    if let Some(body) = &state.initial_push {
        if socket.send(message_frame(body)).await.is_err() {
            return;
        }
    }
    while let Ok(body) = pushes.recv().await {
        if socket.send(message_frame(&body)).await.is_err() {
            return;
        }
    }
}

fn message_frame(body: &str) -> WsMessage {
    WsMessage::Text(
        Frame::new("MESSAGE")
            .header("destination", "/topic/survey/7/statistics")
            .header("subscription", "0")
            .header("message-id", "m-1")
            .body(body)
            .encode(),
    )
}

async fn wait_until(
    feed: &mut StatisticsFeed,
    predicate: impl Fn(&FeedState) -> bool,
) -> FeedState {
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            let state = feed.state();
            if predicate(&state) {
                return state;
            }
            assert!(feed.changed().await, "feed closed before condition held");
        }
    })
    .await
    .expect("timed out waiting for feed state")
}

fn open_feed(addr: SocketAddr) -> StatisticsFeed {
    let settings = settings_for(addr);
    let session = Session::new(None);
    let api = Arc::new(ApiClient::new(&settings, session).expect("client"));
    realtime::open_statistics_feed(api, settings.ws_url(), 7)
}

#[tokio::test]
async fn pushed_snapshot_replaces_fetched_one() {
    let (pushes, _keep) = broadcast::channel(8);
    let state = BrokerState {
        pushes: pushes.clone(),
        initial_push: None,
    };
    let router = Router::new()
        .route(
            "/api/v1/surveys/7/statistics/participants",
            get(|| async { Json(envelope(snapshot(3))) }),
        )
        .route("/ws", get(broker))
        .with_state(state);
    let addr = spawn(router).await;

    let mut feed = open_feed(addr);
    let state = wait_until(&mut feed, |s| {
        s.connected && !s.loading && s.snapshot.is_some()
    })
    .await;
    assert_eq!(
        state.snapshot.as_ref().map(|s| s.response_cnt),
        Some(3),
        "initial fetch seeds the slot"
    );

    let _ = pushes.send(snapshot(9).to_string());
    let state = wait_until(&mut feed, |s| {
        s.snapshot.as_ref().map(|s| s.response_cnt) == Some(9)
    })
    .await;

    let expected: ParticipantStatistics =
        serde_json::from_value(snapshot(9)).expect("fixture decodes");
    assert_eq!(state.snapshot, Some(expected), "push replaces wholesale");
}

#[tokio::test]
async fn closing_the_feed_stops_all_updates() {
    let (pushes, _keep) = broadcast::channel(8);
    let state = BrokerState {
        pushes: pushes.clone(),
        initial_push: None,
    };
    let router = Router::new()
        .route(
            "/api/v1/surveys/7/statistics/participants",
            get(|| async { Json(envelope(snapshot(3))) }),
        )
        .route("/ws", get(broker))
        .with_state(state);
    let addr = spawn(router).await;

    let mut feed = open_feed(addr);
    wait_until(&mut feed, |s| {
        s.connected && !s.loading && s.snapshot.is_some()
    })
    .await;

    feed.close();
    let before = feed.state();

    let _ = pushes.send(snapshot(42).to_string());
    tokio::time::sleep(Duration::from_millis(200)).await;

    let after = feed.state();
    assert_eq!(after.snapshot, before.snapshot, "no update after teardown");
    assert!(!feed.changed().await, "closed feed reports no changes");
}

#[tokio::test]
async fn late_fetch_does_not_clobber_fresher_push() {
    let (pushes, _keep) = broadcast::channel(8);
    let state = BrokerState {
        pushes: pushes.clone(),
        initial_push: Some(snapshot(5).to_string()),
    };
    let router = Router::new()
        .route(
            "/api/v1/surveys/7/statistics/participants",
            get(|| async {
                // Resolve well after the broker's first push.
                tokio::time::sleep(Duration::from_millis(400)).await;
                Json(envelope(snapshot(1)))
            }),
        )
        .route("/ws", get(broker))
        .with_state(state);
    let addr = spawn(router).await;

    let mut feed = open_feed(addr);

    let state = wait_until(&mut feed, |s| s.snapshot.is_some()).await;
    assert_eq!(
        state.snapshot.as_ref().map(|s| s.response_cnt),
        Some(5),
        "push lands while the fetch is still pending"
    );

    let state = wait_until(&mut feed, |s| !s.loading).await;
    assert_eq!(
        state.snapshot.as_ref().map(|s| s.response_cnt),
        Some(5),
        "stale fetch result is discarded"
    );
}
