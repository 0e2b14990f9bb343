//! Live participation statistics: snapshot fetch plus broker subscription.
//!
//! A feed races one HTTP fetch against a persistent topic subscription and
//! funnels both into a single-slot state. Pushed snapshots replace the slot
//! wholesale; a fetch that resolves after the first push is discarded so a
//! stale snapshot never overwrites fresher broker data.

pub mod stomp;

use std::sync::Arc;

use futures::{SinkExt, StreamExt};
use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
};
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::{debug, info, warn};

use crate::api::{types::ParticipantStatistics, ApiClient};
use self::stomp::Frame;

/// Observed state of a statistics feed, replaced wholesale on every update.
#[derive(Debug, Clone)]
pub struct FeedState {
    /// Latest snapshot, absent until either source delivers one.
    pub snapshot: Option<ParticipantStatistics>,
    /// Whether the broker subscription is currently established.
    pub connected: bool,
    /// True until the initial snapshot fetch resolves one way or the other.
    pub loading: bool,
}

enum Update {
    Fetched(ParticipantStatistics),
    FetchFailed,
    Pushed(ParticipantStatistics),
    Connected(bool),
}

/// Handle to a live statistics feed.
///
/// Closing (or dropping) the handle aborts the fetch, the subscription, and
/// the state funnel; no state change is observable afterwards.
pub struct StatisticsFeed {
    state: watch::Receiver<FeedState>,
    tasks: Vec<JoinHandle<()>>,
}

impl StatisticsFeed {
    /// Snapshot of the current feed state, marking it as seen.
    pub fn state(&mut self) -> FeedState {
        self.state.borrow_and_update().clone()
    }

    /// Wait for the next state replacement; false once the feed is closed.
    pub async fn changed(&mut self) -> bool {
        self.state.changed().await.is_ok()
    }

    /// Tear the feed down deterministically. Idempotent.
    pub fn close(&mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}

impl Drop for StatisticsFeed {
    fn drop(&mut self) {
        self.close();
    }
}

/// Open a live statistics feed for one survey.
pub fn open_statistics_feed(
    api: Arc<ApiClient>,
    ws_url: String,
    survey_id: i64,
) -> StatisticsFeed {
    let (state_tx, state_rx) = watch::channel(FeedState {
        snapshot: None,
        connected: false,
        loading: true,
    });
    let (update_tx, update_rx) = mpsc::unbounded_channel();

    let fetch_tx = update_tx.clone();
    let fetch_task = tokio::spawn(async move {
        match api.participant_statistics(survey_id).await {
            Ok(snapshot) => {
                let _ = fetch_tx.send(Update::Fetched(snapshot));
            }
            Err(err) => {
                warn!(%err, survey_id, "initial statistics fetch failed");
                let _ = fetch_tx.send(Update::FetchFailed);
            }
        }
    });

    let socket_task = tokio::spawn(socket_loop(ws_url, survey_id, update_tx));
    let state_task = tokio::spawn(state_loop(update_rx, state_tx));

    StatisticsFeed {
        state: state_rx,
        tasks: vec![fetch_task, socket_task, state_task],
    }
}

/// Funnel both sources into the single-slot state.
async fn state_loop(mut updates: mpsc::UnboundedReceiver<Update>, state: watch::Sender<FeedState>) {
    let mut pushed = false;
    while let Some(update) = updates.recv().await {
        state.send_modify(|current| match update {
            Update::Fetched(snapshot) => {
                current.loading = false;
                // Keep broker data if it already overtook the fetch.
                if !pushed {
                    current.snapshot = Some(snapshot);
                }
            }
            Update::FetchFailed => current.loading = false,
            Update::Pushed(snapshot) => {
                pushed = true;
                current.snapshot = Some(snapshot);
            }
            Update::Connected(connected) => current.connected = connected,
        });
    }
}

/// Own the socket: handshake, subscribe, forward decoded snapshots.
///
/// There is no reconnect policy here; a dropped connection only flips the
/// connectivity flag and the loop ends.
async fn socket_loop(ws_url: String, survey_id: i64, updates: mpsc::UnboundedSender<Update>) {
    let (stream, _) = match connect_async(ws_url.as_str()).await {
        Ok(pair) => pair,
        Err(err) => {
            warn!(%err, %ws_url, "broker connection failed");
            return;
        }
    };
    let (mut sink, mut source) = stream.split();

    if sink
        .send(Message::Text(Frame::connect("formpoint").encode()))
        .await
        .is_err()
    {
        return;
    }

    let destination = format!("/topic/survey/{survey_id}/statistics");
    while let Some(message) = source.next().await {
        let message = match message {
            Ok(message) => message,
            Err(err) => {
                warn!(%err, "broker stream error");
                break;
            }
        };
        let text = match message {
            Message::Text(text) => text,
            Message::Close(_) => break,
            _ => continue,
        };
        // Heartbeats are bare newlines, not frames.
        if text.trim_matches(|c| c == '\n' || c == '\0').is_empty() {
            continue;
        }

        let frame = match Frame::decode(&text) {
            Ok(frame) => frame,
            Err(err) => {
                debug!(%err, "skipping undecodable frame");
                continue;
            }
        };
        match frame.command.as_str() {
            "CONNECTED" => {
                info!(survey_id, "broker connected, subscribing");
                let subscribe = Frame::subscribe("0", &destination);
                if sink.send(Message::Text(subscribe.encode())).await.is_err() {
                    break;
                }
                let _ = updates.send(Update::Connected(true));
            }
            "MESSAGE" => match serde_json::from_str::<ParticipantStatistics>(&frame.body) {
                Ok(snapshot) => {
                    let _ = updates.send(Update::Pushed(snapshot));
                }
                Err(err) => warn!(%err, "undecodable statistics payload"),
            },
            "ERROR" => {
                warn!(
                    message = frame.get("message").unwrap_or(""),
                    "broker error frame"
                );
                break;
            }
            other => debug!(command = %other, "ignoring frame"),
        }
    }

    let _ = updates.send(Update::Connected(false));
}
