// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::time::Duration;

use futures::StreamExt;
use plantel_state::Notification;
use reqwest::Response;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::client::ApiClient;

/// Delay before reconnecting when the server did not suggest one.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(3000);

/// Health of the live notification connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    /// No connection has been established yet.
    #[default]
    Connecting,
    /// Events are flowing.
    Connected,
    /// The connection dropped; a retry is pending.
    Reconnecting,
}

/// One parsed server-sent event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    /// Event name from the `event:` field, if any.
    pub name: Option<String>,
    /// Event payload, multi-line `data:` fields joined with newlines.
    pub data: String,
    /// Last-event id from the `id:` field, if any.
    pub id: Option<String>,
}

/// Incremental decoder for a `text/event-stream` byte stream.
///
/// Chunks arrive at arbitrary boundaries, so the decoder buffers text
/// until a blank line closes an event. A `retry:` field updates the
/// reconnect delay for the rest of the stream.
#[derive(Debug)]
pub struct SseDecoder {
    buffer: String,
    retry_delay: Duration,
}

impl Default for SseDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl SseDecoder {
    /// Creates an empty decoder with the default reconnect delay.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: String::new(),
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }

    /// Returns the reconnect delay currently in effect.
    #[must_use]
    pub const fn retry_delay(&self) -> Duration {
        self.retry_delay
    }

    /// Discards any partial event, keeping the learned reconnect delay.
    ///
    /// Called when a new connection opens: a fragment left over from a
    /// dropped connection must not be glued onto the next stream's first
    /// chunk.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Feeds a chunk of stream text and returns the events it completed.
    ///
    /// Partial events stay buffered until a later chunk closes them.
    pub fn push(&mut self, chunk: &str) -> Vec<SseEvent> {
        self.buffer.push_str(chunk);
        // CRLF and bare CR are both legal line endings in the protocol.
        let normalized: String = self.buffer.replace("\r\n", "\n").replace('\r', "\n");
        self.buffer = normalized;

        let mut events: Vec<SseEvent> = Vec::new();
        while let Some(boundary) = self.buffer.find("\n\n") {
            let raw: String = self.buffer[..boundary].to_string();
            self.buffer.drain(..boundary + 2);
            if let Some(event) = self.parse_block(&raw) {
                events.push(event);
            }
        }
        events
    }

    fn parse_block(&mut self, block: &str) -> Option<SseEvent> {
        let mut name: Option<String> = None;
        let mut id: Option<String> = None;
        let mut data_lines: Vec<&str> = Vec::new();

        for line in block.lines() {
            if line.starts_with(':') {
                continue;
            }
            let (field, value) = match line.split_once(':') {
                Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
                None => (line, ""),
            };
            match field {
                "data" => data_lines.push(value),
                "event" => name = Some(value.to_string()),
                "id" => id = Some(value.to_string()),
                "retry" => {
                    if let Ok(millis) = value.trim().parse::<u64>() {
                        self.retry_delay = Duration::from_millis(millis);
                    }
                }
                _ => {}
            }
        }

        if data_lines.is_empty() {
            return None;
        }
        Some(SseEvent {
            name,
            data: data_lines.join("\n"),
            id,
        })
    }
}

/// A source of live notifications.
///
/// Seam for the console and for tests: the production implementation
/// reads the backend's event stream, tests substitute a scripted one.
pub trait NotificationSource {
    /// Opens a subscription and starts delivering notifications.
    fn subscribe(&self) -> Subscription;
}

/// Handle to a running notification subscription.
///
/// Dropping the handle cancels the stream worker.
#[derive(Debug)]
pub struct Subscription {
    events: mpsc::UnboundedReceiver<Notification>,
    status: watch::Receiver<ConnectionStatus>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl Subscription {
    /// Creates a subscription from pre-wired channels.
    ///
    /// Test sources use this to script deliveries without a network.
    #[must_use]
    pub const fn new(
        events: mpsc::UnboundedReceiver<Notification>,
        status: watch::Receiver<ConnectionStatus>,
        cancel: CancellationToken,
        task: Option<JoinHandle<()>>,
    ) -> Self {
        Self {
            events,
            status,
            cancel,
            task,
        }
    }

    /// Waits for the next notification.
    ///
    /// Returns `None` once the subscription has been cancelled and the
    /// channel drained.
    pub async fn next_event(&mut self) -> Option<Notification> {
        self.events.recv().await
    }

    /// Returns the current connection status.
    #[must_use]
    pub fn status(&self) -> ConnectionStatus {
        *self.status.borrow()
    }

    /// Cancels the stream worker.
    pub fn unsubscribe(&mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

/// Notification source backed by the backend's event stream.
#[derive(Debug, Clone)]
pub struct SseSource {
    client: ApiClient,
}

impl SseSource {
    /// Creates a source that streams through the given client.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl NotificationSource for SseSource {
    fn subscribe(&self) -> Subscription {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<Notification>();
        let (status_tx, status_rx) = watch::channel(ConnectionStatus::Connecting);
        let cancel: CancellationToken = CancellationToken::new();

        let client: ApiClient = self.client.clone();
        let worker_cancel: CancellationToken = cancel.clone();
        let task: JoinHandle<()> = tokio::spawn(async move {
            run_stream(&client, &event_tx, &status_tx, &worker_cancel).await;
        });

        Subscription::new(event_rx, status_rx, cancel, Some(task))
    }
}

/// Connects, decodes, and reconnects until cancelled.
async fn run_stream(
    client: &ApiClient,
    events: &mpsc::UnboundedSender<Notification>,
    status: &watch::Sender<ConnectionStatus>,
    cancel: &CancellationToken,
) {
    let mut decoder: SseDecoder = SseDecoder::new();
    loop {
        if cancel.is_cancelled() {
            return;
        }
        match client.notifications_stream_request().send().await {
            Ok(response) if response.status().is_success() => {
                decoder.reset();
                let _ = status.send(ConnectionStatus::Connected);
                info!("notification stream connected");
                read_stream(response, &mut decoder, events, cancel).await;
            }
            Ok(response) => {
                warn!(status = %response.status(), "notification stream refused");
            }
            Err(error) => {
                warn!(%error, "notification stream unreachable");
            }
        }
        if cancel.is_cancelled() {
            return;
        }
        let _ = status.send(ConnectionStatus::Reconnecting);
        tokio::select! {
            () = cancel.cancelled() => return,
            () = tokio::time::sleep(decoder.retry_delay()) => {}
        }
    }
}

/// Drains one connection's chunks until it ends or the worker is
/// cancelled.
async fn read_stream(
    response: Response,
    decoder: &mut SseDecoder,
    events: &mpsc::UnboundedSender<Notification>,
    cancel: &CancellationToken,
) {
    let mut stream = response.bytes_stream();
    loop {
        let chunk = tokio::select! {
            () = cancel.cancelled() => return,
            chunk = stream.next() => chunk,
        };
        let bytes = match chunk {
            Some(Ok(bytes)) => bytes,
            Some(Err(error)) => {
                warn!(%error, "notification stream interrupted");
                return;
            }
            None => {
                debug!("notification stream ended");
                return;
            }
        };
        let text: String = String::from_utf8_lossy(&bytes).into_owned();
        for event in decoder.push(&text) {
            match serde_json::from_str::<Notification>(&event.data) {
                Ok(notification) => {
                    if events.send(notification).is_err() {
                        return;
                    }
                }
                Err(error) => {
                    debug!(%error, data = %event.data, "ignoring undecodable event");
                }
            }
        }
    }
}
