//! Reconnecting status-channel watcher for the terminal.
//!
//! LIFECYCLE
//! =========
//! [`StatusWatcher::run`] loops `connect -> read frames -> closed ->
//! sleep(backoff)` with every decision taken by a `ChannelMachine`. A
//! shutdown signal disposes the machine from any phase: mid-handshake,
//! mid-stream or mid-sleep. Nothing reconnects afterwards.

#[cfg(test)]
#[path = "watch_test.rs"]
mod watch_test;

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use gatewire::{Backoff, ChannelMachine, ChannelScope, GateState, TriggerAction};
use tokio::sync::watch;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use crate::error::CliError;

/// How one connection attempt ended.
#[derive(Debug, PartialEq, Eq)]
enum Exit {
    Closed,
    Shutdown,
}

pub struct StatusWatcher {
    url: String,
    machine: ChannelMachine,
}

/// Resolves once shutdown is requested or the sender is gone.
async fn shutdown_requested(shutdown: &mut watch::Receiver<bool>) {
    loop {
        if *shutdown.borrow_and_update() {
            return;
        }
        if shutdown.changed().await.is_err() {
            return;
        }
    }
}

impl StatusWatcher {
    pub fn new(scope: &ChannelScope, ws_base: &str) -> Self {
        Self::with_backoff(scope, ws_base, Backoff::default())
    }

    pub fn with_backoff(scope: &ChannelScope, ws_base: &str, backoff: Backoff) -> Self {
        Self { url: scope.socket_url(ws_base), machine: ChannelMachine::new(backoff) }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Watch until `shutdown` flips to `true`, reporting every gate state
    /// pushed by the server to `on_state`.
    pub async fn run<F>(mut self, mut shutdown: watch::Receiver<bool>, mut on_state: F)
    where
        F: FnMut(GateState),
    {
        loop {
            if !self.machine.begin_connect() {
                break;
            }
            tracing::debug!(url = %self.url, "connecting status channel");
            match self.connect_once(&mut shutdown, &mut on_state).await {
                Ok(Exit::Shutdown) => {
                    self.machine.dispose();
                    break;
                }
                Ok(Exit::Closed) => {}
                Err(error) => tracing::warn!(%error, "status channel error"),
            }
            let Some(delay) = self.machine.closed() else {
                break;
            };
            let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
            tracing::info!(delay_ms, "status channel closed, reconnecting");
            tokio::select! {
                () = tokio::time::sleep(delay) => {}
                () = shutdown_requested(&mut shutdown) => {
                    self.machine.dispose();
                    break;
                }
            }
        }
        tracing::debug!("status watcher stopped");
    }

    async fn connect_once<F>(
        &mut self,
        shutdown: &mut watch::Receiver<bool>,
        on_state: &mut F,
    ) -> Result<Exit, CliError>
    where
        F: FnMut(GateState),
    {
        let connected = tokio::select! {
            result = connect_async(self.url.as_str()) => result?,
            () = shutdown_requested(shutdown) => return Ok(Exit::Shutdown),
        };
        let (mut stream, _) = connected;
        if !self.machine.opened() {
            return Ok(Exit::Shutdown);
        }
        tracing::info!("status channel open");

        loop {
            let next = tokio::select! {
                next = stream.next() => next,
                () = shutdown_requested(shutdown) => {
                    let _ = stream.close(None).await;
                    return Ok(Exit::Shutdown);
                }
            };
            let Some(message) = next else {
                return Ok(Exit::Closed);
            };
            match message? {
                Message::Text(text) => match self.machine.receive_text(text.as_str()) {
                    Ok(Some(state)) => on_state(state),
                    Ok(None) => {}
                    Err(error) => tracing::warn!(%error, "ignoring status frame"),
                },
                Message::Close(_) => return Ok(Exit::Closed),
                _ => {}
            }
        }
    }
}

/// Open a channel, send `action` once it is open, and close again.
pub async fn send_trigger(scope: &ChannelScope, ws_base: &str, action: TriggerAction, wait: Duration) -> Result<(), CliError> {
    let url = scope.socket_url(ws_base);
    let mut machine = ChannelMachine::default();
    machine.begin_connect();
    let (mut stream, _) = tokio::time::timeout(wait, connect_async(url.as_str()))
        .await
        .map_err(|_| CliError::Timeout)??;
    machine.opened();
    let frame = machine.outbound(action)?;
    stream.send(Message::Text(frame.into())).await?;
    tracing::info!(%action, "trigger sent");
    machine.dispose();
    let _ = stream.close(None).await;
    Ok(())
}
