//! Transport-free core of the reconnecting status channel.
//!
//! Each connection manager (browser or CLI) owns one [`ChannelMachine`] per
//! connection run and feeds it transport events. The machine decides whether
//! a reconnect is scheduled, how long to wait, whether an outbound trigger
//! may be transmitted, and what the current gate state is.
//!
//! LIFECYCLE
//! =========
//! `Connecting -> Open -> Closed -> (backoff) -> Connecting -> ...`, with
//! `Disposed` reachable from every state and terminal. Once disposed no
//! reconnect delay is ever handed out, so a sleeping backoff timer that
//! wakes after teardown finds `begin_connect() == false` and stops.

#[cfg(test)]
#[path = "channel_test.rs"]
mod channel_test;

use std::time::Duration;

use crate::backoff::Backoff;
use crate::message::{self, ChannelMessage, CodecError};
use crate::state::{GateState, TriggerAction};

/// What the socket is authenticated with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChannelScope {
    /// Bearer token of a signed-in user.
    Token(String),
    /// Opaque temporary-access link of a guest.
    TempLink(String),
}

impl ChannelScope {
    /// Query parameter name and value identifying this scope.
    #[must_use]
    pub fn query_pair(&self) -> (&'static str, &str) {
        match self {
            Self::Token(token) => ("token", token),
            Self::TempLink(link) => ("temp_access_link", link),
        }
    }

    /// Full socket URL under `ws_base` (e.g. `wss://gate.example.com`).
    #[must_use]
    pub fn socket_url(&self, ws_base: &str) -> String {
        let (key, value) = self.query_pair();
        format!("{}/ws/gate/?{key}={value}", ws_base.trim_end_matches('/'))
    }
}

/// Connection lifecycle state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChannelStatus {
    /// Socket handshake in flight.
    Connecting,
    /// Socket open; triggers may be sent.
    Open,
    /// Socket closed; a reconnect is pending.
    #[default]
    Closed,
    /// Torn down; no further reconnects.
    Disposed,
}

impl ChannelStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Connecting => "connecting",
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Disposed => "disposed",
        }
    }
}

/// Error returned when a trigger cannot be transmitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    #[error("status channel is not open ({})", .0.label())]
    NotOpen(ChannelStatus),
}

#[derive(Clone, Debug)]
pub struct ChannelMachine {
    status: ChannelStatus,
    backoff: Backoff,
    gate: GateState,
}

impl Default for ChannelMachine {
    fn default() -> Self {
        Self::new(Backoff::default())
    }
}

impl ChannelMachine {
    #[must_use]
    pub fn new(backoff: Backoff) -> Self {
        Self { status: ChannelStatus::Closed, backoff, gate: GateState::Unknown }
    }

    #[must_use]
    pub fn status(&self) -> ChannelStatus {
        self.status
    }

    /// Most recently received gate state.
    #[must_use]
    pub fn gate(&self) -> GateState {
        self.gate
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.status == ChannelStatus::Disposed
    }

    /// Consecutive failed attempts since the last successful open.
    #[must_use]
    pub fn failed_attempts(&self) -> u32 {
        self.backoff.attempts()
    }

    /// Enter `Connecting`. Returns `false` once disposed.
    pub fn begin_connect(&mut self) -> bool {
        if self.is_disposed() {
            return false;
        }
        self.status = ChannelStatus::Connecting;
        true
    }

    /// Socket reached the open state. Returns `false` once disposed.
    pub fn opened(&mut self) -> bool {
        if self.is_disposed() {
            return false;
        }
        self.status = ChannelStatus::Open;
        self.backoff.reset();
        true
    }

    /// Socket closed or failed to open.
    ///
    /// Returns the delay to wait before the next attempt, or `None` when the
    /// machine has been disposed and must not reconnect.
    pub fn closed(&mut self) -> Option<Duration> {
        if self.is_disposed() {
            return None;
        }
        self.status = ChannelStatus::Closed;
        Some(self.backoff.next_delay())
    }

    /// Apply an inbound frame. Returns the new gate state for `status` frames.
    pub fn receive(&mut self, message: ChannelMessage) -> Option<GateState> {
        if self.is_disposed() {
            return None;
        }
        match message {
            ChannelMessage::Status(state) => {
                self.gate = state;
                Some(state)
            }
            ChannelMessage::Trigger(_) => None,
        }
    }

    /// Decode and apply an inbound text frame.
    ///
    /// # Errors
    ///
    /// Propagates [`CodecError`] for undecodable frames; state is unchanged.
    pub fn receive_text(&mut self, text: &str) -> Result<Option<GateState>, CodecError> {
        let message = message::decode(text)?;
        Ok(self.receive(message))
    }

    /// Encoded `trigger` frame for `action`, only while open.
    ///
    /// # Errors
    ///
    /// Returns [`SendError::NotOpen`] in every state other than `Open`.
    pub fn outbound(&self, action: TriggerAction) -> Result<String, SendError> {
        if self.status != ChannelStatus::Open {
            return Err(SendError::NotOpen(self.status));
        }
        Ok(message::encode(&ChannelMessage::Trigger(action)))
    }

    /// Tear down. Idempotent.
    pub fn dispose(&mut self) {
        self.status = ChannelStatus::Disposed;
    }
}
