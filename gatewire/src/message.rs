//! JSON codec for the gate status socket.
//!
//! Inbound frames look like `{"type":"status","message":"closed"}` and
//! outbound frames like `{"type":"trigger","message":"start_v"}`.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use serde::{Deserialize, Serialize};

use crate::state::{GateState, TriggerAction};

/// Error returned by [`decode`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The text frame is not valid JSON or does not match the frame shape.
    #[error("malformed channel frame: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The frame's `type` is not one this client understands.
    #[error("unsupported channel frame type: {0}")]
    UnsupportedType(String),
}

/// A single frame on the status channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message", rename_all = "lowercase")]
pub enum ChannelMessage {
    /// Server push: the gate entered a new phase.
    Status(GateState),
    /// Client command: actuate the gate.
    Trigger(TriggerAction),
}

#[derive(Deserialize)]
struct RawFrame {
    #[serde(rename = "type")]
    kind: String,
}

/// Encode a frame into its JSON text representation.
#[must_use]
pub fn encode(message: &ChannelMessage) -> String {
    match message {
        ChannelMessage::Status(state) => {
            serde_json::json!({ "type": "status", "message": state.tag() }).to_string()
        }
        ChannelMessage::Trigger(action) => {
            serde_json::json!({ "type": "trigger", "message": action.tag() }).to_string()
        }
    }
}

/// Decode a text frame.
///
/// # Errors
///
/// Returns [`CodecError::UnsupportedType`] when the frame parses but names a
/// type other than `status`/`trigger`, and [`CodecError::Malformed`] otherwise.
pub fn decode(text: &str) -> Result<ChannelMessage, CodecError> {
    let raw: RawFrame = serde_json::from_str(text)?;
    match raw.kind.as_str() {
        "status" | "trigger" => Ok(serde_json::from_str(text)?),
        _ => Err(CodecError::UnsupportedType(raw.kind)),
    }
}
