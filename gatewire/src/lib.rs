//! Shared gate-access model for the browser client and the operator CLI.
//!
//! This crate owns everything both front-ends agree on: the gate-state tags
//! pushed over the status socket, the JSON message codec, the reconnect
//! backoff policy, the transport-free connection state machine, and the REST
//! contract (paths, DTOs, pagination, error taxonomy). It performs no I/O.

pub mod api;
pub mod backoff;
pub mod channel;
pub mod message;
pub mod model;
pub mod state;

pub use api::{ApiError, Listing, Page, PageCursor, page_from_url};
pub use backoff::Backoff;
pub use channel::{ChannelMachine, ChannelScope, ChannelStatus, SendError};
pub use message::{ChannelMessage, CodecError, decode, encode};
pub use state::{GateState, GateTone, TriggerAction};
