//! Observable projection of the status channel.

use gatewire::{ChannelStatus, GateState};

/// What the UI shows about the gate: its last reported phase and whether
/// the status socket is currently connected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GateView {
    pub gate: GateState,
    pub connection: ChannelStatus,
}

impl GateView {
    pub fn is_connected(self) -> bool {
        self.connection == ChannelStatus::Open
    }
}
