//! Gate phases reported by the controller and the actions that drive it.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use serde::{Deserialize, Serialize};

/// Server-reported phase of the physical gate.
///
/// Tags outside the known set decode as [`GateState::Unknown`] so a newer
/// controller firmware never breaks the status display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateState {
    /// Open for pedestrians.
    OpenP,
    /// Open for a vehicle.
    OpenV,
    Closed,
    /// Stopped somewhere between open and closed.
    NotClosed,
    OpeningP,
    OpeningV,
    Closing,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Coarse colour family used by status dots and pills.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateTone {
    Open,
    Closed,
    Moving,
    Warning,
    Unknown,
}

impl GateState {
    pub const ALL: [Self; 8] = [
        Self::OpenP,
        Self::OpenV,
        Self::Closed,
        Self::NotClosed,
        Self::OpeningP,
        Self::OpeningV,
        Self::Closing,
        Self::Unknown,
    ];

    /// Wire tag as sent in `status` frames and history rows.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::OpenP => "open_p",
            Self::OpenV => "open_v",
            Self::Closed => "closed",
            Self::NotClosed => "not_closed",
            Self::OpeningP => "opening_p",
            Self::OpeningV => "opening_v",
            Self::Closing => "closing",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a wire tag. Never fails; unrecognised tags map to `Unknown`.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|state| state.tag() == tag)
            .unwrap_or(Self::Unknown)
    }

    /// Localized display string.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::OpenP => "Otvorené pre chodcov",
            Self::OpenV => "Otvorené pre vozidlo",
            Self::Closed => "Zatvorené",
            Self::NotClosed => "Nie je zatvorené",
            Self::OpeningP => "Otvára sa pre chodcov",
            Self::OpeningV => "Otvára sa pre vozidlo",
            Self::Closing => "Zatvára sa",
            Self::Unknown => "Neznámy",
        }
    }

    #[must_use]
    pub fn tone(self) -> GateTone {
        match self {
            Self::OpenP | Self::OpenV => GateTone::Open,
            Self::Closed => GateTone::Closed,
            Self::OpeningP | Self::OpeningV | Self::Closing => GateTone::Moving,
            Self::NotClosed => GateTone::Warning,
            Self::Unknown => GateTone::Unknown,
        }
    }
}

impl GateTone {
    /// CSS modifier suffix, e.g. `status-dot--open`.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Moving => "moving",
            Self::Warning => "warning",
            Self::Unknown => "unknown",
        }
    }
}

/// Command that actuates the gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerAction {
    /// Start opening for a vehicle.
    #[serde(rename = "start_v")]
    StartVehicle,
    /// Start opening for pedestrians.
    #[serde(rename = "start_p")]
    StartPedestrian,
    /// Stop and close.
    #[serde(rename = "stop")]
    Stop,
}

impl TriggerAction {
    pub const ALL: [Self; 3] = [Self::StartVehicle, Self::StartPedestrian, Self::Stop];

    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::StartVehicle => "start_v",
            Self::StartPedestrian => "start_p",
            Self::Stop => "stop",
        }
    }

    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.tag() == tag)
    }

    /// Phrase shown while the action is in flight ("Spracúva sa ...").
    #[must_use]
    pub fn pending_label(self) -> &'static str {
        match self {
            Self::StartVehicle => "otvorenie pre vozidlá",
            Self::StartPedestrian => "otvorenie pre chodcov",
            Self::Stop => "zatvorenie brány",
        }
    }
}

impl std::fmt::Display for TriggerAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for TriggerAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown trigger `{s}` (expected start_v, start_p or stop)"))
    }
}
