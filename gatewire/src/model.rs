//! REST payloads exchanged with the gate service.
//!
//! DESIGN
//! ======
//! Shapes mirror the server JSON closely so serde stays declarative. Fields
//! the server may omit default instead of failing the whole screen.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{GateState, TriggerAction};

/// Parking lot size used for occupancy figures.
pub const LOT_CAPACITY: u32 = 20;

/// Parked-vehicle count at which the overview warns that the lot is filling.
pub const FILLING_WARNING_THRESHOLD: usize = 10;

// =============================================================
// Auth / session
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access: String,
}

/// `GET /api/general-info/` payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralInfo {
    #[serde(default)]
    pub user: Option<UserProfile>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub can_open_vehicle: bool,
    #[serde(default)]
    pub can_open_pedestrian: bool,
    #[serde(default)]
    pub can_close_gate: bool,
    #[serde(default)]
    pub is_admin: bool,
}

/// Permission flags of the signed-in user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Permissions {
    pub open_vehicle: bool,
    pub open_pedestrian: bool,
    pub close_gate: bool,
    pub admin: bool,
}

impl Permissions {
    #[must_use]
    pub fn allows(self, action: TriggerAction) -> bool {
        match action {
            TriggerAction::StartVehicle => self.open_vehicle,
            TriggerAction::StartPedestrian => self.open_pedestrian,
            TriggerAction::Stop => self.close_gate,
        }
    }
}

impl GeneralInfo {
    /// Permissions of the profile; everything denied without a profile.
    #[must_use]
    pub fn permissions(&self) -> Permissions {
        self.user.as_ref().map_or_else(Permissions::default, |user| Permissions {
            open_vehicle: user.can_open_vehicle,
            open_pedestrian: user.can_open_pedestrian,
            close_gate: user.can_close_gate,
            admin: user.is_admin,
        })
    }
}

// =============================================================
// Usage limits
// =============================================================

/// Remaining-use counter of a temporary access grant.
///
/// Wire encoding: `-1` unlimited, `0` disabled, `n > 0` remaining uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum UsageLimit {
    Unlimited,
    #[default]
    Disabled,
    Remaining(u32),
}

impl From<i64> for UsageLimit {
    fn from(value: i64) -> Self {
        match value {
            v if v < 0 => Self::Unlimited,
            0 => Self::Disabled,
            v => Self::Remaining(u32::try_from(v).unwrap_or(u32::MAX)),
        }
    }
}

impl From<UsageLimit> for i64 {
    fn from(value: UsageLimit) -> Self {
        match value {
            UsageLimit::Unlimited => -1,
            UsageLimit::Disabled => 0,
            UsageLimit::Remaining(n) => i64::from(n),
        }
    }
}

impl UsageLimit {
    #[must_use]
    pub fn is_enabled(self) -> bool {
        self != Self::Disabled
    }

    #[must_use]
    pub fn is_unlimited(self) -> bool {
        self == Self::Unlimited
    }

    /// One step up: unlimited wraps to disabled, counts grow by one.
    #[must_use]
    pub fn increment(self) -> Self {
        match self {
            Self::Unlimited => Self::Disabled,
            Self::Disabled => Self::Remaining(1),
            Self::Remaining(n) => Self::Remaining(n.saturating_add(1)),
        }
    }

    /// One step down. Administrators step from disabled to unlimited.
    #[must_use]
    pub fn decrement(self, is_admin: bool) -> Self {
        match self {
            Self::Remaining(n) if n <= 1 => Self::Disabled,
            Self::Remaining(n) => Self::Remaining(n - 1),
            Self::Disabled if is_admin => Self::Unlimited,
            other => other,
        }
    }

    #[must_use]
    pub fn can_decrement(self, is_admin: bool) -> bool {
        if is_admin {
            self != Self::Unlimited
        } else {
            matches!(self, Self::Remaining(n) if n > 0)
        }
    }

    /// Compact badge text, e.g. `∞` or `x3`.
    #[must_use]
    pub fn badge(self) -> String {
        match self {
            Self::Unlimited => "∞".to_owned(),
            Self::Disabled => "x0".to_owned(),
            Self::Remaining(n) => format!("x{n}"),
        }
    }
}

// =============================================================
// Temporary access
// =============================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessKind {
    /// Bound to a vehicle licence plate.
    #[default]
    #[serde(rename = "ecv", alias = "license_plate", alias = "License Plate")]
    Ecv,
    /// Shareable guest link.
    #[serde(rename = "link", alias = "Link")]
    Link,
}

impl AccessKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ecv => "License Plate",
            Self::Link => "Link",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessStatus {
    #[serde(alias = "active")]
    Active,
    #[serde(alias = "expired")]
    Expired,
    #[serde(alias = "revoked")]
    Revoked,
    /// Also covers any status the server adds later.
    #[default]
    #[serde(other)]
    Pending,
}

impl AccessStatus {
    pub const ALL: [Self; 4] = [Self::Active, Self::Expired, Self::Pending, Self::Revoked];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Expired => "Expired",
            Self::Pending => "Pending",
            Self::Revoked => "Revoked",
        }
    }
}

/// A time-boxed, usage-limited guest credential.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporaryAccess {
    pub link: String,
    #[serde(default)]
    pub access_type: AccessKind,
    #[serde(default)]
    pub ecv: Option<String>,
    #[serde(default)]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(default)]
    pub open_vehicle: UsageLimit,
    #[serde(default)]
    pub open_pedestrian: UsageLimit,
    #[serde(default)]
    pub close_gate: UsageLimit,
    #[serde(default)]
    pub status: AccessStatus,
}

impl TemporaryAccess {
    /// Limit governing `action` for this grant.
    #[must_use]
    pub fn limit_for(&self, action: TriggerAction) -> UsageLimit {
        match action {
            TriggerAction::StartVehicle => self.open_vehicle,
            TriggerAction::StartPedestrian => self.open_pedestrian,
            TriggerAction::Stop => self.close_gate,
        }
    }
}

/// Reason a create/edit form cannot be submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Enter the vehicle's license plate number.")]
    MissingPlate,
    #[error("Choose a start date and time.")]
    MissingStart,
    #[error("Choose an end date and time.")]
    MissingEnd,
    #[error("The end must be after the start.")]
    EndBeforeStart,
}

/// Body of `POST /api/temporary-access/` and `PATCH .../{link}/`.
///
/// Dates are the `datetime-local` strings the user typed; the server owns
/// their time zone interpretation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TemporaryAccessDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_type: Option<AccessKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecv: Option<String>,
    pub valid_from: String,
    pub valid_until: String,
    pub open_vehicle: UsageLimit,
    pub open_pedestrian: UsageLimit,
    pub close_gate: UsageLimit,
}

impl TemporaryAccessDraft {
    /// Check the draft before submission.
    ///
    /// # Errors
    ///
    /// Returns the first [`DraftError`] found.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.access_type == Some(AccessKind::Ecv)
            && self.ecv.as_deref().is_none_or(|plate| plate.trim().is_empty())
        {
            return Err(DraftError::MissingPlate);
        }
        if self.valid_from.trim().is_empty() {
            return Err(DraftError::MissingStart);
        }
        if self.valid_until.trim().is_empty() {
            return Err(DraftError::MissingEnd);
        }
        if let (Some(from), Some(until)) = (
            parse_datetime_local(&self.valid_from),
            parse_datetime_local(&self.valid_until),
        ) && until <= from
        {
            return Err(DraftError::EndBeforeStart);
        }
        Ok(())
    }
}

/// Parse an `<input type="datetime-local">` value (minutes or seconds precision).
#[must_use]
pub fn parse_datetime_local(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// Render a timestamp as a `datetime-local` input value (UTC wall clock).
#[must_use]
pub fn to_datetime_local(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%dT%H:%M").to_string()
}

// =============================================================
// License plates
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicensePlate {
    pub id: i64,
    pub ecv: String,
    #[serde(default)]
    pub is_allowed: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlateDraft {
    pub ecv: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PlateToggle {
    pub is_allowed: bool,
}

// =============================================================
// History
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerRecord {
    pub id: i64,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub trigger_type: String,
    #[serde(default)]
    pub username: Option<String>,
}

impl TriggerRecord {
    #[must_use]
    pub fn action(&self) -> Option<TriggerAction> {
        TriggerAction::parse(&self.trigger_type)
    }

    /// Who fired the trigger; automated triggers have no user.
    #[must_use]
    pub fn actor(&self) -> &str {
        match self.username.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "Systém",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRecord {
    pub id: i64,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub gate_state: GateState,
}

// =============================================================
// Parking
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingStatistics {
    #[serde(default)]
    pub current_parked: u32,
    /// Visits per ISO day (`YYYY-MM-DD`), ascending by key.
    #[serde(default)]
    pub daily_stats: BTreeMap<String, u32>,
}

impl ParkingStatistics {
    /// Visits on the most recent day in the series.
    #[must_use]
    pub fn today_visits(&self) -> u32 {
        self.daily_stats.values().next_back().copied().unwrap_or(0)
    }

    #[must_use]
    pub fn max_daily(&self) -> u32 {
        self.daily_stats.values().copied().max().unwrap_or(0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkedVehicle {
    pub id: i64,
    pub ecv: String,
    pub entered_at: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapacityLevel {
    Free,
    Filling,
    AlmostFull,
}

impl CapacityLevel {
    #[must_use]
    pub fn for_parked(parked: u32) -> Self {
        let percent = occupancy_percent(parked);
        if percent < 50 {
            Self::Free
        } else if percent < 90 {
            Self::Filling
        } else {
            Self::AlmostFull
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Free => "Voľné",
            Self::Filling => "Obsadzujúce sa",
            Self::AlmostFull => "Takmer plné",
        }
    }

    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Filling => "filling",
            Self::AlmostFull => "full",
        }
    }
}

/// Occupancy of the lot in whole percent, clamped to 0..=100.
#[must_use]
pub fn occupancy_percent(parked: u32) -> u32 {
    let percent = (u64::from(parked) * 100 + u64::from(LOT_CAPACITY) / 2) / u64::from(LOT_CAPACITY);
    u32::try_from(percent.min(100)).unwrap_or(100)
}

/// Whether the overview should warn that the lot is filling up.
#[must_use]
pub fn lot_filling_warning(parked: usize) -> bool {
    parked >= FILLING_WARNING_THRESHOLD
}
