use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// SIM card state as reported by the telephony layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SimCardState {
    Absent,
    NetworkLocked,
    NotReady,
    PinRequired,
    PukRequired,
    Ready,
    Unknown,
}

impl SimCardState {
    pub const ALL: [SimCardState; 7] = [
        SimCardState::Absent,
        SimCardState::NetworkLocked,
        SimCardState::NotReady,
        SimCardState::PinRequired,
        SimCardState::PukRequired,
        SimCardState::Ready,
        SimCardState::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SimCardState::Absent => "ABSENT",
            SimCardState::NetworkLocked => "NETWORK_LOCKED",
            SimCardState::NotReady => "NOT_READY",
            SimCardState::PinRequired => "PIN_REQUIRED",
            SimCardState::PukRequired => "PUK_REQUIRED",
            SimCardState::Ready => "READY",
            SimCardState::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for SimCardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised names parse as `Unknown` rather than failing.
impl FromStr for SimCardState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Ok(SimCardState::ALL
            .into_iter()
            .find(|state| state.as_str() == normalized)
            .unwrap_or(SimCardState::Unknown))
    }
}

/// The status of the lock screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LockStatus {
    /// SIM card present and not locked.
    Normal,
    /// The SIM card is network locked.
    NetworkLocked,
    /// The SIM card is missing.
    SimMissing,
    /// The SIM card is missing and the device isn't provisioned,
    /// so the user is not allowed past the screen.
    SimMissingLocked,
    /// Too many wrong unlock codes; the PUK is needed.
    SimPukLocked,
    /// The SIM card is PIN locked.
    SimLocked,
}

impl LockStatus {
    /// Whether the status lines (battery, next alarm, next calendar event)
    /// are shown while in this state. Mostly dictated by whether there is
    /// room for them.
    // SimMissing is not a locked state but still hides the lines.
    pub fn shows_status_lines(&self) -> bool {
        match self {
            LockStatus::Normal | LockStatus::NetworkLocked | LockStatus::SimLocked => true,
            LockStatus::SimMissing | LockStatus::SimMissingLocked | LockStatus::SimPukLocked => {
                false
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LockStatus::Normal => "NORMAL",
            LockStatus::NetworkLocked => "NETWORK_LOCKED",
            LockStatus::SimMissing => "SIM_MISSING",
            LockStatus::SimMissingLocked => "SIM_MISSING_LOCKED",
            LockStatus::SimPukLocked => "SIM_PUK_LOCKED",
            LockStatus::SimLocked => "SIM_LOCKED",
        }
    }
}

impl fmt::Display for LockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps SIM, provisioning and airplane-mode state to a [`LockStatus`].
pub struct StatusResolver;

impl StatusResolver {
    /// Determine the current status of the lock screen.
    ///
    /// First matching rule wins:
    /// 1. no SIM on an unprovisioned device locks the screen,
    /// 2. airplane mode suppresses all SIM-based locking,
    /// 3. otherwise the SIM state maps directly.
    pub fn resolve(
        sim_state: SimCardState,
        device_provisioned: bool,
        airplane_mode_on: bool,
    ) -> LockStatus {
        let status = if !device_provisioned && sim_state == SimCardState::Absent {
            LockStatus::SimMissingLocked
        } else if airplane_mode_on {
            LockStatus::Normal
        } else {
            match sim_state {
                SimCardState::Absent => LockStatus::SimMissing,
                SimCardState::NetworkLocked => LockStatus::SimMissingLocked,
                SimCardState::NotReady => LockStatus::SimMissing,
                SimCardState::PinRequired => LockStatus::SimLocked,
                SimCardState::PukRequired => LockStatus::SimPukLocked,
                SimCardState::Ready => LockStatus::Normal,
                SimCardState::Unknown => LockStatus::SimMissing,
            }
        };

        tracing::debug!(
            %sim_state,
            device_provisioned,
            airplane_mode_on,
            %status,
            "resolved lock status"
        );

        status
    }

    pub fn shows_status_lines(status: LockStatus) -> bool {
        status.shows_status_lines()
    }
}
