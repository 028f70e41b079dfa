//! # Keyguard Monitor
//!
//! The event side of the lockscreen.
//! Telephony, carrier and settings changes arrive in order; after each one
//! the status and view are derived again from the latest snapshot.

use keyguard_core::{
    CarrierInfo, KeyguardConfig, LockStatus, LockscreenView, Presenter, SimCardState, StatusLines,
};
use thiserror::Error;
use tokio::sync::mpsc;

const COMMAND_CAPACITY: usize = 32;
const UPDATE_CAPACITY: usize = 64;

/// Inputs from the telephony and settings collaborators.
#[derive(Debug, Clone)]
pub enum KeyguardEvent {
    SimStateChanged(SimCardState),
    CarrierInfoRefreshed(CarrierInfo),
    StatusLinesChanged(StatusLines),
    ConfigChanged(KeyguardConfig),
}

/// Emitted once per processed event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyguardUpdate {
    pub status: LockStatus,
    pub view: LockscreenView,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MonitorError {
    #[error("keyguard monitor task is closed")]
    Closed,
}

/// Commands sent to the monitor task
enum MonitorCommand {
    Event(KeyguardEvent),
    Stop,
}

/// Latest value of every input.
#[derive(Debug, Clone)]
struct Snapshot {
    sim_state: SimCardState,
    carrier: CarrierInfo,
    lines: StatusLines,
    config: KeyguardConfig,
}

impl Snapshot {
    fn new(config: KeyguardConfig) -> Self {
        Self {
            sim_state: SimCardState::Unknown,
            carrier: CarrierInfo::default(),
            lines: StatusLines::default(),
            config,
        }
    }

    fn apply(&mut self, event: KeyguardEvent) {
        match event {
            KeyguardEvent::SimStateChanged(state) => {
                tracing::debug!(%state, "sim state changed");
                self.sim_state = state;
            }
            KeyguardEvent::CarrierInfoRefreshed(carrier) => {
                tracing::debug!(plmn = ?carrier.plmn, spn = ?carrier.spn, "carrier info refreshed");
                self.carrier = carrier;
            }
            KeyguardEvent::StatusLinesChanged(lines) => self.lines = lines,
            KeyguardEvent::ConfigChanged(config) => {
                tracing::debug!(label_type = ?config.carrier_label_type, "config changed");
                self.config = config;
            }
        }
    }

    fn derive(&self) -> KeyguardUpdate {
        let status = self.config.resolve(self.sim_state);
        let view = Presenter::present(status, &self.carrier, &self.config, &self.lines);
        KeyguardUpdate { status, view }
    }
}

/// Handle to the running monitor task.
pub struct KeyguardMonitor {
    cmd_tx: mpsc::Sender<MonitorCommand>,
}

impl std::fmt::Debug for KeyguardMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyguardMonitor")
            .field("closed", &self.cmd_tx.is_closed())
            .finish()
    }
}

impl KeyguardMonitor {
    /// Spawn the monitor task. Must be called from inside a tokio runtime.
    pub fn start(config: KeyguardConfig) -> (Self, mpsc::Receiver<KeyguardUpdate>) {
        let (update_tx, update_rx) = mpsc::channel(UPDATE_CAPACITY);
        let (cmd_tx, mut cmd_rx) = mpsc::channel(COMMAND_CAPACITY);

        tokio::spawn(async move {
            tracing::info!("Keyguard monitor started");
            let mut snapshot = Snapshot::new(config);

            while let Some(cmd) = cmd_rx.recv().await {
                match cmd {
                    MonitorCommand::Event(event) => {
                        snapshot.apply(event);
                        if update_tx.send(snapshot.derive()).await.is_err() {
                            tracing::warn!("Update receiver dropped, stopping monitor");
                            break;
                        }
                    }
                    MonitorCommand::Stop => break,
                }
            }

            tracing::info!("Keyguard monitor stopped");
        });

        (Self { cmd_tx }, update_rx)
    }

    pub async fn sim_state_changed(&self, state: SimCardState) -> Result<(), MonitorError> {
        self.send(KeyguardEvent::SimStateChanged(state)).await
    }

    pub async fn carrier_info_refreshed(&self, carrier: CarrierInfo) -> Result<(), MonitorError> {
        self.send(KeyguardEvent::CarrierInfoRefreshed(carrier)).await
    }

    pub async fn status_lines_changed(&self, lines: StatusLines) -> Result<(), MonitorError> {
        self.send(KeyguardEvent::StatusLinesChanged(lines)).await
    }

    pub async fn config_changed(&self, config: KeyguardConfig) -> Result<(), MonitorError> {
        self.send(KeyguardEvent::ConfigChanged(config)).await
    }

    pub async fn send(&self, event: KeyguardEvent) -> Result<(), MonitorError> {
        self.cmd_tx
            .send(MonitorCommand::Event(event))
            .await
            .map_err(|_| MonitorError::Closed)
    }

    pub async fn stop(&self) -> Result<(), MonitorError> {
        self.cmd_tx
            .send(MonitorCommand::Stop)
            .await
            .map_err(|_| MonitorError::Closed)
    }
}
