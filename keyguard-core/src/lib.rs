//! # Keyguard Core
//!
//! Lockscreen decision logic: which lock status a SIM/provisioning snapshot
//! maps to, how the carrier label is composed, and what the screen should
//! show as a result. Every entry point is a pure function of its inputs.

pub mod carrier;
pub mod config;
pub mod error;
pub mod presenter;
pub mod status;

// Re-export the main types so users can just use `keyguard_core::StatusResolver`
pub use carrier::{CarrierInfo, CarrierLabelFormatter, CarrierLabelType};
pub use config::{KeyguardConfig, LockMessages, WidgetLayout};
pub use error::ConfigError;
pub use presenter::{LockscreenView, Presenter, StatusLines};
pub use status::{LockStatus, SimCardState, StatusResolver};
