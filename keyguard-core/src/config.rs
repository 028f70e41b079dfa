use crate::carrier::CarrierLabelType;
use crate::error::ConfigError;
use crate::status::{LockStatus, SimCardState, StatusResolver};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ════════════════════════════════════════════════════════════════════
// Settings
// ════════════════════════════════════════════════════════════════════

/// Everything the lockscreen would otherwise read from global settings.
/// Missing JSON fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyguardConfig {
    pub device_provisioned: bool,
    pub airplane_mode_on: bool,
    pub carrier_label_type: CarrierLabelType,
    pub carrier_label_custom: Option<String>,
    pub widget_layout: WidgetLayout,
    pub messages: LockMessages,
}

impl Default for KeyguardConfig {
    fn default() -> Self {
        Self {
            device_provisioned: true,
            airplane_mode_on: false,
            carrier_label_type: CarrierLabelType::Default,
            carrier_label_custom: None,
            widget_layout: WidgetLayout::Standard,
            messages: LockMessages::default(),
        }
    }
}

impl KeyguardConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        tracing::info!(path = %path.display(), "loaded keyguard config");
        Ok(config)
    }

    /// The custom carrier template; an unset template is empty.
    pub fn custom_template(&self) -> &str {
        self.carrier_label_custom.as_deref().unwrap_or_default()
    }

    pub fn resolve(&self, sim_state: SimCardState) -> LockStatus {
        StatusResolver::resolve(sim_state, self.device_provisioned, self.airplane_mode_on)
    }
}

/// Lockscreen widget arrangement. Settings value `1` is the compact layout,
/// which has no room for the status lines; everything else is standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum WidgetLayout {
    #[default]
    Standard,
    Compact,
}

impl From<i64> for WidgetLayout {
    fn from(value: i64) -> Self {
        if value == 1 {
            WidgetLayout::Compact
        } else {
            WidgetLayout::Standard
        }
    }
}

impl From<WidgetLayout> for i64 {
    fn from(layout: WidgetLayout) -> Self {
        match layout {
            WidgetLayout::Standard => 0,
            WidgetLayout::Compact => 1,
        }
    }
}

// ════════════════════════════════════════════════════════════════════
// Localized strings
// ════════════════════════════════════════════════════════════════════

/// Texts the presenter places in the carrier and instruction slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockMessages {
    pub network_locked: String,
    pub missing_sim_short: String,
    pub missing_sim_instructions: String,
    pub sim_locked: String,
    pub sim_puk_locked: String,
    pub sim_puk_locked_instructions: String,
    pub pattern_disabled_instructions: String,
}

impl Default for LockMessages {
    fn default() -> Self {
        Self {
            network_locked: "Network locked".to_string(),
            missing_sim_short: "No SIM card.".to_string(),
            missing_sim_instructions: "Please insert a SIM card.".to_string(),
            sim_locked: "SIM card is locked.".to_string(),
            sim_puk_locked: "SIM card is PUK-locked.".to_string(),
            sim_puk_locked_instructions: "Please see the User Guide or contact Customer Care."
                .to_string(),
            pattern_disabled_instructions: "Press Menu to unlock or place emergency call."
                .to_string(),
        }
    }
}
