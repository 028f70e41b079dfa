//! Lockscreen presentation model.
//!
//! Turns a resolved [`LockStatus`] and the current carrier info into the
//! texts and visibility flags the renderer applies. Nothing here touches a
//! view; the output is plain data.

use crate::carrier::{CarrierInfo, CarrierLabelFormatter};
use crate::config::{KeyguardConfig, WidgetLayout};
use crate::status::LockStatus;
use serde::{Deserialize, Serialize};

/// Summary lines supplied by the battery, alarm and calendar collaborators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLines {
    pub charging: Option<String>,
    pub next_alarm: Option<String>,
    pub next_calendar: Option<String>,
}

impl StatusLines {
    pub fn is_empty(&self) -> bool {
        self.charging.is_none() && self.next_alarm.is_none() && self.next_calendar.is_none()
    }
}

/// What the lock screen should show for one snapshot of inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockscreenView {
    pub status: LockStatus,
    pub carrier_text: String,
    /// `None` leaves the instruction slot empty.
    pub instructions: Option<String>,
    pub unlock_widgets_visible: bool,
    pub emergency_text_visible: bool,
    pub emergency_button_visible: bool,
    /// `None` hides the status box; otherwise only the present lines are shown.
    pub status_lines: Option<StatusLines>,
}

pub struct Presenter;

impl Presenter {
    pub fn present(
        status: LockStatus,
        carrier: &CarrierInfo,
        config: &KeyguardConfig,
        lines: &StatusLines,
    ) -> LockscreenView {
        let messages = &config.messages;
        let plmn = carrier.plmn();

        let mut view = LockscreenView {
            status,
            carrier_text: String::new(),
            instructions: None,
            unlock_widgets_visible: true,
            emergency_text_visible: false,
            emergency_button_visible: false,
            status_lines: None,
        };

        match status {
            LockStatus::Normal => {
                view.carrier_text = normal_carrier_text(carrier, config);
                // Empty, but the slot stays in place for unlock feedback.
                view.instructions = Some(String::new());
            }
            LockStatus::NetworkLocked => {
                view.carrier_text =
                    CarrierLabelFormatter::format_default(plmn, Some(&messages.network_locked));
                view.instructions = Some(messages.pattern_disabled_instructions.clone());
            }
            LockStatus::SimMissing => {
                view.carrier_text = messages.missing_sim_short.clone();
                view.instructions = Some(messages.missing_sim_instructions.clone());
                view.emergency_text_visible = true;
            }
            LockStatus::SimMissingLocked => {
                view.carrier_text =
                    CarrierLabelFormatter::format_default(plmn, Some(&messages.missing_sim_short));
                view.instructions = Some(messages.missing_sim_instructions.clone());
                view.unlock_widgets_visible = false;
                view.emergency_text_visible = true;
                view.emergency_button_visible = true;
            }
            LockStatus::SimLocked => {
                view.carrier_text =
                    CarrierLabelFormatter::format_default(plmn, Some(&messages.sim_locked));
            }
            LockStatus::SimPukLocked => {
                view.carrier_text =
                    CarrierLabelFormatter::format_default(plmn, Some(&messages.sim_puk_locked));
                view.instructions = Some(messages.sim_puk_locked_instructions.clone());
                view.unlock_widgets_visible = false;
                view.emergency_text_visible = true;
                view.emergency_button_visible = true;
            }
        }

        if status.shows_status_lines() && config.widget_layout != WidgetLayout::Compact {
            view.status_lines = Some(lines.clone());
        }

        tracing::debug!(%status, carrier = %view.carrier_text, "updated lockscreen layout");

        view
    }
}

/// The configured label is only honoured while the PLMN is the name of the
/// network the radio is actually on; a roaming or emergency PLMN gets the
/// default composition.
fn normal_carrier_text(carrier: &CarrierInfo, config: &KeyguardConfig) -> String {
    let real_plmn = carrier.operator_alpha.as_deref().unwrap_or_default();

    match carrier.plmn() {
        Some(plmn) if plmn != real_plmn => {
            CarrierLabelFormatter::format_default(Some(plmn), carrier.spn())
        }
        _ => carrier.label(config.carrier_label_type, config.custom_template()),
    }
}
