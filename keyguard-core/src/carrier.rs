use serde::{Deserialize, Serialize};

/// How the carrier label on the lock screen is composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "RawLabelType")]
pub enum CarrierLabelType {
    /// `plmn`, `spn`, or `plmn|spn`.
    #[default]
    Default,
    Spn,
    Plmn,
    /// A user template with `$n`, `$d`, `$p` and `$s` directives.
    Custom,
}

impl CarrierLabelType {
    /// Decode the integer stored in system settings. Unknown values fall
    /// back to [`CarrierLabelType::Default`].
    pub fn from_setting(value: i64) -> Self {
        match value {
            1 => CarrierLabelType::Spn,
            2 => CarrierLabelType::Plmn,
            3 => CarrierLabelType::Custom,
            _ => CarrierLabelType::Default,
        }
    }

    pub fn setting_value(&self) -> i64 {
        match self {
            CarrierLabelType::Default => 0,
            CarrierLabelType::Spn => 1,
            CarrierLabelType::Plmn => 2,
            CarrierLabelType::Custom => 3,
        }
    }
}

/// Settings files carry either the integer code or the lowercase name.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLabelType {
    Code(i64),
    Name(String),
}

impl From<RawLabelType> for CarrierLabelType {
    fn from(raw: RawLabelType) -> Self {
        match raw {
            RawLabelType::Code(code) => CarrierLabelType::from_setting(code),
            RawLabelType::Name(name) => match name.to_ascii_lowercase().as_str() {
                "spn" => CarrierLabelType::Spn,
                "plmn" => CarrierLabelType::Plmn,
                "custom" => CarrierLabelType::Custom,
                _ => CarrierLabelType::Default,
            },
        }
    }
}

/// Current network display fields, refreshed by the telephony layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierInfo {
    pub plmn: Option<String>,
    pub spn: Option<String>,
    /// Operator name the radio is registered on. Only used to decide whether
    /// `plmn` is the real network name.
    #[serde(default)]
    pub operator_alpha: Option<String>,
}

impl CarrierInfo {
    pub fn new(plmn: Option<&str>, spn: Option<&str>) -> Self {
        Self {
            plmn: plmn.map(str::to_string),
            spn: spn.map(str::to_string),
            operator_alpha: None,
        }
    }

    pub fn with_operator_alpha(mut self, alpha: impl Into<String>) -> Self {
        self.operator_alpha = Some(alpha.into());
        self
    }

    pub fn plmn(&self) -> Option<&str> {
        self.plmn.as_deref()
    }

    pub fn spn(&self) -> Option<&str> {
        self.spn.as_deref()
    }

    pub fn label(&self, label_type: CarrierLabelType, custom_template: &str) -> String {
        CarrierLabelFormatter::format(self.plmn(), self.spn(), label_type, custom_template)
    }
}

/// Builds the carrier string shown on the lock screen.
pub struct CarrierLabelFormatter;

impl CarrierLabelFormatter {
    /// Shorthand for `format(plmn, spn, CarrierLabelType::Default, "")`.
    pub fn format_default(plmn: Option<&str>, spn: Option<&str>) -> String {
        Self::format(plmn, spn, CarrierLabelType::Default, "")
    }

    /// Compose the carrier label. Never fails: missing fields become empty
    /// text.
    ///
    /// For [`CarrierLabelType::Custom`] the template is rewritten by four
    /// sequential replace-all passes in this order:
    ///
    /// - `$n` = new line
    /// - `$d` = default carrier text
    /// - `$p` = plmn carrier text
    /// - `$s` = spn carrier text
    ///
    /// A later pass also rewrites directives that an earlier pass inserted.
    /// Anything else in the template is left verbatim.
    pub fn format(
        plmn: Option<&str>,
        spn: Option<&str>,
        label_type: CarrierLabelType,
        custom_template: &str,
    ) -> String {
        match label_type {
            CarrierLabelType::Default => default_text(plmn, spn),
            CarrierLabelType::Spn => spn.unwrap_or_default().to_string(),
            CarrierLabelType::Plmn => plmn.unwrap_or_default().to_string(),
            CarrierLabelType::Custom => {
                let default_str = default_text(plmn, spn);

                custom_template
                    .replace("$n", "\n")
                    .replace("$d", &default_str)
                    .replace("$p", plmn.unwrap_or_default())
                    .replace("$s", spn.unwrap_or_default())
            }
        }
    }
}

// An empty field counts as missing when picking a single-field label.
fn default_text(plmn: Option<&str>, spn: Option<&str>) -> String {
    match (plmn, spn) {
        (Some(p), s) if s.is_none_or(str::is_empty) => p.to_string(),
        (p, Some(s)) if p.is_none_or(str::is_empty) => s.to_string(),
        (Some(p), Some(s)) => format!("{p}|{s}"),
        _ => String::new(),
    }
}
