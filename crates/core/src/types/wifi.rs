//! Wi-Fi network credential record.

use serde::{Deserialize, Serialize};

/// Authentication scheme advertised in a `WIFI:` string.
///
/// The wire tags match what scanner apps expect: `WPA`, `WPA2`, `WEP` and
/// the literal `nopass` for open networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WifiSecurity {
    #[serde(rename = "WPA")]
    Wpa,
    #[default]
    #[serde(rename = "WPA2")]
    Wpa2,
    #[serde(rename = "WEP")]
    Wep,
    #[serde(rename = "nopass")]
    NoPass,
}

impl WifiSecurity {
    /// The verbatim tag emitted into the `T:` field.
    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::Wpa => "WPA",
            Self::Wpa2 => "WPA2",
            Self::Wep => "WEP",
            Self::NoPass => "nopass",
        }
    }
}

impl std::fmt::Display for WifiSecurity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

/// Input record for the `WIFI:` builder.
///
/// A secured network (`security != NoPass`) with an empty password is
/// *incomplete*: the collector surfaces a warning, but the builder still
/// emits output - no gating happens at the builder layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WifiNetwork {
    pub ssid: String,
    pub password: String,
    pub security: WifiSecurity,
    pub hidden: bool,
}

impl WifiNetwork {
    /// Whether a password is required but missing.
    #[must_use]
    pub fn missing_password(&self) -> bool {
        self.security != WifiSecurity::NoPass && self.password.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn security_tags_are_verbatim() {
        assert_eq!(WifiSecurity::Wpa.as_tag(), "WPA");
        assert_eq!(WifiSecurity::Wpa2.as_tag(), "WPA2");
        assert_eq!(WifiSecurity::Wep.as_tag(), "WEP");
        assert_eq!(WifiSecurity::NoPass.as_tag(), "nopass");
    }

    #[test]
    fn serde_uses_wire_tags() {
        let json = serde_json::to_string(&WifiSecurity::NoPass).expect("serialize");
        assert_eq!(json, "\"nopass\"");
        let parsed: WifiSecurity = serde_json::from_str("\"WPA2\"").expect("deserialize");
        assert_eq!(parsed, WifiSecurity::Wpa2);
    }

    #[test]
    fn missing_password_only_for_secured_networks() {
        let open = WifiNetwork {
            security: WifiSecurity::NoPass,
            ..WifiNetwork::default()
        };
        let secured = WifiNetwork {
            security: WifiSecurity::Wpa2,
            ..WifiNetwork::default()
        };
        assert!(!open.missing_password());
        assert!(secured.missing_password());
    }
}
