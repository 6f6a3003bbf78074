//! `WIFI:` network-credential string builder.

use crate::types::WifiNetwork;

/// Characters that delimit fields and records in the `WIFI:` scheme.
const WIFI_SPECIALS: [char; 4] = ['\\', ';', ',', ':'];

/// Escape `\`, `;`, `,` and `:` with a single leading backslash.
///
/// Applied character-by-character before substitution into the string -
/// these characters are field and record delimiters in the scheme and an
/// unescaped occurrence would split the SSID or password at scan time.
fn escape_wifi(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if WIFI_SPECIALS.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Build a `WIFI:` join string from a network record.
///
/// Shape: `WIFI:T:<auth>;S:<ssid>;P:<password>;H:<true|false>;;` - the
/// auth tag is emitted verbatim (including `nopass`), the password renders
/// as the empty string when absent, and `hidden` renders as a literal
/// `true`/`false`.
#[must_use]
pub fn build_wifi(network: &WifiNetwork) -> String {
    format!(
        "WIFI:T:{};S:{};P:{};H:{};;",
        network.security.as_tag(),
        escape_wifi(&network.ssid),
        escape_wifi(&network.password),
        network.hidden,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WifiSecurity;

    #[test]
    fn delimiters_are_escaped_exactly_once() {
        let network = WifiNetwork {
            ssid: "my;net".to_string(),
            password: "p:a\\ss".to_string(),
            security: WifiSecurity::Wpa2,
            hidden: false,
        };
        assert_eq!(
            build_wifi(&network),
            "WIFI:T:WPA2;S:my\\;net;P:p\\:a\\\\ss;H:false;;"
        );
    }

    #[test]
    fn open_network_keeps_nopass_tag_and_empty_password() {
        let network = WifiNetwork {
            ssid: "cafe".to_string(),
            password: String::new(),
            security: WifiSecurity::NoPass,
            hidden: true,
        };
        assert_eq!(build_wifi(&network), "WIFI:T:nopass;S:cafe;P:;H:true;;");
    }

    #[test]
    fn empty_record_still_emits_the_frame() {
        assert_eq!(
            build_wifi(&WifiNetwork::default()),
            "WIFI:T:WPA2;S:;P:;H:false;;"
        );
    }

    #[test]
    fn comma_and_colon_in_ssid_are_escaped() {
        let network = WifiNetwork {
            ssid: "a,b:c".to_string(),
            ..WifiNetwork::default()
        };
        assert!(build_wifi(&network).contains("S:a\\,b\\:c;"));
    }
}
