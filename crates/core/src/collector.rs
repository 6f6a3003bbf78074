//! Per-mode input collector.
//!
//! The collector is a small state machine with one state per [`InputMode`].
//! Every field mutation synchronously recomputes the payload through the
//! matching builder and refreshes the mode-specific advisory state; nothing
//! blocks, nothing retries, and no cross-mode state is shared beyond the
//! single emitted payload string. Mode switches are user-driven and reset
//! mode-local fields to fixed defaults.

use serde::Serialize;

use crate::payload::{build_mecard, build_payment, build_vcard, build_wifi};
use crate::types::{
    ContactCard, CryptoKind, InputMode, MeCardContact, PaymentDraft, WifiNetwork,
};
use crate::validate::{validate_bitcoin_address, validate_ethereum_address};

/// Advisory validation outcome surfaced next to the payload.
///
/// Failures never gate payload generation - `payload()` is always current
/// regardless of what this says.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Validation {
    /// A passing check.
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    /// A failing check with a user-facing hint.
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

impl Default for Validation {
    fn default() -> Self {
        Self::ok()
    }
}

/// Wi-Fi advisory shown while a secured network has no password.
const PASSWORD_REQUIRED: &str = "Password required for secured network";

/// Gathers raw per-mode fields and derives the payload on every change.
#[derive(Debug, Clone, Default)]
pub struct Collector {
    mode: InputMode,
    text: String,
    contact: ContactCard,
    mecard: MeCardContact,
    wifi: WifiNetwork,
    payment: PaymentDraft,
    payload: String,
    validation: Validation,
    warning: Option<String>,
}

impl Collector {
    /// A collector in text mode with every record at its fixed default.
    #[must_use]
    pub fn new() -> Self {
        let mut collector = Self::default();
        collector.recompute();
        collector
    }

    /// Current input mode.
    #[must_use]
    pub const fn mode(&self) -> InputMode {
        self.mode
    }

    /// The payload derived from the current mode's record.
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Mode-specific advisory validation (address format checks).
    #[must_use]
    pub const fn validation(&self) -> &Validation {
        &self.validation
    }

    /// Mode-specific advisory warning (missing Wi-Fi password).
    #[must_use]
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn contact(&self) -> &ContactCard {
        &self.contact
    }

    #[must_use]
    pub const fn mecard(&self) -> &MeCardContact {
        &self.mecard
    }

    #[must_use]
    pub const fn wifi(&self) -> &WifiNetwork {
        &self.wifi
    }

    #[must_use]
    pub const fn payment(&self) -> &PaymentDraft {
        &self.payment
    }

    /// Switch modes, resetting mode-local fields to their fixed defaults.
    pub fn set_mode(&mut self, mode: InputMode) {
        if self.mode != mode {
            self.reset_records();
            self.mode = mode;
            self.recompute();
        }
    }

    /// Restore every mode record to its default, keeping the current mode.
    pub fn reset(&mut self) {
        self.reset_records();
        self.recompute();
    }

    /// Replace the free-text record (entering text mode if needed).
    pub fn set_text(&mut self, text: String) {
        self.mode = InputMode::Text;
        self.text = text;
        self.recompute();
    }

    /// Replace the vCard record (entering vcard mode if needed).
    pub fn set_contact(&mut self, contact: ContactCard) {
        self.mode = InputMode::Vcard;
        self.contact = contact;
        self.recompute();
    }

    /// Replace the MeCard record (entering mecard mode if needed).
    pub fn set_mecard(&mut self, mecard: MeCardContact) {
        self.mode = InputMode::Mecard;
        self.mecard = mecard;
        self.recompute();
    }

    /// Replace the Wi-Fi record (entering wifi mode if needed).
    pub fn set_wifi(&mut self, wifi: WifiNetwork) {
        self.mode = InputMode::Wifi;
        self.wifi = wifi;
        self.recompute();
    }

    /// Replace the payment draft (entering crypto mode if needed).
    pub fn set_payment(&mut self, payment: PaymentDraft) {
        self.mode = InputMode::Crypto;
        self.payment = payment;
        self.recompute();
    }

    /// Switch the payment sub-type, clearing the address and dropping out
    /// of ERC-20 entry.
    pub fn set_payment_kind(&mut self, kind: CryptoKind) {
        self.mode = InputMode::Crypto;
        self.payment.kind = kind;
        self.payment.address.clear();
        self.payment.erc20 = false;
        self.recompute();
    }

    /// Toggle ERC-20 entry; enabling clears both token addresses.
    pub fn set_erc20_enabled(&mut self, enabled: bool) {
        self.mode = InputMode::Crypto;
        self.payment.erc20 = enabled;
        if enabled {
            self.payment.token_contract.clear();
            self.payment.recipient_address.clear();
        }
        self.recompute();
    }

    fn reset_records(&mut self) {
        self.text = String::new();
        self.contact = ContactCard::default();
        self.mecard = MeCardContact::default();
        self.wifi = WifiNetwork::default();
        self.payment = PaymentDraft::default();
    }

    /// Derive payload, validation and warning from the current record.
    fn recompute(&mut self) {
        self.payload = match self.mode {
            InputMode::Text => self.text.clone(),
            InputMode::Vcard => build_vcard(&self.contact),
            InputMode::Mecard => build_mecard(&self.mecard),
            InputMode::Wifi => build_wifi(&self.wifi),
            InputMode::Crypto => build_payment(&self.payment.to_request()),
        };

        self.validation = match self.mode {
            InputMode::Crypto => self.validate_payment(),
            _ => Validation::ok(),
        };

        self.warning = match self.mode {
            InputMode::Wifi if self.wifi.missing_password() => {
                Some(PASSWORD_REQUIRED.to_string())
            }
            _ => None,
        };
    }

    fn validate_payment(&self) -> Validation {
        match self.payment.kind {
            CryptoKind::Bitcoin => match validate_bitcoin_address(&self.payment.address) {
                Ok(()) => Validation::ok(),
                Err(e) => Validation::fail(e.to_string()),
            },
            CryptoKind::Ethereum if self.payment.erc20 => {
                if validate_ethereum_address(&self.payment.token_contract).is_err() {
                    Validation::fail("Invalid token contract address")
                } else if validate_ethereum_address(&self.payment.recipient_address).is_err() {
                    Validation::fail("Invalid recipient address")
                } else {
                    Validation::ok()
                }
            }
            CryptoKind::Ethereum => match validate_ethereum_address(&self.payment.address) {
                Ok(()) => Validation::ok(),
                Err(e) => Validation::fail(e.to_string()),
            },
            CryptoKind::Lightning => Validation::ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WifiSecurity;

    #[test]
    fn starts_in_text_mode_with_empty_payload() {
        let collector = Collector::new();
        assert_eq!(collector.mode(), InputMode::Text);
        assert_eq!(collector.payload(), "");
        assert!(collector.validation().valid);
        assert!(collector.warning().is_none());
    }

    #[test]
    fn text_updates_pass_through_unchanged() {
        let mut collector = Collector::new();
        collector.set_text("https://example.com".to_string());
        assert_eq!(collector.payload(), "https://example.com");
    }

    #[test]
    fn every_mutation_recomputes_the_payload() {
        let mut collector = Collector::new();
        collector.set_wifi(WifiNetwork {
            ssid: "net".to_string(),
            password: "pw".to_string(),
            security: WifiSecurity::Wpa2,
            hidden: false,
        });
        assert_eq!(collector.payload(), "WIFI:T:WPA2;S:net;P:pw;H:false;;");

        collector.set_wifi(WifiNetwork {
            ssid: "other".to_string(),
            password: "pw".to_string(),
            security: WifiSecurity::Wpa2,
            hidden: false,
        });
        assert_eq!(collector.payload(), "WIFI:T:WPA2;S:other;P:pw;H:false;;");
    }

    #[test]
    fn mode_switch_resets_fields_to_defaults() {
        let mut collector = Collector::new();
        collector.set_text("keep me not".to_string());
        collector.set_mode(InputMode::Wifi);
        assert_eq!(collector.payload(), "WIFI:T:WPA2;S:;P:;H:false;;");
        collector.set_mode(InputMode::Text);
        assert_eq!(collector.payload(), "");
    }

    #[test]
    fn switching_to_the_same_mode_keeps_fields() {
        let mut collector = Collector::new();
        collector.set_text("still here".to_string());
        collector.set_mode(InputMode::Text);
        assert_eq!(collector.payload(), "still here");
    }

    #[test]
    fn wifi_warning_surfaces_without_gating_output() {
        let mut collector = Collector::new();
        collector.set_wifi(WifiNetwork {
            ssid: "secured".to_string(),
            password: String::new(),
            security: WifiSecurity::Wpa,
            hidden: false,
        });
        assert_eq!(
            collector.warning(),
            Some("Password required for secured network")
        );
        // The builder still emitted a payload.
        assert_eq!(collector.payload(), "WIFI:T:WPA;S:secured;P:;H:false;;");

        collector.set_wifi(WifiNetwork {
            ssid: "open".to_string(),
            password: String::new(),
            security: WifiSecurity::NoPass,
            hidden: false,
        });
        assert!(collector.warning().is_none());
    }

    #[test]
    fn bitcoin_mode_validates_the_address() {
        let mut collector = Collector::new();
        collector.set_payment(PaymentDraft {
            kind: CryptoKind::Bitcoin,
            address: "1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2".to_string(),
            ..PaymentDraft::default()
        });
        assert!(collector.validation().valid);

        collector.set_payment(PaymentDraft {
            kind: CryptoKind::Bitcoin,
            address: "bogus".to_string(),
            ..PaymentDraft::default()
        });
        assert_eq!(
            collector.validation(),
            &Validation::fail("Invalid Bitcoin address format")
        );
        assert_eq!(collector.payload(), "bitcoin:bogus");
    }

    #[test]
    fn erc20_mode_reports_contract_then_recipient() {
        let mut collector = Collector::new();
        collector.set_payment(PaymentDraft {
            kind: CryptoKind::Ethereum,
            erc20: true,
            token_contract: "bad".to_string(),
            recipient_address: "bad".to_string(),
            ..PaymentDraft::default()
        });
        assert_eq!(
            collector.validation(),
            &Validation::fail("Invalid token contract address")
        );

        collector.set_payment(PaymentDraft {
            kind: CryptoKind::Ethereum,
            erc20: true,
            token_contract: "0xA0b86991c6218b36c1d19d4a2e9eb0ce3606eb48".to_string(),
            recipient_address: "bad".to_string(),
            ..PaymentDraft::default()
        });
        assert_eq!(
            collector.validation(),
            &Validation::fail("Invalid recipient address")
        );

        collector.set_payment(PaymentDraft {
            kind: CryptoKind::Ethereum,
            erc20: true,
            token_contract: "0xA0b86991c6218b36c1d19d4a2e9eb0ce3606eb48".to_string(),
            recipient_address: "0xab5801a7d398351b8be11c439e05c5b3259aec9b".to_string(),
            ..PaymentDraft::default()
        });
        assert!(collector.validation().valid);
    }

    #[test]
    fn lightning_mode_is_always_valid() {
        let mut collector = Collector::new();
        collector.set_payment(PaymentDraft {
            kind: CryptoKind::Lightning,
            address: "anything-goes".to_string(),
            ..PaymentDraft::default()
        });
        assert!(collector.validation().valid);
        assert_eq!(collector.payload(), "lightning:anything-goes");
    }

    #[test]
    fn kind_switch_clears_address_and_leaves_erc20() {
        let mut collector = Collector::new();
        collector.set_payment(PaymentDraft {
            kind: CryptoKind::Ethereum,
            address: "0xab5801a7d398351b8be11c439e05c5b3259aec9b".to_string(),
            erc20: true,
            ..PaymentDraft::default()
        });
        collector.set_payment_kind(CryptoKind::Bitcoin);
        assert_eq!(collector.payment().address, "");
        assert!(!collector.payment().erc20);
        assert_eq!(collector.payload(), "bitcoin:");
    }

    #[test]
    fn enabling_erc20_clears_token_addresses() {
        let mut collector = Collector::new();
        collector.set_payment(PaymentDraft {
            kind: CryptoKind::Ethereum,
            token_contract: "stale".to_string(),
            recipient_address: "stale".to_string(),
            ..PaymentDraft::default()
        });
        collector.set_erc20_enabled(true);
        assert_eq!(collector.payment().token_contract, "");
        assert_eq!(collector.payment().recipient_address, "");
    }

    #[test]
    fn reset_keeps_mode_but_clears_records() {
        let mut collector = Collector::new();
        collector.set_wifi(WifiNetwork {
            ssid: "net".to_string(),
            password: "pw".to_string(),
            security: WifiSecurity::Wpa2,
            hidden: true,
        });
        collector.reset();
        assert_eq!(collector.mode(), InputMode::Wifi);
        assert_eq!(collector.payload(), "WIFI:T:WPA2;S:;P:;H:false;;");
    }
}
