//! Input records for every payload mode.
//!
//! Each mode has a plain data record with `String` fields where an empty
//! string means "absent". Records carry no cross-field invariants - the
//! builders in [`crate::payload`] simply omit absent fields from their
//! output. Records are created fresh per form edit and discarded once the
//! payload string has been derived.

mod contact;
mod crypto;
mod wifi;

pub use contact::{ContactCard, MeCardContact};
pub use crypto::{CryptoKind, PaymentDraft, PaymentRequest, TokenTransfer};
pub use wifi::{WifiNetwork, WifiSecurity};

use serde::{Deserialize, Serialize};

/// The input mode a payload is generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Free text or URL, passed through unchanged.
    #[default]
    Text,
    /// vCard 3.0 contact card.
    Vcard,
    /// MeCard compact contact record.
    Mecard,
    /// `WIFI:` network-credential string.
    Wifi,
    /// Cryptocurrency payment URI.
    Crypto,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Vcard => write!(f, "vcard"),
            Self::Mecard => write!(f, "mecard"),
            Self::Wifi => write!(f, "wifi"),
            Self::Crypto => write!(f, "crypto"),
        }
    }
}
