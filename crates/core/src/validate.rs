//! Advisory format validators.
//!
//! Validation here is purely informational: a failed check is surfaced as
//! an inline hint and never prevents payload generation or export. None of
//! these functions perform I/O or panic on malformed input.

use std::sync::LazyLock;

use regex::Regex;

/// Legacy Bitcoin address (P2PKH/P2SH): leading `1` or `3` followed by
/// 25-34 base58 characters (alphanumeric excluding `0`, `O`, `I`, `l`).
static BITCOIN_LEGACY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[13][a-km-zA-HJ-NP-Z1-9]{25,34}$").expect("legacy address pattern")
});

/// Bech32 SegWit Bitcoin address: `bc1` followed by 39-87 lowercase
/// alphanumeric characters.
static BITCOIN_BECH32: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^bc1[a-z0-9]{39,87}$").expect("bech32 address pattern"));

/// Ethereum account address: `0x` plus exactly 40 hex characters.
static ETHEREUM_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x[a-fA-F0-9]{40}$").expect("ethereum address pattern"));

/// Why an address failed its advisory format check.
///
/// The `Display` strings are the exact hints surfaced to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// The input was empty.
    #[error("Address is required")]
    Empty,
    /// Neither the legacy nor the Bech32 shape matched.
    #[error("Invalid Bitcoin address format")]
    InvalidBitcoin,
    /// Not `0x` + 40 hex characters.
    #[error("Invalid Ethereum address (must be 0x + 40 hex chars)")]
    InvalidEthereum,
}

/// Check a Bitcoin address against the legacy and Bech32 shapes.
///
/// Case-sensitive per the character classes: legacy addresses exclude the
/// ambiguous `0OIl`, Bech32 bodies are lowercase only. No checksum is
/// verified - this is a shape check, not chain validation.
///
/// # Errors
///
/// [`AddressError::Empty`] for empty input, [`AddressError::InvalidBitcoin`]
/// when neither shape matches.
pub fn validate_bitcoin_address(address: &str) -> Result<(), AddressError> {
    if address.is_empty() {
        return Err(AddressError::Empty);
    }
    if BITCOIN_LEGACY.is_match(address) || BITCOIN_BECH32.is_match(address) {
        Ok(())
    } else {
        Err(AddressError::InvalidBitcoin)
    }
}

/// Check an Ethereum address shape: `0x` followed by exactly 40 hex
/// characters, any letter case.
///
/// The EIP-55 mixed-case checksum is deliberately not verified; any valid
/// hex casing passes.
///
/// # Errors
///
/// [`AddressError::Empty`] for empty input, [`AddressError::InvalidEthereum`]
/// otherwise.
pub fn validate_ethereum_address(address: &str) -> Result<(), AddressError> {
    if address.is_empty() {
        return Err(AddressError::Empty);
    }
    if ETHEREUM_ADDRESS.is_match(address) {
        Ok(())
    } else {
        Err(AddressError::InvalidEthereum)
    }
}

/// Permissive structural email check.
///
/// One `@`, non-empty local part, non-empty domain containing a `.`, and
/// no whitespace anywhere. Advisory only - never blocks generation.
#[must_use]
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let Some(local) = parts.next() else {
        return false;
    };
    let Some(domain) = parts.next() else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && domain.contains('.')
}

/// Permissive URL check: parses as an absolute URL.
///
/// Advisory only - never blocks generation.
#[must_use]
pub fn validate_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}
