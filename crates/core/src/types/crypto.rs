//! Cryptocurrency payment request types.
//!
//! A payment request is a tagged union over the supported currencies rather
//! than a loose bag of optional strings; the builder dispatches on the
//! variant and cannot observe an inconsistent combination.

use serde::{Deserialize, Serialize};

/// Supported payment URI families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CryptoKind {
    #[default]
    Bitcoin,
    Ethereum,
    Lightning,
}

impl std::fmt::Display for CryptoKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bitcoin => write!(f, "bitcoin"),
            Self::Ethereum => write!(f, "ethereum"),
            Self::Lightning => write!(f, "lightning"),
        }
    }
}

/// ERC-20 token transfer sub-record.
///
/// A transfer is *complete* when both addresses are non-empty; only then
/// does it supersede the plain-transfer encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TokenTransfer {
    /// Token contract address (e.g. the USDC contract).
    pub token_contract: String,
    /// Account receiving the tokens.
    pub recipient_address: String,
}

impl TokenTransfer {
    /// Both addresses present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.token_contract.is_empty() && !self.recipient_address.is_empty()
    }
}

/// A payment request, tagged by currency.
///
/// `amount` fields are pass-through decimal strings: the builder never
/// parses or normalizes them, and an empty amount simply drops the query
/// parameter from the URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PaymentRequest {
    Bitcoin {
        address: String,
        #[serde(default)]
        amount: String,
    },
    Ethereum {
        #[serde(default)]
        address: String,
        #[serde(default)]
        amount: String,
        /// EIP-681 chain id; treated as "1" (mainnet) when empty.
        #[serde(default)]
        chain_id: String,
        /// When complete, supersedes `address` and the plain-transfer
        /// encoding entirely.
        #[serde(default)]
        token: Option<TokenTransfer>,
    },
    Lightning {
        /// Lightning invoice or identifier string.
        invoice: String,
    },
}

impl Default for PaymentRequest {
    fn default() -> Self {
        Self::Bitcoin {
            address: String::new(),
            amount: String::new(),
        }
    }
}

impl PaymentRequest {
    /// The currency family of this request.
    #[must_use]
    pub const fn kind(&self) -> CryptoKind {
        match self {
            Self::Bitcoin { .. } => CryptoKind::Bitcoin,
            Self::Ethereum { .. } => CryptoKind::Ethereum,
            Self::Lightning { .. } => CryptoKind::Lightning,
        }
    }
}

/// Form-shaped draft of a payment request.
///
/// Mirrors what a frontend holds while the user types: the currency
/// selector, the shared address/amount fields, and the ERC-20 toggle with
/// its two addresses. [`PaymentDraft::to_request`] projects the draft onto
/// the variant the builder consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentDraft {
    pub kind: CryptoKind,
    pub address: String,
    pub amount: String,
    pub chain_id: String,
    pub erc20: bool,
    pub token_contract: String,
    pub recipient_address: String,
}

impl Default for PaymentDraft {
    fn default() -> Self {
        Self {
            kind: CryptoKind::Bitcoin,
            address: String::new(),
            amount: String::new(),
            chain_id: "1".to_string(),
            erc20: false,
            token_contract: String::new(),
            recipient_address: String::new(),
        }
    }
}

impl PaymentDraft {
    /// Project the draft onto a typed [`PaymentRequest`].
    ///
    /// The ERC-20 sub-record is attached only while the toggle is on; the
    /// builder still checks completeness before taking the token branch.
    #[must_use]
    pub fn to_request(&self) -> PaymentRequest {
        match self.kind {
            CryptoKind::Bitcoin => PaymentRequest::Bitcoin {
                address: self.address.clone(),
                amount: self.amount.clone(),
            },
            CryptoKind::Ethereum => PaymentRequest::Ethereum {
                address: self.address.clone(),
                amount: self.amount.clone(),
                chain_id: self.chain_id.clone(),
                token: self.erc20.then(|| TokenTransfer {
                    token_contract: self.token_contract.clone(),
                    recipient_address: self.recipient_address.clone(),
                }),
            },
            CryptoKind::Lightning => PaymentRequest::Lightning {
                invoice: self.address.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_transfer_completeness() {
        let mut transfer = TokenTransfer::default();
        assert!(!transfer.is_complete());
        transfer.token_contract = "0xA0b8".to_string();
        assert!(!transfer.is_complete());
        transfer.recipient_address = "0xRecv".to_string();
        assert!(transfer.is_complete());
    }

    #[test]
    fn request_deserializes_from_tagged_json() {
        let request: PaymentRequest = serde_json::from_str(
            r#"{"type":"ethereum","address":"0xabc","chain_id":"10"}"#,
        )
        .expect("tagged payment request");
        assert_eq!(request.kind(), CryptoKind::Ethereum);
    }

    #[test]
    fn unknown_tag_is_rejected_at_the_boundary() {
        let result: Result<PaymentRequest, _> =
            serde_json::from_str(r#"{"type":"dogecoin","address":"D123"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn draft_projects_lightning_address_as_invoice() {
        let draft = PaymentDraft {
            kind: CryptoKind::Lightning,
            address: "lnbc1qxy".to_string(),
            ..PaymentDraft::default()
        };
        assert_eq!(
            draft.to_request(),
            PaymentRequest::Lightning {
                invoice: "lnbc1qxy".to_string()
            }
        );
    }

    #[test]
    fn draft_attaches_token_only_when_toggled() {
        let mut draft = PaymentDraft {
            kind: CryptoKind::Ethereum,
            token_contract: "0xA0b8".to_string(),
            recipient_address: "0xRecv".to_string(),
            ..PaymentDraft::default()
        };
        let PaymentRequest::Ethereum { token, .. } = draft.to_request() else {
            panic!("expected ethereum variant");
        };
        assert!(token.is_none());

        draft.erc20 = true;
        let PaymentRequest::Ethereum { token, .. } = draft.to_request() else {
            panic!("expected ethereum variant");
        };
        assert!(token.is_some_and(|t| t.is_complete()));
    }
}
