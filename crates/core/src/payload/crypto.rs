//! Payment URI builders (`bitcoin:`, `ethereum:` EIP-681, `lightning:`).

use crate::types::PaymentRequest;

/// Chain id substituted when the request leaves it empty.
const MAINNET_CHAIN_ID: &str = "1";

/// Build a payment URI from a typed request.
///
/// - Bitcoin: `bitcoin:<address>`, plus `?amount=<amount>` when an amount
///   is present.
/// - Ethereum with a complete ERC-20 sub-record:
///   `ethereum:<contract>@<chain>/transfer?address=<recipient>` plus
///   `&uint256=<amount>` when present; query values are percent-encoded.
/// - Ethereum plain: `ethereum:<address>@<chain>`, plus `?value=<amount>`
///   when present.
/// - Lightning: `lightning:<invoice>` unconditionally (no amount support).
///
/// Exactly one of the two Ethereum encodings is produced per call, chosen
/// by the completeness of the token sub-record.
#[must_use]
pub fn build_payment(request: &PaymentRequest) -> String {
    match request {
        PaymentRequest::Bitcoin { address, amount } => {
            if amount.is_empty() {
                format!("bitcoin:{address}")
            } else {
                format!("bitcoin:{address}?amount={amount}")
            }
        }
        PaymentRequest::Ethereum {
            address,
            amount,
            chain_id,
            token,
        } => {
            let chain = if chain_id.is_empty() {
                MAINNET_CHAIN_ID
            } else {
                chain_id
            };

            if let Some(token) = token.as_ref().filter(|t| t.is_complete()) {
                let mut query = format!(
                    "address={}",
                    urlencoding::encode(&token.recipient_address)
                );
                if !amount.is_empty() {
                    query.push_str("&uint256=");
                    query.push_str(&urlencoding::encode(amount));
                }
                return format!(
                    "ethereum:{}@{chain}/transfer?{query}",
                    token.token_contract
                );
            }

            if amount.is_empty() {
                format!("ethereum:{address}@{chain}")
            } else {
                format!("ethereum:{address}@{chain}?value={amount}")
            }
        }
        PaymentRequest::Lightning { invoice } => format!("lightning:{invoice}"),
    }
}
