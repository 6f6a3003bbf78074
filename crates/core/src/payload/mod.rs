//! Pure payload builders.
//!
//! Every builder is a total function: given any input record - including an
//! entirely empty one - it returns a best-effort string and never fails.
//! Absent optional fields are omitted from the output, never an error.
//!
//! The emitted strings are wire contracts consumed by scanner and wallet
//! applications; field order and separators are fixed. Two documented
//! quirks are preserved on purpose: free-text fields are not escaped in
//! either contact dialect, and the MeCard terminator collapse only touches
//! the first `;;`.

mod crypto;
mod mecard;
mod vcard;
mod wifi;

pub use crypto::build_payment;
pub use mecard::build_mecard;
pub use vcard::build_vcard;
pub use wifi::build_wifi;
