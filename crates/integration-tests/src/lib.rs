//! Integration test helpers for QRforge.
//!
//! The actual tests live in `tests/` and talk HTTP to a running
//! `qrforge-server`; they are `#[ignore]`-gated so `cargo test` stays
//! hermetic. Run them with:
//!
//! ```bash
//! cargo run -p qrforge-server &
//! cargo test -p qrforge-integration-tests -- --ignored
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

/// Base URL for the server API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("QRFORGE_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}
