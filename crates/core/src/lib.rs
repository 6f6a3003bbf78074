//! QRforge Core - Payload and configuration library.
//!
//! This crate holds everything that turns structured user input into a
//! scannable payload string, plus the declarative render configuration the
//! rendering layer consumes:
//!
//! - [`types`] - Input records for every mode (contact card, MeCard contact,
//!   Wi-Fi network, payment request)
//! - [`payload`] - Pure builders producing vCard 3.0, MeCard, `WIFI:` and
//!   payment-URI strings
//! - [`validate`] - Advisory format validators (Bitcoin/Ethereum addresses,
//!   email, URL)
//! - [`color`] - WCAG relative luminance and contrast ratio math
//! - [`theme`] - Named color theme presets
//! - [`render_config`] - Size, error correction, dot style, background and
//!   logo settings for the rendering layer
//! - [`collector`] - Per-mode input state machine that recomputes the
//!   payload on every field change
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no rendering. Builders are total: any input, including an entirely empty
//! record, yields a best-effort string and never an error. Validators are
//! advisory; their results never gate payload generation.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod collector;
pub mod color;
pub mod payload;
pub mod render_config;
pub mod theme;
pub mod types;
pub mod validate;

pub use collector::{Collector, Validation};
pub use render_config::{DotStyle, ErrorCorrection, LogoOverlay, RenderConfig};
pub use theme::ColorTheme;
pub use types::*;
