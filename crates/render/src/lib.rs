//! QRforge Render - adapter over the external rendering collaborators.
//!
//! The core crate produces a payload string and a declarative
//! [`qrforge_core::RenderConfig`]; this crate turns the pair into image
//! bytes. Symbol encoding and error correction are fully delegated to the
//! `qrcode` crate, rasterization to `image` - nothing here re-implements
//! either.
//!
//! Layering:
//!
//! - [`engine`] - the capability interface: [`engine::RenderEngine`]
//!   configures a symbol, [`engine::Symbol`] exports it. The adapter is
//!   testable against [`testing::StubEngine`] without a real engine.
//! - [`style`] - [`style::SymbolStyle`], the engine-facing declarative
//!   styling, and the mapping from `RenderConfig` onto it.
//! - [`adapter`] - [`adapter::Renderer`], the asynchronous export surface.
//!   Every call re-instantiates the symbol; nothing is cached.
//! - [`styled`] - the production engine: `qrcode`-encoded matrix drawn as
//!   square/rounded/dot modules with flat or gradient foreground, quiet
//!   zone, background fill and an optional centered logo overlay.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod adapter;
pub mod engine;
pub mod style;
pub mod styled;
pub mod testing;

mod raster;
mod vector;

pub use adapter::Renderer;
pub use engine::{RenderEngine, RenderError, Symbol};
pub use style::SymbolStyle;
pub use styled::StyledQrEngine;
