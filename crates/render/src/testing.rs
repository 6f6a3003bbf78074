//! Stub engine for exercising the adapter and its consumers without a
//! real rendering collaborator.

use std::sync::Mutex;

use crate::engine::{RenderEngine, RenderError, Symbol};
use crate::style::SymbolStyle;

/// Records every `configure` call; exports return fixed byte markers.
#[derive(Default)]
pub struct StubEngine {
    fail: bool,
    calls: Mutex<Vec<(String, SymbolStyle)>>,
}

impl StubEngine {
    /// A stub whose exports succeed with `b"stub-png"` / `b"stub-svg"`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A stub that refuses to configure, for failure-path tests.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every `(payload, style)` pair configured so far.
    #[must_use]
    pub fn calls(&self) -> Vec<(String, SymbolStyle)> {
        self.calls.lock().expect("stub call log").clone()
    }
}

impl RenderEngine for StubEngine {
    fn configure(
        &self,
        payload: &str,
        style: &SymbolStyle,
    ) -> Result<Box<dyn Symbol>, RenderError> {
        if self.fail {
            return Err(RenderError::Unavailable("stub engine down".to_string()));
        }
        self.calls
            .lock()
            .expect("stub call log")
            .push((payload.to_string(), style.clone()));
        Ok(Box::new(StubSymbol))
    }
}

struct StubSymbol;

impl Symbol for StubSymbol {
    fn to_png(&self) -> Result<Vec<u8>, RenderError> {
        Ok(b"stub-png".to_vec())
    }

    fn to_svg(&self) -> Result<Vec<u8>, RenderError> {
        Ok(b"stub-svg".to_vec())
    }
}
