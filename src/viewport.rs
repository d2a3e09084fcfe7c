//! Viewport dimensions
//!
//! The simulation never reaches for the window itself; the host hands a
//! `Viewport` to every tick.

use serde::{Deserialize, Serialize};

use crate::consts::{FALLBACK_HEIGHT, FALLBACK_WIDTH};

/// Visible drawing area in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl Viewport {
    /// Used whenever the real size is unknown (pre-render, headless)
    pub const FALLBACK: Viewport = Viewport {
        width: FALLBACK_WIDTH,
        height: FALLBACK_HEIGHT,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Raw host dimensions, or `None` when either one is unusable (zero,
    /// negative, NaN, or too small to survive the cast to `f32`)
    pub fn from_host(width: f64, height: f64) -> Option<Self> {
        Some(Self::new(width as f32, height as f32)).filter(Self::usable)
    }

    /// Resolve an optional viewport from a source
    pub fn or_fallback(viewport: Option<Viewport>) -> Self {
        viewport.filter(Self::usable).unwrap_or(Self::FALLBACK)
    }

    fn usable(&self) -> bool {
        let ok = |dim: f32| dim.is_finite() && dim > 0.0;
        ok(self.width) && ok(self.height)
    }
}

/// Anything that can report the current viewport size
pub trait ViewportSource {
    /// Current size, or `None` if the host cannot tell yet
    fn viewport(&self) -> Option<Viewport>;

    /// Current size with the fallback applied
    fn resolved(&self) -> Viewport {
        Viewport::or_fallback(self.viewport())
    }
}

/// A viewport that never changes (headless runs, tests)
#[derive(Debug, Clone, Copy)]
pub struct FixedViewport(pub Option<Viewport>);

impl ViewportSource for FixedViewport {
    fn viewport(&self) -> Option<Viewport> {
        self.0
    }
}

/// The browser window's inner size
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct WindowViewport {
    window: Option<web_sys::Window>,
}

#[cfg(target_arch = "wasm32")]
impl WindowViewport {
    pub fn new() -> Self {
        Self {
            window: web_sys::window(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for WindowViewport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl ViewportSource for WindowViewport {
    fn viewport(&self) -> Option<Viewport> {
        let window = self.window.as_ref()?;
        let w = window.inner_width().ok()?.as_f64()?;
        let h = window.inner_height().ok()?.as_f64()?;
        Viewport::from_host(w, h)
    }
}
