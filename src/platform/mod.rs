//! Platform abstraction layer
//!
//! Browser pieces the simulation must not see directly:
//! - Repeating tick timer (`setInterval`) that cancels itself on drop

#[cfg(target_arch = "wasm32")]
pub mod timer;

#[cfg(target_arch = "wasm32")]
pub use timer::IntervalTimer;
