//! `setInterval` handle
//!
//! The callback closure lives exactly as long as the handle. Dropping the
//! handle clears the interval first, so the browser never calls into a freed
//! closure and no tick fires after teardown.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

pub struct IntervalTimer {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl IntervalTimer {
    /// Start calling `f` every `interval_ms` milliseconds
    pub fn start<F>(interval_ms: u32, f: F) -> Result<Self, JsValue>
    where
        F: FnMut() + 'static,
    {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let callback = Closure::<dyn FnMut()>::new(f);
        let timeout = i32::try_from(interval_ms).unwrap_or(i32::MAX);
        let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            timeout,
        )?;
        log::debug!("Interval {} started ({} ms)", id, interval_ms);
        Ok(Self {
            id,
            _callback: callback,
        })
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.id);
            log::debug!("Interval {} cleared", self.id);
        }
    }
}
