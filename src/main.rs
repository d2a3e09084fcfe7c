//! Demon Field entry point
//!
//! Handles platform-specific initialization, runs the tick timer and the
//! render loop, and tears both down when the page goes away.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_background {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use demon_field::platform::IntervalTimer;
    use demon_field::renderer::{self, RenderState};
    use demon_field::sim::{DriverPhase, FieldDriver};
    use demon_field::viewport::WindowViewport;
    use demon_field::{Settings, ViewportSource};

    thread_local! {
        /// The mounted background, reachable from `unmount_background`
        static ACTIVE: RefCell<Option<Rc<RefCell<Background>>>> = const { RefCell::new(None) };
    }

    /// Background instance holding all state
    struct Background {
        driver: FieldDriver,
        settings: Settings,
        viewport: WindowViewport,
        canvas: HtmlCanvasElement,
        render_state: Option<RenderState>,
        timer: Option<IntervalTimer>,
        start_time: Option<f64>,
    }

    impl Background {
        fn new(canvas: HtmlCanvasElement, settings: Settings) -> Self {
            Self {
                driver: FieldDriver::new(),
                settings,
                viewport: WindowViewport::new(),
                canvas,
                render_state: None,
                timer: None,
                start_time: None,
            }
        }

        /// Keep the canvas backing store in step with its CSS size
        fn sync_canvas_size(&mut self) {
            let Some(window) = web_sys::window() else {
                return;
            };
            let dpr = window.device_pixel_ratio();
            let css_w = self.canvas.client_width().max(1);
            let css_h = self.canvas.client_height().max(1);
            let width = (css_w as f64 * dpr) as u32;
            let height = (css_h as f64 * dpr) as u32;

            if self.canvas.width() != width || self.canvas.height() != height {
                self.canvas.set_width(width);
                self.canvas.set_height(height);
            }
            if let Some(ref mut render_state) = self.render_state {
                if render_state.size != (width, height) {
                    render_state.resize(width, height, (css_w as f32, css_h as f32));
                }
            }
        }

        /// Render the current frame
        fn render(&mut self, time: f64) {
            self.sync_canvas_size();
            let start = *self.start_time.get_or_insert(time);
            let elapsed = ((time - start) / 1000.0) as f32;

            let Some(ref mut render_state) = self.render_state else {
                return;
            };
            // Draw in CSS pixels; the field lives in window coordinates
            let (w, h) = render_state.logical_size;
            let viewport = demon_field::Viewport::new(w, h);
            let vertices = renderer::frame(self.driver.state(), viewport, elapsed, &self.settings);

            match render_state.render(&vertices) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => render_state.reconfigure(),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger already set: {}", e).into());
        }

        log::info!("Demon Field starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let settings = Settings::load();
        let background = Rc::new(RefCell::new(Background::new(canvas.clone(), settings)));

        // Mount: spawn the field against the live window size
        {
            let mut bg = background.borrow_mut();
            let seed = bg.settings.seed.unwrap_or(js_sys::Date::now() as u64);
            let viewport = bg.viewport.viewport();
            bg.driver.mount(seed, viewport);
        }

        // Initialize WebGPU
        let dpr = window.device_pixel_ratio();
        let css_w = canvas.client_width().max(1);
        let css_h = canvas.client_height().max(1);
        let width = (css_w as f64 * dpr) as u32;
        let height = (css_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let mut render_state = RenderState::for_canvas(canvas, width, height)
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        render_state.resize(width, height, (css_w as f32, css_h as f32));
        background.borrow_mut().render_state = Some(render_state);

        start_timer(&background)?;

        ACTIVE.with(|active| *active.borrow_mut() = Some(background.clone()));
        setup_teardown(&window)?;

        // Start render loop
        request_animation_frame(background);

        Ok(())
    }

    /// Start the fixed cadence tick timer unless motion is reduced
    fn start_timer(background: &Rc<RefCell<Background>>) -> Result<(), JsValue> {
        let interval_ms = {
            let bg = background.borrow();
            if !bg.settings.animate() {
                log::info!("Reduced motion: field drawn without ticking");
                return Ok(());
            }
            bg.settings.effective_tick_interval_ms()
        };

        let weak = Rc::downgrade(background);
        let timer = IntervalTimer::start(interval_ms, move || {
            // Late callbacks after teardown find nothing to tick
            if let Some(background) = weak.upgrade() {
                let mut bg = background.borrow_mut();
                let viewport = bg.viewport.resolved();
                bg.driver.on_timer(viewport);
            }
        })?;
        background.borrow_mut().timer = Some(timer);
        Ok(())
    }

    fn request_animation_frame(background: Rc<RefCell<Background>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame_loop(background, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(background: Rc<RefCell<Background>>, time: f64) {
        {
            let mut bg = background.borrow_mut();
            // Unmounted: stop drawing too
            if bg.driver.phase() == DriverPhase::Unmounted {
                return;
            }
            bg.render(time);
        }
        request_animation_frame(background);
    }

    fn setup_teardown(window: &web_sys::Window) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::PageTransitionEvent| {
            unmount();
        });
        window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// Switch quality on the live background and remember it for next load
    pub fn set_quality(name: &str) -> bool {
        let active = ACTIVE.with(|active| active.borrow().clone());
        let mut settings = match &active {
            Some(background) => background.borrow().settings.clone(),
            None => Settings::load(),
        };
        if settings.apply_preset_named(name).is_none() {
            return false;
        }
        settings.save();
        if let Some(background) = active {
            background.borrow_mut().settings = settings;
        }
        true
    }

    /// Cancel the timer, then drop the field. Safe to call more than once.
    pub fn unmount() {
        let Some(background) = ACTIVE.with(|active| active.borrow_mut().take()) else {
            return;
        };
        // Drop the timer outside the RefCell borrow
        let timer = background.borrow_mut().timer.take();
        drop(timer);
        background.borrow_mut().driver.unmount();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    wasm_background::run().await.inspect_err(|e| {
        log::error!("Background failed to start: {:?}", e);
    })
}

/// Host-side teardown hook for single-page apps that remove the background
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn unmount_background() {
    wasm_background::unmount();
}

/// Host-side quality switch ("low", "medium", "high"); false for unknown names
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn set_background_quality(name: &str) -> bool {
    wasm_background::set_quality(name)
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Demon Field (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the web version");

    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::time::{SystemTime, UNIX_EPOCH};

    use demon_field::consts::TICK_INTERVAL_MS;
    use demon_field::renderer;
    use demon_field::sim::FieldDriver;
    use demon_field::{FixedViewport, Settings, ViewportSource};

    /// Simulated run length (10 seconds of ticks)
    const HEADLESS_TICKS: u32 = 10_000 / TICK_INTERVAL_MS;

    pub fn run() {
        let settings = Settings::load();
        let seed = settings.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        });

        // No window here: every tick sees the fallback viewport
        let source = FixedViewport(None);
        let mut driver = FieldDriver::new();
        driver.mount(seed, source.viewport());

        for _ in 0..HEADLESS_TICKS {
            driver.on_timer(source.resolved());
        }

        if let Some(state) = driver.state() {
            let vertices = renderer::frame(Some(state), source.resolved(), 0.0, &settings);
            log::info!(
                "{} ticks, {} balls, {} demons, {} vertices per frame",
                state.time_ticks,
                state.balls.len(),
                state.demons.len(),
                vertices.len()
            );
            match serde_json::to_string_pretty(state) {
                Ok(json) => println!("{}", json),
                Err(e) => log::error!("Could not serialize field: {}", e),
            }
        }

        driver.unmount();
    }
}
