//! Browser implementations of the behavior core's capability traits.
//!
//! `DomSurface` applies sub-element mutations (text, `data-state` tag,
//! `--fill` style variable), `TimeoutScheduler` backs the sequencer with
//! `setTimeout`, `CounterDriver` runs the counter interpolation on a
//! requestAnimationFrame loop, and `VideoLoop` wraps the decorative hero
//! video as a playable handle.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::core::counter::Counter;
use crate::core::sequencer::{Playable, Scheduler, Surface, TaskId};

/// A region's sub-elements in document order.
pub struct DomSurface {
    slots: Vec<web_sys::Element>,
}

impl DomSurface {
    /// Collect every element under `root` matching `selector`.
    pub fn collect(root: &web_sys::Element, selector: &str) -> Self {
        let mut slots = Vec::new();
        if let Ok(list) = root.query_selector_all(selector) {
            for index in 0..list.length() {
                if let Some(element) = list
                    .item(index)
                    .and_then(|n| n.dyn_into::<web_sys::Element>().ok())
                {
                    slots.push(element);
                }
            }
        }
        Self { slots }
    }

    pub fn empty() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn elements(&self) -> &[web_sys::Element] {
        &self.slots
    }
}

impl Surface for DomSurface {
    fn len(&self) -> usize {
        self.slots.len()
    }

    fn set_text(&self, slot: usize, text: &str) {
        if let Some(element) = self.slots.get(slot) {
            element.set_text_content(Some(text));
        }
    }

    fn set_state(&self, slot: usize, state: &str) {
        if let Some(element) = self.slots.get(slot) {
            let _ = element.set_attribute("data-state", state);
        }
    }

    fn set_fill(&self, slot: usize, percent: f64) {
        let clamped = percent.clamp(0.0, 100.0);
        if let Some(element) = self
            .slots
            .get(slot)
            .and_then(|e| e.dyn_ref::<web_sys::HtmlElement>())
        {
            let _ = element
                .style()
                .set_property("--fill", &format!("{clamped}%"));
        }
    }
}

/// `setTimeout`-backed scheduler. Live timeouts are owned here so cancelling
/// a task id drops (and thereby clears) its timeout.
#[derive(Default)]
pub struct TimeoutScheduler {
    next_id: Cell<TaskId>,
    live: Rc<RefCell<HashMap<TaskId, Timeout>>>,
}

impl TimeoutScheduler {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskId {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let live = self.live.clone();
        let timeout = Timeout::new(delay_ms, move || {
            // Release our own handle first; clearing a fired timeout is a
            // no-op in the browser.
            let fired = live.borrow_mut().remove(&id);
            task();
            drop(fired);
        });
        self.live.borrow_mut().insert(id, timeout);
        id
    }

    fn cancel(&self, id: TaskId) {
        // Dropping the Timeout clears it.
        self.live.borrow_mut().remove(&id);
    }
}

struct CounterDriverState {
    element: web_sys::Element,
    counter: Counter,
    suffix: String,
    /// Bumped on every play/stop; a stale rAF loop sees a mismatch and ends.
    run: Cell<u64>,
    raf_id: Cell<Option<i32>>,
    frame: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl CounterDriverState {
    fn render(&self, value: u64) {
        self.element
            .set_text_content(Some(&format!("{}{}", value, self.suffix)));
    }

    fn request_frame(self: &Rc<Self>) {
        if let Some(window) = web_sys::window() {
            let frame = self.frame.borrow();
            if let Some(closure) = frame.as_ref() {
                if let Ok(id) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
                    self.raf_id.set(Some(id));
                }
            }
        }
    }

    fn cancel_frame(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

/// Drives one stat value's counter on a rAF loop. Implements [`Playable`] so
/// the sequencer starts and stops it with its region.
pub struct CounterDriver {
    state: Rc<CounterDriverState>,
}

impl CounterDriver {
    pub fn new(element: web_sys::Element, counter: Counter, suffix: String) -> Rc<Self> {
        Rc::new(Self {
            state: Rc::new(CounterDriverState {
                element,
                counter,
                suffix,
                run: Cell::new(0),
                raf_id: Cell::new(None),
                frame: RefCell::new(None),
            }),
        })
    }
}

impl Playable for CounterDriver {
    fn play(&self) {
        let state = self.state.clone();
        // Any frame still queued from a previous run must not fire into the
        // closure we are about to replace.
        state.cancel_frame();
        let run = state.run.get() + 1;
        state.run.set(run);

        let started_at = js_sys::Date::now();
        let tick_state = state.clone();
        let closure = Closure::new(move || {
            if tick_state.run.get() != run {
                return;
            }
            tick_state.raf_id.set(None);
            let elapsed = js_sys::Date::now() - started_at;
            tick_state.render(tick_state.counter.value_at(elapsed));
            if !tick_state.counter.is_done(elapsed) {
                tick_state.request_frame();
            }
        });
        *state.frame.borrow_mut() = Some(closure);
        state.request_frame();
    }

    fn stop(&self) {
        let state = &self.state;
        state.cancel_frame();
        state.run.set(state.run.get() + 1);
        // Reset-on-exit: snap back to the resting value so re-entry counts
        // from a known baseline.
        state.render(state.counter.resting_value());
    }
}

/// Decorative looping video (the hero "hologram"). Load failure is logged and
/// turns the handle into a permanent no-op; the page loses one decoration,
/// nothing else.
pub struct VideoLoop {
    video: web_sys::HtmlVideoElement,
    failed: Rc<Cell<bool>>,
}

impl VideoLoop {
    pub fn attach(root: &web_sys::Element, selector: &str) -> Option<Rc<Self>> {
        let video: web_sys::HtmlVideoElement = root
            .query_selector(selector)
            .ok()
            .flatten()?
            .dyn_into()
            .ok()?;

        let failed = Rc::new(Cell::new(false));
        let failed_on_error = failed.clone();
        let on_error = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            failed_on_error.set(true);
            leptos::logging::warn!("hologram video failed to load; decoration disabled");
        });
        let _ = video
            .add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
        on_error.forget();

        video.load();
        Some(Rc::new(Self { video, failed }))
    }
}

impl Playable for VideoLoop {
    fn play(&self) {
        if self.failed.get() {
            return;
        }
        match self.video.play() {
            Ok(promise) => {
                wasm_bindgen_futures::spawn_local(async move {
                    if wasm_bindgen_futures::JsFuture::from(promise).await.is_err() {
                        // Autoplay rejection; the next enter retries.
                        leptos::logging::warn!("hologram playback rejected");
                    }
                });
            }
            Err(err) => {
                leptos::logging::warn!("hologram play() failed: {:?}", err);
            }
        }
    }

    fn stop(&self) {
        let _ = self.video.pause();
        self.video.set_current_time(0.0);
    }
}
