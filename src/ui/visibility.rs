//! Viewport visibility signals via `IntersectionObserver`.
//!
//! The observer pushes a boolean intersecting-state whenever the watched
//! element crosses the registered threshold; the sequencer core turns those
//! pushes into edge-triggered start/stop transitions.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::JsValue;

use crate::core::Region;

/// Observe `element` and deliver its intersecting-state to `on_change`
/// whenever visibility crosses `threshold`.
///
/// The callback closure is leaked: regions live for the whole page, exactly
/// like the event listeners elsewhere in the app.
pub fn watch(element: &web_sys::Element, threshold: f64, on_change: impl Fn(bool) + 'static) {
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                on_change(entry.is_intersecting());
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    match web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => {
            observer.observe(element);
            // Keep the closure alive for the life of the page
            callback.forget();
        }
        Err(err) => {
            leptos::logging::warn!("IntersectionObserver unavailable: {:?}", err);
        }
    }
}

/// Bind a region's lifecycle to an element's visibility.
pub fn watch_region(element: &web_sys::Element, threshold: f64, region: Region) {
    watch(element, threshold, move |intersecting| {
        region.set_visible(intersecting);
    });
}

/// Whether the user asked for reduced motion. When true the attach pass skips
/// sequenced animations entirely and renders settled end states.
pub fn prefers_reduced_motion() -> bool {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(media_query)) = window.match_media("(prefers-reduced-motion: reduce)") {
            return media_query.matches();
        }
    }
    false
}
