//! Wires the landing page's animated regions to viewport visibility.
//!
//! Runs once after hydration. Every section is optional: a page variant
//! without a given root element simply skips that attachment — absence of a
//! decorative section is not an error and is not logged.
//!
//! When the user prefers reduced motion, no region is attached at all; each
//! section is rendered once in its settled end state instead.

use std::rc::Rc;

use wasm_bindgen::JsCast;

use crate::core::counter::{Counter, Direction, parse_target};
use crate::core::sequencer::{Region, Sequence, Surface, all_to};
use crate::ui::stage::{CounterDriver, DomSurface, TimeoutScheduler, VideoLoop};
use crate::ui::visibility;

/// Counter animation duration.
const COUNT_MS: f64 = 1500.0;

/// Attach every animated region of the landing page.
pub fn init_landing_behaviors() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let reduced = visibility::prefers_reduced_motion();
    let scheduler = TimeoutScheduler::new();

    attach_call_demo(&document, &scheduler, reduced);
    attach_amd_jars(&document, &scheduler, reduced);
    attach_flow_panels(&document, &scheduler, reduced);
    attach_stat_counters(&document, &scheduler, reduced);
    attach_hologram(&document, &scheduler, reduced);
    attach_reveals(&document, reduced);
}

/// The call rack: three simultaneous calls ring, then land on their
/// outcomes, then the rack resets and deals again.
fn attach_call_demo(
    document: &web_sys::Document,
    scheduler: &Rc<TimeoutScheduler>,
    reduced: bool,
) {
    let Ok(Some(root)) = document.query_selector(".call-demo") else {
        return;
    };
    let surface: Rc<DomSurface> = Rc::new(DomSurface::collect(&root, ".call-card"));
    let sequence = Sequence::new(all_to("idle"))
        .step(400, all_to("ringing"))
        .step(2400, |s: &dyn Surface| {
            s.set_state(0, "ended");
            s.set_state(1, "answered");
            s.set_state(2, "voicemail");
        })
        .looping(5400);

    if reduced {
        sequence.apply_settled(&*surface);
        return;
    }
    let region = Region::new("call-demo", sequence, surface, scheduler.clone());
    visibility::watch_region(&root, 0.3, region);
}

/// Answering-machine detection demo: five simulated dials drop into the
/// "people" and "machines" jars one by one, then the jars empty and the
/// cycle repeats.
fn attach_amd_jars(
    document: &web_sys::Document,
    scheduler: &Rc<TimeoutScheduler>,
    reduced: bool,
) {
    let Ok(Some(root)) = document.query_selector(".amd-demo") else {
        return;
    };
    let surface: Rc<DomSurface> = Rc::new(DomSurface::collect(&root, ".jar"));
    // Slot 0 collects people, slot 1 collects machines.
    let sequence = Sequence::new(|s: &dyn Surface| {
        s.set_fill(0, 0.0);
        s.set_fill(1, 0.0);
        s.set_state(0, "counting");
        s.set_state(1, "counting");
    })
    .step(600, |s: &dyn Surface| s.set_fill(1, 20.0))
    .step(1400, |s: &dyn Surface| s.set_fill(0, 20.0))
    .step(2200, |s: &dyn Surface| s.set_fill(1, 40.0))
    .step(3000, |s: &dyn Surface| s.set_fill(0, 40.0))
    .step(3800, |s: &dyn Surface| {
        s.set_fill(0, 60.0);
        s.set_state(0, "settled");
        s.set_state(1, "settled");
    })
    .looping(5600);

    if reduced {
        sequence.apply_settled(&*surface);
        return;
    }
    let region = Region::new("amd-jars", sequence, surface, scheduler.clone());
    visibility::watch_region(&root, 0.3, region);
}

/// Routing pipeline: three panels light up one after another while the
/// section is on screen.
fn attach_flow_panels(
    document: &web_sys::Document,
    scheduler: &Rc<TimeoutScheduler>,
    reduced: bool,
) {
    let Ok(Some(root)) = document.query_selector(".flow-panels") else {
        return;
    };
    let surface: Rc<DomSurface> = Rc::new(DomSurface::collect(&root, ".flow-panel"));
    let sequence = Sequence::new(all_to("idle"))
        .step(0, |s: &dyn Surface| s.set_state(0, "active"))
        .step(2400, |s: &dyn Surface| {
            s.set_state(0, "done");
            s.set_state(1, "active");
        })
        .step(4800, |s: &dyn Surface| {
            s.set_state(1, "done");
            s.set_state(2, "active");
        })
        .looping(7600);

    if reduced {
        sequence.apply_settled(&*surface);
        return;
    }
    let region = Region::new("flow-panels", sequence, surface, scheduler.clone());
    visibility::watch_region(&root, 0.4, region);
}

/// Hero stats: fade the block in and count each value up from zero. A value
/// whose text does not start with a number is left static.
fn attach_stat_counters(
    document: &web_sys::Document,
    scheduler: &Rc<TimeoutScheduler>,
    reduced: bool,
) {
    let Ok(Some(root)) = document.query_selector(".hero-stats") else {
        return;
    };
    let surface: Rc<DomSurface> = Rc::new(DomSurface::collect(&root, ".stat-value"));

    if reduced {
        // Markup already shows the target values.
        for slot in 0..surface.len() {
            surface.set_state(slot, "in");
        }
        return;
    }

    let mut region = Region::new(
        "hero-stats",
        Sequence::new(all_to("out")).step(0, all_to("in")),
        surface.clone(),
        scheduler.clone(),
    );
    for element in surface.elements() {
        let text = element.text_content().unwrap_or_default();
        let Some((target, suffix)) = parse_target(text.trim()) else {
            continue;
        };
        let driver = CounterDriver::new(
            element.clone(),
            Counter::new(target, COUNT_MS, Direction::Up),
            suffix.to_owned(),
        );
        region = region.with_companion(driver);
    }
    visibility::watch_region(&root, 0.3, region);
}

/// Decorative hero video, played only while the hero is on screen.
fn attach_hologram(
    document: &web_sys::Document,
    scheduler: &Rc<TimeoutScheduler>,
    reduced: bool,
) {
    if reduced {
        return;
    }
    let Ok(Some(root)) = document.query_selector(".hero-visual") else {
        return;
    };
    let Some(video) = VideoLoop::attach(&root, "video") else {
        return;
    };
    let region = Region::new(
        "hologram",
        Sequence::new(|_: &dyn Surface| {}),
        Rc::new(DomSurface::empty()),
        scheduler.clone(),
    )
    .with_companion(video);
    visibility::watch_region(&root, 0.2, region);
}

/// Bidirectional reveal toggles for feature cards, pricing and CTA blocks.
fn attach_reveals(document: &web_sys::Document, reduced: bool) {
    let Ok(list) = document.query_selector_all("[data-reveal]") else {
        return;
    };
    for index in 0..list.length() {
        let Some(element) = list
            .item(index)
            .and_then(|n| n.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        if reduced {
            let _ = element.set_attribute("data-state", "in");
            continue;
        }
        let target = element.clone();
        visibility::watch(&element, 0.2, move |intersecting| {
            let _ = target.set_attribute("data-state", if intersecting { "in" } else { "out" });
        });
    }
}
