//! Visibility-gated animation sequencer.
//!
//! A [`Region`] groups the sub-elements of one page section that animate as a
//! unit (the call cards of the demo rack, the two AMD jars, the stat values).
//! Its [`Sequence`] is an ordered list of timed mutation steps. The region is
//! started when it enters the viewport and stopped when it leaves, with three
//! guarantees:
//!
//! - at most one run of the sequence is active at any time,
//! - leaving view cancels every pending step synchronously and restores the
//!   initial state before any step can execute again,
//! - visibility is edge-triggered: repeated "still visible" signals while a
//!   run is active are no-ops.
//!
//! The core never touches the DOM. It mutates sub-elements through the
//! [`Surface`] capability trait and defers work through the [`Scheduler`]
//! trait, so the whole state machine is testable with fakes (see
//! `core/tests.rs`). The browser implementations live in `ui/stage.rs`.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

/// Handle for a scheduled task, issued by the [`Scheduler`].
pub type TaskId = u64;

/// Deferred single-shot task execution.
///
/// Implementations must not run the task from inside `schedule` itself; the
/// sequencer records the returned id before the task may fire.
pub trait Scheduler {
    /// Schedule `task` to run once after `delay_ms` milliseconds.
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskId;

    /// Cancel a pending task. Cancelling an already-fired or unknown id is a
    /// no-op.
    fn cancel(&self, id: TaskId);
}

/// Presentation capability over a region's sub-elements, addressed by slot
/// index in document order.
///
/// All operations on out-of-range slots are no-ops: a page variant with fewer
/// sub-elements than the sequence expects simply misses that mutation.
pub trait Surface {
    /// Number of sub-elements in the region.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace the displayed text of a sub-element.
    fn set_text(&self, slot: usize, text: &str);

    /// Replace the state tag of a sub-element (rendered as `data-state`).
    fn set_state(&self, slot: usize, state: &str);

    /// Set the fill percentage of a sub-element (rendered as a `--fill`
    /// style variable), clamped to `0.0..=100.0` by implementations.
    fn set_fill(&self, slot: usize, percent: f64);
}

/// An opaque playable animation handle (counter driver, decorative video
/// loop). The sequencer calls `play`/`stop` symmetrically with its own
/// start/stop; both must be idempotent.
pub trait Playable {
    fn play(&self);
    fn stop(&self);
}

/// A step mutation applied to the region's surface.
pub type StepFn = Rc<dyn Fn(&dyn Surface)>;

/// One timed mutation of a sequence.
pub struct Step {
    /// Delay offset in milliseconds from sequence start.
    pub at_ms: u32,
    pub apply: StepFn,
}

/// An ordered list of timed mutation steps, plus the initial state they start
/// from.
///
/// The initial mutation is applied before every run and again whenever the
/// region leaves view, so re-entry always starts from the same baseline.
pub struct Sequence {
    initial: StepFn,
    steps: Vec<Step>,
    loop_after_ms: Option<u32>,
}

impl Sequence {
    pub fn new(initial: impl Fn(&dyn Surface) + 'static) -> Self {
        Self {
            initial: Rc::new(initial),
            steps: Vec::new(),
            loop_after_ms: None,
        }
    }

    /// Add a step at `at_ms` milliseconds from sequence start.
    pub fn step(mut self, at_ms: u32, apply: impl Fn(&dyn Surface) + 'static) -> Self {
        self.steps.push(Step {
            at_ms,
            apply: Rc::new(apply),
        });
        self
    }

    /// Restart the sequence `period_ms` after each start, for as long as the
    /// region stays visible.
    pub fn looping(mut self, period_ms: u32) -> Self {
        self.loop_after_ms = Some(period_ms);
        self
    }

    /// Apply the initial state followed by every step, in offset order, with
    /// no delays. Used for the reduced-motion path, which renders the settled
    /// end state of a region without ever scheduling timers.
    pub fn apply_settled(&self, surface: &dyn Surface) {
        (self.initial)(surface);
        let mut ordered: Vec<&Step> = self.steps.iter().collect();
        ordered.sort_by_key(|s| s.at_ms);
        for step in ordered {
            (step.apply)(surface);
        }
    }
}

struct RegionInner {
    name: &'static str,
    sequence: Sequence,
    surface: Rc<dyn Surface>,
    scheduler: Rc<dyn Scheduler>,
    companions: RefCell<Vec<Rc<dyn Playable>>>,
    visible: Cell<bool>,
    running: Cell<bool>,
    pending: RefCell<HashSet<TaskId>>,
}

/// A page section animated as a unit, bound to a visibility signal.
///
/// Cloning is cheap and shares state; the observer callback keeps one clone
/// alive for the life of the page.
#[derive(Clone)]
pub struct Region {
    inner: Rc<RegionInner>,
}

impl Region {
    pub fn new(
        name: &'static str,
        sequence: Sequence,
        surface: Rc<dyn Surface>,
        scheduler: Rc<dyn Scheduler>,
    ) -> Self {
        Self {
            inner: Rc::new(RegionInner {
                name,
                sequence,
                surface,
                scheduler,
                companions: RefCell::new(Vec::new()),
                visible: Cell::new(false),
                running: Cell::new(false),
                pending: RefCell::new(HashSet::new()),
            }),
        }
    }

    /// Attach a playable companion driven symmetrically with this region's
    /// start/stop.
    pub fn with_companion(self, companion: Rc<dyn Playable>) -> Self {
        self.inner.companions.borrow_mut().push(companion);
        self
    }

    pub fn name(&self) -> &'static str {
        self.inner.name
    }

    /// True while the region owns unexpired scheduled tasks.
    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }

    /// Feed one visibility signal. Only transitions act: entering view starts
    /// a run, leaving view cancels and resets, repeated identical signals are
    /// no-ops.
    pub fn set_visible(&self, intersecting: bool) {
        if self.inner.visible.replace(intersecting) == intersecting {
            return;
        }
        if intersecting {
            Self::start(&self.inner);
        } else {
            Self::stop(&self.inner);
        }
    }

    fn start(inner: &Rc<RegionInner>) {
        if inner.running.get() {
            return;
        }
        inner.running.set(true);
        (inner.sequence.initial)(&*inner.surface);
        for companion in inner.companions.borrow().iter() {
            companion.play();
        }
        for step in &inner.sequence.steps {
            Self::schedule_step(inner, step.at_ms, step.apply.clone());
        }
        if let Some(period) = inner.sequence.loop_after_ms {
            Self::schedule_restart(inner, period);
        }
        // A sequence with no steps and no loop has nothing pending; the
        // running flag tracks live timers only.
        if inner.pending.borrow().is_empty() {
            inner.running.set(false);
        }
    }

    /// Cancel every pending task, then restore the initial state and stop
    /// companions. Cancellation happens first and within this single
    /// synchronous block, so no step can interleave with the reset or with a
    /// subsequent restart.
    fn stop(inner: &Rc<RegionInner>) {
        let ids: Vec<TaskId> = inner.pending.borrow_mut().drain().collect();
        for id in ids {
            inner.scheduler.cancel(id);
        }
        inner.running.set(false);
        (inner.sequence.initial)(&*inner.surface);
        for companion in inner.companions.borrow().iter() {
            companion.stop();
        }
    }

    fn schedule_step(inner: &Rc<RegionInner>, at_ms: u32, apply: StepFn) {
        let task_id = Rc::new(Cell::new(0));
        let task_id_in = task_id.clone();
        let inner_in = inner.clone();
        let id = inner.scheduler.schedule(
            at_ms,
            Box::new(move || {
                // A cancelled task never reaches this point; a fired one
                // releases its handle before mutating.
                inner_in.pending.borrow_mut().remove(&task_id_in.get());
                apply(&*inner_in.surface);
                if inner_in.pending.borrow().is_empty() {
                    inner_in.running.set(false);
                }
            }),
        );
        task_id.set(id);
        inner.pending.borrow_mut().insert(id);
    }

    fn schedule_restart(inner: &Rc<RegionInner>, period_ms: u32) {
        let task_id = Rc::new(Cell::new(0));
        let task_id_in = task_id.clone();
        let inner_in = inner.clone();
        let id = inner.scheduler.schedule(
            period_ms,
            Box::new(move || {
                inner_in.pending.borrow_mut().remove(&task_id_in.get());
                inner_in.running.set(false);
                if inner_in.visible.get() {
                    Self::start(&inner_in);
                }
            }),
        );
        task_id.set(id);
        inner.pending.borrow_mut().insert(id);
    }
}

/// Step helper: apply one state tag to every sub-element of the region.
pub fn all_to(state: &'static str) -> impl Fn(&dyn Surface) {
    move |surface: &dyn Surface| {
        for slot in 0..surface.len() {
            surface.set_state(slot, state);
        }
    }
}
