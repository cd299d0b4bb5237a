#[cfg(test)]
mod tests {
    use crate::core::counter::{Counter, Direction, parse_target};
    use crate::core::sequencer::{
        Playable, Region, Scheduler, Sequence, Surface, TaskId, all_to,
    };
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    // ========================================================================
    // Fakes
    // ========================================================================

    struct FakeTask {
        id: TaskId,
        due: f64,
        run: Box<dyn FnOnce()>,
    }

    /// Virtual-time scheduler. Tasks fire in due order (insertion order for
    /// equal due times) when the clock is advanced.
    #[derive(Default)]
    struct FakeScheduler {
        now: Cell<f64>,
        next_id: Cell<TaskId>,
        tasks: RefCell<Vec<FakeTask>>,
    }

    impl FakeScheduler {
        fn new() -> Rc<Self> {
            Rc::new(Self::default())
        }

        fn pending(&self) -> usize {
            self.tasks.borrow().len()
        }

        /// Advance the virtual clock to `t` ms, firing every task due on the
        /// way. Tasks scheduled by fired tasks (loop restarts) are picked up
        /// within the same advance when they fall before `t`.
        fn advance_to(&self, t: f64) {
            loop {
                let task = {
                    let mut tasks = self.tasks.borrow_mut();
                    let next = tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, task)| task.due <= t)
                        .min_by(|(_, a), (_, b)| {
                            a.due
                                .partial_cmp(&b.due)
                                .unwrap()
                                .then(a.id.cmp(&b.id))
                        })
                        .map(|(index, _)| index);
                    match next {
                        Some(index) => tasks.remove(index),
                        None => break,
                    }
                };
                self.now.set(task.due);
                (task.run)();
            }
            self.now.set(t);
        }
    }

    impl Scheduler for FakeScheduler {
        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskId {
            let id = self.next_id.get() + 1;
            self.next_id.set(id);
            self.tasks.borrow_mut().push(FakeTask {
                id,
                due: self.now.get() + delay_ms as f64,
                run: task,
            });
            id
        }

        fn cancel(&self, id: TaskId) {
            self.tasks.borrow_mut().retain(|task| task.id != id);
        }
    }

    /// Records every slot's current text, state tag and fill percentage.
    struct FakeSurface {
        texts: RefCell<Vec<String>>,
        states: RefCell<Vec<String>>,
        fills: RefCell<Vec<f64>>,
    }

    impl FakeSurface {
        fn new(slots: usize) -> Rc<Self> {
            Rc::new(Self {
                texts: RefCell::new(vec![String::new(); slots]),
                states: RefCell::new(vec![String::new(); slots]),
                fills: RefCell::new(vec![0.0; slots]),
            })
        }

        fn states(&self) -> Vec<String> {
            self.states.borrow().clone()
        }

        fn fills(&self) -> Vec<f64> {
            self.fills.borrow().clone()
        }
    }

    impl Surface for FakeSurface {
        fn len(&self) -> usize {
            self.states.borrow().len()
        }

        fn set_text(&self, slot: usize, text: &str) {
            if let Some(entry) = self.texts.borrow_mut().get_mut(slot) {
                *entry = text.to_owned();
            }
        }

        fn set_state(&self, slot: usize, state: &str) {
            if let Some(entry) = self.states.borrow_mut().get_mut(slot) {
                *entry = state.to_owned();
            }
        }

        fn set_fill(&self, slot: usize, percent: f64) {
            if let Some(entry) = self.fills.borrow_mut().get_mut(slot) {
                *entry = percent;
            }
        }
    }

    /// Counts play/stop calls.
    #[derive(Default)]
    struct FakePlayable {
        plays: Cell<u32>,
        stops: Cell<u32>,
    }

    impl Playable for FakePlayable {
        fn play(&self) {
            self.plays.set(self.plays.get() + 1);
        }

        fn stop(&self) {
            self.stops.set(self.stops.get() + 1);
        }
    }

    /// The call-demo cycle from the landing page: three cards, everything
    /// rings at 0ms, outcomes land at 2000ms, loop period 5000ms.
    fn call_demo_region(surface: Rc<FakeSurface>, scheduler: Rc<FakeScheduler>) -> Region {
        let sequence = Sequence::new(all_to("idle"))
            .step(0, all_to("ringing"))
            .step(2000, |s: &dyn Surface| {
                s.set_state(0, "ended");
                s.set_state(1, "answered");
                s.set_state(2, "voicemail");
            })
            .looping(5000);
        Region::new("call-demo", sequence, surface, scheduler)
    }

    // ========================================================================
    // Sequencer
    // ========================================================================

    #[test]
    fn call_demo_scenario_timings() {
        let surface = FakeSurface::new(3);
        let scheduler = FakeScheduler::new();
        let region = call_demo_region(surface.clone(), scheduler.clone());

        region.set_visible(true);
        scheduler.advance_to(1999.0);
        assert_eq!(surface.states(), vec!["ringing", "ringing", "ringing"]);

        scheduler.advance_to(2001.0);
        assert_eq!(surface.states(), vec!["ended", "answered", "voicemail"]);

        // Loop restarted at 5000ms, so the 0ms step has fired again.
        scheduler.advance_to(5001.0);
        assert_eq!(surface.states(), vec!["ringing", "ringing", "ringing"]);
    }

    #[test]
    fn leave_before_first_step_restores_initial_state() {
        let surface = FakeSurface::new(3);
        let scheduler = FakeScheduler::new();
        let region = call_demo_region(surface.clone(), scheduler.clone());

        region.set_visible(true);
        region.set_visible(false);

        assert_eq!(surface.states(), vec!["idle", "idle", "idle"]);
        assert_eq!(scheduler.pending(), 0);
        assert!(!region.is_running());

        // Nothing fires later either.
        scheduler.advance_to(10_000.0);
        assert_eq!(surface.states(), vec!["idle", "idle", "idle"]);
    }

    #[test]
    fn repeated_enter_signals_are_no_ops() {
        let surface = FakeSurface::new(3);
        let scheduler = FakeScheduler::new();
        let region = call_demo_region(surface, scheduler.clone());

        region.set_visible(true);
        // Two steps plus the loop restart.
        assert_eq!(scheduler.pending(), 3);

        region.set_visible(true);
        region.set_visible(true);
        assert_eq!(scheduler.pending(), 3);
    }

    #[test]
    fn leave_mid_sequence_cancels_every_pending_step() {
        let surface = FakeSurface::new(3);
        let scheduler = FakeScheduler::new();
        let region = call_demo_region(surface.clone(), scheduler.clone());

        region.set_visible(true);
        scheduler.advance_to(1000.0);
        assert_eq!(surface.states(), vec!["ringing", "ringing", "ringing"]);

        region.set_visible(false);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(surface.states(), vec!["idle", "idle", "idle"]);

        // The step originally due at 2000ms must not fire.
        scheduler.advance_to(3000.0);
        assert_eq!(surface.states(), vec!["idle", "idle", "idle"]);
    }

    #[test]
    fn reenter_after_leave_starts_a_fresh_run() {
        let surface = FakeSurface::new(3);
        let scheduler = FakeScheduler::new();
        let region = call_demo_region(surface.clone(), scheduler.clone());

        region.set_visible(true);
        scheduler.advance_to(2500.0);
        region.set_visible(false);

        // Re-entry schedules from "now": the outcome step lands 2000ms after
        // the new start, not on the old timeline.
        region.set_visible(true);
        scheduler.advance_to(2500.0 + 1999.0);
        assert_eq!(surface.states(), vec!["ringing", "ringing", "ringing"]);
        scheduler.advance_to(2500.0 + 2001.0);
        assert_eq!(surface.states(), vec!["ended", "answered", "voicemail"]);
    }

    #[test]
    fn full_cycle_round_trip_is_deterministic() {
        let surface = FakeSurface::new(3);
        let scheduler = FakeScheduler::new();
        let region = call_demo_region(surface.clone(), scheduler.clone());

        let mut first_run = Vec::new();
        region.set_visible(true);
        for t in [1.0, 1999.0, 2001.0, 4999.0, 5001.0] {
            scheduler.advance_to(t);
            first_run.push(surface.states());
        }
        region.set_visible(false);
        scheduler.advance_to(6000.0);

        let mut second_run = Vec::new();
        region.set_visible(true);
        for offset in [1.0, 1999.0, 2001.0, 4999.0, 5001.0] {
            scheduler.advance_to(6000.0 + offset);
            second_run.push(surface.states());
        }

        assert_eq!(first_run, second_run);
    }

    #[test]
    fn running_flag_tracks_live_timers() {
        let surface = FakeSurface::new(2);
        let scheduler = FakeScheduler::new();
        // Finite sequence, no loop.
        let sequence = Sequence::new(all_to("out")).step(100, all_to("in"));
        let region = Region::new("reveal", sequence, surface, scheduler.clone());

        assert!(!region.is_running());
        region.set_visible(true);
        assert!(region.is_running());

        scheduler.advance_to(100.0);
        assert_eq!(scheduler.pending(), 0);
        assert!(!region.is_running());
    }

    #[test]
    fn companions_play_and_stop_with_the_region() {
        let surface = FakeSurface::new(1);
        let scheduler = FakeScheduler::new();
        let companion = Rc::new(FakePlayable::default());
        let sequence = Sequence::new(all_to("out")).step(0, all_to("in"));
        let region = Region::new("stats", sequence, surface, scheduler.clone())
            .with_companion(companion.clone());

        region.set_visible(true);
        assert_eq!(companion.plays.get(), 1);
        assert_eq!(companion.stops.get(), 0);

        // Sequence completes; leaving must still stop the companion so the
        // counters reset on exit.
        scheduler.advance_to(50.0);
        region.set_visible(false);
        assert_eq!(companion.stops.get(), 1);

        region.set_visible(true);
        assert_eq!(companion.plays.get(), 2);
    }

    #[test]
    fn jar_fills_reset_when_leaving_view() {
        let surface = FakeSurface::new(2);
        let scheduler = FakeScheduler::new();
        let sequence = Sequence::new(|s: &dyn Surface| {
            s.set_fill(0, 0.0);
            s.set_fill(1, 0.0);
        })
        .step(500, |s: &dyn Surface| s.set_fill(0, 34.0))
        .step(1000, |s: &dyn Surface| s.set_fill(1, 50.0))
        .looping(3000);
        let region = Region::new("amd-jars", sequence, surface.clone(), scheduler.clone());

        region.set_visible(true);
        scheduler.advance_to(1200.0);
        assert_eq!(surface.fills(), vec![34.0, 50.0]);

        region.set_visible(false);
        assert_eq!(surface.fills(), vec![0.0, 0.0]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn steps_with_equal_offsets_all_fire() {
        let surface = FakeSurface::new(2);
        let scheduler = FakeScheduler::new();
        let sequence = Sequence::new(all_to("idle"))
            .step(300, |s: &dyn Surface| s.set_state(0, "a"))
            .step(300, |s: &dyn Surface| s.set_state(1, "b"));
        let region = Region::new("pair", sequence, surface.clone(), scheduler.clone());

        region.set_visible(true);
        scheduler.advance_to(300.0);
        assert_eq!(surface.states(), vec!["a", "b"]);
        assert!(!region.is_running());
    }

    #[test]
    fn settled_state_applies_all_steps_in_offset_order() {
        let surface = FakeSurface::new(1);
        let sequence = Sequence::new(all_to("idle"))
            .step(2000, all_to("late"))
            .step(100, all_to("early"));
        sequence.apply_settled(&*surface);
        assert_eq!(surface.states(), vec!["late"]);
    }

    // ========================================================================
    // Counter
    // ========================================================================

    #[test]
    fn counter_reaches_exact_target_at_duration() {
        let counter = Counter::new(99, 1500.0, Direction::Up);
        assert_eq!(counter.value_at(1500.0), 99);
        assert_eq!(counter.value_at(2000.0), 99);
        assert!(counter.value_at(1499.0) <= 99);
        assert_eq!(counter.value_at(0.0), 0);
    }

    #[test]
    fn counter_is_monotonic_going_up() {
        let counter = Counter::new(1200, 1500.0, Direction::Up);
        let mut previous = 0;
        for ms in 0..=1500 {
            let value = counter.value_at(ms as f64);
            assert!(value >= previous, "regressed at {}ms", ms);
            previous = value;
        }
        assert_eq!(previous, 1200);
    }

    #[test]
    fn counter_is_monotonic_going_down_and_ends_at_zero() {
        let counter = Counter::new(1200, 1500.0, Direction::Down);
        let mut previous = counter.value_at(0.0);
        assert_eq!(previous, 1200);
        for ms in 1..=1500 {
            let value = counter.value_at(ms as f64);
            assert!(value <= previous, "rose at {}ms", ms);
            previous = value;
        }
        assert_eq!(previous, 0);
    }

    #[test]
    fn counter_resting_values() {
        assert_eq!(Counter::new(42, 1000.0, Direction::Up).resting_value(), 0);
        assert_eq!(Counter::new(42, 1000.0, Direction::Down).resting_value(), 42);
    }

    #[test]
    fn zero_duration_counter_is_immediately_done() {
        let counter = Counter::new(7, 0.0, Direction::Up);
        assert!(counter.is_done(0.0));
        assert_eq!(counter.value_at(0.0), 7);
    }

    #[test]
    fn parse_target_splits_number_and_suffix() {
        assert_eq!(parse_target("1200+"), Some((1200, "+")));
        assert_eq!(parse_target("99%"), Some((99, "%")));
        assert_eq!(parse_target("24/7"), Some((24, "/7")));
        assert_eq!(parse_target("38"), Some((38, "")));
    }

    #[test]
    fn parse_target_rejects_non_numeric_text() {
        assert_eq!(parse_target("—"), None);
        assert_eq!(parse_target("soon"), None);
        assert_eq!(parse_target(""), None);
    }
}
