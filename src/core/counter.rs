//! Elapsed-time counter interpolation.
//!
//! A counter animates the numeric part of a stat value from its resting
//! value to its target (or back down) over a fixed duration, driven by
//! wall-clock elapsed time rather than frame ticks so the motion is
//! frame-rate independent. The displayed value is a pure function of elapsed
//! time; the rAF driver in `ui/stage.rs` just re-evaluates it every frame.

/// Direction a counter animates in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// 0 up to the target.
    Up,
    /// Target down to 0.
    Down,
}

/// A counter's fixed parameters. The current displayed value is derived from
/// elapsed time via [`Counter::value_at`].
#[derive(Clone, Copy, Debug)]
pub struct Counter {
    pub target: u64,
    pub duration_ms: f64,
    pub direction: Direction,
}

impl Counter {
    pub fn new(target: u64, duration_ms: f64, direction: Direction) -> Self {
        Self {
            target,
            duration_ms,
            direction,
        }
    }

    /// Value displayed `elapsed_ms` milliseconds after the animation started.
    ///
    /// Progress is eased with a cubic ease-out and floored to an integer.
    /// Once progress reaches 1 the value snaps exactly to the terminal value
    /// (`target` going up, `0` going down), so the final frame is exact
    /// regardless of frame-rate jitter.
    pub fn value_at(&self, elapsed_ms: f64) -> u64 {
        if self.is_done(elapsed_ms) {
            return match self.direction {
                Direction::Up => self.target,
                Direction::Down => 0,
            };
        }
        let progress = (elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        let eased = 1.0 - (1.0 - progress).powi(3);
        let fraction = match self.direction {
            Direction::Up => eased,
            Direction::Down => 1.0 - eased,
        };
        (fraction * self.target as f64).floor() as u64
    }

    /// The value the counter rests at before playing and after a reset.
    pub fn resting_value(&self) -> u64 {
        match self.direction {
            Direction::Up => 0,
            Direction::Down => self.target,
        }
    }

    pub fn is_done(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms || self.duration_ms <= 0.0
    }
}

/// Split a stat label like `"1200+"`, `"99%"` or `"24/7"` into its leading
/// integer and the trailing suffix.
///
/// Returns `None` when the text does not start with a digit; such a counter
/// is skipped and its static text left untouched.
pub fn parse_target(text: &str) -> Option<(u64, &str)> {
    let digits_end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    if digits_end == 0 {
        return None;
    }
    let value: u64 = text[..digits_end].parse().ok()?;
    Some((value, &text[digits_end..]))
}
