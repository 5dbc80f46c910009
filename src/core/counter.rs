use super::constants::{COUNTER_DURATION_MS, COUNTER_FRAME_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountTick {
    /// Still counting; show this value and keep animating.
    Running(i64),
    /// Reached the target; show it and stop.
    Done(i64),
}

/// Counts from zero to `target` in roughly [`COUNTER_DURATION_MS`] worth of
/// nominal frames.
#[derive(Clone, Debug)]
pub struct CountUp {
    target: i64,
    step: f64,
    current: f64,
}

impl CountUp {
    pub fn new(target: i64) -> Self {
        Self {
            target,
            step: target as f64 / (COUNTER_DURATION_MS / COUNTER_FRAME_MS),
            current: 0.0,
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn tick(&mut self) -> CountTick {
        self.current += self.step;
        if self.current < self.target as f64 {
            CountTick::Running(self.current.floor() as i64)
        } else {
            CountTick::Done(self.target)
        }
    }
}

/// Lenient integer parse for `data-count` values: leading whitespace, an
/// optional sign, then as many digits as are present ("150+" → 150).
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}
