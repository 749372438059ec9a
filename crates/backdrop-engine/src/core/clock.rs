/// Monotonic frame clock.
///
/// Advances by exactly one logical unit per tick regardless of the
/// wall-clock gap between ticks; the host's frame scheduler sets the
/// cadence. An `f64` counter keeps unit increments exact below 2^53
/// ticks, so no wraparound is needed over any realistic session.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    frame: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { frame: 0.0 }
    }

    /// Advance one tick and return the new time value.
    pub fn advance(&mut self) -> f64 {
        self.frame += 1.0;
        self.frame
    }

    /// Current time value (ticks since start).
    pub fn now(&self) -> f64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_by_one_unit() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.now(), 0.0);
        assert_eq!(clock.advance(), 1.0);
        assert_eq!(clock.advance(), 2.0);
        assert_eq!(clock.now(), 2.0);
    }

    #[test]
    fn unit_steps_stay_exact_at_large_values() {
        let mut clock = FrameClock { frame: 1.0e12 };
        let before = clock.now();
        let after = clock.advance();
        assert_eq!(after - before, 1.0);
    }
}
