use crate::config::{INITIAL_HORIZONTAL_DELAY, INPUT_POLL_HZ};

/// Accumulates frame time and fires once per gravity interval.
#[derive(Clone, Copy, Debug, Default)]
pub struct GravityClock {
    elapsed_ms: f32,
}

impl GravityClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `dt` seconds; true when the interval has elapsed. The clock
    /// restarts from zero each time it fires.
    pub fn advance(&mut self, dt: f32, interval_ms: u32) -> bool {
        self.elapsed_ms += dt * 1000.0;
        if self.elapsed_ms >= interval_ms as f32 {
            self.elapsed_ms = 0.0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0.0;
    }
}

/// Auto-repeat for a held key: fires on press, then after an initial delay,
/// then at the input poll rate.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyRepeat {
    timer: f32,
}

impl KeyRepeat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, pressed: bool, down: bool, dt: f32) -> bool {
        if pressed {
            self.timer = INITIAL_HORIZONTAL_DELAY;
            return true;
        }
        if !down {
            self.timer = 0.0;
            return false;
        }
        self.timer -= dt;
        if self.timer <= 0.0 {
            self.timer = 1.0 / INPUT_POLL_HZ;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gravity_fires_after_interval_and_restarts() {
        let mut clock = GravityClock::new();
        assert!(!clock.advance(0.3, 500));
        assert!(clock.advance(0.3, 500));
        assert!(!clock.advance(0.3, 500));
        assert!(clock.advance(0.25, 500));
    }

    #[test]
    fn shorter_interval_takes_effect_immediately() {
        let mut clock = GravityClock::new();
        assert!(!clock.advance(0.08, 500));
        assert!(clock.advance(0.03, 100));
    }

    #[test]
    fn held_key_repeats_after_delay() {
        let mut repeat = KeyRepeat::new();
        assert!(repeat.update(true, true, 0.016));
        assert!(!repeat.update(false, true, 0.1));
        assert!(repeat.update(false, true, 0.11));
        assert!(!repeat.update(false, true, 0.05));
        assert!(repeat.update(false, true, 0.06));
        assert!(!repeat.update(false, false, 0.5));
    }
}
