//! Typing cadences
//!
//! Delays requested between steps. The two pauses replace the regular
//! cadence on the step that crosses a phase boundary.

use std::time::Duration;

/// Delays driving the typewriter loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingTiming {
    /// Delay after a character is typed
    pub type_delay: Duration,
    /// Delay after a character is deleted
    pub delete_delay: Duration,
    /// Delay after the last character of a role is typed
    pub end_pause: Duration,
    /// Delay after the last character of a role is deleted
    pub pre_type_pause: Duration,
}

impl TypingTiming {
    pub const DEFAULT_TYPE_MS: u64 = 100;
    pub const DEFAULT_DELETE_MS: u64 = 50;
    pub const DEFAULT_END_PAUSE_MS: u64 = 2000;
    pub const DEFAULT_PRE_TYPE_PAUSE_MS: u64 = 500;

    pub fn new(
        type_delay: Duration,
        delete_delay: Duration,
        end_pause: Duration,
        pre_type_pause: Duration,
    ) -> Self {
        Self {
            type_delay,
            delete_delay,
            end_pause,
            pre_type_pause,
        }
    }

    /// Build timings from millisecond values
    pub fn from_millis(
        type_ms: u64,
        delete_ms: u64,
        end_pause_ms: u64,
        pre_type_pause_ms: u64,
    ) -> Self {
        Self::new(
            Duration::from_millis(type_ms),
            Duration::from_millis(delete_ms),
            Duration::from_millis(end_pause_ms),
            Duration::from_millis(pre_type_pause_ms),
        )
    }

    /// Same cadence with every delay divided by `factor`
    ///
    /// Useful for previews. A factor of zero is treated as one.
    pub fn accelerated(&self, factor: u32) -> Self {
        let factor = factor.max(1);
        Self::new(
            self.type_delay / factor,
            self.delete_delay / factor,
            self.end_pause / factor,
            self.pre_type_pause / factor,
        )
    }

    /// Total time for one full type, pause, delete, pause cycle of a role
    /// with `len` characters
    pub fn cycle_duration(&self, len: usize) -> Duration {
        if len == 0 {
            return Duration::ZERO;
        }
        let steps = (len - 1) as u32;
        self.type_delay * steps + self.end_pause + self.delete_delay * steps + self.pre_type_pause
    }
}

impl Default for TypingTiming {
    fn default() -> Self {
        Self::from_millis(
            Self::DEFAULT_TYPE_MS,
            Self::DEFAULT_DELETE_MS,
            Self::DEFAULT_END_PAUSE_MS,
            Self::DEFAULT_PRE_TYPE_PAUSE_MS,
        )
    }
}
