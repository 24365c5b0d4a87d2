//! Free-running tick clock for edge timestamping.
//!
//! Embassy's time driver is the periodic hardware timer; this wraps it as a
//! 16-bit tick counter with the reference device's 100 µs period, wrapping at
//! the counter width. Reads are non-blocking and interrupt-safe.

use embassy_time::Instant;

/// Tick period. Short enough to resolve the shortest pulse class, long enough
/// that consecutive infrared edges differ by low double-digit counts.
pub const TICK_MICROS: u64 = 100;

/// Monotonic 16-bit tick source, anchored at its creation instant.
pub struct TickClock {
    epoch: Instant,
}

impl TickClock {
    /// Start counting from now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }

    /// Ticks elapsed since the epoch, wrapping at the counter width.
    #[must_use]
    pub fn now(&self) -> u16 {
        let micros = Instant::now().duration_since(self.epoch).as_micros();
        #[expect(
            clippy::cast_possible_truncation,
            reason = "wrapping at the counter width is the contract"
        )]
        let ticks = (micros / TICK_MICROS) as u16;
        ticks
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}
