//! Fixed-capacity single-producer/single-consumer edge timestamp log.
//!
//! The capture task appends one tick value per pin transition; the session
//! loop reads them back in arrival order through a separate consume cursor.
//! Once the log is full, further appends are counted and discarded - nothing
//! is overwritten and nothing blocks. The log holds a whole session's worth
//! of edges until it is explicitly reset.

use heapless::Vec;

/// Number of edges captured in one session.
pub const EDGE_CAPACITY: usize = 100;

/// Timestamp log shared between the capture producer and the session consumer.
#[derive(Debug, Default)]
pub struct EdgeLog<const N: usize = EDGE_CAPACITY> {
    edges: Vec<u16, N>,
    cursor: usize,
    dropped: u32,
}

impl<const N: usize> EdgeLog<N> {
    /// Create an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            edges: Vec::new(),
            cursor: 0,
            dropped: 0,
        }
    }

    /// Producer side: append a timestamp if there is spare capacity.
    ///
    /// Returns `false` when the log is full; the append is discarded and
    /// counted. Runs in bounded time and never blocks.
    pub fn record(&mut self, tick: u16) -> bool {
        if self.edges.push(tick).is_ok() {
            true
        } else {
            self.dropped = self.dropped.wrapping_add(1);
            false
        }
    }

    /// Consumer side: is there an unread timestamp?
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.cursor < self.edges.len()
    }

    /// The timestamp at the consume cursor, if any.
    #[must_use]
    pub fn peek_next(&self) -> Option<u16> {
        self.edges.get(self.cursor).copied()
    }

    /// Advance the consume cursor past the current timestamp.
    #[expect(clippy::arithmetic_side_effects, reason = "Cursor bounded by length")]
    pub fn advance(&mut self) {
        if self.cursor < self.edges.len() {
            self.cursor += 1;
        }
    }

    /// Read and consume the next timestamp in one step.
    #[expect(clippy::arithmetic_side_effects, reason = "Cursor bounded by length")]
    pub fn pop(&mut self) -> Option<u16> {
        let tick = self.peek_next();
        if tick.is_some() {
            self.cursor += 1;
        }
        tick
    }

    /// Whether every slot has been recorded.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.edges.is_full()
    }

    /// Whether the session is complete: every slot recorded and consumed.
    #[must_use]
    pub fn fully_consumed(&self) -> bool {
        self.edges.is_full() && self.cursor == N
    }

    /// Number of timestamps recorded so far.
    #[must_use]
    pub fn captured(&self) -> usize {
        self.edges.len()
    }

    /// Number of timestamps consumed so far.
    #[must_use]
    pub const fn consumed(&self) -> usize {
        self.cursor
    }

    /// Number of appends discarded because the log was full.
    #[must_use]
    pub const fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Empty the log for a new session.
    pub fn reset(&mut self) {
        self.edges.clear();
        self.cursor = 0;
        self.dropped = 0;
    }
}
