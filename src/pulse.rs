//! Pulse-width classification for the infrared receiver.
//!
//! An inter-edge gap, measured in timer ticks, falls into one of four symbol
//! classes split by three ascending thresholds. Gap length carries the bit
//! value in this remote's encoding; an overlong gap marks a frame boundary.

/// Longest gap still classified as [`Pulse::Short`], in ticks.
pub const THRESH_SHORT: u16 = 5;
/// Boundary between [`Pulse::Low`] and [`Pulse::High`], in ticks.
pub const THRESH_HL: u16 = 15;
/// Longest gap still classified as [`Pulse::High`]; anything above is [`Pulse::Long`].
pub const THRESH_LONG: u16 = 30;

/// Symbol classes for an inter-edge gap, ordered by threshold rank.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, defmt::Format)]
pub enum Pulse {
    /// Gap of `THRESH_SHORT` ticks or less; inter-symbol noise, ignored.
    Short,
    /// A zero bit.
    Low,
    /// A one bit.
    High,
    /// Frame-start marker.
    Long,
}

impl Pulse {
    /// Classify a gap. Total over all durations; boundary values resolve to
    /// the lower class.
    #[must_use]
    pub const fn classify(ticks: u16) -> Self {
        if ticks <= THRESH_SHORT {
            Self::Short
        } else if ticks <= THRESH_HL {
            Self::Low
        } else if ticks <= THRESH_LONG {
            Self::High
        } else {
            Self::Long
        }
    }
}
