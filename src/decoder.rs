//! Bit-by-bit decoder for the fixed 16-bit remote command frame.

use crate::pulse::Pulse;

/// Number of bits in one command frame.
pub const FRAME_BITS: u8 = 16;

/// Folds a stream of classified pulses into 16-bit command words.
///
/// Bits arrive least-significant first: bit 0 of the accumulator is the first
/// symbol received after a frame marker. [`Pulse::High`] sets the current bit,
/// [`Pulse::Low`] leaves it clear, [`Pulse::Long`] resets the frame, and
/// [`Pulse::Short`] is ignored. The most recently completed word is retained
/// until the next frame completes.
#[derive(Debug, Default, defmt::Format)]
pub struct CommandDecoder {
    word: u16,
    bit: u8,
    command: u16,
}

impl CommandDecoder {
    /// Create a decoder with an empty accumulator and command 0.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            word: 0,
            bit: 0,
            command: 0,
        }
    }

    /// Feed one classified pulse; returns the command word when this pulse
    /// completes a 16-bit frame.
    #[expect(clippy::arithmetic_side_effects, reason = "Bit position stays below 16")]
    pub fn feed(&mut self, pulse: Pulse) -> Option<u16> {
        match pulse {
            Pulse::Short => {}
            Pulse::High => {
                self.word |= 1 << self.bit;
                self.bit += 1;
            }
            Pulse::Low => {
                self.bit += 1;
            }
            Pulse::Long => {
                self.word = 0;
                self.bit = 0;
            }
        }
        if self.bit == FRAME_BITS {
            let completed = self.word;
            self.command = completed;
            self.word = 0;
            self.bit = 0;
            Some(completed)
        } else {
            None
        }
    }

    /// The most recently completed command word (0 if none yet).
    #[must_use]
    pub const fn command(&self) -> u16 {
        self.command
    }

    /// The partial word accumulated since the last reset.
    #[must_use]
    pub const fn accumulator(&self) -> u16 {
        self.word
    }

    /// The next bit position to be filled, 0..16.
    #[must_use]
    pub const fn bit_position(&self) -> u8 {
        self.bit
    }
}
