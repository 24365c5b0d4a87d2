//! The known remote-control commands and their storage labels.
//!
//! The key constants are stored bit-reversed relative to transmission order:
//! bit 0 is the first symbol received after the frame marker. They match the
//! words the deployed receiver observes and must not be re-derived.

/// Fast-forward button.
pub const KEY_FORWARD: u16 = 0b0010_0100_0101_0111;
/// Rewind button.
pub const KEY_REWIND: u16 = 0b0010_1100_0101_0111;
/// Play button.
pub const KEY_PLAY: u16 = 0b0000_0100_0101_0111;
/// Stop button.
pub const KEY_STOP: u16 = 0b0001_0100_0101_0111;

/// Length of a command label record, newline included.
pub const LABEL_LEN: usize = 4;

/// Map a decoded command word to its newline-terminated storage label.
///
/// Unrecognized words map to `"non\n"` rather than an error. Forward logs as
/// `"rew"` and rewind as `"ffd"`; existing logs use this crossed pairing.
#[must_use]
pub const fn label(command: u16) -> &'static [u8; LABEL_LEN] {
    match command {
        KEY_FORWARD => b"rew\n",
        KEY_REWIND => b"ffd\n",
        KEY_PLAY => b"ply\n",
        KEY_STOP => b"stp\n",
        _ => b"non\n",
    }
}
