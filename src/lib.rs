//! Infrared remote capture and non-volatile logging for the Raspberry Pi Pico.
//!
//! The crate watches an IR receiver pin for edges, timestamps each edge with a
//! free-running tick clock, classifies the inter-edge gaps into a four-symbol
//! alphabet, folds the symbols into a 16-bit command word, and records both
//! the raw gap timings and the decoded command to a 256-byte EEPROM.
//!
//! The decode/record core ([`Pulse`], [`CommandDecoder`], [`EdgeLog`],
//! [`Recorder`], [`Session`]) has no hardware dependencies and builds on the
//! host, where it is exercised by the tests in `tests/`. The device
//! abstractions ([`EdgeCapture`], [`Eeprom24c02`], [`StatusLeds`]) only exist
//! when compiling for the microcontroller.
#![no_std]

mod decoder;
mod edge_log;
mod error;
mod keys;
mod never;
mod pulse;
mod recorder;
mod session;

#[cfg(target_os = "none")]
mod edge_capture;
#[cfg(target_os = "none")]
mod eeprom;
#[cfg(target_os = "none")]
mod status_leds;
#[cfg(target_os = "none")]
mod tick_clock;

// Re-export commonly used items
pub use decoder::{CommandDecoder, FRAME_BITS};
pub use edge_log::{EDGE_CAPACITY, EdgeLog};
pub use error::{Error, Result};
pub use keys::{KEY_FORWARD, KEY_PLAY, KEY_REWIND, KEY_STOP, LABEL_LEN, label};
pub use never::Never;
pub use pulse::{Pulse, THRESH_HL, THRESH_LONG, THRESH_SHORT};
pub use recorder::{ByteStore, MemStore, Recorder, STORE_CEILING};
pub use session::{
    HEADER, LABEL_ADDRESS, Session, SessionState, TRAILER, TRAILER_ADDRESS,
};

#[cfg(target_os = "none")]
pub use edge_capture::{EdgeCapture, EdgeCaptureStatic};
#[cfg(target_os = "none")]
pub use eeprom::{EEPROM_BUS_ADDRESS, Eeprom24c02};
#[cfg(target_os = "none")]
pub use status_leds::StatusLeds;
#[cfg(target_os = "none")]
pub use tick_clock::{TICK_MICROS, TickClock};
