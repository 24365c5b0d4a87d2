//! One capture-to-close logging session.
//!
//! A session opens by writing a fixed header record, then consumes edge
//! timestamps one at a time: each gap against the previously consumed edge is
//! written as a zero-padded decimal record and fed through the classifier and
//! decoder. Once the edge log is fully consumed the session closes by writing
//! the trailer marker and the label of the decoded command at their fixed
//! addresses, after which it is terminal.

use core::fmt::Write as _;

use heapless::String;

use crate::decoder::CommandDecoder;
use crate::edge_log::EdgeLog;
use crate::keys;
use crate::pulse::Pulse;
use crate::recorder::{ByteStore, Recorder};
use crate::{Error, Result};

/// Header record written at address 0 when a session starts.
pub const HEADER: &[u8; 12] = b"#helr_wrld!\n";
/// Fixed address of the closing marker.
pub const TRAILER_ADDRESS: u8 = 253;
/// Closing marker record.
pub const TRAILER: &[u8; 3] = b"\n!\n";
/// Fixed address of the decoded-command label.
pub const LABEL_ADDRESS: u8 = 250;

/// Lifecycle phases of a session.
///
/// Draining happens inside `Collecting` whenever unread edges exist; `Idle`
/// is terminal and the session is not resumable without a restart.
#[derive(Copy, Clone, Debug, PartialEq, Eq, defmt::Format)]
pub enum SessionState {
    Collecting,
    Closing,
    Idle,
}

/// The session controller: recorder, decoder, and lifecycle state.
pub struct Session<S> {
    recorder: Recorder<S>,
    decoder: CommandDecoder,
    prev_tick: u16,
    state: SessionState,
}

impl<S: ByteStore> Session<S> {
    /// Open a session on a fresh store and write the header record.
    pub fn start(store: S) -> Result<Self> {
        let mut recorder = Recorder::new(store);
        recorder.write_bytes(HEADER)?;
        Ok(Self {
            recorder,
            decoder: CommandDecoder::new(),
            prev_tick: 0,
            state: SessionState::Collecting,
        })
    }

    /// Consume one edge timestamp: record its gap and feed the decoder.
    ///
    /// The first edge is measured against tick 0. Gaps are written as
    /// zero-padded decimal, minimum three digits, newline-terminated. A no-op
    /// once the session has left `Collecting`.
    pub fn log_edge(&mut self, tick: u16) -> Result<()> {
        if self.state != SessionState::Collecting {
            return Ok(());
        }
        let gap = tick.wrapping_sub(self.prev_tick);
        self.prev_tick = tick;

        let mut record: String<8> = String::new();
        writeln!(record, "{gap:03}").map_err(|_| Error::FormatError)?;
        self.recorder.write_bytes(record.as_bytes())?;

        self.decoder.feed(Pulse::classify(gap));
        Ok(())
    }

    /// Consume every pending edge in the log.
    ///
    /// Returns `true` once the log is fully consumed and the session is ready
    /// to close.
    pub fn drain<const N: usize>(&mut self, edges: &mut EdgeLog<N>) -> Result<bool> {
        while let Some(tick) = edges.pop() {
            self.log_edge(tick)?;
        }
        Ok(edges.fully_consumed())
    }

    /// Write the closing marker and the decoded-command label, then go idle.
    pub fn close(&mut self) -> Result<()> {
        if self.state == SessionState::Idle {
            return Ok(());
        }
        self.state = SessionState::Closing;
        self.recorder.seek(TRAILER_ADDRESS);
        self.recorder.write_bytes(TRAILER)?;
        self.recorder.seek(LABEL_ADDRESS);
        self.recorder
            .write_bytes(keys::label(self.decoder.command()))?;
        self.state = SessionState::Idle;
        Ok(())
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// The decoded command word (0 if no frame completed).
    #[must_use]
    pub const fn command(&self) -> u16 {
        self.decoder.command()
    }

    /// Borrow the decoder, e.g. to inspect the partial accumulator.
    #[must_use]
    pub const fn decoder(&self) -> &CommandDecoder {
        &self.decoder
    }

    /// Borrow the recorder, e.g. to check the cursor or drop count.
    #[must_use]
    pub const fn recorder(&self) -> &Recorder<S> {
        &self.recorder
    }

    /// Tear down the session and take back the store.
    pub fn into_store(self) -> S {
        self.recorder.into_store()
    }
}
