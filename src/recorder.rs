//! Sequential byte recorder over non-volatile storage.
//!
//! The recorder owns a [`ByteStore`] and a monotonically increasing cursor
//! over its 256-byte address space. Bytes written at or past the ceiling are
//! counted and dropped, never an error - the same drop-don't-crash policy the
//! rest of the pipeline uses. [`Recorder::seek`] repositions the cursor for
//! the out-of-band trailer and label records.

use crate::Result;

/// One past the last writable address of the storage device.
pub const STORE_CEILING: u16 = 256;

/// A byte-programmable non-volatile storage device.
pub trait ByteStore {
    /// Program one byte at `address`.
    ///
    /// Implementations block until any previous program cycle has completed;
    /// the wait must be bounded, returning [`crate::Error::StoreTimeout`] if
    /// the device never reports ready.
    fn program(&mut self, address: u8, value: u8) -> Result<()>;
}

/// Auto-incrementing byte-stream writer over a [`ByteStore`].
#[derive(Debug)]
pub struct Recorder<S> {
    store: S,
    cursor: u16,
    dropped: u32,
}

impl<S: ByteStore> Recorder<S> {
    /// Create a recorder with the cursor at address 0.
    pub const fn new(store: S) -> Self {
        Self {
            store,
            cursor: 0,
            dropped: 0,
        }
    }

    /// Write bytes in order at the sequential cursor.
    ///
    /// Bytes that would land at or past the ceiling are counted and dropped.
    /// Returns the number of bytes actually stored.
    #[expect(clippy::arithmetic_side_effects, reason = "Cursor bounded by the ceiling")]
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<usize> {
        let mut written = 0;
        for &value in bytes {
            if self.cursor < STORE_CEILING {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "cursor < 256 is checked above"
                )]
                self.store.program(self.cursor as u8, value)?;
                self.cursor += 1;
                written += 1;
            } else {
                self.dropped = self.dropped.wrapping_add(1);
            }
        }
        Ok(written)
    }

    /// Move the cursor for an out-of-band record.
    pub const fn seek(&mut self, address: u8) {
        self.cursor = address as u16;
    }

    /// The next address the sequential cursor will write.
    #[must_use]
    pub const fn cursor(&self) -> u16 {
        self.cursor
    }

    /// Number of bytes dropped at the ceiling.
    #[must_use]
    pub const fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Borrow the underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Take back the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }
}

/// RAM-backed [`ByteStore`] with immediate completion.
///
/// Stands in for the EEPROM in host tests and lets a finished session's
/// storage image be inspected byte for byte.
#[derive(Debug)]
pub struct MemStore {
    bytes: [u8; STORE_CEILING as usize],
}

impl MemStore {
    /// Create a store with every byte erased to 0xFF.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: [0xFF; STORE_CEILING as usize],
        }
    }

    /// The full storage image.
    #[must_use]
    pub const fn bytes(&self) -> &[u8; STORE_CEILING as usize] {
        &self.bytes
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteStore for MemStore {
    #[expect(clippy::indexing_slicing, reason = "A u8 always indexes a 256-byte array")]
    fn program(&mut self, address: u8, value: u8) -> Result<()> {
        self.bytes[usize::from(address)] = value;
        Ok(())
    }
}
