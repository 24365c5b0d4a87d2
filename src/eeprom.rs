//! A [`ByteStore`] backed by a 24C02-class 256-byte I2C EEPROM.
//!
//! Each byte program is a scoped sequence on the device's write protocol:
//! ack-poll until the previous internal write cycle completes, then issue a
//! single `[address, data]` byte write. The poll is bounded; a device that
//! never reports ready surfaces as [`crate::Error::StoreTimeout`].

use embassy_rp::Peri;
use embassy_rp::i2c::{self, Config as I2cConfig, Instance as I2cInstance, SclPin, SdaPin};

use crate::recorder::ByteStore;
use crate::{Error, Result};

/// Seven-bit bus address of a 24C02 with all address pins grounded.
pub const EEPROM_BUS_ADDRESS: u8 = 0x50;

// A 24C02 write cycle is 5 ms max; this bounds the ack-poll well past that.
const ACK_POLL_ATTEMPTS: u32 = 10_000;

/// Byte-programmable EEPROM on a blocking I2C bus.
pub struct Eeprom24c02<'d, T: I2cInstance> {
    i2c: i2c::I2c<'d, T, i2c::Blocking>,
    bus_address: u8,
}

impl<'d, T: I2cInstance> Eeprom24c02<'d, T> {
    /// Create an EEPROM store on the given I2C peripheral and pins.
    ///
    /// # Arguments
    /// * `i2c_peripheral` - I2C peripheral (I2C0 or I2C1)
    /// * `scl` - Clock pin (any valid I2C SCL pin for this peripheral)
    /// * `sda` - Data pin (any valid I2C SDA pin for this peripheral)
    pub fn new<SCL: SclPin<T>, SDA: SdaPin<T>>(
        i2c_peripheral: Peri<'d, T>,
        scl: Peri<'d, SCL>,
        sda: Peri<'d, SDA>,
    ) -> Self {
        Self {
            i2c: i2c::I2c::new_blocking(i2c_peripheral, scl, sda, I2cConfig::default()),
            bus_address: EEPROM_BUS_ADDRESS,
        }
    }

    /// Block until the device acknowledges its address, i.e. the previous
    /// internal write cycle has finished.
    fn wait_write_complete(&mut self) -> Result<()> {
        for _ in 0..ACK_POLL_ATTEMPTS {
            if self.i2c.blocking_write(self.bus_address, &[]).is_ok() {
                return Ok(());
            }
        }
        Err(Error::StoreTimeout)
    }
}

impl<T: I2cInstance> ByteStore for Eeprom24c02<'_, T> {
    fn program(&mut self, address: u8, value: u8) -> Result<()> {
        self.wait_write_complete()?;
        self.i2c
            .blocking_write(self.bus_address, &[address, value])
            .map_err(Error::I2c)
    }
}
