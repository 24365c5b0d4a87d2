//! The two indicator LEDs and two motor-enable outputs.
//!
//! Pure on/off side effects driven by the session loop: a liveness blink
//! while collecting, a write indicator while a record is stored, and a final
//! pattern at close. Motor 1 is initialized low and never driven.

use embassy_rp::Peri;
use embassy_rp::gpio::{AnyPin, Level, Output, Pin};

/// The four digital outputs of the logger.
pub struct StatusLeds {
    led1: Output<'static>,
    led2: Output<'static>,
    _motor1: Output<'static>,
    motor2: Output<'static>,
}

impl StatusLeds {
    /// Take ownership of the four output pins, all initialized low.
    pub fn new<P1: Pin, P2: Pin, P3: Pin, P4: Pin>(
        led1: Peri<'static, P1>,
        led2: Peri<'static, P2>,
        motor1: Peri<'static, P3>,
        motor2: Peri<'static, P4>,
    ) -> Self {
        let led1: Peri<'static, AnyPin> = led1.into();
        let led2: Peri<'static, AnyPin> = led2.into();
        let motor1: Peri<'static, AnyPin> = motor1.into();
        let motor2: Peri<'static, AnyPin> = motor2.into();
        Self {
            led1: Output::new(led1, Level::Low),
            led2: Output::new(led2, Level::Low),
            _motor1: Output::new(motor1, Level::Low),
            motor2: Output::new(motor2, Level::Low),
        }
    }

    /// Liveness blink, on phase: LED 1 with motor 2 held on.
    pub fn blink_on(&mut self) {
        self.led1.set_high();
        self.led2.set_low();
        self.motor2.set_high();
    }

    /// Liveness blink, off phase.
    pub fn blink_off(&mut self) {
        self.led1.set_low();
        self.led2.set_low();
        self.motor2.set_high();
    }

    /// Record-write indicator: LED 2 with motor 2 held on.
    pub fn recording(&mut self) {
        self.led1.set_low();
        self.led2.set_high();
        self.motor2.set_high();
    }

    /// Close-out pattern: both LEDs with motor 2 held on.
    pub fn closed(&mut self) {
        self.led1.set_high();
        self.led2.set_high();
        self.motor2.set_high();
    }
}
