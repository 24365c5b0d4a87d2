//! Capture one session of infrared remote traffic and log it to EEPROM.
//!
//! Wiring: IR receiver on GP2, I2C EEPROM on I2C0 (SDA GP4, SCL GP5),
//! indicator LEDs on GP6/GP7, motor enables on GP8/GP9.
#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod app {
    use defmt::info;
    use defmt_rtt as _;
    use embassy_executor::Spawner;
    use embassy_time::{Duration, Timer};
    use ir_logger::{EdgeCapture, EdgeCaptureStatic, Eeprom24c02, Session, StatusLeds};
    use panic_probe as _;

    const BLINK_CADENCE: Duration = Duration::from_millis(400);

    #[embassy_executor::main]
    async fn main(spawner: Spawner) -> ! {
        let p = embassy_rp::init(Default::default());

        info!("IR logger starting...");

        static EDGE_CAPTURE_STATIC: EdgeCaptureStatic = EdgeCapture::new_static();
        let capture = EdgeCapture::new(p.PIN_2, &EDGE_CAPTURE_STATIC, spawner)
            .expect("Failed to start edge capture");

        let eeprom = Eeprom24c02::new(p.I2C0, p.PIN_5, p.PIN_4);
        let mut leds = StatusLeds::new(p.PIN_6, p.PIN_7, p.PIN_8, p.PIN_9);

        // Let the receiver settle before opening the session.
        Timer::after(Duration::from_secs(1)).await;

        let mut session = Session::start(eeprom).expect("Failed to write session header");
        info!("session open, collecting edges");

        loop {
            while let Some(tick) = capture.pop() {
                leds.recording();
                session
                    .log_edge(tick)
                    .expect("Failed to record edge timing");
            }

            if capture.capture_complete() {
                break;
            }

            // Blink one of the lights to know we're still alive.
            leds.blink_on();
            Timer::after(BLINK_CADENCE).await;
            leds.blink_off();
            Timer::after(BLINK_CADENCE).await;
        }

        capture.disable();
        leds.closed();
        session.close().expect("Failed to write closing records");
        info!(
            "session closed: command=0x{:04X}, dropped edges={}",
            session.command(),
            capture.dropped()
        );

        loop {
            Timer::after(Duration::from_millis(100)).await;
        }
    }
}

#[cfg(not(target_os = "none"))]
fn main() {}
