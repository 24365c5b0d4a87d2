//! A device abstraction for interrupt-driven edge timestamp capture.
//!
//! An embassy task waits for transitions on the receiver pin and appends the
//! current tick to a shared [`EdgeLog`]. Producer and consumer touch the log
//! only inside short critical sections, so neither ever observes a torn
//! update. The producer performs no storage I/O and never blocks; once the
//! log is full its appends are silently counted and discarded.
//!
//! # Examples
//! ```no_run
//! # #![no_std]
//! # #![no_main]
//! # use panic_probe as _;
//! # use embassy_executor::Spawner;
//! # use ir_logger::{EdgeCapture, EdgeCaptureStatic};
//! # async fn example(p: embassy_rp::Peripherals, spawner: Spawner) -> ir_logger::Result<()> {
//! static EDGE_CAPTURE_STATIC: EdgeCaptureStatic = EdgeCapture::new_static();
//! let capture = EdgeCapture::new(p.PIN_2, &EDGE_CAPTURE_STATIC, spawner)?;
//!
//! while let Some(tick) = capture.pop() {
//!     // feed the session
//! }
//! # Ok(())
//! # }
//! ```

use core::cell::RefCell;

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::Peri;
use embassy_rp::gpio::{AnyPin, Input, Pin, Pull};
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use portable_atomic::{AtomicBool, Ordering};

use crate::edge_log::{EDGE_CAPACITY, EdgeLog};
use crate::never::Never;
use crate::tick_clock::TickClock;
use crate::{Error, Result};

/// Static resources for the `EdgeCapture` device abstraction.
pub struct EdgeCaptureStatic {
    edges: Mutex<CriticalSectionRawMutex, RefCell<EdgeLog<EDGE_CAPACITY>>>,
    enabled: AtomicBool,
}

/// A device abstraction for the edge-capture producer task.
///
/// See the module-level documentation for usage.
pub struct EdgeCapture<'a> {
    capture_static: &'a EdgeCaptureStatic,
}

impl EdgeCapture<'_> {
    /// Create static resources for edge capture.
    #[must_use]
    pub const fn new_static() -> EdgeCaptureStatic {
        EdgeCaptureStatic {
            edges: Mutex::new(RefCell::new(EdgeLog::new())),
            enabled: AtomicBool::new(true),
        }
    }

    /// Start capturing edges on the given pin.
    ///
    /// # Errors
    /// Returns an error if the background task cannot be spawned.
    pub fn new<P: Pin>(
        pin: Peri<'static, P>,
        capture_static: &'static EdgeCaptureStatic,
        spawner: Spawner,
    ) -> Result<Self> {
        // Type erase to Peri<'static, AnyPin> (keep the Peri wrapper!)
        let any: Peri<'static, AnyPin> = pin.into();
        // Pull::Up for typical IR receivers (they idle HIGH with active-low modules)
        spawner
            .spawn(edge_capture_task(Input::new(any, Pull::Up), capture_static))
            .map_err(Error::TaskSpawn)?;
        Ok(Self { capture_static })
    }

    /// Pop the next unread timestamp, if any.
    #[must_use]
    pub fn pop(&self) -> Option<u16> {
        self.capture_static
            .edges
            .lock(|edges| edges.borrow_mut().pop())
    }

    /// Whether a full session of edges has been captured and consumed.
    #[must_use]
    pub fn capture_complete(&self) -> bool {
        self.capture_static
            .edges
            .lock(|edges| edges.borrow().fully_consumed())
    }

    /// Edges discarded because the log was full.
    #[must_use]
    pub fn dropped(&self) -> u32 {
        self.capture_static
            .edges
            .lock(|edges| edges.borrow().dropped())
    }

    /// Permanently stop the producer. The capture task parks on the next
    /// edge; there is no re-enable short of a restart.
    pub fn disable(&self) {
        self.capture_static.enabled.store(false, Ordering::Relaxed);
    }
}

#[embassy_executor::task]
async fn edge_capture_task(
    mut pin: Input<'static>,
    capture_static: &'static EdgeCaptureStatic,
) -> ! {
    let tick_clock = TickClock::new();
    info!("edge capture task started");
    loop {
        pin.wait_for_any_edge().await;

        if !capture_static.enabled.load(Ordering::Relaxed) {
            info!("edge capture disabled, parking");
            let never: Never = core::future::pending().await;
            match never {}
        }

        let tick = tick_clock.now();
        capture_static.edges.lock(|edges| {
            let _ = edges.borrow_mut().record(tick);
        });
    }
}
