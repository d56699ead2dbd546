// src/driver/mod.rs

mod io;

use crate::common::{
    command::Command,
    error::Pms7003Error,
    frame::{self, DATA_FRAME_LEN, START_SEQUENCE},
    hal_traits::{PmsSerial, PmsTimer},
    port::PortConfig,
    reading::Reading,
    timing,
    types::Mode,
};
use core::fmt::Debug;
use core::time::Duration;

/// Tunable timing for one driver instance.
///
/// Every value here is empirically chosen, not protocol-mandated; the
/// defaults come from [`crate::common::timing`] and suit the stock sensor.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Config {
    /// Wall-clock budget for finding the start sequence.
    pub scan_timeout: Duration,
    /// Wait after a poll that returned no data before scanning again.
    pub scan_poll_interval: Duration,
    /// Per-byte timeout while reading the frame body.
    pub frame_byte_timeout: Duration,
    /// Settle after the start marker in active mode, letting the full frame
    /// buffer before the body read.
    pub active_settle: Duration,
    /// Settle after every command write.
    pub command_settle: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scan_timeout: timing::SCAN_TIMEOUT_DEFAULT,
            scan_poll_interval: timing::SCAN_POLL_INTERVAL,
            frame_byte_timeout: timing::FRAME_BYTE_TIMEOUT,
            active_settle: timing::ACTIVE_SETTLE,
            command_settle: timing::COMMAND_SETTLE,
        }
    }
}

/// Synchronous driver for one PMS7003 on one exclusively-owned serial link.
///
/// Single-threaded and blocking: `read_frame` holds the calling thread for
/// up to the configured scan timeout. Callers wanting non-blocking behavior
/// should run the driver on its own thread and hand results over a channel.
#[derive(Debug)]
pub struct Pms7003<IF>
where
    IF: PmsSerial + PmsTimer,
    IF::Error: Debug,
{
    interface: IF,
    mode: Mode,
    config: Config,
    last_reading: Option<Reading>,
}

impl<IF> Pms7003<IF>
where
    IF: PmsSerial + PmsTimer,
    IF::Error: Debug,
{
    /// Configures the link and puts the sensor into `mode`.
    pub fn new(interface: IF, mode: Mode) -> Result<Self, Pms7003Error<IF::Error>> {
        Self::with_config(interface, mode, Config::default())
    }

    /// Like [`Pms7003::new`] with explicit timing configuration.
    pub fn with_config(
        mut interface: IF,
        mode: Mode,
        config: Config,
    ) -> Result<Self, Pms7003Error<IF::Error>> {
        interface
            .set_config(PortConfig::default())
            .map_err(Pms7003Error::Io)?;

        let mut driver = Pms7003 {
            interface,
            mode,
            config,
            last_reading: None,
        };

        match mode {
            Mode::Passive => driver.set_passive()?,
            Mode::Active => driver.set_active()?,
        }

        Ok(driver)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The last successfully decoded reading, or `None` if no read has ever
    /// succeeded or the most recent attempt failed.
    pub fn last_reading(&self) -> Option<Reading> {
        self.last_reading
    }

    /// Consumes the driver, handing back the interface.
    pub fn release(self) -> IF {
        self.interface
    }

    // --- Command operations ---

    /// Puts the sensor into passive (request/response) mode.
    ///
    /// Drains the receive buffer afterwards: frames the sensor emitted in
    /// active mode before the switch took effect would otherwise be read as
    /// the response to the next request.
    pub fn set_passive(&mut self) -> Result<(), Pms7003Error<IF::Error>> {
        self.send_command(Command::SetPassive)?;
        self.drain_input()
    }

    /// Puts the sensor into active (streaming) mode.
    pub fn set_active(&mut self) -> Result<(), Pms7003Error<IF::Error>> {
        self.send_command(Command::SetActive)
    }

    /// Stops the fan and enters low-power sleep.
    pub fn sleep(&mut self) -> Result<(), Pms7003Error<IF::Error>> {
        self.send_command(Command::Sleep)
    }

    /// Wakes the sensor from sleep.
    pub fn wake(&mut self) -> Result<(), Pms7003Error<IF::Error>> {
        self.send_command(Command::Wake)
    }

    /// Asks the sensor for one frame. Meaningful in passive mode only.
    pub fn request_read(&mut self) -> Result<(), Pms7003Error<IF::Error>> {
        self.send_command(Command::RequestRead)
    }

    // --- Read operations ---

    /// Retrieves one reading, requesting it first when in passive mode.
    pub fn get_reading(&mut self) -> Result<Reading, Pms7003Error<IF::Error>> {
        if self.mode == Mode::Passive {
            self.request_read()?;
        }
        self.read_frame()
    }

    /// Finds, validates and decodes the next data frame on the wire.
    ///
    /// The cached reading is cleared up front; it is only repopulated when
    /// the whole frame survives validation, so a caller never sees stale
    /// data after a failure.
    pub fn read_frame(&mut self) -> Result<Reading, Pms7003Error<IF::Error>> {
        self.last_reading = None;

        self.find_start_sequence()?;

        // In active mode the marker can arrive before the rest of the frame
        // has buffered; in passive mode the request already triggered the
        // full transmission.
        if self.mode == Mode::Active {
            self.settle(self.config.active_settle);
        }

        let mut frame = [0u8; DATA_FRAME_LEN];
        frame[..START_SEQUENCE.len()].copy_from_slice(&START_SEQUENCE);
        self.read_frame_body(&mut frame)?;

        let reading = frame::decode_frame(&frame)?;
        self.last_reading = Some(reading);
        Ok(reading)
    }

    /// Scans the byte stream for two consecutive marker bytes.
    ///
    /// One-byte sliding window: a poll that yields nothing cannot extend a
    /// match and costs one poll interval, while a mismatching byte slides
    /// the window without waiting. Bounded by a wall-clock deadline.
    fn find_start_sequence(&mut self) -> Result<(), Pms7003Error<IF::Error>> {
        let deadline = self.interface.now() + self.config.scan_timeout;
        let mut previous: Option<u8> = None;

        loop {
            if self.interface.now() >= deadline {
                return Err(Pms7003Error::StartSequenceTimeout);
            }

            let current = match self.interface.read_byte() {
                Ok(byte) => Some(byte),
                Err(nb::Error::WouldBlock) => None,
                Err(nb::Error::Other(e)) => return Err(Pms7003Error::Io(e)),
            };

            if previous == Some(START_SEQUENCE[0]) && current == Some(START_SEQUENCE[1]) {
                return Ok(());
            }

            if current.is_none() {
                self.settle(self.config.scan_poll_interval);
            }

            // Slide the window. A repeated 0x42 stays a live candidate.
            previous = current;
        }
    }
}
