// src/common/hal_traits.rs

use super::port::PortConfig;
use core::fmt::Debug;
use core::ops::Add;
use core::time::Duration;

/// A monotonic timestamp produced by a [`PmsTimer`].
///
/// Adding a `Duration` yields a deadline; ordering decides whether it has
/// passed. Implemented automatically for any type with the right bounds
/// (e.g. `std::time::Instant`, or a tick counter wrapper on embedded).
pub trait PmsInstant: Copy + PartialOrd + Add<Duration, Output = Self> {}

impl<T> PmsInstant for T where T: Copy + PartialOrd + Add<Duration, Output = T> {}

/// Abstraction for timer/delay operations required by the driver.
pub trait PmsTimer {
    /// Monotonic clock type used for scan and I/O deadlines.
    type Instant: PmsInstant;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// Delay for at least the specified number of microseconds.
    fn delay_us(&mut self, us: u32);

    /// Delay for at least the specified number of milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

/// Abstraction for synchronous (non-blocking) serial communication with the
/// sensor.
///
/// The transport is assumed reliable at the byte level but carries no
/// framing; frame synchronization is entirely the driver's job.
pub trait PmsSerial {
    /// Associated error type for communication errors.
    type Error: Debug;

    /// Attempts to read a single byte from the serial interface.
    ///
    /// Returns `Ok(byte)` if a byte was read, or `Err(nb::Error::WouldBlock)`
    /// if none is available yet. Other errors are returned as
    /// `Err(nb::Error::Other(Self::Error))`.
    fn read_byte(&mut self) -> nb::Result<u8, Self::Error>;

    /// Attempts to write a single byte to the serial interface.
    ///
    /// Returns `Ok(())` if the byte was accepted for transmission, or
    /// `Err(nb::Error::WouldBlock)` if the write buffer is full.
    fn write_byte(&mut self, byte: u8) -> nb::Result<(), Self::Error>;

    /// Attempts to flush the transmit buffer, ensuring all written bytes have
    /// been sent.
    fn flush(&mut self) -> nb::Result<(), Self::Error>;

    /// Applies the serial configuration for the sensor link.
    ///
    /// This operation might be blocking or complex, hence `Result` instead of
    /// `nb::Result`.
    fn set_config(&mut self, config: PortConfig) -> Result<(), Self::Error>;
}
