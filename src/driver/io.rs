// src/driver/io.rs

use super::Pms7003;
use crate::common::{
    command::Command,
    error::Pms7003Error,
    frame::{DATA_FRAME_BODY_LEN, DATA_FRAME_LEN, START_SEQUENCE},
    hal_traits::{PmsSerial, PmsTimer},
    timing,
};
use core::fmt::Debug;
use core::time::Duration;
use nb::Result as NbResult;

// Implementation block for I/O related helpers
impl<IF> Pms7003<IF>
where
    IF: PmsSerial + PmsTimer,
    IF::Error: Debug,
{
    /// Executes a non-blocking I/O operation (`f`) repeatedly until it
    /// stops returning `WouldBlock`, returning the final result or a timeout
    /// error.
    pub(super) fn blocking_io_with_timeout<FN, T>(
        &mut self,
        timeout: Duration,
        mut f: FN,
    ) -> Result<T, Pms7003Error<IF::Error>>
    where
        FN: FnMut(&mut IF) -> NbResult<T, IF::Error>,
    {
        let deadline = self.interface.now() + timeout;

        loop {
            match f(&mut self.interface) {
                Ok(result) => return Ok(result),
                Err(nb::Error::WouldBlock) => {
                    if self.interface.now() >= deadline {
                        return Err(Pms7003Error::Timeout);
                    }
                    // Small delay to avoid busy-spinning the CPU
                    self.interface.delay_us(100);
                }
                Err(nb::Error::Other(e)) => return Err(Pms7003Error::Io(e)),
            }
        }
    }

    /// Encodes and transmits one command frame, then settles.
    ///
    /// The settle gives the sensor time to act on the command before the
    /// link is used again; the duration comes from the driver config.
    pub(super) fn send_command(&mut self, command: Command) -> Result<(), Pms7003Error<IF::Error>> {
        let frame = command.encode();

        let write_duration = timing::BYTE_DURATION * frame.len() as u32;
        let write_timeout = write_duration + Duration::from_millis(20);

        for byte in frame {
            self.blocking_io_with_timeout(write_timeout, |iface| iface.write_byte(byte))?;
        }

        self.blocking_io_with_timeout(timing::FLUSH_TIMEOUT, |iface| iface.flush())?;

        self.settle(self.config.command_settle);
        Ok(())
    }

    /// Reads the 30-byte frame body into `frame` after the start marker.
    ///
    /// A per-byte timeout bounds the read; running dry mid-frame reports how
    /// much of the body actually arrived.
    pub(super) fn read_frame_body(
        &mut self,
        frame: &mut [u8; DATA_FRAME_LEN],
    ) -> Result<(), Pms7003Error<IF::Error>> {
        let timeout = self.config.frame_byte_timeout;
        for i in START_SEQUENCE.len()..DATA_FRAME_LEN {
            match self.blocking_io_with_timeout(timeout, |iface| iface.read_byte()) {
                Ok(byte) => frame[i] = byte,
                Err(Pms7003Error::Timeout) => {
                    return Err(Pms7003Error::TruncatedFrame {
                        needed: DATA_FRAME_BODY_LEN,
                        got: i - START_SEQUENCE.len(),
                    })
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Discards everything currently buffered on the receive side.
    ///
    /// Capped so a sensor still streaming in active mode cannot hold the
    /// drain open forever.
    pub(super) fn drain_input(&mut self) -> Result<(), Pms7003Error<IF::Error>> {
        const DRAIN_LIMIT: usize = 512;
        for _ in 0..DRAIN_LIMIT {
            match self.interface.read_byte() {
                Ok(_) => {}
                Err(nb::Error::WouldBlock) => return Ok(()),
                Err(nb::Error::Other(e)) => return Err(Pms7003Error::Io(e)),
            }
        }
        Ok(())
    }

    pub(super) fn settle(&mut self, duration: Duration) {
        self.interface.delay_us(duration.as_micros() as u32);
    }
}
