// src/common/timing.rs

use core::time::Duration;

// The PMS7003 datasheet specifies no command/response timing; every value
// here is empirically chosen and carried into `driver::Config` as a default
// rather than treated as a protocol constant.

// === Start-sequence scan ===

/// Default wall-clock budget for finding the `42 4D` start sequence.
/// The sensor can take over 2 s between frames in active mode; 6.4 s covers
/// a few missed frames before giving up.
pub const SCAN_TIMEOUT_DEFAULT: Duration = Duration::from_millis(6400);

/// How long to wait after an empty poll before scanning again.
pub const SCAN_POLL_INTERVAL: Duration = Duration::from_millis(100);

// === Frame body ===

/// Per-byte timeout while reading the 30-byte frame body. Generous next to
/// the ~1 ms a byte takes on the wire.
pub const FRAME_BYTE_TIMEOUT: Duration = Duration::from_millis(100);

/// Settle time after the start sequence in active mode, letting the rest of
/// the frame buffer before the body read starts.
pub const ACTIVE_SETTLE: Duration = Duration::from_millis(500);

// === Commands ===

/// Settle time after writing a command frame, giving the sensor room to act
/// on it before the link is used again.
pub const COMMAND_SETTLE: Duration = Duration::from_millis(500);

/// Timeout for the transmit-buffer flush after a command write.
pub const FLUSH_TIMEOUT: Duration = Duration::from_millis(10);

// === Byte Timing at 9600 Baud (8N1) ===
// 1 start bit + 8 data bits + 1 stop bit = 10 bits per byte
// Time per byte = 10 / 9600 s ≈ 1.042 ms

/// Nominal duration of a single byte (10 bits total) at 9600 baud.
pub const BYTE_DURATION: Duration = Duration::from_micros(1042);
