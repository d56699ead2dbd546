// src/common/frame.rs
//
// PMS7003 inbound data frame, 32 bytes, all fields big-endian:
//
// 01 02     uint16    Start bytes: 0x42 0x4D
// 03 04     uint16    Frame length (2x13 + 2), informational only
// 05 .. 28  12xuint16 Measurement fields (see `Reading`)
// 29        uint8     Firmware version
// 30        uint8     Error code
// 31 32     uint16    Checksum: byte sum of bytes 1..30, low 8 bits compared

use super::error::Pms7003Error;
use super::reading::Reading;

/// Two-byte start marker opening every frame in either direction.
pub const START_SEQUENCE: [u8; 2] = [0x42, 0x4D];

/// Total length of an inbound data frame, including the start marker.
pub const DATA_FRAME_LEN: usize = 32;

/// Bytes remaining after the start marker has been consumed.
pub const DATA_FRAME_BODY_LEN: usize = DATA_FRAME_LEN - START_SEQUENCE.len();

// Payload region covered by the all-zero check: length word + measurement
// fields, i.e. everything between the marker and the version byte.
const PAYLOAD_START: usize = 2;
const PAYLOAD_END: usize = 28;

const VERSION_OFFSET: usize = 28;
const ERROR_CODE_OFFSET: usize = 29;

/// Sums every byte of `frame` except the trailing two-byte checksum field,
/// keeping the low 16 bits.
///
/// This is the checksum shared by both wire directions: outbound command
/// frames transmit all 16 bits, inbound data frames are compared on the low
/// 8 bits only.
pub fn checksum(frame: &[u8]) -> u16 {
    debug_assert!(frame.len() >= 2, "frame must include a checksum field");
    frame[..frame.len() - 2]
        .iter()
        .fold(0u16, |sum, &byte| sum.wrapping_add(u16::from(byte)))
}

/// Validates a complete 32-byte frame and decodes it into a [`Reading`].
///
/// Validation order matches the device's failure modes: checksum first, then
/// the all-zero power-on artifact, then the sensor-reported error code. The
/// length word is read off the wire but deliberately not checked against the
/// actual frame size; the checksum already covers it.
pub fn decode_frame<E>(frame: &[u8; DATA_FRAME_LEN]) -> Result<Reading, Pms7003Error<E>>
where
    E: core::fmt::Debug,
{
    let received = frame[DATA_FRAME_LEN - 1];
    let derived = (checksum(frame) & 0xFF) as u8;
    if received != derived {
        return Err(Pms7003Error::ChecksumMismatch { received, derived });
    }

    if frame[PAYLOAD_START..PAYLOAD_END].iter().all(|&byte| byte == 0) {
        return Err(Pms7003Error::ZeroPayload);
    }

    let error_code = frame[ERROR_CODE_OFFSET];
    if error_code != 0 {
        return Err(Pms7003Error::SensorFault(error_code));
    }

    Ok(Reading {
        pm1_0_cf1: field(frame, 4),
        pm2_5_cf1: field(frame, 6),
        pm10_cf1: field(frame, 8),
        pm1_0: field(frame, 10),
        pm2_5: field(frame, 12),
        pm10: field(frame, 14),
        count_gt_0_3: field(frame, 16),
        count_gt_0_5: field(frame, 18),
        count_gt_1_0: field(frame, 20),
        count_gt_2_5: field(frame, 22),
        count_gt_5_0: field(frame, 24),
        count_gt_10: field(frame, 26),
        version: frame[VERSION_OFFSET],
        error_code,
    })
}

#[inline]
fn field(frame: &[u8; DATA_FRAME_LEN], offset: usize) -> u16 {
    u16::from_be_bytes([frame[offset], frame[offset + 1]])
}
