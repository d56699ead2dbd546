// src/common/reading.rs

/// One decoded measurement frame from the sensor.
///
/// A `Reading` is only ever constructed by frame decoding, after the frame
/// passed checksum validation, was not all-zero in its payload region, and
/// carried a zero error code. There is no public constructor and no partial
/// state: either the whole frame was good or no `Reading` exists.
///
/// Concentrations are in µg/m³. Particle counts are per 0.1 L of air, above
/// the named size threshold in µm.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Reading {
    /// PM1.0 concentration, CF=1 (standard particle).
    pub pm1_0_cf1: u16,
    /// PM2.5 concentration, CF=1 (standard particle).
    pub pm2_5_cf1: u16,
    /// PM10 concentration, CF=1 (standard particle).
    pub pm10_cf1: u16,
    /// PM1.0 concentration, atmospheric environment.
    pub pm1_0: u16,
    /// PM2.5 concentration, atmospheric environment.
    pub pm2_5: u16,
    /// PM10 concentration, atmospheric environment.
    pub pm10: u16,
    /// Particles > 0.3 µm.
    pub count_gt_0_3: u16,
    /// Particles > 0.5 µm.
    pub count_gt_0_5: u16,
    /// Particles > 1.0 µm.
    pub count_gt_1_0: u16,
    /// Particles > 2.5 µm.
    pub count_gt_2_5: u16,
    /// Particles > 5.0 µm.
    pub count_gt_5_0: u16,
    /// Particles > 10 µm.
    pub count_gt_10: u16,
    /// Firmware version byte.
    pub version: u8,
    /// Sensor-reported error code. Always zero here; a non-zero code is
    /// rejected during decoding and never reaches a `Reading`.
    pub error_code: u8,
}
