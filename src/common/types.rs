// src/common/types.rs

/// Operating mode of the sensor, chosen at driver construction.
///
/// In `Active` mode the sensor streams data frames unsolicited (roughly one
/// per second, slower in stable air). In `Passive` mode it only answers an
/// explicit read request. The driver sends the matching mode command during
/// construction and assumes the mode stays fixed for its lifetime.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Mode {
    Active,
    Passive,
}
