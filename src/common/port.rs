// src/common/port.rs

/// Serial line settings for the PMS7003 link.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PortConfig {
    /// Factory configuration: 9600 baud, 8 data bits, no parity, 1 stop bit.
    Baud9600_8N1,
}

impl Default for PortConfig {
    fn default() -> Self {
        PortConfig::Baud9600_8N1
    }
}
