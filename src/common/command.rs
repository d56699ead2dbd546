// src/common/command.rs
//
// PMS7003 outbound command frame, 7 bytes, big-endian:
//
// 01 02     uint16    Start bytes: 0x42 0x4D
// 03        uint8     Command
// 04 05     uint16    Data
// 06 07     uint16    Checksum: byte sum of bytes 1..5

use super::frame::{checksum, START_SEQUENCE};

/// Total length of an outbound command frame.
pub const COMMAND_FRAME_LEN: usize = 7;

const CMD_MODE: u8 = 0xE1;
const CMD_READ: u8 = 0xE2;
const CMD_SLEEP: u8 = 0xE4;

const MODE_PASSIVE: u16 = 0x0000;
const MODE_ACTIVE: u16 = 0x0001;

const SLEEP: u16 = 0x0000;
const WAKE: u16 = 0x0001;

/// The commands the PMS7003 understands.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Command {
    /// Switch to passive mode: frames only on request.
    SetPassive,
    /// Switch to active mode: the sensor streams frames unsolicited.
    SetActive,
    /// Enter low-power sleep. The fan stops; no frames until woken.
    Sleep,
    /// Leave sleep and resume operation.
    Wake,
    /// Request a single frame (passive mode).
    RequestRead,
}

impl Command {
    pub fn opcode(&self) -> u8 {
        match self {
            Command::SetPassive | Command::SetActive => CMD_MODE,
            Command::Sleep | Command::Wake => CMD_SLEEP,
            Command::RequestRead => CMD_READ,
        }
    }

    pub fn payload(&self) -> u16 {
        match self {
            Command::SetPassive => MODE_PASSIVE,
            Command::SetActive => MODE_ACTIVE,
            Command::Sleep => SLEEP,
            Command::Wake => WAKE,
            Command::RequestRead => 0x0000,
        }
    }

    /// Encodes the command as a ready-to-transmit frame.
    pub fn encode(&self) -> [u8; COMMAND_FRAME_LEN] {
        encode_command(self.opcode(), self.payload())
    }
}

/// Builds a 7-byte command frame from a raw opcode and payload.
///
/// Deterministic, no I/O. The checksum is the low 16 bits of the byte sum of
/// the five preceding bytes, packed big-endian. No constraint is placed on
/// the payload value; the known-good combinations live in [`Command`].
pub fn encode_command(opcode: u8, payload: u16) -> [u8; COMMAND_FRAME_LEN] {
    let mut frame = [0u8; COMMAND_FRAME_LEN];
    frame[..2].copy_from_slice(&START_SEQUENCE);
    frame[2] = opcode;
    frame[3..5].copy_from_slice(&payload.to_be_bytes());
    let sum = checksum(&frame);
    frame[5..].copy_from_slice(&sum.to_be_bytes());
    frame
}
