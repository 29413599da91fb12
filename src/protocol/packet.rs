//! Packet buffer and control byte decode
//!
//! The legacy host format is a 16-byte packet: a control byte, a reserved
//! byte, then up to seven `(address, data)` byte pairs. The response packet
//! mirrors the request layout; the handler writes only as many payload
//! bytes as it consumed from the request.

use bitflags::bitflags;

use crate::config::{LEGACY_PKT_LEN, PKT_CTRL_IDX, PKT_PAYLOAD_IDX};

/// Offset of the address byte for single-register device accesses.
pub const PKT_ADDR_IDX: usize = PKT_PAYLOAD_IDX;

/// Offset of the data byte for single-register device accesses.
pub const PKT_DATA_IDX: usize = PKT_PAYLOAD_IDX + 1;

const CNT_MASK: u8 = 0x07;
const DEV_MASK: u8 = 0x30;
const DEV_SHIFT: u8 = 4;

bitflags! {
    /// Direction bits of the control byte (bits 6-7).
    ///
    /// Both bits may be set, in which case the read takes priority.
    /// Neither bit set makes the packet a diagnosed no-op.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Direction: u8 {
        /// Host requests data from the device.
        const READ = 0x80;
        /// Host sends data to the device.
        const WRITE = 0x40;
    }
}

/// Target device selector (bits 4-5 of the control byte).
///
/// Selector value `0b10` is reserved; it decodes to `None` and the packet
/// is dropped with a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Device {
    /// Flat configuration register space on the FPGA.
    Config,
    /// RF transceiver IC, byte-addressed single-byte registers.
    Transceiver,
    /// Clock synthesizer IC, byte-addressed single-byte registers.
    ClockGen,
}

impl Device {
    /// Decode the device selector field of a control byte.
    #[must_use]
    pub const fn from_ctrl(ctrl: u8) -> Option<Self> {
        match (ctrl & DEV_MASK) >> DEV_SHIFT {
            0b00 => Some(Self::Config),
            0b01 => Some(Self::Transceiver),
            0b11 => Some(Self::ClockGen),
            _ => None,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Device {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Config => defmt::write!(f, "CONFIG"),
            Self::Transceiver => defmt::write!(f, "TRX"),
            Self::ClockGen => defmt::write!(f, "CLKGEN"),
        }
    }
}

/// Decoded control byte.
#[derive(Clone, Copy, Debug)]
pub struct ControlWord {
    /// Direction flags (bits 6-7).
    pub direction: Direction,
    /// Device selector, `None` for the reserved encoding.
    pub device: Option<Device>,
    /// Unit count (bits 0-2), 0-7 by construction.
    pub count: u8,
}

impl ControlWord {
    /// Decode a raw control byte.
    #[must_use]
    pub const fn parse(byte: u8) -> Self {
        Self {
            direction: Direction::from_bits_truncate(byte),
            device: Device::from_ctrl(byte),
            count: byte & CNT_MASK,
        }
    }
}

/// Request/response buffer pair for one packet exchange.
///
/// Both buffers share the same fixed layout. The transport fills `req` and
/// sends `resp` back to the host after [`handle`] returns.
///
/// [`handle`]: crate::protocol::legacy::LegacyHandler::handle
#[derive(Clone, Copy, Debug)]
pub struct PacketBuf {
    /// Request bytes as received from the host.
    pub req: [u8; LEGACY_PKT_LEN],
    /// Response bytes to return to the host.
    pub resp: [u8; LEGACY_PKT_LEN],
}

impl PacketBuf {
    /// Create a zeroed packet buffer pair.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            req: [0; LEGACY_PKT_LEN],
            resp: [0; LEGACY_PKT_LEN],
        }
    }

    /// Raw control byte of the request.
    #[must_use]
    pub const fn ctrl(&self) -> u8 {
        self.req[PKT_CTRL_IDX]
    }

    /// Request `(address, data)` pair for payload unit `idx`.
    #[must_use]
    pub const fn req_unit(&self, idx: usize) -> (u8, u8) {
        (
            self.req[PKT_PAYLOAD_IDX + 2 * idx],
            self.req[PKT_PAYLOAD_IDX + 2 * idx + 1],
        )
    }

    /// Store an `(address, data)` pair into response payload unit `idx`.
    pub fn put_resp_unit(&mut self, idx: usize, addr: u8, data: u8) {
        self.resp[PKT_PAYLOAD_IDX + 2 * idx] = addr;
        self.resp[PKT_PAYLOAD_IDX + 2 * idx + 1] = data;
    }
}

impl Default for PacketBuf {
    fn default() -> Self {
        Self::new()
    }
}
