//! System configuration and protocol constants
//!
//! This module defines compile-time constants for the host-link packet
//! format. The geometry is fixed by the host-side driver and must not
//! change between firmware revisions.

/// Total length of a host-link packet in bytes (request and response).
pub const LEGACY_PKT_LEN: usize = 16;

/// Offset of the control byte within a packet.
pub const PKT_CTRL_IDX: usize = 0;

/// Offset of the reserved byte within a packet.
pub const PKT_RESERVED_IDX: usize = 1;

/// Offset of the first payload byte within a packet.
///
/// The payload is a sequence of `(address, data)` byte pairs; the
/// configuration device carries up to [`MAX_UNITS_PER_PKT`] pairs, the
/// transceiver and clock synthesizer devices exactly one.
pub const PKT_PAYLOAD_IDX: usize = 2;

/// Maximum `(address, data)` units per packet.
///
/// Bounded by the 3-bit count field of the control byte; the packet length
/// leaves exactly this many pairs after the two header bytes.
pub const MAX_UNITS_PER_PKT: usize = 7;

/// Widest configuration parameter in bytes (the timestamp counters).
pub const MAX_PARAM_LEN: usize = 8;
