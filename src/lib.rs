//! SDR Transceiver Host-Link Firmware Core
//!
//! This library implements the packet protocol core of the firmware for an
//! FPGA-based SDR transceiver. The host drives the board through fixed-size
//! command packets; a softcore on the FPGA decodes each packet and services
//! it against the on-board peripherals: the FPGA configuration register
//! block, the RF transceiver IC, and the clock synthesizer IC.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         HOST                                 │
//! │        (addr, data) unit packets over the control link       │
//! ├─────────────────────────────────────────────────────────────┤
//! │                     PROTOCOL LAYER                           │
//! │  Packet decode  │  Config-space lookup  │  Transfer resume   │
//! ├─────────────────────────────────────────────────────────────┤
//! │                   PERIPHERAL FACADE                          │
//! │  Control reg │ IQ corr │ Timestamps │ Transceiver │ ClockGen │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Packet transport (how the 16-byte buffers arrive and depart) and the
//! concrete peripheral accessors live outside this crate; the protocol layer
//! consumes them through the [`peripherals::PeripheralBus`] trait.
//!
//! # Design Principles
//!
//! - **Type-driven design**: closed enums for device selectors and config
//!   parameters, matched exhaustively
//! - **No hidden state**: multi-packet transfer continuation is owned by an
//!   explicit handler value, never a global
//! - **No unsafe, no heap**: all state fits in fixed-size fields
//! - **Silent wire, loud log**: the packet format has no error channel, so
//!   every anomaly is a diagnostic line plus a defined no-op

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

#[macro_use]
mod fmt;

/// System configuration and constants
pub mod config;

/// Shared types used across modules
pub mod types;

/// Peripheral access facade consumed by the protocol layer
pub mod peripherals;

/// Host-link packet protocol
pub mod protocol;

/// Mock peripheral bench for protocol tests
pub mod testing;

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::peripherals::PeripheralBus;
    pub use crate::protocol::config_space::ConfigParam;
    pub use crate::protocol::legacy::LegacyHandler;
    pub use crate::protocol::packet::{ControlWord, Device, Direction, PacketBuf};
    pub use crate::types::*;
}
