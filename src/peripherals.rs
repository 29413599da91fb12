//! Peripheral access facade
//!
//! The protocol layer never touches hardware directly; it drives the
//! on-board peripherals through this trait. The firmware binary provides
//! the real implementation over the FPGA register file and the device
//! buses; [`crate::testing::MockPeripherals`] provides a bench
//! implementation for protocol tests.
//!
//! Capability policy: the FPGA version word is read-only, the auxiliary
//! synthesizer is write-only, and trim-DAC readback is not implemented.
//! Those restrictions are enforced by the protocol layer's parameter
//! dispatch, not by implementations of this trait, so every method here is
//! an unconditional accessor.

use crate::types::{Channel, FpgaVersion};

/// Access to the on-board peripherals behind the host link.
///
/// All operations are synchronous and infallible from the protocol layer's
/// point of view; the wire format has no way to report a failed access, so
/// implementations must resolve or swallow bus errors themselves.
pub trait PeripheralBus {
    /// Read the 32-bit FPGA control register.
    fn control_reg_read(&mut self) -> u32;

    /// Write the 32-bit FPGA control register.
    fn control_reg_write(&mut self, value: u32);

    /// Read the IQ balance gain correction for a channel.
    fn iq_gain(&mut self, channel: Channel) -> u16;

    /// Set the IQ balance gain correction for a channel.
    fn set_iq_gain(&mut self, channel: Channel, gain: u16);

    /// Read the IQ balance phase correction for a channel.
    fn iq_phase(&mut self, channel: Channel) -> u16;

    /// Set the IQ balance phase correction for a channel.
    fn set_iq_phase(&mut self, channel: Channel, phase: u16);

    /// Read the FPGA bitstream version.
    fn fpga_version(&mut self) -> FpgaVersion;

    /// Read the free-running timestamp counter for a channel.
    fn timestamp(&mut self, channel: Channel) -> u64;

    /// Reset the timestamp counter for a channel.
    fn timestamp_reset(&mut self, channel: Channel);

    /// Write the VCTCXO trim DAC. Readback is not available.
    fn vctcxo_trim_write(&mut self, value: u16);

    /// Write a configuration word to the auxiliary synthesizer.
    ///
    /// The synthesizer is write-only; there is no corresponding read.
    fn aux_synth_write(&mut self, value: u32);

    /// Read the expansion port I/O lines.
    fn expansion_read(&mut self) -> u32;

    /// Write the expansion port I/O lines.
    fn expansion_write(&mut self, value: u32);

    /// Read the expansion port direction register.
    fn expansion_dir_read(&mut self) -> u32;

    /// Write the expansion port direction register.
    fn expansion_dir_write(&mut self, value: u32);

    /// Read a single transceiver IC register.
    fn trx_read(&mut self, addr: u8) -> u8;

    /// Write a single transceiver IC register.
    fn trx_write(&mut self, addr: u8, data: u8);

    /// Read a single clock synthesizer register.
    fn clockgen_read(&mut self, addr: u8) -> u8;

    /// Write a single clock synthesizer register.
    fn clockgen_write(&mut self, addr: u8, data: u8);
}
