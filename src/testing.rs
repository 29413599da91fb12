//! Mock peripheral bench
//!
//! A [`PeripheralBus`] implementation backed by plain registers, for
//! exercising the protocol layer without hardware. Facade-level writes are
//! recorded in a call log and facade reads counted, so tests can assert
//! that a split transfer commits exactly once with the assembled value, or
//! that a degenerate packet never reaches the facade.

use heapless::Vec;

use crate::peripherals::PeripheralBus;
use crate::types::{Channel, FpgaVersion};

/// Capacity of the recorded write log.
const WRITE_LOG_CAP: usize = 32;

/// One recorded facade-level write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BusWrite {
    /// Control register write
    ControlReg(u32),
    /// IQ gain correction write
    IqGain(Channel, u16),
    /// IQ phase correction write
    IqPhase(Channel, u16),
    /// Timestamp counter reset
    TimestampReset(Channel),
    /// VCTCXO trim DAC write
    VctcxoTrim(u16),
    /// Auxiliary synthesizer write
    AuxSynth(u32),
    /// Expansion port write
    Expansion(u32),
    /// Expansion direction write
    ExpansionDir(u32),
    /// Transceiver register write
    Trx(u8, u8),
    /// Clock synthesizer register write
    ClockGen(u8, u8),
}

/// Register-backed peripheral bench.
///
/// Reads come from the public fields; writes update them (where a backing
/// store exists) and are appended to [`writes`](Self::writes). Timestamp
/// resets zero the counter. The trim DAC and aux synthesizer have no
/// backing store, matching the write-only hardware.
#[derive(Debug)]
pub struct MockPeripherals {
    /// Control register backing store.
    pub control_reg: u32,
    /// IQ gain per channel, indexed by [`Channel::index`].
    pub iq_gain: [u16; 2],
    /// IQ phase per channel.
    pub iq_phase: [u16; 2],
    /// Reported FPGA version.
    pub fpga_version: FpgaVersion,
    /// Timestamp counters per channel.
    pub timestamp: [u64; 2],
    /// Expansion port lines.
    pub expansion: u32,
    /// Expansion port direction.
    pub expansion_dir: u32,
    /// Transceiver register file.
    pub trx_regs: [u8; 256],
    /// Clock synthesizer register file.
    pub clockgen_regs: [u8; 256],
    /// Facade-level writes, in call order.
    pub writes: Vec<BusWrite, WRITE_LOG_CAP>,
    /// Number of facade-level reads performed.
    pub reads: usize,
}

impl MockPeripherals {
    /// Create a bench with all registers zeroed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            control_reg: 0,
            iq_gain: [0; 2],
            iq_phase: [0; 2],
            fpga_version: FpgaVersion::default(),
            timestamp: [0; 2],
            expansion: 0,
            expansion_dir: 0,
            trx_regs: [0; 256],
            clockgen_regs: [0; 256],
            writes: Vec::new(),
            reads: 0,
        }
    }

    fn log(&mut self, write: BusWrite) {
        let _ = self.writes.push(write);
    }
}

impl Default for MockPeripherals {
    fn default() -> Self {
        Self::new()
    }
}

impl PeripheralBus for MockPeripherals {
    fn control_reg_read(&mut self) -> u32 {
        self.reads += 1;
        self.control_reg
    }

    fn control_reg_write(&mut self, value: u32) {
        self.control_reg = value;
        self.log(BusWrite::ControlReg(value));
    }

    fn iq_gain(&mut self, channel: Channel) -> u16 {
        self.reads += 1;
        self.iq_gain[channel.index()]
    }

    fn set_iq_gain(&mut self, channel: Channel, gain: u16) {
        self.iq_gain[channel.index()] = gain;
        self.log(BusWrite::IqGain(channel, gain));
    }

    fn iq_phase(&mut self, channel: Channel) -> u16 {
        self.reads += 1;
        self.iq_phase[channel.index()]
    }

    fn set_iq_phase(&mut self, channel: Channel, phase: u16) {
        self.iq_phase[channel.index()] = phase;
        self.log(BusWrite::IqPhase(channel, phase));
    }

    fn fpga_version(&mut self) -> FpgaVersion {
        self.reads += 1;
        self.fpga_version
    }

    fn timestamp(&mut self, channel: Channel) -> u64 {
        self.reads += 1;
        self.timestamp[channel.index()]
    }

    fn timestamp_reset(&mut self, channel: Channel) {
        self.timestamp[channel.index()] = 0;
        self.log(BusWrite::TimestampReset(channel));
    }

    fn vctcxo_trim_write(&mut self, value: u16) {
        self.log(BusWrite::VctcxoTrim(value));
    }

    fn aux_synth_write(&mut self, value: u32) {
        self.log(BusWrite::AuxSynth(value));
    }

    fn expansion_read(&mut self) -> u32 {
        self.reads += 1;
        self.expansion
    }

    fn expansion_write(&mut self, value: u32) {
        self.expansion = value;
        self.log(BusWrite::Expansion(value));
    }

    fn expansion_dir_read(&mut self) -> u32 {
        self.reads += 1;
        self.expansion_dir
    }

    fn expansion_dir_write(&mut self, value: u32) {
        self.expansion_dir = value;
        self.log(BusWrite::ExpansionDir(value));
    }

    fn trx_read(&mut self, addr: u8) -> u8 {
        self.reads += 1;
        self.trx_regs[addr as usize]
    }

    fn trx_write(&mut self, addr: u8, data: u8) {
        self.trx_regs[addr as usize] = data;
        self.log(BusWrite::Trx(addr, data));
    }

    fn clockgen_read(&mut self, addr: u8) -> u8 {
        self.reads += 1;
        self.clockgen_regs[addr as usize]
    }

    fn clockgen_write(&mut self, addr: u8, data: u8) {
        self.clockgen_regs[addr as usize] = data;
        self.log(BusWrite::ClockGen(addr, data));
    }
}
