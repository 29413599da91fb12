//! Legacy packet dispatch and transfer continuation
//!
//! Every host exchange carries one byte of payload data per unit, but the
//! configuration parameters are up to eight bytes wide, so a config-space
//! access spans several request/response exchanges. The handler keeps one
//! continuation state per direction and resumes a partially completed
//! transfer on each call until the parameter's full width has moved.
//!
//! The host requests bytes in order, LSB to MSB, and the successive unit
//! addresses just increment. The handler relies on that and does not
//! re-check addresses after the first one of a transfer; out-of-order
//! units silently mis-assemble the value.

use crate::config::PKT_PAYLOAD_IDX;
use crate::peripherals::PeripheralBus;
use crate::protocol::config_space::{self, ConfigParam};
use crate::protocol::packet::{
    ControlWord, Device, Direction, PacketBuf, PKT_ADDR_IDX, PKT_DATA_IDX,
};
use crate::types::Channel;

/// Continuation state for one direction of a config-space transfer.
#[derive(Clone, Copy, Debug)]
struct Transfer {
    /// Parameter being transferred, `Unknown` while idle.
    param: ConfigParam,
    /// Bytes moved so far, 0-8.
    done: u8,
    /// Value accumulated (write) or latched from the facade (read).
    value: u64,
}

impl Transfer {
    const IDLE: Self = Self {
        param: ConfigParam::Unknown,
        done: 0,
        value: 0,
    };

    fn reset(&mut self) {
        *self = Self::IDLE;
    }

    const fn is_idle(&self) -> bool {
        self.done == 0
    }
}

/// Decoder and dispatcher for the legacy host packet format.
///
/// Owns the read-side and write-side continuation states. The two sides
/// are independent: a transceiver or clock synthesizer access, or a
/// transfer in the opposite direction, never disturbs a pending transfer.
///
/// The caller must serialize packet handling: a new config-space transfer
/// in a given direction must not start while a prior multi-packet transfer
/// in that direction is incomplete. An interrupted transfer leaves stale
/// continuation state; call [`reset`](Self::reset) to recover.
pub struct LegacyHandler {
    rd: Transfer,
    wr: Transfer,
}

impl LegacyHandler {
    /// Create a handler with both directions idle.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rd: Transfer::IDLE,
            wr: Transfer::IDLE,
        }
    }

    /// Drop any partially completed transfers and return to idle.
    pub fn reset(&mut self) {
        self.rd.reset();
        self.wr.reset();
    }

    /// Whether a multi-packet read transfer is in flight.
    #[must_use]
    pub const fn read_pending(&self) -> bool {
        !self.rd.is_idle()
    }

    /// Whether a multi-packet write transfer is in flight.
    #[must_use]
    pub const fn write_pending(&self) -> bool {
        !self.wr.is_idle()
    }

    /// Decode and service one packet.
    ///
    /// Writes the response payload into `pkt.resp`, touching only as many
    /// bytes as were consumed from `pkt.req`. Anomalies (reserved device
    /// selector, missing direction bits, unmapped offsets) are diagnosed
    /// and otherwise ignored; the packet format has no error channel.
    pub fn handle<P: PeripheralBus>(&mut self, bus: &mut P, pkt: &mut PacketBuf) {
        let ctrl = ControlWord::parse(pkt.ctrl());

        diag!(
            "host link: ctrl=0x{:02x} read={} write={} count={}",
            pkt.ctrl(),
            ctrl.direction.contains(Direction::READ),
            ctrl.direction.contains(Direction::WRITE),
            ctrl.count
        );

        if ctrl.direction.contains(Direction::READ) {
            self.pkt_read(bus, ctrl, pkt);
        } else if ctrl.direction.contains(Direction::WRITE) {
            self.pkt_write(bus, ctrl, pkt);
        } else {
            diag!("control byte without direction: 0x{:02x}", pkt.ctrl());
        }
    }

    fn pkt_read<P: PeripheralBus>(&mut self, bus: &mut P, ctrl: ControlWord, pkt: &mut PacketBuf) {
        match ctrl.device {
            Some(Device::Transceiver) => {
                let addr = pkt.req[PKT_ADDR_IDX];
                pkt.resp[PKT_ADDR_IDX] = addr;
                pkt.resp[PKT_DATA_IDX] = bus.trx_read(addr);
            }
            Some(Device::ClockGen) => {
                let addr = pkt.req[PKT_ADDR_IDX];
                pkt.resp[PKT_ADDR_IDX] = addr;
                pkt.resp[PKT_DATA_IDX] = bus.clockgen_read(addr);
            }
            Some(Device::Config) => self.config_read(bus, ctrl.count, pkt),
            None => diag!("read with reserved device selector: 0x{:02x}", pkt.ctrl()),
        }
    }

    fn pkt_write<P: PeripheralBus>(&mut self, bus: &mut P, ctrl: ControlWord, pkt: &mut PacketBuf) {
        match ctrl.device {
            Some(Device::Transceiver) => {
                bus.trx_write(pkt.req[PKT_ADDR_IDX], pkt.req[PKT_DATA_IDX]);
                pkt.resp[PKT_ADDR_IDX] = pkt.req[PKT_ADDR_IDX];
                pkt.resp[PKT_DATA_IDX] = 0;
            }
            Some(Device::ClockGen) => {
                bus.clockgen_write(pkt.req[PKT_ADDR_IDX], pkt.req[PKT_DATA_IDX]);
                pkt.resp[PKT_ADDR_IDX] = pkt.req[PKT_ADDR_IDX];
                pkt.resp[PKT_DATA_IDX] = 0;
            }
            Some(Device::Config) => self.config_write(bus, ctrl.count, pkt),
            None => diag!("write with reserved device selector: 0x{:02x}", pkt.ctrl()),
        }
    }

    /// Emit up to `count` response units of the active read transfer.
    ///
    /// On the first unit of a transfer the parameter is resolved from the
    /// first requested offset and its value latched from the facade; each
    /// unit then returns one byte, LSB first. Once the parameter's width
    /// is exhausted the state resets and emission stops for this packet,
    /// even with units left in `count`: a batch never rolls into a second
    /// parameter.
    fn config_read<P: PeripheralBus>(&mut self, bus: &mut P, count: u8, pkt: &mut PacketBuf) {
        for i in 0..count as usize {
            if self.rd.is_idle() {
                self.rd.param = config_space::lookup(pkt.req[PKT_PAYLOAD_IDX]);
                self.rd.value = read_param(bus, self.rd.param);
            }

            let (addr, _) = pkt.req_unit(i);
            let byte = (self.rd.value >> (8 * self.rd.done)) as u8;
            pkt.put_resp_unit(i, addr.wrapping_sub(self.rd.param.start()), byte);
            self.rd.done += 1;

            if self.rd.done >= self.rd.param.len() {
                self.rd.reset();
                break;
            }
        }
    }

    /// Absorb up to `count` request units into the active write transfer.
    ///
    /// Each unit echoes its relative offset with a zero data byte (the
    /// protocol acknowledges, it never echoes written data) and shifts the
    /// incoming byte into the accumulator, LSB first. When the parameter's
    /// width is reached the facade write fires exactly once with the
    /// assembled value. An unmapped first offset resolves to the
    /// zero-length `Unknown` sentinel, so the unit loop is vacuous and the
    /// packet degenerates to a diagnosed no-op.
    fn config_write<P: PeripheralBus>(&mut self, bus: &mut P, count: u8, pkt: &mut PacketBuf) {
        if self.wr.is_idle() {
            self.wr.param = config_space::lookup(pkt.req[PKT_PAYLOAD_IDX]);
        }

        for i in 0..count as usize {
            if self.wr.done >= self.wr.param.len() {
                break;
            }

            let (addr, data) = pkt.req_unit(i);
            pkt.put_resp_unit(i, addr.wrapping_sub(self.wr.param.start()), 0);
            self.wr.value |= u64::from(data) << (8 * self.wr.done);
            self.wr.done += 1;
        }

        if self.wr.done >= self.wr.param.len() {
            write_param(bus, self.wr.param, self.wr.value);
            self.wr.reset();
        }
    }
}

impl Default for LegacyHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch a parameter's current value through the facade.
///
/// Write-only and unimplemented parameters return a placeholder 0 without
/// touching the facade. The default arm synthesizes an all-ones payload
/// for the `Unknown` sentinel.
fn read_param<P: PeripheralBus>(bus: &mut P, param: ConfigParam) -> u64 {
    match param {
        ConfigParam::ControlReg => u64::from(bus.control_reg_read()),
        ConfigParam::RxIqGain => u64::from(bus.iq_gain(Channel::Rx)),
        ConfigParam::RxIqPhase => u64::from(bus.iq_phase(Channel::Rx)),
        ConfigParam::TxIqGain => u64::from(bus.iq_gain(Channel::Tx)),
        ConfigParam::TxIqPhase => u64::from(bus.iq_phase(Channel::Tx)),
        ConfigParam::FpgaVersion => u64::from(bus.fpga_version().to_word()),
        ConfigParam::RxTimestamp => bus.timestamp(Channel::Rx),
        ConfigParam::TxTimestamp => bus.timestamp(Channel::Tx),
        ConfigParam::VctcxoTrim => {
            // TODO: return the cached trim word once the DAC driver keeps one
            diag!("vctcxo trim readback not implemented");
            0
        }
        ConfigParam::AuxSynth => {
            diag!("read attempted on write-only aux synth");
            0
        }
        ConfigParam::Expansion => u64::from(bus.expansion_read()),
        ConfigParam::ExpansionDir => u64::from(bus.expansion_dir_read()),
        ConfigParam::Unknown => {
            diag!("read of unmapped config offset");
            u64::MAX
        }
    }
}

/// Commit an assembled value to a parameter through the facade.
///
/// Timestamp writes clear the counter; the written value is discarded.
/// Writes to the read-only FPGA version and to the `Unknown` sentinel are
/// diagnosed no-ops.
fn write_param<P: PeripheralBus>(bus: &mut P, param: ConfigParam, value: u64) {
    match param {
        ConfigParam::ControlReg => bus.control_reg_write(value as u32),
        ConfigParam::RxIqGain => bus.set_iq_gain(Channel::Rx, value as u16),
        ConfigParam::RxIqPhase => bus.set_iq_phase(Channel::Rx, value as u16),
        ConfigParam::TxIqGain => bus.set_iq_gain(Channel::Tx, value as u16),
        ConfigParam::TxIqPhase => bus.set_iq_phase(Channel::Tx, value as u16),
        ConfigParam::FpgaVersion => {
            diag!("write attempted on read-only FPGA version");
        }
        ConfigParam::RxTimestamp => bus.timestamp_reset(Channel::Rx),
        ConfigParam::TxTimestamp => bus.timestamp_reset(Channel::Tx),
        ConfigParam::VctcxoTrim => bus.vctcxo_trim_write(value as u16),
        ConfigParam::AuxSynth => bus.aux_synth_write(value as u32),
        ConfigParam::Expansion => bus.expansion_write(value as u32),
        ConfigParam::ExpansionDir => bus.expansion_dir_write(value as u32),
        ConfigParam::Unknown => {
            diag!("write to unmapped config offset");
        }
    }
}
