//! Configuration space address ranges
//!
//! The configuration device exposes a flat, byte-addressable space in
//! which each logical parameter owns a fixed `(start, length)` slice.
//! Blocks wired to the softcore's GPIOs are grouped under this single
//! device selector because the control byte only has two selector bits;
//! over time the space has been overloaded with timestamp counters, the
//! trim DAC, and the expansion port.
//!
//! The range table is fixed by the host-side driver and must be reproduced
//! exactly between firmware revisions.

/// One logical parameter of the configuration space.
///
/// `Unknown` is a reserved sentinel for unmapped offsets: it lies outside
/// every valid range and has length zero, which the transfer loops use as
/// an explicit early-exit condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigParam {
    /// FPGA control register
    ControlReg,
    /// RX IQ balance gain correction
    RxIqGain,
    /// RX IQ balance phase correction
    RxIqPhase,
    /// TX IQ balance gain correction
    TxIqGain,
    /// TX IQ balance phase correction
    TxIqPhase,
    /// FPGA version word (read-only)
    FpgaVersion,
    /// RX timestamp counter (read/clear)
    RxTimestamp,
    /// TX timestamp counter (read/clear)
    TxTimestamp,
    /// VCTCXO trim DAC
    VctcxoTrim,
    /// Auxiliary synthesizer (write-only)
    AuxSynth,
    /// Expansion port I/Os
    Expansion,
    /// Expansion port direction control
    ExpansionDir,
    /// Reserved for unmapped offsets
    Unknown,
}

impl ConfigParam {
    /// First offset of this parameter's range.
    #[must_use]
    pub const fn start(self) -> u8 {
        match self {
            Self::ControlReg => 0,
            Self::RxIqGain => 4,
            Self::RxIqPhase => 6,
            Self::TxIqGain => 8,
            Self::TxIqPhase => 10,
            Self::FpgaVersion => 12,
            Self::RxTimestamp => 16,
            Self::TxTimestamp => 24,
            Self::VctcxoTrim => 34,
            Self::AuxSynth => 36,
            Self::Expansion => 40,
            Self::ExpansionDir => 44,
            Self::Unknown => 255,
        }
    }

    /// Width of this parameter in bytes.
    #[must_use]
    pub const fn len(self) -> u8 {
        match self {
            Self::ControlReg | Self::FpgaVersion | Self::AuxSynth | Self::Expansion
            | Self::ExpansionDir => 4,
            Self::RxIqGain | Self::RxIqPhase | Self::TxIqGain | Self::TxIqPhase
            | Self::VctcxoTrim => 2,
            Self::RxTimestamp | Self::TxTimestamp => 8,
            Self::Unknown => 0,
        }
    }

    /// Whether `offset` falls inside this parameter's range.
    #[must_use]
    pub const fn contains(self, offset: u8) -> bool {
        self.len() != 0 && offset >= self.start() && offset < self.start() + self.len()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigParam {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::ControlReg => defmt::write!(f, "CONTROL_REG"),
            Self::RxIqGain => defmt::write!(f, "RX_IQ_GAIN"),
            Self::RxIqPhase => defmt::write!(f, "RX_IQ_PHASE"),
            Self::TxIqGain => defmt::write!(f, "TX_IQ_GAIN"),
            Self::TxIqPhase => defmt::write!(f, "TX_IQ_PHASE"),
            Self::FpgaVersion => defmt::write!(f, "FPGA_VERSION"),
            Self::RxTimestamp => defmt::write!(f, "RX_TIMESTAMP"),
            Self::TxTimestamp => defmt::write!(f, "TX_TIMESTAMP"),
            Self::VctcxoTrim => defmt::write!(f, "VCTCXO_TRIM"),
            Self::AuxSynth => defmt::write!(f, "AUX_SYNTH"),
            Self::Expansion => defmt::write!(f, "EXPANSION"),
            Self::ExpansionDir => defmt::write!(f, "EXPANSION_DIR"),
            Self::Unknown => defmt::write!(f, "UNKNOWN"),
        }
    }
}

/// Addressable parameters, scanned in order by [`lookup`].
///
/// Ranges must not overlap; gaps between them resolve to
/// [`ConfigParam::Unknown`].
pub const PARAMS: [ConfigParam; 12] = [
    ConfigParam::ControlReg,
    ConfigParam::RxIqGain,
    ConfigParam::RxIqPhase,
    ConfigParam::TxIqGain,
    ConfigParam::TxIqPhase,
    ConfigParam::FpgaVersion,
    ConfigParam::RxTimestamp,
    ConfigParam::TxTimestamp,
    ConfigParam::VctcxoTrim,
    ConfigParam::AuxSynth,
    ConfigParam::Expansion,
    ConfigParam::ExpansionDir,
];

/// Resolve a configuration space offset to its owning parameter.
///
/// Total over the full 8-bit offset space: unmapped offsets return
/// [`ConfigParam::Unknown`].
#[must_use]
pub fn lookup(offset: u8) -> ConfigParam {
    PARAMS
        .iter()
        .copied()
        .find(|p| p.contains(offset))
        .unwrap_or(ConfigParam::Unknown)
}
