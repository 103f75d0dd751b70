//! Address decoder for the CLIC register map.
//!
//! Decoding is a pure function of the bus address. Two schemes partition the
//! 32-bit space:
//! 1. **Direct-mapped** (`address < 0x1000`): three consecutive half-open
//!    windows, each owned by one file which sees the address unchanged.
//! 2. **Quad-mapped** (`address >= 0x1000`): the two low bits of the offset
//!    from `0x1000` select one of four interleaved files; the file sees the
//!    offset with the lane bits cleared.
//!
//! The two branches are exclusive on the quad threshold and each branch's
//! cases are exclusive on disjoint windows or lanes, so exactly one file is
//! selected for every address.

use std::fmt;

use crate::common::constants::{
    CLICCFG_BASE, CLICINFO_BASE, CLICINTATTR_BASE, CLICINTCTL_BASE, CLICINTIE_BASE,
    CLICINTIP_BASE, CLICINTTRIG_BASE, LANE_MASK,
};
use crate::regmap::signals::BusSignals;

/// Identifies one of the seven register files of the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FileId {
    /// `cliccfg`: global configuration byte.
    Cfg,
    /// `clicinfo`: read-only information word.
    Info,
    /// `clicinttrig[0..32]`: trigger registers.
    IntTrig,
    /// `clicintip[i]`: interrupt pending bytes (lane 0).
    IntIp,
    /// `clicintie[i]`: interrupt enable bytes (lane 1).
    IntIe,
    /// `clicintattr[i]`: interrupt attribute bytes (lane 2).
    IntAttr,
    /// `clicintctl[i]`: interrupt control bytes (lane 3).
    IntCtl,
}

/// Number of register files in the map.
pub const FILE_COUNT: usize = 7;

impl FileId {
    /// Every file, in storage order.
    pub const ALL: [Self; FILE_COUNT] = [
        Self::Cfg,
        Self::Info,
        Self::IntTrig,
        Self::IntIp,
        Self::IntIe,
        Self::IntAttr,
        Self::IntCtl,
    ];

    /// Position of the file in [`FileId::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Register name as it appears in the address map.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cfg => "cliccfg",
            Self::Info => "clicinfo",
            Self::IntTrig => "clicinttrig",
            Self::IntIp => "clicintip",
            Self::IntIe => "clicintie",
            Self::IntAttr => "clicintattr",
            Self::IntCtl => "clicintctl",
        }
    }

    /// Returns `true` for the four lane-interleaved files.
    pub const fn is_quad_mapped(self) -> bool {
        self.lane().is_some()
    }

    /// Lane of a quad-mapped file, `None` for a direct-mapped one.
    pub const fn lane(self) -> Option<u32> {
        match self {
            Self::IntIp => Some(0),
            Self::IntIe => Some(1),
            Self::IntAttr => Some(2),
            Self::IntCtl => Some(3),
            Self::Cfg | Self::Info | Self::IntTrig => None,
        }
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named base addresses of the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BaseAddress {
    /// `0x0000`
    Cliccfg,
    /// `0x0004`
    Clicinfo,
    /// `0x0040`
    Clicinttrig,
    /// `0x1000`
    Clicintip,
    /// `0x1001`
    Clicintie,
    /// `0x1002`
    Clicintattr,
    /// `0x1003`
    Clicintctl,
}

impl BaseAddress {
    /// Every base address in ascending order.
    pub const ALL: [Self; 7] = [
        Self::Cliccfg,
        Self::Clicinfo,
        Self::Clicinttrig,
        Self::Clicintip,
        Self::Clicintie,
        Self::Clicintattr,
        Self::Clicintctl,
    ];

    /// Base addresses of the writable registers.
    pub const WRITABLE: [Self; 6] = [
        Self::Cliccfg,
        Self::Clicinttrig,
        Self::Clicintie,
        Self::Clicintattr,
        Self::Clicintctl,
        Self::Clicintip,
    ];

    /// Bus address.
    pub const fn value(self) -> u32 {
        match self {
            Self::Cliccfg => CLICCFG_BASE,
            Self::Clicinfo => CLICINFO_BASE,
            Self::Clicinttrig => CLICINTTRIG_BASE,
            Self::Clicintip => CLICINTIP_BASE,
            Self::Clicintie => CLICINTIE_BASE,
            Self::Clicintattr => CLICINTATTR_BASE,
            Self::Clicintctl => CLICINTCTL_BASE,
        }
    }

    /// File that owns this address.
    pub const fn file(self) -> FileId {
        match self {
            Self::Cliccfg => FileId::Cfg,
            Self::Clicinfo => FileId::Info,
            Self::Clicinttrig => FileId::IntTrig,
            Self::Clicintip => FileId::IntIp,
            Self::Clicintie => FileId::IntIe,
            Self::Clicintattr => FileId::IntAttr,
            Self::Clicintctl => FileId::IntCtl,
        }
    }
}

/// Quad-mapped files indexed by lane.
pub const QUAD_FILES: [FileId; 4] = [FileId::IntIp, FileId::IntIe, FileId::IntAttr, FileId::IntCtl];

/// Result of decoding one address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    /// Selected file.
    pub file: FileId,
    /// Address presented to the selected file.
    pub address: u32,
}

/// Returns `true` if `address` is decoded by lane.
#[inline]
pub const fn is_quad_mapped(address: u32) -> bool {
    address >= CLICINTIP_BASE
}

/// Decodes an address to the file that owns it.
///
/// Total over the 32-bit space: every address selects exactly one file. An
/// address the selected file does not claim is rejected by that file's
/// bounds check, so it reads as zero and drops writes.
pub const fn decode(address: u32) -> Route {
    if is_quad_mapped(address) {
        let relative = address - CLICINTIP_BASE;
        Route {
            file: QUAD_FILES[(relative & LANE_MASK) as usize],
            address: relative & !LANE_MASK,
        }
    } else {
        let file = match address {
            CLICCFG_BASE..CLICINFO_BASE => FileId::Cfg,
            CLICINFO_BASE..CLICINTTRIG_BASE => FileId::Info,
            _ => FileId::IntTrig,
        };
        Route { file, address }
    }
}

/// Splits the bus into per-file inputs for one cycle.
///
/// The selected file receives the write data, enable and reset at its
/// decoded address. Every other file sees idle inputs, so exactly one entry
/// of the result can have `write_enable` or `reset` asserted.
pub fn route(bus: BusSignals) -> (Route, [BusSignals; FILE_COUNT]) {
    let mut ports = [BusSignals::IDLE; FILE_COUNT];
    let selected = decode(bus.address);
    ports[selected.file.index()] = bus.at(selected.address);
    (selected, ports)
}
