//! Bus-side input signals.
//!
//! The same bundle drives the map from the bus master and each file from the
//! map's decoder. Signals are plain values recomputed every cycle; nothing in
//! here carries state between cycles.

use crate::common::data::Word;

/// Inputs presented to a register map or register file for one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BusSignals {
    /// Byte address.
    pub address: u32,
    /// Data to write; truncated to the width of the target file.
    pub write_data: Word,
    /// Commit `write_data` on the next tick.
    pub write_enable: bool,
    /// Restore the addressed slot to its default on the next tick.
    pub reset: bool,
}

impl BusSignals {
    /// All signals deasserted, address zero.
    pub const IDLE: Self = Self {
        address: 0,
        write_data: 0,
        write_enable: false,
        reset: false,
    };

    /// Address only: a pure read cycle.
    #[inline]
    pub const fn read(address: u32) -> Self {
        Self {
            address,
            write_data: 0,
            write_enable: false,
            reset: false,
        }
    }

    /// Address, data and an asserted write enable.
    #[inline]
    pub const fn write(address: u32, write_data: Word) -> Self {
        Self {
            address,
            write_data,
            write_enable: true,
            reset: false,
        }
    }

    /// Address and an asserted reset.
    #[inline]
    pub const fn reset(address: u32) -> Self {
        Self {
            address,
            write_data: 0,
            write_enable: false,
            reset: true,
        }
    }

    /// The same cycle presented at another address.
    #[inline]
    pub const fn at(self, address: u32) -> Self {
        Self { address, ..self }
    }

    /// Returns `true` if the cycle may mutate state on the next tick.
    #[inline]
    pub const fn is_active(&self) -> bool {
        self.write_enable || self.reset
    }
}
