//! Access statistics for the register map.
//!
//! The bus never reports errors, so these counters are the only record of
//! traffic that was silently absorbed. It tracks:
//! 1. **Cycles:** Clock edges applied to the map.
//! 2. **Commits:** Writes and resets that reached a bank.
//! 3. **Drops:** Requested writes discarded, split by reason.

use std::fmt;

/// Why a requested write or reset never reached a bank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DropReason {
    /// The address fell outside the selected file's window.
    OutOfBounds,
    /// The selected file is read-only.
    ReadOnly,
    /// A WARL file rejected the value.
    IllegalValue,
}

/// Counters of bus traffic seen by a register map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccessStats {
    /// Clock edges applied.
    pub ticks: u64,
    /// Writes committed to a bank.
    pub writes: u64,
    /// Slots restored to their default.
    pub resets: u64,
    /// Requests outside the selected file's window.
    pub out_of_bounds: u64,
    /// Write requests to read-only files.
    pub read_only: u64,
    /// Write requests rejected by a legality predicate.
    pub illegal_values: u64,
}

impl AccessStats {
    /// Counts one dropped request.
    pub const fn record_drop(&mut self, reason: DropReason) {
        match reason {
            DropReason::OutOfBounds => self.out_of_bounds += 1,
            DropReason::ReadOnly => self.read_only += 1,
            DropReason::IllegalValue => self.illegal_values += 1,
        }
    }

    /// Total requests that were dropped for any reason.
    pub const fn dropped(&self) -> u64 {
        self.out_of_bounds + self.read_only + self.illegal_values
    }
}

impl fmt::Display for AccessStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "CLIC REGISTER MAP ACCESSES")?;
        writeln!(f, "  map.ticks              {}", self.ticks)?;
        writeln!(f, "  map.writes             {}", self.writes)?;
        writeln!(f, "  map.resets             {}", self.resets)?;
        writeln!(f, "  drop.out_of_bounds     {}", self.out_of_bounds)?;
        writeln!(f, "  drop.read_only         {}", self.read_only)?;
        writeln!(f, "  drop.illegal_value     {}", self.illegal_values)?;
        writeln!(f, "----------------------------------------------------------")
    }
}
