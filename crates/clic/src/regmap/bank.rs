//! Storage bank: a fixed array of words behind one read and one write port.
//!
//! The bank models clocked storage. It provides:
//! 1. **Read port:** Combinational; returns the current slot value with no side effect.
//! 2. **Write port:** Driven during a cycle, committed only by [`StorageBank::tick`].
//! 3. **Synchronous reset:** Restores the addressed slot to its configured default,
//!    taking priority over a write in the same cycle.

use tracing::trace;

use crate::common::data::{Word, width_mask};
use crate::common::error::ConfigError;

/// Signals on a bank's write port for the current cycle.
///
/// The port holds its value across ticks until driven again, like a wire
/// held by its driver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WritePort {
    /// Slot to write or reset.
    pub index: usize,
    /// Value to store when `enable` is set.
    pub data: Word,
    /// Commit `data` on the next tick.
    pub enable: bool,
    /// Restore the slot default on the next tick (wins over `enable`).
    pub reset: bool,
}

impl WritePort {
    /// A port that changes nothing on the next tick.
    pub const IDLE: Self = Self {
        index: 0,
        data: 0,
        enable: false,
        reset: false,
    };

    /// Returns `true` if the next tick will mutate the addressed slot.
    #[inline]
    pub const fn is_active(&self) -> bool {
        self.enable || self.reset
    }
}

/// What a tick did to the bank.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commit {
    /// No slot changed.
    Idle,
    /// A slot was restored to its default.
    Reset {
        /// Slot index.
        index: usize,
    },
    /// A slot took a new value.
    Write {
        /// Slot index.
        index: usize,
        /// Stored value (already masked to the bank width).
        value: Word,
    },
}

/// Fixed-width, fixed-depth word storage with per-slot reset values.
#[derive(Clone, Debug)]
pub struct StorageBank {
    width: u32,
    cells: Vec<Word>,
    defaults: Vec<Word>,
    port: WritePort,
}

impl StorageBank {
    /// Creates a bank of `depth` slots, each `width` bits wide.
    ///
    /// # Arguments
    ///
    /// * `width` - Word width in bits (1..=32).
    /// * `depth` - Number of slots.
    /// * `defaults` - Optional per-slot reset values; must have exactly `depth` entries.
    ///   Slots start at their default, or zero when none are given.
    ///
    /// # Errors
    ///
    /// [`ConfigError::DefaultsLength`] when `defaults` is the wrong length,
    /// [`ConfigError::InvalidWidth`] or [`ConfigError::ZeroDepth`] for a degenerate shape.
    pub fn new(width: u32, depth: usize, defaults: Option<Vec<Word>>) -> Result<Self, ConfigError> {
        if width == 0 || width > 32 {
            return Err(ConfigError::InvalidWidth(width));
        }
        if depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        let mask = width_mask(width);
        let defaults = match defaults {
            Some(values) if values.len() != depth => {
                return Err(ConfigError::DefaultsLength {
                    expected: depth,
                    found: values.len(),
                });
            }
            Some(values) => values.into_iter().map(|v| v & mask).collect(),
            None => vec![0; depth],
        };

        Ok(Self {
            width,
            cells: defaults.clone(),
            defaults,
            port: WritePort::IDLE,
        })
    }

    /// Word width in bits.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of slots.
    #[inline]
    pub fn depth(&self) -> usize {
        self.cells.len()
    }

    /// Configured reset value of a slot, or zero for an index past the end.
    #[inline]
    pub fn default_of(&self, index: usize) -> Word {
        self.defaults.get(index).copied().unwrap_or(0)
    }

    /// Read port: current value of slot `index`.
    ///
    /// Bounds are the owning file's concern; an index past the end reads as zero.
    #[inline]
    pub fn read(&self, index: usize) -> Word {
        self.cells.get(index).copied().unwrap_or(0)
    }

    /// Drives the write port for the current cycle.
    ///
    /// Nothing is stored until the next [`tick`](Self::tick).
    #[inline]
    pub fn drive(&mut self, port: WritePort) {
        self.port = port;
    }

    /// Signals currently on the write port.
    #[inline]
    pub const fn port(&self) -> WritePort {
        self.port
    }

    /// Clock edge: applies the driven write port.
    ///
    /// Reset restores the addressed slot's default; otherwise an enabled port
    /// stores its data truncated to the bank width. An index past the end
    /// leaves the bank untouched.
    pub fn tick(&mut self) -> Commit {
        let WritePort {
            index,
            data,
            enable,
            reset,
        } = self.port;
        if !(reset || enable) {
            return Commit::Idle;
        }
        let Some(default) = self.defaults.get(index).copied() else {
            return Commit::Idle;
        };
        let Some(cell) = self.cells.get_mut(index) else {
            return Commit::Idle;
        };

        if reset {
            *cell = default;
            trace!(index, value = default, "bank slot reset");
            Commit::Reset { index }
        } else {
            let value = data & width_mask(self.width);
            *cell = value;
            trace!(index, value, "bank slot written");
            Commit::Write { index, value }
        }
    }
}
