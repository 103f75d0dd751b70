//! Register file: one storage bank behind an address window.
//!
//! A register file owns exactly one [`StorageBank`] and adds:
//! 1. **Ownership:** A base address and a window of `count * stride` address units.
//! 2. **Bounds checking:** Addresses outside the window read as zero and never write.
//! 3. **Access policy:** Read/write legality derived from the [`RegisterKind`].
//! 4. **WARL filtering:** An optional legality predicate that silently drops illegal values.

use std::fmt;

use serde::Deserialize;
use tracing::debug;

use crate::common::data::{Word, width_mask};
use crate::common::error::ConfigError;
use crate::config::RegisterFileConfig;
use crate::regmap::bank::{Commit, StorageBank, WritePort};
use crate::regmap::signals::BusSignals;
use crate::stats::DropReason;

/// Pure predicate deciding whether a value may be committed to a WARL file.
pub type LegalityFn = fn(Word) -> bool;

/// Access kind of a register file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum RegisterKind {
    /// Readable; writes are dropped.
    #[serde(alias = "RO", alias = "READ_ONLY")]
    ReadOnly,
    /// Writable; reads return zero.
    #[serde(alias = "WO", alias = "WRITE_ONLY")]
    WriteOnly,
    /// Readable and writable.
    #[default]
    #[serde(alias = "RW", alias = "READ_WRITE")]
    ReadWrite,
    /// Write-Any-Read-Legal: writes commit only if the legality predicate accepts them.
    #[serde(alias = "WARL")]
    WriteAnyReadLegal,
}

impl RegisterKind {
    /// Returns `true` if reads reach the bank.
    #[inline]
    pub const fn is_readable(self) -> bool {
        !matches!(self, Self::WriteOnly)
    }

    /// Returns `true` if writes may reach the bank.
    #[inline]
    pub const fn is_writable(self) -> bool {
        !matches!(self, Self::ReadOnly)
    }
}

impl fmt::Display for RegisterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ReadOnly => "RO",
            Self::WriteOnly => "WO",
            Self::ReadWrite => "RW",
            Self::WriteAnyReadLegal => "WARL",
        };
        f.write_str(s)
    }
}

/// Outcome of one clock edge on a register file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing was requested.
    Idle,
    /// The bank committed a write or reset.
    Committed(Commit),
    /// A write or reset was requested and silently dropped.
    Dropped(DropReason),
}

/// A bank of registers mapped at a base address.
#[derive(Clone, Debug)]
pub struct RegisterFile {
    name: String,
    description: String,
    descriptors: Vec<(String, String)>,
    base: u32,
    stride: u32,
    kind: RegisterKind,
    legality: Option<LegalityFn>,
    bounds_check: bool,
    bank: StorageBank,
    inputs: BusSignals,
    verdict: Option<DropReason>,
}

impl RegisterFile {
    /// Builds a register file from its configuration.
    ///
    /// A missing stride defaults to the word width in bytes.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] raised by the bank, then [`ConfigError::ZeroStride`]
    /// and [`ConfigError::WindowOverflow`] for an unaddressable window.
    pub fn new(config: RegisterFileConfig) -> Result<Self, ConfigError> {
        let stride = config.effective_stride();
        let bank = StorageBank::new(config.width, config.count, config.defaults)?;
        if stride == 0 {
            return Err(ConfigError::ZeroStride);
        }
        let span = config.count as u64 * stride as u64;
        if config.base as u64 + span > 1 << 32 {
            return Err(ConfigError::WindowOverflow {
                base: config.base,
                span,
            });
        }

        debug!(
            name = %config.name,
            base = config.base,
            width = config.width,
            count = config.count,
            stride,
            kind = %config.kind,
            "register file built"
        );

        Ok(Self {
            name: config.name,
            description: config.description,
            descriptors: config.descriptors,
            base: config.base,
            stride,
            kind: config.kind,
            legality: None,
            bounds_check: config.bounds_check,
            bank,
            inputs: BusSignals::IDLE,
            verdict: None,
        })
    }

    /// Attaches the predicate that gates commits to a WARL file.
    ///
    /// The predicate is consulted only for [`RegisterKind::WriteAnyReadLegal`].
    #[must_use]
    pub fn with_legality(mut self, legality: LegalityFn) -> Self {
        self.legality = Some(legality);
        self
    }

    /// Short name (e.g. `"cliccfg"`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Per-register descriptions, in declaration order.
    pub fn descriptors(&self) -> &[(String, String)] {
        &self.descriptors
    }

    /// Base address of the window.
    pub const fn base(&self) -> u32 {
        self.base
    }

    /// Word width in bits.
    pub const fn width(&self) -> u32 {
        self.bank.width()
    }

    /// Number of registers.
    pub fn count(&self) -> usize {
        self.bank.depth()
    }

    /// Address distance between consecutive registers.
    pub const fn stride(&self) -> u32 {
        self.stride
    }

    /// Access kind.
    pub const fn kind(&self) -> RegisterKind {
        self.kind
    }

    /// Whether out-of-window addresses are rejected.
    pub const fn bounds_check(&self) -> bool {
        self.bounds_check
    }

    /// First address past the window (may exceed `u32::MAX` by one window).
    pub fn end(&self) -> u64 {
        self.base as u64 + self.count() as u64 * self.stride as u64
    }

    /// Returns `true` if `address` is at or above the base.
    #[inline]
    pub const fn is_for_me(&self, address: u32) -> bool {
        address >= self.base
    }

    /// Returns `true` if `address` is at or past the end of the window.
    #[inline]
    pub fn out_of_bounds(&self, address: u32) -> bool {
        address as u64 >= self.end()
    }

    /// Returns `true` if this file accepts `address`.
    #[inline]
    pub fn claims(&self, address: u32) -> bool {
        self.is_for_me(address) && !self.out_of_bounds(address)
    }

    /// Translates an address to a slot index.
    ///
    /// Returns `None` when bounds checking rejects the address. Sub-stride
    /// offsets select the containing slot.
    pub fn local_index(&self, address: u32) -> Option<usize> {
        if self.bounds_check && !self.claims(address) {
            return None;
        }
        Some((address.wrapping_sub(self.base) / self.stride) as usize)
    }

    /// Combinational read of the register at `address`.
    ///
    /// Out-of-window addresses and write-only files read as zero.
    pub fn read(&self, address: u32) -> Word {
        if !self.kind.is_readable() {
            return 0;
        }
        self.local_index(address).map_or(0, |index| self.bank.read(index))
    }

    /// Value currently presented on the read port for the driven address.
    pub fn read_data(&self) -> Word {
        self.read(self.inputs.address)
    }

    /// Current value of slot `index`, bypassing the address decode.
    pub fn peek(&self, index: usize) -> Word {
        self.bank.read(index)
    }

    /// Configured reset value of slot `index`.
    pub fn default_of(&self, index: usize) -> Word {
        self.bank.default_of(index)
    }

    /// Signals currently driven into the file.
    pub const fn inputs(&self) -> BusSignals {
        self.inputs
    }

    /// Drives the file's inputs for the current cycle.
    ///
    /// Computes the bank's write port: nothing is forwarded for an
    /// out-of-window address, the enable is masked off for a read-only file,
    /// and for a WARL file the enable is gated by the legality predicate.
    /// Reset is forwarded for any in-window address.
    pub fn drive(&mut self, inputs: BusSignals) {
        self.inputs = inputs;
        self.verdict = None;

        let Some(index) = self.local_index(inputs.address) else {
            if inputs.is_active() {
                self.verdict = Some(DropReason::OutOfBounds);
            }
            self.bank.drive(WritePort::IDLE);
            return;
        };

        let mut enable = inputs.write_enable;
        if enable && !inputs.reset {
            if !self.kind.is_writable() {
                self.verdict = Some(DropReason::ReadOnly);
                enable = false;
            } else if self.kind == RegisterKind::WriteAnyReadLegal {
                let value = inputs.write_data & width_mask(self.width());
                if !self.legality.is_none_or(|legal| legal(value)) {
                    self.verdict = Some(DropReason::IllegalValue);
                    enable = false;
                }
            }
        }

        self.bank.drive(WritePort {
            index,
            data: inputs.write_data,
            enable,
            reset: inputs.reset,
        });
    }

    /// Clock edge: commits the driven write port.
    pub fn tick(&mut self) -> TickOutcome {
        match self.bank.tick() {
            Commit::Idle => match self.verdict {
                Some(reason) => {
                    debug!(
                        file = %self.name,
                        address = self.inputs.address,
                        data = self.inputs.write_data,
                        ?reason,
                        "write dropped"
                    );
                    TickOutcome::Dropped(reason)
                }
                None if self.inputs.is_active() => {
                    // Unchecked file addressed past its bank.
                    TickOutcome::Dropped(DropReason::OutOfBounds)
                }
                None => TickOutcome::Idle,
            },
            commit => TickOutcome::Committed(commit),
        }
    }
}

impl fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Register file: {} @ {:#06x}", self.name, self.base)?;
        writeln!(f, "  description : {}", self.description)?;
        writeln!(f, "  count       : {}", self.count())?;
        writeln!(f, "  width       : {} bits", self.width())?;
        writeln!(f, "  stride      : {} bytes", self.stride)?;
        writeln!(f, "  kind        : {}", self.kind)?;
        for (reg, text) in &self.descriptors {
            writeln!(f, "    {reg:<12} {text}")?;
        }
        Ok(())
    }
}
