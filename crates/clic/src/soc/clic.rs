//! Core-Local Interrupt Controller (CLIC) register space as a memory-mapped device.
//!
//! Offsets are relative to [`Clic::address_range`]. Access widths map onto
//! register map cycles as follows:
//! 1. **Aligned word, direct region** (`< 0x1000`): one map cycle.
//! 2. **Byte:** in the direct region, reads shift the containing word and
//!    stores read-modify-write it; in the quad region every byte is its own
//!    register, so a byte is one map cycle.
//! 3. **Everything else** (half-words, misaligned words, any word in the quad
//!    region): split into bytes, lowest address first.
//! 4. **Double-word:** two word accesses.
//!
//! # Memory Map
//!
//! * `0x0000`: cliccfg
//! * `0x0004`: clicinfo
//! * `0x0040`: clicinttrig[0..32]
//! * `0x1000`: clicintip/clicintie/clicintattr/clicintctl, interleaved

use crate::common::constants::CLIC_WINDOW_SIZE;
use crate::common::data::Word;
use crate::common::error::ConfigError;
use crate::config::Config;
use crate::regmap::decode::is_quad_mapped;
use crate::regmap::map::RegisterMap;

/// CLIC device structure.
#[derive(Clone, Debug)]
pub struct Clic {
    /// Base physical address of the device.
    base_addr: u64,
    /// Register space.
    map: RegisterMap,
}

impl Clic {
    /// Creates a CLIC at `config.map.base_addr`.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] raised while building the register map.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            base_addr: config.map.base_addr,
            map: RegisterMap::new(config)?,
        })
    }

    /// `(base, size)` of the decoded window in physical address space.
    pub const fn address_range(&self) -> (u64, u64) {
        (self.base_addr, CLIC_WINDOW_SIZE)
    }

    /// The register map behind the device.
    pub const fn map(&self) -> &RegisterMap {
        &self.map
    }

    /// Mutable access to the register map.
    pub const fn map_mut(&mut self) -> &mut RegisterMap {
        &mut self.map
    }

    /// Reads one byte.
    pub fn read_u8(&mut self, offset: u64) -> u8 {
        let Some(addr) = Self::addr(offset) else {
            return 0;
        };
        if is_quad_mapped(addr) {
            self.map.read(addr) as u8
        } else {
            let shift = (addr & 3) * 8;
            (self.map.read(addr & !3) >> shift) as u8
        }
    }

    /// Reads two bytes (little-endian).
    pub fn read_u16(&mut self, offset: u64) -> u16 {
        self.read_bytes(offset, 2) as u16
    }

    /// Reads four bytes (little-endian).
    pub fn read_u32(&mut self, offset: u64) -> u32 {
        match Self::aligned_direct(offset) {
            Some(addr) => self.map.read(addr),
            None => self.read_bytes(offset, 4) as u32,
        }
    }

    /// Reads eight bytes (little-endian).
    pub fn read_u64(&mut self, offset: u64) -> u64 {
        let lo = self.read_u32(offset) as u64;
        let hi = self.read_u32(offset.saturating_add(4)) as u64;
        lo | (hi << 32)
    }

    /// Writes one byte.
    pub fn write_u8(&mut self, offset: u64, val: u8) {
        let Some(addr) = Self::addr(offset) else {
            return;
        };
        if is_quad_mapped(addr) {
            self.map.write(addr, val as Word);
        } else {
            let aligned = addr & !3;
            let shift = (addr & 3) * 8;
            let old = self.map.read(aligned);
            let merged = (old & !(0xFF << shift)) | ((val as Word) << shift);
            self.map.write(aligned, merged);
        }
    }

    /// Writes two bytes (little-endian).
    pub fn write_u16(&mut self, offset: u64, val: u16) {
        self.write_bytes(offset, &val.to_le_bytes());
    }

    /// Writes four bytes (little-endian).
    pub fn write_u32(&mut self, offset: u64, val: u32) {
        match Self::aligned_direct(offset) {
            Some(addr) => self.map.write(addr, val),
            None => self.write_bytes(offset, &val.to_le_bytes()),
        }
    }

    /// Writes eight bytes (little-endian).
    pub fn write_u64(&mut self, offset: u64, val: u64) {
        self.write_u32(offset, val as u32);
        self.write_u32(offset.saturating_add(4), (val >> 32) as u32);
    }

    /// Map address of a device offset; offsets beyond 32 bits decode nowhere.
    fn addr(offset: u64) -> Option<u32> {
        u32::try_from(offset).ok()
    }

    /// Map address of a word access that is a single map cycle.
    fn aligned_direct(offset: u64) -> Option<u32> {
        Self::addr(offset).filter(|&addr| addr & 3 == 0 && !is_quad_mapped(addr))
    }

    fn read_bytes(&mut self, offset: u64, len: u64) -> u64 {
        (0..len).fold(0, |acc, i| {
            acc | ((self.read_u8(offset.saturating_add(i)) as u64) << (i * 8))
        })
    }

    fn write_bytes(&mut self, offset: u64, bytes: &[u8]) {
        for (i, &byte) in (0u64..).zip(bytes) {
            self.write_u8(offset.saturating_add(i), byte);
        }
    }
}
