//! CLIC address map constants.
//!
//! # Memory Map
//!
//! * `0x0000`: `cliccfg` (1 byte, RW)
//! * `0x0004`: `clicinfo` (4 bytes, RO)
//! * `0x0040`: `clicinttrig[0..32]` (4 bytes each, RW)
//! * `0x1000 + 4*i`: `clicintip[i]`, `clicintie[i]`, `clicintattr[i]`, `clicintctl[i]`
//!   interleaved byte by byte
//!
//! Everything else below `0x1000` is reserved and reads as zero.

/// Offset of the `cliccfg` register.
pub const CLICCFG_BASE: u32 = 0x0000;

/// Offset of the `clicinfo` register.
pub const CLICINFO_BASE: u32 = 0x0004;

/// Offset of the first `clicinttrig` register.
pub const CLICINTTRIG_BASE: u32 = 0x0040;

/// Offset of the first quad-mapped byte (`clicintip[0]`).
///
/// Addresses at or above this value are decoded by lane.
pub const CLICINTIP_BASE: u32 = 0x1000;

/// Offset of `clicintie[0]`.
pub const CLICINTIE_BASE: u32 = 0x1001;

/// Offset of `clicintattr[0]`.
pub const CLICINTATTR_BASE: u32 = 0x1002;

/// Offset of `clicintctl[0]`.
pub const CLICINTCTL_BASE: u32 = 0x1003;

/// Number of interleaved arrays in the quad-mapped region.
pub const QUAD_LANES: u32 = 4;

/// Address distance between consecutive elements of one quad-mapped array.
pub const QUAD_STRIDE: u32 = QUAD_LANES;

/// Mask selecting the lane bits of a quad-relative address.
pub const LANE_MASK: u32 = QUAD_LANES - 1;

/// Maximum number of interrupt sources (elements per quad-mapped array).
pub const MAX_SOURCES: usize = 4096;

/// Number of `clicinttrig` registers.
pub const NUM_TRIGGERS: usize = 32;

/// Width of the shared read/write data bus in bits.
pub const BUS_WIDTH: u32 = 32;

/// Size of the decoded CLIC window on an SoC bus (`0x0000..0x5000`).
pub const CLIC_WINDOW_SIZE: u64 = CLICINTIP_BASE as u64 + (MAX_SOURCES as u64) * QUAD_STRIDE as u64;
