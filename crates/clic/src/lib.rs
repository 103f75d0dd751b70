//! CLIC register space model.
//!
//! This crate models the memory-mapped register space of a RISC-V Core-Local
//! Interrupt Controller at cycle level:
//! 1. **Storage:** Clocked banks with per-slot reset values.
//! 2. **Register files:** Bounds-checked address windows with RO/WO/RW/WARL policies.
//! 3. **Register map:** Direct-mapped and lane-interleaved decoding behind one bus.
//! 4. **SoC:** A memory-mapped device adapting CPU load/store widths to map cycles.
//! 5. **Configuration and statistics:** JSON configuration and dropped-traffic counters.

/// Common types and constants (address map, bus word, errors).
pub mod common;
/// Configuration (defaults, map layout, register file descriptions).
pub mod config;
/// Storage banks, register files, address decoding and the register map.
pub mod regmap;
/// System-on-chip attachment (CLIC as a memory-mapped device).
pub mod soc;
/// Access statistics.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// The CLIC register map; construct with `RegisterMap::new`.
pub use crate::regmap::RegisterMap;
/// Memory-mapped device wrapping the register map.
pub use crate::soc::Clic;
