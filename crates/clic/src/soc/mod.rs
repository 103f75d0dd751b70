//! System-on-Chip attachment.
//!
//! The register map moves one register per cycle; a CPU issues loads and
//! stores of 1, 2, 4 or 8 bytes at a physical address. [`Clic`] sits between
//! the two and turns each access into the map cycles it implies.

/// CLIC register space as a memory-mapped device.
pub mod clic;

pub use clic::Clic;
