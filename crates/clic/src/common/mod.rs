//! Common types and constants shared by every part of the register model.
//!
//! This module provides the fundamental building blocks used by the banks,
//! files and the map. It includes:
//! 1. **Constants:** The fixed CLIC address map and decode parameters.
//! 2. **Data:** The bus word type and width-masking helpers.
//! 3. **Error Handling:** Construction-time configuration errors.

/// Address map constants (base addresses, quad threshold, lane stride).
pub mod constants;

/// Bus word type and width helpers.
pub mod data;

/// Configuration error type.
pub mod error;

pub use constants::{CLICINTIP_BASE, QUAD_LANES, QUAD_STRIDE};
pub use data::{Word, width_mask};
pub use error::ConfigError;
