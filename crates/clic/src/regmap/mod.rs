//! Address decoding and register-bank engine.
//!
//! Built leaves first:
//! 1. **Bank:** Clocked word storage with per-slot reset values.
//! 2. **File:** A bank behind a bounds-checked address window and an access policy.
//! 3. **Decode:** Pure direct/quad address decoding and per-file signal routing.
//! 4. **Map:** The seven CLIC files behind one shared bus interface.

/// Clocked storage bank.
pub mod bank;

/// Pure address decoder.
pub mod decode;

/// Register file.
pub mod file;

/// CLIC register map.
pub mod map;

/// Bus input signals.
pub mod signals;

pub use bank::{Commit, StorageBank, WritePort};
pub use decode::{BaseAddress, FileId, Route, decode, route};
pub use file::{LegalityFn, RegisterFile, RegisterKind, TickOutcome};
pub use map::RegisterMap;
pub use signals::BusSignals;
