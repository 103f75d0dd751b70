//! Register map building blocks.

/// Address decoding tables.
pub mod decode;

/// Register file access rules.
pub mod file;
