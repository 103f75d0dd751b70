//! Configuration for the CLIC register model.
//!
//! This module defines the structures used to parameterize the model. It provides:
//! 1. **Defaults:** The fixed CLIC address map and reset values.
//! 2. **Structures:** General options, the map configuration, and a generic
//!    register file description.
//!
//! Configuration is supplied as JSON (`Config::from_json`) or built from
//! `Config::default()`.

use serde::Deserialize;

use crate::common::constants::MAX_SOURCES;
use crate::common::data::{Word, width_bytes};
use crate::common::error::ConfigError;
use crate::regmap::file::RegisterKind;

/// Default configuration constants.
mod defaults {
    /// Physical base of the CLIC window on an SoC bus.
    pub const CLIC_BASE: u64 = 0x0280_0000;

    /// Number of interrupt sources backed by the quad-mapped arrays.
    pub const NUM_SOURCES: usize = super::MAX_SOURCES;
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use clic_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_accesses": true },
///     "map": { "num_sources": 64, "clicinfo_default": 1 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_accesses);
/// assert_eq!(config.map.num_sources, 64);
/// assert_eq!(config.map.clicinfo_default, 1);
/// assert_eq!(config.map.cliccfg_default, 0);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General options.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Register map layout.
    #[serde(default)]
    pub map: MapConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Json`] for malformed text, or any validation error.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values the type system cannot.
    ///
    /// # Errors
    ///
    /// [`ConfigError::TooManySources`] or [`ConfigError::ZeroDepth`] for an
    /// unusable source count.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        self.map.validate()
    }
}

/// General options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Log every bus transaction issued through the map helpers at trace level.
    #[serde(default)]
    pub trace_accesses: bool,
}

/// Layout and reset values of the CLIC register map.
#[derive(Debug, Clone, Deserialize)]
pub struct MapConfig {
    /// Elements in each quad-mapped array (`clicintip` .. `clicintctl`).
    #[serde(default = "MapConfig::default_num_sources")]
    pub num_sources: usize,

    /// Physical base address when attached to an SoC bus.
    #[serde(default = "MapConfig::default_base_addr")]
    pub base_addr: u64,

    /// Reset value of `cliccfg`.
    #[serde(default)]
    pub cliccfg_default: Word,

    /// Reset value of `clicinfo`.
    #[serde(default)]
    pub clicinfo_default: Word,

    /// Reset value of every `clicinttrig` register.
    #[serde(default)]
    pub clicinttrig_default: Word,

    /// Reset value of every `clicintip` byte.
    #[serde(default)]
    pub clicintip_default: Word,

    /// Reset value of every `clicintie` byte.
    #[serde(default)]
    pub clicintie_default: Word,

    /// Reset value of every `clicintattr` byte.
    #[serde(default)]
    pub clicintattr_default: Word,

    /// Reset value of every `clicintctl` byte.
    #[serde(default)]
    pub clicintctl_default: Word,
}

impl MapConfig {
    fn default_num_sources() -> usize {
        defaults::NUM_SOURCES
    }

    fn default_base_addr() -> u64 {
        defaults::CLIC_BASE
    }

    /// Checks the source count against the addressable range.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ZeroDepth`] for zero sources,
    /// [`ConfigError::TooManySources`] above the architectural maximum.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.num_sources == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        if self.num_sources > MAX_SOURCES {
            return Err(ConfigError::TooManySources {
                requested: self.num_sources,
                max: MAX_SOURCES,
            });
        }
        Ok(())
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            num_sources: defaults::NUM_SOURCES,
            base_addr: defaults::CLIC_BASE,
            cliccfg_default: 0,
            clicinfo_default: 0,
            clicinttrig_default: 0,
            clicintip_default: 0,
            clicintie_default: 0,
            clicintattr_default: 0,
            clicintctl_default: 0,
        }
    }
}

/// Description of one register file.
///
/// The legality predicate of a WARL file is not data; attach it with
/// [`RegisterFile::with_legality`](crate::regmap::RegisterFile::with_legality).
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterFileConfig {
    /// Short name.
    pub name: String,

    /// Human-readable description.
    #[serde(default)]
    pub description: String,

    /// Base address of the window.
    #[serde(default)]
    pub base: u32,

    /// Word width in bits.
    #[serde(default = "RegisterFileConfig::default_width")]
    pub width: u32,

    /// Number of registers.
    #[serde(default = "RegisterFileConfig::default_count")]
    pub count: usize,

    /// Address distance between registers; defaults to the width in bytes.
    #[serde(default)]
    pub stride: Option<u32>,

    /// Access kind.
    #[serde(default)]
    pub kind: RegisterKind,

    /// Reject addresses outside `[base, base + count * stride)`.
    #[serde(default = "RegisterFileConfig::default_bounds_check")]
    pub bounds_check: bool,

    /// Per-register reset values; exactly `count` entries when present.
    #[serde(default)]
    pub defaults: Option<Vec<Word>>,

    /// `(register, description)` pairs for documentation output.
    #[serde(default)]
    pub descriptors: Vec<(String, String)>,
}

impl RegisterFileConfig {
    /// A read-write, bounds-checked file of `count` registers of `width` bits at `base`.
    pub fn new(name: impl Into<String>, base: u32, width: u32, count: usize) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            base,
            width,
            count,
            stride: None,
            kind: RegisterKind::ReadWrite,
            bounds_check: true,
            defaults: None,
            descriptors: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    /// Sets the access kind.
    #[must_use]
    pub const fn kind(mut self, kind: RegisterKind) -> Self {
        self.kind = kind;
        self
    }

    /// Overrides the slot stride.
    #[must_use]
    pub const fn stride(mut self, stride: u32) -> Self {
        self.stride = Some(stride);
        self
    }

    /// Enables or disables bounds checking.
    #[must_use]
    pub const fn bounds_check(mut self, enabled: bool) -> Self {
        self.bounds_check = enabled;
        self
    }

    /// Sets per-register reset values.
    #[must_use]
    pub fn defaults(mut self, values: Vec<Word>) -> Self {
        self.defaults = Some(values);
        self
    }

    /// Gives every register the same reset value.
    #[must_use]
    pub fn uniform_default(self, value: Word) -> Self {
        let count = self.count;
        self.defaults(vec![value; count])
    }

    /// Adds a register description.
    #[must_use]
    pub fn descriptor(mut self, register: impl Into<String>, text: impl Into<String>) -> Self {
        self.descriptors.push((register.into(), text.into()));
        self
    }

    /// Stride actually used: the configured value or the width in bytes.
    pub const fn effective_stride(&self) -> u32 {
        match self.stride {
            Some(stride) => stride,
            None => width_bytes(self.width),
        }
    }

    fn default_width() -> u32 {
        32
    }

    fn default_count() -> usize {
        1
    }

    fn default_bounds_check() -> bool {
        true
    }
}
