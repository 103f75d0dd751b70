//! CLIC register map.
//!
//! The map owns the seven register files and one shared bus interface. Each
//! cycle has two phases:
//! 1. **Combinational:** [`RegisterMap::drive`] decodes the live bus inputs and
//!    routes them to exactly one file (all others see idle inputs);
//!    [`RegisterMap::read_data`] mirrors the selected file's read port.
//! 2. **Clocked:** [`RegisterMap::tick`] applies every file's write port once.
//!
//! No decode state survives a cycle: the route is recomputed from the inputs
//! every time they change.

use std::fmt;

use tracing::{debug, trace};

use crate::common::constants::{
    CLICCFG_BASE, CLICINFO_BASE, CLICINTIP_BASE, CLICINTTRIG_BASE, NUM_TRIGGERS, QUAD_STRIDE,
};
use crate::common::data::Word;
use crate::common::error::ConfigError;
use crate::config::{Config, MapConfig, RegisterFileConfig};
use crate::regmap::bank::Commit;
use crate::regmap::decode::{self, FileId, Route};
use crate::regmap::file::{RegisterFile, RegisterKind, TickOutcome};
use crate::regmap::signals::BusSignals;
use crate::stats::AccessStats;

/// The CLIC memory-mapped register space.
#[derive(Clone, Debug)]
pub struct RegisterMap {
    files: Vec<RegisterFile>,
    bus: BusSignals,
    selected: Route,
    stats: AccessStats,
    trace_accesses: bool,
}

impl RegisterMap {
    /// Builds the map described by `config`.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from validation or from building a file.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let files = FileId::ALL
            .iter()
            .map(|&id| RegisterFile::new(file_config(id, &config.map)))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            files = files.len(),
            num_sources = config.map.num_sources,
            "register map assembled"
        );

        Ok(Self {
            files,
            bus: BusSignals::IDLE,
            selected: decode::decode(0),
            stats: AccessStats::default(),
            trace_accesses: config.general.trace_accesses,
        })
    }

    /// Builds the map with the default configuration.
    ///
    /// # Errors
    ///
    /// Never in practice; the default configuration is valid.
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::new(&Config::default())
    }

    /// Drives the bus inputs for the current cycle.
    ///
    /// Inputs stay asserted across ticks until driven again.
    pub fn drive(&mut self, bus: BusSignals) {
        let (selected, ports) = decode::route(bus);
        for (file, port) in self.files.iter_mut().zip(ports) {
            file.drive(port);
        }
        self.bus = bus;
        self.selected = selected;
    }

    /// Bus inputs currently driven.
    pub const fn bus(&self) -> BusSignals {
        self.bus
    }

    /// Route chosen for the current inputs.
    pub const fn selected(&self) -> Route {
        self.selected
    }

    /// Read data for the current inputs, zero-extended to the bus width.
    ///
    /// Zero when the selected file rejects the address.
    pub fn read_data(&self) -> Word {
        self.file(self.selected.file).read(self.selected.address)
    }

    /// Clock edge: commits whatever the current inputs request.
    pub fn tick(&mut self) {
        self.stats.ticks += 1;
        for file in &mut self.files {
            match file.tick() {
                TickOutcome::Idle => {}
                TickOutcome::Committed(Commit::Write { .. }) => self.stats.writes += 1,
                TickOutcome::Committed(Commit::Reset { .. }) => self.stats.resets += 1,
                TickOutcome::Committed(Commit::Idle) => {}
                TickOutcome::Dropped(reason) => self.stats.record_drop(reason),
            }
        }
    }

    /// Combinational read of `address` without disturbing the driven inputs.
    pub fn probe(&self, address: u32) -> Word {
        let route = decode::decode(address);
        self.file(route.file).read(route.address)
    }

    /// One write transaction: drive, tick, then release the write enable.
    ///
    /// The value is readable from the next cycle on.
    pub fn write(&mut self, address: u32, value: Word) {
        self.log_access("write", address, value);
        self.drive(BusSignals::write(address, value));
        self.tick();
        self.drive(BusSignals::read(address));
    }

    /// One read transaction: present `address` and sample the read data.
    pub fn read(&mut self, address: u32) -> Word {
        self.drive(BusSignals::read(address));
        let value = self.read_data();
        self.log_access("read", address, value);
        value
    }

    /// Restores the slot at `address` to its default in one cycle.
    pub fn reset_slot(&mut self, address: u32) {
        self.log_access("reset", address, 0);
        self.drive(BusSignals::reset(address));
        self.tick();
        self.drive(BusSignals::read(address));
    }

    /// Restores every slot of every file by sweeping the bus while holding reset.
    pub fn reset_all(&mut self) {
        for id in FileId::ALL {
            for index in 0..self.file(id).count() {
                if let Some(address) = self.bus_address(id, index) {
                    self.drive(BusSignals::reset(address));
                    self.tick();
                }
            }
        }
        self.drive(BusSignals::IDLE);
    }

    /// Bus address of slot `index` of file `id`, `None` past the file or the address space.
    pub fn bus_address(&self, id: FileId, index: usize) -> Option<u32> {
        let file = self.file(id);
        if index >= file.count() {
            return None;
        }
        let offset = u32::try_from(index).ok()?.checked_mul(file.stride())?;
        match id.lane() {
            Some(lane) => CLICINTIP_BASE
                .checked_add(file.base())?
                .checked_add(offset)?
                .checked_add(lane),
            None => file.base().checked_add(offset),
        }
    }

    /// The register file `id`.
    pub fn file(&self, id: FileId) -> &RegisterFile {
        &self.files[id.index()]
    }

    /// All files in [`FileId::ALL`] order.
    pub fn files(&self) -> impl Iterator<Item = (FileId, &RegisterFile)> {
        FileId::ALL.into_iter().zip(self.files.iter())
    }

    /// Current value of slot `index` of file `id`, bypassing the decoder.
    pub fn peek(&self, id: FileId, index: usize) -> Word {
        self.file(id).peek(index)
    }

    /// Files whose write port would commit for a write cycle at `address`.
    ///
    /// Never more than one entry.
    pub fn claimants(&self, address: u32) -> Vec<FileId> {
        let (_, ports) = decode::route(BusSignals::write(address, 0));
        FileId::ALL
            .into_iter()
            .zip(ports)
            .filter(|(id, port)| port.write_enable && self.file(*id).claims(port.address))
            .map(|(id, _)| id)
            .collect()
    }

    /// Traffic counters.
    pub const fn stats(&self) -> &AccessStats {
        &self.stats
    }

    fn log_access(&self, op: &'static str, address: u32, value: Word) {
        if self.trace_accesses || cfg!(feature = "always-trace") {
            let file = decode::decode(address).file.name();
            trace!(op, address, value, file, "bus access");
        }
    }
}

impl fmt::Display for RegisterMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CLIC register map")?;
        for (id, file) in self.files() {
            let first = self.bus_address(id, 0).unwrap_or(0);
            let last = self
                .bus_address(id, file.count().saturating_sub(1))
                .unwrap_or(first);
            writeln!(
                f,
                "  {first:#06x}..={last:#06x}  {:>2}B  {:<4} {}",
                file.width().div_ceil(8),
                file.kind().to_string(),
                file.name()
            )?;
        }
        Ok(())
    }
}

fn file_config(id: FileId, map: &MapConfig) -> RegisterFileConfig {
    match id {
        FileId::Cfg => RegisterFileConfig::new(id.name(), CLICCFG_BASE, 8, 1)
            .description("CLIC configuration register")
            .uniform_default(map.cliccfg_default)
            .descriptor("nlbits", "interrupt level bits in clicintctl")
            .descriptor("nmbits", "privilege mode bits in clicintattr"),
        FileId::Info => RegisterFileConfig::new(id.name(), CLICINFO_BASE, 32, 1)
            .description("CLIC information register")
            .kind(RegisterKind::ReadOnly)
            .uniform_default(map.clicinfo_default)
            .descriptor("num_interrupt", "number of interrupt sources")
            .descriptor("version", "implementation version")
            .descriptor("clicintctlbits", "implemented bits in clicintctl"),
        FileId::IntTrig => RegisterFileConfig::new(id.name(), CLICINTTRIG_BASE, 32, NUM_TRIGGERS)
            .description("CLIC interrupt trigger registers")
            .uniform_default(map.clicinttrig_default),
        FileId::IntIp => quad_config(id, "CLIC interrupt pending register", map.clicintip_default, map),
        FileId::IntIe => quad_config(id, "CLIC interrupt enable register", map.clicintie_default, map),
        FileId::IntAttr => {
            quad_config(id, "CLIC interrupt attribute register", map.clicintattr_default, map)
        }
        FileId::IntCtl => {
            quad_config(id, "CLIC interrupt control register", map.clicintctl_default, map)
        }
    }
}

/// Quad-mapped files are based at zero and see lane-cleared offsets, so
/// consecutive elements sit one lane group apart.
fn quad_config(id: FileId, description: &str, default: Word, map: &MapConfig) -> RegisterFileConfig {
    RegisterFileConfig::new(id.name(), 0, 8, map.num_sources)
        .description(description)
        .stride(QUAD_STRIDE)
        .uniform_default(default)
}
