use std::collections::BTreeMap;

use serde::Deserialize;

use airmetrics_core::Mode;

use crate::error::{Result, SimError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimConfig {
    pub version: u32,

    #[serde(default)]
    pub simulation: SimulationSection,

    /// Values written before the first phase, keyed by mode identifier.
    #[serde(default)]
    pub initial: BTreeMap<Mode, f64>,

    #[serde(default)]
    pub phases: Vec<PhaseConfig>,
}

impl Default for SimConfig {
    /// Takeoff, cruise and landing, three ticks each, on a 1000-unit fuel load.
    fn default() -> Self {
        Self {
            version: 1,
            simulation: SimulationSection::default(),
            initial: BTreeMap::from([(Mode::FuelQuantity, 1000.0)]),
            phases: vec![
                PhaseConfig::new("Takeoff", 3, 2000.0, 100.0, -50.0),
                PhaseConfig::new("Cruising", 3, 0.0, 0.0, -200.0),
                PhaseConfig::new("Landing", 3, -2000.0, -100.0, 0.0),
            ],
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SimError::Config(format!(
                "unsupported config version: {}",
                self.version
            )));
        }
        if self.phases.is_empty() {
            return Err(SimError::Config("phases must not be empty".into()));
        }

        self.simulation.validate()?;

        for (mode, value) in &self.initial {
            mode.validate(*value)?;
        }
        for phase in &self.phases {
            phase.validate()?;
        }
        Ok(())
    }
}

/// Which store representation backs the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    #[default]
    Map,
    Fields,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationSection {
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    #[serde(default)]
    pub store: StoreKind,
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            store: StoreKind::default(),
        }
    }
}

impl SimulationSection {
    pub fn validate(&self) -> Result<()> {
        if self.tick_ms > 60000 {
            return Err(SimError::Config(
                "simulation.tick_ms must be at most 60000".into(),
            ));
        }
        Ok(())
    }
}

fn default_tick_ms() -> u64 {
    1000
}

/// One flight phase: per-tick deltas applied `duration` times.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhaseConfig {
    pub name: String,
    pub duration: u32,
    #[serde(default)]
    pub altitude_change: f64,
    #[serde(default)]
    pub speed_change: f64,
    #[serde(default)]
    pub fuel_change: f64,
}

impl PhaseConfig {
    pub fn new(
        name: &str,
        duration: u32,
        altitude_change: f64,
        speed_change: f64,
        fuel_change: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            duration,
            altitude_change,
            speed_change,
            fuel_change,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SimError::Config("phase name must not be empty".into()));
        }
        if !(1..=1000).contains(&self.duration) {
            return Err(SimError::Config(format!(
                "phase {}: duration must be between 1 and 1000",
                self.name
            )));
        }
        Ok(())
    }
}
