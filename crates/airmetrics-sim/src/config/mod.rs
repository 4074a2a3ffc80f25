//! Simulation config loader (strict parsing).

pub mod schema;

use std::fs;

use crate::error::{Result, SimError};

pub use schema::{PhaseConfig, SimConfig, SimulationSection, StoreKind};

pub fn load_from_file(path: &str) -> Result<SimConfig> {
    let s = fs::read_to_string(path)?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<SimConfig> {
    let cfg: SimConfig =
        serde_yaml::from_str(s).map_err(|e| SimError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
