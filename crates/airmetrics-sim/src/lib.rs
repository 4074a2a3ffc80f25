//! airmetrics flight-phase simulator.
//!
//! Drives a metrics store through configured phases (takeoff, cruise,
//! landing, ...), nudging altitude, speed and fuel every tick. Consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod config;
pub mod error;
pub mod simulator;

pub use error::{Result, SimError};
pub use simulator::{Simulator, TickReport};
