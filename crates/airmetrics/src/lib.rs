//! Top-level facade crate for airmetrics.
//!
//! Re-exports the metrics core and the simulator so users can depend on a single crate.

pub mod core {
    pub use airmetrics_core::*;
}

pub mod sim {
    pub use airmetrics_sim::*;
}
