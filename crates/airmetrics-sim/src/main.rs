//! airmetrics flight simulator.
//!
//! Usage: `airmetrics-sim [config.yaml]`. Without an argument the built-in
//! takeoff/cruise/landing profile runs. Set `RUST_LOG=debug` for store events.

use tracing_subscriber::{fmt, EnvFilter};

use airmetrics_core::{FieldStore, MapStore, MetricsKernel, MetricsView};
use airmetrics_sim::config::{self, SimConfig, StoreKind};
use airmetrics_sim::{Simulator, TickReport};

fn print_tick(report: &TickReport) {
    if report.tick == 1 {
        println!("Phase: {}", report.phase);
    }
    println!("{}\n", report.text);
}

async fn drive<K: MetricsKernel>(store: K, cfg: &SimConfig) -> airmetrics_sim::Result<()> {
    let mut sim = Simulator::new(store);
    sim.run(cfg, print_tick).await?;
    tracing::info!(defined = %sim.store().display_defined_metrics(), "final state");
    Ok(())
}

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = match std::env::args().nth(1) {
        Some(path) => config::load_from_file(&path).expect("config load failed"),
        None => SimConfig::default(),
    };

    tracing::info!(
        phases = cfg.phases.len(),
        store = ?cfg.simulation.store,
        tick_ms = cfg.simulation.tick_ms,
        "airmetrics-sim starting"
    );
    println!("Starting Airplane Simulation...\n");

    let result = match cfg.simulation.store {
        StoreKind::Map => drive(MapStore::new(), &cfg).await,
        StoreKind::Fields => drive(FieldStore::new(), &cfg).await,
    };
    if let Err(e) = result {
        tracing::error!(error = %e, "simulation aborted");
        std::process::exit(1);
    }

    println!("Simulation Complete!");
}
