//! Phase-driven simulation over any metrics kernel.
//!
//! Each tick adds the phase's deltas to altitude, speed and fuel. A mode that
//! is still undefined is set to the delta itself. Range violations from the
//! store (e.g. fuel going negative) abort the run.

use std::collections::BTreeMap;
use std::time::Duration;

use airmetrics_core::{MetricsKernel, MetricsView, Mode};

use crate::config::{PhaseConfig, SimConfig};
use crate::error::Result;

/// Modes shown after every tick.
pub const REPORTED_MODES: [Mode; 3] = [Mode::Altitude, Mode::Speed, Mode::FuelQuantity];

/// Snapshot rendered after one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub phase: String,
    /// 1-based tick index within the phase.
    pub tick: u32,
    pub text: String,
}

pub struct Simulator<K: MetricsKernel> {
    store: K,
}

impl<K: MetricsKernel> Simulator<K> {
    pub fn new(store: K) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &K {
        &self.store
    }

    pub fn into_store(self) -> K {
        self.store
    }

    /// Write initial values before the first phase.
    pub fn seed(&mut self, initial: &BTreeMap<Mode, f64>) -> Result<()> {
        for (mode, value) in initial {
            self.store.set_metric(*mode, *value)?;
        }
        Ok(())
    }

    /// Add `delta` to the current value, or set it to `delta` if undefined.
    pub fn apply_change(&mut self, mode: Mode, delta: f64) -> Result<()> {
        let next = if self.store.is_defined(mode) {
            self.store.metric(mode)? + delta
        } else {
            delta
        };
        self.store.set_metric(mode, next)?;
        Ok(())
    }

    /// Apply one tick of `phase` and render the result.
    pub fn step(&mut self, phase: &PhaseConfig, tick: u32) -> Result<TickReport> {
        self.apply_change(Mode::Altitude, phase.altitude_change)?;
        self.apply_change(Mode::Speed, phase.speed_change)?;
        self.apply_change(Mode::FuelQuantity, phase.fuel_change)?;

        Ok(TickReport {
            phase: phase.name.clone(),
            tick,
            text: self.store.render_metrics(&REPORTED_MODES),
        })
    }

    /// Run every tick of `phase`, sleeping `tick` after each one.
    pub async fn run_phase<F>(
        &mut self,
        phase: &PhaseConfig,
        tick: Duration,
        on_tick: &mut F,
    ) -> Result<Vec<TickReport>>
    where
        F: FnMut(&TickReport),
    {
        tracing::info!(phase = %phase.name, duration = phase.duration, "phase started");

        let mut reports = Vec::with_capacity(phase.duration as usize);
        for i in 1..=phase.duration {
            let report = self.step(phase, i).map_err(|e| {
                tracing::warn!(phase = %phase.name, tick = i, error = %e, "tick rejected");
                e
            })?;
            on_tick(&report);
            reports.push(report);

            if !tick.is_zero() {
                tokio::time::sleep(tick).await;
            }
        }
        Ok(reports)
    }

    /// Seed from `cfg.initial`, then run every configured phase in order.
    pub async fn run<F>(&mut self, cfg: &SimConfig, mut on_tick: F) -> Result<Vec<TickReport>>
    where
        F: FnMut(&TickReport),
    {
        self.seed(&cfg.initial)?;

        let tick = Duration::from_millis(cfg.simulation.tick_ms);
        let mut reports = Vec::new();
        for phase in &cfg.phases {
            reports.extend(self.run_phase(phase, tick, &mut on_tick).await?);
        }

        tracing::info!(ticks = reports.len(), "simulation finished");
        Ok(reports)
    }
}
