//! Map-backed store: key absence means undefined.

use std::any::Any;
use std::collections::BTreeMap;

use crate::error::{MetricsError, Result};
use crate::kernel::MetricsKernel;
use crate::mode::Mode;

/// Metrics kept in an ordered map keyed by mode.
#[derive(Debug, Default)]
pub struct MapStore {
    metrics: BTreeMap<Mode, f64>,
}

impl MapStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Typed move: take everything from `source`, leaving it empty.
    pub fn take_from(&mut self, source: &mut MapStore) {
        self.metrics = std::mem::take(&mut source.metrics);
        tracing::debug!(defined = self.metrics.len(), "map store transferred");
    }
}

impl MetricsKernel for MapStore {
    fn set_metric(&mut self, mode: Mode, value: f64) -> Result<()> {
        mode.validate(value)?;
        self.metrics.insert(mode, value);
        tracing::trace!(%mode, value, "metric set");
        Ok(())
    }

    fn metric(&self, mode: Mode) -> Result<f64> {
        self.metrics
            .get(&mode)
            .copied()
            .ok_or_else(|| MetricsError::IllegalState(format!("{mode} is not defined")))
    }

    fn is_defined(&self, mode: Mode) -> bool {
        self.metrics.contains_key(&mode)
    }

    fn clear(&mut self) {
        self.metrics.clear();
        tracing::debug!("map store cleared");
    }

    fn transfer_from(&mut self, source: &mut dyn MetricsKernel) -> Result<()> {
        let src = source
            .as_any_mut()
            .downcast_mut::<MapStore>()
            .ok_or_else(|| {
                MetricsError::InvalidArgument("transfer source is not a MapStore".into())
            })?;
        self.take_from(src);
        Ok(())
    }

    fn new_instance(&self) -> Self {
        MapStore::new()
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
