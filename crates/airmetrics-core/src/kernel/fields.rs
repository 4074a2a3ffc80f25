//! Field-backed store: one slot per mode, NaN means undefined.
//!
//! NaN can never be written through `set_metric` (`Mode::validate` rejects it),
//! so the sentinel is unambiguous.

use std::any::Any;

use crate::error::{MetricsError, Result};
use crate::kernel::MetricsKernel;
use crate::mode::Mode;

/// Metrics kept in one `f64` field per mode.
#[derive(Debug)]
pub struct FieldStore {
    altitude: f64,
    direction: f64,
    speed: f64,
    fuel_quantity: f64,
    outside_air_temperature: f64,
    wind_speed: f64,
}

impl Default for FieldStore {
    fn default() -> Self {
        Self {
            altitude: f64::NAN,
            direction: f64::NAN,
            speed: f64::NAN,
            fuel_quantity: f64::NAN,
            outside_air_temperature: f64::NAN,
            wind_speed: f64::NAN,
        }
    }
}

impl FieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Typed move: take everything from `source`, leaving it empty.
    pub fn take_from(&mut self, source: &mut FieldStore) {
        *self = std::mem::take(source);
        tracing::debug!("field store transferred");
    }

    fn slot(&self, mode: Mode) -> f64 {
        match mode {
            Mode::Altitude => self.altitude,
            Mode::Direction => self.direction,
            Mode::Speed => self.speed,
            Mode::FuelQuantity => self.fuel_quantity,
            Mode::OutsideAirTemperature => self.outside_air_temperature,
            Mode::WindSpeed => self.wind_speed,
        }
    }

    fn slot_mut(&mut self, mode: Mode) -> &mut f64 {
        match mode {
            Mode::Altitude => &mut self.altitude,
            Mode::Direction => &mut self.direction,
            Mode::Speed => &mut self.speed,
            Mode::FuelQuantity => &mut self.fuel_quantity,
            Mode::OutsideAirTemperature => &mut self.outside_air_temperature,
            Mode::WindSpeed => &mut self.wind_speed,
        }
    }
}

impl MetricsKernel for FieldStore {
    fn set_metric(&mut self, mode: Mode, value: f64) -> Result<()> {
        mode.validate(value)?;
        *self.slot_mut(mode) = value;
        tracing::trace!(%mode, value, "metric set");
        Ok(())
    }

    fn metric(&self, mode: Mode) -> Result<f64> {
        let value = self.slot(mode);
        if value.is_nan() {
            return Err(MetricsError::IllegalState(format!("{mode} is not defined")));
        }
        Ok(value)
    }

    fn is_defined(&self, mode: Mode) -> bool {
        !self.slot(mode).is_nan()
    }

    fn clear(&mut self) {
        *self = FieldStore::default();
        tracing::debug!("field store cleared");
    }

    fn transfer_from(&mut self, source: &mut dyn MetricsKernel) -> Result<()> {
        let src = source
            .as_any_mut()
            .downcast_mut::<FieldStore>()
            .ok_or_else(|| {
                MetricsError::InvalidArgument("transfer source is not a FieldStore".into())
            })?;
        self.take_from(src);
        Ok(())
    }

    fn new_instance(&self) -> Self {
        FieldStore::new()
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
