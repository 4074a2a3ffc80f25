//! Secondary layer: operations derived purely from kernel primitives.
//!
//! Nothing here touches a store's representation. `MetricsView` is
//! blanket-implemented for every `MetricsKernel` (including `dyn MetricsKernel`),
//! and the std traits of both stores (`PartialEq`, `Eq`, `Hash`, `Display`)
//! forward to it.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::Result;
use crate::kernel::{FieldStore, MapStore, MetricsKernel};
use crate::mode::Mode;

const HASH_SEED: i32 = 2;
const HASH_FACTOR: i32 = 63;

/// Render a value in the default `f64` textual form (`35000.0`, `90.0`).
fn decimal(value: f64) -> String {
    format!("{value:?}")
}

fn field_or_undefined<K: MetricsKernel + ?Sized>(store: &K, mode: Mode) -> String {
    store
        .metric(mode)
        .map(decimal)
        .unwrap_or_else(|_| "undefined".to_string())
}

/// Bitwise identity: `0.0` and `-0.0` differ.
fn same_value(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits()
}

/// Derived operations over any metrics kernel.
pub trait MetricsView: MetricsKernel {
    /// Modes currently holding a value, in enumeration order.
    fn defined_modes(&self) -> Vec<Mode> {
        Mode::ALL
            .into_iter()
            .filter(|m| self.is_defined(*m))
            .collect()
    }

    /// `Airplane [Altitude=<v>,Direction=<v>]`.
    ///
    /// Fails with `IllegalState` if either mode is undefined; the `Display`
    /// impls print `undefined` in that case instead.
    fn summary(&self) -> Result<String> {
        let altitude = self.metric(Mode::Altitude)?;
        let direction = self.metric(Mode::Direction)?;
        Ok(format!(
            "Airplane [Altitude={},Direction={}]",
            decimal(altitude),
            decimal(direction)
        ))
    }

    /// Raw values of every defined mode, concatenated without separators.
    fn display_defined_metrics(&self) -> String {
        Mode::ALL
            .into_iter()
            .filter_map(|m| self.metric(m).ok())
            .map(decimal)
            .collect()
    }

    /// One `<Label>: <value>` line per requested mode, `Not Defined` when absent.
    fn render_metrics(&self, modes: &[Mode]) -> String {
        modes
            .iter()
            .map(|m| match self.metric(*m) {
                Ok(v) => format!("{}: {}", m.label(), decimal(v)),
                Err(_) => format!("{}: Not Defined", m.label()),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Same defined set and identical values for every mode.
    fn metrics_eq(&self, other: &dyn MetricsKernel) -> bool {
        if std::ptr::addr_eq(self, other) {
            return true;
        }
        for mode in Mode::ALL {
            let defined = self.is_defined(mode);
            if defined != other.is_defined(mode) {
                return false;
            }
            if defined {
                match (self.metric(mode), other.metric(mode)) {
                    (Ok(a), Ok(b)) if same_value(a, b) => {}
                    _ => return false,
                }
            }
        }
        true
    }

    /// Hash over the defined-mode set only: seed 2, times 63 per defined mode.
    ///
    /// Stores that differ only in values hash alike. Equal stores always share
    /// a defined set, so they always hash equal.
    fn metrics_hash(&self) -> i32 {
        Mode::ALL
            .into_iter()
            .filter(|m| self.is_defined(*m))
            .fold(HASH_SEED, |acc, _| acc.wrapping_mul(HASH_FACTOR))
    }

    fn altitude(&self) -> Result<f64> {
        self.metric(Mode::Altitude)
    }

    fn set_altitude(&mut self, altitude: f64) -> Result<()> {
        self.set_metric(Mode::Altitude, altitude)
    }

    fn speed(&self) -> Result<f64> {
        self.metric(Mode::Speed)
    }

    fn set_speed(&mut self, speed: f64) -> Result<()> {
        self.set_metric(Mode::Speed, speed)
    }

    /// Heading in whole degrees (truncated).
    fn direction(&self) -> Result<i32> {
        Ok(self.metric(Mode::Direction)? as i32)
    }

    fn set_direction(&mut self, direction: i32) -> Result<()> {
        self.set_metric(Mode::Direction, f64::from(direction))
    }

    fn fuel_quantity(&self) -> Result<f64> {
        self.metric(Mode::FuelQuantity)
    }

    fn set_fuel_quantity(&mut self, fuel: f64) -> Result<()> {
        self.set_metric(Mode::FuelQuantity, fuel)
    }
}

impl<K: MetricsKernel + ?Sized> MetricsView for K {}

macro_rules! view_std_traits {
    ($($store:ty),*) => {$(
        impl PartialEq for $store {
            fn eq(&self, other: &Self) -> bool {
                self.metrics_eq(other)
            }
        }

        impl Eq for $store {}

        impl Hash for $store {
            fn hash<H: Hasher>(&self, state: &mut H) {
                state.write_i32(self.metrics_hash());
            }
        }

        impl fmt::Display for $store {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    "Airplane [Altitude={},Direction={}]",
                    field_or_undefined(self, Mode::Altitude),
                    field_or_undefined(self, Mode::Direction)
                )
            }
        }
    )*};
}

view_std_traits!(MapStore, FieldStore);
