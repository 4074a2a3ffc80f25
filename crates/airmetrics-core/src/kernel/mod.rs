//! Kernel layer: the primitive capability set and its representations.
//!
//! Two stores implement the same contract:
//! - `MapStore`: ordered map keyed by mode; a missing key means undefined.
//! - `FieldStore`: one `f64` slot per mode; NaN means undefined.
//!
//! Both validate with `Mode::validate` before touching their representation,
//! so a rejected write never leaves a partial update behind.

pub mod fields;
pub mod map;

use std::any::Any;

use crate::error::Result;
use crate::mode::Mode;

pub use fields::FieldStore;
pub use map::MapStore;

/// Primitive operations over a set of per-mode measurements.
///
/// Implementations own their representation completely. Everything else
/// (equality, hashing, rendering, named accessors) lives in
/// [`MetricsView`](crate::view::MetricsView) and is written against this trait only.
pub trait MetricsKernel: Any {
    /// Store `value` under `mode`, replacing any prior value.
    ///
    /// Fails with `InvalidArgument` when the value is out of range for the mode.
    fn set_metric(&mut self, mode: Mode, value: f64) -> Result<()>;

    /// Read the value stored under `mode`.
    ///
    /// Fails with `IllegalState` when the mode is undefined.
    fn metric(&self, mode: Mode) -> Result<f64>;

    /// Whether `mode` currently holds a value.
    fn is_defined(&self, mode: Mode) -> bool;

    /// Mark every mode undefined.
    fn clear(&mut self);

    /// Move every defined value out of `source` into `self`.
    ///
    /// `self`'s prior contents are replaced and `source` is left empty. Fails
    /// with `InvalidArgument`, without mutating either side, when `source` is
    /// backed by a different representation.
    fn transfer_from(&mut self, source: &mut dyn MetricsKernel) -> Result<()>;

    /// Fresh, empty store of the same representation.
    fn new_instance(&self) -> Self
    where
        Self: Sized;

    /// Downcast hook used by `transfer_from`.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
