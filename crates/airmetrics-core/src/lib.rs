//! airmetrics core: flight metric modes, the primitive store kernel, and the
//! derived view layer built on top of it.
//!
//! The crate is split in two layers:
//! - `kernel`: the minimal capability set (`MetricsKernel`) plus the two
//!   backing representations, `MapStore` and `FieldStore`.
//! - `view`: `MetricsView`, blanket-implemented for every kernel. It only ever
//!   talks to the primitives, so equality, hashing and rendering behave the
//!   same whichever representation sits underneath.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Every rejected
//! write or read of an undefined mode surfaces as `MetricsError`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod kernel;
pub mod mode;
pub mod view;

/// Shared result type.
pub use error::{ErrorKind, MetricsError, Result};
pub use kernel::{FieldStore, MapStore, MetricsKernel};
pub use mode::Mode;
pub use view::MetricsView;
