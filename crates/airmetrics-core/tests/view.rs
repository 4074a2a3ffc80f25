//! Derived-layer tests: equality, hashing, rendering, named accessors.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use airmetrics_core::{ErrorKind, FieldStore, MapStore, MetricsKernel, MetricsView, Mode};

fn cruising() -> MapStore {
    let mut s = MapStore::new();
    s.set_metric(Mode::Altitude, 35000.0).unwrap();
    s.set_metric(Mode::Direction, 90.0).unwrap();
    s
}

fn std_hash<T: Hash>(value: &T) -> u64 {
    let mut h = DefaultHasher::new();
    value.hash(&mut h);
    h.finish()
}

#[test]
fn summary_format() {
    let s = cruising();
    assert_eq!(s.summary().unwrap(), "Airplane [Altitude=35000.0,Direction=90.0]");
    assert_eq!(s.to_string(), "Airplane [Altitude=35000.0,Direction=90.0]");
}

#[test]
fn summary_requires_altitude_and_direction() {
    let mut s = FieldStore::new();
    s.set_metric(Mode::Altitude, 100.0).unwrap();
    let err = s.summary().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IllegalState);
    assert_eq!(s.to_string(), "Airplane [Altitude=100.0,Direction=undefined]");
}

#[test]
fn display_defined_metrics_concatenates_in_order() {
    let mut s = MapStore::new();
    assert_eq!(s.display_defined_metrics(), "");
    s.set_metric(Mode::Speed, 550.0).unwrap();
    s.set_metric(Mode::Altitude, 35000.0).unwrap();
    assert_eq!(s.display_defined_metrics(), "35000.0550.0");
    assert_eq!(s.defined_modes(), vec![Mode::Altitude, Mode::Speed]);
}

#[test]
fn render_metrics_marks_undefined() {
    let mut s = FieldStore::new();
    s.set_metric(Mode::Altitude, 2000.0).unwrap();
    s.set_metric(Mode::FuelQuantity, 950.0).unwrap();
    let text = s.render_metrics(&[Mode::Altitude, Mode::Speed, Mode::FuelQuantity]);
    assert_eq!(text, "Altitude: 2000.0\nSpeed: Not Defined\nFuel Quantity: 950.0");
}

#[test]
fn equality_properties() {
    assert_eq!(MapStore::new(), MapStore::new());
    assert_eq!(FieldStore::new(), FieldStore::new());

    let a = cruising();
    let b = cruising();
    let c = cruising();
    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_eq!(b, c);
    assert_eq!(a, c);

    let mut d = cruising();
    d.set_metric(Mode::Direction, 91.0).unwrap();
    assert_ne!(a, d);

    let mut e = cruising();
    e.set_metric(Mode::Speed, 0.0).unwrap();
    assert_ne!(a, e, "different defined sets");
}

#[test]
fn equality_is_exact() {
    let mut a = MapStore::new();
    let mut b = MapStore::new();
    a.set_metric(Mode::WindSpeed, 0.0).unwrap();
    b.set_metric(Mode::WindSpeed, -0.0).unwrap();
    assert_ne!(a, b);

    b.set_metric(Mode::WindSpeed, 0.0 + f64::EPSILON).unwrap();
    assert_ne!(a, b);
}

#[test]
fn equality_across_representations() {
    let map = cruising();
    let mut fields = FieldStore::new();
    fields.set_metric(Mode::Altitude, 35000.0).unwrap();
    fields.set_metric(Mode::Direction, 90.0).unwrap();
    assert!(map.metrics_eq(&fields));
    assert!(fields.metrics_eq(&map));
    assert_eq!(map.metrics_hash(), fields.metrics_hash());
}

#[test]
fn hash_depends_on_defined_set_only() {
    let empty = MapStore::new();
    assert_eq!(empty.metrics_hash(), 2);

    let a = cruising();
    assert_eq!(a.metrics_hash(), 2 * 63 * 63);
    assert_eq!(a.metrics_hash(), a.metrics_hash());

    let mut other_values = MapStore::new();
    other_values.set_metric(Mode::Altitude, 1.0).unwrap();
    other_values.set_metric(Mode::Direction, 2.0).unwrap();
    assert_ne!(a, other_values);
    assert_eq!(a.metrics_hash(), other_values.metrics_hash());
    assert_eq!(std_hash(&a), std_hash(&other_values));

    let mut full = FieldStore::new();
    for mode in Mode::ALL {
        full.set_metric(mode, 1.0).unwrap();
    }
    assert_eq!(full.metrics_hash(), 2i32.wrapping_mul(63i32.pow(5)).wrapping_mul(63));
}

#[test]
fn equal_stores_hash_equal() {
    let a = cruising();
    let b = cruising();
    assert_eq!(a, b);
    assert_eq!(std_hash(&a), std_hash(&b));
}

#[test]
fn named_accessors_forward_to_modes() {
    let mut s = MapStore::new();
    s.set_altitude(12000.0).unwrap();
    s.set_speed(430.0).unwrap();
    s.set_direction(270).unwrap();
    s.set_fuel_quantity(5000.0).unwrap();

    assert_eq!(s.altitude().unwrap(), 12000.0);
    assert_eq!(s.speed().unwrap(), 430.0);
    assert_eq!(s.direction().unwrap(), 270);
    assert_eq!(s.fuel_quantity().unwrap(), 5000.0);
    assert_eq!(s.metric(Mode::Direction).unwrap(), 270.0);

    s.set_metric(Mode::Direction, 359.999).unwrap();
    assert_eq!(s.direction().unwrap(), 359);

    assert_eq!(s.set_direction(360).unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(s.set_altitude(-1.0).unwrap_err().kind(), ErrorKind::InvalidArgument);
}

#[test]
fn view_over_trait_object() {
    let mut store: Box<dyn MetricsKernel> = Box::new(FieldStore::new());
    store.set_altitude(35000.0).unwrap();
    store.set_direction(90).unwrap();
    assert_eq!(store.summary().unwrap(), "Airplane [Altitude=35000.0,Direction=90.0]");
    assert_eq!(store.metrics_hash(), 2 * 63 * 63);
}
