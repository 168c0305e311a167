#![cfg(feature = "serde")]

use fieldstream::{FiniteField, Poly};

#[test]
fn poly_round_trip() {
    let p = Poly::new(7, vec![3, 0, 5, 1]);
    let json = serde_json::to_string(&p).unwrap();
    let back: Poly = serde_json::from_str(&json).unwrap();
    assert_eq!(back, p);
}

#[test]
fn poly_zero_round_trip() {
    let z = Poly::zero(13);
    let json = serde_json::to_string(&z).unwrap();
    let back: Poly = serde_json::from_str(&json).unwrap();
    assert!(back.is_zero());
    assert_eq!(back.characteristic(), 13);
}

#[test]
fn poly_deserialize_normalizes() {
    // Unreduced coefficients and trailing zeros collapse on the way in.
    let back: Poly = serde_json::from_str(r#"{"p":7,"coeffs":[10,14,0]}"#).unwrap();
    assert_eq!(back, Poly::constant(7, 3));
}

#[test]
fn poly_rejects_bad_characteristic() {
    assert!(serde_json::from_str::<Poly>(r#"{"p":1,"coeffs":[1]}"#).is_err());
    assert!(serde_json::from_str::<Poly>(r#"{"p":0,"coeffs":[]}"#).is_err());
}

#[test]
fn prime_field_round_trip() {
    let f = FiniteField::prime(251).unwrap();
    let json = serde_json::to_string(&f).unwrap();
    let back: FiniteField = serde_json::from_str(&json).unwrap();
    assert_eq!(back, f);
}

#[test]
fn extension_field_round_trip() {
    let f = FiniteField::byte_field();
    let json = serde_json::to_string(&f).unwrap();
    let back: FiniteField = serde_json::from_str(&json).unwrap();
    assert_eq!(back, f);
    assert_eq!(back.extension_degree(), 8);
}

#[test]
fn field_rejects_composite_characteristic() {
    assert!(serde_json::from_str::<FiniteField>(r#"{"p":6,"modulus":null}"#).is_err());
    assert!(serde_json::from_str::<FiniteField>(r#"{"p":4,"modulus":[1,0,1]}"#).is_err());
}

#[test]
fn field_rejects_degenerate_modulus() {
    // A constant is no modulus for an extension field.
    assert!(serde_json::from_str::<FiniteField>(r#"{"p":2,"modulus":[1]}"#).is_err());
}
