// Copyright 2026 the Binding Boundary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Identity and modifying passthroughs for every base type.

use boundary_conformance::dispatcher;
use boundary_dispatch::{Dispatcher, Limits};
use boundary_wire::HostValue;

fn d() -> Dispatcher {
    dispatcher(Limits::default()).unwrap()
}

#[test]
fn i32_round_trips_including_extremes() {
    let d = d();
    for v in [-1, 0, 1, i32::MAX, i32::MIN] {
        assert_eq!(d.call("passthroughI32", &[HostValue::Int(v)]), Ok(HostValue::Int(v)));
    }
}

#[test]
fn i64_round_trips_including_extremes() {
    let d = d();
    for v in [-1, 0, 1, i64::MAX, i64::MIN] {
        assert_eq!(d.call("passthroughI64", &[HostValue::Long(v)]), Ok(HostValue::Long(v)));
    }
}

#[test]
fn f32_round_trips_bit_for_bit() {
    let d = d();
    for v in [
        -1.0_f32,
        0.0,
        -0.0,
        1.0,
        f32::MAX,
        f32::MIN,
        f32::MIN_POSITIVE,
        f32::from_bits(1),
        f32::INFINITY,
        f32::NEG_INFINITY,
        f32::from_bits(0x7fc0_1234),
    ] {
        let Ok(HostValue::Float(out)) = d.call("passthroughF32", &[HostValue::Float(v)]) else {
            panic!("passthroughF32({v:?}) did not return a float");
        };
        assert_eq!(out.to_bits(), v.to_bits(), "{v:?}");
    }
}

#[test]
fn f64_round_trips_bit_for_bit() {
    let d = d();
    for v in [
        -1.0_f64,
        0.0,
        -0.0,
        1.0,
        f64::MAX,
        f64::MIN,
        f64::MIN_POSITIVE,
        f64::from_bits(1),
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::from_bits(0x7ff8_0000_0000_beef),
    ] {
        let Ok(HostValue::Double(out)) = d.call("passthroughF64", &[HostValue::Double(v)]) else {
            panic!("passthroughF64({v:?}) did not return a double");
        };
        assert_eq!(out.to_bits(), v.to_bits(), "{v:?}");
    }
}

#[test]
fn bool_and_string_round_trip() {
    let d = d();
    for v in [false, true] {
        assert_eq!(
            d.call("passthroughBool", &[HostValue::Boolean(v)]),
            Ok(HostValue::Boolean(v))
        );
    }
    for s in ["", "Hello World", r#"{"some":"json"}"#, "ünïcödé ✓ 🦀"] {
        assert_eq!(
            d.call("passthroughString", &[HostValue::from(s)]),
            Ok(HostValue::from(s))
        );
    }
}

#[test]
fn modifying_passthroughs() {
    let d = d();
    for v in [-1, 0, 1, i32::MIN] {
        assert_eq!(
            d.call("passthroughModI32", &[HostValue::Int(v)]),
            Ok(HostValue::Int(v + 1))
        );
    }
    assert_eq!(
        d.call("passthroughModI32", &[HostValue::Int(i32::MAX)]),
        Ok(HostValue::Int(i32::MIN))
    );
    for v in [-1, 0, 1, i64::MIN] {
        assert_eq!(
            d.call("passthroughModI64", &[HostValue::Long(v)]),
            Ok(HostValue::Long(v + 1))
        );
    }
    for v in [-1.0_f32, 0.0, 1.0, f32::from_bits(1)] {
        assert_eq!(
            d.call("passthroughModF32", &[HostValue::Float(v)]),
            Ok(HostValue::Float(v + 1.0))
        );
    }
    for v in [-1.0_f64, 0.0, 1.0, f64::from_bits(1)] {
        assert_eq!(
            d.call("passthroughModF64", &[HostValue::Double(v)]),
            Ok(HostValue::Double(v + 1.0))
        );
    }
    for v in [false, true] {
        assert_eq!(
            d.call("passthroughModBool", &[HostValue::Boolean(v)]),
            Ok(HostValue::Boolean(!v))
        );
    }
    for s in ["", "Hello World", r#"{"some":"json"}"#] {
        assert_eq!(
            d.call("passthroughModString", &[HostValue::from(s)]),
            Ok(HostValue::String(format!("{s}Mod")))
        );
    }
}
