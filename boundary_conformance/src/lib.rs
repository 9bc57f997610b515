// Copyright 2026 the Binding Boundary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conformance fixture for the binding boundary.
//!
//! [`ffi`] is the reference binding set exercised by this crate's `tests/`: identity and
//! modifying passthroughs for every base type, panicking functions, explicit failures, an aliased
//! function, a deprecated function, and sequence and optional parameters and returns. [`dispatcher`] wires it up the way a
//! host would.

use boundary_dispatch::{Dispatcher, Limits, TableError};

/// Host class name the fixture is published under.
pub const CLASS_NAME: &str = "com.boundary.tests.MyTestClass";

/// Native library name the fixture class loads.
pub const LIBRARY_NAME: &str = "bindings";

/// Reference bindings.
pub mod ffi {
    boundary_dispatch::bindings! {
        /// Returns `value` unchanged.
        #[binding(panic_free)]
        fn passthroughI32(value: i32) -> i32 {
            value
        }

        /// Returns `value` unchanged.
        fn passthroughI64(value: i64) -> i64 {
            value
        }

        /// Returns `value` unchanged.
        fn passthroughF64(value: f64) -> f64 {
            value
        }

        /// Returns `value` unchanged.
        fn passthroughF32(value: f32) -> f32 {
            value
        }

        /// Returns `value` unchanged.
        fn passthroughBool(value: bool) -> bool {
            value
        }

        /// Returns `value` unchanged.
        fn passthroughString(value: String) -> String {
            value
        }

        /// Returns `value + 1`, wrapping like host integer arithmetic.
        fn passthroughModI32(value: i32) -> i32 {
            value.wrapping_add(1)
        }

        /// Returns `value + 1`, wrapping like host integer arithmetic.
        fn passthroughModI64(value: i64) -> i64 {
            value.wrapping_add(1)
        }

        /// Returns `value + 1.0`.
        fn passthroughModF64(value: f64) -> f64 {
            value + 1.0
        }

        /// Returns `value + 1.0`.
        fn passthroughModF32(value: f32) -> f32 {
            value + 1.0
        }

        /// Returns `!value`.
        fn passthroughModBool(value: bool) -> bool {
            !value
        }

        /// Appends `Mod` to `value`.
        fn passthroughModString(value: String) -> String {
            format!("{value}Mod")
        }

        /// Always panics.
        fn shouldPanic() {
            panic!();
        }

        /// Always panics, despite declaring a fallible return.
        fn shouldPanicResultF64() -> Result<f64, String> {
            panic!("panic in shouldPanicResultF64");
        }

        /// Always panics with a formatted message.
        fn shouldPanicResultString() -> Result<String, String> {
            panic!("{} {}", "formatted", "panic");
        }

        /// Panics while building its `Ok` value.
        #[allow(
            unreachable_code,
            clippy::diverging_sub_expression,
            reason = "the panic happens before the value exists"
        )]
        fn shouldPanicResultBool() -> Result<bool, String> {
            Ok(panic!("panic in shouldPanicResultBool"))
        }

        /// Returns `Ok(10)`.
        fn returnsResultOk() -> Result<i32, String> {
            Ok(10)
        }

        /// Fails with `Error Text`.
        fn returnsResultErrOkUnit() -> Result<(), String> {
            Err("Error Text".to_owned())
        }

        /// Fails with `Error Text`.
        fn returnsResultErrOkString() -> Result<String, String> {
            Err("Error Text".to_owned())
        }

        /// Fails with `Error Text`.
        fn returnsResultErrOkBool() -> Result<bool, String> {
            Err("Error Text".to_owned())
        }

        /// Does nothing; exposed to the host as `customPublicName`.
        fn internalName() as "customPublicName" {}

        /// Returns `value` unchanged.
        #[deprecated = "use passthroughI32"]
        fn deprecatedPassthroughI32(value: i32) -> i32 {
            value
        }

        /// Concatenates `values`.
        fn stringVecArgument(values: Vec<String>) -> String {
            values.concat()
        }

        /// Formats `values` as a list, e.g. `[8, 16]`.
        fn bytesVecArgument(values: Vec<u8>) -> String {
            format!("{values:?}")
        }

        /// Returns `values` unchanged.
        fn bytesVecReturn(values: Vec<u8>) -> Vec<u8> {
            values
        }

        /// Returns `Ok(values)`.
        fn bytesVecReturnResult(values: Vec<u8>) -> Result<Vec<u8>, String> {
            Ok(values)
        }

        /// Fails with `error`.
        fn bytesVecReturnResultErr() -> Result<Vec<u8>, String> {
            Err("error".to_owned())
        }

        /// Formats the option, e.g. `None` or `Some("")`.
        fn optionString(value: Option<String>) -> String {
            format!("{value:?}")
        }

        /// Sums the bytes, or returns -1 when absent.
        fn optionByteArray(value: Option<Vec<u8>>) -> i32 {
            match value {
                Some(values) => values.iter().map(|&b| i32::from(b)).sum(),
                None => -1,
            }
        }

        /// Formats the option, e.g. `None` or `Some(["one"])`.
        fn optionStringArray(value: Option<Vec<String>>) -> String {
            format!("{value:?}")
        }

        /// Returns `None` when asked to, `Some("string")` otherwise.
        fn optionStringReturn(is_none: bool) -> Option<String> {
            if is_none { None } else { Some("string".to_owned()) }
        }

        /// Returns `value` unchanged; absent stays absent.
        fn optionI64Return(value: Option<i64>) -> Option<i64> {
            value
        }

        /// Returns `value` unchanged.
        fn optionEchoI32(value: Option<i32>) -> Option<i32> {
            value
        }

        /// Returns `value` unchanged.
        fn optionEchoF32(value: Option<f32>) -> Option<f32> {
            value
        }

        /// Returns `value` unchanged.
        fn optionEchoF64(value: Option<f64>) -> Option<f64> {
            value
        }

        /// Returns `value` unchanged.
        fn optionEchoBool(value: Option<bool>) -> Option<bool> {
            value
        }

        /// Returns `value` unchanged.
        fn optionEchoString(value: Option<String>) -> Option<String> {
            value
        }

        /// Returns `value` unchanged.
        fn optionEchoBytes(value: Option<Vec<u8>>) -> Option<Vec<u8>> {
            value
        }

        /// Returns `value` unchanged.
        fn optionEchoStringArray(value: Option<Vec<String>>) -> Option<Vec<String>> {
            value
        }

        /// Returns `Ok(value)`, or fails with `failed` when asked to.
        fn optionResultF32(value: Option<f32>, fail: bool) -> Result<Option<f32>, String> {
            if fail { Err("failed".to_owned()) } else { Ok(value) }
        }

        /// Returns `Ok(value)`, or fails with `failed` when asked to.
        fn optionResultBool(value: Option<bool>, fail: bool) -> Result<Option<bool>, String> {
            if fail { Err("failed".to_owned()) } else { Ok(value) }
        }

        /// Returns `Ok(value)`, or fails with `failed` when asked to.
        fn optionResultBytes(value: Option<Vec<u8>>, fail: bool) -> Result<Option<Vec<u8>>, String> {
            if fail { Err("failed".to_owned()) } else { Ok(value) }
        }

        /// Returns `Ok(value)`, or fails with `failed` when asked to.
        fn optionResultStringArray(
            value: Option<Vec<String>>,
            fail: bool,
        ) -> Result<Option<Vec<String>>, String> {
            if fail { Err("failed".to_owned()) } else { Ok(value) }
        }

        /// Returns `Ok(None)` for `null`, `Ok(Some)` otherwise, and fails on an empty string.
        fn optionStringResult(value: Option<String>) -> Result<Option<String>, String> {
            match value {
                Some(s) if s.is_empty() => Err("empty".to_owned()),
                other => Ok(other),
            }
        }
    }
}

/// Builds a dispatcher over [`ffi`].
pub fn dispatcher(limits: Limits) -> Result<Dispatcher, TableError> {
    Ok(Dispatcher::new(ffi::binding_table()?, limits))
}
