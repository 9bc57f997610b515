// Copyright 2026 the Binding Boundary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host type spellings for declared shapes.

use boundary_wire::{ParamShape, ReturnShape, ValueType};

/// Returns the host type for a base value type.
///
/// Optional primitives need a nullable host type, so `boxed` selects the reference form.
#[must_use]
pub fn host_type(value_type: ValueType, boxed: bool) -> &'static str {
    if boxed && value_type.is_primitive() {
        return match value_type {
            ValueType::I32 => "Integer",
            ValueType::I64 => "Long",
            ValueType::F32 => "Float",
            ValueType::F64 => "Double",
            _ => "Boolean",
        };
    }
    match value_type {
        ValueType::I32 => "int",
        ValueType::I64 => "long",
        ValueType::F32 => "float",
        ValueType::F64 => "double",
        ValueType::Bool => "boolean",
        ValueType::Str => "String",
        ValueType::Bytes => "byte[]",
        ValueType::StrSeq => "String[]",
    }
}

/// Host type of a parameter.
#[must_use]
pub fn param_type(shape: ParamShape) -> &'static str {
    host_type(shape.value_type, shape.optional)
}

/// Host type of a return value. Fallibility does not change the type; failures are thrown.
#[must_use]
pub fn return_type(shape: ReturnShape) -> &'static str {
    match shape.value_type {
        None => "void",
        Some(value_type) => host_type(value_type, shape.optional),
    }
}
