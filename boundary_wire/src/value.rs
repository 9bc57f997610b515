// Copyright 2026 the Binding Boundary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value model on both sides of the boundary.
//!
//! [`ValueType`] names the eight base types a binding may use. [`HostValue`] is the host
//! environment's view of a value: it has no `Option` or `Result`, only a nullable reference marker
//! ([`HostValue::Null`]) and a marker for methods without a return value ([`HostValue::Void`]).

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// A base value type that can cross the boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Signed 32-bit integer.
    I32,
    /// Signed 64-bit integer.
    I64,
    /// 32-bit float.
    F32,
    /// 64-bit float.
    F64,
    /// Boolean.
    Bool,
    /// UTF-8 text.
    Str,
    /// Byte sequence.
    Bytes,
    /// Sequence of UTF-8 text values.
    StrSeq,
}

impl ValueType {
    /// Returns the native Rust spelling of this type.
    #[must_use]
    pub const fn rust_name(self) -> &'static str {
        match self {
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Bool => "bool",
            Self::Str => "String",
            Self::Bytes => "Vec<u8>",
            Self::StrSeq => "Vec<String>",
        }
    }

    /// Returns `true` for fixed-width primitives (no heap payload).
    #[must_use]
    pub const fn is_primitive(self) -> bool {
        matches!(
            self,
            Self::I32 | Self::I64 | Self::F32 | Self::F64 | Self::Bool
        )
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rust_name())
    }
}

/// A value as the host environment sees it.
///
/// Float variants compare with IEEE754 semantics under `PartialEq` (so `NaN != NaN`); use
/// [`HostValue::bitwise_eq`] when bit patterns matter.
#[derive(Clone, Debug, PartialEq)]
pub enum HostValue {
    /// Return marker for methods without a value.
    Void,
    /// The null reference.
    Null,
    /// `int`.
    Int(i32),
    /// `long`.
    Long(i64),
    /// `float`.
    Float(f32),
    /// `double`.
    Double(f64),
    /// `boolean`.
    Boolean(bool),
    /// `String`.
    String(String),
    /// `byte[]`.
    ByteArray(Vec<u8>),
    /// `String[]`.
    StringArray(Vec<String>),
}

impl HostValue {
    /// Returns the host spelling of this value's runtime type.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Null => "null",
            Self::Int(_) => "int",
            Self::Long(_) => "long",
            Self::Float(_) => "float",
            Self::Double(_) => "double",
            Self::Boolean(_) => "boolean",
            Self::String(_) => "String",
            Self::ByteArray(_) => "byte[]",
            Self::StringArray(_) => "String[]",
        }
    }

    /// Returns `true` for [`HostValue::Null`].
    #[must_use]
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the base type this value carries, if any.
    #[must_use]
    pub const fn value_type(&self) -> Option<ValueType> {
        match self {
            Self::Void | Self::Null => None,
            Self::Int(_) => Some(ValueType::I32),
            Self::Long(_) => Some(ValueType::I64),
            Self::Float(_) => Some(ValueType::F32),
            Self::Double(_) => Some(ValueType::F64),
            Self::Boolean(_) => Some(ValueType::Bool),
            Self::String(_) => Some(ValueType::Str),
            Self::ByteArray(_) => Some(ValueType::Bytes),
            Self::StringArray(_) => Some(ValueType::StrSeq),
        }
    }

    /// Equality that compares floats by bit pattern.
    #[must_use]
    pub fn bitwise_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Double(a), Self::Double(b)) => a.to_bits() == b.to_bits(),
            _ => self == other,
        }
    }
}

macro_rules! host_value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for HostValue {
                #[inline]
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

host_value_from! {
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    bool => Boolean,
    String => String,
    Vec<u8> => ByteArray,
    Vec<String> => StringArray,
}

impl From<&str> for HostValue {
    #[inline]
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl<T: Into<Self>> From<Option<T>> for HostValue {
    #[inline]
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
