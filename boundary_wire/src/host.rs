// Copyright 2026 the Binding Boundary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-side codecs.
//!
//! These are the mirror image of [`crate::codec`] and [`crate::native`]: they encode
//! [`HostValue`] arguments according to a declared [`ParamShape`], and decode an outcome frame
//! according to a declared [`ReturnShape`]. Decoding applies the wrappers outside-in: the outcome
//! tag first, then the presence tag, then the base value.

use alloc::string::String;
use core::fmt;

use crate::codec::WireValue;
use crate::codec::fallible::{OutcomeTag, read_message, read_outcome_tag};
use crate::codec::optional::{read_presence, write_presence};
use crate::codec::sequence::{encode_bytes, encode_str_seq};
use crate::codec::text::encode_str;
use crate::format::{DecodeError, WireReader, WireWriter};
use crate::shape::{ParamShape, ReturnShape};
use crate::value::{HostValue, ValueType};

/// Why a host argument could not be encoded for its declared shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArgError {
    /// `null` was passed for a parameter that is not `Option<_>`.
    Null,
    /// The host value's type does not match the declared base type.
    TypeMismatch {
        /// Declared base type.
        expected: ValueType,
        /// Host spelling of the value actually passed.
        found: &'static str,
    },
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null passed for a non-optional parameter"),
            Self::TypeMismatch { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
        }
    }
}

impl core::error::Error for ArgError {}

/// Appends one host argument in the encoding of `shape`.
///
/// Nothing is written when an error is returned.
pub fn encode_arg(value: &HostValue, shape: ParamShape, w: &mut WireWriter) -> Result<(), ArgError> {
    if value.is_null() {
        if !shape.optional {
            return Err(ArgError::Null);
        }
        write_presence(false, w);
        return Ok(());
    }
    if value.value_type() != Some(shape.value_type) {
        return Err(ArgError::TypeMismatch {
            expected: shape.value_type,
            found: value.kind_name(),
        });
    }
    if shape.optional {
        write_presence(true, w);
    }
    encode_base(value, w);
    Ok(())
}

fn encode_base(value: &HostValue, w: &mut WireWriter) {
    match value {
        HostValue::Void | HostValue::Null => {}
        HostValue::Int(v) => v.encode(w),
        HostValue::Long(v) => v.encode(w),
        HostValue::Float(v) => v.encode(w),
        HostValue::Double(v) => v.encode(w),
        HostValue::Boolean(v) => v.encode(w),
        HostValue::String(s) => encode_str(s, w),
        HostValue::ByteArray(b) => encode_bytes(b, w),
        HostValue::StringArray(items) => encode_str_seq(items, w),
    }
}

fn decode_base(value_type: ValueType, r: &mut WireReader<'_>) -> Result<HostValue, DecodeError> {
    Ok(match value_type {
        ValueType::I32 => HostValue::Int(WireValue::decode(r)?),
        ValueType::I64 => HostValue::Long(WireValue::decode(r)?),
        ValueType::F32 => HostValue::Float(WireValue::decode(r)?),
        ValueType::F64 => HostValue::Double(WireValue::decode(r)?),
        ValueType::Bool => HostValue::Boolean(WireValue::decode(r)?),
        ValueType::Str => HostValue::String(WireValue::decode(r)?),
        ValueType::Bytes => HostValue::ByteArray(WireValue::decode(r)?),
        ValueType::StrSeq => HostValue::StringArray(WireValue::decode(r)?),
    })
}

/// A decoded call outcome, as the host sees it.
#[derive(Clone, Debug, PartialEq)]
pub enum HostOutcome {
    /// The call returned this value ([`HostValue::Void`] for unit, [`HostValue::Null`] for an
    /// absent optional).
    Returned(HostValue),
    /// The native function returned `Err(message)`.
    Failure(String),
    /// The native function panicked.
    Panic(String),
}

/// Decodes a complete outcome frame for a function declared as `shape`.
///
/// A failure frame for a non-fallible shape is malformed: the native side can only report failure
/// through a declared `Result`.
pub fn decode_outcome(bytes: &[u8], shape: ReturnShape) -> Result<HostOutcome, DecodeError> {
    let mut r = WireReader::new(bytes);
    let outcome = match read_outcome_tag(&mut r)? {
        OutcomeTag::Panic => HostOutcome::Panic(read_message(&mut r)?),
        OutcomeTag::Failure if shape.fallible => HostOutcome::Failure(read_message(&mut r)?),
        OutcomeTag::Failure => {
            return Err(DecodeError::InvalidTag {
                what: "outcome",
                tag: OutcomeTag::Failure.to_byte(),
            });
        }
        OutcomeTag::Returned => HostOutcome::Returned(decode_returned(shape, &mut r)?),
    };
    r.finish()?;
    Ok(outcome)
}

fn decode_returned(shape: ReturnShape, r: &mut WireReader<'_>) -> Result<HostValue, DecodeError> {
    let Some(value_type) = shape.value_type else {
        return Ok(HostValue::Void);
    };
    if shape.optional && !read_presence(r)? {
        return Ok(HostValue::Null);
    }
    decode_base(value_type, r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::ReturnType;
    use alloc::vec;
    use alloc::vec::Vec;

    fn outcome_of<T: ReturnType>(v: T) -> HostOutcome {
        let mut w = WireWriter::new();
        v.write_outcome(&mut w);
        decode_outcome(w.as_bytes(), T::SHAPE).unwrap()
    }

    #[test]
    fn null_is_rejected_for_required_params() {
        let mut w = WireWriter::new();
        assert_eq!(
            encode_arg(&HostValue::Null, ParamShape::required(ValueType::Str), &mut w),
            Err(ArgError::Null)
        );
        assert!(w.is_empty());
    }

    #[test]
    fn null_and_empty_encode_differently() {
        let shape = ParamShape::optional(ValueType::Bytes);
        let mut null = WireWriter::new();
        encode_arg(&HostValue::Null, shape, &mut null).unwrap();
        let mut empty = WireWriter::new();
        encode_arg(&HostValue::ByteArray(vec![]), shape, &mut empty).unwrap();
        assert_eq!(null.as_bytes(), &[0]);
        assert_eq!(empty.as_bytes(), &[1, 0]);
    }

    #[test]
    fn mismatched_host_type_is_reported() {
        let mut w = WireWriter::new();
        assert_eq!(
            encode_arg(&HostValue::Long(1), ParamShape::required(ValueType::I32), &mut w),
            Err(ArgError::TypeMismatch {
                expected: ValueType::I32,
                found: "long"
            })
        );
    }

    #[test]
    fn returns_decode_per_shape() {
        assert_eq!(outcome_of(()), HostOutcome::Returned(HostValue::Void));
        assert_eq!(outcome_of(10_i32), HostOutcome::Returned(HostValue::Int(10)));
        assert_eq!(
            outcome_of(None::<String>),
            HostOutcome::Returned(HostValue::Null)
        );
        assert_eq!(
            outcome_of(Some(String::from("string"))),
            HostOutcome::Returned(HostValue::String("string".into()))
        );
        assert_eq!(
            outcome_of(Ok::<Vec<u8>, String>(vec![8, 16])),
            HostOutcome::Returned(HostValue::ByteArray(vec![8, 16]))
        );
        assert_eq!(
            outcome_of(Err::<bool, String>("Error Text".into())),
            HostOutcome::Failure("Error Text".into())
        );
        assert_eq!(
            outcome_of(Ok::<Option<i64>, String>(None)),
            HostOutcome::Returned(HostValue::Null)
        );
    }

    #[test]
    fn failure_frame_for_infallible_shape_is_malformed() {
        let mut w = WireWriter::new();
        crate::codec::fallible::write_failure("nope", &mut w);
        assert!(matches!(
            decode_outcome(w.as_bytes(), ReturnShape::value(ValueType::I32)),
            Err(DecodeError::InvalidTag { what: "outcome", .. })
        ));
    }

    #[test]
    fn panic_frame_decodes_for_any_shape() {
        let mut w = WireWriter::new();
        crate::codec::fallible::write_panic("boom", &mut w);
        for shape in [
            ReturnShape::UNIT,
            ReturnShape::value(ValueType::F64).with_fallible(),
            ReturnShape::value(ValueType::Str).with_optional(),
        ] {
            assert_eq!(
                decode_outcome(w.as_bytes(), shape),
                Ok(HostOutcome::Panic("boom".into()))
            );
        }
    }

    #[test]
    fn trailing_bytes_after_return_are_malformed() {
        let bytes = [0, 20, 99];
        assert_eq!(
            decode_outcome(&bytes, ReturnShape::value(ValueType::I32)),
            Err(DecodeError::TrailingBytes { count: 1 })
        );
    }
}
