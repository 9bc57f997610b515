// Copyright 2026 the Binding Boundary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape traits for native function signatures.
//!
//! Generated glue reads each argument through [`ParamType`] and writes the outcome frame through
//! [`ReturnType`]. Both traits are implemented only for the shapes the boundary recognizes, so an
//! unsupported signature fails to compile instead of failing at call time:
//!
//! - parameters: `T` and `Option<T>`
//! - returns: `()`, `T`, `Option<T>`, `Result<(), String>`, `Result<T, String>`,
//!   `Result<Option<T>, String>`
//!
//! for every `T` implementing [`WireValue`].

use alloc::string::String;
use alloc::vec::Vec;

use crate::codec::WireValue;
use crate::codec::fallible::{write_failure, write_returned};
use crate::codec::optional::{decode_option, encode_option};
use crate::format::{DecodeError, WireReader, WireWriter};
use crate::shape::{ParamShape, ReturnShape};

/// A Rust type usable as a binding parameter.
pub trait ParamType: Sized {
    /// The declared shape.
    const SHAPE: ParamShape;

    /// Reads one argument of this shape.
    fn read_param(r: &mut WireReader<'_>) -> Result<Self, DecodeError>;
}

/// A Rust type usable as a binding return type.
pub trait ReturnType {
    /// The declared shape.
    const SHAPE: ReturnShape;

    /// Writes the complete outcome frame for this value.
    fn write_outcome(self, w: &mut WireWriter);
}

impl ReturnType for () {
    const SHAPE: ReturnShape = ReturnShape::UNIT;

    fn write_outcome(self, w: &mut WireWriter) {
        write_returned(w);
    }
}

impl ReturnType for Result<(), String> {
    const SHAPE: ReturnShape = ReturnShape::UNIT.with_fallible();

    fn write_outcome(self, w: &mut WireWriter) {
        match self {
            Ok(()) => write_returned(w),
            Err(e) => write_failure(&e, w),
        }
    }
}

macro_rules! impl_shapes {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ParamType for $ty {
                const SHAPE: ParamShape = ParamShape::required(<$ty as WireValue>::VALUE_TYPE);

                fn read_param(r: &mut WireReader<'_>) -> Result<Self, DecodeError> {
                    <$ty as WireValue>::decode(r)
                }
            }

            impl ParamType for Option<$ty> {
                const SHAPE: ParamShape = ParamShape::optional(<$ty as WireValue>::VALUE_TYPE);

                fn read_param(r: &mut WireReader<'_>) -> Result<Self, DecodeError> {
                    decode_option::<$ty>(r)
                }
            }

            impl ReturnType for $ty {
                const SHAPE: ReturnShape = ReturnShape::value(<$ty as WireValue>::VALUE_TYPE);

                fn write_outcome(self, w: &mut WireWriter) {
                    write_returned(w);
                    self.encode(w);
                }
            }

            impl ReturnType for Option<$ty> {
                const SHAPE: ReturnShape =
                    ReturnShape::value(<$ty as WireValue>::VALUE_TYPE).with_optional();

                fn write_outcome(self, w: &mut WireWriter) {
                    write_returned(w);
                    encode_option(self.as_ref(), w);
                }
            }

            impl ReturnType for Result<$ty, String> {
                const SHAPE: ReturnShape =
                    ReturnShape::value(<$ty as WireValue>::VALUE_TYPE).with_fallible();

                fn write_outcome(self, w: &mut WireWriter) {
                    match self {
                        Ok(v) => v.write_outcome(w),
                        Err(e) => write_failure(&e, w),
                    }
                }
            }

            impl ReturnType for Result<Option<$ty>, String> {
                const SHAPE: ReturnShape = ReturnShape::value(<$ty as WireValue>::VALUE_TYPE)
                    .with_optional()
                    .with_fallible();

                fn write_outcome(self, w: &mut WireWriter) {
                    match self {
                        Ok(v) => v.write_outcome(w),
                        Err(e) => write_failure(&e, w),
                    }
                }
            }
        )*
    };
}

impl_shapes!(i32, i64, f32, f64, bool, String, Vec<u8>, Vec<String>);
