// Copyright 2026 the Binding Boundary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Native-side codecs.
//!
//! Each base type implements [`WireValue`]; the wrappers compose on top:
//!
//! - [`optional`] adds present/absent tracking to any [`WireValue`].
//! - [`fallible`] frames a whole call outcome (returned / failure / panic).
//!
//! The host-side counterparts live in [`crate::host`]; both sides agree on the same bytes.

use crate::format::{DecodeError, WireReader, WireWriter};
use crate::value::ValueType;

pub mod fallible;
pub mod optional;
pub mod primitive;
pub mod sequence;
pub mod text;

/// A native base type with a canonical wire encoding.
pub trait WireValue: Sized {
    /// The boundary type this Rust type maps to.
    const VALUE_TYPE: ValueType;

    /// Appends the encoding of `self`.
    fn encode(&self, w: &mut WireWriter);

    /// Reads one value.
    fn decode(r: &mut WireReader<'_>) -> Result<Self, DecodeError>;
}

/// Encodes `value` into a fresh buffer.
#[must_use]
pub fn to_wire<T: WireValue>(value: &T) -> WireWriter {
    let mut w = WireWriter::new();
    value.encode(&mut w);
    w
}

/// Decodes exactly one `T` from `bytes`, rejecting trailing bytes.
pub fn from_wire<T: WireValue>(bytes: &[u8]) -> Result<T, DecodeError> {
    let mut r = WireReader::new(bytes);
    let v = T::decode(&mut r)?;
    r.finish()?;
    Ok(v)
}
