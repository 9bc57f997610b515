// Copyright 2026 the Binding Boundary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! UTF-8 text: a byte length followed by the bytes, copied verbatim.

use alloc::string::String;

use super::WireValue;
use crate::format::{DecodeError, WireReader, WireWriter};
use crate::value::ValueType;

/// Appends `s` as length-prefixed UTF-8.
pub fn encode_str(s: &str, w: &mut WireWriter) {
    w.write_len(s.len());
    w.write_raw(s.as_bytes());
}

/// Reads length-prefixed UTF-8 without copying.
pub fn decode_str<'a>(r: &mut WireReader<'a>) -> Result<&'a str, DecodeError> {
    let len = r.read_len()?;
    let raw = r.read_raw(len)?;
    core::str::from_utf8(raw).map_err(|_| DecodeError::InvalidUtf8)
}

impl WireValue for String {
    const VALUE_TYPE: ValueType = ValueType::Str;

    fn encode(&self, w: &mut WireWriter) {
        encode_str(self, w);
    }

    fn decode(r: &mut WireReader<'_>) -> Result<Self, DecodeError> {
        decode_str(r).map(Self::from)
    }
}
