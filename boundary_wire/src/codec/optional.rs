// Copyright 2026 the Binding Boundary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presence tracking: a tag byte (`0` absent, `1` present) followed by the value when present.
//!
//! The tag is independent of the value, so a present empty string or empty sequence is never
//! confused with absence.

use super::WireValue;
use crate::format::{DecodeError, WireReader, WireWriter};

/// Tag for an absent value.
pub const ABSENT: u8 = 0;
/// Tag for a present value.
pub const PRESENT: u8 = 1;

/// Writes only the presence tag.
#[inline]
pub fn write_presence(present: bool, w: &mut WireWriter) {
    w.write_u8(if present { PRESENT } else { ABSENT });
}

/// Reads a presence tag.
pub fn read_presence(r: &mut WireReader<'_>) -> Result<bool, DecodeError> {
    match r.read_u8()? {
        ABSENT => Ok(false),
        PRESENT => Ok(true),
        tag => Err(DecodeError::InvalidTag {
            what: "presence",
            tag,
        }),
    }
}

/// Appends an optional value.
pub fn encode_option<T: WireValue>(value: Option<&T>, w: &mut WireWriter) {
    write_presence(value.is_some(), w);
    if let Some(v) = value {
        v.encode(w);
    }
}

/// Reads an optional value.
pub fn decode_option<T: WireValue>(r: &mut WireReader<'_>) -> Result<Option<T>, DecodeError> {
    if read_presence(r)? {
        T::decode(r).map(Some)
    } else {
        Ok(None)
    }
}
