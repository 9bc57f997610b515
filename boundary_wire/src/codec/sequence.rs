// Copyright 2026 the Binding Boundary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered sequences: an element count followed by the elements.
//!
//! Byte sequences carry raw bytes; text sequences carry individually length-prefixed texts.

use alloc::string::String;
use alloc::vec::Vec;

use super::WireValue;
use super::text::{decode_str, encode_str};
use crate::format::{DecodeError, WireReader, WireWriter};
use crate::value::ValueType;

/// Appends a byte sequence.
pub fn encode_bytes(bytes: &[u8], w: &mut WireWriter) {
    w.write_len(bytes.len());
    w.write_raw(bytes);
}

/// Appends a text sequence.
pub fn encode_str_seq<S: AsRef<str>>(items: &[S], w: &mut WireWriter) {
    w.write_len(items.len());
    for s in items {
        encode_str(s.as_ref(), w);
    }
}

/// Reads a text sequence into owned strings.
pub fn decode_str_seq(r: &mut WireReader<'_>) -> Result<Vec<String>, DecodeError> {
    let count = r.read_len()?;
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        out.push(String::from(decode_str(r)?));
    }
    Ok(out)
}

impl WireValue for Vec<u8> {
    const VALUE_TYPE: ValueType = ValueType::Bytes;

    fn encode(&self, w: &mut WireWriter) {
        encode_bytes(self, w);
    }

    fn decode(r: &mut WireReader<'_>) -> Result<Self, DecodeError> {
        let len = r.read_len()?;
        Ok(r.read_raw(len)?.to_vec())
    }
}

impl WireValue for Vec<String> {
    const VALUE_TYPE: ValueType = ValueType::StrSeq;

    fn encode(&self, w: &mut WireWriter) {
        encode_str_seq(self, w);
    }

    fn decode(r: &mut WireReader<'_>) -> Result<Self, DecodeError> {
        decode_str_seq(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{from_wire, to_wire};
    use alloc::vec;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| String::from(*s)).collect()
    }

    #[test]
    fn byte_sequences_keep_order_and_length() {
        for v in [vec![], vec![8_u8], vec![8, 16], (0..=255).collect::<Vec<u8>>()] {
            assert_eq!(from_wire::<Vec<u8>>(to_wire(&v).as_bytes()), Ok(v));
        }
    }

    #[test]
    fn text_sequences_keep_elements() {
        for v in [
            strings(&[]),
            strings(&["one"]),
            strings(&["one", "two", "three"]),
            strings(&["", "", ""]),
        ] {
            assert_eq!(from_wire::<Vec<String>>(to_wire(&v).as_bytes()), Ok(v));
        }
    }

    #[test]
    fn empty_elements_are_not_dropped() {
        let v = strings(&["", "x", ""]);
        let back = from_wire::<Vec<String>>(to_wire(&v).as_bytes()).unwrap();
        assert_eq!(back.len(), 3);
    }

    #[test]
    fn element_count_beyond_payload_is_rejected() {
        // Claims two texts but carries only one.
        let bytes = [2, 1, b'a'];
        assert_eq!(
            from_wire::<Vec<String>>(&bytes),
            Err(DecodeError::UnexpectedEof)
        );
        let bytes = [4, 1, b'a'];
        assert_eq!(
            from_wire::<Vec<String>>(&bytes),
            Err(DecodeError::LengthMismatch {
                declared: 4,
                remaining: 2
            })
        );
        let bytes = [9, 1, 2];
        assert!(matches!(
            from_wire::<Vec<u8>>(&bytes),
            Err(DecodeError::LengthMismatch { declared: 9, .. })
        ));
    }
}
