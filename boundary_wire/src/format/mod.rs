// Copyright 2026 the Binding Boundary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Byte-level wire format shared by both sides of the boundary.
//!
//! Every value that crosses the boundary is written into a call-local [`WireWriter`] and read back
//! through a [`WireReader`]. Integers and lengths use LEB128 (see [`leb128`]); floats use their
//! little-endian IEEE754 bit pattern so that every bit pattern survives the crossing.

use alloc::vec::Vec;
use core::fmt;

pub mod leb128;

/// A wire decoding error.
///
/// All variants describe a *malformed payload*: the producing side violated the wire contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The buffer ended in the middle of a value.
    UnexpectedEof,
    /// An offset computation overflowed.
    OutOfBounds,
    /// A LEB128 varint was too long or had invalid high bits.
    InvalidVarint,
    /// A varint decoded fine but does not fit the declared integer width.
    IntegerOutOfRange,
    /// A boolean byte was neither `0` nor `1`.
    InvalidBool(u8),
    /// Text bytes were not valid UTF-8.
    InvalidUtf8,
    /// A tag byte had no meaning for the frame being read.
    InvalidTag {
        /// Which frame the tag belongs to.
        what: &'static str,
        /// The offending tag.
        tag: u8,
    },
    /// A declared element count or byte length exceeds what is left in the buffer.
    LengthMismatch {
        /// The declared length.
        declared: u64,
        /// Bytes left in the buffer.
        remaining: usize,
    },
    /// Bytes were left over after a complete frame.
    TrailingBytes {
        /// Number of unread bytes.
        count: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => write!(f, "unexpected end of payload"),
            Self::OutOfBounds => write!(f, "payload offset out of bounds"),
            Self::InvalidVarint => write!(f, "invalid LEB128 varint"),
            Self::IntegerOutOfRange => write!(f, "integer out of range for declared width"),
            Self::InvalidBool(b) => write!(f, "invalid boolean byte: {b:#04x}"),
            Self::InvalidUtf8 => write!(f, "text payload is not valid UTF-8"),
            Self::InvalidTag { what, tag } => write!(f, "invalid {what} tag: {tag}"),
            Self::LengthMismatch {
                declared,
                remaining,
            } => write!(
                f,
                "declared length {declared} exceeds remaining payload ({remaining} bytes)"
            ),
            Self::TrailingBytes { count } => {
                write!(f, "{count} trailing bytes after complete payload")
            }
        }
    }
}

impl core::error::Error for DecodeError {}

/// Append-only encoder for a single boundary crossing.
///
/// The writer owns its buffer; handing the bytes to the other side copies or moves them, so no
/// buffer is ever shared between the two sides.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WireWriter {
    buf: Vec<u8>,
}

impl WireWriter {
    /// Creates an empty writer.
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates an empty writer with room for `capacity` bytes.
    #[must_use]
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the encoded bytes.
    #[must_use]
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the writer and returns its buffer.
    #[must_use]
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Writes a single byte.
    #[inline]
    pub fn write_u8(&mut self, b: u8) {
        self.buf.push(b);
    }

    /// Writes raw bytes without a length prefix.
    #[inline]
    pub fn write_raw(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes a length or element count.
    #[inline]
    pub fn write_len(&mut self, len: usize) {
        self.write_uleb128(u64::try_from(len).unwrap_or(u64::MAX));
    }
}

/// Cursor over an encoded payload.
#[derive(Clone, Debug)]
pub struct WireReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> WireReader<'a> {
    /// Creates a reader positioned at the start of `bytes`.
    #[must_use]
    #[inline]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Returns the current read offset.
    #[must_use]
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the number of unread bytes.
    #[must_use]
    #[inline]
    pub fn remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.offset)
    }

    /// Reads a single byte.
    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        let b = *self
            .bytes
            .get(self.offset)
            .ok_or(DecodeError::UnexpectedEof)?;
        self.offset = self.offset.checked_add(1).ok_or(DecodeError::OutOfBounds)?;
        Ok(b)
    }

    /// Reads exactly `len` raw bytes.
    pub fn read_raw(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let end = self.offset.checked_add(len).ok_or(DecodeError::OutOfBounds)?;
        let out = self
            .bytes
            .get(self.offset..end)
            .ok_or(DecodeError::UnexpectedEof)?;
        self.offset = end;
        Ok(out)
    }

    /// Reads a fixed-size byte array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let raw = self.read_raw(N)?;
        let mut out = [0_u8; N];
        out.copy_from_slice(raw);
        Ok(out)
    }

    /// Reads a length or element count and checks it against the unread bytes.
    ///
    /// Every element of every sequence shape occupies at least one byte, so a declared count larger
    /// than the remaining payload can never be satisfied.
    pub fn read_len(&mut self) -> Result<usize, DecodeError> {
        let declared = self.read_uleb128()?;
        let remaining = self.remaining();
        match usize::try_from(declared) {
            Ok(len) if len <= remaining => Ok(len),
            _ => Err(DecodeError::LengthMismatch {
                declared,
                remaining,
            }),
        }
    }

    /// Asserts that the whole payload was consumed.
    pub fn finish(self) -> Result<(), DecodeError> {
        match self.remaining() {
            0 => Ok(()),
            count => Err(DecodeError::TrailingBytes { count }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_len_rejects_counts_past_the_end() {
        let mut w = WireWriter::new();
        w.write_len(3);
        w.write_raw(&[1, 2]);
        let mut r = WireReader::new(w.as_bytes());
        assert_eq!(
            r.read_len(),
            Err(DecodeError::LengthMismatch {
                declared: 3,
                remaining: 2
            })
        );
    }

    #[test]
    fn finish_reports_trailing_bytes() {
        let bytes = [0_u8, 1, 2];
        let mut r = WireReader::new(&bytes);
        assert_eq!(r.read_u8(), Ok(0));
        assert_eq!(r.finish(), Err(DecodeError::TrailingBytes { count: 2 }));
    }

    #[test]
    fn read_raw_past_end_is_eof() {
        let bytes = [7_u8];
        let mut r = WireReader::new(&bytes);
        assert_eq!(r.read_array::<4>(), Err(DecodeError::UnexpectedEof));
        // A failed read leaves the cursor where it was.
        assert_eq!(r.offset(), 0);
    }
}
