// Copyright 2026 the Binding Boundary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! LEB128 varints for lengths (unsigned) and integers (signed).
//!
//! Decoding accepts non-canonical (zero-padded) encodings but rejects anything longer than ten
//! bytes or carrying bits beyond 64.

use super::{DecodeError, WireReader, WireWriter};

const MAX_LEN: usize = 10;

impl WireWriter {
    /// Writes an unsigned LEB128 varint.
    pub fn write_uleb128(&mut self, mut value: u64) {
        while value >= 0x80 {
            self.write_u8((value as u8 & 0x7f) | 0x80);
            value >>= 7;
        }
        self.write_u8(value as u8);
    }

    /// Writes a signed LEB128 varint.
    pub fn write_sleb128(&mut self, mut value: i64) {
        loop {
            let low = (value & 0x7f) as u8;
            value >>= 7;
            let sign_clear = low & 0x40 == 0;
            if (value == 0 && sign_clear) || (value == -1 && !sign_clear) {
                self.write_u8(low);
                return;
            }
            self.write_u8(low | 0x80);
        }
    }
}

impl WireReader<'_> {
    /// Reads an unsigned LEB128 varint.
    pub fn read_uleb128(&mut self) -> Result<u64, DecodeError> {
        let mut value = 0_u64;
        for i in 0..MAX_LEN {
            let b = self.read_u8()?;
            let payload = b & 0x7f;
            // The tenth byte only has room for bit 63.
            if i == MAX_LEN - 1 && payload > 1 {
                return Err(DecodeError::InvalidVarint);
            }
            value |= u64::from(payload) << (7 * i);
            if b & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(DecodeError::InvalidVarint)
    }

    /// Reads a signed LEB128 varint.
    pub fn read_sleb128(&mut self) -> Result<i64, DecodeError> {
        let mut value = 0_i64;
        for i in 0..MAX_LEN {
            let b = self.read_u8()?;
            let payload = b & 0x7f;
            let shift = 7 * i;
            if i == MAX_LEN - 1 {
                // Only a pure sign extension is valid in the tenth byte.
                if b & 0x80 != 0 || (payload != 0x00 && payload != 0x7f) {
                    return Err(DecodeError::InvalidVarint);
                }
                value |= i64::from(payload) << shift;
                return Ok(value);
            }
            value |= i64::from(payload) << shift;
            if b & 0x80 == 0 {
                let used = shift + 7;
                if b & 0x40 != 0 {
                    value |= !0_i64 << used;
                }
                return Ok(value);
            }
        }
        Err(DecodeError::InvalidVarint)
    }

    /// Reads a signed varint that must fit an `i32`.
    pub fn read_sleb128_i32(&mut self) -> Result<i32, DecodeError> {
        i32::try_from(self.read_sleb128()?).map_err(|_| DecodeError::IntegerOutOfRange)
    }
}
