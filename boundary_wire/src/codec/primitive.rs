// Copyright 2026 the Binding Boundary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-width primitives: integers as signed LEB128, floats as raw IEEE754 bits, booleans as a
//! single `0`/`1` byte.

use super::WireValue;
use crate::format::{DecodeError, WireReader, WireWriter};
use crate::value::ValueType;

impl WireValue for i32 {
    const VALUE_TYPE: ValueType = ValueType::I32;

    fn encode(&self, w: &mut WireWriter) {
        w.write_sleb128(i64::from(*self));
    }

    fn decode(r: &mut WireReader<'_>) -> Result<Self, DecodeError> {
        r.read_sleb128_i32()
    }
}

impl WireValue for i64 {
    const VALUE_TYPE: ValueType = ValueType::I64;

    fn encode(&self, w: &mut WireWriter) {
        w.write_sleb128(*self);
    }

    fn decode(r: &mut WireReader<'_>) -> Result<Self, DecodeError> {
        r.read_sleb128()
    }
}

impl WireValue for f32 {
    const VALUE_TYPE: ValueType = ValueType::F32;

    fn encode(&self, w: &mut WireWriter) {
        w.write_raw(&self.to_bits().to_le_bytes());
    }

    fn decode(r: &mut WireReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self::from_bits(u32::from_le_bytes(r.read_array()?)))
    }
}

impl WireValue for f64 {
    const VALUE_TYPE: ValueType = ValueType::F64;

    fn encode(&self, w: &mut WireWriter) {
        w.write_raw(&self.to_bits().to_le_bytes());
    }

    fn decode(r: &mut WireReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self::from_bits(u64::from_le_bytes(r.read_array()?)))
    }
}

impl WireValue for bool {
    const VALUE_TYPE: ValueType = ValueType::Bool;

    fn encode(&self, w: &mut WireWriter) {
        w.write_u8(u8::from(*self));
    }

    fn decode(r: &mut WireReader<'_>) -> Result<Self, DecodeError> {
        match r.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            b => Err(DecodeError::InvalidBool(b)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::codec::{from_wire, to_wire};
    use crate::format::DecodeError;

    #[test]
    fn integer_extremes_survive() {
        for v in [-1, 0, 1, i32::MAX, i32::MIN] {
            assert_eq!(from_wire::<i32>(to_wire(&v).as_bytes()), Ok(v));
        }
        for v in [-1, 0, 1, i64::MAX, i64::MIN] {
            assert_eq!(from_wire::<i64>(to_wire(&v).as_bytes()), Ok(v));
        }
    }

    #[test]
    fn float_bit_patterns_survive() {
        let f32s = [
            -1.0_f32,
            0.0,
            -0.0,
            1.0,
            f32::MAX,
            f32::MIN,
            f32::MIN_POSITIVE,
            f32::from_bits(1),
            f32::INFINITY,
            f32::NEG_INFINITY,
            f32::NAN,
            f32::from_bits(0x7fc0_1234),
        ];
        for v in f32s {
            let back = from_wire::<f32>(to_wire(&v).as_bytes()).unwrap();
            assert_eq!(back.to_bits(), v.to_bits(), "f32 {v:?} changed bits");
        }

        let f64s = [
            -1.0_f64,
            0.0,
            -0.0,
            f64::MAX,
            f64::MIN,
            f64::MIN_POSITIVE,
            f64::from_bits(1),
            f64::INFINITY,
            f64::NAN,
            f64::from_bits(0xfff8_0000_dead_beef),
        ];
        for v in f64s {
            let back = from_wire::<f64>(to_wire(&v).as_bytes()).unwrap();
            assert_eq!(back.to_bits(), v.to_bits(), "f64 {v:?} changed bits");
        }
    }

    #[test]
    fn floats_are_fixed_width() {
        assert_eq!(to_wire(&0.0_f32).len(), 4);
        assert_eq!(to_wire(&f64::NAN).len(), 8);
    }

    #[test]
    fn bool_accepts_only_zero_and_one() {
        assert_eq!(from_wire::<bool>(&[0]), Ok(false));
        assert_eq!(from_wire::<bool>(&[1]), Ok(true));
        assert_eq!(from_wire::<bool>(&[2]), Err(DecodeError::InvalidBool(2)));
    }

    #[test]
    fn short_float_is_eof() {
        assert_eq!(
            from_wire::<f64>(&[0, 0, 0]),
            Err(DecodeError::UnexpectedEof)
        );
    }
}
