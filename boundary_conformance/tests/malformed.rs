// Copyright 2026 the Binding Boundary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Malformed payloads are rejected, never decoded into plausible values.

use boundary_dispatch::{BindingDescriptor, BindingTable, CallError, Dispatcher, Limits};
use boundary_wire::codec::from_wire;
use boundary_wire::host::decode_outcome;
use boundary_wire::{
    DecodeError, HostValue, ParamShape, ReturnShape, ValueType, WireReader, WireWriter,
};

#[test]
fn truncated_frames() {
    let text = ReturnShape::value(ValueType::Str);
    assert_eq!(decode_outcome(&[], text), Err(DecodeError::UnexpectedEof));
    assert_eq!(decode_outcome(&[0], text), Err(DecodeError::UnexpectedEof));
    assert_eq!(
        decode_outcome(&[0, 5, b'a', b'b'], text),
        Err(DecodeError::LengthMismatch {
            declared: 5,
            remaining: 2
        })
    );
    assert_eq!(
        decode_outcome(&[0, 1, 2], ReturnShape::value(ValueType::F64)),
        Err(DecodeError::UnexpectedEof)
    );
    assert_eq!(from_wire::<i64>(&[0x80]), Err(DecodeError::UnexpectedEof));
}

#[test]
fn trailing_bytes() {
    assert_eq!(
        decode_outcome(&[0, 0], ReturnShape::UNIT),
        Err(DecodeError::TrailingBytes { count: 1 })
    );
    assert_eq!(
        from_wire::<String>(&[1, b'a', b'b']),
        Err(DecodeError::TrailingBytes { count: 1 })
    );
}

#[test]
fn invalid_utf8() {
    assert_eq!(from_wire::<String>(&[2, 0xc3, 0x28]), Err(DecodeError::InvalidUtf8));
    assert_eq!(
        from_wire::<Vec<String>>(&[2, 1, b'a', 1, 0xff]),
        Err(DecodeError::InvalidUtf8)
    );
    assert_eq!(
        decode_outcome(&[1, 1, 0xff], ReturnShape::UNIT.with_fallible()),
        Err(DecodeError::InvalidUtf8)
    );
}

#[test]
fn invalid_tags_and_bools() {
    let optional = ReturnShape::value(ValueType::I32).with_optional();
    assert_eq!(
        decode_outcome(&[3], optional),
        Err(DecodeError::InvalidTag {
            what: "outcome",
            tag: 3
        })
    );
    assert_eq!(
        decode_outcome(&[0, 2, 0], optional),
        Err(DecodeError::InvalidTag {
            what: "presence",
            tag: 2
        })
    );
    assert_eq!(from_wire::<bool>(&[2]), Err(DecodeError::InvalidBool(2)));
}

#[test]
fn out_of_range_varints() {
    // 2^31 does not fit an i32.
    assert_eq!(
        from_wire::<i32>(&[0x80, 0x80, 0x80, 0x80, 0x08]),
        Err(DecodeError::IntegerOutOfRange)
    );
    assert!(from_wire::<i64>(&[0xff; 11]).is_err());
}

fn garbage_outcome(_: &mut WireReader<'_>, out: &mut WireWriter) -> Result<(), DecodeError> {
    out.write_raw(&[0, 9]);
    Ok(())
}

fn misreads_arguments(r: &mut WireReader<'_>, out: &mut WireWriter) -> Result<(), DecodeError> {
    // Declared as taking an i32 but reads a bool.
    let b: bool = boundary_wire::codec::WireValue::decode(r)?;
    boundary_wire::ReturnType::write_outcome(b, out);
    Ok(())
}

#[test]
fn dispatcher_reports_malformed_payloads_without_throwing() {
    let mut table = BindingTable::new();
    table
        .register(
            BindingDescriptor::new("garbage", ReturnShape::value(ValueType::Str)),
            garbage_outcome,
        )
        .unwrap();
    table
        .register(
            BindingDescriptor::new("misreads", ReturnShape::value(ValueType::Bool))
                .param("value", ParamShape::required(ValueType::I32)),
            misreads_arguments,
        )
        .unwrap();
    let d = Dispatcher::new(table, Limits::default());

    let err = d.call("garbage", &[]).unwrap_err();
    assert!(matches!(
        err,
        CallError::Malformed {
            error: DecodeError::LengthMismatch { .. },
            ..
        }
    ));
    assert!(err.as_exception().is_none());

    // 7 encodes as the byte 0x07, which is not a valid bool.
    assert!(matches!(
        d.call("misreads", &[HostValue::Int(7)]),
        Err(CallError::Malformed {
            error: DecodeError::InvalidBool(7),
            ..
        })
    ));
}
