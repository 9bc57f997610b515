// Copyright 2026 the Binding Boundary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panic bridge.
//!
//! Every native invocation runs under [`std::panic::catch_unwind`]. A panic never unwinds into
//! the dispatcher: any partially written outcome is discarded and replaced by a panic frame
//! carrying the payload text. This only works when the crate is built with `panic = "unwind"`.

use std::any::Any;
use std::error::Error;
use std::panic::{AssertUnwindSafe, catch_unwind};

use boundary_wire::codec::fallible::write_panic;
use boundary_wire::{DecodeError, WireReader, WireWriter};

use crate::descriptor::BindingDescriptor;
use crate::table::NativeThunk;

/// Message used when a panic payload carries neither text nor an error.
pub const NON_TEXT_PANIC: &str = "native code panicked with a non-text payload";

/// Runs `thunk` against `args` and returns its outcome frame, converting a panic into a panic
/// frame.
///
/// Returns an error only if the native side could not decode `args` (or left bytes unread).
pub(crate) fn invoke(
    descriptor: &BindingDescriptor,
    thunk: NativeThunk,
    args: &[u8],
) -> Result<WireWriter, DecodeError> {
    let guarded = catch_unwind(AssertUnwindSafe(|| -> Result<WireWriter, DecodeError> {
        let mut r = WireReader::new(args);
        let mut w = WireWriter::new();
        thunk(&mut r, &mut w)?;
        r.finish()?;
        Ok(w)
    }));
    match guarded {
        Ok(result) => result,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            if descriptor.may_panic() {
                log::warn!(
                    "intercepted panic in `{}`: {message}",
                    descriptor.host_name()
                );
            } else {
                log::error!(
                    "`{}` is declared panic-free but panicked: {message}",
                    descriptor.host_name()
                );
            }
            discard(payload);
            let mut frame = WireWriter::new();
            write_panic(&message, &mut frame);
            Ok(frame)
        }
    }
}

/// Drops a panic payload without letting a panicking destructor escape.
fn discard(payload: Box<dyn Any + Send>) {
    if let Err(nested) = catch_unwind(AssertUnwindSafe(move || drop(payload))) {
        log::error!("panic payload destructor panicked");
        core::mem::forget(nested);
    }
}

/// Extracts the text of a panic payload.
///
/// `panic!("literal")` carries a `&'static str` and formatted panics carry a `String`. A payload
/// raised with [`std::panic::panic_any`] from a boxed error is described by the error's
/// `Display`. Anything else maps to [`NON_TEXT_PANIC`].
#[must_use]
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(e) = payload.downcast_ref::<Box<dyn Error + Send>>() {
        e.to_string()
    } else if let Some(e) = payload.downcast_ref::<Box<dyn Error + Send + Sync>>() {
        e.to_string()
    } else {
        NON_TEXT_PANIC.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boundary_wire::ReturnShape;
    use boundary_wire::codec::WireValue;
    use boundary_wire::codec::fallible::{OutcomeTag, read_message, read_outcome_tag};

    fn descriptor() -> BindingDescriptor {
        BindingDescriptor::new("f", ReturnShape::UNIT)
    }

    fn half_written_then_panic(
        _: &mut WireReader<'_>,
        out: &mut WireWriter,
    ) -> Result<(), DecodeError> {
        out.write_raw(&[0, 1, 2, 3]);
        panic!("after partial write");
    }

    fn reads_one_i32(r: &mut WireReader<'_>, out: &mut WireWriter) -> Result<(), DecodeError> {
        let v = i32::decode(r)?;
        boundary_wire::ReturnType::write_outcome(v, out);
        Ok(())
    }

    #[test]
    fn partial_output_is_replaced_by_the_panic_frame() {
        let frame = invoke(&descriptor(), half_written_then_panic, &[]).unwrap();
        let mut r = WireReader::new(frame.as_bytes());
        assert_eq!(read_outcome_tag(&mut r), Ok(OutcomeTag::Panic));
        assert_eq!(read_message(&mut r).as_deref(), Ok("after partial write"));
        assert_eq!(r.finish(), Ok(()));
    }

    #[test]
    fn unread_argument_bytes_are_malformed() {
        assert_eq!(
            invoke(&descriptor(), reads_one_i32, &[2, 4]).unwrap_err(),
            DecodeError::TrailingBytes { count: 1 }
        );
        assert_eq!(
            invoke(&descriptor(), reads_one_i32, &[]).unwrap_err(),
            DecodeError::UnexpectedEof
        );
    }

    #[test]
    fn payload_text_is_extracted() {
        let s: Box<dyn Any + Send> = Box::new("static");
        assert_eq!(panic_message(s.as_ref()), "static");
        let s: Box<dyn Any + Send> = Box::new(String::from("owned 7"));
        assert_eq!(panic_message(s.as_ref()), "owned 7");
        let s: Box<dyn Any + Send> = Box::new(42_u32);
        assert_eq!(panic_message(s.as_ref()), NON_TEXT_PANIC);
    }

    #[test]
    fn boxed_error_payloads_keep_their_text() {
        let e: Box<dyn Error + Send> = Box::new(std::io::Error::other("disk full"));
        let s: Box<dyn Any + Send> = Box::new(e);
        assert_eq!(panic_message(s.as_ref()), "disk full");
        let e: Box<dyn Error + Send + Sync> = "bad header".into();
        let s: Box<dyn Any + Send> = Box::new(e);
        assert_eq!(panic_message(s.as_ref()), "bad header");
    }

    fn panics_with_error(_: &mut WireReader<'_>, _: &mut WireWriter) -> Result<(), DecodeError> {
        let e: Box<dyn Error + Send> = Box::new(std::io::Error::other("disk full"));
        std::panic::panic_any(e);
    }

    #[test]
    fn error_payload_reaches_the_panic_frame() {
        let frame = invoke(&descriptor(), panics_with_error, &[]).unwrap();
        let mut r = WireReader::new(frame.as_bytes());
        assert_eq!(read_outcome_tag(&mut r), Ok(OutcomeTag::Panic));
        assert_eq!(read_message(&mut r).as_deref(), Ok("disk full"));
    }

    struct ExplodingPayload;

    impl Drop for ExplodingPayload {
        fn drop(&mut self) {
            panic!("payload destructor");
        }
    }

    fn panics_with_exploding_payload(
        _: &mut WireReader<'_>,
        _: &mut WireWriter,
    ) -> Result<(), DecodeError> {
        std::panic::panic_any(ExplodingPayload);
    }

    #[test]
    fn panicking_payload_destructor_stays_contained() {
        let frame = invoke(&descriptor(), panics_with_exploding_payload, &[]).unwrap();
        let mut r = WireReader::new(frame.as_bytes());
        assert_eq!(read_outcome_tag(&mut r), Ok(OutcomeTag::Panic));
        assert_eq!(read_message(&mut r).as_deref(), Ok(NON_TEXT_PANIC));
    }

    #[test]
    fn panic_free_bindings_are_still_bridged() {
        let d = descriptor().panic_free();
        assert!(!d.may_panic());
        let frame = invoke(&d, half_written_then_panic, &[]).unwrap();
        let mut r = WireReader::new(frame.as_bytes());
        assert_eq!(read_outcome_tag(&mut r), Ok(OutcomeTag::Panic));
        assert_eq!(read_message(&mut r).as_deref(), Ok("after partial write"));
    }
}
