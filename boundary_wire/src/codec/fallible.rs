// Copyright 2026 the Binding Boundary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Call outcome framing.
//!
//! Every native invocation produces exactly one outcome frame:
//!
//! | tag | meaning | followed by |
//! |-----|---------|-------------|
//! | `0` | returned normally | the return payload (empty for unit) |
//! | `1` | explicit failure (`Err(message)`) | the message as text |
//! | `2` | panic intercepted during the call | the panic description as text |
//!
//! Failure and panic frames carry no value payload, so no value decoding happens for them.

use alloc::string::String;

use super::text::{decode_str, encode_str};
use crate::format::{DecodeError, WireReader, WireWriter};

/// The three terminal outcomes of a native call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OutcomeTag {
    /// The call returned; a payload follows.
    Returned,
    /// The call returned `Err(message)`.
    Failure,
    /// The call panicked.
    Panic,
}

impl OutcomeTag {
    /// Returns the wire byte for this tag.
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        match self {
            Self::Returned => 0,
            Self::Failure => 1,
            Self::Panic => 2,
        }
    }

    /// Parses a wire byte.
    pub const fn from_byte(tag: u8) -> Result<Self, DecodeError> {
        match tag {
            0 => Ok(Self::Returned),
            1 => Ok(Self::Failure),
            2 => Ok(Self::Panic),
            tag => Err(DecodeError::InvalidTag {
                what: "outcome",
                tag,
            }),
        }
    }
}

/// Starts a returned frame; the caller appends the payload.
#[inline]
pub fn write_returned(w: &mut WireWriter) {
    w.write_u8(OutcomeTag::Returned.to_byte());
}

/// Writes a complete failure frame.
pub fn write_failure(message: &str, w: &mut WireWriter) {
    w.write_u8(OutcomeTag::Failure.to_byte());
    encode_str(message, w);
}

/// Writes a complete panic frame.
pub fn write_panic(message: &str, w: &mut WireWriter) {
    w.write_u8(OutcomeTag::Panic.to_byte());
    encode_str(message, w);
}

/// Reads the outcome tag at the start of a frame.
pub fn read_outcome_tag(r: &mut WireReader<'_>) -> Result<OutcomeTag, DecodeError> {
    OutcomeTag::from_byte(r.read_u8()?)
}

/// Reads the message of a failure or panic frame (after its tag).
pub fn read_message(r: &mut WireReader<'_>) -> Result<String, DecodeError> {
    decode_str(r).map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_frame_carries_message_verbatim() {
        let mut w = WireWriter::new();
        write_failure("Error Text", &mut w);
        let mut r = WireReader::new(w.as_bytes());
        assert_eq!(read_outcome_tag(&mut r), Ok(OutcomeTag::Failure));
        assert_eq!(read_message(&mut r).as_deref(), Ok("Error Text"));
        assert_eq!(r.finish(), Ok(()));
    }

    #[test]
    fn panic_and_failure_use_distinct_tags() {
        let mut fail = WireWriter::new();
        write_failure("m", &mut fail);
        let mut panic = WireWriter::new();
        write_panic("m", &mut panic);
        assert_ne!(fail.as_bytes()[0], panic.as_bytes()[0]);
        assert_eq!(fail.as_bytes()[1..], panic.as_bytes()[1..]);
    }

    #[test]
    fn unknown_outcome_tag_is_rejected() {
        assert_eq!(
            OutcomeTag::from_byte(9),
            Err(DecodeError::InvalidTag {
                what: "outcome",
                tag: 9
            })
        );
    }
}
