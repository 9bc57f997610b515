// Copyright 2026 the Binding Boundary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Call tracing hooks.
//!
//! A [`CallSink`] observes dispatches without participating in them. The dispatcher consults
//! [`CallSink::mask`] once per call and skips every event the sink did not ask for.

use core::ops::BitOr;

use crate::descriptor::BindingDescriptor;

/// Bitmask selecting which [`CallSink`] events are delivered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CallMask(u8);

impl CallMask {
    /// No events.
    pub const NONE: Self = Self(0);
    /// [`CallSink::call_enter`] and [`CallSink::call_exit`].
    pub const CALL: Self = Self(1 << 0);
    /// [`CallSink::payload`].
    pub const PAYLOAD: Self = Self(1 << 1);
    /// Every event.
    pub const ALL: Self = Self(Self::CALL.0 | Self::PAYLOAD.0);

    /// Returns `true` if this mask contains every bit in `other`.
    #[must_use]
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl BitOr for CallMask {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// How a traced call ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CallExit {
    /// The native function returned normally (including absent optionals and unit).
    Returned,
    /// The native function reported an explicit failure.
    Failure,
    /// The native function panicked and the panic was intercepted.
    Panic,
    /// The outcome frame could not be decoded.
    Malformed,
    /// The outcome frame exceeded [`Limits::max_result_bytes`](crate::Limits::max_result_bytes)
    /// and was discarded undecoded.
    ResultTooLarge,
}

/// Receives dispatch events for bindings that passed argument validation.
///
/// Calls rejected with a usage error never reach the sink.
pub trait CallSink {
    /// Events this sink wants.
    fn mask(&self) -> CallMask;

    /// A native invocation is about to start.
    fn call_enter(&mut self, _binding: &BindingDescriptor) {}

    /// A native invocation finished.
    fn call_exit(&mut self, _binding: &BindingDescriptor, _exit: CallExit) {}

    /// Sizes of the encoded argument and outcome buffers for one call.
    fn payload(&mut self, _binding: &BindingDescriptor, _arg_bytes: usize, _result_bytes: usize) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_union_contains_both() {
        let m = CallMask::CALL | CallMask::PAYLOAD;
        assert_eq!(m, CallMask::ALL);
        assert!(m.contains(CallMask::CALL));
        assert!(!CallMask::CALL.contains(CallMask::PAYLOAD));
        assert!(CallMask::NONE.contains(CallMask::NONE));
    }
}
