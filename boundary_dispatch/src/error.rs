// Copyright 2026 the Binding Boundary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors surfaced to the host by [`Dispatcher::call`](crate::Dispatcher::call).

use core::fmt;

use boundary_wire::{ArgError, DecodeError};

/// A call that was rejected before the native function ran.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UsageError {
    /// No binding is registered under this name.
    UnknownBinding {
        /// Name the host asked for.
        name: Box<str>,
    },
    /// Wrong number of arguments.
    ArgCount {
        /// Host-visible binding name.
        binding: Box<str>,
        /// Declared parameter count.
        expected: usize,
        /// Arguments supplied.
        found: usize,
    },
    /// One argument does not fit its declared parameter.
    Argument {
        /// Host-visible binding name.
        binding: Box<str>,
        /// Zero-based argument position.
        index: usize,
        /// Declared parameter name.
        param: Box<str>,
        /// What was wrong with it.
        error: ArgError,
    },
    /// The encoded arguments exceed [`Limits::max_arg_bytes`](crate::Limits::max_arg_bytes).
    ArgumentsTooLarge {
        /// Host-visible binding name.
        binding: Box<str>,
        /// Encoded size.
        len: usize,
        /// Configured limit.
        max: usize,
    },
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownBinding { name } => write!(f, "no binding named `{name}`"),
            Self::ArgCount {
                binding,
                expected,
                found,
            } => write!(
                f,
                "`{binding}` takes {expected} argument(s) but {found} were supplied"
            ),
            Self::Argument {
                binding,
                index,
                param,
                error,
            } => write!(f, "`{binding}` argument {index} (`{param}`): {error}"),
            Self::ArgumentsTooLarge { binding, len, max } => write!(
                f,
                "`{binding}` arguments encode to {len} bytes, limit is {max}"
            ),
        }
    }
}

impl core::error::Error for UsageError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Argument { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Which native condition a [`HostException`] reports.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ExceptionKind {
    /// The native function returned `Err(message)`.
    Failure,
    /// The native function panicked.
    Panic,
}

/// The host-side exception raised for a native failure or panic.
///
/// The message is carried verbatim: the `Err` payload for failures, the panic payload text for
/// panics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostException {
    kind: ExceptionKind,
    message: String,
}

impl HostException {
    /// Builds an exception for an explicit native failure.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: ExceptionKind::Failure,
            message: message.into(),
        }
    }

    /// Builds an exception for an intercepted panic.
    #[must_use]
    pub fn panic(message: impl Into<String>) -> Self {
        Self {
            kind: ExceptionKind::Panic,
            message: message.into(),
        }
    }

    /// Returns the exception kind.
    #[must_use]
    #[inline]
    pub fn kind(&self) -> ExceptionKind {
        self.kind
    }

    /// Returns `true` if this exception reports a panic.
    #[must_use]
    #[inline]
    pub fn is_panic(&self) -> bool {
        self.kind == ExceptionKind::Panic
    }

    /// Returns the message, exactly as produced by the native side.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for HostException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl core::error::Error for HostException {}

/// Why a dispatched call did not produce a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallError {
    /// The call was rejected before reaching native code.
    Usage(UsageError),
    /// The native function failed or panicked; the host should raise this exception.
    Thrown(HostException),
    /// A payload crossing the boundary could not be decoded.
    ///
    /// This indicates mismatched glue, not a user error, and is never converted into a
    /// [`HostException`].
    Malformed {
        /// Host-visible binding name.
        binding: Box<str>,
        /// Decoder diagnosis.
        error: DecodeError,
    },
    /// The outcome frame exceeds [`Limits::max_result_bytes`](crate::Limits::max_result_bytes).
    ResultTooLarge {
        /// Host-visible binding name.
        binding: Box<str>,
        /// Frame size.
        len: usize,
        /// Configured limit.
        max: usize,
    },
}

impl CallError {
    /// Returns the host exception, if the native side threw one.
    #[must_use]
    pub fn as_exception(&self) -> Option<&HostException> {
        match self {
            Self::Thrown(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for CallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(e) => write!(f, "usage error: {e}"),
            Self::Thrown(e) => match e.kind {
                ExceptionKind::Failure => write!(f, "native failure: {e}"),
                ExceptionKind::Panic => write!(f, "native panic: {e}"),
            },
            Self::Malformed { binding, error } => {
                write!(f, "malformed payload for `{binding}`: {error}")
            }
            Self::ResultTooLarge { binding, len, max } => write!(
                f,
                "`{binding}` result encodes to {len} bytes, limit is {max}"
            ),
        }
    }
}

impl core::error::Error for CallError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Usage(e) => Some(e),
            Self::Thrown(e) => Some(e),
            Self::Malformed { error, .. } => Some(error),
            Self::ResultTooLarge { .. } => None,
        }
    }
}

impl From<UsageError> for CallError {
    fn from(e: UsageError) -> Self {
        Self::Usage(e)
    }
}
