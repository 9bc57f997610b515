// Copyright 2026 the Binding Boundary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parameter and return shapes.
//!
//! A shape is a [`ValueType`] plus the wrappers the boundary understands: `Option<_>` for
//! parameters and returns, `Result<_, String>` for returns only.

use core::fmt;

use crate::value::ValueType;

/// The declared shape of one parameter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParamShape {
    /// Base type.
    pub value_type: ValueType,
    /// Whether the host may pass null.
    pub optional: bool,
}

impl ParamShape {
    /// A parameter of type `T`.
    #[must_use]
    pub const fn required(value_type: ValueType) -> Self {
        Self {
            value_type,
            optional: false,
        }
    }

    /// A parameter of type `Option<T>`.
    #[must_use]
    pub const fn optional(value_type: ValueType) -> Self {
        Self {
            value_type,
            optional: true,
        }
    }
}

impl fmt::Display for ParamShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.optional {
            write!(f, "Option<{}>", self.value_type)
        } else {
            write!(f, "{}", self.value_type)
        }
    }
}

/// The declared shape of a return value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ReturnShape {
    /// Base type, or `None` for unit.
    pub value_type: Option<ValueType>,
    /// Whether the success value may be absent.
    pub optional: bool,
    /// Whether the function reports failure through `Result<_, String>`.
    pub fallible: bool,
}

impl ReturnShape {
    /// `()`.
    pub const UNIT: Self = Self {
        value_type: None,
        optional: false,
        fallible: false,
    };

    /// A plain return of type `T`.
    #[must_use]
    pub const fn value(value_type: ValueType) -> Self {
        Self {
            value_type: Some(value_type),
            optional: false,
            fallible: false,
        }
    }

    /// Wraps the success value in `Option<_>`.
    ///
    /// Has no effect on unit returns.
    #[must_use]
    pub const fn with_optional(self) -> Self {
        Self {
            optional: self.value_type.is_some(),
            ..self
        }
    }

    /// Wraps the whole return in `Result<_, String>`.
    #[must_use]
    pub const fn with_fallible(self) -> Self {
        Self {
            fallible: true,
            ..self
        }
    }

    /// Returns `true` if the host method produces a value (is not `void`).
    #[must_use]
    pub const fn has_host_value(&self) -> bool {
        self.value_type.is_some()
    }
}

impl fmt::Display for ReturnShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fallible {
            f.write_str("Result<")?;
        }
        match (self.value_type, self.optional) {
            (None, _) => f.write_str("()")?,
            (Some(t), false) => write!(f, "{t}")?,
            (Some(t), true) => write!(f, "Option<{t}>")?,
        }
        if self.fallible {
            f.write_str(", String>")?;
        }
        Ok(())
    }
}
