// Copyright 2026 the Binding Boundary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binding descriptors: the static signature metadata of one exposed native function.

use boundary_wire::{ParamShape, ReturnShape};

/// One declared parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    /// Parameter name, as written in the native signature.
    pub name: Box<str>,
    /// Declared shape.
    pub shape: ParamShape,
}

/// Signature metadata for one native function.
///
/// Descriptors are assembled once (usually by [`bindings!`](crate::bindings)) with the consuming
/// builder methods below and are read-only once registered in a
/// [`BindingTable`](crate::BindingTable).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BindingDescriptor {
    native_name: Box<str>,
    public_name: Option<Box<str>>,
    params: Vec<Param>,
    ret: ReturnShape,
    may_panic: bool,
    doc: Vec<Box<str>>,
    deprecated: bool,
}

impl BindingDescriptor {
    /// Starts a descriptor for `native_name` returning `ret`, with no parameters.
    ///
    /// Every native function is assumed to possibly panic until marked otherwise with
    /// [`panic_free`](Self::panic_free).
    #[must_use]
    pub fn new(native_name: impl Into<Box<str>>, ret: ReturnShape) -> Self {
        Self {
            native_name: native_name.into(),
            public_name: None,
            params: Vec::new(),
            ret,
            may_panic: true,
            doc: Vec::new(),
            deprecated: false,
        }
    }

    /// Appends a parameter.
    #[must_use]
    pub fn param(mut self, name: impl Into<Box<str>>, shape: ParamShape) -> Self {
        self.params.push(Param {
            name: name.into(),
            shape,
        });
        self
    }

    /// Exposes the function to the host under `name` instead of its native name.
    #[must_use]
    pub fn public_name(mut self, name: impl Into<Box<str>>) -> Self {
        self.public_name = Some(name.into());
        self
    }

    /// Appends one documentation line (surrounding whitespace is trimmed).
    #[must_use]
    pub fn doc_line(mut self, line: &str) -> Self {
        self.doc.push(line.trim().into());
        self
    }

    /// Marks the binding as deprecated for generated host code.
    #[must_use]
    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Declares that the native function never panics.
    ///
    /// The call is still guarded; a panic from a binding declared panic-free is logged as a
    /// contract violation.
    #[must_use]
    pub fn panic_free(mut self) -> Self {
        self.may_panic = false;
        self
    }

    /// Returns the native function name.
    #[must_use]
    #[inline]
    pub fn native_name(&self) -> &str {
        &self.native_name
    }

    /// Returns the host-visible name (the native name unless overridden).
    #[must_use]
    #[inline]
    pub fn host_name(&self) -> &str {
        self.public_name.as_deref().unwrap_or(&self.native_name)
    }

    /// Returns `true` if the host-visible name differs from the native name.
    #[must_use]
    #[inline]
    pub fn is_aliased(&self) -> bool {
        self.public_name.is_some()
    }

    /// Returns the declared parameters, in call order.
    #[must_use]
    #[inline]
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Returns the declared return shape.
    #[must_use]
    #[inline]
    pub fn ret(&self) -> ReturnShape {
        self.ret
    }

    /// Returns whether the native function may panic.
    #[must_use]
    #[inline]
    pub fn may_panic(&self) -> bool {
        self.may_panic
    }

    /// Returns the documentation lines.
    #[must_use]
    #[inline]
    pub fn doc(&self) -> &[Box<str>] {
        &self.doc
    }

    /// Returns whether the binding is deprecated.
    #[must_use]
    #[inline]
    pub fn is_deprecated(&self) -> bool {
        self.deprecated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boundary_wire::ValueType;

    #[test]
    fn host_name_defaults_to_native_name() {
        let d = BindingDescriptor::new("internalName", ReturnShape::UNIT);
        assert_eq!(d.host_name(), "internalName");
        assert!(!d.is_aliased());

        let d = d.public_name("customPublicName");
        assert_eq!(d.host_name(), "customPublicName");
        assert_eq!(d.native_name(), "internalName");
        assert!(d.is_aliased());
    }

    #[test]
    fn params_keep_declaration_order() {
        let d = BindingDescriptor::new("f", ReturnShape::value(ValueType::Str))
            .param("a", ParamShape::required(ValueType::I32))
            .param("b", ParamShape::optional(ValueType::Bytes))
            .doc_line("  Some docs. ");
        let names: Vec<&str> = d.params().iter().map(|p| &*p.name).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(&*d.doc()[0], "Some docs.");
        assert!(d.may_panic());
    }
}
