// Copyright 2026 the Binding Boundary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Name resolution from host-visible names to registered bindings.

use core::fmt;

use boundary_wire::{DecodeError, WireReader, WireWriter};
use hashbrown::HashMap;

use crate::descriptor::BindingDescriptor;

/// Generated native glue for one binding.
///
/// A thunk reads its arguments from the reader (in declaration order), calls the native function,
/// and writes exactly one outcome frame. It returns an error only if the argument payload is
/// malformed.
pub type NativeThunk = fn(&mut WireReader<'_>, &mut WireWriter) -> Result<(), DecodeError>;

/// Index of a binding within its [`BindingTable`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BindingId(u32);

/// A registered binding: descriptor plus glue.
#[derive(Clone, Debug)]
pub struct Binding {
    descriptor: BindingDescriptor,
    thunk: NativeThunk,
}

impl Binding {
    /// Returns the descriptor.
    #[must_use]
    #[inline]
    pub fn descriptor(&self) -> &BindingDescriptor {
        &self.descriptor
    }

    #[inline]
    pub(crate) fn thunk(&self) -> NativeThunk {
        self.thunk
    }
}

/// Registration errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableError {
    /// A host-visible or native name is already taken by another binding.
    DuplicateName(Box<str>),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName(name) => write!(f, "binding name already registered: {name}"),
        }
    }
}

impl core::error::Error for TableError {}

/// The set of bindings exposed to the host.
///
/// Each binding is reachable under its host-visible name and, when aliased, also under its native
/// name. Both resolve to the same [`Binding`], so calls behave identically.
#[derive(Clone, Debug, Default)]
pub struct BindingTable {
    bindings: Vec<Binding>,
    by_name: HashMap<Box<str>, BindingId>,
}

impl BindingTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a binding.
    ///
    /// Fails without modifying the table if any of the binding's names is already taken.
    pub fn register(
        &mut self,
        descriptor: BindingDescriptor,
        thunk: NativeThunk,
    ) -> Result<BindingId, TableError> {
        let names: &[&str] = if descriptor.is_aliased() {
            &[descriptor.host_name(), descriptor.native_name()]
        } else {
            &[descriptor.native_name()]
        };
        if let Some(taken) = names.iter().find(|n| self.by_name.contains_key(**n)) {
            return Err(TableError::DuplicateName((*taken).into()));
        }

        let id = BindingId(u32::try_from(self.bindings.len()).unwrap_or(u32::MAX));
        for name in names {
            self.by_name.insert((*name).into(), id);
        }
        log::debug!(
            "registered binding {} as {} ({})",
            descriptor.native_name(),
            descriptor.host_name(),
            descriptor.ret()
        );
        self.bindings.push(Binding { descriptor, thunk });
        Ok(id)
    }

    /// Resolves a host-visible or native name.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<BindingId> {
        self.by_name.get(name).copied()
    }

    /// Returns the binding for `id`.
    #[must_use]
    #[inline]
    pub fn get(&self, id: BindingId) -> Option<&Binding> {
        self.bindings.get(id.0 as usize)
    }

    /// Resolves `name` and returns its binding.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Binding> {
        self.get(self.resolve(name)?)
    }

    /// Iterates over all descriptors in registration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &BindingDescriptor> + '_ {
        self.bindings.iter().map(Binding::descriptor)
    }

    /// Returns the number of bindings (not names).
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if no bindings are registered.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
