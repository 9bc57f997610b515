// Copyright 2026 the Binding Boundary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The call dispatcher.
//!
//! [`Dispatcher::call`] is the single entry point the host uses. One call:
//!
//! 1. resolves the name (public or native) to a binding,
//! 2. validates argument count, nullness and types, encoding each argument left to right,
//! 3. runs the native thunk under the panic bridge,
//! 4. decodes the outcome frame and maps it to a value or a [`HostException`].
//!
//! Steps 1 and 2 fail with a [`UsageError`] and never reach native code.

use boundary_wire::host::{decode_outcome, encode_arg};
use boundary_wire::{DecodeError, HostOutcome, HostValue, WireWriter};

use crate::bridge;
use crate::descriptor::BindingDescriptor;
use crate::error::{CallError, HostException, UsageError};
use crate::limits::Limits;
use crate::table::BindingTable;
use crate::trace::{CallExit, CallMask, CallSink};

/// Dispatches host calls to registered bindings.
///
/// The dispatcher holds no per-call state, so one instance can serve concurrent calls from any
/// number of threads.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    table: BindingTable,
    limits: Limits,
}

struct Untraced;

impl CallSink for Untraced {
    fn mask(&self) -> CallMask {
        CallMask::NONE
    }
}

impl Dispatcher {
    /// Creates a dispatcher over `table`.
    #[must_use]
    pub fn new(table: BindingTable, limits: Limits) -> Self {
        Self { table, limits }
    }

    /// Returns the binding table.
    #[must_use]
    #[inline]
    pub fn table(&self) -> &BindingTable {
        &self.table
    }

    /// Calls the binding registered as `name` with `args`.
    pub fn call(&self, name: &str, args: &[HostValue]) -> Result<HostValue, CallError> {
        self.call_traced(name, args, &mut Untraced)
    }

    /// Like [`call`](Self::call), reporting events to `sink`.
    pub fn call_traced(
        &self,
        name: &str,
        args: &[HostValue],
        sink: &mut dyn CallSink,
    ) -> Result<HostValue, CallError> {
        let binding = self
            .table
            .lookup(name)
            .ok_or_else(|| UsageError::UnknownBinding { name: name.into() })?;
        let descriptor = binding.descriptor();
        let encoded = encode_args(descriptor, args)?;
        if encoded.len() > self.limits.max_arg_bytes {
            return Err(UsageError::ArgumentsTooLarge {
                binding: descriptor.host_name().into(),
                len: encoded.len(),
                max: self.limits.max_arg_bytes,
            }
            .into());
        }

        let mask = sink.mask();
        log::debug!(
            "dispatching `{}` with {} argument byte(s)",
            descriptor.host_name(),
            encoded.len()
        );
        if mask.contains(CallMask::CALL) {
            sink.call_enter(descriptor);
        }

        let (exit, result) = match bridge::invoke(descriptor, binding.thunk(), encoded.as_bytes())
        {
            Err(error) => (CallExit::Malformed, Err(malformed(descriptor, error))),
            Ok(frame) => {
                if mask.contains(CallMask::PAYLOAD) {
                    sink.payload(descriptor, encoded.len(), frame.len());
                }
                self.finish(descriptor, &frame)
            }
        };

        if mask.contains(CallMask::CALL) {
            sink.call_exit(descriptor, exit);
        }
        result
    }

    fn finish(
        &self,
        descriptor: &BindingDescriptor,
        frame: &WireWriter,
    ) -> (CallExit, Result<HostValue, CallError>) {
        if frame.len() > self.limits.max_result_bytes {
            log::error!(
                "`{}` produced a {} byte outcome, limit is {}",
                descriptor.host_name(),
                frame.len(),
                self.limits.max_result_bytes
            );
            return (
                CallExit::ResultTooLarge,
                Err(CallError::ResultTooLarge {
                    binding: descriptor.host_name().into(),
                    len: frame.len(),
                    max: self.limits.max_result_bytes,
                }),
            );
        }
        match decode_outcome(frame.as_bytes(), descriptor.ret()) {
            Ok(HostOutcome::Returned(value)) => (CallExit::Returned, Ok(value)),
            Ok(HostOutcome::Failure(message)) => (
                CallExit::Failure,
                Err(CallError::Thrown(HostException::failure(message))),
            ),
            Ok(HostOutcome::Panic(message)) => (
                CallExit::Panic,
                Err(CallError::Thrown(HostException::panic(message))),
            ),
            Err(error) => (CallExit::Malformed, Err(malformed(descriptor, error))),
        }
    }
}

fn encode_args(
    descriptor: &BindingDescriptor,
    args: &[HostValue],
) -> Result<WireWriter, UsageError> {
    let params = descriptor.params();
    if params.len() != args.len() {
        return Err(UsageError::ArgCount {
            binding: descriptor.host_name().into(),
            expected: params.len(),
            found: args.len(),
        });
    }
    let mut w = WireWriter::new();
    for (index, (param, value)) in params.iter().zip(args).enumerate() {
        encode_arg(value, param.shape, &mut w).map_err(|error| UsageError::Argument {
            binding: descriptor.host_name().into(),
            index,
            param: param.name.clone(),
            error,
        })?;
    }
    Ok(w)
}

fn malformed(descriptor: &BindingDescriptor, error: DecodeError) -> CallError {
    log::error!(
        "malformed payload crossing `{}`: {error}",
        descriptor.host_name()
    );
    CallError::Malformed {
        binding: descriptor.host_name().into(),
        error,
    }
}
