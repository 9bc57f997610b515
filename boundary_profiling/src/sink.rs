// Copyright 2026 the Binding Boundary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use boundary_dispatch::{BindingDescriptor, CallExit, CallMask, CallSink};
use std::string::String;
use std::vec::Vec;

use crate::resolver::{DefaultLabelResolver, LabelResolver, default_call_label};

type BackendGuard = tracy_client::Span;

struct ZoneEntry {
    host_name: String,
    // Keep the label alive for backends that may borrow it.
    label: String,
    guard: Option<BackendGuard>,
}

/// A `CallSink` that emits Tracy zones via `tracy-client`.
pub struct ProfilingCallSink<R = DefaultLabelResolver> {
    resolver: R,
    stack: Vec<ZoneEntry>,
}

impl ProfilingCallSink<DefaultLabelResolver> {
    /// Create a new sink with name-based labels.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: LabelResolver> ProfilingCallSink<R> {
    /// Create a new sink with a custom label resolver.
    #[must_use]
    pub fn with_resolver(resolver: R) -> Self {
        Self {
            resolver,
            stack: Vec::new(),
        }
    }

    fn start_zone(label: &str) -> Option<BackendGuard> {
        let client = tracy_client::Client::running()?;
        Some(client.span_alloc(Some(label), "boundary_dispatch.call", "boundary_dispatch", 0, 0))
    }

    fn top_for(&mut self, binding: &BindingDescriptor) -> Option<&mut ZoneEntry> {
        self.stack
            .last_mut()
            .filter(|top| top.host_name == binding.host_name())
    }

    // Drop in LIFO order so nested zones close inner-to-outer.
    fn drop_active_zones(&mut self) {
        while let Some(entry) = self.stack.pop() {
            let ZoneEntry {
                label: _label,
                guard: _guard,
                ..
            } = entry;
            let _ = (_label, _guard);
        }
    }
}

impl<R: LabelResolver> CallSink for ProfilingCallSink<R> {
    fn mask(&self) -> CallMask {
        CallMask::CALL | CallMask::PAYLOAD
    }

    fn call_enter(&mut self, binding: &BindingDescriptor) {
        let label = self
            .resolver
            .call_label(binding)
            .unwrap_or_else(|| default_call_label(binding));
        let guard = Self::start_zone(&label);
        self.stack.push(ZoneEntry {
            host_name: binding.host_name().to_owned(),
            label,
            guard,
        });
    }

    fn payload(&mut self, binding: &BindingDescriptor, arg_bytes: usize, result_bytes: usize) {
        if let Some(ZoneEntry {
            guard: Some(span), ..
        }) = self.top_for(binding)
        {
            span.emit_text(&format!("args={arg_bytes}B result={result_bytes}B"));
        }
    }

    fn call_exit(&mut self, binding: &BindingDescriptor, exit: CallExit) {
        let Some(top) = self.top_for(binding) else {
            // If the stack got out of sync, drop any active zones to avoid leaking.
            self.drop_active_zones();
            return;
        };
        if exit != CallExit::Returned
            && let Some(span) = &top.guard
        {
            span.emit_text(&format!("{exit:?}"));
        }
        self.stack.pop();
    }
}

impl<R> Default for ProfilingCallSink<R>
where
    R: LabelResolver + Default,
{
    fn default() -> Self {
        Self::with_resolver(R::default())
    }
}

impl<R> std::fmt::Debug for ProfilingCallSink<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfilingCallSink")
            .field("open_zones", &self.stack.len())
            .finish_non_exhaustive()
    }
}
