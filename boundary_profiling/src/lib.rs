// Copyright 2026 the Binding Boundary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Profiling adapters for `boundary_dispatch` (currently Tracy).
//!
//! [`ProfilingCallSink`] implements [`CallSink`](boundary_dispatch::CallSink) and opens one
//! profiling zone per dispatched call. Zones are annotated with the encoded argument and result
//! sizes, and with the outcome when a call fails or panics.
//!
//! When no Tracy client is running the sink records nothing.
//!
//! ## Example
//! ```ignore
//! use boundary_profiling::{ProfilingCallSink, SignatureLabelResolver};
//!
//! let mut sink = ProfilingCallSink::with_resolver(SignatureLabelResolver::default());
//! let value = dispatcher.call_traced("passthroughI32", &[HostValue::Int(1)], &mut sink)?;
//! ```

mod resolver;
mod sink;

pub use resolver::{DefaultLabelResolver, LabelResolver, SignatureLabelResolver};
pub use sink::ProfilingCallSink;
