// Copyright 2026 the Binding Boundary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wire format and value codecs for a native/host binding boundary.
//!
//! The native side of a binding speaks Rust: `i32`, `String`, `Vec<u8>`, `Option<T>`,
//! `Result<T, String>`. The host side has no `Option` or `Result`; it has nullable references and
//! exceptions. This crate defines how every supported shape crosses between the two:
//!
//! - [`format`]: the byte-level buffer types and LEB128 varints.
//! - [`codec`]: native-side codecs for the base types, presence tracking and call outcomes.
//! - [`native`]: [`ParamType`](native::ParamType) / [`ReturnType`](native::ReturnType), the
//!   shape traits that generated glue uses to read arguments and write outcome frames.
//! - [`host`]: the host-side mirror that encodes [`HostValue`](value::HostValue) arguments and
//!   decodes outcome frames.
//!
//! All buffers are owned by the side that created them; crossing the boundary copies bytes.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod codec;
pub mod format;
pub mod host;
pub mod native;
pub mod shape;
pub mod value;

pub use format::{DecodeError, WireReader, WireWriter};
pub use host::{ArgError, HostOutcome};
pub use native::{ParamType, ReturnType};
pub use shape::{ParamShape, ReturnShape};
pub use value::{HostValue, ValueType};
