// Copyright 2026 the Binding Boundary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Call dispatch across the native/host binding boundary.
//!
//! This crate is the runtime half of a binding: given a [`BindingTable`] of native functions
//! (usually generated by [`bindings!`]), a [`Dispatcher`] accepts host calls by name with
//! [`HostValue`](boundary_wire::HostValue) arguments and returns either a value or a
//! [`CallError`].
//!
//! ## Example
//!
//! ```ignore
//! mod ffi {
//!     boundary_dispatch::bindings! {
//!         fn returnsResultOk() -> Result<i32, String> {
//!             Ok(10)
//!         }
//!     }
//! }
//!
//! let dispatcher = Dispatcher::new(ffi::binding_table()?, Limits::default());
//! assert_eq!(dispatcher.call("returnsResultOk", &[])?, HostValue::Int(10));
//! ```
//!
//! ## Failures
//!
//! - Calls that do not match the binding's signature fail with [`UsageError`] before any native
//!   code runs.
//! - `Err(message)` from the native function and intercepted panics both surface as
//!   [`CallError::Thrown`] carrying a [`HostException`] whose message is exactly the native text.
//! - Undecodable payloads surface as [`CallError::Malformed`] and are never disguised as
//!   exceptions.
//!
//! Panics are intercepted with `catch_unwind`, so the panic strategy must be `unwind`.

mod bridge;
mod descriptor;
mod dispatch;
mod error;
mod limits;
mod macros;
mod table;
mod trace;

pub use bridge::{NON_TEXT_PANIC, panic_message};
pub use descriptor::{BindingDescriptor, Param};
pub use dispatch::Dispatcher;
pub use error::{CallError, ExceptionKind, HostException, UsageError};
pub use limits::Limits;
pub use table::{Binding, BindingId, BindingTable, NativeThunk, TableError};
pub use trace::{CallExit, CallMask, CallSink};

#[doc(hidden)]
pub mod __private {
    pub use boundary_wire::{DecodeError, ParamType, ReturnType, WireReader, WireWriter};
}
