// Copyright 2026 the Binding Boundary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host class stub generation.
//!
//! Given a [`BindingTable`](boundary_dispatch::BindingTable), [`HostClass`] renders the host-side
//! class that exposes each binding: a private native declaration per binding plus a public wrapper
//! under the binding's host-visible name, carrying its documentation and deprecation. Optional
//! primitives map to boxed host types so that `null` can stand for an absent value.
//!
//! Typical use from a build script:
//!
//! ```ignore
//! let table = my_crate::ffi::binding_table()?;
//! let class = HostClass::from_table("com.example.Wallet".parse()?, "wallet", &table);
//! let path = class.write_to(Path::new("java/src"))?;
//! println!("cargo:rerun-if-changed={}", path.display());
//! ```

mod error;
mod name;
mod stub;
mod types;

pub use error::CodegenError;
pub use name::ClassName;
pub use stub::{HostClass, NATIVE_SUFFIX};
pub use types::{host_type, param_type, return_type};
