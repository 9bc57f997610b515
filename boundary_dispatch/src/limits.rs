// Copyright 2026 the Binding Boundary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Size limits enforced by the [`Dispatcher`](crate::Dispatcher).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Maximum size of one call's encoded argument buffer, in bytes.
    ///
    /// Checked before the native function runs; exceeding it is a usage error.
    pub max_arg_bytes: usize,
    /// Maximum size of one call's outcome frame, in bytes.
    ///
    /// Checked after the native function returns; exceeding it fails the call.
    pub max_result_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_arg_bytes: 64 << 20,
            max_result_bytes: 64 << 20,
        }
    }
}
