// Copyright 2026 the Binding Boundary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use std::io;
use std::path::PathBuf;

/// Errors produced while generating host stubs.
#[derive(Debug)]
pub enum CodegenError {
    /// The class name is empty or has an empty segment.
    InvalidClassName(String),
    /// Writing the generated source failed.
    Io {
        /// File or directory being written.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidClassName(name) => write!(f, "invalid host class name: {name:?}"),
            Self::Io { path, source } => write!(f, "failed to write {}: {source}", path.display()),
        }
    }
}

impl core::error::Error for CodegenError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidClassName(_) => None,
        }
    }
}
