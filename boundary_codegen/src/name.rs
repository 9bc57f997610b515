// Copyright 2026 the Binding Boundary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fully qualified host class names and native symbol mangling.

use core::fmt;
use core::str::FromStr;

use crate::error::CodegenError;

/// A dotted host class name such as `com.example.Class`.
///
/// The last segment is the class; the rest is the package, which may be empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClassName {
    segments: Vec<String>,
}

impl ClassName {
    /// Returns the package segments.
    #[must_use]
    pub fn package_segments(&self) -> &[String] {
        match self.segments.split_last() {
            Some((_, package)) => package,
            None => &[],
        }
    }

    /// Returns the dotted package path (empty for the default package).
    #[must_use]
    pub fn package(&self) -> String {
        self.package_segments().join(".")
    }

    /// Returns the simple class name.
    #[must_use]
    pub fn class(&self) -> &str {
        self.segments.last().map_or("", String::as_str)
    }

    /// Returns the exported native symbol for the host method `method` of this class.
    ///
    /// Underscores are escaped as `_1` before dots become `_`, so distinct names never collide.
    #[must_use]
    pub fn native_symbol(&self, method: &str) -> String {
        let namespace = self.to_string().replace('_', "_1").replace('.', "_");
        format!("Java_{namespace}_{}", method.replace('_', "_1"))
    }
}

impl FromStr for ClassName {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<String> = s.split('.').map(str::to_owned).collect();
        if segments.iter().any(String::is_empty) {
            return Err(CodegenError::InvalidClassName(s.into()));
        }
        Ok(Self { segments })
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}
