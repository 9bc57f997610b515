// Copyright 2026 the Binding Boundary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host class stub rendering.

use core::fmt;
use std::path::{Path, PathBuf};

use boundary_dispatch::{BindingDescriptor, BindingTable};

use crate::error::CodegenError;
use crate::name::ClassName;
use crate::types::{param_type, return_type};

/// Suffix appended to the native name to form the private native method.
pub const NATIVE_SUFFIX: &str = "Jni";

/// A host class exposing a set of bindings.
///
/// [`Display`](fmt::Display) renders the class source: a static initializer that loads the native
/// library, then for every binding a private native declaration and a public wrapper under the
/// binding's host-visible name.
#[derive(Clone, Debug)]
pub struct HostClass {
    name: ClassName,
    library: String,
    doc: Vec<String>,
    bindings: Vec<BindingDescriptor>,
}

impl HostClass {
    /// Creates an empty class that loads `library`.
    #[must_use]
    pub fn new(name: ClassName, library: impl Into<String>) -> Self {
        Self {
            name,
            library: library.into(),
            doc: Vec::new(),
            bindings: Vec::new(),
        }
    }

    /// Creates a class exposing every binding in `table`, in registration order.
    #[must_use]
    pub fn from_table(name: ClassName, library: impl Into<String>, table: &BindingTable) -> Self {
        let mut class = Self::new(name, library);
        class.bindings.extend(table.descriptors().cloned());
        class
    }

    /// Appends a line of class documentation.
    #[must_use]
    pub fn doc_line(mut self, line: &str) -> Self {
        self.doc.push(line.trim().to_owned());
        self
    }

    /// Appends a binding.
    #[must_use]
    pub fn binding(mut self, descriptor: BindingDescriptor) -> Self {
        self.bindings.push(descriptor);
        self
    }

    /// Returns the class name.
    #[must_use]
    pub fn name(&self) -> &ClassName {
        &self.name
    }

    /// Returns the exported native symbol implementing `descriptor`'s native method.
    #[must_use]
    pub fn native_symbol(&self, descriptor: &BindingDescriptor) -> String {
        self.name.native_symbol(&native_method(descriptor))
    }

    /// Returns the path of the class source below `src_dir`.
    #[must_use]
    pub fn source_path(&self, src_dir: &Path) -> PathBuf {
        let mut path = src_dir.to_path_buf();
        path.extend(self.name.package_segments());
        path.push(format!("{}.java", self.name.class()));
        path
    }

    /// Renders the class and writes it to [`source_path`](Self::source_path), creating package
    /// directories as needed.
    ///
    /// Returns the written path.
    pub fn write_to(&self, src_dir: &Path) -> Result<PathBuf, CodegenError> {
        let path = self.source_path(src_dir);
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|source| CodegenError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&path, self.to_string()).map_err(|source| CodegenError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

fn native_method(descriptor: &BindingDescriptor) -> String {
    format!("{}{NATIVE_SUFFIX}", descriptor.native_name())
}

fn write_doc(f: &mut fmt::Formatter<'_>, lines: &[impl AsRef<str>], indent: &str) -> fmt::Result {
    if lines.is_empty() {
        return Ok(());
    }
    writeln!(f, "{indent}/**")?;
    for line in lines {
        let line = line.as_ref();
        if line.is_empty() {
            writeln!(f, "{indent} *")?;
        } else {
            writeln!(f, "{indent} * {line}")?;
        }
    }
    writeln!(f, "{indent} */")
}

fn write_binding(f: &mut fmt::Formatter<'_>, d: &BindingDescriptor) -> fmt::Result {
    let ret = return_type(d.ret());
    let native = native_method(d);
    let params = d
        .params()
        .iter()
        .map(|p| format!("{} {}", param_type(p.shape), p.name))
        .collect::<Vec<_>>()
        .join(", ");
    let args = d
        .params()
        .iter()
        .map(|p| &*p.name)
        .collect::<Vec<_>>()
        .join(", ");

    writeln!(f)?;
    writeln!(f, "    private static native {ret} {native}({params});")?;
    writeln!(f)?;
    write_doc(f, d.doc(), "    ")?;
    if d.is_deprecated() {
        writeln!(f, "    @Deprecated")?;
    }
    writeln!(
        f,
        "    public {ret} {}({params}) throws Exception {{",
        d.host_name()
    )?;
    if d.ret().has_host_value() {
        writeln!(f, "        return {native}({args});")?;
    } else {
        writeln!(f, "        {native}({args});")?;
    }
    writeln!(f, "    }}")
}

impl fmt::Display for HostClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let package = self.name.package();
        if !package.is_empty() {
            writeln!(f, "package {package};")?;
            writeln!(f)?;
        }
        write_doc(f, self.doc.as_slice(), "")?;
        writeln!(f, "public class {} {{", self.name.class())?;
        writeln!(f, "    static {{")?;
        writeln!(f, "        System.loadLibrary(\"{}\");", self.library)?;
        writeln!(f, "    }}")?;
        for d in &self.bindings {
            write_binding(f, d)?;
        }
        writeln!(f, "}}")
    }
}
