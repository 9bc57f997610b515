// Copyright 2026 the Binding Boundary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::HashMap;
use std::fmt::Write;
use std::string::String;

use boundary_dispatch::BindingDescriptor;

/// Optional label resolver for profiling zones.
///
/// Return `None` to fall back to the default name-based label.
pub trait LabelResolver {
    /// Resolve a label for a call zone.
    fn call_label(&mut self, _binding: &BindingDescriptor) -> Option<String> {
        None
    }
}

/// Default resolver: zones are labelled with the host-visible name.
#[derive(Default, Debug)]
pub struct DefaultLabelResolver;

impl LabelResolver for DefaultLabelResolver {}

/// Resolver that labels zones with the full signature, e.g.
/// `customPublicName=internalName() -> ()`.
#[derive(Default, Debug)]
pub struct SignatureLabelResolver {
    // native name -> host name -> label
    cache: HashMap<String, HashMap<String, String>>,
}

impl LabelResolver for SignatureLabelResolver {
    fn call_label(&mut self, binding: &BindingDescriptor) -> Option<String> {
        if let Some(label) = self
            .cache
            .get(binding.native_name())
            .and_then(|by_host| by_host.get(binding.host_name()))
        {
            return Some(label.clone());
        }
        let mut label = String::new();
        if binding.is_aliased() {
            let _ = write!(label, "{}=", binding.host_name());
        }
        let params = binding
            .params()
            .iter()
            .map(|p| format!("{}: {}", p.name, p.shape))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = write!(label, "{}({params}) -> {}", binding.native_name(), binding.ret());
        self.cache
            .entry(binding.native_name().to_owned())
            .or_default()
            .insert(binding.host_name().to_owned(), label.clone());
        Some(label)
    }
}

pub(crate) fn default_call_label(binding: &BindingDescriptor) -> String {
    format!("call:{}", binding.host_name())
}
