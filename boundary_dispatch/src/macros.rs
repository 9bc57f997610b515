// Copyright 2026 the Binding Boundary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Declares native functions and generates their boundary glue.
///
/// Each item is an ordinary function with an optional `as "publicName"` clause before its body:
///
/// ```ignore
/// boundary_dispatch::bindings! {
///     /// Adds one.
///     fn passthroughModI32(value: i32) -> i32 {
///         value + 1
///     }
///
///     #[deprecated]
///     #[binding(panic_free)]
///     fn internalName() as "customPublicName" {}
/// }
/// ```
///
/// The macro emits every function as a `pub fn` in the calling module (names are kept verbatim,
/// so host-style camelCase is allowed) and adds
/// `pub fn binding_table() -> Result<BindingTable, TableError>`, which registers one descriptor
/// and thunk per function in declaration order.
///
/// Attributes:
///
/// - doc comments become descriptor doc lines;
/// - `#[deprecated]` (with or without a note) marks the descriptor deprecated;
/// - `#[binding(panic_free)]` declares the function panic-free and is not emitted;
/// - anything else is forwarded to the emitted function as written.
///
/// Parameter and return types must implement [`ParamType`](boundary_wire::ParamType) and
/// [`ReturnType`](boundary_wire::ReturnType); any other signature is a compile error.
#[macro_export]
macro_rules! bindings {
    (@ret) => { () };
    (@ret $ret:ty) => { $ret };
    (
        $(
            $(#[$($attr:tt)*])*
            fn $name:ident ( $( $arg:ident : $ty:ty ),* $(,)? ) $( -> $ret:ty )?
                $( as $public:literal )?
                $body:block
        )*
    ) => {
        $(
            $crate::__binding_fn! {
                []
                $(#[$($attr)*])*
                #[allow(
                    non_snake_case,
                    clippy::unused_unit,
                    reason = "binding names follow host conventions"
                )]
                pub fn $name( $( $arg: $ty ),* ) -> $crate::bindings!(@ret $($ret)?) $body
            }
        )*

        /// Registers every binding declared in this module.
        pub fn binding_table() -> ::core::result::Result<$crate::BindingTable, $crate::TableError> {
            let mut table = $crate::BindingTable::new();
            $(
                {
                    #[allow(
                        non_snake_case,
                        unused_variables,
                        deprecated,
                        clippy::unit_arg,
                        reason = "generated glue mirrors the native signature"
                    )]
                    fn thunk(
                        args: &mut $crate::__private::WireReader<'_>,
                        out: &mut $crate::__private::WireWriter,
                    ) -> ::core::result::Result<(), $crate::__private::DecodeError> {
                        $(
                            let $arg = <$ty as $crate::__private::ParamType>::read_param(args)?;
                        )*
                        <$crate::bindings!(@ret $($ret)?) as $crate::__private::ReturnType>::write_outcome(
                            $name($($arg),*),
                            out,
                        );
                        ::core::result::Result::Ok(())
                    }

                    let descriptor = $crate::BindingDescriptor::new(
                        ::core::stringify!($name),
                        <$crate::bindings!(@ret $($ret)?) as $crate::__private::ReturnType>::SHAPE,
                    )
                    $( .param(::core::stringify!($arg), <$ty as $crate::__private::ParamType>::SHAPE) )*
                    $( .public_name($public) )?;
                    $( let descriptor = $crate::__binding_attr!(descriptor, $($attr)*); )*
                    table.register(descriptor, thunk)?;
                }
            )*
            ::core::result::Result::Ok(table)
        }
    };
}

/// Emits one binding function, dropping the attributes only [`bindings!`] understands.
#[doc(hidden)]
#[macro_export]
macro_rules! __binding_fn {
    ([$($kept:tt)*] #[binding($($option:tt)*)] $($rest:tt)*) => {
        $crate::__binding_fn! { [$($kept)*] $($rest)* }
    };
    ([$($kept:tt)*] #[$($attr:tt)*] $($rest:tt)*) => {
        $crate::__binding_fn! { [$($kept)* #[$($attr)*]] $($rest)* }
    };
    ([$($kept:tt)*] $($item:tt)*) => {
        $($kept)* $($item)*
    };
}

/// Applies one binding attribute to a descriptor.
#[doc(hidden)]
#[macro_export]
macro_rules! __binding_attr {
    ($d:ident, doc = $doc:expr) => {
        $d.doc_line($doc)
    };
    ($d:ident, deprecated $($note:tt)*) => {
        $d.deprecated()
    };
    ($d:ident, binding(panic_free)) => {
        $d.panic_free()
    };
    ($d:ident, binding($($option:tt)*)) => {
        ::core::compile_error!(::core::concat!(
            "unknown binding option: ",
            ::core::stringify!($($option)*)
        ))
    };
    ($d:ident, $($other:tt)*) => {
        $d
    };
}
