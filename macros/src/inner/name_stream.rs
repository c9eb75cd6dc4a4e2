//! Label type generation.
//!
//! Every UTF-8 byte of the string becomes two nibbles, high first, so the
//! type-level comparison in `NibblesEq` sees exactly the string's bytes.

use proc_macro2::TokenStream;
use quote::{quote, format_ident};
use syn::Ident;

/// Expand a string into its `Str<NCons<..>>` label type.
pub fn label_type(name: &str) -> TokenStream {
    let mut nibbles = Vec::with_capacity(name.len() * 2);
    for byte in name.as_bytes() {
        nibbles.push((byte >> 4) & 0xF);
        nibbles.push(byte & 0xF);
    }

    let list = build_nibble_list(&nibbles);
    quote! { ::type_algebra::primitives::label::Str<#list> }
}

fn build_nibble_list(nibbles: &[u8]) -> TokenStream {
    let mut list = quote! { ::type_algebra::primitives::label::NNil };
    for n in nibbles.iter().rev() {
        let head = nibble_to_ident(*n);
        list = quote! {
            ::type_algebra::primitives::label::NCons<::type_algebra::primitives::nibble::#head, #list>
        };
    }
    list
}

fn nibble_to_ident(n: u8) -> Ident {
    format_ident!("X{:X}", n)
}
