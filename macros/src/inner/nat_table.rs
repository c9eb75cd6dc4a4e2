//! Bounded natural number table generation.
//!
//! For every `n` in `0..=max` this emits the seal, the `Natural` impl with
//! its canonical decimal label, the successor and predecessor entries, the
//! leap entries (`n + leap`, `n - leap`), the arithmetic stride and the
//! zero/one classification. Entries that fall outside `0..=max` are
//! out-of-domain sentinels that carry no `Natural` impl.

use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::{parse::Parse, parse::ParseStream, Ident, LitInt, Token};

use super::name_stream::label_type;

/// `max, leap = n`
pub struct NatTableInput {
    pub max: i16,
    pub leap: i16,
}

impl Parse for NatTableInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<i16>()?;
        input.parse::<Token![,]>()?;
        let key: Ident = input.parse()?;
        if key != "leap" {
            return Err(syn::Error::new(key.span(), "expected `leap = <n>`"));
        }
        input.parse::<Token![=]>()?;
        let leap_lit: LitInt = input.parse()?;
        let leap = leap_lit.base10_parse::<i16>()?;

        // Every generated entry, sentinels included, must fit in `i8`
        if max < 0 || leap < 1 || max + leap > i8::MAX as i16 || leap > max {
            return Err(syn::Error::new(
                lit.span(),
                "natural table needs 0 < leap <= max and max + leap <= 127",
            ));
        }
        Ok(NatTableInput { max, leap })
    }
}

/// `Nat<n>`, with negative arguments wrapped in a block.
fn nat_type(n: i16) -> TokenStream {
    let lit = Literal::i16_unsuffixed(n.abs());
    if n < 0 {
        quote! { Nat<{ -#lit }> }
    } else {
        quote! { Nat<#lit> }
    }
}

fn flag(set: bool) -> TokenStream {
    if set { quote! { True } } else { quote! { False } }
}

pub fn expand_nat_table(input: NatTableInput) -> TokenStream {
    let mut impls = TokenStream::new();

    for n in 0..=input.max {
        let this = nat_type(n);
        let next = nat_type(n + 1);
        let prev = nat_type(n - 1);
        let value = Literal::u8_unsuffixed(n as u8);
        let label = label_type(&n.to_string());
        let is_zero = flag(n == 0);
        let is_one = flag(n == 1);
        let up = nat_type(n + input.leap);
        let down = nat_type(n - input.leap);
        let step = if n == 0 {
            quote! { Halt }
        } else if n < input.leap {
            quote! { Unit }
        } else {
            quote! { Leap }
        };

        impls.extend(quote! {
            impl sealed::Sealed for #this {}
            impl Natural for #this {
                const VALUE: u8 = #value;
                type Label = #label;
            }
            impl NatNext for #this { type Out = #next; }
            impl NatPrev for #this { type Out = #prev; }
            impl NatIsZero for #this { type Out = #is_zero; }
            impl NatIsOne for #this { type Out = #is_one; }
            impl NatLeap for #this { type Up = #up; type Down = #down; }
            impl NatStride for #this { type Step = #step; }
        });
    }

    impls
}
