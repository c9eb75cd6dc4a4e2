//! Record shape construction
//!
//! `record! { w: u8, "first-name": String }` builds
//! `HCons<Field<label!("w"), u8>, HCons<Field<label!("first-name"), String>, HNil>>`.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Token, Type,
};

use crate::common::{check_duplicates, LabelLit};
use crate::inner::name_stream::label_type;

/// Single field: `key: Type`
pub struct FieldDef {
    pub key: LabelLit,
    pub ty: Type,
}

impl Parse for FieldDef {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: LabelLit = input.parse()?;
        input.parse::<Token![:]>()?;
        let ty: Type = input.parse()?;
        Ok(FieldDef { key, ty })
    }
}

pub struct RecordInput {
    pub fields: Punctuated<FieldDef, Token![,]>,
}

impl Parse for RecordInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let fields = Punctuated::parse_terminated(input)?;
        Ok(RecordInput { fields })
    }
}

pub fn build_record(input: &RecordInput) -> syn::Result<TokenStream2> {
    check_duplicates(input.fields.iter().map(|f| &f.key), "record key")?;

    let mut result = quote! { ::type_algebra::primitives::list::HNil };
    for field in input.fields.iter().rev() {
        let key = label_type(&field.key.value);
        let ty = &field.ty;
        result = quote! {
            ::type_algebra::primitives::list::HCons<::type_algebra::record::Field<#key, #ty>, #result>
        };
    }
    Ok(result)
}
