//! Label and label set construction
//!
//! - `label!` - a single label type
//! - `labels!` - a set (union) of labels

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Token,
};

use crate::common::{check_duplicates, LabelLit};
use crate::inner::name_stream::label_type;

// =============================================================================
// labels! Input Parser
// =============================================================================

pub struct LabelsInput {
    pub labels: Punctuated<LabelLit, Token![,]>,
}

impl Parse for LabelsInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let labels = Punctuated::parse_terminated(input)?;
        Ok(LabelsInput { labels })
    }
}

/// Build set type: HCons<A, HCons<B, HCons<C, HNil>>>
pub fn build_label_set(input: &LabelsInput) -> syn::Result<TokenStream2> {
    check_duplicates(&input.labels, "label")?;

    let mut result = quote! { ::type_algebra::primitives::list::HNil };
    for label in input.labels.iter().rev() {
        let ty = label_type(&label.value);
        result = quote! { ::type_algebra::primitives::list::HCons<#ty, #result> };
    }
    Ok(result)
}

pub fn build_label(input: &LabelLit) -> TokenStream2 {
    label_type(&input.value)
}
