//! Label literal parsing.
//!
//! A label may be written as a string literal (`"first-name"`) or as a bare
//! identifier (`first_name`). Raw identifiers lose their `r#` prefix.

use proc_macro2::Span;
use syn::{
    ext::IdentExt,
    parse::{Parse, ParseStream},
    Ident, LitStr,
};

/// A label with the span it was written at.
#[derive(Clone)]
pub struct LabelLit {
    pub value: String,
    pub span: Span,
}

impl Parse for LabelLit {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(LitStr) {
            let lit: LitStr = input.parse()?;
            Ok(LabelLit { value: lit.value(), span: lit.span() })
        } else if input.peek(Ident::peek_any) {
            let ident = input.call(Ident::parse_any)?;
            Ok(LabelLit { value: ident.unraw().to_string(), span: ident.span() })
        } else {
            Err(input.error("expected a string literal or identifier label"))
        }
    }
}

/// Reject the second occurrence of any label.
pub fn check_duplicates<'a>(labels: impl IntoIterator<Item = &'a LabelLit>, what: &str) -> syn::Result<()> {
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    for label in labels {
        if !seen.insert(label.value.as_str()) {
            return Err(syn::Error::new(
                label.span,
                format!(
                    "duplicate {} `{}`\n\
                     \n\
                     Each label should appear only once.",
                    what, label.value
                ),
            ));
        }
    }
    Ok(())
}
