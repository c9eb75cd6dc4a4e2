//! Procedural macros for the type-algebra crate
//!
//! | Macro | Purpose |
//! |-------|---------|
//! | `label!("hi")` | Label type for a string |
//! | `labels!["hi", "there"]` | Label set (union) type |
//! | `record! { w: u8, x: String }` | Record shape type |
//! | `nat_table!(63, leap = 8)` | Internal: bounded natural tables |
//!
//! ## Example
//!
//! ```ignore
//! use type_algebra::prelude::*;
//!
//! type Greeting = labels!["hi", "there"];
//! type Person = record! { name: String, age: u8 };
//!
//! type Names = Keys<Person>;
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod inner;
mod common;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate the bounded natural number tables for `0..=max`.
///
/// # Usage
/// ```ignore
/// nat_table!(63, leap = 8);  // every table entry for Nat<0>..Nat<63>
/// ```
///
/// Expects `Nat`, `Natural`, `NatNext`, `NatPrev`, `NatIsZero`, `NatIsOne`,
/// `NatLeap`, `NatStride`, `Halt`, `Unit`, `Leap`, `True`, `False` and a
/// `sealed::Sealed` trait in scope.
#[proc_macro]
pub fn nat_table(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::nat_table::NatTableInput);
    inner::nat_table::expand_nat_table(input).into()
}

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Create a label type from a string literal or identifier.
///
/// # Usage
/// ```ignore
/// type Hi = label!("hi");
/// type Name = label!(name);
/// ```
#[proc_macro]
pub fn label(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as common::LabelLit);
    user::build_label(&input).into()
}

/// Create a label set type from a list of labels.
///
/// # Usage
/// ```ignore
/// type Greeting = labels!["hi", "there"];
///
/// // Empty set (never)
/// type Never = labels![];
/// ```
#[proc_macro]
pub fn labels(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::LabelsInput);
    match user::build_label_set(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Create a record shape type from `key: Type` pairs.
///
/// # Usage
/// ```ignore
/// type Point = record! { x: i32, y: i32 };
/// type Header = record! { "content-type": String };
/// ```
#[proc_macro]
pub fn record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::RecordInput);
    match user::build_record(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
