// Common utilities shared between user-facing macros
//
// This module contains:
// - label_lit: label literal parsing and duplicate checks

mod label_lit;

pub use label_lit::*;
