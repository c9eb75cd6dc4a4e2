//! Internal generators used by the library crate itself.

pub mod name_stream;
pub mod nat_table;
