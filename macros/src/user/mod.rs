//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `label!` | function macro | Build a label type |
//! | `labels!` | function macro | Build a label set |
//! | `record!` | function macro | Build a record shape |

mod label_set;
mod record;

pub use label_set::{build_label, build_label_set, LabelsInput};
pub use record::{build_record, RecordInput};
