//! Doctype metadata and the autofill rules built on it
//!
//! ## Usage
//!
//! ```rust
//! use contracts::shared::metadata::{compute_autofill, FieldDescriptor, FieldType};
//!
//! let fields = vec![FieldDescriptor::new("status", FieldType::Select).with_default("Open")];
//! let autofill = compute_autofill(Some(&fields)).unwrap();
//! assert_eq!(autofill["status"], "Open");
//! ```

mod autofill;
mod field_type;
mod types;

pub use autofill::{compute_autofill, AutofillFieldMap};
pub use field_type::FieldType;
pub use types::{DocTypeMeta, FieldDescriptor};
