//! Validated contact fields.
//!
//! Every value stored on a record goes through a [`Field`] implementation,
//! which runs the field's validation predicate on construction and on every
//! reassignment.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::{Field, Validated};
pub use name::Name;
pub use phone::Phone;
