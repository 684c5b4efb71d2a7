//! # Employee
//!
//! The service's single resource and its codec.
//!
//! Wire form: `{"id": "<24 hex>", "name": "...", "salary": 0.0, "age": 0.0}`
//! Stored form: `{_id: ObjectId, name, salary, age}`

pub mod codec;
pub mod errors;
mod model;

pub use codec::{decode_body, from_document, from_documents, parse_id, to_document, update_fields};
pub use errors::{CodecError, CodecResult};
pub use model::Employee;
