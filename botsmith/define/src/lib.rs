//! Botsmith Definition Library
//!
//! This crate provides the read-only model of a bot API description: the
//! remote methods, the data types they exchange, and the fields of each. The
//! model is consumed by the `botsmith-gen` binary to synthesize helper methods
//! on the generated client's types.
//!
//! ## Core Types
//!
//! - [`ApiDescription`] - The complete description, keyed by method and type name
//! - [`MethodDescription`] - A single remote method with its fields and return types
//! - [`TypeDescription`] - A single data type with its fields
//! - [`Field`] - A named, typed field with a required flag
//! - [`PreferredType`] - The target-language type chosen for a field or return value
//! - [`SchemaError`] - Loading and resolution failures
//!
//! ## Examples
//!
//! Describe a tiny API by hand and resolve a field type:
//!
//! ```
//! use botsmith_define::{ApiDescription, Field, MethodDescription, TypeDescription};
//!
//! let api = ApiDescription::default()
//!     .with_type(TypeDescription::new(
//!         "Chat",
//!         vec![Field::required("id", &["Integer"])],
//!     ))
//!     .with_method(MethodDescription::new(
//!         "setChatTitle",
//!         vec![
//!             Field::required("chat_id", &["Integer", "String"]),
//!             Field::required("title", &["String"]),
//!         ],
//!         &["Boolean"],
//!     ));
//!
//! let method = &api.methods["setChatTitle"];
//! let chat_id = api.preferred_type(&method.fields[0]).unwrap();
//! assert_eq!(chat_id.to_string(), "int64");
//! ```
//!
//! Descriptions are normally loaded from the JSON published alongside the
//! Bot API documentation with [`ApiDescription::from_path`].

pub mod api;
pub mod error;
pub mod prelude;
pub mod preferred;
pub mod types;

// Re-export main types at crate root
pub use api::ApiDescription;
pub use error::SchemaError;
pub use preferred::{PreferredType, Primitive, REPLY_MARKUP_FIELD, REPLY_MARKUP_INTERFACE};
pub use types::{
    FILE_TYPE, Field, MESSAGE_TYPE, MethodDescription, REPLY_TO_MESSAGE, TypeDescription,
};
