//! Convenient re-exports for working with bot API descriptions.
//!
//! ## Examples
//!
//! ```
//! use botsmith_define::prelude::*;
//!
//! let api = ApiDescription::default().with_type(TypeDescription::new(
//!     "User",
//!     vec![Field::required("id", &["Integer"])],
//! ));
//! assert!(api.is_declared("User"));
//! ```

pub use crate::api::ApiDescription;
pub use crate::error::SchemaError;
pub use crate::preferred::{PreferredType, Primitive, REPLY_MARKUP_FIELD, REPLY_MARKUP_INTERFACE};
pub use crate::types::{
    FILE_TYPE, Field, MESSAGE_TYPE, MethodDescription, REPLY_TO_MESSAGE, TypeDescription,
};
