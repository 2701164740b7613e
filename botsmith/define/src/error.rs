//! Error types for loading and resolving API descriptions.

use thiserror::Error;

/// Errors that can occur while loading an API description or resolving
/// the types it references.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Failed to read the description file
    #[error("Failed to read API description '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the description JSON
    #[error("Failed to parse API description: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field's wire types do not map onto a single preferred type.
    ///
    /// Either a wire type names something that is neither a primitive nor a
    /// declared type, or a union of wire types has no common representation.
    #[error("Unable to resolve a preferred type for field '{field}' from {types:?}")]
    UnresolvedType {
        /// The field whose type could not be resolved.
        field: String,
        /// The wire types declared for the field.
        types: Vec<String>,
    },

    /// A method's return types are empty or reference an unknown type.
    #[error("Unable to resolve return types {returns:?} of method '{method}'")]
    UnresolvedReturn {
        /// The method whose return types could not be resolved.
        method: String,
        /// The wire return types declared for the method.
        returns: Vec<String>,
    },
}
