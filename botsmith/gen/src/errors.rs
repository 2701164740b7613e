//! Error types for the helper generator.

use botsmith_define::SchemaError;
use thiserror::Error;

use crate::template::TemplateError;

/// Errors that can occur during helper generation.
///
/// Every variant is fatal: generation is deterministic, so rerunning against
/// the same description reproduces the same failure.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Failed to load the API description
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A field type or return type could not be resolved against the description.
    #[error("{}", resolution_message(.method, .field.as_deref(), .source))]
    Resolution {
        /// The method being synthesized when resolution failed.
        method: String,
        /// The field whose type failed to resolve, when known.
        field: Option<String>,
        #[source]
        source: SchemaError,
    },

    /// Failed to render a helper through the template
    #[error("Failed to render {helper} helper method on {type_name}: {source}")]
    Render {
        /// Exported helper name.
        helper: String,
        /// Host type of the helper.
        type_name: String,
        #[source]
        source: TemplateError,
    },

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl GeneratorError {
    /// Wraps a resolution failure with the method and field it occurred in.
    pub fn resolution(method: &str, field: Option<&str>, source: SchemaError) -> Self {
        GeneratorError::Resolution {
            method: method.to_string(),
            field: field.map(str::to_string),
            source,
        }
    }
}

fn resolution_message(method: &str, field: Option<&str>, source: &SchemaError) -> String {
    match field {
        Some(field) => format!(
            "Failed to resolve type of field '{field}' while generating helpers for {method}: {source}"
        ),
        None => format!("Failed to resolve return types of {method}: {source}"),
    }
}
