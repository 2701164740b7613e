//! The top-level API description and its JSON loader.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::types::{MethodDescription, TypeDescription};

/// A complete bot API description.
///
/// Methods and types are keyed by their unique names. The maps are unordered;
/// anything that emits output must impose its own order over them.
///
/// ## Examples
///
/// Load a description from JSON:
///
/// ```
/// use botsmith_define::ApiDescription;
///
/// let json = r#"{
///     "version": "Bot API 7.0",
///     "methods": {
///         "getMe": {"name": "getMe", "returns": ["User"]}
///     },
///     "types": {
///         "User": {
///             "name": "User",
///             "fields": [{"name": "id", "types": ["Integer"], "required": true}]
///         }
///     }
/// }"#;
///
/// let api = ApiDescription::from_json_str(json).unwrap();
/// assert_eq!(api.version, "Bot API 7.0");
/// assert!(api.methods.contains_key("getMe"));
/// assert!(api.is_declared("User"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiDescription {
    /// API version label.
    #[serde(default)]
    pub version: String,
    /// Release date of this API version.
    #[serde(default)]
    pub release_date: String,
    /// Link to the changelog entry for this version.
    #[serde(default)]
    pub changelog: String,
    /// All methods, keyed by method name.
    #[serde(default)]
    pub methods: HashMap<String, MethodDescription>,
    /// All types, keyed by type name.
    #[serde(default)]
    pub types: HashMap<String, TypeDescription>,
}

impl ApiDescription {
    /// Parses a description from a JSON string.
    ///
    /// ## Errors
    ///
    /// Returns [`SchemaError::Parse`] if the JSON is malformed or does not
    /// match the description layout.
    pub fn from_json_str(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a description file.
    ///
    /// ## Errors
    ///
    /// Returns [`SchemaError::Read`] if the file cannot be read and
    /// [`SchemaError::Parse`] if its content is not a valid description.
    pub fn from_path(path: &Path) -> Result<Self, SchemaError> {
        let json = fs::read_to_string(path).map_err(|e| SchemaError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_json_str(&json)
    }

    /// Adds a method, replacing any method with the same name.
    pub fn with_method(mut self, method: MethodDescription) -> Self {
        self.methods.insert(method.name.clone(), method);
        self
    }

    /// Adds a type, replacing any type with the same name.
    pub fn with_type(mut self, ty: TypeDescription) -> Self {
        self.types.insert(ty.name.clone(), ty);
        self
    }

    /// Returns true if `name` is a declared type of this API.
    pub fn is_declared(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }
}
