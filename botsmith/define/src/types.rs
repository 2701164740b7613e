//! Core types for bot API descriptions.
//!
//! This module provides the descriptors the generator walks:
//!
//! - [`MethodDescription`] - A remote method and its parameters
//! - [`TypeDescription`] - A data type and its fields
//! - [`Field`] - A single parameter or struct field

use serde::{Deserialize, Serialize};

/// Name of the message type, whose identifier is `message_id`.
pub const MESSAGE_TYPE: &str = "Message";

/// Name of the opaque file type, whose identifier is `file_id`.
///
/// Files never host helper methods.
pub const FILE_TYPE: &str = "File";

/// Field that is never followed when matching through sub-fields.
///
/// A message's `reply_to_message` would otherwise compete with the message's
/// own `message_id` for `reply_to_message_id` parameters.
pub const REPLY_TO_MESSAGE: &str = "reply_to_message";

/// A named field of a method or type.
///
/// The wire types are the names used by the API documentation (`Integer`,
/// `String`, `Array of PhotoSize`, a declared type name, ...). Use
/// [`ApiDescription::preferred_type`](crate::ApiDescription::preferred_type)
/// to turn them into a single target-language type.
///
/// ## Examples
///
/// ```
/// use botsmith_define::Field;
///
/// let field = Field::optional("reply_to_message_id", &["Integer"]);
/// assert!(!field.required);
/// assert_eq!(field.types, vec!["Integer".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field name in snake case (e.g. `chat_id`).
    pub name: String,
    /// Wire type names, in documentation order.
    #[serde(default)]
    pub types: Vec<String>,
    /// Whether callers must always supply this field.
    #[serde(default)]
    pub required: bool,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
}

impl Field {
    /// Creates a required field.
    pub fn required(name: impl Into<String>, types: &[&str]) -> Self {
        Self {
            name: name.into(),
            types: types.iter().map(|t| t.to_string()).collect(),
            required: true,
            description: String::new(),
        }
    }

    /// Creates an optional field.
    pub fn optional(name: impl Into<String>, types: &[&str]) -> Self {
        Self {
            required: false,
            ..Self::required(name, types)
        }
    }
}

/// A single remote API method.
///
/// ## Examples
///
/// ```
/// use botsmith_define::{Field, MethodDescription};
///
/// let method = MethodDescription::new(
///     "forwardMessage",
///     vec![
///         Field::required("chat_id", &["Integer", "String"]),
///         Field::required("from_chat_id", &["Integer", "String"]),
///         Field::required("message_id", &["Integer"]),
///     ],
///     &["Message"],
/// );
///
/// assert!(method.has_field("from_chat_id"));
/// assert!(!method.has_field("text"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescription {
    /// Method name in lower camel case (e.g. `sendMessage`).
    pub name: String,
    /// Link to the method documentation.
    #[serde(default)]
    pub href: String,
    /// Documentation paragraphs.
    #[serde(default)]
    pub description: Vec<String>,
    /// Wire return type names (e.g. `["Message", "True"]`).
    #[serde(default)]
    pub returns: Vec<String>,
    /// Parameters, in documentation order.
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl MethodDescription {
    /// Creates a method with the given fields and wire return types.
    pub fn new(name: impl Into<String>, fields: Vec<Field>, returns: &[&str]) -> Self {
        Self {
            name: name.into(),
            href: String::new(),
            description: Vec::new(),
            returns: returns.iter().map(|r| r.to_string()).collect(),
            fields,
        }
    }

    /// Returns true if the method declares a field with this exact name.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }
}

/// A single data type of the API.
///
/// ## Examples
///
/// ```
/// use botsmith_define::{Field, TypeDescription};
///
/// let member = TypeDescription::new(
///     "ChatMember",
///     vec![Field::required("user", &["User"])],
/// );
///
/// assert_eq!(member.receiver_name(), "cm");
/// assert_eq!(member.canonical_identifier(), "id");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescription {
    /// Type name in title case (e.g. `ChatMember`).
    pub name: String,
    /// Link to the type documentation.
    #[serde(default)]
    pub href: String,
    /// Documentation paragraphs.
    #[serde(default)]
    pub description: Vec<String>,
    /// Fields, in documentation order.
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Concrete types that implement this type (for union types).
    #[serde(default)]
    pub subtypes: Vec<String>,
    /// Union types this type is a member of.
    #[serde(default)]
    pub subtype_of: Vec<String>,
}

impl TypeDescription {
    /// Creates a type with the given fields.
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            href: String::new(),
            description: Vec::new(),
            fields,
            subtypes: Vec::new(),
            subtype_of: Vec::new(),
        }
    }

    /// Marks this type as a member of the given union types.
    pub fn subtype_of(mut self, parents: &[&str]) -> Self {
        self.subtype_of = parents.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Returns true for the opaque file type, which never hosts helpers.
    pub fn is_opaque(&self) -> bool {
        self.name == FILE_TYPE
    }

    /// Returns the name of the field that identifies an instance of this type.
    ///
    /// ```
    /// use botsmith_define::TypeDescription;
    ///
    /// assert_eq!(TypeDescription::new("Message", vec![]).canonical_identifier(), "message_id");
    /// assert_eq!(TypeDescription::new("File", vec![]).canonical_identifier(), "file_id");
    /// assert_eq!(TypeDescription::new("Chat", vec![]).canonical_identifier(), "id");
    /// ```
    pub fn canonical_identifier(&self) -> &'static str {
        match self.name.as_str() {
            MESSAGE_TYPE => "message_id",
            FILE_TYPE => "file_id",
            _ => "id",
        }
    }

    /// Returns true if the type declares a field with this exact name.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Returns the receiver variable name used for methods on this type.
    ///
    /// This is the lower-cased sequence of the name's capital letters, so
    /// `Chat` becomes `c` and `ChatMember` becomes `cm`.
    pub fn receiver_name(&self) -> String {
        let capitals: String = self
            .name
            .chars()
            .filter(|c| c.is_uppercase())
            .flat_map(char::to_lowercase)
            .collect();

        if capitals.is_empty() {
            self.name
                .chars()
                .next()
                .map(|c| c.to_lowercase().collect())
                .unwrap_or_default()
        } else {
            capitals
        }
    }
}
