//! Preferred-type resolution.
//!
//! The API documentation describes each field with one or more wire type
//! names. The generated client needs exactly one target type per field, so
//! this module picks it:
//!
//! - A single wire type maps directly (`Integer` -> `int64`, `Chat` -> `Chat`)
//! - `Array of X` maps to a list of the resolved element
//! - The chat identifier union `Integer or String` maps to `int64`
//! - The upload union `InputFile or String` maps to `InputFile`
//! - A union of declared types maps to the union type they all belong to
//! - The keyboard union of a `reply_markup` field maps to the client's
//!   `ReplyMarkup` interface
//!
//! Optional fields of a declared type are pointer-wrapped so that their
//! absence is representable.

use std::fmt;

use strum::{Display, EnumIter, EnumString};

use crate::api::ApiDescription;
use crate::error::SchemaError;
use crate::types::{Field, MethodDescription};

const ARRAY_PREFIX: &str = "Array of ";

/// Field carrying one of the keyboard markup types.
pub const REPLY_MARKUP_FIELD: &str = "reply_markup";

/// Client interface implemented by every keyboard markup type.
pub const REPLY_MARKUP_INTERFACE: &str = "ReplyMarkup";

/// Primitive target types.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use botsmith_define::Primitive;
///
/// assert_eq!(Primitive::Int64.to_string(), "int64");
/// assert_eq!(Primitive::from_str("bool").unwrap(), Primitive::Bool);
/// assert_eq!(Primitive::String.zero_value(), "\"\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
pub enum Primitive {
    #[strum(serialize = "int64")]
    Int64,
    #[strum(serialize = "float64")]
    Float64,
    #[strum(serialize = "bool")]
    Bool,
    #[strum(serialize = "string")]
    String,
}

impl Primitive {
    /// Source text of this type's zero value.
    pub fn zero_value(self) -> &'static str {
        match self {
            Primitive::Int64 | Primitive::Float64 => "0",
            Primitive::Bool => "false",
            Primitive::String => "\"\"",
        }
    }
}

/// The single target type chosen for a field or return value.
///
/// Displays as target source text.
///
/// ## Examples
///
/// ```
/// use botsmith_define::{PreferredType, Primitive};
///
/// let chat = PreferredType::Declared("Chat".to_string());
/// assert_eq!(chat.to_string(), "Chat");
/// assert_eq!(chat.declared_name(), Some("Chat"));
///
/// let optional = PreferredType::Pointer(Box::new(chat));
/// assert_eq!(optional.to_string(), "*Chat");
/// assert!(optional.is_pointer());
/// assert_eq!(optional.zero_value(), "nil");
///
/// let ids = PreferredType::List(Box::new(PreferredType::Primitive(Primitive::Int64)));
/// assert_eq!(ids.to_string(), "[]int64");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PreferredType {
    /// A builtin scalar.
    Primitive(Primitive),
    /// An uploadable file or file reference.
    InputFile,
    /// A declared type of the API, held by value.
    Declared(String),
    /// An interface type of the client; nil when absent.
    Interface(String),
    /// An optionally-present value.
    Pointer(Box<PreferredType>),
    /// A sequence of values.
    List(Box<PreferredType>),
}

impl PreferredType {
    /// Returns true if the type is pointer-wrapped.
    pub fn is_pointer(&self) -> bool {
        matches!(self, PreferredType::Pointer(_))
    }

    /// Returns the declared type name if this is a declared type held by value.
    ///
    /// Pointer-wrapped and list types return `None`.
    pub fn declared_name(&self) -> Option<&str> {
        match self {
            PreferredType::Declared(name) => Some(name),
            _ => None,
        }
    }

    /// Source text of this type's zero value.
    pub fn zero_value(&self) -> String {
        match self {
            PreferredType::Primitive(p) => p.zero_value().to_string(),
            PreferredType::Declared(name) => format!("{name}{{}}"),
            PreferredType::InputFile
            | PreferredType::Interface(_)
            | PreferredType::Pointer(_)
            | PreferredType::List(_) => "nil".to_string(),
        }
    }
}

impl fmt::Display for PreferredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferredType::Primitive(p) => write!(f, "{p}"),
            PreferredType::InputFile => write!(f, "InputFile"),
            PreferredType::Declared(name) | PreferredType::Interface(name) => write!(f, "{name}"),
            PreferredType::Pointer(inner) => write!(f, "*{inner}"),
            PreferredType::List(inner) => write!(f, "[]{inner}"),
        }
    }
}

impl ApiDescription {
    /// Resolves the preferred type of a field.
    ///
    /// ## Errors
    ///
    /// Returns [`SchemaError::UnresolvedType`] if the wire types name an
    /// unknown type or form a union with no single representation.
    ///
    /// ## Examples
    ///
    /// ```
    /// use botsmith_define::{ApiDescription, Field, TypeDescription};
    ///
    /// let api = ApiDescription::default().with_type(TypeDescription::new("User", vec![]));
    ///
    /// let from = Field::optional("from", &["User"]);
    /// assert_eq!(api.preferred_type(&from).unwrap().to_string(), "*User");
    ///
    /// let photo = Field::required("photo", &["InputFile", "String"]);
    /// assert_eq!(api.preferred_type(&photo).unwrap().to_string(), "InputFile");
    ///
    /// let unknown = Field::required("thing", &["Gadget"]);
    /// assert!(api.preferred_type(&unknown).is_err());
    /// ```
    pub fn preferred_type(&self, field: &Field) -> Result<PreferredType, SchemaError> {
        let resolved = match field.types.as_slice() {
            [single] => self.resolve_wire(single),
            [a, b] if a == "Integer" && b == "String" => {
                Some(PreferredType::Primitive(Primitive::Int64))
            }
            [a, b] if a == "InputFile" && b == "String" => Some(PreferredType::InputFile),
            [_, _, ..] if field.name == REPLY_MARKUP_FIELD => {
                Some(PreferredType::Interface(REPLY_MARKUP_INTERFACE.to_string()))
            }
            many => self.common_parent(many),
        }
        .ok_or_else(|| SchemaError::UnresolvedType {
            field: field.name.clone(),
            types: field.types.clone(),
        })?;

        if !field.required && matches!(resolved, PreferredType::Declared(_)) {
            return Ok(PreferredType::Pointer(Box::new(resolved)));
        }

        Ok(resolved)
    }

    /// Resolves the return types of a method, in declaration order.
    ///
    /// Declared types are returned by pointer.
    ///
    /// ## Errors
    ///
    /// Returns [`SchemaError::UnresolvedReturn`] if the method declares no
    /// return types or any of them cannot be resolved.
    ///
    /// ## Examples
    ///
    /// ```
    /// use botsmith_define::{ApiDescription, MethodDescription, TypeDescription};
    ///
    /// let api = ApiDescription::default().with_type(TypeDescription::new("Message", vec![]));
    /// let edit = MethodDescription::new("editMessageText", vec![], &["Message", "True"]);
    ///
    /// let returns: Vec<String> = api
    ///     .return_types(&edit)
    ///     .unwrap()
    ///     .iter()
    ///     .map(ToString::to_string)
    ///     .collect();
    /// assert_eq!(returns, vec!["*Message", "bool"]);
    /// ```
    pub fn return_types(&self, method: &MethodDescription) -> Result<Vec<PreferredType>, SchemaError> {
        let unresolved = || SchemaError::UnresolvedReturn {
            method: method.name.clone(),
            returns: method.returns.clone(),
        };

        if method.returns.is_empty() {
            return Err(unresolved());
        }

        method
            .returns
            .iter()
            .map(|wire| {
                self.resolve_wire(wire)
                    .map(|ty| match ty {
                        PreferredType::Declared(_) => PreferredType::Pointer(Box::new(ty)),
                        other => other,
                    })
                    .ok_or_else(unresolved)
            })
            .collect()
    }

    /// Maps a single wire type name onto a target type.
    fn resolve_wire(&self, wire: &str) -> Option<PreferredType> {
        if let Some(element) = wire.strip_prefix(ARRAY_PREFIX) {
            return self
                .resolve_wire(element)
                .map(|ty| PreferredType::List(Box::new(ty)));
        }

        match wire {
            "Integer" => Some(PreferredType::Primitive(Primitive::Int64)),
            "Float" => Some(PreferredType::Primitive(Primitive::Float64)),
            "Boolean" | "True" => Some(PreferredType::Primitive(Primitive::Bool)),
            "String" => Some(PreferredType::Primitive(Primitive::String)),
            "InputFile" => Some(PreferredType::InputFile),
            name if self.is_declared(name) => Some(PreferredType::Declared(name.to_string())),
            _ => None,
        }
    }

    /// Finds the union type shared by every member of a declared-type union.
    ///
    /// Handles both plain unions and unions of arrays (`Array of A`,
    /// `Array of B`), which resolve to a list of the shared parent.
    fn common_parent(&self, wires: &[String]) -> Option<PreferredType> {
        let lists = wires.iter().filter(|w| w.starts_with(ARRAY_PREFIX)).count();
        if lists != 0 && lists != wires.len() {
            return None;
        }
        let is_list = lists != 0;
        let names: Vec<&str> = wires
            .iter()
            .map(|w| w.strip_prefix(ARRAY_PREFIX).unwrap_or(w))
            .collect();

        let (first, rest) = names.split_first()?;
        let parent = self.types.get(*first)?.subtype_of.iter().find(|parent| {
            self.is_declared(parent)
                && rest.iter().all(|name| {
                    self.types
                        .get(*name)
                        .is_some_and(|ty| ty.subtype_of.contains(parent))
                })
        })?;

        let parent = PreferredType::Declared(parent.clone());
        Some(if is_list {
            PreferredType::List(Box::new(parent))
        } else {
            parent
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeDescription;
    use strum::IntoEnumIterator;

    fn api() -> ApiDescription {
        ApiDescription::default()
            .with_type(TypeDescription::new("Chat", vec![]))
            .with_type(TypeDescription::new("Message", vec![]))
            .with_type(TypeDescription::new("InputMedia", vec![]))
            .with_type(TypeDescription::new("InputMediaPhoto", vec![]).subtype_of(&["InputMedia"]))
            .with_type(TypeDescription::new("InputMediaVideo", vec![]).subtype_of(&["InputMedia"]))
            .with_type(TypeDescription::new("Orphan", vec![]))
    }

    fn resolve(field: Field) -> Result<String, SchemaError> {
        api().preferred_type(&field).map(|t| t.to_string())
    }

    #[test]
    fn primitives_resolve_by_wire_name() {
        assert_eq!(resolve(Field::required("a", &["Integer"])).unwrap(), "int64");
        assert_eq!(resolve(Field::required("b", &["Float"])).unwrap(), "float64");
        assert_eq!(resolve(Field::required("c", &["Boolean"])).unwrap(), "bool");
        assert_eq!(resolve(Field::required("d", &["True"])).unwrap(), "bool");
        assert_eq!(resolve(Field::required("e", &["String"])).unwrap(), "string");
    }

    #[test]
    fn optional_primitives_stay_unwrapped() {
        assert_eq!(resolve(Field::optional("a", &["Integer"])).unwrap(), "int64");
    }

    #[test]
    fn declared_types_pointer_wrap_only_when_optional() {
        assert_eq!(resolve(Field::required("chat", &["Chat"])).unwrap(), "Chat");
        assert_eq!(resolve(Field::optional("chat", &["Chat"])).unwrap(), "*Chat");
    }

    #[test]
    fn arrays_resolve_elements() {
        assert_eq!(
            resolve(Field::required("ids", &["Array of Integer"])).unwrap(),
            "[]int64"
        );
        assert_eq!(
            resolve(Field::optional("grid", &["Array of Array of Message"])).unwrap(),
            "[][]Message"
        );
    }

    #[test]
    fn chat_id_union_is_int64() {
        assert_eq!(
            resolve(Field::required("chat_id", &["Integer", "String"])).unwrap(),
            "int64"
        );
    }

    #[test]
    fn upload_union_is_input_file() {
        assert_eq!(
            resolve(Field::optional("thumbnail", &["InputFile", "String"])).unwrap(),
            "InputFile"
        );
    }

    #[test]
    fn declared_union_resolves_to_parent() {
        assert_eq!(
            resolve(Field::optional("media", &["InputMediaPhoto", "InputMediaVideo"])).unwrap(),
            "*InputMedia"
        );
        assert_eq!(
            resolve(Field::required(
                "media",
                &["Array of InputMediaPhoto", "Array of InputMediaVideo"]
            ))
            .unwrap(),
            "[]InputMedia"
        );
    }

    #[test]
    fn union_mixing_arrays_and_values_fails() {
        assert!(resolve(Field::required("media", &["InputMediaPhoto", "Array of InputMediaVideo"])).is_err());
        assert!(resolve(Field::required("media", &["Array of InputMediaPhoto", "InputMediaVideo"])).is_err());
    }

    #[test]
    fn keyboard_union_resolves_to_reply_markup_interface() {
        let field = Field::optional(
            "reply_markup",
            &["InlineKeyboardMarkup", "ReplyKeyboardMarkup", "ReplyKeyboardRemove", "ForceReply"],
        );
        let resolved = api().preferred_type(&field).unwrap();

        assert_eq!(resolved, PreferredType::Interface("ReplyMarkup".to_string()));
        assert_eq!(resolved.to_string(), "ReplyMarkup");
        assert_eq!(resolved.zero_value(), "nil");
        assert!(!resolved.is_pointer());
        assert_eq!(resolved.declared_name(), None);
    }

    #[test]
    fn single_keyboard_type_stays_declared() {
        let api = api().with_type(TypeDescription::new("InlineKeyboardMarkup", vec![]));
        let field = Field::optional("reply_markup", &["InlineKeyboardMarkup"]);
        assert_eq!(api.preferred_type(&field).unwrap().to_string(), "*InlineKeyboardMarkup");
    }

    #[test]
    fn union_without_shared_parent_fails() {
        let err = resolve(Field::required("x", &["InputMediaPhoto", "Orphan"])).unwrap_err();
        match err {
            SchemaError::UnresolvedType { field, types } => {
                assert_eq!(field, "x");
                assert_eq!(types, vec!["InputMediaPhoto", "Orphan"]);
            }
            other => panic!("expected UnresolvedType, got {other:?}"),
        }
    }

    #[test]
    fn unknown_and_empty_types_fail() {
        assert!(resolve(Field::required("x", &["Gadget"])).is_err());
        assert!(resolve(Field::required("x", &[])).is_err());
    }

    #[test]
    fn return_types_pointer_wrap_declared() {
        let method = MethodDescription::new("getChat", vec![], &["Chat"]);
        let returns = api().return_types(&method).unwrap();
        assert_eq!(returns, vec![PreferredType::Pointer(Box::new(
            PreferredType::Declared("Chat".to_string())
        ))]);
    }

    #[test]
    fn return_types_keep_lists_by_value() {
        let method = MethodDescription::new("forwardMessages", vec![], &["Array of Message"]);
        let returns = api().return_types(&method).unwrap();
        assert_eq!(returns[0].to_string(), "[]Message");
    }

    #[test]
    fn return_types_fail_when_empty_or_unknown() {
        let empty = MethodDescription::new("close", vec![], &[]);
        assert!(matches!(
            api().return_types(&empty),
            Err(SchemaError::UnresolvedReturn { .. })
        ));

        let unknown = MethodDescription::new("getGadget", vec![], &["Gadget"]);
        match api().return_types(&unknown).unwrap_err() {
            SchemaError::UnresolvedReturn { method, returns } => {
                assert_eq!(method, "getGadget");
                assert_eq!(returns, vec!["Gadget"]);
            }
            other => panic!("expected UnresolvedReturn, got {other:?}"),
        }
    }

    #[test]
    fn zero_values() {
        assert_eq!(PreferredType::Primitive(Primitive::Int64).zero_value(), "0");
        assert_eq!(PreferredType::Primitive(Primitive::Bool).zero_value(), "false");
        assert_eq!(PreferredType::InputFile.zero_value(), "nil");
        assert_eq!(
            PreferredType::Declared("Chat".to_string()).zero_value(),
            "Chat{}"
        );
    }

    #[test]
    fn every_primitive_has_a_zero_value() {
        for primitive in Primitive::iter() {
            assert!(!primitive.zero_value().is_empty());
        }
    }
}
