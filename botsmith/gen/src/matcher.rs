//! Field matching between a method and a candidate receiver type.
//!
//! A method field can be filled from a receiver instance in two ways:
//!
//! - **Direct**: the field is the receiver's own identifier (`chat_id` or
//!   `id` on a `Chat` receiver binds to `c.Id`)
//! - **Subtype**: the field is the identifier of a declared-type field of the
//!   receiver (`chat_id` on a `Message` receiver binds to `m.Chat.Id`)
//!
//! Direct matches decide whether a pair is related at all. Subtype matches
//! only extend a pair that already has a direct match, and also strip the
//! sub-field's type name from the helper name, so `forwardMessage` on
//! `Message` becomes `Forward` rather than `ForwardChat`.

use std::collections::BTreeMap;

use botsmith_define::{ApiDescription, MethodDescription, REPLY_TO_MESSAGE, TypeDescription};
use tracing::debug;

use crate::errors::GeneratorError;
use crate::naming::{snake_to_title, title_to_snake};

/// Method field that marks a destination/source chat pair.
pub const FROM_CHAT_ID: &str = "from_chat_id";

const CHAT_ID: &str = "chat_id";

/// How a method field is derived from the receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    /// The receiver's own identifier field.
    Identifier(&'static str),
    /// The identifier of a declared-type field of the receiver.
    SubField {
        /// The receiver's field holding the related value.
        field: String,
        /// The identifier field of the related value.
        identifier: &'static str,
    },
}

impl Binding {
    /// Source expression reading the bound value from `receiver`.
    ///
    /// ```
    /// use botsmith_gen::matcher::Binding;
    ///
    /// assert_eq!(Binding::Identifier("message_id").access_path("m"), "m.MessageId");
    ///
    /// let sub = Binding::SubField { field: "sender_chat".to_string(), identifier: "id" };
    /// assert_eq!(sub.access_path("m"), "m.SenderChat.Id");
    /// ```
    pub fn access_path(&self, receiver: &str) -> String {
        match self {
            Binding::Identifier(identifier) => {
                format!("{receiver}.{}", snake_to_title(identifier))
            }
            Binding::SubField { field, identifier } => format!(
                "{receiver}.{}.{}",
                snake_to_title(field),
                snake_to_title(identifier)
            ),
        }
    }
}

/// Method field name -> receiver binding, for one (method, type) pair.
pub type MatchSet = BTreeMap<String, Binding>;

/// Outcome of matching a method against a receiver type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatch {
    /// All bound method fields.
    pub bindings: MatchSet,
    /// Helper name candidate with every matched type name stripped.
    pub candidate: String,
}

/// Returns true if the method has a source-chat field.
pub fn has_from_chat(method: &MethodDescription) -> bool {
    method.has_field(FROM_CHAT_ID)
}

/// Matches a method against a receiver type.
///
/// `candidate` is the method name with the receiver's type name already
/// removed. Returns `None` when no method field is the receiver's own
/// identifier, in which case the pair yields no helper.
///
/// ## Errors
///
/// Returns [`GeneratorError::Resolution`] if a field of the receiver type has
/// an unresolvable type.
pub fn match_fields(
    api: &ApiDescription,
    method: &MethodDescription,
    ty: &TypeDescription,
    candidate: &str,
    has_from_chat: bool,
) -> Result<Option<FieldMatch>, GeneratorError> {
    let mut bindings = direct_matches(method, ty);
    if bindings.is_empty() {
        return Ok(None);
    }

    let candidate = subtype_matches(api, method, ty, candidate, has_from_chat, &mut bindings)?;
    Ok(Some(FieldMatch {
        bindings,
        candidate,
    }))
}

/// Binds method fields named after the receiver's identifier.
///
/// A field matches if it is called `<type>_id` (in snake case) or `id`. The
/// receiver must actually declare its canonical identifier; a type without
/// one binds nothing.
pub fn direct_matches(method: &MethodDescription, ty: &TypeDescription) -> MatchSet {
    let identifier = ty.canonical_identifier();
    if !ty.has_field(identifier) {
        debug!(type_name = %ty.name, identifier, "type has no identifier field");
        return MatchSet::new();
    }

    let own_id = format!("{}_id", title_to_snake(&ty.name));
    method
        .fields
        .iter()
        .filter(|f| f.name == own_id || f.name == "id")
        .map(|f| (f.name.clone(), Binding::Identifier(identifier)))
        .collect()
}

/// Binds method fields that identify one of the receiver's declared-type fields.
///
/// For every receiver field `x` holding a declared type by value, a method
/// field `x_id` binds to `x`'s identifier and `x`'s type name is removed from
/// the candidate. `reply_to_message` is never followed. When the method has a
/// `from_chat_id` field, a `chat_id` match is recorded under `from_chat_id` so
/// that the receiver only fills the source side of the pair.
///
/// Returns the stripped candidate.
pub fn subtype_matches(
    api: &ApiDescription,
    method: &MethodDescription,
    ty: &TypeDescription,
    candidate: &str,
    has_from_chat: bool,
    bindings: &mut MatchSet,
) -> Result<String, GeneratorError> {
    let mut candidate = candidate.to_string();

    for field in ty.fields.iter().filter(|f| f.name != REPLY_TO_MESSAGE) {
        let preferred = api.preferred_type(field).map_err(|source| {
            let field_path = format!("{}.{}", ty.name, field.name);
            GeneratorError::resolution(&method.name, Some(field_path.as_str()), source)
        })?;

        let Some(sub_type) = preferred.declared_name().and_then(|name| api.types.get(name))
        else {
            continue;
        };

        let method_field = format!("{}_id", field.name);
        if !method.has_field(&method_field) {
            continue;
        }

        let identifier = sub_type.canonical_identifier();
        if !sub_type.has_field(identifier) {
            debug!(
                type_name = %sub_type.name,
                identifier,
                "sub-field type has no identifier field"
            );
            continue;
        }

        candidate = candidate.replace(&sub_type.name, "");

        let key = if has_from_chat && method_field == CHAT_ID {
            FROM_CHAT_ID.to_string()
        } else {
            method_field
        };
        bindings.insert(
            key,
            Binding::SubField {
                field: field.name.clone(),
                identifier,
            },
        );
    }

    Ok(candidate)
}
