//! Shared test utilities for botsmith-gen tests.
//!
//! This module provides a small but realistic slice of the Telegram Bot API
//! description so that unit tests across the crate exercise the same shapes.

use botsmith_define::{ApiDescription, Field, MethodDescription, TypeDescription};

/// Creates an API description with the types and methods the unit tests use.
///
/// Includes:
/// - `Chat`, `Message`, `User`, `File`, `CallbackQuery` types
/// - Methods that match by direct identifier only (`setChatTitle`)
/// - Methods that also match through a sub-field (`pinChatMessage`)
/// - A source/destination chat pair (`forwardMessage`)
/// - Optional receiver-bound fields (`editMessageText`)
/// - Methods that match nothing (`sendMessage`, `getMe`)
pub fn make_telegram_api() -> ApiDescription {
    ApiDescription::default()
        .with_type(TypeDescription::new(
            "Chat",
            vec![
                Field::required("id", &["Integer"]),
                Field::required("type", &["String"]),
                Field::optional("title", &["String"]),
                Field::optional("pinned_message", &["Message"]),
            ],
        ))
        .with_type(TypeDescription::new(
            "Message",
            vec![
                Field::required("message_id", &["Integer"]),
                Field::optional("from", &["User"]),
                Field::required("date", &["Integer"]),
                Field::required("chat", &["Chat"]),
                Field::optional("reply_to_message", &["Message"]),
                Field::optional("text", &["String"]),
            ],
        ))
        .with_type(TypeDescription::new(
            "User",
            vec![
                Field::required("id", &["Integer"]),
                Field::required("is_bot", &["Boolean"]),
                Field::required("first_name", &["String"]),
            ],
        ))
        .with_type(TypeDescription::new(
            "File",
            vec![
                Field::required("file_id", &["String"]),
                Field::optional("file_path", &["String"]),
            ],
        ))
        .with_type(TypeDescription::new(
            "CallbackQuery",
            vec![
                Field::required("id", &["String"]),
                Field::required("from", &["User"]),
                Field::optional("message", &["Message"]),
            ],
        ))
        .with_method(MethodDescription::new(
            "setChatTitle",
            vec![
                Field::required("chat_id", &["Integer", "String"]),
                Field::required("title", &["String"]),
            ],
            &["Boolean"],
        ))
        .with_method(MethodDescription::new(
            "sendMessage",
            vec![
                Field::required("chat_id", &["Integer", "String"]),
                Field::required("text", &["String"]),
                Field::optional("reply_to_message_id", &["Integer"]),
            ],
            &["Message"],
        ))
        .with_method(MethodDescription::new(
            "forwardMessage",
            vec![
                Field::required("chat_id", &["Integer", "String"]),
                Field::required("from_chat_id", &["Integer", "String"]),
                Field::optional("disable_notification", &["Boolean"]),
                Field::required("message_id", &["Integer"]),
            ],
            &["Message"],
        ))
        .with_method(MethodDescription::new(
            "pinChatMessage",
            vec![
                Field::required("chat_id", &["Integer", "String"]),
                Field::required("message_id", &["Integer"]),
                Field::optional("disable_notification", &["Boolean"]),
            ],
            &["Boolean"],
        ))
        .with_method(MethodDescription::new(
            "editMessageText",
            vec![
                Field::optional("chat_id", &["Integer", "String"]),
                Field::optional("message_id", &["Integer"]),
                Field::optional("inline_message_id", &["String"]),
                Field::required("text", &["String"]),
            ],
            &["Message", "True"],
        ))
        .with_method(MethodDescription::new(
            "answerCallbackQuery",
            vec![
                Field::required("callback_query_id", &["String"]),
                Field::optional("text", &["String"]),
            ],
            &["Boolean"],
        ))
        .with_method(MethodDescription::new(
            "banChatMember",
            vec![
                Field::required("chat_id", &["Integer", "String"]),
                Field::required("user_id", &["Integer"]),
                Field::optional("until_date", &["Integer"]),
            ],
            &["Boolean"],
        ))
        .with_method(MethodDescription::new(
            "getFile",
            vec![Field::required("file_id", &["String"])],
            &["File"],
        ))
        .with_method(MethodDescription::new("getMe", vec![], &["User"]))
}

/// Looks up a method that the fixture is known to contain.
pub fn method<'a>(api: &'a ApiDescription, name: &str) -> &'a MethodDescription {
    api.methods
        .get(name)
        .unwrap_or_else(|| panic!("fixture has no method {name}"))
}

/// Looks up a type that the fixture is known to contain.
pub fn ty<'a>(api: &'a ApiDescription, name: &str) -> &'a TypeDescription {
    api.types
        .get(name)
        .unwrap_or_else(|| panic!("fixture has no type {name}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_resolves_every_field() {
        let api = make_telegram_api();
        for ty in api.types.values() {
            for field in &ty.fields {
                assert!(api.preferred_type(field).is_ok(), "{}.{}", ty.name, field.name);
            }
        }
        for method in api.methods.values() {
            for field in &method.fields {
                assert!(api.preferred_type(field).is_ok(), "{}.{}", method.name, field.name);
            }
            assert!(api.return_types(method).is_ok(), "{}", method.name);
        }
    }
}
