//! Botsmith helper generator library.
//!
//! This crate derives convenience methods for a bot API client from an API
//! description loaded with `botsmith-define`. For every remote method whose
//! name mentions a data type and whose fields include that type's identifier,
//! it emits a Go method on the type that fills those fields from the receiver
//! and delegates to the client:
//!
//! ```text
//! // Forward Helper method for Bot.ForwardMessage.
//! func (m Message) Forward(b *Bot, chatId int64, opts *ForwardMessageOpts) (*Message, error) {
//!     return b.ForwardMessage(chatId, m.Chat.Id, m.MessageId, opts)
//! }
//! ```
//!
//! ## Modules
//!
//! - [`ordering`] - Deterministic method and type iteration order
//! - [`matcher`] - Binding method fields to receiver fields
//! - [`arguments`] - Signature, call arguments and default-fill statements
//! - [`helpers`] - Synthesis across every (method, type) pair
//! - [`output`] - Rendering, artifact assembly and atomic writing
//! - [`template`] - The compiled text templates used for rendering
//! - [`naming`] - Identifier case conversions
//! - [`config`] - Target package and client settings
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::path::Path;
//! use botsmith_define::ApiDescription;
//! use botsmith_gen::config::GeneratorConfig;
//! use botsmith_gen::output::generate_and_write;
//!
//! let api = ApiDescription::from_path(Path::new("api.json")).unwrap();
//!
//! // Generate helpers (dry_run=true prints instead of writing)
//! let code = generate_and_write(&api, Path::new("gen_helpers.go"), &GeneratorConfig::default(), true)
//!     .unwrap();
//! println!("{}", code);
//! ```

pub mod arguments;
pub mod config;
pub mod errors;
pub mod helpers;
pub mod matcher;
pub mod naming;
pub mod ordering;
pub mod output;
pub mod template;

#[cfg(test)]
pub(crate) mod test_utils;
