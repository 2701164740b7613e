//! Minimal text templates.
//!
//! Templates are plain text with two kinds of tag:
//!
//! - `{{name}}` substitutes the value of `name`
//! - `{{#if name}}...{{/if}}` keeps its body only when `name` is non-empty
//!
//! Sections do not nest. A template is compiled once into segments and can
//! then be rendered any number of times; rendering never re-parses.
//!
//! ## Examples
//!
//! ```
//! use botsmith_gen::template::{Context, Template};
//!
//! let template = Template::compile("hello {{name}}{{#if punct}}{{punct}}{{/if}}").unwrap();
//!
//! let mut context = Context::new();
//! context.insert("name", "world".to_string());
//! context.insert("punct", String::new());
//! assert_eq!(template.render(&context).unwrap(), "hello world");
//!
//! context.insert("punct", "!".to_string());
//! assert_eq!(template.render(&context).unwrap(), "hello world!");
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\{\{\s*(?:#if\s+(?P<section>[A-Za-z_][A-Za-z0-9_]*)|(?P<close>/if)|(?P<value>[A-Za-z_][A-Za-z0-9_]*))\s*\}\}",
    )
    .expect("Invalid regex")
});

/// Values available to a template render, keyed by placeholder name.
pub type Context<'a> = HashMap<&'a str, String>;

/// Errors from compiling or rendering a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The template text is malformed.
    #[error("template syntax error at byte {offset}: {reason}")]
    Syntax { offset: usize, reason: &'static str },

    /// A tag refers to a key the context does not provide.
    #[error("template key '{0}' has no value")]
    MissingKey(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Value(String),
    Section { key: String, body: Vec<Segment> },
}

/// A compiled template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parses template text into segments.
    ///
    /// ## Errors
    ///
    /// Returns [`TemplateError::Syntax`] for an unterminated or unknown tag,
    /// a nested section, an `{{/if}}` without a section, or a section that is
    /// never closed.
    pub fn compile(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut open: Option<(usize, String, Vec<Segment>)> = None;
        let mut last = 0;

        for caps in TAG.captures_iter(source) {
            let Some(tag) = caps.get(0) else { continue };

            let target = match open.as_mut() {
                Some((_, _, body)) => body,
                None => &mut segments,
            };
            push_text(target, &source[last..tag.start()], last)?;

            if let Some(key) = caps.name("section") {
                if open.is_some() {
                    return Err(TemplateError::Syntax {
                        offset: tag.start(),
                        reason: "sections cannot be nested",
                    });
                }
                open = Some((tag.start(), key.as_str().to_string(), Vec::new()));
            } else if caps.name("close").is_some() {
                let Some((_, key, body)) = open.take() else {
                    return Err(TemplateError::Syntax {
                        offset: tag.start(),
                        reason: "{{/if}} without an open section",
                    });
                };
                segments.push(Segment::Section { key, body });
            } else if let Some(key) = caps.name("value") {
                target.push(Segment::Value(key.as_str().to_string()));
            }

            last = tag.end();
        }

        if let Some((offset, _, _)) = open {
            return Err(TemplateError::Syntax {
                offset,
                reason: "section is never closed",
            });
        }
        push_text(&mut segments, &source[last..], last)?;

        Ok(Self { segments })
    }

    /// Renders the template with the given values.
    ///
    /// ## Errors
    ///
    /// Returns [`TemplateError::MissingKey`] if a value or section tag names
    /// a key absent from `context`. Keys inside a skipped section are not
    /// looked up.
    pub fn render(&self, context: &Context<'_>) -> Result<String, TemplateError> {
        let mut out = String::new();
        render_segments(&self.segments, context, &mut out)?;
        Ok(out)
    }
}

fn push_text(target: &mut Vec<Segment>, text: &str, offset: usize) -> Result<(), TemplateError> {
    if let Some(pos) = text.find("{{") {
        return Err(TemplateError::Syntax {
            offset: offset + pos,
            reason: "malformed or unterminated tag",
        });
    }
    if !text.is_empty() {
        target.push(Segment::Text(text.to_string()));
    }
    Ok(())
}

fn render_segments(
    segments: &[Segment],
    context: &Context<'_>,
    out: &mut String,
) -> Result<(), TemplateError> {
    for segment in segments {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Value(key) => out.push_str(lookup(context, key)?),
            Segment::Section { key, body } => {
                if !lookup(context, key)?.is_empty() {
                    render_segments(body, context, out)?;
                }
            }
        }
    }
    Ok(())
}

fn lookup<'c>(context: &'c Context<'_>, key: &str) -> Result<&'c str, TemplateError> {
    context
        .get(key)
        .map(String::as_str)
        .ok_or_else(|| TemplateError::MissingKey(key.to_string()))
}
