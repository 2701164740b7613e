//! Artifact assembly and file writing for generated helpers.
//!
//! This module handles the final phase of generation: rendering every
//! synthesized helper through the helper template, assembling the renders
//! beneath the generated-file header, and writing the result to disk
//! atomically.
//!
//! ## Output Structure
//!
//! ```text
//! // THIS FILE IS AUTOGENERATED. DO NOT EDIT.
//! // Regen by running 'go generate' in the repo root.
//!
//! package gotgbot
//!
//! // SetTitle Helper method for Bot.SetChatTitle.
//! func (c Chat) SetTitle(b *Bot, title string, opts *SetChatTitleOpts) (bool, error) {
//!     return b.SetChatTitle(c.Id, title, opts)
//! }
//! ```
//!
//! ## Safety Guarantees
//!
//! - **All-or-nothing**: the artifact is buffered in memory and only written
//!   once every helper has synthesized and rendered
//! - **Atomic writes**: uses temp file + rename so readers never observe a
//!   partially written file

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use botsmith_define::ApiDescription;
use tracing::{info, instrument};

use crate::config::GeneratorConfig;
use crate::errors::GeneratorError;
use crate::helpers::{HelperRenderData, synthesize_helpers};
use crate::template::{Context, Template};

const HELPER_FUNC: &str = concat!(
    "\n",
    "// {{helper_name}} Helper method for {{client_type}}.{{method_name}}.\n",
    "func ({{receiver}} {{type_name}}) {{helper_name}}({{params}}) ({{return_types}}, error) {\n",
    "{{#if defaults}}",
    "\tif opts == nil {\n",
    "\t\topts = &{{opts_name}}{}\n",
    "\t}\n",
    "{{defaults}}",
    "\n",
    "{{/if}}",
    "\treturn {{client}}.{{method_name}}({{call_args}})\n",
    "}\n",
);

static HELPER_TEMPLATE: LazyLock<Template> =
    LazyLock::new(|| Template::compile(HELPER_FUNC).expect("Invalid helper template"));

/// Returns the generated-file header, ending with the package clause.
pub fn header(config: &GeneratorConfig) -> String {
    format!(
        "// THIS FILE IS AUTOGENERATED. DO NOT EDIT.\n\
         // Regen by running '{}' in the repo root.\n\
         \n\
         package {}\n",
        config.regen_command, config.package_name
    )
}

/// Renders one helper as a Go method definition.
///
/// The body allocates the options struct and fills defaults only when the
/// helper has default-fill statements; otherwise it is a single delegating
/// `return`.
///
/// ## Errors
///
/// Returns [`GeneratorError::Render`] if the template cannot be filled.
pub fn render_helper(
    helper: &HelperRenderData,
    config: &GeneratorConfig,
) -> Result<String, GeneratorError> {
    let context: Context<'_> = [
        ("helper_name", helper.helper_name().to_string()),
        ("client_type", config.client_type.clone()),
        ("method_name", helper.method_name().to_string()),
        ("receiver", helper.receiver().to_string()),
        ("type_name", helper.type_name().to_string()),
        ("params", helper.params().join(", ")),
        ("return_types", helper.return_types().join(", ")),
        ("defaults", helper.defaults().to_string()),
        ("opts_name", helper.opts_name().to_string()),
        ("client", config.client_param.clone()),
        ("call_args", helper.call_args().join(", ")),
    ]
    .into_iter()
    .collect();

    HELPER_TEMPLATE
        .render(&context)
        .map_err(|source| GeneratorError::Render {
            helper: helper.helper_name().to_string(),
            type_name: helper.type_name().to_string(),
            source,
        })
}

/// Generates the complete helpers artifact for an API description.
///
/// Helpers appear in method name order, then type name order, so the same
/// description always produces byte-identical output.
///
/// ## Errors
///
/// Returns the first resolution or render failure; no partial artifact is
/// produced.
#[instrument(skip_all, fields(methods = api.methods.len(), types = api.types.len()))]
pub fn generate_helpers(
    api: &ApiDescription,
    config: &GeneratorConfig,
) -> Result<String, GeneratorError> {
    let helpers = synthesize_helpers(api, config)?;

    let mut artifact = header(config);
    for helper in &helpers {
        artifact.push_str(&render_helper(helper, config)?);
    }

    info!(helpers = helpers.len(), bytes = artifact.len(), "generated helpers");
    Ok(artifact)
}

/// Writes content to a file atomically using temp file + rename.
///
/// Parent directories are created if needed.
///
/// ## Errors
///
/// Returns [`GeneratorError::WriteError`] if:
/// - Parent directories cannot be created
/// - The temp file cannot be written
/// - The rename operation fails
#[instrument(skip_all, fields(path = %path.display(), bytes = content.len()))]
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| GeneratorError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Generates the artifact and publishes it to `output_path`.
///
/// With `dry_run` the artifact is printed to stdout and nothing is written.
/// The artifact is returned in both cases.
pub fn generate_and_write(
    api: &ApiDescription,
    output_path: &Path,
    config: &GeneratorConfig,
    dry_run: bool,
) -> Result<String, GeneratorError> {
    let artifact = generate_helpers(api, config)?;

    if dry_run {
        print!("{artifact}");
    } else {
        write_atomic(output_path, &artifact)?;
        info!(path = %output_path.display(), "wrote helpers");
    }

    Ok(artifact)
}
