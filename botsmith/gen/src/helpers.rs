//! Helper synthesis across every (method, type) pair.
//!
//! A helper is derived for a method on a type when both hold:
//!
//! 1. The method name mentions the type name (`pinChatMessage` mentions
//!    `Chat` and `Message`), and
//! 2. The method has a field that is the type's own identifier.
//!
//! The helper name is the method name with the type name removed, further
//! collapsed by any sub-field types that also supplied bindings, then
//! exported through [`export_name`].

use botsmith_define::{ApiDescription, MethodDescription};
use tracing::{debug, trace};

use crate::arguments::{OPTS_PARAM, build_arguments};
use crate::config::GeneratorConfig;
use crate::errors::GeneratorError;
use crate::matcher::{has_from_chat, match_fields};
use crate::naming::{distinct_name, export_name};
use crate::ordering::{ordered_methods, ordered_types};

/// Everything needed to render one helper method.
///
/// Instances are built by the synthesizer and are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperRenderData {
    receiver: String,
    type_name: String,
    helper_name: String,
    return_types: Vec<String>,
    params: Vec<String>,
    defaults: String,
    opts_name: String,
    method_name: String,
    call_args: Vec<String>,
}

impl HelperRenderData {
    /// Receiver variable name (e.g. `m`).
    pub fn receiver(&self) -> &str {
        &self.receiver
    }

    /// Host type of the helper (e.g. `Message`).
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Exported helper name (e.g. `Forward`).
    pub fn helper_name(&self) -> &str {
        &self.helper_name
    }

    /// Return types of the delegated method, without the trailing error.
    pub fn return_types(&self) -> &[String] {
        &self.return_types
    }

    /// Signature parameters as `name type` pairs.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Default-fill statements, empty when no option is filled.
    pub fn defaults(&self) -> &str {
        &self.defaults
    }

    /// Options struct type of the delegated method.
    pub fn opts_name(&self) -> &str {
        &self.opts_name
    }

    /// Exported name of the delegated method (e.g. `ForwardMessage`).
    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    /// Arguments of the delegated call.
    pub fn call_args(&self) -> &[String] {
        &self.call_args
    }
}

/// Synthesizes every helper of the description, methods then types, both
/// in name order.
///
/// ## Errors
///
/// Returns the first resolution error encountered; no helpers are returned
/// in that case.
pub fn synthesize_helpers(
    api: &ApiDescription,
    config: &GeneratorConfig,
) -> Result<Vec<HelperRenderData>, GeneratorError> {
    let mut helpers = Vec::new();
    for method in ordered_methods(api) {
        helpers.extend(synthesize_method(api, method, config)?);
    }
    Ok(helpers)
}

/// Synthesizes the helpers of a single method, in type name order.
///
/// A method related to no type yields an empty list.
pub fn synthesize_method(
    api: &ApiDescription,
    method: &MethodDescription,
    config: &GeneratorConfig,
) -> Result<Vec<HelperRenderData>, GeneratorError> {
    let has_from_chat = has_from_chat(method);
    let mut helpers = Vec::new();

    for ty in ordered_types(api) {
        if ty.is_opaque() {
            continue;
        }

        let candidate = method.name.replacen(&ty.name, "", 1);
        if candidate == method.name {
            continue;
        }

        let Some(matched) = match_fields(api, method, ty, &candidate, has_from_chat)? else {
            trace!(method = %method.name, type_name = %ty.name, "no identifier field to bind");
            continue;
        };

        if matched.candidate.is_empty() {
            trace!(method = %method.name, type_name = %ty.name, "helper name collapsed to nothing");
            continue;
        }

        let helper_name = export_name(&matched.candidate);

        let return_types = api
            .return_types(method)
            .map_err(|source| GeneratorError::resolution(&method.name, None, source))?
            .iter()
            .map(ToString::to_string)
            .collect();

        let receiver = distinct_name(
            &ty.receiver_name(),
            &[config.client_param.as_str(), OPTS_PARAM],
        );
        let arguments = build_arguments(api, method, &receiver, &matched.bindings, config)?;

        debug!(
            helper = %helper_name,
            type_name = %ty.name,
            method = %method.name,
            bound = matched.bindings.len(),
            "synthesized helper"
        );

        helpers.push(HelperRenderData {
            receiver,
            type_name: ty.name.clone(),
            helper_name,
            return_types,
            params: arguments.params,
            defaults: arguments.defaults,
            opts_name: crate::naming::opts_name(&method.name),
            method_name: export_name(&method.name),
            call_args: arguments.call_args,
        });
    }

    Ok(helpers)
}
