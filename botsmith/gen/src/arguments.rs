//! Signature and call-site construction for a single helper.
//!
//! Each method field lands in exactly one place:
//!
//! | bound to receiver | required | result                                        |
//! |-------------------|----------|-----------------------------------------------|
//! | yes               | yes      | receiver expression in the delegated call     |
//! | yes               | no       | default-fill statement on the options struct  |
//! | no                | yes      | explicit signature parameter                  |
//! | no                | no       | left to the options struct                    |
//!
//! The client parameter always comes first and the options struct always
//! comes last, in both the signature and the delegated call. Parameter names
//! that clash with the receiver, the client parameter or `opts` get a
//! trailing underscore.

use botsmith_define::{ApiDescription, MethodDescription};

use crate::config::GeneratorConfig;
use crate::errors::GeneratorError;
use crate::matcher::MatchSet;
use crate::naming::{distinct_name, opts_name, param_name, snake_to_title};

/// Name of the trailing options parameter.
pub const OPTS_PARAM: &str = "opts";

/// Signature, delegated-call arguments and default-fill body of one helper.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelperArguments {
    /// Signature parameters as `name type` pairs, in order.
    pub params: Vec<String>,
    /// Arguments of the delegated primitive call, in order.
    pub call_args: Vec<String>,
    /// Statements filling unset options from the receiver.
    pub defaults: String,
}

/// Partitions the method's fields for a helper on `receiver`.
///
/// Caller-supplied option values always win: a default-fill statement only
/// assigns when the option still holds its zero value.
///
/// ## Errors
///
/// Returns [`GeneratorError::Resolution`] naming the method and field if a
/// field type cannot be resolved.
pub fn build_arguments(
    api: &ApiDescription,
    method: &MethodDescription,
    receiver: &str,
    bindings: &MatchSet,
    config: &GeneratorConfig,
) -> Result<HelperArguments, GeneratorError> {
    let mut params = vec![format!("{} *{}", config.client_param, config.client_type)];
    let mut call_args = Vec::new();
    let mut defaults = String::new();
    let taken = [receiver, config.client_param.as_str(), OPTS_PARAM];

    for field in &method.fields {
        let preferred = api.preferred_type(field).map_err(|source| {
            GeneratorError::resolution(&method.name, Some(field.name.as_str()), source)
        })?;

        match (bindings.get(&field.name), field.required) {
            (Some(binding), true) => call_args.push(binding.access_path(receiver)),
            (Some(binding), false) => {
                let option = snake_to_title(&field.name);
                let value = binding.access_path(receiver);
                let value = if preferred.is_pointer() {
                    format!("&{value}")
                } else {
                    value
                };
                defaults.push_str(&format!(
                    "\tif opts.{option} == {zero} {{\n\t\topts.{option} = {value}\n\t}}\n",
                    zero = preferred.zero_value(),
                ));
            }
            (None, true) => {
                let name = distinct_name(&param_name(&field.name), &taken);
                params.push(format!("{name} {preferred}"));
                call_args.push(name);
            }
            (None, false) => {}
        }
    }

    params.push(format!("{OPTS_PARAM} *{}", opts_name(&method.name)));
    call_args.push(OPTS_PARAM.to_string());

    Ok(HelperArguments {
        params,
        call_args,
        defaults,
    })
}
