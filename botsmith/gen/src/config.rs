//! Generator configuration.
//!
//! The defaults target the `gotgbot` client library, where every API method
//! hangs off a `*Bot` value conventionally named `b` and the generated file
//! is refreshed with `go generate`.

/// Default package clause of the generated file.
pub const DEFAULT_PACKAGE: &str = "gotgbot";

/// Default client type that exposes the primitive API methods.
pub const DEFAULT_CLIENT_TYPE: &str = "Bot";

/// Default parameter name of the client in helper signatures.
pub const DEFAULT_CLIENT_PARAM: &str = "b";

/// Default command shown in the generated header.
pub const DEFAULT_REGEN_COMMAND: &str = "go generate";

/// Settings that shape the emitted source without affecting matching.
///
/// ## Examples
///
/// ```
/// use botsmith_gen::config::GeneratorConfig;
///
/// let config = GeneratorConfig::default().with_package_name("telebot");
/// assert_eq!(config.package_name, "telebot");
/// assert_eq!(config.client_type, "Bot");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Package clause of the generated file.
    pub package_name: String,
    /// Client type whose methods the helpers delegate to.
    pub client_type: String,
    /// Name of the client parameter in helper signatures.
    pub client_param: String,
    /// Command named in the header as the way to regenerate the file.
    pub regen_command: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package_name: DEFAULT_PACKAGE.to_string(),
            client_type: DEFAULT_CLIENT_TYPE.to_string(),
            client_param: DEFAULT_CLIENT_PARAM.to_string(),
            regen_command: DEFAULT_REGEN_COMMAND.to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn with_package_name(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = package_name.into();
        self
    }

    pub fn with_client_type(mut self, client_type: impl Into<String>) -> Self {
        self.client_type = client_type.into();
        self
    }

    pub fn with_client_param(mut self, client_param: impl Into<String>) -> Self {
        self.client_param = client_param.into();
        self
    }

    pub fn with_regen_command(mut self, regen_command: impl Into<String>) -> Self {
        self.regen_command = regen_command.into();
        self
    }
}
