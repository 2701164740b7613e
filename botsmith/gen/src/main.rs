//! Botsmith Helper Generator
//!
//! Generates Go helper methods for the Bot API client from a JSON API
//! description.

use std::path::PathBuf;
use std::process::ExitCode;

use botsmith_define::ApiDescription;
use botsmith_gen::config::{
    DEFAULT_CLIENT_PARAM, DEFAULT_CLIENT_TYPE, DEFAULT_PACKAGE, DEFAULT_REGEN_COMMAND,
    GeneratorConfig,
};
use botsmith_gen::errors::GeneratorError;
use botsmith_gen::output::generate_and_write;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

/// Botsmith helper generator - derives receiver helpers from API methods
#[derive(Parser, Debug)]
#[command(name = "botsmith-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON API description to generate helpers from
    #[arg(short, long)]
    schema: PathBuf,

    /// Output file for generated helpers
    #[arg(short, long, default_value = "gen_helpers.go")]
    output: PathBuf,

    /// Go package name for the generated file
    #[arg(long, default_value = DEFAULT_PACKAGE)]
    package: String,

    /// Client type the helpers delegate to
    #[arg(long, default_value = DEFAULT_CLIENT_TYPE)]
    client: String,

    /// Parameter name of the client in helper signatures
    #[arg(long, default_value = DEFAULT_CLIENT_PARAM)]
    client_param: String,

    /// Command shown in the generated header for regenerating the file
    #[arg(long, default_value = DEFAULT_REGEN_COMMAND)]
    regen_command: String,

    /// Print generated helpers without writing files
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> GeneratorConfig {
        GeneratorConfig::default()
            .with_package_name(&self.package)
            .with_client_type(&self.client)
            .with_client_param(&self.client_param)
            .with_regen_command(&self.regen_command)
    }
}

/// Sets up stderr logging at a level chosen by `-v`; `RUST_LOG` directives
/// are honored on top of it.
fn init_tracing(verbose: u8) {
    let log_level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), GeneratorError> {
    info!(schema = %cli.schema.display(), "loading API description");
    let api = ApiDescription::from_path(&cli.schema)?;
    info!(
        methods = api.methods.len(),
        types = api.types.len(),
        "loaded API description"
    );

    if cli.dry_run {
        info!("dry run mode - no files will be written");
    }

    generate_and_write(&api, &cli.output, &cli.config(), cli.dry_run)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
