mod commands;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use commands::EXIT_FAILURE;
use std::path::PathBuf;
use std::process::ExitCode;
use twinc_core::{Compiler, ContainerDefaults, PullPolicy};

#[derive(Debug, Parser)]
#[command(
    name = "twinc",
    version,
    about = "Compile DTDL twin interfaces into deployable twin resource manifests"
)]
struct Cli {
    /// Output results as structured JSON.
    #[arg(long, default_value_t = false, global = true)]
    json: bool,

    /// Enable verbose (debug) logging output.
    #[arg(short, long, default_value_t = false, global = true)]
    verbose: bool,

    /// Enable trace-level logging (more detailed than --verbose).
    #[arg(long, default_value_t = false, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compile every .json interface in a directory into .yaml manifests.
    Compile {
        /// Directory containing DTDL interface documents.
        input_dir: PathBuf,
        /// Directory receiving one .yaml file per interface (created if absent).
        output_dir: PathBuf,
        /// Fail a document when its sanitized name is not RFC 1123 compliant.
        #[arg(long, default_value_t = false)]
        strict: bool,
        /// Registry namespace prefixed to container names and images.
        #[arg(long, default_value = "ktwin")]
        registry_prefix: String,
        /// Pinned image tag for derived instance containers.
        #[arg(long, default_value = "0.0.1")]
        image_tag: String,
        /// Suppress per-file status lines.
        #[arg(short, long, default_value_t = false)]
        quiet: bool,
    },
    /// Parse and normalize interfaces without writing any output.
    Check {
        /// Interface file or directory of .json interface documents.
        path: PathBuf,
        /// Fail a document when its sanitized name is not RFC 1123 compliant.
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    /// Generate shell completions for bash, zsh, fish, elvish, or powershell.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("TWINC_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .without_time()
        .init();

    let json_output = cli.json;

    let result = match cli.command {
        Commands::Compile {
            input_dir,
            output_dir,
            strict,
            registry_prefix,
            image_tag,
            quiet,
        } => {
            let compiler = Compiler::new(ContainerDefaults {
                registry_prefix,
                image_tag,
                pull_policy: PullPolicy::IfNotPresent,
                ..ContainerDefaults::default()
            });
            let compiler = compiler.with_strict_host_names(strict);
            commands::compile::run(&compiler, &input_dir, &output_dir, quiet, json_output)
        }
        Commands::Check { path, strict } => {
            let compiler = Compiler::default().with_strict_host_names(strict);
            commands::check::run(&compiler, &path, json_output)
        }
        Commands::Completions { shell } => commands::completions::run::<Cli>(shell),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(msg) => {
            eprintln!("error: {msg}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
