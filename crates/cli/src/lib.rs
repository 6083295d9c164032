//! Command line entry point for the Codebolt SDK documentation tools.

use cbdocs_core::{Catalog, Operation};
use clap::{CommandFactory, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Crates whose log level `CBDOCS_LOG=<level>` controls.
const LOG_TARGETS: [&str; 3] = ["cbdocs_core", "cbdocs_mcp", "cbdocs_cli"];

#[derive(Debug, Parser)]
#[command(name = "cbdocs", version, about = "Codebolt SDK documentation as MCP tools")]
struct Cli {
    /// Load the catalog from a TOML file instead of the built-in one
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Serve the documentation tools over stdio
    Mcp,
    /// List every SDK function with its signature
    List,
    /// Show one function in detail
    Show {
        /// Module containing the function
        module: String,
        /// Function name
        function: String,
    },
    /// Print SDK setup instructions
    Setup,
    /// Search modules, functions and parameters
    Search {
        /// Case-insensitive substring to look for
        query: String,
    },
}

impl Commands {
    /// The catalog operation behind a one-shot command; `None` for `mcp`.
    fn operation(&self) -> Option<Operation> {
        match self {
            Self::Mcp => None,
            Self::List => Some(Operation::ListFunctions),
            Self::Show { module, function } => Some(Operation::FunctionDetail {
                module_name: module.clone(),
                function_name: function.clone(),
            }),
            Self::Setup => Some(Operation::SetupInfo),
            Self::Search { query } => Some(Operation::Search {
                query: query.clone(),
            }),
        }
    }
}

/// Parse `args` (including the program name), run, and return the exit code.
pub fn run_cli(args: Vec<String>) -> i32 {
    init_tracing();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Failed to create tokio runtime: {err}");
            return 1;
        }
    };

    runtime.block_on(dispatch(args))
}

async fn dispatch(args: Vec<String>) -> i32 {
    match Cli::try_parse_from(args) {
        Ok(cli) => match cli.command {
            Some(command) => run_cli_async(|| run_command(cli.catalog.as_deref(), command)).await,
            None => {
                let mut cmd = Cli::command();
                let _ = cmd.print_help();
                println!();
                0
            }
        },
        Err(e) => {
            let code = e.exit_code();
            let _ = e.print();
            code
        }
    }
}

async fn run_cli_async<F, Fut>(f: F) -> i32
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), String>>,
{
    match f().await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}

async fn run_command(catalog_path: Option<&Path>, command: Commands) -> Result<(), String> {
    let catalog = load_catalog(catalog_path)?;

    match command.operation() {
        Some(operation) => {
            let response = operation.execute(&catalog);
            if response.is_error {
                return Err(response.payload);
            }
            println!("{}", response.payload);
            Ok(())
        }
        None => cbdocs_mcp::build_server(catalog)
            .run_stdio()
            .await
            .map_err(|e| format!("MCP server error: {e}")),
    }
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog, String> {
    let catalog = match path {
        Some(path) => Catalog::load(path),
        None => Catalog::builtin(),
    };
    catalog.map_err(|e| format!("Failed to load catalog: {e}"))
}

fn init_tracing() {
    // CBDOCS_LOG controls log level: "trace", "debug", "info", "warn", "error"
    // or a full tracing filter spec like "cbdocs_mcp=debug"
    let filter = match std::env::var("CBDOCS_LOG") {
        Ok(level) if is_plain_level(&level) => crate_filter(&level),
        Ok(spec) => spec,
        Err(_) => crate_filter("info"),
    };

    // stdout carries the MCP protocol, so logs go to stderr
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn crate_filter(level: &str) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}
