mod config;
mod list;
mod logging;
mod serve;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use hawks_core::{SortDirection, SortField};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Browse and maintain the hawk catalog.
#[derive(Parser)]
#[command(name = "hawks", version, about = "Browse and maintain the hawk catalog")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Path to a TOML config file (default: ./hawks.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the catalog pages in a browser
    Serve {
        /// Base URL of the catalog REST service
        #[arg(long)]
        gateway_url: Option<String>,
        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,
        /// Address to bind
        #[arg(long)]
        bind: Option<String>,
        /// Per-request timeout towards the catalog service, in seconds
        #[arg(long)]
        timeout_secs: Option<u64>,
    },

    /// Print the catalog as a table
    List {
        /// Only hawks whose name matches this text
        #[arg(long, default_value = "")]
        filter: String,
        /// Column to sort by (name, size or gender)
        #[arg(long, default_value = "name")]
        sort_field: SortField,
        /// Sort direction (asc or desc)
        #[arg(long, default_value = "asc")]
        sort_dir: SortDirection,
        /// Base URL of the catalog REST service
        #[arg(long)]
        gateway_url: Option<String>,
        /// Request timeout, in seconds
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            gateway_url,
            port,
            bind,
            timeout_secs,
        } => {
            let overrides = config::Overrides {
                gateway_url,
                timeout_secs,
                bind,
                port,
            };
            let settings = load_settings(cli.config.as_deref(), &overrides, cli.output, cli.quiet);
            logging::init_tracing(settings.log_json, if cli.quiet { "warn" } else { "info" });

            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    report_error(
                        &format!("failed to create tokio runtime: {}", e),
                        cli.output,
                        cli.quiet,
                    );
                    process::exit(1);
                }
            };
            if let Err(e) = rt.block_on(serve::start_server(settings)) {
                report_error(&format!("Server error: {}", e), cli.output, cli.quiet);
                process::exit(1);
            }
        }
        Commands::List {
            filter,
            sort_field,
            sort_dir,
            gateway_url,
            timeout_secs,
        } => {
            let overrides = config::Overrides {
                gateway_url,
                timeout_secs,
                ..config::Overrides::default()
            };
            let settings = load_settings(cli.config.as_deref(), &overrides, cli.output, cli.quiet);
            // Failures are printed by the command itself.
            logging::init_tracing(settings.log_json, "error");

            let params = hawks_core::QueryParams {
                filter,
                sort_field,
                sort_dir,
            };
            list::cmd_list(&settings, params, cli.output, cli.quiet);
        }
    }
}

fn load_settings(
    path: Option<&std::path::Path>,
    overrides: &config::Overrides,
    output: OutputFormat,
    quiet: bool,
) -> config::Settings {
    match config::load(path, overrides) {
        Ok(settings) => settings,
        Err(msg) => {
            report_error(&format!("config error: {}", msg), output, quiet);
            process::exit(1);
        }
    }
}

/// Print an error to stderr in the selected output format.
pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => eprintln!("{}", serde_json::json!({ "error": msg })),
    }
}
