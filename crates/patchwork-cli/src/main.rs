mod commands;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use commands::{EXIT_CONFIG_ERROR, EXIT_FAILURE, EXIT_MARKER_ERROR};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "patchwork",
    version,
    about = "Xcode project patching, CI status reporting, and style swatch generation"
)]
struct Cli {
    /// Configuration file. Defaults to ./patchwork.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

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
    /// Register source files in the project manifest.
    AddFiles {
        /// Path to project.pbxproj (overrides config).
        manifest: Option<PathBuf>,
        /// Print what would change without writing.
        #[arg(long, default_value_t = false)]
        dry_run: bool,
        /// Fail without writing if any insertion marker is missing.
        #[arg(long, default_value_t = false)]
        require_markers: bool,
    },
    /// Remove package dependency records from the project manifest.
    PruneDeps {
        /// Path to project.pbxproj (overrides config).
        manifest: Option<PathBuf>,
        /// Print what would change without writing.
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
    /// Report the workflow files found in the repository.
    Workflows {
        /// Workflow directory (overrides config).
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Show the most recent CI runs from the provider API.
    CiStatus {
        /// Repository as OWNER/REPO (overrides config).
        #[arg(long)]
        repo: Option<String>,
        /// API base URL (overrides config).
        #[arg(long)]
        api_base: Option<String>,
        /// Number of runs to show (overrides config).
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Render one placeholder image per configured style.
    Swatches {
        /// Output directory (overrides config).
        #[arg(long)]
        out: Option<PathBuf>,
        /// Seed for reproducible decorations (overrides config).
        #[arg(long)]
        seed: Option<u64>,
        /// Image edge length in pixels (overrides config).
        #[arg(long)]
        size: Option<u32>,
    },
    /// Write the built-in configuration to a file.
    Init {
        /// Overwrite an existing file.
        #[arg(long, default_value_t = false)]
        force: bool,
    },
    /// Generate shell completions for bash, zsh, fish, elvish, or powershell.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
    /// Generate man pages in the specified directory.
    ManPages {
        /// Output directory for man pages.
        #[arg(default_value = "man")]
        dir: PathBuf,
    },
}

fn main() -> ExitCode {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let msg = info.to_string();
        if msg.contains("Broken pipe")
            || msg.contains("broken pipe")
            || msg.contains("os error 32")
            || msg.contains("failed printing to stdout")
        {
            std::process::exit(0);
        }
        default_hook(info);
    }));

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
            tracing_subscriber::EnvFilter::try_from_env("PATCHWORK_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();
    let json_output = cli.json;

    let result = match cli.command {
        Commands::AddFiles {
            manifest,
            dry_run,
            require_markers,
        } => commands::add_files::run(
            config_path,
            manifest,
            patchwork_pbxproj::ApplyOptions {
                dry_run,
                require_markers,
            },
            json_output,
        ),
        Commands::PruneDeps { manifest, dry_run } => {
            commands::prune_deps::run(config_path, manifest, dry_run, json_output)
        }
        Commands::Workflows { dir } => commands::workflows::run(config_path, dir, json_output),
        Commands::CiStatus {
            repo,
            api_base,
            limit,
        } => commands::ci_status::run(
            config_path,
            commands::ci_status::Overrides {
                repo,
                api_base,
                limit,
            },
            json_output,
        ),
        Commands::Swatches { out, seed, size } => commands::swatches::run(
            config_path,
            commands::swatches::Overrides { out, seed, size },
            json_output,
        ),
        Commands::Init { force } => commands::init::run(config_path, force, json_output),
        Commands::Completions { shell } => commands::completions::run::<Cli>(shell),
        Commands::ManPages { dir } => commands::man_pages::run::<Cli>(&dir),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(msg) => {
            eprintln!("error: {msg}");
            let code = if msg.starts_with("config error:") {
                EXIT_CONFIG_ERROR
            } else if msg.starts_with("manifest marker missing") {
                EXIT_MARKER_ERROR
            } else {
                EXIT_FAILURE
            };
            ExitCode::from(code)
        }
    }
}
