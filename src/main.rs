use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nsskip::{AppError, GeneratorConfig};

#[derive(Parser)]
#[command(name = "nsskip")]
#[command(version)]
#[command(
    about = "Keep ReSharper .DotSettings sidecars in sync with namespace-folder layouts",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate or refresh the sidecar for each project file
    #[clap(visible_alias = "s")]
    Sync {
        /// Project files (e.g. Assembly-CSharp.csproj)
        #[arg(required = true)]
        projects: Vec<PathBuf>,
        /// TOML file overriding the default generator settings
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Rewrite sidecars even when they look up to date
        #[arg(short, long)]
        force: bool,
    },
    /// Report sidecar freshness without writing; exits 1 on stale sidecars
    #[clap(visible_alias = "c")]
    Check {
        /// Project files (e.g. Assembly-CSharp.csproj)
        #[arg(required = true)]
        projects: Vec<PathBuf>,
        /// TOML file overriding the default generator settings
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<GeneratorConfig, AppError> {
    match path {
        Some(path) => GeneratorConfig::load(path),
        None => Ok(GeneratorConfig::default()),
    }
}

fn main() {
    let cli = Cli::parse();

    let result: Result<bool, AppError> = match cli.command {
        Commands::Sync { projects, config, force } => load_config(config.as_ref())
            .and_then(|config| nsskip::sync_projects(&projects, &config, force))
            .map(|_| true),
        Commands::Check { projects, config } => load_config(config.as_ref())
            .and_then(|config| nsskip::check_projects(&projects, &config))
            .map(|report| report.all_up_to_date()),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
