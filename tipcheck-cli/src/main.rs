//! tipcheck CLI - validates tooltip imports in MDX documentation.
//!
//! Exit codes:
//! - `0`: every rendered tooltip is imported (unused imports are warnings only)
//! - `1`: missing or invalid imports, or the definitions module is missing
//! - `2`: internal error

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

use tipcheck_core::{
    init_structured_logging, load_config, print_json, print_plain, Tipcheck, TipcheckConfig,
    TipcheckError,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Validate tooltip imports in MDX documentation")]
pub struct Cli {
    /// Repository root to scan
    #[arg(default_value = ".")]
    path: String,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,

    /// Tooltip definitions module, relative to the root
    #[arg(long, value_name = "FILE")]
    definitions: Option<String>,

    /// Module specifier content files import tooltips from
    #[arg(long, value_name = "SPEC")]
    import_specifier: Option<String>,

    /// Content file extension to scan
    #[arg(long, value_name = "EXT")]
    extension: Option<String>,

    /// Walk the directory tree instead of asking git for tracked files
    #[arg(long)]
    no_git: bool,
}

/// Layers CLI flags over the config file over built-in defaults.
fn build_check(root: &Path, cli: &Cli, config: &TipcheckConfig) -> Tipcheck {
    let mut check = Tipcheck::new(root).with_config(config);
    if let Some(definitions) = &cli.definitions {
        check = check.definitions(definitions.clone());
    }
    if let Some(specifier) = &cli.import_specifier {
        check = check.import_specifier(specifier.clone());
    }
    if let Some(extension) = &cli.extension {
        check = check.extension(extension.clone());
    }
    if cli.no_git {
        check = check.use_git(false);
    }
    check
}

fn wants_json(cli: &Cli, config: &TipcheckConfig) -> bool {
    cli.json || config.wants_json()
}

fn main() -> Result<()> {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("[PANIC] tipcheck internal error: {}", info);
        std::process::exit(2);
    }));

    init_structured_logging();

    let cli = Cli::parse();
    let root = Path::new(&cli.path);

    let config = load_config(root)
        .with_context(|| format!("Failed to load config from: {}", cli.path))?
        .unwrap_or_default();

    let report = match build_check(root, &cli, &config).run() {
        Ok(report) => report,
        Err(e) => {
            if let Some(TipcheckError::DefinitionsNotFound { path }) =
                e.downcast_ref::<TipcheckError>()
            {
                tracing::error!(path = %path.display(), "definitions module missing");
                eprintln!("Error: Tooltips file not found at {}", path.display());
                std::process::exit(1);
            }
            return Err(e);
        }
    };

    if wants_json(&cli, &config) {
        print_json(&report);
    } else {
        print_plain(&report);
    }

    std::process::exit(report.exit_code());
}
