use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use upgrade_render::config::{self, AppConfig, ColorChoice};
use upgrade_render::logging::{Level, setup_logging};
use upgrade_render::render::{Styler, print_diff, print_upgrades, styler_for};
use upgrade_render::upgrade::filter::{AllOf, IgnoreFilter, RepositoryFilter};
use upgrade_render::upgrade::source::{JsonSource, load_sorted};

#[derive(Parser)]
#[command(name = "upgrade-render")]
#[command(
    version,
    about = "List pending package upgrades with highlighted version changes"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    list: ListArgs,

    #[command(flatten)]
    global: GlobalArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Highlight the difference between two version strings
    Diff {
        /// Installed version
        old: String,
        /// Available version
        new: String,
    },
}

#[derive(Args)]
struct ListArgs {
    /// Upgrade list in JSON; reads stdin when omitted or "-"
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Repository priority, highest first (repeatable)
    #[arg(long = "repo", value_name = "NAME")]
    repositories: Vec<String>,

    /// Only list upgrades from this repository (repeatable)
    #[arg(long = "only-repo", value_name = "NAME")]
    only_repositories: Vec<String>,

    /// Never list this package (repeatable)
    #[arg(long = "ignore", value_name = "NAME")]
    ignore: Vec<String>,
}

#[derive(Args)]
struct GlobalArgs {
    /// When to color output
    #[arg(long, value_enum, global = true)]
    color: Option<ColorChoice>,

    /// Path to the config file
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Also append logs to this file
    #[arg(long, value_name = "PATH", global = true)]
    log_file: Option<PathBuf>,

    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.global.config.clone().unwrap_or_else(config::config_path);
    let config = AppConfig::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let level = if cli.global.verbose {
        Level::Verbose
    } else {
        Level::Default
    };
    let log_file = cli.global.log_file.as_deref().or(config.log_file.as_deref());
    let _guard = setup_logging(level, log_file)?;
    debug!("Loaded config from {:?}: {:?}", config_path, config);

    let styler = styler_for(cli.global.color.unwrap_or(config.color));
    let mut stdout = io::stdout().lock();

    match cli.command {
        Some(Command::Diff { old, new }) => {
            print_diff(&mut stdout, &old, &new, styler.as_ref())?;
        }
        None => list_upgrades(cli.list, &config, styler.as_ref(), &mut stdout)?,
    }

    stdout.flush()?;
    Ok(())
}

fn list_upgrades<W: Write>(
    args: ListArgs,
    config: &AppConfig,
    styler: &dyn Styler,
    out: &mut W,
) -> anyhow::Result<()> {
    let source = match args.file {
        Some(path) if path.as_os_str() != "-" => JsonSource::from_path(path),
        _ => JsonSource::stdin(),
    };

    let filter = AllOf::new()
        .with(RepositoryFilter::new(args.only_repositories))
        .with(IgnoreFilter::new(
            config.ignore.iter().cloned().chain(args.ignore),
        ));

    let repositories = if !args.repositories.is_empty() {
        Some(args.repositories)
    } else if !config.repositories.is_empty() {
        Some(config.repositories.clone())
    } else {
        None
    };

    let list = load_sorted(&source, &filter, repositories)
        .with_context(|| format!("Failed to load upgrades from {:?}", source.input()))?;

    print_upgrades(out, &list.upgrades, styler)?;
    Ok(())
}
