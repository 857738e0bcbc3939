use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use frontkit::cli;
use frontkit::config;
use frontkit::git::Git2Repository;
use frontkit::ui::{self, TerminalPrompter};

#[derive(Parser)]
#[command(
    name = "frontkit",
    version,
    about = "Scaffold components, merge env files, bump versions and strip console.log calls"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(
        short,
        long,
        global = true,
        help = "Project root (defaults to the current directory)"
    )]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a <Name>.jsx and <Name>.module.scss pair
    Component,
    /// Merge .ENV_* fragments into a single .env
    MergeEnv,
    /// Bump the version, update manifests, commit, tag and push
    Bump {
        #[arg(long, help = "Preview the new version without writing anything")]
        dry_run: bool,
    },
    /// Comment out console.log calls in .js/.jsx sources
    StripLogs,
}

fn resolve_root(root: Option<&Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Cannot read current directory")?;
    Ok(match root {
        Some(root) => frontkit::paths::resolve(&cwd, root),
        None => cwd,
    })
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = resolve_root(args.root.as_deref())?;

    let config = match config::load_config(args.config.as_deref(), &root) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    match args.command {
        Command::Component => {
            let mut prompter = TerminalPrompter::stdio();
            cli::component::run(&mut prompter, &root, &config)?;
        }
        Command::MergeEnv => {
            cli::merge_env::run(&root, &config.env)?;
        }
        Command::Bump { dry_run } => {
            let repo = match Git2Repository::open(&root) {
                Ok(repo) => repo,
                Err(e) => {
                    ui::display_error(&format!("Git repository error: {}", e));
                    std::process::exit(1);
                }
            };
            let mut prompter = TerminalPrompter::stdio();
            cli::bump::run(&mut prompter, &repo, &root, &config.release, dry_run)?;
        }
        Command::StripLogs => {
            cli::strip_logs::run(&root, &config.paths)?;
        }
    }

    Ok(())
}
