//! Tasklist - interactive command-line task list

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use tasklist::storage::DEFAULT_TASKS_FILE;
use tasklist::{Config, Console, Session, TaskStore};

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(version = "0.1.0")]
#[command(about = "Interactive task list with JSON persistence", long_about = None)]
struct Cli {
    /// File the task list is loaded from and saved to
    #[arg(short, long, env = "TASKLIST_FILE", default_value = DEFAULT_TASKS_FILE)]
    file: PathBuf,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the prompts on stdout
    let filter = if cli.verbose {
        "tasklist=debug"
    } else {
        "tasklist=warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::new()
        .with_tasks_file(cli.file)
        .with_color(!cli.no_color)
        .respect_no_color_env();
    if !config.color {
        colored::control::set_override(false);
    }

    let stdin = std::io::stdin();
    let console = Console::new(stdin.lock(), std::io::stdout()).with_color(config.color);
    let mut session = Session::new(console, TaskStore::new(&config.tasks_file));

    session.run().context("Console session ended unexpectedly")?;

    Ok(())
}
