//! Release chores for veggie.
//!
//! ```text
//! cargo run -p xtask -- man            # target/assets/veggie.1
//! cargo run -p xtask -- completions    # target/assets/completions/*
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use veggie::Cli;

#[derive(Parser)]
#[command(name = "xtask", about = "Build helpers for veggie")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Output directory (default: target/assets)
    #[arg(long, global = true)]
    out_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Render the man page
    Man,
    /// Render shell completion scripts
    Completions,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let out_dir = args.out_dir.unwrap_or_else(default_out_dir);
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    match args.command {
        Command::Man => man(&out_dir),
        Command::Completions => completions(&out_dir),
    }
}

fn default_out_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("target")
        .join("assets")
}

fn man(out_dir: &Path) -> Result<()> {
    let cmd = Cli::command();
    let mut buf = Vec::new();
    clap_mangen::Man::new(cmd)
        .render(&mut buf)
        .context("Failed to render man page")?;

    let path = out_dir.join("veggie.1");
    fs::write(&path, buf).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn completions(out_dir: &Path) -> Result<()> {
    let dir = out_dir.join("completions");
    fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let mut cmd = Cli::command();
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
        let path = clap_complete::generate_to(shell, &mut cmd, "veggie", &dir)
            .with_context(|| format!("Failed to generate {} completions", shell))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}
