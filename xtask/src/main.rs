use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation for seascape")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks: fmt, clippy, tests, doc
    Check,
    /// Run cargo fmt --check on all crates
    Fmt,
    /// Run clippy on all crates
    Clippy,
    /// Run all tests
    Test,
    /// Build rustdoc for the workspace
    Doc,
    /// Build the entire workspace
    Build,
    /// Run a short headless simulation through the CLI
    Smoke,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => {
            run_fmt()?;
            run_clippy()?;
            run_tests()?;
            run_doc()?;
        }
        Commands::Fmt => run_fmt()?,
        Commands::Clippy => run_clippy()?,
        Commands::Test => run_tests()?,
        Commands::Doc => run_doc()?,
        Commands::Build => run_build()?,
        Commands::Smoke => run_smoke()?,
    }

    Ok(())
}

fn cargo(args: &[&str], label: &str) -> Result<()> {
    println!("==> Running cargo {label}");
    let status = Command::new("cargo").args(args).status()?;
    if !status.success() {
        anyhow::bail!("cargo {label} failed");
    }
    Ok(())
}

fn run_fmt() -> Result<()> {
    cargo(&["fmt", "--all", "--", "--check"], "fmt --check")
}

fn run_clippy() -> Result<()> {
    cargo(
        &[
            "clippy",
            "--workspace",
            "--all-targets",
            "--",
            "-D",
            "warnings",
        ],
        "clippy",
    )
}

fn run_tests() -> Result<()> {
    cargo(&["test", "--workspace"], "test")
}

fn run_doc() -> Result<()> {
    cargo(&["doc", "--workspace", "--no-deps"], "doc")
}

fn run_build() -> Result<()> {
    cargo(&["build", "--workspace"], "build")
}

fn run_smoke() -> Result<()> {
    cargo(
        &[
            "run",
            "-p",
            "seascape-cli",
            "--",
            "simulate",
            "--frames",
            "120",
            "--actions",
            "accelerate,accelerate,accelerate,idle,brake",
        ],
        "run (seascape-cli simulate)",
    )
}
