use anyhow::Result;
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Scaffold a CMake C/C++ project with docs, tooling configs, and a git repository", long_about = None)]
struct Cli {
    /// Name of the project root directory
    project: String,

    /// Name of the application subdirectory
    app: String,

    /// Name of the library subdirectory
    lib: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::generate::execute(cli.project, cli.app, cli.lib)
}
