use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use progen::generator;
use progen::git::SystemGit;
use progen::ProjectNames;

pub fn execute(project: String, app: String, lib: String) -> Result<()> {
    // Validate before anything touches the disk.
    let names = ProjectNames::new(project, app, lib)?;

    println!(
        "🧱 Scaffolding project '{}' with app '{}' and library '{}'",
        names.project, names.app, names.lib
    );

    generator::generate(Path::new("."), &names, &SystemGit)?;

    println!(
        "\n✨ Project '{}' created successfully!",
        names.project.green()
    );
    println!("\nNext steps:");
    println!("  1. cd {}", names.project);
    println!("  2. cmake -S . -B build");
    println!("  3. cmake --build build");
    println!("  4. ctest --test-dir build");

    Ok(())
}
