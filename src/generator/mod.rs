//! Directory construction and file emission.
//!
//! One pipeline per invocation: create the tree, emit every file, then
//! initialize git. The run is transactional. If anything fails after the
//! root directory exists, the whole root is removed before the error
//! propagates, so a failed run leaves nothing behind.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::git::GitClient;
use crate::names::ProjectNames;
use crate::templates::{self, Renderer};

pub const COMMIT_MESSAGE: &str = "Initial commit";

/// Scaffold a complete project under `base`, returning the root path.
///
/// The root must not already exist; re-running against an existing root
/// fails without touching its contents.
pub fn generate(base: &Path, names: &ProjectNames, git: &dyn GitClient) -> Result<PathBuf> {
    let root = base.join(&names.project);
    fs::create_dir(&root)
        .with_context(|| format!("Failed to create root directory {}", root.display()))?;

    match populate(&root, names, git) {
        Ok(()) => Ok(root),
        Err(err) => {
            // This run created the root, so take the whole tree back down.
            let _ = fs::remove_dir_all(&root);
            Err(err)
        }
    }
}

fn populate(root: &Path, names: &ProjectNames, git: &dyn GitClient) -> Result<()> {
    create_directories(root, names)?;
    println!("  ✓ Created directory tree");

    let renderer = Renderer::new()?;

    emit_sources(root, names, &renderer)?;
    println!("  ✓ Created library, app, and test sources");

    emit_build_descriptors(root, names, &renderer)?;
    println!("  ✓ Created CMake build files");

    emit_tooling_configs(root)?;
    println!("  ✓ Created clang-format and clang-tidy configs");

    emit_markdown(root, names, &renderer)?;
    println!("  ✓ Created documentation");

    emit(&root.join("LICENSE"), templates::LICENSE)?;
    println!("  ✓ Created MIT license");

    initialize_repository(root, git)?;
    println!("  ✓ Initialized git repository");

    Ok(())
}

fn create_directories(root: &Path, names: &ProjectNames) -> Result<()> {
    let subdirs = [
        names.lib.as_str(),
        names.app.as_str(),
        "CMake",
        "CMake/Modules",
        "CMake/Toolchains",
        "docs",
        "tests",
    ];

    for subdir in subdirs {
        let path = root.join(subdir);
        fs::create_dir(&path)
            .with_context(|| format!("Failed to create directory {}", path.display()))?;
    }

    Ok(())
}

fn emit_sources(root: &Path, names: &ProjectNames, renderer: &Renderer) -> Result<()> {
    let lib_dir = root.join(&names.lib);
    emit(
        &lib_dir.join(format!("{}.h", names.lib)),
        &renderer.lib_header(names)?,
    )?;
    emit(
        &lib_dir.join(format!("{}.c", names.lib)),
        &renderer.lib_source(names)?,
    )?;

    emit(&root.join("tests/test.c"), &renderer.test_source(names)?)?;

    emit(
        &root.join(&names.app).join(format!("{}.c", names.app)),
        &renderer.app_source(names)?,
    )?;

    Ok(())
}

fn emit_build_descriptors(root: &Path, names: &ProjectNames, renderer: &Renderer) -> Result<()> {
    emit(&root.join("CMakeLists.txt"), &renderer.cmake_root(names)?)?;
    emit(
        &root.join(&names.lib).join("CMakeLists.txt"),
        &renderer.cmake_lib(names)?,
    )?;
    emit(
        &root.join(&names.app).join("CMakeLists.txt"),
        &renderer.cmake_app(names)?,
    )?;
    emit(
        &root.join("tests/CMakeLists.txt"),
        &renderer.cmake_tests(names)?,
    )?;

    Ok(())
}

fn emit_tooling_configs(root: &Path) -> Result<()> {
    emit(&root.join(".clang-format"), templates::CLANG_FORMAT)?;
    emit(&root.join(".clang-tidy"), templates::CLANG_TIDY)?;
    Ok(())
}

fn emit_markdown(root: &Path, names: &ProjectNames, renderer: &Renderer) -> Result<()> {
    emit(&root.join("README.md"), &renderer.readme(names)?)?;
    emit(&root.join("CONTRIBUTING.md"), &renderer.contributing(names)?)?;
    emit(&root.join("CODE_OF_CONDUCT.md"), templates::CODE_OF_CONDUCT)?;
    emit(&root.join("CHANGELOG.md"), templates::CHANGELOG)?;
    Ok(())
}

fn initialize_repository(root: &Path, git: &dyn GitClient) -> Result<()> {
    emit(&root.join(".gitignore"), templates::GITIGNORE)?;
    git.init(root)?;
    git.add_all(root)?;
    git.commit(root, COMMIT_MESSAGE)?;
    Ok(())
}

/// Create-or-truncate `path` with exactly `content`.
fn emit(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
