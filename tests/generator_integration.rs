//! End-to-end tests for the scaffolding pipeline, with git replaced by fakes.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::Result;
use tempfile::TempDir;

use progen::generator;
use progen::git::GitClient;
use progen::ProjectNames;

struct NoopGit;

impl GitClient for NoopGit {
    fn init(&self, _root: &Path) -> Result<()> {
        Ok(())
    }

    fn add_all(&self, _root: &Path) -> Result<()> {
        Ok(())
    }

    fn commit(&self, _root: &Path, _message: &str) -> Result<()> {
        Ok(())
    }
}

/// Records the sequence of git operations it was asked to perform.
struct RecordingGit {
    calls: RefCell<Vec<String>>,
}

impl RecordingGit {
    fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl GitClient for RecordingGit {
    fn init(&self, _root: &Path) -> Result<()> {
        self.calls.borrow_mut().push("init".into());
        Ok(())
    }

    fn add_all(&self, _root: &Path) -> Result<()> {
        self.calls.borrow_mut().push("add".into());
        Ok(())
    }

    fn commit(&self, _root: &Path, message: &str) -> Result<()> {
        self.calls.borrow_mut().push(format!("commit:{message}"));
        Ok(())
    }
}

/// Fails at the commit step, after every file has been emitted.
struct FailingGit;

impl GitClient for FailingGit {
    fn init(&self, _root: &Path) -> Result<()> {
        Ok(())
    }

    fn add_all(&self, _root: &Path) -> Result<()> {
        Ok(())
    }

    fn commit(&self, _root: &Path, _message: &str) -> Result<()> {
        anyhow::bail!("fake commit failure")
    }
}

fn demo_names() -> ProjectNames {
    ProjectNames::new("demo".into(), "app".into(), "mylib".into()).unwrap()
}

fn collect_entries(base: &Path, dir: &Path, entries: &mut BTreeSet<String>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        let rel = path
            .strip_prefix(base)
            .unwrap()
            .to_string_lossy()
            .into_owned();
        if path.is_dir() {
            entries.insert(format!("{rel}/"));
            collect_entries(base, &path, entries);
        } else {
            entries.insert(rel);
        }
    }
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

#[test]
fn produces_exactly_the_expected_file_set() {
    let tmp = TempDir::new().unwrap();
    let root = generator::generate(tmp.path(), &demo_names(), &NoopGit).unwrap();

    let mut entries = BTreeSet::new();
    collect_entries(&root, &root, &mut entries);

    let expected: BTreeSet<String> = [
        ".clang-format",
        ".clang-tidy",
        ".gitignore",
        "CHANGELOG.md",
        "CMake/",
        "CMake/Modules/",
        "CMake/Toolchains/",
        "CMakeLists.txt",
        "CODE_OF_CONDUCT.md",
        "CONTRIBUTING.md",
        "LICENSE",
        "README.md",
        "app/",
        "app/CMakeLists.txt",
        "app/app.c",
        "docs/",
        "mylib/",
        "mylib/CMakeLists.txt",
        "mylib/mylib.c",
        "mylib/mylib.h",
        "tests/",
        "tests/CMakeLists.txt",
        "tests/test.c",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    assert_eq!(entries, expected);
}

#[test]
fn generated_content_references_the_supplied_names() {
    let tmp = TempDir::new().unwrap();
    let root = generator::generate(tmp.path(), &demo_names(), &NoopGit).unwrap();

    let header = read(&root, "mylib/mylib.h");
    assert_eq!(header.matches("MYLIB_H_").count(), 3);

    let app = read(&root, "app/app.c");
    assert!(app.contains("#include \"mylib/mylib.h\""));
    assert!(app.contains("hello();"));

    let cmake_root = read(&root, "CMakeLists.txt");
    assert!(cmake_root.contains("project(demo"));
    assert!(cmake_root.contains("add_subdirectory(mylib)"));
    assert!(cmake_root.contains("add_subdirectory(app)"));

    let cmake_lib = read(&root, "mylib/CMakeLists.txt");
    assert!(cmake_lib.contains("set(MYLIB_SRC"));
    assert!(cmake_lib.contains("add_library(mylib STATIC ${MYLIB_SRC})"));
    assert!(cmake_lib.contains("MYLIB_DEBUG"));
    assert!(cmake_lib.contains("MYLIB_RELEASE"));

    let cmake_app = read(&root, "app/CMakeLists.txt");
    assert!(cmake_app.contains("add_executable(app ${APP_SRC})"));
    assert!(cmake_app.contains("target_link_libraries(app PUBLIC mylib)"));

    let cmake_tests = read(&root, "tests/CMakeLists.txt");
    assert!(cmake_tests.contains("target_link_libraries(tests PUBLIC mylib)"));
    assert!(cmake_tests.contains("add_test(NAME RunTests COMMAND tests)"));
}

#[test]
fn fixed_content_is_input_independent() {
    let tmp = TempDir::new().unwrap();
    let first = ProjectNames::new("alpha".into(), "runner".into(), "engine".into()).unwrap();
    let second = ProjectNames::new("beta".into(), "tool".into(), "core".into()).unwrap();

    let first_root = generator::generate(tmp.path(), &first, &NoopGit).unwrap();
    let second_root = generator::generate(tmp.path(), &second, &NoopGit).unwrap();

    for fixed in [".gitignore", "LICENSE", ".clang-format", ".clang-tidy"] {
        assert_eq!(
            fs::read(first_root.join(fixed)).unwrap(),
            fs::read(second_root.join(fixed)).unwrap(),
            "{fixed} should not depend on the supplied names"
        );
    }
}

#[test]
fn git_operations_run_in_order_with_the_fixed_message() {
    let tmp = TempDir::new().unwrap();
    let git = RecordingGit::new();
    generator::generate(tmp.path(), &demo_names(), &git).unwrap();

    assert_eq!(
        *git.calls.borrow(),
        vec!["init", "add", "commit:Initial commit"]
    );
}

#[test]
fn existing_root_fails_and_leaves_it_untouched() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("demo");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("keep.txt"), "precious").unwrap();

    let err = generator::generate(tmp.path(), &demo_names(), &NoopGit).unwrap_err();
    assert!(err.to_string().contains("root directory"));

    assert_eq!(fs::read_to_string(root.join("keep.txt")).unwrap(), "precious");
    assert!(!root.join("README.md").exists());
}

#[test]
fn failure_after_emission_removes_the_root() {
    let tmp = TempDir::new().unwrap();
    let err = generator::generate(tmp.path(), &demo_names(), &FailingGit).unwrap_err();
    assert!(err.to_string().contains("fake commit failure"));

    assert!(!tmp.path().join("demo").exists());
}
