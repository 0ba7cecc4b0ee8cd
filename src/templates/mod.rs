//! Content generation for every file the scaffold emits.
//!
//! Parameterized files are rendered with Handlebars from templates embedded
//! at compile time; fixed files (tooling configs, license, ignore file) are
//! embedded verbatim and written as-is, so their bytes are identical across
//! invocations regardless of the supplied names.

use anyhow::{Context, Result};
use handlebars::{no_escape, Handlebars};
use serde_json::json;

use crate::names::ProjectNames;

pub const CLANG_FORMAT: &str = include_str!("../../resources/templates/clang-format");
pub const CLANG_TIDY: &str = include_str!("../../resources/templates/clang-tidy");
pub const GITIGNORE: &str = include_str!("../../resources/templates/gitignore");
pub const LICENSE: &str = include_str!("../../resources/templates/LICENSE");
pub const CODE_OF_CONDUCT: &str = include_str!("../../resources/templates/CODE_OF_CONDUCT.md");
pub const CHANGELOG: &str = include_str!("../../resources/templates/CHANGELOG.md");

const TEMPLATES: &[(&str, &str)] = &[
    ("lib.h", include_str!("../../resources/templates/lib.h.tmpl")),
    ("lib.c", include_str!("../../resources/templates/lib.c.tmpl")),
    ("test.c", include_str!("../../resources/templates/test.c.tmpl")),
    ("app.c", include_str!("../../resources/templates/app.c.tmpl")),
    (
        "cmake.root",
        include_str!("../../resources/templates/CMakeLists.root.tmpl"),
    ),
    (
        "cmake.lib",
        include_str!("../../resources/templates/CMakeLists.lib.tmpl"),
    ),
    (
        "cmake.app",
        include_str!("../../resources/templates/CMakeLists.app.tmpl"),
    ),
    (
        "cmake.tests",
        include_str!("../../resources/templates/CMakeLists.tests.tmpl"),
    ),
    (
        "readme",
        include_str!("../../resources/templates/README.md.tmpl"),
    ),
    (
        "contributing",
        include_str!("../../resources/templates/CONTRIBUTING.md.tmpl"),
    ),
];

/// Handlebars registry with every parameterized template pre-registered.
pub struct Renderer {
    handlebars: Handlebars<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        // Generated files are C sources and CMake scripts, not HTML.
        handlebars.register_escape_fn(no_escape);

        for (name, template) in TEMPLATES {
            handlebars
                .register_template_string(name, *template)
                .with_context(|| format!("Failed to register template '{name}'"))?;
        }

        Ok(Self { handlebars })
    }

    fn render(&self, name: &str, names: &ProjectNames) -> Result<String> {
        let data = json!({
            "project": names.project,
            "app": names.app,
            "lib": names.lib,
            "APP": names.app_upper(),
            "LIB": names.lib_upper(),
        });

        self.handlebars
            .render(name, &data)
            .with_context(|| format!("Failed to render template '{name}'"))
    }

    /// Library header with the `<LIB>_H_` include guard.
    pub fn lib_header(&self, names: &ProjectNames) -> Result<String> {
        self.render("lib.h", names)
    }

    pub fn lib_source(&self, names: &ProjectNames) -> Result<String> {
        self.render("lib.c", names)
    }

    /// Test translation unit exercising the library's `hello()`.
    pub fn test_source(&self, names: &ProjectNames) -> Result<String> {
        self.render("test.c", names)
    }

    pub fn app_source(&self, names: &ProjectNames) -> Result<String> {
        self.render("app.c", names)
    }

    pub fn cmake_root(&self, names: &ProjectNames) -> Result<String> {
        self.render("cmake.root", names)
    }

    pub fn cmake_lib(&self, names: &ProjectNames) -> Result<String> {
        self.render("cmake.lib", names)
    }

    pub fn cmake_app(&self, names: &ProjectNames) -> Result<String> {
        self.render("cmake.app", names)
    }

    pub fn cmake_tests(&self, names: &ProjectNames) -> Result<String> {
        self.render("cmake.tests", names)
    }

    pub fn readme(&self, names: &ProjectNames) -> Result<String> {
        self.render("readme", names)
    }

    pub fn contributing(&self, names: &ProjectNames) -> Result<String> {
        self.render("contributing", names)
    }
}
