use std::fs;
use std::path::{Path, PathBuf};

use express_scaffold::config::{GenerationConfig, ModuleFormat, StylesheetEngine, ViewEngine};
use express_scaffold::error::{Error, Result};
use express_scaffold::executor::{create_dir_all, generate, is_empty_directory, write_file};
use express_scaffold::prompt::Prompter;
use express_scaffold::renderer::MiniJinjaRenderer;
use tempfile::TempDir;
use walkdir::WalkDir;

struct Answer(bool);

impl Prompter for Answer {
    fn confirm(&self, _message: &str) -> Result<bool> {
        Ok(self.0)
    }
}

/// Fails the test if a confirmation is requested.
struct NoPrompt;

impl Prompter for NoPrompt {
    fn confirm(&self, message: &str) -> Result<bool> {
        panic!("unexpected prompt: {message}");
    }
}

fn config(target: &Path) -> GenerationConfig {
    GenerationConfig {
        target: target.to_path_buf(),
        app_name: "demo".to_string(),
        css: StylesheetEngine::Css,
        view: Some(ViewEngine::Ejs),
        module_format: ModuleFormat::CommonJs,
        git: false,
        force: false,
    }
}

fn files_under(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().strip_prefix(root).unwrap().to_path_buf())
        .collect();
    files.sort();
    files
}

fn generate_into(config: &GenerationConfig) -> (Vec<PathBuf>, String) {
    let mut out = Vec::new();
    generate(config, &NoPrompt, &MiniJinjaRenderer::new(), &mut out).unwrap();
    (files_under(&config.target), String::from_utf8(out).unwrap())
}

#[test_log::test]
fn test_default_project_files() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("demo");
    let (files, log) = generate_into(&config(&target));

    let expected: Vec<PathBuf> = [
        ".env",
        ".prettierrc.json",
        "README.md",
        "app.js",
        "bin/www",
        "config/routes.js",
        "middlewares/errorHandler.js",
        "middlewares/notFound.js",
        "package.json",
        "public/stylesheets/style.css",
        "routes/index.js",
        "routes/users.js",
        "views/error.ejs",
        "views/index.ejs",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();
    assert_eq!(files, expected);

    assert!(target.join("utils").is_dir());
    assert!(target.join("public/images").is_dir());
    let log = console::strip_ansi_codes(&log);
    assert!(log.contains(&format!("create : {}", target.join("app.js").display())));
    assert!(log.contains(&format!("create : {}/", target.join("views").display())));
}

#[test]
fn test_file_count_by_options() {
    let base = config(Path::new("unused"));
    let cases = [
        ("default", base.clone(), 14),
        ("no view", GenerationConfig { view: None, ..base.clone() }, 11),
        ("git", GenerationConfig { git: true, ..base.clone() }, 15),
        ("less", GenerationConfig { css: StylesheetEngine::Less, ..base.clone() }, 14),
        ("compass", GenerationConfig { css: StylesheetEngine::Compass, ..base.clone() }, 14),
        ("pug", GenerationConfig { view: Some(ViewEngine::Pug), ..base.clone() }, 15),
        ("dust", GenerationConfig { view: Some(ViewEngine::Dust), ..base.clone() }, 15),
        ("hjs", GenerationConfig { view: Some(ViewEngine::Hjs), ..base.clone() }, 14),
        ("vash", GenerationConfig { view: Some(ViewEngine::Vash), ..base.clone() }, 15),
        ("es6", GenerationConfig { module_format: ModuleFormat::Es6, ..base.clone() }, 14),
    ];

    for (name, case, expected) in cases {
        let temp_dir = TempDir::new().unwrap();
        let case = GenerationConfig { target: temp_dir.path().to_path_buf(), ..case };
        let (files, _) = generate_into(&case);
        assert_eq!(files.len(), expected, "{name}: {files:?}");
    }
}

#[test]
fn test_no_view_serves_static_index() {
    let temp_dir = TempDir::new().unwrap();
    let (files, _) = generate_into(&GenerationConfig { view: None, ..config(temp_dir.path()) });

    assert!(files.contains(&PathBuf::from("public/index.html")));
    assert!(!temp_dir.path().join("views").exists());
}

#[test]
fn test_generation_is_reproducible() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let options = |root: &Path| GenerationConfig {
        css: StylesheetEngine::Sass,
        view: Some(ViewEngine::Twig),
        git: true,
        ..config(root)
    };

    generate_into(&options(first.path()));
    generate_into(&options(second.path()));

    assert!(!dir_diff::is_different(first.path(), second.path()).unwrap());
}

#[test]
fn test_declined_prompt_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("existing.txt"), "keep").unwrap();

    let mut out = Vec::new();
    let result = generate(&config(temp_dir.path()), &Answer(false), &MiniJinjaRenderer::new(), &mut out);

    assert!(matches!(result, Err(Error::Declined)));
    assert!(out.is_empty());
    assert_eq!(files_under(temp_dir.path()), vec![PathBuf::from("existing.txt")]);
}

#[test]
fn test_confirmed_prompt_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("app.js"), "old").unwrap();

    let mut out = Vec::new();
    generate(&config(temp_dir.path()), &Answer(true), &MiniJinjaRenderer::new(), &mut out).unwrap();

    let app = fs::read_to_string(temp_dir.path().join("app.js")).unwrap();
    assert!(app.starts_with("const express = require('express');"));
}

#[test]
fn test_force_skips_prompt() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("notes.md"), "x").unwrap();

    let mut out = Vec::new();
    let forced = GenerationConfig { force: true, ..config(temp_dir.path()) };
    generate(&forced, &NoPrompt, &MiniJinjaRenderer::new(), &mut out).unwrap();

    assert!(temp_dir.path().join("package.json").is_file());
}

#[test]
fn test_create_dir_all_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("a/b/c");

    create_dir_all(&nested).unwrap();
    fs::write(nested.join("file"), "x").unwrap();
    create_dir_all(&nested).unwrap();

    assert!(nested.is_dir());
    assert_eq!(fs::read_to_string(nested.join("file")).unwrap(), "x");
}

#[test]
fn test_write_file_replaces_contents() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("file.txt");

    write_file(&path, b"first", 0o666).unwrap();
    write_file(&path, b"second", 0o666).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "second");
}

#[test]
fn test_write_file_into_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let result = write_file(temp_dir.path().join("missing/file.txt"), b"x", 0o666);
    assert!(matches!(result, Err(Error::IoError(_))));
}

#[cfg(unix)]
#[test]
fn test_entry_script_is_executable() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    generate_into(&config(temp_dir.path()));

    let mode = fs::metadata(temp_dir.path().join("bin/www")).unwrap().permissions().mode();
    assert_eq!(mode & 0o111, 0o111);
}

#[test]
fn test_is_empty_directory() {
    let temp_dir = TempDir::new().unwrap();

    assert!(is_empty_directory(temp_dir.path()).unwrap());
    assert!(is_empty_directory(temp_dir.path().join("absent")).unwrap());

    fs::write(temp_dir.path().join("file"), "x").unwrap();
    assert!(!is_empty_directory(temp_dir.path()).unwrap());
}
