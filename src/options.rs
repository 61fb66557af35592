//! Option normalization.
//! Turns raw command-line arguments into canonical options: tri-state engine
//! selections, legacy view flags folded into `--view`, and the default view
//! engine applied. Warnings are returned instead of printed.

use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::cli::Args;
use crate::constants::{CURRENT_DIR, DEFAULT_APP_NAME};

/// View engine chosen when none was requested.
pub const DEFAULT_VIEW_ENGINE: &str = "ejs";

/// Legacy boolean flags and the view engine each one stands for.
///
/// `--hogan` selects `hjs`, the name of the package it installs.
pub const DEPRECATED_ALIASES: [(&str, &str); 4] =
    [("ejs", "ejs"), ("hbs", "hbs"), ("hogan", "hjs"), ("pug", "pug")];

static INVALID_NAME_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^A-Za-z0-9.-]+").expect("valid app name pattern")
});

static NAME_TRIM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-_.]+|-+$").expect("valid app name trim pattern"));

/// State of an option that may be absent, given without a value, disabled or
/// set to a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The user said nothing.
    Unset,
    /// The flag was given without a value.
    Empty,
    /// Explicitly turned off (`--no-view`).
    Disabled,
    /// An explicit value.
    Named(String),
}

impl Selection {
    fn from_flag(value: Option<String>, disabled: bool) -> Self {
        if disabled {
            return Selection::Disabled;
        }
        match value {
            None => Selection::Unset,
            Some(value) if value.is_empty() => Selection::Empty,
            Some(value) => Selection::Named(value),
        }
    }
}

/// Something the user should hear about that does not stop generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A legacy flag was folded into `--view`.
    RenamedOption { flag: &'static str, engine: &'static str },
    /// No view engine was requested and the default was applied.
    DefaultViewEngine,
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::RenamedOption { flag, engine } => {
                write!(f, "option `--{flag}' has been renamed to `--view={engine}'")
            }
            Warning::DefaultViewEngine => write!(
                f,
                "the default view engine will not be {DEFAULT_VIEW_ENGINE} in future releases\n\
                 use `--view={DEFAULT_VIEW_ENGINE}' or `--help' for additional options"
            ),
        }
    }
}

/// Canonical options, ready for validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub target: String,
    pub css: Selection,
    pub view: Selection,
    pub es6: bool,
    pub git: bool,
    pub force: bool,
    pub help: bool,
    pub version: bool,
    pub unknown: Vec<String>,
}

impl Options {
    fn legacy_flags(args: &Args) -> [bool; 4] {
        [args.ejs, args.hbs, args.hogan, args.pug]
    }
}

/// Normalizes raw arguments.
///
/// Legacy view flags only fill an unset `--view`; when several are given the
/// last one in alias order wins. An `--view` still unset afterwards becomes
/// the default engine. Empty and disabled selections pass through untouched.
pub fn normalize(args: Args) -> (Options, Vec<Warning>) {
    let mut warnings = Vec::new();
    let legacy = Options::legacy_flags(&args);
    let mut view = Selection::from_flag(args.view, args.no_view);

    if view == Selection::Unset {
        for (&(flag, engine), _) in
            DEPRECATED_ALIASES.iter().zip(legacy).filter(|(_, set)| *set)
        {
            view = Selection::Named(engine.to_string());
            warnings.push(Warning::RenamedOption { flag, engine });
        }
    }

    if view == Selection::Unset {
        view = Selection::Named(DEFAULT_VIEW_ENGINE.to_string());
        warnings.push(Warning::DefaultViewEngine);
    }

    let options = Options {
        target: args.paths.into_iter().next().unwrap_or_else(|| CURRENT_DIR.to_string()),
        css: Selection::from_flag(args.css, false),
        view,
        es6: args.es6,
        git: args.git,
        force: args.force,
        help: args.help,
        version: args.version,
        unknown: args.unknown,
    };

    (options, warnings)
}

/// Sanitizes a directory name into a package name.
///
/// Runs of characters outside `[A-Za-z0-9.-]` become one hyphen, leading
/// `-`, `_` and `.` and trailing `-` are dropped and the result is lowercased.
/// Falls back to `hello-world` when nothing is left.
pub fn sanitize_app_name(name: &str) -> String {
    let replaced = INVALID_NAME_CHARS.replace_all(name, "-");
    let trimmed = NAME_TRIM.replace_all(&replaced, "").to_lowercase();
    if trimmed.is_empty() {
        DEFAULT_APP_NAME.to_string()
    } else {
        trimmed
    }
}

/// Derives the application name from the last segment of the resolved target.
pub fn app_name<P: AsRef<Path>>(target: P, cwd: &Path) -> String {
    let resolved = resolve(cwd, target.as_ref());
    let segment = resolved
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    sanitize_app_name(&segment)
}

/// Lexically resolves `path` against `base`, folding `.` and `..`.
fn resolve(base: &Path, path: &Path) -> PathBuf {
    let mut resolved = PathBuf::new();
    for component in base.join(path).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    resolved
}
