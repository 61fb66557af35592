//! Generation configuration.
//! The validated, immutable description of the project to generate, and the
//! closed sets of stylesheet and view engines it can be wired to.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::constants::CURRENT_DIR;
use crate::error::Error;

/// Stylesheet engine for `public/stylesheets`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StylesheetEngine {
    /// Plain CSS, no middleware.
    #[default]
    Css,
    Less,
    Sass,
    Stylus,
    Compass,
}

impl StylesheetEngine {
    pub const ALL: [StylesheetEngine; 5] = [
        StylesheetEngine::Css,
        StylesheetEngine::Less,
        StylesheetEngine::Sass,
        StylesheetEngine::Stylus,
        StylesheetEngine::Compass,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StylesheetEngine::Css => "css",
            StylesheetEngine::Less => "less",
            StylesheetEngine::Sass => "sass",
            StylesheetEngine::Stylus => "stylus",
            StylesheetEngine::Compass => "compass",
        }
    }

    /// File name pattern of the stylesheet templates for this engine.
    pub fn pattern(&self) -> &'static str {
        match self {
            StylesheetEngine::Css => "*.css",
            StylesheetEngine::Less => "*.less",
            StylesheetEngine::Sass => "*.sass",
            StylesheetEngine::Stylus => "*.styl",
            StylesheetEngine::Compass => "*.scss",
        }
    }
}

impl fmt::Display for StylesheetEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for StylesheetEngine {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StylesheetEngine::ALL
            .into_iter()
            .find(|engine| engine.name() == s)
            .ok_or_else(|| Error::InvalidEngine { kind: "stylesheet", name: s.to_string() })
    }
}

/// Template engine for `views`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEngine {
    Dust,
    Ejs,
    Hbs,
    Hjs,
    Pug,
    Twig,
    Vash,
}

impl ViewEngine {
    pub const ALL: [ViewEngine; 7] = [
        ViewEngine::Dust,
        ViewEngine::Ejs,
        ViewEngine::Hbs,
        ViewEngine::Hjs,
        ViewEngine::Pug,
        ViewEngine::Twig,
        ViewEngine::Vash,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ViewEngine::Dust => "dust",
            ViewEngine::Ejs => "ejs",
            ViewEngine::Hbs => "hbs",
            ViewEngine::Hjs => "hjs",
            ViewEngine::Pug => "pug",
            ViewEngine::Twig => "twig",
            ViewEngine::Vash => "vash",
        }
    }

    /// File name pattern of the view templates for this engine.
    pub fn pattern(&self) -> String {
        format!("*.{}", self.name())
    }
}

impl fmt::Display for ViewEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ViewEngine {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewEngine::ALL
            .into_iter()
            .find(|engine| engine.name() == s)
            .ok_or_else(|| Error::InvalidEngine { kind: "view", name: s.to_string() })
    }
}

/// Module system of the generated JavaScript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModuleFormat {
    #[default]
    CommonJs,
    Es6,
}

impl ModuleFormat {
    /// Template directory holding the sources for this format.
    pub fn template_dir(&self) -> &'static str {
        match self {
            ModuleFormat::CommonJs => "js",
            ModuleFormat::Es6 => "mjs",
        }
    }

    /// Value of the manifest `type` field.
    pub fn package_type(&self) -> &'static str {
        match self {
            ModuleFormat::CommonJs => "commonjs",
            ModuleFormat::Es6 => "module",
        }
    }
}

/// Everything needed to plan a generation. Built by the validation gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub target: PathBuf,
    pub app_name: String,
    pub css: StylesheetEngine,
    /// `None` when views are disabled.
    pub view: Option<ViewEngine>,
    pub module_format: ModuleFormat,
    pub git: bool,
    pub force: bool,
}

impl GenerationConfig {
    /// Whether the project is generated into the current directory.
    pub fn in_current_dir(&self) -> bool {
        self.target.as_os_str() == CURRENT_DIR
    }
}
