//! Validation gate.
//! Rejects unusable options before anything touches the filesystem and turns
//! the rest into a `GenerationConfig`.

use std::path::{Path, PathBuf};

use crate::config::{GenerationConfig, ModuleFormat, StylesheetEngine, ViewEngine};
use crate::constants::MIN_ES6_VERSION;
use crate::error::{Error, Result};
use crate::options::{app_name, Options, Selection};
use crate::runtime::RuntimeProbe;

/// What the invocation should do once options are known to be usable.
#[derive(Debug, PartialEq, Eq)]
pub enum Gate {
    /// Print usage and exit successfully.
    Help,
    /// Print the version and exit successfully.
    Version,
    /// Generate the described project.
    Generate(GenerationConfig),
}

/// Checks options in a fixed precedence order; the first failure wins.
///
/// 1. unknown flags
/// 2. `--help`
/// 3. `--version`
/// 4. `--css` without a value
/// 5. `--view` without a value
/// 6. `--es6` on a Node.js older than the supported minimum
/// 7. engine names outside the supported sets
///
/// The runtime is only probed when `--es6` is requested. An undetectable
/// runtime does not block generation.
pub fn validate(options: Options, runtime: &dyn RuntimeProbe, cwd: &Path) -> Result<Gate> {
    if let Some(flag) = options.unknown.first() {
        return Err(Error::UnknownOption(flag.clone()));
    }
    if options.help {
        return Ok(Gate::Help);
    }
    if options.version {
        return Ok(Gate::Version);
    }
    if options.css == Selection::Empty {
        return Err(Error::ArgumentMissing("-c, --css <engine>"));
    }
    if options.view == Selection::Empty {
        return Err(Error::ArgumentMissing("-v, --view <engine>"));
    }
    if options.es6 {
        match runtime.major_version() {
            Some(major) if major < MIN_ES6_VERSION => {
                return Err(Error::UnsupportedRuntime(MIN_ES6_VERSION));
            }
            Some(major) => log::debug!("node {major} supports --es6"),
            None => log::debug!("node version unknown, assuming --es6 is supported"),
        }
    }

    let css = match &options.css {
        Selection::Named(name) => name.parse::<StylesheetEngine>()?,
        _ => StylesheetEngine::default(),
    };
    let view = match &options.view {
        Selection::Named(name) => Some(name.parse::<ViewEngine>()?),
        _ => None,
    };

    Ok(Gate::Generate(GenerationConfig {
        app_name: app_name(&options.target, cwd),
        target: PathBuf::from(options.target),
        css,
        view,
        module_format: if options.es6 { ModuleFormat::Es6 } else { ModuleFormat::CommonJs },
        git: options.git,
        force: options.force,
    }))
}
