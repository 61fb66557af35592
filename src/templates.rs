//! Template files shipped inside the binary.
//! Files are addressed by their path below `templates/`, e.g. `js/app.js.j2`.

use std::path::Path;

use globset::Glob;
use include_dir::{include_dir, Dir};

use crate::error::{Error, Result};

static TEMPLATES: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// A template file picked by name pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// File name without its directory.
    pub name: String,
    pub contents: &'static [u8],
}

/// Raw bytes of a template file.
pub fn contents(name: &str) -> Result<&'static [u8]> {
    TEMPLATES
        .get_file(name)
        .map(|file| file.contents())
        .ok_or_else(|| Error::TemplateError(format!("template '{name}' not found")))
}

/// Template source text, for the renderer.
pub fn source(name: &str) -> Result<&'static str> {
    let file = TEMPLATES
        .get_file(name)
        .ok_or_else(|| Error::TemplateError(format!("template '{name}' not found")))?;
    file.contents_utf8()
        .ok_or_else(|| Error::TemplateError(format!("template '{name}' is not valid UTF-8")))
}

/// Files directly inside `dir` whose name matches `pattern`, sorted by name.
///
/// # Errors
/// * `Error::TemplateError` if `dir` does not exist or `pattern` is not a valid glob
pub fn matching(dir: &str, pattern: &str) -> Result<Vec<TemplateFile>> {
    let template_dir = TEMPLATES
        .get_dir(dir)
        .ok_or_else(|| Error::TemplateError(format!("template directory '{dir}' not found")))?;
    let matcher = Glob::new(pattern)
        .map_err(|e| Error::TemplateError(format!("invalid pattern '{pattern}': {e}")))?
        .compile_matcher();

    let mut files: Vec<TemplateFile> = template_dir
        .files()
        .filter_map(|file| {
            let name = file.path().file_name()?;
            if !matcher.is_match(Path::new(name)) {
                return None;
            }
            Some(TemplateFile {
                name: name.to_string_lossy().into_owned(),
                contents: file.contents(),
            })
        })
        .collect();
    files.sort_by(|a, b| a.name.cmp(&b.name));

    log::debug!("{dir}/{pattern} matched {} template(s)", files.len());
    Ok(files)
}
