//! Plan execution.
//! Applies a `GenerationPlan` to the filesystem in order and reports every
//! created directory and file.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use console::style;
use log::debug;

use crate::config::GenerationConfig;
use crate::constants::{CONFIRM_MESSAGE, CURRENT_DIR, MODE_0666, MODE_0755};
use crate::error::{Error, Result};
use crate::plan::{build_plan, GenerationPlan, Operation};
use crate::prompt::Prompter;
use crate::renderer::TemplateRenderer;
use crate::templates;

/// Creates `path` and any missing parents. Existing directories are fine.
pub fn create_dir_all<P: AsRef<Path>>(path: P) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(MODE_0755);
    }
    builder.create(path.as_ref()).map_err(Error::IoError)
}

/// Writes `contents` to `path`, replacing any existing file.
#[cfg_attr(not(unix), allow(unused_variables))]
pub fn write_file<P: AsRef<Path>>(path: P, contents: &[u8], mode: u32) -> Result<()> {
    let path = path.as_ref();
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    let mut file = options.open(path)?;
    file.write_all(contents)?;

    // The open mode only applies to new files.
    #[cfg(unix)]
    if mode == MODE_0755 {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(mode))?;
    }
    Ok(())
}

/// Whether `path` is missing or has no entries.
pub fn is_empty_directory<P: AsRef<Path>>(path: P) -> Result<bool> {
    match fs::read_dir(path.as_ref()) {
        Ok(mut entries) => Ok(entries.next().is_none()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(true),
        Err(e) => Err(Error::IoError(e)),
    }
}

/// Runs plan operations against a project root.
pub struct Executor<'a, W: Write> {
    renderer: &'a dyn TemplateRenderer,
    root: PathBuf,
    out: W,
}

impl<'a, W: Write> Executor<'a, W> {
    /// # Arguments
    /// * `renderer` - Renderer for `RenderAndWrite` operations
    /// * `root` - Project directory the plan's relative paths are joined to
    /// * `out` - Sink for the `create : <path>` lines
    pub fn new<P: AsRef<Path>>(renderer: &'a dyn TemplateRenderer, root: P, out: W) -> Self {
        Self { renderer, root: root.as_ref().to_path_buf(), out }
    }

    /// Maps a plan path onto the filesystem, keeping `.` out of the output.
    fn resolve(&self, relative: &Path) -> PathBuf {
        if relative == Path::new(CURRENT_DIR) {
            self.root.clone()
        } else if self.root == Path::new(CURRENT_DIR) {
            relative.to_path_buf()
        } else {
            self.root.join(relative)
        }
    }

    fn report(&mut self, path: &Path, is_dir: bool) -> Result<()> {
        let suffix = if is_dir { MAIN_SEPARATOR.to_string() } else { String::new() };
        writeln!(self.out, "   {} : {}{}", style("create").cyan(), path.display(), suffix)?;
        Ok(())
    }

    fn write(&mut self, relative: &Path, contents: &[u8], mode: u32) -> Result<PathBuf> {
        let target = self.resolve(relative);
        debug!("writing {} ({} bytes, mode {:o})", target.display(), contents.len(), mode);
        write_file(&target, contents, mode)?;
        self.report(&target, false)?;
        Ok(target)
    }

    /// Executes every operation in order, stopping at the first failure.
    ///
    /// # Returns
    /// * `Result<Vec<PathBuf>>` - Paths of the created directories and files
    pub fn execute(&mut self, plan: &GenerationPlan) -> Result<Vec<PathBuf>> {
        let context = serde_json::to_value(&plan.context)?;
        let mut created = Vec::new();

        for operation in &plan.operations {
            match operation {
                Operation::CreateDirectory(dir) => {
                    let target = self.resolve(dir);
                    debug!("creating directory {}", target.display());
                    create_dir_all(&target)?;
                    self.report(&target, true)?;
                    created.push(target);
                }
                Operation::CopyStaticFile { template, dest, mode } => {
                    let contents = templates::contents(template)?;
                    created.push(self.write(dest, contents, *mode)?);
                }
                Operation::CopyTemplateGlob { template_dir, dest_dir, pattern } => {
                    for file in templates::matching(template_dir, pattern)? {
                        let dest = dest_dir.join(&file.name);
                        created.push(self.write(&dest, file.contents, MODE_0666)?);
                    }
                }
                Operation::RenderAndWrite { template, dest, mode } => {
                    let rendered = self.renderer.render(template, &context)?;
                    created.push(self.write(dest, rendered.as_bytes(), *mode)?);
                }
                Operation::WriteManifest(dest) => {
                    let json = plan.manifest.to_json()?;
                    created.push(self.write(dest, json.as_bytes(), MODE_0666)?);
                }
            }
        }

        self.out.flush()?;
        Ok(created)
    }
}

/// Plans and writes the project described by `config`.
///
/// A non-empty target needs `force` or a confirmation from `prompter`;
/// declining returns `Error::Declined` before anything is written.
pub fn generate<W: Write>(
    config: &GenerationConfig,
    prompter: &dyn Prompter,
    renderer: &dyn TemplateRenderer,
    mut out: W,
) -> Result<Vec<PathBuf>> {
    if !config.force && !is_empty_directory(&config.target)? {
        if !prompter.confirm(CONFIRM_MESSAGE)? {
            return Err(Error::Declined);
        }
        debug!("overwrite of {} confirmed", config.target.display());
    }

    let plan = build_plan(config);
    writeln!(out)?;
    Executor::new(renderer, &config.target, out).execute(&plan)
}
