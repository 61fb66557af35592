//! Command-line interface implementation for the generator.
//! Provides argument parsing and help text formatting using clap.

use std::ffi::OsString;

use clap::{
    error::{ContextKind, ContextValue, ErrorKind},
    CommandFactory, Parser,
};

use crate::error::{Error, Result};

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Raw command-line arguments.
///
/// Clap's own help and version handling is disabled: `--help` and `--version`
/// are plain flags so that unknown options still take precedence over them.
/// A repeated option keeps its last occurrence.
#[derive(Parser, Debug, Default)]
#[command(
    name = "express",
    about = "Express application generator",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct Args {
    /// Destination directory (defaults to the current directory)
    #[arg(value_name = "DIR")]
    pub paths: Vec<String>,

    /// Add ejs engine support (deprecated, use --view=ejs)
    #[arg(short, long)]
    pub ejs: bool,

    /// Add pug engine support (deprecated, use --view=pug)
    #[arg(long)]
    pub pug: bool,

    /// Add handlebars engine support (deprecated, use --view=hbs)
    #[arg(long)]
    pub hbs: bool,

    /// Add hogan.js engine support (deprecated, use --view=hjs)
    #[arg(short = 'H', long)]
    pub hogan: bool,

    /// Add view <ENGINE> support (dust|ejs|hbs|hjs|pug|twig|vash) (defaults to ejs)
    #[arg(
        short,
        long,
        value_name = "ENGINE",
        num_args = 0..=1,
        default_missing_value = "",
        overrides_with = "no_view"
    )]
    pub view: Option<String>,

    /// Use static html instead of view engine
    #[arg(long = "no-view", overrides_with = "view")]
    pub no_view: bool,

    /// Add stylesheet <ENGINE> support (less|stylus|compass|sass) (defaults to plain css)
    #[arg(short, long, value_name = "ENGINE", num_args = 0..=1, default_missing_value = "")]
    pub css: Option<String>,

    /// Add .gitignore
    #[arg(long)]
    pub git: bool,

    /// Generate ES6 code and module-type project (requires Node 14.x or higher)
    #[arg(long)]
    pub es6: bool,

    /// Force on non-empty directory
    #[arg(short, long)]
    pub force: bool,

    /// Output the version number
    #[arg(long)]
    pub version: bool,

    /// Output usage information
    #[arg(short, long)]
    pub help: bool,

    /// Flags clap did not recognise, in the order they were met.
    #[arg(skip)]
    pub unknown: Vec<String>,
}

/// Parses the given command line.
///
/// An unrecognised flag does not fail the parse: it is returned in
/// `Args::unknown` so the validation step can report it with the usage text.
///
/// # Errors
/// * `Error::Usage` for any other clap failure
pub fn parse_args<I, T>(args: I) -> Result<Args>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv: Vec<OsString> = args.into_iter().map(Into::into).collect();
    match Args::try_parse_from(&argv) {
        Ok(args) => Ok(args),
        Err(e) if e.kind() == ErrorKind::UnknownArgument => {
            let token = match e.get(ContextKind::InvalidArg) {
                Some(ContextValue::String(token)) => token.clone(),
                _ => return Err(Error::Usage(clap_message(&e))),
            };
            if !token.starts_with('-') {
                return Err(Error::Usage(clap_message(&e)));
            }
            let token = as_typed(&argv, token);
            log::debug!("collected unknown option {token}");
            Ok(Args { unknown: vec![token], ..Args::default() })
        }
        Err(e) => Err(Error::Usage(clap_message(&e))),
    }
}

/// The command-line word clap reported as `flag`, including any `=value`.
fn as_typed(argv: &[OsString], flag: String) -> String {
    argv.iter()
        .skip(1)
        .filter_map(|arg| arg.to_str())
        .find(|arg| {
            arg.strip_prefix(flag.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('='))
        })
        .map(str::to_string)
        .unwrap_or(flag)
}

/// Parses the arguments of the running process.
pub fn get_args() -> Result<Args> {
    parse_args(std::env::args_os())
}

/// First line of a clap error without its `error:` prefix.
fn clap_message(e: &clap::Error) -> String {
    let rendered = e.render().to_string();
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}

/// Renders the usage text.
pub fn usage() -> String {
    Args::command()
        .help_template(HELP_TEMPLATE)
        .render_help()
        .to_string()
}

/// Prints the usage text to stdout.
pub fn print_usage() {
    println!();
    println!("{}", usage());
}
