//! Common constants used throughout the generator.

/// Version printed by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lowest Node.js major version that can run the ES module output.
pub const MIN_ES6_VERSION: u64 = 14;

/// Application name used when the target directory yields nothing usable.
pub const DEFAULT_APP_NAME: &str = "hello-world";

/// Default destination directory.
pub const CURRENT_DIR: &str = ".";

/// Mode for directories and executable scripts.
pub const MODE_0755: u32 = 0o755;

/// Mode for regular generated files, before the umask applies.
pub const MODE_0666: u32 = 0o666;

/// Suffix that marks a template to be rendered rather than copied.
pub const TEMPLATE_SUFFIX: &str = ".j2";

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Question asked before generating into a non-empty directory.
pub const CONFIRM_MESSAGE: &str = "destination is not empty, continue? [y/N] ";

/// Answers accepted as "yes" by the confirmation prompt.
pub const TRUTHY_ANSWERS: [&str; 4] = ["y", "yes", "ok", "true"];
