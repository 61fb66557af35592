//! Follow-up instructions printed after generation.

use crate::config::GenerationConfig;

/// Shell the user is expected to type the instructions into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    /// The Windows command shell.
    Cmd,
    /// Anything with POSIX-style variable assignment.
    Posix,
}

impl Shell {
    /// Detects the invoking shell. Shells other than cmd.exe export `_`.
    pub fn detect() -> Self {
        Self::from_env(cfg!(windows), std::env::var_os("_").is_some())
    }

    pub fn from_env(windows: bool, underscore_set: bool) -> Self {
        if windows && !underscore_set {
            Shell::Cmd
        } else {
            Shell::Posix
        }
    }

    fn prompt(&self) -> char {
        match self {
            Shell::Cmd => '>',
            Shell::Posix => '$',
        }
    }

    fn start_command(&self, app_name: &str) -> String {
        match self {
            Shell::Cmd => format!("SET DEBUG={app_name}:* & npm start"),
            Shell::Posix => format!("DEBUG={app_name}:* npm start"),
        }
    }
}

/// Renders the change-directory, install and run instructions.
pub fn instructions(config: &GenerationConfig, shell: Shell) -> String {
    let prompt = shell.prompt();
    let mut text = String::new();

    if !config.in_current_dir() {
        text.push_str("\n   change directory:\n");
        text.push_str(&format!("     {prompt} cd {}\n", config.target.display()));
    }

    text.push_str("\n   install dependencies:\n");
    text.push_str(&format!("     {prompt} npm install\n"));
    text.push_str("\n   run the app:\n");
    text.push_str(&format!("     {prompt} {}\n", shell.start_command(&config.app_name)));
    text.push('\n');
    text
}
