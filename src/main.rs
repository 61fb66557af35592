//! Entry point of the `express` generator.
//! Parses options, validates them, generates the project and prints the
//! follow-up instructions.

use std::io;

use express_scaffold::{
    cli::{get_args, print_usage},
    constants::{EXIT_SUCCESS, VERSION},
    error::{default_error_handler, print_warning, Result},
    executor::generate,
    instructions::{instructions, Shell},
    logger::init_logger,
    options::normalize,
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
    runtime::NodeRuntime,
    validate::{validate, Gate},
};

/// Main application entry point.
fn main() {
    init_logger();

    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => default_error_handler(err),
    }
}

/// Main application logic.
///
/// # Flow
/// 1. Parses and normalizes the command line
/// 2. Validates options, answering `--help` and `--version` directly
/// 3. Prints normalization warnings
/// 4. Generates the project
/// 5. Prints instructions
fn run() -> Result<i32> {
    let (options, warnings) = normalize(get_args()?);
    let cwd = std::env::current_dir()?;

    let config = match validate(options, &NodeRuntime::new(), &cwd)? {
        Gate::Help => {
            print_usage();
            return Ok(EXIT_SUCCESS);
        }
        Gate::Version => {
            println!("{VERSION}");
            return Ok(EXIT_SUCCESS);
        }
        Gate::Generate(config) => config,
    };

    for warning in &warnings {
        print_warning(&warning.to_string());
    }

    let renderer = MiniJinjaRenderer::new();
    let prompter = DialoguerPrompter::new();
    generate(&config, &prompter, &renderer, io::stdout())?;

    print!("{}", instructions(&config, Shell::detect()));
    Ok(EXIT_SUCCESS)
}
