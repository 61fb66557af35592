//! express-scaffold generates skeleton Express applications.
//! Command-line options are normalized and validated into a generation
//! config, planned into an ordered list of filesystem operations and written
//! from templates embedded in the binary.

/// Command-line interface module
pub mod cli;

/// Validated generation configuration and the supported engines
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling
pub mod error;

/// Plan execution against the filesystem
pub mod executor;

/// Post-generation instructions
pub mod instructions;

/// Logger setup
pub mod logger;

/// Option normalization: tri-state engines, legacy flags, defaults
pub mod options;

/// Generation plan builder
pub mod plan;

/// User confirmation
pub mod prompt;

/// Template rendering
pub mod renderer;

/// Node.js version detection
pub mod runtime;

/// Embedded template files
pub mod templates;

/// Validation gate
pub mod validate;
