use std::io;

use express_scaffold::error::{format_block, Error};

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    assert_eq!(Error::UnknownOption("--foo".to_string()).to_string(), "unknown option `--foo'");
    assert_eq!(
        Error::ArgumentMissing("-c, --css <engine>").to_string(),
        "option `-c, --css <engine>' argument missing"
    );
    assert_eq!(
        Error::InvalidEngine { kind: "view", name: "jade".to_string() }.to_string(),
        "invalid view engine `jade'"
    );
    assert_eq!(Error::Declined.to_string(), "aborting");
}

#[test]
fn test_usage_errors() {
    assert!(Error::UnknownOption("-x".to_string()).is_usage_error());
    assert!(Error::UnsupportedRuntime(14).is_usage_error());
    assert!(!Error::Declined.is_usage_error());
    assert!(!Error::from(io::Error::from(io::ErrorKind::NotFound)).is_usage_error());
    assert!(!Error::TemplateError("missing".to_string()).is_usage_error());
}

#[test]
fn test_format_block() {
    assert_eq!(format_block("error", "boom"), "\n  error: boom\n\n");
    assert_eq!(
        format_block("warning", "first\nsecond"),
        "\n  warning: first\n  warning: second\n\n"
    );
}
