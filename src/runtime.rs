//! Detection of the Node.js runtime the generated project will run on.

use std::process::Command;

use semver::Version;

/// Source of the host Node.js major version.
pub trait RuntimeProbe {
    /// Major version of the runtime, `None` when it cannot be determined.
    fn major_version(&self) -> Option<u64>;
}

/// Probe that asks `node --version`.
#[derive(Debug, Default)]
pub struct NodeRuntime;

impl NodeRuntime {
    pub fn new() -> Self {
        Self
    }
}

impl RuntimeProbe for NodeRuntime {
    fn major_version(&self) -> Option<u64> {
        let output = match Command::new("node").arg("--version").output() {
            Ok(out) if out.status.success() => out,
            Ok(out) => {
                log::debug!("node --version exited with {}", out.status);
                return None;
            }
            Err(e) => {
                log::debug!("node is not available: {e}");
                return None;
            }
        };
        let version = String::from_utf8_lossy(&output.stdout);
        parse_node_version(&version).map(|v| v.major)
    }
}

/// Parses `node --version` output such as `v18.19.0`.
pub fn parse_node_version(output: &str) -> Option<Version> {
    let trimmed = output.trim();
    let cleaned = trimmed.strip_prefix('v').unwrap_or(trimmed);
    match Version::parse(cleaned) {
        Ok(version) => Some(version),
        Err(e) => {
            log::debug!("unrecognised node version '{trimmed}': {e}");
            None
        }
    }
}
