//! External command invocation.
//!
//! The certificate analysis drives an external inspection tool with a
//! formatted command line per field. This module defines the runner
//! collaborator contract and the production implementation built on
//! [`std::process::Command`].

use std::process::Command;

/// Runs an external command and captures its output.
///
/// Implementations must never treat a non-zero exit status as a failure:
/// callers interpret empty output as "field not found", not as an error
/// condition. Spawn failures are handled the same way -- logged and degraded
/// to empty output.
pub trait CommandRunner {
    /// Runs `command` and returns its stdout and stderr split into lines.
    fn run(&self, command: &str) -> (Vec<String>, Vec<String>);
}

/// Production runner that executes commands through `sh -c`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellCommandRunner;

impl CommandRunner for ShellCommandRunner {
    fn run(&self, command: &str) -> (Vec<String>, Vec<String>) {
        log::debug!("running command: {command}");
        match Command::new("sh").arg("-c").arg(command).output() {
            Ok(output) => {
                if !output.status.success() {
                    log::debug!("command exited with {}: {command}", output.status);
                }
                (split_lines(&output.stdout), split_lines(&output.stderr))
            }
            Err(e) => {
                log::warn!("failed to spawn command {command:?}: {e}");
                (Vec::new(), Vec::new())
            }
        }
    }
}

fn split_lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::to_string)
        .collect()
}
