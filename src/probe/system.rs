//! Probes backed by the real host.
//!
//! Tools are resolved by scanning PATH entries directly rather than shelling
//! out to `which`, whose behavior varies across systems. Every probe is a
//! blocking call; a tool that hangs stalls the whole doctor run.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::{ProbeOutput, ToolProbe};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// File names a tool may have on disk.
fn candidate_names(tool: &str) -> Vec<String> {
    if cfg!(windows) {
        ["", ".exe", ".cmd", ".bat"]
            .iter()
            .map(|ext| format!("{}{}", tool, ext))
            .collect()
    } else {
        vec![tool.to_string()]
    }
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let names = candidate_names(tool);
    for dir in path_entries {
        for name in &names {
            let candidate = dir.join(name);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// [`ToolProbe`] that inspects the current machine.
#[derive(Debug, Clone)]
pub struct SystemProbe {
    path: Vec<PathBuf>,
}

impl Default for SystemProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemProbe {
    /// Probe using the process PATH.
    pub fn new() -> Self {
        Self::with_path(parse_system_path())
    }

    /// Probe using an explicit list of PATH directories.
    pub fn with_path(path: Vec<PathBuf>) -> Self {
        Self { path }
    }

    /// Prepend directories (e.g. `$ANDROID_HOME/platform-tools`) to the search path.
    pub fn prepend_paths(mut self, dirs: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut path: Vec<PathBuf> = dirs
            .into_iter()
            .filter(|dir| !self.path.contains(dir))
            .collect();
        path.append(&mut self.path);
        self.path = path;
        self
    }

    /// Full path of `tool`, if found.
    pub fn resolve(&self, tool: &str) -> Option<PathBuf> {
        resolve_tool_path(tool, &self.path)
    }
}

impl ToolProbe for SystemProbe {
    fn exists(&self, tool: &str) -> bool {
        let found = self.resolve(tool);
        tracing::debug!(tool, found = ?found, "presence probe");
        found.is_some()
    }

    fn run(&self, tool: &str, args: &[&str]) -> Option<ProbeOutput> {
        let Some(binary) = self.resolve(tool) else {
            tracing::debug!(tool, "not on PATH, skipping run");
            return None;
        };

        match Command::new(&binary).args(args).output() {
            Ok(output) => {
                let exit_code = output.status.code().unwrap_or(-1);
                tracing::debug!(tool, ?args, exit_code, "probe finished");
                Some(ProbeOutput::new(
                    exit_code,
                    String::from_utf8_lossy(&output.stdout),
                ))
            }
            Err(e) => {
                tracing::warn!(tool, error = %e, "failed to spawn {}", binary.display());
                None
            }
        }
    }

    fn path_exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
