//! Probes: the only place appdoctor touches the host.
//!
//! Validators depend on the [`ToolProbe`] trait rather than on process
//! spawning, so every check can be exercised with [`FakeProbe`].
//!
//! # Modules
//!
//! - [`system`] - PATH lookup and process execution against the real host
//! - [`fake`] - Canned probe results for tests
//! - [`version`] - Version extraction and floor comparison

pub mod fake;
pub mod system;
pub mod version;

pub use fake::FakeProbe;
pub use system::SystemProbe;
pub use version::Version;

use std::path::Path;

/// Captured output of a probe command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutput {
    /// Exit code (-1 if the process was killed by a signal).
    pub exit_code: i32,
    /// Standard output, lossily decoded.
    pub stdout: String,
}

impl ProbeOutput {
    pub fn new(exit_code: i32, stdout: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: stdout.into(),
        }
    }

    /// Whether the command exited with code 0.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Host capability checks consumed by validators.
pub trait ToolProbe {
    /// Whether an executable named `tool` is on the PATH.
    fn exists(&self, tool: &str) -> bool;

    /// Run `tool` with `args`. Returns `None` if it could not be spawned.
    fn run(&self, tool: &str, args: &[&str]) -> Option<ProbeOutput>;

    /// Whether a file or directory exists.
    fn path_exists(&self, path: &Path) -> bool;

    /// Run `tool` and return trimmed stdout only if it exited successfully.
    fn stdout_of(&self, tool: &str, args: &[&str]) -> Option<String> {
        self.run(tool, args)
            .filter(ProbeOutput::success)
            .map(|out| out.stdout.trim().to_string())
    }

    /// Run `tool` and report whether it exited successfully.
    fn succeeds(&self, tool: &str, args: &[&str]) -> bool {
        self.run(tool, args).is_some_and(|out| out.success())
    }
}

impl<P: ToolProbe + ?Sized> ToolProbe for &P {
    fn exists(&self, tool: &str) -> bool {
        (**self).exists(tool)
    }

    fn run(&self, tool: &str, args: &[&str]) -> Option<ProbeOutput> {
        (**self).run(tool, args)
    }

    fn path_exists(&self, path: &Path) -> bool {
        (**self).path_exists(path)
    }
}
