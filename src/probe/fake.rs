//! Canned probe results for tests.
//!
//! `FakeProbe` implements [`ToolProbe`] from a fixed table of tools, command
//! outputs and paths, and records every command it was asked to run.
//!
//! # Example
//!
//! ```
//! use appdoctor::probe::{FakeProbe, ToolProbe};
//!
//! let probe = FakeProbe::new()
//!     .with_tool("pod")
//!     .with_output("pod", &["--version"], 0, "1.15.2\n");
//!
//! assert!(probe.exists("pod"));
//! assert_eq!(probe.stdout_of("pod", &["--version"]).as_deref(), Some("1.15.2"));
//! assert!(probe.was_run("pod", &["--version"]));
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use super::{ProbeOutput, ToolProbe};

/// In-memory [`ToolProbe`].
#[derive(Debug, Default)]
pub struct FakeProbe {
    tools: HashSet<String>,
    outputs: HashMap<String, ProbeOutput>,
    paths: HashSet<PathBuf>,
    runs: RefCell<Vec<String>>,
}

fn command_key(tool: &str, args: &[&str]) -> String {
    if args.is_empty() {
        tool.to_string()
    } else {
        format!("{} {}", tool, args.join(" "))
    }
}

impl FakeProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `tool` on the fake PATH.
    pub fn with_tool(mut self, tool: &str) -> Self {
        self.tools.insert(tool.to_string());
        self
    }

    /// Canned output for `tool args...`. Commands without canned output
    /// behave as if they could not be spawned.
    pub fn with_output(mut self, tool: &str, args: &[&str], exit_code: i32, stdout: &str) -> Self {
        self.outputs
            .insert(command_key(tool, args), ProbeOutput::new(exit_code, stdout));
        self
    }

    /// Make `path` exist.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.insert(path.into());
        self
    }

    /// Every command run so far, formatted as `tool arg1 arg2`.
    pub fn runs(&self) -> Vec<String> {
        self.runs.borrow().clone()
    }

    /// Whether `tool args...` was run.
    pub fn was_run(&self, tool: &str, args: &[&str]) -> bool {
        let key = command_key(tool, args);
        self.runs.borrow().iter().any(|r| *r == key)
    }

    /// Whether any command of `tool` was run.
    pub fn ran_tool(&self, tool: &str) -> bool {
        self.runs
            .borrow()
            .iter()
            .any(|r| r == tool || r.starts_with(&format!("{} ", tool)))
    }
}

impl ToolProbe for FakeProbe {
    fn exists(&self, tool: &str) -> bool {
        self.tools.contains(tool)
    }

    fn run(&self, tool: &str, args: &[&str]) -> Option<ProbeOutput> {
        let key = command_key(tool, args);
        let output = self.outputs.get(&key).cloned();
        self.runs.borrow_mut().push(key);
        output
    }

    fn path_exists(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }
}
