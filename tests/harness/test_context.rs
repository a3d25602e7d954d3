//! Shared testing harness for `clinprompt` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Prompt rendered for the built-in lung-cancer sample patient on 2024-06-15.
pub(crate) const SAMPLE_LUNG_CANCER_PROMPT: &str = "Diagnosis: lung cancer. Patient's age: 34. \
Gender: Male. Conditions: lung cancer. Observations: increased cough. Care plans: regular \
monitoring. Imaging modality: X-Ray. Body area: Chest. Please provide a comprehensive report \
based on the patient's data and imaging results.";

/// Testing harness providing an isolated directory for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Directory the CLI runs in.
    pub(crate) fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Path of a file inside the work directory.
    pub(crate) fn path(&self, name: &str) -> PathBuf {
        self.work_dir().join(name)
    }

    /// Write `content` to `name` inside the work directory.
    pub(crate) fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write `config.yaml` pinned to a seed and reference date, followed by `extra` lines.
    pub(crate) fn write_config(&self, extra: &str) -> PathBuf {
        let content = format!("seed: 7\nreference_date: 2024-06-15\n{}", extra);
        self.write_file("config.yaml", &content)
    }

    /// Build a command for invoking the compiled `clinprompt` binary.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("clinprompt").expect("Failed to locate clinprompt binary");
        cmd.current_dir(self.work_dir()).env_remove("RUST_LOG");
        cmd
    }
}
