//! Shared integration-test harness: scratch workspaces and helpers for
//! running the `legalpages` binary as a child process.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Environment variables the binary reads; cleared for every spawn so the
/// caller's shell cannot leak into a test.
const ENV_VARS: &[&str] = &[
    "LEGALPAGES_CONFIG",
    "LEGALPAGES_INPUT_DIR",
    "LEGALPAGES_OUTPUT_DIR",
    "LEGALPAGES_COLOR",
    "LEGALPAGES_LOG_LEVEL",
];

/// A temporary project with `legal/` (input) and `pages/` (output) dirs.
pub struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    /// Creates an empty workspace with an input directory.
    #[allow(clippy::missing_panics_doc)]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        std::fs::create_dir_all(dir.path().join("legal")).expect("failed to create legal/");
        Self { dir }
    }

    /// Root of the workspace.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Input directory.
    pub fn input(&self) -> PathBuf {
        self.root().join("legal")
    }

    /// Output directory.
    pub fn output(&self) -> PathBuf {
        self.root().join("pages")
    }

    /// Writes a source document into the input directory.
    #[allow(clippy::missing_panics_doc)]
    pub fn source(&self, name: &str, content: &str) -> &Self {
        std::fs::write(self.input().join(name), content).expect("failed to write source");
        self
    }

    /// Writes a file relative to the workspace root and returns its path.
    #[allow(clippy::missing_panics_doc)]
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join(name);
        std::fs::write(&path, content).expect("failed to write file");
        path
    }

    /// Reads a generated page.
    #[allow(clippy::missing_panics_doc)]
    pub fn page(&self, name: &str) -> String {
        std::fs::read_to_string(self.output().join(name)).expect("failed to read page")
    }

    /// Runs `legalpages generate` against this workspace's directories.
    pub fn generate(&self, extra: &[&str]) -> Output {
        self.generate_with_env(extra, &[])
    }

    /// Like [`Workspace::generate`], with extra environment variables.
    pub fn generate_with_env(&self, extra: &[&str], envs: &[(&str, &str)]) -> Output {
        let input = self.input();
        let output = self.output();
        let mut args = vec![
            "generate",
            "--input",
            input.to_str().expect("non-UTF-8 path"),
            "--output",
            output.to_str().expect("non-UTF-8 path"),
        ];
        args.extend_from_slice(extra);
        run_with_env(self.root(), &args, envs)
    }
}

/// Runs the binary with `args` in the current directory.
pub fn run(args: &[&str]) -> Output {
    run_in(Path::new(env!("CARGO_MANIFEST_DIR")), args)
}

/// Runs the binary with `args` from `cwd`.
pub fn run_in(cwd: &Path, args: &[&str]) -> Output {
    run_with_env(cwd, args, &[])
}

/// Runs the binary from `cwd` with extra environment variables set.
#[allow(clippy::missing_panics_doc)]
pub fn run_with_env(cwd: &Path, args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_legalpages"));
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.envs(envs.iter().copied())
        .current_dir(cwd)
        .args(args)
        .output()
        .expect("failed to spawn legalpages")
}

/// Lossy stdout.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Lossy stderr.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
