// Shared test helpers for integration tests.
// Used by cli_test.rs and hook_script.rs.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_composer-lock-alert"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

fn split(output: Output) -> (String, String, i32) {
    let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
    let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}

/// Runs the binary from `cwd` with the given args.
/// Returns (stdout, stderr, exit_code).
pub fn run_cli(cwd: &Path, args: &[&str]) -> (String, String, i32) {
    run_cli_env(cwd, args, &[])
}

pub fn run_cli_env(cwd: &Path, args: &[&str], env: &[(&str, &str)]) -> (String, String, i32) {
    let mut cmd = Command::new(binary_path());
    cmd.args(args)
        .current_dir(cwd)
        .env_remove("COMPOSER_VENDOR_DIR")
        .env_remove("COMPOSER_LOCK_ALERT_LOG");
    for (key, value) in env {
        cmd.env(key, value);
    }
    split(cmd.output().expect("failed to execute binary"))
}

/// A project directory with an empty `.git` directory, enough for installation.
pub fn fake_project() -> TempDir {
    let tmp = TempDir::new().expect("failed to create temp dir");
    std::fs::create_dir(tmp.path().join(".git")).unwrap();
    tmp
}

// ---- Real git repositories ----

pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// `git` isolated from the user's and the system's configuration.
fn git_command(dir: &Path) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir)
        .env("GIT_CONFIG_GLOBAL", "/dev/null")
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env_remove("GIT_DIR")
        .env_remove("GIT_WORK_TREE")
        .env_remove("GIT_INDEX_FILE")
        .args([
            "-c",
            "user.name=Test",
            "-c",
            "user.email=test@example.com",
            "-c",
            "commit.gpgsign=false",
            "-c",
            "init.defaultBranch=main",
        ]);
    cmd
}

/// A throwaway git repository.
pub struct GitRepo {
    pub dir: TempDir,
}

impl GitRepo {
    pub fn init() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let repo = GitRepo { dir };
        repo.git(&["init", "-q"]);
        repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn hook_path(&self, name: &str) -> PathBuf {
        self.path().join(".git/hooks").join(name)
    }

    /// Runs git and returns (combined stdout + stderr), panicking on failure.
    pub fn git(&self, args: &[&str]) -> String {
        let output = git_command(self.path())
            .args(args)
            .output()
            .expect("failed to run git");
        let (stdout, stderr, code) = split(output);
        assert_eq!(code, 0, "git {args:?} failed: {stderr}");
        format!("{stdout}{stderr}")
    }

    /// Writes `files`, commits them and returns the new commit id.
    pub fn commit(&self, files: &[(&str, &str)], message: &str) -> String {
        for (name, content) in files {
            let path = self.path().join(name);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).unwrap();
            }
            std::fs::write(path, content).unwrap();
        }
        self.git(&["add", "-A"]);
        self.git(&["commit", "-q", "-m", message]);
        self.git(&["rev-parse", "HEAD"]).trim().to_string()
    }

    pub fn install_hooks(&self) {
        let (_, stderr, code) = run_cli(self.path(), &["install"]);
        assert_eq!(code, 0, "install failed: {stderr}");
    }

    /// Executes an installed hook the way git would, from the work tree.
    /// Returns (stdout, stderr, exit_code).
    pub fn run_hook(&self, name: &str, args: &[&str]) -> (String, String, i32) {
        let mut cmd = Command::new(self.hook_path(name));
        cmd.args(args)
            .current_dir(self.path())
            .env("GIT_CONFIG_GLOBAL", "/dev/null")
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env_remove("GIT_DIR")
            .env_remove("GIT_WORK_TREE")
            .env_remove("GIT_INDEX_FILE");
        split(cmd.output().expect("failed to execute hook"))
    }
}

pub const BANNER_TEXT: &str = "composer.lock changed, run \"composer install\"";
