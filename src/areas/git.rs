//! The external collaborator that actually moves HEAD
//!
//! Everything here shells out to the `git` executable found on `PATH`. The
//! resolver only sees the [`BranchSwitcher`] trait, so tests can substitute a
//! scripted switcher.

use crate::artifacts::core::error::{CheckoutError, Result};
use derive_new::new;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Performs branch switches on behalf of the resolver
pub trait BranchSwitcher {
    /// Make an existing branch the current one
    fn checkout(&self, name: &str) -> Result<()>;

    /// Create a branch at HEAD and make it the current one
    fn create_and_checkout(&self, name: &str) -> Result<()>;
}

/// [`BranchSwitcher`] backed by `git checkout`
#[derive(Debug, new)]
pub struct GitCli {
    /// Directory git commands are run from
    workdir: Box<Path>,
}

impl GitCli {
    /// Fail early when `git` cannot be run at all
    pub fn ensure_available(&self) -> Result<()> {
        match self.command(&["--version"]).output() {
            Ok(output) if output.status.success() => Ok(()),
            _ => Err(CheckoutError::GitNotFound),
        }
    }

    /// Absolute path of the repository's git directory
    pub fn git_dir(&self) -> Result<PathBuf> {
        let output = self
            .command(&["rev-parse", "--absolute-git-dir"])
            .output()
            .map_err(|_| CheckoutError::GitNotFound)?;

        if !output.status.success() {
            return Err(CheckoutError::NotARepository);
        }

        let git_dir = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if git_dir.is_empty() {
            return Err(CheckoutError::NotARepository);
        }

        Ok(PathBuf::from(git_dir))
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new("git");
        cmd.current_dir(&self.workdir);
        cmd.args(args);
        cmd
    }

    fn run(&self, args: &[&str]) -> Result<()> {
        tracing::debug!(?args, "running git");

        let output = self
            .command(args)
            .output()
            .map_err(|e| CheckoutError::ExternalCommandFailed(format!("failed to run git: {e}")))?;

        if output.status.success() {
            forward_output(&output);
            Ok(())
        } else {
            Err(CheckoutError::ExternalCommandFailed(failure_reason(
                args, &output,
            )))
        }
    }
}

impl BranchSwitcher for GitCli {
    fn checkout(&self, name: &str) -> Result<()> {
        self.run(&["checkout", name, "--"])
    }

    fn create_and_checkout(&self, name: &str) -> Result<()> {
        self.run(&["checkout", "-b", name])
    }
}

/// Relay git's own progress messages ("Switched to branch ...") on stderr
fn forward_output(output: &Output) {
    let mut stderr = std::io::stderr();
    // best effort, the checkout itself already succeeded
    let _ = stderr.write_all(&output.stdout);
    let _ = stderr.write_all(&output.stderr);
}

fn failure_reason(args: &[&str], output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();

    if stderr.is_empty() {
        format!("git {} exited with {}", args.join(" "), output.status)
    } else {
        stderr.to_string()
    }
}
