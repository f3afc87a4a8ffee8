use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Git repository on branch `main` with a single empty commit
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_git_command(repository_dir.path(), &["init", "-q"])
        .assert()
        .success();
    run_git_command(
        repository_dir.path(),
        &["symbolic-ref", "HEAD", "refs/heads/main"],
    )
    .assert()
    .success();

    git_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success();

    repository_dir
}

pub fn run_gco_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("gco").expect("Failed to find gco binary");
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("GCO_HISTORY_LIMIT");
    cmd.env_remove("GCO_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn git_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_git_command(
        dir,
        &[
            "-c",
            "commit.gpgsign=false",
            "commit",
            "--allow-empty",
            "-q",
            "-m",
            message,
        ],
    );
    cmd.envs(vec![
        ("GIT_AUTHOR_NAME", "fake_user"),
        ("GIT_AUTHOR_EMAIL", "fake_email@email.com"),
        ("GIT_COMMITTER_NAME", "fake_user"),
        ("GIT_COMMITTER_EMAIL", "fake_email@email.com"),
    ]);
    cmd
}

/// Create plain branches at HEAD without checking them out
pub fn git_branches(dir: &Path, names: &[&str]) {
    for name in names {
        run_git_command(dir, &["branch", name]).assert().success();
    }
}

pub fn current_branch(dir: &Path) -> String {
    let output = run_git_command(dir, &["rev-parse", "--abbrev-ref", "HEAD"])
        .output()
        .expect("Failed to run git rev-parse");

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

pub fn list_stdout(dir: &Path) -> String {
    let output = run_gco_command(dir, &["-l"])
        .output()
        .expect("Failed to run gco -l");
    assert!(output.status.success(), "gco -l failed: {:?}", output);

    String::from_utf8_lossy(&output.stdout).to_string()
}
