use assert_cmd::Command;
use predicates::prelude::*;

fn twig() -> Command {
    let mut cmd = Command::cargo_bin("twig").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("TWIG_DEPTH");
    cmd
}

#[test]
fn shows_help() {
    twig()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("directory tree"))
        .stdout(predicate::str::contains("--dirs-only"))
        .stdout(predicate::str::contains("--exclude"));
}

#[test]
fn shows_version() {
    twig()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn rejects_unknown_flag() {
    twig()
        .arg("--bogus")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn json_requires_count() {
    twig().arg("--json").assert().failure().code(2);
}

#[test]
fn invalid_target_exits_one() {
    let dir = tempfile::TempDir::new().unwrap();
    twig()
        .arg(dir.path().join("nope"))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No such file or directory"));
}

#[test]
fn no_color_flag_overrides_always() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("docs")).unwrap();
    twig()
        .args(["--color", "always", "--no-color"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("└── docs/"))
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn sort_key_keeps_name_order() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("b.txt"), "bbbbbbbb").unwrap();
    std::fs::write(dir.path().join("a.txt"), "a").unwrap();
    twig()
        .args(["--sort", "size"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("├── a.txt\n└── b.txt"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    let dir = tempfile::TempDir::new().unwrap();
    twig()
        .arg("-v")
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("rendering tree"))
        .stdout(predicate::str::contains("rendering tree").not());
}
