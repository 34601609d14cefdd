//! Running the `asdf` binary on source files.

use std::path::PathBuf;
use std::process::{Command, Output};

use unindent::unindent;

/// Writes `source` to a temporary file named `name` and runs the interpreter
/// on it.
fn run(name: &str, source: &str, args: &[&str]) -> anyhow::Result<Output> {
    let path = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    std::fs::write(&path, source)?;
    let output = Command::new(env!("CARGO_BIN_EXE_asdf"))
        .args(args)
        .arg(&path)
        .output()?;
    Ok(output)
}

#[test]
fn prints_output() -> anyhow::Result<()> {
    let output = run("print_42.asdf", "def main():\n    print(42)\n", &[])?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "42\n");
    Ok(())
}

#[test]
fn missing_file() -> anyhow::Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_asdf"))
        .arg("does/not/exist.asdf")
        .output()?;
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("File not found: does/not/exist.asdf"), "{stderr}");
    Ok(())
}

#[test]
fn runtime_failure() -> anyhow::Result<()> {
    let output = run(
        "undefined.asdf",
        &unindent(
            "
            def main():
                print('before')
                undefinedfun(42)
            ",
        ),
        &[],
    )?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8(output.stdout)?, "before\n");
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Error during execution of line 3:"), "{stderr}");
    assert!(stderr.contains("   3 |     undefinedfun(42)"), "{stderr}");
    assert!(
        stderr.contains("call of undefined function: undefinedfun"),
        "{stderr}"
    );
    Ok(())
}

#[test]
fn rich_runtime_failure() -> anyhow::Result<()> {
    let output = run(
        "rich.asdf",
        "def main():\n    div(1, 0)\n",
        &["--rich"],
    )?;
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("error[E0007]: division by zero"), "{stderr}");
    Ok(())
}

#[test]
fn syntax_error() -> anyhow::Result<()> {
    let output = run("syntax.asdf", "def main(:\n    print(1)\n", &[])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("error[E0100]: syntax error"), "{stderr}");
    Ok(())
}

#[test]
fn piped_diagnostics_have_no_colors() -> anyhow::Result<()> {
    let path = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("colors.asdf");
    std::fs::write(&path, "def main():\n    lt(1, 'a')\n")?;
    let output = Command::new(env!("CARGO_BIN_EXE_asdf"))
        .arg("--rich")
        .arg(&path)
        .env("TERM", "xterm-256color")
        .env_remove("NO_COLOR")
        .output()?;
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(!stderr.contains('\x1b'), "{stderr:?}");
    assert!(stderr.contains("error[E0008]"), "{stderr}");
    Ok(())
}
