//! Embeds the build stamp printed by the shell's `version` command.

use std::env;
use std::process::Command;

fn main() {
    for path in ["build.rs", ".git/HEAD", ".git/refs"] {
        println!("cargo:rerun-if-changed={path}");
    }

    let built_at = chrono::Utc::now().format("%Y-%m-%d %H:%M UTC").to_string();
    let stamp = [
        ("ITEM_PICKER_GIT", git_commit()),
        ("ITEM_PICKER_BUILT_AT", built_at),
        ("ITEM_PICKER_TARGET", env::var("TARGET").unwrap_or_default()),
        ("ITEM_PICKER_RUSTC", capture("rustc", &["--version"]).unwrap_or_default()),
    ];
    for (key, value) in stamp {
        println!("cargo:rustc-env={key}={value}");
    }
}

/// Short commit hash, suffixed `-dirty` when the work tree has local changes.
fn git_commit() -> String {
    let Some(hash) = capture("git", &["rev-parse", "--short", "HEAD"]) else {
        return String::new();
    };
    match capture("git", &["status", "--porcelain"]) {
        Some(_) => format!("{hash}-dirty"),
        None => hash,
    }
}

/// Trimmed stdout of a successful command; `None` on failure or empty output.
fn capture(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
