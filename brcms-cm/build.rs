//! Build identification for the brcms-cm startup log line
//!
//! Exposes `GIT_HASH`, `BUILD_TIMESTAMP` and `BUILD_PROFILE` to `env!`.

use std::process::Command;

fn main() {
    emit("GIT_HASH", git_short_hash().unwrap_or_else(|| "unknown".into()));
    emit(
        "BUILD_TIMESTAMP",
        chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
    );
    emit(
        "BUILD_PROFILE",
        std::env::var("PROFILE").unwrap_or_else(|_| "unknown".into()),
    );
}

fn emit(name: &str, value: String) {
    println!("cargo:rustc-env={}={}", name, value);
}

/// `None` outside a git checkout or without git installed
fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=8", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    Some(hash.trim().to_string())
}
