//! Sets `NOCROP_VERSION` for `--version`.
//!
//! A build of a tagged commit reports the bare package version. Other builds
//! append `-dev+<short hash>`, or `-dev+unknown` outside a git checkout.

use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    let out = Command::new("git").args(args).output().ok()?;
    out.status
        .success()
        .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");

    let package = std::env::var("CARGO_PKG_VERSION").unwrap_or_default();
    let tagged = git(&["describe", "--exact-match", "--tags", "HEAD"]).is_some();
    let commit = git(&["rev-parse", "--short", "HEAD"]).filter(|h| !h.is_empty());

    let version = match commit {
        _ if tagged => package,
        Some(hash) => format!("{package}-dev+{hash}"),
        None => format!("{package}-dev+unknown"),
    };
    println!("cargo:rustc-env=NOCROP_VERSION={version}");
}
