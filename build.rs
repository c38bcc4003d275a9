//! Stamps the wasm bundle and the probe with a build identity.
//!
//! Both print `v{DASHBOARD_VERSION} ({DASHBOARD_GIT_SHA})` on start, so a
//! console log or probe run can be matched to the deployed dashboard assets.
//! CI sets the variables; local builds fall back to the crate version and
//! the checkout's short SHA.

use std::env;
use std::process::Command;

const SHORT_SHA_LEN: usize = 7;

fn main() {
    for var in ["DASHBOARD_VERSION", "DASHBOARD_GIT_SHA", "GITHUB_SHA"] {
        println!("cargo:rerun-if-env-changed={var}");
    }

    let version = env::var("DASHBOARD_VERSION")
        .or_else(|_| env::var("CARGO_PKG_VERSION"))
        .unwrap_or_else(|_| "unknown".into());
    println!("cargo:rustc-env=DASHBOARD_VERSION={version}");

    let sha = env::var("DASHBOARD_GIT_SHA")
        .ok()
        .or_else(|| env::var("GITHUB_SHA").ok().map(|sha| shorten(&sha)))
        .or_else(checkout_sha)
        .unwrap_or_else(|| "unknown".into());
    println!("cargo:rustc-env=DASHBOARD_GIT_SHA={sha}");
}

fn shorten(sha: &str) -> String {
    sha.chars().take(SHORT_SHA_LEN).collect()
}

/// `git rev-parse --short HEAD`, or `None` outside a checkout.
fn checkout_sha() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let sha = String::from_utf8(output.stdout).ok()?;
    Some(sha.trim().to_string()).filter(|s| !s.is_empty())
}
