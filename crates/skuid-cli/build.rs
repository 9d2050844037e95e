//! Stamps the `skuid --version` string at compile time.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");

    let package = env!("CARGO_PKG_VERSION");
    let version = match git(&["describe", "--tags", "--always", "--dirty"]) {
        Some(described) => {
            let described = described.strip_prefix('v').unwrap_or(&described);
            if described == package {
                package.to_string()
            } else {
                format!("{} ({})", package, described)
            }
        }
        None => package.to_string(),
    };

    println!("cargo:rustc-env=SKUID_VERSION={}", version);
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }

    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
