use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=SCARF_SDK_VERSION");

    let version = env::var("SCARF_SDK_VERSION")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "dev".to_string()));
    println!("cargo:rustc-env=SCARF_SDK_VERSION={}", version.trim());

    // "rustc 1.85.0 (4d91de4e4 2025-02-17)" -> "1.85.0"
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let rustc_version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .and_then(|s| s.split_whitespace().nth(1).map(|v| v.to_string()))
        .unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=SCARF_RUSTC_VERSION={}", rustc_version);
}
