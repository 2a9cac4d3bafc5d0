//! Self-describing client signature sent as `User-Agent`

/// Client name at the front of the signature
pub const CLIENT_NAME: &str = "scarf-rust";

/// SDK version, overridable at build time via `SCARF_SDK_VERSION`
pub const SDK_VERSION: &str = env!("SCARF_SDK_VERSION");

/// Version of the compiler that built this crate
pub const RUSTC_VERSION: &str = env!("SCARF_RUSTC_VERSION");

/// Signature for the current host, e.g.
/// `scarf-rust/0.1.0 (os=Linux; arch=x86_64; rust=1.85.0)`
pub fn user_agent() -> String {
    format_user_agent(
        SDK_VERSION,
        os_name(std::env::consts::OS),
        std::env::consts::ARCH,
        RUSTC_VERSION,
    )
}

pub fn format_user_agent(version: &str, os: &str, arch: &str, rustc: &str) -> String {
    format!("{}/{} (os={}; arch={}; rust={})", CLIENT_NAME, version, os, arch, rustc)
}

/// Map a target OS identifier to its common product name
pub fn os_name(os: &str) -> &str {
    match os {
        "macos" => "macOS",
        "ios" => "iOS",
        "linux" => "Linux",
        "windows" => "Windows",
        "freebsd" => "FreeBSD",
        "openbsd" => "OpenBSD",
        "netbsd" => "NetBSD",
        "android" => "Android",
        other => other,
    }
}
