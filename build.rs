/// Vantage build script.
///
/// The native shell (`platform::win32`) only exists on Windows targets; the
/// adapter core, message types, and session code are plain Rust and compile
/// anywhere. Surface the target split at build time so a non-Windows build
/// is clearly a core-only build rather than a silent misconfiguration.
fn main() {
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os != "windows" {
        println!(
            "cargo:warning=vantage: building adapter core only; \
             the native shell requires Windows (CARGO_CFG_TARGET_OS = {target_os:?})"
        );
    }

    // Only re-run the build script when it changes.
    println!("cargo:rerun-if-changed=build.rs");
}
