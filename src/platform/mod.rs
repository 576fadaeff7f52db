// ── Platform abstraction layer ────────────────────────────────────────────────
//
// This module defines the public interface that the rest of the codebase uses
// to talk to the OS.  No `unsafe` lives here; all Win32 FFI is confined to the
// `win32` sub-module and never leaks outward.

use std::path::Path;

use crate::error::Result;

#[cfg(windows)]
pub mod win32;

// ── Shell services ────────────────────────────────────────────────────────────

/// Native capabilities the host adapter forwards to: modal error dialogs,
/// "open in default handler", and dynamic module loading.
///
/// `platform::win32::shell::NativeShell` is the production implementation;
/// tests substitute a recording fake.
pub(crate) trait Shell {
    /// Show a blocking native error dialog.  No return value; the user can
    /// only acknowledge.
    fn error_box(&mut self, message: &str);

    /// Hand `url` to the platform's default handler (browser, mail client, …).
    fn open_external(&mut self, url: &str) -> Result<()>;

    /// Load a native module into the process.  The module stays loaded for
    /// the lifetime of the shell.
    fn load_module(&mut self, path: &Path) -> Result<()>;
}
