// ── Native shell services ─────────────────────────────────────────────────────
//
// The production `Shell` implementation: modal error boxes, "open in default
// handler" via ShellExecuteW, and dynamic module loading.
//
// ── Module ownership model ────────────────────────────────────────────────────
//
// `NativeShell` owns every module it loads.  Modules register their codecs
// with the process on load and must stay resident while any view can reach
// them, so `FreeLibrary` happens only when the shell itself is dropped, after
// the window (and with it every view) is gone.

#![allow(unsafe_code)]

use std::path::Path;

use windows::{
    core::{w, PCWSTR},
    Win32::{
        Foundation::{HANDLE, HMODULE, HWND},
        System::LibraryLoader::{FreeLibrary, LoadLibraryExW, LOAD_WITH_ALTERED_SEARCH_PATH},
        UI::{
            Shell::ShellExecuteW,
            WindowsAndMessaging::{MessageBoxW, MB_ICONERROR, MB_OK, SW_SHOWNORMAL},
        },
    },
};

use crate::{
    error::{HostError, Result},
    platform::Shell,
};

// ── Loaded module ─────────────────────────────────────────────────────────────

/// RAII handle to one dynamically loaded module.
struct LoadedModule(HMODULE);

impl Drop for LoadedModule {
    fn drop(&mut self) {
        // SAFETY: self.0 was returned by a successful LoadLibraryExW and has
        // not been freed since.  NativeShell outlives the window, so no view
        // code can still be executing inside the module.
        unsafe {
            let _ = FreeLibrary(self.0);
        }
    }
}

// ── NativeShell ───────────────────────────────────────────────────────────────

/// Win32 implementation of the [`Shell`] seam.
pub(crate) struct NativeShell {
    /// Owner window for modal dialogs.
    owner: HWND,
    /// Modules loaded via `import`, freed on drop in reverse load order.
    modules: Vec<LoadedModule>,
}

impl NativeShell {
    pub(crate) fn new(owner: HWND) -> Self {
        Self {
            owner,
            modules: Vec::new(),
        }
    }
}

impl Shell for NativeShell {
    fn error_box(&mut self, message: &str) {
        let msg_wide: Vec<u16> = message.encode_utf16().chain(std::iter::once(0)).collect();

        // SAFETY: msg_wide is a valid null-terminated UTF-16 string that
        // remains allocated for the duration of the MessageBoxW call; owner
        // is the main window handle, valid for the shell's lifetime.
        // Return value (button pressed) is intentionally unused.
        unsafe {
            let _ = MessageBoxW(
                self.owner,
                PCWSTR(msg_wide.as_ptr()),
                w!("Vantage"),
                MB_OK | MB_ICONERROR,
            );
        }
    }

    fn open_external(&mut self, url: &str) -> Result<()> {
        let url_wide: Vec<u16> = url.encode_utf16().chain(std::iter::once(0)).collect();

        // SAFETY: url_wide is a valid null-terminated UTF-16 string that
        // outlives the call; the "open" verb hands the URL to the registered
        // default handler.  Called on the UI thread.
        let h = unsafe {
            ShellExecuteW(
                self.owner,
                w!("open"),
                PCWSTR(url_wide.as_ptr()),
                PCWSTR::null(),
                PCWSTR::null(),
                SW_SHOWNORMAL,
            )
        };

        // ShellExecuteW reports success as a value greater than 32.
        let code = h.0 as usize;
        if code <= 32 {
            return Err(HostError::Win32 {
                function: "ShellExecuteW",
                code: code as u32,
            });
        }
        Ok(())
    }

    fn load_module(&mut self, path: &Path) -> Result<()> {
        let path_wide: Vec<u16> = path
            .as_os_str()
            .to_string_lossy()
            .encode_utf16()
            .chain(std::iter::once(0))
            .collect();

        // SAFETY: path_wide is a valid null-terminated UTF-16 string.
        // LOAD_WITH_ALTERED_SEARCH_PATH with a full path resolves the
        // module's own dependencies next to the module, not next to the exe.
        let module = unsafe {
            LoadLibraryExW(
                PCWSTR(path_wide.as_ptr()),
                HANDLE::default(),
                LOAD_WITH_ALTERED_SEARCH_PATH,
            )
        }
        .map_err(|_| HostError::ModuleLoad {
            path: path.display().to_string(),
        })?;

        self.modules.push(LoadedModule(module));
        Ok(())
    }
}
