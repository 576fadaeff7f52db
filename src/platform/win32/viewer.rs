// ── Native view surface ───────────────────────────────────────────────────────
//
// A Win32-backed `View` implementation: a static child control that shows
// the welcome prompt, the in-flight spinner text, error messages, and a
// summary of the buffer it was last handed.  The child `HWND` is destroyed
// automatically by Windows when the parent is destroyed; no explicit cleanup
// is needed.

#![allow(unsafe_code)]

use windows::{
    core::{w, PCWSTR},
    Win32::{
        Foundation::{GetLastError, HINSTANCE, HWND},
        UI::WindowsAndMessaging::{
            CreateWindowExW, SetWindowTextW, HMENU, WINDOW_EX_STYLE, WINDOW_STYLE, WS_CHILD,
            WS_VISIBLE,
        },
    },
};

use crate::{
    error::{HostError, Result},
    view::{View, ViewState},
};

// ── Display strings ───────────────────────────────────────────────────────────

const WELCOME_TEXT: &str = "Drop a file here, or use File \u{2192} Open\u{2026}";
const SPINNER_TEXT: &str = "Loading\u{2026}";

// ── NativeView ────────────────────────────────────────────────────────────────

/// The hosted presentation surface.
pub(crate) struct NativeView {
    hwnd: HWND,
}

impl NativeView {
    /// Create the view child window inside `hwnd_parent`.
    ///
    /// The control is created with zero size; `window::layout` positions it
    /// once the client rectangle is known.
    pub(crate) fn create(hwnd_parent: HWND, hinstance: HINSTANCE) -> Result<Self> {
        // SAFETY: "STATIC" is a system window class that is always registered;
        // hwnd_parent and hinstance are valid Win32 handles from window
        // creation.  WINDOW_STYLE(0x1) is SS_CENTER.
        let hwnd = unsafe {
            CreateWindowExW(
                WINDOW_EX_STYLE(0),
                w!("STATIC"),
                PCWSTR::null(),
                WS_CHILD | WS_VISIBLE | WINDOW_STYLE(0x0000_0001), // SS_CENTER
                0,
                0,
                0,
                0,
                hwnd_parent,
                HMENU::default(),
                hinstance,
                None,
            )
        };

        if hwnd == HWND::default() {
            // SAFETY: GetLastError reads thread-local state set by the just-
            // failed CreateWindowExW; no Win32 calls between them.
            let code = unsafe { GetLastError().0 };
            return Err(HostError::Win32 {
                function: "CreateWindowExW (view)",
                code,
            });
        }

        Ok(Self { hwnd })
    }

    /// The view child window handle.  Valid until the parent is destroyed.
    pub(crate) fn hwnd(&self) -> HWND {
        self.hwnd
    }

    fn set_text(&self, text: &str) {
        let wide: Vec<u16> = text.encode_utf16().chain(std::iter::once(0)).collect();
        // SAFETY: hwnd is a valid child window; wide is a null-terminated
        // UTF-16 string that outlives the call.  Failure (window already
        // destroyed during teardown) is intentionally ignored.
        unsafe {
            let _ = SetWindowTextW(self.hwnd, PCWSTR(wide.as_ptr()));
        }
    }
}

impl View for NativeView {
    fn show(&mut self, state: ViewState) {
        match state {
            ViewState::Welcome => self.set_text(WELCOME_TEXT),
            ViewState::Spinner => self.set_text(SPINNER_TEXT),
            ViewState::Clear => self.set_text(""),
        }
    }

    fn show_error(&mut self, message: &str) {
        self.set_text(message);
    }

    fn open_buffer(&mut self, data: Vec<u8>, name: &str) -> Result<()> {
        self.set_text(&format!("{name} \u{2014} {} bytes", data.len()));
        Ok(())
    }
}
