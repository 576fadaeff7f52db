// ── Common dialogs ─────────────────────────────────────────────────────────────
//
// Thin wrapper around the Win32 common-dialog API.  Returns `Some(path)` on
// user confirmation and `None` on cancel or error.
//
// This is inside `platform::win32` so `unsafe` is permitted per crate policy.

#![allow(unsafe_code)]

use std::path::{Path, PathBuf};

use windows::{
    core::PCWSTR,
    Win32::{
        Foundation::HWND,
        UI::Controls::Dialogs::{
            GetOpenFileNameW, OPENFILENAMEW, OFN_FILEMUSTEXIST, OFN_HIDEREADONLY,
            OFN_PATHMUSTEXIST,
        },
    },
};

// ── Buffer size ───────────────────────────────────────────────────────────────

/// Maximum path length in `WCHAR`s, including the null terminator.
/// `MAX_PATH` (260) is too short for modern Windows paths; use 32 768 which
/// is the documented maximum for `\\?\` extended paths.
const PATH_BUF_LEN: usize = 32_768;

// ── Open dialog ───────────────────────────────────────────────────────────────

/// Show the standard "Open File" dialog.
///
/// `initial_dir` pre-selects the directory the picker starts in (pass `None`
/// to let Windows choose).  Returns the chosen path, or `None` if the user
/// cancelled.
pub(crate) fn show_open_dialog(hwnd_owner: HWND, initial_dir: Option<&Path>) -> Option<PathBuf> {
    let mut buf = vec![0u16; PATH_BUF_LEN];

    // The filter string is null-separated pairs ending with a double null:
    // "Display\0*.ext\0Display2\0*.ext2\0\0"
    let filter: Vec<u16> = "All Files (*.*)\0*.*\0\0".encode_utf16().collect();

    // Must outlive the GetOpenFileNameW call below.
    let initial_wide: Option<Vec<u16>> = initial_dir.map(|d| {
        d.as_os_str()
            .to_string_lossy()
            .encode_utf16()
            .chain(std::iter::once(0))
            .collect()
    });

    let mut ofn = OPENFILENAMEW {
        lStructSize: std::mem::size_of::<OPENFILENAMEW>() as u32,
        hwndOwner: hwnd_owner,
        lpstrFilter: PCWSTR(filter.as_ptr()),
        lpstrFile: windows::core::PWSTR(buf.as_mut_ptr()),
        nMaxFile: PATH_BUF_LEN as u32,
        lpstrInitialDir: initial_wide
            .as_ref()
            .map_or(PCWSTR::null(), |w| PCWSTR(w.as_ptr())),
        Flags: OFN_FILEMUSTEXIST | OFN_PATHMUSTEXIST | OFN_HIDEREADONLY,
        ..Default::default()
    };

    // SAFETY: `ofn` is fully initialised; `buf`, `filter`, and `initial_wide`
    // outlive this call.  GetOpenFileNameW reads and writes only within the
    // buffers we provided.  The function is called on the UI thread (required
    // for modal dialogs).
    let ok = unsafe { GetOpenFileNameW(&mut ofn) };

    if ok.as_bool() {
        Some(path_from_buf(&buf))
    } else {
        None
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Convert a null-terminated UTF-16 buffer to a `PathBuf`.
fn path_from_buf(buf: &[u16]) -> PathBuf {
    let len = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    PathBuf::from(String::from_utf16_lossy(&buf[..len]).as_ref())
}
