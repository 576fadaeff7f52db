// ── Main window ───────────────────────────────────────────────────────────────
//
// Responsibilities in this file (unsafe confined here):
//   • Register the main window class and create the top-level window.
//   • Create the child controls: the hosted view surface and the
//     "Open File" button.
//   • Accept whole-window drag-and-drop (WM_DROPFILES) and forward the
//     dropped paths through the host adapter.
//   • Act as the shell controller: drain `ShellRequest`s after every
//     interaction — show the file picker, turn drop lists into `Open`
//     events, record `Update`s into the session.
//   • Run the Win32 message loop.
//   • Expose a safe error-dialog helper for use by main().

#![allow(unsafe_code)]

use std::{ffi::c_void, path::PathBuf, sync::mpsc};

use windows::{
    core::{w, PCWSTR},
    Win32::{
        Foundation::{GetLastError, HINSTANCE, HMODULE, HWND, LPARAM, LRESULT, RECT, WPARAM, BOOL},
        Graphics::Gdi::{GetStockObject, HBRUSH, WHITE_BRUSH},
        System::LibraryLoader::{GetModuleFileNameW, GetModuleHandleW},
        UI::{
            HiDpi::{
                GetDpiForWindow, SetProcessDpiAwarenessContext,
                DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2,
            },
            Shell::{DragAcceptFiles, DragFinish, DragQueryFileW, HDROP},
            WindowsAndMessaging::{
                AppendMenuW, CreateMenu, CreateWindowExW, DefWindowProcW, DestroyWindow,
                DispatchMessageW, GetClientRect, GetMessageW, GetWindowLongPtrW, LoadCursorW,
                LoadIconW, MessageBoxW, PostQuitMessage, RegisterClassExW, SetMenu,
                SetWindowLongPtrW, SetWindowPos, ShowWindow, TranslateMessage, UpdateWindow,
                CS_HREDRAW, CS_VREDRAW, CW_USEDEFAULT, GWLP_USERDATA, HMENU, IDC_ARROW,
                IDI_APPLICATION, MB_ICONERROR, MB_OK, MF_POPUP, MF_SEPARATOR, MF_STRING, MSG,
                SWP_NOZORDER, SW_SHOW, WINDOW_EX_STYLE, WINDOW_STYLE, WM_CLOSE, WM_COMMAND,
                WM_DESTROY, WM_DROPFILES, WM_NCDESTROY, WM_SIZE, WNDCLASSEXW, WS_CHILD,
                WS_OVERLAPPEDWINDOW, WS_VISIBLE,
            },
        },
    },
};

use crate::{
    error::{HostError, Result},
    host::Host,
    ipc::{ShellEvent, ShellRequest},
    platform::win32::{dialogs, shell::NativeShell, viewer::NativeView},
    session::{self, SessionFile},
};

// ── Window identity ───────────────────────────────────────────────────────────

/// Atom name used to register (and later find) the main window class.
const CLASS_NAME: PCWSTR = w!("VantageMainWindow");

/// Title bar text.
const APP_TITLE: PCWSTR = w!("Vantage");

/// Default client width in device pixels at 96 DPI.
const DEFAULT_WIDTH: i32 = 960;

/// Default client height in device pixels at 96 DPI.
const DEFAULT_HEIGHT: i32 = 640;

/// Identifier reported upstream in `update` messages.  The shell hosts a
/// single main window.
const MAIN_WINDOW_ID: u32 = 1;

/// Opened from Help → Website via the platform's default handler.
const PROJECT_URL: &str = "https://github.com/vantage-shell/vantage";

/// Shown by Help → About when the optional `about.txt` resource is absent.
const ABOUT_FALLBACK: &str = concat!(
    "Vantage 0.1.0\n\n",
    "A native viewer shell for Windows.\n\n",
    "Licensed under MIT OR Apache-2.0.",
);

// ── Menu / control command IDs ────────────────────────────────────────────────

const IDM_FILE_OPEN: usize = 1001;
const IDM_FILE_EXIT: usize = 1002;
const IDM_HELP_WEBSITE: usize = 9001;
const IDM_HELP_ABOUT: usize = 9002;

/// Control id of the "Open File" push button on the welcome surface.
const IDC_OPEN_BUTTON: usize = 2001;

// ── Window state ──────────────────────────────────────────────────────────────

/// Everything the WndProc needs, owned by the window through GWLP_USERDATA.
///
/// Allocated in `run()` after the window exists, reclaimed in WM_NCDESTROY.
struct WindowState {
    host: Host<NativeView, NativeShell>,
    /// Sending half of the event channel the host adapter listens on.
    events: mpsc::Sender<ShellEvent>,
    /// Receiving half of the request channel the host adapter sends on.
    requests: mpsc::Receiver<ShellRequest>,
    session: SessionFile,
    hwnd_view: HWND,
    hwnd_button: HWND,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Register the main window class, create the window and the host adapter,
/// and drive the message loop until the user closes the application.
pub(crate) fn run() -> Result<()> {
    // Startup benchmark harness — only compiled in debug builds so the
    // variable is never unused in release mode.
    #[cfg(debug_assertions)]
    let t0 = std::time::Instant::now();

    dpi_init();

    // SAFETY: GetModuleHandleW(None) returns the .exe's own HMODULE, which is
    // always valid for the process lifetime and never fails in practice.
    let hmodule = unsafe { GetModuleHandleW(None) }.map_err(HostError::from)?;

    // HINSTANCE and HMODULE represent the same underlying value on Windows
    // (guaranteed by the Win32 ABI).
    let hinstance = HINSTANCE(hmodule.0);

    register_class(hinstance)?;
    let hwnd = create_window(hinstance)?;
    let hwnd_button = create_open_button(hwnd, hinstance)?;
    let view = NativeView::create(hwnd, hinstance)?;
    let hwnd_view = view.hwnd();

    // Whole-window drop surface; WM_DROPFILES replaces default handling.
    // SAFETY: hwnd was just returned by CreateWindowExW and is valid.
    unsafe { DragAcceptFiles(hwnd, BOOL::from(true)) };

    // Typed message channels between the adapter and this controller.
    let (req_tx, req_rx) = mpsc::channel();
    let (ev_tx, ev_rx) = mpsc::channel();

    let session = session::load().unwrap_or_default();

    let mut host = Host::new(
        view,
        NativeShell::new(hwnd),
        install_dir()?,
        MAIN_WINDOW_ID,
        req_tx,
        ev_rx,
    );
    host.initialize();

    // Optional modules configured in the session; a failed load is reported
    // and does not block startup.
    for module in session.modules.clone() {
        if let Err(e) = host.import(&module) {
            host.show_error(&e.to_string());
        }
    }

    let state = Box::new(WindowState {
        host,
        events: ev_tx,
        requests: req_rx,
        session,
        hwnd_view,
        hwnd_button,
    });

    // SAFETY: hwnd is valid; the pointer stays alive until WM_NCDESTROY,
    // where it is turned back into a Box and dropped.
    unsafe {
        SetWindowLongPtrW(hwnd, GWLP_USERDATA, Box::into_raw(state) as isize);
    }

    // SAFETY: hwnd is valid.  ShowWindow returns the previous visibility
    // state; UpdateWindow returns a success BOOL — both intentionally ignored.
    unsafe {
        let _ = ShowWindow(hwnd, SW_SHOW);
        let _ = UpdateWindow(hwnd);
    }

    // SAFETY: userdata was just set; layout reads the client rect and moves
    // the child controls.
    if let Some(state) = unsafe { state_from_hwnd(hwnd) } {
        layout(hwnd, state);
    }

    // Startup milestone — window is now visible on screen.
    #[cfg(debug_assertions)]
    eprintln!(
        "[vantage] window visible in {:.1} ms",
        t0.elapsed().as_secs_f64() * 1000.0
    );

    message_loop()
}

/// Show a modal error dialog with the given message.
///
/// Safe to call from any context; performs the UTF-16 conversion internally.
/// Used by `main()` when `run()` returns an error.
pub(crate) fn show_error_dialog(message: &str) {
    let msg_wide: Vec<u16> = message.encode_utf16().chain(std::iter::once(0)).collect();
    let title_wide: Vec<u16> = "Vantage — Fatal Error"
        .encode_utf16()
        .chain(std::iter::once(0))
        .collect();

    // SAFETY: msg_wide and title_wide are valid null-terminated UTF-16 strings
    // that remain allocated for the duration of the MessageBoxW call.
    // HWND::default() (null) means the dialog has no owner window.
    // Return value (button pressed) is intentionally unused for an error dialog.
    unsafe {
        let _ = MessageBoxW(
            HWND::default(),
            PCWSTR(msg_wide.as_ptr()),
            PCWSTR(title_wide.as_ptr()),
            MB_OK | MB_ICONERROR,
        );
    }
}

// ── Installation directory ────────────────────────────────────────────────────

/// Directory the running executable lives in — the resource root for the
/// adapter's `request` and `import` operations.
fn install_dir() -> Result<PathBuf> {
    let mut buf = [0u16; 1024];
    // SAFETY: a null HMODULE selects the current executable; buf is writable
    // for its full length and GetModuleFileNameW never writes past it.
    let len = unsafe { GetModuleFileNameW(HMODULE::default(), &mut buf) } as usize;
    if len == 0 {
        return Err(last_error("GetModuleFileNameW"));
    }
    let exe = PathBuf::from(String::from_utf16_lossy(&buf[..len]));
    exe.parent()
        .map(std::path::Path::to_path_buf)
        .ok_or(HostError::NotFound)
}

// ── Window class registration ─────────────────────────────────────────────────

fn register_class(hinstance: HINSTANCE) -> Result<()> {
    // SAFETY: LoadIconW with IDI_APPLICATION always succeeds; it loads the
    // built-in application icon resource, which exists on all Windows versions.
    let icon = unsafe { LoadIconW(None, IDI_APPLICATION) }.map_err(HostError::from)?;

    // SAFETY: LoadCursorW with IDC_ARROW always succeeds; the arrow cursor is
    // a built-in resource guaranteed to exist on all Windows versions.
    let cursor = unsafe { LoadCursorW(None, IDC_ARROW) }.map_err(HostError::from)?;

    // SAFETY: GetStockObject with WHITE_BRUSH always returns a valid HGDIOBJ.
    // Casting to HBRUSH is correct: stock brush objects are compatible types.
    let bg_brush = unsafe { HBRUSH(GetStockObject(WHITE_BRUSH).0) };

    let wndclass = WNDCLASSEXW {
        // WNDCLASSEXW is ~72 bytes; the cast to u32 is always lossless.
        cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
        // Repaint on resize so the centered child text stays centered.
        style: CS_HREDRAW | CS_VREDRAW,
        lpfnWndProc: Some(wnd_proc),
        cbClsExtra: 0,
        cbWndExtra: 0,
        hInstance: hinstance,
        hIcon: icon,
        hCursor: cursor,
        hbrBackground: bg_brush,
        lpszMenuName: PCWSTR::null(),
        lpszClassName: CLASS_NAME,
        hIconSm: icon,
    };

    // SAFETY: wndclass is fully initialised with valid handles;
    // CLASS_NAME is a valid null-terminated UTF-16 string literal.
    let atom = unsafe { RegisterClassExW(&wndclass) };
    if atom == 0 {
        return Err(last_error("RegisterClassExW"));
    }

    Ok(())
}

// ── Window creation ───────────────────────────────────────────────────────────

fn create_window(hinstance: HINSTANCE) -> Result<HWND> {
    // SAFETY: CLASS_NAME was just registered; hinstance is the exe's module.
    // HWND::default() (null parent) creates a top-level window.
    // HMENU::default() (null menu) — we attach the menu separately below.
    // None for lpParam: window state is attached after creation instead.
    let hwnd = unsafe {
        CreateWindowExW(
            WINDOW_EX_STYLE(0),
            CLASS_NAME,
            APP_TITLE,
            WS_OVERLAPPEDWINDOW,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            DEFAULT_WIDTH,
            DEFAULT_HEIGHT,
            HWND::default(),
            HMENU::default(),
            hinstance,
            None,
        )
    };

    if hwnd == HWND::default() {
        return Err(last_error("CreateWindowExW"));
    }

    // Build and attach the menu bar.
    let menu = build_menu()?;
    // SAFETY: hwnd and menu are valid handles.
    unsafe { SetMenu(hwnd, menu) }.map_err(HostError::from)?;

    Ok(hwnd)
}

fn create_open_button(hwnd_parent: HWND, hinstance: HINSTANCE) -> Result<HWND> {
    // SAFETY: "BUTTON" is a system window class that is always registered;
    // hwnd_parent and hinstance are valid handles.  The HMENU parameter
    // carries the control id for a child window.  WINDOW_STYLE(0x1) is
    // BS_DEFPUSHBUTTON.  Created with zero size; `layout` positions it.
    let hwnd = unsafe {
        CreateWindowExW(
            WINDOW_EX_STYLE(0),
            w!("BUTTON"),
            w!("Open File…"),
            WS_CHILD | WS_VISIBLE | WINDOW_STYLE(0x0000_0001), // BS_DEFPUSHBUTTON
            0,
            0,
            0,
            0,
            hwnd_parent,
            HMENU(IDC_OPEN_BUTTON as *mut c_void),
            hinstance,
            None,
        )
    };

    if hwnd == HWND::default() {
        return Err(last_error("CreateWindowExW (button)"));
    }

    Ok(hwnd)
}

// ── Menu construction ─────────────────────────────────────────────────────────

fn build_menu() -> Result<HMENU> {
    // SAFETY: CreateMenu has no preconditions; it always succeeds unless the
    // system is critically low on resources, in which case ? propagates the error.
    unsafe {
        let bar = CreateMenu().map_err(HostError::from)?;

        // ── File ──────────────────────────────────────────────────────────────
        let file = CreateMenu().map_err(HostError::from)?;
        AppendMenuW(file, MF_STRING, IDM_FILE_OPEN, w!("&Open…\tCtrl+O"))
            .map_err(HostError::from)?;
        AppendMenuW(file, MF_SEPARATOR, 0, PCWSTR::null()).map_err(HostError::from)?;
        AppendMenuW(file, MF_STRING, IDM_FILE_EXIT, w!("E&xit\tAlt+F4"))
            .map_err(HostError::from)?;

        // ── Help ──────────────────────────────────────────────────────────────
        let help = CreateMenu().map_err(HostError::from)?;
        AppendMenuW(help, MF_STRING, IDM_HELP_WEBSITE, w!("&Website"))
            .map_err(HostError::from)?;
        AppendMenuW(help, MF_STRING, IDM_HELP_ABOUT, w!("&About Vantage…"))
            .map_err(HostError::from)?;

        // Attach drop-downs to the menu bar.
        // The uIDNewItem parameter for MF_POPUP is the child HMENU cast to usize.
        AppendMenuW(bar, MF_POPUP, file.0 as usize, w!("&File")).map_err(HostError::from)?;
        AppendMenuW(bar, MF_POPUP, help.0 as usize, w!("&Help")).map_err(HostError::from)?;

        Ok(bar)
    }
}

// ── Layout ────────────────────────────────────────────────────────────────────

/// Position the view surface and the open button inside the client area:
/// the view fills everything above a bottom bar holding the centered button.
fn layout(hwnd: HWND, state: &WindowState) {
    let mut rc = RECT::default();
    // SAFETY: hwnd is valid; rc is a writable RECT.
    unsafe {
        let _ = GetClientRect(hwnd, &mut rc);
    }

    let dpi = dpi_for_window(hwnd);
    let bar_h = scale(48, dpi);
    let btn_w = scale(120, dpi);
    let btn_h = scale(28, dpi);

    // SAFETY: both child handles are valid while the parent is alive; the
    // return value (success BOOL) is intentionally ignored during teardown.
    unsafe {
        let _ = SetWindowPos(
            state.hwnd_view,
            HWND::default(),
            0,
            0,
            rc.right,
            (rc.bottom - bar_h).max(0),
            SWP_NOZORDER,
        );
        let _ = SetWindowPos(
            state.hwnd_button,
            HWND::default(),
            (rc.right - btn_w) / 2,
            rc.bottom - bar_h + (bar_h - btn_h) / 2,
            btn_w,
            btn_h,
            SWP_NOZORDER,
        );
    }
}

// ── DPI helpers ───────────────────────────────────────────────────────────────

const BASE_DPI: u32 = 96;

/// Scale a pixel value defined at 96 DPI to `dpi`.
fn scale(px: i32, dpi: u32) -> i32 {
    px * dpi as i32 / BASE_DPI as i32
}

/// Opt into Per-Monitor v2 DPI awareness.
/// MUST be called before any window is created on the calling thread.
fn dpi_init() {
    // SAFETY: Must precede all window creation; single call at process start.
    unsafe {
        let _ = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2);
    }
}

/// Return the DPI for `hwnd`. Falls back to BASE_DPI (96) on failure.
fn dpi_for_window(hwnd: HWND) -> u32 {
    // SAFETY: hwnd is a valid window handle provided by the caller.
    let v = unsafe { GetDpiForWindow(hwnd) };
    if v == 0 {
        BASE_DPI
    } else {
        v
    }
}

// ── Message loop ──────────────────────────────────────────────────────────────

fn message_loop() -> Result<()> {
    let mut msg = MSG::default();

    loop {
        // SAFETY: &mut msg is a valid MSG pointer; HWND::default() retrieves
        // messages for all windows on this thread; 0,0 filter accepts all.
        let ret = unsafe { GetMessageW(&mut msg, HWND::default(), 0, 0) };

        match ret.0 {
            // GetMessageW returns -1 on error.
            -1 => return Err(last_error("GetMessageW")),
            // Returns 0 when WM_QUIT is retrieved — exit the loop cleanly.
            0 => break,
            // Any other value: a normal message to dispatch.
            _ => unsafe {
                // SAFETY: msg was populated by a successful GetMessageW call.
                // TranslateMessage return value (whether it generated WM_CHAR)
                // and DispatchMessageW's LRESULT are intentionally unused.
                let _ = TranslateMessage(&msg);
                let _ = DispatchMessageW(&msg);
            },
        }
    }

    Ok(())
}

// ── Window procedure ──────────────────────────────────────────────────────────

// SAFETY: wnd_proc is registered as lpfnWndProc in WNDCLASSEXW.
// Windows guarantees that hwnd, msg, wparam, and lparam are valid for the
// lifetime of this call; we must not store hwnd beyond the message handler.
unsafe extern "system" fn wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        // ── Layout ────────────────────────────────────────────────────────────
        WM_SIZE => {
            if let Some(state) = state_from_hwnd(hwnd) {
                layout(hwnd, state);
            }
            LRESULT(0)
        }

        // ── Drag and drop ─────────────────────────────────────────────────────
        WM_DROPFILES => {
            if let Some(state) = state_from_hwnd(hwnd) {
                let files = extract_dropped(HDROP(wparam.0 as *mut c_void));
                // Forward unchanged; the controller decides what to open.
                state.host.drop_files(files);
                drain_requests(hwnd, state);
            }
            LRESULT(0)
        }

        // ── Commands ──────────────────────────────────────────────────────────
        WM_COMMAND => {
            // Low word of WPARAM is the command / control identifier.
            let cmd_id = wparam.0 & 0xFFFF;

            match cmd_id {
                IDM_FILE_OPEN | IDC_OPEN_BUTTON => {
                    if let Some(state) = state_from_hwnd(hwnd) {
                        state.host.request_open_dialog();
                        drain_requests(hwnd, state);
                    }
                    LRESULT(0)
                }

                IDM_FILE_EXIT => {
                    // SAFETY: same as WM_CLOSE handler.
                    let _ = DestroyWindow(hwnd);
                    LRESULT(0)
                }

                IDM_HELP_WEBSITE => {
                    if let Some(state) = state_from_hwnd(hwnd) {
                        if let Err(e) = state.host.open_url(PROJECT_URL) {
                            state.host.show_error(&e.to_string());
                        }
                    }
                    LRESULT(0)
                }

                IDM_HELP_ABOUT => {
                    // The about text ships as an optional resource next to
                    // the executable; fall back to the built-in copy.
                    let body = state_from_hwnd(hwnd)
                        .and_then(|state| state.host.request("about.txt").ok())
                        .and_then(|bytes| String::from_utf8(bytes).ok())
                        .unwrap_or_else(|| ABOUT_FALLBACK.to_owned());
                    about_dialog(hwnd, &body);
                    LRESULT(0)
                }

                _ => DefWindowProcW(hwnd, msg, wparam, lparam),
            }
        }

        // ── Lifecycle ─────────────────────────────────────────────────────────
        WM_CLOSE => {
            if let Some(state) = state_from_hwnd(hwnd) {
                // Best effort; a failed save must not block shutdown.
                let _ = session::save(&state.session);
            }
            // SAFETY: hwnd is the window being closed; DestroyWindow triggers
            // WM_DESTROY, which posts WM_QUIT via PostQuitMessage.
            let _ = DestroyWindow(hwnd);
            LRESULT(0)
        }

        WM_DESTROY => {
            // SAFETY: PostQuitMessage with exit code 0 is always safe to call
            // from WM_DESTROY. It posts WM_QUIT to the thread's message queue.
            PostQuitMessage(0);
            LRESULT(0)
        }

        WM_NCDESTROY => {
            // Reclaim the WindowState installed in run().
            // SAFETY: the pointer was produced by Box::into_raw and is cleared
            // here so no later message can observe it.
            let ptr = SetWindowLongPtrW(hwnd, GWLP_USERDATA, 0) as *mut WindowState;
            if !ptr.is_null() {
                drop(Box::from_raw(ptr));
            }
            DefWindowProcW(hwnd, msg, wparam, lparam)
        }

        // Default processing for all unhandled messages.
        // SAFETY: hwnd and message parameters are valid — provided by Windows.
        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}

// ── State access ──────────────────────────────────────────────────────────────

// SAFETY: callers must be on the UI thread.  The returned reference is only
// valid for the current message; WM_NCDESTROY clears the slot before freeing.
unsafe fn state_from_hwnd(hwnd: HWND) -> Option<&'static mut WindowState> {
    let ptr = GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *mut WindowState;
    if ptr.is_null() {
        None
    } else {
        Some(&mut *ptr)
    }
}

// ── Shell controller ──────────────────────────────────────────────────────────

/// Drain every pending request from the host adapter and act on it.
///
/// Dialog requests open the native picker; drop lists are re-emitted as
/// `Open` events; successful updates are recorded into the session.  The
/// adapter's event pump runs after each batch of forwarded events, which may
/// queue further requests — the loop continues until the channel is empty.
fn drain_requests(hwnd: HWND, state: &mut WindowState) {
    while let Ok(req) = state.requests.try_recv() {
        #[cfg(debug_assertions)]
        if let Ok(line) = crate::ipc::encode(&req) {
            eprintln!("[vantage] \u{2192} {line}");
        }

        match req {
            ShellRequest::OpenFileDialog => {
                let initial = state.session.last_open_dir.clone().map(PathBuf::from);
                if let Some(path) = dialogs::show_open_dialog(hwnd, initial.as_deref()) {
                    let _ = state.events.send(ShellEvent::Open {
                        file: path.to_string_lossy().into_owned(),
                    });
                    state.host.pump();
                }
            }

            ShellRequest::DropFiles { files } => {
                for file in files {
                    let _ = state.events.send(ShellEvent::Open { file });
                }
                state.host.pump();
            }

            ShellRequest::Update(Some(update)) => {
                session::remember(&mut state.session, &update.file);
                // Best effort; the session is rewritten on every open.
                let _ = session::save(&state.session);
            }

            // A failed open leaves the session untouched.
            ShellRequest::Update(None) => {}
        }
    }
}

/// Read all paths out of a WM_DROPFILES handle and release it.
unsafe fn extract_dropped(hdrop: HDROP) -> Vec<String> {
    // SAFETY: hdrop comes straight from WM_DROPFILES.  The 0xFFFFFFFF index
    // queries the file count; per-file queries first ask for the required
    // length, then fill a buffer of exactly that size plus the terminator.
    let count = DragQueryFileW(hdrop, u32::MAX, None);
    let mut files = Vec::with_capacity(count as usize);

    for i in 0..count {
        let len = DragQueryFileW(hdrop, i, None) as usize;
        let mut buf = vec![0u16; len + 1];
        let copied = DragQueryFileW(hdrop, i, Some(&mut buf)) as usize;
        buf.truncate(copied);
        files.push(String::from_utf16_lossy(&buf));
    }

    DragFinish(hdrop);
    files
}

// ── Helper dialogs ────────────────────────────────────────────────────────────

/// Display the "About Vantage" information dialog.
fn about_dialog(hwnd: HWND, body: &str) {
    let body_wide: Vec<u16> = body.encode_utf16().chain(std::iter::once(0)).collect();

    // SAFETY: body_wide is a valid null-terminated UTF-16 string that remains
    // allocated for the duration of the MessageBoxW call.
    // hwnd is the owner window from WndProc — valid for this call.
    // Return value (button pressed) is intentionally unused for an informational dialog.
    unsafe {
        let _ = MessageBoxW(hwnd, PCWSTR(body_wide.as_ptr()), w!("About Vantage"), MB_OK);
    }
}

// ── Error helpers ─────────────────────────────────────────────────────────────

/// Capture the current Win32 last-error code and wrap it in a `HostError`.
///
/// Call immediately after a Win32 function that signals failure — `GetLastError`
/// reads thread-local state that can be overwritten by any subsequent API call.
fn last_error(function: &'static str) -> HostError {
    // SAFETY: GetLastError reads thread-local state set by the last Win32 call.
    // It is always safe to call and never fails.
    let code = unsafe { GetLastError() };
    HostError::Win32 {
        function,
        code: code.0,
    }
}
