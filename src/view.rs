// ── View seam ─────────────────────────────────────────────────────────────────
//
// The presentation layer is a collaborator of the host adapter, not part of
// it.  `Host` drives whatever implements `View`; the native shell plugs in a
// Win32-backed implementation (`platform::win32::viewer::NativeView`) and
// tests plug in a recording fake.

use crate::error::Result;

// ── View state ────────────────────────────────────────────────────────────────

/// The coarse display states the adapter can put the view into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ViewState {
    /// Initial state: invite the user to open or drop a file.
    Welcome,
    /// A file-open sequence is in flight.
    Spinner,
    /// Nothing to show; the previous content (if any) was discarded.
    Clear,
}

// ── View trait ────────────────────────────────────────────────────────────────

/// The presentation-layer consumer of the host adapter.
///
/// `open_buffer` receives the file's entire contents; ownership of the bytes
/// transfers to the view.  A view may refuse a buffer (unsupported content,
/// internal failure) by returning an error, which the adapter reports back
/// through its own completion path.
pub(crate) trait View {
    /// Switch the view to a coarse display state.
    fn show(&mut self, state: ViewState);

    /// Display an error message inside the view surface (not a dialog).
    fn show_error(&mut self, message: &str);

    /// Hand the view a fully materialized file: its bytes and its base name.
    fn open_buffer(&mut self, data: Vec<u8>, name: &str) -> Result<()>;
}
