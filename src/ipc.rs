// ── Typed shell messages ──────────────────────────────────────────────────────
//
// The viewer side and the shell controller talk through these enums instead
// of stringly-typed event names.  In-process the messages travel over plain
// `std::sync::mpsc` channels; at a process boundary each message is one line
// of JSON, tagged with the channel names the protocol has always used
// (`open`, `open-file-dialog`, `drop-files`, `update`).

use serde::{de::DeserializeOwned, Deserialize, Serialize};

// ── Controller → viewer ───────────────────────────────────────────────────────

/// Events delivered to the host adapter by the shell controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "channel", content = "payload", rename_all = "kebab-case")]
pub(crate) enum ShellEvent {
    /// Ask the viewer to open `file` (an absolute path).
    Open { file: String },
}

// ── Viewer → controller ───────────────────────────────────────────────────────

/// Requests sent by the host adapter to the shell controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "channel", content = "payload", rename_all = "kebab-case")]
pub(crate) enum ShellRequest {
    /// Ask the controller to show the native file picker.  Empty payload.
    OpenFileDialog,
    /// Forward a list of dropped file paths, unchanged and unvalidated.
    DropFiles { files: Vec<String> },
    /// Report the outcome of an [`ShellEvent::Open`]: the opened file plus
    /// the window that now shows it, or `None` when the open failed.
    Update(Option<OpenUpdate>),
}

/// Payload of a successful [`ShellRequest::Update`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct OpenUpdate {
    /// The file path from the originating `open` event, untouched.
    pub(crate) file: String,
    /// Identifier of the window that performed the open.
    #[serde(rename = "windowId")]
    pub(crate) window_id: u32,
}

// ── Wire codec ────────────────────────────────────────────────────────────────

/// Encode a message as its single-line JSON wire form.
pub(crate) fn encode<T: Serialize>(msg: &T) -> serde_json::Result<String> {
    serde_json::to_string(msg)
}

/// Decode a message from its single-line JSON wire form.
pub(crate) fn decode<T: DeserializeOwned>(line: &str) -> serde_json::Result<T> {
    serde_json::from_str(line)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
