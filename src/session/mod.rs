// ── Session persistence ───────────────────────────────────────────────────────
//
// Reads and writes `%APPDATA%\Vantage\session.json`.
// No `unsafe` — pure safe Rust + serde_json.

use std::{fs, io, path::PathBuf};

use serde::{Deserialize, Serialize};

// ── On-disk types ─────────────────────────────────────────────────────────────

/// Root of the JSON session file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct SessionFile {
    pub(crate) version: u32,
    /// Directory the file picker starts in; the parent of the last open.
    #[serde(default)]
    pub(crate) last_open_dir: Option<String>,
    /// Most recently opened files, newest first.
    #[serde(default)]
    pub(crate) recent: Vec<String>,
    /// Optional modules (file names relative to the install directory)
    /// imported at startup.
    #[serde(default)]
    pub(crate) modules: Vec<String>,
}

impl Default for SessionFile {
    fn default() -> Self {
        Self {
            version: SESSION_VERSION,
            last_open_dir: None,
            recent: Vec::new(),
            modules: Vec::new(),
        }
    }
}

// ── Format version ────────────────────────────────────────────────────────────

const SESSION_VERSION: u32 = 1;

/// Cap on the recent-files list.
const RECENT_MAX: usize = 10;

// ── Path ──────────────────────────────────────────────────────────────────────

/// Return the path to the session file: `%APPDATA%\Vantage\session.json`.
///
/// Returns `None` if the `APPDATA` environment variable is not set.
pub(crate) fn session_path() -> Option<PathBuf> {
    let appdata = std::env::var_os("APPDATA")?;
    let mut p = PathBuf::from(appdata);
    p.push("Vantage");
    p.push("session.json");
    Some(p)
}

// ── Save ──────────────────────────────────────────────────────────────────────

/// Write the session to `%APPDATA%\Vantage\session.json`.
///
/// Creates the `Vantage` directory if it does not exist.
/// The caller (`window.rs`) silently discards any returned error.
pub(crate) fn save(sf: &SessionFile) -> io::Result<()> {
    let path =
        session_path().ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "APPDATA not set"))?;

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let file = fs::File::create(&path)?;
    serde_json::to_writer_pretty(file, sf).map_err(io::Error::other)
}

// ── Load ──────────────────────────────────────────────────────────────────────

/// Read and parse the session file.
///
/// Returns `None` on any error: file missing, JSON parse failure, or an
/// unrecognised version number.  The app continues with fresh defaults.
pub(crate) fn load() -> Option<SessionFile> {
    let path = session_path()?;
    let data = fs::read(&path).ok()?;
    let sf: SessionFile = serde_json::from_slice(&data).ok()?;
    if sf.version != SESSION_VERSION {
        return None;
    }
    Some(sf)
}

// ── Recent files ──────────────────────────────────────────────────────────────

/// Record `file` as the most recent open and update `last_open_dir`.
///
/// Duplicates move to the front; the list is capped at `RECENT_MAX`.
pub(crate) fn remember(sf: &mut SessionFile, file: &str) {
    sf.last_open_dir = std::path::Path::new(file)
        .parent()
        .map(|p| p.to_string_lossy().into_owned());

    sf.recent.retain(|f| f != file);
    sf.recent.insert(0, file.to_owned());
    sf.recent.truncate(RECENT_MAX);
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_full_session() {
        let sf = SessionFile {
            version: SESSION_VERSION,
            last_open_dir: Some("C:\\models".to_owned()),
            recent: vec!["C:\\models\\net.onnx".to_owned()],
            modules: vec!["codecs.dll".to_owned()],
        };
        let json = serde_json::to_string(&sf).expect("serialize");
        let sf2: SessionFile = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(sf2.version, SESSION_VERSION);
        assert_eq!(sf2.last_open_dir, Some("C:\\models".to_owned()));
        assert_eq!(sf2.recent, vec!["C:\\models\\net.onnx".to_owned()]);
        assert_eq!(sf2.modules, vec!["codecs.dll".to_owned()]);
    }

    /// Files written before the recent/modules fields existed must still
    /// parse; `#[serde(default)]` fills the gaps.
    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{"version":1}"#;
        let sf: SessionFile = serde_json::from_str(json).expect("deserialize old format");
        assert_eq!(sf.last_open_dir, None);
        assert!(sf.recent.is_empty());
        assert!(sf.modules.is_empty());
    }

    /// A session file with an unrecognised version number must be rejected
    /// by `load()`.  Test the parse-and-check logic directly.
    #[test]
    fn wrong_version_is_rejected() {
        let sf = SessionFile {
            version: 99,
            ..SessionFile::default()
        };
        let json = serde_json::to_string(&sf).expect("serialize");
        let parsed: SessionFile = serde_json::from_str(&json).expect("deserialize");
        // load() would return None for this version; assert the condition directly.
        assert_ne!(parsed.version, SESSION_VERSION);
    }

    #[test]
    fn remember_moves_duplicates_to_front() {
        let mut sf = SessionFile::default();
        remember(&mut sf, "C:\\m\\a.onnx");
        remember(&mut sf, "C:\\m\\b.onnx");
        remember(&mut sf, "C:\\m\\a.onnx");
        assert_eq!(
            sf.recent,
            vec!["C:\\m\\a.onnx".to_owned(), "C:\\m\\b.onnx".to_owned()]
        );
        assert_eq!(sf.last_open_dir, Some("C:\\m".to_owned()));
    }

    #[test]
    fn remember_caps_the_list() {
        let mut sf = SessionFile::default();
        for i in 0..20 {
            remember(&mut sf, &format!("C:\\m\\{i}.onnx"));
        }
        assert_eq!(sf.recent.len(), 10);
        assert_eq!(sf.recent[0], "C:\\m\\19.onnx");
    }
}
