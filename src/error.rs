// ── Central error type ────────────────────────────────────────────────────────
//
// All fallible operations in Vantage return `error::Result<T>`.  No panics
// in production paths; errors surface as user-facing dialogs or as a message
// shown inside the view (see `host::Host`).

/// Every error that Vantage can produce.
#[derive(Debug)]
pub enum HostError {
    /// A Win32 API call returned a failure code.
    Win32 {
        /// The name of the failing function, for display purposes.
        function: &'static str,
        /// The raw Win32 error code (`GetLastError()` value) or HRESULT.
        code: u32,
    },

    /// A standard I/O error (stat, open, read, …).
    Io(std::io::Error),

    /// A requested file or resource does not exist.
    ///
    /// The display text is the exact message the shell has always shown for
    /// this case; callers compare against it in tests.
    NotFound,

    /// A dynamically loaded module could not be brought into the process.
    ModuleLoad {
        /// Full path of the module that failed to load.
        path: String,
    },
}

impl std::fmt::Display for HostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win32 { function, code } => {
                write!(f, "{function} failed (error {code:#010x})")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::NotFound => write!(f, "File not found."),
            Self::ModuleLoad { path } => {
                write!(f, "The module '{path}' failed to load.")
            }
        }
    }
}

impl std::error::Error for HostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Win32 { .. } | Self::NotFound | Self::ModuleLoad { .. } => None,
        }
    }
}

impl From<std::io::Error> for HostError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// Convert a windows-crate error (HRESULT) directly into a HostError so that
// `?` can be used on `windows::core::Result<T>` throughout the platform module.
#[cfg(windows)]
impl From<windows::core::Error> for HostError {
    fn from(e: windows::core::Error) -> Self {
        // HRESULT.0 is i32; reinterpret bits as u32 for display purposes.
        // Win32 errors appear as 0x8007xxxx HRESULTs.
        Self::Win32 {
            function: "windows",
            code: e.code().0 as u32,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HostError>;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// The missing-file message is part of the shell's observable behavior
    /// and must not drift.
    #[test]
    fn not_found_message_is_exact() {
        assert_eq!(HostError::NotFound.to_string(), "File not found.");
    }

    #[test]
    fn module_load_message_names_the_path() {
        let e = HostError::ModuleLoad {
            path: r"C:\Program Files\Vantage\codecs.dll".to_owned(),
        };
        assert_eq!(
            e.to_string(),
            r"The module 'C:\Program Files\Vantage\codecs.dll' failed to load."
        );
    }

    #[test]
    fn io_error_is_chained_as_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let e = HostError::from(io);
        assert!(std::error::Error::source(&e).is_some());
        assert!(e.to_string().starts_with("I/O error:"));
    }
}
