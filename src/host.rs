// ── Host adapter ──────────────────────────────────────────────────────────────
//
// Translates shell events and simple I/O requests into calls on the view,
// and forwards the view's needs back to the shell controller as typed
// messages.  Every operation is a single best-effort attempt: no retries,
// no partial reads, no queuing.  One adapter is constructed at application
// start and handed its collaborators explicitly; there is no global instance.

use std::{
    fs,
    io::Read as _,
    path::{Path, PathBuf},
    sync::mpsc::{Receiver, Sender},
};

use crate::{
    error::{HostError, Result},
    ipc::{OpenUpdate, ShellEvent, ShellRequest},
    platform::Shell,
    view::{View, ViewState},
};

// ── Open outcome ──────────────────────────────────────────────────────────────

/// Result of a file-open sequence.
///
/// The three-way split preserves the two historical completion paths: I/O
/// failures are surfaced inside the view and deliberately report nothing
/// upstream, while a view rejection is reported as a failed completion.
#[derive(Debug)]
pub(crate) enum OpenOutcome {
    /// The buffer was handed to the view and accepted.
    Opened,
    /// An I/O step failed.  The error was shown on the view; no completion
    /// is reported upstream.
    Aborted,
    /// The view refused the buffer.
    Rejected(HostError),
}

// ── Host ──────────────────────────────────────────────────────────────────────

/// The adapter between the shell controller and the view.
pub(crate) struct Host<V: View, S: Shell> {
    view: V,
    shell: S,
    /// Resource root for `request` and `import`; the directory the
    /// application was installed into.
    install_dir: PathBuf,
    /// Identifier reported in `update` messages.
    window_id: u32,
    requests: Sender<ShellRequest>,
    events: Receiver<ShellEvent>,
}

impl<V: View, S: Shell> Host<V, S> {
    pub(crate) fn new(
        view: V,
        shell: S,
        install_dir: PathBuf,
        window_id: u32,
        requests: Sender<ShellRequest>,
        events: Receiver<ShellEvent>,
    ) -> Self {
        Self {
            view,
            shell,
            install_dir,
            window_id,
            requests,
            events,
        }
    }

    /// Put the view into its initial state.
    ///
    /// The event wiring established by the caller stays bound for the
    /// lifetime of the window; there is no unsubscribe path.
    pub(crate) fn initialize(&mut self) {
        self.view.show(ViewState::Welcome);
    }

    // ── Event pump ────────────────────────────────────────────────────────────

    /// Drain and handle every pending shell event.  Called by the shell
    /// controller after each interaction; never blocks.
    pub(crate) fn pump(&mut self) {
        while let Ok(ev) = self.events.try_recv() {
            self.handle_event(ev);
        }
    }

    /// Handle one inbound shell event.
    pub(crate) fn handle_event(&mut self, ev: ShellEvent) {
        match ev {
            ShellEvent::Open { file } => {
                self.view.show(ViewState::Spinner);
                match self.open_file(Path::new(&file)) {
                    OpenOutcome::Opened => {
                        self.send(ShellRequest::Update(Some(OpenUpdate {
                            file,
                            window_id: self.window_id,
                        })));
                    }
                    OpenOutcome::Rejected(e) => {
                        self.shell.error_box(&e.to_string());
                        self.view.show(ViewState::Clear);
                        self.send(ShellRequest::Update(None));
                    }
                    // Historical behavior, kept as-is: an I/O failure was
                    // already shown inside the view and completes nothing.
                    OpenOutcome::Aborted => {}
                }
            }
        }
    }

    // ── Forwarding operations ─────────────────────────────────────────────────

    /// Ask the controller to show the native file picker.
    pub(crate) fn request_open_dialog(&mut self) {
        self.send(ShellRequest::OpenFileDialog);
    }

    /// Forward a list of dropped file paths, unchanged.  No validation.
    pub(crate) fn drop_files(&mut self, files: Vec<String>) {
        self.send(ShellRequest::DropFiles { files });
    }

    /// Display a blocking native error dialog.
    pub(crate) fn show_error(&mut self, message: &str) {
        self.shell.error_box(message);
    }

    /// Load a module from the installation directory.
    pub(crate) fn import(&mut self, file: &str) -> Result<()> {
        let pathname = self.install_dir.join(file);
        self.shell.load_module(&pathname)
    }

    /// Read a resource file relative to the installation directory.
    pub(crate) fn request(&self, file: &str) -> Result<Vec<u8>> {
        let pathname = self.install_dir.join(file);
        if !pathname.exists() {
            return Err(HostError::NotFound);
        }
        Ok(fs::read(&pathname)?)
    }

    /// Open `url` in the platform's default handler.
    pub(crate) fn open_url(&mut self, url: &str) -> Result<()> {
        self.shell.open_external(url)
    }

    // ── File open ─────────────────────────────────────────────────────────────

    /// Read `path` in full and hand the buffer to the view.
    ///
    /// The historical step chain — existence check, stat, open, full read,
    /// close — composed as fallible steps with early return.  Any I/O step
    /// failing short-circuits into a view-level error display.
    pub(crate) fn open_file(&mut self, path: &Path) -> OpenOutcome {
        let data = match read_all(path) {
            Ok(data) => data,
            Err(e) => {
                self.view.show_error(&e.to_string());
                return OpenOutcome::Aborted;
            }
        };
        match self.view.open_buffer(data, &base_name(path)) {
            Ok(()) => OpenOutcome::Opened,
            Err(e) => OpenOutcome::Rejected(e),
        }
    }

    fn send(&self, request: ShellRequest) {
        // The controller owns the receiving half for the window's lifetime;
        // a closed channel can only happen during teardown.
        let _ = self.requests.send(request);
    }
}

// ── File helpers ──────────────────────────────────────────────────────────────

/// Existence check → stat → open → read-full-buffer → close.
fn read_all(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(HostError::NotFound);
    }
    let size = fs::metadata(path)?.len();
    let mut file = fs::File::open(path)?;
    let mut data = Vec::with_capacity(size as usize);
    file.read_to_end(&mut data)?;
    drop(file); // close before the buffer leaves the adapter
    Ok(data)
}

/// The path's final component, or the whole path when it has none.
fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc, sync::mpsc};

    use super::*;

    // ── Recording collaborators ───────────────────────────────────────────────

    #[derive(Debug, PartialEq)]
    enum ViewCall {
        Show(ViewState),
        Error(String),
        Buffer { data: Vec<u8>, name: String },
    }

    /// A `View` that records every call; `Clone` hands the test a second
    /// handle onto the same call log.
    #[derive(Clone, Default)]
    struct RecordingView {
        calls: Rc<RefCell<Vec<ViewCall>>>,
        reject: bool,
    }

    impl View for RecordingView {
        fn show(&mut self, state: ViewState) {
            self.calls.borrow_mut().push(ViewCall::Show(state));
        }

        fn show_error(&mut self, message: &str) {
            self.calls
                .borrow_mut()
                .push(ViewCall::Error(message.to_owned()));
        }

        fn open_buffer(&mut self, data: Vec<u8>, name: &str) -> Result<()> {
            self.calls.borrow_mut().push(ViewCall::Buffer {
                data,
                name: name.to_owned(),
            });
            if self.reject {
                Err(HostError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "unsupported format",
                )))
            } else {
                Ok(())
            }
        }
    }

    #[derive(Clone, Default)]
    struct RecordingShell {
        dialogs: Rc<RefCell<Vec<String>>>,
        urls: Rc<RefCell<Vec<String>>>,
        modules: Rc<RefCell<Vec<PathBuf>>>,
        fail_module_load: bool,
    }

    impl Shell for RecordingShell {
        fn error_box(&mut self, message: &str) {
            self.dialogs.borrow_mut().push(message.to_owned());
        }

        fn open_external(&mut self, url: &str) -> Result<()> {
            self.urls.borrow_mut().push(url.to_owned());
            Ok(())
        }

        fn load_module(&mut self, path: &Path) -> Result<()> {
            if self.fail_module_load {
                return Err(HostError::ModuleLoad {
                    path: path.display().to_string(),
                });
            }
            self.modules.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    const WINDOW_ID: u32 = 7;

    fn make_host(
        install_dir: &Path,
        view: RecordingView,
        shell: RecordingShell,
    ) -> (
        Host<RecordingView, RecordingShell>,
        mpsc::Receiver<ShellRequest>,
    ) {
        let (req_tx, req_rx) = mpsc::channel();
        let (_ev_tx, ev_rx) = mpsc::channel();
        let host = Host::new(
            view,
            shell,
            install_dir.to_path_buf(),
            WINDOW_ID,
            req_tx,
            ev_rx,
        );
        (host, req_rx)
    }

    // ── initialize ────────────────────────────────────────────────────────────

    #[test]
    fn initialize_shows_welcome() {
        let view = RecordingView::default();
        let (mut host, _rx) = make_host(Path::new("."), view.clone(), RecordingShell::default());
        host.initialize();
        assert_eq!(*view.calls.borrow(), vec![ViewCall::Show(ViewState::Welcome)]);
    }

    // ── request ───────────────────────────────────────────────────────────────

    #[test]
    fn request_missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (host, _rx) = make_host(dir.path(), RecordingView::default(), RecordingShell::default());
        let err = host.request("no-such-resource.json").unwrap_err();
        assert_eq!(err.to_string(), "File not found.");
    }

    #[test]
    fn request_reads_relative_to_install_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("grammar.json"), b"{\"v\":1}").expect("write");
        let (host, _rx) = make_host(dir.path(), RecordingView::default(), RecordingShell::default());
        let data = host.request("grammar.json").expect("request");
        assert_eq!(data, b"{\"v\":1}");
    }

    // ── open_file ─────────────────────────────────────────────────────────────

    #[test]
    fn open_file_hands_exact_bytes_and_base_name_to_view() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("weights.bin");
        let content: Vec<u8> = (0u16..600).map(|i| (i % 251) as u8).collect();
        fs::write(&path, &content).expect("write");

        let view = RecordingView::default();
        let (mut host, _rx) = make_host(dir.path(), view.clone(), RecordingShell::default());

        assert!(matches!(host.open_file(&path), OpenOutcome::Opened));
        match &view.calls.borrow()[0] {
            ViewCall::Buffer { data, name } => {
                assert_eq!(data.len(), content.len());
                assert_eq!(*data, content);
                assert_eq!(name, "weights.bin");
            }
            other => panic!("unexpected view call: {other:?}"),
        };
    }

    /// An I/O failure surfaces inside the view and reports no completion —
    /// this is the historical behavior, preserved deliberately.
    #[test]
    fn open_file_missing_path_shows_view_error_and_aborts() {
        let dir = tempfile::tempdir().expect("tempdir");
        let view = RecordingView::default();
        let (mut host, rx) = make_host(dir.path(), view.clone(), RecordingShell::default());

        let outcome = host.open_file(&dir.path().join("gone.onnx"));
        assert!(matches!(outcome, OpenOutcome::Aborted));
        assert_eq!(
            *view.calls.borrow(),
            vec![ViewCall::Error("File not found.".to_owned())]
        );
        assert!(rx.try_recv().is_err(), "no update may be emitted");
    }

    #[test]
    fn open_file_view_rejection_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("odd.bin");
        fs::write(&path, b"????").expect("write");

        let view = RecordingView {
            reject: true,
            ..RecordingView::default()
        };
        let (mut host, _rx) = make_host(dir.path(), view, RecordingShell::default());
        assert!(matches!(host.open_file(&path), OpenOutcome::Rejected(_)));
    }

    // ── drop_files / dialog request ───────────────────────────────────────────

    #[test]
    fn drop_files_forwards_exactly() {
        let (mut host, rx) = make_host(
            Path::new("."),
            RecordingView::default(),
            RecordingShell::default(),
        );
        host.drop_files(vec!["/a".to_owned(), "/b".to_owned()]);
        assert_eq!(
            rx.try_recv().expect("request"),
            ShellRequest::DropFiles {
                files: vec!["/a".to_owned(), "/b".to_owned()]
            }
        );
    }

    #[test]
    fn request_open_dialog_sends_the_picker_message() {
        let (mut host, rx) = make_host(
            Path::new("."),
            RecordingView::default(),
            RecordingShell::default(),
        );
        host.request_open_dialog();
        assert_eq!(rx.try_recv().expect("request"), ShellRequest::OpenFileDialog);
    }

    // ── open event ────────────────────────────────────────────────────────────

    #[test]
    fn open_event_success_emits_update_with_window_id() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("net.onnx");
        fs::write(&path, b"graph").expect("write");
        let file = path.to_string_lossy().into_owned();

        let view = RecordingView::default();
        let (mut host, rx) = make_host(dir.path(), view.clone(), RecordingShell::default());
        host.handle_event(ShellEvent::Open { file: file.clone() });

        assert_eq!(view.calls.borrow()[0], ViewCall::Show(ViewState::Spinner));
        assert_eq!(
            rx.try_recv().expect("request"),
            ShellRequest::Update(Some(OpenUpdate {
                file,
                window_id: WINDOW_ID,
            }))
        );
    }

    #[test]
    fn open_event_view_rejection_emits_null_update_and_dialog() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.bin");
        fs::write(&path, b"x").expect("write");

        let view = RecordingView {
            reject: true,
            ..RecordingView::default()
        };
        let shell = RecordingShell::default();
        let (mut host, rx) = make_host(dir.path(), view.clone(), shell.clone());
        host.handle_event(ShellEvent::Open {
            file: path.to_string_lossy().into_owned(),
        });

        assert_eq!(shell.dialogs.borrow().len(), 1);
        assert_eq!(
            view.calls.borrow().last(),
            Some(&ViewCall::Show(ViewState::Clear))
        );
        assert_eq!(rx.try_recv().expect("request"), ShellRequest::Update(None));
    }

    /// An I/O failure on the open path completes nothing upstream; only the
    /// view shows the error.
    #[test]
    fn open_event_io_failure_emits_no_update() {
        let dir = tempfile::tempdir().expect("tempdir");
        let view = RecordingView::default();
        let shell = RecordingShell::default();
        let (mut host, rx) = make_host(dir.path(), view.clone(), shell.clone());
        host.handle_event(ShellEvent::Open {
            file: dir
                .path()
                .join("missing.onnx")
                .to_string_lossy()
                .into_owned(),
        });

        assert!(rx.try_recv().is_err());
        assert!(shell.dialogs.borrow().is_empty());
        assert_eq!(
            *view.calls.borrow(),
            vec![
                ViewCall::Show(ViewState::Spinner),
                ViewCall::Error("File not found.".to_owned()),
            ]
        );
    }

    // ── import / show_error / open_url ────────────────────────────────────────

    #[test]
    fn import_resolves_against_the_install_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let shell = RecordingShell::default();
        let (mut host, _rx) = make_host(dir.path(), RecordingView::default(), shell.clone());
        host.import("codecs.dll").expect("import");
        assert_eq!(
            *shell.modules.borrow(),
            vec![dir.path().join("codecs.dll")]
        );
    }

    #[test]
    fn failed_import_names_the_full_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let shell = RecordingShell {
            fail_module_load: true,
            ..RecordingShell::default()
        };
        let (mut host, _rx) = make_host(dir.path(), RecordingView::default(), shell);
        let err = host.import("codecs.dll").unwrap_err();
        let expected = dir.path().join("codecs.dll");
        assert_eq!(
            err.to_string(),
            format!("The module '{}' failed to load.", expected.display())
        );
    }

    #[test]
    fn show_error_goes_to_the_native_dialog() {
        let shell = RecordingShell::default();
        let (mut host, _rx) = make_host(Path::new("."), RecordingView::default(), shell.clone());
        host.show_error("something broke");
        assert_eq!(*shell.dialogs.borrow(), vec!["something broke".to_owned()]);
    }

    #[test]
    fn open_url_is_forwarded_unchanged() {
        let shell = RecordingShell::default();
        let (mut host, _rx) = make_host(Path::new("."), RecordingView::default(), shell.clone());
        host.open_url("https://example.com/docs").expect("open_url");
        assert_eq!(
            *shell.urls.borrow(),
            vec!["https://example.com/docs".to_owned()]
        );
    }

    #[test]
    fn pump_drains_every_pending_event() {
        let dir = tempfile::tempdir().expect("tempdir");
        let a = dir.path().join("a.bin");
        let b = dir.path().join("b.bin");
        fs::write(&a, b"a").expect("write");
        fs::write(&b, b"b").expect("write");

        let (req_tx, req_rx) = mpsc::channel();
        let (ev_tx, ev_rx) = mpsc::channel();
        let mut host = Host::new(
            RecordingView::default(),
            RecordingShell::default(),
            dir.path().to_path_buf(),
            WINDOW_ID,
            req_tx,
            ev_rx,
        );

        for p in [&a, &b] {
            ev_tx.send(ShellEvent::Open {
                file: p.to_string_lossy().into_owned(),
            })
            .expect("send");
        }
        host.pump();
        assert_eq!(req_rx.try_iter().count(), 2);
    }
}
