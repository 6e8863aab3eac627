/// Application state management.
///
/// Centralises all mutable state that the UI reads and writes. Builds run
/// on a background thread; their progress arrives through
/// `process_build_messages()`, which runs once per frame.
use chrono::{DateTime, Local};
use crossbeam_channel::TryRecvError;
use ctxbuilder_core::config::BuildConfig;
use ctxbuilder_core::model::FileSet;
use ctxbuilder_core::scanner::{scan_directory, ScanSummary};
use ctxbuilder_core::stager::{BuildHandle, BuildOutcome, BuildProgress, BuildStage, Stager};
use ctxbuilder_core::BuildError;
use std::path::{Path, PathBuf};

/// The current phase of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    /// No build running. Scanning and selection are allowed.
    Idle,
    /// A build thread is running.
    Building,
}

/// A modal message that blocks the rest of the UI until answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Error { title: String, message: String },
    /// `<name>.ctx` already exists; the build thread is waiting for an answer.
    ConfirmOverwrite { path: PathBuf },
    Success { path: PathBuf },
}

/// Maximum build messages drained per frame.
///
/// A build sends only a handful, so this is a safety net rather than a
/// throttle.
const MAX_MESSAGES_PER_FRAME: usize = 32;

/// All application state.
pub struct AppState {
    // ── Directory and scan ─────────────────────────────
    pub directory: Option<PathBuf>,
    /// Result of the last successful scan of `directory`.
    pub scan: Option<ScanSummary>,
    /// Index into `scan.sets`.
    pub selected_set: Option<usize>,

    // ── Build ──────────────────────────────────────────
    pub phase: AppPhase,
    pub build_stage: BuildStage,
    pub build_handle: Option<BuildHandle>,
    /// Most recent archive written and when.
    pub last_built: Option<(PathBuf, DateTime<Local>)>,
    stager: Stager,

    // ── UI state ───────────────────────────────────────
    pub status: String,
    pub dialog: Option<Dialog>,
    pub show_about: bool,
    /// `true` = dark mode (default), `false` = light mode.
    pub dark_mode: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create initial state that builds with the system makecab.
    pub fn new() -> Self {
        Self::with_stager(Stager::from_config(&BuildConfig::default()))
    }

    /// Create initial state around a specific stager.
    pub fn with_stager(stager: Stager) -> Self {
        Self {
            directory: None,
            scan: None,
            selected_set: None,
            phase: AppPhase::Idle,
            build_stage: BuildStage::Idle,
            build_handle: None,
            last_built: None,
            stager,
            status: "Select a directory to begin".to_string(),
            dialog: None,
            show_about: false,
            dark_mode: true,
        }
    }

    /// `true` while a dialog waits for the user.
    pub fn is_blocked(&self) -> bool {
        self.dialog.is_some()
    }

    /// Choose a new directory and scan it straight away.
    pub fn set_directory(&mut self, path: PathBuf) {
        if self.phase == AppPhase::Building {
            return;
        }
        tracing::info!("Directory selected: {}", path.display());
        self.directory = Some(path);
        self.rescan();
    }

    /// Rebuild the file set list from the current directory.
    ///
    /// Clears the selection; indices from an old scan mean nothing in a
    /// new one.
    pub fn rescan(&mut self) {
        if self.phase == AppPhase::Building {
            return;
        }
        let Some(dir) = self.directory.clone() else {
            return;
        };
        self.selected_set = None;

        match scan_directory(&dir) {
            Ok(summary) => {
                self.status = if summary.is_empty() {
                    "No complete file sets found in this directory".to_string()
                } else {
                    format!(
                        "Found {} file set(s). Select one to build.",
                        summary.sets.len()
                    )
                };
                self.scan = Some(summary);
            }
            Err(e) => {
                tracing::error!("Scan failed: {}", e);
                self.scan = None;
                self.status = "Could not read the selected directory".to_string();
                self.dialog = Some(Dialog::Error {
                    title: "Error".to_string(),
                    message: format!("An error occurred:\n{e}"),
                });
            }
        }
    }

    /// Sets found by the last scan (empty before any scan).
    pub fn file_sets(&self) -> &[FileSet] {
        self.scan.as_ref().map(|s| s.sets.as_slice()).unwrap_or(&[])
    }

    /// Select the set at `index` in the current list.
    pub fn select_set(&mut self, index: usize) {
        if self.phase == AppPhase::Building {
            return;
        }
        if let Some(set) = self.file_sets().get(index) {
            self.status = format!("Selected: {}", set.name);
            self.selected_set = Some(index);
        }
    }

    pub fn selected_file_set(&self) -> Option<&FileSet> {
        self.selected_set.and_then(|i| self.file_sets().get(i))
    }

    /// Whether the Build button should be enabled.
    pub fn can_build(&self) -> bool {
        self.phase == AppPhase::Idle && self.selected_file_set().is_some()
    }

    /// Start building the selected set into the scanned directory.
    pub fn start_build(&mut self) {
        if self.phase == AppPhase::Building {
            return;
        }
        let (Some(set), Some(dest)) = (
            self.selected_file_set().cloned(),
            self.scan.as_ref().map(|s| s.directory.clone()),
        ) else {
            self.dialog = Some(Dialog::Error {
                title: "Error".to_string(),
                message: "Please select a file set first".to_string(),
            });
            return;
        };

        tracing::info!("Starting build of {}", set.name);
        self.phase = AppPhase::Building;
        self.build_stage = BuildStage::Idle;
        self.status = format!("Building {}...", set.archive_file_name());
        self.build_handle = Some(ctxbuilder_core::stager::start_build(
            self.stager.clone(),
            set,
            dest,
        ));
    }

    /// Process pending build messages. Called once per frame.
    ///
    /// Returns `true` if the UI should repaint.
    pub fn process_build_messages(&mut self) -> bool {
        let mut repaint = false;

        for _ in 0..MAX_MESSAGES_PER_FRAME {
            let Some(handle) = &self.build_handle else {
                break;
            };
            let msg = match handle.progress_rx.try_recv() {
                Ok(m) => m,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    // The thread died without a verdict.
                    self.finish_build(Err(BuildError::WorkerStopped));
                    return true;
                }
            };
            repaint = true;
            match msg {
                BuildProgress::Stage(stage) => {
                    self.build_stage = stage;
                    if !stage.is_terminal() {
                        self.status = stage.label().to_string();
                    }
                }
                BuildProgress::ConfirmOverwrite(path) => {
                    self.dialog = Some(Dialog::ConfirmOverwrite { path });
                }
                BuildProgress::Finished(result) => {
                    self.finish_build(result);
                    return true;
                }
            }
        }

        repaint
    }

    /// Answer a pending overwrite question.
    pub fn answer_overwrite(&mut self, overwrite: bool) {
        if !matches!(self.dialog, Some(Dialog::ConfirmOverwrite { .. })) {
            return;
        }
        self.dialog = None;
        if let Some(handle) = &self.build_handle {
            handle.answer_overwrite(overwrite);
        }
    }

    /// Close the current dialog. Closing an overwrite question declines it.
    pub fn dismiss_dialog(&mut self) {
        if matches!(self.dialog, Some(Dialog::ConfirmOverwrite { .. })) {
            self.answer_overwrite(false);
        } else {
            self.dialog = None;
        }
    }

    fn finish_build(&mut self, result: Result<BuildOutcome, BuildError>) {
        self.phase = AppPhase::Idle;
        self.build_handle = None;

        match result {
            Ok(BuildOutcome::Created(path)) => {
                self.build_stage = BuildStage::Done;
                self.status = format!("Successfully created {}", display_name(&path));
                self.last_built = Some((path.clone(), Local::now()));
                self.dialog = Some(Dialog::Success { path });
            }
            Ok(BuildOutcome::Cancelled) => {
                self.build_stage = BuildStage::Cancelled;
                self.status = BuildStage::Cancelled.label().to_string();
            }
            Err(e) => {
                tracing::error!("Build failed: {}", e);
                self.build_stage = BuildStage::Failed;
                self.status = BuildStage::Failed.label().to_string();
                self.dialog = Some(Dialog::Error {
                    title: "Error".to_string(),
                    message: error_message(&e),
                });
            }
        }
    }
}

/// User-facing text for a failed build.
pub fn error_message(err: &BuildError) -> String {
    match err {
        BuildError::CompressorFailed { output, .. } => {
            format!("Failed to create CAB file:\n{output}")
        }
        BuildError::CompressorNotFound { .. } => {
            "makecab.exe not found. Please ensure you're running this on Windows.".to_string()
        }
        other => format!("An error occurred:\n{other}"),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
