/// End-to-end tests for `AppState` -- the GUI application state machine.
///
/// These tests exercise the real scan and build paths of `AppState` without
/// spinning up an egui window. Builds run on the real worker thread; only
/// the external compressor is replaced, so the tests run on any platform.
///
/// **Scope:**
///   - Directory selection, scanning and rescanning
///   - Set selection and Build button enablement
///   - Build lifecycle (success, compressor failure, crashed worker,
///     overwrite yes/no)
///   - Error dialogs and their user-facing text
use ctxbuilder_core::stager::{BuildStage, Compressor, Stager};
use ctxbuilder_core::BuildError;
use ctxbuilder_gui::state::{error_message, AppPhase, AppState, Dialog};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tempfile::TempDir;

// ── Fake compressors ──────────────────────────────────────────────────────────

/// Writes the cabinet named in the directive with a fixed body.
struct FakeCab;

impl Compressor for FakeCab {
    fn compress(&self, work_dir: &Path, directive: &Path) -> Result<(), BuildError> {
        let text = fs::read_to_string(work_dir.join(directive)).unwrap();
        let cab_name = text
            .lines()
            .find_map(|l| l.strip_prefix(".Set CabinetNameTemplate="))
            .unwrap();
        fs::write(work_dir.join(cab_name), b"MSCF new").unwrap();
        Ok(())
    }
}

struct FailingCab;

impl Compressor for FailingCab {
    fn compress(&self, _work_dir: &Path, _directive: &Path) -> Result<(), BuildError> {
        Err(BuildError::CompressorFailed {
            status: "exit code: 1".into(),
            output: "ERROR: disk full".into(),
        })
    }
}

/// Panics mid-build, taking the worker thread down with it.
struct CrashingCab;

impl Compressor for CrashingCab {
    fn compress(&self, _work_dir: &Path, _directive: &Path) -> Result<(), BuildError> {
        panic!("compressor crashed");
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A directory holding one complete set (`Leopard`) and one partial set.
fn make_components() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Leopard.xml"), "<app/>").unwrap();
    fs::write(tmp.path().join("leopard.TXT"), "elements").unwrap();
    fs::write(tmp.path().join("LEOPARD.dat"), "sightings").unwrap();
    fs::write(tmp.path().join("Lion.xml"), "<app/>").unwrap();
    tmp
}

fn state_with(compressor: impl Compressor + 'static) -> AppState {
    AppState::with_stager(Stager::new(Arc::new(compressor)))
}

/// Pump `process_build_messages()` until `done` holds or the deadline expires.
fn pump_until(state: &mut AppState, done: impl Fn(&AppState) -> bool) {
    let deadline = Instant::now() + Duration::from_secs(30);
    while !done(state) {
        assert!(
            Instant::now() < deadline,
            "build did not reach the expected state within 30 seconds"
        );
        state.process_build_messages();
        std::thread::sleep(Duration::from_millis(5));
    }
}

fn pump_until_idle(state: &mut AppState) {
    pump_until(state, |s| s.phase == AppPhase::Idle);
}

fn pump_until_overwrite_prompt(state: &mut AppState) {
    pump_until(state, |s| {
        matches!(s.dialog, Some(Dialog::ConfirmOverwrite { .. }))
    });
}

// ── Initial state ─────────────────────────────────────────────────────────────

#[test]
fn initial_state_waits_for_directory() {
    let state = state_with(FakeCab);
    assert_eq!(state.phase, AppPhase::Idle);
    assert_eq!(state.status, "Select a directory to begin");
    assert!(state.file_sets().is_empty());
    assert!(!state.can_build());
    assert!(!state.is_blocked());
}

// ── Scanning ──────────────────────────────────────────────────────────────────

#[test]
fn set_directory_scans_immediately() {
    let tmp = make_components();
    let mut state = state_with(FakeCab);
    state.set_directory(tmp.path().to_path_buf());

    let sets = state.file_sets();
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].name, "Leopard");
    assert_eq!(state.scan.as_ref().unwrap().incomplete, 1);
    assert!(state.status.contains("Found 1 file set"));
}

#[test]
fn empty_directory_reports_no_sets() {
    let tmp = TempDir::new().unwrap();
    let mut state = state_with(FakeCab);
    state.set_directory(tmp.path().to_path_buf());

    assert!(state.file_sets().is_empty());
    assert_eq!(state.status, "No complete file sets found in this directory");
    assert!(state.dialog.is_none());
}

#[test]
fn missing_directory_shows_error_dialog() {
    let tmp = TempDir::new().unwrap();
    let mut state = state_with(FakeCab);
    state.set_directory(tmp.path().join("gone"));

    assert!(state.scan.is_none());
    assert!(matches!(state.dialog, Some(Dialog::Error { .. })));
    assert!(state.is_blocked());

    state.dismiss_dialog();
    assert!(!state.is_blocked());
}

#[test]
fn rescan_picks_up_new_files_and_clears_selection() {
    let tmp = make_components();
    let mut state = state_with(FakeCab);
    state.set_directory(tmp.path().to_path_buf());
    state.select_set(0);
    assert!(state.can_build());

    fs::write(tmp.path().join("Lion.txt"), "e").unwrap();
    fs::write(tmp.path().join("Lion.dat"), "s").unwrap();
    state.rescan();

    assert_eq!(state.file_sets().len(), 2);
    assert_eq!(state.selected_set, None);
    assert!(!state.can_build());
}

// ── Selection ─────────────────────────────────────────────────────────────────

#[test]
fn select_set_enables_build() {
    let tmp = make_components();
    let mut state = state_with(FakeCab);
    state.set_directory(tmp.path().to_path_buf());

    state.select_set(0);
    assert_eq!(state.selected_file_set().unwrap().name, "Leopard");
    assert_eq!(state.status, "Selected: Leopard");
    assert!(state.can_build());
}

#[test]
fn select_set_out_of_range_is_ignored() {
    let tmp = make_components();
    let mut state = state_with(FakeCab);
    state.set_directory(tmp.path().to_path_buf());

    state.select_set(5);
    assert_eq!(state.selected_set, None);
}

#[test]
fn start_build_without_selection_shows_error() {
    let mut state = state_with(FakeCab);
    state.start_build();

    assert_eq!(state.phase, AppPhase::Idle);
    match &state.dialog {
        Some(Dialog::Error { message, .. }) => {
            assert_eq!(message, "Please select a file set first")
        }
        other => panic!("expected error dialog, got {other:?}"),
    }
}

// ── Build lifecycle ───────────────────────────────────────────────────────────

#[test]
fn build_success_shows_dialog_and_records_last_build() {
    let tmp = make_components();
    let mut state = state_with(FakeCab);
    state.set_directory(tmp.path().to_path_buf());
    state.select_set(0);

    state.start_build();
    assert_eq!(state.phase, AppPhase::Building);
    assert!(!state.can_build());

    pump_until_idle(&mut state);

    let ctx = tmp.path().join("Leopard.ctx");
    assert_eq!(fs::read(&ctx).unwrap(), b"MSCF new");
    assert_eq!(state.build_stage, BuildStage::Done);
    assert_eq!(state.status, "Successfully created Leopard.ctx");
    assert_eq!(state.dialog, Some(Dialog::Success { path: ctx.clone() }));
    assert_eq!(state.last_built.as_ref().map(|(p, _)| p), Some(&ctx));
    assert!(state.build_handle.is_none());
}

#[test]
fn compressor_failure_shows_error_dialog() {
    let tmp = make_components();
    let mut state = state_with(FailingCab);
    state.set_directory(tmp.path().to_path_buf());
    state.select_set(0);

    state.start_build();
    pump_until_idle(&mut state);

    assert_eq!(state.build_stage, BuildStage::Failed);
    assert_eq!(state.status, "Error occurred during build");
    match &state.dialog {
        Some(Dialog::Error { message, .. }) => {
            assert!(message.starts_with("Failed to create CAB file"));
            assert!(message.contains("disk full"));
        }
        other => panic!("expected error dialog, got {other:?}"),
    }
    assert!(!tmp.path().join("Leopard.ctx").exists());
    assert!(state.last_built.is_none());
}

#[test]
fn declining_overwrite_keeps_existing_file() {
    let tmp = make_components();
    let ctx = tmp.path().join("Leopard.ctx");
    fs::write(&ctx, b"old archive").unwrap();

    let mut state = state_with(FakeCab);
    state.set_directory(tmp.path().to_path_buf());
    state.select_set(0);
    state.start_build();

    pump_until_overwrite_prompt(&mut state);
    assert_eq!(state.phase, AppPhase::Building);
    assert!(state.is_blocked());

    state.answer_overwrite(false);
    pump_until_idle(&mut state);

    assert_eq!(state.build_stage, BuildStage::Cancelled);
    assert_eq!(state.status, "Operation cancelled");
    assert!(state.dialog.is_none());
    assert_eq!(fs::read(&ctx).unwrap(), b"old archive");
}

#[test]
fn accepting_overwrite_replaces_file() {
    let tmp = make_components();
    let ctx = tmp.path().join("Leopard.ctx");
    fs::write(&ctx, b"old archive").unwrap();

    let mut state = state_with(FakeCab);
    state.set_directory(tmp.path().to_path_buf());
    state.select_set(0);
    state.start_build();

    pump_until_overwrite_prompt(&mut state);
    state.answer_overwrite(true);
    pump_until_idle(&mut state);

    assert_eq!(state.build_stage, BuildStage::Done);
    assert_eq!(fs::read(&ctx).unwrap(), b"MSCF new");
}

#[test]
fn dismissing_overwrite_prompt_declines() {
    let tmp = make_components();
    let ctx = tmp.path().join("Leopard.ctx");
    fs::write(&ctx, b"old archive").unwrap();

    let mut state = state_with(FakeCab);
    state.set_directory(tmp.path().to_path_buf());
    state.select_set(0);
    state.start_build();

    pump_until_overwrite_prompt(&mut state);
    state.dismiss_dialog();
    pump_until_idle(&mut state);

    assert_eq!(state.build_stage, BuildStage::Cancelled);
    assert_eq!(fs::read(&ctx).unwrap(), b"old archive");
}

#[test]
fn scanning_and_selection_are_locked_while_building() {
    let tmp = make_components();
    let ctx = tmp.path().join("Leopard.ctx");
    fs::write(&ctx, b"old archive").unwrap();

    let mut state = state_with(FakeCab);
    state.set_directory(tmp.path().to_path_buf());
    state.select_set(0);
    state.start_build();

    // Held at the overwrite prompt, so the build is guaranteed to be live.
    pump_until_overwrite_prompt(&mut state);
    let other = TempDir::new().unwrap();
    state.set_directory(other.path().to_path_buf());
    assert_eq!(state.directory.as_deref(), Some(tmp.path()));
    assert_eq!(state.selected_set, Some(0));

    state.answer_overwrite(false);
    pump_until_idle(&mut state);
}

#[test]
fn crashed_worker_returns_to_idle_and_allows_retry() {
    let tmp = make_components();
    let mut state = state_with(CrashingCab);
    state.set_directory(tmp.path().to_path_buf());
    state.select_set(0);

    state.start_build();
    pump_until_idle(&mut state);

    assert_eq!(state.build_stage, BuildStage::Failed);
    assert!(state.build_handle.is_none());
    match &state.dialog {
        Some(Dialog::Error { message, .. }) => {
            assert!(message.starts_with("An error occurred:\n"));
            assert!(message.contains("stopped unexpectedly"));
        }
        other => panic!("expected error dialog, got {other:?}"),
    }
    assert!(!tmp.path().join("Leopard.ctx").exists());

    state.dismiss_dialog();
    assert_eq!(state.selected_set, Some(0));
    assert!(state.can_build());
}

// ── Error text ────────────────────────────────────────────────────────────────

#[test]
fn error_message_for_missing_makecab() {
    let msg = error_message(&BuildError::CompressorNotFound {
        program: "makecab".into(),
    });
    assert_eq!(
        msg,
        "makecab.exe not found. Please ensure you're running this on Windows."
    );
}

#[test]
fn error_message_for_other_errors_is_generic() {
    let msg = error_message(&BuildError::WorkerStopped);
    assert!(msg.starts_with("An error occurred:\n"));
}
