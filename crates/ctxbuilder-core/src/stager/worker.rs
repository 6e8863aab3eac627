/// Background build thread.
///
/// Runs one [`Stager::build`] off the UI thread and forwards its stage
/// changes over a channel. Only the overwrite question travels the other
/// way; the build thread blocks on it until the UI answers.
use super::progress::{BuildProgress, BuildStage};
use super::{BuildObserver, Stager};
use crate::model::FileSet;
use crossbeam_channel::{Receiver, Sender};
use std::path::{Path, PathBuf};
use std::thread;
use tracing::debug;

/// Maximum number of progress messages that may queue up in the channel.
///
/// A build sends at most six messages, so the worker never blocks on a
/// slow UI.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 16;

/// Handle to a running or finished build.
pub struct BuildHandle {
    /// Receiver for progress updates from the build thread.
    pub progress_rx: Receiver<BuildProgress>,
    answer_tx: Sender<bool>,
    _thread: Option<thread::JoinHandle<()>>,
}

impl BuildHandle {
    /// Reply to a [`BuildProgress::ConfirmOverwrite`] request.
    pub fn answer_overwrite(&self, overwrite: bool) {
        // The worker may already be gone if the UI answers twice.
        let _ = self.answer_tx.send(overwrite);
    }
}

/// Forwards observer calls over the channel pair.
struct ChannelObserver {
    progress_tx: Sender<BuildProgress>,
    answer_rx: Receiver<bool>,
}

impl BuildObserver for ChannelObserver {
    fn stage(&mut self, stage: BuildStage) {
        let _ = self.progress_tx.send(BuildProgress::Stage(stage));
    }

    fn confirm_overwrite(&mut self, path: &Path) -> bool {
        if self
            .progress_tx
            .send(BuildProgress::ConfirmOverwrite(path.to_path_buf()))
            .is_err()
        {
            return false;
        }
        // A dropped handle means nobody can say yes.
        self.answer_rx.recv().unwrap_or(false)
    }
}

/// Start building `set` into `destination` on a background thread.
pub fn start_build(stager: Stager, set: FileSet, destination: PathBuf) -> BuildHandle {
    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<BuildProgress>(PROGRESS_CHANNEL_CAPACITY);
    let (answer_tx, answer_rx) = crossbeam_channel::bounded::<bool>(1);

    let thread = thread::Builder::new()
        .name("ctxbuilder-build".into())
        .spawn(move || {
            debug!("Build thread started for {}", set.name);
            let mut observer = ChannelObserver {
                progress_tx,
                answer_rx,
            };
            let result = stager.build(&set, &destination, &mut observer);
            let _ = observer.progress_tx.send(BuildProgress::Finished(result));
        })
        .expect("failed to spawn build thread");

    BuildHandle {
        progress_rx,
        answer_tx,
        _thread: Some(thread),
    }
}
