/// Build progress reporting: lightweight messages sent from the build
/// thread to the UI thread via a crossbeam channel.
use super::BuildOutcome;
use crate::error::BuildError;
use std::path::PathBuf;

/// Where a single build invocation currently is.
///
/// `Idle → Staging → Compressing → Finalizing → {Done | Failed | Cancelled}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStage {
    Idle,
    /// Copying components into the staging area under their member names.
    Staging,
    /// Waiting on the external compressor.
    Compressing,
    /// Writing `<name>.ctx` into the destination.
    Finalizing,
    Done,
    Failed,
    /// The user declined to overwrite an existing archive.
    Cancelled,
}

impl BuildStage {
    /// Status line shown while the stage is active.
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Ready",
            Self::Staging => "Copying and renaming files...",
            Self::Compressing => "Creating CAB file...",
            Self::Finalizing => "Creating CTX file...",
            Self::Done => "Build complete",
            Self::Failed => "Error occurred during build",
            Self::Cancelled => "Operation cancelled",
        }
    }

    /// `true` once the build can make no further progress.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed | Self::Cancelled)
    }
}

/// Messages sent from the build thread to the UI.
#[derive(Debug)]
pub enum BuildProgress {
    /// The build entered a new stage.
    Stage(BuildStage),
    /// The archive already exists. The build thread blocks until the UI
    /// answers through [`BuildHandle::answer_overwrite`](super::BuildHandle::answer_overwrite).
    ConfirmOverwrite(PathBuf),
    /// Final result. Always the last message of a build.
    Finished(Result<BuildOutcome, BuildError>),
}
