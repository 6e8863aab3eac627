/// Error types for scanning and building.
use std::path::PathBuf;
use thiserror::Error;

/// The selected directory could not be listed.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A build that could not produce its archive.
///
/// Declining an overwrite is not an error; see
/// [`BuildOutcome::Cancelled`](crate::stager::BuildOutcome::Cancelled).
#[derive(Debug, Error)]
pub enum BuildError {
    /// Creating the staging area, copying a component or writing the
    /// directive failed.
    #[error("failed to stage {}: {source}", .path.display())]
    Stage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} not found. CtxBuilder needs the Windows makecab tool on PATH")]
    CompressorNotFound { program: String },

    #[error("failed to start {program}: {source}")]
    CompressorSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Nonzero exit. `status` is the rendered exit status, `output` the
    /// tool's diagnostics.
    #[error("failed to create CAB file ({status}):\n{output}")]
    CompressorFailed { status: String, output: String },

    /// The compressor exited cleanly but left no cabinet behind.
    #[error("compressor reported success but {} was not produced", .path.display())]
    CabinetMissing { path: PathBuf },

    #[error("failed to write {}: {source}", .path.display())]
    Finalize {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The build thread ended without reporting a result.
    #[error("the build stopped unexpectedly")]
    WorkerStopped,
}
