/// Stager module: turns one [`FileSet`] into `<name>.ctx`.
///
/// A build copies the three components into a private staging directory
/// under their fixed member names, writes a makecab directive, runs the
/// compressor there and publishes the resulting cabinet next to the
/// sources. The staging directory is a [`tempfile::TempDir`], so it is
/// removed on every exit path, including early returns through `?`.
pub mod compressor;
pub mod directive;
pub mod progress;
pub mod worker;

pub use compressor::{Compressor, MakeCab, DEFAULT_PROGRAM};
pub use directive::{CabDirective, COMPRESSION_TYPE, DIRECTIVE_FILE};
pub use progress::{BuildProgress, BuildStage};
pub use worker::{start_build, BuildHandle};

use crate::config::BuildConfig;
use crate::error::BuildError;
use crate::model::{ComponentKind, FileSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::{NamedTempFile, TempDir};
use tracing::{info, warn};

/// How a build ended when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// The archive was written to this path.
    Created(PathBuf),
    /// An archive already existed and the user kept it.
    Cancelled,
}

/// Receives stage changes and answers the overwrite question.
pub trait BuildObserver {
    fn stage(&mut self, _stage: BuildStage) {}

    /// Called when `path` already exists. Returning `false` cancels the
    /// build and leaves the existing file untouched.
    fn confirm_overwrite(&mut self, path: &Path) -> bool;
}

/// Builds archives with a given compressor.
#[derive(Clone)]
pub struct Stager {
    compressor: Arc<dyn Compressor>,
    staging_root: Option<PathBuf>,
}

impl Stager {
    pub fn new(compressor: Arc<dyn Compressor>) -> Self {
        Self {
            compressor,
            staging_root: None,
        }
    }

    /// A stager running the configured makecab.
    pub fn from_config(config: &BuildConfig) -> Self {
        Self {
            compressor: Arc::new(config.compressor()),
            staging_root: config.staging_root.clone(),
        }
    }

    pub fn with_staging_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.staging_root = Some(root.into());
        self
    }

    /// Build `<set.name>.ctx` inside `destination`.
    ///
    /// Reports `Failed` to the observer before returning an error. Nothing
    /// is written to `destination` unless the compressor succeeded.
    pub fn build(
        &self,
        set: &FileSet,
        destination: &Path,
        observer: &mut dyn BuildObserver,
    ) -> Result<BuildOutcome, BuildError> {
        info!("Building {} into {}", set.archive_file_name(), destination.display());
        let result = self.run(set, destination, observer);
        match &result {
            Ok(BuildOutcome::Created(path)) => {
                info!("Created {}", path.display());
                observer.stage(BuildStage::Done);
            }
            Ok(BuildOutcome::Cancelled) => {
                info!("Build of {} cancelled by user", set.name);
                observer.stage(BuildStage::Cancelled);
            }
            Err(e) => {
                warn!("Build of {} failed: {}", set.name, e);
                observer.stage(BuildStage::Failed);
            }
        }
        result
    }

    fn run(
        &self,
        set: &FileSet,
        destination: &Path,
        observer: &mut dyn BuildObserver,
    ) -> Result<BuildOutcome, BuildError> {
        observer.stage(BuildStage::Staging);
        let staging = self.create_staging_dir()?;
        stage_components(set, staging.path())?;

        let directive_path = staging.path().join(DIRECTIVE_FILE);
        let directive = CabDirective::new(set.cabinet_file_name());
        fs::write(&directive_path, directive.render()).map_err(|source| BuildError::Stage {
            path: directive_path.clone(),
            source,
        })?;

        observer.stage(BuildStage::Compressing);
        self.compressor
            .compress(staging.path(), Path::new(DIRECTIVE_FILE))?;

        let cabinet = staging.path().join(set.cabinet_file_name());
        if !cabinet.is_file() {
            return Err(BuildError::CabinetMissing { path: cabinet });
        }

        observer.stage(BuildStage::Finalizing);
        let target = destination.join(set.archive_file_name());
        if target.exists() && !observer.confirm_overwrite(&target) {
            return Ok(BuildOutcome::Cancelled);
        }
        publish(&cabinet, destination, &target)?;

        if let Err(e) = staging.close() {
            warn!("Could not remove staging directory: {}", e);
        }
        Ok(BuildOutcome::Created(target))
    }

    fn create_staging_dir(&self) -> Result<TempDir, BuildError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("ctxbuilder-");
        let created = match &self.staging_root {
            Some(root) => builder.tempdir_in(root),
            None => builder.tempdir(),
        };
        created.map_err(|source| BuildError::Stage {
            path: self.staging_root.clone().unwrap_or_else(std::env::temp_dir),
            source,
        })
    }
}

/// Copy each component into `dir` under its canonical member name.
fn stage_components(set: &FileSet, dir: &Path) -> Result<(), BuildError> {
    for kind in ComponentKind::ALL {
        let source = set.path(kind);
        fs::copy(source, dir.join(kind.member_name())).map_err(|e| BuildError::Stage {
            path: source.to_path_buf(),
            source: e,
        })?;
    }
    Ok(())
}

/// Copy the cabinet into a temp file beside `target`, then rename it over
/// `target`. A failure at any point leaves `target` as it was.
fn publish(cabinet: &Path, destination: &Path, target: &Path) -> Result<(), BuildError> {
    let finalize = |source: io::Error| BuildError::Finalize {
        path: target.to_path_buf(),
        source,
    };

    let mut tmp = NamedTempFile::new_in(destination).map_err(finalize)?;
    let mut src = fs::File::open(cabinet).map_err(finalize)?;
    io::copy(&mut src, tmp.as_file_mut()).map_err(finalize)?;
    tmp.as_file().sync_all().map_err(finalize)?;
    tmp.persist(target).map_err(|e| finalize(e.error))?;
    Ok(())
}
