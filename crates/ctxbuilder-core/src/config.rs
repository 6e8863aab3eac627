/// Build configuration.
///
/// CtxBuilder persists nothing and reads no environment; these are code
/// defaults that a frontend may override before starting a build.
use crate::stager::{MakeCab, DEFAULT_PROGRAM};
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct BuildConfig {
    /// Compressor executable, resolved through `PATH` when not absolute.
    pub program: PathBuf,
    /// Parent directory for staging areas. `None` uses the system temp dir.
    pub staging_root: Option<PathBuf>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_PROGRAM),
            staging_root: None,
        }
    }
}

impl BuildConfig {
    /// The production compressor for this configuration.
    pub fn compressor(&self) -> MakeCab {
        MakeCab::new(self.program.clone())
    }
}
