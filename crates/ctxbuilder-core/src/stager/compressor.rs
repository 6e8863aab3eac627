/// The external cabinet compressor.
///
/// Production builds shell out to `makecab.exe`. The [`Compressor`] trait is
/// the seam that lets tests run the whole build pipeline on any OS.
use crate::error::BuildError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::{debug, error};

/// Program name used when no explicit path is configured.
pub const DEFAULT_PROGRAM: &str = "makecab";

/// Something that turns a directive file into a cabinet.
///
/// Implementations run with `work_dir` as their working directory; the
/// directive's `CabinetNameTemplate` names the file they must leave there.
pub trait Compressor: Send + Sync {
    fn compress(&self, work_dir: &Path, directive: &Path) -> Result<(), BuildError>;
}

/// Runs `makecab /F <directive>` and waits for it, with no timeout.
#[derive(Clone, Debug)]
pub struct MakeCab {
    program: PathBuf,
}

impl MakeCab {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for MakeCab {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl Compressor for MakeCab {
    fn compress(&self, work_dir: &Path, directive: &Path) -> Result<(), BuildError> {
        let program = self.program.display().to_string();
        debug!("Running {} /F {} in {}", program, directive.display(), work_dir.display());

        let mut cmd = Command::new(&self.program);
        cmd.arg("/F").arg(directive).current_dir(work_dir);

        // Keep a console window from flashing up behind the GUI.
        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            const CREATE_NO_WINDOW: u32 = 0x0800_0000;
            cmd.creation_flags(CREATE_NO_WINDOW);
        }

        let output = match cmd.output() {
            Ok(o) => o,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                error!("{} not found", program);
                return Err(BuildError::CompressorNotFound { program });
            }
            Err(source) => return Err(BuildError::CompressorSpawn { program, source }),
        };

        if output.status.success() {
            return Ok(());
        }

        let diagnostics = diagnostics(&output);
        error!("{} failed with {}: {}", program, output.status, diagnostics);
        Err(BuildError::CompressorFailed {
            status: output.status.to_string(),
            output: diagnostics,
        })
    }
}

/// makecab reports errors on stdout; prefer stderr when anything is there.
fn diagnostics(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        return stderr.trim().to_string();
    }
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
