/// CtxBuilder Core: scanning, matching and archive staging.
///
/// This crate contains all business logic with zero UI dependencies.
///
/// # Modules
///
/// - [`model`]: component kinds and the matched [`model::FileSet`].
/// - [`scanner`]: directory listing and case-insensitive set matching.
/// - [`stager`]: staging, makecab invocation and `.ctx` publication,
///   plus the background build thread.
/// - [`config`]: build defaults.
/// - [`platform`]: platform support checks.
pub mod config;
pub mod error;
pub mod model;
pub mod platform;
pub mod scanner;
pub mod stager;

pub use config::BuildConfig;
pub use error::{BuildError, ScanError};
