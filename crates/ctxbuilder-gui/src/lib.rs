/// CtxBuilder GUI -- egui-based desktop frontend.
///
/// This crate contains all UI code. Scanning, staging and compression live
/// in `ctxbuilder-core`.
pub mod app;
pub mod icon;
pub mod panels;
pub mod state;
pub mod widgets;

pub use app::{CtxBuilderApp, CtxBuilderState};
