/// UI widgets for CtxBuilder.

pub mod status_bar;
pub mod toolbar;
