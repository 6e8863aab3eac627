/// UI panels for CtxBuilder.
pub mod dialogs;
pub mod directory_panel;
pub mod sets_panel;
