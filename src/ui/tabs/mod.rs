pub mod predict;
pub mod settings;
