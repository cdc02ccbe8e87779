pub mod components;
pub mod dom;
pub mod format;
pub mod theme;
