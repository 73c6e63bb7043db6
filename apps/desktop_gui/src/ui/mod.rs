//! UI layer for the desktop GUI: app shell, page panels, widgets, markdown view and theme.

pub mod app;
pub mod markdown;
pub mod panels;
pub mod theme;
pub mod widgets;

pub use app::MicrogenApp;
