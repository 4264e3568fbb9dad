//! UI layer: the app shell and the static widget layout it hosts.

pub mod app;
pub mod layout;

pub use app::{window_defaults, WidgetDemoApp, WINDOW_TITLE};
