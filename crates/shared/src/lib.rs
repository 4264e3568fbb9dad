//! Types shared by both demo windows: window lifecycle, settings, errors and logging setup.

pub mod domain;
pub mod error;
pub mod settings;
pub mod telemetry;

pub use domain::{Rgb, WindowPhase};
pub use error::DemoError;
pub use settings::Settings;
