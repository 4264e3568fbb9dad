use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("invalid setting {name}: {reason}")]
    InvalidSetting { name: &'static str, reason: String },
    #[error("failed to initialize logging: {0}")]
    Telemetry(String),
}

impl DemoError {
    pub fn invalid_setting(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            name,
            reason: reason.into(),
        }
    }
}
