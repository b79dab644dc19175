use thiserror::Error;

/// Errors raised by the style accessors of an [`ItemStyle`](crate::ItemStyle).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("Unavailable style name: '{name}'")]
    UnavailableStyleName { name: String },

    #[error("Unavailable value '{value}' for style '{name}', allowed: {}", allowed.join(", "))]
    UnavailableStyleValue {
        name: String,
        value: String,
        allowed: Vec<String>,
    },

    #[error("Invalid value for style '{name}': expected {expected}")]
    InvalidValueType {
        name: String,
        expected: &'static str,
    },
}
