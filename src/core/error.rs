use thiserror::Error;

/// Errors that can occur while loading rates or running a calculator.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FiscalError {
    /// A calculator input was out of range (non-positive amount, bad month, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Medical leave requested with fewer contribution months than required.
    #[error("insufficient contributions: {found} months with income, {required} required")]
    InsufficientContributions { required: u32, found: u32 },

    /// The rates table failed validation.
    #[error("rules error: {0}")]
    Rules(String),

    /// The rates file could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// A code (medical certificate, vehicle type, company size) was not recognised.
    #[error("unknown {kind} code '{code}'")]
    UnknownCode { kind: &'static str, code: String },

    /// A result could not be serialized for output.
    #[error("output error: {0}")]
    Output(String),
}

/// A single rates-table validation failure with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "pfa.cass_rate").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
