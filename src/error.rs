use thiserror::Error;

/// Errors raised while setting up or driving the controller.
///
/// Analysis failures reported by the backend are not represented here: they
/// are data (`ErrorInfo`) stored in the failing mode's state.
#[derive(Error, Debug)]
pub enum ControllerError {
    /// Failed to build the HTTP client
    #[error("Failed to build HTTP client: {0}")]
    ClientError(#[from] reqwest::Error),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Scale factor outside the supported set
    #[error("Unsupported scale factor: {0} (expected one of 0.5, 1, 2, 3, 4)")]
    InvalidScale(f64),

    /// Unknown mode name
    #[error("Unknown mode '{0}' (expected 'cook' or 'nutrition')")]
    InvalidMode(String),

    /// Missing or malformed command line input
    #[error("Usage error: {0}")]
    UsageError(String),
}
