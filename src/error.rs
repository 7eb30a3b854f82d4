use std::fmt;

/// Errors that can end the simulation
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// SDL context, window, canvas or event pump could not be created
    Init(String),

    /// Start-time parameters make no sense (zero-sized window, oversized NPCs, ...)
    InvalidConfig(String),

    /// A draw call failed while the loop was running
    Render(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimError::Init(reason) => {
                write!(f, "Failed to initialize display: {}", reason)
            }
            SimError::InvalidConfig(reason) => {
                write!(f, "Invalid config: {}", reason)
            }
            SimError::Render(reason) => {
                write!(f, "Render failed: {}", reason)
            }
        }
    }
}

impl std::error::Error for SimError {}

impl From<SimError> for String {
    fn from(error: SimError) -> Self {
        error.to_string()
    }
}
