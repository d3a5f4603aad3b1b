// src/error.rs

/// Error type for boardvis setup operations.
///
/// Per-frame work (animation updates, selection) never fails; errors only
/// come from loading config and building animations.
#[derive(Debug, thiserror::Error)]
pub enum BoardvisError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed config file
    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    /// A combo animation was built without legs
    #[error("Combo animation {0} needs at least one leg")]
    EmptyCombo(u32),
}

/// Result type for boardvis operations
pub type Result<T> = std::result::Result<T, BoardvisError>;
