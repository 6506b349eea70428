use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Conditions under which the engine cannot produce a rectangle set.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("unsupported slot count: {count} (at most 4 regions can be laid out)")]
    UnsupportedSlotCount { count: usize },

    #[error("degenerate container: {width}x{height}")]
    DegenerateContainer { width: f64, height: f64 },
}

#[derive(Debug, thiserror::Error)]
pub enum QuadsplitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
