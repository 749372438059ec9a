use thiserror::Error;

/// Errors the engine can surface. The animation itself is infallible once
/// running; everything here is caught at initialization or reconfiguration.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The expected drawing surface is absent. Fatal to this feature only:
    /// the caller must not start the loop, and must not let this escape
    /// into the host page.
    #[error("drawing surface unavailable: {0}")]
    MissingSurface(String),

    /// A configuration constant is malformed. Rejected at construction
    /// time, never recovered at render time.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A configuration payload could not be parsed.
    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
