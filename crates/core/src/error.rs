use thiserror::Error;

/// Failures the engine can hand back to its callers.
///
/// The engine never logs and never prints; presentation (exit codes, HTTP
/// status codes) is the adapter's job.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The requested language code has no profile. The whole batch fails
    /// rather than silently assuming a default.
    #[error("unknown language code: {0}")]
    UnknownLanguage(String),
}
