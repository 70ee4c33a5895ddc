//! Error types for the few host operations that can fail.
//!
//! Nothing here is ever surfaced to the visitor. Storage failures degrade the
//! theme preference to "resets on reload"; DOM binding failures stop wiring.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of the session-scoped key/value store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// Storage is disabled, missing, or blocked by a security restriction.
    #[error("session storage unavailable: {0}")]
    Unavailable(String),
    #[error("session storage read failed: {0}")]
    Read(String),
    /// Typically a quota error.
    #[error("session storage write failed: {0}")]
    Write(String),
}

/// Failure to bind the controller to the live document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("no document on window")]
    NoDocument,
    #[error("no <body> element")]
    NoBody,
    #[error("required element #{0} not found")]
    MissingElement(String),
    #[error("invalid selector {selector:?}: {message}")]
    BadSelector { selector: String, message: String },
}
