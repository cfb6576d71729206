//! Error type for faults that abort a run.
//!
//! Assertion failures are never errors; they are recorded in the result tree.
//! A [`LightestError`] means a config or data unit could not do its job, or the
//! report could not be written, and the pipeline stops at that point.

use miette::Diagnostic;
use thiserror::Error;

use crate::registry::Phase;

/// Boxed error returned by user code inside a unit.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Unified error type for every way a run can be aborted.
#[derive(Debug, Error, Diagnostic)]
pub enum LightestError {
    #[error("{phase} unit '{name}' failed")]
    #[diagnostic(
        code(lightest::unit),
        help("a unit that returns an error aborts the whole run")
    )]
    Unit {
        phase: Phase,
        name: String,
        #[source]
        source: BoxError,
    },

    #[error("invalid arguments: {0}")]
    #[diagnostic(code(lightest::args))]
    Args(#[from] clap::Error),

    #[error("I/O error: {0}")]
    #[diagnostic(code(lightest::io))]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    #[diagnostic(code(lightest::json))]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    #[diagnostic(code(lightest::custom))]
    Custom(String),
}

impl LightestError {
    /// Shorthand for a plain message error raised from a unit.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    pub(crate) fn in_unit(self, phase: Phase, name: &str) -> Self {
        match self {
            // Already attributed by a nested run.
            err @ Self::Unit { .. } => err,
            other => Self::Unit {
                phase,
                name: name.to_owned(),
                source: Box::new(other),
            },
        }
    }
}
