//! Orchestration errors
//!
//! Every variant is terminal for the request that produced it; none is
//! retried and none crashes the serving process.

use std::fmt;
use thiserror::Error;

/// Which external invocation a timeout or launch failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The compile step
    Compile,
    /// The run step
    Run,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Compile => write!(f, "compile"),
            Phase::Run => write!(f, "run"),
        }
    }
}

#[derive(Debug, Error)]
pub enum SimError {
    #[error("toolchain unavailable: {missing} not found")]
    ToolchainUnavailable { missing: &'static str },

    #[error("failed to prepare simulation workspace: {0}")]
    Workspace(#[from] std::io::Error),

    #[error("compilation failed: {diagnostics}")]
    CompileFailure { diagnostics: String },

    #[error("{phase} step timed out")]
    Timeout { phase: Phase },

    #[error("failed to launch {phase} tool: {source}")]
    Launch {
        phase: Phase,
        #[source]
        source: std::io::Error,
    },

    #[error("{reason}. Output: {excerpt}")]
    TraceParse { reason: String, excerpt: String },
}
