//! Error types for roadmap operations.
//!
//! The layout pipeline itself is total over malformed or partial input and
//! never fails; errors only arise at the boundary where payloads are
//! decoded and files are read or written.

use std::io;

use thiserror::Error;

/// The main error type for roadmap operations.
#[derive(Debug, Error)]
pub enum RoadmapError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Payload error: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
