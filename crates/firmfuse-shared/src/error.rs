//! Error types for firmfuse.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FirmfuseError {
    #[error("Unrecognized field label: {0}")]
    UnknownField(String),
}
