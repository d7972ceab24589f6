//! Panel interface error types

use beosound_transport::{DecodeError, TransportError};
use thiserror::Error;

/// Errors from panel operations
#[derive(Error, Debug)]
pub enum PanelError {
    /// Transport layer error (includes failed status transmissions)
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Input report could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Event sink rejected an event set
    #[error("Event sink error: {0}")]
    Sink(String),

    /// Device not found
    #[error("Device not found: {0}")]
    NotFound(String),
}
