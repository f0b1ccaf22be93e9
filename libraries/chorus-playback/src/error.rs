//! Error types for the playback engine

use chorus_core::TrackId;
use thiserror::Error;

/// Playback errors
///
/// Only synchronous precondition violations surface here. Asynchronous
/// decode/network failures arrive as [`crate::OutputEvent::Error`] and fold
/// into the read model instead of unwinding a caller.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The requested track is not part of the supplied queue context
    #[error("track {track_id} is not in the supplied queue context")]
    InvalidQueueContext {
        /// Identifier of the track that was requested
        track_id: TrackId,
    },

    /// Audio output transport failure (reported by the adapter)
    #[error("audio output error: {0}")]
    Output(String),
}

impl PlaybackError {
    /// Create an output transport error
    pub fn output(msg: impl Into<String>) -> Self {
        Self::Output(msg.into())
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
