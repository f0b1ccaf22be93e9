//! Core types for the playback engine

use chorus_core::Track;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Playback status
///
/// Exactly one session-wide status exists at any time. It is derived from
/// the current track, the last audio-output event and the last transport
/// command - never set freely by consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackStatus {
    /// No track loaded
    Idle,

    /// Source handed to the output, playback start not yet confirmed
    Loading,

    /// Output confirmed playback
    Playing,

    /// Paused mid-track
    Paused,

    /// Source played to completion
    Ended,

    /// Output reported a decode or network failure
    Failed,
}

/// Configuration for a playback session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Initial volume (0-100, default: 75)
    pub volume: u8,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self { volume: 75 }
    }
}

/// Externally observable playback snapshot
///
/// Recomputed wholesale on every change so subscribers always see an
/// internally consistent picture; never partially mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackReadModel {
    /// Currently loaded track, if any
    pub track: Option<Track>,

    /// Session-wide status
    pub status: PlaybackStatus,

    /// Elapsed playback position (optimistic right after a seek)
    pub position: Duration,

    /// Authoritative duration; zero until the output reports metadata
    pub duration: Duration,

    /// Volume level (0-100)
    pub volume: u8,

    /// Whether output is muted (level is preserved while muted)
    pub muted: bool,
}
