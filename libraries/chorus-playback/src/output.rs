//! Audio output contract
//!
//! Abstracts the platform's single audio-rendering resource (media element,
//! cpal stream, cast target) behind transport commands plus an inbound
//! event stream. The session is the sole caller of the transport methods;
//! the hosting adapter feeds events back through
//! [`crate::PlaybackSession::handle_output_event`], tagged with the
//! generation it was handed at `load`.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Platform audio output
///
/// Commands are fire-and-forget from the session's perspective: `load` and
/// `seek` return once the instruction is issued, with confirmation arriving
/// later as [`OutputEvent`]s. An implementation must deliver the events of
/// one loaded source in order (`MetadataReady` before any `TimeProgress`,
/// `Ended` at most once) and tag each with the generation passed to `load`.
pub trait AudioOutput: Send {
    /// Stop any current source and start loading a new one
    ///
    /// `generation` must be echoed on every event the new source produces.
    fn load(&mut self, source_url: &str, generation: u64) -> Result<()>;

    /// Begin or resume playback of the loaded source
    fn play(&mut self) -> Result<()>;

    /// Pause playback, keeping the source loaded
    fn pause(&mut self) -> Result<()>;

    /// Stop playback and release the loaded source
    fn stop(&mut self) -> Result<()>;

    /// Jump to a position in the loaded source
    fn seek(&mut self, position: Duration) -> Result<()>;

    /// Set the output gain (0.0 = silent, 1.0 = unity)
    fn set_gain(&mut self, gain: f32) -> Result<()>;
}

/// Events reported by the audio output
///
/// The only channel through which real playback time and decode success or
/// failure are known; the session never assumes them optimistically (with
/// the single documented exception of the position right after a seek).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OutputEvent {
    /// Stream metadata decoded; duration is now authoritative
    MetadataReady {
        /// Total duration of the loaded source
        duration: Duration,
    },

    /// Periodic position report
    ///
    /// Cadence is bounded but not fixed; positions are monotonically
    /// non-decreasing between seeks for a given source.
    TimeProgress {
        /// Current playback position
        position: Duration,
    },

    /// The source played to completion
    Ended,

    /// Decode or network failure
    Error {
        /// Human-readable cause, surfaced to the UI via the read model
        message: String,
    },
}
