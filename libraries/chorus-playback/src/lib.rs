//! Chorus Playback
//!
//! Playback engine for the Chorus client: the single owner of the audio
//! output, an ordered play queue with wraparound navigation, and a
//! deterministic state machine (load, play, pause, seek, advance, end)
//! observed by any number of UI consumers through one broadcast read model.
//!
//! This crate provides:
//! - `PlaybackSession` - commands and the state machine
//! - `Queue` - ordered tracks plus a cursor, repeat-all wraparound
//! - `AudioOutput` / `OutputEvent` - the platform audio contract
//! - Read-model broadcast with reentrancy-safe subscriptions
//! - Volume control (perceptual scaling, 0-100%, mute)
//!
//! # Architecture
//!
//! `chorus-playback` is completely platform-agnostic: it never decodes or
//! renders audio itself. The host supplies an [`AudioOutput`] adapter
//! (media element, cpal stream, cast target) and feeds the adapter's events
//! back into the session; real playback time and decode failures are known
//! only through those events. Each `load` carries a generation tag, and
//! events from superseded loads are discarded, so a stale callback can
//! never clobber newer state.
//!
//! # Example
//!
//! ```rust
//! use chorus_core::{Track, TrackId};
//! use chorus_playback::{
//!     AudioOutput, OutputEvent, PlaybackConfig, PlaybackSession, PlaybackStatus, Result,
//! };
//! use std::time::Duration;
//!
//! // Implement AudioOutput for your platform
//! struct SilentOutput;
//!
//! impl AudioOutput for SilentOutput {
//!     fn load(&mut self, _source_url: &str, _generation: u64) -> Result<()> {
//!         Ok(())
//!     }
//!     fn play(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//!     fn pause(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//!     fn stop(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//!     fn seek(&mut self, _position: Duration) -> Result<()> {
//!         Ok(())
//!     }
//!     fn set_gain(&mut self, _gain: f32) -> Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let mut session = PlaybackSession::new(Box::new(SilentOutput), PlaybackConfig::default());
//!
//! let track = Track::new(
//!     TrackId::new("t1"),
//!     "Midnight Drive",
//!     "The Waveforms",
//!     "https://cdn.chorus.fm/tracks/t1.mp3",
//! );
//!
//! // Play with the full album as queue context
//! session.load_and_play(track, Some(vec![
//!     Track::new(TrackId::new("t1"), "Midnight Drive", "The Waveforms", "https://cdn.chorus.fm/tracks/t1.mp3"),
//!     Track::new(TrackId::new("t2"), "Harbor Lights", "The Waveforms", "https://cdn.chorus.fm/tracks/t2.mp3"),
//! ]))?;
//! assert_eq!(session.read_model().status, PlaybackStatus::Loading);
//!
//! // The adapter reports back, tagged with the generation it got at load()
//! let generation = session.generation();
//! session.handle_output_event(generation, OutputEvent::MetadataReady {
//!     duration: Duration::from_secs(214),
//! });
//! assert_eq!(session.read_model().status, PlaybackStatus::Playing);
//! # Ok::<(), chorus_playback::PlaybackError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod events;
mod output;
mod queue;
mod session;
pub mod types;
mod volume;

// Public exports
pub use error::{PlaybackError, Result};
pub use events::{Subscribers, SubscriptionId};
pub use output::{AudioOutput, OutputEvent};
pub use queue::Queue;
pub use session::PlaybackSession;
pub use types::{PlaybackConfig, PlaybackReadModel, PlaybackStatus};
pub use volume::Volume;
