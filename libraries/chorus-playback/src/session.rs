//! Playback session - the single owner of playback state
//!
//! One session exists per client process. It is the only component allowed
//! to drive the audio output, and every UI surface observes it through the
//! read-model broadcast instead of holding its own copy of "is playing".
//!
//! Commands are processed strictly in arrival order on one control path;
//! in a multi-threaded host, wrap the session in a mutex or behind an
//! actor/queue boundary.

use crate::{
    error::{PlaybackError, Result},
    events::{SubscriptionId, Subscribers},
    output::{AudioOutput, OutputEvent},
    queue::Queue,
    types::{PlaybackConfig, PlaybackReadModel, PlaybackStatus},
    volume::Volume,
};
use chorus_core::Track;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Tolerance for position reports that lag a just-issued seek
///
/// Outputs seek to frame boundaries, so the first honest report after a
/// seek can land slightly before the requested target. Reports further
/// behind than this are pre-seek backlog and are discarded.
const SEEK_SETTLE_EPSILON: Duration = Duration::from_millis(500);

/// Central playback state machine
///
/// Owns the queue, the volume, the boxed audio output and the derived
/// read model. See the crate docs for the command set and state machine.
pub struct PlaybackSession {
    queue: Queue,
    status: PlaybackStatus,
    current: Option<Track>,
    position: Duration,
    duration: Duration,
    volume: Volume,
    output: Box<dyn AudioOutput>,

    /// Monotonically increasing tag; one increment per `load`, used to
    /// discard events from superseded sources.
    generation: u64,

    /// Optimistic seek target awaiting confirmation from the output
    pending_seek: Option<Duration>,

    subscribers: Arc<Subscribers>,
    torn_down: bool,
}

impl PlaybackSession {
    /// Create a session owning the given audio output
    pub fn new(output: Box<dyn AudioOutput>, config: PlaybackConfig) -> Self {
        Self {
            queue: Queue::new(),
            status: PlaybackStatus::Idle,
            current: None,
            position: Duration::ZERO,
            duration: Duration::ZERO,
            volume: Volume::new(config.volume),
            output,
            generation: 0,
            pending_seek: None,
            subscribers: Arc::new(Subscribers::new()),
            torn_down: false,
        }
    }

    // ===== Commands =====

    /// Load a track and begin playback
    ///
    /// With a `queue_context`, the context becomes the new queue with the
    /// cursor on `track`; if `track` is not in the context the call fails
    /// with [`PlaybackError::InvalidQueueContext`] and no state changes.
    /// Without a context, the cursor moves to `track` when it is already
    /// queued, otherwise the queue is left untouched.
    pub fn load_and_play(&mut self, track: Track, queue_context: Option<Vec<Track>>) -> Result<()> {
        if let Some(context) = queue_context {
            let Some(index) = context.iter().position(|t| t.id == track.id) else {
                return Err(PlaybackError::InvalidQueueContext {
                    track_id: track.id.clone(),
                });
            };
            self.queue.set_tracks(context, Some(index));
        } else if let Some(index) = self.queue.index_of(&track.id) {
            self.queue.set_current_index(index);
        }
        self.start_track(track)
    }

    /// Pause if playing, resume if paused; no-op otherwise
    ///
    /// With no current track this is a pure read, not a transition.
    pub fn toggle_play_pause(&mut self) -> Result<()> {
        if self.current.is_none() {
            return Ok(());
        }
        match self.status {
            PlaybackStatus::Playing => {
                self.output.pause()?;
                self.status = PlaybackStatus::Paused;
                info!("paused");
                self.broadcast();
            }
            PlaybackStatus::Paused => {
                self.output.play()?;
                self.status = PlaybackStatus::Playing;
                info!("resumed");
                self.broadcast();
            }
            _ => {}
        }
        Ok(())
    }

    /// Jump to a position, clamped to `[0, duration]`
    ///
    /// The read model's position updates optimistically; the next genuine
    /// `TimeProgress` report corrects it. No-op without a current track.
    pub fn seek(&mut self, position: Duration) -> Result<()> {
        if self.current.is_none() {
            return Ok(());
        }
        let clamped = position.min(self.duration);
        self.output.seek(clamped)?;
        self.pending_seek = Some(clamped);
        self.position = clamped;
        self.broadcast();
        Ok(())
    }

    /// Set the volume level, clamping to 0-100
    ///
    /// Independent of playback status; may be called while idle.
    pub fn set_volume(&mut self, level: i32) -> Result<()> {
        let clamped = level.clamp(0, 100) as u8;
        self.volume.set_level(clamped);
        self.output.set_gain(self.volume.gain())?;
        self.broadcast();
        Ok(())
    }

    /// Toggle mute, preserving the volume level
    pub fn toggle_mute(&mut self) -> Result<()> {
        self.volume.toggle_mute();
        self.output.set_gain(self.volume.gain())?;
        self.broadcast();
        Ok(())
    }

    /// Skip forward with wraparound
    ///
    /// Also invoked autonomously when a source plays to completion. No-op
    /// when the queue is empty or the cursor is unset. On a single-track
    /// queue this reloads the same track (replay from start).
    pub fn advance(&mut self) -> Result<()> {
        let Some(next) = self.queue.next_index() else {
            return Ok(());
        };
        self.queue.set_current_index(next);
        let Some(track) = self.queue.current_track().cloned() else {
            return Ok(());
        };
        self.start_track(track)
    }

    /// Skip backward with wraparound; externally callable only
    pub fn retreat(&mut self) -> Result<()> {
        let Some(previous) = self.queue.previous_index() else {
            return Ok(());
        };
        self.queue.set_current_index(previous);
        let Some(track) = self.queue.current_track().cloned() else {
            return Ok(());
        };
        self.start_track(track)
    }

    /// Replace the queue wholesale without starting playback
    ///
    /// Pairs with a subsequent [`Self::load_and_play`] in normal use, but
    /// is separable so a consumer can stage a queue without interrupting
    /// what is currently playing. Clearing the queue while nothing is
    /// playing returns the session to idle.
    pub fn replace_queue(&mut self, tracks: Vec<Track>) {
        let cleared = tracks.is_empty();
        self.queue.set_tracks(tracks, None);

        let active = matches!(
            self.status,
            PlaybackStatus::Loading | PlaybackStatus::Playing | PlaybackStatus::Paused
        );
        if cleared && !active {
            self.status = PlaybackStatus::Idle;
            self.current = None;
            self.position = Duration::ZERO;
            self.duration = Duration::ZERO;
            self.pending_seek = None;
            self.broadcast();
        }
    }

    /// Stop the output, drop all subscriptions and silence the session
    ///
    /// Idempotent. Events arriving after teardown are ignored, so no
    /// callback can fire into a dead session.
    pub fn shutdown(&mut self) -> Result<()> {
        if self.torn_down {
            return Ok(());
        }
        self.output.stop()?;
        self.generation += 1;
        self.subscribers.clear();
        self.status = PlaybackStatus::Idle;
        self.current = None;
        self.position = Duration::ZERO;
        self.duration = Duration::ZERO;
        self.pending_seek = None;
        self.torn_down = true;
        info!("session torn down");
        Ok(())
    }

    // ===== Inbound events =====

    /// Fold an audio-output event into the session state
    ///
    /// The hosting adapter calls this with the generation it was handed at
    /// `load`. Events tagged with a superseded generation never mutate
    /// state - a newer `load_and_play` is the only cancellation mechanism.
    pub fn handle_output_event(&mut self, generation: u64, event: OutputEvent) {
        if self.torn_down || self.current.is_none() {
            return;
        }
        if generation != self.generation {
            debug!(
                event_generation = generation,
                current_generation = self.generation,
                "discarding stale output event"
            );
            return;
        }

        match event {
            OutputEvent::MetadataReady { duration } => {
                self.duration = duration;
                if self.status == PlaybackStatus::Loading {
                    self.status = PlaybackStatus::Playing;
                    info!(?duration, "playback started");
                }
                self.broadcast();
            }
            OutputEvent::TimeProgress { position } => {
                if self.status == PlaybackStatus::Loading {
                    self.status = PlaybackStatus::Playing;
                }
                if let Some(target) = self.pending_seek {
                    if position + SEEK_SETTLE_EPSILON < target {
                        // Pre-seek backlog; the optimistic position stands.
                        return;
                    }
                    self.pending_seek = None;
                    self.position = position.max(target);
                } else {
                    self.position = position;
                }
                self.broadcast();
            }
            OutputEvent::Ended => {
                self.status = PlaybackStatus::Ended;
                self.position = self.duration;
                info!("source ended");
                self.broadcast();

                // Auto-advance through the queue; failure never advances.
                if self.queue.current_index().is_some() {
                    if let Err(err) = self.advance() {
                        warn!(%err, "auto-advance failed");
                    }
                }
            }
            OutputEvent::Error { message } => {
                warn!(%message, "playback failed");
                self.status = PlaybackStatus::Failed;
                self.position = Duration::ZERO;
                self.duration = Duration::ZERO;
                self.pending_seek = None;
                // Supersede the failed source so stragglers from it cannot
                // repopulate position/duration under a Failed status. The
                // track reference is kept so the UI can say what failed.
                self.generation += 1;
                self.broadcast();
            }
        }
    }

    // ===== Read model =====

    /// Current externally observable snapshot
    pub fn read_model(&self) -> PlaybackReadModel {
        PlaybackReadModel {
            track: self.current.clone(),
            status: self.status,
            position: self.position,
            duration: self.duration,
            volume: self.volume.level(),
            muted: self.volume.is_muted(),
        }
    }

    /// Register a read-model subscriber
    pub fn subscribe(
        &self,
        callback: impl Fn(&PlaybackReadModel) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    /// Remove a read-model subscriber
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Shared handle to the subscriber registry
    ///
    /// Lets a callback unsubscribe itself without holding the session.
    pub fn subscribers(&self) -> Arc<Subscribers> {
        Arc::clone(&self.subscribers)
    }

    /// Queue read access; mutation goes through commands only
    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    /// Generation tag of the most recent load
    pub fn generation(&self) -> u64 {
        self.generation
    }

    // ===== Internals =====

    /// Supersede any in-flight source and start playing `track`
    ///
    /// A transport rejection folds into the session as a failure on the
    /// attempted track (so the read model never claims the previous source
    /// is still playing) and then propagates to the caller.
    fn start_track(&mut self, track: Track) -> Result<()> {
        self.generation += 1;
        self.pending_seek = None;

        let issued = self.issue_transport(&track);
        match &issued {
            Ok(()) => {
                info!(track_id = %track.id, generation = self.generation, "loading track");
                self.status = PlaybackStatus::Loading;
            }
            Err(err) => {
                warn!(track_id = %track.id, %err, "audio output rejected load");
                self.status = PlaybackStatus::Failed;
                // Anything the half-issued load still emits is stale.
                self.generation += 1;
            }
        }
        self.current = Some(track);
        self.position = Duration::ZERO;
        self.duration = Duration::ZERO;
        self.broadcast();
        issued
    }

    fn issue_transport(&mut self, track: &Track) -> Result<()> {
        self.output.stop()?;
        self.output.load(&track.source_url, self.generation)?;
        self.output.set_gain(self.volume.gain())?;
        self.output.play()?;
        Ok(())
    }

    fn broadcast(&self) {
        self.subscribers.notify(&self.read_model());
    }
}
