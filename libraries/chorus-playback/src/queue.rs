//! Play queue with wraparound navigation
//!
//! Pure data structure: no I/O, no events. The session owns one `Queue`,
//! computes the next/previous index through it and applies the result.

use chorus_core::{Track, TrackId};

/// Ordered sequence of tracks plus a nullable cursor
///
/// Invariant: the cursor, when set, always points at a valid position
/// (`0 <= index < len`). Wholesale replacement resets the cursor unless the
/// replacement seeds a starting index. Navigation wraps at both ends
/// (repeat-all semantics); on an empty queue there is nothing to navigate.
#[derive(Debug, Clone, Default)]
pub struct Queue {
    tracks: Vec<Track>,
    current: Option<usize>,
}

impl Queue {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the queue contents wholesale
    ///
    /// The cursor is set to `start_index` if provided and valid, otherwise
    /// cleared. The engine never merges or appends; a new playlist or album
    /// always arrives as a full replacement.
    pub fn set_tracks(&mut self, tracks: Vec<Track>, start_index: Option<usize>) {
        self.current = start_index.filter(|&i| i < tracks.len());
        self.tracks = tracks;
    }

    /// Track under the cursor, if any
    pub fn current_track(&self) -> Option<&Track> {
        self.current.and_then(|i| self.tracks.get(i))
    }

    /// Current cursor position
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Move the cursor to `index`
    ///
    /// Returns false (cursor unchanged) if the index is out of bounds.
    pub fn set_current_index(&mut self, index: usize) -> bool {
        if index < self.tracks.len() {
            self.current = Some(index);
            true
        } else {
            false
        }
    }

    /// Linear search by track identifier
    pub fn index_of(&self, id: &TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| &t.id == id)
    }

    /// Wrapped successor of the cursor, without mutating state
    ///
    /// `None` when the queue is empty or the cursor is unset.
    pub fn next_index(&self) -> Option<usize> {
        let current = self.current?;
        if self.tracks.is_empty() {
            return None;
        }
        Some((current + 1) % self.tracks.len())
    }

    /// Wrapped predecessor of the cursor, without mutating state
    pub fn previous_index(&self) -> Option<usize> {
        let current = self.current?;
        if self.tracks.is_empty() {
            return None;
        }
        if current == 0 {
            Some(self.tracks.len() - 1)
        } else {
            Some(current - 1)
        }
    }

    /// All tracks in queue order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of tracks in the queue
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
