/// Track domain type
use crate::types::TrackId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Audio track
///
/// Owned by the catalog subsystem; the playback engine treats it opaquely
/// beyond `id`, `source_url` and the advisory `duration`. The duration
/// stored here comes from upload-time metadata extraction and is display
/// advice only - the authoritative duration is reported by the audio output
/// once the stream's metadata loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name
    pub album: Option<String>,

    /// Genre
    pub genre: Option<String>,

    /// Advisory track duration from catalog metadata
    pub duration: Option<Duration>,

    /// Playable source locator, resolvable by the audio output
    pub source_url: String,

    /// Cover art locator
    pub cover_url: Option<String>,
}

impl Track {
    /// Create a track with minimal metadata
    pub fn new(
        id: TrackId,
        title: impl Into<String>,
        artist: impl Into<String>,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            album: None,
            genre: None,
            duration: None,
            source_url: source_url.into(),
            cover_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_track_has_no_advisory_metadata() {
        let track = Track::new(
            TrackId::new("t1"),
            "Title",
            "Artist",
            "https://cdn.example/t1.mp3",
        );
        assert_eq!(track.album, None);
        assert_eq!(track.duration, None);
        assert_eq!(track.cover_url, None);
    }

    #[test]
    fn track_id_serializes_as_plain_string() {
        // UI bridges and the catalog client exchange ids as bare strings,
        // not as wrapped objects.
        let mut track = Track::new(
            TrackId::new("t2"),
            "Other",
            "Someone",
            "https://cdn.example/t2.mp3",
        );
        track.duration = Some(Duration::from_secs(212));

        let json = serde_json::to_value(&track).unwrap();
        assert_eq!(json["id"], "t2");
        assert_eq!(json["source_url"], "https://cdn.example/t2.mp3");
    }
}
