//! Chorus Core
//!
//! Shared domain types for the Chorus client.
//!
//! Every subsystem of the client (catalog, playback, UI bridges) exchanges
//! the types defined here. The crate is deliberately free of I/O: tracks are
//! fetched, uploaded and persisted by the catalog subsystem, which hands the
//! playback engine plain values.
//!
//! # Example
//!
//! ```rust
//! use chorus_core::types::{Track, TrackId};
//!
//! let track = Track::new(
//!     TrackId::new("b3c2a1d4"),
//!     "Midnight Drive",
//!     "The Waveforms",
//!     "https://cdn.chorus.fm/tracks/b3c2a1d4.mp3",
//! );
//! assert_eq!(track.duration, None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod types;

// Re-export commonly used types
pub use types::{Track, TrackId};
