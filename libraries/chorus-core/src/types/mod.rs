//! Domain types shared across the client.

mod ids;
mod track;

pub use ids::TrackId;
pub use track::Track;
