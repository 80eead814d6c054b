pub mod meta;
pub mod track;

pub use meta::ServerMeta;
pub use track::{TrackField, TrackSummary, UnknownTrackField};
