use std::{error::Error, fmt, str::FromStr};

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::HasId;

/// Metadata derived once from a parsed IGC track.
///
/// Summaries are immutable after registration: the registry only ever
/// appends, and lookups return copies. Serialized summaries look like
/// `{"H_date": ..., "pilot": ..., "glider": ..., "glider_id": ...,
/// "track_length": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TrackSummary {
    /// The flight date from the track header.
    #[serde(rename = "H_date")]
    pub recorded_date: NaiveDate,
    pub pilot: String,
    #[serde(rename = "glider")]
    pub glider_type: String,
    pub glider_id: String,
    /// Sum of pairwise distances between consecutive fixes, in kilometers.
    pub track_length: f64,
}

impl HasId for TrackSummary {
    type IdType = i64;
}

impl TrackSummary {
    /// Renders a single field the way the field endpoint exposes it:
    /// header strings verbatim, the track length with zero decimals, the
    /// date as a plain readable date.
    pub fn field(&self, field: TrackField) -> String {
        match field {
            TrackField::Pilot => self.pilot.clone(),
            TrackField::Glider => self.glider_type.clone(),
            TrackField::GliderId => self.glider_id.clone(),
            TrackField::TrackLength => format!("{:.0}", self.track_length),
            TrackField::HDate => self.recorded_date.to_string(),
        }
    }
}

/// The closed set of single-field views a client may request. Anything
/// else is a bad request, checked exhaustively at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackField {
    Pilot,
    Glider,
    GliderId,
    TrackLength,
    HDate,
}

impl FromStr for TrackField {
    type Err = UnknownTrackField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pilot" => Ok(Self::Pilot),
            "glider" => Ok(Self::Glider),
            "glider_id" => Ok(Self::GliderId),
            "track_length" => Ok(Self::TrackLength),
            "H_date" => Ok(Self::HDate),
            other => Err(UnknownTrackField(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTrackField(pub String);

impl fmt::Display for UnknownTrackField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a known track field", self.0)
    }
}

impl Error for UnknownTrackField {}
