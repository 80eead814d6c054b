use std::{error::Error, fmt, time::Duration};

use async_trait::async_trait;
use chrono::NaiveDate;
use model::TrackSummary;
use utility::geo;

pub mod records;

/// How long a fetch of a remote track file may take before the request is
/// abandoned. Keeps a slow or unreachable remote server from stalling the
/// request dispatch pool.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// A parsed IGC flight log: the header fields the service cares about
/// plus the ordered sequence of position fixes.
#[derive(Debug, Clone, Default)]
pub struct Track {
    pub pilot: String,
    pub glider_type: String,
    pub glider_id: String,
    pub date: Option<NaiveDate>,
    pub fixes: Vec<Fix>,
}

/// A single recorded position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fix {
    pub latitude: f64,
    pub longitude: f64,
}

impl Fix {
    /// Great-circle distance to another fix, in kilometers.
    pub fn distance_to(&self, other: &Fix) -> f64 {
        geo::haversine_distance(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}

impl Track {
    /// Total path length: the sum of pairwise distances between
    /// consecutive fixes. Zero for tracks with fewer than two fixes.
    pub fn distance(&self) -> f64 {
        self.fixes
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .sum()
    }

    /// Derives the metadata record that is stored in place of the raw
    /// track. Header fields are copied verbatim; absent values stay
    /// empty, absent dates fall back to the epoch date.
    pub fn summarize(&self) -> TrackSummary {
        TrackSummary {
            recorded_date: self.date.unwrap_or_default(),
            pilot: self.pilot.clone(),
            glider_type: self.glider_type.clone(),
            glider_id: self.glider_id.clone(),
            track_length: self.distance(),
        }
    }
}

#[derive(Debug)]
pub enum ParseError {
    InvalidUrl(String),
    Fetch(reqwest::Error),
    Malformed(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidUrl(why) => write!(f, "invalid track url: {}", why),
            ParseError::Fetch(why) => write!(f, "could not fetch track: {}", why),
            ParseError::Malformed(why) => write!(f, "malformed track: {}", why),
        }
    }
}

impl Error for ParseError {}

impl From<reqwest::Error> for ParseError {
    fn from(why: reqwest::Error) -> Self {
        ParseError::Fetch(why)
    }
}

/// The track parser capability the registration flow delegates to: given
/// a URL, yield a parsed track or a single flattened error. The service
/// never distinguishes an unreachable resource from an unparsable one.
#[async_trait]
pub trait TrackParser: Send + Sync {
    async fn parse_url(&self, url: &str) -> Result<Track, ParseError>;
}

/// Production parser: fetches the track file over HTTP and parses it as
/// IGC text.
pub struct HttpTrackParser {
    client: reqwest::Client,
}

impl HttpTrackParser {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .expect("could not construct http client.");
        Self { client }
    }
}

impl Default for HttpTrackParser {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TrackParser for HttpTrackParser {
    async fn parse_url(&self, url: &str) -> Result<Track, ParseError> {
        let url = reqwest::Url::parse(url)
            .map_err(|why| ParseError::InvalidUrl(why.to_string()))?;
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        records::parse_igc(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fix(latitude: f64, longitude: f64) -> Fix {
        Fix {
            latitude,
            longitude,
        }
    }

    #[test]
    fn distance_sums_consecutive_pairs() {
        let a = fix(60.0, 10.0);
        let b = fix(60.5, 10.2);
        let c = fix(61.0, 10.9);
        let track = Track {
            fixes: vec![a, b, c],
            ..Track::default()
        };
        let expected = a.distance_to(&b) + b.distance_to(&c);
        assert!((track.distance() - expected).abs() < 1e-9);
    }

    #[test]
    fn distance_is_zero_for_short_tracks() {
        let empty = Track::default();
        assert_eq!(empty.distance(), 0.0);

        let single = Track {
            fixes: vec![fix(60.0, 10.0)],
            ..Track::default()
        };
        assert_eq!(single.distance(), 0.0);
    }

    #[test]
    fn summarize_copies_header_fields_verbatim() {
        let track = Track {
            pilot: "John Doe".to_owned(),
            glider_type: String::new(),
            glider_id: "LN-ABC".to_owned(),
            date: chrono::NaiveDate::from_ymd_opt(2018, 3, 28),
            fixes: vec![],
        };
        let summary = track.summarize();
        assert_eq!(summary.pilot, "John Doe");
        assert_eq!(summary.glider_type, "");
        assert_eq!(summary.glider_id, "LN-ABC");
        assert_eq!(summary.recorded_date.to_string(), "2018-03-28");
        assert_eq!(summary.track_length, 0.0);
    }

    #[tokio::test]
    async fn http_parser_rejects_malformed_urls_without_fetching() {
        let parser = HttpTrackParser::new();
        let result = parser.parse_url("not a url at all").await;
        assert!(matches!(result, Err(ParseError::InvalidUrl(_))));
    }
}
