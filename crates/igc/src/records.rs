use chrono::NaiveDate;

use crate::{Fix, ParseError, Track};

/// Parses IGC text into a track. Only the record types the service needs
/// are interpreted: H records for the header metadata and B records for
/// position fixes. Everything else (A, C, G, L, ...) is skipped.
pub fn parse_igc(source: &str) -> Result<Track, ParseError> {
    let mut track = Track::default();
    for line in source.lines() {
        let line = line.trim_end();
        match line.bytes().next() {
            Some(b'H') => parse_header(line, &mut track),
            Some(b'B') => track.fixes.push(parse_fix(line)?),
            _ => {}
        }
    }
    // A file without a date header and without a single fix is not a
    // usable IGC log.
    if track.date.is_none() && track.fixes.is_empty() {
        return Err(ParseError::Malformed("no IGC records found".to_owned()));
    }
    Ok(track)
}

/// H records carry a three-letter subtype and usually a value after a
/// colon, e.g. `HFPLTPILOTINCHARGE:John Doe` or `HFDTE280318`.
fn parse_header(line: &str, track: &mut Track) {
    let Some(subtype) = line.get(2..5) else {
        return;
    };
    match subtype {
        "DTE" => track.date = line.get(5..).and_then(parse_date),
        "PLT" => track.pilot = header_value(line),
        "GTY" => track.glider_type = header_value(line),
        "GID" => track.glider_id = header_value(line),
        _ => {}
    }
}

fn header_value(line: &str) -> String {
    line.split_once(':')
        .map(|(_, value)| value.trim().to_owned())
        .unwrap_or_default()
}

/// The date header is `DDMMYY`, in newer files `DATE:DDMMYY,NN`. Two
/// digit years are flight recorder years, all on or after 2000.
fn parse_date(rest: &str) -> Option<NaiveDate> {
    let digits: String = rest
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(6)
        .collect();
    if digits.len() < 6 {
        return None;
    }
    let day = digits[0..2].parse().ok()?;
    let month = digits[2..4].parse().ok()?;
    let year: i32 = digits[4..6].parse().ok()?;
    NaiveDate::from_ymd_opt(2000 + year, month, day)
}

/// B records are fixed-width: `B` + time(6) + latitude(7 digits and a
/// hemisphere) + longitude(8 digits and a hemisphere) + validity and
/// altitudes, e.g. `B1101355206343N00006198WA0058700558`.
fn parse_fix(line: &str) -> Result<Fix, ParseError> {
    if !line.is_ascii() || line.len() < 24 {
        return Err(malformed_fix(line));
    }
    let latitude = coordinate(&line[7..14], &line[14..15], 2)
        .ok_or_else(|| malformed_fix(line))?;
    let longitude = coordinate(&line[15..23], &line[23..24], 3)
        .ok_or_else(|| malformed_fix(line))?;
    Ok(Fix {
        latitude,
        longitude,
    })
}

fn malformed_fix(line: &str) -> ParseError {
    ParseError::Malformed(format!("invalid B record: {}", line))
}

/// Converts an IGC coordinate field, degrees followed by thousandths of
/// minutes (`5206343` with hemisphere `N`), into signed decimal degrees.
fn coordinate(digits: &str, hemisphere: &str, degree_digits: usize) -> Option<f64> {
    let degrees: f64 = digits.get(..degree_digits)?.parse().ok()?;
    let minute_thousandths: f64 = digits.get(degree_digits..)?.parse().ok()?;
    let unsigned = degrees + minute_thousandths / 1000.0 / 60.0;
    match hemisphere {
        "N" | "E" => Some(unsigned),
        "S" | "W" => Some(-unsigned),
        _ => None,
    }
}
