const SECS_PER_DAY: u64 = 86_400;
const SECS_PER_HOUR: u64 = 3_600;
const SECS_PER_MINUTE: u64 = 60;

/// Renders an elapsed number of seconds as an ISO-8601 style duration of
/// the form `P<days>DT<hours>H<minutes>M<seconds>S`.
///
/// Every field is printed even when zero, and fractional seconds are
/// truncated. Clients depend on the uncompacted shape, so `0.0` renders
/// as `P0DT0H0M0S` rather than `PT0S`.
pub fn duration_format(sec: f64) -> String {
    let total = sec.trunc() as u64;

    let days = total / SECS_PER_DAY;
    let rest = total % SECS_PER_DAY;
    let hours = rest / SECS_PER_HOUR;
    let rest = rest % SECS_PER_HOUR;
    let minutes = rest / SECS_PER_MINUTE;
    let seconds = rest % SECS_PER_MINUTE;

    format!("P{}DT{}H{}M{}S", days, hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::duration_format;

    #[test]
    fn zero_keeps_all_fields() {
        assert_eq!(duration_format(0.0), "P0DT0H0M0S");
    }

    #[test]
    fn one_hour_one_minute_one_second() {
        assert_eq!(duration_format(3661.0), "P0DT1H1M1S");
    }

    #[test]
    fn a_day_and_an_hour() {
        assert_eq!(duration_format(90000.0), "P1DT1H0M0S");
    }

    #[test]
    fn exact_unit_boundaries_roll_over() {
        assert_eq!(duration_format(86400.0), "P1DT0H0M0S");
        assert_eq!(duration_format(3600.0), "P0DT1H0M0S");
        assert_eq!(duration_format(60.0), "P0DT0H1M0S");
    }

    #[test]
    fn fractional_seconds_are_truncated() {
        assert_eq!(duration_format(59.999), "P0DT0H0M59S");
    }
}
