use std::{fmt, ops::Sub, str::FromStr};

use thiserror::Error;
use time::{format_description::well_known::Rfc3339, Date, Duration, OffsetDateTime, Time, UtcOffset};

/// A point in time with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    pub fn to_offset_date_time(self) -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(self.0) * 1_000_000)
            .unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }

    /// Midnight of the calendar day containing this timestamp,
    /// as seen from the given offset.
    pub fn start_of_day(self, offset: UtcOffset) -> Self {
        self.to_offset_date_time()
            .to_offset(offset)
            .replace_time(Time::MIDNIGHT)
            .into()
    }

    /// Midnight of the current calendar day in server-local time.
    ///
    /// Falls back to UTC if the local offset cannot be determined,
    /// e.g. in multi-threaded processes on some platforms.
    pub fn start_of_local_day(self) -> Self {
        let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
        self.start_of_day(offset)
    }

    /// Half-open range `[start, end)` covering the given UTC calendar day.
    pub fn day_range(date: Date) -> (Self, Self) {
        let start = date.midnight().assume_utc();
        let end = start + Duration::days(1);
        (start.into(), end.into())
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self((from.unix_timestamp_nanos() / 1_000_000) as i64)
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        from.to_offset_date_time()
    }
}

impl Sub<Duration> for Timestamp {
    type Output = Self;
    fn sub(self, rhs: Duration) -> Self {
        Self(self.0 - rhs.whole_milliseconds() as i64)
    }
}

#[derive(Debug, Error)]
#[error("Invalid RFC 3339 timestamp")]
pub struct TimestampParseError;

impl FromStr for Timestamp {
    type Err = TimestampParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OffsetDateTime::parse(s, &Rfc3339)
            .map(Into::into)
            .map_err(|_| TimestampParseError)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let formatted = self
            .to_offset_date_time()
            .format(&Rfc3339)
            .map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime, offset};

    #[test]
    fn convert_from_into_offset_date_time() {
        let t1 = Timestamp::now();
        let t2 = Timestamp::from(t1.to_offset_date_time());
        assert_eq!(t1, t2);
    }

    #[test]
    fn start_of_day_respects_offset() {
        let ts: Timestamp = datetime!(2024-03-10 01:30 UTC).into();
        assert_eq!(
            Timestamp::from(datetime!(2024-03-10 00:00 UTC)),
            ts.start_of_day(UtcOffset::UTC)
        );
        // Still the previous day in New York
        assert_eq!(
            Timestamp::from(datetime!(2024-03-09 00:00 -5)),
            ts.start_of_day(offset!(-5))
        );
    }

    #[test]
    fn day_range_is_half_open() {
        let (start, end) = Timestamp::day_range(date!(2024 - 12 - 31));
        assert_eq!(Timestamp::from(datetime!(2024-12-31 00:00 UTC)), start);
        assert_eq!(Timestamp::from(datetime!(2025-01-01 00:00 UTC)), end);
    }

    #[test]
    fn parse_and_display_rfc3339() {
        let ts: Timestamp = "2024-06-01T18:00:00Z".parse().unwrap();
        assert_eq!("2024-06-01T18:00:00Z", ts.to_string());
        assert!("yesterday".parse::<Timestamp>().is_err());
    }
}
