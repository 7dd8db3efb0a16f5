use chrono::{NaiveDateTime, Utc};
use rapid_time::{DateTime, Duration};

use crate::base_types::Minutes;

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// accepted input formats, tried in order
const INPUT_FORMATS: [&str; 5] = [
    ISO_FORMAT,
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// Parses `"2022-09-05T13:31[:00]"` as well as `"2022/09/05 13:31"`.
pub fn parse_date_time(string: &str) -> Result<DateTime, chrono::ParseError> {
    let trimmed = string.trim().trim_end_matches('Z');
    INPUT_FORMATS
        .iter()
        .map(|format| NaiveDateTime::parse_from_str(trimmed, format))
        .find(Result::is_ok)
        .unwrap_or_else(|| NaiveDateTime::parse_from_str(trimmed, ISO_FORMAT))
        .map(from_naive)
}

pub fn from_naive(naive: NaiveDateTime) -> DateTime {
    DateTime::new(&naive.format(ISO_FORMAT).to_string())
}

/// Current UTC time, to the second.
pub fn now() -> DateTime {
    from_naive(Utc::now().naive_utc())
}

/// Whole minutes from `from` to `to`; negative if `to` is the earlier one.
pub fn minutes_between(from: DateTime, to: DateTime) -> Minutes {
    if to >= from {
        whole_minutes(to - from)
    } else {
        -whole_minutes(from - to)
    }
}

fn whole_minutes(duration: Duration) -> Minutes {
    // Duration::Infinity has no seconds
    duration
        .in_sec()
        .into_iter()
        .next()
        .map_or(Minutes::MAX, |seconds| seconds as Minutes / 60)
}

/// `#[serde(with = "iso")]` for time stamps kept as ISO strings.
pub mod iso {
    use rapid_time::DateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date_time: &DateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date_time.as_iso())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime, D::Error> {
        let string = String::deserialize(deserializer)?;
        super::parse_date_time(&string).map_err(serde::de::Error::custom)
    }
}
