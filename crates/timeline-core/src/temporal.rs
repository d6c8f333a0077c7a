//! # Temporal Types — Event Dates
//!
//! Defines `Timestamp`, the parsed form of an event's `date` field.
//!
//! ## Accepted Forms
//!
//! The grammar is the ISO-8601 subset that hand-edited event files use:
//!
//! - a date, extended `2024-03-14` or basic `20240314`;
//! - optionally `T` or a single space and a time: `HH`, `HH:MM`,
//!   `HH:MM:SS` or `HH:MM:SS.fraction` (basic `HHMM`, `HHMMSS` too, and
//!   `,` as the fraction separator);
//! - optionally a UTC offset `±HH`, `±HH:MM`, `±HHMM` or `±HH:MM:SS`,
//!   which may also follow a bare date.
//!
//! A trailing `Z` is the UTC marker. It is rewritten to `+00:00` before
//! parsing (see [`normalize_utc_suffix`]). Values without an offset are
//! taken as UTC. Leap seconds (`:60`), hour `24`, year `0000` and week or
//! ordinal dates are rejected.

use std::borrow::Cow;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::error::TimelineError;

const EXPECTED_DATE: &str = "expected a YYYY-MM-DD or YYYYMMDD date";
const EXPECTED_TIME: &str = "expected a time of the form HH[:MM[:SS[.fraction]]]";
const EXPECTED_OFFSET: &str = "expected a UTC offset of the form ±HH[:MM[:SS]]";

/// A parsed event date, held in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Parse the raw text of an event `date` field.
    ///
    /// Applies [`normalize_utc_suffix`] and then [`Timestamp::parse_iso8601`].
    pub fn parse_event_date(raw: &str) -> Result<Self, TimelineError> {
        Self::parse_iso8601(&normalize_utc_suffix(raw))
    }

    /// Parse an ISO-8601 date or datetime in one of the accepted forms.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineError::InvalidTimestamp`] if the text does not
    /// follow the grammar or names an impossible calendar or clock value.
    pub fn parse_iso8601(s: &str) -> Result<Self, TimelineError> {
        if s.is_empty() {
            return Err(invalid(s, "empty string"));
        }
        if s.trim() != s {
            return Err(invalid(s, "surrounding whitespace"));
        }

        let mut cursor = Cursor::new(s);
        let date = parse_date(&mut cursor).map_err(|reason| invalid(s, reason))?;
        let time = if cursor.eat(b'T') || cursor.eat(b' ') {
            parse_time(&mut cursor).map_err(|reason| invalid(s, reason))?
        } else {
            NaiveTime::MIN
        };
        let offset = if cursor.at_end() {
            None
        } else {
            Some(parse_offset(&mut cursor).map_err(|reason| invalid(s, reason))?)
        };
        if !cursor.at_end() {
            return Err(invalid(s, "unexpected trailing text"));
        }

        let local = date.and_time(time);
        let utc = match offset {
            None => Utc.from_utc_datetime(&local),
            Some(offset) => offset
                .from_local_datetime(&local)
                .single()
                .ok_or_else(|| invalid(s, "offset moves the instant out of range"))?
                .with_timezone(&Utc),
        };
        Ok(Self(utc))
    }

    /// Render as RFC 3339 with a `Z` suffix.
    pub fn to_iso8601(&self) -> String {
        self.0.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true)
    }
}

/// Replace a single trailing `Z` with an explicit `+00:00` offset.
///
/// Text without a trailing `Z` is returned unchanged.
pub fn normalize_utc_suffix(raw: &str) -> Cow<'_, str> {
    match raw.strip_suffix('Z') {
        Some(head) => Cow::Owned(format!("{head}+00:00")),
        None => Cow::Borrowed(raw),
    }
}

fn invalid(input: &str, reason: &str) -> TimelineError {
    TimelineError::InvalidTimestamp {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_date(cursor: &mut Cursor<'_>) -> Result<NaiveDate, &'static str> {
    let year = cursor.number(4).ok_or(EXPECTED_DATE)?;
    let (month, day) = if cursor.eat(b'-') {
        let month = cursor.number(2).ok_or(EXPECTED_DATE)?;
        if !cursor.eat(b'-') {
            return Err(EXPECTED_DATE);
        }
        (month, cursor.number(2).ok_or(EXPECTED_DATE)?)
    } else {
        let month = cursor.number(2).ok_or(EXPECTED_DATE)?;
        (month, cursor.number(2).ok_or(EXPECTED_DATE)?)
    };
    if year == 0 {
        return Err("year must be in 0001..=9999");
    }
    // Four digits always fit.
    let year = i32::try_from(year).map_err(|_| EXPECTED_DATE)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or("no such calendar day")
}

fn parse_time(cursor: &mut Cursor<'_>) -> Result<NaiveTime, &'static str> {
    let (hour, minute, second) = cursor.clock().ok_or(EXPECTED_TIME)?;
    let nanos = match second {
        Some(_) if cursor.eat(b'.') || cursor.eat(b',') => {
            cursor.fraction().ok_or(EXPECTED_TIME)?
        }
        _ => 0,
    };
    let second = second.unwrap_or(0);
    if second > 59 {
        return Err("second must be in 0..=59");
    }
    NaiveTime::from_hms_nano_opt(hour, minute, second, nanos).ok_or("time of day out of range")
}

fn parse_offset(cursor: &mut Cursor<'_>) -> Result<FixedOffset, &'static str> {
    let sign = if cursor.eat(b'+') {
        1
    } else if cursor.eat(b'-') {
        -1
    } else {
        return Err("unexpected text after the date or time");
    };
    let (hours, minutes, seconds) = cursor.clock().ok_or(EXPECTED_OFFSET)?;
    let seconds = seconds.unwrap_or(0);
    if hours > 23 || minutes > 59 || seconds > 59 {
        return Err("UTC offset out of range");
    }
    let total = i32::try_from(hours * 3600 + minutes * 60 + seconds)
        .map_err(|_| "UTC offset out of range")?;
    FixedOffset::east_opt(sign * total).ok_or("UTC offset out of range")
}

/// Byte cursor over ASCII date text. Non-ASCII input simply fails to match.
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn peek_digit(&self) -> bool {
        self.peek().is_some_and(|b| b.is_ascii_digit())
    }

    fn at_end(&self) -> bool {
        self.pos == self.bytes.len()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Exactly `width` decimal digits.
    fn number(&mut self, width: usize) -> Option<u32> {
        let digits = self.bytes.get(self.pos..self.pos + width)?;
        if !digits.iter().all(u8::is_ascii_digit) {
            return None;
        }
        self.pos += width;
        Some(digits.iter().fold(0, |acc, d| acc * 10 + u32::from(d - b'0')))
    }

    /// `HH[:MM[:SS]]` or `HH[MM[SS]]`. Missing minutes are zero; seconds are
    /// `None` when absent so the caller can decide whether a fraction may
    /// follow.
    fn clock(&mut self) -> Option<(u32, u32, Option<u32>)> {
        let hour = self.number(2)?;
        let extended = self.eat(b':');
        if !extended && !self.peek_digit() {
            return Some((hour, 0, None));
        }
        let minute = self.number(2)?;
        let has_seconds = if extended {
            self.eat(b':')
        } else {
            self.peek_digit()
        };
        let second = if has_seconds {
            Some(self.number(2)?)
        } else {
            None
        };
        Some((hour, minute, second))
    }

    /// One or more digits after the decimal mark, as nanoseconds. Digits
    /// beyond the ninth are consumed and dropped.
    fn fraction(&mut self) -> Option<u32> {
        let mut nanos = 0;
        let mut scale = 100_000_000;
        let mut count = 0;
        while let Some(d) = self.peek().filter(u8::is_ascii_digit) {
            nanos += u32::from(d - b'0') * scale;
            scale /= 10;
            count += 1;
            self.pos += 1;
        }
        (count > 0).then_some(nanos)
    }
}
