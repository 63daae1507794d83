use crate::core::wall_clock::{LocalClock, WallClock};
use crate::error::{Field, ParseError};

use super::normalized::{to_dial_hours, NormalizedTime};

const MAX_HOURS: i64 = 23;
const MAX_MINUTES: i64 = 59;
const MAX_SECONDS: i64 = 59;

/// Turns an optional `H[:M[:S]]` string into a [`NormalizedTime`]
///
/// An absent or empty spec reads the wall clock and never fails.
#[derive(Debug, Clone, Default)]
pub struct TimeParser<C: WallClock> {
    clock: C,
}

impl<C: WallClock> TimeParser<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn parse(&self, spec: Option<&str>) -> Result<NormalizedTime, ParseError> {
        match spec {
            Some(spec) if !spec.is_empty() => parse_spec(spec),
            _ => Ok(self.now()),
        }
    }

    /// Current wall time on the dial
    pub fn now(&self) -> NormalizedTime {
        NormalizedTime::from_wall_time(self.clock.now())
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

/// Parse with the host local clock
pub fn parse_local(spec: Option<&str>) -> Result<NormalizedTime, ParseError> {
    TimeParser::new(LocalClock).parse(spec)
}

/// Parse an explicit spec of one to three colon separated integers
///
/// Later fields are validated first: with `"x:y:z"` the seconds error wins over
/// minutes, which wins over hours.
pub fn parse_spec(spec: &str) -> Result<NormalizedTime, ParseError> {
    let parts: Vec<&str> = spec.split(':').collect();

    let (hours, minutes, seconds) = match parts.as_slice() {
        [h, m, s] => {
            let seconds = component(s, Field::Seconds, MAX_SECONDS)?;
            let minutes = component(m, Field::Minutes, MAX_MINUTES)?;
            (component(h, Field::Hours, MAX_HOURS)?, minutes, seconds)
        }
        [h, m] => {
            let minutes = component(m, Field::Minutes, MAX_MINUTES)?;
            (component(h, Field::Hours, MAX_HOURS)?, minutes, 0)
        }
        [h] => (component(h, Field::Hours, MAX_HOURS)?, 0, 0),
        _ => return Err(ParseError::format(None)),
    };

    Ok(NormalizedTime::scaled(to_dial_hours(hours), minutes, seconds))
}

/// Numeric check first, range check second
fn component(raw: &str, field: Field, max: i64) -> Result<u32, ParseError> {
    let value = parse_integer(raw).ok_or(ParseError::format(Some(field)))?;
    if !(0..=max).contains(&value) {
        return Err(ParseError::range(field));
    }
    Ok(value as u32)
}

/// Optionally signed decimal integer, surrounding whitespace allowed.
/// Oversized values saturate so they fail the range check, not the format check.
fn parse_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });

    Some(if negative { -magnitude } else { magnitude })
}
