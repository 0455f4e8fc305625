//! Date/time expression recognition.
//!
//! A [`TemporalGrammar`] finds temporal expressions in a transcript; each
//! [`TemporalMatch`] can then be resolved against a reference instant. The
//! extractor only ever looks at the first match.

pub mod grammar;
pub mod lexicon;

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, Months, NaiveDate, NaiveTime, Utc, Weekday,
};
use thiserror::Error;

pub use grammar::LexiconGrammar;

/// Why a recognised expression could not be turned into an instant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemporalError {
    #[error("Invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("Invalid time of day: {hour}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },
    #[error("Date arithmetic out of range")]
    OutOfRange,
}

/// Calendar unit used by offsets ("in 3 weeks") and periods ("next month").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekdayModifier {
    /// "Friday", "this Friday": 0 to 6 days ahead.
    Bare,
    /// "next Friday": 1 to 7 days ahead.
    Next,
}

/// The date half of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePart {
    RelativeDays(i64),
    Weekday {
        day: Weekday,
        modifier: WeekdayModifier,
    },
    Calendar {
        year: Option<i32>,
        month: u32,
        day: u32,
    },
    Offset {
        amount: i64,
        unit: Unit,
    },
    NextPeriod(Unit),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

/// The time-of-day half of an expression, unvalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimePart {
    pub hour: u32,
    pub minute: u32,
    pub meridiem: Option<Meridiem>,
}

impl TimePart {
    fn to_naive(self) -> Result<NaiveTime, TemporalError> {
        let invalid = TemporalError::InvalidTime {
            hour: self.hour,
            minute: self.minute,
        };
        let hour = match self.meridiem {
            None => self.hour,
            // "17 de la tarde" is redundant but unambiguous.
            Some(Meridiem::Pm) if (13..=23).contains(&self.hour) => self.hour,
            Some(_) if self.hour == 0 || self.hour > 12 => return Err(invalid),
            Some(Meridiem::Am) => self.hour % 12,
            Some(Meridiem::Pm) => self.hour % 12 + 12,
        };
        NaiveTime::from_hms_opt(hour, self.minute, 0).ok_or(invalid)
    }
}

/// A recognised expression: a date, a time, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemporalExpr {
    pub date: Option<DatePart>,
    pub time: Option<TimePart>,
}

impl TemporalExpr {
    /// Resolve to an absolute instant relative to `now`.
    ///
    /// Wall-clock results are interpreted in `now`'s UTC offset.
    pub fn resolve(&self, now: DateTime<FixedOffset>) -> Result<DateTime<Utc>, TemporalError> {
        let today = now.date_naive();
        let noon = NaiveTime::from_hms_opt(12, 0, 0).ok_or(TemporalError::OutOfRange)?;

        let (date, default_time) = match self.date {
            None => (today, now.time()),
            Some(DatePart::RelativeDays(days)) => (add_days(today, days)?, now.time()),
            Some(DatePart::Weekday { day, modifier }) => (upcoming(today, day, modifier)?, noon),
            Some(DatePart::Calendar { year, month, day }) => {
                (calendar_date(today, year, month, day)?, noon)
            }
            Some(DatePart::Offset { amount, unit }) => match unit {
                Unit::Minute | Unit::Hour => {
                    let delta = if unit == Unit::Minute {
                        Duration::try_minutes(amount)
                    } else {
                        Duration::try_hours(amount)
                    }
                    .ok_or(TemporalError::OutOfRange)?;
                    let at = now
                        .checked_add_signed(delta)
                        .ok_or(TemporalError::OutOfRange)?;
                    return Ok(at.with_timezone(&Utc));
                }
                _ => (shift(today, amount, unit)?, now.time()),
            },
            Some(DatePart::NextPeriod(unit)) => (shift(today, 1, unit)?, now.time()),
        };

        let time = match self.time {
            Some(t) => t.to_naive()?,
            None => default_time,
        };

        date.and_time(time)
            .and_local_timezone(*now.offset())
            .single()
            .map(|local| local.with_timezone(&Utc))
            .ok_or(TemporalError::OutOfRange)
    }
}

fn add_days(date: NaiveDate, days: i64) -> Result<NaiveDate, TemporalError> {
    Duration::try_days(days)
        .and_then(|d| date.checked_add_signed(d))
        .ok_or(TemporalError::OutOfRange)
}

fn shift(date: NaiveDate, amount: i64, unit: Unit) -> Result<NaiveDate, TemporalError> {
    match unit {
        Unit::Minute | Unit::Hour | Unit::Day => add_days(date, amount),
        Unit::Week => add_days(
            date,
            amount.checked_mul(7).ok_or(TemporalError::OutOfRange)?,
        ),
        Unit::Month | Unit::Year => {
            let months = if unit == Unit::Year {
                amount.checked_mul(12).ok_or(TemporalError::OutOfRange)?
            } else {
                amount
            };
            let months = u32::try_from(months).map_err(|_| TemporalError::OutOfRange)?;
            date.checked_add_months(Months::new(months))
                .ok_or(TemporalError::OutOfRange)
        }
    }
}

fn upcoming(
    today: NaiveDate,
    target: Weekday,
    modifier: WeekdayModifier,
) -> Result<NaiveDate, TemporalError> {
    let mut ahead = (target.num_days_from_monday() as i64
        - today.weekday().num_days_from_monday() as i64)
        .rem_euclid(7);
    if modifier == WeekdayModifier::Next && ahead == 0 {
        ahead = 7;
    }
    add_days(today, ahead)
}

fn calendar_date(
    today: NaiveDate,
    year: Option<i32>,
    month: u32,
    day: u32,
) -> Result<NaiveDate, TemporalError> {
    let build = |year: i32| {
        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(TemporalError::InvalidDate { year, month, day })
    };
    match year {
        Some(year) => build(year),
        // Without a year, take the next occurrence on or after today. Leap
        // days may be up to eight years away across a skipped century leap.
        None => (today.year()..=today.year() + 8)
            .filter_map(|year| NaiveDate::from_ymd_opt(year, month, day))
            .find(|date| *date >= today)
            .map_or_else(|| build(today.year()), Ok),
    }
}

/// One recognised expression and where it sits in the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemporalMatch {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    pub text: String,
    pub expr: TemporalExpr,
}

impl TemporalMatch {
    pub fn resolve(&self, now: DateTime<FixedOffset>) -> Result<DateTime<Utc>, TemporalError> {
        self.expr.resolve(now)
    }
}

/// A locale-specific date/time grammar.
pub trait TemporalGrammar: Send + Sync {
    /// Language code of the lexicon backing this grammar.
    fn locale(&self) -> &str;

    /// Recognised expressions in left-to-right order.
    fn scan<'t>(&'t self, text: &'t str) -> Box<dyn Iterator<Item = TemporalMatch> + 't>;
}

/// Resolve the first temporal expression in `text`, if any.
///
/// Resolution failures are logged and reported as `None`; a due date is
/// optional information.
pub fn extract_due_date(
    grammar: &dyn TemporalGrammar,
    text: &str,
    now: DateTime<FixedOffset>,
) -> Option<DateTime<Utc>> {
    let first = grammar.scan(text).next()?;
    match first.resolve(now) {
        Ok(due) => {
            tracing::debug!(
                expression = %first.text,
                locale = grammar.locale(),
                due = %due,
                "Resolved due date"
            );
            Some(due)
        }
        Err(e) => {
            tracing::debug!(
                expression = %first.text,
                error = %e,
                "Temporal expression could not be resolved"
            );
            None
        }
    }
}
