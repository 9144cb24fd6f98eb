/*!
Calendar frames and the operations built on them: `floor`, `ceil`, `span`
and the lazy `range`/`span_range`/`interval` sequences.

The method implementations live on [`Instant`]; this module owns the
vocabulary types and the iterators.
*/

use crate::{
    error::Error,
    instant::Instant,
};

/// A calendar or clock frame.
///
/// Weeks start on Monday.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Unit {
    Year,
    Quarter,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Microsecond,
}

impl Unit {
    /// A human readable singular description of this unit.
    pub fn singular(&self) -> &'static str {
        match *self {
            Unit::Year => "year",
            Unit::Quarter => "quarter",
            Unit::Month => "month",
            Unit::Week => "week",
            Unit::Day => "day",
            Unit::Hour => "hour",
            Unit::Minute => "minute",
            Unit::Second => "second",
            Unit::Microsecond => "microsecond",
        }
    }

    /// A human readable plural description of this unit.
    pub fn plural(&self) -> &'static str {
        match *self {
            Unit::Year => "years",
            Unit::Quarter => "quarters",
            Unit::Month => "months",
            Unit::Week => "weeks",
            Unit::Day => "days",
            Unit::Hour => "hours",
            Unit::Minute => "minutes",
            Unit::Second => "seconds",
            Unit::Microsecond => "microseconds",
        }
    }

    /// The humanizer's fixed second count for this unit, following the
    /// civil conventions (a month is 30 days, a year 365). `None` for
    /// units the humanizer doesn't speak in.
    pub(crate) fn humanize_seconds(&self) -> Option<i64> {
        match *self {
            Unit::Year => Some(31_536_000),
            Unit::Quarter => None,
            Unit::Month => Some(2_592_000),
            Unit::Week => Some(604_800),
            Unit::Day => Some(86_400),
            Unit::Hour => Some(3_600),
            Unit::Minute => Some(60),
            Unit::Second => Some(1),
            Unit::Microsecond => None,
        }
    }
}

/// Inclusivity at each end of an interval, parsed from a two-character
/// string drawn from `{"(", ")", "[", "]"}`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Bounds {
    pub(crate) lo_closed: bool,
    pub(crate) hi_closed: bool,
}

impl Bounds {
    /// Parses a bounds string such as `"[)"`.
    ///
    /// Anything that isn't exactly one opening and one closing bracket
    /// character is a usage error, not a parse error: bounds strings are
    /// written by the programmer, not by users.
    pub(crate) fn parse(bounds: &str) -> Result<Bounds, Error> {
        let mut chars = bounds.chars();
        let (lo, hi, rest) = (chars.next(), chars.next(), chars.next());
        let (Some(lo), Some(hi), None) = (lo, hi, rest) else {
            return Err(Error::usage(format_args!(
                "bounds must be exactly two characters, got {bounds:?}",
            )));
        };
        let lo_closed = match lo {
            '[' => true,
            '(' => false,
            _ => {
                return Err(Error::usage(format_args!(
                    "bounds must open with '[' or '(', got {bounds:?}",
                )))
            }
        };
        let hi_closed = match hi {
            ']' => true,
            ')' => false,
            _ => {
                return Err(Error::usage(format_args!(
                    "bounds must close with ']' or ')', got {bounds:?}",
                )))
            }
        };
        Ok(Bounds { lo_closed, hi_closed })
    }
}

/// A lazy sequence of instants separated by a whole number of frames.
///
/// Produced by [`Instant::range`]. Every element is computed by shifting
/// the original start, not the previous element, so calendar frames do not
/// drift: a monthly range started on January 31st yields the month-clamped
/// 28th/29th/30th/31st, never sticking to the clamp.
///
/// The iterator is `Clone`, and cloning restarts it from the beginning.
#[derive(Clone, Debug)]
pub struct InstantRange {
    pub(crate) unit: Unit,
    pub(crate) start: Instant,
    pub(crate) end: Instant,
    pub(crate) i: i64,
}

impl Iterator for InstantRange {
    type Item = Instant;

    fn next(&mut self) -> Option<Instant> {
        let next = self.start.shift_by(self.unit, self.i).ok()?;
        if next > self.end {
            return None;
        }
        self.i += 1;
        Some(next)
    }
}

/// A lazy sequence of `(floor, ceil)` pairs covering a range frame by
/// frame. Produced by [`Instant::span_range`].
#[derive(Clone, Debug)]
pub struct SpanRange {
    pub(crate) range: InstantRange,
    pub(crate) bounds: Bounds,
}

impl Iterator for SpanRange {
    type Item = (Instant, Instant);

    fn next(&mut self) -> Option<(Instant, Instant)> {
        let floor = self.range.next()?;
        floor.span_bounded(self.range.unit, 1, self.bounds).ok()
    }
}

/// A lazy sequence of `(floor, ceil)` pairs covering a range in chunks of
/// `n` frames apiece. Produced by [`Instant::interval`].
#[derive(Clone, Debug)]
pub struct Interval {
    pub(crate) spans: SpanRange,
    pub(crate) chunk: usize,
}

impl Iterator for Interval {
    type Item = (Instant, Instant);

    fn next(&mut self) -> Option<(Instant, Instant)> {
        let (first_floor, mut last_ceil) = self.spans.next()?;
        for _ in 1..self.chunk {
            match self.spans.next() {
                Some((_, ceil)) => last_ceil = ceil,
                None => break,
            }
        }
        Some((first_floor, last_ceil))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_parse() {
        assert_eq!(
            Bounds::parse("[)").unwrap(),
            Bounds { lo_closed: true, hi_closed: false },
        );
        assert_eq!(
            Bounds::parse("(]").unwrap(),
            Bounds { lo_closed: false, hi_closed: true },
        );
        assert!(Bounds::parse("<>").unwrap_err().is_usage());
        assert!(Bounds::parse("[").unwrap_err().is_usage());
        assert!(Bounds::parse("[))").unwrap_err().is_usage());
        assert!(Bounds::parse("])").unwrap_err().is_usage());
    }

    #[test]
    fn unit_names() {
        assert_eq!(Unit::Month.singular(), "month");
        assert_eq!(Unit::Month.plural(), "months");
    }
}
