use chrono::{Datelike, NaiveDate, TimeDelta};
use regex::Regex;

use crate::{
    error::{err, Error, ErrorContext},
    fmt::{compile, token::Token},
    instant::Instant,
    locale::{self, Locale},
    zone::Zone,
};

/// Knobs shared by every parsing entry point.
#[derive(Clone, Copy)]
pub(crate) struct ParseOptions {
    pub(crate) locale: &'static dyn Locale,
    /// The zone an instant is built in when the input carries none.
    pub(crate) default_zone: Option<Zone>,
    /// Collapse every run of whitespace in the input to a single space
    /// before matching.
    pub(crate) normalize_whitespace: bool,
}

impl Default for ParseOptions {
    fn default() -> ParseOptions {
        ParseOptions {
            locale: locale::default(),
            default_zone: None,
            normalize_whitespace: false,
        }
    }
}

/// Parses `input` against a single format string.
pub(crate) fn parse(
    input: &str,
    format: &str,
    opts: &ParseOptions,
) -> Result<Instant, Error> {
    let normalized;
    let input = if opts.normalize_whitespace {
        normalized = normalize_whitespace(input);
        normalized.as_str()
    } else {
        input
    };

    let compiled = compile(format, opts.locale)?;
    let caps = find_bounded(&compiled.re, input).ok_or_else(|| {
        Error::parse_match(format_args!(
            "input {input:?} does not match format {format:?}",
        ))
    })?;

    let mut pieces = Pieces::default();
    let mut group = 0;
    for token in &compiled.tokens {
        if !token.captures() {
            continue;
        }
        group += 1;
        let Some(m) = caps.get(group) else { continue };
        pieces
            .assign(token, m.as_str(), opts.locale)
            .with_context(|| err!("failed to parse input {input:?}"))?;
    }
    pieces.build(opts)
}

/// Parses `input` against each format in turn, returning the first
/// success.
///
/// # Errors
///
/// When every format fails, the error cites all of them.
pub(crate) fn parse_multi(
    input: &str,
    formats: &[&str],
    opts: &ParseOptions,
) -> Result<Instant, Error> {
    for format in formats {
        if let Ok(instant) = parse(input, format, opts) {
            debug!("input {input:?} matched format {format:?}");
            return Ok(instant);
        }
    }
    Err(Error::parse_match(format_args!(
        "input {input:?} does not match any of the formats tried: {}",
        formats.join(", "),
    )))
}

pub(crate) fn normalize_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Characters allowed to sit immediately against a match.
const NEIGHBOR_PUNCTUATION: &str = ",.;:?!\"'`[]{}()<>";

/// Finds the first match that sits on an acceptable boundary.
///
/// The rule is `(?<!\S) … (?!\S)` with one concession: a single
/// punctuation character may separate the match from the surrounding
/// whitespace on either side. So `(1998-09-12)` and `on 1998-09-12.`
/// match where `blah1998-09-12` does not. The regex crate has no
/// lookaround, so the neighbors are inspected here instead.
fn find_bounded<'i>(
    re: &Regex,
    input: &'i str,
) -> Option<regex::Captures<'i>> {
    for caps in re.captures_iter(input) {
        let m = caps.get(0).expect("group 0 always participates");
        if boundary_ok(input, m.start(), m.end()) {
            return Some(caps);
        }
    }
    None
}

fn boundary_ok(input: &str, start: usize, end: usize) -> bool {
    let mut before = input[..start].chars().rev();
    let before_ok = match before.next() {
        None => true,
        Some(c) if c.is_whitespace() => true,
        Some(c) if NEIGHBOR_PUNCTUATION.contains(c) => {
            before.next().map_or(true, |c2| c2.is_whitespace())
        }
        Some(_) => false,
    };
    if !before_ok {
        return false;
    }
    let mut after = input[end..].chars();
    match after.next() {
        None => true,
        Some(c) if c.is_whitespace() => true,
        Some(c) if NEIGHBOR_PUNCTUATION.contains(c) => {
            after.next().map_or(true, |c2| c2.is_whitespace())
        }
        Some(_) => false,
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Meridiem {
    Am,
    Pm,
}

/// The field accumulator parsing writes into.
///
/// Parsing proceeds by assigning each captured token here, and only once
/// the whole input has matched do the fields get combined into an
/// `Instant`. Every field is optional so that contradictions (and
/// omissions) can be reported precisely.
#[derive(Debug, Default)]
struct Pieces {
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
    day_of_year: Option<u32>,
    iso_week: Option<(i32, u32, Option<u32>)>,
    hour: Option<u32>,
    minute: Option<u32>,
    second: Option<u32>,
    microsecond: Option<u32>,
    /// Set when subsecond rounding overflowed into the next second.
    second_carry: bool,
    meridiem: Option<Meridiem>,
    /// Captured for validation against the assembled date.
    weekday: Option<u32>,
    zone: Option<Zone>,
    epoch_seconds: Option<f64>,
    epoch_subsecond: Option<i64>,
}

impl Pieces {
    fn assign(
        &mut self,
        token: &Token,
        text: &str,
        locale: &dyn Locale,
    ) -> Result<(), Error> {
        match *token {
            Token::YearFull => self.year = Some(parse_num(text, "year")?),
            Token::YearTwo => {
                let two: i32 = parse_num(text, "year")?;
                // The usual two-digit pivot: 69-99 land in the 1900s.
                self.year =
                    Some(if two > 68 { 1900 + two } else { 2000 + two });
            }
            Token::MonthName | Token::MonthAbbr => {
                let month =
                    locale::month_from_name(locale, text).ok_or_else(|| {
                        Error::field_value(format_args!(
                            "{text:?} is not a month name in this locale",
                        ))
                    })?;
                self.month = Some(u32::from(month as u8));
            }
            Token::MonthPadded | Token::Month => {
                self.month = Some(parse_num(text, "month")?);
            }
            Token::DayOfYearPadded | Token::DayOfYear => {
                self.day_of_year = Some(parse_num(text, "day of year")?);
            }
            Token::DayPadded | Token::Day => {
                self.day = Some(parse_num(text, "day")?);
            }
            Token::DayOrdinal => {
                let digits: String =
                    text.chars().take_while(char::is_ascii_digit).collect();
                self.day = Some(parse_num(&digits, "day")?);
            }
            Token::WeekdayName | Token::WeekdayAbbr => {
                let weekday = locale::weekday_from_name(locale, text)
                    .ok_or_else(|| {
                        Error::field_value(format_args!(
                            "{text:?} is not a weekday name in this locale",
                        ))
                    })?;
                self.weekday = Some(u32::from(weekday as u8));
            }
            Token::WeekdayNumber => {
                self.weekday = Some(parse_num(text, "day of week")?);
            }
            Token::Hour24Padded
            | Token::Hour24
            | Token::Hour12Padded
            | Token::Hour12 => self.hour = Some(parse_num(text, "hour")?),
            Token::MinutePadded | Token::Minute => {
                self.minute = Some(parse_num(text, "minute")?);
            }
            Token::SecondPadded | Token::Second => {
                self.second = Some(parse_num(text, "second")?);
            }
            Token::Subsecond(_) => {
                let (microsecond, carry) = round_subseconds(text)?;
                self.microsecond = Some(microsecond);
                self.second_carry = carry;
            }
            Token::MeridiemLower | Token::MeridiemUpper => {
                self.meridiem = Some(if locale::is_am(locale, text) {
                    Meridiem::Am
                } else {
                    Meridiem::Pm
                });
            }
            Token::OffsetBasic | Token::OffsetColon | Token::ZoneName => {
                let zone = Zone::parse(text).with_context(|| {
                    err!("captured zone expression {text:?} is unusable")
                })?;
                self.zone = Some(zone);
            }
            Token::EpochSeconds => {
                let seconds: f64 = text.parse().map_err(|_| {
                    Error::field_value(format_args!(
                        "{text:?} is not a valid epoch timestamp",
                    ))
                })?;
                self.epoch_seconds = Some(seconds);
            }
            Token::EpochSubsecond => {
                let raw: i64 = text.parse().map_err(|_| {
                    Error::field_value(format_args!(
                        "{text:?} is not a valid epoch timestamp",
                    ))
                })?;
                self.epoch_subsecond = Some(raw);
            }
            Token::IsoWeekDate => self.assign_iso_week(text)?,
            Token::Literal(_) => {}
        }
        Ok(())
    }

    /// Splits the `YYYY-Www-d` (or `YYYYWwwd`) composite.
    fn assign_iso_week(&mut self, text: &str) -> Result<(), Error> {
        // The regex guarantees the shape; any failure here is a bug in
        // the token pattern, reported as a field error all the same.
        let malformed = || {
            Error::field_value(format_args!(
                "{text:?} is not an ISO week date",
            ))
        };
        let year: i32 = text.get(..4).ok_or_else(malformed)?.parse()
            .map_err(|_| malformed())?;
        let after_year = &text[4..];
        let after_year = after_year.strip_prefix('-').unwrap_or(after_year);
        let after_w = after_year.strip_prefix('W').ok_or_else(malformed)?;
        let week: u32 = after_w.get(..2).ok_or_else(malformed)?.parse()
            .map_err(|_| malformed())?;
        let rest = &after_w[2..];
        let rest = rest.strip_prefix('-').unwrap_or(rest);
        let weekday = if rest.is_empty() {
            None
        } else {
            Some(rest.parse().map_err(|_| malformed())?)
        };
        self.iso_week = Some((year, week, weekday));
        Ok(())
    }

    /// Combines the accumulated fields into an `Instant`, applying the
    /// assignment rules: meridiem adjustment, hour-24 rollover, epoch
    /// precedence and contradiction checks.
    fn build(self, opts: &ParseOptions) -> Result<Instant, Error> {
        // An epoch capture wins over any calendar fields.
        let captured_zone = self.zone.or(opts.default_zone);
        if let Some(raw) = self.epoch_subsecond {
            let instant = Instant::from_epoch_auto(raw)?;
            return Ok(rezone(instant, captured_zone));
        }
        if let Some(seconds) = self.epoch_seconds {
            let instant = Instant::from_epoch_seconds(seconds)?;
            return Ok(rezone(instant, captured_zone));
        }

        if self.day_of_year.is_some() && self.month.is_some() {
            return Err(Error::field_value(format_args!(
                "day-of-year cannot be combined with an explicit month",
            )));
        }
        if self.iso_week.is_some()
            && (self.month.is_some()
                || self.day.is_some()
                || self.day_of_year.is_some())
        {
            return Err(Error::field_value(format_args!(
                "an ISO week date cannot be combined with month or day \
                 fields",
            )));
        }

        let mut hour = self.hour.unwrap_or(0);
        match self.meridiem {
            Some(Meridiem::Pm) if hour < 12 => hour += 12,
            Some(Meridiem::Am) if hour == 12 => hour = 0,
            _ => {}
        }
        let mut day_carry = false;
        if hour == 24 {
            let midnight = self.minute.unwrap_or(0) == 0
                && self.second.unwrap_or(0) == 0
                && self.microsecond.unwrap_or(0) == 0;
            if !midnight {
                return Err(Error::field_value(format_args!(
                    "hour 24 is only valid at exactly 24:00:00",
                )));
            }
            hour = 0;
            day_carry = true;
        }

        let date = if let Some((year, week, weekday)) = self.iso_week {
            let weekday = weekday.or(self.weekday).unwrap_or(1);
            let weekday = iso_weekday(weekday)?;
            NaiveDate::from_isoywd_opt(year, week, weekday).ok_or_else(
                || {
                    Error::field_value(format_args!(
                        "ISO week {week} is not valid for year {year}",
                    ))
                },
            )?
        } else if let Some(ordinal) = self.day_of_year {
            let year = self.year.unwrap_or(1);
            NaiveDate::from_yo_opt(year, ordinal).ok_or_else(|| {
                Error::field_value(format_args!(
                    "day-of-year {ordinal} is not valid for year {year}",
                ))
            })?
        } else {
            let (year, month, day) = (
                self.year.unwrap_or(1),
                self.month.unwrap_or(1),
                self.day.unwrap_or(1),
            );
            NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
                Error::field_value(format_args!(
                    "{year:04}-{month:02}-{day:02} is not a valid date",
                ))
            })?
        };

        // A captured weekday must agree with the assembled date.
        if self.iso_week.is_none() {
            if let Some(weekday) = self.weekday {
                let actual = date.weekday().number_from_monday();
                if weekday != actual {
                    return Err(Error::field_value(format_args!(
                        "parsed weekday {weekday} does not match {date}, \
                         which falls on weekday {actual}",
                    )));
                }
            }
        }

        let time_invalid = || {
            Error::field_value(format_args!(
                "{:02}:{:02}:{:02}.{:06} is not a valid time",
                hour,
                self.minute.unwrap_or(0),
                self.second.unwrap_or(0),
                self.microsecond.unwrap_or(0),
            ))
        };
        let mut civil = date
            .and_hms_micro_opt(
                hour,
                self.minute.unwrap_or(0),
                self.second.unwrap_or(0),
                self.microsecond.unwrap_or(0),
            )
            .ok_or_else(time_invalid)?;
        if self.second_carry {
            civil = civil
                .checked_add_signed(TimeDelta::seconds(1))
                .ok_or_else(time_invalid)?;
        }
        if day_carry {
            civil = civil
                .checked_add_signed(TimeDelta::days(1))
                .ok_or_else(time_invalid)?;
        }

        let zone = self.zone.or(opts.default_zone).unwrap_or(Zone::UTC);
        Instant::from_naive_in(civil, zone, 0)
    }
}

/// Re-expresses an epoch-derived instant in the captured (or default)
/// zone, when there is one.
fn rezone(instant: Instant, zone: Option<Zone>) -> Instant {
    match zone {
        Some(zone) => instant.to(zone),
        None => instant,
    }
}

/// Converts a run of subsecond digits to microseconds, rounding half to
/// even in the seventh digit and beyond. The boolean reports overflow
/// into the next second (possible only when rounding up from 999999.x).
fn round_subseconds(digits: &str) -> Result<(u32, bool), Error> {
    debug_assert!(digits.len() <= 9);
    let n: u64 = digits.parse().map_err(|_| {
        Error::field_value(format_args!(
            "{digits:?} is not a valid subsecond value",
        ))
    })?;
    let micros = if digits.len() <= 6 {
        n * 10u64.pow(6 - digits.len() as u32)
    } else {
        let divisor = 10u64.pow(digits.len() as u32 - 6);
        half_even_div(n, divisor)
    };
    if micros >= 1_000_000 {
        Ok(((micros - 1_000_000) as u32, true))
    } else {
        Ok((micros as u32, false))
    }
}

fn half_even_div(n: u64, d: u64) -> u64 {
    let (q, r) = (n / d, n % d);
    match (2 * r).cmp(&d) {
        core::cmp::Ordering::Less => q,
        core::cmp::Ordering::Greater => q + 1,
        core::cmp::Ordering::Equal => {
            if q % 2 == 0 {
                q
            } else {
                q + 1
            }
        }
    }
}

fn iso_weekday(number: u32) -> Result<chrono::Weekday, Error> {
    match number {
        1 => Ok(chrono::Weekday::Mon),
        2 => Ok(chrono::Weekday::Tue),
        3 => Ok(chrono::Weekday::Wed),
        4 => Ok(chrono::Weekday::Thu),
        5 => Ok(chrono::Weekday::Fri),
        6 => Ok(chrono::Weekday::Sat),
        7 => Ok(chrono::Weekday::Sun),
        _ => Err(Error::range("day of week", number, 1, 7)),
    }
}

fn parse_num<T: core::str::FromStr>(
    text: &str,
    what: &'static str,
) -> Result<T, Error> {
    text.parse().map_err(|_| {
        Error::field_value(format_args!("{text:?} is not a valid {what}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subsecond_rounding() {
        // Shorter runs scale up.
        assert_eq!(round_subseconds("78912").unwrap(), (789120, false));
        assert_eq!(round_subseconds("5").unwrap(), (500000, false));
        // Seven digits round half to even in the last place.
        assert_eq!(round_subseconds("1234565").unwrap(), (123456, false));
        assert_eq!(round_subseconds("1234575").unwrap(), (123458, false));
        assert_eq!(round_subseconds("1234567").unwrap(), (123457, false));
        // Rounding can carry into the next second.
        assert_eq!(round_subseconds("9999999").unwrap(), (0, true));
    }

    #[test]
    fn boundary_rule() {
        let re = Regex::new(r"(\d{4})-(\d{2})-(\d{2})").unwrap();
        let ok = |input| find_bounded(&re, input).is_some();
        assert!(ok("1998-09-12"));
        assert!(ok("blah 1998-09-12 blah"));
        assert!(ok("(1998-09-12)"));
        assert!(ok("on 1998-09-12."));
        assert!(!ok("blah1998-09-12"));
        assert!(!ok("1998-09-12blah"));
        assert!(!ok("x(1998-09-12)"));
    }

    #[test]
    fn epoch_tokens() {
        let opts = ParseOptions::default();
        let t = parse("1591328104", "X", &opts).unwrap();
        assert_eq!(t.timestamp(), 1591328104);
        let t = parse("1591328104.308", "X", &opts).unwrap();
        assert_eq!(t.microsecond(), 308000);
        // `x` auto-rescales by magnitude.
        let t = parse("1591328104308", "x", &opts).unwrap();
        assert_eq!(t.to_string(), "2020-06-05T02:15:04.308000+00:00");
        let t = parse("1591328104308000", "x", &opts).unwrap();
        assert_eq!(t.to_string(), "2020-06-05T02:15:04.308000+00:00");
        // An epoch capture wins over calendar fields.
        let t = parse("1999-01-01 1591328104", "YYYY-MM-DD X", &opts)
            .unwrap();
        assert_eq!(t.timestamp(), 1591328104);
    }
}
