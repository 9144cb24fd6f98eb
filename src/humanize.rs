/*!
The humanizer and its inverse: signed durations to locale phrases
(`"in 2 hours"`, `"an hour ago"`) and back.
*/

use regex::Regex;

use crate::{
    error::{Error, ErrorContext},
    instant::{Instant, Shift},
    locale::{self, Locale, Timeframe},
    round::Unit,
};

/// Options for [`Instant::humanize_with`].
///
/// The default describes the instant relative to now, in English, at an
/// automatically chosen granularity.
#[derive(Clone, Copy, Debug)]
pub struct Humanize<'a> {
    relative_to: Option<&'a Instant>,
    locale: &'a str,
    only_distance: bool,
    granularity: Granularity<'a>,
}

#[derive(Clone, Copy, Debug)]
enum Granularity<'a> {
    /// Pick the unit from the magnitude of the delta.
    Auto,
    /// Force a single unit.
    Unit(Unit),
    /// Walk the delta through several units, joined by the locale's
    /// conjunction.
    Units(&'a [Unit]),
}

impl<'a> Humanize<'a> {
    pub fn new() -> Humanize<'a> {
        Humanize {
            relative_to: None,
            locale: "en-us",
            only_distance: false,
            granularity: Granularity::Auto,
        }
    }

    /// Describes the instant relative to `other` instead of now.
    pub fn relative_to(self, other: &'a Instant) -> Humanize<'a> {
        Humanize { relative_to: Some(other), ..self }
    }

    /// Uses the given locale.
    pub fn locale(self, name: &'a str) -> Humanize<'a> {
        Humanize { locale: name, ..self }
    }

    /// Returns only the magnitude phrase, without the "in …"/"… ago"
    /// wrapping.
    pub fn only_distance(self, yes: bool) -> Humanize<'a> {
        Humanize { only_distance: yes, ..self }
    }

    /// Forces the unit instead of selecting one from the delta.
    pub fn granularity(self, unit: Unit) -> Humanize<'a> {
        Humanize { granularity: Granularity::Unit(unit), ..self }
    }

    /// Walks the delta through the given units greedily, largest first:
    /// `[Unit::Hour, Unit::Minute]` yields "in an hour and 6 minutes".
    pub fn granularities(self, units: &'a [Unit]) -> Humanize<'a> {
        Humanize { granularity: Granularity::Units(units), ..self }
    }
}

impl<'a> Default for Humanize<'a> {
    fn default() -> Humanize<'a> {
        Humanize::new()
    }
}

/// The order units are consumed in when a granularity list is given.
static GRANULARITY_ORDER: &[Unit] = &[
    Unit::Year,
    Unit::Month,
    Unit::Week,
    Unit::Day,
    Unit::Hour,
    Unit::Minute,
    Unit::Second,
];

pub(crate) fn humanize(
    instant: &Instant,
    options: &Humanize<'_>,
) -> Result<String, Error> {
    let locale = locale::get(options.locale)?;
    let anchor = match options.relative_to {
        Some(other) => *other,
        None => Instant::now_utc().to(instant.zone()),
    };
    let micros = instant.epoch_micros() - anchor.epoch_micros();
    let delta = (micros as f64 / 1_000_000.0).round() as i64;

    match options.granularity {
        Granularity::Auto => {
            let (timeframe, count) = select_timeframe(delta);
            Ok(locale.describe(timeframe, count, options.only_distance))
        }
        Granularity::Unit(unit) => {
            let seconds = supported_seconds(unit)?;
            if unit == Unit::Second && delta.abs() < 10 {
                return Ok(locale.describe(
                    Timeframe::Now,
                    0,
                    options.only_distance,
                ));
            }
            let count = (delta as f64 / seconds as f64).trunc() as i64;
            Ok(locale.describe(
                timeframe_for(unit, count),
                count,
                options.only_distance,
            ))
        }
        Granularity::Units(units) => {
            if units.is_empty() {
                return Err(Error::usage(format_args!(
                    "a granularity list must name at least one unit",
                )));
            }
            for &unit in units {
                supported_seconds(unit)?;
            }
            let sign = delta.signum();
            let mut remaining = delta.abs();
            let mut parts = Vec::with_capacity(units.len());
            for &unit in GRANULARITY_ORDER {
                if !units.contains(&unit) {
                    continue;
                }
                let seconds = supported_seconds(unit)?;
                let value = remaining / seconds;
                remaining -= value * seconds;
                parts.push((timeframe_for(unit, value), sign * value));
            }
            Ok(locale.describe_multi(&parts, options.only_distance))
        }
    }
}

/// The selection table: delta in seconds to (bucket, signed count).
fn select_timeframe(delta: i64) -> (Timeframe, i64) {
    let sign = delta.signum();
    let d = delta.abs();
    match d {
        0..=9 => (Timeframe::Now, 0),
        10..=44 => (Timeframe::Seconds, delta),
        45..=89 => (Timeframe::Minute, sign),
        90..=2_699 => (Timeframe::Minutes, sign * rounded(d, 60)),
        2_700..=5_399 => (Timeframe::Hour, sign),
        5_400..=80_999 => (Timeframe::Hours, sign * rounded(d, 3_600)),
        81_000..=129_599 => (Timeframe::Day, sign),
        129_600..=2_159_999 => {
            (Timeframe::Days, sign * rounded(d, 86_400))
        }
        2_160_000..=3_887_999 => (Timeframe::Month, sign),
        3_888_000..=29_807_999 => {
            (Timeframe::Months, sign * rounded(d, 2_592_000))
        }
        29_808_000..=47_087_999 => (Timeframe::Year, sign),
        _ => (Timeframe::Years, sign * rounded(d, 31_536_000)),
    }
}

fn rounded(d: i64, unit_seconds: i64) -> i64 {
    (d as f64 / unit_seconds as f64).round() as i64
}

fn supported_seconds(unit: Unit) -> Result<i64, Error> {
    unit.humanize_seconds().ok_or_else(|| {
        Error::usage(format_args!(
            "the humanizer does not speak in {}",
            unit.plural(),
        ))
    })
}

/// The bucket for a forced unit: singular when the count is exactly one
/// in magnitude, else plural.
fn timeframe_for(unit: Unit, count: i64) -> Timeframe {
    let singular = count.abs() == 1;
    match unit {
        Unit::Year => {
            if singular {
                Timeframe::Year
            } else {
                Timeframe::Years
            }
        }
        Unit::Month => {
            if singular {
                Timeframe::Month
            } else {
                Timeframe::Months
            }
        }
        Unit::Week => {
            if singular {
                Timeframe::Week
            } else {
                Timeframe::Weeks
            }
        }
        Unit::Day => {
            if singular {
                Timeframe::Day
            } else {
                Timeframe::Days
            }
        }
        Unit::Hour => {
            if singular {
                Timeframe::Hour
            } else {
                Timeframe::Hours
            }
        }
        Unit::Minute => {
            if singular {
                Timeframe::Minute
            } else {
                Timeframe::Minutes
            }
        }
        _ => {
            if singular {
                Timeframe::Second
            } else {
                Timeframe::Seconds
            }
        }
    }
}

/// Reverses a humanized phrase into a shift applied to `instant`.
pub(crate) fn dehumanize(
    instant: &Instant,
    input: &str,
    locale_name: &str,
) -> Result<Instant, Error> {
    let locale = locale::get(locale_name)?;

    let (past_template, future_template) =
        locale::relative_templates(locale);
    let past = template_regex(past_template)?;
    let future = template_regex(future_template)?;
    let is_past = past.is_match(input);
    let is_future = future.is_match(input);

    let mut counts: Vec<(Unit, i64)> = Vec::new();
    for &unit in GRANULARITY_ORDER {
        if let Some(count) = match_unit(locale, unit, input)? {
            counts.push((unit, count));
        }
    }

    if counts.is_empty() {
        // "just now" and friends mean a zero delta.
        for form in locale::timeframe_forms(locale, Timeframe::Now) {
            if literal_regex(form)?.is_match(input) {
                return Ok(*instant);
            }
        }
        return Err(Error::dehumanize(format_args!(
            "input {input:?} matches no timeframe known to locale \
             {locale_name:?}",
        )));
    }
    let sign = match (is_past, is_future) {
        (true, false) => -1,
        (false, true) => 1,
        (true, true) => {
            return Err(Error::dehumanize(format_args!(
                "input {input:?} contains both past and future markers",
            )))
        }
        (false, false) => {
            return Err(Error::dehumanize(format_args!(
                "input {input:?} has no relative marker; expected \
                 something like {:?} or {:?}",
                locale.format_relative("...", -1),
                locale.format_relative("...", 1),
            )))
        }
    };

    let mut shift = Shift::new();
    for (unit, count) in counts {
        let n = sign * count;
        shift = match unit {
            Unit::Year => shift.years(n),
            Unit::Month => shift.months(n),
            Unit::Week => shift.weeks(n),
            Unit::Day => shift.days(n),
            Unit::Hour => shift.hours(n),
            Unit::Minute => shift.minutes(n),
            _ => shift.seconds(n),
        };
    }
    instant
        .shift(shift)
        .context(Error::dehumanize(format_args!(
            "phrase {input:?} shifts out of the supported range",
        )))
}

/// Finds a count for one unit: plural templates first (they capture the
/// digits), then fixed singular forms (an implied count of one).
fn match_unit(
    locale: &'static dyn Locale,
    unit: Unit,
    input: &str,
) -> Result<Option<i64>, Error> {
    let singular = timeframe_for(unit, 1);
    let mut forms = locale::timeframe_forms(locale, singular.pluralized());
    forms.extend(locale::timeframe_forms(locale, singular));
    // Templated forms first, longer literals before shorter ones, so
    // that "2 hours" is read as a count and "шагov"-style prefixes don't
    // shadow their longer spellings.
    forms.sort_by_key(|form| {
        (!form.contains("{0}"), core::cmp::Reverse(form.len()))
    });
    for form in forms {
        if form.contains("{0}") {
            let re = counted_regex(form)?;
            if let Some(caps) = re.captures(input) {
                let digits = &caps[1];
                let count = digits.parse::<i64>().map_err(|_| {
                    Error::dehumanize(format_args!(
                        "count {digits:?} is out of range",
                    ))
                })?;
                return Ok(Some(count));
            }
        } else if literal_regex(form)?.is_match(input) {
            return Ok(Some(1));
        }
    }
    Ok(None)
}

/// A case-insensitive regex matching a relative template with anything in
/// the placeholder: `"{0} ago"` becomes `(?i).+ ago`.
fn template_regex(template: &str) -> Result<Regex, Error> {
    let escaped = regex::escape(template);
    let pattern = escaped.replace(r"\{0\}", ".+");
    Regex::new(&format!("(?i){pattern}")).map_err(|regex_err| {
        Error::dehumanize(format_args!(
            "relative template {template:?} is unusable: {regex_err}",
        ))
    })
}

/// A case-insensitive regex matching a timeframe template, capturing the
/// count: `"{0} hours"` becomes `(?i)(\d+) hours`.
fn counted_regex(template: &str) -> Result<Regex, Error> {
    let escaped = regex::escape(template);
    let pattern = escaped.replace(r"\{0\}", r"(\d+)");
    Regex::new(&format!("(?i){pattern}")).map_err(|regex_err| {
        Error::dehumanize(format_args!(
            "timeframe template {template:?} is unusable: {regex_err}",
        ))
    })
}

fn literal_regex(text: &str) -> Result<Regex, Error> {
    Regex::new(&format!("(?i){}", regex::escape(text))).map_err(
        |regex_err| {
            Error::dehumanize(format_args!(
                "timeframe {text:?} is unusable: {regex_err}",
            ))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_table() {
        assert_eq!(select_timeframe(0), (Timeframe::Now, 0));
        assert_eq!(select_timeframe(9), (Timeframe::Now, 0));
        assert_eq!(select_timeframe(10), (Timeframe::Seconds, 10));
        assert_eq!(select_timeframe(-30), (Timeframe::Seconds, -30));
        assert_eq!(select_timeframe(45), (Timeframe::Minute, 1));
        assert_eq!(select_timeframe(-89), (Timeframe::Minute, -1));
        assert_eq!(select_timeframe(90), (Timeframe::Minutes, 2));
        assert_eq!(select_timeframe(2_699), (Timeframe::Minutes, 45));
        assert_eq!(select_timeframe(2_700), (Timeframe::Hour, 1));
        assert_eq!(select_timeframe(5_400), (Timeframe::Hours, 2));
        assert_eq!(select_timeframe(80_999), (Timeframe::Hours, 22));
        assert_eq!(select_timeframe(81_000), (Timeframe::Day, 1));
        assert_eq!(select_timeframe(129_600), (Timeframe::Days, 2));
        assert_eq!(select_timeframe(2_160_000), (Timeframe::Month, 1));
        assert_eq!(select_timeframe(3_888_000), (Timeframe::Months, 2));
        assert_eq!(select_timeframe(29_808_000), (Timeframe::Year, 1));
        assert_eq!(
            select_timeframe(100_000_000),
            (Timeframe::Years, 3),
        );
    }
}
