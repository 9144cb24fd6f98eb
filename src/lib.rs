/*!
A human-friendly civil datetime library.

Sundial revolves around one value type: [`Instant`], an absolute moment
carrying its civil (wall clock) representation in a specific [`Zone`].
Around it sit the two subsystems that make datetimes pleasant to work
with:

* a **token-based formatter and parser** sharing one Moment-style grammar
  (`YYYY-MM-DDTHH:mm:ssZZ`), plus a permissive ISO 8601/RFC 3339 reader,
* a **locale-aware humanizer** that turns durations into phrases like
  `"in 2 hours"`, and back.

Calendar arithmetic and the IANA zone database are delegated to the
platform services this crate builds on: [`chrono`] and [`chrono-tz`].

# Examples

Parse, convert, format:

```
use sundial::{Instant, Zone};

let t = Instant::from_iso("2013-05-11T21:23:58.970460+07:00")?;
let pacific = t.to(Zone::parse("US/Pacific")?);
assert_eq!(
    pacific.format("YYYY-MM-DD HH:mm:ss ZZ")?,
    "2013-05-11 07:23:58 -07:00",
);
# Ok::<(), sundial::Error>(())
```

Shift and humanize:

```
use sundial::{Instant, ToShift, Zone};

let t = Instant::from_date(2013, 5, 11, Zone::UTC)?;
let later = t.shift(2.hours())?;
assert_eq!(
    later.humanize_with(sundial::Humanize::new().relative_to(&t))?,
    "in 2 hours",
);
assert_eq!(t.dehumanize("in 2 hours")?, later);
# Ok::<(), sundial::Error>(())
```

The loosest entry point is [`get`], which dispatches over the [`Input`]
sum type:

```
use sundial::{get, Input};

let a = get(Input::from(1591328104308i64))?; // epoch, auto-scaled
let b = get(Input::from("2020-06-05T02:15:04.308"))?;
assert_eq!(a, b);
# Ok::<(), sundial::Error>(())
```

[`chrono`]: https://docs.rs/chrono
[`chrono-tz`]: https://docs.rs/chrono-tz
*/

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(missing_debug_implementations)]

#[macro_use]
mod logging;

mod error;
mod fmt;
mod humanize;
mod instant;
pub mod locale;
mod round;
mod zone;

pub use crate::{
    error::Error,
    fmt::set_format_cache_capacity,
    humanize::Humanize,
    instant::{Instant, InstantWith, Shift, ToShift},
    round::{InstantRange, Interval, SpanRange, Unit},
    zone::Zone,
};

// The platform vocabulary types that appear in this crate's API.
pub use chrono::{TimeDelta, Weekday};

/// `"YYYY-MM-DD HH:mm:ssZZ"`
pub const FORMAT_ATOM: &str = "YYYY-MM-DD HH:mm:ssZZ";
/// `"dddd, DD-MMM-YYYY HH:mm:ss ZZZ"`
pub const FORMAT_COOKIE: &str = "dddd, DD-MMM-YYYY HH:mm:ss ZZZ";
/// `"ddd, DD MMM YY HH:mm:ss Z"`
pub const FORMAT_RFC822: &str = "ddd, DD MMM YY HH:mm:ss Z";
/// `"dddd, DD-MMM-YY HH:mm:ss ZZZ"`
pub const FORMAT_RFC850: &str = "dddd, DD-MMM-YY HH:mm:ss ZZZ";
/// `"ddd, DD MMM YY HH:mm:ss Z"`
pub const FORMAT_RFC1036: &str = "ddd, DD MMM YY HH:mm:ss Z";
/// `"ddd, DD MMM YYYY HH:mm:ss Z"`
pub const FORMAT_RFC1123: &str = "ddd, DD MMM YYYY HH:mm:ss Z";
/// `"ddd, DD MMM YYYY HH:mm:ss Z"`
pub const FORMAT_RFC2822: &str = "ddd, DD MMM YYYY HH:mm:ss Z";
/// `"YYYY-MM-DD HH:mm:ssZZ"`
pub const FORMAT_RFC3339: &str = "YYYY-MM-DD HH:mm:ssZZ";
/// `"ddd, DD MMM YYYY HH:mm:ss Z"`
pub const FORMAT_RSS: &str = "ddd, DD MMM YYYY HH:mm:ss Z";
/// `"YYYY-MM-DD HH:mm:ssZZ"`
pub const FORMAT_W3C: &str = "YYYY-MM-DD HH:mm:ssZZ";

/// Returns the current moment in the system's local zone.
///
/// This is [`Instant::now`] under a friendlier name.
#[inline]
pub fn now() -> Instant {
    Instant::now()
}

/// Returns the current moment in the given zone.
#[inline]
pub fn now_in(zone: Zone) -> Instant {
    Instant::now_in(zone)
}

/// Returns the current moment in UTC.
#[inline]
pub fn utcnow() -> Instant {
    Instant::now_utc()
}

/// The heterogeneous inputs [`get`] dispatches over.
///
/// Most variants have `From` conversions, so call sites usually read
/// `get(Input::from(...))` or construct the variant directly.
#[derive(Clone, Copy, Debug)]
pub enum Input<'a> {
    /// The current moment (in UTC, or in [`GetOptions::tzinfo`]).
    Now,
    /// Epoch seconds, possibly fractional.
    EpochSeconds(f64),
    /// An epoch count auto-scaled by magnitude: seconds, then
    /// milliseconds, then microseconds.
    Epoch(i64),
    /// A string: tried as ISO 8601, then as a zone expression (yielding
    /// now in that zone), then as a humanized phrase relative to now.
    Text(&'a str),
    /// Civil fields, interpreted in [`GetOptions::tzinfo`] (default
    /// UTC).
    Civil {
        year: i16,
        month: i8,
        day: i8,
        hour: i8,
        minute: i8,
        second: i8,
        microsecond: i32,
    },
    /// A civil date at midnight.
    Date { year: i16, month: i8, day: i8 },
    /// The current moment in the given zone.
    InZone(Zone),
    /// An existing instant converted to the given zone.
    Converted(&'a Instant, Zone),
    /// A string parsed against one format.
    Formatted(&'a str, &'a str),
    /// A string parsed against each format in turn.
    MultiFormatted(&'a str, &'a [&'a str]),
}

impl<'a> From<f64> for Input<'a> {
    fn from(seconds: f64) -> Input<'a> {
        Input::EpochSeconds(seconds)
    }
}

impl<'a> From<i64> for Input<'a> {
    fn from(epoch: i64) -> Input<'a> {
        Input::Epoch(epoch)
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Input<'a> {
        Input::Text(text)
    }
}

impl<'a> From<Zone> for Input<'a> {
    fn from(zone: Zone) -> Input<'a> {
        Input::InZone(zone)
    }
}

impl<'a> From<(&'a str, &'a str)> for Input<'a> {
    fn from((input, format): (&'a str, &'a str)) -> Input<'a> {
        Input::Formatted(input, format)
    }
}

impl<'a> From<(&'a str, &'a [&'a str])> for Input<'a> {
    fn from((input, formats): (&'a str, &'a [&'a str])) -> Input<'a> {
        Input::MultiFormatted(input, formats)
    }
}

impl<'a> From<(&'a Instant, Zone)> for Input<'a> {
    fn from((instant, zone): (&'a Instant, Zone)) -> Input<'a> {
        Input::Converted(instant, zone)
    }
}

impl<'a> From<(i16, i8, i8)> for Input<'a> {
    fn from((year, month, day): (i16, i8, i8)) -> Input<'a> {
        Input::Date { year, month, day }
    }
}

impl<'a> From<(i16, i8, i8, i8, i8, i8)> for Input<'a> {
    fn from(
        (year, month, day, hour, minute, second): (i16, i8, i8, i8, i8, i8),
    ) -> Input<'a> {
        Input::Civil { year, month, day, hour, minute, second, microsecond: 0 }
    }
}

/// The keyword knobs understood by [`get_with`].
#[derive(Clone, Copy, Debug)]
pub struct GetOptions<'a> {
    /// The default zone for civil and string inputs that carry none.
    pub tzinfo: Option<Zone>,
    /// The locale used for parsing (month names, ordinals, phrases).
    pub locale: &'a str,
    /// Collapse whitespace runs in string inputs before parsing.
    pub normalize_whitespace: bool,
}

impl<'a> Default for GetOptions<'a> {
    fn default() -> GetOptions<'a> {
        GetOptions {
            tzinfo: None,
            locale: "en-us",
            normalize_whitespace: false,
        }
    }
}

/// Builds an [`Instant`] from any [`Input`], with default options.
///
/// # Example
///
/// ```
/// use sundial::{get, Input};
///
/// let t = get(Input::from(("January 1st, 2013", "MMMM Do, YYYY")))?;
/// assert_eq!(t.to_string(), "2013-01-01T00:00:00.000000+00:00");
/// # Ok::<(), sundial::Error>(())
/// ```
pub fn get<'a>(input: impl Into<Input<'a>>) -> Result<Instant, Error> {
    get_with(input, GetOptions::default())
}

/// Builds an [`Instant`] from any [`Input`].
///
/// # Example
///
/// ```
/// use sundial::{get_with, GetOptions, Input, Zone};
///
/// let opts = GetOptions {
///     tzinfo: Some(Zone::parse("US/Pacific")?),
///     ..GetOptions::default()
/// };
/// let t = get_with(Input::Date { year: 2013, month: 5, day: 5 }, opts)?;
/// assert_eq!(t.zone().iana_name(), Some("US/Pacific"));
/// # Ok::<(), sundial::Error>(())
/// ```
pub fn get_with<'a>(
    input: impl Into<Input<'a>>,
    options: GetOptions<'_>,
) -> Result<Instant, Error> {
    let parse_opts = || -> Result<fmt::parse::ParseOptions, Error> {
        Ok(fmt::parse::ParseOptions {
            locale: locale::get(options.locale)?,
            default_zone: options.tzinfo,
            normalize_whitespace: options.normalize_whitespace,
        })
    };
    let in_default_zone = |instant: Instant| match options.tzinfo {
        Some(zone) => instant.to(zone),
        None => instant,
    };

    match input.into() {
        Input::Now => Ok(match options.tzinfo {
            Some(zone) => Instant::now_in(zone),
            None => Instant::now_utc(),
        }),
        Input::EpochSeconds(seconds) => {
            Instant::from_epoch_seconds(seconds).map(in_default_zone)
        }
        Input::Epoch(epoch) => {
            Instant::from_epoch_auto(epoch).map(in_default_zone)
        }
        Input::Text(text) => get_text(text, &options, &parse_opts()?),
        Input::Civil { year, month, day, hour, minute, second, microsecond } => {
            Instant::from_civil(
                year,
                month,
                day,
                hour,
                minute,
                second,
                microsecond,
                options.tzinfo.unwrap_or(Zone::UTC),
            )
        }
        Input::Date { year, month, day } => Instant::from_date(
            year,
            month,
            day,
            options.tzinfo.unwrap_or(Zone::UTC),
        ),
        Input::InZone(zone) => Ok(Instant::now_in(zone)),
        Input::Converted(instant, zone) => Ok(instant.to(zone)),
        Input::Formatted(input, format) => {
            fmt::parse::parse(input, format, &parse_opts()?)
        }
        Input::MultiFormatted(input, formats) => {
            fmt::parse::parse_multi(input, formats, &parse_opts()?)
        }
    }
}

/// The string cascade: ISO datetime, then zone expression, then
/// humanized phrase.
fn get_text(
    text: &str,
    options: &GetOptions<'_>,
    parse_opts: &fmt::parse::ParseOptions,
) -> Result<Instant, Error> {
    if let Ok(instant) = fmt::iso::parse_iso(text, parse_opts) {
        return Ok(instant);
    }
    if let Ok(zone) = Zone::parse(text) {
        return Ok(Instant::now_in(zone));
    }
    let anchor = match options.tzinfo {
        Some(zone) => Instant::now_in(zone),
        None => Instant::now_utc(),
    };
    if let Ok(instant) = anchor.dehumanize_localized(text, options.locale) {
        return Ok(instant);
    }
    Err(Error::parse_match(format_args!(
        "could not read {text:?} as an ISO datetime, a zone expression \
         or a humanized phrase",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_dispatch() {
        let epoch = get(Input::from(0i64)).unwrap();
        assert_eq!(epoch.to_string(), "1970-01-01T00:00:00.000000+00:00");

        let iso = get(Input::from("1970-01-01T00:00:00")).unwrap();
        assert_eq!(iso, epoch);

        let fractional = get(Input::from(0.5f64)).unwrap();
        assert_eq!(fractional.microsecond(), 500000);

        let civil = get(Input::from((1970, 1, 1))).unwrap();
        assert_eq!(civil, epoch);

        let converted =
            get(Input::from((&epoch, Zone::parse("Asia/Tokyo").unwrap())))
                .unwrap();
        assert_eq!(converted, epoch);
        assert_eq!(converted.hour(), 9);

        assert!(get(Input::from("certainly not a datetime")).is_err());
    }

    #[test]
    fn get_text_zone_expression_yields_now() {
        let t = get(Input::from("America/New_York")).unwrap();
        assert_eq!(t.zone().iana_name(), Some("America/New_York"));
    }

    #[test]
    fn get_text_dehumanizes() {
        let t = get(Input::from("in 2 hours")).unwrap();
        let now = utcnow();
        let delta = t - now;
        assert!((delta.num_minutes() - 120).abs() <= 1);
    }

    #[test]
    fn format_constants_round_trip_through_parse() {
        let t = Instant::from_civil(2013, 5, 5, 12, 30, 45, 0, Zone::UTC)
            .unwrap();
        for format in [
            FORMAT_ATOM,
            FORMAT_RFC822,
            FORMAT_RFC850,
            FORMAT_RFC1036,
            FORMAT_RFC1123,
            FORMAT_RFC2822,
            FORMAT_RFC3339,
            FORMAT_RSS,
            FORMAT_W3C,
        ] {
            let rendered = t.format(format).unwrap();
            let parsed = Instant::from_format(&rendered, format).unwrap();
            assert_eq!(parsed, t, "format {format:?} via {rendered:?}");
        }
    }

    #[test]
    fn cookie_format_renders_the_zone_name() {
        let zone = Zone::parse("America/New_York").unwrap();
        let t = Instant::from_civil(1975, 12, 25, 14, 15, 16, 0, zone)
            .unwrap();
        assert_eq!(
            t.format(FORMAT_COOKIE).unwrap(),
            "Thursday, 25-Dec-1975 14:15:16 EST",
        );
    }
}
