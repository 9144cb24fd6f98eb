use core::ops::{Add, Sub};

use chrono::{
    Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike, Weekday,
};

use crate::{
    error::{err, Error},
    fmt,
    humanize::{self, Humanize},
    locale,
    round::{Bounds, InstantRange, Interval, SpanRange, Unit},
    zone::Zone,
};

/// An absolute moment in time, together with its civil representation in a
/// specific time zone.
///
/// An `Instant` is always "aware": it carries a [`Zone`], and its
/// broken-down fields (`year` through `microsecond`) are the wall time in
/// that zone. The [`fold`](Instant::fold) flag disambiguates wall times
/// that occur twice during a DST fall-back.
///
/// `Instant` is immutable. Everything that looks like mutation, such as
/// [`with`](Instant::with), [`shift`](Instant::shift), [`to`](Instant::to)
/// and [`floor`](Instant::floor), derives a new value.
///
/// Comparisons (and equality) are on the absolute moment, so converting an
/// instant between zones never changes how it orders:
///
/// ```
/// use sundial::{Instant, Zone};
///
/// let t = Instant::from_civil(2013, 5, 5, 12, 30, 45, 0, Zone::UTC)?;
/// let pacific = t.to(Zone::parse("US/Pacific")?);
/// assert_eq!(t, pacific);
/// assert_eq!(pacific.hour(), 5);
/// # Ok::<(), sundial::Error>(())
/// ```
#[derive(Clone, Copy)]
pub struct Instant {
    /// The wall time in `zone`, microsecond precision.
    civil: NaiveDateTime,
    /// Seconds east of UTC in force at this moment. Derived from `zone`
    /// at construction; caching it makes comparisons and offset-carrying
    /// formats cheap.
    offset: i32,
    zone: Zone,
    fold: u8,
}

impl Instant {
    /// The largest epoch second this crate accepts: 9999-12-31T23:59:59Z.
    ///
    /// Numeric inputs larger than this (see [`Instant::from_epoch_auto`])
    /// are read as milliseconds, then as microseconds.
    pub const MAX_TIMESTAMP: i64 = 253_402_318_799;

    /// [`Instant::MAX_TIMESTAMP`] in milliseconds.
    pub const MAX_TIMESTAMP_MS: i64 = Instant::MAX_TIMESTAMP * 1_000;

    /// [`Instant::MAX_TIMESTAMP`] in microseconds.
    pub const MAX_TIMESTAMP_US: i64 = Instant::MAX_TIMESTAMP * 1_000_000;

    /// The smallest epoch second this crate accepts: 0001-01-01T00:00:00Z.
    pub const MIN_TIMESTAMP: i64 = -62_135_596_800;

    /// Returns the current moment in the UTC zone.
    #[inline]
    pub fn now_utc() -> Instant {
        let utc = truncate_to_micros(chrono::Utc::now().naive_utc());
        Instant { civil: utc, offset: 0, zone: Zone::UTC, fold: 0 }
    }

    /// Returns the current moment in the system's local zone.
    #[inline]
    pub fn now() -> Instant {
        Instant::now_utc().to(Zone::local())
    }

    /// Returns the current moment in the given zone.
    #[inline]
    pub fn now_in(zone: Zone) -> Instant {
        Instant::now_utc().to(zone)
    }

    /// Creates an instant from civil fields in the given zone, with
    /// `fold` 0.
    ///
    /// A wall time that falls in a spring-forward gap resolves to the
    /// first real instant after the gap. Use [`Instant::with`] to select
    /// `fold` 1 for wall times repeated by a fall-back.
    ///
    /// # Errors
    ///
    /// This returns an error when the fields do not name a real civil
    /// datetime (month 13, February 30th, minute 61, ...) or when the
    /// year is outside `1..=9999`.
    ///
    /// # Example
    ///
    /// ```
    /// use sundial::{Instant, Zone};
    ///
    /// let t = Instant::from_civil(1975, 12, 25, 14, 15, 16, 0, Zone::UTC)?;
    /// assert_eq!(t.to_string(), "1975-12-25T14:15:16.000000+00:00");
    /// assert!(Instant::from_civil(2013, 2, 30, 0, 0, 0, 0, Zone::UTC).is_err());
    /// # Ok::<(), sundial::Error>(())
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn from_civil(
        year: i16,
        month: i8,
        day: i8,
        hour: i8,
        minute: i8,
        second: i8,
        microsecond: i32,
        zone: Zone,
    ) -> Result<Instant, Error> {
        let civil = civil_datetime(
            i32::from(year),
            // Negative inputs wrap to values the validator rejects.
            u32::from(month as u8),
            u32::from(day as u8),
            u32::from(hour as u8),
            u32::from(minute as u8),
            u32::from(second as u8),
            microsecond as u32,
        )?;
        Instant::from_naive_in(civil, zone, 0)
    }

    /// Creates an instant at midnight of the given civil date.
    pub fn from_date(
        year: i16,
        month: i8,
        day: i8,
        zone: Zone,
    ) -> Result<Instant, Error> {
        Instant::from_civil(year, month, day, 0, 0, 0, 0, zone)
    }

    /// Creates an instant from a possibly fractional count of epoch
    /// seconds, in UTC.
    ///
    /// # Errors
    ///
    /// This returns an error when the value is not finite or falls outside
    /// years 1 through 9999.
    ///
    /// # Example
    ///
    /// ```
    /// use sundial::Instant;
    ///
    /// let t = Instant::from_epoch_seconds(1591328104.308)?;
    /// assert_eq!(t.to_string(), "2020-06-05T02:15:04.308000+00:00");
    /// # Ok::<(), sundial::Error>(())
    /// ```
    pub fn from_epoch_seconds(seconds: f64) -> Result<Instant, Error> {
        if !seconds.is_finite() {
            return Err(Error::field_value(format_args!(
                "epoch seconds must be finite, got {seconds}",
            )));
        }
        let micros = seconds * 1_000_000.0;
        if micros < Instant::MIN_TIMESTAMP as f64 * 1_000_000.0
            || micros > Instant::MAX_TIMESTAMP_US as f64
        {
            return Err(Error::range(
                "epoch seconds",
                seconds as i64,
                Instant::MIN_TIMESTAMP,
                Instant::MAX_TIMESTAMP,
            ));
        }
        Instant::from_epoch_micros(micros.round() as i64)
    }

    /// Creates an instant from epoch milliseconds, in UTC.
    pub fn from_epoch_millis(millis: i64) -> Result<Instant, Error> {
        let micros = millis.checked_mul(1_000).ok_or_else(|| {
            Error::range(
                "epoch milliseconds",
                millis,
                -Instant::MAX_TIMESTAMP_MS,
                Instant::MAX_TIMESTAMP_MS,
            )
        })?;
        Instant::from_epoch_micros(micros)
    }

    /// Creates an instant from epoch microseconds, in UTC.
    pub fn from_epoch_micros(micros: i64) -> Result<Instant, Error> {
        let range_err = || {
            Error::range(
                "epoch microseconds",
                micros,
                Instant::MIN_TIMESTAMP.saturating_mul(1_000_000),
                Instant::MAX_TIMESTAMP_US,
            )
        };
        if micros < Instant::MIN_TIMESTAMP.saturating_mul(1_000_000)
            || micros > Instant::MAX_TIMESTAMP_US
        {
            return Err(range_err());
        }
        let utc = chrono::DateTime::from_timestamp_micros(micros)
            .ok_or_else(range_err)?
            .naive_utc();
        Ok(Instant { civil: utc, offset: 0, zone: Zone::UTC, fold: 0 })
    }

    /// Creates an instant from an epoch count whose scale is inferred
    /// from its magnitude: seconds when it fits, then milliseconds, then
    /// microseconds.
    ///
    /// # Example
    ///
    /// ```
    /// use sundial::Instant;
    ///
    /// // Too big for seconds, so read as milliseconds.
    /// let t = Instant::from_epoch_auto(1591328104308)?;
    /// assert_eq!(t.to_string(), "2020-06-05T02:15:04.308000+00:00");
    /// # Ok::<(), sundial::Error>(())
    /// ```
    pub fn from_epoch_auto(value: i64) -> Result<Instant, Error> {
        let magnitude = value.unsigned_abs();
        if magnitude <= Instant::MAX_TIMESTAMP as u64 {
            // Cannot overflow: the magnitude is at most ~2.5e11.
            Instant::from_epoch_micros(value * 1_000_000)
        } else if magnitude <= Instant::MAX_TIMESTAMP_MS as u64 {
            Instant::from_epoch_micros(value * 1_000)
        } else if magnitude <= Instant::MAX_TIMESTAMP_US as u64 {
            Instant::from_epoch_micros(value)
        } else {
            Err(Error::field_value(format_args!(
                "epoch value {value} is out of range even read as \
                 microseconds",
            )))
        }
    }

    /// Parses a (superset of) ISO 8601 / RFC 3339 string.
    ///
    /// # Example
    ///
    /// ```
    /// use sundial::Instant;
    ///
    /// let t = Instant::from_iso("2013-02-03T04:05:06.78912Z")?;
    /// assert_eq!(t.to_string(), "2013-02-03T04:05:06.789120+00:00");
    /// # Ok::<(), sundial::Error>(())
    /// ```
    pub fn from_iso(input: &str) -> Result<Instant, Error> {
        fmt::iso::parse_iso(input, &fmt::parse::ParseOptions::default())
    }

    /// Parses `input` against a format string, in the default (English)
    /// locale. The instant is built in UTC unless the input carries a
    /// zone.
    ///
    /// # Example
    ///
    /// ```
    /// use sundial::Instant;
    ///
    /// let t = Instant::from_format("January 1st, 2013", "MMMM Do, YYYY")?;
    /// assert_eq!(t.to_string(), "2013-01-01T00:00:00.000000+00:00");
    /// # Ok::<(), sundial::Error>(())
    /// ```
    pub fn from_format(input: &str, format: &str) -> Result<Instant, Error> {
        fmt::parse::parse(input, format, &fmt::parse::ParseOptions::default())
    }

    /// Like [`Instant::from_format`], with an explicit locale.
    pub fn from_format_localized(
        input: &str,
        format: &str,
        locale_name: &str,
    ) -> Result<Instant, Error> {
        let opts = fmt::parse::ParseOptions {
            locale: locale::get(locale_name)?,
            ..Default::default()
        };
        fmt::parse::parse(input, format, &opts)
    }

    /// Parses `input` against each format in turn, returning the first
    /// success.
    ///
    /// # Errors
    ///
    /// When every format fails, the error cites all of them.
    pub fn from_formats(
        input: &str,
        formats: &[&str],
    ) -> Result<Instant, Error> {
        fmt::parse::parse_multi(
            input,
            formats,
            &fmt::parse::ParseOptions::default(),
        )
    }

    /// Builds an instant from a wall time in the given zone.
    ///
    /// This is the one true constructor: everything else funnels through
    /// it. Gap normalization happens here, by re-reading the wall time
    /// from the resolved absolute time.
    pub(crate) fn from_naive_in(
        civil: NaiveDateTime,
        zone: Zone,
        fold: u8,
    ) -> Result<Instant, Error> {
        let civil = truncate_to_micros(civil);
        let offset = zone.offset_seconds_for_local(civil, fold);
        let utc = civil - TimeDelta::seconds(i64::from(offset));
        let offset = zone.offset_seconds_at(&utc);
        let wall = utc + TimeDelta::seconds(i64::from(offset));
        check_year(wall)?;
        Ok(Instant { civil: wall, offset, zone, fold })
    }

    /// Builds an instant from an absolute time (a UTC wall time) viewed
    /// through the given zone.
    pub(crate) fn from_utc_naive(utc: NaiveDateTime, zone: Zone) -> Instant {
        let utc = truncate_to_micros(utc);
        let offset = zone.offset_seconds_at(&utc);
        let civil = utc + TimeDelta::seconds(i64::from(offset));
        Instant { civil, offset, zone, fold: 0 }
    }

    /// The absolute time, as a UTC wall time.
    pub(crate) fn utc(&self) -> NaiveDateTime {
        self.civil - TimeDelta::seconds(i64::from(self.offset))
    }

    /// The year.
    #[inline]
    pub fn year(&self) -> i16 {
        // In range by construction: years are confined to 1..=9999.
        self.civil.year() as i16
    }

    /// The month, 1-12.
    #[inline]
    pub fn month(&self) -> i8 {
        self.civil.month() as i8
    }

    /// The day of the month, 1-31.
    #[inline]
    pub fn day(&self) -> i8 {
        self.civil.day() as i8
    }

    /// The hour, 0-23.
    #[inline]
    pub fn hour(&self) -> i8 {
        self.civil.hour() as i8
    }

    /// The minute, 0-59.
    #[inline]
    pub fn minute(&self) -> i8 {
        self.civil.minute() as i8
    }

    /// The second, 0-59.
    #[inline]
    pub fn second(&self) -> i8 {
        self.civil.second() as i8
    }

    /// The microsecond, 0-999999.
    #[inline]
    pub fn microsecond(&self) -> i32 {
        (self.civil.nanosecond() / 1_000) as i32
    }

    /// The fold flag: 0 selects the earlier of a repeated wall time
    /// during a DST fall-back, 1 the later.
    #[inline]
    pub fn fold(&self) -> u8 {
        self.fold
    }

    /// The zone this instant's civil fields are expressed in.
    #[inline]
    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// The offset from UTC, in seconds, in force at this instant.
    #[inline]
    pub fn utc_offset_seconds(&self) -> i32 {
        self.offset
    }

    pub(crate) fn offset_seconds(&self) -> i32 {
        self.offset
    }

    /// The zone's display name at this instant, e.g. `EST` for a named
    /// zone in winter.
    pub fn zone_name(&self) -> String {
        self.zone.name_at(&self.utc())
    }

    /// The wall time as a plain civil datetime, without the zone.
    #[inline]
    pub fn to_civil(&self) -> NaiveDateTime {
        self.civil
    }

    /// The day of the week.
    #[inline]
    pub fn weekday(&self) -> Weekday {
        self.civil.weekday()
    }

    /// The ISO day of the week: 1 (Monday) through 7 (Sunday).
    #[inline]
    pub fn isoweekday(&self) -> i8 {
        self.civil.weekday().number_from_monday() as i8
    }

    /// The day of the year, 1-366.
    #[inline]
    pub fn day_of_year(&self) -> i16 {
        self.civil.ordinal() as i16
    }

    /// The ISO week date: (week-year, week number, ISO weekday).
    pub fn week_date(&self) -> (i16, i8, i8) {
        let week = self.civil.iso_week();
        (week.year() as i16, week.week() as i8, self.isoweekday())
    }

    /// The quarter, 1-4.
    #[inline]
    pub fn quarter(&self) -> i8 {
        (self.month() - 1) / 3 + 1
    }

    /// Whole seconds since the epoch (floored, like the platform's).
    #[inline]
    pub fn timestamp(&self) -> i64 {
        self.utc().and_utc().timestamp()
    }

    /// Seconds since the epoch, with the fractional part.
    #[inline]
    pub fn float_timestamp(&self) -> f64 {
        self.epoch_micros() as f64 / 1_000_000.0
    }

    /// Microseconds since the epoch.
    #[inline]
    pub fn epoch_micros(&self) -> i64 {
        self.utc().and_utc().timestamp_micros()
    }

    /// Re-expresses this instant in another zone. The absolute moment is
    /// unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use sundial::{Instant, Zone};
    ///
    /// let utc = Instant::from_civil(2013, 5, 5, 12, 30, 0, 0, Zone::UTC)?;
    /// let tokyo = utc.to(Zone::parse("Asia/Tokyo")?);
    /// assert_eq!(tokyo.hour(), 21);
    /// assert_eq!(tokyo, utc);
    /// # Ok::<(), sundial::Error>(())
    /// ```
    #[inline]
    pub fn to(&self, zone: Zone) -> Instant {
        Instant::from_utc_naive(self.utc(), zone)
    }

    /// Returns a builder that overwrites absolute fields, leaving the
    /// rest of the instant alone.
    ///
    /// # Example
    ///
    /// ```
    /// use sundial::{Instant, Zone};
    ///
    /// let t = Instant::from_date(2013, 5, 5, Zone::UTC)?;
    /// let t = t.with().year(2014).hour(9).build()?;
    /// assert_eq!(t.to_string(), "2014-05-05T09:00:00.000000+00:00");
    /// // The month/day combination is validated.
    /// let t = Instant::from_date(2013, 1, 31, Zone::UTC)?;
    /// assert!(t.with().month(2).build().is_err());
    /// # Ok::<(), sundial::Error>(())
    /// ```
    #[inline]
    pub fn with(&self) -> InstantWith {
        InstantWith::new(*self)
    }

    /// Returns this instant moved by the given deltas. Calendar units
    /// apply before clock units, and a weekday target applies last.
    ///
    /// Month and year arithmetic clamps to the end of the month:
    /// 2015-01-31 plus one month is 2015-02-28. A shift that lands on an
    /// imaginary wall time (a spring-forward gap) resolves to the first
    /// real instant after the gap.
    ///
    /// # Errors
    ///
    /// This returns an error when the result leaves years 1 through 9999.
    ///
    /// # Example
    ///
    /// ```
    /// use sundial::{Instant, ToShift, Zone};
    ///
    /// let t = Instant::from_date(2013, 5, 5, Zone::UTC)?;
    /// assert_eq!(
    ///     t.shift(1.month().days(2))?.to_string(),
    ///     "2013-06-07T00:00:00.000000+00:00",
    /// );
    ///
    /// // End-of-month clamp.
    /// let t = Instant::from_date(2015, 1, 31, Zone::UTC)?;
    /// assert_eq!(t.shift(1.month())?.day(), 28);
    /// # Ok::<(), sundial::Error>(())
    /// ```
    pub fn shift(&self, shift: Shift) -> Result<Instant, Error> {
        let overflowed =
            || Error::field_value(format_args!("shift result is out of range"));

        let mut date = self.civil.date();
        let months = shift
            .years
            .checked_mul(12)
            .and_then(|m| m.checked_add(shift.quarters.checked_mul(3)?))
            .and_then(|m| m.checked_add(shift.months))
            .ok_or_else(overflowed)?;
        if months != 0 {
            date = shift_months(date, months).ok_or_else(overflowed)?;
        }
        let days = shift
            .weeks
            .checked_mul(7)
            .and_then(|d| d.checked_add(shift.days))
            .ok_or_else(overflowed)?;
        if days != 0 {
            date = date
                .checked_add_signed(TimeDelta::days(days))
                .ok_or_else(overflowed)?;
        }

        let micros = shift
            .hours
            .checked_mul(3_600_000_000)
            .and_then(|us| {
                us.checked_add(shift.minutes.checked_mul(60_000_000)?)
            })
            .and_then(|us| {
                us.checked_add(shift.seconds.checked_mul(1_000_000)?)
            })
            .and_then(|us| us.checked_add(shift.microseconds))
            .ok_or_else(overflowed)?;
        let mut civil = date.and_time(self.civil.time());
        if micros != 0 {
            civil = civil
                .checked_add_signed(TimeDelta::microseconds(micros))
                .ok_or_else(overflowed)?;
        }

        if let Some((weekday, nth)) = shift.weekday {
            let date = shift_to_weekday(civil.date(), weekday, nth)?;
            civil = date.and_time(civil.time());
        }

        Instant::from_naive_in(civil, self.zone, self.fold)
    }

    /// Shifts by a signed count of one unit. This is what the range
    /// iterators and the de-humanizer are built on.
    pub(crate) fn shift_by(&self, unit: Unit, n: i64) -> Result<Instant, Error> {
        self.shift(unit_shift(unit, n))
    }

    /// Returns this instant truncated to the start of the given frame.
    /// Weeks start on Monday.
    ///
    /// # Example
    ///
    /// ```
    /// use sundial::{Instant, Unit, Zone};
    ///
    /// let t = Instant::from_civil(2013, 5, 5, 12, 30, 45, 123456, Zone::UTC)?;
    /// assert_eq!(
    ///     t.floor(Unit::Hour)?.to_string(),
    ///     "2013-05-05T12:00:00.000000+00:00",
    /// );
    /// assert_eq!(t.floor(Unit::Quarter)?.month(), 4);
    /// # Ok::<(), sundial::Error>(())
    /// ```
    pub fn floor(&self, unit: Unit) -> Result<Instant, Error> {
        if unit == Unit::Microsecond {
            return Ok(*self);
        }
        let c = self.civil;
        let invalid =
            || err!("flooring {self} to {} failed", unit.singular());
        let date = match unit {
            Unit::Year => NaiveDate::from_ymd_opt(c.year(), 1, 1),
            Unit::Quarter => {
                let month = ((c.month() - 1) / 3) * 3 + 1;
                NaiveDate::from_ymd_opt(c.year(), month, 1)
            }
            Unit::Month => NaiveDate::from_ymd_opt(c.year(), c.month(), 1),
            Unit::Week => {
                let back = i64::from(c.weekday().num_days_from_monday());
                c.date().checked_sub_signed(TimeDelta::days(back))
            }
            _ => Some(c.date()),
        }
        .ok_or_else(invalid)?;
        let (hour, minute, second) = match unit {
            Unit::Hour => (c.hour(), 0, 0),
            Unit::Minute => (c.hour(), c.minute(), 0),
            Unit::Second => (c.hour(), c.minute(), c.second()),
            _ => (0, 0, 0),
        };
        let civil = date
            .and_hms_micro_opt(hour, minute, second, 0)
            .ok_or_else(invalid)?;
        Instant::from_naive_in(civil, self.zone, 0)
    }

    /// Returns the last representable microsecond of the frame containing
    /// this instant.
    ///
    /// ```
    /// use sundial::{Instant, Unit, Zone};
    ///
    /// let t = Instant::from_civil(2013, 5, 5, 12, 30, 45, 0, Zone::UTC)?;
    /// assert_eq!(
    ///     t.ceil(Unit::Day)?.to_string(),
    ///     "2013-05-05T23:59:59.999999+00:00",
    /// );
    /// # Ok::<(), sundial::Error>(())
    /// ```
    pub fn ceil(&self, unit: Unit) -> Result<Instant, Error> {
        Ok(self.span(unit)?.1)
    }

    /// Returns the `(floor, ceil)` pair for the frame containing this
    /// instant.
    pub fn span(&self, unit: Unit) -> Result<(Instant, Instant), Error> {
        self.span_bounded(
            unit,
            1,
            Bounds { lo_closed: true, hi_closed: true },
        )
    }

    /// Like [`Instant::span`], covering `count` frames, with explicit
    /// bounds.
    ///
    /// A closed end (`]`) ends on the frame's last representable
    /// microsecond; an open end (`)`) ends on the next frame's first. The
    /// inverse holds at the start.
    pub fn span_with(
        &self,
        unit: Unit,
        count: i64,
        bounds: &str,
    ) -> Result<(Instant, Instant), Error> {
        self.span_bounded(unit, count, Bounds::parse(bounds)?)
    }

    pub(crate) fn span_bounded(
        &self,
        unit: Unit,
        count: i64,
        bounds: Bounds,
    ) -> Result<(Instant, Instant), Error> {
        if count < 1 {
            return Err(Error::usage(format_args!(
                "span count must be at least 1, got {count}",
            )));
        }
        let mut floor = self.floor(unit)?;
        // A closed end folds the -1µs into the same shift, so a span of
        // the final supported frame never materializes a year-10000
        // boundary instant.
        let adjust = if bounds.hi_closed { -1 } else { 0 };
        let ceil = if unit == Unit::Microsecond {
            floor.shift(Shift::new().microseconds(count + adjust))?
        } else {
            floor.shift(unit_shift(unit, count).microseconds(adjust))?
        };
        if !bounds.lo_closed {
            floor = floor.shift(Shift::new().microseconds(1))?;
        }
        Ok((floor, ceil))
    }

    /// Returns a lazy sequence of instants from `start` through `end`,
    /// one frame apart.
    ///
    /// # Example
    ///
    /// ```
    /// use sundial::{Instant, Unit, Zone};
    ///
    /// let start = Instant::from_date(2013, 5, 5, Zone::UTC)?;
    /// let end = Instant::from_date(2013, 5, 8, Zone::UTC)?;
    /// let days: Vec<i8> = Instant::range(Unit::Day, &start, &end)
    ///     .map(|t| t.day())
    ///     .collect();
    /// assert_eq!(days, vec![5, 6, 7, 8]);
    /// # Ok::<(), sundial::Error>(())
    /// ```
    pub fn range(unit: Unit, start: &Instant, end: &Instant) -> InstantRange {
        InstantRange { unit, start: *start, end: *end, i: 0 }
    }

    /// Returns a lazy sequence of `(floor, ceil)` spans covering `start`
    /// through `end` frame by frame. The first span's floor may precede
    /// `start`, since spans align to frame boundaries.
    pub fn span_range(
        unit: Unit,
        start: &Instant,
        end: &Instant,
        bounds: &str,
    ) -> Result<SpanRange, Error> {
        let bounds = Bounds::parse(bounds)?;
        let floored = start.floor(unit)?;
        Ok(SpanRange {
            range: Instant::range(unit, &floored, end),
            bounds,
        })
    }

    /// Returns a lazy sequence of spans covering `start` through `end` in
    /// chunks of `chunk` frames apiece.
    ///
    /// # Errors
    ///
    /// A zero chunk size is a usage error.
    pub fn interval(
        unit: Unit,
        start: &Instant,
        end: &Instant,
        chunk: usize,
        bounds: &str,
    ) -> Result<Interval, Error> {
        if chunk == 0 {
            return Err(Error::usage(format_args!(
                "interval chunk size must be at least 1",
            )));
        }
        Ok(Interval {
            spans: Instant::span_range(unit, start, end, bounds)?,
            chunk,
        })
    }

    /// Returns true when this instant lies between `lo` and `hi`, with
    /// the given bounds (e.g. `"()"` for strict, `"[]"` for inclusive).
    ///
    /// # Errors
    ///
    /// A bounds string that isn't two bracket characters is a usage
    /// error.
    pub fn is_between(
        &self,
        lo: &Instant,
        hi: &Instant,
        bounds: &str,
    ) -> Result<bool, Error> {
        let bounds = Bounds::parse(bounds)?;
        let above_lo =
            if bounds.lo_closed { self >= lo } else { self > lo };
        let below_hi =
            if bounds.hi_closed { self <= hi } else { self < hi };
        Ok(above_lo && below_hi)
    }

    /// Like [`Add`], but fallible.
    pub fn checked_add(&self, delta: TimeDelta) -> Result<Instant, Error> {
        let utc = self
            .utc()
            .checked_add_signed(delta)
            .ok_or_else(|| err!("adding {delta} to {self} overflowed"))?;
        check_year(utc)?;
        Ok(Instant::from_utc_naive(utc, self.zone))
    }

    /// Like [`Sub`], but fallible.
    pub fn checked_sub(&self, delta: TimeDelta) -> Result<Instant, Error> {
        self.checked_add(-delta)
    }

    /// Renders this instant under a format string, in the default
    /// (English) locale.
    ///
    /// # Example
    ///
    /// ```
    /// use sundial::{Instant, Zone, FORMAT_COOKIE};
    ///
    /// let zone = Zone::parse("America/New_York")?;
    /// let t = Instant::from_civil(1975, 12, 25, 14, 15, 16, 0, zone)?;
    /// assert_eq!(
    ///     t.format(FORMAT_COOKIE)?,
    ///     "Thursday, 25-Dec-1975 14:15:16 EST",
    /// );
    /// # Ok::<(), sundial::Error>(())
    /// ```
    pub fn format(&self, format: &str) -> Result<String, Error> {
        fmt::format::format(self, format, locale::default())
    }

    /// Like [`Instant::format`], with an explicit locale.
    ///
    /// # Example
    ///
    /// ```
    /// use sundial::{Instant, Zone};
    ///
    /// let t = Instant::from_date(2013, 1, 1, Zone::UTC)?;
    /// assert_eq!(t.format_localized("D MMMM", "ru")?, "1 января");
    /// # Ok::<(), sundial::Error>(())
    /// ```
    pub fn format_localized(
        &self,
        format: &str,
        locale_name: &str,
    ) -> Result<String, Error> {
        fmt::format::format(self, format, locale::get(locale_name)?)
    }

    /// Describes this instant relative to now, in English: `"2 hours
    /// ago"`, `"in a month"`.
    ///
    /// Use [`Instant::humanize_with`] to pick the anchor, locale or
    /// granularity.
    pub fn humanize(&self) -> String {
        humanize::humanize(self, &Humanize::new())
            .expect("humanizing with default options cannot fail")
    }

    /// Describes this instant relative to a chosen anchor, with options.
    ///
    /// # Example
    ///
    /// ```
    /// use sundial::{Humanize, Instant, ToShift, Unit, Zone};
    ///
    /// let t = Instant::from_date(2013, 1, 1, Zone::UTC)?;
    /// let later = t.shift(4000.seconds())?;
    /// let phrase = later.humanize_with(
    ///     Humanize::new()
    ///         .relative_to(&t)
    ///         .granularities(&[Unit::Hour, Unit::Minute]),
    /// )?;
    /// assert_eq!(phrase, "in an hour and 6 minutes");
    /// # Ok::<(), sundial::Error>(())
    /// ```
    pub fn humanize_with(&self, options: Humanize<'_>) -> Result<String, Error> {
        humanize::humanize(self, &options)
    }

    /// Reverses [`Instant::humanize`]: reads a relative phrase and
    /// applies it to this instant, in the default (English) locale.
    ///
    /// # Example
    ///
    /// ```
    /// use sundial::{Instant, Zone};
    ///
    /// let t = Instant::from_date(2013, 1, 1, Zone::UTC)?;
    /// let then = t.dehumanize("in 2 hours")?;
    /// assert_eq!(then.to_string(), "2013-01-01T02:00:00.000000+00:00");
    /// # Ok::<(), sundial::Error>(())
    /// ```
    pub fn dehumanize(&self, input: &str) -> Result<Instant, Error> {
        humanize::dehumanize(self, input, "en-us")
    }

    /// Like [`Instant::dehumanize`], with an explicit locale.
    pub fn dehumanize_localized(
        &self,
        input: &str,
        locale_name: &str,
    ) -> Result<Instant, Error> {
        humanize::dehumanize(self, input, locale_name)
    }
}

/// A builder overwriting absolute fields of an [`Instant`], returned by
/// [`Instant::with`].
#[derive(Clone, Copy, Debug)]
pub struct InstantWith {
    original: Instant,
    year: Option<i16>,
    month: Option<i8>,
    day: Option<i8>,
    hour: Option<i8>,
    minute: Option<i8>,
    second: Option<i8>,
    microsecond: Option<i32>,
    fold: Option<u8>,
}

impl InstantWith {
    fn new(original: Instant) -> InstantWith {
        InstantWith {
            original,
            year: None,
            month: None,
            day: None,
            hour: None,
            minute: None,
            second: None,
            microsecond: None,
            fold: None,
        }
    }

    pub fn year(self, year: i16) -> InstantWith {
        InstantWith { year: Some(year), ..self }
    }

    pub fn month(self, month: i8) -> InstantWith {
        InstantWith { month: Some(month), ..self }
    }

    pub fn day(self, day: i8) -> InstantWith {
        InstantWith { day: Some(day), ..self }
    }

    pub fn hour(self, hour: i8) -> InstantWith {
        InstantWith { hour: Some(hour), ..self }
    }

    pub fn minute(self, minute: i8) -> InstantWith {
        InstantWith { minute: Some(minute), ..self }
    }

    pub fn second(self, second: i8) -> InstantWith {
        InstantWith { second: Some(second), ..self }
    }

    pub fn microsecond(self, microsecond: i32) -> InstantWith {
        InstantWith { microsecond: Some(microsecond), ..self }
    }

    pub fn fold(self, fold: u8) -> InstantWith {
        InstantWith { fold: Some(fold), ..self }
    }

    /// Materializes the new instant.
    ///
    /// # Errors
    ///
    /// This returns an error when the combined fields do not name a real
    /// civil datetime, or when `fold` is neither 0 nor 1.
    pub fn build(self) -> Result<Instant, Error> {
        let t = &self.original;
        let fold = self.fold.unwrap_or(t.fold);
        if fold > 1 {
            return Err(Error::range("fold", fold, 0, 1));
        }
        let civil = civil_datetime(
            i32::from(self.year.unwrap_or_else(|| t.year())),
            u32::from(self.month.unwrap_or_else(|| t.month()) as u8),
            u32::from(self.day.unwrap_or_else(|| t.day()) as u8),
            u32::from(self.hour.unwrap_or_else(|| t.hour()) as u8),
            u32::from(self.minute.unwrap_or_else(|| t.minute()) as u8),
            u32::from(self.second.unwrap_or_else(|| t.second()) as u8),
            self.microsecond.unwrap_or_else(|| t.microsecond()) as u32,
        )?;
        Instant::from_naive_in(civil, t.zone, fold)
    }
}

/// The deltas applied by [`Instant::shift`].
///
/// Build one with [`Shift::new`] or, more often, with the [`ToShift`]
/// extension on integers:
///
/// ```
/// use sundial::{Shift, ToShift};
///
/// let by_hand = Shift::new().months(1).days(2);
/// let sugar = 1.month().days(2);
/// # let _ = (by_hand, sugar);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Shift {
    years: i64,
    quarters: i64,
    months: i64,
    weeks: i64,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
    microseconds: i64,
    weekday: Option<(Weekday, i32)>,
}

impl Shift {
    pub fn new() -> Shift {
        Shift::default()
    }

    pub fn years(self, n: i64) -> Shift {
        Shift { years: n, ..self }
    }

    pub fn quarters(self, n: i64) -> Shift {
        Shift { quarters: n, ..self }
    }

    pub fn months(self, n: i64) -> Shift {
        Shift { months: n, ..self }
    }

    pub fn weeks(self, n: i64) -> Shift {
        Shift { weeks: n, ..self }
    }

    pub fn days(self, n: i64) -> Shift {
        Shift { days: n, ..self }
    }

    pub fn hours(self, n: i64) -> Shift {
        Shift { hours: n, ..self }
    }

    pub fn minutes(self, n: i64) -> Shift {
        Shift { minutes: n, ..self }
    }

    pub fn seconds(self, n: i64) -> Shift {
        Shift { seconds: n, ..self }
    }

    pub fn microseconds(self, n: i64) -> Shift {
        Shift { microseconds: n, ..self }
    }

    /// After all other deltas, advance to the next occurrence of the
    /// given weekday, staying put when the date already falls on it.
    pub fn weekday(self, weekday: Weekday) -> Shift {
        Shift { weekday: Some((weekday, 1)), ..self }
    }

    /// Like [`Shift::weekday`], jumping to the `nth` occurrence forward
    /// (or, negative, backward).
    pub fn nth_weekday(self, nth: i32, weekday: Weekday) -> Shift {
        Shift { weekday: Some((weekday, nth)), ..self }
    }
}

/// Sugar for building a [`Shift`] from an integer, in the style of
/// `1.month()` or `30.days()`.
pub trait ToShift {
    fn years(self) -> Shift;
    fn quarters(self) -> Shift;
    fn months(self) -> Shift;
    fn weeks(self) -> Shift;
    fn days(self) -> Shift;
    fn hours(self) -> Shift;
    fn minutes(self) -> Shift;
    fn seconds(self) -> Shift;
    fn microseconds(self) -> Shift;

    fn year(self) -> Shift
    where
        Self: Sized,
    {
        self.years()
    }

    fn quarter(self) -> Shift
    where
        Self: Sized,
    {
        self.quarters()
    }

    fn month(self) -> Shift
    where
        Self: Sized,
    {
        self.months()
    }

    fn week(self) -> Shift
    where
        Self: Sized,
    {
        self.weeks()
    }

    fn day(self) -> Shift
    where
        Self: Sized,
    {
        self.days()
    }

    fn hour(self) -> Shift
    where
        Self: Sized,
    {
        self.hours()
    }

    fn minute(self) -> Shift
    where
        Self: Sized,
    {
        self.minutes()
    }

    fn second(self) -> Shift
    where
        Self: Sized,
    {
        self.seconds()
    }

    fn microsecond(self) -> Shift
    where
        Self: Sized,
    {
        self.microseconds()
    }
}

macro_rules! impl_to_shift {
    ($($ty:ty),*) => {
        $(
            impl ToShift for $ty {
                fn years(self) -> Shift {
                    Shift::new().years(i64::from(self))
                }
                fn quarters(self) -> Shift {
                    Shift::new().quarters(i64::from(self))
                }
                fn months(self) -> Shift {
                    Shift::new().months(i64::from(self))
                }
                fn weeks(self) -> Shift {
                    Shift::new().weeks(i64::from(self))
                }
                fn days(self) -> Shift {
                    Shift::new().days(i64::from(self))
                }
                fn hours(self) -> Shift {
                    Shift::new().hours(i64::from(self))
                }
                fn minutes(self) -> Shift {
                    Shift::new().minutes(i64::from(self))
                }
                fn seconds(self) -> Shift {
                    Shift::new().seconds(i64::from(self))
                }
                fn microseconds(self) -> Shift {
                    Shift::new().microseconds(i64::from(self))
                }
            }
        )*
    };
}

impl_to_shift!(i8, i16, i32, i64);

/// The `Shift` moving by `n` of a single unit.
fn unit_shift(unit: Unit, n: i64) -> Shift {
    match unit {
        Unit::Year => Shift::new().years(n),
        Unit::Quarter => Shift::new().quarters(n),
        Unit::Month => Shift::new().months(n),
        Unit::Week => Shift::new().weeks(n),
        Unit::Day => Shift::new().days(n),
        Unit::Hour => Shift::new().hours(n),
        Unit::Minute => Shift::new().minutes(n),
        Unit::Second => Shift::new().seconds(n),
        Unit::Microsecond => Shift::new().microseconds(n),
    }
}

/// Month arithmetic with end-of-month clamping.
fn shift_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let zero_based = i64::from(date.year()) * 12
        + i64::from(date.month0())
        + months;
    let year = i32::try_from(zero_based.div_euclid(12)).ok()?;
    let month = (zero_based.rem_euclid(12) + 1) as u32;
    let day = date.day().min(days_in_month(year, month)?);
    NaiveDate::from_ymd_opt(year, month, day)
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = match month {
        12 => NaiveDate::from_ymd_opt(year + 1, 1, 1)?,
        _ => NaiveDate::from_ymd_opt(year, month + 1, 1)?,
    };
    Some(next.signed_duration_since(first).num_days() as u32)
}

/// dateutil-style weekday targeting: the nth matching weekday forward
/// (or backward), where the current date counts as the first match.
fn shift_to_weekday(
    date: NaiveDate,
    target: Weekday,
    nth: i32,
) -> Result<NaiveDate, Error> {
    if nth == 0 {
        return Err(Error::usage(format_args!(
            "a weekday shift count of 0 is meaningless; use 1 for \"the \
             next occurrence, or today\"",
        )));
    }
    let current = i64::from(date.weekday().num_days_from_monday());
    let wanted = i64::from(target.num_days_from_monday());
    let delta = if nth > 0 {
        (wanted - current).rem_euclid(7) + 7 * (i64::from(nth) - 1)
    } else {
        -(current - wanted).rem_euclid(7) - 7 * (i64::from(-nth) - 1)
    };
    date.checked_add_signed(TimeDelta::days(delta)).ok_or_else(|| {
        Error::field_value(format_args!("weekday shift result is out of range"))
    })
}

fn civil_datetime(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    microsecond: u32,
) -> Result<NaiveDateTime, Error> {
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        Error::field_value(format_args!(
            "{year:04}-{month:02}-{day:02} is not a valid date",
        ))
    })?;
    date.and_hms_micro_opt(hour, minute, second, microsecond).ok_or_else(
        || {
            Error::field_value(format_args!(
                "{hour:02}:{minute:02}:{second:02}.{microsecond:06} is \
                 not a valid time",
            ))
        },
    )
}

fn check_year(civil: NaiveDateTime) -> Result<(), Error> {
    let year = civil.year();
    if !(1..=9999).contains(&year) {
        return Err(Error::range("year", year, 1, 9999));
    }
    Ok(())
}

fn truncate_to_micros(civil: NaiveDateTime) -> NaiveDateTime {
    let nanos = civil.nanosecond();
    let excess = nanos % 1_000;
    if excess == 0 && nanos < 1_000_000_000 {
        return civil;
    }
    // Also strips the leap-second representation (nanosecond >= 1e9).
    let micros = (nanos % 1_000_000_000) / 1_000;
    civil
        .date()
        .and_hms_micro_opt(
            civil.hour(),
            civil.minute(),
            civil.second(),
            micros,
        )
        .expect("fields were extracted from a valid datetime")
}

impl PartialEq for Instant {
    fn eq(&self, other: &Instant) -> bool {
        self.utc() == other.utc()
    }
}

impl Eq for Instant {}

impl PartialOrd for Instant {
    fn partial_cmp(&self, other: &Instant) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Instant {
    fn cmp(&self, other: &Instant) -> core::cmp::Ordering {
        self.utc().cmp(&other.utc())
    }
}

impl core::hash::Hash for Instant {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.utc().hash(state);
    }
}

impl Sub for Instant {
    type Output = TimeDelta;

    fn sub(self, other: Instant) -> TimeDelta {
        self.utc() - other.utc()
    }
}

impl Sub<&Instant> for &Instant {
    type Output = TimeDelta;

    fn sub(self, other: &Instant) -> TimeDelta {
        self.utc() - other.utc()
    }
}

impl Add<TimeDelta> for Instant {
    type Output = Instant;

    fn add(self, delta: TimeDelta) -> Instant {
        self.checked_add(delta)
            .expect("adding TimeDelta to Instant overflowed")
    }
}

impl Sub<TimeDelta> for Instant {
    type Output = Instant;

    fn sub(self, delta: TimeDelta) -> Instant {
        self.checked_sub(delta)
            .expect("subtracting TimeDelta from Instant overflowed")
    }
}

impl core::fmt::Display for Instant {
    /// Renders the RFC 3339 profile this crate uses everywhere:
    /// microsecond precision, offset with a colon.
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:06}{}",
            self.year(),
            self.month(),
            self.day(),
            self.hour(),
            self.minute(),
            self.second(),
            self.microsecond(),
            crate::zone::render_offset(self.offset, true),
        )
    }
}

impl core::fmt::Debug for Instant {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Instant({} [{}])", self, self.zone)
    }
}

impl core::str::FromStr for Instant {
    type Err = Error;

    /// Parses via the ISO reader, like [`Instant::from_iso`].
    fn from_str(s: &str) -> Result<Instant, Error> {
        Instant::from_iso(s)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    fn utc(y: i16, mo: i8, d: i8, h: i8, mi: i8, s: i8) -> Instant {
        Instant::from_civil(y, mo, d, h, mi, s, 0, Zone::UTC).unwrap()
    }

    #[test]
    fn accessors() {
        let t = Instant::from_civil(2013, 2, 3, 4, 5, 6, 789120, Zone::UTC)
            .unwrap();
        assert_eq!(t.year(), 2013);
        assert_eq!(t.month(), 2);
        assert_eq!(t.day(), 3);
        assert_eq!(t.hour(), 4);
        assert_eq!(t.minute(), 5);
        assert_eq!(t.second(), 6);
        assert_eq!(t.microsecond(), 789120);
        assert_eq!(t.fold(), 0);
        assert_eq!(t.isoweekday(), 7); // a Sunday
        assert_eq!(t.day_of_year(), 34);
        assert_eq!(t.quarter(), 1);
    }

    #[test]
    fn year_range_is_enforced() {
        assert!(Instant::from_date(0, 1, 1, Zone::UTC).is_err());
        assert!(Instant::from_date(1, 1, 1, Zone::UTC).is_ok());
        assert!(Instant::from_date(9999, 12, 31, Zone::UTC).is_ok());
        let max = utc(9999, 12, 31, 23, 59, 59);
        assert!(max.shift(1.second()).unwrap_err().is_field_value());
    }

    #[test]
    fn conversions_preserve_the_absolute_instant() {
        let t = utc(2013, 5, 5, 12, 30, 45);
        for name in ["US/Pacific", "Asia/Tokyo", "Australia/Lord_Howe"] {
            let z = Zone::parse(name).unwrap();
            assert_eq!(t.to(z), t, "{name}");
            assert_eq!(t.to(z).to(Zone::UTC), t.to(Zone::UTC), "{name}");
        }
    }

    #[test]
    fn epoch_constructors() {
        let t = Instant::from_epoch_seconds(0.0).unwrap();
        assert_eq!(t.to_string(), "1970-01-01T00:00:00.000000+00:00");
        assert_eq!(t.timestamp(), 0);

        let t = Instant::from_epoch_millis(1591328104308).unwrap();
        assert_eq!(t.microsecond(), 308000);
        assert_eq!(t.epoch_micros(), 1591328104308000);

        // Auto-rescale: seconds, milliseconds, microseconds.
        let s = Instant::from_epoch_auto(1591328104).unwrap();
        let ms = Instant::from_epoch_auto(1591328104308).unwrap();
        let us = Instant::from_epoch_auto(1591328104308000).unwrap();
        assert_eq!(s.timestamp(), 1591328104);
        assert_eq!(ms.to_string(), "2020-06-05T02:15:04.308000+00:00");
        assert_eq!(us, ms);
        assert!(Instant::from_epoch_auto(i64::MAX).is_err());
    }

    #[test]
    fn negative_float_timestamps() {
        let t = Instant::from_epoch_seconds(-1.5).unwrap();
        assert_eq!(t.to_string(), "1969-12-31T23:59:58.500000+00:00");
        assert_eq!(t.timestamp(), -2);
        assert_eq!(t.float_timestamp(), -1.5);
    }

    #[test]
    fn with_replaces_fields() {
        let t = utc(2013, 5, 5, 12, 30, 45);
        let u = t.with().year(2012).microsecond(999999).build().unwrap();
        assert_eq!(u.to_string(), "2012-05-05T12:30:45.999999+00:00");
        assert!(t.with().month(13).build().unwrap_err().is_field_value());
        assert!(t.with().fold(2).build().unwrap_err().is_field_value());
    }

    #[test]
    fn fold_selects_the_repeated_hour() {
        let zone = Zone::parse("America/New_York").unwrap();
        let early = Instant::from_civil(2024, 11, 3, 1, 30, 0, 0, zone)
            .unwrap();
        let late = early.with().fold(1).build().unwrap();
        assert_eq!(early.utc_offset_seconds(), -4 * 3600);
        assert_eq!(late.utc_offset_seconds(), -5 * 3600);
        // Same wall time, different absolute instants; order-wise the
        // fold=1 reading is an hour later.
        assert_eq!(late - early, TimeDelta::hours(1));
        assert_eq!(late.hour(), early.hour());
    }

    #[test]
    fn gap_times_resolve_forward() {
        let zone = Zone::parse("America/New_York").unwrap();
        let t = Instant::from_civil(2024, 3, 10, 2, 30, 0, 0, zone).unwrap();
        assert_eq!(t.hour(), 3);
        assert_eq!(t.minute(), 30);
        assert_eq!(t.utc_offset_seconds(), -4 * 3600);
    }

    #[test]
    fn shift_calendar_units() {
        let t = Instant::from_date(2013, 5, 5, Zone::UTC).unwrap();
        assert_eq!(t.shift(1.year()).unwrap().year(), 2014);
        assert_eq!(t.shift(1.quarter()).unwrap().month(), 8);
        assert_eq!(t.shift((-6).months()).unwrap().to_string(),
                   "2012-11-05T00:00:00.000000+00:00");
        assert_eq!(t.shift(2.weeks()).unwrap().day(), 19);
    }

    #[test]
    fn shift_month_clamps_to_end_of_month() {
        let t = Instant::from_date(2015, 1, 31, Zone::UTC).unwrap();
        assert_eq!(t.shift(1.month()).unwrap().to_string(),
                   "2015-02-28T00:00:00.000000+00:00");
        let leap = Instant::from_date(2016, 1, 31, Zone::UTC).unwrap();
        assert_eq!(leap.shift(1.month()).unwrap().day(), 29);
        // The clamp does not stick: shifting the clamped result keeps
        // using its own day of month.
        let t = Instant::from_date(2015, 2, 28, Zone::UTC).unwrap();
        assert_eq!(t.shift(1.month()).unwrap().day(), 28);
    }

    #[test]
    fn shift_weekday_stays_when_already_there() {
        // 2013-05-05 is a Sunday.
        let t = Instant::from_date(2013, 5, 5, Zone::UTC).unwrap();
        let sunday = t.shift(Shift::new().weekday(Weekday::Sun)).unwrap();
        assert_eq!(sunday, t);
        let monday = t.shift(Shift::new().weekday(Weekday::Mon)).unwrap();
        assert_eq!(monday.day(), 6);
        let second_friday =
            t.shift(Shift::new().nth_weekday(2, Weekday::Fri)).unwrap();
        assert_eq!(second_friday.day(), 17);
        let previous_friday =
            t.shift(Shift::new().nth_weekday(-1, Weekday::Fri)).unwrap();
        assert_eq!(previous_friday.day(), 3);
        assert!(t
            .shift(Shift::new().nth_weekday(0, Weekday::Fri))
            .unwrap_err()
            .is_usage());
    }

    #[test]
    fn shift_through_a_dst_gap_lands_after_it() {
        let zone = Zone::parse("America/New_York").unwrap();
        let t = Instant::from_civil(2024, 3, 9, 2, 30, 0, 0, zone).unwrap();
        let next = t.shift(1.day()).unwrap();
        // 2024-03-10 02:30 does not exist; the shift lands at 03:30 EDT.
        assert_eq!(next.hour(), 3);
        assert_eq!(next.utc_offset_seconds(), -4 * 3600);
    }

    #[test]
    fn floor_and_ceil() {
        let t = Instant::from_civil(2013, 5, 5, 12, 30, 45, 123456, Zone::UTC)
            .unwrap();
        assert_eq!(t.floor(Unit::Year).unwrap().to_string(),
                   "2013-01-01T00:00:00.000000+00:00");
        assert_eq!(t.floor(Unit::Quarter).unwrap().to_string(),
                   "2013-04-01T00:00:00.000000+00:00");
        assert_eq!(t.floor(Unit::Month).unwrap().day(), 1);
        // 2013-05-05 is a Sunday, so the week floor is Monday the 29th.
        assert_eq!(t.floor(Unit::Week).unwrap().to_string(),
                   "2013-04-29T00:00:00.000000+00:00");
        assert_eq!(t.floor(Unit::Minute).unwrap().second(), 0);
        assert_eq!(t.floor(Unit::Microsecond).unwrap(), t);

        assert_eq!(t.ceil(Unit::Day).unwrap().to_string(),
                   "2013-05-05T23:59:59.999999+00:00");
        let (floor, ceil) = t.span(Unit::Hour).unwrap();
        assert!(floor <= t && t <= ceil);
        assert_eq!(floor, t.floor(Unit::Hour).unwrap());
        assert_eq!(ceil, t.ceil(Unit::Hour).unwrap());
    }

    #[test]
    fn span_bounds() {
        let t = Instant::from_civil(2013, 5, 5, 12, 30, 0, 0, Zone::UTC)
            .unwrap();
        let (_, closed) = t.span_with(Unit::Day, 1, "[]").unwrap();
        assert_eq!(closed.to_string(), "2013-05-05T23:59:59.999999+00:00");
        let (_, open) = t.span_with(Unit::Day, 1, "[)").unwrap();
        assert_eq!(open.to_string(), "2013-05-06T00:00:00.000000+00:00");
        let (start, end) = t.span_with(Unit::Day, 3, "(]").unwrap();
        assert_eq!(start.to_string(), "2013-05-05T00:00:00.000001+00:00");
        assert_eq!(end.to_string(), "2013-05-07T23:59:59.999999+00:00");
        assert!(t.span_with(Unit::Day, 1, "<>").unwrap_err().is_usage());
    }

    #[test]
    fn ranges() {
        let start = Instant::from_date(2013, 1, 31, Zone::UTC).unwrap();
        let end = Instant::from_date(2013, 5, 1, Zone::UTC).unwrap();
        let months: Vec<(i8, i8)> =
            Instant::range(Unit::Month, &start, &end)
                .map(|t| (t.month(), t.day()))
                .collect();
        // Shifts come from the original start, so the clamp never sticks.
        assert_eq!(months, vec![(1, 31), (2, 28), (3, 31), (4, 30)]);

        // Restartable: the iterator is cloneable from its initial state.
        let range = Instant::range(Unit::Month, &start, &end);
        assert_eq!(range.clone().count(), 4);
        assert_eq!(range.count(), 4);
    }

    #[test]
    fn span_ranges_and_intervals() {
        let start = Instant::from_civil(2013, 5, 5, 12, 30, 0, 0, Zone::UTC)
            .unwrap();
        let end = Instant::from_date(2013, 5, 8, Zone::UTC).unwrap();
        let spans: Vec<(Instant, Instant)> =
            Instant::span_range(Unit::Day, &start, &end, "[]")
                .unwrap()
                .collect();
        // The end sits exactly on the 8th's midnight, which is in range.
        assert_eq!(spans.len(), 4);
        assert_eq!(spans[0].0.to_string(), "2013-05-05T00:00:00.000000+00:00");
        assert_eq!(spans[0].1.to_string(), "2013-05-05T23:59:59.999999+00:00");
        assert_eq!(spans[3].1.to_string(), "2013-05-08T23:59:59.999999+00:00");

        let chunks: Vec<(Instant, Instant)> =
            Instant::interval(Unit::Day, &start, &end, 2, "[]")
                .unwrap()
                .collect();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].1.to_string(), "2013-05-06T23:59:59.999999+00:00");
        assert!(Instant::interval(Unit::Day, &start, &end, 0, "[]")
            .unwrap_err()
            .is_usage());
    }

    #[test]
    fn between() {
        let a = utc(2013, 5, 5, 0, 0, 0);
        let b = utc(2013, 5, 7, 0, 0, 0);
        let t = utc(2013, 5, 6, 0, 0, 0);
        assert!(t.is_between(&a, &b, "()").unwrap());
        assert!(!a.is_between(&a, &b, "()").unwrap());
        assert!(a.is_between(&a, &b, "[)").unwrap());
        assert!(b.is_between(&a, &b, "(]").unwrap());
        assert!(t.is_between(&b, &a, "[]").map(|ok| !ok).unwrap());
    }

    #[test]
    fn arithmetic() {
        let a = utc(2013, 5, 5, 12, 0, 0);
        let b = utc(2013, 5, 5, 14, 30, 0);
        assert_eq!(b - a, TimeDelta::minutes(150));
        assert_eq!(a + TimeDelta::minutes(150), b);
        assert_eq!(b - TimeDelta::minutes(150), a);
        // Duration addition is absolute: adding a day's worth of seconds
        // across a spring-forward yields a different wall hour.
        let zone = Zone::parse("America/New_York").unwrap();
        let t = Instant::from_civil(2024, 3, 9, 12, 0, 0, 0, zone).unwrap();
        assert_eq!((t + TimeDelta::days(1)).hour(), 13);
        // While a calendar-day shift keeps the wall clock.
        assert_eq!(t.shift(1.day()).unwrap().hour(), 12);
    }

    #[test]
    fn display_and_from_str() {
        let t = Instant::from_civil(2013, 2, 3, 4, 5, 6, 789120, Zone::UTC)
            .unwrap();
        let parsed: Instant = t.to_string().parse().unwrap();
        assert_eq!(parsed, t);
    }

    quickcheck! {
        fn prop_day_shift_round_trips(offset_days: i16) -> bool {
            let t = utc(2013, 5, 5, 12, 0, 0);
            let n = i64::from(offset_days % 3000);
            let there = match t.shift(n.days()) {
                Ok(there) => there,
                Err(_) => return true,
            };
            there.shift((-n).days()).map(|back| back == t).unwrap_or(false)
        }

        fn prop_floor_le_ceil(hour: u8, minute: u8) -> bool {
            let t = utc(
                2020,
                6,
                15,
                (hour % 24) as i8,
                (minute % 60) as i8,
                30,
            );
            [
                Unit::Year,
                Unit::Quarter,
                Unit::Month,
                Unit::Week,
                Unit::Day,
                Unit::Hour,
                Unit::Minute,
                Unit::Second,
            ]
            .into_iter()
            .all(|unit| {
                let (floor, ceil) = t.span(unit).unwrap();
                floor <= t && t <= ceil
                    && floor == t.floor(unit).unwrap()
                    && ceil == t.ceil(unit).unwrap()
            })
        }
    }
}
