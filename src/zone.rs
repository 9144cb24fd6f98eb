/*!
The [`Zone`] type and the zone expression parser.

A `Zone` is one of four things: UTC, the system's local zone, a named IANA
zone or a fixed offset from UTC. Everything that actually knows about the
IANA database or the system configuration is delegated to the platform
service (`chrono` and `chrono-tz`); this module's job is to decode the
expressions users write (`"UTC"`, `"local"`, `"+07:30"`, `"US/Pacific"`,
an offset in seconds) into a canonical value, and to answer the two
questions the rest of the crate asks: "what is the offset at this absolute
time?" and "what is the offset for this wall time?"
*/

use core::str::FromStr;

use chrono::{NaiveDateTime, Offset as _, TimeDelta, TimeZone as _};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, ErrorContext};

/// The maximum magnitude, in seconds, of a fixed offset: 24 hours.
///
/// The bound is exclusive. Real zones top out at ±14 hours, but the civil
/// time model tolerates anything strictly less than a day.
const MAX_OFFSET_SECONDS: i32 = 24 * 60 * 60;

/// An ISO style offset expression: `+07:30`, `-0300`, `05`.
static OFFSET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([+-])?(\d{2}):?(\d{2})?$").unwrap());

/// A time zone.
///
/// A `Zone` is a small value (it is `Copy`) with four possible shapes:
///
/// * [`Zone::UTC`]: Coordinated Universal Time.
/// * [`Zone::local()`]: whatever the system reports as its local zone.
/// * A named IANA zone, e.g. `America/New_York`.
/// * A fixed offset from UTC, e.g. `+07:30`.
///
/// Two zones are equal when they have the same shape and the same payload.
/// (So `Zone::UTC != Zone::fixed(0)?`, even though they always produce the
/// same offset. Callers that care about "same absolute behavior" should
/// compare offsets at the instants they care about.)
///
/// # Example
///
/// ```
/// use sundial::Zone;
///
/// let z: Zone = "America/New_York".parse()?;
/// assert_eq!(z.iana_name(), Some("America/New_York"));
///
/// let z: Zone = "+07:30".parse()?;
/// assert_eq!(z.to_string(), "+07:30");
///
/// # Ok::<(), sundial::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Zone {
    kind: ZoneKind,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
enum ZoneKind {
    Utc,
    Local,
    Named(chrono_tz::Tz),
    Fixed(i32),
}

impl Zone {
    /// Coordinated Universal Time.
    pub const UTC: Zone = Zone { kind: ZoneKind::Utc };

    /// Returns the system's local zone.
    ///
    /// Offsets are computed lazily through the platform service, so an
    /// `Instant` in the local zone keeps tracking the system configuration
    /// rather than freezing one offset.
    pub fn local() -> Zone {
        Zone { kind: ZoneKind::Local }
    }

    /// Creates a zone with a fixed offset of the given number of seconds
    /// east of UTC.
    ///
    /// # Errors
    ///
    /// This returns an error when the magnitude of the offset is 24 hours
    /// or more.
    ///
    /// # Example
    ///
    /// ```
    /// use sundial::Zone;
    ///
    /// assert_eq!(Zone::fixed(5 * 3600)?.to_string(), "+05:00");
    /// assert!(Zone::fixed(-86_400).is_err());
    /// # Ok::<(), sundial::Error>(())
    /// ```
    pub fn fixed(seconds: i32) -> Result<Zone, Error> {
        if seconds.unsigned_abs() >= MAX_OFFSET_SECONDS as u32 {
            return Err(Error::zone_parse(format_args!(
                "fixed offset of {seconds} seconds has a magnitude of \
                 24 hours or more",
            )));
        }
        Ok(Zone { kind: ZoneKind::Fixed(seconds) })
    }

    /// Resolves the given IANA zone name through the platform database.
    ///
    /// # Errors
    ///
    /// This returns an error when the name is unknown.
    pub fn named(name: &str) -> Result<Zone, Error> {
        let tz = chrono_tz::Tz::from_str(name).map_err(|_| {
            Error::zone_parse(format_args!(
                "could not find zone {name:?} in the IANA database",
            ))
        })?;
        Ok(Zone { kind: ZoneKind::Named(tz) })
    }

    /// Parses a zone expression.
    ///
    /// The accepted grammar, tried in order:
    ///
    /// * `utc` (any case) or `Z` yields UTC.
    /// * `local` yields the system zone.
    /// * An ISO offset, `[+-]HH[:MM]` with the colon optional and missing
    ///   minutes defaulting to zero, yields a fixed offset.
    /// * Anything else non-empty is looked up as an IANA zone name.
    ///
    /// # Errors
    ///
    /// This returns an error when the expression is empty, when an offset
    /// expression is out of range, or when the named zone is unknown.
    ///
    /// # Example
    ///
    /// ```
    /// use sundial::Zone;
    ///
    /// assert_eq!(Zone::parse("Z")?, Zone::UTC);
    /// assert_eq!(Zone::parse("utc")?, Zone::UTC);
    /// assert_eq!(Zone::parse("-0300")?, Zone::fixed(-3 * 3600)?);
    /// assert_eq!(Zone::parse("05")?, Zone::fixed(5 * 3600)?);
    /// assert!(Zone::parse("").is_err());
    /// # Ok::<(), sundial::Error>(())
    /// ```
    pub fn parse(expr: &str) -> Result<Zone, Error> {
        if expr.is_empty() {
            return Err(Error::zone_parse(format_args!(
                "zone expression must be non-empty",
            )));
        }
        if expr == "Z" || expr.eq_ignore_ascii_case("utc") {
            return Ok(Zone::UTC);
        }
        if expr == "local" {
            return Ok(Zone::local());
        }
        if let Some(caps) = OFFSET_RE.captures(expr) {
            let sign = match caps.get(1).map(|m| m.as_str()) {
                Some("-") => -1,
                _ => 1,
            };
            // The regex only admits two-digit runs, so these cannot fail.
            let hours: i32 = caps[2].parse().unwrap_or(0);
            let minutes: i32 =
                caps.get(3).map_or(0, |m| m.as_str().parse().unwrap_or(0));
            return Zone::fixed(sign * (hours * 3600 + minutes * 60))
                .with_context(|| {
                    Error::zone_parse(format_args!(
                        "offset expression {expr:?} is out of range",
                    ))
                });
        }
        Zone::named(expr)
    }

    /// Creates a fixed-offset zone from a duration east of UTC.
    ///
    /// Sub-second components are discarded.
    ///
    /// # Errors
    ///
    /// This returns an error when the magnitude is 24 hours or more.
    pub fn from_delta(delta: TimeDelta) -> Result<Zone, Error> {
        let seconds = delta.num_seconds();
        let seconds = i32::try_from(seconds).map_err(|_| {
            Error::zone_parse(format_args!(
                "offset of {seconds} seconds has a magnitude of 24 hours \
                 or more",
            ))
        })?;
        Zone::fixed(seconds)
    }

    /// Returns true when this is the UTC zone.
    #[inline]
    pub fn is_utc(&self) -> bool {
        matches!(self.kind, ZoneKind::Utc)
    }

    /// Returns true when this is the system's local zone.
    #[inline]
    pub fn is_local(&self) -> bool {
        matches!(self.kind, ZoneKind::Local)
    }

    /// Returns the IANA name of this zone, if it has one.
    #[inline]
    pub fn iana_name(&self) -> Option<&'static str> {
        match self.kind {
            ZoneKind::Named(tz) => Some(tz.name()),
            _ => None,
        }
    }

    /// Returns the fixed offset in seconds, if this zone is a fixed offset.
    #[inline]
    pub fn fixed_seconds(&self) -> Option<i32> {
        match self.kind {
            ZoneKind::Fixed(seconds) => Some(seconds),
            _ => None,
        }
    }

    /// Returns the offset from UTC, in seconds, in force at the given
    /// absolute time (expressed as a UTC wall time).
    pub(crate) fn offset_seconds_at(&self, utc: &NaiveDateTime) -> i32 {
        match self.kind {
            ZoneKind::Utc => 0,
            ZoneKind::Fixed(seconds) => seconds,
            ZoneKind::Local => chrono::Local
                .offset_from_utc_datetime(utc)
                .fix()
                .local_minus_utc(),
            ZoneKind::Named(tz) => {
                tz.offset_from_utc_datetime(utc).fix().local_minus_utc()
            }
        }
    }

    /// Returns the offset from UTC, in seconds, for the given wall time in
    /// this zone.
    ///
    /// `fold` disambiguates wall times that occur twice during a DST
    /// fall-back: `0` selects the earlier absolute time and `1` the later.
    /// A wall time that never occurs (a spring-forward gap) resolves with
    /// the offset in force just before the transition, so that re-reading
    /// the resulting absolute time lands on the first real instant after
    /// the gap.
    pub(crate) fn offset_seconds_for_local(
        &self,
        civil: NaiveDateTime,
        fold: u8,
    ) -> i32 {
        match self.kind {
            ZoneKind::Utc => 0,
            ZoneKind::Fixed(seconds) => seconds,
            ZoneKind::Local => {
                offset_from_local(&chrono::Local, civil, fold)
            }
            ZoneKind::Named(tz) => offset_from_local(&tz, civil, fold),
        }
    }

    /// Returns true when the given wall time is ambiguous in this zone,
    /// i.e., when it occurs twice during a DST fall-back.
    #[cfg(test)]
    pub(crate) fn is_ambiguous(&self, civil: NaiveDateTime) -> bool {
        use chrono::offset::LocalResult;

        match self.kind {
            ZoneKind::Utc | ZoneKind::Fixed(_) => false,
            ZoneKind::Local => matches!(
                chrono::Local.offset_from_local_datetime(&civil),
                LocalResult::Ambiguous(..),
            ),
            ZoneKind::Named(tz) => matches!(
                tz.offset_from_local_datetime(&civil),
                LocalResult::Ambiguous(..),
            ),
        }
    }

    /// Returns the display name of this zone at the given absolute time.
    ///
    /// For named zones this is the abbreviation the platform reports (e.g.
    /// `EST`); for UTC it is `UTC`; for fixed offsets and the local zone it
    /// is the rendered offset.
    pub(crate) fn name_at(&self, utc: &NaiveDateTime) -> String {
        match self.kind {
            ZoneKind::Utc => String::from("UTC"),
            ZoneKind::Fixed(seconds) => render_offset(seconds, true),
            ZoneKind::Local => render_offset(self.offset_seconds_at(utc), true),
            ZoneKind::Named(tz) => {
                tz.offset_from_utc_datetime(utc).to_string()
            }
        }
    }
}

impl Default for Zone {
    fn default() -> Zone {
        Zone::UTC
    }
}

impl core::fmt::Display for Zone {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.kind {
            ZoneKind::Utc => write!(f, "UTC"),
            ZoneKind::Local => write!(f, "local"),
            ZoneKind::Named(tz) => write!(f, "{}", tz.name()),
            ZoneKind::Fixed(seconds) => {
                write!(f, "{}", render_offset(seconds, true))
            }
        }
    }
}

impl FromStr for Zone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Zone, Error> {
        Zone::parse(s)
    }
}

impl From<chrono_tz::Tz> for Zone {
    fn from(tz: chrono_tz::Tz) -> Zone {
        Zone { kind: ZoneKind::Named(tz) }
    }
}

impl TryFrom<TimeDelta> for Zone {
    type Error = Error;

    fn try_from(delta: TimeDelta) -> Result<Zone, Error> {
        Zone::from_delta(delta)
    }
}

/// Computes the offset for a wall time through the platform service.
///
/// This is the one place where the fold flag and the gap policy are
/// interpreted. See `Zone::offset_seconds_for_local`.
fn offset_from_local<T: chrono::TimeZone>(
    tz: &T,
    civil: NaiveDateTime,
    fold: u8,
) -> i32 {
    use chrono::offset::LocalResult;

    match tz.offset_from_local_datetime(&civil) {
        LocalResult::Single(off) => off.fix().local_minus_utc(),
        LocalResult::Ambiguous(earlier, later) => {
            let off = if fold == 0 { earlier } else { later };
            off.fix().local_minus_utc()
        }
        LocalResult::None => {
            // An imaginary wall time. Probe a wall time shortly before it;
            // no real zone has a transition gap anywhere near three hours,
            // so the probe resolves under the pre-transition offset.
            let probe = civil - TimeDelta::hours(3);
            match tz.offset_from_local_datetime(&probe) {
                LocalResult::Single(off)
                | LocalResult::Ambiguous(off, _) => {
                    off.fix().local_minus_utc()
                }
                LocalResult::None => {
                    trace!(
                        "probe before imaginary wall time {civil} was \
                         itself imaginary; falling back to the UTC reading",
                    );
                    tz.offset_from_utc_datetime(&civil)
                        .fix()
                        .local_minus_utc()
                }
            }
        }
    }
}

/// Renders an offset in seconds as `±HH:MM` (or `±HHMM` without the colon).
pub(crate) fn render_offset(seconds: i32, colon: bool) -> String {
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.unsigned_abs() / 60;
    let (hours, minutes) = (minutes / 60, minutes % 60);
    if colon {
        format!("{sign}{hours:02}:{minutes:02}")
    } else {
        format!("{sign}{hours:02}{minutes:02}")
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn civil(
        y: i32,
        mo: u32,
        d: u32,
        h: u32,
        mi: u32,
        s: u32,
    ) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn parse_sentinels() {
        assert_eq!(Zone::parse("utc").unwrap(), Zone::UTC);
        assert_eq!(Zone::parse("UTC").unwrap(), Zone::UTC);
        assert_eq!(Zone::parse("Z").unwrap(), Zone::UTC);
        assert_eq!(Zone::parse("local").unwrap(), Zone::local());
    }

    #[test]
    fn parse_offsets() {
        assert_eq!(Zone::parse("+07:30").unwrap().fixed_seconds(), Some(27000));
        assert_eq!(Zone::parse("-0300").unwrap().fixed_seconds(), Some(-10800));
        assert_eq!(Zone::parse("05").unwrap().fixed_seconds(), Some(18000));
        assert_eq!(Zone::parse("0530").unwrap().fixed_seconds(), Some(19800));
        // Out of range hours are an offset expression, but a bad one.
        assert!(Zone::parse("+25:00").unwrap_err().is_zone_parse());
    }

    #[test]
    fn parse_named() {
        let z = Zone::parse("America/New_York").unwrap();
        assert_eq!(z.iana_name(), Some("America/New_York"));
        assert!(Zone::parse("Mars/Olympus_Mons").unwrap_err().is_zone_parse());
        assert!(Zone::parse("").unwrap_err().is_zone_parse());
    }

    #[test]
    fn from_delta() {
        let z = Zone::from_delta(TimeDelta::hours(5)).unwrap();
        assert_eq!(z.fixed_seconds(), Some(5 * 3600));
        assert!(Zone::from_delta(TimeDelta::hours(24)).is_err());
    }

    #[test]
    fn fold_disambiguates_fall_back() {
        // 2024-11-03 01:30 happened twice in New York: first at EDT (-4),
        // then at EST (-5).
        let z = Zone::parse("America/New_York").unwrap();
        let wall = civil(2024, 11, 3, 1, 30, 0);
        assert_eq!(z.offset_seconds_for_local(wall, 0), -4 * 3600);
        assert_eq!(z.offset_seconds_for_local(wall, 1), -5 * 3600);
        assert!(z.is_ambiguous(wall));
    }

    #[test]
    fn gap_uses_pre_transition_offset() {
        // 2024-03-10 02:30 never happened in New York.
        let z = Zone::parse("America/New_York").unwrap();
        let wall = civil(2024, 3, 10, 2, 30, 0);
        assert_eq!(z.offset_seconds_for_local(wall, 0), -5 * 3600);
        assert!(!z.is_ambiguous(wall));
    }

    #[test]
    fn names() {
        let utc = civil(2020, 1, 15, 12, 0, 0);
        assert_eq!(Zone::UTC.name_at(&utc), "UTC");
        let z = Zone::parse("America/New_York").unwrap();
        assert_eq!(z.name_at(&utc), "EST");
        let z = Zone::fixed(7 * 3600).unwrap();
        assert_eq!(z.name_at(&utc), "+07:00");
    }

    #[test]
    fn display() {
        assert_eq!(Zone::UTC.to_string(), "UTC");
        assert_eq!(Zone::local().to_string(), "local");
        assert_eq!(Zone::fixed(-3 * 3600).unwrap().to_string(), "-03:00");
        assert_eq!(
            Zone::parse("Europe/Paris").unwrap().to_string(),
            "Europe/Paris",
        );
    }
}
