use crate::{
    error::Error,
    fmt::parse::{normalize_whitespace, parse_multi, ParseOptions},
    instant::Instant,
};

/// The candidate date templates, tried in order. The `W` token covers both
/// `YYYY-Www-d` and `YYYYWwwd` spellings on its own.
static DATE_FORMATS: &[&str] = &[
    "YYYY-MM-DD",
    "YYYY-M-DD",
    "YYYY-M-D",
    "YYYY/MM/DD",
    "YYYY/M/DD",
    "YYYY/M/D",
    "YYYY.MM.DD",
    "YYYY.M.DD",
    "YYYY.M.D",
    "YYYYMMDD",
    "YYYY-DDDD",
    "YYYYDDDD",
    "W",
    "YYYY-MM",
    "YYYY/MM",
    "YYYY.MM",
    // A bare year parses. Dubious, but longstanding behavior that inputs
    // in the wild rely on.
    "YYYY",
];

/// Parses a superset of ISO 8601 / RFC 3339.
///
/// The input is split into a date half and an optional time half (on `T`
/// or on a single internal space), the time half is inspected to decide
/// which clock fields and separators it carries, and then the candidate
/// date templates are tried in order with the derived time format
/// appended. The first template that matches wins.
pub(crate) fn parse_iso(
    input: &str,
    opts: &ParseOptions,
) -> Result<Instant, Error> {
    let normalized;
    let input = if opts.normalize_whitespace {
        normalized = normalize_whitespace(input);
        normalized.as_str()
    } else {
        input
    };
    let input = input.trim();

    // More than one internal space cannot be an ISO datetime, and
    // rejecting it here keeps the template search from latching onto a
    // date embedded in running text.
    if input.matches(' ').count() > 1 {
        return Err(Error::parse_match(format_args!(
            "expected an ISO 8601-like string, but was given {input:?}",
        )));
    }
    let inner = ParseOptions { normalize_whitespace: false, ..*opts };

    let (time, separator) = match split_date_time(input) {
        Some((_, time, separator)) => (Some(time), separator),
        None => (None, 'T'),
    };
    let Some(time) = time else {
        return parse_multi(input, DATE_FORMATS, &inner);
    };

    let time_format = time_format(time)?;
    let formats: Vec<String> = DATE_FORMATS
        .iter()
        .map(|date_format| {
            format!("{date_format}{separator}{time_format}")
        })
        .collect();
    let formats: Vec<&str> = formats.iter().map(String::as_str).collect();
    parse_multi(input, &formats, &inner)
}

/// Splits an input into date and time halves, on `T` or on exactly one
/// internal space. Returns the separator actually used so the generated
/// format can reproduce it.
fn split_date_time(input: &str) -> Option<(&str, &str, char)> {
    if let Some(position) = input.find('T') {
        let (date, time) = (&input[..position], &input[position + 1..]);
        return Some((date, time, 'T'));
    }
    let spaces = input.matches(' ').count();
    if spaces == 1 {
        let position = input.find(' ').expect("one space is present");
        let (date, time) = (&input[..position], &input[position + 1..]);
        return Some((date, time, ' '));
    }
    None
}

/// Derives the time-half format from the shape of the input: how many
/// colons, whether a fractional separator appears, whether an offset
/// trails, and whether the "basic" (separator-less) variant is in play.
fn time_format(time: &str) -> Result<String, Error> {
    // Anything from the first `Z`, `+` or `-` onwards is the offset.
    let clock = match time.find(['Z', 'z', '+', '-']) {
        Some(position) => &time[..position],
        None => time,
    };
    let has_tz = clock.len() < time.len();
    let colons = clock.matches(':').count();
    let subsecond_sep =
        clock.chars().find(|&c| c == '.' || c == ',');
    let whole_clock = match subsecond_sep {
        Some(sep) => {
            &clock[..clock.find(sep).expect("separator was found")]
        }
        None => clock,
    };

    let mut format = if subsecond_sep.is_some() || colons == 2 {
        String::from("HH:mm:ss")
    } else if colons == 1 {
        String::from("HH:mm")
    } else {
        // Basic variant: derive the fields from the digit count.
        match whole_clock.len() {
            0 | 1 | 2 => String::from("HH"),
            4 => String::from("HHmm"),
            6 => String::from("HHmmss"),
            other => {
                return Err(Error::parse_match(format_args!(
                    "time {time:?} has {other} digits, which is not a \
                     basic ISO clock",
                )))
            }
        }
    };
    if colons == 0 {
        format = format.replace(':', "");
    }
    if let Some(sep) = subsecond_sep {
        format.push(sep);
        format.push('S');
    }
    if has_tz {
        format.push_str("ZZ");
    }
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iso(input: &str) -> Result<Instant, Error> {
        parse_iso(input, &ParseOptions::default())
    }

    #[test]
    fn time_format_derivation() {
        assert_eq!(time_format("04:05:06").unwrap(), "HH:mm:ss");
        assert_eq!(time_format("04:05").unwrap(), "HH:mm");
        assert_eq!(time_format("04").unwrap(), "HH");
        assert_eq!(time_format("04:05:06.789").unwrap(), "HH:mm:ss.S");
        assert_eq!(time_format("04:05:06,789").unwrap(), "HH:mm:ss,S");
        assert_eq!(time_format("04:05:06Z").unwrap(), "HH:mm:ssZZ");
        assert_eq!(time_format("04:05:06+07:00").unwrap(), "HH:mm:ssZZ");
        assert_eq!(time_format("040506").unwrap(), "HHmmss");
        assert_eq!(time_format("040506.789Z").unwrap(), "HHmmss.SZZ");
        assert_eq!(time_format("0405").unwrap(), "HHmm");
    }

    #[test]
    fn calendar_variants() {
        let expected = iso("2013-02-03").unwrap();
        for input in
            ["2013-2-03", "2013-2-3", "2013/02/03", "2013.2.3", "20130203"]
        {
            assert_eq!(iso(input).unwrap(), expected, "input {input:?}");
        }
    }

    #[test]
    fn ordinal_and_week_dates() {
        assert_eq!(iso("2013-034").unwrap(), iso("2013-02-03").unwrap());
        assert_eq!(iso("2013034").unwrap(), iso("2013-02-03").unwrap());
        assert_eq!(iso("2011-W05-4").unwrap(), iso("2011-02-03").unwrap());
        assert_eq!(iso("2011W054").unwrap(), iso("2011-02-03").unwrap());
    }

    #[test]
    fn bare_year_and_year_month() {
        assert_eq!(iso("2016").unwrap(), iso("2016-01-01").unwrap());
        assert_eq!(iso("2016-06").unwrap(), iso("2016-06-01").unwrap());
    }

    #[test]
    fn space_separator() {
        assert_eq!(
            iso("2013-02-03 04:05:06").unwrap(),
            iso("2013-02-03T04:05:06").unwrap(),
        );
    }

    #[test]
    fn junk_is_rejected() {
        assert!(iso("blah 2013-02-03").unwrap_err().is_parse_match());
        assert!(iso("2013-02-03 04:05:06 extra").unwrap_err().is_parse_match());
        assert!(iso("13-02-03").unwrap_err().is_parse_match());
    }
}
