use crate::{
    error::Error,
    locale::{self, Locale},
};

/// An atom of the format grammar.
///
/// The scanner produces these with a longest-match rule within each letter
/// family: `MMMM` is one token, `MMMMM` is `MMMM` followed by `M`. Text
/// that belongs to no family, and anything wrapped in `[...]`, becomes a
/// `Literal`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Token {
    /// `YYYY`: four digit year.
    YearFull,
    /// `YY`: two digit year. Values over 68 pivot to 19xx, the rest to
    /// 20xx.
    YearTwo,
    /// `MMMM`: full month name from the locale.
    MonthName,
    /// `MMM`: abbreviated month name from the locale.
    MonthAbbr,
    /// `MM`: zero padded month number.
    MonthPadded,
    /// `M`: unpadded month number.
    Month,
    /// `DDDD`: zero padded three digit day of year.
    DayOfYearPadded,
    /// `DDD`: unpadded day of year.
    DayOfYear,
    /// `DD`: zero padded day of month.
    DayPadded,
    /// `D`: unpadded day of month.
    Day,
    /// `Do`: ordinal day of month, e.g. `1st`.
    DayOrdinal,
    /// `dddd`: full weekday name from the locale.
    WeekdayName,
    /// `ddd`: abbreviated weekday name from the locale.
    WeekdayAbbr,
    /// `d`: ISO weekday number, 1 (Monday) through 7 (Sunday).
    WeekdayNumber,
    /// `HH`: zero padded 24 hour clock hour.
    Hour24Padded,
    /// `H`: unpadded 24 hour clock hour.
    Hour24,
    /// `hh`: zero padded 12 hour clock hour.
    Hour12Padded,
    /// `h`: unpadded 12 hour clock hour.
    Hour12,
    /// `mm`: zero padded minute.
    MinutePadded,
    /// `m`: unpadded minute.
    Minute,
    /// `ss`: zero padded second.
    SecondPadded,
    /// `s`: unpadded second.
    Second,
    /// `S` through `SSSSSS`: subseconds with the given number of digits
    /// when formatting. Parsing always consumes a full run of digits.
    Subsecond(u8),
    /// `a`: lowercase meridian from the locale.
    MeridiemLower,
    /// `A`: uppercase meridian from the locale.
    MeridiemUpper,
    /// `Z`: offset as `±HHMM`.
    OffsetBasic,
    /// `ZZ`: offset as `±HH:MM`.
    OffsetColon,
    /// `ZZZ`: zone name as reported by the platform.
    ZoneName,
    /// `X`: integer (or, when parsing, fractional) epoch seconds.
    EpochSeconds,
    /// `x`: integer epoch microseconds, with auto-rescale when parsing.
    EpochSubsecond,
    /// `W`: the ISO week date composite `YYYY-Www-d`.
    IsoWeekDate,
    /// Verbatim text.
    Literal(String),
}

/// The maximum number of subsecond digits a `S` run formats.
const MAX_SUBSECOND_DIGITS: usize = 6;

/// Tokenizes a format string.
///
/// This never fails: unknown letters simply become literals, which is what
/// lets formats embed separators like `T` without brackets. (A token the
/// *locale* can't support is reported later, when a pattern is built.)
pub(crate) fn tokenize(format: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let chars: Vec<char> = format.chars().collect();
    let mut i = 0;

    // Literal runs accumulate until a token interrupts them.
    macro_rules! flush {
        () => {
            if !literal.is_empty() {
                tokens.push(Token::Literal(core::mem::take(&mut literal)));
            }
        };
    }

    while i < chars.len() {
        let c = chars[i];
        let run = chars[i..].iter().take_while(|&&r| r == c).count();
        let (token, width) = match c {
            '[' => {
                // Atomic literal. Without a closing bracket the opening one
                // falls through as ordinary text.
                match chars[i + 1..].iter().position(|&r| r == ']') {
                    Some(len) => {
                        flush!();
                        let content: String =
                            chars[i + 1..i + 1 + len].iter().collect();
                        tokens.push(Token::Literal(content));
                        i += len + 2;
                        continue;
                    }
                    None => {
                        literal.push('[');
                        i += 1;
                        continue;
                    }
                }
            }
            'Y' if run >= 4 => (Token::YearFull, 4),
            'Y' if run >= 2 => (Token::YearTwo, 2),
            'M' if run >= 4 => (Token::MonthName, 4),
            'M' if run == 3 => (Token::MonthAbbr, 3),
            'M' if run == 2 => (Token::MonthPadded, 2),
            'M' => (Token::Month, 1),
            'D' if run >= 4 => (Token::DayOfYearPadded, 4),
            'D' if run == 3 => (Token::DayOfYear, 3),
            'D' if run == 2 => (Token::DayPadded, 2),
            'D' if chars.get(i + 1) == Some(&'o') => (Token::DayOrdinal, 2),
            'D' => (Token::Day, 1),
            'd' if run >= 4 => (Token::WeekdayName, 4),
            'd' if run == 3 => (Token::WeekdayAbbr, 3),
            'd' => (Token::WeekdayNumber, 1),
            'H' if run >= 2 => (Token::Hour24Padded, 2),
            'H' => (Token::Hour24, 1),
            'h' if run >= 2 => (Token::Hour12Padded, 2),
            'h' => (Token::Hour12, 1),
            'm' if run >= 2 => (Token::MinutePadded, 2),
            'm' => (Token::Minute, 1),
            's' if run >= 2 => (Token::SecondPadded, 2),
            's' => (Token::Second, 1),
            'S' => {
                let width = run.min(MAX_SUBSECOND_DIGITS);
                (Token::Subsecond(width as u8), width)
            }
            'a' => (Token::MeridiemLower, 1),
            'A' => (Token::MeridiemUpper, 1),
            'Z' if run >= 3 => (Token::ZoneName, 3),
            'Z' if run == 2 => (Token::OffsetColon, 2),
            'Z' => (Token::OffsetBasic, 1),
            'X' => (Token::EpochSeconds, 1),
            'x' => (Token::EpochSubsecond, 1),
            'W' => (Token::IsoWeekDate, 1),
            other => {
                literal.push(other);
                i += 1;
                continue;
            }
        };
        flush!();
        tokens.push(token);
        i += width;
    }
    flush!();
    tokens
}

impl Token {
    /// Returns the regex fragment matching this token's input, using the
    /// given locale for name alternations.
    ///
    /// Fragments for non-literal tokens are designed to sit inside a
    /// single capture group.
    ///
    /// # Errors
    ///
    /// This returns an error when the locale cannot supply a pattern for
    /// the token.
    pub(crate) fn pattern(
        &self,
        locale: &dyn Locale,
    ) -> Result<String, Error> {
        let fragment = match *self {
            Token::YearFull => String::from(r"\d{4}"),
            Token::YearTwo => String::from(r"\d{2}"),
            Token::MonthName => locale::month_name_pattern(locale),
            Token::MonthAbbr => locale::month_abbreviation_pattern(locale),
            Token::MonthPadded => String::from(r"\d{2}"),
            Token::Month => String::from(r"\d{1,2}"),
            Token::DayOfYearPadded => String::from(r"\d{3}"),
            Token::DayOfYear => String::from(r"\d{1,3}"),
            Token::DayPadded => String::from(r"\d{2}"),
            Token::Day => String::from(r"\d{1,2}"),
            Token::DayOrdinal => {
                let pattern = locale.ordinal_day_pattern();
                if pattern.is_empty() {
                    return Err(Error::unknown_token(format_args!(
                        "locale has no ordinal day pattern for the Do token",
                    )));
                }
                format!("(?:{pattern})")
            }
            Token::WeekdayName => locale::day_name_pattern(locale),
            Token::WeekdayAbbr => locale::day_abbreviation_pattern(locale),
            Token::WeekdayNumber => String::from(r"[1-7]"),
            Token::Hour24Padded | Token::Hour12Padded => {
                String::from(r"\d{2}")
            }
            Token::Hour24 | Token::Hour12 => String::from(r"\d{1,2}"),
            Token::MinutePadded | Token::SecondPadded => {
                String::from(r"\d{2}")
            }
            Token::Minute | Token::Second => String::from(r"\d{1,2}"),
            // Any run of S consumes one or more digits; precision is
            // resolved afterwards by rounding to microseconds.
            Token::Subsecond(_) => String::from(r"\d{1,9}"),
            Token::MeridiemLower | Token::MeridiemUpper => {
                locale::meridian_pattern(locale)
            }
            Token::OffsetBasic | Token::OffsetColon => {
                String::from(r"[+-]\d{2}(?::?\d{2})?|Z")
            }
            Token::ZoneName => String::from(r"[A-Za-z][A-Za-z0-9_/+-]*"),
            Token::EpochSeconds => String::from(r"-?\d+(?:\.\d+)?"),
            Token::EpochSubsecond => String::from(r"-?\d+"),
            Token::IsoWeekDate => String::from(r"\d{4}-?W\d{2}-?\d?"),
            Token::Literal(ref text) => regex::escape(text),
        };
        Ok(fragment)
    }

    /// True when the token captures input, i.e., is anything but a
    /// literal.
    pub(crate) fn captures(&self) -> bool {
        !matches!(*self, Token::Literal(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(fmt: &str) -> Vec<Token> {
        tokenize(fmt)
    }

    #[test]
    fn longest_match_wins() {
        assert_eq!(toks("YYYY"), vec![Token::YearFull]);
        assert_eq!(
            toks("YYY"),
            vec![Token::YearTwo, Token::Literal("Y".into())],
        );
        assert_eq!(
            toks("MMMMM"),
            vec![Token::MonthName, Token::Month],
        );
        assert_eq!(toks("Do"), vec![Token::DayOrdinal]);
        assert_eq!(
            toks("DDo"),
            vec![Token::DayPadded, Token::Literal("o".into())],
        );
        assert_eq!(toks("ZZZ"), vec![Token::ZoneName]);
        assert_eq!(toks("ZZ"), vec![Token::OffsetColon]);
    }

    #[test]
    fn iso_like_format() {
        assert_eq!(
            toks("YYYY-MM-DDTHH:mm:ssZZ"),
            vec![
                Token::YearFull,
                Token::Literal("-".into()),
                Token::MonthPadded,
                Token::Literal("-".into()),
                Token::DayPadded,
                Token::Literal("T".into()),
                Token::Hour24Padded,
                Token::Literal(":".into()),
                Token::MinutePadded,
                Token::Literal(":".into()),
                Token::SecondPadded,
                Token::OffsetColon,
            ],
        );
    }

    #[test]
    fn subsecond_runs_collapse() {
        assert_eq!(toks("SSSSSS"), vec![Token::Subsecond(6)]);
        assert_eq!(toks("SSS"), vec![Token::Subsecond(3)]);
        // A run longer than six splits, like any over-long run does.
        assert_eq!(
            toks("SSSSSSS"),
            vec![Token::Subsecond(6), Token::Subsecond(1)],
        );
    }

    #[test]
    fn bracketed_literals_are_atomic() {
        assert_eq!(
            toks("[on] YYYY"),
            vec![
                Token::Literal("on".into()),
                Token::Literal(" ".into()),
                Token::YearFull,
            ],
        );
        // Tokens inside brackets stay verbatim.
        assert_eq!(toks("[YYYY]"), vec![Token::Literal("YYYY".into())]);
        // An unterminated bracket is ordinary text.
        assert_eq!(
            toks("[YY"),
            vec![Token::Literal("[".into()), Token::YearTwo],
        );
    }

    #[test]
    fn unknown_letters_pass_through() {
        assert_eq!(
            toks("YYYY-QQ"),
            vec![
                Token::YearFull,
                Token::Literal("-QQ".into()),
            ],
        );
    }
}
