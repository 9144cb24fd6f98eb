use core::fmt::Write;

use crate::{
    error::Error,
    fmt::token::{tokenize, Token},
    instant::Instant,
    locale::Locale,
    zone::render_offset,
};

/// Renders an instant under a format string.
///
/// Every recognized token substitutes its field; bracketed literals are
/// emitted with the brackets stripped; anything else passes through
/// verbatim.
pub(crate) fn format(
    instant: &Instant,
    format: &str,
    locale: &dyn Locale,
) -> Result<String, Error> {
    let tokens = tokenize(format);
    let mut formatter =
        Formatter { instant, locale, buf: String::with_capacity(format.len()) };
    for token in &tokens {
        formatter.write(token)?;
    }
    Ok(formatter.buf)
}

struct Formatter<'i, 'l> {
    instant: &'i Instant,
    locale: &'l dyn Locale,
    buf: String,
}

impl<'i, 'l> Formatter<'i, 'l> {
    fn write(&mut self, token: &Token) -> Result<(), Error> {
        let t = self.instant;
        match *token {
            Token::YearFull => {
                let year = self.locale.year_full(t.year());
                self.push(format_args!("{year:0>4}"));
            }
            Token::YearTwo => {
                let year = self.locale.year_abbreviation(t.year());
                self.push(format_args!("{year}"));
            }
            Token::MonthName => {
                self.buf.push_str(self.locale.month_name(t.month()));
            }
            Token::MonthAbbr => {
                self.buf.push_str(self.locale.month_abbreviation(t.month()));
            }
            Token::MonthPadded => self.push(format_args!("{:02}", t.month())),
            Token::Month => self.push(format_args!("{}", t.month())),
            Token::DayOfYearPadded => {
                self.push(format_args!("{:03}", t.day_of_year()));
            }
            Token::DayOfYear => {
                self.push(format_args!("{}", t.day_of_year()));
            }
            Token::DayPadded => self.push(format_args!("{:02}", t.day())),
            Token::Day => self.push(format_args!("{}", t.day())),
            Token::DayOrdinal => {
                let ordinal = self.locale.ordinal_number(i64::from(t.day()));
                self.buf.push_str(&ordinal);
            }
            Token::WeekdayName => {
                self.buf.push_str(self.locale.day_name(t.isoweekday()));
            }
            Token::WeekdayAbbr => {
                self.buf
                    .push_str(self.locale.day_abbreviation(t.isoweekday()));
            }
            Token::WeekdayNumber => {
                self.push(format_args!("{}", t.isoweekday()));
            }
            Token::Hour24Padded => self.push(format_args!("{:02}", t.hour())),
            Token::Hour24 => self.push(format_args!("{}", t.hour())),
            Token::Hour12Padded => {
                self.push(format_args!("{:02}", hour12(t.hour())));
            }
            Token::Hour12 => self.push(format_args!("{}", hour12(t.hour()))),
            Token::MinutePadded => {
                self.push(format_args!("{:02}", t.minute()));
            }
            Token::Minute => self.push(format_args!("{}", t.minute())),
            Token::SecondPadded => {
                self.push(format_args!("{:02}", t.second()));
            }
            Token::Second => self.push(format_args!("{}", t.second())),
            Token::Subsecond(digits) => {
                let micros = format!("{:06}", t.microsecond());
                self.buf.push_str(&micros[..usize::from(digits)]);
            }
            Token::MeridiemLower => {
                self.buf.push_str(self.locale.meridian(t.hour(), false));
            }
            Token::MeridiemUpper => {
                self.buf.push_str(self.locale.meridian(t.hour(), true));
            }
            Token::OffsetBasic => {
                self.buf.push_str(&render_offset(t.offset_seconds(), false));
            }
            Token::OffsetColon => {
                self.buf.push_str(&render_offset(t.offset_seconds(), true));
            }
            Token::ZoneName => self.buf.push_str(&t.zone_name()),
            Token::EpochSeconds => {
                self.push(format_args!("{}", t.timestamp()));
            }
            Token::EpochSubsecond => {
                self.push(format_args!("{}", t.epoch_micros()));
            }
            Token::IsoWeekDate => {
                let (year, week, weekday) = t.week_date();
                self.push(format_args!("{year:04}-W{week:02}-{weekday}"));
            }
            Token::Literal(ref text) => self.buf.push_str(text),
        }
        Ok(())
    }

    fn push(&mut self, args: core::fmt::Arguments<'_>) {
        // Writing into a String cannot fail.
        self.buf.write_fmt(args).expect("String writes are infallible");
    }
}

/// Maps a 24 hour clock hour to the 12 hour clock: 0 becomes 12, and the
/// afternoon hours drop by twelve.
fn hour12(hour: i8) -> i8 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

#[cfg(test)]
mod tests {
    use super::hour12;

    #[test]
    fn hour12_mapping() {
        assert_eq!(hour12(0), 12);
        assert_eq!(hour12(1), 1);
        assert_eq!(hour12(11), 11);
        assert_eq!(hour12(12), 12);
        assert_eq!(hour12(13), 1);
        assert_eq!(hour12(23), 11);
    }
}
