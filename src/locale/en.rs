use crate::locale::{sealed::Internal, Def, Locale, Meridians, Tf, Timeframes};

/// English. The default locale, and the only one the formatter and
/// humanizer assume when none is given.
pub(crate) struct English;

static ENGLISH: Def = Def {
    names: &["en", "en-us", "en-gb", "english"],
    month_names: [
        "", "January", "February", "March", "April", "May", "June", "July",
        "August", "September", "October", "November", "December",
    ],
    month_abbreviations: [
        "", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep",
        "Oct", "Nov", "Dec",
    ],
    day_names: [
        "", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday",
        "Saturday", "Sunday",
    ],
    day_abbreviations: ["", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
    meridians: Meridians { am: "am", pm: "pm", am_upper: "AM", pm_upper: "PM" },
    past: "{0} ago",
    future: "in {0}",
    and_word: "and",
    ordinal_day_pattern: r"\d{1,2}(?:st|nd|rd|th)",
    timeframes: Timeframes {
        now: Tf::Fixed("just now"),
        second: Tf::Fixed("a second"),
        seconds: Tf::Template("{0} seconds"),
        minute: Tf::Fixed("a minute"),
        minutes: Tf::Template("{0} minutes"),
        hour: Tf::Fixed("an hour"),
        hours: Tf::Template("{0} hours"),
        day: Tf::Fixed("a day"),
        days: Tf::Template("{0} days"),
        week: Tf::Fixed("a week"),
        weeks: Tf::Template("{0} weeks"),
        month: Tf::Fixed("a month"),
        months: Tf::Template("{0} months"),
        year: Tf::Fixed("a year"),
        years: Tf::Template("{0} years"),
    },
};

impl Internal for English {
    fn def(&self) -> &'static Def {
        &ENGLISH
    }
}

impl Locale for English {
    fn ordinal_number(&self, n: i64) -> String {
        let suffix = match (n.rem_euclid(10), n.rem_euclid(100)) {
            (_, 11..=13) => "th",
            (1, _) => "st",
            (2, _) => "nd",
            (3, _) => "rd",
            _ => "th",
        };
        format!("{n}{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use crate::locale::{Locale, Timeframe};

    use super::English;

    #[test]
    fn ordinals() {
        assert_eq!(English.ordinal_number(1), "1st");
        assert_eq!(English.ordinal_number(2), "2nd");
        assert_eq!(English.ordinal_number(3), "3rd");
        assert_eq!(English.ordinal_number(4), "4th");
        assert_eq!(English.ordinal_number(11), "11th");
        assert_eq!(English.ordinal_number(12), "12th");
        assert_eq!(English.ordinal_number(13), "13th");
        assert_eq!(English.ordinal_number(21), "21st");
        assert_eq!(English.ordinal_number(102), "102nd");
    }

    #[test]
    fn describe() {
        assert_eq!(English.describe(Timeframe::Hour, 1, false), "in an hour");
        assert_eq!(English.describe(Timeframe::Hours, -2, false), "2 hours ago");
        assert_eq!(English.describe(Timeframe::Hours, -2, true), "2 hours");
        assert_eq!(English.describe(Timeframe::Now, 0, false), "just now");
    }

    #[test]
    fn describe_multi() {
        let parts = [
            (Timeframe::Hour, 1),
            (Timeframe::Minutes, 6),
        ];
        assert_eq!(
            English.describe_multi(&parts, false),
            "in an hour and 6 minutes",
        );
        assert_eq!(
            English.describe_multi(&parts, true),
            "an hour and 6 minutes",
        );
    }
}
