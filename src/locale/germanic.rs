use crate::locale::{
    sealed::Internal, Def, Locale, Meridians, Tf, Timeframe, Timeframes,
};

pub(crate) struct German;

static GERMAN: Def = Def {
    names: &["de", "de-de", "de-at", "de-ch", "german"],
    month_names: [
        "", "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli",
        "August", "September", "Oktober", "November", "Dezember",
    ],
    month_abbreviations: [
        "", "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep",
        "Okt", "Nov", "Dez",
    ],
    day_names: [
        "", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag",
        "Samstag", "Sonntag",
    ],
    day_abbreviations: ["", "Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"],
    meridians: Meridians { am: "am", pm: "pm", am_upper: "AM", pm_upper: "PM" },
    past: "vor {0}",
    future: "in {0}",
    and_word: "und",
    ordinal_day_pattern: r"\d{1,2}\.",
    // Dative, because the phrases sit after "vor" and "in".
    timeframes: Timeframes {
        now: Tf::Fixed("gerade eben"),
        second: Tf::Fixed("einer Sekunde"),
        seconds: Tf::Template("{0} Sekunden"),
        minute: Tf::Fixed("einer Minute"),
        minutes: Tf::Template("{0} Minuten"),
        hour: Tf::Fixed("einer Stunde"),
        hours: Tf::Template("{0} Stunden"),
        day: Tf::Fixed("einem Tag"),
        days: Tf::Template("{0} Tagen"),
        week: Tf::Fixed("einer Woche"),
        weeks: Tf::Template("{0} Wochen"),
        month: Tf::Fixed("einem Monat"),
        months: Tf::Template("{0} Monaten"),
        year: Tf::Fixed("einem Jahr"),
        years: Tf::Template("{0} Jahren"),
    },
};

impl Internal for German {
    fn def(&self) -> &'static Def {
        &GERMAN
    }
}

impl Locale for German {
    fn ordinal_number(&self, n: i64) -> String {
        format!("{n}.")
    }

    /// Bare distances need the nominative, not the dative the relative
    /// templates require.
    fn describe(&self, tf: Timeframe, n: i64, only_distance: bool) -> String {
        if !only_distance {
            let phrase = self.timeframe(tf, n);
            return if tf == Timeframe::Now {
                phrase
            } else {
                self.format_relative(&phrase, n)
            };
        }
        let count = n.unsigned_abs().to_string();
        let template = match tf {
            Timeframe::Now => "gerade eben",
            Timeframe::Second => "eine Sekunde",
            Timeframe::Seconds => "{0} Sekunden",
            Timeframe::Minute => "eine Minute",
            Timeframe::Minutes => "{0} Minuten",
            Timeframe::Hour => "eine Stunde",
            Timeframe::Hours => "{0} Stunden",
            Timeframe::Day => "ein Tag",
            Timeframe::Days => "{0} Tage",
            Timeframe::Week => "eine Woche",
            Timeframe::Weeks => "{0} Wochen",
            Timeframe::Month => "ein Monat",
            Timeframe::Months => "{0} Monate",
            Timeframe::Year => "ein Jahr",
            Timeframe::Years => "{0} Jahre",
        };
        template.replace("{0}", &count)
    }
}

pub(crate) struct Dutch;

static DUTCH: Def = Def {
    names: &["nl", "nl-nl", "dutch"],
    month_names: [
        "", "januari", "februari", "maart", "april", "mei", "juni", "juli",
        "augustus", "september", "oktober", "november", "december",
    ],
    month_abbreviations: [
        "", "jan", "feb", "mrt", "apr", "mei", "jun", "jul", "aug", "sep",
        "okt", "nov", "dec",
    ],
    day_names: [
        "", "maandag", "dinsdag", "woensdag", "donderdag", "vrijdag",
        "zaterdag", "zondag",
    ],
    day_abbreviations: ["", "ma", "di", "wo", "do", "vr", "za", "zo"],
    meridians: Meridians { am: "am", pm: "pm", am_upper: "AM", pm_upper: "PM" },
    past: "{0} geleden",
    future: "over {0}",
    and_word: "en",
    ordinal_day_pattern: r"\d{1,2}e?",
    timeframes: Timeframes {
        now: Tf::Fixed("nu"),
        second: Tf::Fixed("een seconde"),
        seconds: Tf::Template("{0} seconden"),
        minute: Tf::Fixed("een minuut"),
        minutes: Tf::Template("{0} minuten"),
        hour: Tf::Fixed("een uur"),
        hours: Tf::Template("{0} uur"),
        day: Tf::Fixed("een dag"),
        days: Tf::Template("{0} dagen"),
        week: Tf::Fixed("een week"),
        weeks: Tf::Template("{0} weken"),
        month: Tf::Fixed("een maand"),
        months: Tf::Template("{0} maanden"),
        year: Tf::Fixed("een jaar"),
        years: Tf::Template("{0} jaar"),
    },
};

impl Internal for Dutch {
    fn def(&self) -> &'static Def {
        &DUTCH
    }
}

impl Locale for Dutch {
    fn ordinal_number(&self, n: i64) -> String {
        format!("{n}e")
    }
}

pub(crate) struct Swedish;

static SWEDISH: Def = Def {
    names: &["sv", "sv-se", "swedish"],
    month_names: [
        "", "januari", "februari", "mars", "april", "maj", "juni", "juli",
        "augusti", "september", "oktober", "november", "december",
    ],
    month_abbreviations: [
        "", "jan", "feb", "mar", "apr", "maj", "jun", "jul", "aug", "sep",
        "okt", "nov", "dec",
    ],
    day_names: [
        "", "måndag", "tisdag", "onsdag", "torsdag", "fredag", "lördag",
        "söndag",
    ],
    day_abbreviations: ["", "mån", "tis", "ons", "tor", "fre", "lör", "sön"],
    meridians: Meridians { am: "am", pm: "pm", am_upper: "AM", pm_upper: "PM" },
    past: "för {0} sedan",
    future: "om {0}",
    and_word: "och",
    ordinal_day_pattern: r"\d{1,2}\.?",
    timeframes: Timeframes {
        now: Tf::Fixed("just nu"),
        second: Tf::Fixed("en sekund"),
        seconds: Tf::Template("{0} sekunder"),
        minute: Tf::Fixed("en minut"),
        minutes: Tf::Template("{0} minuter"),
        hour: Tf::Fixed("en timme"),
        hours: Tf::Template("{0} timmar"),
        day: Tf::Fixed("en dag"),
        days: Tf::Template("{0} dagar"),
        week: Tf::Fixed("en vecka"),
        weeks: Tf::Template("{0} veckor"),
        month: Tf::Fixed("en månad"),
        months: Tf::Template("{0} månader"),
        year: Tf::Fixed("ett år"),
        years: Tf::Template("{0} år"),
    },
};

impl Internal for Swedish {
    fn def(&self) -> &'static Def {
        &SWEDISH
    }
}

impl Locale for Swedish {}

pub(crate) struct Danish;

static DANISH: Def = Def {
    names: &["da", "da-dk", "danish"],
    month_names: [
        "", "januar", "februar", "marts", "april", "maj", "juni", "juli",
        "august", "september", "oktober", "november", "december",
    ],
    month_abbreviations: [
        "", "jan", "feb", "mar", "apr", "maj", "jun", "jul", "aug", "sep",
        "okt", "nov", "dec",
    ],
    day_names: [
        "", "mandag", "tirsdag", "onsdag", "torsdag", "fredag", "lørdag",
        "søndag",
    ],
    day_abbreviations: ["", "man", "tir", "ons", "tor", "fre", "lør", "søn"],
    meridians: Meridians { am: "am", pm: "pm", am_upper: "AM", pm_upper: "PM" },
    past: "for {0} siden",
    future: "om {0}",
    and_word: "og",
    ordinal_day_pattern: r"\d{1,2}\.?",
    timeframes: Timeframes {
        now: Tf::Fixed("lige nu"),
        second: Tf::Fixed("et sekund"),
        seconds: Tf::Template("{0} sekunder"),
        minute: Tf::Fixed("et minut"),
        minutes: Tf::Template("{0} minutter"),
        hour: Tf::Fixed("en time"),
        hours: Tf::Template("{0} timer"),
        day: Tf::Fixed("en dag"),
        days: Tf::Template("{0} dage"),
        week: Tf::Fixed("en uge"),
        weeks: Tf::Template("{0} uger"),
        month: Tf::Fixed("en måned"),
        months: Tf::Template("{0} måneder"),
        year: Tf::Fixed("et år"),
        years: Tf::Template("{0} år"),
    },
};

impl Internal for Danish {
    fn def(&self) -> &'static Def {
        &DANISH
    }
}

impl Locale for Danish {
    fn ordinal_number(&self, n: i64) -> String {
        format!("{n}.")
    }
}

pub(crate) struct Norwegian;

static NORWEGIAN: Def = Def {
    names: &["nb", "nb-no", "no", "norwegian"],
    month_names: [
        "", "januar", "februar", "mars", "april", "mai", "juni", "juli",
        "august", "september", "oktober", "november", "desember",
    ],
    month_abbreviations: [
        "", "jan", "feb", "mar", "apr", "mai", "jun", "jul", "aug", "sep",
        "okt", "nov", "des",
    ],
    day_names: [
        "", "mandag", "tirsdag", "onsdag", "torsdag", "fredag", "lørdag",
        "søndag",
    ],
    day_abbreviations: ["", "man", "tir", "ons", "tor", "fre", "lør", "søn"],
    meridians: Meridians { am: "am", pm: "pm", am_upper: "AM", pm_upper: "PM" },
    past: "for {0} siden",
    future: "om {0}",
    and_word: "og",
    ordinal_day_pattern: r"\d{1,2}\.?",
    timeframes: Timeframes {
        now: Tf::Fixed("nå nettopp"),
        second: Tf::Fixed("ett sekund"),
        seconds: Tf::Template("{0} sekunder"),
        minute: Tf::Fixed("ett minutt"),
        minutes: Tf::Template("{0} minutter"),
        hour: Tf::Fixed("en time"),
        hours: Tf::Template("{0} timer"),
        day: Tf::Fixed("en dag"),
        days: Tf::Template("{0} dager"),
        week: Tf::Fixed("en uke"),
        weeks: Tf::Template("{0} uker"),
        month: Tf::Fixed("en måned"),
        months: Tf::Template("{0} måneder"),
        year: Tf::Fixed("ett år"),
        years: Tf::Template("{0} år"),
    },
};

impl Internal for Norwegian {
    fn def(&self) -> &'static Def {
        &NORWEGIAN
    }
}

impl Locale for Norwegian {
    fn ordinal_number(&self, n: i64) -> String {
        format!("{n}.")
    }
}

#[cfg(test)]
mod tests {
    use crate::locale::{Locale, Timeframe};

    use super::*;

    #[test]
    fn german_cases() {
        // Wrapped phrases are dative, bare distances nominative.
        assert_eq!(
            German.describe(Timeframe::Days, 3, false),
            "in 3 Tagen",
        );
        assert_eq!(German.describe(Timeframe::Days, 3, true), "3 Tage");
        assert_eq!(German.describe(Timeframe::Day, -1, false), "vor einem Tag");
        assert_eq!(German.describe(Timeframe::Day, -1, true), "ein Tag");
    }

    #[test]
    fn swedish_past() {
        assert_eq!(
            Swedish.describe(Timeframe::Hours, -2, false),
            "för 2 timmar sedan",
        );
    }
}
