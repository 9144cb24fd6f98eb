use crate::locale::{sealed::Internal, Def, Locale, Meridians, Tf, Timeframes};

/// The East Slavic plural rule: one (1, 21, 31, … but not 11), few (2-4,
/// 22-24, … but not 12-14), many (everything else).
fn east_slavic_plural(n: u64) -> usize {
    if n % 10 == 1 && n % 100 != 11 {
        0
    } else if (2..=4).contains(&(n % 10)) && !(12..=14).contains(&(n % 100)) {
        1
    } else {
        2
    }
}

/// The West Slavic rule: one (exactly 1), few (2-4), many.
fn west_slavic_plural(n: u64) -> usize {
    if n == 1 {
        0
    } else if (2..=4).contains(&n) {
        1
    } else {
        2
    }
}

pub(crate) struct Russian;

static RUSSIAN: Def = Def {
    names: &["ru", "ru-ru", "russian"],
    // Genitive, as the names appear after a day number.
    month_names: [
        "", "января", "февраля", "марта", "апреля", "мая", "июня", "июля",
        "августа", "сентября", "октября", "ноября", "декабря",
    ],
    month_abbreviations: [
        "", "янв", "фев", "мар", "апр", "май", "июн", "июл", "авг", "сен",
        "окт", "ноя", "дек",
    ],
    day_names: [
        "", "понедельник", "вторник", "среда", "четверг", "пятница",
        "суббота", "воскресенье",
    ],
    day_abbreviations: ["", "пн", "вт", "ср", "чт", "пт", "сб", "вс"],
    meridians: Meridians { am: "am", pm: "pm", am_upper: "AM", pm_upper: "PM" },
    past: "{0} назад",
    future: "через {0}",
    and_word: "и",
    ordinal_day_pattern: r"\d{1,2}-?(?:го|й|е)?",
    timeframes: Timeframes {
        now: Tf::Fixed("сейчас"),
        second: Tf::Fixed("секунду"),
        seconds: Tf::Plural(&["{0} секунду", "{0} секунды", "{0} секунд"]),
        minute: Tf::Fixed("минуту"),
        minutes: Tf::Plural(&["{0} минуту", "{0} минуты", "{0} минут"]),
        hour: Tf::Fixed("час"),
        hours: Tf::Plural(&["{0} час", "{0} часа", "{0} часов"]),
        day: Tf::Fixed("день"),
        days: Tf::Plural(&["{0} день", "{0} дня", "{0} дней"]),
        week: Tf::Fixed("неделю"),
        weeks: Tf::Plural(&["{0} неделю", "{0} недели", "{0} недель"]),
        month: Tf::Fixed("месяц"),
        months: Tf::Plural(&["{0} месяц", "{0} месяца", "{0} месяцев"]),
        year: Tf::Fixed("год"),
        years: Tf::Plural(&["{0} год", "{0} года", "{0} лет"]),
    },
};

impl Internal for Russian {
    fn def(&self) -> &'static Def {
        &RUSSIAN
    }

    fn plural_index(&self, n: u64) -> usize {
        east_slavic_plural(n)
    }
}

impl Locale for Russian {}

pub(crate) struct Ukrainian;

static UKRAINIAN: Def = Def {
    names: &["uk", "uk-ua", "ua", "ukrainian"],
    month_names: [
        "", "січня", "лютого", "березня", "квітня", "травня", "червня",
        "липня", "серпня", "вересня", "жовтня", "листопада", "грудня",
    ],
    month_abbreviations: [
        "", "січ", "лют", "бер", "кві", "тра", "чер", "лип", "сер", "вер",
        "жов", "лис", "гру",
    ],
    day_names: [
        "", "понеділок", "вівторок", "середа", "четвер", "п'ятниця",
        "субота", "неділя",
    ],
    day_abbreviations: ["", "пн", "вт", "ср", "чт", "пт", "сб", "нд"],
    meridians: Meridians { am: "am", pm: "pm", am_upper: "AM", pm_upper: "PM" },
    past: "{0} тому",
    future: "за {0}",
    and_word: "і",
    ordinal_day_pattern: r"\d{1,2}-?(?:го|й|е)?",
    timeframes: Timeframes {
        now: Tf::Fixed("зараз"),
        second: Tf::Fixed("секунду"),
        seconds: Tf::Plural(&["{0} секунду", "{0} секунди", "{0} секунд"]),
        minute: Tf::Fixed("хвилину"),
        minutes: Tf::Plural(&["{0} хвилину", "{0} хвилини", "{0} хвилин"]),
        hour: Tf::Fixed("годину"),
        hours: Tf::Plural(&["{0} годину", "{0} години", "{0} годин"]),
        day: Tf::Fixed("день"),
        days: Tf::Plural(&["{0} день", "{0} дні", "{0} днів"]),
        week: Tf::Fixed("тиждень"),
        weeks: Tf::Plural(&["{0} тиждень", "{0} тижні", "{0} тижнів"]),
        month: Tf::Fixed("місяць"),
        months: Tf::Plural(&["{0} місяць", "{0} місяці", "{0} місяців"]),
        year: Tf::Fixed("рік"),
        years: Tf::Plural(&["{0} рік", "{0} роки", "{0} років"]),
    },
};

impl Internal for Ukrainian {
    fn def(&self) -> &'static Def {
        &UKRAINIAN
    }

    fn plural_index(&self, n: u64) -> usize {
        east_slavic_plural(n)
    }
}

impl Locale for Ukrainian {}

pub(crate) struct Polish;

static POLISH: Def = Def {
    names: &["pl", "pl-pl", "polish"],
    month_names: [
        "", "styczeń", "luty", "marzec", "kwiecień", "maj", "czerwiec",
        "lipiec", "sierpień", "wrzesień", "październik", "listopad",
        "grudzień",
    ],
    month_abbreviations: [
        "", "sty", "lut", "mar", "kwi", "maj", "cze", "lip", "sie", "wrz",
        "paź", "lis", "gru",
    ],
    day_names: [
        "", "poniedziałek", "wtorek", "środa", "czwartek", "piątek",
        "sobota", "niedziela",
    ],
    day_abbreviations: ["", "pn", "wt", "śr", "czw", "pt", "so", "nd"],
    meridians: Meridians { am: "am", pm: "pm", am_upper: "AM", pm_upper: "PM" },
    past: "{0} temu",
    future: "za {0}",
    and_word: "i",
    ordinal_day_pattern: r"\d{1,2}\.?",
    timeframes: Timeframes {
        now: Tf::Fixed("teraz"),
        second: Tf::Fixed("sekundę"),
        seconds: Tf::Plural(&["{0} sekundę", "{0} sekundy", "{0} sekund"]),
        minute: Tf::Fixed("minutę"),
        minutes: Tf::Plural(&["{0} minutę", "{0} minuty", "{0} minut"]),
        hour: Tf::Fixed("godzinę"),
        hours: Tf::Plural(&["{0} godzinę", "{0} godziny", "{0} godzin"]),
        day: Tf::Fixed("dzień"),
        days: Tf::Plural(&["{0} dzień", "{0} dni", "{0} dni"]),
        week: Tf::Fixed("tydzień"),
        weeks: Tf::Plural(&["{0} tydzień", "{0} tygodnie", "{0} tygodni"]),
        month: Tf::Fixed("miesiąc"),
        months: Tf::Plural(&["{0} miesiąc", "{0} miesiące", "{0} miesięcy"]),
        year: Tf::Fixed("rok"),
        years: Tf::Plural(&["{0} rok", "{0} lata", "{0} lat"]),
    },
};

impl Internal for Polish {
    fn def(&self) -> &'static Def {
        &POLISH
    }

    fn plural_index(&self, n: u64) -> usize {
        // Like the East Slavic rule for the few/many split, but "one" is
        // only ever the number 1.
        if n == 1 {
            0
        } else if (2..=4).contains(&(n % 10))
            && !(12..=14).contains(&(n % 100))
        {
            1
        } else {
            2
        }
    }
}

impl Locale for Polish {}

pub(crate) struct Czech;

static CZECH: Def = Def {
    names: &["cs", "cs-cz", "czech"],
    month_names: [
        "", "leden", "únor", "březen", "duben", "květen", "červen",
        "červenec", "srpen", "září", "říjen", "listopad", "prosinec",
    ],
    month_abbreviations: [
        "", "led", "úno", "bře", "dub", "kvě", "čvn", "čvc", "srp", "zář",
        "říj", "lis", "pro",
    ],
    day_names: [
        "", "pondělí", "úterý", "středa", "čtvrtek", "pátek", "sobota",
        "neděle",
    ],
    day_abbreviations: ["", "po", "út", "st", "čt", "pá", "so", "ne"],
    meridians: Meridians { am: "am", pm: "pm", am_upper: "AM", pm_upper: "PM" },
    past: "před {0}",
    future: "za {0}",
    and_word: "a",
    ordinal_day_pattern: r"\d{1,2}\.?",
    // Instrumental after "před", accusative after "za", and the future
    // side still declines by count.
    timeframes: Timeframes {
        now: Tf::Fixed("teď"),
        second: Tf::Signed { past: "sekundou", future: "sekundu" },
        seconds: Tf::SignedPlural {
            past: &["{0} sekundami"],
            future: &["{0} sekundu", "{0} sekundy", "{0} sekund"],
        },
        minute: Tf::Signed { past: "minutou", future: "minutu" },
        minutes: Tf::SignedPlural {
            past: &["{0} minutami"],
            future: &["{0} minutu", "{0} minuty", "{0} minut"],
        },
        hour: Tf::Signed { past: "hodinou", future: "hodinu" },
        hours: Tf::SignedPlural {
            past: &["{0} hodinami"],
            future: &["{0} hodinu", "{0} hodiny", "{0} hodin"],
        },
        day: Tf::Signed { past: "dnem", future: "den" },
        days: Tf::SignedPlural {
            past: &["{0} dny"],
            future: &["{0} den", "{0} dny", "{0} dní"],
        },
        week: Tf::Signed { past: "týdnem", future: "týden" },
        weeks: Tf::SignedPlural {
            past: &["{0} týdny"],
            future: &["{0} týden", "{0} týdny", "{0} týdnů"],
        },
        month: Tf::Signed { past: "měsícem", future: "měsíc" },
        months: Tf::SignedPlural {
            past: &["{0} měsíci"],
            future: &["{0} měsíc", "{0} měsíce", "{0} měsíců"],
        },
        year: Tf::Signed { past: "rokem", future: "rok" },
        years: Tf::SignedPlural {
            past: &["{0} lety"],
            future: &["{0} rok", "{0} roky", "{0} let"],
        },
    },
};

impl Internal for Czech {
    fn def(&self) -> &'static Def {
        &CZECH
    }

    fn plural_index(&self, n: u64) -> usize {
        west_slavic_plural(n)
    }
}

impl Locale for Czech {}

pub(crate) struct Slovak;

static SLOVAK: Def = Def {
    names: &["sk", "sk-sk", "slovak"],
    month_names: [
        "", "január", "február", "marec", "apríl", "máj", "jún", "júl",
        "august", "september", "október", "november", "december",
    ],
    month_abbreviations: [
        "", "jan", "feb", "mar", "apr", "máj", "jún", "júl", "aug", "sep",
        "okt", "nov", "dec",
    ],
    day_names: [
        "", "pondelok", "utorok", "streda", "štvrtok", "piatok", "sobota",
        "nedeľa",
    ],
    day_abbreviations: ["", "po", "ut", "st", "št", "pi", "so", "ne"],
    meridians: Meridians { am: "am", pm: "pm", am_upper: "AM", pm_upper: "PM" },
    past: "pred {0}",
    future: "o {0}",
    and_word: "a",
    ordinal_day_pattern: r"\d{1,2}\.?",
    timeframes: Timeframes {
        now: Tf::Fixed("teraz"),
        second: Tf::Signed { past: "sekundou", future: "sekundu" },
        seconds: Tf::SignedPlural {
            past: &["{0} sekundami"],
            future: &["{0} sekundu", "{0} sekundy", "{0} sekúnd"],
        },
        minute: Tf::Signed { past: "minútou", future: "minútu" },
        minutes: Tf::SignedPlural {
            past: &["{0} minútami"],
            future: &["{0} minútu", "{0} minúty", "{0} minút"],
        },
        hour: Tf::Signed { past: "hodinou", future: "hodinu" },
        hours: Tf::SignedPlural {
            past: &["{0} hodinami"],
            future: &["{0} hodinu", "{0} hodiny", "{0} hodín"],
        },
        day: Tf::Signed { past: "dňom", future: "deň" },
        days: Tf::SignedPlural {
            past: &["{0} dňami"],
            future: &["{0} deň", "{0} dni", "{0} dní"],
        },
        week: Tf::Signed { past: "týždňom", future: "týždeň" },
        weeks: Tf::SignedPlural {
            past: &["{0} týždňami"],
            future: &["{0} týždeň", "{0} týždne", "{0} týždňov"],
        },
        month: Tf::Signed { past: "mesiacom", future: "mesiac" },
        months: Tf::SignedPlural {
            past: &["{0} mesiacmi"],
            future: &["{0} mesiac", "{0} mesiace", "{0} mesiacov"],
        },
        year: Tf::Signed { past: "rokom", future: "rok" },
        years: Tf::SignedPlural {
            past: &["{0} rokmi"],
            future: &["{0} rok", "{0} roky", "{0} rokov"],
        },
    },
};

impl Internal for Slovak {
    fn def(&self) -> &'static Def {
        &SLOVAK
    }

    fn plural_index(&self, n: u64) -> usize {
        west_slavic_plural(n)
    }
}

impl Locale for Slovak {}

pub(crate) struct Bulgarian;

static BULGARIAN: Def = Def {
    names: &["bg", "bg-bg", "bulgarian"],
    month_names: [
        "", "януари", "февруари", "март", "април", "май", "юни", "юли",
        "август", "септември", "октомври", "ноември", "декември",
    ],
    month_abbreviations: [
        "", "яну", "фев", "мар", "апр", "май", "юни", "юли", "авг", "сеп",
        "окт", "ное", "дек",
    ],
    day_names: [
        "", "понеделник", "вторник", "сряда", "четвъртък", "петък",
        "събота", "неделя",
    ],
    day_abbreviations: ["", "пон", "вто", "сря", "чет", "пет", "съб", "нед"],
    meridians: Meridians { am: "am", pm: "pm", am_upper: "AM", pm_upper: "PM" },
    past: "преди {0}",
    future: "след {0}",
    and_word: "и",
    ordinal_day_pattern: r"\d{1,2}-?(?:ви|ри|ти)?",
    timeframes: Timeframes {
        now: Tf::Fixed("сега"),
        second: Tf::Fixed("секунда"),
        seconds: Tf::Template("{0} секунди"),
        minute: Tf::Fixed("минута"),
        minutes: Tf::Template("{0} минути"),
        hour: Tf::Fixed("час"),
        hours: Tf::Template("{0} часа"),
        day: Tf::Fixed("ден"),
        days: Tf::Template("{0} дни"),
        week: Tf::Fixed("седмица"),
        weeks: Tf::Template("{0} седмици"),
        month: Tf::Fixed("месец"),
        months: Tf::Template("{0} месеца"),
        year: Tf::Fixed("година"),
        years: Tf::Template("{0} години"),
    },
};

impl Internal for Bulgarian {
    fn def(&self) -> &'static Def {
        &BULGARIAN
    }
}

impl Locale for Bulgarian {}

pub(crate) struct Macedonian;

static MACEDONIAN: Def = Def {
    names: &["mk", "mk-mk", "macedonian"],
    month_names: [
        "", "јануари", "февруари", "март", "април", "мај", "јуни", "јули",
        "август", "септември", "октомври", "ноември", "декември",
    ],
    month_abbreviations: [
        "", "јан", "фев", "мар", "апр", "мај", "јун", "јул", "авг", "септ",
        "окт", "ноем", "декем",
    ],
    day_names: [
        "", "понеделник", "вторник", "среда", "четврток", "петок", "сабота",
        "недела",
    ],
    day_abbreviations: ["", "пон", "вт", "сре", "чет", "пет", "саб", "нед"],
    meridians: Meridians { am: "am", pm: "pm", am_upper: "AM", pm_upper: "PM" },
    past: "пред {0}",
    future: "за {0}",
    and_word: "и",
    ordinal_day_pattern: r"\d{1,2}-?(?:ви|ри|ти)?",
    timeframes: Timeframes {
        now: Tf::Fixed("сега"),
        second: Tf::Fixed("секунда"),
        seconds: Tf::Template("{0} секунди"),
        minute: Tf::Fixed("една минута"),
        minutes: Tf::Template("{0} минути"),
        hour: Tf::Fixed("еден саат"),
        hours: Tf::Template("{0} саати"),
        day: Tf::Fixed("еден ден"),
        days: Tf::Template("{0} дена"),
        week: Tf::Fixed("една недела"),
        weeks: Tf::Template("{0} недели"),
        month: Tf::Fixed("еден месец"),
        months: Tf::Template("{0} месеци"),
        year: Tf::Fixed("една година"),
        years: Tf::Template("{0} години"),
    },
};

impl Internal for Macedonian {
    fn def(&self) -> &'static Def {
        &MACEDONIAN
    }
}

impl Locale for Macedonian {}

#[cfg(test)]
mod tests {
    use crate::locale::{Locale, Timeframe};

    use super::*;

    #[test]
    fn east_slavic_cells() {
        assert_eq!(east_slavic_plural(1), 0);
        assert_eq!(east_slavic_plural(2), 1);
        assert_eq!(east_slavic_plural(5), 2);
        assert_eq!(east_slavic_plural(11), 2);
        assert_eq!(east_slavic_plural(21), 0);
        assert_eq!(east_slavic_plural(22), 1);
        assert_eq!(east_slavic_plural(112), 2);
    }

    #[test]
    fn russian_plurals() {
        assert_eq!(
            Russian.describe(Timeframe::Hours, -2, false),
            "2 часа назад",
        );
        assert_eq!(
            Russian.describe(Timeframe::Hours, -5, false),
            "5 часов назад",
        );
        assert_eq!(
            Russian.describe(Timeframe::Hours, 21, false),
            "через 21 час",
        );
    }

    #[test]
    fn polish_one_is_only_one() {
        assert_eq!(
            Polish.describe(Timeframe::Years, -21, false),
            "21 lat temu",
        );
        assert_eq!(Polish.describe(Timeframe::Years, -2, false), "2 lata temu");
    }

    #[test]
    fn czech_sign_and_count() {
        assert_eq!(
            Czech.describe(Timeframe::Hours, -5, false),
            "před 5 hodinami",
        );
        assert_eq!(Czech.describe(Timeframe::Hours, 2, false), "za 2 hodiny");
        assert_eq!(Czech.describe(Timeframe::Hours, 5, false), "za 5 hodin");
    }
}
