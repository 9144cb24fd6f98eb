use crate::locale::{sealed::Internal, Def, Locale, Meridians, Tf, Timeframes};

/// Finnish keeps two forms per timeframe: the subject case stands on its
/// own after "sitten" (ago), while the future template "… kuluttua" wants
/// the genitive. The sign of the delta selects the cell.
pub(crate) struct Finnish;

static FINNISH: Def = Def {
    names: &["fi", "fi-fi", "finnish"],
    month_names: [
        "", "tammikuu", "helmikuu", "maaliskuu", "huhtikuu", "toukokuu",
        "kesäkuu", "heinäkuu", "elokuu", "syyskuu", "lokakuu", "marraskuu",
        "joulukuu",
    ],
    month_abbreviations: [
        "", "tammi", "helmi", "maalis", "huhti", "touko", "kesä", "heinä",
        "elo", "syys", "loka", "marras", "joulu",
    ],
    day_names: [
        "", "maanantai", "tiistai", "keskiviikko", "torstai", "perjantai",
        "lauantai", "sunnuntai",
    ],
    day_abbreviations: ["", "ma", "ti", "ke", "to", "pe", "la", "su"],
    meridians: Meridians { am: "am", pm: "pm", am_upper: "AM", pm_upper: "PM" },
    past: "{0} sitten",
    future: "{0} kuluttua",
    and_word: "ja",
    ordinal_day_pattern: r"\d{1,2}\.?",
    timeframes: Timeframes {
        now: Tf::Fixed("juuri nyt"),
        second: Tf::Signed { past: "sekunti", future: "sekunnin" },
        seconds: Tf::Signed { past: "{0} sekuntia", future: "{0} sekunnin" },
        minute: Tf::Signed { past: "minuutti", future: "minuutin" },
        minutes: Tf::Signed { past: "{0} minuuttia", future: "{0} minuutin" },
        hour: Tf::Signed { past: "tunti", future: "tunnin" },
        hours: Tf::Signed { past: "{0} tuntia", future: "{0} tunnin" },
        day: Tf::Signed { past: "päivä", future: "päivän" },
        days: Tf::Signed { past: "{0} päivää", future: "{0} päivän" },
        week: Tf::Signed { past: "viikko", future: "viikon" },
        weeks: Tf::Signed { past: "{0} viikkoa", future: "{0} viikon" },
        month: Tf::Signed { past: "kuukausi", future: "kuukauden" },
        months: Tf::Signed { past: "{0} kuukautta", future: "{0} kuukauden" },
        year: Tf::Signed { past: "vuosi", future: "vuoden" },
        years: Tf::Signed { past: "{0} vuotta", future: "{0} vuoden" },
    },
};

impl Internal for Finnish {
    fn def(&self) -> &'static Def {
        &FINNISH
    }
}

impl Locale for Finnish {
    fn ordinal_number(&self, n: i64) -> String {
        format!("{n}.")
    }
}

pub(crate) struct Estonian;

static ESTONIAN: Def = Def {
    names: &["et", "et-ee", "estonian"],
    month_names: [
        "", "jaanuar", "veebruar", "märts", "aprill", "mai", "juuni",
        "juuli", "august", "september", "oktoober", "november", "detsember",
    ],
    month_abbreviations: [
        "", "jaan", "veebr", "märts", "apr", "mai", "juuni", "juuli", "aug",
        "sept", "okt", "nov", "dets",
    ],
    day_names: [
        "", "esmaspäev", "teisipäev", "kolmapäev", "neljapäev", "reede",
        "laupäev", "pühapäev",
    ],
    day_abbreviations: ["", "esm", "teis", "kolm", "nelj", "re", "lau", "püh"],
    meridians: Meridians { am: "am", pm: "pm", am_upper: "AM", pm_upper: "PM" },
    past: "{0} tagasi",
    future: "{0} pärast",
    and_word: "ja",
    ordinal_day_pattern: r"\d{1,2}\.?",
    timeframes: Timeframes {
        now: Tf::Fixed("just nüüd"),
        second: Tf::Signed { past: "üks sekund", future: "ühe sekundi" },
        seconds: Tf::Signed { past: "{0} sekundit", future: "{0} sekundi" },
        minute: Tf::Signed { past: "üks minut", future: "ühe minuti" },
        minutes: Tf::Signed { past: "{0} minutit", future: "{0} minuti" },
        hour: Tf::Signed { past: "tund aega", future: "tunni aja" },
        hours: Tf::Signed { past: "{0} tundi", future: "{0} tunni" },
        day: Tf::Signed { past: "üks päev", future: "ühe päeva" },
        days: Tf::Signed { past: "{0} päeva", future: "{0} päeva" },
        week: Tf::Signed { past: "üks nädal", future: "ühe nädala" },
        weeks: Tf::Signed { past: "{0} nädalat", future: "{0} nädala" },
        month: Tf::Signed { past: "üks kuu", future: "ühe kuu" },
        months: Tf::Signed { past: "{0} kuud", future: "{0} kuu" },
        year: Tf::Signed { past: "üks aasta", future: "ühe aasta" },
        years: Tf::Signed { past: "{0} aastat", future: "{0} aasta" },
    },
};

impl Internal for Estonian {
    fn def(&self) -> &'static Def {
        &ESTONIAN
    }
}

impl Locale for Estonian {
    fn ordinal_number(&self, n: i64) -> String {
        format!("{n}.")
    }
}

pub(crate) struct Hungarian;

static HUNGARIAN: Def = Def {
    names: &["hu", "hu-hu", "hungarian"],
    month_names: [
        "", "január", "február", "március", "április", "május", "június",
        "július", "augusztus", "szeptember", "október", "november",
        "december",
    ],
    month_abbreviations: [
        "", "jan", "febr", "márc", "ápr", "máj", "jún", "júl", "aug",
        "szept", "okt", "nov", "dec",
    ],
    day_names: [
        "", "hétfő", "kedd", "szerda", "csütörtök", "péntek", "szombat",
        "vasárnap",
    ],
    day_abbreviations: ["", "hét", "kedd", "szer", "csüt", "pént", "szom", "vas"],
    meridians: Meridians { am: "de", pm: "du", am_upper: "DE", pm_upper: "DU" },
    past: "{0} ezelőtt",
    future: "{0} múlva",
    and_word: "és",
    ordinal_day_pattern: r"\d{1,2}\.?",
    timeframes: Timeframes {
        now: Tf::Fixed("éppen most"),
        second: Tf::Signed {
            past: "egy másodperccel",
            future: "egy másodperc",
        },
        seconds: Tf::Signed {
            past: "{0} másodperccel",
            future: "{0} másodperc",
        },
        minute: Tf::Signed { past: "egy perccel", future: "egy perc" },
        minutes: Tf::Signed { past: "{0} perccel", future: "{0} perc" },
        hour: Tf::Signed { past: "egy órával", future: "egy óra" },
        hours: Tf::Signed { past: "{0} órával", future: "{0} óra" },
        day: Tf::Signed { past: "egy nappal", future: "egy nap" },
        days: Tf::Signed { past: "{0} nappal", future: "{0} nap" },
        week: Tf::Signed { past: "egy héttel", future: "egy hét" },
        weeks: Tf::Signed { past: "{0} héttel", future: "{0} hét" },
        month: Tf::Signed { past: "egy hónappal", future: "egy hónap" },
        months: Tf::Signed { past: "{0} hónappal", future: "{0} hónap" },
        year: Tf::Signed { past: "egy évvel", future: "egy év" },
        years: Tf::Signed { past: "{0} évvel", future: "{0} év" },
    },
};

impl Internal for Hungarian {
    fn def(&self) -> &'static Def {
        &HUNGARIAN
    }
}

impl Locale for Hungarian {
    fn ordinal_number(&self, n: i64) -> String {
        format!("{n}.")
    }
}

#[cfg(test)]
mod tests {
    use crate::locale::{Locale, Timeframe};

    use super::*;

    #[test]
    fn finnish_sign_selects_case() {
        assert_eq!(
            Finnish.describe(Timeframe::Hours, 2, false),
            "2 tunnin kuluttua",
        );
        assert_eq!(
            Finnish.describe(Timeframe::Hours, -2, false),
            "2 tuntia sitten",
        );
    }

    #[test]
    fn hungarian_sign_selects_case() {
        assert_eq!(
            Hungarian.describe(Timeframe::Hour, -1, false),
            "egy órával ezelőtt",
        );
        assert_eq!(
            Hungarian.describe(Timeframe::Hour, 1, false),
            "egy óra múlva",
        );
    }
}
