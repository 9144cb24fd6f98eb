use crate::locale::{sealed::Internal, Def, Locale, Meridians, Tf, Timeframes};

pub(crate) struct French;

static FRENCH: Def = Def {
    names: &["fr", "fr-fr", "french"],
    month_names: [
        "", "janvier", "février", "mars", "avril", "mai", "juin", "juillet",
        "août", "septembre", "octobre", "novembre", "décembre",
    ],
    month_abbreviations: [
        "", "janv", "févr", "mars", "avr", "mai", "juin", "juil", "août",
        "sept", "oct", "nov", "déc",
    ],
    day_names: [
        "", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
        "dimanche",
    ],
    day_abbreviations: ["", "lun", "mar", "mer", "jeu", "ven", "sam", "dim"],
    meridians: Meridians { am: "am", pm: "pm", am_upper: "AM", pm_upper: "PM" },
    past: "il y a {0}",
    future: "dans {0}",
    and_word: "et",
    ordinal_day_pattern: r"\d{1,2}(?:er|e)?",
    timeframes: Timeframes {
        now: Tf::Fixed("maintenant"),
        second: Tf::Fixed("une seconde"),
        seconds: Tf::Template("{0} secondes"),
        minute: Tf::Fixed("une minute"),
        minutes: Tf::Template("{0} minutes"),
        hour: Tf::Fixed("une heure"),
        hours: Tf::Template("{0} heures"),
        day: Tf::Fixed("un jour"),
        days: Tf::Template("{0} jours"),
        week: Tf::Fixed("une semaine"),
        weeks: Tf::Template("{0} semaines"),
        month: Tf::Fixed("un mois"),
        months: Tf::Template("{0} mois"),
        year: Tf::Fixed("un an"),
        years: Tf::Template("{0} ans"),
    },
};

impl Internal for French {
    fn def(&self) -> &'static Def {
        &FRENCH
    }
}

impl Locale for French {
    fn ordinal_number(&self, n: i64) -> String {
        if n == 1 {
            String::from("1er")
        } else {
            format!("{n}e")
        }
    }
}

pub(crate) struct Spanish;

static SPANISH: Def = Def {
    names: &["es", "es-es", "es-mx", "spanish"],
    month_names: [
        "", "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio",
        "agosto", "septiembre", "octubre", "noviembre", "diciembre",
    ],
    month_abbreviations: [
        "", "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep",
        "oct", "nov", "dic",
    ],
    day_names: [
        "", "lunes", "martes", "miércoles", "jueves", "viernes", "sábado",
        "domingo",
    ],
    day_abbreviations: ["", "lun", "mar", "mié", "jue", "vie", "sáb", "dom"],
    meridians: Meridians { am: "am", pm: "pm", am_upper: "AM", pm_upper: "PM" },
    past: "hace {0}",
    future: "en {0}",
    and_word: "y",
    ordinal_day_pattern: r"\d{1,2}º?",
    timeframes: Timeframes {
        now: Tf::Fixed("ahora"),
        second: Tf::Fixed("un segundo"),
        seconds: Tf::Template("{0} segundos"),
        minute: Tf::Fixed("un minuto"),
        minutes: Tf::Template("{0} minutos"),
        hour: Tf::Fixed("una hora"),
        hours: Tf::Template("{0} horas"),
        day: Tf::Fixed("un día"),
        days: Tf::Template("{0} días"),
        week: Tf::Fixed("una semana"),
        weeks: Tf::Template("{0} semanas"),
        month: Tf::Fixed("un mes"),
        months: Tf::Template("{0} meses"),
        year: Tf::Fixed("un año"),
        years: Tf::Template("{0} años"),
    },
};

impl Internal for Spanish {
    fn def(&self) -> &'static Def {
        &SPANISH
    }
}

impl Locale for Spanish {
    fn ordinal_number(&self, n: i64) -> String {
        format!("{n}º")
    }
}

pub(crate) struct Italian;

static ITALIAN: Def = Def {
    names: &["it", "it-it", "italian"],
    month_names: [
        "", "gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno",
        "luglio", "agosto", "settembre", "ottobre", "novembre", "dicembre",
    ],
    month_abbreviations: [
        "", "gen", "feb", "mar", "apr", "mag", "giu", "lug", "ago", "set",
        "ott", "nov", "dic",
    ],
    day_names: [
        "", "lunedì", "martedì", "mercoledì", "giovedì", "venerdì", "sabato",
        "domenica",
    ],
    day_abbreviations: ["", "lun", "mar", "mer", "gio", "ven", "sab", "dom"],
    meridians: Meridians { am: "am", pm: "pm", am_upper: "AM", pm_upper: "PM" },
    past: "{0} fa",
    future: "tra {0}",
    and_word: "e",
    ordinal_day_pattern: r"\d{1,2}º?",
    timeframes: Timeframes {
        now: Tf::Fixed("adesso"),
        second: Tf::Fixed("un secondo"),
        seconds: Tf::Template("{0} secondi"),
        minute: Tf::Fixed("un minuto"),
        minutes: Tf::Template("{0} minuti"),
        hour: Tf::Fixed("un'ora"),
        hours: Tf::Template("{0} ore"),
        day: Tf::Fixed("un giorno"),
        days: Tf::Template("{0} giorni"),
        week: Tf::Fixed("una settimana"),
        weeks: Tf::Template("{0} settimane"),
        month: Tf::Fixed("un mese"),
        months: Tf::Template("{0} mesi"),
        year: Tf::Fixed("un anno"),
        years: Tf::Template("{0} anni"),
    },
};

impl Internal for Italian {
    fn def(&self) -> &'static Def {
        &ITALIAN
    }
}

impl Locale for Italian {
    fn ordinal_number(&self, n: i64) -> String {
        format!("{n}º")
    }
}

pub(crate) struct Portuguese;

/// European and Brazilian Portuguese differ only in registry names and
/// the past template ("há" vs. "faz"), so both tables come from one
/// constructor.
const fn portuguese_def(
    names: &'static [&'static str],
    past: &'static str,
) -> Def {
    Def {
        names,
        month_names: [
            "", "janeiro", "fevereiro", "março", "abril", "maio", "junho",
            "julho", "agosto", "setembro", "outubro", "novembro", "dezembro",
        ],
        month_abbreviations: [
            "", "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago",
            "set", "out", "nov", "dez",
        ],
        day_names: [
            "", "segunda-feira", "terça-feira", "quarta-feira",
            "quinta-feira", "sexta-feira", "sábado", "domingo",
        ],
        day_abbreviations: [
            "", "seg", "ter", "qua", "qui", "sex", "sáb", "dom",
        ],
        meridians: Meridians {
            am: "am",
            pm: "pm",
            am_upper: "AM",
            pm_upper: "PM",
        },
        past,
        future: "em {0}",
        and_word: "e",
        ordinal_day_pattern: r"\d{1,2}º?",
        timeframes: Timeframes {
            now: Tf::Fixed("agora"),
            second: Tf::Fixed("um segundo"),
            seconds: Tf::Template("{0} segundos"),
            minute: Tf::Fixed("um minuto"),
            minutes: Tf::Template("{0} minutos"),
            hour: Tf::Fixed("uma hora"),
            hours: Tf::Template("{0} horas"),
            day: Tf::Fixed("um dia"),
            days: Tf::Template("{0} dias"),
            week: Tf::Fixed("uma semana"),
            weeks: Tf::Template("{0} semanas"),
            month: Tf::Fixed("um mês"),
            months: Tf::Template("{0} meses"),
            year: Tf::Fixed("um ano"),
            years: Tf::Template("{0} anos"),
        },
    }
}

static PORTUGUESE: Def =
    portuguese_def(&["pt", "pt-pt", "portuguese"], "há {0}");

impl Internal for Portuguese {
    fn def(&self) -> &'static Def {
        &PORTUGUESE
    }
}

impl Locale for Portuguese {
    fn ordinal_number(&self, n: i64) -> String {
        format!("{n}º")
    }
}

pub(crate) struct BrazilianPortuguese;

static BRAZILIAN: Def = portuguese_def(&["pt-br"], "faz {0}");

impl Internal for BrazilianPortuguese {
    fn def(&self) -> &'static Def {
        &BRAZILIAN
    }
}

impl Locale for BrazilianPortuguese {
    fn ordinal_number(&self, n: i64) -> String {
        format!("{n}º")
    }
}

#[cfg(test)]
mod tests {
    use crate::locale::{Locale, Timeframe};

    use super::*;

    #[test]
    fn french_describe() {
        assert_eq!(French.describe(Timeframe::Hours, 2, false), "dans 2 heures");
        assert_eq!(
            French.describe(Timeframe::Minutes, -5, false),
            "il y a 5 minutes",
        );
        assert_eq!(French.ordinal_number(1), "1er");
        assert_eq!(French.ordinal_number(2), "2e");
    }

    #[test]
    fn brazilian_past_differs() {
        assert_eq!(
            Portuguese.describe(Timeframe::Days, -3, false),
            "há 3 dias",
        );
        assert_eq!(
            BrazilianPortuguese.describe(Timeframe::Days, -3, false),
            "faz 3 dias",
        );
    }
}
