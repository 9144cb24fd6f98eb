use crate::locale::{sealed::Internal, Def, Locale, Meridians, Tf, Timeframes};

pub(crate) struct Turkish;

static TURKISH: Def = Def {
    names: &["tr", "tr-tr", "turkish"],
    month_names: [
        "", "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz",
        "Ağustos", "Eylül", "Ekim", "Kasım", "Aralık",
    ],
    month_abbreviations: [
        "", "Oca", "Şub", "Mar", "Nis", "May", "Haz", "Tem", "Ağu", "Eyl",
        "Eki", "Kas", "Ara",
    ],
    day_names: [
        "", "Pazartesi", "Salı", "Çarşamba", "Perşembe", "Cuma",
        "Cumartesi", "Pazar",
    ],
    day_abbreviations: ["", "Pzt", "Sal", "Çar", "Per", "Cum", "Cmt", "Paz"],
    meridians: Meridians { am: "öö", pm: "ös", am_upper: "ÖÖ", pm_upper: "ÖS" },
    past: "{0} önce",
    future: "{0} sonra",
    and_word: "ve",
    ordinal_day_pattern: r"\d{1,2}\.?",
    timeframes: Timeframes {
        now: Tf::Fixed("şimdi"),
        second: Tf::Fixed("bir saniye"),
        seconds: Tf::Template("{0} saniye"),
        minute: Tf::Fixed("bir dakika"),
        minutes: Tf::Template("{0} dakika"),
        hour: Tf::Fixed("bir saat"),
        hours: Tf::Template("{0} saat"),
        day: Tf::Fixed("bir gün"),
        days: Tf::Template("{0} gün"),
        week: Tf::Fixed("bir hafta"),
        weeks: Tf::Template("{0} hafta"),
        month: Tf::Fixed("bir ay"),
        months: Tf::Template("{0} ay"),
        year: Tf::Fixed("bir yıl"),
        years: Tf::Template("{0} yıl"),
    },
};

impl Internal for Turkish {
    fn def(&self) -> &'static Def {
        &TURKISH
    }
}

impl Locale for Turkish {
    fn ordinal_number(&self, n: i64) -> String {
        format!("{n}.")
    }
}

#[cfg(test)]
mod tests {
    use crate::locale::{Locale, Timeframe};

    use super::Turkish;

    #[test]
    fn relative_templates_trail() {
        assert_eq!(Turkish.describe(Timeframe::Hours, 2, false), "2 saat sonra");
        assert_eq!(Turkish.describe(Timeframe::Hours, -2, false), "2 saat önce");
    }
}
