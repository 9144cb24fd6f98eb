use crate::locale::{sealed::Internal, Def, Locale, Meridians, Tf, Timeframes};

/// Arabic and Hebrew share a plural shape: a dedicated dual for exactly
/// two, a "paucal" cell for three through ten, and a general cell beyond.
fn dual_paucal_plural(n: u64) -> usize {
    if n == 2 {
        0
    } else if (3..=10).contains(&n) {
        1
    } else {
        2
    }
}

pub(crate) struct Arabic;

static ARABIC: Def = Def {
    names: &["ar", "ar-sa", "ar-eg", "arabic"],
    month_names: [
        "", "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو", "يوليو",
        "أغسطس", "سبتمبر", "أكتوبر", "نوفمبر", "ديسمبر",
    ],
    month_abbreviations: [
        "", "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو", "يوليو",
        "أغسطس", "سبتمبر", "أكتوبر", "نوفمبر", "ديسمبر",
    ],
    day_names: [
        "", "الاثنين", "الثلاثاء", "الأربعاء", "الخميس", "الجمعة", "السبت",
        "الأحد",
    ],
    day_abbreviations: [
        "", "اثنين", "ثلاثاء", "أربعاء", "خميس", "جمعة", "سبت", "أحد",
    ],
    meridians: Meridians { am: "ص", pm: "م", am_upper: "ص", pm_upper: "م" },
    past: "منذ {0}",
    future: "خلال {0}",
    and_word: "و",
    ordinal_day_pattern: r"\d{1,2}",
    timeframes: Timeframes {
        now: Tf::Fixed("الآن"),
        second: Tf::Fixed("ثانية"),
        seconds: Tf::Plural(&["ثانيتين", "{0} ثوان", "{0} ثانية"]),
        minute: Tf::Fixed("دقيقة"),
        minutes: Tf::Plural(&["دقيقتين", "{0} دقائق", "{0} دقيقة"]),
        hour: Tf::Fixed("ساعة"),
        hours: Tf::Plural(&["ساعتين", "{0} ساعات", "{0} ساعة"]),
        day: Tf::Fixed("يوم"),
        days: Tf::Plural(&["يومين", "{0} أيام", "{0} يوم"]),
        week: Tf::Fixed("أسبوع"),
        weeks: Tf::Plural(&["أسبوعين", "{0} أسابيع", "{0} أسبوع"]),
        month: Tf::Fixed("شهر"),
        months: Tf::Plural(&["شهرين", "{0} أشهر", "{0} شهر"]),
        year: Tf::Fixed("سنة"),
        years: Tf::Plural(&["سنتين", "{0} سنوات", "{0} سنة"]),
    },
};

impl Internal for Arabic {
    fn def(&self) -> &'static Def {
        &ARABIC
    }

    fn plural_index(&self, n: u64) -> usize {
        dual_paucal_plural(n)
    }
}

impl Locale for Arabic {}

pub(crate) struct Hebrew;

static HEBREW: Def = Def {
    names: &["he", "he-il", "hebrew"],
    month_names: [
        "", "ינואר", "פברואר", "מרץ", "אפריל", "מאי", "יוני", "יולי",
        "אוגוסט", "ספטמבר", "אוקטובר", "נובמבר", "דצמבר",
    ],
    month_abbreviations: [
        "", "ינו", "פבר", "מרץ", "אפר", "מאי", "יוני", "יולי", "אוג",
        "ספט", "אוק", "נוב", "דצמ",
    ],
    day_names: [
        "", "שני", "שלישי", "רביעי", "חמישי", "שישי", "שבת", "ראשון",
    ],
    day_abbreviations: ["", "ב׳", "ג׳", "ד׳", "ה׳", "ו׳", "ש׳", "א׳"],
    meridians: Meridians {
        am: "לפנ״צ",
        pm: "אחר״צ",
        am_upper: "לפנ״צ",
        pm_upper: "אחר״צ",
    },
    past: "לפני {0}",
    future: "בעוד {0}",
    and_word: "ו",
    ordinal_day_pattern: r"\d{1,2}",
    timeframes: Timeframes {
        now: Tf::Fixed("הרגע"),
        second: Tf::Fixed("שנייה"),
        seconds: Tf::Template("{0} שניות"),
        minute: Tf::Fixed("דקה"),
        minutes: Tf::Template("{0} דקות"),
        hour: Tf::Fixed("שעה"),
        hours: Tf::Plural(&["שעתיים", "{0} שעות", "{0} שעות"]),
        day: Tf::Fixed("יום"),
        days: Tf::Plural(&["יומיים", "{0} ימים", "{0} ימים"]),
        week: Tf::Fixed("שבוע"),
        weeks: Tf::Plural(&["שבועיים", "{0} שבועות", "{0} שבועות"]),
        month: Tf::Fixed("חודש"),
        months: Tf::Plural(&["חודשיים", "{0} חודשים", "{0} חודשים"]),
        year: Tf::Fixed("שנה"),
        years: Tf::Plural(&["שנתיים", "{0} שנים", "{0} שנים"]),
    },
};

impl Internal for Hebrew {
    fn def(&self) -> &'static Def {
        &HEBREW
    }

    fn plural_index(&self, n: u64) -> usize {
        dual_paucal_plural(n)
    }
}

impl Locale for Hebrew {}

#[cfg(test)]
mod tests {
    use crate::locale::{Locale, Timeframe};

    use super::*;

    #[test]
    fn arabic_dual() {
        assert_eq!(
            Arabic.describe(Timeframe::Hours, 2, false),
            "خلال ساعتين",
        );
        assert_eq!(
            Arabic.describe(Timeframe::Hours, 5, false),
            "خلال 5 ساعات",
        );
        assert_eq!(
            Arabic.describe(Timeframe::Hours, 11, false),
            "خلال 11 ساعة",
        );
    }

    #[test]
    fn hebrew_dual() {
        assert_eq!(
            Hebrew.describe(Timeframe::Hours, -2, false),
            "לפני שעתיים",
        );
        assert_eq!(
            Hebrew.describe(Timeframe::Days, -2, false),
            "לפני יומיים",
        );
    }
}
