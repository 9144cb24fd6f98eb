/*!
Localization tables: month and day names, ordinals, meridians and the
plural-aware timeframes used by the humanizer.

Each supported language is a unit struct implementing [`Locale`]. The trait
has default implementations for nearly everything, driven by a static table
the locale supplies; languages only override the methods where their grammar
actually diverges (ordinal suffixes, plural cells, displayed-year remapping).

Locales are looked up by a normalized lowercase name:

```
use sundial::locale;

let en = locale::get("EN_US")?;
assert_eq!(en.month_name(12), "December");
let ru = locale::get("ru")?;
assert_eq!(ru.month_name(12), "декабря");
# Ok::<(), sundial::Error>(())
```
*/

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::Error;

mod asian;
mod en;
mod germanic;
mod romance;
mod semitic;
mod slavic;
mod turkic;
mod uralic;

/// A named unit bucket used by the humanizer.
///
/// Singular and plural buckets are distinct because many languages phrase
/// "an hour" and "5 hours" with entirely different words, not merely an
/// inflection.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Timeframe {
    /// The "no meaningful distance" bucket, e.g. "just now".
    Now,
    Second,
    Seconds,
    Minute,
    Minutes,
    Hour,
    Hours,
    Day,
    Days,
    Week,
    Weeks,
    Month,
    Months,
    Year,
    Years,
}

impl Timeframe {
    /// The plural bucket for the same unit. `Now` maps to itself.
    pub(crate) fn pluralized(self) -> Timeframe {
        match self {
            Timeframe::Second => Timeframe::Seconds,
            Timeframe::Minute => Timeframe::Minutes,
            Timeframe::Hour => Timeframe::Hours,
            Timeframe::Day => Timeframe::Days,
            Timeframe::Week => Timeframe::Weeks,
            Timeframe::Month => Timeframe::Months,
            Timeframe::Year => Timeframe::Years,
            other => other,
        }
    }
}

/// One timeframe's phrase, in whatever shape the language needs.
#[derive(Debug)]
pub(crate) enum Tf {
    /// A fixed phrase with no count, e.g. "just now" or "an hour".
    Fixed(&'static str),
    /// A single template with a `{0}` placeholder, e.g. "{0} hours".
    Template(&'static str),
    /// Multiple plural cells, selected by the locale's plural rule.
    /// Each cell is itself a template (a cell without `{0}` is used as-is).
    Plural(&'static [&'static str]),
    /// Two cells selected by the sign of the delta (Finnish, Estonian and
    /// Hungarian keep distinct subject/partitive forms for past vs. future).
    Signed { past: &'static str, future: &'static str },
    /// Sign selection first, then plural cells within each direction
    /// (Czech and Slovak decline differently before "před"/"za" and also
    /// by count).
    SignedPlural {
        past: &'static [&'static str],
        future: &'static [&'static str],
    },
}

impl Tf {
    /// Every concrete string this timeframe can render as. Used when
    /// building de-humanization patterns.
    pub(crate) fn forms(&'static self) -> Vec<&'static str> {
        match *self {
            Tf::Fixed(s) | Tf::Template(s) => vec![s],
            Tf::Plural(cells) => cells.to_vec(),
            Tf::Signed { past, future } => vec![past, future],
            Tf::SignedPlural { past, future } => {
                past.iter().chain(future.iter()).copied().collect()
            }
        }
    }
}

/// The full table of timeframes a locale must supply.
///
/// A struct rather than a map so that a missing key is a compile error.
#[derive(Debug)]
pub(crate) struct Timeframes {
    pub(crate) now: Tf,
    pub(crate) second: Tf,
    pub(crate) seconds: Tf,
    pub(crate) minute: Tf,
    pub(crate) minutes: Tf,
    pub(crate) hour: Tf,
    pub(crate) hours: Tf,
    pub(crate) day: Tf,
    pub(crate) days: Tf,
    pub(crate) week: Tf,
    pub(crate) weeks: Tf,
    pub(crate) month: Tf,
    pub(crate) months: Tf,
    pub(crate) year: Tf,
    pub(crate) years: Tf,
}

impl Timeframes {
    pub(crate) fn get(&self, tf: Timeframe) -> &Tf {
        match tf {
            Timeframe::Now => &self.now,
            Timeframe::Second => &self.second,
            Timeframe::Seconds => &self.seconds,
            Timeframe::Minute => &self.minute,
            Timeframe::Minutes => &self.minutes,
            Timeframe::Hour => &self.hour,
            Timeframe::Hours => &self.hours,
            Timeframe::Day => &self.day,
            Timeframe::Days => &self.days,
            Timeframe::Week => &self.week,
            Timeframe::Weeks => &self.weeks,
            Timeframe::Month => &self.month,
            Timeframe::Months => &self.months,
            Timeframe::Year => &self.year,
            Timeframe::Years => &self.years,
        }
    }
}

/// The four meridian spellings.
#[derive(Debug)]
pub(crate) struct Meridians {
    pub(crate) am: &'static str,
    pub(crate) pm: &'static str,
    pub(crate) am_upper: &'static str,
    pub(crate) pm_upper: &'static str,
}

/// The static table a locale supplies.
///
/// Month tables have length 13 and day tables length 8 with index 0 unused,
/// so month numbers 1-12 and ISO weekday numbers 1-7 (Monday first) index
/// directly.
#[derive(Debug)]
pub(crate) struct Def {
    pub(crate) names: &'static [&'static str],
    pub(crate) month_names: [&'static str; 13],
    pub(crate) month_abbreviations: [&'static str; 13],
    pub(crate) day_names: [&'static str; 8],
    pub(crate) day_abbreviations: [&'static str; 8],
    pub(crate) meridians: Meridians,
    /// Relative template for past deltas, with one `{0}` placeholder.
    pub(crate) past: &'static str,
    /// Relative template for future deltas, with one `{0}` placeholder.
    pub(crate) future: &'static str,
    /// The conjunction inserted before the final phrase when the humanizer
    /// joins several granularities. Empty when the language just runs the
    /// phrases together.
    pub(crate) and_word: &'static str,
    /// A regex (no capture groups) matching an ordinal day-of-month as this
    /// locale writes one, e.g. `\d{1,2}(?:st|nd|rd|th)` for English.
    pub(crate) ordinal_day_pattern: &'static str,
    pub(crate) timeframes: Timeframes,
}

pub(crate) mod sealed {
    use super::Def;

    /// The crate-internal half of `Locale`: the data hook and the plural
    /// rule. Implementations live in this crate only.
    pub trait Internal {
        fn def(&self) -> &'static Def;

        /// Maps an absolute count to a plural cell index for
        /// [`super::Tf::Plural`] tables. The default is the Germanic
        /// one/other split.
        fn plural_index(&self, n: u64) -> usize {
            usize::from(n != 1)
        }
    }
}

/// A language's tables and phrase rules.
///
/// This trait is sealed: the set of locales is fixed by the crate. Use
/// [`get`] to look one up by name.
pub trait Locale: sealed::Internal + Send + Sync {
    /// The names this locale registers under, normalized lowercase.
    fn names(&self) -> &'static [&'static str] {
        self.def().names
    }

    /// The full name of the given month (1-12).
    ///
    /// # Panics
    ///
    /// When `month` is outside `1..=12`. Callers inside the crate validate
    /// month numbers before display.
    fn month_name(&self, month: i8) -> &'static str {
        self.def().month_names[usize::from(month as u8)]
    }

    /// The abbreviated name of the given month (1-12).
    fn month_abbreviation(&self, month: i8) -> &'static str {
        self.def().month_abbreviations[usize::from(month as u8)]
    }

    /// The full name of the given ISO weekday (1 = Monday .. 7 = Sunday).
    fn day_name(&self, weekday: i8) -> &'static str {
        self.def().day_names[usize::from(weekday as u8)]
    }

    /// The abbreviated name of the given ISO weekday.
    fn day_abbreviation(&self, weekday: i8) -> &'static str {
        self.def().day_abbreviations[usize::from(weekday as u8)]
    }

    /// The meridian for the given hour of day (0-23), in the requested case.
    fn meridian(&self, hour: i8, upper: bool) -> &'static str {
        let m = &self.def().meridians;
        match (hour < 12, upper) {
            (true, false) => m.am,
            (false, false) => m.pm,
            (true, true) => m.am_upper,
            (false, true) => m.pm_upper,
        }
    }

    /// A regex fragment (without capture groups) matching an ordinal
    /// day-of-month as this locale writes one.
    fn ordinal_day_pattern(&self) -> &'static str {
        self.def().ordinal_day_pattern
    }

    /// Renders `n` as an ordinal number, e.g. `1st` in English.
    ///
    /// The default renders the bare number, which is what most languages
    /// with no written ordinal marker use.
    fn ordinal_number(&self, n: i64) -> String {
        n.to_string()
    }

    /// The year as displayed by the `YYYY` token. Thai remaps this to the
    /// Buddhist calendar year.
    fn year_full(&self, year: i16) -> String {
        year.to_string()
    }

    /// The two-digit year as displayed by the `YY` token.
    fn year_abbreviation(&self, year: i16) -> String {
        format!("{:02}", year.rem_euclid(100))
    }

    /// Renders one timeframe with a signed count. The count's sign selects
    /// the cell in sign-aware tables and is otherwise ignored for display.
    fn timeframe(&self, tf: Timeframe, n: i64) -> String {
        let template = match *self.def().timeframes.get(tf) {
            Tf::Fixed(s) => s,
            Tf::Template(s) => s,
            Tf::Plural(cells) => {
                cells[self.plural_index(n.unsigned_abs()).min(cells.len() - 1)]
            }
            Tf::Signed { past, future } => {
                if n < 0 {
                    past
                } else {
                    future
                }
            }
            Tf::SignedPlural { past, future } => {
                let cells = if n < 0 { past } else { future };
                cells[self.plural_index(n.unsigned_abs()).min(cells.len() - 1)]
            }
        };
        template.replace("{0}", itoa(n.unsigned_abs()).as_str())
    }

    /// Wraps a magnitude phrase in the locale's past or future template,
    /// selected by the sign of `n`. A zero delta returns the phrase as-is.
    fn format_relative(&self, phrase: &str, n: i64) -> String {
        let def = self.def();
        match n.signum() {
            0 => phrase.to_string(),
            1 => def.future.replace("{0}", phrase),
            _ => def.past.replace("{0}", phrase),
        }
    }

    /// Produces a complete relative phrase for one timeframe.
    fn describe(&self, tf: Timeframe, n: i64, only_distance: bool) -> String {
        let phrase = self.timeframe(tf, n);
        if only_distance || tf == Timeframe::Now {
            phrase
        } else {
            self.format_relative(&phrase, n)
        }
    }

    /// Produces a complete relative phrase for several timeframes, joined
    /// with the locale's conjunction: "an hour and 6 minutes".
    fn describe_multi(
        &self,
        parts: &[(Timeframe, i64)],
        only_distance: bool,
    ) -> String {
        let def = self.def();
        let mut phrases: Vec<String> =
            parts.iter().map(|&(tf, n)| self.timeframe(tf, n)).collect();
        if phrases.len() > 1 && !def.and_word.is_empty() {
            let last = phrases.len() - 1;
            phrases.insert(last, def.and_word.to_string());
        }
        let joined = phrases.join(" ");
        if only_distance {
            return joined;
        }
        let sign = parts.iter().map(|&(_, n)| n).sum::<i64>();
        self.format_relative(&joined, sign)
    }
}

impl core::fmt::Debug for dyn Locale {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Locale").field("names", &self.names()).finish()
    }
}

/// Renders a count. Split out so `timeframe` reads cleanly.
fn itoa(n: u64) -> String {
    n.to_string()
}

/// Every locale the crate ships. The registry is derived from this list.
static LOCALES: &[&'static dyn Locale] = &[
    &en::English,
    &romance::French,
    &romance::Spanish,
    &romance::Italian,
    &romance::Portuguese,
    &romance::BrazilianPortuguese,
    &germanic::German,
    &germanic::Dutch,
    &germanic::Swedish,
    &germanic::Danish,
    &germanic::Norwegian,
    &uralic::Finnish,
    &uralic::Estonian,
    &uralic::Hungarian,
    &slavic::Russian,
    &slavic::Ukrainian,
    &slavic::Polish,
    &slavic::Czech,
    &slavic::Slovak,
    &slavic::Bulgarian,
    &slavic::Macedonian,
    &semitic::Arabic,
    &semitic::Hebrew,
    &asian::Japanese,
    &asian::ChineseSimplified,
    &asian::Korean,
    &asian::Thai,
    &turkic::Turkish,
];

static REGISTRY: Lazy<HashMap<&'static str, &'static dyn Locale>> =
    Lazy::new(|| {
        let mut map = HashMap::new();
        for &locale in LOCALES {
            for &name in locale.names() {
                let previous = map.insert(name, locale);
                debug_assert!(
                    previous.is_none(),
                    "duplicate locale name {name:?}",
                );
            }
        }
        map
    });

/// Looks up a locale by name.
///
/// Names are normalized before lookup: ASCII lowercased, with `_` mapped to
/// `-`. So `EN_US`, `en_US` and `en-us` all find American English.
///
/// # Errors
///
/// This returns an error when no locale registers under the name.
pub fn get(name: &str) -> Result<&'static dyn Locale, Error> {
    let normalized: String = name
        .chars()
        .map(|c| if c == '_' { '-' } else { c.to_ascii_lowercase() })
        .collect();
    REGISTRY.get(normalized.as_str()).copied().ok_or_else(|| {
        Error::usage(format_args!("unsupported locale {name:?}"))
    })
}

/// The default locale: American English.
pub(crate) fn default() -> &'static dyn Locale {
    &en::English
}

/// Finds the month number for a name or abbreviation, case-insensitively.
pub(crate) fn month_from_name(
    locale: &dyn Locale,
    text: &str,
) -> Option<i8> {
    for month in 1..=12i8 {
        if eq_ignore_case(locale.month_name(month), text)
            || eq_ignore_case(locale.month_abbreviation(month), text)
        {
            return Some(month);
        }
    }
    None
}

/// Finds the ISO weekday number for a name or abbreviation.
pub(crate) fn weekday_from_name(
    locale: &dyn Locale,
    text: &str,
) -> Option<i8> {
    for weekday in 1..=7i8 {
        if eq_ignore_case(locale.day_name(weekday), text)
            || eq_ignore_case(locale.day_abbreviation(weekday), text)
        {
            return Some(weekday);
        }
    }
    None
}

/// Case-insensitive comparison that is Unicode aware enough for name
/// tables: simple one-to-one lowercasing, which holds for every name we
/// ship.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().flat_map(char::to_lowercase).eq(b.chars().flat_map(char::to_lowercase))
}

/// Builds a regex alternation matching any of the given phrases,
/// case-insensitively, longest first so prefixes don't shadow.
pub(crate) fn alternation(phrases: impl IntoIterator<Item = &'static str>) -> String {
    let mut phrases: Vec<&str> = phrases.into_iter().collect();
    phrases.sort_by_key(|p| core::cmp::Reverse(p.len()));
    let escaped: Vec<String> =
        phrases.into_iter().map(regex::escape).collect();
    format!("(?i:{})", escaped.join("|"))
}

/// The alternation for full month names (the `MMMM` token).
pub(crate) fn month_name_pattern(locale: &dyn Locale) -> String {
    alternation((1..=12).map(|m| locale.month_name(m)))
}

/// The alternation for abbreviated month names (the `MMM` token).
pub(crate) fn month_abbreviation_pattern(locale: &dyn Locale) -> String {
    alternation((1..=12).map(|m| locale.month_abbreviation(m)))
}

/// The alternation for full day names (the `dddd` token).
pub(crate) fn day_name_pattern(locale: &dyn Locale) -> String {
    alternation((1..=7).map(|d| locale.day_name(d)))
}

/// The alternation for abbreviated day names (the `ddd` token).
pub(crate) fn day_abbreviation_pattern(locale: &dyn Locale) -> String {
    alternation((1..=7).map(|d| locale.day_abbreviation(d)))
}

/// The alternation for meridians (the `a` and `A` tokens).
pub(crate) fn meridian_pattern(locale: &dyn Locale) -> String {
    let def_meridians = [
        locale.meridian(0, false),
        locale.meridian(12, false),
        locale.meridian(0, true),
        locale.meridian(12, true),
    ];
    let mut unique: Vec<&'static str> = Vec::new();
    for m in def_meridians {
        if !unique.iter().any(|u| eq_ignore_case(u, m)) {
            unique.push(m);
        }
    }
    alternation(unique)
}

/// True when `text` names an ante-meridian value in this locale.
pub(crate) fn is_am(locale: &dyn Locale, text: &str) -> bool {
    eq_ignore_case(locale.meridian(0, false), text)
        || eq_ignore_case(locale.meridian(0, true), text)
}

/// All concrete phrase forms for a timeframe, for de-humanization.
pub(crate) fn timeframe_forms(
    locale: &'static dyn Locale,
    tf: Timeframe,
) -> Vec<&'static str> {
    locale.def().timeframes.get(tf).forms()
}

/// The `(past, future)` relative templates, each with one `{0}`
/// placeholder.
pub(crate) fn relative_templates(
    locale: &'static dyn Locale,
) -> (&'static str, &'static str) {
    let def = locale.def();
    (def.past, def.future)
}

/// The bare relative markers, e.g. `("ago", "in")` for English, derived
/// from the locale's templates by removing the placeholder.
#[cfg(test)]
pub(crate) fn relative_markers(
    locale: &'static dyn Locale,
) -> (String, String) {
    let def = locale.def();
    let strip = |template: &str| template.replace("{0}", " ").trim().to_string();
    (strip(def.past), strip(def.future))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_normalizes_names() {
        assert_eq!(get("EN_US").unwrap().month_name(1), "January");
        assert_eq!(get("en-us").unwrap().month_name(1), "January");
        assert!(get("tlh").unwrap_err().is_usage());
    }

    #[test]
    fn every_locale_table_is_complete() {
        for &locale in LOCALES {
            for m in 1..=12 {
                assert!(!locale.month_name(m).is_empty());
                assert!(!locale.month_abbreviation(m).is_empty());
            }
            for d in 1..=7 {
                assert!(!locale.day_name(d).is_empty());
                assert!(!locale.day_abbreviation(d).is_empty());
            }
            assert!(!locale.names().is_empty());
        }
    }

    #[test]
    fn name_lookup_is_case_insensitive() {
        let en = get("en").unwrap();
        assert_eq!(month_from_name(en, "january"), Some(1));
        assert_eq!(month_from_name(en, "DEC"), Some(12));
        assert_eq!(weekday_from_name(en, "thursday"), Some(4));
        assert_eq!(month_from_name(en, "Frimaire"), None);
        let ru = get("ru").unwrap();
        assert_eq!(month_from_name(ru, "ЯНВАРЯ"), Some(1));
    }

    #[test]
    fn relative_marker_extraction() {
        let (past, future) = relative_markers(get("en").unwrap());
        assert_eq!(past, "ago");
        assert_eq!(future, "in");
    }
}
