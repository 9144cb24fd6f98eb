use sundial::{
    get, get_with, GetOptions, Humanize, Input, Instant, TimeDelta, ToShift,
    Unit, Zone, FORMAT_COOKIE, FORMAT_RFC2822, FORMAT_RFC3339,
};

fn utc_date(y: i16, m: i8, d: i8) -> Instant {
    Instant::from_date(y, m, d, Zone::UTC).unwrap()
}

#[test]
fn iso_parse_with_subseconds_and_zulu() {
    let t = Instant::from_iso("2013-02-03T04:05:06.78912Z").unwrap();
    assert_eq!(t.to_string(), "2013-02-03T04:05:06.789120+00:00");
    assert_eq!(t.microsecond(), 789120);
}

#[test]
fn iso_parse_basic_format() {
    assert_eq!(
        Instant::from_iso("20130203T040506").unwrap(),
        Instant::from_iso("2013-02-03T04:05:06").unwrap(),
    );
    assert_eq!(
        Instant::from_iso("20130203T0405").unwrap(),
        Instant::from_iso("2013-02-03T04:05").unwrap(),
    );
}

#[test]
fn iso_parse_offsets() {
    let t = Instant::from_iso("2013-05-11T21:23:58+07:00").unwrap();
    assert_eq!(t.utc_offset_seconds(), 7 * 3600);
    assert_eq!(t.to(Zone::UTC).hour(), 14);
    let no_colon = Instant::from_iso("2013-05-11T21:23:58+0700").unwrap();
    assert_eq!(t, no_colon);
}

#[test]
fn cookie_format_in_new_york() {
    let zone = Zone::parse("America/New_York").unwrap();
    let t = Instant::from_civil(1975, 12, 25, 14, 15, 16, 0, zone).unwrap();
    assert_eq!(
        t.format(FORMAT_COOKIE).unwrap(),
        "Thursday, 25-Dec-1975 14:15:16 EST",
    );
    // And in summer the abbreviation follows the zone.
    let summer = Instant::from_civil(1975, 7, 4, 12, 0, 0, 0, zone).unwrap();
    assert!(t.format("ZZZ").unwrap() == "EST");
    assert!(summer.format("ZZZ").unwrap() == "EDT");
}

#[test]
fn ordinal_month_name_parse() {
    let t = Instant::from_format("January 1st, 2013", "MMMM Do, YYYY")
        .unwrap();
    assert_eq!(t.to_string(), "2013-01-01T00:00:00.000000+00:00");
    assert_eq!(t.zone(), Zone::UTC);
}

#[test]
fn humanize_ten_seconds() {
    let t = utc_date(2013, 1, 1);
    let later = t.shift(10.seconds()).unwrap();
    let phrase = later
        .humanize_with(Humanize::new().relative_to(&t))
        .unwrap();
    assert_eq!(phrase, "in 10 seconds");
    let phrase = t
        .humanize_with(Humanize::new().relative_to(&later))
        .unwrap();
    assert_eq!(phrase, "10 seconds ago");
}

#[test]
fn humanize_granularity_list() {
    let t = utc_date(2013, 1, 1);
    let later = t.shift(4000.seconds()).unwrap();
    let phrase = later
        .humanize_with(
            Humanize::new()
                .relative_to(&t)
                .granularities(&[Unit::Hour, Unit::Minute]),
        )
        .unwrap();
    assert_eq!(phrase, "in an hour and 6 minutes");
}

#[test]
fn humanize_forced_granularity() {
    let t = utc_date(2013, 1, 1);
    let later = t.shift(90.minutes()).unwrap();
    let phrase = later
        .humanize_with(
            Humanize::new().relative_to(&t).granularity(Unit::Minute),
        )
        .unwrap();
    assert_eq!(phrase, "in 90 minutes");
    let distance = later
        .humanize_with(
            Humanize::new()
                .relative_to(&t)
                .granularity(Unit::Minute)
                .only_distance(true),
        )
        .unwrap();
    assert_eq!(distance, "90 minutes");
}

#[test]
fn iso_week_date() {
    let t = Instant::from_iso("2011-W05-4").unwrap();
    assert_eq!(t.to_string(), "2011-02-03T00:00:00.000000+00:00");
    assert_eq!(t.week_date(), (2011, 5, 4));
}

#[test]
fn epoch_millisecond_auto_rescale() {
    let t = get(Input::from(1591328104308i64)).unwrap();
    assert_eq!(t.to_string(), "2020-06-05T02:15:04.308000+00:00");
}

// Property 1: parse(format(i, F), F) == i to the precision of F.
#[test]
fn format_parse_round_trip() {
    let t = Instant::from_civil(2020, 6, 5, 2, 15, 4, 0, Zone::UTC).unwrap();
    for format in [FORMAT_RFC3339, FORMAT_RFC2822, FORMAT_COOKIE] {
        let rendered = t.format(format).unwrap();
        let parsed = Instant::from_format(&rendered, format).unwrap();
        assert_eq!(parsed, t, "{format} via {rendered}");
    }
}

// Property 2: i.to(Z).to(UTC) == i.to(UTC) for every zone Z.
#[test]
fn zone_conversion_round_trip() {
    let t = Instant::from_civil(2013, 5, 5, 12, 30, 45, 1, Zone::UTC)
        .unwrap();
    for name in [
        "America/New_York",
        "Asia/Tokyo",
        "Australia/Lord_Howe",
        "Pacific/Kiritimati",
        "local",
        "+05:30",
    ] {
        let zone = Zone::parse(name).unwrap();
        assert_eq!(t.to(zone).to(Zone::UTC), t.to(Zone::UTC), "{name}");
    }
}

// Property 4/5: shifts compose, and month arithmetic clamps.
#[test]
fn shift_compose_and_clamp() {
    let t = utc_date(2013, 5, 5);
    for n in [1i64, 7, 30, 365, 1000] {
        let there = t.shift(n.days()).unwrap();
        assert_eq!(there.shift((-n).days()).unwrap(), t);
    }
    assert_eq!(
        utc_date(2015, 1, 31).shift(1.month()).unwrap(),
        utc_date(2015, 2, 28),
    );
    assert_eq!(
        utc_date(2016, 1, 31).shift(1.month()).unwrap(),
        utc_date(2016, 2, 29),
    );
}

// Property 6: dehumanize(humanize(i.shift(u = n))) == i.shift(u = n),
// in both directions of time.
#[test]
fn humanize_dehumanize_parity() {
    let anchor = utc_date(2013, 1, 1);
    for n in [1i64, -1] {
        let cases: &[sundial::Shift] = &[
            (30 * n).seconds(),
            n.minutes(),
            (5 * n).minutes(),
            n.hours(),
            (2 * n).hours(),
            n.days(),
            (3 * n).days(),
            n.months(),
            (5 * n).months(),
            n.years(),
            (3 * n).years(),
        ];
        for &shift in cases {
            let target = anchor.shift(shift).unwrap();
            let phrase = target
                .humanize_with(Humanize::new().relative_to(&anchor))
                .unwrap();
            let back = anchor.dehumanize(&phrase).unwrap();
            assert_eq!(back, target, "phrase {phrase:?}");
        }
    }
}

#[test]
fn dehumanize_granularity_phrase() {
    let t = utc_date(2013, 1, 1);
    let then = t.dehumanize("in an hour and 6 minutes").unwrap();
    assert_eq!(then, t.shift(1.hour().minutes(6)).unwrap());
    let before = t.dehumanize("2 hours 5 minutes ago").unwrap();
    assert_eq!(before, t.shift((-2).hours().minutes(-5)).unwrap());
}

#[test]
fn dehumanize_now_and_failures() {
    let t = utc_date(2013, 1, 1);
    assert_eq!(t.dehumanize("just now").unwrap(), t);
    assert!(t.dehumanize("gibberish").unwrap_err().is_dehumanize());
    // Units without a relative marker are ambiguous.
    assert!(t.dehumanize("2 hours").unwrap_err().is_dehumanize());
}

// Property 7: the parser must sit on whitespace-ish boundaries.
#[test]
fn parser_boundary_rule() {
    assert!(Instant::from_format("blah1998-09-12", "YYYY-MM-DD")
        .unwrap_err()
        .is_parse_match());
    let t = Instant::from_format("blah 1998-09-12 blah", "YYYY-MM-DD")
        .unwrap();
    assert_eq!(t, utc_date(1998, 9, 12));
    let t = Instant::from_format("on (1998-09-12).", "YYYY-MM-DD").unwrap();
    assert_eq!(t, utc_date(1998, 9, 12));
}

#[test]
fn twelve_am_is_midnight() {
    // Pinned behavior: "12 am" is hour 0 under both H and h.
    let t = Instant::from_format("12 am", "h A").unwrap();
    assert_eq!(t.hour(), 0);
    let t = Instant::from_format("12 am", "H A").unwrap();
    assert_eq!(t.hour(), 0);
    let t = Instant::from_format("12 pm", "h A").unwrap();
    assert_eq!(t.hour(), 12);
    let t = Instant::from_format("3 pm", "h A").unwrap();
    assert_eq!(t.hour(), 15);
}

#[test]
fn hour_24_rolls_over() {
    let t = Instant::from_format("2013-05-05 24:00:00", "YYYY-MM-DD HH:mm:ss")
        .unwrap();
    assert_eq!(t, utc_date(2013, 5, 6));
    assert!(Instant::from_format(
        "2013-05-05 24:00:01",
        "YYYY-MM-DD HH:mm:ss",
    )
    .unwrap_err()
    .is_field_value());
}

#[test]
fn contradictory_fields_are_rejected() {
    // Day-of-year with an explicit month.
    assert!(Instant::from_format("2013-02 034", "YYYY-MM DDDD")
        .unwrap_err()
        .is_field_value());
    // Weekday that disagrees with the date.
    assert!(Instant::from_format(
        "Tuesday 2013-05-05",
        "dddd YYYY-MM-DD",
    )
    .unwrap_err()
    .is_field_value());
    // Day of year too large.
    assert!(Instant::from_format("2013-400", "YYYY-DDD")
        .unwrap_err()
        .is_field_value());
}

#[test]
fn multi_format_cites_every_format() {
    let err = Instant::from_formats("nope", &["YYYY-MM-DD", "MM/DD/YYYY"])
        .unwrap_err();
    assert!(err.is_parse_match());
    let message = err.to_string();
    assert!(message.contains("YYYY-MM-DD"), "{message}");
    assert!(message.contains("MM/DD/YYYY"), "{message}");
}

#[test]
fn localized_formatting() {
    let t = utc_date(2013, 1, 1);
    assert_eq!(
        t.format_localized("D MMMM YYYY", "fr").unwrap(),
        "1 janvier 2013",
    );
    assert_eq!(
        t.format_localized("D MMMM YYYY", "ru").unwrap(),
        "1 января 2013",
    );
    // Thai remaps the displayed year to the Buddhist calendar.
    assert_eq!(t.format_localized("YYYY", "th").unwrap(), "2556");
    assert_eq!(t.format_localized("Do", "en").unwrap(), "1st");
}

#[test]
fn localized_parsing() {
    let t = Instant::from_format_localized(
        "1 janvier 2013",
        "D MMMM YYYY",
        "fr",
    )
    .unwrap();
    assert_eq!(t, utc_date(2013, 1, 1));
    let t = Instant::from_format_localized(
        "5 декабря 2020",
        "D MMMM YYYY",
        "ru",
    )
    .unwrap();
    assert_eq!(t, utc_date(2020, 12, 5));
}

#[test]
fn localized_humanizing() {
    let t = utc_date(2013, 1, 1);
    let later = t.shift(5.hours()).unwrap();
    let ru = later
        .humanize_with(Humanize::new().relative_to(&t).locale("ru"))
        .unwrap();
    assert_eq!(ru, "через 5 часов");
    let fi_past = t
        .humanize_with(Humanize::new().relative_to(&later).locale("fi"))
        .unwrap();
    assert_eq!(fi_past, "5 tuntia sitten");

    let back = t.dehumanize_localized(&ru, "ru").unwrap();
    assert_eq!(back, later);
}

#[test]
fn get_with_default_zone() {
    let zone = Zone::parse("US/Pacific").unwrap();
    let opts = GetOptions { tzinfo: Some(zone), ..GetOptions::default() };
    let t = get_with(Input::from("2013-05-05T03:30:00"), opts).unwrap();
    assert_eq!(t.zone().iana_name(), Some("US/Pacific"));
    assert_eq!(t.utc_offset_seconds(), -7 * 3600);
    // An explicit offset in the input wins over the default.
    let t = get_with(Input::from("2013-05-05T03:30:00+02:00"), opts).unwrap();
    assert_eq!(t.utc_offset_seconds(), 2 * 3600);
}

#[test]
fn get_normalize_whitespace() {
    let opts = GetOptions {
        normalize_whitespace: true,
        ..GetOptions::default()
    };
    let t = get_with(Input::from("2013-05-05   12:30:45"), opts).unwrap();
    assert_eq!(
        t,
        Instant::from_civil(2013, 5, 5, 12, 30, 45, 0, Zone::UTC).unwrap(),
    );
}

#[test]
fn duration_arithmetic() {
    let a = utc_date(2013, 5, 5);
    let b = a + TimeDelta::hours(30);
    assert_eq!(b - a, TimeDelta::hours(30));
    assert_eq!(b.day(), 6);
    assert_eq!(b.hour(), 6);
}

#[test]
fn comparisons_are_total_on_the_absolute_instant() {
    let a = utc_date(2013, 5, 5);
    let b = a.to(Zone::parse("Asia/Tokyo").unwrap());
    let c = a.shift(1.microsecond()).unwrap();
    assert_eq!(a, b);
    assert!(a < c);
    assert!(c > b);

    let mut sorted = vec![c, a];
    sorted.sort();
    assert_eq!(sorted, vec![a, c]);
}

#[test]
fn ambiguous_wall_times_order_by_fold() {
    let zone = Zone::parse("America/New_York").unwrap();
    let early = Instant::from_civil(2024, 11, 3, 1, 30, 0, 0, zone).unwrap();
    let late = early.with().fold(1).build().unwrap();
    assert!(early < late);
    assert_eq!(early.zone_name(), "EDT");
    assert_eq!(late.zone_name(), "EST");
}
