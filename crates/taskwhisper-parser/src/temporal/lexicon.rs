//! Word tables for the date/time grammar.
//!
//! Each [`Lexicon`] is pure data; [`super::LexiconGrammar`] compiles it into
//! regexes. Entries are lowercase, and multi-word entries match any run of
//! whitespace between their words.

use chrono::Weekday;

use super::Unit;

/// How an all-numeric `a/b` date is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    /// `10/20` is October 20th.
    MonthFirst,
    /// `20/10` is October 20th.
    DayFirst,
}

#[derive(Debug)]
pub struct Lexicon {
    pub locale: &'static str,
    /// "tomorrow" and friends, with their day offset.
    pub relative_days: &'static [(&'static str, i64)],
    pub weekdays: &'static [(&'static str, Weekday)],
    pub months: &'static [(&'static str, u32)],
    /// Words before a weekday or period meaning "the next one".
    pub next_prefixes: &'static [&'static str],
    /// Same, placed after the weekday or period ("viernes próximo").
    pub next_suffixes: &'static [&'static str],
    /// Words before a weekday that leave it as the nearest one.
    pub this_prefixes: &'static [&'static str],
    /// "in" of "in 3 days".
    pub offset_prefixes: &'static [&'static str],
    pub number_words: &'static [(&'static str, i64)],
    pub units: &'static [(&'static str, Unit)],
    /// Nouns accepted by "next <period>".
    pub periods: &'static [(&'static str, Unit)],
    pub time_prefixes: &'static [&'static str],
    pub am_markers: &'static [&'static str],
    pub pm_markers: &'static [&'static str],
    pub clock_suffixes: &'static [&'static str],
    /// Named times of day as (word, hour, minute).
    pub time_words: &'static [(&'static str, u32, u32)],
    /// Filler between day and month ("20 de octubre").
    pub day_month_connectors: &'static [&'static str],
    pub ordinal_suffixes: &'static [&'static str],
    /// Words allowed between a date and a time that belong together.
    pub joiners: &'static [&'static str],
    pub numeric_order: DateOrder,
}

static LEXICONS: &[&Lexicon] = &[&ENGLISH, &SPANISH, &FRENCH, &GERMAN];

/// Lexicon for a primary language subtag, if one exists.
pub fn for_locale(code: &str) -> Option<&'static Lexicon> {
    LEXICONS.iter().copied().find(|lex| lex.locale == code)
}

// =============================================================================
// English
// =============================================================================

pub static ENGLISH: Lexicon = Lexicon {
    locale: "en",
    relative_days: &[
        ("day after tomorrow", 2),
        ("tomorrow", 1),
        ("today", 0),
        ("yesterday", -1),
    ],
    weekdays: &[
        ("monday", Weekday::Mon),
        ("tuesday", Weekday::Tue),
        ("wednesday", Weekday::Wed),
        ("thursday", Weekday::Thu),
        ("friday", Weekday::Fri),
        ("saturday", Weekday::Sat),
        ("sunday", Weekday::Sun),
    ],
    months: &[
        ("january", 1),
        ("jan", 1),
        ("february", 2),
        ("feb", 2),
        ("march", 3),
        ("mar", 3),
        ("april", 4),
        ("apr", 4),
        ("may", 5),
        ("june", 6),
        ("jun", 6),
        ("july", 7),
        ("jul", 7),
        ("august", 8),
        ("aug", 8),
        ("september", 9),
        ("sept", 9),
        ("sep", 9),
        ("october", 10),
        ("oct", 10),
        ("november", 11),
        ("nov", 11),
        ("december", 12),
        ("dec", 12),
    ],
    next_prefixes: &["next"],
    next_suffixes: &[],
    this_prefixes: &["this coming", "this", "coming", "on"],
    offset_prefixes: &["in", "within"],
    number_words: &[
        ("a", 1),
        ("an", 1),
        ("one", 1),
        ("two", 2),
        ("three", 3),
        ("four", 4),
        ("five", 5),
        ("six", 6),
        ("seven", 7),
        ("eight", 8),
        ("nine", 9),
        ("ten", 10),
        ("eleven", 11),
        ("twelve", 12),
    ],
    units: &[
        ("minute", Unit::Minute),
        ("minutes", Unit::Minute),
        ("hour", Unit::Hour),
        ("hours", Unit::Hour),
        ("day", Unit::Day),
        ("days", Unit::Day),
        ("week", Unit::Week),
        ("weeks", Unit::Week),
        ("month", Unit::Month),
        ("months", Unit::Month),
        ("year", Unit::Year),
        ("years", Unit::Year),
    ],
    periods: &[
        ("week", Unit::Week),
        ("month", Unit::Month),
        ("year", Unit::Year),
    ],
    time_prefixes: &["at", "by", "around", "@"],
    am_markers: &["a.m.", "am"],
    pm_markers: &["p.m.", "pm"],
    clock_suffixes: &["o'clock"],
    time_words: &[
        ("noon", 12, 0),
        ("midday", 12, 0),
        ("midnight", 0, 0),
        ("tonight", 20, 0),
        ("this morning", 9, 0),
        ("this afternoon", 15, 0),
        ("this evening", 19, 0),
        ("in the morning", 9, 0),
        ("in the afternoon", 15, 0),
        ("in the evening", 19, 0),
    ],
    day_month_connectors: &["of"],
    ordinal_suffixes: &["st", "nd", "rd", "th"],
    joiners: &["at", "by", "on", "around"],
    numeric_order: DateOrder::MonthFirst,
};

// =============================================================================
// Spanish
// =============================================================================

pub static SPANISH: Lexicon = Lexicon {
    locale: "es",
    relative_days: &[
        ("pasado mañana", 2),
        ("mañana", 1),
        ("hoy", 0),
        ("ayer", -1),
    ],
    weekdays: &[
        ("lunes", Weekday::Mon),
        ("martes", Weekday::Tue),
        ("miércoles", Weekday::Wed),
        ("miercoles", Weekday::Wed),
        ("jueves", Weekday::Thu),
        ("viernes", Weekday::Fri),
        ("sábado", Weekday::Sat),
        ("sabado", Weekday::Sat),
        ("domingo", Weekday::Sun),
    ],
    months: &[
        ("enero", 1),
        ("febrero", 2),
        ("marzo", 3),
        ("abril", 4),
        ("mayo", 5),
        ("junio", 6),
        ("julio", 7),
        ("agosto", 8),
        ("septiembre", 9),
        ("setiembre", 9),
        ("octubre", 10),
        ("noviembre", 11),
        ("diciembre", 12),
    ],
    next_prefixes: &["próximo", "próxima", "proximo", "proxima"],
    next_suffixes: &["próximo", "próxima", "proximo", "proxima", "que viene", "entrante"],
    this_prefixes: &["este", "esta", "el"],
    offset_prefixes: &["dentro de", "en"],
    number_words: &[
        ("un", 1),
        ("una", 1),
        ("uno", 1),
        ("dos", 2),
        ("tres", 3),
        ("cuatro", 4),
        ("cinco", 5),
        ("seis", 6),
        ("siete", 7),
        ("ocho", 8),
        ("nueve", 9),
        ("diez", 10),
        ("once", 11),
        ("doce", 12),
    ],
    units: &[
        ("minuto", Unit::Minute),
        ("minutos", Unit::Minute),
        ("hora", Unit::Hour),
        ("horas", Unit::Hour),
        ("día", Unit::Day),
        ("días", Unit::Day),
        ("dia", Unit::Day),
        ("dias", Unit::Day),
        ("semana", Unit::Week),
        ("semanas", Unit::Week),
        ("mes", Unit::Month),
        ("meses", Unit::Month),
        ("año", Unit::Year),
        ("años", Unit::Year),
    ],
    periods: &[
        ("semana", Unit::Week),
        ("mes", Unit::Month),
        ("año", Unit::Year),
    ],
    time_prefixes: &["a las", "a la", "sobre las", "hacia las", "al"],
    am_markers: &["de la mañana", "de la madrugada"],
    pm_markers: &["de la tarde", "de la noche"],
    clock_suffixes: &["en punto"],
    time_words: &[
        ("mediodía", 12, 0),
        ("mediodia", 12, 0),
        ("medianoche", 0, 0),
        ("esta noche", 20, 0),
        ("esta tarde", 15, 0),
        ("por la mañana", 9, 0),
        ("por la tarde", 15, 0),
        ("por la noche", 20, 0),
    ],
    day_month_connectors: &["de"],
    ordinal_suffixes: &["º"],
    joiners: &["a las", "a la", "al", "por", "y"],
    numeric_order: DateOrder::DayFirst,
};

// =============================================================================
// French
// =============================================================================

pub static FRENCH: Lexicon = Lexicon {
    locale: "fr",
    relative_days: &[
        ("après-demain", 2),
        ("apres-demain", 2),
        ("demain", 1),
        ("aujourd'hui", 0),
        ("hier", -1),
    ],
    weekdays: &[
        ("lundi", Weekday::Mon),
        ("mardi", Weekday::Tue),
        ("mercredi", Weekday::Wed),
        ("jeudi", Weekday::Thu),
        ("vendredi", Weekday::Fri),
        ("samedi", Weekday::Sat),
        ("dimanche", Weekday::Sun),
    ],
    months: &[
        ("janvier", 1),
        ("février", 2),
        ("fevrier", 2),
        ("mars", 3),
        ("avril", 4),
        ("mai", 5),
        ("juin", 6),
        ("juillet", 7),
        ("août", 8),
        ("aout", 8),
        ("septembre", 9),
        ("octobre", 10),
        ("novembre", 11),
        ("décembre", 12),
        ("decembre", 12),
    ],
    next_prefixes: &["prochain", "prochaine"],
    next_suffixes: &["prochain", "prochaine", "qui vient"],
    this_prefixes: &["ce", "cette"],
    offset_prefixes: &["dans", "d'ici"],
    number_words: &[
        ("un", 1),
        ("une", 1),
        ("deux", 2),
        ("trois", 3),
        ("quatre", 4),
        ("cinq", 5),
        ("six", 6),
        ("sept", 7),
        ("huit", 8),
        ("neuf", 9),
        ("dix", 10),
        ("onze", 11),
        ("douze", 12),
    ],
    units: &[
        ("minute", Unit::Minute),
        ("minutes", Unit::Minute),
        ("heure", Unit::Hour),
        ("heures", Unit::Hour),
        ("jour", Unit::Day),
        ("jours", Unit::Day),
        ("semaine", Unit::Week),
        ("semaines", Unit::Week),
        ("mois", Unit::Month),
        ("an", Unit::Year),
        ("ans", Unit::Year),
        ("année", Unit::Year),
        ("années", Unit::Year),
    ],
    periods: &[
        ("semaine", Unit::Week),
        ("mois", Unit::Month),
        ("année", Unit::Year),
        ("an", Unit::Year),
    ],
    time_prefixes: &["à", "vers"],
    am_markers: &["du matin"],
    pm_markers: &["de l'après-midi", "de l'apres-midi", "du soir"],
    clock_suffixes: &["heures", "heure", "h"],
    time_words: &[
        ("midi", 12, 0),
        ("minuit", 0, 0),
        ("ce soir", 20, 0),
        ("ce matin", 9, 0),
        ("cet après-midi", 15, 0),
        ("cet apres-midi", 15, 0),
    ],
    day_month_connectors: &[],
    ordinal_suffixes: &["er"],
    joiners: &["à", "a", "vers", "et"],
    numeric_order: DateOrder::DayFirst,
};

// =============================================================================
// German
// =============================================================================

pub static GERMAN: Lexicon = Lexicon {
    locale: "de",
    relative_days: &[
        ("übermorgen", 2),
        ("morgen", 1),
        ("heute", 0),
        ("gestern", -1),
    ],
    weekdays: &[
        ("montag", Weekday::Mon),
        ("dienstag", Weekday::Tue),
        ("mittwoch", Weekday::Wed),
        ("donnerstag", Weekday::Thu),
        ("freitag", Weekday::Fri),
        ("samstag", Weekday::Sat),
        ("sonnabend", Weekday::Sat),
        ("sonntag", Weekday::Sun),
    ],
    months: &[
        ("januar", 1),
        ("jänner", 1),
        ("februar", 2),
        ("märz", 3),
        ("maerz", 3),
        ("april", 4),
        ("mai", 5),
        ("juni", 6),
        ("juli", 7),
        ("august", 8),
        ("september", 9),
        ("oktober", 10),
        ("november", 11),
        ("dezember", 12),
    ],
    next_prefixes: &[
        "nächste",
        "nächsten",
        "nächster",
        "nächstes",
        "kommende",
        "kommenden",
    ],
    next_suffixes: &[],
    this_prefixes: &["diesen", "dieser", "am"],
    offset_prefixes: &["in"],
    number_words: &[
        ("ein", 1),
        ("eine", 1),
        ("einem", 1),
        ("einer", 1),
        ("zwei", 2),
        ("drei", 3),
        ("vier", 4),
        ("fünf", 5),
        ("sechs", 6),
        ("sieben", 7),
        ("acht", 8),
        ("neun", 9),
        ("zehn", 10),
        ("elf", 11),
        ("zwölf", 12),
    ],
    units: &[
        ("minute", Unit::Minute),
        ("minuten", Unit::Minute),
        ("stunde", Unit::Hour),
        ("stunden", Unit::Hour),
        ("tag", Unit::Day),
        ("tage", Unit::Day),
        ("tagen", Unit::Day),
        ("woche", Unit::Week),
        ("wochen", Unit::Week),
        ("monat", Unit::Month),
        ("monate", Unit::Month),
        ("monaten", Unit::Month),
        ("jahr", Unit::Year),
        ("jahre", Unit::Year),
        ("jahren", Unit::Year),
    ],
    periods: &[
        ("woche", Unit::Week),
        ("monat", Unit::Month),
        ("jahr", Unit::Year),
    ],
    time_prefixes: &["um", "gegen", "bis"],
    am_markers: &["morgens", "vormittags", "früh"],
    pm_markers: &["nachmittags", "abends"],
    clock_suffixes: &["uhr"],
    time_words: &[
        ("mittag", 12, 0),
        ("mittags", 12, 0),
        ("mitternacht", 0, 0),
        ("heute abend", 19, 0),
        ("heute nachmittag", 15, 0),
        ("heute morgen", 9, 0),
    ],
    day_month_connectors: &[],
    ordinal_suffixes: &["."],
    joiners: &["um", "gegen", "bis"],
    numeric_order: DateOrder::DayFirst,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn all_words(lex: &Lexicon) -> Vec<&'static str> {
        let mut words: Vec<&'static str> = Vec::new();
        words.extend(lex.relative_days.iter().map(|(w, _)| *w));
        words.extend(lex.weekdays.iter().map(|(w, _)| *w));
        words.extend(lex.months.iter().map(|(w, _)| *w));
        words.extend(lex.number_words.iter().map(|(w, _)| *w));
        words.extend(lex.units.iter().map(|(w, _)| *w));
        words.extend(lex.periods.iter().map(|(w, _)| *w));
        words.extend(lex.time_words.iter().map(|(w, _, _)| *w));
        words.extend_from_slice(lex.next_prefixes);
        words.extend_from_slice(lex.next_suffixes);
        words.extend_from_slice(lex.this_prefixes);
        words.extend_from_slice(lex.time_prefixes);
        words.extend_from_slice(lex.am_markers);
        words.extend_from_slice(lex.pm_markers);
        words.extend_from_slice(lex.joiners);
        words
    }

    #[test]
    fn test_for_locale() {
        assert_eq!(for_locale("en").unwrap().locale, "en");
        assert_eq!(for_locale("de").unwrap().locale, "de");
        assert!(for_locale("hi").is_none());
        assert!(for_locale("").is_none());
    }

    #[test]
    fn test_entries_are_lowercase() {
        for lex in LEXICONS {
            for word in all_words(lex) {
                assert_eq!(word, word.to_lowercase(), "{}: {}", lex.locale, word);
            }
        }
    }

    #[test]
    fn test_every_weekday_and_month_is_covered() {
        for lex in LEXICONS {
            let mut days: Vec<u32> = lex
                .weekdays
                .iter()
                .map(|(_, d)| d.num_days_from_monday())
                .collect();
            days.sort_unstable();
            days.dedup();
            assert_eq!(days, (0..7).collect::<Vec<_>>(), "{}", lex.locale);

            let mut months: Vec<u32> = lex.months.iter().map(|(_, m)| *m).collect();
            months.sort_unstable();
            months.dedup();
            assert_eq!(months, (1..=12).collect::<Vec<_>>(), "{}", lex.locale);
        }
    }

    #[test]
    fn test_time_words_are_valid_times() {
        for lex in LEXICONS {
            for (word, hour, minute) in lex.time_words {
                assert!(*hour < 24 && *minute < 60, "{}: {}", lex.locale, word);
            }
        }
    }
}
