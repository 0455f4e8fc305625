//! Regex grammar compiled from a [`Lexicon`].
//!
//! Every rule is run over the whole transcript. Overlapping candidates are
//! resolved leftmost-longest, and a date directly followed (or preceded) by a
//! time is merged into a single match.

use regex::{Captures, Regex};

use super::lexicon::{DateOrder, Lexicon};
use super::{
    DatePart, Meridiem, TemporalExpr, TemporalGrammar, TemporalMatch, TimePart, WeekdayModifier,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuleKind {
    RelativeDay,
    Weekday,
    MonthFirst,
    DayFirst,
    IsoDate,
    SlashDate,
    DottedDate,
    Offset,
    NextPeriod,
    ClockTime,
    TimeWord,
}

struct Rule {
    kind: RuleKind,
    regex: Regex,
}

/// Date/time grammar for one [`Lexicon`].
pub struct LexiconGrammar {
    lexicon: &'static Lexicon,
    rules: Vec<Rule>,
}

impl LexiconGrammar {
    pub fn new(lexicon: &'static Lexicon) -> Self {
        let rules = build_rules(lexicon);
        tracing::trace!(locale = lexicon.locale, rules = rules.len(), "Compiled temporal grammar");
        Self { lexicon, rules }
    }

    pub fn lexicon(&self) -> &'static Lexicon {
        self.lexicon
    }

    fn candidates(&self, text: &str) -> Vec<TemporalMatch> {
        let mut found = Vec::new();
        for rule in &self.rules {
            for caps in rule.regex.captures_iter(text) {
                let Some(whole) = caps.get(0) else { continue };
                if !stands_alone(text, whole.start(), whole.end()) {
                    continue;
                }
                if let Some(expr) = self.interpret(rule.kind, &caps, &text[whole.end()..]) {
                    found.push(TemporalMatch {
                        start: whole.start(),
                        end: whole.end(),
                        text: whole.as_str().to_string(),
                        expr,
                    });
                }
            }
        }
        found
    }

    fn interpret(&self, kind: RuleKind, caps: &Captures<'_>, rest: &str) -> Option<TemporalExpr> {
        let lex = self.lexicon;
        let date = |part: DatePart| {
            Some(TemporalExpr {
                date: Some(part),
                time: None,
            })
        };

        match kind {
            RuleKind::RelativeDay => {
                date(DatePart::RelativeDays(lookup(lex.relative_days, group(caps, "word")?)?))
            }
            RuleKind::Weekday => {
                let day = lookup(lex.weekdays, group(caps, "day")?)?;
                let modifier = if caps.name("next").is_some() || caps.name("next_suffix").is_some()
                {
                    WeekdayModifier::Next
                } else {
                    WeekdayModifier::Bare
                };
                date(DatePart::Weekday { day, modifier })
            }
            RuleKind::MonthFirst | RuleKind::DayFirst => {
                let month = lookup(lex.months, group(caps, "month")?)?;
                date(DatePart::Calendar {
                    year: year(caps)?,
                    month,
                    day: number(caps, "day")?,
                })
            }
            RuleKind::IsoDate => date(DatePart::Calendar {
                year: Some(number(caps, "year")?),
                month: number(caps, "month")?,
                day: number(caps, "day")?,
            }),
            RuleKind::SlashDate => {
                let first = number(caps, "first")?;
                let second = number(caps, "second")?;
                let (month, day) = match lex.numeric_order {
                    DateOrder::MonthFirst => (first, second),
                    DateOrder::DayFirst => (second, first),
                };
                date(DatePart::Calendar {
                    year: year(caps)?,
                    month,
                    day,
                })
            }
            RuleKind::DottedDate => date(DatePart::Calendar {
                year: year(caps)?,
                month: number(caps, "month")?,
                day: number(caps, "day")?,
            }),
            RuleKind::Offset => {
                let raw = group(caps, "amount")?;
                let amount = match raw.parse::<i64>() {
                    Ok(n) => n,
                    Err(_) => lookup(lex.number_words, raw)?,
                };
                let unit = lookup(lex.units, group(caps, "unit")?)?;
                date(DatePart::Offset { amount, unit })
            }
            RuleKind::NextPeriod => {
                let period = group(caps, "period").or_else(|| group(caps, "period_first"))?;
                date(DatePart::NextPeriod(lookup(lex.periods, period)?))
            }
            RuleKind::ClockTime => {
                let prefixed = caps.name("prefix").is_some();
                let clock = caps.name("clock").is_some();
                let meridiem = if caps.name("am").is_some() {
                    Some(Meridiem::Am)
                } else if caps.name("pm").is_some() {
                    Some(Meridiem::Pm)
                } else {
                    None
                };
                let minute = caps.name("minute");
                let dotted = caps.name("sep").is_some_and(|s| s.as_str() == ".");

                // A bare number is not a time, and "3.50" needs more context
                // than "3:50" before it reads as one.
                let anchored = prefixed || clock || meridiem.is_some();
                if !(anchored || (minute.is_some() && !dotted)) {
                    return None;
                }
                // "bis 20.10." and "20.10.2026" are dates.
                if dotted && self.continues_dotted_date(rest) {
                    return None;
                }

                Some(TemporalExpr {
                    date: None,
                    time: Some(TimePart {
                        hour: number(caps, "hour")?,
                        minute: match minute {
                            Some(m) => m.as_str().parse().ok()?,
                            None => 0,
                        },
                        meridiem,
                    }),
                })
            }
            RuleKind::TimeWord => {
                let word = normalize(group(caps, "word")?);
                let (_, hour, minute) = lex.time_words.iter().find(|(w, _, _)| *w == word)?;
                Some(TemporalExpr {
                    date: None,
                    time: Some(TimePart {
                        hour: *hour,
                        minute: *minute,
                        meridiem: None,
                    }),
                })
            }
        }
    }

    fn continues_dotted_date(&self, rest: &str) -> bool {
        let Some(after_dot) = rest.strip_prefix('.') else {
            return false;
        };
        self.lexicon.numeric_order == DateOrder::DayFirst
            || after_dot.starts_with(|c: char| c.is_ascii_digit())
    }

    /// Glue date-only and time-only neighbours separated by nothing but
    /// whitespace, commas or a joiner word.
    fn merge_adjacent(&self, text: &str, picked: Vec<TemporalMatch>) -> Vec<TemporalMatch> {
        let mut merged: Vec<TemporalMatch> = Vec::with_capacity(picked.len());
        for next in picked {
            if let Some(prev) = merged.last_mut() {
                if let Some(expr) = combine(prev.expr, next.expr) {
                    if self.is_joiner(&text[prev.end..next.start]) {
                        prev.end = next.end;
                        prev.text = text[prev.start..next.end].to_string();
                        prev.expr = expr;
                        continue;
                    }
                }
            }
            merged.push(next);
        }
        merged
    }

    fn is_joiner(&self, gap: &str) -> bool {
        let gap = gap.trim_matches(|c: char| c.is_whitespace() || c == ',');
        if gap.is_empty() {
            return true;
        }
        let gap = normalize(gap);
        self.lexicon.joiners.iter().any(|j| *j == gap)
    }
}

impl TemporalGrammar for LexiconGrammar {
    fn locale(&self) -> &str {
        self.lexicon.locale
    }

    fn scan<'t>(&'t self, text: &'t str) -> Box<dyn Iterator<Item = TemporalMatch> + 't> {
        let mut found = self.candidates(text);
        found.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

        let mut picked: Vec<TemporalMatch> = Vec::with_capacity(found.len());
        for candidate in found {
            if picked.last().is_some_and(|p| candidate.start < p.end) {
                continue;
            }
            picked.push(candidate);
        }

        Box::new(self.merge_adjacent(text, picked).into_iter())
    }
}

impl std::fmt::Debug for LexiconGrammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexiconGrammar")
            .field("locale", &self.lexicon.locale)
            .field("rules", &self.rules.len())
            .finish()
    }
}

fn combine(a: TemporalExpr, b: TemporalExpr) -> Option<TemporalExpr> {
    match (a, b) {
        (
            TemporalExpr {
                date: Some(date),
                time: None,
            },
            TemporalExpr {
                date: None,
                time: Some(time),
            },
        )
        | (
            TemporalExpr {
                date: None,
                time: Some(time),
            },
            TemporalExpr {
                date: Some(date),
                time: None,
            },
        ) => Some(TemporalExpr {
            date: Some(date),
            time: Some(time),
        }),
        _ => None,
    }
}

// =============================================================================
// Match helpers
// =============================================================================

/// The match is not glued to a neighbouring letter or digit.
fn stands_alone(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

fn normalize(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn lookup<T: Copy>(table: &[(&str, T)], raw: &str) -> Option<T> {
    let key = normalize(raw);
    table.iter().find(|(w, _)| *w == key).map(|(_, v)| *v)
}

fn group<'t>(caps: &Captures<'t>, name: &str) -> Option<&'t str> {
    caps.name(name).map(|m| m.as_str())
}

fn number<T: std::str::FromStr>(caps: &Captures<'_>, name: &str) -> Option<T> {
    group(caps, name)?.parse().ok()
}

/// Optional year group. Two-digit years are read as 20xx. The outer `None`
/// rejects the candidate, the inner one means "no year given".
fn year(caps: &Captures<'_>) -> Option<Option<i32>> {
    match group(caps, "year") {
        None => Some(None),
        Some(raw) => {
            let value: i32 = raw.parse().ok()?;
            Some(Some(if raw.len() == 2 { 2000 + value } else { value }))
        }
    }
}

// =============================================================================
// Pattern construction
// =============================================================================

/// Alternation of literal words, longest first.
///
/// Word boundaries are added at alphanumeric edges only, and `lead = false`
/// drops the leading one for markers written directly after a digit
/// ("5pm", "1st", "15h").
fn alt<'a>(words: impl IntoIterator<Item = &'a str>, lead: bool) -> Option<String> {
    let mut words: Vec<&str> = words.into_iter().collect();
    if words.is_empty() {
        return None;
    }
    words.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    words.dedup();

    let branches: Vec<String> = words
        .iter()
        .map(|word| {
            let body = word
                .split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s+");
            let head = if lead && word.chars().next().is_some_and(char::is_alphanumeric) {
                r"\b"
            } else {
                ""
            };
            let tail = if word.chars().last().is_some_and(char::is_alphanumeric) {
                r"\b"
            } else {
                ""
            };
            format!("{head}{body}{tail}")
        })
        .collect();
    Some(format!("(?:{})", branches.join("|")))
}

fn keys<T>(pairs: &'static [(&'static str, T)]) -> impl Iterator<Item = &'static str> {
    pairs.iter().map(|(w, _)| *w)
}

fn wrap(part: Option<String>, f: impl FnOnce(String) -> String) -> String {
    part.map(f).unwrap_or_default()
}

fn relative_day_pattern(lex: &Lexicon) -> Option<String> {
    Some(format!("(?P<word>{})", alt(keys(lex.relative_days), true)?))
}

fn weekday_pattern(lex: &Lexicon) -> Option<String> {
    let day = alt(keys(lex.weekdays), true)?;
    let this = wrap(alt(lex.this_prefixes.iter().copied(), true), |p| {
        format!(r"(?:(?P<this>{p})\s+)?")
    });
    let next = wrap(alt(lex.next_prefixes.iter().copied(), true), |p| {
        format!(r"(?:(?P<next>{p})\s+)?")
    });
    let suffix = wrap(alt(lex.next_suffixes.iter().copied(), true), |p| {
        format!(r"(?:\s+(?P<next_suffix>{p}))?")
    });
    Some(format!("{this}{next}(?P<day>{day}){suffix}"))
}

fn ordinal(lex: &Lexicon) -> String {
    wrap(alt(lex.ordinal_suffixes.iter().copied(), false), |p| {
        format!("{p}?")
    })
}

fn month_first_pattern(lex: &Lexicon) -> Option<String> {
    let month = alt(keys(lex.months), true)?;
    let ord = ordinal(lex);
    Some(format!(
        r"(?P<month>{month})\s+(?P<day>\d{{1,2}}){ord}(?:,?\s+(?P<year>\d{{4}}))?"
    ))
}

fn day_first_pattern(lex: &Lexicon) -> Option<String> {
    let month = alt(keys(lex.months), true)?;
    let ord = ordinal(lex);
    let conn = wrap(alt(lex.day_month_connectors.iter().copied(), true), |p| {
        format!(r"(?:{p}\s+)?")
    });
    Some(format!(
        r"(?P<day>\d{{1,2}}){ord}\s+{conn}(?P<month>{month})(?:,?\s+{conn}(?P<year>\d{{4}}))?"
    ))
}

fn dotted_pattern(lex: &Lexicon) -> String {
    let year = match lex.numeric_order {
        DateOrder::DayFirst => r"(?P<year>\d{4}|\d{2})?",
        DateOrder::MonthFirst => r"(?P<year>\d{4}|\d{2})",
    };
    format!(r"(?P<day>\d{{1,2}})\.(?P<month>\d{{1,2}})\.{year}")
}

fn offset_pattern(lex: &Lexicon) -> Option<String> {
    let prefix = alt(lex.offset_prefixes.iter().copied(), true)?;
    let unit = alt(keys(lex.units), true)?;
    let amount = match alt(keys(lex.number_words), true) {
        Some(words) => format!(r"\d{{1,4}}|{words}"),
        None => r"\d{1,4}".to_string(),
    };
    Some(format!(
        r"(?P<prefix>{prefix})\s+(?P<amount>{amount})\s+(?P<unit>{unit})"
    ))
}

fn next_period_pattern(lex: &Lexicon) -> Option<String> {
    let period = alt(keys(lex.periods), true)?;
    let mut branches = Vec::new();
    if let Some(p) = alt(lex.next_prefixes.iter().copied(), true) {
        branches.push(format!(r"(?P<next>{p})\s+(?P<period>{period})"));
    }
    if let Some(s) = alt(lex.next_suffixes.iter().copied(), true) {
        branches.push(format!(r"(?P<period_first>{period})\s+(?P<next_suffix>{s})"));
    }
    if branches.is_empty() {
        None
    } else {
        Some(format!("(?:{})", branches.join("|")))
    }
}

fn time_prefix(lex: &Lexicon) -> String {
    wrap(alt(lex.time_prefixes.iter().copied(), true), |p| {
        format!(r"(?:(?P<prefix>{p})\s+)?")
    })
}

fn clock_pattern(lex: &Lexicon) -> String {
    let prefix = time_prefix(lex);
    let clock = wrap(alt(lex.clock_suffixes.iter().copied(), false), |p| {
        format!(r"(?:\s*(?P<clock>{p}))?")
    });
    let meridiem = match (
        alt(lex.am_markers.iter().copied(), false),
        alt(lex.pm_markers.iter().copied(), false),
    ) {
        (Some(am), Some(pm)) => format!(r"(?:\s*(?:(?P<am>{am})|(?P<pm>{pm})))?"),
        _ => String::new(),
    };
    format!(
        r"{prefix}(?P<hour>\d{{1,2}})(?:(?P<sep>:|\.|\s*h\s*)(?P<minute>\d{{2}}))?{clock}{meridiem}"
    )
}

fn time_word_pattern(lex: &Lexicon) -> Option<String> {
    let word = alt(lex.time_words.iter().map(|(w, _, _)| *w), true)?;
    Some(format!("{}(?P<word>{word})", time_prefix(lex)))
}

fn build_rules(lex: &'static Lexicon) -> Vec<Rule> {
    let patterns = [
        (RuleKind::RelativeDay, relative_day_pattern(lex)),
        (RuleKind::Weekday, weekday_pattern(lex)),
        (RuleKind::MonthFirst, month_first_pattern(lex)),
        (RuleKind::DayFirst, day_first_pattern(lex)),
        (
            RuleKind::IsoDate,
            Some(r"(?P<year>\d{4})-(?P<month>\d{1,2})-(?P<day>\d{1,2})".to_string()),
        ),
        (
            RuleKind::SlashDate,
            Some(r"(?P<first>\d{1,2})/(?P<second>\d{1,2})(?:/(?P<year>\d{4}|\d{2}))?".to_string()),
        ),
        (RuleKind::DottedDate, Some(dotted_pattern(lex))),
        (RuleKind::Offset, offset_pattern(lex)),
        (RuleKind::NextPeriod, next_period_pattern(lex)),
        (RuleKind::ClockTime, Some(clock_pattern(lex))),
        (RuleKind::TimeWord, time_word_pattern(lex)),
    ];

    patterns
        .into_iter()
        .filter_map(|(kind, pattern)| {
            let pattern = pattern?;
            let regex =
                Regex::new(&format!("(?i){pattern}")).expect("Invalid temporal grammar regex");
            Some(Rule { kind, regex })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::temporal::lexicon::{ENGLISH, FRENCH, GERMAN, SPANISH};
    use crate::temporal::Unit;
    use chrono::Weekday;

    fn first(lex: &'static Lexicon, text: &str) -> Option<TemporalMatch> {
        LexiconGrammar::new(lex).scan(text).next()
    }

    fn date_of(lex: &'static Lexicon, text: &str) -> Option<DatePart> {
        first(lex, text).and_then(|m| m.expr.date)
    }

    fn time_of(lex: &'static Lexicon, text: &str) -> Option<TimePart> {
        first(lex, text).and_then(|m| m.expr.time)
    }

    fn hm(hour: u32, minute: u32, meridiem: Option<Meridiem>) -> TimePart {
        TimePart {
            hour,
            minute,
            meridiem,
        }
    }

    // =========================================================================
    // Dates
    // =========================================================================

    #[test]
    fn test_relative_days() {
        assert_eq!(date_of(&ENGLISH, "buy milk tomorrow"), Some(DatePart::RelativeDays(1)));
        assert_eq!(date_of(&ENGLISH, "Today: laundry"), Some(DatePart::RelativeDays(0)));
        assert_eq!(
            date_of(&ENGLISH, "pay rent the day after tomorrow"),
            Some(DatePart::RelativeDays(2))
        );
        assert_eq!(date_of(&SPANISH, "comprar leche mañana"), Some(DatePart::RelativeDays(1)));
        assert_eq!(
            date_of(&SPANISH, "llamar pasado mañana"),
            Some(DatePart::RelativeDays(2))
        );
        assert_eq!(date_of(&FRENCH, "appeler après-demain"), Some(DatePart::RelativeDays(2)));
        assert_eq!(date_of(&GERMAN, "Milch kaufen übermorgen"), Some(DatePart::RelativeDays(2)));
    }

    #[test]
    fn test_weekdays_and_modifiers() {
        let fri = |modifier| Some(DatePart::Weekday {
            day: Weekday::Fri,
            modifier,
        });
        assert_eq!(date_of(&ENGLISH, "submit report friday"), fri(WeekdayModifier::Bare));
        assert_eq!(date_of(&ENGLISH, "submit report on Friday"), fri(WeekdayModifier::Bare));
        assert_eq!(date_of(&ENGLISH, "submit report next Friday"), fri(WeekdayModifier::Next));
        assert_eq!(date_of(&SPANISH, "el viernes que viene"), fri(WeekdayModifier::Next));
        assert_eq!(date_of(&SPANISH, "el próximo viernes"), fri(WeekdayModifier::Next));
        assert_eq!(date_of(&FRENCH, "vendredi prochain"), fri(WeekdayModifier::Next));
        assert_eq!(date_of(&GERMAN, "am Freitag"), fri(WeekdayModifier::Bare));
        assert_eq!(date_of(&GERMAN, "nächsten Freitag"), fri(WeekdayModifier::Next));
    }

    #[test]
    fn test_month_name_dates() {
        assert_eq!(
            date_of(&ENGLISH, "dentist on March 5th"),
            Some(DatePart::Calendar {
                year: None,
                month: 3,
                day: 5
            })
        );
        assert_eq!(
            date_of(&ENGLISH, "taxes by April 15, 2027"),
            Some(DatePart::Calendar {
                year: Some(2027),
                month: 4,
                day: 15
            })
        );
        assert_eq!(
            date_of(&ENGLISH, "party on the 3rd of December"),
            Some(DatePart::Calendar {
                year: None,
                month: 12,
                day: 3
            })
        );
        assert_eq!(
            date_of(&SPANISH, "cita el 20 de octubre de 2027"),
            Some(DatePart::Calendar {
                year: Some(2027),
                month: 10,
                day: 20
            })
        );
        assert_eq!(
            date_of(&FRENCH, "rendez-vous le 1er novembre"),
            Some(DatePart::Calendar {
                year: None,
                month: 11,
                day: 1
            })
        );
        assert_eq!(
            date_of(&GERMAN, "Termin am 3. Dezember"),
            Some(DatePart::Calendar {
                year: None,
                month: 12,
                day: 3
            })
        );
    }

    #[test]
    fn test_numeric_dates() {
        assert_eq!(
            date_of(&ENGLISH, "deadline 2026-11-02"),
            Some(DatePart::Calendar {
                year: Some(2026),
                month: 11,
                day: 2
            })
        );
        assert_eq!(
            date_of(&ENGLISH, "due 10/20"),
            Some(DatePart::Calendar {
                year: None,
                month: 10,
                day: 20
            })
        );
        assert_eq!(
            date_of(&SPANISH, "entregar el 20/10/27"),
            Some(DatePart::Calendar {
                year: Some(2027),
                month: 10,
                day: 20
            })
        );
        assert_eq!(
            date_of(&GERMAN, "bis 20.10.2026 erledigen"),
            Some(DatePart::Calendar {
                year: Some(2026),
                month: 10,
                day: 20
            })
        );
        assert_eq!(
            date_of(&GERMAN, "Abgabe 24.12."),
            Some(DatePart::Calendar {
                year: None,
                month: 12,
                day: 24
            })
        );
    }

    #[test]
    fn test_dotted_numbers_need_a_year_in_english() {
        assert_eq!(first(&ENGLISH, "upgrade to 1.2. soon"), None);
    }

    #[test]
    fn test_offsets_and_periods() {
        assert_eq!(
            date_of(&ENGLISH, "renew passport in 3 weeks"),
            Some(DatePart::Offset {
                amount: 3,
                unit: Unit::Week
            })
        );
        assert_eq!(
            date_of(&ENGLISH, "check the oven in an hour"),
            Some(DatePart::Offset {
                amount: 1,
                unit: Unit::Hour
            })
        );
        assert_eq!(
            date_of(&SPANISH, "dentro de dos días"),
            Some(DatePart::Offset {
                amount: 2,
                unit: Unit::Day
            })
        );
        assert_eq!(
            date_of(&GERMAN, "in zwei Wochen"),
            Some(DatePart::Offset {
                amount: 2,
                unit: Unit::Week
            })
        );
        assert_eq!(
            date_of(&ENGLISH, "plan the trip next month"),
            Some(DatePart::NextPeriod(Unit::Month))
        );
        assert_eq!(
            date_of(&SPANISH, "la semana que viene"),
            Some(DatePart::NextPeriod(Unit::Week))
        );
        assert_eq!(
            date_of(&FRENCH, "la semaine prochaine"),
            Some(DatePart::NextPeriod(Unit::Week))
        );
        assert_eq!(
            date_of(&GERMAN, "nächstes Jahr"),
            Some(DatePart::NextPeriod(Unit::Year))
        );
    }

    // =========================================================================
    // Times
    // =========================================================================

    #[test]
    fn test_clock_times() {
        assert_eq!(time_of(&ENGLISH, "call at 5"), Some(hm(5, 0, None)));
        assert_eq!(time_of(&ENGLISH, "call 5pm"), Some(hm(5, 0, Some(Meridiem::Pm))));
        assert_eq!(
            time_of(&ENGLISH, "call at 9:30 a.m."),
            Some(hm(9, 30, Some(Meridiem::Am)))
        );
        assert_eq!(time_of(&ENGLISH, "standup 14:15"), Some(hm(14, 15, None)));
        assert_eq!(
            time_of(&SPANISH, "a las 5 de la tarde"),
            Some(hm(5, 0, Some(Meridiem::Pm)))
        );
        assert_eq!(time_of(&FRENCH, "à 15h30"), Some(hm(15, 30, None)));
        assert_eq!(time_of(&FRENCH, "vers 9h"), Some(hm(9, 0, None)));
        assert_eq!(time_of(&GERMAN, "um 15 Uhr"), Some(hm(15, 0, None)));
    }

    #[test]
    fn test_bare_numbers_are_not_times() {
        assert_eq!(first(&ENGLISH, "buy 2 apples"), None);
        assert_eq!(first(&ENGLISH, "read chapter 3.50 again"), None);
        assert_eq!(first(&ENGLISH, "order 123pm"), None);
    }

    #[test]
    fn test_french_unaccented_a_is_not_a_time_prefix() {
        assert_eq!(first(&FRENCH, "acheter du pain a 5 euros"), None);
        assert_eq!(first(&FRENCH, "payer a 3 personnes"), None);

        let m = first(&FRENCH, "demain a 15h").unwrap();
        assert_eq!(m.text, "demain a 15h");
        assert_eq!(m.expr.date, Some(DatePart::RelativeDays(1)));
        assert_eq!(m.expr.time, Some(hm(15, 0, None)));
    }

    #[test]
    fn test_time_words() {
        assert_eq!(time_of(&ENGLISH, "finish slides tonight"), Some(hm(20, 0, None)));
        assert_eq!(time_of(&ENGLISH, "lunch at noon"), Some(hm(12, 0, None)));
        assert_eq!(time_of(&SPANISH, "cenar esta noche"), Some(hm(20, 0, None)));
        assert_eq!(time_of(&GERMAN, "heute Abend kochen"), Some(hm(19, 0, None)));
    }

    // =========================================================================
    // Selection and merging
    // =========================================================================

    #[test]
    fn test_date_and_time_are_merged() {
        let m = first(&ENGLISH, "call mom tomorrow at 5pm please").unwrap();
        assert_eq!(m.text, "tomorrow at 5pm");
        assert_eq!(m.expr.date, Some(DatePart::RelativeDays(1)));
        assert_eq!(m.expr.time, Some(hm(5, 0, Some(Meridiem::Pm))));

        let m = first(&ENGLISH, "at 9am on Monday").unwrap();
        assert_eq!(
            m.expr.date,
            Some(DatePart::Weekday {
                day: Weekday::Mon,
                modifier: WeekdayModifier::Bare
            })
        );
        assert_eq!(m.expr.time, Some(hm(9, 0, Some(Meridiem::Am))));

        let m = first(&SPANISH, "mañana a las 9 de la mañana").unwrap();
        assert_eq!(m.expr.date, Some(DatePart::RelativeDays(1)));
        assert_eq!(m.expr.time, Some(hm(9, 0, Some(Meridiem::Am))));
    }

    #[test]
    fn test_unrelated_words_block_merging() {
        let m = first(&ENGLISH, "tomorrow buy 2 things at 5pm").unwrap();
        assert_eq!(m.text, "tomorrow");
        assert_eq!(m.expr.time, None);
    }

    #[test]
    fn test_longest_candidate_wins() {
        let m = first(&GERMAN, "heute Abend").unwrap();
        assert_eq!(m.expr.date, None);
        assert_eq!(m.expr.time, Some(hm(19, 0, None)));

        let m = first(&ENGLISH, "next week").unwrap();
        assert_eq!(m.expr.date, Some(DatePart::NextPeriod(Unit::Week)));
    }

    #[test]
    fn test_matches_are_ordered_and_disjoint() {
        let grammar = LexiconGrammar::new(&ENGLISH);
        let matches: Vec<_> = grammar.scan("today or tomorrow, maybe friday").collect();
        assert_eq!(matches.len(), 3);
        for pair in matches.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
        assert_eq!(matches[0].text, "today");
    }

    #[test]
    fn test_no_match_inside_words() {
        assert_eq!(first(&ENGLISH, "todays agenda"), None);
        assert_eq!(first(&ENGLISH, "mayonnaise"), None);
        assert_eq!(first(&GERMAN, "Guten Morgens"), None);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(date_of(&ENGLISH, "TOMORROW"), Some(DatePart::RelativeDays(1)));
        assert_eq!(date_of(&SPANISH, "MAÑANA"), Some(DatePart::RelativeDays(1)));
    }

    #[test]
    fn test_alt_orders_longest_first() {
        let pattern = alt(["a", "day after tomorrow", "am"], true).unwrap();
        assert!(pattern.starts_with(r"(?:\bday\s+after\s+tomorrow\b|"));
        assert_eq!(alt(std::iter::empty(), true), None);
        assert_eq!(alt(["."], false).unwrap(), r"(?:\.)");
    }
}
