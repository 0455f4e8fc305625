//! Per-language keyword tables.
//!
//! Everything here is data: regex fragments grouped by what they detect.
//! [`crate::language`] compiles each table into a [`crate::language::RuleBundle`]
//! once, so adding a language means adding a table, not touching control flow.
//!
//! Fragments are joined into case-insensitive, whole-word alternations.
//! Command prefixes are anchored at the start of the transcript instead.

/// Keyword fragments for one language.
pub struct LanguageRules {
    pub code: &'static str,
    pub priority_high: &'static [&'static str],
    pub priority_low: &'static [&'static str],
    pub status_in_progress: &'static [&'static str],
    pub status_done: &'static [&'static str],
    /// Leading filler phrases ("create a task to", "please").
    pub command_prefixes: &'static [&'static str],
    /// Words from which the rest of the utterance is treated as a due date.
    pub temporal_triggers: &'static [&'static str],
    /// Priority wording removed from titles wherever it appears.
    pub priority_phrases: &'static [&'static str],
}

/// All supported languages. The first entry is the fallback.
pub static LANGUAGE_RULES: &[LanguageRules] = &[ENGLISH, SPANISH, FRENCH, GERMAN, HINDI];

pub const ENGLISH: LanguageRules = LanguageRules {
    code: "en",
    priority_high: &[
        "urgent",
        "asap",
        "critical",
        "high priority",
        "high-priority",
        "important",
    ],
    priority_low: &[
        "low priority",
        "low-priority",
        "low",
        "unimportant",
        "not that important",
    ],
    status_in_progress: &["in progress", "doing", "started", "ongoing"],
    status_done: &["done", "completed", "finish(?:ed)?"],
    command_prefixes: &[
        r"create(?: an?)?(?: new)?(?: (?:high|low)[- ]priority| urgent| important)? (?:task|todo|to-do|reminder)(?: (?:to|for))?",
        r"add(?: an?)?(?: new)?(?: (?:high|low)[- ]priority| urgent| important)? (?:task|todo|to-do|reminder)(?: (?:to|for))?",
        r"remind me to",
        r"please",
    ],
    temporal_triggers: &["on", "by", "before", "due", "at", "tomorrow", "today", "next"],
    priority_phrases: &[
        r"(?:high|low|top)[- ]priority",
        r"not that important",
        r"unimportant",
        r"important",
        r"urgent(?:ly)?",
        r"critical",
        r"asap",
    ],
};

pub const SPANISH: LanguageRules = LanguageRules {
    code: "es",
    priority_high: &[
        "urgente",
        "asap",
        "cr[ií]tic[oa]",
        "alta prioridad",
        "importante",
    ],
    priority_low: &["baja prioridad", "no importante", "poco importante"],
    status_in_progress: &["en progreso", "haciendo", "empezado", "en curso"],
    status_done: &["hecho", "completado", "terminado", "finalizado"],
    command_prefixes: &[
        r"(?:crear|crea|añadir|añade|agregar|agrega)(?: una?)?(?: nuevo| nueva)? (?:tarea|recordatorio)(?: (?:urgente|importante|de (?:alta|baja) prioridad))?(?: (?:para|de))?",
        r"recuérdame(?: que)?",
        r"por favor",
    ],
    temporal_triggers: &[
        "pasado mañana",
        "mañana",
        "hoy",
        "antes de",
        "próxim[oa]",
        "a las",
        "el (?:lunes|martes|mi[ée]rcoles|jueves|viernes|s[áa]bado|domingo)",
    ],
    priority_phrases: &[
        r"(?:de )?(?:alta|baja) prioridad",
        r"(?:no|poco) importante",
        r"importante",
        r"urgente",
        r"cr[ií]tic[oa]",
        r"asap",
    ],
};

pub const FRENCH: LanguageRules = LanguageRules {
    code: "fr",
    priority_high: &[
        "urgente?",
        "asap",
        "critique",
        "haute priorité",
        "importante?",
    ],
    priority_low: &["basse priorité", "pas importante?", "peu importante?"],
    status_in_progress: &["en cours", "en train de", "commencé"],
    status_done: &["fait", "terminé", "complet", "fini"],
    command_prefixes: &[
        r"(?:créer|crée|ajouter|ajoute)(?: une)?(?: nouvelle)? (?:tâche|rappel)(?: (?:urgente?|importante?|prioritaire|de (?:haute|basse) priorité))?(?: (?:pour|de))?",
        r"rappelle-moi de",
        r"s'il te plaît",
        r"s'il vous plaît",
        r"stp",
    ],
    temporal_triggers: &[
        "après-demain",
        "demain",
        "aujourd'hui",
        "avant",
        "prochaine?",
        "d'ici",
        "ce soir",
        "lundi",
        "mardi",
        "mercredi",
        "jeudi",
        "vendredi",
        "samedi",
        "dimanche",
    ],
    priority_phrases: &[
        r"(?:de )?(?:haute|basse) priorité",
        r"(?:pas|peu) importante?",
        r"importante?",
        r"urgente?",
        r"prioritaire",
        r"critique",
        r"asap",
    ],
};

pub const GERMAN: LanguageRules = LanguageRules {
    code: "de",
    priority_high: &[
        "dringend",
        "asap",
        "kritisch",
        "hohe priorität",
        "wichtig(?:e|er|es)?",
    ],
    priority_low: &[
        "niedrige priorität",
        "unwichtig(?:e|er|es)?",
        "nicht wichtig(?:e|er|es)?",
    ],
    status_in_progress: &["in bearbeitung", "dabei", "begonnen", "laufend"],
    status_done: &["erledigt", "fertig", "abgeschlossen", "beendet"],
    command_prefixes: &[
        r"(?:erstelle|erstellen|neue)(?: eine)?(?: neue)?(?: wichtige| dringende)? aufgabe(?: (?:zu|um|für))?",
        r"(?:eine )?(?:neue |wichtige |dringende )?aufgabe erstellen",
        r"erinnere mich(?: daran)?,?(?: (?:zu|dass))?",
        r"bitte",
    ],
    temporal_triggers: &[
        "übermorgen",
        "morgen",
        "heute",
        "bis",
        "vor",
        "nächste[nrs]?",
        "am (?:montag|dienstag|mittwoch|donnerstag|freitag|samstag|sonntag)",
        "um",
    ],
    priority_phrases: &[
        r"(?:hohe|niedrige) priorität",
        r"(?:nicht |un)wichtig(?:e|er|es)?",
        r"wichtig(?:e|er|es)?",
        r"dringend(?:e|er|es)?",
        r"kritisch(?:e|er|es)?",
        r"asap",
    ],
};

/// Transliterated Hindi, often mixed with English.
pub const HINDI: LanguageRules = LanguageRules {
    code: "hi",
    priority_high: &["jaruri", "zaroori", "urgent", "important", "mahatvapurn"],
    priority_low: &["kam jaruri", "kam zaroori", "unimportant"],
    status_in_progress: &["chal raha hai", "shuru", "doing"],
    status_done: &["ho gaya", "khatam", "pura", "complete"],
    command_prefixes: &[
        r"(?:mujhe )?yaad dilana(?: ki)?",
        r"kripya",
        r"please",
        r"remind me to",
    ],
    temporal_triggers: &[
        "kal", "aaj", "parson", "agle", "tak", "on", "by", "before", "at", "tomorrow", "today",
        "next",
    ],
    priority_phrases: &[
        r"kam (?:jaruri|zaroori)",
        r"jaruri",
        r"zaroori",
        r"mahatvapurn",
        r"unimportant",
        r"important",
        r"urgent",
    ],
};

/// Category words recognised in any language, scanned in order.
///
/// Matches are reported literally; translated synonyms are not folded onto
/// a single canonical tag.
pub static TAG_VOCABULARY: &[&str] = &[
    "work", "home", "life", "kitchen", "school", "office", "personal", "health", "finance",
    "waiting", "errand",
    // es
    "trabajo", "casa", "vida", "cocina", "escuela", "oficina", "salud", "finanzas",
    // fr
    "travail", "maison", "vie", "cuisine", "école", "bureau", "santé", "banque",
    // de
    "arbeit", "zuhause", "leben", "küche", "schule", "büro", "gesundheit", "finanzen",
    // hi (transliterated)
    "kaam", "ghar", "naji", "rasoi", "sehat", "paisa",
];
