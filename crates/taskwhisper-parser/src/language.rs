//! Language resolution.
//!
//! Maps a language code onto its compiled [`RuleBundle`]. Bundles are built
//! once on first use and are immutable afterwards.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::rules::{LanguageRules, LANGUAGE_RULES};
use crate::temporal::lexicon;
use crate::temporal::{LexiconGrammar, TemporalGrammar};

/// Code of the bundle used for unknown languages.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Compiled classification patterns for one language, plus the temporal
/// grammar used to find due dates.
pub struct RuleBundle {
    code: &'static str,
    pub(crate) priority_high: Regex,
    pub(crate) priority_low: Regex,
    pub(crate) status_in_progress: Regex,
    pub(crate) status_done: Regex,
    pub(crate) command_prefixes: Vec<Regex>,
    pub(crate) temporal_trigger: Regex,
    pub(crate) priority_phrases: Regex,
    grammar: Arc<dyn TemporalGrammar>,
}

impl RuleBundle {
    fn compile(rules: &LanguageRules, grammar: Arc<dyn TemporalGrammar>) -> Self {
        Self {
            code: rules.code,
            priority_high: whole_words(rules.priority_high),
            priority_low: whole_words(rules.priority_low),
            status_in_progress: whole_words(rules.status_in_progress),
            status_done: whole_words(rules.status_done),
            command_prefixes: rules
                .command_prefixes
                .iter()
                .map(|p| {
                    Regex::new(&format!(r"(?i)^(?:{})(?:[\s:,]+|$)", p))
                        .expect("Invalid command prefix regex")
                })
                .collect(),
            temporal_trigger: whole_words(rules.temporal_triggers),
            priority_phrases: whole_words(rules.priority_phrases),
            grammar,
        }
    }

    /// Language code this bundle was built for.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Date/time grammar used for this language.
    pub fn grammar(&self) -> &dyn TemporalGrammar {
        self.grammar.as_ref()
    }
}

impl std::fmt::Debug for RuleBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleBundle")
            .field("code", &self.code)
            .field("grammar", &self.grammar.locale())
            .finish_non_exhaustive()
    }
}

fn whole_words(fragments: &[&str]) -> Regex {
    Regex::new(&format!(r"(?i)\b(?:{})\b", fragments.join("|"))).expect("Invalid keyword regex")
}

static BUNDLES: LazyLock<Vec<RuleBundle>> = LazyLock::new(|| {
    let english: Arc<dyn TemporalGrammar> = Arc::new(LexiconGrammar::new(&lexicon::ENGLISH));
    LANGUAGE_RULES
        .iter()
        .map(|rules| {
            // Languages without a dedicated lexicon share the English grammar.
            let grammar = lexicon::for_locale(rules.code)
                .filter(|lex| lex.locale != lexicon::ENGLISH.locale)
                .map(|lex| Arc::new(LexiconGrammar::new(lex)) as Arc<dyn TemporalGrammar>)
                .unwrap_or_else(|| Arc::clone(&english));
            RuleBundle::compile(rules, grammar)
        })
        .collect()
});

/// Codes with a dedicated rule bundle.
pub fn supported_languages() -> Vec<&'static str> {
    LANGUAGE_RULES.iter().map(|r| r.code).collect()
}

/// Reduce a code such as `" es-MX "` or `"fr_CA"` to its primary subtag.
pub fn normalize_code(code: &str) -> String {
    code.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// Whether `code` resolves to its own bundle rather than the fallback.
pub fn is_supported(code: &str) -> bool {
    let code = normalize_code(code);
    LANGUAGE_RULES.iter().any(|r| r.code == code)
}

/// Return the bundle for `code`, or the English bundle when the code is
/// unknown. Never fails.
pub fn resolve(code: &str) -> &'static RuleBundle {
    let normalized = normalize_code(code);
    let bundles = &*BUNDLES;
    match bundles.iter().find(|b| b.code == normalized) {
        Some(bundle) => bundle,
        None => {
            tracing::debug!(code, fallback = DEFAULT_LANGUAGE, "Unsupported language code");
            bundles
                .iter()
                .find(|b| b.code == DEFAULT_LANGUAGE)
                .unwrap_or(&bundles[0])
        }
    }
}
