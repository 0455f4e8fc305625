//! Title and description extraction.

use taskwhisper_core::config::TitleConfig;

use crate::language::RuleBundle;

/// Remove the longest leading command phrase, if any.
pub fn strip_command_prefix<'t>(text: &'t str, bundle: &RuleBundle) -> &'t str {
    let cut = bundle
        .command_prefixes
        .iter()
        .filter_map(|re| re.find(text))
        .map(|m| m.end())
        .max()
        .unwrap_or(0);
    &text[cut..]
}

/// The transcript minus its command phrase.
pub fn description(text: &str, bundle: &RuleBundle) -> String {
    strip_command_prefix(text.trim(), bundle).trim().to_string()
}

/// Short title: no command phrase, nothing from the first temporal trigger
/// onwards, no priority wording.
pub fn title(text: &str, bundle: &RuleBundle, limits: &TitleConfig) -> String {
    let body = strip_command_prefix(text.trim(), bundle);
    let body = match bundle.temporal_trigger.find(body) {
        Some(m) => &body[..m.start()],
        None => body,
    };
    let body = bundle.priority_phrases.replace_all(body, " ");

    let words: Vec<&str> = body.split_whitespace().collect();
    let collapsed = words.join(" ");
    let trimmed = collapsed.trim_matches(is_edge_noise);

    truncate_words(trimmed, limits)
}

fn is_edge_noise(c: char) -> bool {
    c.is_whitespace()
        || c.is_ascii_punctuation()
        || matches!(c, '¿' | '¡' | '«' | '»' | '…' | '“' | '”' | '‘' | '’')
}

fn truncate_words(title: &str, limits: &TitleConfig) -> String {
    let words: Vec<&str> = title.split_whitespace().collect();
    if words.len() <= limits.max_words {
        return title.to_string();
    }
    let mut short = words[..limits.truncate_to.min(words.len())].join(" ");
    short.push_str(&limits.ellipsis);
    short
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::resolve;

    fn en_title(text: &str) -> String {
        title(text, resolve("en"), &TitleConfig::default())
    }

    #[test]
    fn test_strip_command_prefix() {
        let en = resolve("en");
        assert_eq!(strip_command_prefix("remind me to call mom", en), "call mom");
        assert_eq!(
            strip_command_prefix("Create a new task to water plants", en),
            "water plants"
        );
        assert_eq!(strip_command_prefix("call mom", en), "call mom");
    }

    #[test]
    fn test_bare_command_phrase_leaves_nothing() {
        let en = resolve("en");
        for text in ["create a task to", "remind me to", "Please"] {
            assert_eq!(description(text, en), "");
            assert_eq!(en_title(text), "");
        }
        assert_eq!(strip_command_prefix("remind me to:", en), "");
        assert_eq!(strip_command_prefix("pleased to help", en), "pleased to help");
    }

    #[test]
    fn test_longest_prefix_wins() {
        let en = resolve("en");
        assert_eq!(
            strip_command_prefix("create a high priority task for the budget review", en),
            "the budget review"
        );
    }

    #[test]
    fn test_only_one_prefix_is_removed() {
        assert_eq!(
            description("please remind me to call mom", resolve("en")),
            "remind me to call mom"
        );
    }

    #[test]
    fn test_description_keeps_temporal_words() {
        assert_eq!(
            description("  remind me to buy milk tomorrow ", resolve("en")),
            "buy milk tomorrow"
        );
    }

    #[test]
    fn test_title_cuts_at_trigger() {
        assert_eq!(
            en_title("Create a high priority task to buy milk tomorrow"),
            "buy milk"
        );
        assert_eq!(en_title("submit the report by Friday at noon"), "submit the report");
    }

    #[test]
    fn test_title_drops_priority_words() {
        assert_eq!(en_title("urgent fix the login bug"), "fix the login bug");
        assert_eq!(en_title("fix the urgent login bug"), "fix the login bug");
        assert_eq!(en_title("fix the login bug, high priority"), "fix the login bug");
        assert_eq!(en_title("call the bank, it's important!"), "call the bank, it's");
    }

    #[test]
    fn test_title_trims_punctuation() {
        assert_eq!(en_title("  ...water   the plants!!  "), "water the plants");
        assert_eq!(
            title("¿comprar pan?", resolve("es"), &TitleConfig::default()),
            "comprar pan"
        );
    }

    #[test]
    fn test_title_truncation() {
        let long = "one two three four five six seven eight nine ten eleven twelve thirteen";
        assert_eq!(en_title(long), "one two three four five six seven eight nine ten...");

        let twelve = "w1 w2 w3 w4 w5 w6 w7 w8 w9 w10 w11 w12";
        assert_eq!(en_title(twelve), twelve);
    }

    #[test]
    fn test_custom_limits() {
        let limits = TitleConfig {
            max_words: 3,
            truncate_to: 2,
            ellipsis: " …".to_string(),
        };
        assert_eq!(
            title("wash the red car", resolve("en"), &limits),
            "wash the …"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(en_title(""), "");
        assert_eq!(en_title("   "), "");
        assert_eq!(description("", resolve("en")), "");
    }

    #[test]
    fn test_other_languages() {
        assert_eq!(
            title(
                "Crear una tarea urgente para comprar leche mañana",
                resolve("es"),
                &TitleConfig::default()
            ),
            "comprar leche"
        );
        assert_eq!(
            title("Erinnere mich daran, Milch zu kaufen morgen", resolve("de"), &TitleConfig::default()),
            "Milch zu kaufen"
        );
        assert_eq!(
            title("rappelle-moi de payer le loyer demain", resolve("fr"), &TitleConfig::default()),
            "payer le loyer"
        );
    }
}
