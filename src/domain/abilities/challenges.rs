//! Numbered challenge menu.
//!
//! The dialogue layer shows users a numbered list of challenges and collects
//! their selection as a comma separated list of codes ("1, 4, 19"). The
//! catalog maps those codes to the canonical phrases that challenge rules
//! match against.

/// Canonical challenge phrases, in menu order. Code `n` is entry `n - 1`.
pub const CHALLENGE_PHRASES: [&str; 19] = [
    "dislikes group projects",
    "dislikes public speaking or presentations",
    "hard to come up with new, original ideas",
    "gets a headache from complex data or math",
    "prefers clear instructions over ambiguous tasks",
    "tends to lose the big picture when facing too much information",
    "not interested in business operations or how companies make profit",
    "gets anxious under pressure or tight deadlines",
    "finds it difficult to persuade others",
    "prefers to complete tasks independently rather than leading a team",
    "tends to procrastinate, deadlines are the main motivation",
    "afraid of or dislikes handling interpersonal conflicts",
    "gets bored easily by repetitive, routine tasks",
    "dislikes networking or actively building new connections",
    "afraid of making mistakes, tends to be a perfectionist",
    "finds it hard to maintain focus for long periods",
    "not good at reporting work to superiors or clients",
    "struggles with purely theoretical concepts, needs hands-on practice",
    "hesitates when making decisions",
];

/// Lookup from menu codes to canonical challenge phrases.
pub struct ChallengeCatalog;

impl ChallengeCatalog {
    /// Resolves a single menu code ("1".."19") to its phrase.
    ///
    /// Codes must be plain decimal digits; "01", "+1" and "1.0" are rejected
    /// the same way the menu rejects them.
    pub fn resolve(code: &str) -> Option<&'static str> {
        let code = code.trim();
        if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) || code.starts_with('0') {
            return None;
        }
        let n: usize = code.parse().ok()?;
        CHALLENGE_PHRASES.get(n.checked_sub(1)?).copied()
    }

    /// Resolves a comma separated selection, preserving order and dropping
    /// codes that are not on the menu.
    pub fn resolve_selection(selection: &str) -> Vec<String> {
        selection
            .split(',')
            .filter_map(Self::resolve)
            .map(str::to_string)
            .collect()
    }

    /// Number of entries on the menu.
    pub fn len() -> usize {
        CHALLENGE_PHRASES.len()
    }

    /// Menu lines in display order: `"<code>. <phrase>"`.
    pub fn menu() -> Vec<String> {
        CHALLENGE_PHRASES
            .iter()
            .enumerate()
            .map(|(i, phrase)| format!("{}. {}", i + 1, phrase))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::abilities::knowledge_base::builtin_rule_table;
    use crate::domain::abilities::rules::Rule;

    #[test]
    fn resolves_first_and_last_codes() {
        assert_eq!(ChallengeCatalog::resolve("1"), Some("dislikes group projects"));
        assert_eq!(
            ChallengeCatalog::resolve("19"),
            Some("hesitates when making decisions")
        );
    }

    #[test]
    fn rejects_codes_off_the_menu() {
        assert_eq!(ChallengeCatalog::resolve("0"), None);
        assert_eq!(ChallengeCatalog::resolve("20"), None);
        assert_eq!(ChallengeCatalog::resolve("01"), None);
        assert_eq!(ChallengeCatalog::resolve("abc"), None);
        assert_eq!(ChallengeCatalog::resolve(""), None);
    }

    #[test]
    fn selection_trims_and_preserves_order() {
        let selected = ChallengeCatalog::resolve_selection(" 4, 1 ,99, x,19");
        assert_eq!(
            selected,
            vec![
                "gets a headache from complex data or math".to_string(),
                "dislikes group projects".to_string(),
                "hesitates when making decisions".to_string(),
            ]
        );
    }

    #[test]
    fn empty_selection_resolves_to_nothing() {
        assert!(ChallengeCatalog::resolve_selection("").is_empty());
    }

    #[test]
    fn every_phrase_has_a_builtin_rule() {
        for phrase in CHALLENGE_PHRASES {
            let found = builtin_rule_table().rules().iter().any(|r| {
                matches!(r, Rule::Challenge { phrase: p, .. } if p == phrase)
            });
            assert!(found, "no rule for '{}'", phrase);
        }
    }

    #[test]
    fn menu_is_numbered_from_one() {
        let menu = ChallengeCatalog::menu();
        assert_eq!(menu.len(), ChallengeCatalog::len());
        assert_eq!(menu[0], "1. dislikes group projects");
    }
}
