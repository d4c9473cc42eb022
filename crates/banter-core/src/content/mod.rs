//! The content store: response table, alias table, joke and fact lists.
//!
//! All four tables are validated once at construction and read-only
//! afterwards. Responses keep their insertion order so the substring
//! fallback in the dispatcher iterates deterministically (see DESIGN.md for
//! the tie-break policy).

mod builtin;

use std::collections::HashMap;

use banter_types::error::ContentError;

use crate::capability::RandomSource;
use crate::normalize::is_normalized;

/// Minimum key length for the substring fallback. Shorter keys ("hi", "no")
/// would fire on almost any sentence.
pub const SUBSTRING_MIN_KEY_LEN: usize = 3;

/// Read-only store of everything the bot can say.
#[derive(Debug)]
pub struct ContentStore {
    /// Response table in insertion order: (canonical phrase, reply).
    entries: Vec<(String, String)>,
    /// Canonical phrase -> index into `entries`.
    index: HashMap<String, usize>,
    /// Alternative phrase -> canonical phrase.
    aliases: HashMap<String, String>,
    jokes: Vec<String>,
    facts: Vec<String>,
}

impl ContentStore {
    /// Build a store, validating every invariant up front.
    ///
    /// # Errors
    ///
    /// Fails when a response key is duplicated or not normalized, when an
    /// alias points at a canonical phrase that is not in the response table,
    /// or when the joke/fact lists are empty. All of these are configuration
    /// bugs; none are runtime conditions.
    pub fn new(
        responses: Vec<(String, String)>,
        aliases: Vec<(String, String)>,
        jokes: Vec<String>,
        facts: Vec<String>,
    ) -> Result<Self, ContentError> {
        let mut index = HashMap::with_capacity(responses.len());
        for (pos, (key, _)) in responses.iter().enumerate() {
            if !is_normalized(key) {
                return Err(ContentError::UnnormalizedKey(key.clone()));
            }
            if index.insert(key.clone(), pos).is_some() {
                return Err(ContentError::DuplicateKey(key.clone()));
            }
        }

        let mut alias_map = HashMap::with_capacity(aliases.len());
        for (alias, target) in aliases {
            if !is_normalized(&alias) {
                return Err(ContentError::UnnormalizedKey(alias));
            }
            if !index.contains_key(&target) {
                return Err(ContentError::AliasTargetMissing { alias, target });
            }
            alias_map.insert(alias, target);
        }

        if jokes.is_empty() {
            return Err(ContentError::EmptyList("joke"));
        }
        if facts.is_empty() {
            return Err(ContentError::EmptyList("fact"));
        }

        Ok(Self {
            entries: responses,
            index,
            aliases: alias_map,
            jokes,
            facts,
        })
    }

    /// The compiled-in tables the binary ships with.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::new(
            builtin::responses(),
            builtin::aliases(),
            builtin::jokes(),
            builtin::facts(),
        )
    }

    /// Reply for an exact canonical phrase.
    pub fn reply(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    /// Canonical phrase an alias resolves to, if the phrase is an alias.
    pub fn resolve_alias(&self, phrase: &str) -> Option<&str> {
        self.aliases.get(phrase).map(String::as_str)
    }

    /// First response whose key (length >= 3) appears anywhere inside
    /// `line`, scanning keys in insertion order.
    pub fn substring_reply(&self, line: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key.len() >= SUBSTRING_MIN_KEY_LEN && line.contains(key.as_str()))
            .map(|(_, reply)| reply.as_str())
    }

    pub fn random_joke(&self, rng: &mut dyn RandomSource) -> &str {
        &self.jokes[rng.index(self.jokes.len())]
    }

    pub fn random_fact(&self, rng: &mut dyn RandomSource) -> &str {
        &self.facts[rng.index(self.facts.len())]
    }

    pub fn jokes(&self) -> &[String] {
        &self.jokes
    }

    pub fn facts(&self) -> &[String] {
        &self.facts
    }

    /// Canonical phrases in insertion order.
    pub fn response_keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Alias phrases in arbitrary order.
    pub fn alias_keys(&self) -> impl Iterator<Item = &str> {
        self.aliases.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::SeededRandom;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_builtin_store_is_valid() {
        let store = ContentStore::builtin().expect("builtin tables must validate");
        assert!(store.reply("hi").is_some());
        assert!(!store.jokes().is_empty());
        assert!(!store.facts().is_empty());
    }

    #[test]
    fn test_builtin_aliases_all_resolve() {
        let store = ContentStore::builtin().unwrap();
        for alias in store.alias_keys().collect::<Vec<_>>() {
            let canonical = store.resolve_alias(alias).unwrap();
            assert!(
                store.reply(canonical).is_some(),
                "alias '{alias}' -> '{canonical}' must resolve"
            );
        }
    }

    #[test]
    fn test_alias_target_missing_fails_construction() {
        let err = ContentStore::new(
            pairs(&[("hi", "Hello!")]),
            pairs(&[("howdy", "nonexistent")]),
            strings(&["a joke"]),
            strings(&["a fact"]),
        )
        .unwrap_err();
        assert!(matches!(err, ContentError::AliasTargetMissing { .. }));
    }

    #[test]
    fn test_duplicate_key_fails_construction() {
        let err = ContentStore::new(
            pairs(&[("hi", "Hello!"), ("hi", "Again!")]),
            vec![],
            strings(&["a joke"]),
            strings(&["a fact"]),
        )
        .unwrap_err();
        assert!(matches!(err, ContentError::DuplicateKey(_)));
    }

    #[test]
    fn test_unnormalized_key_fails_construction() {
        let err = ContentStore::new(
            pairs(&[("Hi ", "Hello!")]),
            vec![],
            strings(&["a joke"]),
            strings(&["a fact"]),
        )
        .unwrap_err();
        assert!(matches!(err, ContentError::UnnormalizedKey(_)));
    }

    #[test]
    fn test_empty_jokes_fails_construction() {
        let err = ContentStore::new(
            pairs(&[("hi", "Hello!")]),
            vec![],
            vec![],
            strings(&["a fact"]),
        )
        .unwrap_err();
        assert!(matches!(err, ContentError::EmptyList("joke")));
    }

    #[test]
    fn test_substring_skips_short_keys() {
        let store = ContentStore::new(
            pairs(&[("hi", "short"), ("hello", "long")]),
            vec![],
            strings(&["a joke"]),
            strings(&["a fact"]),
        )
        .unwrap();
        // "hi" is embedded but below the length floor; "hello" matches.
        assert_eq!(store.substring_reply("oh hi, hello there"), Some("long"));
        assert_eq!(store.substring_reply("just hi then"), None);
    }

    #[test]
    fn test_substring_insertion_order_tie_break() {
        let store = ContentStore::new(
            pairs(&[("abc", "first"), ("abcdef", "second")]),
            vec![],
            strings(&["a joke"]),
            strings(&["a fact"]),
        )
        .unwrap();
        // Both keys are embedded; insertion order wins.
        assert_eq!(store.substring_reply("say abcdef now"), Some("first"));
    }

    #[test]
    fn test_random_picks_come_from_lists() {
        let store = ContentStore::builtin().unwrap();
        let mut rng = SeededRandom::from_seed(3);
        for _ in 0..50 {
            let joke = store.random_joke(&mut rng).to_string();
            assert!(store.jokes().contains(&joke));
            let fact = store.random_fact(&mut rng).to_string();
            assert!(store.facts().contains(&fact));
        }
    }
}
