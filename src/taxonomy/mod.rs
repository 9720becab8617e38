//! Static skill taxonomy: alias canonicalization, blacklists, implication,
//! equivalence and related-skill tables.
//!
//! The taxonomy is built once, never mutated afterwards, and shared behind an
//! `Arc` so any number of concurrent analyses can read it without locking.

mod data;

use std::collections::{BTreeSet, HashMap, HashSet};

/// Immutable skill knowledge base injected into the matching engine.
#[derive(Debug, Clone)]
pub struct SkillTaxonomy {
    aliases: HashMap<String, String>,
    canonical: HashSet<String>,
    non_skills: HashSet<String>,
    stop_words: HashSet<String>,
    implies: HashMap<String, Vec<String>>,
    equivalents: HashMap<String, Vec<String>>,
    related: HashMap<String, Vec<String>>,
}

impl SkillTaxonomy {
    /// Build a taxonomy from explicit tables. Canonical names are the alias
    /// map's values; an identity alias is inserted for each of them so that
    /// canonicalizing an already-canonical skill returns it unchanged.
    pub fn from_tables(
        aliases: impl IntoIterator<Item = (String, String)>,
        non_skills: impl IntoIterator<Item = String>,
        stop_words: impl IntoIterator<Item = String>,
        implies: impl IntoIterator<Item = (String, Vec<String>)>,
        equivalents: impl IntoIterator<Item = (String, Vec<String>)>,
        related: impl IntoIterator<Item = (String, Vec<String>)>,
    ) -> Self {
        let mut alias_map: HashMap<String, String> = HashMap::new();
        let mut canonical = HashSet::new();

        for (alias, skill) in aliases {
            canonical.insert(skill.clone());
            alias_map.insert(alias, skill);
        }
        for skill in canonical.iter() {
            alias_map.entry(skill.clone()).or_insert_with(|| skill.clone());
        }

        Self {
            aliases: alias_map,
            canonical,
            non_skills: non_skills.into_iter().collect(),
            stop_words: stop_words.into_iter().collect(),
            implies: implies.into_iter().collect(),
            equivalents: equivalents.into_iter().collect(),
            related: related.into_iter().collect(),
        }
    }

    /// Map a surface form to its canonical skill, or return the input
    /// unchanged when it is unknown.
    pub fn canonicalize(&self, term: &str) -> String {
        self.aliases
            .get(term)
            .cloned()
            .unwrap_or_else(|| term.to_string())
    }

    /// Whether the given string is a canonical skill in this taxonomy.
    pub fn is_skill(&self, term: &str) -> bool {
        self.canonical.contains(term)
    }

    pub fn is_non_skill(&self, term: &str) -> bool {
        self.non_skills.contains(term)
    }

    pub fn is_stop_word(&self, term: &str) -> bool {
        self.stop_words.contains(term)
    }

    /// Broader skills implied by holding `skill` (one hop only).
    pub fn implied_by(&self, skill: &str) -> &[String] {
        self.implies.get(skill).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Same-category substitutes for `skill`.
    pub fn equivalents_of(&self, skill: &str) -> &[String] {
        self.equivalents.get(skill).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Narrower/adjacent skills associated with the broader `skill`.
    pub fn related_to(&self, skill: &str) -> &[String] {
        self.related.get(skill).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Broader skills under which `skill` appears as a narrower entry.
    pub fn broader_of<'a>(&'a self, skill: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.related.iter().filter_map(move |(broad, narrow)| {
            if narrow.iter().any(|s| s == skill) {
                Some(broad.as_str())
            } else {
                None
            }
        })
    }

    /// All canonical skill names, in deterministic order.
    pub fn canonical_skills(&self) -> BTreeSet<&str> {
        self.canonical.iter().map(String::as_str).collect()
    }

    /// All alias surface forms (canonical names included).
    pub fn alias_forms(&self) -> impl Iterator<Item = &str> {
        self.aliases.keys().map(String::as_str)
    }

    pub fn skill_count(&self) -> usize {
        self.canonical.len()
    }
}

impl Default for SkillTaxonomy {
    fn default() -> Self {
        Self::from_tables(
            data::ALIASES
                .iter()
                .map(|(a, s)| (a.to_string(), s.to_string())),
            data::NON_SKILLS.iter().map(|s| s.to_string()),
            data::STOP_WORDS.iter().map(|s| s.to_string()),
            data::IMPLIES
                .iter()
                .map(|(k, v)| (k.to_string(), v.iter().map(|s| s.to_string()).collect())),
            data::EQUIVALENTS
                .iter()
                .map(|(k, v)| (k.to_string(), v.iter().map(|s| s.to_string()).collect())),
            data::RELATED
                .iter()
                .map(|(k, v)| (k.to_string(), v.iter().map(|s| s.to_string()).collect())),
        )
    }
}
