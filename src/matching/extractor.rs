//! Canonical skill extraction from free text.

use crate::matching::spans::SpanSet;
use crate::taxonomy::SkillTaxonomy;
use aho_corasick::AhoCorasick;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Extracts the set of canonical skills mentioned in a text.
///
/// Matching is case-insensitive, deterministic and idempotent: the same text
/// always produces the same set. Three passes run over the lowercased input:
/// direct canonical names, longest-first aliases with span occupancy, and
/// dedicated patterns for symbol-bearing compounds that plain word boundaries
/// cannot isolate.
pub struct SkillExtractor {
    taxonomy: Arc<SkillTaxonomy>,
    canonical_matcher: AhoCorasick,
    canonical_names: Vec<String>,
    alias_matcher: AhoCorasick,
    alias_forms: Vec<String>,
    special_patterns: Vec<(Regex, &'static str)>,
}

impl SkillExtractor {
    pub fn new(taxonomy: Arc<SkillTaxonomy>) -> Self {
        let canonical_names: Vec<String> = taxonomy
            .canonical_skills()
            .iter()
            .map(|s| s.to_string())
            .collect();
        let canonical_matcher = AhoCorasick::new(&canonical_names)
            .expect("canonical skill automaton");

        let mut alias_forms: Vec<String> =
            taxonomy.alias_forms().map(|s| s.to_string()).collect();
        alias_forms.sort();
        let alias_matcher = AhoCorasick::new(&alias_forms).expect("alias automaton");

        // Word boundaries alone cannot isolate these tokens reliably.
        let special_patterns = vec![
            (Regex::new(r"(^|[^\w+])c\+\+($|[^\w+])").unwrap(), "c++"),
            (Regex::new(r"(^|[^\w#])c#($|[^\w#])").unwrap(), "c#"),
            (Regex::new(r"\bnode\.?js\b").unwrap(), "node.js"),
            (Regex::new(r"\breact\.?js\b").unwrap(), "react"),
            (Regex::new(r"(^|\s)\.net\b").unwrap(), "c#"),
        ];

        Self {
            taxonomy,
            canonical_matcher,
            canonical_names,
            alias_matcher,
            alias_forms,
            special_patterns,
        }
    }

    /// Extract all canonical skills mentioned in `text`.
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        let lower = text.to_lowercase();
        let mut skills = BTreeSet::new();

        // Pass 1: direct canonical matches with word boundaries.
        for mat in self.canonical_matcher.find_overlapping_iter(&lower) {
            if !on_word_boundary(&lower, mat.start(), mat.end()) {
                continue;
            }
            let skill = &self.canonical_names[mat.pattern().as_usize()];
            if !self.taxonomy.is_stop_word(skill) && !self.taxonomy.is_non_skill(skill) {
                skills.insert(skill.clone());
            }
        }

        // Pass 2: aliases, longest first, with span occupancy so a long alias
        // preempts any shorter alias overlapping its range.
        let mut alias_hits: Vec<(usize, usize, usize)> = self
            .alias_matcher
            .find_overlapping_iter(&lower)
            .filter(|m| on_word_boundary(&lower, m.start(), m.end()))
            .map(|m| (m.start(), m.end(), m.pattern().as_usize()))
            .collect();
        alias_hits.sort_by(|a, b| {
            let len_a = a.1 - a.0;
            let len_b = b.1 - b.0;
            len_b.cmp(&len_a).then(a.0.cmp(&b.0))
        });

        let mut consumed = SpanSet::new();
        for (start, end, pattern) in alias_hits {
            if !consumed.try_claim(start, end) {
                continue;
            }
            let skill = self.taxonomy.canonicalize(&self.alias_forms[pattern]);
            if !self.taxonomy.is_stop_word(&skill) && !self.taxonomy.is_non_skill(&skill) {
                skills.insert(skill);
            }
        }

        // Pass 3: special compound overrides.
        for (pattern, skill) in &self.special_patterns {
            if pattern.is_match(&lower) {
                skills.insert(skill.to_string());
            }
        }

        self.post_filter(skills)
    }

    /// Final cleanup shared by every extraction pass.
    fn post_filter(&self, skills: BTreeSet<String>) -> BTreeSet<String> {
        skills
            .into_iter()
            .filter(|skill| {
                if self.taxonomy.is_non_skill(skill) || self.taxonomy.is_stop_word(skill) {
                    return false;
                }
                if skill.chars().count() < 2 {
                    return false;
                }
                if skill.chars().all(|c| c.is_ascii_digit()) {
                    return false;
                }
                let words: Vec<&str> = skill.split_whitespace().collect();
                if words.len() > 1 && words.iter().all(|w| self.taxonomy.is_stop_word(w)) {
                    return false;
                }
                true
            })
            .collect()
    }
}

/// Emulates `\b` at both ends of `[start, end)`: the match may not sit
/// word-character-to-word-character against its neighbours.
fn on_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let bytes = text.as_bytes();
    let is_word = |b: u8| b.is_ascii_alphanumeric() || b == b'_';

    if start > 0 && is_word(bytes[start - 1]) && is_word(bytes[start]) {
        return false;
    }
    if end < bytes.len() && is_word(bytes[end - 1]) && is_word(bytes[end]) {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> SkillExtractor {
        SkillExtractor::new(Arc::new(SkillTaxonomy::default()))
    }

    #[test]
    fn test_direct_and_alias_extraction() {
        let skills = extractor().extract("Python developer with AWS and k8s experience");
        assert!(skills.contains("python"));
        assert!(skills.contains("amazon web services"));
        assert!(skills.contains("kubernetes"));
    }

    #[test]
    fn test_case_insensitive() {
        let ex = extractor();
        assert_eq!(
            ex.extract("TABLEAU and Power BI"),
            ex.extract("tableau and power bi")
        );
    }

    #[test]
    fn test_idempotent() {
        let ex = extractor();
        let text = "React, Node.js, PostgreSQL and Docker on AWS";
        assert_eq!(ex.extract(text), ex.extract(text));
    }

    #[test]
    fn test_word_boundaries_respected() {
        let skills = extractor().extract("scalability is in our javascript roadmap");
        // "scala" must not fire inside "scalability"
        assert!(!skills.contains("scala"));
        assert!(skills.contains("javascript"));
    }

    #[test]
    fn test_long_alias_preempts_short() {
        let skills = extractor().extract("experienced with amazon web services deployments");
        assert!(skills.contains("amazon web services"));
    }

    #[test]
    fn test_special_compounds() {
        let skills = extractor().extract("Knows C++ and C# plus NodeJS");
        assert!(skills.contains("c++"));
        assert!(skills.contains("c#"));
        assert!(skills.contains("node.js"));
    }

    #[test]
    fn test_blacklist_and_stopwords_excluded() {
        let ex = extractor();
        let skills = ex.extract("senior manager with strong experience required");
        for skill in &skills {
            assert!(!ex.taxonomy.is_non_skill(skill));
            assert!(!ex.taxonomy.is_stop_word(skill));
        }
    }

    #[test]
    fn test_empty_text() {
        assert!(extractor().extract("").is_empty());
    }
}
