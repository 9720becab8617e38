//! Requirement classification: must-have / nice-to-have / OR-groups.

use crate::matching::extractor::SkillExtractor;
use crate::taxonomy::SkillTaxonomy;
use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Classified requirements for one requirement text.
///
/// Invariants: `must_have` and `nice_to_have` are disjoint; no member of any
/// OR-group appears in either flat set; OR-group pairs are distinct and
/// deduplicated by unordered pair.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RequirementSet {
    pub must_have: BTreeSet<String>,
    pub nice_to_have: BTreeSet<String>,
    pub or_groups: BTreeMap<String, (String, String)>,
}

impl RequirementSet {
    /// Number of scoring units: individual must-haves plus OR-groups.
    pub fn total_requirements(&self) -> usize {
        self.must_have.len() + self.or_groups.len()
    }
}

const MUST_CUES: &[&str] = &["must have", "required", "mandatory", "essential", "must know"];
const NICE_CUES: &[&str] = &[
    "nice to have",
    "preferred",
    "desired",
    "plus",
    "bonus",
    "optional",
    "advantage",
];

/// Canonical soft skills routed to nice-to-have when a sentence carries no cue.
const SOFT_SKILLS: &[&str] = &[
    "communication skills",
    "teamwork",
    "leadership",
    "collaboration",
    "problem solving",
    "critical thinking",
    "adaptability",
    "time management",
];

/// Splits requirement text into OR-groups and must/nice sets.
pub struct RequirementClassifier {
    taxonomy: Arc<SkillTaxonomy>,
    extractor: Arc<SkillExtractor>,
    or_patterns: Vec<Regex>,
    sentence_splitter: Regex,
}

impl RequirementClassifier {
    pub fn new(taxonomy: Arc<SkillTaxonomy>, extractor: Arc<SkillExtractor>) -> Self {
        // The regex crate guarantees linear-time scans, so these stay safe on
        // adversarial input; the 50-char phrase bound is enforced after capture.
        let or_patterns = vec![
            // "skill1 or skill2" up to a clause terminator
            Regex::new(
                r"\b([\w\s.+#-]+?)\s+or\s+([\w\s.+#-]+?)(?:[.,;:\n]|\s(?:and|with|for|to|in)\s|$)",
            )
            .unwrap(),
            // "skill1/skill2"
            Regex::new(
                r"\b([\w\s.+#-]+?)\s*/\s*([\w\s.+#-]+?)(?:[.,;:\n]|\s(?:and|with|for|to|in)\s|$)",
            )
            .unwrap(),
            // plain "word or word", at most two words a side
            Regex::new(r"\b(\w+(?:\s+\w+)?)\s+or\s+(\w+(?:\s+\w+)?)\b").unwrap(),
        ];
        let sentence_splitter = Regex::new(r"[.!\n]+").unwrap();

        Self {
            taxonomy,
            extractor,
            or_patterns,
            sentence_splitter,
        }
    }

    /// Classify requirement text into must-have, nice-to-have and OR-groups.
    pub fn classify(&self, requirement_text: &str) -> RequirementSet {
        let lower = requirement_text.to_lowercase();
        let or_groups = self.detect_or_groups(&lower);
        let all_skills = self.extractor.extract(&lower);

        let mut must_raw: BTreeSet<String> = BTreeSet::new();
        let mut nice_raw: BTreeSet<String> = BTreeSet::new();

        for sentence in self.sentence_splitter.split(&lower) {
            let is_must = MUST_CUES.iter().any(|cue| sentence.contains(cue));
            let is_nice = NICE_CUES.iter().any(|cue| sentence.contains(cue));

            let sentence_skills: BTreeSet<String> = self
                .extractor
                .extract(sentence)
                .intersection(&all_skills)
                .cloned()
                .collect();

            if is_nice {
                nice_raw.extend(sentence_skills);
            } else if is_must {
                must_raw.extend(sentence_skills);
            } else {
                for skill in sentence_skills {
                    if SOFT_SKILLS.contains(&skill.as_str()) {
                        nice_raw.insert(skill);
                    } else {
                        must_raw.insert(skill);
                    }
                }
            }
        }

        // A skill classified both ways counts once, as nice-to-have.
        let mut must_have: BTreeSet<String> =
            must_raw.difference(&nice_raw).cloned().collect();
        let mut nice_to_have = nice_raw;

        // Fallback: no sentence produced anything, classify the overall set.
        if must_have.is_empty() && nice_to_have.is_empty() {
            for skill in all_skills {
                if SOFT_SKILLS.contains(&skill.as_str()) {
                    nice_to_have.insert(skill);
                } else {
                    must_have.insert(skill);
                }
            }
        }

        // OR-group members are evaluated exclusively as a unit.
        for (a, b) in or_groups.values() {
            must_have.remove(a);
            must_have.remove(b);
            nice_to_have.remove(a);
            nice_to_have.remove(b);
        }

        RequirementSet {
            must_have,
            nice_to_have,
            or_groups,
        }
    }

    /// Detect "x or y" / "x/y" alternative constructs.
    fn detect_or_groups(&self, lower: &str) -> BTreeMap<String, (String, String)> {
        let mut groups: BTreeMap<String, (String, String)> = BTreeMap::new();
        let mut seen_pairs: BTreeSet<(String, String)> = BTreeSet::new();
        let mut group_id = 0usize;

        for pattern in &self.or_patterns {
            for caps in pattern.captures_iter(lower) {
                let raw_a = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
                let raw_b = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");

                // Sentence-scale captures are false positives.
                if raw_a.is_empty() || raw_b.is_empty() || raw_a.len() > 50 || raw_b.len() > 50 {
                    continue;
                }

                let clean_a = self.clean_skill_phrase(raw_a);
                let clean_b = self.clean_skill_phrase(raw_b);
                if clean_a.is_empty() || clean_b.is_empty() {
                    continue;
                }
                if matches!(clean_a.as_str(), "one" | "two" | "more" | "less" | "other" | "another")
                {
                    continue;
                }

                let skill_a = self.taxonomy.canonicalize(&clean_a);
                let skill_b = self.taxonomy.canonicalize(&clean_b);
                if skill_a == skill_b {
                    continue;
                }
                // Keep only groups anchored by at least one real skill.
                if !self.taxonomy.is_skill(&skill_a) && !self.taxonomy.is_skill(&skill_b) {
                    continue;
                }

                let pair_key = if skill_a <= skill_b {
                    (skill_a.clone(), skill_b.clone())
                } else {
                    (skill_b.clone(), skill_a.clone())
                };
                if !seen_pairs.insert(pair_key) {
                    continue;
                }

                groups.insert(format!("group_{group_id}"), (skill_a, skill_b));
                group_id += 1;
            }
        }

        groups
    }

    /// Strip punctuation and leading/trailing filler from a captured phrase.
    fn clean_skill_phrase(&self, phrase: &str) -> String {
        const LEADING_FILLER: &[&str] = &["using", "with", "by", "via", "like", "either"];
        const TRAILING_FILLER: &[&str] = &["and", "or"];
        let punctuation: &[char] = &['.', ',', ';', ':', '!', '?', '(', ')', '[', ']', '{', '}'];

        let trimmed = phrase.trim_matches(punctuation);
        let mut words: Vec<&str> = trimmed.split_whitespace().collect();

        while let Some(first) = words.first() {
            if self.taxonomy.is_stop_word(first)
                || self.taxonomy.is_non_skill(first)
                || LEADING_FILLER.contains(first)
            {
                words.remove(0);
            } else {
                break;
            }
        }
        while let Some(last) = words.last() {
            if self.taxonomy.is_stop_word(last)
                || self.taxonomy.is_non_skill(last)
                || TRAILING_FILLER.contains(last)
            {
                words.pop();
            } else {
                break;
            }
        }

        words.join(" ").trim_matches(punctuation).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> RequirementClassifier {
        let taxonomy = Arc::new(SkillTaxonomy::default());
        let extractor = Arc::new(SkillExtractor::new(taxonomy.clone()));
        RequirementClassifier::new(taxonomy, extractor)
    }

    #[test]
    fn test_must_and_nice_cues() {
        let set = classifier().classify("Must have: Python, AWS. Nice to have: Kubernetes.");
        assert!(set.must_have.contains("python"));
        assert!(set.must_have.contains("amazon web services"));
        assert!(set.nice_to_have.contains("kubernetes"));
        assert!(!set.must_have.contains("kubernetes"));
    }

    #[test]
    fn test_or_group_detection() {
        let set = classifier().classify("need tableau or power bi");
        assert_eq!(set.or_groups.len(), 1);
        let (a, b) = set.or_groups.values().next().unwrap();
        let pair: BTreeSet<&str> = [a.as_str(), b.as_str()].into_iter().collect();
        assert!(pair.contains("tableau"));
        assert!(pair.contains("power bi"));
    }

    #[test]
    fn test_or_members_excluded_from_flat_sets() {
        let set = classifier().classify("need tableau or power bi, and python is required");
        assert!(set.must_have.contains("python"));
        assert!(!set.must_have.contains("tableau"));
        assert!(!set.must_have.contains("power bi"));
        assert!(!set.nice_to_have.contains("tableau"));
    }

    #[test]
    fn test_slash_or_groups() {
        let set = classifier().classify("familiarity with mysql/postgresql needed");
        assert!(set
            .or_groups
            .values()
            .any(|(a, b)| (a == "mysql" && b == "postgresql") || (a == "postgresql" && b == "mysql")));
    }

    #[test]
    fn test_no_duplicate_or_groups() {
        let set = classifier().classify("tableau or power bi. we accept tableau or power bi.");
        let mut pairs: Vec<(String, String)> = set
            .or_groups
            .values()
            .map(|(a, b)| {
                if a <= b {
                    (a.clone(), b.clone())
                } else {
                    (b.clone(), a.clone())
                }
            })
            .collect();
        pairs.sort();
        let before = pairs.len();
        pairs.dedup();
        assert_eq!(before, pairs.len());
    }

    #[test]
    fn test_disjointness_invariant() {
        let set = classifier().classify(
            "Python required. Python is a plus. Must have docker. Docker preferred.",
        );
        assert!(set.must_have.is_disjoint(&set.nice_to_have));
    }

    #[test]
    fn test_soft_skills_default_to_nice() {
        let set = classifier().classify("we value teamwork, leadership and python");
        assert!(set.nice_to_have.contains("teamwork"));
        assert!(set.nice_to_have.contains("leadership"));
        assert!(set.must_have.contains("python"));
    }

    #[test]
    fn test_empty_text() {
        let set = classifier().classify("");
        assert!(set.must_have.is_empty());
        assert!(set.nice_to_have.is_empty());
        assert!(set.or_groups.is_empty());
    }
}
