//! Equivalence-based partial credit and requirement resolution.

use crate::matching::classifier::RequirementSet;
use crate::taxonomy::SkillTaxonomy;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Exact matches, partial credits and misses for one requirement set.
#[derive(Debug, Clone, Default)]
pub struct MatchOutcome {
    pub must_have_matched: BTreeSet<String>,
    pub must_have_missing: BTreeSet<String>,
    /// Requirement (or `"(a or b)"` group label) -> credit in (0.0, 1.0).
    pub partial_matches: BTreeMap<String, f64>,
    pub nice_to_have_matched: BTreeSet<String>,
    pub nice_to_have_missing: BTreeSet<String>,
    /// Individually required skills matched exactly.
    pub individual_exact: usize,
    /// OR-groups with at least one member matched exactly.
    pub or_groups_exact: usize,
}

/// Grants full or partial credit for a required skill against a candidate set.
pub struct SimilarityScorer {
    taxonomy: Arc<SkillTaxonomy>,
}

impl SimilarityScorer {
    pub fn new(taxonomy: Arc<SkillTaxonomy>) -> Self {
        Self { taxonomy }
    }

    /// Credit in {0.0, 0.7, 0.8, 0.95, 1.0}, first matching rule wins.
    pub fn credit(&self, required: &str, candidate_skills: &BTreeSet<String>) -> f64 {
        if candidate_skills.contains(required) {
            return 1.0;
        }

        // Same-category substitute, e.g. one BI tool for another.
        if self
            .taxonomy
            .equivalents_of(required)
            .iter()
            .any(|equiv| candidate_skills.contains(equiv))
        {
            return 0.95;
        }

        // Candidate holds a narrower/adjacent tool under the requirement.
        if self
            .taxonomy
            .related_to(required)
            .iter()
            .any(|related| candidate_skills.contains(related))
        {
            return 0.7;
        }

        // Reverse containment: candidate's broader competency covers the
        // specific requirement.
        if self
            .taxonomy
            .broader_of(required)
            .any(|broad| candidate_skills.contains(broad))
        {
            return 0.8;
        }

        0.0
    }

    /// Resolve every requirement unit against the expanded candidate set.
    pub fn resolve(
        &self,
        requirements: &RequirementSet,
        candidate_skills: &BTreeSet<String>,
    ) -> MatchOutcome {
        let mut outcome = MatchOutcome::default();

        // OR-groups first: either member satisfies the whole unit.
        for (skill_a, skill_b) in requirements.or_groups.values() {
            let members = [skill_a, skill_b];
            let present: Vec<&String> = members
                .iter()
                .copied()
                .filter(|s| candidate_skills.contains(*s))
                .collect();

            if !present.is_empty() {
                outcome
                    .must_have_matched
                    .extend(present.into_iter().cloned());
                outcome.or_groups_exact += 1;
                continue;
            }

            let label = format!("({skill_a} or {skill_b})");
            let best = members
                .iter()
                .map(|s| self.credit(s, candidate_skills))
                .fold(0.0_f64, f64::max);
            if best > 0.0 {
                outcome.partial_matches.insert(label, best);
            } else {
                outcome.must_have_missing.insert(label);
            }
        }

        // Individual must-have skills.
        for skill in &requirements.must_have {
            if candidate_skills.contains(skill) {
                outcome.must_have_matched.insert(skill.clone());
                outcome.individual_exact += 1;
                continue;
            }
            let credit = self.credit(skill, candidate_skills);
            if credit > 0.0 {
                outcome.partial_matches.insert(skill.clone(), credit);
            } else {
                outcome.must_have_missing.insert(skill.clone());
            }
        }

        // Nice-to-have skills never earn partial credit.
        for skill in &requirements.nice_to_have {
            if candidate_skills.contains(skill) {
                outcome.nice_to_have_matched.insert(skill.clone());
            } else {
                outcome.nice_to_have_missing.insert(skill.clone());
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> SimilarityScorer {
        SimilarityScorer::new(Arc::new(SkillTaxonomy::default()))
    }

    fn set(skills: &[&str]) -> BTreeSet<String> {
        skills.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_match_full_credit() {
        assert_eq!(scorer().credit("python", &set(&["python", "docker"])), 1.0);
    }

    #[test]
    fn test_equivalent_tool_near_full_credit() {
        assert_eq!(scorer().credit("tableau", &set(&["looker"])), 0.95);
        assert_eq!(scorer().credit("amazon web services", &set(&["microsoft azure"])), 0.95);
    }

    #[test]
    fn test_related_skill_moderate_credit() {
        assert_eq!(scorer().credit("python", &set(&["django"])), 0.7);
        assert_eq!(scorer().credit("machine learning", &set(&["pytorch"])), 0.7);
    }

    #[test]
    fn test_broader_skill_reverse_credit() {
        // Candidate holds "python"; requirement "flask" sits under it.
        assert_eq!(scorer().credit("flask", &set(&["python"])), 0.8);
    }

    #[test]
    fn test_no_relation_zero_credit() {
        assert_eq!(scorer().credit("figma", &set(&["kubernetes"])), 0.0);
    }

    #[test]
    fn test_credit_stays_in_allowed_range() {
        let scorer = scorer();
        let candidates = [
            set(&["python"]),
            set(&["looker", "django"]),
            set(&[]),
            set(&["docker", "kubernetes", "terraform"]),
        ];
        let allowed = [0.0, 0.7, 0.8, 0.95, 1.0];
        for candidate in &candidates {
            for required in ["python", "tableau", "flask", "devops", "figma"] {
                let credit = scorer.credit(required, candidate);
                assert!(
                    allowed.contains(&credit),
                    "credit {credit} for {required} out of range"
                );
            }
        }
    }

    #[test]
    fn test_or_group_exact_member() {
        let mut requirements = RequirementSet::default();
        requirements
            .or_groups
            .insert("group_0".to_string(), ("tableau".to_string(), "power bi".to_string()));

        let outcome = scorer().resolve(&requirements, &set(&["power bi"]));
        assert_eq!(outcome.or_groups_exact, 1);
        assert!(outcome.must_have_matched.contains("power bi"));
        assert!(outcome.partial_matches.is_empty());
        assert!(outcome.must_have_missing.is_empty());
    }

    #[test]
    fn test_or_group_partial_via_equivalent() {
        let mut requirements = RequirementSet::default();
        requirements
            .or_groups
            .insert("group_0".to_string(), ("tableau".to_string(), "power bi".to_string()));

        let outcome = scorer().resolve(&requirements, &set(&["looker"]));
        assert_eq!(outcome.or_groups_exact, 0);
        assert_eq!(
            outcome.partial_matches.get("(tableau or power bi)"),
            Some(&0.95)
        );
        assert!(outcome.must_have_missing.is_empty());
    }

    #[test]
    fn test_or_group_missing() {
        let mut requirements = RequirementSet::default();
        requirements
            .or_groups
            .insert("group_0".to_string(), ("figma".to_string(), "sketch".to_string()));

        let outcome = scorer().resolve(&requirements, &set(&["kubernetes"]));
        assert!(outcome.must_have_missing.contains("(figma or sketch)"));
    }

    #[test]
    fn test_individual_partial_and_missing() {
        let mut requirements = RequirementSet::default();
        requirements.must_have = set(&["python", "figma"]);

        let outcome = scorer().resolve(&requirements, &set(&["django"]));
        assert_eq!(outcome.partial_matches.get("python"), Some(&0.7));
        assert!(outcome.must_have_missing.contains("figma"));
        assert_eq!(outcome.individual_exact, 0);
    }

    #[test]
    fn test_nice_to_have_split() {
        let mut requirements = RequirementSet::default();
        requirements.nice_to_have = set(&["kubernetes", "teamwork"]);

        let outcome = scorer().resolve(&requirements, &set(&["kubernetes"]));
        assert!(outcome.nice_to_have_matched.contains("kubernetes"));
        assert!(outcome.nice_to_have_missing.contains("teamwork"));
    }
}
