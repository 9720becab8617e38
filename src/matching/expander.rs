//! One-hop expansion of candidate skills through the implication table.

use crate::taxonomy::SkillTaxonomy;
use std::collections::BTreeSet;

/// Returns `raw_skills` plus every skill implied by a raw skill.
///
/// Exactly one hop: implications of implied skills are never chased, which
/// keeps inference bounded and predictable.
pub fn expand(taxonomy: &SkillTaxonomy, raw_skills: &BTreeSet<String>) -> BTreeSet<String> {
    let mut expanded = raw_skills.clone();
    for skill in raw_skills {
        for implied in taxonomy.implied_by(skill) {
            expanded.insert(implied.clone());
        }
    }
    expanded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expansion_includes_raw_skills() {
        let taxonomy = SkillTaxonomy::default();
        let raw: BTreeSet<String> = ["tableau".to_string()].into_iter().collect();
        let expanded = expand(&taxonomy, &raw);
        assert!(expanded.contains("tableau"));
        assert!(expanded.contains("data visualization"));
        assert!(expanded.contains("business intelligence"));
    }

    #[test]
    fn test_expansion_is_single_hop() {
        // next.js implies react; react implies javascript. One hop from
        // next.js must include react but only react's own mention of
        // javascript... which is a second hop and must NOT appear.
        let taxonomy = SkillTaxonomy::from_tables(
            vec![
                ("next.js".to_string(), "next.js".to_string()),
                ("react".to_string(), "react".to_string()),
                ("javascript".to_string(), "javascript".to_string()),
            ],
            vec![],
            vec![],
            vec![
                ("next.js".to_string(), vec!["react".to_string()]),
                ("react".to_string(), vec!["javascript".to_string()]),
            ],
            vec![],
            vec![],
        );
        let raw: BTreeSet<String> = ["next.js".to_string()].into_iter().collect();
        let expanded = expand(&taxonomy, &raw);
        assert!(expanded.contains("react"));
        assert!(!expanded.contains("javascript"));
    }

    #[test]
    fn test_skills_without_implications_pass_through() {
        let taxonomy = SkillTaxonomy::default();
        let raw: BTreeSet<String> = ["communication skills".to_string()].into_iter().collect();
        assert_eq!(expand(&taxonomy, &raw), raw);
    }
}
