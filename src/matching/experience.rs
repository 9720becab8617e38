//! Per-skill years-of-experience estimation from candidate text.

use regex::Regex;
use std::collections::HashMap;
use std::sync::Mutex;

const MAX_YEARS: u32 = 15;
const CONTEXT_WINDOW: usize = 300;

/// Estimates how many years of experience the candidate text claims for a
/// given skill. Returns 0 when no duration is attributable to the skill.
///
/// Per-skill regexes are compiled once and cached for the estimator's
/// lifetime; the skill vocabulary is finite, so the cache stays small.
pub struct ExperienceEstimator {
    job_context: Regex,
    skill_patterns: Mutex<HashMap<String, Vec<Regex>>>,
}

impl Default for ExperienceEstimator {
    fn default() -> Self {
        Self::new()
    }
}

fn compile_skill_patterns(escaped: &str) -> Vec<Regex> {
    let shapes = [
        // "5 years of experience with python"
        format!(r"(\d+)\s*\+?\s*years?\s*(?:of\s*)?(?:experience\s*)?(?:with\s*)?(?:in\s*)?{escaped}"),
        // "python for 5 years"
        format!(r"{escaped}\s*(?:for\s*)?(\d+)\s*\+?\s*years?"),
        // "python (5 years)"
        format!(r"{escaped}\s*\((\d+)\s*\+?\s*years?\)"),
        // "python ... for/over 5 years"
        format!(r"{escaped}.*?(?:for|over)\s+(\d+)\s*\+?\s*years?"),
        // "5 years ... python"
        format!(r"(\d+)\s*\+?\s*years?.*?{escaped}"),
    ];

    shapes
        .iter()
        .filter_map(|shape| match Regex::new(shape) {
            Ok(regex) => Some(regex),
            Err(e) => {
                log::debug!("skipping experience pattern {shape:?}: {e}");
                None
            }
        })
        .collect()
}

impl ExperienceEstimator {
    pub fn new() -> Self {
        let job_context =
            Regex::new(r"(?:at|with)\s+[\w\s&]+?(?:for|over)\s+(\d+)\s*\+?\s*years?").unwrap();
        Self {
            job_context,
            skill_patterns: Mutex::new(HashMap::new()),
        }
    }

    fn patterns_for(&self, skill_lower: &str) -> Vec<Regex> {
        let mut cache = self.skill_patterns.lock().unwrap_or_else(|e| e.into_inner());
        cache
            .entry(skill_lower.to_string())
            .or_insert_with(|| compile_skill_patterns(&regex::escape(skill_lower)))
            .clone()
    }

    /// Maximum years claimed for `skill` anywhere in `candidate_text`,
    /// capped at 15.
    pub fn estimate_years(&self, candidate_text: &str, skill: &str) -> u32 {
        let text = candidate_text.to_lowercase();
        let skill_lower = skill.to_lowercase();

        let mut max_years = 0u32;
        for regex in self.patterns_for(&skill_lower) {
            for caps in regex.captures_iter(&text) {
                if let Some(years) = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok()) {
                    max_years = max_years.max(years);
                }
            }
        }

        // Fallback: "at <employer> for N years" counts when the skill is
        // mentioned nearby.
        if max_years == 0 {
            for caps in self.job_context.captures_iter(&text) {
                let Some(years) = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok()) else {
                    continue;
                };
                let position = caps.get(0).map(|m| m.start()).unwrap_or(0);
                let context = window(&text, position, CONTEXT_WINDOW);
                if context.contains(&skill_lower)
                    || skill_lower.split_whitespace().any(|word| context.contains(word))
                {
                    max_years = max_years.max(years);
                }
            }
        }

        max_years.min(MAX_YEARS)
    }
}

/// Slice up to `radius` bytes either side of `center`, snapped to char
/// boundaries.
fn window(text: &str, center: usize, radius: usize) -> &str {
    let mut start = center.saturating_sub(radius);
    while !text.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = (center + radius).min(text.len());
    while !text.is_char_boundary(end) {
        end += 1;
    }
    &text[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_years_before_skill() {
        let estimator = ExperienceEstimator::new();
        let text = "5 years of experience with python";
        assert_eq!(estimator.estimate_years(text, "python"), 5);
    }

    #[test]
    fn test_skill_before_years() {
        let estimator = ExperienceEstimator::new();
        assert_eq!(estimator.estimate_years("used tableau for 3 years", "tableau"), 3);
        assert_eq!(estimator.estimate_years("docker (4 years)", "docker"), 4);
    }

    #[test]
    fn test_years_anywhere_before_skill() {
        let estimator = ExperienceEstimator::new();
        let text = "over 6 years building dashboards, mostly in tableau";
        assert_eq!(estimator.estimate_years(text, "tableau"), 6);
    }

    #[test]
    fn test_job_context_fallback() {
        let estimator = ExperienceEstimator::new();
        let text = "worked at acme corp for 7 years maintaining kubernetes clusters";
        assert_eq!(estimator.estimate_years(text, "kubernetes"), 7);
    }

    #[test]
    fn test_no_experience_claim() {
        let estimator = ExperienceEstimator::new();
        assert_eq!(estimator.estimate_years("python developer", "python"), 0);
    }

    #[test]
    fn test_skills_with_regex_metacharacters() {
        let estimator = ExperienceEstimator::new();
        assert_eq!(estimator.estimate_years("c++ for 4 years", "c++"), 4);
        assert_eq!(estimator.estimate_years("node.js (6 years)", "node.js"), 6);
    }

    #[test]
    fn test_cached_patterns_give_stable_results() {
        let estimator = ExperienceEstimator::new();
        let text = "5 years of experience with python";
        let first = estimator.estimate_years(text, "python");
        let second = estimator.estimate_years(text, "python");
        assert_eq!(first, 5);
        assert_eq!(first, second);
    }

    #[test]
    fn test_years_are_capped() {
        let estimator = ExperienceEstimator::new();
        let text = "30 years of experience with sql";
        assert_eq!(estimator.estimate_years(text, "sql"), 15);
    }

    #[test]
    fn test_unrelated_duration_not_attributed() {
        let estimator = ExperienceEstimator::new();
        let text = "figma for 8 years";
        assert_eq!(estimator.estimate_years(text, "kubernetes"), 0);
    }
}
