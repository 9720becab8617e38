//! Match engine: wires extraction, classification, expansion, similarity,
//! experience and semantic signals into one bounded, explainable score.

use crate::config::{Config, ScoringConfig};
use crate::matching::classifier::RequirementClassifier;
use crate::matching::expander;
use crate::matching::experience::ExperienceEstimator;
use crate::matching::extractor::SkillExtractor;
use crate::matching::insights::{generate_insights, InsightContext};
use crate::matching::similarity::SimilarityScorer;
use crate::semantic::{HashedEmbedder, SemanticAnalyzer, TextEmbedder};
use crate::taxonomy::SkillTaxonomy;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Component scores feeding the overall score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreBreakdown {
    pub must_have_score: f64,
    pub nice_to_have_score: f64,
    pub semantic_score: f64,
    pub experience_bonus: f64,
}

/// Full analysis result for one (requirement, candidate) pair.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub overall_score: f64,
    pub breakdown: ScoreBreakdown,
    pub must_have_matched: Vec<String>,
    pub must_have_missing: Vec<String>,
    /// Requirement or OR-group label -> partial credit as a percentage string.
    pub must_have_partial: BTreeMap<String, String>,
    pub nice_to_have_matched: Vec<String>,
    pub nice_to_have_missing: Vec<String>,
    pub experience_details: BTreeMap<String, u32>,
    pub insights: Vec<String>,
    pub section_scores: BTreeMap<String, f64>,
    pub or_groups_detected: BTreeMap<String, (String, String)>,
}

/// The analysis engine. Purely a function of its inputs plus the immutable
/// taxonomy: `analyze` calls are independent, side-effect-free and safe to
/// run from any number of threads.
pub struct MatchEngine {
    taxonomy: Arc<SkillTaxonomy>,
    extractor: Arc<SkillExtractor>,
    classifier: RequirementClassifier,
    similarity: SimilarityScorer,
    experience: ExperienceEstimator,
    semantic: SemanticAnalyzer,
    scoring: ScoringConfig,
}

impl MatchEngine {
    /// Engine with the default taxonomy and the hashed embedder.
    pub fn new(config: &Config) -> Self {
        Self::with_taxonomy(Arc::new(SkillTaxonomy::default()), config)
    }

    /// Engine over an injected taxonomy (test isolation, alternate domains).
    pub fn with_taxonomy(taxonomy: Arc<SkillTaxonomy>, config: &Config) -> Self {
        let embedder = Box::new(HashedEmbedder::new(config.processing.embedding_dim));
        Self::with_parts(taxonomy, embedder, config)
    }

    /// Fully injected construction: taxonomy plus embedding handle.
    pub fn with_parts(
        taxonomy: Arc<SkillTaxonomy>,
        embedder: Box<dyn TextEmbedder>,
        config: &Config,
    ) -> Self {
        let extractor = Arc::new(SkillExtractor::new(taxonomy.clone()));
        let classifier = RequirementClassifier::new(taxonomy.clone(), extractor.clone());
        let similarity = SimilarityScorer::new(taxonomy.clone());
        let semantic = SemanticAnalyzer::new(embedder, config.processing.min_section_chars);

        Self {
            taxonomy,
            extractor,
            classifier,
            similarity,
            experience: ExperienceEstimator::new(),
            semantic,
            scoring: config.scoring.clone(),
        }
    }

    /// Score how well `candidate_text` satisfies `requirement_text`.
    pub fn analyze(&self, requirement_text: &str, candidate_text: &str) -> MatchReport {
        let requirement_skills = self.extractor.extract(requirement_text);
        let candidate_raw = self.extractor.extract(candidate_text);
        let candidate_expanded = expander::expand(&self.taxonomy, &candidate_raw);

        let requirements = self.classifier.classify(requirement_text);
        log::debug!(
            "classified {} must-have, {} nice-to-have, {} or-group(s)",
            requirements.must_have.len(),
            requirements.nice_to_have.len(),
            requirements.or_groups.len()
        );

        let outcome = self.similarity.resolve(&requirements, &candidate_expanded);

        // Experience counts only for skills the candidate mentioned
        // explicitly, never for implied ones.
        let mut experience_details = BTreeMap::new();
        for skill in &outcome.must_have_matched {
            if candidate_raw.contains(skill) {
                let years = self.experience.estimate_years(candidate_text, skill);
                if years > 0 {
                    experience_details.insert(skill.clone(), years);
                }
            }
        }

        let semantic = self.semantic.score(requirement_text, candidate_text);

        // Score composition.
        let total_requirements = requirements.total_requirements();
        let must_have_score = if total_requirements == 0 {
            // An empty requirement set is trivially satisfied.
            100.0
        } else {
            let partial_credit: f64 = outcome.partial_matches.values().sum();
            let matched_units =
                (outcome.individual_exact + outcome.or_groups_exact) as f64 + partial_credit;
            (matched_units / total_requirements as f64 * 100.0).min(100.0)
        };

        let nice_to_have_score = if requirements.nice_to_have.is_empty() {
            0.0
        } else {
            outcome.nice_to_have_matched.len() as f64 / requirements.nice_to_have.len() as f64
                * 100.0
        };

        let experience_bonus = experience_bonus(&experience_details);

        let coverage = (candidate_raw.len() as f64 / requirement_skills.len().max(1) as f64
            * 100.0)
            .min(100.0);

        let weights = &self.scoring;
        let final_score = must_have_score * weights.must_have_weight
            + semantic.overall * weights.semantic_weight
            + nice_to_have_score * weights.nice_to_have_weight
            + experience_bonus * weights.experience_weight
            + coverage * weights.coverage_weight;
        let overall_score = final_score.clamp(0.0, 100.0);

        let insights = generate_insights(&InsightContext {
            must_matched: outcome.must_have_matched.len(),
            must_missing: outcome.must_have_missing.len(),
            missing_names: outcome.must_have_missing.iter().cloned().collect(),
            partial_names: outcome.partial_matches.keys().cloned().collect(),
            nice_matched: outcome.nice_to_have_matched.len(),
            semantic_score: semantic.overall,
            experience_years: experience_details.clone(),
        });

        MatchReport {
            overall_score: round2(overall_score),
            breakdown: ScoreBreakdown {
                must_have_score: round2(must_have_score),
                nice_to_have_score: round2(nice_to_have_score),
                semantic_score: round2(semantic.overall),
                experience_bonus: round2(experience_bonus),
            },
            must_have_matched: outcome.must_have_matched.into_iter().collect(),
            must_have_missing: outcome.must_have_missing.into_iter().collect(),
            must_have_partial: outcome
                .partial_matches
                .into_iter()
                .map(|(skill, credit)| (skill, format!("{:.0}%", credit * 100.0)))
                .collect(),
            nice_to_have_matched: outcome.nice_to_have_matched.into_iter().collect(),
            nice_to_have_missing: outcome.nice_to_have_missing.into_iter().collect(),
            experience_details,
            insights,
            section_scores: semantic
                .sections
                .into_iter()
                .map(|(name, score)| (name, round2(score)))
                .collect(),
            or_groups_detected: requirements.or_groups,
        }
    }

    pub fn skill_count(&self) -> usize {
        self.taxonomy.skill_count()
    }
}

/// Bonus from average years over the skills with detected experience:
/// senior (>=5y) 15, mid (>=3y) 10, junior (>=1y) 5, else 0.
fn experience_bonus(details: &BTreeMap<String, u32>) -> f64 {
    let total: u32 = details.values().sum();
    let avg = total as f64 / details.len().max(1) as f64;

    if avg >= 5.0 {
        15.0
    } else if avg >= 3.0 {
        10.0
    } else if avg >= 1.0 {
        5.0
    } else {
        0.0
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
