//! Semantic similarity scoring between requirement and candidate texts.

pub mod embeddings;

pub use embeddings::{cosine_similarity, HashedEmbedder, TextEmbedder};

use regex::Regex;
use std::collections::BTreeMap;

/// Overall and per-section semantic scores, both on a 0-100 scale.
#[derive(Debug, Clone, Default)]
pub struct SemanticScores {
    pub overall: f64,
    pub sections: BTreeMap<String, f64>,
}

/// Scores a (requirement, candidate) text pair with one embedding pass per
/// text plus one per recognized candidate section.
pub struct SemanticAnalyzer {
    embedder: Box<dyn TextEmbedder>,
    section_patterns: Vec<(&'static str, Regex)>,
    min_section_len: usize,
}

impl SemanticAnalyzer {
    pub fn new(embedder: Box<dyn TextEmbedder>, min_section_len: usize) -> Self {
        let section_patterns = vec![
            (
                "experience",
                Regex::new(r"(?:work\s+)?experience|employment\s+history|professional\s+experience")
                    .unwrap(),
            ),
            (
                "education",
                Regex::new(r"education|academic\s+background|qualifications").unwrap(),
            ),
            (
                "skills",
                Regex::new(r"(?:technical\s+)?skills|competencies|expertise").unwrap(),
            ),
            ("projects", Regex::new(r"projects|portfolio").unwrap()),
        ];

        Self {
            embedder,
            section_patterns,
            min_section_len,
        }
    }

    /// Score the full texts and each recognized candidate section against the
    /// requirement text.
    pub fn score(&self, requirement_text: &str, candidate_text: &str) -> SemanticScores {
        let requirement_vec = self.embedder.embed(requirement_text);
        let candidate_vec = self.embedder.embed(candidate_text);
        let overall = f64::from(cosine_similarity(&requirement_vec, &candidate_vec)) * 100.0;

        let mut sections = BTreeMap::new();
        for (name, content) in self.extract_sections(candidate_text) {
            if content.len() <= self.min_section_len {
                continue;
            }
            let section_vec = self.embedder.embed(&content);
            let similarity = f64::from(cosine_similarity(&requirement_vec, &section_vec)) * 100.0;
            sections.insert(name, similarity);
        }

        SemanticScores { overall, sections }
    }

    /// Line-based section splitter: a short line matching a header pattern
    /// opens a section; following lines accumulate until the next header.
    fn extract_sections(&self, text: &str) -> BTreeMap<String, String> {
        let mut sections: BTreeMap<String, String> = BTreeMap::new();
        let mut current: Option<&'static str> = None;

        for line in text.lines() {
            let line_lower = line.to_lowercase();
            let trimmed = line_lower.trim();

            let header = self
                .section_patterns
                .iter()
                .find(|(_, pattern)| trimmed.len() < 50 && pattern.is_match(trimmed))
                .map(|(name, _)| *name);

            if let Some(name) = header {
                current = Some(name);
                sections.entry(name.to_string()).or_default();
            } else if let Some(name) = current {
                let entry = sections.entry(name.to_string()).or_default();
                entry.push_str(line);
                entry.push('\n');
            }
        }

        sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Constant-vector stub proving the embedder seam is substitutable.
    struct StubEmbedder;

    impl TextEmbedder for StubEmbedder {
        fn embed(&self, text: &str) -> Vec<f32> {
            if text.is_empty() {
                vec![0.0, 0.0]
            } else {
                vec![1.0, 0.0]
            }
        }

        fn dimension(&self) -> usize {
            2
        }
    }

    #[test]
    fn test_stub_embedder_substitution() {
        let analyzer = SemanticAnalyzer::new(Box::new(StubEmbedder), 20);
        let scores = analyzer.score("any requirement", "any candidate");
        assert!((scores.overall - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_texts_score_zero() {
        let analyzer = SemanticAnalyzer::new(Box::new(HashedEmbedder::default()), 20);
        let scores = analyzer.score("", "");
        assert_eq!(scores.overall, 0.0);
    }

    #[test]
    fn test_similar_texts_score_high() {
        let analyzer = SemanticAnalyzer::new(Box::new(HashedEmbedder::default()), 20);
        let requirement = "python developer building aws services";
        let candidate = "python developer building aws services and dashboards";
        let scores = analyzer.score(requirement, candidate);
        assert!(scores.overall > 50.0);
    }

    #[test]
    fn test_section_extraction() {
        let analyzer = SemanticAnalyzer::new(Box::new(HashedEmbedder::default()), 5);
        let resume = "Skills\npython, aws, docker and terraform\n\nWork Experience\nbuilt data pipelines on amazon web services\n";
        let scores = analyzer.score("python and aws pipelines", resume);
        assert!(scores.sections.contains_key("skills"));
        assert!(scores.sections.contains_key("experience"));
    }

    #[test]
    fn test_short_sections_skipped() {
        let analyzer = SemanticAnalyzer::new(Box::new(HashedEmbedder::default()), 100);
        let resume = "Skills\npython\n";
        let scores = analyzer.score("python", resume);
        assert!(scores.sections.is_empty());
    }
}
