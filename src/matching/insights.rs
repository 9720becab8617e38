//! Advisory insight generation.
//!
//! A pure, ordered rule table: each rule is a predicate over the aggregate
//! match picture plus a message builder, evaluated top to bottom. Insights
//! carry no scoring weight.

use std::collections::BTreeMap;

/// Everything the rule table is allowed to look at.
#[derive(Debug, Clone, Default)]
pub struct InsightContext {
    pub must_matched: usize,
    pub must_missing: usize,
    pub missing_names: Vec<String>,
    pub partial_names: Vec<String>,
    pub nice_matched: usize,
    pub semantic_score: f64,
    pub experience_years: BTreeMap<String, u32>,
}

impl InsightContext {
    fn partial_count(&self) -> usize {
        self.partial_names.len()
    }

    fn total_required(&self) -> usize {
        self.must_matched + self.must_missing + self.partial_count()
    }

    fn avg_years(&self) -> f64 {
        if self.experience_years.is_empty() {
            return 0.0;
        }
        let total: u32 = self.experience_years.values().sum();
        total as f64 / self.experience_years.len() as f64
    }

    fn max_years(&self) -> u32 {
        self.experience_years.values().copied().max().unwrap_or(0)
    }
}

/// Evaluate the rule table, first matching rule per band wins.
pub fn generate_insights(ctx: &InsightContext) -> Vec<String> {
    let mut insights = Vec::new();

    // Band 1: skill match quality.
    if ctx.must_missing == 0 && ctx.partial_count() == 0 {
        insights.push("Perfect match: all required skills present".to_string());
    } else if ctx.must_missing == 0 {
        insights.push(format!(
            "Strong match: has related skills for {} requirement(s)",
            ctx.partial_count()
        ));
    } else if ctx.must_missing <= 2 && ctx.total_required() > 0 {
        let match_rate =
            (ctx.must_matched + ctx.partial_count()) as f64 / ctx.total_required() as f64;
        if match_rate >= 0.8 {
            insights.push(format!(
                "Good match: minor gaps in {} skill(s)",
                ctx.must_missing
            ));
        } else {
            let shown: Vec<&str> = ctx
                .missing_names
                .iter()
                .take(2)
                .map(String::as_str)
                .collect();
            insights.push(format!("Missing: {}", shown.join(", ")));
        }
    } else if ctx.must_missing > 2 {
        insights.push(format!(
            "Skill gap: {} required skills not found",
            ctx.must_missing
        ));
    }

    // Band 2: partial-credit details.
    if !ctx.partial_names.is_empty() {
        let shown: Vec<&str> = ctx
            .partial_names
            .iter()
            .take(2)
            .map(String::as_str)
            .collect();
        insights.push(format!("Has related experience in: {}", shown.join(", ")));
    }

    // Band 3: experience level.
    if ctx.experience_years.is_empty() {
        insights.push("Experience details not specified in resume".to_string());
    } else if ctx.max_years() >= 5 {
        insights.push(format!(
            "Senior level: {}+ years in key skills",
            ctx.max_years()
        ));
    } else if ctx.avg_years() >= 3.0 {
        insights.push(format!(
            "Mid level: ~{:.0} years average experience",
            ctx.avg_years()
        ));
    } else if ctx.avg_years() >= 1.0 {
        insights.push(format!(
            "Junior level: ~{:.0} years experience",
            ctx.avg_years()
        ));
    } else {
        insights.push("Entry level candidate".to_string());
    }

    // Band 4: contextual fit from the semantic signal.
    if ctx.semantic_score > 80.0 {
        insights.push("Excellent cultural and contextual fit".to_string());
    } else if ctx.semantic_score > 65.0 {
        insights.push("Good overall alignment with role".to_string());
    } else if ctx.semantic_score > 50.0 {
        insights.push("Moderate fit - review context carefully".to_string());
    } else {
        insights.push("Limited contextual alignment".to_string());
    }

    // Band 5: nice-to-have bonus.
    if ctx.nice_matched >= 3 {
        insights.push(format!(
            "Bonus: {} preferred skills found",
            ctx.nice_matched
        ));
    } else if ctx.nice_matched > 0 {
        insights.push(format!(
            "Has {} additional preferred skill(s)",
            ctx.nice_matched
        ));
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_match_insight() {
        let ctx = InsightContext {
            must_matched: 3,
            ..Default::default()
        };
        let insights = generate_insights(&ctx);
        assert!(insights[0].starts_with("Perfect match"));
    }

    #[test]
    fn test_partial_only_is_strong_match() {
        let ctx = InsightContext {
            must_matched: 2,
            partial_names: vec!["(tableau or power bi)".to_string()],
            ..Default::default()
        };
        let insights = generate_insights(&ctx);
        assert!(insights[0].starts_with("Strong match"));
        assert!(insights
            .iter()
            .any(|insight| insight.contains("(tableau or power bi)")));
    }

    #[test]
    fn test_large_gap_insight() {
        let ctx = InsightContext {
            must_missing: 4,
            missing_names: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            ..Default::default()
        };
        let insights = generate_insights(&ctx);
        assert!(insights[0].contains("4 required skills not found"));
    }

    #[test]
    fn test_experience_bands() {
        let mut senior = InsightContext::default();
        senior.experience_years.insert("python".into(), 8);
        assert!(generate_insights(&senior)
            .iter()
            .any(|insight| insight.starts_with("Senior level")));

        let none = InsightContext::default();
        assert!(generate_insights(&none)
            .iter()
            .any(|insight| insight.contains("not specified")));
    }

    #[test]
    fn test_semantic_bands() {
        let high = InsightContext {
            semantic_score: 90.0,
            ..Default::default()
        };
        assert!(generate_insights(&high)
            .iter()
            .any(|insight| insight.contains("Excellent")));

        let low = InsightContext {
            semantic_score: 10.0,
            ..Default::default()
        };
        assert!(generate_insights(&low)
            .iter()
            .any(|insight| insight.contains("Limited contextual alignment")));
    }

    #[test]
    fn test_nice_to_have_bonus() {
        let ctx = InsightContext {
            nice_matched: 3,
            ..Default::default()
        };
        assert!(generate_insights(&ctx)
            .iter()
            .any(|insight| insight.contains("3 preferred skills")));
    }
}
