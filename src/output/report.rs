//! Rendering of match reports to console, JSON and Markdown.

use crate::config::OutputConfig;
use crate::error::Result;
use crate::matching::engine::MatchReport;
use colored::Colorize;

/// Print a human-readable report to stdout.
pub fn render_console(report: &MatchReport, output: &OutputConfig) {
    if !output.color_output {
        colored::control::set_override(false);
    }

    println!();
    println!("{}", "=== ATS Match Report ===".bold());
    println!();

    let score_line = format!("Overall score: {:.2}/100", report.overall_score);
    let colored_score = if report.overall_score >= 75.0 {
        score_line.green().bold()
    } else if report.overall_score >= 50.0 {
        score_line.yellow().bold()
    } else {
        score_line.red().bold()
    };
    println!("{}", colored_score);
    println!();

    println!("{}", "Breakdown".bold());
    println!("  must-have:        {:.2}", report.breakdown.must_have_score);
    println!("  nice-to-have:     {:.2}", report.breakdown.nice_to_have_score);
    println!("  semantic:         {:.2}", report.breakdown.semantic_score);
    println!("  experience bonus: {:.2}", report.breakdown.experience_bonus);
    println!();

    if !report.insights.is_empty() {
        println!("{}", "Insights".bold());
        for insight in &report.insights {
            println!("  - {}", insight);
        }
        println!();
    }

    if output.detailed {
        render_detail_lists(report);
    }
}

fn render_detail_lists(report: &MatchReport) {
    if !report.must_have_matched.is_empty() {
        println!("{}", "Matched (must-have)".bold());
        for skill in &report.must_have_matched {
            println!("  {} {}", "+".green(), skill);
        }
    }
    if !report.must_have_partial.is_empty() {
        println!("{}", "Partial credit".bold());
        for (skill, credit) in &report.must_have_partial {
            println!("  {} {} ({})", "~".yellow(), skill, credit);
        }
    }
    if !report.must_have_missing.is_empty() {
        println!("{}", "Missing (must-have)".bold());
        for skill in &report.must_have_missing {
            println!("  {} {}", "-".red(), skill);
        }
    }
    if !report.nice_to_have_matched.is_empty() || !report.nice_to_have_missing.is_empty() {
        println!("{}", "Nice-to-have".bold());
        for skill in &report.nice_to_have_matched {
            println!("  {} {}", "+".green(), skill);
        }
        for skill in &report.nice_to_have_missing {
            println!("  {} {}", "-".red(), skill);
        }
    }
    if !report.experience_details.is_empty() {
        println!("{}", "Experience".bold());
        for (skill, years) in &report.experience_details {
            println!("  {}: {} year(s)", skill, years);
        }
    }
    if !report.section_scores.is_empty() {
        println!("{}", "Section scores".bold());
        for (section, score) in &report.section_scores {
            println!("  {}: {:.2}", section, score);
        }
    }
    if !report.or_groups_detected.is_empty() {
        println!("{}", "Alternative requirements".bold());
        for (group, (a, b)) in &report.or_groups_detected {
            println!("  {}: {} or {}", group, a, b);
        }
    }
    println!();
}

/// Serialize the full report as pretty JSON.
pub fn render_json(report: &MatchReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render the report as a Markdown document.
pub fn render_markdown(report: &MatchReport) -> String {
    let mut md = String::new();

    md.push_str("# ATS Match Report\n\n");
    md.push_str(&format!("**Overall score:** {:.2}/100\n\n", report.overall_score));

    md.push_str("## Breakdown\n\n");
    md.push_str("| Component | Score |\n|---|---|\n");
    md.push_str(&format!("| Must-have | {:.2} |\n", report.breakdown.must_have_score));
    md.push_str(&format!("| Nice-to-have | {:.2} |\n", report.breakdown.nice_to_have_score));
    md.push_str(&format!("| Semantic | {:.2} |\n", report.breakdown.semantic_score));
    md.push_str(&format!("| Experience bonus | {:.2} |\n\n", report.breakdown.experience_bonus));

    if !report.insights.is_empty() {
        md.push_str("## Insights\n\n");
        for insight in &report.insights {
            md.push_str(&format!("- {}\n", insight));
        }
        md.push('\n');
    }

    push_list(&mut md, "Matched (must-have)", &report.must_have_matched);
    if !report.must_have_partial.is_empty() {
        md.push_str("## Partial credit\n\n");
        for (skill, credit) in &report.must_have_partial {
            md.push_str(&format!("- {} ({})\n", skill, credit));
        }
        md.push('\n');
    }
    push_list(&mut md, "Missing (must-have)", &report.must_have_missing);
    push_list(&mut md, "Matched (nice-to-have)", &report.nice_to_have_matched);
    push_list(&mut md, "Missing (nice-to-have)", &report.nice_to_have_missing);

    if !report.experience_details.is_empty() {
        md.push_str("## Experience\n\n");
        for (skill, years) in &report.experience_details {
            md.push_str(&format!("- {}: {} year(s)\n", skill, years));
        }
        md.push('\n');
    }

    md
}

fn push_list(md: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    md.push_str(&format!("## {}\n\n", title));
    for item in items {
        md.push_str(&format!("- {}\n", item));
    }
    md.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::matching::engine::MatchEngine;

    fn sample_report() -> MatchReport {
        let engine = MatchEngine::new(&Config::default());
        engine.analyze(
            "must have python and docker. kubernetes is a plus.",
            "python developer, 4 years with docker in production",
        )
    }

    #[test]
    fn test_json_rendering_round_trips() {
        let report = sample_report();
        let json = render_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("overall_score").is_some());
        assert!(value.get("breakdown").is_some());
        assert!(value.get("must_have_matched").is_some());
    }

    #[test]
    fn test_markdown_contains_score_and_sections() {
        let report = sample_report();
        let markdown = render_markdown(&report);
        assert!(markdown.contains("# ATS Match Report"));
        assert!(markdown.contains("Overall score"));
        assert!(markdown.contains("Must-have"));
    }
}
