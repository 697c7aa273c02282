//! Console and JSON rendering of score reports

use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;
use crate::pipeline::analyzer::ScoreReport;
use crate::pipeline::recommend::Severity;
use colored::{Color, Colorize};

pub struct OutputFormatter {
    config: OutputConfig,
}

impl OutputFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn format_report(&self, report: &ScoreReport) -> Result<String> {
        match self.config.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Console => Ok(self.format_console(report)),
        }
    }

    fn format_console(&self, report: &ScoreReport) -> String {
        let mut out = String::new();

        out.push_str(&self.heading("ATS Analysis Results"));
        out.push('\n');

        let score_line = format!("  Match score: {}% ({})", report.score, report.label.as_str());
        out.push_str(&self.colorize(&score_line, score_color(report.score)));
        out.push('\n');
        out.push_str(&format!(
            "  Resume keywords: {}   Job keywords: {}\n",
            report.resume_keyword_count, report.job_keyword_count
        ));
        out.push_str(&format!(
            "  Exact matches: {}   Soft matches: {}\n\n",
            report.exact_matches.len(),
            report.soft_matches.len()
        ));

        if !report.exact_matches.is_empty() {
            out.push_str(&self.heading("Matched Keywords"));
            out.push_str(&format!("  {}\n\n", report.exact_matches.join(", ")));
        }

        if !report.soft_matches.is_empty() {
            out.push_str(&self.heading("Related Keywords"));
            for soft in &report.soft_matches {
                out.push_str(&format!(
                    "  {} ~ {} ({:.0}%)\n",
                    soft.resume_keyword,
                    soft.job_keyword,
                    soft.confidence * 100.0
                ));
            }
            out.push('\n');
        }

        if !report.missing_keywords.is_empty() {
            out.push_str(&self.heading("Missing Keywords"));
            out.push_str(&format!("  {}\n\n", report.missing_keywords.join(", ")));
        }

        out.push_str(&self.heading("Recommendations"));
        for finding in &report.findings {
            let line = format!(
                "  {} {}: {}",
                severity_icon(finding.severity),
                finding.title,
                finding.detail
            );
            out.push_str(&self.colorize(&line, severity_color(finding.severity)));
            out.push('\n');
        }

        out
    }

    fn heading(&self, text: &str) -> String {
        if self.config.color_output {
            format!("{}\n", text.bold())
        } else {
            format!("{}\n", text)
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.config.color_output {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Score color bands used by the score dial.
fn score_color(score: u8) -> Color {
    match score {
        80..=100 => Color::Green,
        60..=79 => Color::Yellow,
        40..=59 => Color::TrueColor { r: 249, g: 115, b: 22 },
        _ => Color::Red,
    }
}

fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "🚨",
        Severity::Warning => "⚠️",
        Severity::Success => "✅",
        Severity::Info => "💡",
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Critical => Color::Red,
        Severity::Warning => Color::Yellow,
        Severity::Success => Color::Green,
        Severity::Info => Color::Cyan,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::recommend::Finding;
    use crate::pipeline::scorer::MatchLabel;
    use chrono::Utc;

    fn sample_report() -> ScoreReport {
        ScoreReport {
            score: 50,
            label: MatchLabel::Fair,
            findings: vec![Finding {
                severity: Severity::Warning,
                title: "Missing Key Skills".to_string(),
                detail: "2 important keywords are missing from your resume.".to_string(),
            }],
            exact_matches: vec!["React".to_string(), "SQL".to_string()],
            soft_matches: Vec::new(),
            missing_keywords: vec!["Go".to_string(), "Docker".to_string()],
            resume_keyword_count: 3,
            job_keyword_count: 4,
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn test_console_output_contains_key_sections() {
        let formatter = OutputFormatter::new(OutputConfig {
            format: OutputFormat::Console,
            color_output: false,
        });
        let text = formatter.format_report(&sample_report()).unwrap();
        assert!(text.contains("Match score: 50%"));
        assert!(text.contains("Fair Match"));
        assert!(text.contains("React, SQL"));
        assert!(text.contains("Go, Docker"));
        assert!(text.contains("Missing Key Skills"));
    }

    #[test]
    fn test_json_output_round_trips() {
        let formatter = OutputFormatter::new(OutputConfig {
            format: OutputFormat::Json,
            color_output: false,
        });
        let json = formatter.format_report(&sample_report()).unwrap();
        let parsed: ScoreReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.score, 50);
        assert_eq!(parsed.exact_matches.len(), 2);
    }
}
