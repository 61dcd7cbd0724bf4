//! Result assembly and export rendering.

use serde::{Deserialize, Serialize};

pub const CSV_EXPORT_FILENAME: &str = "ranked_resumes.csv";
pub const TEXT_EXPORT_FILENAME: &str = "ranked_resumes.txt";

/// One ranked resume: original filename plus its match score in [0, 100].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedResume {
    pub resume: String,
    pub score: f64,
}

/// Zips index-aligned names and scores and sorts by score descending.
/// The sort is stable: equal scores keep their upload order. The first
/// element, if any, is the best match.
pub fn assemble(names: Vec<String>, scores: Vec<f64>) -> Vec<RankedResume> {
    let mut results: Vec<RankedResume> = names
        .into_iter()
        .zip(scores)
        .map(|(resume, score)| RankedResume { resume, score })
        .collect();
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results
}

/// Renders the `Resume,Score` CSV export, scores to 2 decimal places.
pub fn to_csv(results: &[RankedResume]) -> String {
    let mut out = String::from("Resume,Score\n");
    for r in results {
        out.push_str(&csv_field(&r.resume));
        out.push_str(&format!(",{:.2}\n", r.score));
    }
    out
}

// RFC 4180: quote fields containing separators or quotes, double inner quotes.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Renders the plain-text export: one `<name>: <score>` line per resume.
pub fn to_text(results: &[RankedResume]) -> String {
    results
        .iter()
        .map(|r| format!("{}: {:.2}", r.resume, r.score))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(pairs: &[(&str, f64)]) -> Vec<RankedResume> {
        pairs
            .iter()
            .map(|(name, score)| RankedResume {
                resume: name.to_string(),
                score: *score,
            })
            .collect()
    }

    #[test]
    fn test_assemble_sorts_descending() {
        let results = assemble(
            vec!["low.pdf".into(), "high.pdf".into(), "mid.pdf".into()],
            vec![10.0, 90.0, 50.0],
        );
        let names: Vec<&str> = results.iter().map(|r| r.resume.as_str()).collect();
        assert_eq!(names, vec!["high.pdf", "mid.pdf", "low.pdf"]);
    }

    #[test]
    fn test_assemble_equal_scores_keep_upload_order() {
        let results = assemble(
            vec!["first.pdf".into(), "second.pdf".into(), "third.pdf".into()],
            vec![42.0, 42.0, 42.0],
        );
        let names: Vec<&str> = results.iter().map(|r| r.resume.as_str()).collect();
        assert_eq!(names, vec!["first.pdf", "second.pdf", "third.pdf"]);
    }

    #[test]
    fn test_assemble_empty() {
        assert!(assemble(vec![], vec![]).is_empty());
    }

    #[test]
    fn test_csv_header_rows_and_formatting() {
        let csv = to_csv(&ranked(&[("alice.pdf", 87.654), ("bob.docx", 3.0)]));
        assert_eq!(csv, "Resume,Score\nalice.pdf,87.65\nbob.docx,3.00\n");
    }

    #[test]
    fn test_csv_quotes_names_with_commas() {
        let csv = to_csv(&ranked(&[("doe, jane.pdf", 50.0)]));
        assert_eq!(csv, "Resume,Score\n\"doe, jane.pdf\",50.00\n");
    }

    #[test]
    fn test_csv_doubles_inner_quotes() {
        let csv = to_csv(&ranked(&[("the \"one\".pdf", 50.0)]));
        assert_eq!(csv, "Resume,Score\n\"the \"\"one\"\".pdf\",50.00\n");
    }

    #[test]
    fn test_text_export_one_line_per_resume() {
        let text = to_text(&ranked(&[("alice.pdf", 87.654), ("bob.docx", 3.0)]));
        assert_eq!(text, "alice.pdf: 87.65\nbob.docx: 3.00");
    }

    #[test]
    fn test_export_filenames() {
        assert_eq!(CSV_EXPORT_FILENAME, "ranked_resumes.csv");
        assert_eq!(TEXT_EXPORT_FILENAME, "ranked_resumes.txt");
    }
}
