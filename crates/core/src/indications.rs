//! Indication phrase extraction from raw label text.
//!
//! The INDICATIONS AND USAGE section of a drug label is a free-text blob:
//! a numbered section header, several sentences, bullet markers, irregular
//! whitespace. This module reduces it to a short ordered list of clinically
//! relevant phrases using a rule-based heuristic:
//! - prefer clauses carrying indication keywords ("indicated for",
//!   "treatment of", "prevention of", ...)
//! - strip leading section numbering like "1 INDICATIONS AND USAGE"
//! - split into candidate clauses conservatively and filter/clean
//!
//! The clause splitter has no abbreviation awareness; "e.g." produces a
//! spurious boundary. That behaviour is inherited and accepted; changing it
//! changes output for existing inputs.

use std::collections::HashSet;

use regex::Regex;

/// Sentinel strings meaning "no label text available" rather than content.
const SENTINELS: [&str; 2] = ["not found", "no data found"];

/// Bullet markers stripped from the front of a candidate clause.
const BULLET_MARKERS: [char; 3] = ['-', '•', '·'];

/// Minimum clause length for a keyword-matched phrase.
const MIN_KEYWORD_CHARS: usize = 20;

/// Minimum clause length for a fallback phrase.
const MIN_FALLBACK_CHARS: usize = 40;

/// Maximum number of fallback phrases collected.
const MAX_FALLBACK_PHRASES: usize = 2;

/// Phrases longer than this are truncated.
const MAX_PHRASE_CHARS: usize = 280;

/// Characters kept ahead of the ellipsis when truncating.
const TRUNCATED_CHARS: usize = 277;

/// Maximum number of phrases returned.
const MAX_PHRASES: usize = 6;

/// Derives concise indication phrases from raw INDICATIONS AND USAGE text.
///
/// The keyword and header patterns are compiled once at construction and the
/// value is immutable afterwards; a single extractor can be shared freely
/// across concurrent call sites.
#[derive(Clone, Debug)]
pub struct IndicationExtractor {
    whitespace: Regex,
    header: Regex,
    keyword: Regex,
}

impl IndicationExtractor {
    /// Creates a new `IndicationExtractor` with the built-in patterns.
    pub fn new() -> Self {
        Self {
            whitespace: Regex::new(r"\s+").expect("whitespace pattern is valid"),
            header: Regex::new(r"(?i)^\d+\s+indications?\s+and\s+usage[:\s-]*")
                .expect("header pattern is valid"),
            keyword: Regex::new(
                r"(?i)indicated\s+(?:for|as)|treatment\s+of|prevention\s+of|management\s+of|adjunctive\s+therapy|maintenance\s+treatment",
            )
            .expect("keyword pattern is valid"),
        }
    }

    /// Extract an ordered, deduplicated list of indication phrases.
    ///
    /// Returns an empty list for empty input and for the sentinel values
    /// "Not found" / "No data found" (case-insensitive match on the whole
    /// trimmed string). Every input yields a valid (possibly empty) list;
    /// this function never fails.
    ///
    /// Guarantees on the output:
    /// - no two phrases are case-insensitive duplicates
    /// - no phrase exceeds 280 characters (longer ones end in "...")
    /// - at most 6 phrases, in order of first appearance
    pub fn extract(&self, raw: &str) -> Vec<String> {
        let lowered = raw.trim().to_lowercase();
        if lowered.is_empty() || SENTINELS.contains(&lowered.as_str()) {
            return Vec::new();
        }

        let normalised = self.whitespace.replace_all(raw, " ");
        let normalised = normalised.trim();
        let text = self.header.replace(normalised, "");
        let candidates = split_clauses(&text);

        let mut cleaned: Vec<String> = Vec::new();
        for clause in &candidates {
            let clause = clause.trim().trim_start_matches(BULLET_MARKERS);
            if clause.chars().count() < MIN_KEYWORD_CHARS {
                continue;
            }
            if self.keyword.is_match(clause) {
                cleaned.push(clause.to_string());
            }
        }

        // Fallback: take up to the first two substantial clauses when no
        // keyword matched anywhere.
        if cleaned.is_empty() {
            for clause in &candidates {
                let clause = clause.trim();
                if clause.chars().count() >= MIN_FALLBACK_CHARS {
                    cleaned.push(clause.to_string());
                }
                if cleaned.len() >= MAX_FALLBACK_PHRASES {
                    break;
                }
            }
        }

        let mut seen = HashSet::new();
        let mut unique = Vec::new();
        for phrase in cleaned {
            if !seen.insert(phrase.to_lowercase()) {
                continue;
            }
            unique.push(truncate_phrase(phrase));
            if unique.len() >= MAX_PHRASES {
                break;
            }
        }

        unique
    }
}

impl Default for IndicationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Split normalised text into candidate clauses.
///
/// A boundary sits immediately after a `.` or `;` that is followed by
/// whitespace; the whitespace run is consumed. The terminator stays with the
/// preceding clause. Single-byte scanning is char-boundary safe because every
/// byte inspected is ASCII.
fn split_clauses(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut clauses = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if (bytes[i] == b'.' || bytes[i] == b';')
            && i + 1 < bytes.len()
            && bytes[i + 1].is_ascii_whitespace()
        {
            clauses.push(&text[start..=i]);
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            start = i;
        } else {
            i += 1;
        }
    }

    if start < bytes.len() {
        clauses.push(&text[start..]);
    }

    clauses
}

/// Truncate overly long phrases for readability.
fn truncate_phrase(phrase: String) -> String {
    if phrase.chars().count() <= MAX_PHRASE_CHARS {
        return phrase;
    }
    let kept: String = phrase.chars().take(TRUNCATED_CHARS).collect();
    format!("{}...", kept.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> IndicationExtractor {
        IndicationExtractor::new()
    }

    #[test]
    fn test_empty_input_yields_empty_list() {
        assert!(extractor().extract("").is_empty());
        assert!(extractor().extract("   \n\t  ").is_empty());
    }

    #[test]
    fn test_sentinels_yield_empty_list() {
        assert!(extractor().extract("Not found").is_empty());
        assert!(extractor().extract("No data found").is_empty());
        assert!(extractor().extract("NOT FOUND").is_empty());
        assert!(extractor().extract("  no data found  ").is_empty());
    }

    #[test]
    fn test_header_stripped_and_clauses_split() {
        let raw = "1 INDICATIONS AND USAGE RISPERDAL is indicated for the treatment of schizophrenia in adults. It is also indicated for the treatment of bipolar mania.";
        let phrases = extractor().extract(raw);
        assert_eq!(
            phrases,
            vec![
                "RISPERDAL is indicated for the treatment of schizophrenia in adults.",
                "It is also indicated for the treatment of bipolar mania.",
            ]
        );
    }

    #[test]
    fn test_header_with_colon_and_section_number() {
        let raw = "2 INDICATIONS AND USAGE: indicated for the prevention of nausea and vomiting.";
        let phrases = extractor().extract(raw);
        assert_eq!(
            phrases,
            vec!["indicated for the prevention of nausea and vomiting."]
        );
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        let raw = "Drug Y is indicated\n\tfor   the treatment of\nmajor depressive disorder.";
        let phrases = extractor().extract(raw);
        assert_eq!(
            phrases,
            vec!["Drug Y is indicated for the treatment of major depressive disorder."]
        );
    }

    #[test]
    fn test_semicolon_boundaries_split_clauses() {
        let raw = "Indicated for the treatment of schizophrenia; also for the management of bipolar disorder in adults.";
        let phrases = extractor().extract(raw);
        assert_eq!(
            phrases,
            vec![
                "Indicated for the treatment of schizophrenia;",
                "also for the management of bipolar disorder in adults.",
            ]
        );
    }

    #[test]
    fn test_non_keyword_clauses_discarded() {
        let raw = "Drug Z is indicated for the treatment of epilepsy in adults. Store below 25 degrees Celsius away from light.";
        let phrases = extractor().extract(raw);
        assert_eq!(
            phrases,
            vec!["Drug Z is indicated for the treatment of epilepsy in adults."]
        );
    }

    #[test]
    fn test_short_keyword_clauses_discarded() {
        // "treatment of gout." is 18 chars, below the keyword floor; the
        // fallback floor of 40 also fails, so nothing survives.
        assert!(extractor().extract("treatment of gout.").is_empty());
    }

    #[test]
    fn test_fallback_takes_first_two_substantial_clauses() {
        let raw = "This product contains the active ingredient X. It is supplied as a tablet for oral administration only.";
        let phrases = extractor().extract(raw);
        assert_eq!(
            phrases,
            vec![
                "This product contains the active ingredient X.",
                "It is supplied as a tablet for oral administration only.",
            ]
        );
    }

    #[test]
    fn test_fallback_stops_at_two() {
        let raw = "The packaging of this medicine is fully recyclable material. Each carton contains three blister strips of ten tablets. Tablets should be swallowed whole with a glass of water.";
        let phrases = extractor().extract(raw);
        assert_eq!(phrases.len(), 2);
        assert_eq!(
            phrases[0],
            "The packaging of this medicine is fully recyclable material."
        );
    }

    #[test]
    fn test_bullet_markers_stripped() {
        let raw = "•indicated for the treatment of generalized anxiety disorder. •indicated for the management of panic disorder in adults.";
        let phrases = extractor().extract(raw);
        assert_eq!(
            phrases,
            vec![
                "indicated for the treatment of generalized anxiety disorder.",
                "indicated for the management of panic disorder in adults.",
            ]
        );
    }

    #[test]
    fn test_case_insensitive_deduplication_keeps_first_casing() {
        let raw = "RISPERDAL is indicated for the treatment of schizophrenia. risperdal IS INDICATED FOR THE TREATMENT OF SCHIZOPHRENIA.";
        let phrases = extractor().extract(raw);
        assert_eq!(
            phrases,
            vec!["RISPERDAL is indicated for the treatment of schizophrenia."]
        );
    }

    #[test]
    fn test_output_capped_at_six_phrases() {
        let conditions = [
            "schizophrenia",
            "bipolar mania",
            "major depression",
            "panic disorder",
            "generalized anxiety",
            "social anxiety disorder",
            "obsessive compulsive disorder",
            "post traumatic stress",
        ];
        let raw: String = conditions
            .iter()
            .map(|c| format!("It is indicated for the treatment of {}. ", c))
            .collect();
        let phrases = extractor().extract(raw.trim_end());
        assert_eq!(phrases.len(), 6);
        assert!(phrases[0].contains("schizophrenia"));
        assert!(phrases[5].contains("social anxiety disorder"));
    }

    #[test]
    fn test_long_phrase_truncated_to_280_with_ellipsis() {
        let filler = "x".repeat(300 - 37);
        let raw = format!("It is indicated for the treatment of {}", filler);
        assert_eq!(raw.chars().count(), 300);

        let phrases = extractor().extract(&raw);
        assert_eq!(phrases.len(), 1);
        assert_eq!(phrases[0].chars().count(), 280);
        assert!(phrases[0].ends_with("..."));
    }

    #[test]
    fn test_truncation_strips_trailing_whitespace_before_ellipsis() {
        let head = "Indicated for the treatment of ".to_string() + &"y".repeat(245);
        let raw = format!("{} {}", head, "z".repeat(40));
        assert_eq!(head.chars().count(), 276);

        let phrases = extractor().extract(&raw);
        assert_eq!(phrases.len(), 1);
        // Char 277 is the space after `head`; it is stripped before the
        // ellipsis is appended.
        assert_eq!(phrases[0], format!("{}...", head.trim_end()));
    }

    #[test]
    fn test_abbreviation_splitting_is_accepted_behaviour() {
        // "e.g." ends a clause because the splitter has no abbreviation
        // awareness. Inherited behaviour, pinned here on purpose.
        let raw = "It is indicated for the treatment of anxiety, e.g. generalized anxiety disorder.";
        let phrases = extractor().extract(raw);
        assert_eq!(
            phrases,
            vec!["It is indicated for the treatment of anxiety, e.g."]
        );
    }

    #[test]
    fn test_order_matches_first_appearance() {
        let raw = "Used for the prevention of migraine in adults. Also indicated as adjunctive therapy for partial seizures.";
        let phrases = extractor().extract(raw);
        assert_eq!(phrases.len(), 2);
        assert!(phrases[0].starts_with("Used for the prevention"));
        assert!(phrases[1].starts_with("Also indicated as"));
    }

    #[test]
    fn test_maintenance_treatment_keyword_matches() {
        let raw = "Recommended for maintenance treatment of asthma in patients over twelve.";
        let phrases = extractor().extract(raw);
        assert_eq!(phrases.len(), 1);
    }

    #[test]
    fn test_split_clauses_boundary_rules() {
        assert_eq!(
            split_clauses("First clause. Second clause; third clause."),
            vec!["First clause.", "Second clause;", "third clause."]
        );
        // No whitespace after the terminator: no boundary.
        assert_eq!(split_clauses("Take 0.5 mg daily."), vec!["Take 0.5 mg daily."]);
        assert_eq!(split_clauses(""), Vec::<&str>::new());
    }
}
