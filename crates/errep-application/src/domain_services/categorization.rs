//! Categorization Service
//!
//! Deterministic severity/category assignment from the divergence between
//! the original and corrected text.
//!
//! ## Algorithm
//!
//! | Condition | Category | Severity |
//! |-----------|----------|----------|
//! | texts identical | `NoChange` | LOW |
//! | equal ignoring case | `Capitalization` | LOW |
//! | equal ignoring punctuation, spacing and case | `Punctuation` | LOW |
//! | only near-miss word substitutions | `Spelling` | LOW ≤ 25%, else MEDIUM |
//! | word divergence above 60% | `Rewrite` | HIGH, CRITICAL above 80% |
//! | only words removed from the transcript | `Insertion` | MEDIUM ≤ 30%, else HIGH |
//! | only words added to the transcript | `Omission` | MEDIUM ≤ 30%, else HIGH |
//! | anything else | `WordSubstitution` | MEDIUM ≤ 30%, else HIGH |
//!
//! Divergence is the word-level edit distance as a whole percentage of the
//! longer token sequence.

use errep_domain::{Classification, ErrorCategory, ErrorReport, Severity};

/// Alignments larger than this many DP cells are scored without backtracking
const MAX_ALIGNMENT_CELLS: usize = 4_000_000;

/// Words longer than this are never considered misspellings of each other
const MAX_SPELLING_WORD_LENGTH: usize = 64;

const SPELLING_LOW_MAX: usize = 25;
const MINOR_MAX: usize = 30;
const REWRITE_MIN: usize = 60;
const CRITICAL_MIN: usize = 80;

/// Pure, total classifier for error reports
#[derive(Debug, Clone, Copy, Default)]
pub struct CategorizationService;

impl CategorizationService {
    /// Create the service
    pub fn new() -> Self {
        Self
    }

    /// Classify a report by its original and corrected text
    pub fn classify(&self, report: &ErrorReport) -> Classification {
        self.classify_texts(report.original_text(), report.corrected_text())
    }

    /// Classify a pair of texts
    pub fn classify_texts(&self, original: &str, corrected: &str) -> Classification {
        if original == corrected {
            return Classification::new(Severity::Low, ErrorCategory::NoChange);
        }
        if original.to_lowercase() == corrected.to_lowercase() {
            return Classification::new(Severity::Low, ErrorCategory::Capitalization);
        }

        let original_tokens = tokenize(original);
        let corrected_tokens = tokenize(corrected);
        if original_tokens == corrected_tokens {
            return Classification::new(Severity::Low, ErrorCategory::Punctuation);
        }

        let edits = align(&original_tokens, &corrected_tokens);
        let longest = original_tokens.len().max(corrected_tokens.len()).max(1);
        let divergence = edits.distance() * 100 / longest;

        if edits.is_spelling_only() {
            let severity = if divergence <= SPELLING_LOW_MAX {
                Severity::Low
            } else {
                Severity::Medium
            };
            return Classification::new(severity, ErrorCategory::Spelling);
        }

        if divergence > REWRITE_MIN {
            let severity = if divergence > CRITICAL_MIN {
                Severity::Critical
            } else {
                Severity::High
            };
            return Classification::new(severity, ErrorCategory::Rewrite);
        }

        let category = if edits.substitutions == 0 && edits.insertions == 0 {
            ErrorCategory::Insertion
        } else if edits.substitutions == 0 && edits.deletions == 0 {
            ErrorCategory::Omission
        } else {
            ErrorCategory::WordSubstitution
        };
        let severity = if divergence <= MINOR_MAX {
            Severity::Medium
        } else {
            Severity::High
        };
        Classification::new(severity, category)
    }
}

/// Lowercased words with punctuation stripped
fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric() || *c == '\'')
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

/// Word-level edit summary between transcript and correction
///
/// Deletions are transcript words absent from the correction; insertions
/// are correction words absent from the transcript.
#[derive(Debug, Default)]
struct EditSummary {
    substitutions: usize,
    insertions: usize,
    deletions: usize,
    all_substitutions_near_miss: bool,
}

impl EditSummary {
    fn distance(&self) -> usize {
        self.substitutions + self.insertions + self.deletions
    }

    fn is_spelling_only(&self) -> bool {
        self.substitutions > 0
            && self.insertions == 0
            && self.deletions == 0
            && self.all_substitutions_near_miss
    }
}

fn align(original: &[String], corrected: &[String]) -> EditSummary {
    let prefix = original
        .iter()
        .zip(corrected)
        .take_while(|(a, b)| a == b)
        .count();
    let suffix = original[prefix..]
        .iter()
        .rev()
        .zip(corrected[prefix..].iter().rev())
        .take_while(|(a, b)| a == b)
        .count();
    let a = &original[prefix..original.len() - suffix];
    let b = &corrected[prefix..corrected.len() - suffix];

    if (a.len() + 1).saturating_mul(b.len() + 1) > MAX_ALIGNMENT_CELLS {
        // Too large to align exactly: count the unmatched span as rewritten.
        let common = a.len().min(b.len());
        return EditSummary {
            substitutions: common,
            insertions: b.len() - common,
            deletions: a.len() - common,
            all_substitutions_near_miss: false,
        };
    }

    let table = distance_table(a, b, false);
    let mut summary = EditSummary {
        all_substitutions_near_miss: true,
        ..EditSummary::default()
    };
    let (mut i, mut j) = (a.len(), b.len());
    while i > 0 || j > 0 {
        let here = table[i][j];
        if i > 0 && j > 0 && a[i - 1] == b[j - 1] && here == table[i - 1][j - 1] {
            i -= 1;
            j -= 1;
        } else if i > 0 && j > 0 && here == table[i - 1][j - 1] + 1 {
            summary.substitutions += 1;
            summary.all_substitutions_near_miss &= is_near_miss(&a[i - 1], &b[j - 1]);
            i -= 1;
            j -= 1;
        } else if i > 0 && here == table[i - 1][j] + 1 {
            summary.deletions += 1;
            i -= 1;
        } else {
            summary.insertions += 1;
            j -= 1;
        }
    }
    summary
}

/// Edit distance DP table over arbitrary sequences
///
/// With `transpositions` set, swapping two adjacent elements counts as one
/// edit (optimal string alignment distance).
fn distance_table<T: PartialEq>(a: &[T], b: &[T], transpositions: bool) -> Vec<Vec<usize>> {
    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut best = (table[i - 1][j] + 1)
                .min(table[i][j - 1] + 1)
                .min(table[i - 1][j - 1] + cost);
            if transpositions
                && i > 1
                && j > 1
                && a[i - 1] == b[j - 2]
                && a[i - 2] == b[j - 1]
            {
                best = best.min(table[i - 2][j - 2] + 1);
            }
            table[i][j] = best;
        }
    }
    table
}

/// Whether two words are plausibly the same word misspelled
fn is_near_miss(a: &str, b: &str) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let longest = a.len().max(b.len());
    if longest > MAX_SPELLING_WORD_LENGTH {
        return false;
    }
    let distance = distance_table(&a, &b, true)[a.len()][b.len()];
    distance <= (longest / 3).max(1)
}
