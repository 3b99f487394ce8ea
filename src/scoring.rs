//! TF-IDF scoring functions.
//!
//! The score rewards entries matching more distinct query terms and rarer
//! terms, while a length penalty stops sheer document size from dominating:
//!
//! ```text
//! score(e) = Σ_t  tf(t, e) · ln(1 + N / df(t))   /   (1 + ln(1 + len(e)))
//! ```
//!
//! where the sum ranges over distinct query tokens present in entry `e`,
//! `N` is the total entry count, `df` the document frequency, and `len(e)`
//! the entry's token count.
//!
//! References:
//! - Spärck Jones (1972): term specificity / IDF motivation.

/// Inverse document frequency: `ln(1 + N / df)`.
///
/// Strictly positive for any term that occurs at all (`df >= 1`), so a
/// matched query token always contributes to the score. Monotonically
/// decreasing in `df`: terms appearing everywhere are worth the least.
pub fn idf(total_entries: usize, doc_freq: usize) -> f64 {
    debug_assert!(doc_freq >= 1 && doc_freq <= total_entries);
    (1.0 + total_entries as f64 / doc_freq as f64).ln()
}

/// Length penalty divisor: `1 + ln(1 + token count)`.
///
/// Always at least 1, and grows logarithmically, so long entries are damped
/// rather than buried.
pub fn length_penalty(entry_len: usize) -> f64 {
    1.0 + (1.0 + entry_len as f64).ln()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idf_decreases_with_document_frequency() {
        let rare = idf(100, 1);
        let common = idf(100, 50);
        let ubiquitous = idf(100, 100);
        assert!(rare > common);
        assert!(common > ubiquitous);
        assert!(ubiquitous > 0.0);
    }

    #[test]
    fn idf_of_ubiquitous_term_is_ln_two() {
        let value = idf(10, 10);
        assert!((value - 2.0_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn length_penalty_grows_slowly_from_one() {
        assert!((length_penalty(0) - 1.0).abs() < 1e-12);
        assert!(length_penalty(10) > length_penalty(0));
        // Doubling the length adds well under double the penalty.
        assert!(length_penalty(2000) < 2.0 * length_penalty(1000));
    }
}
