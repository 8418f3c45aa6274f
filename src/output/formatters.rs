//! Formatting utilities for terminal output

use crate::core::Hint;

/// Render a hint as pegs: `●` per bull, `○` per cow, `·` for the rest
#[must_use]
pub fn hint_to_pegs(hint: Hint, digits: usize) -> String {
    let bulls = usize::from(hint.bulls());
    let cows = usize::from(hint.cows());
    let misses = digits.saturating_sub(bulls + cows);

    let mut result = String::with_capacity(3 * digits);
    result.push_str(&"●".repeat(bulls));
    result.push_str(&"○".repeat(cows));
    result.push_str(&"·".repeat(misses));
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Share of the search space eliminated, on a log scale
///
/// Each halving of the candidate set counts the same.
#[must_use]
pub fn elimination_progress(remaining: usize, total: usize) -> f64 {
    if total <= 1 {
        return 1.0;
    }
    let total_bits = (total as f64).log2();
    let remaining_bits = (remaining.max(1) as f64).log2();
    ((total_bits - remaining_bits) / total_bits).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pegs_for_mixed_hint() {
        assert_eq!(hint_to_pegs(Hint::new(1, 2), 4), "●○○·");
    }

    #[test]
    fn pegs_for_no_match() {
        assert_eq!(hint_to_pegs(Hint::NONE, 4), "····");
    }

    #[test]
    fn pegs_for_solved() {
        assert_eq!(hint_to_pegs(Hint::solved(4), 4), "●●●●");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn elimination_progress_bounds() {
        assert!(elimination_progress(5040, 5040).abs() < f64::EPSILON);
        assert!((elimination_progress(1, 5040) - 1.0).abs() < f64::EPSILON);
        assert!((elimination_progress(0, 5040) - 1.0).abs() < f64::EPSILON);
        let half = elimination_progress(64, 4096);
        assert!((half - 0.5).abs() < 1e-9);
    }
}
