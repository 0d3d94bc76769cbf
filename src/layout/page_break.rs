//! # Page Break Decisions
//!
//! A résumé is one page, so the bottom margin is a hard stop. When a block of
//! lines reaches it, the block is either placed whole or cut to the lines that
//! fit, and the caller marks the cut with an ellipsis line.

/// What to do with a block of equal-height lines at the bottom of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakDecision {
    /// Every line fits.
    Place,
    /// Only the first `lines_that_fit` lines fit; the rest are dropped.
    Truncate { lines_that_fit: usize },
}

/// Decide how many of `line_count` lines of `line_height` fit in `budget`.
///
/// The whole block is placed when its height does not exceed the budget.
/// Otherwise exactly `floor(budget / line_height)` lines are kept, never
/// fewer than zero.
pub fn decide_break(budget: f64, line_count: usize, line_height: f64) -> BreakDecision {
    let total = line_count as f64 * line_height;
    if total <= budget {
        return BreakDecision::Place;
    }

    let fit = if budget > 0.0 && line_height > 0.0 {
        (budget / line_height).floor() as usize
    } else {
        0
    };

    BreakDecision::Truncate {
        lines_that_fit: fit.min(line_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everything_fits() {
        assert_eq!(decide_break(100.0, 4, 5.0), BreakDecision::Place);
    }

    #[test]
    fn exact_fit_is_placed() {
        assert_eq!(decide_break(20.0, 4, 5.0), BreakDecision::Place);
    }

    #[test]
    fn truncates_to_whole_lines() {
        assert_eq!(
            decide_break(23.0, 10, 5.0),
            BreakDecision::Truncate { lines_that_fit: 4 }
        );
    }

    #[test]
    fn negative_budget_keeps_nothing() {
        assert_eq!(
            decide_break(-3.0, 2, 5.0),
            BreakDecision::Truncate { lines_that_fit: 0 }
        );
    }

    #[test]
    fn empty_block_always_fits() {
        assert_eq!(decide_break(0.0, 0, 5.0), BreakDecision::Place);
    }
}
