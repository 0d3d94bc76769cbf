//! Shrinking a font so a single line fits a width.

use crate::font::FontSpec;
use crate::surface::Measure;

/// Smallest size the fitter will produce, in points.
pub const MIN_FONT_SIZE: f64 = 8.0;

/// Slack so a fitted line does not touch the edge it was fitted to.
const FIT_FACTOR: f64 = 0.9;

/// Return `base` if `text` fits in `max_width`, otherwise the same face at
/// `floor(base * max_width / natural * 0.9)` points, clamped to
/// [`MIN_FONT_SIZE`]. Text that is still too wide at the minimum is the
/// caller's to wrap.
pub fn fit_font<M: Measure + ?Sized>(measure: &M, text: &str, base: FontSpec, max_width: f64) -> FontSpec {
    let natural = measure.measure_width(text, base);
    if natural <= max_width || natural <= 0.0 {
        return base;
    }
    let size = (base.size * (max_width / natural) * FIT_FACTOR).floor();
    base.with_size(size.max(MIN_FONT_SIZE))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every character is one unit wide per point of size.
    struct Fixed;

    impl Measure for Fixed {
        fn measure_width(&self, text: &str, font: FontSpec) -> f64 {
            text.chars().count() as f64 * font.size
        }

        fn wrap(&self, text: &str, _max_width: f64, _font: FontSpec) -> Vec<String> {
            vec![text.to_string()]
        }
    }

    #[test]
    fn fitting_text_keeps_base_size() {
        let font = fit_font(&Fixed, "abc", FontSpec::bold(10.0), 30.0);
        assert_eq!(font, FontSpec::bold(10.0));
    }

    #[test]
    fn wide_text_shrinks() {
        // natural 200, ratio 0.5: floor(10 * 0.5 * 0.9) = 4, clamped to 8.
        let font = fit_font(&Fixed, &"x".repeat(20), FontSpec::bold(10.0), 100.0);
        assert_eq!(font, FontSpec::bold(MIN_FONT_SIZE));

        // natural 240, ratio 0.5: floor(24 * 0.5 * 0.9) = floor(10.8) = 10.
        let font = fit_font(&Fixed, &"x".repeat(10), FontSpec::normal(24.0), 120.0);
        assert_eq!(font, FontSpec::normal(10.0));
    }

    #[test]
    fn never_below_minimum() {
        let font = fit_font(&Fixed, &"x".repeat(500), FontSpec::normal(10.0), 10.0);
        assert_eq!(font.size, MIN_FONT_SIZE);
    }
}
