//! # Text Layout
//!
//! Greedy line breaking and measurement over the standard font metrics.
//!
//! Break opportunities come from UAX#14, so a line may end after a space or a
//! hyphen and must end at an explicit newline. A word wider than the whole
//! line is split at the character that overflows. Trailing whitespace is
//! dropped from every line, which is what makes a wrapped paragraph line up
//! flush with the left edge of the next line.

use crate::font::{FontContext, FontSpec};
use unicode_linebreak::{linebreaks, BreakOpportunity};

/// A line of text after line-breaking.
#[derive(Debug, Clone, PartialEq)]
pub struct BrokenLine {
    /// The text as a string, without trailing whitespace.
    pub text: String,
    /// Total width of the line in points.
    pub width: f64,
}

/// Compute UAX#14 break opportunities indexed by char position.
///
/// Returns a vec of length `text.chars().count()`. Each entry is the break
/// opportunity *before* that character position. Index 0 is always `None`.
fn compute_break_opportunities(text: &str) -> Vec<Option<BreakOpportunity>> {
    let char_count = text.chars().count();
    let mut result = vec![None; char_count];

    // linebreaks() yields the byte offset where the next segment starts.
    let byte_to_char: Vec<usize> = {
        let mut map = vec![0usize; text.len() + 1];
        let mut char_idx = 0;
        for (byte_idx, _) in text.char_indices() {
            map[byte_idx] = char_idx;
            char_idx += 1;
        }
        map[text.len()] = char_idx;
        map
    };

    for (byte_offset, opp) in linebreaks(text) {
        let char_idx = byte_to_char[byte_offset];
        if char_idx < char_count {
            result[char_idx] = Some(opp);
        }
    }

    result
}

fn is_newline(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TextLayout;

impl TextLayout {
    pub fn new() -> Self {
        Self
    }

    /// Break a string into lines that fit within `max_width` points.
    ///
    /// Always returns at least one line; an empty string yields one empty line.
    pub fn break_into_lines(
        &self,
        font_context: &FontContext,
        text: &str,
        max_width: f64,
        font: FontSpec,
    ) -> Vec<BrokenLine> {
        if text.is_empty() {
            return vec![BrokenLine {
                text: String::new(),
                width: 0.0,
            }];
        }

        let chars: Vec<char> = text.chars().collect();
        let char_widths: Vec<f64> = chars
            .iter()
            .map(|&ch| {
                if is_newline(ch) {
                    0.0
                } else {
                    font_context.char_width(ch, font)
                }
            })
            .collect();
        let break_opps = compute_break_opportunities(text);

        let mut lines = Vec::new();
        let mut line_start = 0;
        let mut line_width = 0.0;
        let mut last_break_point: Option<usize> = None;

        for (i, &ch) in chars.iter().enumerate() {
            let char_width = char_widths[i];

            // A break *before* char[i] means the previous line may end at char[i-1].
            if i > 0 {
                match break_opps[i] {
                    Some(BreakOpportunity::Mandatory) => {
                        lines.push(self.make_line(&chars[line_start..i], &char_widths[line_start..i]));
                        line_start = i;
                        line_width = 0.0;
                        last_break_point = None;
                    }
                    Some(BreakOpportunity::Allowed) => {
                        last_break_point = Some(i - 1);
                    }
                    None => {}
                }
            }

            if is_newline(ch) {
                continue;
            }

            // Whitespace may hang past the edge; it is trimmed from the line anyway.
            if line_width + char_width > max_width && line_start < i && !ch.is_whitespace() {
                match last_break_point {
                    Some(bp) if bp >= line_start => {
                        let break_at = bp + 1;
                        lines.push(self.make_line(
                            &chars[line_start..break_at],
                            &char_widths[line_start..break_at],
                        ));
                        line_start = break_at;
                        line_width = char_widths[line_start..=i].iter().sum();
                    }
                    _ => {
                        // No break point on this line: split the word here.
                        lines.push(self.make_line(&chars[line_start..i], &char_widths[line_start..i]));
                        line_start = i;
                        line_width = char_width;
                    }
                }
                last_break_point = None;
                continue;
            }

            line_width += char_width;
        }

        if line_start < chars.len() || lines.is_empty() {
            lines.push(self.make_line(&chars[line_start..], &char_widths[line_start..]));
        }

        lines
    }

    /// Build a line from a char slice, dropping newlines and trailing whitespace.
    fn make_line(&self, chars: &[char], widths: &[f64]) -> BrokenLine {
        let mut end = chars.len();
        while end > 0 && chars[end - 1].is_whitespace() {
            end -= 1;
        }
        let mut text = String::with_capacity(end);
        let mut width = 0.0;
        for (&ch, &w) in chars[..end].iter().zip(&widths[..end]) {
            if is_newline(ch) {
                continue;
            }
            text.push(ch);
            width += w;
        }
        BrokenLine { text, width }
    }

    /// Measure the width of a string in points.
    pub fn measure_width(&self, font_context: &FontContext, text: &str, font: FontSpec) -> f64 {
        font_context.measure_string(text, font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(text: &str, max_width: f64) -> Vec<String> {
        TextLayout::new()
            .break_into_lines(&FontContext::new(), text, max_width, FontSpec::normal(10.0))
            .into_iter()
            .map(|l| l.text)
            .collect()
    }

    #[test]
    fn short_text_is_one_line() {
        assert_eq!(wrap("Hello world", 500.0), vec!["Hello world"]);
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(wrap("", 100.0), vec![""]);
    }

    #[test]
    fn wraps_at_spaces() {
        // "Hello " is 25.56pt at 10pt Helvetica, "world" 23.89pt.
        let lines = wrap("Hello world again", 40.0);
        assert_eq!(lines, vec!["Hello", "world", "again"]);
    }

    #[test]
    fn lines_never_exceed_width() {
        let ctx = FontContext::new();
        let text = "The analytical engine weaves algebraic patterns just as the \
                    Jacquard loom weaves flowers and leaves.";
        let lines = TextLayout::new().break_into_lines(&ctx, text, 120.0, FontSpec::normal(10.0));
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.width <= 120.0 + 1e-9, "{:?} too wide", line.text);
            assert!(!line.text.ends_with(' '));
        }
        let rejoined: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(rejoined.join(" "), text);
    }

    #[test]
    fn explicit_newlines_break() {
        assert_eq!(wrap("first\nsecond", 500.0), vec!["first", "second"]);
        assert_eq!(wrap("a\r\nb", 500.0), vec!["a", "b"]);
    }

    #[test]
    fn long_word_is_split() {
        let lines = wrap("Supercalifragilisticexpialidocious", 50.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), "Supercalifragilisticexpialidocious");
    }
}
