//! Width-aware wrapping and scroll math.
//!
//! Screens and the chat transcript are pre-wrapped to the target width
//! before rendering, so line counts used for scroll clamping always match
//! what ends up on screen.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Terminal cell width of a string, measured per grapheme cluster.
pub fn display_width(text: &str) -> usize {
    text.graphemes(true).map(UnicodeWidthStr::width).sum()
}

pub struct ScrollCalculator;

impl ScrollCalculator {
    /// Greedy word wrap. Existing newlines are respected, a line's leading
    /// indentation is carried onto its continuation rows, and words wider
    /// than the target width are broken at grapheme boundaries.
    pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
        let width = width as usize;
        if width == 0 {
            return text.lines().map(str::to_string).collect();
        }

        let mut out = Vec::new();
        for line in text.split('\n') {
            wrap_single_line(line, width, &mut out);
        }
        out
    }

    pub fn wrapped_height(text: &str, width: u16) -> u16 {
        Self::wrap_text(text, width).len().min(u16::MAX as usize) as u16
    }

    pub fn max_scroll_offset(total_lines: u16, viewport_height: u16) -> u16 {
        total_lines.saturating_sub(viewport_height)
    }

    /// Offset that pins the viewport to the bottom of the content.
    pub fn bottom_offset(total_lines: u16, viewport_height: u16) -> u16 {
        Self::max_scroll_offset(total_lines, viewport_height)
    }
}

fn wrap_single_line(line: &str, width: usize, out: &mut Vec<String>) {
    if display_width(line) <= width {
        out.push(line.to_string());
        return;
    }

    let indent: String = line.chars().take_while(|c| *c == ' ').collect();
    let indent_width = indent.len().min(width.saturating_sub(1));
    let indent = &indent[..indent_width];
    let avail = width - indent_width;

    let mut current = String::from(indent);
    let mut current_width = 0usize;

    for word in line[indent_width..].split_whitespace() {
        let word_width = display_width(word);

        if current_width > 0 && current_width + 1 + word_width > avail {
            out.push(std::mem::replace(&mut current, String::from(indent)));
            current_width = 0;
        }

        if word_width > avail {
            // No room on any row; hard-break the word by grapheme.
            for grapheme in word.graphemes(true) {
                let grapheme_width = UnicodeWidthStr::width(grapheme);
                if current_width > 0 && current_width + grapheme_width > avail {
                    out.push(std::mem::replace(&mut current, String::from(indent)));
                    current_width = 0;
                }
                current.push_str(grapheme);
                current_width += grapheme_width;
            }
            continue;
        }

        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if current_width > 0 || out.is_empty() {
        out.push(current);
    }
}
