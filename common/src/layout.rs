//! PDF page layout math shared by CLI and desktop.
//!
//! Pure calculations only; the printpdf drawing lives in the root crate.

/// mm -> pt conversion (1 pt = 0.352778 mm)
pub fn mm_to_pt(mm: f32) -> f32 {
    mm / 0.352_778
}

/// pt -> mm conversion
pub fn pt_to_mm(pt: f32) -> f32 {
    pt * 0.352_778
}

/// Page geometry for the exported document (mm units).
#[derive(Debug, Clone)]
pub struct PdfLayout {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_mm: f32,
    pub body_font_size_pt: f32,
    pub line_height_mm: f32,
}

impl PdfLayout {
    /// US letter, portrait, 1-inch margins
    pub fn letter() -> Self {
        Self {
            page_width_mm: 215.9,
            page_height_mm: 279.4,
            margin_mm: 25.4,
            body_font_size_pt: 11.0,
            line_height_mm: 5.5,
        }
    }

    /// Writable width between the margins
    pub fn content_width_mm(&self) -> f32 {
        self.page_width_mm - 2.0 * self.margin_mm
    }

    /// Estimated character budget per line.
    ///
    /// Helvetica has no fixed advance; 0.5 em per glyph is the usual
    /// average for Latin body text and errs toward shorter lines.
    pub fn max_chars_per_line(&self) -> usize {
        let char_width_mm = pt_to_mm(self.body_font_size_pt) * 0.5;
        (self.content_width_mm() / char_width_mm).floor() as usize
    }

    /// Estimated width of `text` at the body font size
    pub fn text_width_mm(&self, text: &str) -> f32 {
        text.chars().count() as f32 * pt_to_mm(self.body_font_size_pt) * 0.5
    }

    /// X offset that centers `text` on the page
    pub fn centered_x_mm(&self, text: &str) -> f32 {
        let width = self.text_width_mm(text).min(self.page_width_mm);
        (self.page_width_mm - width) / 2.0
    }

    /// Y coordinate of the first baseline on a fresh page
    pub fn top_y_mm(&self) -> f32 {
        self.page_height_mm - self.margin_mm
    }
}

/// Wrap `text` into lines of at most `max_chars` characters.
///
/// Paragraph breaks (`\n`) are preserved as separate lines; an empty
/// paragraph yields an empty line. Words longer than the budget are
/// hard-split.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim_end();
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();

            if word_len > max_chars {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let chars: Vec<char> = word.chars().collect();
                for chunk in chars.chunks(max_chars) {
                    lines.push(chunk.iter().collect());
                }
                continue;
            }

            let needed = if current.is_empty() {
                word_len
            } else {
                current.chars().count() + 1 + word_len
            };
            if needed > max_chars {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            } else {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_dimensions() {
        let layout = PdfLayout::letter();
        assert_eq!(layout.page_width_mm, 215.9);
        assert_eq!(layout.page_height_mm, 279.4);
        assert_eq!(layout.margin_mm, 25.4);
    }

    #[test]
    fn test_mm_pt_round_trip() {
        let mm = 25.4;
        let back = pt_to_mm(mm_to_pt(mm));
        assert!((back - mm).abs() < 0.001);
    }

    #[test]
    fn test_max_chars_per_line_reasonable() {
        let layout = PdfLayout::letter();
        let chars = layout.max_chars_per_line();
        // 165.1mm content width at 11pt body text
        assert!(chars > 60 && chars < 120, "got {}", chars);
    }

    #[test]
    fn test_centered_x_within_page() {
        let layout = PdfLayout::letter();
        let x = layout.centered_x_mm("TELEFÔNICA BRASIL S.A.");
        assert!(x > 0.0);
        assert!(x < layout.page_width_mm / 2.0);
    }

    #[test]
    fn test_wrap_text_respects_budget() {
        let text = "uma duas tres quatro cinco seis sete oito nove dez";
        for line in wrap_text(text, 12) {
            assert!(line.chars().count() <= 12, "line too long: {:?}", line);
        }
    }

    #[test]
    fn test_wrap_text_keeps_word_order() {
        let text = "alpha beta gamma delta";
        let joined = wrap_text(text, 11).join(" ");
        assert_eq!(joined, text);
    }

    #[test]
    fn test_wrap_text_preserves_paragraph_breaks() {
        let lines = wrap_text("primeiro\n\nsegundo", 40);
        assert_eq!(lines, vec!["primeiro", "", "segundo"]);
    }

    #[test]
    fn test_wrap_text_hard_splits_long_words() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_text_empty() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }
}
