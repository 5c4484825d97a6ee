//! The logical unit being rendered: text, font request, canvas offset.

use super::pixel::Point;

/// Line-break marker recognized in the input text.
///
/// This is the literal two characters `\n` as they survive shell quoting,
/// not the newline control character.
const LINE_BREAK: &str = "\\n";

/// Immutable description of one rendering job, built once from user input.
#[derive(Debug, Clone)]
pub struct TextBlock {
    lines: Vec<String>,
    font_family: String,
    font_size: f64,
    offset: Point,
}

impl TextBlock {
    /// Splits `text` on [`LINE_BREAK`] markers and captures the font request
    /// and the target offset on the canvas.
    pub fn new(text: &str, font_family: &str, font_size: f64, offset: Point) -> Self {
        Self {
            lines: text.split(LINE_BREAK).map(str::to_owned).collect(),
            font_family: font_family.to_owned(),
            font_size,
            offset,
        }
    }

    /// The text lines, in top-to-bottom order. Never empty.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Requested font family name, as typed by the user.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Requested font size in points.
    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Target offset of the text block on the canvas.
    pub fn offset(&self) -> Point {
        self.offset
    }
}
