use super::lifecycle::Flow;

pub const DEFAULT_TAGLINE: &str = "Building the future from Titabar.";
pub const DEFAULT_INTERVAL_MS: u32 = 100;
pub const CURSOR_GLYPH: char = '_';

/// Reveals a fixed string one character per tick.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    // byte offset after each char, so slicing never splits a code point
    boundaries: Vec<usize>,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let boundaries = text.char_indices().map(|(i, c)| i + c.len_utf8()).collect();
        Self {
            text,
            boundaries,
            shown: 0,
        }
    }

    /// Number of characters in the source text.
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.len()
    }

    /// Reveal one more character. Returns `Flow::Stop` once everything is
    /// visible, including for ticks that arrive after that point.
    pub fn tick(&mut self) -> Flow {
        if !self.is_done() {
            self.shown += 1;
        }
        if self.is_done() {
            Flow::Stop
        } else {
            Flow::Continue
        }
    }

    pub fn visible(&self) -> &str {
        match self.shown {
            0 => "",
            n => &self.text[..self.boundaries[n - 1]],
        }
    }
}
