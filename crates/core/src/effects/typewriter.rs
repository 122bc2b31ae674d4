//! Character-at-a-time text reveal

/// Reveals `text` one Unicode scalar per step
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    pos: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pos: 0,
        }
    }

    /// Text revealed so far
    pub fn typed(&self) -> &str {
        &self.text[..self.pos]
    }

    pub fn full_text(&self) -> &str {
        &self.text
    }

    pub fn is_done(&self) -> bool {
        self.pos >= self.text.len()
    }
}

impl Iterator for Typewriter {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let ch = self.text[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_every_char_then_stops() {
        let mut tw = Typewriter::new("hi!");
        assert_eq!(tw.typed(), "");
        assert_eq!(tw.next(), Some('h'));
        assert_eq!(tw.typed(), "h");
        assert_eq!(tw.by_ref().count(), 2);
        assert!(tw.is_done());
        assert_eq!(tw.typed(), "hi!");
        assert_eq!(tw.next(), None);
    }

    #[test]
    fn test_multibyte_text() {
        let mut tw = Typewriter::new("héllo ✨");
        let typed: Vec<char> = tw.by_ref().collect();
        assert_eq!(typed.len(), 7);
        assert_eq!(tw.typed(), tw.full_text());
    }

    #[test]
    fn test_empty_text_is_done() {
        let tw = Typewriter::new("");
        assert!(tw.is_done());
    }
}
