//! Display targets that receive rendered text

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

/// Write-only sink for the text an effect renders.
///
/// Effects never read the text back; the sink is free to forward it to a
/// terminal, a widget or a plain buffer.
pub trait DisplayTarget {
    /// Replace the visible text
    fn set_text(&mut self, text: &str);

    /// Append one character to the visible text
    fn append_char(&mut self, c: char);
}

impl DisplayTarget for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }

    fn append_char(&mut self, c: char) {
        self.push(c);
    }
}

impl<T: DisplayTarget + ?Sized> DisplayTarget for &mut T {
    fn set_text(&mut self, text: &str) {
        (**self).set_text(text);
    }

    fn append_char(&mut self, c: char) {
        (**self).append_char(c);
    }
}

impl<T: DisplayTarget + ?Sized> DisplayTarget for Box<T> {
    fn set_text(&mut self, text: &str) {
        (**self).set_text(text);
    }

    fn append_char(&mut self, c: char) {
        (**self).append_char(c);
    }
}

/// Cloneable text buffer handle.
///
/// One clone goes into an effect, another stays with the host which reads
/// the current text and the number of writes.
#[derive(Clone, Default)]
pub struct SharedText(Arc<Mutex<Inner>>);

#[derive(Default)]
struct Inner {
    text: String,
    writes: usize,
}

impl SharedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text
    pub fn text(&self) -> String {
        self.0.lock().text.clone()
    }

    /// Number of mutations received so far
    pub fn writes(&self) -> usize {
        self.0.lock().writes
    }
}

impl fmt::Debug for SharedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.0.lock();
        f.debug_struct("SharedText")
            .field("text", &inner.text)
            .field("writes", &inner.writes)
            .finish()
    }
}

impl DisplayTarget for SharedText {
    fn set_text(&mut self, text: &str) {
        let mut inner = self.0.lock();
        inner.text.clear();
        inner.text.push_str(text);
        inner.writes += 1;
    }

    fn append_char(&mut self, c: char) {
        let mut inner = self.0.lock();
        inner.text.push(c);
        inner.writes += 1;
    }
}

/// Prefix of `text` holding the first `chars` characters
pub(crate) fn char_prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_target() {
        let mut s = String::from("old");
        s.set_text("Hi");
        s.append_char('!');
        assert_eq!(s, "Hi!");
    }

    #[test]
    fn test_shared_text_clones_see_writes() {
        let shared = SharedText::new();
        let mut handle = shared.clone();
        handle.set_text("ab");
        handle.append_char('c');
        assert_eq!(shared.text(), "abc");
        assert_eq!(shared.writes(), 2);
    }

    #[test]
    fn test_char_prefix_multibyte() {
        assert_eq!(char_prefix("héllo", 2), "hé");
        assert_eq!(char_prefix("héllo", 0), "");
        assert_eq!(char_prefix("héllo", 10), "héllo");
    }
}
