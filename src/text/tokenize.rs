//! Word tokenization
//!
//! A word is a maximal run of ASCII letters; everything else (digits,
//! punctuation, non-ASCII characters) is a separator and is dropped.

/// Lazy iterator over the lowercase word tokens of a string
///
/// Produced by [`tokenize`]. The iterator is `Clone`, so a scan can be
/// restarted from any point without re-allocating the input.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

/// Splits `text` into lowercase words, left to right
///
/// # Example
///
/// ```
/// use threadcount::text::tokenize;
///
/// let words: Vec<String> = tokenize("Hello, World! 123").collect();
/// assert_eq!(words, ["hello", "world"]);
/// ```
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens { rest: text }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let bytes = self.rest.as_bytes();
        // ASCII bytes are always char boundaries, so byte indices found here
        // are safe to slice on.
        let start = bytes.iter().position(|b| b.is_ascii_alphabetic())?;
        let run = &bytes[start..];
        let len = run
            .iter()
            .position(|b| !b.is_ascii_alphabetic())
            .unwrap_or(run.len());

        let word = self.rest[start..start + len].to_ascii_lowercase();
        self.rest = &self.rest[start + len..];
        Some(word)
    }
}
