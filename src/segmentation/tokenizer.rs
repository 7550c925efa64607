/// Separator characters used when no custom set is configured: common
/// punctuation, whitespace, and bracket characters of plain prose.
pub const DEFAULT_SEPARATORS: &str = "!,?. \"'\t\n\r&*()-_{}[];:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Separator,
}

/// A maximal run of characters from a single line, either entirely
/// word-forming or entirely separators, never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

/// Separator membership for the tokenizer. Built once, read-only afterwards.
///
/// All separators are ASCII, so membership is a table lookup rather than a
/// set probe. Characters outside ASCII are always word-forming.
#[derive(Debug, Clone)]
pub struct SeparatorSet {
    table: [bool; 128],
}

impl SeparatorSet {
    pub fn new(separators: &str) -> Self {
        let mut table = [false; 128];
        for c in separators.chars().filter(|c| c.is_ascii()) {
            table[c as usize] = true;
        }
        SeparatorSet { table }
    }

    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.table[c as usize]
    }

    pub fn classify(&self, c: char) -> TokenKind {
        if self.contains(c) {
            TokenKind::Separator
        } else {
            TokenKind::Word
        }
    }

    /// Returns the maximal run starting at `offset`, or `None` once the line
    /// is consumed. `offset` must lie on a char boundary; driving this
    /// through [`SeparatorSet::tokens`] keeps that invariant.
    pub fn next_token<'a>(&self, line: &'a str, offset: usize) -> Option<Token<'a>> {
        let rest = line.get(offset..)?;
        let first = rest.chars().next()?;
        let kind = self.classify(first);

        let end = rest
            .char_indices()
            .find(|(_, c)| self.classify(*c) != kind)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());

        Some(Token { text: &rest[..end], kind })
    }

    /// Lazy tokenization of a whole line from offset 0. The runs alternate
    /// between word and separator kinds and concatenate back to the line.
    pub fn tokens<'a>(&'a self, line: &'a str) -> Tokens<'a> {
        Tokens { separators: self, line, offset: 0 }
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        SeparatorSet::new(DEFAULT_SEPARATORS)
    }
}

pub struct Tokens<'a> {
    separators: &'a SeparatorSet,
    line: &'a str,
    offset: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let token = self.separators.next_token(self.line, self.offset)?;
        self.offset += token.text.len();
        Some(token)
    }
}
