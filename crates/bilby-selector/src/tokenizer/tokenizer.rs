use super::token::{FragmentPrefix, SelectorToken};

/// Single-pass scanner for the restricted selector dialect.
///
/// At each position the scanner tries, in priority order: `:not(`, a
/// fragment, a bracketed attribute, `)`, and a comma separator. A character
/// that starts none of these is recorded as skipped and the scan moves on:
/// the grammar is permissive of stray characters rather than rejecting them,
/// which is how combinator punctuation ends up with no structural effect.
pub struct SelectorTokenizer {
    /// The input string being tokenized
    input: Vec<char>,
    /// Current position in the input
    position: usize,
    /// Collected tokens
    tokens: Vec<SelectorToken>,
    /// Characters no token rule claimed, in input order
    skipped: Vec<char>,
}

impl SelectorTokenizer {
    /// Create a new tokenizer with the given input.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into().chars().collect(),
            position: 0,
            tokens: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Scan the whole input, collecting tokens and skipped characters.
    pub fn run(&mut self) {
        while self.position < self.input.len() {
            match self.scan_token() {
                Some(token) => self.tokens.push(token),
                None => {
                    if let Some(c) = self.consume() {
                        self.skipped.push(c);
                    }
                }
            }
        }
    }

    /// Return the collected tokens, consuming the tokenizer.
    #[must_use]
    pub fn into_tokens(self) -> Vec<SelectorToken> {
        self.tokens
    }

    /// Return a reference to the collected tokens.
    #[must_use]
    pub fn tokens(&self) -> &[SelectorToken] {
        &self.tokens
    }

    /// Characters the scanner could not form a token from.
    #[must_use]
    pub fn skipped(&self) -> &[char] {
        &self.skipped
    }

    /// Try to scan one token at the current position.
    ///
    /// Returns `None` without consuming anything when no rule matches here.
    fn scan_token(&mut self) -> Option<SelectorToken> {
        if self.input_starts_with(":not(") {
            self.position += 5;
            return Some(SelectorToken::NotOpen);
        }

        match self.peek()? {
            '.' | '#' if self.peek_at(1).is_some_and(is_fragment_char) => {
                let prefix = if self.consume() == Some('.') {
                    FragmentPrefix::Class
                } else {
                    FragmentPrefix::Id
                };
                Some(SelectorToken::Fragment {
                    prefix: Some(prefix),
                    text: self.consume_fragment_run(),
                })
            }

            c if is_fragment_char(c) => Some(SelectorToken::Fragment {
                prefix: None,
                text: self.consume_fragment_run(),
            }),

            '[' => self.scan_attribute(),

            ')' => {
                let _ = self.consume();
                Some(SelectorToken::NotClose)
            }

            _ => self.scan_separator(),
        }
    }

    /// Consume a maximal non-empty run of word/hyphen characters.
    fn consume_fragment_run(&mut self) -> String {
        let mut text = String::new();
        while self.peek().is_some_and(is_fragment_char) {
            if let Some(c) = self.consume() {
                text.push(c);
            }
        }
        text
    }

    /// Scan `[name]` / `[name=value]` with an optionally quoted value.
    ///
    /// The bracket form must complete for a token to be produced; on any
    /// shortfall (empty name, missing `]`, unterminated quote) the position
    /// is rewound and the `[` falls through to skipped-character handling.
    fn scan_attribute(&mut self) -> Option<SelectorToken> {
        let start = self.position;
        let _ = self.consume(); // [

        let mut name = String::new();
        while self.peek().is_some_and(is_attribute_name_char) {
            if let Some(c) = self.consume() {
                name.push(c);
            }
        }
        if name.is_empty() {
            self.position = start;
            return None;
        }

        match self.peek() {
            Some(']') => {
                let _ = self.consume();
                Some(SelectorToken::Attribute {
                    name,
                    quote: None,
                    value: String::new(),
                })
            }
            Some('=') => {
                let _ = self.consume();
                let Some((quote, value)) = self.scan_attribute_value() else {
                    self.position = start;
                    return None;
                };
                if self.peek() == Some(']') {
                    let _ = self.consume();
                    Some(SelectorToken::Attribute { name, quote, value })
                } else {
                    self.position = start;
                    None
                }
            }
            _ => {
                self.position = start;
                None
            }
        }
    }

    /// Scan the value part after `=`: a quoted string or an unquoted run of
    /// characters other than `]` and quotes. The unquoted run may be empty.
    fn scan_attribute_value(&mut self) -> Option<(Option<char>, String)> {
        match self.peek() {
            Some(q @ ('"' | '\'')) => {
                let _ = self.consume();
                let mut value = String::new();
                loop {
                    match self.consume() {
                        Some(c) if c == q => return Some((Some(q), value)),
                        Some(c) => value.push(c),
                        None => return None, // unterminated string
                    }
                }
            }
            _ => {
                let mut value = String::new();
                while self
                    .peek()
                    .is_some_and(|c| !matches!(c, ']' | '"' | '\''))
                {
                    if let Some(c) = self.consume() {
                        value.push(c);
                    }
                }
                Some((None, value))
            }
        }
    }

    /// Scan a separator: optional whitespace, `,`, optional whitespace.
    ///
    /// Whitespace is only consumed when the comma is actually present;
    /// otherwise the position is rewound so the whitespace characters are
    /// skipped one by one.
    fn scan_separator(&mut self) -> Option<SelectorToken> {
        let start = self.position;
        while self.peek().is_some_and(char::is_whitespace) {
            let _ = self.consume();
        }
        if self.peek() == Some(',') {
            let _ = self.consume();
            while self.peek().is_some_and(char::is_whitespace) {
                let _ = self.consume();
            }
            Some(SelectorToken::Separator)
        } else {
            self.position = start;
            None
        }
    }

    /// Check whether the input at the current position starts with `prefix`.
    fn input_starts_with(&self, prefix: &str) -> bool {
        prefix
            .chars()
            .enumerate()
            .all(|(i, c)| self.peek_at(i) == Some(c))
    }

    /// Consume and return the next character.
    fn consume(&mut self) -> Option<char> {
        let c = self.input.get(self.position).copied();
        if c.is_some() {
            self.position += 1;
        }
        c
    }

    /// Peek at the next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    /// Peek at a character at an offset from the current position.
    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }
}

/// Characters that may appear in a fragment: word characters or `-`.
fn is_fragment_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Characters that may appear in a (still-escaped) attribute name.
///
/// `$` is reserved in attribute names and must be written `\$`; the scanner
/// accepts both forms and leaves the distinction to unescaping. Hyphens are
/// not name characters in this dialect.
fn is_attribute_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '*' | '\\' | '$')
}
