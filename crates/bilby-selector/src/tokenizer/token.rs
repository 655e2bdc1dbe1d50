//! Token types for the restricted selector dialect.
//!
//! The dialect covers simple selectors only: type, class, and ID fragments
//! ([Selectors Level 4 § 5-6](https://www.w3.org/TR/selectors-4/#elemental-selectors)),
//! bracketed attribute conditions, a single non-nested `:not(...)` group, and
//! top-level comma separation
//! ([§ 3.1 Selector lists](https://www.w3.org/TR/selectors-4/#grouping)).
//! Combinators are deliberately absent from the token set: the characters
//! that would spell them never form a token and are skipped by the scanner.

/// The sigil in front of a fragment token, when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentPrefix {
    /// `.` - the fragment names a class
    /// ([§ 6.6](https://www.w3.org/TR/selectors-4/#class-html)).
    Class,
    /// `#` - the fragment names an ID, shorthand for an `id` attribute
    /// condition ([§ 6.7](https://www.w3.org/TR/selectors-4/#id-selectors)).
    Id,
}

/// A single token of the selector dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorToken {
    /// `:not(` - opens a negation group
    /// ([§ 4.4 The negation pseudo-class](https://www.w3.org/TR/selectors-4/#negation)).
    /// The dialect allows one group per simple selector position and no
    /// nesting; enforcement happens in the parser, not here.
    NotOpen,

    /// A bare name, class, or ID fragment: a maximal run of word or hyphen
    /// characters, optionally preceded by `.` or `#`.
    Fragment {
        /// The sigil, or `None` for an element name.
        prefix: Option<FragmentPrefix>,
        /// The fragment text, excluding the sigil. Never empty.
        text: String,
    },

    /// A bracketed attribute condition: `[name]`, `[name=value]`,
    /// `[name="value"]`, or `[name='value']`.
    Attribute {
        /// The attribute name exactly as written, escapes preserved.
        /// Unescaping (and the reserved-`$` check) is the parser's job.
        name: String,
        /// The quote character around the value, if the value was quoted.
        quote: Option<char>,
        /// The raw value; empty when the condition is presence-only.
        value: String,
    },

    /// `)` - closes a negation group.
    NotClose,

    /// A top-level list separator: optional whitespace, `,`, optional
    /// whitespace. Ends the selector under construction.
    Separator,
}
