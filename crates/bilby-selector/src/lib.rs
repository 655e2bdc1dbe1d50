//! Selector tokenizer, parser, and containment matcher for the Bilby
//! selector tool.
//!
//! # Scope
//!
//! This crate implements a restricted dialect of CSS selectors
//! ([Selectors Level 4](https://www.w3.org/TR/selectors-4/), simple
//! selectors only) and an engine for matching parsed selectors against
//! each other:
//!
//! - **Tokenizer**: a single-pass scanner over selector text producing
//!   tagged tokens for `:not(`, name/class/ID fragments, bracketed
//!   attribute conditions, `)`, and comma separators; anything else is
//!   skipped, which is how combinator punctuation is kept meaningless.
//!
//! - **Parser**: token stream to structured [`Selector`] records, one per
//!   comma-separated group, with typed errors for nested `:not()`,
//!   selector lists inside `:not()`, and unescaped `$` in attribute names.
//!
//! - **Matcher**: a trie over element, class, and attribute constraints
//!   ([`MatchIndex`]) answering "does any registered selector cover this
//!   query selector?", with per-batch OR-groups (first satisfied member
//!   wins the callback) and per-entry negation exclusion.
//!
//! # Not Implemented
//!
//! - Combinators (descendant, child, sibling) - rejected by the grammar
//! - Specificity calculation
//! - Nested `:not()` and selector lists inside `:not()` (parse errors)
//! - Attribute match operators other than exact value (`~=`, `^=`, ...)

/// Selector-against-selector matching engine.
pub mod matcher;
/// Selector list parsing.
pub mod parser;
/// Structured selector representation and serialization.
pub mod selector;
/// Selector tokenizer for the restricted dialect.
pub mod tokenizer;

// Re-exports for convenience
pub use matcher::{MatchCallback, MatchIndex};
pub use parser::{ParseError, parse, unescape_attribute_name};
pub use selector::{Selector, escape_attribute_name};
pub use tokenizer::{FragmentPrefix, SelectorToken, SelectorTokenizer};
