//! Selector list parsing.
//!
//! Turns the token stream into a sequence of [`Selector`] records, one per
//! top-level comma-separated group. Negation nesting depth is tracked with
//! an explicit builder stack: `:not(` pushes a fresh builder, `)` pops it
//! into the enclosing selector's negation groups, and the two structural
//! errors fall out of the stack depth check.

use thiserror::Error;

use crate::selector::Selector;
use crate::tokenizer::{FragmentPrefix, SelectorToken, SelectorTokenizer};

/// Errors raised while parsing selector text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// `:not(` appeared while another negation group was still open.
    #[error("negation groups cannot be nested")]
    NestedNegation,

    /// A top-level `,` appeared inside an open negation group.
    #[error("selector lists are not allowed inside :not()")]
    MultipleSelectorsInNegation,

    /// An attribute name contained a literal `$` not preceded by `\`.
    #[error("unescaped '$' in attribute name '{name}'")]
    UnescapedDollar {
        /// The offending attribute name as written in the source.
        name: String,
    },
}

/// Parse selector text into its comma-separated selector records.
///
/// The grammar is permissive of stray characters (they are skipped, which is
/// how combinator punctuation is tolerated without gaining meaning), but
/// strict about negation structure and reserved `$` in attribute names.
///
/// # Errors
///
/// Returns [`ParseError`] for nested `:not()`, a selector list inside
/// `:not()`, or an unescaped `$` in an attribute name.
pub fn parse(text: &str) -> Result<Vec<Selector>, ParseError> {
    let mut tokenizer = SelectorTokenizer::new(text);
    tokenizer.run();

    let mut list = Vec::new();
    // stack[0] is the selector under construction; a second entry, when
    // present, is the open negation target all tokens currently apply to.
    let mut stack = vec![Selector::new()];

    for token in tokenizer.into_tokens() {
        match token {
            SelectorToken::Fragment { prefix: None, text } => {
                active(&mut stack).set_element(text);
            }
            SelectorToken::Fragment {
                prefix: Some(FragmentPrefix::Class),
                text,
            } => {
                active(&mut stack).add_class(&text);
            }
            SelectorToken::Fragment {
                prefix: Some(FragmentPrefix::Id),
                text,
            } => {
                active(&mut stack).add_attribute("id", &text);
            }
            SelectorToken::Attribute { name, value, .. } => {
                let name = unescape_attribute_name(&name)?;
                active(&mut stack).add_attribute(&name, &value);
            }
            SelectorToken::NotOpen => {
                if stack.len() > 1 {
                    return Err(ParseError::NestedNegation);
                }
                stack.push(Selector::new());
            }
            SelectorToken::NotClose => {
                // A stray `)` outside any negation group is ignored, like
                // every other character the grammar has no use for.
                if stack.len() > 1 {
                    close_negation(&mut stack);
                }
            }
            SelectorToken::Separator => {
                if stack.len() > 1 {
                    return Err(ParseError::MultipleSelectorsInNegation);
                }
                seal_into(&mut stack[0], &mut list);
            }
        }
    }

    // End of input closes an unterminated negation group and seals the
    // final selector.
    while stack.len() > 1 {
        close_negation(&mut stack);
    }
    seal_into(&mut stack[0], &mut list);

    Ok(list)
}

/// The builder all tokens currently apply to: the open negation target if
/// one exists, otherwise the top-level selector.
fn active(stack: &mut [Selector]) -> &mut Selector {
    stack.last_mut().expect("builder stack is never empty")
}

/// Pop the open negation target into the enclosing selector.
fn close_negation(stack: &mut Vec<Selector>) {
    if let Some(group) = stack.pop() {
        active(stack).push_not_group(group);
    }
}

/// Seal the finished selector into the result list and reset the builder.
fn seal_into(current: &mut Selector, list: &mut Vec<Selector>) {
    let mut sealed = core::mem::take(current);
    sealed.seal();
    list.push(sealed);
}

/// Remove backslash escapes from an attribute name.
///
/// A backslash is dropped and arms escaping for the character after it.
/// `$` is reserved: unescaped it is an error, escaped it is kept literally.
///
/// # Errors
///
/// Returns [`ParseError::UnescapedDollar`] when a `$` appears unescaped.
pub fn unescape_attribute_name(name: &str) -> Result<String, ParseError> {
    let mut unescaped = String::with_capacity(name.len());
    let mut escaping = false;
    for c in name.chars() {
        if c == '\\' {
            escaping = true;
            continue;
        }
        if c == '$' && !escaping {
            return Err(ParseError::UnescapedDollar {
                name: name.to_string(),
            });
        }
        unescaped.push(c);
        escaping = false;
    }
    Ok(unescaped)
}
