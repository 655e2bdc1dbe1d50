//! Structured selector representation and its canonical text form.
//!
//! A [`Selector`] is one comma-delimited member of a selector list: an
//! optional element name, class names, attribute conditions, and negation
//! groups. It is produced incrementally by the parser and immutable once
//! sealed; the matcher consumes it read-only.

use core::fmt;

use serde::Serialize;

/// One parsed selector of the restricted dialect.
///
/// Field semantics:
/// - no element means "unspecified"; the literal element `*` means
///   "explicit universal" and arises from sealing a selector whose only
///   content is negation groups;
/// - class names are stored lowercase, in source order;
/// - attribute conditions are (name, value) pairs in source order, names
///   unescaped and values lowercase; an empty value means the condition is
///   presence-only;
/// - negation groups are themselves selectors, and never contain negation
///   groups of their own (the parser rejects nesting).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Selector {
    element: Option<String>,
    class_names: Vec<String>,
    attributes: Vec<(String, String)>,
    not_groups: Vec<Selector>,
}

impl Selector {
    /// Create an empty selector with no constraints.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The element name, if one was specified.
    #[must_use]
    pub fn element(&self) -> Option<&str> {
        self.element.as_deref()
    }

    /// Class names in source order, lowercase.
    #[must_use]
    pub fn class_names(&self) -> &[String] {
        &self.class_names
    }

    /// Attribute (name, value) conditions in source order.
    #[must_use]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Negation groups in source order.
    #[must_use]
    pub fn not_groups(&self) -> &[Selector] {
        &self.not_groups
    }

    /// True when the selector constrains nothing at all: no element, no
    /// classes, no attributes. (A sealed selector with negation groups
    /// always carries the `*` element, so it does not count as bare.)
    #[must_use]
    pub fn is_bare(&self) -> bool {
        self.element.is_none() && self.class_names.is_empty() && self.attributes.is_empty()
    }

    /// Set the element name. A later element fragment overwrites an earlier
    /// one, which is how `div p` collapses to `p`: the whitespace between
    /// them is not a token in this dialect.
    pub fn set_element(&mut self, name: impl Into<String>) {
        self.element = Some(name.into());
    }

    /// Append a class name, lowercased.
    pub fn add_class(&mut self, name: &str) {
        self.class_names.push(name.to_lowercase());
    }

    /// Append an attribute condition. The value is lowercased here so the
    /// invariant holds on every insertion path (`[attr=V]` and `#Id` alike);
    /// the name must already be unescaped.
    pub fn add_attribute(&mut self, name: &str, value: &str) {
        self.attributes
            .push((name.to_string(), value.to_lowercase()));
    }

    /// Attach a negation group. Only the parser builds these, which is what
    /// keeps the no-nesting invariant: it refuses `:not(` inside `:not(`.
    pub(crate) fn push_not_group(&mut self, group: Selector) {
        self.not_groups.push(group);
    }

    /// Seal the selector when its source segment ends: a selector that is
    /// nothing but negation groups becomes an explicit universal, so that
    /// `:not(.x)` reads back as `*:not(.x)` and matches on the element axis.
    pub(crate) fn seal(&mut self) {
        if self.is_bare() && !self.not_groups.is_empty() {
            self.element = Some("*".to_string());
        }
    }
}

/// Canonical text form: element, `.class` fragments, `[name]`/`[name=value]`
/// conditions with the name re-escaped, then `:not(...)` groups.
///
/// This normalizes whitespace and quoting, so it does not necessarily
/// reproduce the source text, but re-parsing it yields an equal structure.
impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(element) = &self.element {
            write!(f, "{element}")?;
        }
        for class in &self.class_names {
            write!(f, ".{class}")?;
        }
        for (name, value) in &self.attributes {
            let name = escape_attribute_name(name);
            if value.is_empty() {
                write!(f, "[{name}]")?;
            } else {
                write!(f, "[{name}={value}]")?;
            }
        }
        for group in &self.not_groups {
            write!(f, ":not({group})")?;
        }
        Ok(())
    }
}

/// Re-escape an attribute name for serialization: `\` becomes `\\` and the
/// reserved `$` becomes `\$`.
#[must_use]
pub fn escape_attribute_name(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '$' => escaped.push_str("\\$"),
            _ => escaped.push(c),
        }
    }
    escaped
}
