//! Selector-against-selector matching.
//!
//! A [`MatchIndex`] is built once from batches of registered selectors and
//! then queried with single selectors. Registration flattens each selector
//! into its constraints (element, then classes, then attributes, all in
//! source order) and threads them through a trie: every constraint before
//! the last descends into a nested index keyed by its fragment (a *partial*
//! slot), and the final constraint lands in a *terminal* slot holding the
//! match entry itself. Querying probes every axis of every reached level
//! with the same, full query selector; nested levels only hold entries that
//! needed more constraints, so recursion cannot produce spurious hits.
//!
//! Selectors registered together in one batch form an OR-group: their
//! entries share one "already matched" flag, reset at the start of each
//! top-level query, so the callback fires at most once per batch per query
//! no matter how many members the query satisfies.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::selector::Selector;

/// Terminal fragment that matches any probed value on its axis.
const WILDCARD: &str = "*";

/// Callback invoked once per satisfied registration group.
pub type MatchCallback<'a, C> = dyn FnMut(&Selector, &C) + 'a;

/// Shared once-per-query flag for an OR-group of registered selectors.
#[derive(Debug, Default)]
struct GroupState {
    already_matched: Cell<bool>,
}

/// One registered selector together with its caller context and, when the
/// selector arrived in a multi-selector batch, the batch's shared flag.
struct MatchEntry<C> {
    selector: Rc<Selector>,
    context: C,
    group: Option<Rc<GroupState>>,
}

/// One axis of an index level: terminal entries and partial descents, both
/// keyed by fragment string.
struct AxisMap<C> {
    terminal: HashMap<String, Vec<MatchEntry<C>>>,
    partial: HashMap<String, MatchIndex<C>>,
}

impl<C> Default for AxisMap<C> {
    fn default() -> Self {
        Self {
            terminal: HashMap::new(),
            partial: HashMap::new(),
        }
    }
}

/// A multi-axis selector trie; `C` is the opaque per-registration context
/// handed back through the match callback.
///
/// Build the index with [`add_selectables`](Self::add_selectables), then
/// query it any number of times. Queries never mutate the trie itself, only
/// the transient group flags, which are re-armed at the start of every
/// top-level query, so repeated queries are independent of each other.
pub struct MatchIndex<C> {
    /// Keyed by element name; the `*` terminal key is a wildcard.
    element: AxisMap<C>,
    /// Keyed by class name.
    class: AxisMap<C>,
    /// Keyed by attribute name, then by attribute value; the empty-string
    /// value key holds presence-only registrations.
    attribute: HashMap<String, AxisMap<C>>,
    /// Registered selectors with no constraints at all: a bare universal
    /// matches every query, so these never enter the trie proper.
    universal: Vec<MatchEntry<C>>,
}

impl<C> Default for MatchIndex<C> {
    fn default() -> Self {
        Self {
            element: AxisMap::default(),
            class: AxisMap::default(),
            attribute: HashMap::new(),
            universal: Vec::new(),
        }
    }
}

/// One flattened constraint of a registered selector.
enum Constraint {
    Element(String),
    Class(String),
    Attribute(String, String),
}

/// Flatten a selector into its constraints in the fixed registration order:
/// element, classes in source order, attributes in source order.
fn constraints_of(selector: &Selector) -> Vec<Constraint> {
    let mut constraints = Vec::new();
    if let Some(element) = selector.element() {
        constraints.push(Constraint::Element(element.to_string()));
    }
    for class in selector.class_names() {
        constraints.push(Constraint::Class(class.clone()));
    }
    for (name, value) in selector.attributes() {
        constraints.push(Constraint::Attribute(name.clone(), value.clone()));
    }
    constraints
}

impl<C: Clone> MatchIndex<C> {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a batch of selectors under one context.
    ///
    /// A batch of more than one selector becomes an OR-group: its entries
    /// share a single once-per-query flag, so a query satisfying several
    /// members still triggers the callback only once.
    pub fn add_selectables(&mut self, selectors: &[Selector], context: C) {
        let group = (selectors.len() > 1).then(|| Rc::new(GroupState::default()));
        for selector in selectors {
            self.insert(
                Rc::new(selector.clone()),
                context.clone(),
                group.clone(),
            );
        }
    }

    /// Thread one selector's constraints through the trie.
    fn insert(&mut self, selector: Rc<Selector>, context: C, group: Option<Rc<GroupState>>) {
        let mut constraints = constraints_of(&selector);
        let entry = MatchEntry {
            selector,
            context,
            group,
        };

        let Some(last) = constraints.pop() else {
            self.universal.push(entry);
            return;
        };

        let mut node = self;
        for constraint in constraints {
            node = match constraint {
                Constraint::Element(name) => node.element.partial.entry(name).or_default(),
                Constraint::Class(name) => node.class.partial.entry(name).or_default(),
                Constraint::Attribute(name, value) => node
                    .attribute
                    .entry(name)
                    .or_default()
                    .partial
                    .entry(value)
                    .or_default(),
            };
        }

        match last {
            Constraint::Element(name) => {
                node.element.terminal.entry(name).or_default().push(entry);
            }
            Constraint::Class(name) => {
                node.class.terminal.entry(name).or_default().push(entry);
            }
            Constraint::Attribute(name, value) => {
                node.attribute
                    .entry(name)
                    .or_default()
                    .terminal
                    .entry(value)
                    .or_default()
                    .push(entry);
            }
        }
    }
}

impl<C> MatchIndex<C> {
    /// Does any registered selector cover the query?
    ///
    /// The result is independent of callbacks; a selector knocked out by one
    /// of its negation groups does not count as covering the query.
    #[must_use]
    pub fn matches(&self, query: &Selector) -> bool {
        self.reset_group_flags();
        let mut callback: Option<&mut MatchCallback<'_, C>> = None;
        self.probe(query, &mut callback)
    }

    /// Like [`matches`](Self::matches), additionally invoking `callback`
    /// with each satisfied entry's selector and context, at most once per
    /// registration batch.
    pub fn matches_with<F>(&self, query: &Selector, mut callback: F) -> bool
    where
        F: FnMut(&Selector, &C),
    {
        self.reset_group_flags();
        let mut callback: Option<&mut MatchCallback<'_, C>> = Some(&mut callback);
        self.probe(query, &mut callback)
    }

    /// Probe one index level with the full query. Recursion re-probes the
    /// same query against nested levels; narrowing is unnecessary because a
    /// nested level only holds entries that required further constraints.
    fn probe(&self, query: &Selector, callback: &mut Option<&mut MatchCallback<'_, C>>) -> bool {
        let mut matched = false;

        for entry in &self.universal {
            matched |= finalize_entry(entry, query, callback);
        }

        if let Some(element) = query.element() {
            matched |= probe_fragment_axis(&self.element, element, query, callback);
        }

        for class in query.class_names() {
            matched |= probe_fragment_axis(&self.class, class, query, callback);
        }

        for (name, value) in query.attributes() {
            if let Some(axis) = self.attribute.get(name) {
                // A presence-only registration (empty value key) is
                // satisfied by any concrete value, so a valued query probes
                // both keys; a presence-only query probes only the empty
                // key and thus reaches presence-only registrations alone.
                matched |= probe_attribute_key(axis, "", query, callback);
                if !value.is_empty() {
                    matched |= probe_attribute_key(axis, value, query, callback);
                }
            }
        }

        matched
    }

    /// Re-arm every group flag reachable from this level. Runs once per
    /// top-level query, never from recursion.
    fn reset_group_flags(&self) {
        fn reset_entries<C>(entries: &[MatchEntry<C>]) {
            for entry in entries {
                if let Some(group) = &entry.group {
                    group.already_matched.set(false);
                }
            }
        }

        fn reset_axis<C>(axis: &AxisMap<C>) {
            for entries in axis.terminal.values() {
                reset_entries(entries);
            }
            for nested in axis.partial.values() {
                nested.reset_group_flags();
            }
        }

        reset_entries(&self.universal);
        reset_axis(&self.element);
        reset_axis(&self.class);
        for axis in self.attribute.values() {
            reset_axis(axis);
        }
    }
}

/// Probe the element or class axis with one query fragment: terminal hits
/// for the fragment and for the `*` wildcard are all finalized, and a
/// partial hit for the fragment recurses.
fn probe_fragment_axis<C>(
    axis: &AxisMap<C>,
    fragment: &str,
    query: &Selector,
    callback: &mut Option<&mut MatchCallback<'_, C>>,
) -> bool {
    let mut matched = false;
    for key in [fragment, WILDCARD] {
        if let Some(entries) = axis.terminal.get(key) {
            for entry in entries {
                matched |= finalize_entry(entry, query, callback);
            }
        }
    }
    if let Some(nested) = axis.partial.get(fragment) {
        matched |= nested.probe(query, callback);
    }
    matched
}

/// Probe one value key of an attribute's axis: terminal hits finalize,
/// a partial hit recurses. No wildcard exists on this axis.
fn probe_attribute_key<C>(
    axis: &AxisMap<C>,
    key: &str,
    query: &Selector,
    callback: &mut Option<&mut MatchCallback<'_, C>>,
) -> bool {
    let mut matched = false;
    if let Some(entries) = axis.terminal.get(key) {
        for entry in entries {
            matched |= finalize_entry(entry, query, callback);
        }
    }
    if let Some(nested) = axis.partial.get(key) {
        matched |= nested.probe(query, callback);
    }
    matched
}

/// Decide whether a terminal hit actually matches, and fire the callback.
///
/// Negation is checked first: an ephemeral index built from the entry's
/// negation groups is run against the same query, and a hit excludes the
/// entry. The check is skipped when the entry's group has already matched
/// this query; the group counts as matched either way, the callback just
/// stays quiet.
fn finalize_entry<C>(
    entry: &MatchEntry<C>,
    query: &Selector,
    callback: &mut Option<&mut MatchCallback<'_, C>>,
) -> bool {
    let group_unmatched = entry
        .group
        .as_ref()
        .is_none_or(|group| !group.already_matched.get());

    if group_unmatched && !entry.selector.not_groups().is_empty() {
        let mut negation: MatchIndex<()> = MatchIndex::new();
        negation.add_selectables(entry.selector.not_groups(), ());
        let mut no_callback: Option<&mut MatchCallback<'_, ()>> = None;
        if negation.probe(query, &mut no_callback) {
            return false;
        }
    }

    if group_unmatched {
        if let Some(callback) = callback.as_mut() {
            callback(entry.selector.as_ref(), &entry.context);
            if let Some(group) = &entry.group {
                group.already_matched.set(true);
            }
        }
    }

    true
}
