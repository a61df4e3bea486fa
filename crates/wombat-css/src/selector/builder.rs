//! The fluent selector builder.

use std::fmt;

use wombat_common::warning::warn_once;

use super::{Combinator, FragmentKind, SelectorError};

/// An accumulating CSS selector.
///
/// Fragment methods take the builder by value and hand it back on success, so
/// a failed call leaves nothing behind to keep using:
///
/// ```
/// use wombat_css::selector::element;
///
/// # fn main() -> Result<(), wombat_css::SelectorError> {
/// let selector = element("a")?.attr(r#"href$=".png""#)?.pseudo_class("focus")?;
/// assert_eq!(selector.stringify(), r#"a[href$=".png"]:focus"#);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    /// Rendered output so far.
    text: String,
    /// One entry per appended fragment, in append order.
    kinds_seen: Vec<FragmentKind>,
    count_element: u8,
    count_id: u8,
    count_pseudo_element: u8,
}

impl SelectorBuilder {
    /// Create an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            kinds_seen: Vec::new(),
            count_element: 0,
            count_id: 0,
            count_pseudo_element: 0,
        }
    }

    /// Append a type selector (`div`).
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] after any other kind of fragment;
    /// [`SelectorError::DuplicateViolation`] after another element.
    pub fn element(self, value: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Element, value)
    }

    /// Append an ID selector (`#main`).
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] after a class, attribute or pseudo
    /// fragment; [`SelectorError::DuplicateViolation`] after another id.
    pub fn id(self, value: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Id, value)
    }

    /// Append a class selector (`.active`).
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] after an attribute or pseudo fragment.
    pub fn class(self, value: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Class, value)
    }

    /// Append an attribute selector. `value` is the text between the brackets,
    /// e.g. `href$=".png"`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] after a pseudo-class or pseudo-element.
    pub fn attr(self, value: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Attribute, value)
    }

    /// Append a pseudo-class (`:hover`, `:nth-child(2)`).
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] after a pseudo-element.
    pub fn pseudo_class(self, value: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::PseudoClass, value)
    }

    /// Append a pseudo-element (`::before`).
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateViolation`] after another pseudo-element.
    pub fn pseudo_element(self, value: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::PseudoElement, value)
    }

    /// Append a fragment of any kind.
    ///
    /// The order check runs before the uniqueness check, and `text` is only
    /// extended once both pass.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if `kind` ranks below the previous
    /// fragment; [`SelectorError::DuplicateViolation`] if `kind` is unique and
    /// already present.
    pub fn append(mut self, kind: FragmentKind, value: &str) -> Result<Self, SelectorError> {
        self.kinds_seen.push(kind);

        // Comparing against the previous fragment only is enough: every
        // earlier pair already passed the same check.
        if let Some(&[previous, next]) = self
            .kinds_seen
            .last_chunk::<2>()
            .filter(|[previous, next]| next < previous)
        {
            return Err(SelectorError::OrderViolation { previous, next });
        }

        if let Some(count) = self.counter_mut(kind) {
            *count += 1;
            if *count > 1 {
                return Err(SelectorError::DuplicateViolation { kind });
            }
        }

        kind.render_into(&mut self.text, value);
        #[cfg(feature = "selector-trace")]
        eprintln!("[selector] {kind} {value:?} -> {:?}", self.text);
        Ok(self)
    }

    const fn counter_mut(&mut self, kind: FragmentKind) -> Option<&mut u8> {
        match kind {
            FragmentKind::Element => Some(&mut self.count_element),
            FragmentKind::Id => Some(&mut self.count_id),
            FragmentKind::PseudoElement => Some(&mut self.count_pseudo_element),
            FragmentKind::Class | FragmentKind::Attribute | FragmentKind::PseudoClass => None,
        }
    }

    /// Append `"<first> <combinator> <second>"`.
    ///
    /// The combinator token is inserted verbatim. No ordering or uniqueness
    /// checks apply; an unrecognized token is reported once through the
    /// warning system and used anyway.
    #[must_use]
    pub fn combine(mut self, first: &Self, combinator: &str, second: &Self) -> Self {
        if Combinator::recognize(combinator).is_none() {
            let _ = warn_once("CSS", &format!("unrecognized combinator {combinator:?}"));
        }

        self.text.push_str(first.stringify());
        self.text.push(' ');
        self.text.push_str(combinator);
        self.text.push(' ');
        self.text.push_str(second.stringify());
        #[cfg(feature = "selector-trace")]
        eprintln!("[selector] combine {combinator:?} -> {:?}", self.text);
        self
    }

    /// The selector text built so far.
    #[must_use]
    pub fn stringify(&self) -> &str {
        &self.text
    }

    /// Kinds of the fragments appended so far, in append order.
    ///
    /// Combined selectors contribute no entries.
    #[must_use]
    pub fn kinds(&self) -> &[FragmentKind] {
        &self.kinds_seen
    }

    /// Whether nothing has been rendered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<SelectorBuilder> for String {
    fn from(builder: SelectorBuilder) -> Self {
        builder.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_only_track_unique_kinds() {
        let mut builder = SelectorBuilder::new();
        for kind in FragmentKind::ALL {
            assert_eq!(builder.counter_mut(kind).is_some(), kind.is_unique());
        }
    }

    #[test]
    fn test_combined_builder_records_no_kinds() {
        let a = SelectorBuilder::new().element("a").unwrap();
        let b = SelectorBuilder::new().element("b").unwrap();
        let combined = SelectorBuilder::new().combine(&a, "+", &b);
        assert!(combined.kinds().is_empty());
        assert_eq!(combined.count_element, 0);
    }
}
