//! CSS selector building
//!
//! Selectors are assembled one fragment at a time. Fragments must appear in
//! the order of [`FragmentKind::ALL`], and element, id and pseudo-element may
//! appear at most once per compound selector.
//!
//! ```
//! use wombat_css::selector::{combine, element, id};
//!
//! # fn main() -> Result<(), wombat_css::SelectorError> {
//! let nav = id("nav")?.class("open")?;
//! let link = element("a")?.pseudo_class("hover")?;
//! assert_eq!(combine(&nav, ">", &link).stringify(), "#nav.open > a:hover");
//! # Ok(())
//! # }
//! ```

mod builder;

use strum_macros::{Display, EnumString};
use thiserror::Error;

pub use builder::SelectorBuilder;

/// A kind of simple selector fragment, ordered by rank.
///
/// The derived `Ord` follows declaration order, which is the order fragments
/// must be appended in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum FragmentKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Rendered verbatim: `div`, `a`, `li`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Rendered as `#value`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Rendered as `.value`
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Rendered as `[value]`
    Attribute,

    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Rendered as `:value`
    PseudoClass,

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Rendered as `::value`
    PseudoElement,
}

impl FragmentKind {
    /// Every kind, in the order fragments must be appended.
    pub const ALL: [Self; 6] = [
        Self::Element,
        Self::Id,
        Self::Class,
        Self::Attribute,
        Self::PseudoClass,
        Self::PseudoElement,
    ];

    /// Position of this kind in [`Self::ALL`].
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Whether this kind may occur at most once in a compound selector.
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    const fn prefix(self) -> &'static str {
        match self {
            Self::Element => "",
            Self::Id => "#",
            Self::Class => ".",
            Self::Attribute => "[",
            Self::PseudoClass => ":",
            Self::PseudoElement => "::",
        }
    }

    const fn suffix(self) -> &'static str {
        match self {
            Self::Attribute => "]",
            _ => "",
        }
    }

    /// Render `value` as a fragment of this kind.
    ///
    /// The value is inserted as-is; no escaping is performed.
    #[must_use]
    pub fn render(self, value: &str) -> String {
        let mut out = String::with_capacity(value.len() + 2);
        self.render_into(&mut out, value);
        out
    }

    pub(crate) fn render_into(self, out: &mut String, value: &str) {
        out.push_str(self.prefix());
        out.push_str(value);
        out.push_str(self.suffix());
    }
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// `combine` accepts any token; these are the ones CSS defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    #[strum(serialize = " ")]
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    #[strum(serialize = ">")]
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    #[strum(serialize = "+")]
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    #[strum(serialize = "~")]
    SubsequentSibling,
}

impl Combinator {
    /// The token for this combinator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }

    /// Recognize a combinator token, tolerating surrounding whitespace
    /// (`" > "` is a child combinator, `" "` is a descendant combinator).
    #[must_use]
    pub fn recognize(token: &str) -> Option<Self> {
        token
            .parse()
            .or_else(|_| token.trim().parse())
            .ok()
    }
}

impl AsRef<str> for Combinator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Errors raised while appending fragments to a [`SelectorBuilder`].
///
/// Both are terminal: the builder is consumed by the failing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A fragment was appended after a fragment of higher rank.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OrderViolation {
        /// The kind of the fragment appended before the offending one.
        previous: FragmentKind,
        /// The kind of the offending fragment.
        next: FragmentKind,
    },

    /// Element, id or pseudo-element was appended a second time.
    #[error(
        "Element, id and pseudo-element should not occur more then one time inside the selector"
    )]
    DuplicateViolation {
        /// The repeated kind.
        kind: FragmentKind,
    },
}

/// Start a selector with a type selector (`div`).
///
/// # Errors
///
/// Never fails on a fresh builder; the `Result` keeps the signature uniform
/// with the chained form.
pub fn element(value: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().element(value)
}

/// Start a selector with an ID selector (`#main`).
///
/// # Errors
///
/// Never fails on a fresh builder.
pub fn id(value: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().id(value)
}

/// Start a selector with a class selector (`.active`).
///
/// # Errors
///
/// Never fails on a fresh builder.
pub fn class(value: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().class(value)
}

/// Start a selector with an attribute selector (`[href]`).
///
/// # Errors
///
/// Never fails on a fresh builder.
pub fn attr(value: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().attr(value)
}

/// Start a selector with a pseudo-class (`:hover`).
///
/// # Errors
///
/// Never fails on a fresh builder.
pub fn pseudo_class(value: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().pseudo_class(value)
}

/// Start a selector with a pseudo-element (`::before`).
///
/// # Errors
///
/// Never fails on a fresh builder.
pub fn pseudo_element(value: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().pseudo_element(value)
}

/// Join two selectors with a combinator: `"<first> <combinator> <second>"`.
///
/// The result can itself be passed to `combine` to build longer chains.
#[must_use]
pub fn combine(first: &SelectorBuilder, combinator: &str, second: &SelectorBuilder) -> SelectorBuilder {
    SelectorBuilder::new().combine(first, combinator, second)
}
