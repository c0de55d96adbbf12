//! Style tags carried by text segments.
//!
//! Seven tag kinds exist. Foreground color, background color, and weight are
//! value-carrying and mutually exclusive per kind: a segment holds at most
//! one of each, and setting a new value replaces the old one. Blink,
//! strike-through, underline-strike, and italics are boolean presence tags.
//!
//! [`TagSet`] stores one slot per value-carrying kind plus a [`StyleFlags`]
//! bit set for the presence kinds, so per-kind uniqueness is structural and
//! replacement cannot accidentally match the wrong tag.
//!
//! # Examples
//!
//! ```
//! use richspan::{Rgba, StyleFlags, TagSet, Weight};
//!
//! let mut tags = TagSet::EMPTY.with_weight(Weight::Bold);
//! tags.set_foreground(Rgba::RED);
//! tags.set_foreground(Rgba::BLUE); // replaces, never accumulates
//! tags.set_flag(StyleFlags::ITALIC, true);
//!
//! assert_eq!(tags.fg, Some(Rgba::BLUE));
//! assert_eq!(tags.tags().len(), 3);
//! ```

use std::fmt;

use bitflags::bitflags;

use crate::color::Rgba;

bitflags! {
    /// Boolean presence tags.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct StyleFlags: u8 {
        /// Blinking text.
        const BLINK         = 0x01;
        /// Strike-through.
        const STRIKETHROUGH = 0x02;
        /// Underline-strike.
        const UNDERSTRIKE   = 0x04;
        /// Italics.
        const ITALIC        = 0x08;
    }
}

/// Weight/thickness scale for the value-carrying weight kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Weight {
    Thin,
    Light,
    #[default]
    Regular,
    Medium,
    Bold,
    Heavy,
}

impl Weight {
    /// Lowercase name, as accepted by [`Weight::from_name`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Thin => "thin",
            Self::Light => "light",
            Self::Regular => "regular",
            Self::Medium => "medium",
            Self::Bold => "bold",
            Self::Heavy => "heavy",
        }
    }

    /// Parse a weight from its name, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "thin" => Some(Self::Thin),
            "light" => Some(Self::Light),
            "regular" => Some(Self::Regular),
            "medium" => Some(Self::Medium),
            "bold" => Some(Self::Bold),
            "heavy" => Some(Self::Heavy),
            _ => None,
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The seven tag kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TagKind {
    Foreground,
    Background,
    Weight,
    Blink,
    Strikethrough,
    Understrike,
    Italic,
}

impl TagKind {
    /// Whether this kind carries a value (color or weight) rather than a
    /// boolean presence.
    #[must_use]
    pub const fn is_value_carrying(self) -> bool {
        matches!(self, Self::Foreground | Self::Background | Self::Weight)
    }

    /// Lowercase name used in messages and [`Container::inspect`](crate::Container::inspect).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Foreground => "foreground",
            Self::Background => "background",
            Self::Weight => "weight",
            Self::Blink => "blink",
            Self::Strikethrough => "strikethrough",
            Self::Understrike => "understrike",
            Self::Italic => "italic",
        }
    }

    /// The presence bit for a boolean kind, `None` for value-carrying kinds.
    #[must_use]
    pub const fn flag(self) -> Option<StyleFlags> {
        match self {
            Self::Blink => Some(StyleFlags::BLINK),
            Self::Strikethrough => Some(StyleFlags::STRIKETHROUGH),
            Self::Understrike => Some(StyleFlags::UNDERSTRIKE),
            Self::Italic => Some(StyleFlags::ITALIC),
            _ => None,
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One symbolic style tag, as enumerated by [`TagSet::tags`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleTag {
    Foreground(Rgba),
    Background(Rgba),
    Weight(Weight),
    Blink,
    Strikethrough,
    Understrike,
    Italic,
}

impl StyleTag {
    /// The kind of this tag.
    #[must_use]
    pub const fn kind(&self) -> TagKind {
        match self {
            Self::Foreground(_) => TagKind::Foreground,
            Self::Background(_) => TagKind::Background,
            Self::Weight(_) => TagKind::Weight,
            Self::Blink => TagKind::Blink,
            Self::Strikethrough => TagKind::Strikethrough,
            Self::Understrike => TagKind::Understrike,
            Self::Italic => TagKind::Italic,
        }
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Foreground(color) => write!(f, "fg={color}"),
            Self::Background(color) => write!(f, "bg={color}"),
            Self::Weight(weight) => write!(f, "weight={weight}"),
            Self::Blink | Self::Strikethrough | Self::Understrike | Self::Italic => {
                f.write_str(self.kind().as_str())
            }
        }
    }
}

/// The full style-tag set of one segment.
///
/// A split copies the set verbatim onto both halves; formatting mutates it
/// in place.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TagSet {
    /// Foreground color tag, at most one.
    pub fg: Option<Rgba>,
    /// Background color tag, at most one.
    pub bg: Option<Rgba>,
    /// Weight tag, at most one.
    pub weight: Option<Weight>,
    /// Boolean presence tags.
    pub flags: StyleFlags,
}

impl TagSet {
    /// No tags at all.
    pub const EMPTY: Self = Self {
        fg: None,
        bg: None,
        weight: None,
        flags: StyleFlags::empty(),
    };

    /// Check whether no tag of any kind is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.weight.is_none() && self.flags.is_empty()
    }

    /// Return the set with a foreground color tag.
    #[must_use]
    pub const fn with_foreground(self, color: Rgba) -> Self {
        Self {
            fg: Some(color),
            ..self
        }
    }

    /// Return the set with a background color tag.
    #[must_use]
    pub const fn with_background(self, color: Rgba) -> Self {
        Self {
            bg: Some(color),
            ..self
        }
    }

    /// Return the set with a weight tag.
    #[must_use]
    pub const fn with_weight(self, weight: Weight) -> Self {
        Self {
            weight: Some(weight),
            ..self
        }
    }

    /// Return the set with the given presence flags added.
    #[must_use]
    pub const fn with_flags(self, flags: StyleFlags) -> Self {
        Self {
            flags: self.flags.union(flags),
            ..self
        }
    }

    /// Set the foreground color, replacing any existing foreground tag.
    pub fn set_foreground(&mut self, color: Rgba) {
        self.fg = Some(color);
    }

    /// Set the background color, replacing any existing background tag.
    pub fn set_background(&mut self, color: Rgba) {
        self.bg = Some(color);
    }

    /// Set the weight, replacing any existing weight tag.
    pub fn set_weight(&mut self, weight: Weight) {
        self.weight = Some(weight);
    }

    /// Set or clear a presence flag. Idempotent: repeating the same call is
    /// a no-op.
    pub fn set_flag(&mut self, flag: StyleFlags, present: bool) {
        self.flags.set(flag, present);
    }

    /// Check whether a tag of the given kind is present.
    #[must_use]
    pub fn contains(&self, kind: TagKind) -> bool {
        match kind {
            TagKind::Foreground => self.fg.is_some(),
            TagKind::Background => self.bg.is_some(),
            TagKind::Weight => self.weight.is_some(),
            _ => kind.flag().is_some_and(|flag| self.flags.contains(flag)),
        }
    }

    /// Enumerate the symbolic tags present, in kind order (fg, bg, weight,
    /// then presence flags).
    #[must_use]
    pub fn tags(&self) -> Vec<StyleTag> {
        let mut tags = Vec::new();
        if let Some(color) = self.fg {
            tags.push(StyleTag::Foreground(color));
        }
        if let Some(color) = self.bg {
            tags.push(StyleTag::Background(color));
        }
        if let Some(weight) = self.weight {
            tags.push(StyleTag::Weight(weight));
        }
        if self.flags.contains(StyleFlags::BLINK) {
            tags.push(StyleTag::Blink);
        }
        if self.flags.contains(StyleFlags::STRIKETHROUGH) {
            tags.push(StyleTag::Strikethrough);
        }
        if self.flags.contains(StyleFlags::UNDERSTRIKE) {
            tags.push(StyleTag::Understrike);
        }
        if self.flags.contains(StyleFlags::ITALIC) {
            tags.push(StyleTag::Italic);
        }
        tags
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for tag in self.tags() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{tag}")?;
            first = false;
        }
        Ok(())
    }
}
