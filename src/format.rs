//! Formatting commands.
//!
//! A [`Format`] is the typed form of one formatting request: a kind plus its
//! value, color and weight kinds carrying a value, presence kinds carrying a
//! bool. Hosts that deliver commands loosely typed, as a
//! ([`TagKind`], [`FormatValue`]) pair, go through [`Format::from_command`],
//! which rejects mismatched value types before anything is mutated.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::style::{StyleFlags, TagKind, TagSet, Weight};

/// A loosely-typed formatting command value, as reported by a host.
#[derive(Clone, Debug, PartialEq)]
pub enum FormatValue {
    /// Color or weight value, e.g. `"red"`, `"#1a1a2e"`, `"bold"`.
    Text(String),
    /// Presence value for a boolean kind.
    Flag(bool),
}

/// One formatting request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Format {
    Foreground(Rgba),
    Background(Rgba),
    Weight(Weight),
    Blink(bool),
    Strikethrough(bool),
    Understrike(bool),
    Italic(bool),
}

impl Format {
    /// The tag kind this format addresses.
    #[must_use]
    pub const fn kind(&self) -> TagKind {
        match self {
            Self::Foreground(_) => TagKind::Foreground,
            Self::Background(_) => TagKind::Background,
            Self::Weight(_) => TagKind::Weight,
            Self::Blink(_) => TagKind::Blink,
            Self::Strikethrough(_) => TagKind::Strikethrough,
            Self::Understrike(_) => TagKind::Understrike,
            Self::Italic(_) => TagKind::Italic,
        }
    }

    /// Build a typed format from a loosely-typed host command.
    ///
    /// A [`FormatValue::Flag`] for a value-carrying kind (or vice versa) is
    /// a caller contract violation and yields [`Error::TypeMismatch`]; an
    /// unparsable color or weight name yields [`Error::InvalidValue`].
    pub fn from_command(kind: TagKind, value: FormatValue) -> Result<Self> {
        match (kind, value) {
            (TagKind::Foreground, FormatValue::Text(text)) => Rgba::parse(&text)
                .map(Self::Foreground)
                .ok_or(Error::InvalidValue { kind, value: text }),
            (TagKind::Background, FormatValue::Text(text)) => Rgba::parse(&text)
                .map(Self::Background)
                .ok_or(Error::InvalidValue { kind, value: text }),
            (TagKind::Weight, FormatValue::Text(text)) => Weight::from_name(&text)
                .map(Self::Weight)
                .ok_or(Error::InvalidValue { kind, value: text }),
            (TagKind::Blink, FormatValue::Flag(present)) => Ok(Self::Blink(present)),
            (TagKind::Strikethrough, FormatValue::Flag(present)) => {
                Ok(Self::Strikethrough(present))
            }
            (TagKind::Understrike, FormatValue::Flag(present)) => Ok(Self::Understrike(present)),
            (TagKind::Italic, FormatValue::Flag(present)) => Ok(Self::Italic(present)),
            (kind, _) => Err(Error::TypeMismatch { kind }),
        }
    }

    /// Apply this format to one segment's tag set.
    ///
    /// Value-carrying kinds replace any same-kind tag; boolean kinds set
    /// presence to the requested value.
    pub(crate) fn apply(&self, tags: &mut TagSet) {
        match *self {
            Self::Foreground(color) => tags.set_foreground(color),
            Self::Background(color) => tags.set_background(color),
            Self::Weight(weight) => tags.set_weight(weight),
            Self::Blink(present) => tags.set_flag(StyleFlags::BLINK, present),
            Self::Strikethrough(present) => tags.set_flag(StyleFlags::STRIKETHROUGH, present),
            Self::Understrike(present) => tags.set_flag(StyleFlags::UNDERSTRIKE, present),
            Self::Italic(present) => tags.set_flag(StyleFlags::ITALIC, present),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_command_value_kinds() {
        let format =
            Format::from_command(TagKind::Foreground, FormatValue::Text("red".into())).unwrap();
        assert_eq!(format, Format::Foreground(Rgba::RED));

        let format =
            Format::from_command(TagKind::Weight, FormatValue::Text("bold".into())).unwrap();
        assert_eq!(format, Format::Weight(Weight::Bold));
    }

    #[test]
    fn test_from_command_presence_kinds() {
        let format = Format::from_command(TagKind::Italic, FormatValue::Flag(true)).unwrap();
        assert_eq!(format, Format::Italic(true));
        assert_eq!(format.kind(), TagKind::Italic);
    }

    #[test]
    fn test_from_command_type_mismatch() {
        let err = Format::from_command(TagKind::Foreground, FormatValue::Flag(true)).unwrap_err();
        assert_eq!(
            err,
            Error::TypeMismatch {
                kind: TagKind::Foreground
            }
        );

        let err =
            Format::from_command(TagKind::Blink, FormatValue::Text("fast".into())).unwrap_err();
        assert_eq!(
            err,
            Error::TypeMismatch {
                kind: TagKind::Blink
            }
        );
    }

    #[test]
    fn test_from_command_invalid_value() {
        let err = Format::from_command(TagKind::Background, FormatValue::Text("plaid".into()))
            .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidValue {
                kind: TagKind::Background,
                value: "plaid".to_string()
            }
        );

        let err =
            Format::from_command(TagKind::Weight, FormatValue::Text("chunky".into())).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { .. }));
    }

    #[test]
    fn test_apply_replaces_and_toggles() {
        let mut tags = TagSet::EMPTY.with_foreground(Rgba::RED);
        Format::Foreground(Rgba::GREEN).apply(&mut tags);
        assert_eq!(tags.fg, Some(Rgba::GREEN));

        Format::Blink(true).apply(&mut tags);
        Format::Blink(true).apply(&mut tags);
        assert!(tags.flags.contains(StyleFlags::BLINK));
        Format::Blink(false).apply(&mut tags);
        assert!(!tags.flags.contains(StyleFlags::BLINK));
    }
}
