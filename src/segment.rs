//! Segments, containers, and the segment splitter.
//!
//! A [`Segment`] is one inline run of text with a uniform [`TagSet`]. A
//! [`Container`] owns an ordered, contiguous sequence of segments:
//! concatenating their texts in order reconstructs the container's full
//! text with no gaps or overlaps.
//!
//! [`Container::split`] is the splitter used for boundary normalization: it
//! cuts one segment in two at a character offset, copying the tag set onto
//! both halves. Segments are never merged back; coalescing adjacent
//! segments with identical tags is out of scope.

use std::fmt;

use crate::error::{Error, Result};
use crate::style::TagSet;
use crate::unicode::{char_to_byte, display_width, grapheme_count};

/// One inline run of text with a uniform style-tag set.
///
/// The text is never empty except transiently inside a split; the splitter's
/// offset validation guarantees both halves come out non-empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub(crate) text: String,
    pub(crate) tags: TagSet,
}

impl Segment {
    /// Create a segment with the given text and tags.
    pub fn new(text: impl Into<String>, tags: TagSet) -> Self {
        Self {
            text: text.into(),
            tags,
        }
    }

    /// Create an untagged segment.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TagSet::EMPTY)
    }

    /// The segment's text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The segment's style tags.
    #[must_use]
    pub const fn tags(&self) -> TagSet {
        self.tags
    }

    /// Mutable access to the style tags.
    pub const fn tags_mut(&mut self) -> &mut TagSet {
        &mut self.tags
    }

    /// Length in characters. Selection and split offsets count characters,
    /// not bytes.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Display width in terminal columns.
    #[must_use]
    pub fn display_width(&self) -> usize {
        display_width(&self.text)
    }

    /// Number of extended grapheme clusters.
    #[must_use]
    pub fn grapheme_count(&self) -> usize {
        grapheme_count(&self.text)
    }

    /// Check if the text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Split orientation: which half of the segment the new sibling receives.
///
/// The two selection edges need opposite insertion directions, see
/// [`Container::split`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitOrientation {
    /// New segment takes `text[..offset]` and is inserted before; the split
    /// segment keeps the suffix. Used at a selection start.
    PrefixExtract,
    /// New segment takes `text[offset..]` and is inserted after; the split
    /// segment keeps the prefix. Used at a selection end.
    SuffixExtract,
}

/// Indices of the two segments a split leaves behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitOutcome {
    /// Index of the segment that kept part of the original text in place.
    pub kept: usize,
    /// Index of the newly inserted sibling.
    ///
    /// After a suffix-extract this is the marker a selection end must be
    /// re-anchored to: the pre-split end offset is no longer valid, the end
    /// boundary now begins at this segment's start.
    pub inserted: usize,
}

/// Ordered parent scope holding a contiguous run of segments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Container {
    pub(crate) segments: Vec<Segment>,
}

impl Container {
    /// Create an empty container.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Create a container from a segment run.
    #[must_use]
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if the container holds no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segment at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Mutable segment access.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Segment> {
        self.segments.get_mut(index)
    }

    /// The segment run in order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Append a segment at the end of the run.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// The container's full text: all segment texts concatenated in order.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            out.push_str(&segment.text);
        }
        out
    }

    /// Total display width in terminal columns.
    #[must_use]
    pub fn display_width(&self) -> usize {
        self.segments.iter().map(Segment::display_width).sum()
    }

    /// Split the segment at `index` in two at a character `offset`,
    /// inserting the new sibling per `orientation`. Both halves carry a
    /// verbatim copy of the original tag set.
    ///
    /// `offset` must be a true interior cut: `0 < offset < char_len`. An
    /// edge offset means the boundary already coincides with a segment edge
    /// and no split belongs there; requesting one anyway would create a
    /// degenerate empty segment, so it is rejected with
    /// [`Error::InvalidOffset`].
    pub fn split(
        &mut self,
        index: usize,
        offset: usize,
        orientation: SplitOrientation,
    ) -> Result<SplitOutcome> {
        let len = self.segments.len();
        let Some(segment) = self.segments.get_mut(index) else {
            return Err(Error::SegmentOutOfRange { index, len });
        };
        let chars = segment.char_len();
        if offset == 0 || offset >= chars {
            return Err(Error::InvalidOffset {
                offset,
                len: chars,
            });
        }

        let at = char_to_byte(&segment.text, offset);
        let tags = segment.tags;
        let tail = segment.text.split_off(at);
        match orientation {
            SplitOrientation::PrefixExtract => {
                let head = std::mem::replace(&mut segment.text, tail);
                self.segments.insert(index, Segment { text: head, tags });
                Ok(SplitOutcome {
                    kept: index + 1,
                    inserted: index,
                })
            }
            SplitOrientation::SuffixExtract => {
                self.segments.insert(index + 1, Segment { text: tail, tags });
                Ok(SplitOutcome {
                    kept: index,
                    inserted: index + 1,
                })
            }
        }
    }

    /// Compact one-line dump of the segment run for tests and debugging:
    /// each segment as `[text tags...]`.
    #[must_use]
    pub fn inspect(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            out.push('[');
            out.push_str(&segment.text);
            if !segment.tags.is_empty() {
                out.push(' ');
                out.push_str(&segment.tags.to_string());
            }
            out.push(']');
        }
        out
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspect())
    }
}
