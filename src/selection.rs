//! Host-reported selections.
//!
//! A selection arrives from the host's range-reporting facility as two
//! anchors, each a node reference plus a character offset. Offsets index
//! the *original* segment text, before any split this crate performs. The
//! types here are plain data; [`Anchor::resolve`] maps an anchor onto its
//! enclosing segment and validates the offset, all before any mutation.

use crate::error::{Error, Result};
use crate::segment::Container;

/// A boundary node as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeRef {
    /// The character-data leaf inside the segment at this index.
    Text(usize),
    /// The segment element itself.
    Segment(usize),
    /// The container (or anything else above the inline run). Not a valid
    /// selection target for formatting.
    Container,
}

impl NodeRef {
    pub(crate) const fn describe(self) -> &'static str {
        match self {
            Self::Text(_) => "text leaf",
            Self::Segment(_) => "segment",
            Self::Container => "container",
        }
    }
}

/// One selection boundary: a node plus a character offset into it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Anchor {
    pub node: NodeRef,
    pub offset: usize,
}

impl Anchor {
    /// Create an anchor.
    #[must_use]
    pub const fn new(node: NodeRef, offset: usize) -> Self {
        Self { node, offset }
    }

    /// Anchor into the text leaf of the segment at `index`.
    #[must_use]
    pub const fn text(index: usize, offset: usize) -> Self {
        Self::new(NodeRef::Text(index), offset)
    }

    /// Resolve to `(segment index, offset)` against a container.
    ///
    /// A text position maps to its owning segment; a segment-boundary
    /// position maps to the segment itself. Any other node kind is a usage
    /// error. The offset must satisfy `0 <= offset <= char_len`.
    pub fn resolve(&self, container: &Container) -> Result<(usize, usize)> {
        let index = match self.node {
            NodeRef::Text(index) | NodeRef::Segment(index) => index,
            NodeRef::Container => {
                return Err(Error::UnsupportedTarget {
                    node: self.node.describe(),
                });
            }
        };
        let Some(segment) = container.get(index) else {
            return Err(Error::SegmentOutOfRange {
                index,
                len: container.len(),
            });
        };
        let chars = segment.char_len();
        if self.offset > chars {
            return Err(Error::InvalidOffset {
                offset: self.offset,
                len: chars,
            });
        }
        Ok((index, self.offset))
    }
}

/// A selection: start and end anchors over one container.
///
/// Start and end may name the same segment (same-segment selection) or
/// different ones (cross-segment). Ends handed over back-to-front are
/// accepted; [`apply_format`](crate::Container::apply_format) normalizes
/// the order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub start: Anchor,
    pub end: Anchor,
}

impl Selection {
    /// Create a selection from two anchors.
    #[must_use]
    pub const fn new(start: Anchor, end: Anchor) -> Self {
        Self { start, end }
    }

    /// Selection between two text positions, given as segment indices and
    /// character offsets.
    #[must_use]
    pub const fn range(
        start_segment: usize,
        start_offset: usize,
        end_segment: usize,
        end_offset: usize,
    ) -> Self {
        Self::new(
            Anchor::text(start_segment, start_offset),
            Anchor::text(end_segment, end_offset),
        )
    }

    /// Zero-width selection at one text position.
    #[must_use]
    pub const fn caret(segment: usize, offset: usize) -> Self {
        Self::range(segment, offset, segment, offset)
    }

    /// Whether both boundaries name the same node.
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::Segment;

    fn container() -> Container {
        Container::from_segments(vec![Segment::plain("Foo"), Segment::plain("Bar")])
    }

    #[test]
    fn test_resolve_text_and_segment_nodes() {
        let container = container();
        assert_eq!(Anchor::text(1, 2).resolve(&container), Ok((1, 2)));
        assert_eq!(
            Anchor::new(NodeRef::Segment(0), 3).resolve(&container),
            Ok((0, 3))
        );
    }

    #[test]
    fn test_resolve_rejects_container_node() {
        let container = container();
        assert_eq!(
            Anchor::new(NodeRef::Container, 0).resolve(&container),
            Err(Error::UnsupportedTarget { node: "container" })
        );
    }

    #[test]
    fn test_resolve_validates_bounds() {
        let container = container();
        assert_eq!(
            Anchor::text(5, 0).resolve(&container),
            Err(Error::SegmentOutOfRange { index: 5, len: 2 })
        );
        assert_eq!(
            Anchor::text(0, 4).resolve(&container),
            Err(Error::InvalidOffset { offset: 4, len: 3 })
        );
    }

    #[test]
    fn test_collapsed() {
        assert!(Selection::caret(0, 2).is_collapsed());
        assert!(!Selection::range(0, 0, 0, 1).is_collapsed());
    }
}
