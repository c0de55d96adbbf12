//! The selection restyler.
//!
//! [`Container::apply_format`] is the crate's core operation: normalize the
//! selection boundaries onto segment edges by splitting at most the two
//! boundary segments, then mutate the tag set of every segment the
//! selection covers.
//!
//! Cutting-point policy: an offset equal to 0 or to a segment's full
//! character length is not a cutting point; the boundary already coincides
//! with a segment edge and no split is performed there. The rule applies
//! identically to the same-segment and cross-segment branches.

use crate::error::Result;
use crate::event::{LogLevel, emit_log};
use crate::format::Format;
use crate::segment::{Container, SplitOrientation};
use crate::selection::Selection;

/// True interior cut: neither edge of a segment of `len` characters.
const fn is_cutting_point(offset: usize, len: usize) -> bool {
    offset != 0 && offset != len
}

impl Container {
    /// Apply a formatting command to every segment fully or partially
    /// inside `selection`.
    ///
    /// Boundary segments covered only in part are split first so the
    /// selection edges land exactly on segment edges; the cut-off remainder
    /// halves keep their prior tags untouched. A boundary resting exactly
    /// on a segment edge performs no split and never pulls a zero-width
    /// sliver of the neighboring segment into scope; a zero-width selection
    /// restyles nothing.
    ///
    /// Both anchors are resolved and validated before the first structural
    /// mutation, so the operation either completes fully or fails with the
    /// container unchanged.
    pub fn apply_format(&mut self, selection: &Selection, format: &Format) -> Result<()> {
        let mut start = selection.start.resolve(self)?;
        let mut end = selection.end.resolve(self)?;
        if end < start {
            // hosts report ranges in either direction
            std::mem::swap(&mut start, &mut end);
        }
        let (mut start_index, mut start_offset) = start;
        let (mut end_index, mut end_offset) = end;

        if start_index == end_index {
            // Same-segment selection. The second cut, if any, is measured
            // in the offset space left behind by the first split, not
            // against the original text.
            let inner = end_offset - start_offset;
            if is_cutting_point(start_offset, self.char_len_at(start_index)) {
                let outcome =
                    self.split(start_index, start_offset, SplitOrientation::PrefixExtract)?;
                emit_log(
                    LogLevel::Debug,
                    &format!("start split: segment {start_index} at offset {start_offset}"),
                );
                start_index = outcome.kept;
                start_offset = 0;
                end_index = outcome.kept;
            }
            end_offset = inner;
            if is_cutting_point(inner, self.char_len_at(end_index)) {
                let outcome = self.split(end_index, inner, SplitOrientation::SuffixExtract)?;
                emit_log(
                    LogLevel::Debug,
                    &format!("end split: segment {end_index} at offset {inner}"),
                );
                // the end boundary re-anchors to the start of the extracted suffix
                end_index = outcome.inserted;
                end_offset = 0;
            }
        } else {
            // Cross-segment selection: the two splits touch different
            // segments, so no re-anchoring between them is needed.
            if is_cutting_point(start_offset, self.char_len_at(start_index)) {
                let outcome =
                    self.split(start_index, start_offset, SplitOrientation::PrefixExtract)?;
                emit_log(
                    LogLevel::Debug,
                    &format!("start split: segment {start_index} at offset {start_offset}"),
                );
                start_index = outcome.kept;
                start_offset = 0;
                end_index += 1;
            }
            if is_cutting_point(end_offset, self.char_len_at(end_index)) {
                let outcome = self.split(end_index, end_offset, SplitOrientation::SuffixExtract)?;
                emit_log(
                    LogLevel::Debug,
                    &format!("end split: segment {end_index} at offset {end_offset}"),
                );
                end_index = outcome.inserted;
                end_offset = 0;
            }
        }

        // Boundaries now coincide with segment edges: start_offset is 0 or
        // the start segment's full length, end_offset is 0 or the end
        // segment's full length. A start boundary on a trailing edge keeps
        // its segment out of scope, an end boundary on a leading edge
        // likewise; everything between is fully covered.
        let first = if start_offset == 0 {
            start_index
        } else {
            start_index + 1
        };
        let last = if end_offset == 0 {
            let Some(last) = end_index.checked_sub(1) else {
                return Ok(());
            };
            last
        } else {
            end_index
        };
        if first > last {
            return Ok(());
        }
        for segment in &mut self.segments[first..=last] {
            format.apply(segment.tags_mut());
        }
        Ok(())
    }

    fn char_len_at(&self, index: usize) -> usize {
        self.segments[index].char_len()
    }
}
