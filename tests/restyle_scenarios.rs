//! End-to-end restyling scenarios over the public API.

use richspan::{
    Anchor, Container, Error, Format, FormatValue, NodeRef, Rgba, Segment, Selection, StyleFlags,
    StyleTag, TagKind, TagSet, Weight,
};

#[test]
fn interior_same_segment_cut() {
    let mut container = Container::from_segments(vec![Segment::plain("HelloWorld")]);
    container
        .apply_format(&Selection::range(0, 2, 0, 7), &Format::Foreground(Rgba::RED))
        .unwrap();

    insta::assert_snapshot!(container.inspect(), @"[He][lloWo fg=#ff0000][rld]");
    assert_eq!(container.len(), 3);
    assert!(container.get(0).unwrap().tags().is_empty());
    assert_eq!(
        container.get(1).unwrap().tags().tags(),
        vec![StyleTag::Foreground(Rgba::RED)]
    );
    assert!(container.get(2).unwrap().tags().is_empty());
}

#[test]
fn cross_segment_selection_touching_edges_exactly() {
    let mut container = Container::from_segments(vec![
        Segment::new("Foo", TagSet::EMPTY.with_flags(StyleFlags::ITALIC)),
        Segment::plain("Bar"),
    ]);
    container
        .apply_format(&Selection::range(0, 0, 1, 3), &Format::Weight(Weight::Bold))
        .unwrap();

    // both offsets are edge-aligned: no splits occur
    assert_eq!(container.len(), 2);
    insta::assert_snapshot!(container.inspect(), @"[Foo weight=bold italic][Bar weight=bold]");
}

#[test]
fn full_length_end_offset_in_same_segment() {
    let mut container = Container::from_segments(vec![Segment::plain("HelloWorld")]);
    container
        .apply_format(&Selection::range(0, 3, 0, 10), &Format::Blink(true))
        .unwrap();

    insta::assert_snapshot!(container.inspect(), @"[Hel][loWorld blink]");
    assert_eq!(container.get(1).unwrap().char_len(), 7);
    assert!(container.get(0).unwrap().tags().is_empty());
}

#[test]
fn host_command_round() {
    let mut container = Container::from_segments(vec![Segment::plain("HelloWorld")]);
    let format =
        Format::from_command(TagKind::Foreground, FormatValue::Text("red".into())).unwrap();
    container
        .apply_format(&Selection::range(0, 2, 0, 7), &format)
        .unwrap();
    assert_eq!(container.inspect(), "[He][lloWo fg=#ff0000][rld]");
}

#[test]
fn mismatched_command_rejected_before_mutation() {
    let mut container = Container::from_segments(vec![Segment::plain("HelloWorld")]);
    let before = container.clone();

    let err = Format::from_command(TagKind::Weight, FormatValue::Flag(true)).unwrap_err();
    assert_eq!(
        err,
        Error::TypeMismatch {
            kind: TagKind::Weight
        }
    );
    // nothing was applied, the container is untouched
    assert_eq!(container, before);

    let err = Format::from_command(TagKind::Foreground, FormatValue::Text("plaid".into()))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidValue { .. }));

    // and an unsupported anchor fails fast too
    let err = container
        .apply_format(
            &Selection::new(Anchor::new(NodeRef::Container, 0), Anchor::text(0, 3)),
            &Format::Blink(true),
        )
        .unwrap_err();
    assert_eq!(err, Error::UnsupportedTarget { node: "container" });
    assert_eq!(container, before);
}

#[test]
fn repeated_boolean_toggle_is_idempotent() {
    let mut once = Container::from_segments(vec![Segment::plain("HelloWorld")]);
    let selection = Selection::range(0, 2, 0, 7);
    once.apply_format(&selection, &Format::Strikethrough(true))
        .unwrap();
    let mut twice = once.clone();
    // boundaries are already normalized, so the second application must
    // change neither structure nor tags
    twice
        .apply_format(&Selection::range(1, 0, 1, 5), &Format::Strikethrough(true))
        .unwrap();
    assert_eq!(once, twice);
}

#[test]
fn stacked_formats_accumulate_per_segment() {
    let mut container = Container::from_segments(vec![Segment::plain("The quick brown fox")]);
    container
        .apply_format(&Selection::range(0, 4, 0, 9), &Format::Foreground(Rgba::RED))
        .unwrap();
    container
        .apply_format(&Selection::range(0, 0, 2, 10), &Format::Italic(true))
        .unwrap();
    container
        .apply_format(
            &Selection::range(1, 0, 2, 6),
            &Format::Background(Rgba::BLACK),
        )
        .unwrap();

    insta::assert_snapshot!(
        container.inspect(),
        @"[The  italic][quick fg=#ff0000 bg=#000000 italic][ brown bg=#000000 italic][ fox italic]"
    );
    assert_eq!(container.text(), "The quick brown fox");
}

#[test]
fn multibyte_selection_offsets_count_characters() {
    let mut container = Container::from_segments(vec![Segment::plain("héllo 漢字 world")]);
    container
        .apply_format(
            &Selection::range(0, 6, 0, 8),
            &Format::Background(Rgba::YELLOW),
        )
        .unwrap();
    assert_eq!(container.inspect(), "[héllo ][漢字 bg=#ffff00][ world]");
    assert_eq!(container.text(), "héllo 漢字 world");
}
