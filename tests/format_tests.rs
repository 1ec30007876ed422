//! Layout-pass tests — horizontal space allocation and text-line assignment
//! for annotation groups sharing a note.

use annolib::{Annotation, Justify, LayoutState, Position};
use pretty_assertions::assert_eq;

#[test]
fn empty_group_is_a_no_op() {
    let mut state = LayoutState::new();
    let mut group: Vec<Annotation> = Vec::new();

    assert!(!Annotation::format(&mut group, &mut state));
    assert_eq!(state, LayoutState::new());
}

#[test]
fn center_justified_width_splits_evenly() {
    let mut state = LayoutState::new();
    let mut group = vec![Annotation::new("forte")];
    let w = group[0].get_width();
    assert!(w > 0.0);

    assert!(Annotation::format(&mut group, &mut state));
    assert_eq!(state.left_shift, w / 2.0);
    assert_eq!(state.right_shift, w / 2.0);
}

#[test]
fn group_shift_is_max_not_sum() {
    let mut state = LayoutState::new();
    let mut group = vec![Annotation::new("p"), Annotation::new("dolce")];
    let w1 = group[0].get_width();
    let w2 = group[1].get_width();
    assert!(w1 < w2);

    assert!(Annotation::format(&mut group, &mut state));
    assert_eq!(state.left_shift, w2 / 2.0);
    assert_eq!(state.right_shift, w2 / 2.0);
}

#[test]
fn left_and_right_justification_extents() {
    let mut state = LayoutState::new();
    let mut group = vec![Annotation::new("rit.")];
    group[0].set_justification(Justify::Left);
    let w = group[0].get_width();

    assert!(Annotation::format(&mut group, &mut state));
    assert_eq!(state.left_shift, 0.0);
    assert_eq!(state.right_shift, w);

    let mut state = LayoutState::new();
    let mut group = vec![Annotation::new("rit.")];
    group[0].set_justification(Justify::Right);

    assert!(Annotation::format(&mut group, &mut state));
    assert_eq!(state.left_shift, w);
    assert_eq!(state.right_shift, 0.0);
}

#[test]
fn shifts_accumulate_across_calls() {
    let mut state = LayoutState::new();
    state.left_shift = 10.0;
    state.right_shift = 4.0;

    let mut group = vec![Annotation::new("forte")];
    let w = group[0].get_width();

    assert!(Annotation::format(&mut group, &mut state));
    assert_eq!(state.left_shift, 10.0 + w / 2.0);
    assert_eq!(state.right_shift, 4.0 + w / 2.0);
}

#[test]
fn above_and_default_text_lines_count_independently() {
    let mut state = LayoutState::new();
    let mut group: Vec<Annotation> = ["a", "b", "c", "d", "e"]
        .iter()
        .map(|t| Annotation::new(t))
        .collect();
    group[1].set_position(Position::Below);
    group[3].set_position(Position::Below);

    assert!(Annotation::format(&mut group, &mut state));

    // Above-note rows: strictly increasing in input order.
    assert_eq!(group[0].get_text_line(), 0);
    assert_eq!(group[2].get_text_line(), 1);
    assert_eq!(group[4].get_text_line(), 2);

    // Default-position rows count on their own.
    assert_eq!(group[1].get_text_line(), 0);
    assert_eq!(group[3].get_text_line(), 1);

    assert_eq!(state.top_text_line, 3);
    assert_eq!(state.text_line, 2);
}

#[test]
fn text_line_counters_carry_across_notes() {
    let mut state = LayoutState::new();

    let mut first = vec![Annotation::new("one")];
    assert!(Annotation::format(&mut first, &mut state));

    let mut second = vec![Annotation::new("two")];
    assert!(Annotation::format(&mut second, &mut state));

    assert_eq!(first[0].get_text_line(), 0);
    assert_eq!(second[0].get_text_line(), 1);
}
