use super::*;
use crate::foundation::core::Resolution;
use crate::timeline::cue::CueEntry;

const TRANSITION: f64 = 0.5;

fn fixture() -> (CueTimeline, RenderGeometry) {
    let cues = vec![
        CueEntry::new(0.0, 2.0, "A"),
        CueEntry::new(2.0, 4.0, "B"),
        CueEntry::new(6.0, 8.0, "C"),
    ];
    (
        CueTimeline::build(&cues, None),
        RenderGeometry::new(Resolution::Hd1080),
    )
}

fn target(geometry: &RenderGeometry, timeline: &CueTimeline, index: usize) -> f64 {
    geometry.natural_position(timeline, index) - geometry.anchor
}

#[test]
fn holds_the_active_cue_at_the_anchor() {
    let (tl, geo) = fixture();
    let offset = scroll_offset(&tl, &geo, TRANSITION, 1.0);
    assert_eq!(offset, target(&geo, &tl, 0));

    let offset = scroll_offset(&tl, &geo, TRANSITION, 3.0);
    assert_eq!(offset, target(&geo, &tl, 1));
}

#[test]
fn eases_strictly_between_adjacent_cues_in_the_window() {
    let (tl, geo) = fixture();
    // Transition window between cue 0 and 1 is [1.75, 2.25].
    for t in [1.8, 1.9, 2.0, 2.1, 2.2] {
        let offset = scroll_offset(&tl, &geo, TRANSITION, t);
        assert!(
            offset > target(&geo, &tl, 0) && offset < target(&geo, &tl, 1),
            "t={t} offset={offset}"
        );
    }
}

#[test]
fn window_edges_meet_the_held_positions() {
    let (tl, geo) = fixture();
    let at_start = scroll_offset(&tl, &geo, TRANSITION, 1.75);
    let at_end = scroll_offset(&tl, &geo, TRANSITION, 2.25);
    assert!((at_start - target(&geo, &tl, 0)).abs() < 1e-9);
    assert!((at_end - target(&geo, &tl, 1)).abs() < 1e-9);
}

#[test]
fn gap_transition_centers_on_the_midpoint() {
    let (tl, geo) = fixture();
    // Midpoint between cue 1 end (4) and cue 2 start (6) is 5.
    let offset = scroll_offset(&tl, &geo, TRANSITION, 5.0);
    let from = target(&geo, &tl, 1);
    let to = target(&geo, &tl, 2);
    assert!(offset > from && offset < to);

    // CSS ease reaches ~0.8024 at linear progress 0.5.
    let expected = from + (to - from) * 0.8024;
    assert!((offset - expected).abs() < (to - from) * 1e-3);
}

#[test]
fn gap_snaps_to_the_nearer_cue_outside_the_window() {
    let (tl, geo) = fixture();
    let before = scroll_offset(&tl, &geo, TRANSITION, 4.5);
    assert_eq!(before, target(&geo, &tl, 1));
    let after = scroll_offset(&tl, &geo, TRANSITION, 5.5);
    assert_eq!(after, target(&geo, &tl, 2));
}

#[test]
fn before_first_and_after_last_hold_steady() {
    let (tl, geo) = fixture();
    assert_eq!(
        scroll_offset(&tl, &geo, TRANSITION, -3.0),
        target(&geo, &tl, 0)
    );
    assert_eq!(
        scroll_offset(&tl, &geo, TRANSITION, 100.0),
        target(&geo, &tl, 2)
    );
}

#[test]
fn empty_timeline_does_not_scroll() {
    let tl = CueTimeline::build(&[], None);
    let geo = RenderGeometry::new(Resolution::Hd1080);
    assert_eq!(scroll_offset(&tl, &geo, TRANSITION, 10.0), 0.0);
}

#[test]
fn back_to_back_boundary_is_continuous() {
    let (tl, geo) = fixture();
    // Cues 0 and 1 touch at t=2; the boundary must not jump when the
    // active index flips.
    let just_before = scroll_offset(&tl, &geo, TRANSITION, 2.0 - 1e-6);
    let just_after = scroll_offset(&tl, &geo, TRANSITION, 2.0 + 1e-6);
    assert!(
        (just_before - just_after).abs() < 0.01,
        "jump at boundary: {just_before} vs {just_after}"
    );
}

#[test]
fn zero_transition_steps_at_the_midpoint() {
    let (tl, geo) = fixture();
    assert_eq!(
        scroll_offset(&tl, &geo, 0.0, 4.9),
        target(&geo, &tl, 1)
    );
    assert_eq!(
        scroll_offset(&tl, &geo, 0.0, 5.1),
        target(&geo, &tl, 2)
    );
}
