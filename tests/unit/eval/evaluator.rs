use super::*;
use crate::eval::fingerprint::fingerprint_frame;
use crate::foundation::core::Resolution;
use crate::timeline::cue::CueEntry;
use crate::visualizer::VolumeSampleBuffer;

fn evaluator() -> FrameEvaluator {
    let cues = vec![
        CueEntry::new(0.0, 2.0, "A"),
        CueEntry::new(2.0, 4.0, "B"),
        CueEntry::new(6.0, 8.0, "C"),
    ];
    FrameEvaluator::new(
        CueTimeline::build(&cues, Some(40)),
        RenderGeometry::new(Resolution::Hd1080),
    )
}

#[test]
fn empty_timeline_yields_a_neutral_state() {
    let eval = FrameEvaluator::new(
        CueTimeline::build(&[], None),
        RenderGeometry::new(Resolution::Hd1080),
    );
    let state = eval.evaluate(3.0);
    assert_eq!(state.active_index, None);
    assert_eq!(state.scroll_offset, 0.0);
    assert!(state.cues.is_empty());
    assert!(state.visualizer.is_none());
}

#[test]
fn evaluate_is_idempotent() {
    let eval = evaluator();
    for t in [0.0, 1.9, 2.1, 5.0, 7.3, 100.0] {
        let a = eval.evaluate(t);
        let b = eval.evaluate(t);
        assert_eq!(a, b, "t={t}");
        assert_eq!(fingerprint_frame(&a), fingerprint_frame(&b), "t={t}");
    }
}

#[test]
fn out_of_order_evaluation_matches_in_order() {
    let eval = evaluator();
    let forward: Vec<_> = (0..=90).map(|i| eval.evaluate(i as f64 * 0.1)).collect();
    let mut backward: Vec<_> = (0..=90)
        .rev()
        .map(|i| eval.evaluate(i as f64 * 0.1))
        .collect();
    backward.reverse();
    assert_eq!(forward, backward);
}

#[test]
fn active_cue_and_per_cue_state_are_reported() {
    let eval = evaluator();
    let state = eval.evaluate(1.0);
    assert_eq!(state.active_index, Some(0));
    assert_eq!(state.cues.len(), 3);
    assert_eq!(state.cues[0].progress, 1.0);
    assert!(state.visualizer.is_none());
}

#[test]
fn volume_buffer_enables_the_visualizer() {
    let eval = evaluator().with_volume(VolumeSampleBuffer::from_levels(&[0.5; 41]));
    let state = eval.evaluate(20.4);
    let frame = state.visualizer.expect("visualizer present");
    assert!(!frame.bars.is_empty());
    assert_eq!(frame.center_second, 20);
}

#[test]
fn non_finite_time_degrades_to_zero() {
    let eval = evaluator();
    assert_eq!(eval.evaluate(f64::NAN), eval.evaluate(0.0));
    assert_eq!(eval.evaluate(f64::INFINITY), eval.evaluate(0.0));
}

#[test]
fn frame_entry_point_matches_seconds() {
    let eval = evaluator();
    let fps = crate::foundation::core::Fps::new(30, 1).unwrap();
    let by_frame = eval.evaluate_frame(crate::foundation::core::FrameIndex(45), fps);
    let by_secs = eval.evaluate(1.5);
    assert_eq!(by_frame, by_secs);
}

#[test]
fn invalid_opts_are_rejected() {
    let opts = EvaluatorOpts {
        transition_secs: -1.0,
    };
    assert!(evaluator().with_opts(opts).is_err());
    assert!(
        evaluator()
            .with_opts(EvaluatorOpts::default())
            .is_ok()
    );
}
