use super::*;
use crate::eval::scroll::scroll_offset;
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

#[test]
fn progress_boundaries_match_the_window() {
    let (tl, _) = fixture();
    let cue = &tl.cues()[2]; // [6, 8]

    assert_eq!(cue_progress(cue, TRANSITION, 6.0 - TRANSITION), 0.0);
    assert_eq!(cue_progress(cue, TRANSITION, 6.0), 1.0);
    assert!((cue_progress(cue, TRANSITION, 5.75) - 0.5).abs() < 1e-9);
    assert_eq!(cue_progress(cue, TRANSITION, 7.0), 1.0);
    assert_eq!(cue_progress(cue, TRANSITION, 8.0), 1.0);
    assert!((cue_progress(cue, TRANSITION, 8.25) - 0.5).abs() < 1e-9);
    assert_eq!(cue_progress(cue, TRANSITION, 8.5), 0.0);
    assert_eq!(cue_progress(cue, TRANSITION, 9.0), 0.0);
}

#[test]
fn adjacent_cues_crossfade_simultaneously() {
    let (tl, _) = fixture();
    // At t=1.9 cue 0 is still fully held while cue 1 is already ramping in.
    assert_eq!(cue_progress(&tl.cues()[0], TRANSITION, 1.9), 1.0);
    let incoming = cue_progress(&tl.cues()[1], TRANSITION, 1.9);
    assert!(incoming > 0.0 && incoming < 1.0);
}

#[test]
fn active_cue_takes_active_styling() {
    let (tl, geo) = fixture();
    let palette = Palette::default();
    let t = 1.0;
    let offset = scroll_offset(&tl, &geo, TRANSITION, t);
    let visual = cue_visual(&tl, &geo, &palette, TRANSITION, offset, Some(0), 0, t);

    assert!((visual.position - geo.anchor).abs() < 1e-9);
    assert_eq!(visual.progress, 1.0);
    assert_eq!(visual.opacity, 1.0);
    assert!((visual.scale - 1.08).abs() < 1e-9);
    assert_eq!(visual.font_size, geo.active_font_size);
    assert_eq!(visual.font_weight, 700.0);
    assert_eq!(visual.color, palette.active);
    assert_eq!(visual.stacking, 100);
}

#[test]
fn distant_cues_fade_and_shrink() {
    let (tl, geo) = fixture();
    let palette = Palette::default();
    let t = 1.0;
    let offset = scroll_offset(&tl, &geo, TRANSITION, t);

    let near = cue_visual(&tl, &geo, &palette, TRANSITION, offset, Some(0), 1, t);
    let far = cue_visual(&tl, &geo, &palette, TRANSITION, offset, Some(0), 2, t);

    assert!(near.opacity < 1.0);
    assert!(far.opacity < near.opacity);
    assert!(near.scale < 1.08 && near.scale >= 0.92);
    assert_eq!(far.scale, 0.92);
    assert_eq!(near.stacking, 99);
    assert_eq!(far.stacking, 98);
    assert_eq!(near.color, palette.inactive);
    assert_eq!(near.font_weight, 400.0);
}

#[test]
fn progress_blends_color_between_palette_ends() {
    let (tl, geo) = fixture();
    let palette = Palette::default();
    // t=1.875 puts cue 1 at incoming progress 0.75.
    let t = 1.875;
    let offset = scroll_offset(&tl, &geo, TRANSITION, t);
    let visual = cue_visual(&tl, &geo, &palette, TRANSITION, offset, Some(0), 1, t);

    assert!((visual.progress - 0.75).abs() < 1e-9);
    assert_eq!(
        visual.color,
        crate::foundation::core::Rgb8::lerp(palette.inactive, palette.active, 0.75)
    );
    let expected_size = geo.inactive_font_size
        + (geo.active_font_size - geo.inactive_font_size) * 0.75;
    assert!((visual.font_size - expected_size).abs() < 1e-9);
}

#[test]
fn default_palette_has_bright_accent() {
    let palette = Palette::default();
    let bright = palette.bright_active();
    assert_eq!(bright.r, 90);
    assert_eq!(bright.g, 255);
    assert_eq!(bright.b, 255);
}

#[test]
fn zero_transition_progress_is_a_step() {
    let (tl, _) = fixture();
    let cue = &tl.cues()[0];
    assert_eq!(cue_progress(cue, 0.0, -0.1), 0.0);
    assert_eq!(cue_progress(cue, 0.0, 0.0), 1.0);
    assert_eq!(cue_progress(cue, 0.0, 2.0), 1.0);
    assert_eq!(cue_progress(cue, 0.0, 2.1), 0.0);
}
