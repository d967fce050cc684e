use super::*;

#[test]
fn endpoints_are_exact_for_every_ease() {
    let eases = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InOutCubic,
        Ease::CSS_EASE,
    ];
    for ease in eases {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn apply_clamps_input() {
    assert_eq!(Ease::CSS_EASE.apply(-2.0), 0.0);
    assert_eq!(Ease::CSS_EASE.apply(3.0), 1.0);
}

#[test]
fn quad_matches_closed_form() {
    assert!((Ease::InQuad.apply(0.5) - 0.25).abs() < 1e-12);
    assert!((Ease::OutQuad.apply(0.5) - 0.75).abs() < 1e-12);
    assert!((Ease::InOutQuad.apply(0.25) - 0.125).abs() < 1e-12);
}

#[test]
fn css_ease_matches_reference_value() {
    // cubic-bezier(0.25, 0.1, 0.25, 1) evaluates to ~0.8024 at x = 0.5.
    let y = Ease::CSS_EASE.apply(0.5);
    assert!((y - 0.8024).abs() < 1e-3, "got {y}");
}

#[test]
fn css_ease_is_monotonic() {
    let mut prev = 0.0;
    for i in 0..=1000 {
        let y = Ease::CSS_EASE.apply(i as f64 / 1000.0);
        assert!(y >= prev - 1e-9, "non-monotonic at step {i}");
        prev = y;
    }
}

#[test]
fn identity_bezier_is_linear() {
    let linearish = Ease::Bezier {
        x1: 1.0 / 3.0,
        y1: 1.0 / 3.0,
        x2: 2.0 / 3.0,
        y2: 2.0 / 3.0,
    };
    for i in 0..=10 {
        let t = i as f64 / 10.0;
        assert!((linearish.apply(t) - t).abs() < 1e-6, "t={t}");
    }
}
