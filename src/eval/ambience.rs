use crate::geometry::RenderGeometry;
use std::f64::consts::PI;

// Reference-space motion ranges.
const BASE_PAN_HORIZONTAL: f64 = 20.0;
const BASE_PAN_VERTICAL: f64 = 15.0;
const BASE_BLUR_FLOOR: f64 = 2.0;
const BASE_BLUR_SPAN: f64 = 8.0;
const BASE_FLOAT_RANGE: f64 = 5.0;
const ZOOM_RANGE: f64 = 0.1;
const TITLE_CYCLE_SECS: f64 = 12.0;

/// Deterministic background/decor animation sampler.
///
/// These are the slow sinusoidal motions layered behind the cue list:
/// background pan and zoom, the dim pulse, the audio-reactive backdrop
/// blur, the floating artwork offset, and the title gradient sweep. Each is
/// a pure function of `t`, sampled independently of the cue state.
#[derive(Clone, Copy, Debug)]
pub struct AmbienceSampler {
    pan_horizontal: f64,
    pan_vertical: f64,
    blur_floor: f64,
    blur_span: f64,
    float_range: f64,
}

/// Sampled decor state for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct AmbienceState {
    /// Horizontal background offset in output pixels.
    pub pan_x: f64,
    /// Vertical background offset in output pixels.
    pub pan_y: f64,
    /// Background zoom factor around 1.
    pub zoom: f64,
    /// Extra background dim in `[0.03, 0.06]`.
    pub dim: f64,
    /// Backdrop blur radius in output pixels.
    pub blur: f64,
    /// Vertical artwork float offset in output pixels.
    pub artwork_float: f64,
    /// Title gradient background position in `[-200, 200]`.
    pub title_gradient_pos: f64,
}

impl AmbienceSampler {
    /// Build a sampler with motion ranges scaled for `geometry`.
    pub fn new(geometry: &RenderGeometry) -> Self {
        Self {
            pan_horizontal: geometry.scaled(BASE_PAN_HORIZONTAL),
            pan_vertical: geometry.scaled(BASE_PAN_VERTICAL),
            blur_floor: geometry.scaled(BASE_BLUR_FLOOR),
            blur_span: geometry.scaled(BASE_BLUR_SPAN),
            float_range: geometry.scaled(BASE_FLOAT_RANGE),
        }
    }

    /// Sample the decor state at time `t` (seconds).
    pub fn sample(&self, t: f64) -> AmbienceState {
        let t = if t.is_finite() { t } else { 0.0 };

        // Incommensurate frequencies keep the drift from visibly looping.
        let pan_x = (t * 0.2).sin() * self.pan_horizontal
            + (t * 0.13).cos() * (self.pan_horizontal * 0.5);
        let pan_y = (t * 0.15).sin() * self.pan_vertical
            + (t * 0.23).cos() * (self.pan_vertical * 0.7);
        let zoom = 1.0 + (t * 0.17).sin() * ZOOM_RANGE + (t * 0.11).cos() * (ZOOM_RANGE * 0.5);

        let dim = 0.045 + (t * 0.2 * PI).sin() * 0.015;
        let reactive = (t / 0.8).sin().abs() * 0.5 + 0.5;
        let blur = self.blur_floor + reactive * self.blur_span;

        let artwork_float = (t / 5.0 * PI).sin() * self.float_range;
        let title_gradient_pos =
            (t.rem_euclid(TITLE_CYCLE_SECS) / TITLE_CYCLE_SECS * 2.0 * PI).sin() * 200.0;

        AmbienceState {
            pan_x,
            pan_y,
            zoom,
            dim,
            blur,
            artwork_float,
            title_gradient_pos,
        }
    }
}
