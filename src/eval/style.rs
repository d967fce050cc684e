use crate::foundation::core::Rgb8;
use crate::foundation::math::{lerp, piecewise_map};
use crate::geometry::RenderGeometry;
use crate::timeline::CueTimeline;
use crate::timeline::cue::ProcessedCue;

const INACTIVE_WEIGHT: f64 = 400.0;
const ACTIVE_WEIGHT: f64 = 700.0;
const SCALE_NEAR: f64 = 1.08;
const SCALE_FAR: f64 = 0.92;
const OPACITY_NEAR: f64 = 0.3;

/// Text colors used to crossfade cues between their inactive and active
/// states. The active color normally comes from the host's artwork
/// analysis; the default is the engine's fallback accent.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    /// Color of a fully inactive cue.
    pub inactive: Rgb8,
    /// Color of a fully active cue.
    pub active: Rgb8,
}

impl Palette {
    /// Bright accent variant used for gradient styling of title text.
    pub fn bright_active(&self) -> Rgb8 {
        self.active.brightened(3.0)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            inactive: Rgb8::new(255, 255, 255),
            active: Rgb8::new(30, 215, 96),
        }
    }
}

/// Complete per-cue visual state for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CueVisual {
    /// Vertical position after scroll, in output pixels from the list top.
    pub position: f64,
    /// Transition progress of this cue's own window in `[0, 1]`.
    pub progress: f64,
    /// Opacity in `[0, 1]`, falling off with distance from the anchor.
    pub opacity: f64,
    /// Uniform scale, 1.08 at the anchor down to 0.92 far away.
    pub scale: f64,
    /// Interpolated font size in output pixels.
    pub font_size: f64,
    /// Interpolated numeric font weight (400 inactive, 700 active).
    pub font_weight: f64,
    /// Interpolated text color.
    pub color: Rgb8,
    /// Depth order: 100 at the active cue, decreasing by index distance.
    pub stacking: i32,
}

/// Transition progress of a cue's own window at time `t`.
///
/// 0 before `start - transition`, ramping linearly to 1 at `start`, held at
/// 1 through `[start, end]`, ramping back to 0 at `end + transition`. This
/// is independent of which cue is active, so adjacent cues can be partially
/// visible simultaneously during a crossfade.
pub fn cue_progress(cue: &ProcessedCue, transition: f64, t: f64) -> f64 {
    if transition <= 0.0 {
        return if t >= cue.start && t <= cue.end { 1.0 } else { 0.0 };
    }

    if t < cue.start - transition {
        0.0
    } else if t <= cue.start {
        (t - (cue.start - transition)) / transition
    } else if t < cue.end {
        1.0
    } else if t <= cue.end + transition {
        1.0 - (t - cue.end) / transition
    } else {
        0.0
    }
}

pub(crate) fn cue_visual(
    timeline: &CueTimeline,
    geometry: &RenderGeometry,
    palette: &Palette,
    transition: f64,
    scroll_offset: f64,
    active_index: Option<usize>,
    index: usize,
    t: f64,
) -> CueVisual {
    let cue = &timeline.cues()[index];
    let progress = cue_progress(cue, transition, t).clamp(0.0, 1.0);

    let position = geometry.natural_position(timeline, index) - scroll_offset;
    let distance = (position - geometry.anchor).abs();

    let scale = lerp(
        SCALE_NEAR,
        SCALE_FAR,
        (distance / geometry.scale_distance).clamp(0.0, 1.0),
    );
    let opacity = piecewise_map(
        distance,
        &[
            (0.0, 1.0),
            (geometry.opacity_near_distance, OPACITY_NEAR),
            (geometry.opacity_far_distance, 0.0),
        ],
    );

    let index_distance = match active_index {
        Some(active) => active.abs_diff(index),
        None => index + 1,
    };

    CueVisual {
        position,
        progress,
        opacity,
        scale,
        font_size: lerp(geometry.inactive_font_size, geometry.active_font_size, progress),
        font_weight: lerp(INACTIVE_WEIGHT, ACTIVE_WEIGHT, progress),
        color: Rgb8::lerp(palette.inactive, palette.active, progress),
        stacking: 100 - index_distance.min(100) as i32,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/style.rs"]
mod tests;
