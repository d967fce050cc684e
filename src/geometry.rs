use crate::foundation::core::{Canvas, Resolution};
use crate::foundation::error::{CuelightError, CuelightResult};
use crate::timeline::CueTimeline;

// Reference-space constants (1080p).
const BASE_ROW_HEIGHT: f64 = 98.0;
const BASE_ROW_MARGIN: f64 = 48.0;
const BASE_EXTRA_LINE_MARGIN: f64 = 30.0;
const BASE_INACTIVE_FONT_SIZE: f64 = 54.0;
const BASE_ACTIVE_FONT_SIZE: f64 = 60.0;
const BASE_SCALE_DISTANCE: f64 = 150.0;
const BASE_OPACITY_NEAR_DISTANCE: f64 = 150.0;
const BASE_OPACITY_FAR_DISTANCE: f64 = 350.0;
const BASE_VISUALIZER_WIDTH: f64 = 450.0;
const BASE_VISUALIZER_HEIGHT: f64 = 40.0;
const BASE_BAR_WIDTH: f64 = 3.0;
const BASE_BAR_GAP: f64 = 1.0;
const BASE_ANCHOR_LIFT: f64 = 45.0;

/// Immutable geometry configuration for one render session.
///
/// Produced once from `(base constants, resolution, canvas)` and threaded as
/// a plain parameter; there is no mutable scaled state anywhere in the
/// engine. Every field is in output pixels, rounded the same way for every
/// resolution so 1080p renders are bit-stable against the reference space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderGeometry {
    /// Output resolution this geometry was scaled for.
    pub resolution: Resolution,
    /// Output canvas in pixels.
    pub canvas: Canvas,
    /// Linear scale factor from the 1080p reference space.
    pub scale: f64,
    /// Height of one cue row.
    pub row_height: f64,
    /// Vertical margin between cue rows.
    pub row_margin: f64,
    /// Extra vertical space per display line beyond a cue's first.
    pub extra_line_margin: f64,
    /// Font size of a fully inactive cue.
    pub inactive_font_size: f64,
    /// Font size of a fully active cue.
    pub active_font_size: f64,
    /// Distance over which cue scale falls from 1.08 to 0.92.
    pub scale_distance: f64,
    /// Distance at which cue opacity has fallen to 0.3.
    pub opacity_near_distance: f64,
    /// Distance at which cue opacity reaches 0.
    pub opacity_far_distance: f64,
    /// Width of the audio visualizer strip.
    pub visualizer_width: f64,
    /// Height of the audio visualizer strip.
    pub visualizer_height: f64,
    /// Width of one visualizer bar.
    pub bar_width: f64,
    /// Horizontal gap between visualizer bars.
    pub bar_gap: f64,
    /// Fixed vertical position where the active cue is rendered.
    pub anchor: f64,
}

impl RenderGeometry {
    /// Geometry for a resolution's standard canvas.
    pub fn new(resolution: Resolution) -> Self {
        Self::build(resolution, resolution.canvas())
    }

    /// Geometry for an explicit canvas (e.g. a custom-height composition).
    pub fn with_canvas(resolution: Resolution, canvas: Canvas) -> CuelightResult<Self> {
        if canvas.width == 0 || canvas.height == 0 {
            return Err(CuelightError::validation("canvas must be non-empty"));
        }
        Ok(Self::build(resolution, canvas))
    }

    fn build(resolution: Resolution, canvas: Canvas) -> Self {
        let scale = resolution.scale_factor();
        let scaled = |base: f64| (base * scale).round();

        Self {
            resolution,
            canvas,
            scale,
            row_height: scaled(BASE_ROW_HEIGHT),
            row_margin: scaled(BASE_ROW_MARGIN),
            extra_line_margin: scaled(BASE_EXTRA_LINE_MARGIN),
            inactive_font_size: scaled(BASE_INACTIVE_FONT_SIZE),
            active_font_size: scaled(BASE_ACTIVE_FONT_SIZE),
            scale_distance: scaled(BASE_SCALE_DISTANCE),
            opacity_near_distance: scaled(BASE_OPACITY_NEAR_DISTANCE),
            opacity_far_distance: scaled(BASE_OPACITY_FAR_DISTANCE),
            visualizer_width: scaled(BASE_VISUALIZER_WIDTH),
            visualizer_height: scaled(BASE_VISUALIZER_HEIGHT),
            bar_width: scaled(BASE_BAR_WIDTH),
            bar_gap: scaled(BASE_BAR_GAP),
            anchor: f64::from(canvas.height) / 2.0 - scaled(BASE_ANCHOR_LIFT),
        }
    }

    /// Scale a reference-space value into output pixels.
    pub fn scaled(&self, base: f64) -> f64 {
        (base * self.scale).round()
    }

    /// Vertical advance from one cue row to the next, excluding extra lines.
    pub fn row_advance(&self) -> f64 {
        self.row_height + self.row_margin
    }

    /// Unscrolled vertical position of cue `index`.
    ///
    /// `index * (row_height + row_margin)` plus the accumulated extra-line
    /// margin of every preceding multi-line cue. Strictly increasing in
    /// `index` for any timeline.
    pub fn natural_position(&self, timeline: &CueTimeline, index: usize) -> f64 {
        index as f64 * self.row_advance()
            + f64::from(timeline.extra_lines_before(index)) * self.extra_line_margin
    }
}
