use crate::eval::resolver::active_at;
use crate::eval::scroll::scroll_offset;
use crate::eval::style::{CueVisual, Palette, cue_visual};
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{CuelightError, CuelightResult};
use crate::geometry::RenderGeometry;
use crate::timeline::CueTimeline;
use crate::visualizer::{VisualizerFrame, VolumeSampleBuffer, visualizer_window};

/// Tunable evaluation options.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EvaluatorOpts {
    /// Length of every crossfade/transition window in seconds.
    pub transition_secs: f64,
}

impl Default for EvaluatorOpts {
    fn default() -> Self {
        Self {
            transition_secs: 0.5,
        }
    }
}

impl EvaluatorOpts {
    /// Validate static invariants.
    pub fn validate(&self) -> CuelightResult<()> {
        if !self.transition_secs.is_finite() || self.transition_secs < 0.0 {
            return Err(CuelightError::validation(
                "transition_secs must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

/// Complete visual state of one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameState {
    /// Index of the active cue, if any.
    pub active_index: Option<usize>,
    /// Vertical scroll position of the cue list.
    pub scroll_offset: f64,
    /// Visual state for every cue, in timeline order.
    pub cues: Vec<CueVisual>,
    /// Bar window for the audio visualizer, when a volume buffer is set.
    pub visualizer: Option<VisualizerFrame>,
}

impl FrameState {
    fn neutral() -> Self {
        Self {
            active_index: None,
            scroll_offset: 0.0,
            cues: Vec::new(),
            visualizer: None,
        }
    }
}

/// Stateless per-frame evaluator over an immutable timeline.
///
/// `evaluate` is a pure function of `t`: the renderer may evaluate frames
/// out of order or re-evaluate the same frame and always gets identical
/// output, which [`crate::fingerprint_frame`] can assert cheaply.
#[derive(Clone, Debug)]
pub struct FrameEvaluator {
    timeline: CueTimeline,
    geometry: RenderGeometry,
    palette: Palette,
    opts: EvaluatorOpts,
    volume: Option<VolumeSampleBuffer>,
}

impl FrameEvaluator {
    /// Build an evaluator with default options and palette and no volume
    /// buffer.
    pub fn new(timeline: CueTimeline, geometry: RenderGeometry) -> Self {
        Self {
            timeline,
            geometry,
            palette: Palette::default(),
            opts: EvaluatorOpts::default(),
            volume: None,
        }
    }

    /// Replace the evaluation options.
    pub fn with_opts(mut self, opts: EvaluatorOpts) -> CuelightResult<Self> {
        opts.validate()?;
        self.opts = opts;
        Ok(self)
    }

    /// Replace the color palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Attach the loudness buffer that drives the visualizer.
    pub fn with_volume(mut self, volume: VolumeSampleBuffer) -> Self {
        self.volume = Some(volume);
        self
    }

    /// The evaluated timeline.
    pub fn timeline(&self) -> &CueTimeline {
        &self.timeline
    }

    /// The session geometry.
    pub fn geometry(&self) -> &RenderGeometry {
        &self.geometry
    }

    /// Evaluate the complete visual state at time `t` (seconds).
    ///
    /// Never fails: an empty timeline yields a neutral state and any
    /// non-finite `t` is treated as 0.
    #[tracing::instrument(skip(self))]
    pub fn evaluate(&self, t: f64) -> FrameState {
        let t = if t.is_finite() { t } else { 0.0 };

        let visualizer = self
            .volume
            .as_ref()
            .map(|buffer| visualizer_window(buffer, &self.geometry, t));

        if self.timeline.is_empty() {
            return FrameState {
                visualizer,
                ..FrameState::neutral()
            };
        }

        let active_index = active_at(&self.timeline, t);
        let offset = scroll_offset(&self.timeline, &self.geometry, self.opts.transition_secs, t);

        let cues = (0..self.timeline.len())
            .map(|index| {
                cue_visual(
                    &self.timeline,
                    &self.geometry,
                    &self.palette,
                    self.opts.transition_secs,
                    offset,
                    active_index,
                    index,
                    t,
                )
            })
            .collect();

        FrameState {
            active_index,
            scroll_offset: offset,
            cues,
            visualizer,
        }
    }

    /// Evaluate at a frame index under the given frame rate.
    pub fn evaluate_frame(&self, frame: FrameIndex, fps: Fps) -> FrameState {
        self.evaluate(fps.frames_to_secs(frame.0))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
