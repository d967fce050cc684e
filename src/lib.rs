//! Cuelight is the deterministic evaluation core of a lyric/subtitle video
//! renderer.
//!
//! Given a continuous playback time `t` and an immutable, preprocessed cue
//! timeline, [`FrameEvaluator::evaluate`] computes the complete visual state
//! for that instant: the active cue, the scroll position of the cue list,
//! opacity/scale/font/color for every cue, and a windowed audio-level
//! visualization.
//!
//! # Pipeline overview
//!
//! 1. **Build**: raw cues -> [`CueTimeline`] (line wrapping, memoized
//!    lookup tables), once per input change
//! 2. **Configure**: `(resolution, canvas)` -> [`RenderGeometry`], once per
//!    session
//! 3. **Evaluate**: `t` -> [`FrameState`], once per rendered frame
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Frame-exact determinism**: evaluation is pure and stable for a given
//!   input; frames may be rendered out of order or re-rendered and must be
//!   bit-identical each time ([`fingerprint_frame`] asserts this cheaply).
//! - **No IO**: timelines and volume buffers arrive as clean in-memory data
//!   from external collaborators.
//! - **Continuity**: the scroll offset is a continuous function of `t`
//!   across cue boundaries and transition-window edges.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod audio;
mod eval;
mod foundation;
mod geometry;
mod timeline;
mod visualizer;

pub use animation::ease::Ease;
pub use audio::{
    AudioSource, REDUCED_VOCAL_GAIN, RenderKind, TrackSet, analysis_url, percent_gain,
    select_sources,
};
pub use eval::ambience::{AmbienceSampler, AmbienceState};
pub use eval::evaluator::{EvaluatorOpts, FrameEvaluator, FrameState};
pub use eval::fingerprint::{FrameFingerprint, fingerprint_frame};
pub use eval::resolver::{active_at, fading_at, next_starting, previous_ending};
pub use eval::scroll::scroll_offset;
pub use eval::style::{CueVisual, Palette, cue_progress};
pub use foundation::core::{Canvas, Fps, FrameIndex, Resolution, Rgb8};
pub use foundation::error::{CuelightError, CuelightResult};
pub use geometry::RenderGeometry;
pub use timeline::CueTimeline;
pub use timeline::cue::{CueEntry, ProcessedCue};
pub use timeline::wrap::wrap_cue_text;
pub use visualizer::{
    SAMPLE_PADDING, VisualizerBar, VisualizerFrame, VolumeSampleBuffer, visualizer_window,
};
