pub mod cue;
pub mod wrap;

use crate::timeline::cue::{CueEntry, ProcessedCue};
use crate::timeline::wrap::wrap_cue_text;

/// Ordered, preprocessed cue list with the per-build lookup tables used by
/// frame evaluation.
///
/// Built once per input change and read-only afterwards. Input order is
/// preserved verbatim; chronological, non-overlapping cues are the caller
/// contract and violations degrade to defined tie-breaks (see the resolver).
#[derive(Clone, Debug, serde::Serialize)]
pub struct CueTimeline {
    cues: Vec<ProcessedCue>,
    extra_lines_before: Vec<u32>,
    starts: Vec<f64>,
    ends: Vec<f64>,
    max_end_before: Vec<f64>,
}

impl CueTimeline {
    /// Build a timeline, wrapping any cue whose text exceeds
    /// `wrap_threshold` characters (`None` disables wrapping).
    ///
    /// Never fails: degenerate cues (`end <= start`, non-finite bounds) are
    /// kept in place for layout but flagged as a data-quality warning and
    /// never activated.
    #[tracing::instrument(skip(cues))]
    pub fn build(cues: &[CueEntry], wrap_threshold: Option<usize>) -> Self {
        let mut processed = Vec::with_capacity(cues.len());
        for (index, cue) in cues.iter().enumerate() {
            if !cue.start.is_finite() || !cue.end.is_finite() {
                tracing::warn!(index, start = cue.start, end = cue.end, "non-finite cue bounds");
            } else if cue.end <= cue.start {
                tracing::warn!(
                    index,
                    start = cue.start,
                    end = cue.end,
                    "cue has nonpositive duration and will never activate"
                );
            }

            let text = match wrap_threshold {
                Some(threshold) if cue.text.chars().count() > threshold => {
                    wrap_cue_text(&cue.text, threshold).join("\n")
                }
                _ => cue.text.clone(),
            };
            processed.push(ProcessedCue::new(cue.start, cue.end, text));
        }

        let mut extra_lines_before = Vec::with_capacity(processed.len());
        let mut starts = Vec::with_capacity(processed.len());
        let mut ends = Vec::with_capacity(processed.len());
        let mut max_end_before = Vec::with_capacity(processed.len());

        let mut extra_lines = 0u32;
        let mut max_end = f64::NEG_INFINITY;
        for cue in &processed {
            extra_lines_before.push(extra_lines);
            max_end_before.push(max_end);
            starts.push(cue.start);
            ends.push(cue.end);
            extra_lines += cue.line_count().saturating_sub(1);
            max_end = max_end.max(cue.end);
        }

        Self {
            cues: processed,
            extra_lines_before,
            starts,
            ends,
            max_end_before,
        }
    }

    /// Number of cues.
    pub fn len(&self) -> usize {
        self.cues.len()
    }

    /// `true` when the timeline holds no cues.
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Cue at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&ProcessedCue> {
        self.cues.get(index)
    }

    /// All cues in insertion order.
    pub fn cues(&self) -> &[ProcessedCue] {
        &self.cues
    }

    /// Total extra display lines contributed by cues before `index`.
    ///
    /// Memoized prefix sum of `line_count - 1`; the geometry multiplies this
    /// by the extra-line margin for O(1) per-frame position lookups.
    pub fn extra_lines_before(&self, index: usize) -> u32 {
        self.extra_lines_before.get(index).copied().unwrap_or(0)
    }

    pub(crate) fn starts(&self) -> &[f64] {
        &self.starts
    }

    pub(crate) fn ends(&self) -> &[f64] {
        &self.ends
    }

    /// Largest `end` among cues strictly before `index`
    /// (`-inf` for index 0). Bounds the resolver's backward walk.
    pub(crate) fn max_end_before(&self, index: usize) -> f64 {
        self.max_end_before
            .get(index)
            .copied()
            .unwrap_or(f64::NEG_INFINITY)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/timeline.rs"]
mod tests;
