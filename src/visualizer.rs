use crate::foundation::error::{CuelightError, CuelightResult};
use crate::geometry::RenderGeometry;

/// Padding samples on each side of the raw loudness data.
pub const SAMPLE_PADDING: usize = 40;

/// Seconds shown on each side of the window center.
const WINDOW_RADIUS: i64 = 20;

/// Loudness floor substituted for missing or silent samples so a bar is
/// never invisible.
const VOLUME_FLOOR: f32 = 0.05;

/// Distance (in seconds from `t`) beyond which bar amplitude attenuates.
const BOUNDARY_START: f64 = 18.0;

/// Per-second loudness samples in `[0, 1]`, padded with [`SAMPLE_PADDING`]
/// samples on each side so windowed lookups never bounds-check.
///
/// Produced once per audio-track change by the external analyzer and
/// immutable afterwards.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct VolumeSampleBuffer {
    samples: Vec<f32>,
}

impl VolumeSampleBuffer {
    /// Wrap raw per-second levels, adding the zero padding on both sides.
    pub fn from_levels(levels: &[f32]) -> Self {
        let mut samples = vec![0.0f32; levels.len() + 2 * SAMPLE_PADDING];
        samples[SAMPLE_PADDING..SAMPLE_PADDING + levels.len()].copy_from_slice(levels);
        Self { samples }
    }

    /// Accept an already padded buffer from the analyzer.
    pub fn from_padded(samples: Vec<f32>) -> CuelightResult<Self> {
        if samples.len() < 2 * SAMPLE_PADDING {
            return Err(CuelightError::validation(
                "padded volume buffer must carry at least 80 samples",
            ));
        }
        Ok(Self { samples })
    }

    /// Number of real (unpadded) per-second samples.
    pub fn data_len(&self) -> usize {
        self.samples.len() - 2 * SAMPLE_PADDING
    }

    /// Loudness for `second`, falling back to the silent floor for missing
    /// or zero samples.
    fn level_at(&self, second: i64) -> f32 {
        let index = second + SAMPLE_PADDING as i64;
        if index < 0 {
            return VOLUME_FLOOR;
        }
        match self.samples.get(index as usize) {
            Some(&v) if v > 0.0 => v,
            _ => VOLUME_FLOOR,
        }
    }
}

/// One visualizer bar.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct VisualizerBar {
    /// The second of audio this bar represents.
    pub second: i64,
    /// Bar height in output pixels.
    pub height: f64,
    /// Bar opacity in `[0, 1]`, fading with distance from the center.
    pub opacity: f64,
    /// `true` for the bar at `floor(t)`, rendered in the accent color.
    pub is_center: bool,
}

/// Windowed audio-level visualization for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct VisualizerFrame {
    /// Bars for the seconds around `t`, clipped to buffer bounds.
    pub bars: Vec<VisualizerBar>,
    /// Sub-second horizontal shift in output pixels, for smooth scrolling
    /// between integer seconds.
    pub shift: f64,
    /// The window's center second, `floor(t)`.
    pub center_second: i64,
}

/// Build the symmetric bar window around `t`.
///
/// Covers seconds `[floor(t)-20, floor(t)+20]` clipped to the buffer's real
/// data range; amplitude is `min(1, level * 3.5)` with a linear boundary
/// attenuation of up to 30% beyond 18 seconds from `t`.
pub fn visualizer_window(
    buffer: &VolumeSampleBuffer,
    geometry: &RenderGeometry,
    t: f64,
) -> VisualizerFrame {
    let t = if t.is_finite() { t } else { 0.0 };
    let center = t.floor() as i64;
    let start = (center - WINDOW_RADIUS).max(0);
    let end = (center + WINDOW_RADIUS).min(buffer.data_len() as i64);

    let mut bars = Vec::new();
    if start <= end {
        bars.reserve((end - start + 1) as usize);
        for second in start..=end {
            let distance = (second as f64 - t).abs();
            let boundary = if distance > BOUNDARY_START {
                1.0 - ((distance - BOUNDARY_START) / 2.0) * 0.3
            } else {
                1.0
            };
            let amplitude =
                (f64::from(buffer.level_at(second)) * 3.5).min(1.0) * boundary.max(0.0);
            let opacity = (1.0 - (distance / WINDOW_RADIUS as f64) * 0.5).clamp(0.0, 1.0);

            bars.push(VisualizerBar {
                second,
                height: amplitude * geometry.visualizer_height * 0.8,
                opacity,
                is_center: second == center,
            });
        }
    }

    VisualizerFrame {
        bars,
        shift: t.rem_euclid(1.0) * (geometry.bar_width + geometry.bar_gap),
        center_second: center,
    }
}

#[cfg(test)]
#[path = "../tests/unit/visualizer.rs"]
mod tests;
