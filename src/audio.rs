//! Audio track selection for the render kinds the authoring tool offers.
//!
//! Selection only: decoding and mixing belong to the host. The engine needs
//! the selection to know which track's loudness analysis keys the
//! visualizer's [`crate::VolumeSampleBuffer`].

/// Gain applied to the vocal stem when synthesizing the reduced-vocal mix
/// from separate stems.
pub const REDUCED_VOCAL_GAIN: f32 = 0.12;

/// The kind of video being rendered, which drives audio track selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RenderKind {
    /// Standard lyric video over the main track.
    LyricsVideo,
    /// Vocal stem only.
    VocalOnly,
    /// Instrumental stem only.
    InstrumentalOnly,
    /// Instrumental with the vocal stem mixed in at a reduced gain.
    ReducedVocal,
}

/// The track URLs available for one render.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrackSet {
    /// Main (full mix) track.
    pub main: Option<String>,
    /// Instrumental stem.
    pub instrumental: Option<String>,
    /// Vocal stem.
    pub vocal: Option<String>,
    /// Pre-mixed reduced-vocal track, when the user supplied one.
    pub reduced_vocal: Option<String>,
}

/// One selected audio source with its playback gain.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AudioSource {
    /// Source URL.
    pub url: String,
    /// Playback gain in `[0, 1]`.
    pub volume: f32,
}

impl AudioSource {
    fn full(url: &str) -> Self {
        Self {
            url: url.to_owned(),
            volume: 1.0,
        }
    }
}

/// Deterministically select the audio sources for a render.
///
/// Falls back to the main track whenever the preferred stem is missing;
/// returns an empty selection when no URL is available at all.
pub fn select_sources(kind: RenderKind, tracks: &TrackSet) -> Vec<AudioSource> {
    let main_fallback = || tracks.main.as_deref().map(AudioSource::full).into_iter().collect();

    match kind {
        RenderKind::LyricsVideo => main_fallback(),
        RenderKind::VocalOnly => match tracks.vocal.as_deref() {
            Some(url) => vec![AudioSource::full(url)],
            None => main_fallback(),
        },
        RenderKind::InstrumentalOnly => match tracks.instrumental.as_deref() {
            Some(url) => vec![AudioSource::full(url)],
            None => main_fallback(),
        },
        RenderKind::ReducedVocal => {
            if let Some(url) = tracks.reduced_vocal.as_deref() {
                return vec![AudioSource::full(url)];
            }
            match (tracks.instrumental.as_deref(), tracks.vocal.as_deref()) {
                (Some(instrumental), Some(vocal)) => vec![
                    AudioSource::full(instrumental),
                    AudioSource {
                        url: vocal.to_owned(),
                        volume: REDUCED_VOCAL_GAIN,
                    },
                ],
                _ => main_fallback(),
            }
        }
    }
}

/// The URL whose loudness analysis should feed the visualizer: the first
/// source of the selection.
pub fn analysis_url(kind: RenderKind, tracks: &TrackSet) -> Option<String> {
    select_sources(kind, tracks).into_iter().next().map(|s| s.url)
}

/// Map a percent-valued volume (the subtitle variant's track volume knobs)
/// to a playback gain; `None` means full volume.
pub fn percent_gain(percent: Option<f64>) -> f32 {
    let percent = percent.unwrap_or(100.0);
    (percent / 100.0).clamp(0.0, 1.0) as f32
}
