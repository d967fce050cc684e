/// One raw timestamped text entry (lyric line or subtitle).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CueEntry {
    /// Start of the cue window in seconds.
    pub start: f64,
    /// End of the cue window in seconds; must be greater than `start`.
    pub end: f64,
    /// Display text.
    pub text: String,
}

impl CueEntry {
    /// Build a cue entry.
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    /// Window length in seconds; nonpositive for degenerate cues.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// A cue after timeline preprocessing: overlong text carries embedded `\n`
/// line breaks, and the line count is derived once.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ProcessedCue {
    /// Start of the cue window in seconds.
    pub start: f64,
    /// End of the cue window in seconds.
    pub end: f64,
    /// Display text, possibly containing `\n` breaks.
    pub text: String,
    line_count: u32,
}

impl ProcessedCue {
    pub(crate) fn new(start: f64, end: f64, text: String) -> Self {
        let line_count = count_lines(&text);
        Self {
            start,
            end,
            text,
            line_count,
        }
    }

    /// Number of display lines, counting every embedded break regardless of
    /// whether it came from the wrapper or the source text.
    pub fn line_count(&self) -> u32 {
        self.line_count
    }

    /// `true` when `end > start`; only such cues can become active.
    pub fn activatable(&self) -> bool {
        self.end > self.start
    }
}

fn count_lines(text: &str) -> u32 {
    if text.is_empty() {
        return 1;
    }
    text.matches('\n').count() as u32 + 1
}
