use crate::timeline::CueTimeline;

/// Index of the cue whose `[start, end]` window contains `t`, if any.
///
/// Cues are assumed chronological and non-overlapping; under violations the
/// smallest matching index wins, matching iteration order of a forward scan.
/// Implemented as a binary search over the memoized start array plus a
/// backward walk bounded by the prefix max of cue ends, so well-formed input
/// stays O(log n). Cues with `end <= start` never activate.
pub fn active_at(timeline: &CueTimeline, t: f64) -> Option<usize> {
    let hi = timeline.starts().partition_point(|&s| s <= t);
    if hi == 0 {
        return None;
    }

    let cues = timeline.cues();
    let mut found = None;
    let mut index = hi;
    while index > 0 {
        index -= 1;
        let cue = &cues[index];
        if cue.activatable() && t >= cue.start && t <= cue.end {
            found = Some(index);
        }
        // No earlier cue can contain t once every preceding end is behind it.
        if timeline.max_end_before(index) < t {
            break;
        }
    }
    found
}

/// Index of the cue with the latest `end <= t`, if any.
pub fn previous_ending(timeline: &CueTimeline, t: f64) -> Option<usize> {
    let hi = timeline.ends().partition_point(|&e| e <= t);
    if hi == 0 { None } else { Some(hi - 1) }
}

/// Index of the first cue with `start > t`, if any.
pub fn next_starting(timeline: &CueTimeline, t: f64) -> Option<usize> {
    let index = timeline.starts().partition_point(|&s| s <= t);
    if index < timeline.len() {
        Some(index)
    } else {
        None
    }
}

/// Single-cue fade resolution: the cue whose window, widened by
/// `transition` seconds on each side, contains `t`, together with its fade
/// opacity (ramping linearly over the widened edges, 1 inside the window).
///
/// This is the degenerate display model used for plain subtitle renders,
/// where only one cue is ever visible and neighbors never crossfade.
pub fn fading_at(timeline: &CueTimeline, transition: f64, t: f64) -> Option<(usize, f64)> {
    let transition = transition.max(0.0);
    let hi = timeline.starts().partition_point(|&s| s <= t + transition);
    if hi == 0 {
        return None;
    }

    let cues = timeline.cues();
    let mut found = None;
    let mut index = hi;
    while index > 0 {
        index -= 1;
        let cue = &cues[index];
        if t >= cue.start - transition && t <= cue.end + transition {
            found = Some(index);
        }
        if timeline.max_end_before(index) < t - transition {
            break;
        }
    }

    let index = found?;
    let cue = &cues[index];
    let opacity = if transition <= 0.0 {
        1.0
    } else if t < cue.start {
        (t - (cue.start - transition)) / transition
    } else if t > cue.end {
        1.0 - (t - cue.end) / transition
    } else {
        1.0
    };
    Some((index, opacity.clamp(0.0, 1.0)))
}

#[cfg(test)]
#[path = "../../tests/unit/eval/resolver.rs"]
mod tests;
