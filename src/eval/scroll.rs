use crate::animation::ease::Ease;
use crate::eval::resolver::{active_at, next_starting, previous_ending};
use crate::foundation::math::lerp;
use crate::geometry::RenderGeometry;
use crate::timeline::CueTimeline;

/// Vertical scroll position of the cue list at time `t`, in output pixels.
///
/// The returned value places the active cue at the geometry's anchor row and
/// is a continuous function of `t`: crossing a cue boundary or a
/// transition-window edge never produces a jump. Transition windows are
/// centered on the midpoint between one cue's end and the next cue's start,
/// span `transition` seconds, and ease with [`Ease::CSS_EASE`], clamped at
/// both ends.
pub fn scroll_offset(
    timeline: &CueTimeline,
    geometry: &RenderGeometry,
    transition: f64,
    t: f64,
) -> f64 {
    if timeline.is_empty() {
        return 0.0;
    }

    let target = |index: usize| geometry.natural_position(timeline, index) - geometry.anchor;
    let cues = timeline.cues();
    let half = transition.max(0.0) / 2.0;

    if let Some(active) = active_at(timeline, t) {
        // Incoming window shared with the previous cue; the offset must stay
        // continuous across back-to-back cue boundaries.
        if active > 0 {
            let center = (cues[active - 1].end + cues[active].start) / 2.0;
            if t <= center + half {
                return eased_between(target(active - 1), target(active), center, transition, t);
            }
        }
        // Outgoing window shared with the next cue.
        if active + 1 < cues.len() {
            let center = (cues[active].end + cues[active + 1].start) / 2.0;
            if t >= center - half {
                return eased_between(target(active), target(active + 1), center, transition, t);
            }
        }
        return target(active);
    }

    let previous = previous_ending(timeline, t);
    let next = next_starting(timeline, t);
    match (previous, next) {
        (Some(previous), Some(next)) => {
            let center = (cues[previous].end + cues[next].start) / 2.0;
            if t >= center - half && t <= center + half {
                eased_between(target(previous), target(next), center, transition, t)
            } else if t < center {
                target(previous)
            } else {
                target(next)
            }
        }
        (None, Some(next)) => target(next),
        (Some(_), None) => target(cues.len() - 1),
        (None, None) => 0.0,
    }
}

fn eased_between(from: f64, to: f64, center: f64, transition: f64, t: f64) -> f64 {
    if transition <= 0.0 {
        return if t < center { from } else { to };
    }
    let progress = ((t - (center - transition / 2.0)) / transition).clamp(0.0, 1.0);
    lerp(from, to, Ease::CSS_EASE.apply(progress))
}

#[cfg(test)]
#[path = "../../tests/unit/eval/scroll.rs"]
mod tests;
