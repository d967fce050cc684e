use smallvec::{SmallVec, smallvec};

/// Widest space search radius around the midpoint, in characters.
const SEARCH_RADIUS_MAX: usize = 10;

/// Split overlong cue text into at most two balanced lines.
///
/// Text at or under `threshold` characters is returned unchanged. Otherwise
/// the split lands on the space closest to the midpoint within a radius of
/// `min(10, len/4)` on either side; when both sides offer an equidistant
/// space, the one before the midpoint wins. With no space in the radius, the
/// text is force-split mid-word at the midpoint. Both halves are trimmed.
pub fn wrap_cue_text(text: &str, threshold: usize) -> SmallVec<[String; 2]> {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    if len <= threshold {
        return smallvec![text.to_owned()];
    }

    let middle = len / 2;
    let radius = SEARCH_RADIUS_MAX.min(len / 4);

    let mut best_break = middle;
    let mut best_distance = len;

    for i in middle.saturating_sub(radius)..middle {
        if chars[i] == ' ' {
            let distance = middle - i;
            if distance < best_distance {
                best_distance = distance;
                best_break = i;
            }
        }
    }
    for (offset, c) in chars[middle..].iter().enumerate().take(radius + 1) {
        if *c == ' ' && offset < best_distance {
            best_distance = offset;
            best_break = middle + offset;
        }
    }

    let first: String = chars[..best_break].iter().collect();
    let second: String = chars[best_break..].iter().collect();
    smallvec![first.trim().to_owned(), second.trim().to_owned()]
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/wrap.rs"]
mod tests;
