use crate::eval::evaluator::FrameState;
use xxhash_rust::xxh3::Xxh3;

const XXH3_SEED: u64 = 0x6c1e_97d3_42b8_0a5f;

/// Stable 128-bit fingerprint of an evaluated frame.
///
/// Two frames fingerprint equal iff their evaluated state is bit-identical,
/// so a renderer can elide duplicate frames and determinism tests can
/// compare whole frames cheaply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameFingerprint {
    /// High 64 bits of the digest.
    pub hi: u64,
    /// Low 64 bits of the digest.
    pub lo: u64,
}

/// Compute the stable fingerprint of a frame state.
pub fn fingerprint_frame(state: &FrameState) -> FrameFingerprint {
    let mut h = StableHasher::new();

    match state.active_index {
        Some(index) => {
            h.write_u8(1);
            h.write_u64(index as u64);
        }
        None => h.write_u8(0),
    }
    h.write_f64(state.scroll_offset);

    h.write_u64(state.cues.len() as u64);
    for cue in &state.cues {
        h.write_f64(cue.position);
        h.write_f64(cue.progress);
        h.write_f64(cue.opacity);
        h.write_f64(cue.scale);
        h.write_f64(cue.font_size);
        h.write_f64(cue.font_weight);
        h.write_u8(cue.color.r);
        h.write_u8(cue.color.g);
        h.write_u8(cue.color.b);
        h.write_u64(cue.stacking as u64);
    }

    match &state.visualizer {
        Some(frame) => {
            h.write_u8(1);
            h.write_f64(frame.shift);
            h.write_u64(frame.center_second as u64);
            h.write_u64(frame.bars.len() as u64);
            for bar in &frame.bars {
                h.write_u64(bar.second as u64);
                h.write_f64(bar.height);
                h.write_f64(bar.opacity);
                h.write_u8(u8::from(bar.is_center));
            }
        }
        None => h.write_u8(0),
    }

    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn finish(self) -> FrameFingerprint {
        let v = self.inner.digest128();
        FrameFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}
