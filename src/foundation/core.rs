use crate::foundation::error::{CuelightError, CuelightResult};

/// Absolute 0-based frame index in output timeline space.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> CuelightResult<Self> {
        if den == 0 {
            return Err(CuelightError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(CuelightError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert frame count to seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Supported output resolutions.
///
/// Every geometry constant is authored in the 1080p reference space and scaled
/// linearly for larger outputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Resolution {
    /// 1920x1080 reference space, scale factor 1.
    Hd1080,
    /// 2560x1440, scale factor 2560/1920.
    Qhd2k,
}

impl Resolution {
    /// Linear scale factor applied to reference-space constants.
    pub fn scale_factor(self) -> f64 {
        match self {
            Self::Hd1080 => 1.0,
            Self::Qhd2k => 2560.0 / 1920.0,
        }
    }

    /// Canvas dimensions for this resolution.
    pub fn canvas(self) -> Canvas {
        match self {
            Self::Hd1080 => Canvas {
                width: 1920,
                height: 1080,
            },
            Self::Qhd2k => Canvas {
                width: 2560,
                height: 1440,
            },
        }
    }
}

/// Straight (non-premultiplied) 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from channel values.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Per-channel linear interpolation with `t` clamped to `[0, 1]`.
    pub fn lerp(a: Self, b: Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        let t = t.clamp(0.0, 1.0);
        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
        }
    }

    /// Multiply every channel by `factor`, saturating at 255.
    ///
    /// Used to derive the bright accent variant for gradient styling.
    pub fn brightened(self, factor: f64) -> Self {
        fn scale(c: u8, factor: f64) -> u8 {
            (f64::from(c) * factor).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: scale(self.r, factor),
            g: scale(self.g, factor),
            b: scale(self.b, factor),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
