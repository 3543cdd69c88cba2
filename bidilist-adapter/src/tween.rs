/// Duration of an animated `scroll_to_index` on [`crate::OffsetHost`].
pub const DEFAULT_SCROLL_DURATION_MS: u64 = 250;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    #[default]
    EaseInOutCubic,
}

impl Easing {
    /// Maps linear progress `t` in `0.0..=1.0` to eased progress.
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::EaseInOutCubic if t < 0.5 => 4.0 * t * t * t,
            Self::EaseInOutCubic => {
                let u = 2.0 - 2.0 * t;
                1.0 - u * u * u / 2.0
            }
        }
    }
}

/// Time-based interpolation between two scroll offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollTween {
    pub from: u64,
    pub to: u64,
    pub started_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl ScrollTween {
    pub fn new(from: u64, to: u64, started_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            started_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    fn progress(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.started_ms);
        (elapsed as f32 / self.duration_ms as f32).min(1.0)
    }

    pub fn finished(&self, now_ms: u64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    pub fn offset_at(&self, now_ms: u64) -> u64 {
        if self.finished(now_ms) {
            return self.to;
        }
        let eased = self.easing.apply(self.progress(now_ms));
        let delta = (self.to as f64 - self.from as f64) * eased as f64;
        (self.from as f64 + delta).max(0.0) as u64
    }

    /// Moves both endpoints by `shift` (rows inserted above the viewport mid-animation).
    pub fn shift(&mut self, shift: i64) {
        self.from = self.from.saturating_add_signed(shift);
        self.to = self.to.saturating_add_signed(shift);
    }
}
