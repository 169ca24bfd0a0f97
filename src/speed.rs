use crate::math_util;

/// The playback speeds at which ratings are precomputed, indexed by [`SpeedTier`].
pub const GAME_SPEED: [f32; 7] = [0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0];

pub(crate) const MIN_SPEED: f32 = 0.5;
pub(crate) const MAX_SPEED: f32 = 2.0;
pub(crate) const SPEED_STEP: f32 = 0.25;

/// One of the seven discrete playback speeds.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum SpeedTier {
    /// 0.5x
    S050 = 0,
    /// 0.75x
    S075 = 1,
    /// 1.0x
    S100 = 2,
    /// 1.25x
    S125 = 3,
    /// 1.5x
    S150 = 4,
    /// 1.75x
    S175 = 5,
    /// 2.0x
    S200 = 6,
}

impl SpeedTier {
    /// All tiers in ascending order of speed.
    pub const ALL: [Self; 7] = [
        Self::S050,
        Self::S075,
        Self::S100,
        Self::S125,
        Self::S150,
        Self::S175,
        Self::S200,
    ];

    /// Position of the tier inside [`GAME_SPEED`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    /// The speed multiplier of this tier.
    #[inline]
    pub const fn speed(self) -> f32 {
        GAME_SPEED[self as usize]
    }

    /// The tier whose speed is the largest one not exceeding `speed`.
    ///
    /// Speeds outside of `[0.5, 2.0]` are clamped first.
    pub fn from_speed(speed: f32) -> Self {
        let speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        let idx = ((speed - MIN_SPEED) / SPEED_STEP) as usize;

        Self::ALL[idx.min(Self::ALL.len() - 1)]
    }

    /// The next faster tier, if any.
    #[inline]
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }
}

/// Where a continuous speed lies relative to the discrete tiers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum SpeedBracket {
    Exact(SpeedTier),
    Between {
        lower: SpeedTier,
        upper: SpeedTier,
        by: f32,
    },
}

impl SpeedBracket {
    pub(crate) fn new(speed: f32) -> Self {
        let speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        let lower = SpeedTier::from_speed(speed);

        if speed % SPEED_STEP == 0.0 {
            return Self::Exact(lower);
        }

        match lower.next() {
            Some(upper) => {
                let min_speed = lower.speed();
                let max_speed = upper.speed();

                Self::Between {
                    lower,
                    upper,
                    by: (speed - min_speed) / (max_speed - min_speed),
                }
            }
            None => Self::Exact(lower),
        }
    }

    #[inline]
    pub(crate) const fn lower(self) -> SpeedTier {
        match self {
            Self::Exact(tier) | Self::Between { lower: tier, .. } => tier,
        }
    }

    /// Evaluate `f` at the bracketing tiers and interpolate linearly.
    pub(crate) fn interpolate<F>(self, mut f: F) -> f32
    where
        F: FnMut(SpeedTier) -> f32,
    {
        match self {
            Self::Exact(tier) => f(tier),
            Self::Between { lower, upper, by } => math_util::lerp(f(lower), f(upper), by),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_from_speed() {
        assert_eq!(SpeedTier::from_speed(0.5), SpeedTier::S050);
        assert_eq!(SpeedTier::from_speed(1.0), SpeedTier::S100);
        assert_eq!(SpeedTier::from_speed(1.1), SpeedTier::S100);
        assert_eq!(SpeedTier::from_speed(1.249), SpeedTier::S100);
        assert_eq!(SpeedTier::from_speed(2.0), SpeedTier::S200);
    }

    #[test]
    fn tier_from_speed_clamps() {
        assert_eq!(SpeedTier::from_speed(0.1), SpeedTier::S050);
        assert_eq!(SpeedTier::from_speed(-3.0), SpeedTier::S050);
        assert_eq!(SpeedTier::from_speed(2.7), SpeedTier::S200);
    }

    #[test]
    fn tiers_match_table() {
        for (tier, speed) in SpeedTier::ALL.iter().zip(GAME_SPEED.iter()) {
            assert!((tier.speed() - speed).abs() < f32::EPSILON);
            assert_eq!(SpeedTier::from_speed(*speed), *tier);
            assert_eq!(SpeedTier::from_index(tier.index()), Some(*tier));
        }

        assert_eq!(SpeedTier::S200.next(), None);
        assert_eq!(SpeedTier::from_index(7), None);
    }

    #[test]
    fn bracket_exact() {
        assert_eq!(SpeedBracket::new(1.25), SpeedBracket::Exact(SpeedTier::S125));
        assert_eq!(SpeedBracket::new(2.0), SpeedBracket::Exact(SpeedTier::S200));
        assert_eq!(SpeedBracket::new(3.0), SpeedBracket::Exact(SpeedTier::S200));
    }

    #[test]
    fn bracket_between() {
        let bracket = SpeedBracket::new(1.125);

        assert_eq!(
            bracket,
            SpeedBracket::Between {
                lower: SpeedTier::S100,
                upper: SpeedTier::S125,
                by: 0.5,
            }
        );

        let value = bracket.interpolate(|tier| tier.speed() * 2.0);
        assert!((value - 2.25).abs() < f32::EPSILON);
    }
}
