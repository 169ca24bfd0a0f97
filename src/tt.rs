use std::f32::consts::E;

use crate::{math_util, speed::SpeedBracket, ChartPerformances};

const C: f32 = 0.6;
const B: f32 = 3.0;

/// Completion percentage from which on the steep curve is used.
const HIGH_PERCENT: f32 = 0.95;

/// The result of a TT calculation.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TTResult {
    /// The final TT value.
    pub tt: f32,
    /// The star rating that the TT value is based on.
    pub stars: f32,
}

impl TTResult {
    /// Return the TT value.
    #[inline]
    pub fn tt(&self) -> f32 {
        self.tt
    }

    /// Return the star value.
    #[inline]
    pub fn stars(&self) -> f32 {
        self.stars
    }
}

pub trait TTProvider {
    fn tt(&self) -> TTCalculator<'_>;
}

impl TTProvider for ChartPerformances {
    #[inline]
    fn tt(&self) -> TTCalculator<'_> {
        TTCalculator::new(self)
    }
}

/// TT calculator for a play on a chart.
///
/// # Example
///
/// ```
/// use tootally_pp::{Chart, Modifiers, TTProvider};
///
/// # /*
/// let chart: Chart = ...
/// # */
/// # let chart = Chart::default();
/// let performances = chart.performances();
///
/// let result = performances
///     .tt()
///     .speed(1.25)
///     .percent(0.97)
///     .modifiers(u32::HD)
///     .calculate();
///
/// println!("TT: {} | Stars: {}", result.tt(), result.stars());
/// ```
#[derive(Clone, Debug)]
pub struct TTCalculator<'p> {
    performances: &'p ChartPerformances,
    stars: Option<f32>,
    speed: f32,
    percent: f32,
    modifiers: u32,
}

impl<'p> TTCalculator<'p> {
    #[inline]
    pub fn new(performances: &'p ChartPerformances) -> Self {
        Self {
            performances,
            stars: None,
            speed: 1.0,
            percent: 1.0,
            modifiers: 0,
        }
    }

    /// Re-use a star rating of a previous calculation with the same
    /// speed, percent, and modifiers.
    #[inline]
    pub fn stars(mut self, stars: f32) -> Self {
        self.stars.replace(stars);

        self
    }

    /// Playback speed between 0.5 and 2.0.
    #[inline]
    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = speed;

        self
    }

    /// Completion percentage between 0.0 and 1.0.
    #[inline]
    pub fn percent(mut self, percent: f32) -> Self {
        self.percent = percent;

        self
    }

    /// Specify modifiers through their bit values, see [`Modifiers`](crate::Modifiers).
    #[inline]
    pub fn modifiers(mut self, modifiers: u32) -> Self {
        self.modifiers = modifiers;

        self
    }

    pub fn calculate(self) -> TTResult {
        let stars = self.stars.unwrap_or_else(|| {
            self.performances
                .dynamic_diff_rating(self.percent, self.speed, self.modifiers)
        });

        TTResult {
            tt: score_tt(base_tt(stars), self.percent),
            stars,
        }
    }
}

/// TT of a 60% score on a chart with the given star rating.
#[inline]
pub fn base_tt(stars: f32) -> f32 {
    0.5 * math_util::fast_pow(f64::from(stars), 2) + (7.0 * stars) + 0.05
}

/// Scale a base TT value by the completion percentage.
pub fn score_tt(base_tt: f32, percent: f32) -> f32 {
    if percent < HIGH_PERCENT {
        ((C * E.powf(B * percent)) - C) * base_tt
    } else {
        math_util::fast_pow(f64::from(8.7 * percent - 6.496_914_4), 4) * base_tt
    }
}

/// Interpolate precomputed star ratings of all speed tiers at `speed`.
pub fn lerp_diff(ratings: &[f32; 7], speed: f32) -> f32 {
    SpeedBracket::new(speed).interpolate(|tier| ratings[tier.index()])
}

/// TT of a play based on stored star ratings of all speed tiers.
pub fn score_tt_from_ratings(ratings: &[f32; 7], speed: f32, percent: f32) -> f32 {
    score_tt(base_tt(lerp_diff(ratings, speed)), percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SpeedTier;

    #[test]
    fn base() {
        assert!((base_tt(0.0) - 0.05).abs() < f32::EPSILON);
        assert!((base_tt(2.0) - 16.05).abs() < 1e-5);
        assert!((base_tt(10.0) - 120.05).abs() < 1e-4);
    }

    #[test]
    fn score_curve() {
        let base = 100.0;

        assert!(score_tt(base, 0.0).abs() < 1e-5);

        let low = score_tt(base, 0.5);
        let expected = (0.6 * E.powf(1.5) - 0.6) * base;
        assert!((low - expected).abs() < 1e-3);

        let full = score_tt(base, 1.0);
        let expected = (8.7_f32 - 6.496_914_4).powi(4) * base;
        assert!((full - expected).abs() < 1e-2);

        assert!(score_tt(base, 0.94) < score_tt(base, 0.96));
    }

    #[test]
    fn lerp_ratings() {
        let ratings = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];

        assert!((lerp_diff(&ratings, 1.0) - 3.0).abs() < f32::EPSILON);
        assert!((lerp_diff(&ratings, 1.125) - 3.5).abs() < f32::EPSILON);
        assert!((lerp_diff(&ratings, 2.0) - 7.0).abs() < f32::EPSILON);
        assert!((lerp_diff(&ratings, 0.6) - 1.4).abs() < 1e-6);
    }

    #[test]
    fn from_ratings() {
        let ratings = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let tt = score_tt_from_ratings(&ratings, 1.0, 1.0);

        assert!((tt - score_tt(base_tt(3.0), 1.0)).abs() < f32::EPSILON);
    }

    #[test]
    fn calculator_reuses_stars() {
        let performances = ChartPerformances::default();

        let result = performances.tt().stars(4.0).percent(0.5).calculate();

        assert!((result.stars() - 4.0).abs() < f32::EPSILON);
        assert!((result.tt() - score_tt(base_tt(4.0), 0.5)).abs() < f32::EPSILON);
    }

    #[test]
    fn calculator_on_empty_chart() {
        let performances = ChartPerformances::default();
        let result = TTCalculator::new(&performances)
            .speed(SpeedTier::S150.speed())
            .calculate();

        assert!(result.stars().abs() < f32::EPSILON);
        assert!((result.tt() - score_tt(0.05, 1.0)).abs() < f32::EPSILON);
    }
}
