use crate::{
    data_vector::{self, DataVector, DataVectorAnalytics},
    modifiers::{self, Modifiers},
    speed::SpeedBracket,
    strain::{self, Strains},
    Note, SpeedTier,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

const BIAS: f32 = 0.75;
const AIM_WEIGHT: f32 = 1.2;
const TAP_WEIGHT: f32 = 1.15;

/// Added to every rating so that a rating of zero means "no data".
const RATING_EPSILON: f32 = 0.01;

/// Fraction of the sorted strains that a play at [`MACC`] completion is rated on.
pub const MAP: f32 = 0.01;

/// Completion percentage at which the percentile mapping changes its slope.
pub const MACC: f32 = 0.3;

/// Everything calculated for a chart at a single speed tier.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TierPerformance {
    /// Aim strains in chart order.
    pub aim: Vec<DataVector>,
    /// Aim strains sorted ascending by performance.
    pub sorted_aim: Vec<DataVector>,
    pub aim_analytics: DataVectorAnalytics,
    pub aim_rating: f32,

    /// Tap strains in chart order.
    pub tap: Vec<DataVector>,
    /// Tap strains sorted ascending by performance.
    pub sorted_tap: Vec<DataVector>,
    pub tap_analytics: DataVectorAnalytics,
    pub tap_rating: f32,

    /// The combined star rating.
    pub stars: f32,
}

impl TierPerformance {
    fn new(notes: &[Note]) -> Self {
        let mut tier = Self::default();
        tier.set_strains(strain::strains(notes));
        tier.calculate_analytics();
        tier.calculate_rating();

        tier
    }

    fn set_strains(&mut self, strains: Strains) {
        self.sorted_aim = data_vector::sorted_by_performance(&strains.aim);
        self.sorted_tap = data_vector::sorted_by_performance(&strains.tap);
        self.aim = strains.aim;
        self.tap = strains.tap;
    }

    fn calculate_analytics(&mut self) {
        self.aim_analytics = DataVectorAnalytics::new(&self.aim);
        self.tap_analytics = DataVectorAnalytics::new(&self.tap);
    }

    fn calculate_rating(&mut self) {
        self.aim_rating = self.aim_analytics.perf_weighted_average + RATING_EPSILON;
        self.tap_rating = self.tap_analytics.perf_weighted_average + RATING_EPSILON;
        self.stars = combine_ratings(self.aim_rating, self.tap_rating);
    }
}

/// Strains, analytics, and ratings of a chart for all seven speed tiers.
///
/// Once calculated, all queries only read from it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartPerformances {
    tiers: [TierPerformance; 7],
    note_count: usize,
    slider_count: usize,
}

impl ChartPerformances {
    /// Create empty performances for a chart with the given amount of notes.
    pub fn new(note_count: usize, slider_count: usize) -> Self {
        Self {
            note_count,
            slider_count,
            ..Self::default()
        }
    }

    /// The amount of notes this was created for.
    #[inline]
    pub const fn note_count(&self) -> usize {
        self.note_count
    }

    /// The amount of slider notes this was created for.
    #[inline]
    pub const fn slider_count(&self) -> usize {
        self.slider_count
    }

    /// Run the strain calculation for a tier on notes that are timed for its speed.
    ///
    /// Stores both the chart-ordered and the sorted strains.
    pub fn calculate_performances(&mut self, tier: SpeedTier, notes: &[Note]) {
        self.tiers[tier.index()].set_strains(strain::strains(notes));
    }

    /// Reduce the strains of a tier into analytics.
    pub fn calculate_analytics(&mut self, tier: SpeedTier) {
        self.tiers[tier.index()].calculate_analytics();
    }

    /// Combine the analytics of a tier into its ratings.
    pub fn calculate_ratings(&mut self, tier: SpeedTier) {
        self.tiers[tier.index()].calculate_rating();
    }

    /// Strains, analytics, and ratings for a single tier in one go.
    pub fn calculate_tier(&mut self, tier: SpeedTier, notes: &[Note]) {
        self.tiers[tier.index()] = TierPerformance::new(notes);
        log_tier(tier, self.tier(tier));
    }

    /// Calculate all tiers with the notes that `notes_at` provides for each one.
    pub fn calculate_all<F>(&mut self, notes_at: F)
    where
        F: Fn(SpeedTier) -> Vec<Note> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            let tiers: Vec<_> = SpeedTier::ALL
                .par_iter()
                .map(|&tier| (tier, TierPerformance::new(&notes_at(tier))))
                .collect();

            for (tier, performance) in tiers {
                self.tiers[tier.index()] = performance;
                log_tier(tier, self.tier(tier));
            }
        }

        #[cfg(not(feature = "parallel"))]
        for &tier in SpeedTier::ALL.iter() {
            self.calculate_tier(tier, &notes_at(tier));
        }
    }

    /// Everything calculated for the given tier.
    #[inline]
    pub fn tier(&self, tier: SpeedTier) -> &TierPerformance {
        &self.tiers[tier.index()]
    }

    /// Star ratings of all tiers, ordered by speed.
    pub fn star_ratings(&self) -> [f32; 7] {
        let mut ratings = [0.0; 7];

        for (rating, tier) in ratings.iter_mut().zip(self.tiers.iter()) {
            *rating = tier.stars;
        }

        ratings
    }

    /// The star rating at any speed in `[0.5, 2.0]`, interpolated between tiers.
    pub fn diff_rating(&self, speed: f32) -> f32 {
        SpeedBracket::new(speed).interpolate(|tier| self.tier(tier).stars)
    }

    /// The aim rating of a play that reached `percent` of the chart at `speed`.
    pub fn dynamic_aim_rating(&self, percent: f32, speed: f32) -> f32 {
        self.dynamic_skill_rating(percent, speed, |tier| tier.sorted_aim.as_slice())
    }

    /// The tap rating of a play that reached `percent` of the chart at `speed`.
    pub fn dynamic_tap_rating(&self, percent: f32, speed: f32) -> f32 {
        self.dynamic_skill_rating(percent, speed, |tier| tier.sorted_tap.as_slice())
    }

    fn dynamic_skill_rating<F>(&self, percent: f32, speed: f32, sorted: F) -> f32
    where
        F: Fn(&TierPerformance) -> &[DataVector],
    {
        let bracket = SpeedBracket::new(speed);

        if sorted(self.tier(bracket.lower())).len() <= 1 || percent <= 0.0 {
            return 0.0;
        }

        bracket.interpolate(|tier| skill_rating(percent, sorted(self.tier(tier))))
    }

    /// The star rating of a play that reached `percent` of the chart at `speed`
    /// with the given [`Modifiers`].
    pub fn dynamic_diff_rating(&self, percent: f32, speed: f32, mods: u32) -> f32 {
        let mut aim_rating = self.dynamic_aim_rating(percent, speed);
        let mut tap_rating = self.dynamic_tap_rating(percent, speed);

        if aim_rating == 0.0 && tap_rating == 0.0 {
            return 0.0;
        }

        if mods.adjusts_ratings() {
            aim_rating = modifiers::adjust_rating(aim_rating, mods.aim_exponent());
            tap_rating = modifiers::adjust_rating(tap_rating, mods.tap_exponent());
        }

        combine_ratings(aim_rating, tap_rating)
    }
}

#[allow(unused_variables)]
fn log_tier(tier: SpeedTier, performance: &TierPerformance) {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        speed = tier.speed(),
        notes = performance.aim.len(),
        aim = performance.aim_rating,
        tap = performance.tap_rating,
        stars = performance.stars,
        "calculated speed tier"
    );
}

/// Weighted average over the sorted strains that a play reaching `percent` is rated on.
///
/// Returns 0 for fewer than two strains.
pub fn skill_rating(percent: f32, sorted: &[DataVector]) -> f32 {
    if sorted.len() <= 1 {
        return 0.0;
    }

    let len = sorted.len() as f32;

    let fraction = if percent <= MACC {
        percent * (MAP / MACC)
    } else {
        (percent - MACC) * ((1.0 - MAP) / (1.0 - MACC)) + MAP
    };

    let max_range = (len * fraction).clamp(1.0, len) as usize;

    DataVectorAnalytics::new(&sorted[..max_range]).perf_weighted_average + RATING_EPSILON
}

/// Blend aim and tap ratings, giving the dominant one more influence.
pub fn combine_ratings(aim_rating: f32, tap_rating: f32) -> f32 {
    if aim_rating == 0.0 && tap_rating == 0.0 {
        return 0.0;
    }

    let total_rating = aim_rating + tap_rating;
    let aim_perc = aim_rating / total_rating;
    let tap_perc = tap_rating / total_rating;
    let aim_weight = (aim_perc + BIAS) * AIM_WEIGHT;
    let tap_weight = (tap_perc + BIAS) * TAP_WEIGHT;
    let total_weight = aim_weight + tap_weight;

    ((aim_rating * aim_weight) + (tap_rating * tap_weight)) / total_weight
}
