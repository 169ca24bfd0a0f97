/// Smallest weight sum that [`DataVectorAnalytics`] divides by.
///
/// Keeps short sequences from producing inflated averages.
pub const MIN_WEIGHT_SUM: f32 = 300.0;

/// Strain and endurance of a single note along one skill axis.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DataVector {
    /// Position of the note in seconds.
    pub time: f32,
    /// The strain value at this note.
    pub performance: f32,
    /// The running endurance value at this note.
    pub endurance: f32,
    /// Sum of the decay weights of all neighbors that contributed to this note.
    pub weight: f32,
}

impl DataVector {
    #[inline]
    pub const fn new(time: f32, performance: f32, endurance: f32, weight: f32) -> Self {
        Self {
            time,
            performance,
            endurance,
            weight,
        }
    }
}

/// Sort data vectors ascending by performance while keeping the order of equal values.
pub(crate) fn sorted_by_performance(vectors: &[DataVector]) -> Vec<DataVector> {
    let mut sorted = vectors.to_vec();

    sorted.sort_by(|a, b| a.performance.total_cmp(&b.performance));

    sorted
}

/// Weighted summary of a sequence of [`DataVector`]s.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DataVectorAnalytics {
    /// The highest performance value, at least 0.
    pub perf_max: f32,
    /// Sum of `(performance + endurance) * weight / weight_sum`.
    pub perf_sum: f32,
    /// Same as `perf_sum`.
    pub perf_weighted_average: f32,
    /// Sum of all weights, floored at [`MIN_WEIGHT_SUM`].
    pub weight_sum: f32,
}

impl DataVectorAnalytics {
    /// Reduce the given data vectors.
    ///
    /// All fields are 0 for an empty slice.
    pub fn new(vectors: &[DataVector]) -> Self {
        let mut analytics = Self::default();

        if vectors.is_empty() {
            return analytics;
        }

        analytics.weight_sum = vectors
            .iter()
            .map(|vector| vector.weight)
            .sum::<f32>()
            .max(MIN_WEIGHT_SUM);

        for vector in vectors {
            if vector.performance > analytics.perf_max {
                analytics.perf_max = vector.performance;
            }

            analytics.perf_sum += (vector.performance + vector.endurance)
                * (vector.weight / analytics.weight_sum);
        }

        analytics.perf_weighted_average = analytics.perf_sum;

        analytics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty() {
        assert_eq!(DataVectorAnalytics::new(&[]), DataVectorAnalytics::default());
    }

    #[test]
    fn single_note_weight_floor() {
        let analytics = DataVectorAnalytics::new(&[DataVector::new(0.0, 3.0, 1.0, 1.0)]);

        assert!((analytics.weight_sum - MIN_WEIGHT_SUM).abs() < f32::EPSILON);
        assert!((analytics.perf_max - 3.0).abs() < f32::EPSILON);
        assert!((analytics.perf_weighted_average - 4.0 / 300.0).abs() < f32::EPSILON);
    }

    #[test]
    fn heavy_weights_are_not_floored() {
        let vectors = [
            DataVector::new(0.0, 2.0, 0.0, 200.0),
            DataVector::new(1.0, 4.0, 0.0, 200.0),
        ];

        let analytics = DataVectorAnalytics::new(&vectors);

        assert!((analytics.weight_sum - 400.0).abs() < f32::EPSILON);
        assert!((analytics.perf_weighted_average - 3.0).abs() < 1e-6);
        assert!((analytics.perf_max - 4.0).abs() < f32::EPSILON);
    }

    #[test]
    fn sort_is_stable() {
        let vectors = [
            DataVector::new(0.0, 2.0, 0.0, 1.0),
            DataVector::new(1.0, 1.0, 0.0, 1.0),
            DataVector::new(2.0, 2.0, 0.0, 1.0),
        ];

        let times: Vec<_> = sorted_by_performance(&vectors)
            .iter()
            .map(|vector| vector.time)
            .collect();

        assert_eq!(times, [1.0, 0.0, 2.0]);
    }

    #[test]
    fn sort_with_nan() {
        let vectors: Vec<_> = (0..40)
            .map(|i| {
                let performance = if i % 3 == 0 { f32::NAN } else { (40 - i) as f32 };

                DataVector::new(i as f32, performance, 0.0, 1.0)
            })
            .collect();

        let sorted = sorted_by_performance(&vectors);
        let (numbers, nans) = sorted.split_at(sorted.len() - 14);

        assert!(nans.iter().all(|vector| vector.performance.is_nan()));
        assert!(numbers
            .windows(2)
            .all(|w| w[0].performance <= w[1].performance));
    }

    fn data_vector() -> impl Strategy<Value = DataVector> {
        (0.0_f32..100.0, 0.0_f32..50.0, 0.0_f32..10.0, 0.0_f32..6.0)
            .prop_map(|(time, perf, endurance, weight)| {
                DataVector::new(time, perf, endurance, weight)
            })
    }

    proptest! {
        #[test]
        fn non_negative_average(vectors in prop::collection::vec(data_vector(), 0..200)) {
            let analytics = DataVectorAnalytics::new(&vectors);

            prop_assert!(analytics.perf_weighted_average >= 0.0);
            prop_assert!(analytics.perf_max >= 0.0);
        }

        #[test]
        fn weight_sum_floor(vectors in prop::collection::vec(data_vector(), 1..200)) {
            let analytics = DataVectorAnalytics::new(&vectors);

            prop_assert!(analytics.weight_sum >= MIN_WEIGHT_SUM);
        }
    }
}
