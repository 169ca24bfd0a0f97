#![allow(unused)]

/// Path to the .tmb file used throughout the tests
pub const CHART: &str = "./resources/test.tmb";

pub const NOTE_COUNT: usize = 32;
pub const SLIDER_COUNT: usize = 4;

#[track_caller]
pub fn assert_eq_float<F: Float>(a: F, b: F) {
    assert!((a - b).abs() < F::EPSILON, "{a} != {b}")
}

/// Like `assert_eq_float` but with a custom margin.
#[track_caller]
pub fn assert_close<F: Float>(a: F, b: F, margin: F) {
    assert!((a - b).abs() < margin, "{a} != {b} (margin {margin})")
}

/// Trait to provide flexibility in the `assert_eq_float` function.
pub trait Float:
    Copy + std::fmt::Display + std::ops::Sub<Output = Self> + PartialOrd + Sized
{
    const EPSILON: Self;

    fn abs(self) -> Self;
}

macro_rules! impl_float {
    ( $( $ty:ty )* ) => {
        $(
            impl Float for $ty {
                const EPSILON: Self = Self::EPSILON;

                fn abs(self) -> Self {
                    self.abs()
                }
            }
        )*
    }
}

impl_float!(f32 f64);
