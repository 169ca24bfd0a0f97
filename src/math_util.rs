/// Linear interpolation between `a` and `b`.
#[inline]
pub(crate) fn lerp(a: f32, b: f32, by: f32) -> f32 {
    a + (b - a) * by
}

/// Integer power by squaring, evaluated in double precision.
#[inline]
pub(crate) fn fast_pow(mut num: f64, mut exp: u32) -> f32 {
    let mut result = 1.0;

    while exp > 0 {
        if exp % 2 == 1 {
            result *= num;
        }

        exp >>= 1;
        num *= num;
    }

    result as f32
}
