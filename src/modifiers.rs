/// Exponent increments of the hidden modifier, `[aim, tap]`.
pub const HD_WEIGHTS: [f32; 2] = [0.12, 0.09];

/// Exponent increments of the flashlight modifier, `[aim, tap]`.
pub const FL_WEIGHTS: [f32; 2] = [0.18, 0.05];

/// Modifiers given as bit flags.
pub trait Modifiers: Copy {
    const NM: u32 = 0;
    const HD: u32 = 1 << 3;
    const FL: u32 = 1 << 10;

    fn hd(self) -> bool;
    fn fl(self) -> bool;

    /// Whether any of the modifiers reshapes the ratings.
    fn adjusts_ratings(self) -> bool;

    /// Power that is applied to the aim rating.
    fn aim_exponent(self) -> f32;

    /// Power that is applied to the tap rating.
    fn tap_exponent(self) -> f32;
}

impl Modifiers for u32 {
    #[inline]
    fn hd(self) -> bool {
        self & Self::HD > 0
    }

    #[inline]
    fn fl(self) -> bool {
        self & Self::FL > 0
    }

    #[inline]
    fn adjusts_ratings(self) -> bool {
        self & (Self::HD | Self::FL) > 0
    }

    fn aim_exponent(self) -> f32 {
        let mut exponent = 1.0;

        if self.hd() {
            exponent += HD_WEIGHTS[0];
        }

        if self.fl() {
            exponent += FL_WEIGHTS[0];
        }

        exponent
    }

    fn tap_exponent(self) -> f32 {
        let mut exponent = 1.0;

        if self.hd() {
            exponent += HD_WEIGHTS[1];
        }

        if self.fl() {
            exponent += FL_WEIGHTS[1];
        }

        exponent
    }
}

/// Collect modifier flags from their acronyms, e.g. `["HD", "FL"]`.
///
/// Unknown acronyms are ignored.
pub fn modifiers_from_names<'n, I>(names: I) -> u32
where
    I: IntoIterator<Item = &'n str>,
{
    names.into_iter().fold(u32::NM, |mods, name| {
        match name.trim().to_ascii_uppercase().as_str() {
            "HD" => mods | u32::HD,
            "FL" => mods | u32::FL,
            _ => mods,
        }
    })
}

/// Apply the modifiers' power law to a rating.
#[inline]
pub(crate) fn adjust_rating(rating: f32, exponent: f32) -> f32 {
    (rating + 1.0).powf(exponent) - 1.0
}
