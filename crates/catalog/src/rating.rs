use serde::{Deserialize, Serialize};

use storefront_core::ValueObject;

/// Customer rating score, clamped to `[0.0, 5.0]`.
///
/// Out-of-range and non-numeric inputs are clamped rather than rejected, so a
/// sloppy data source still renders.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct Rating(f32);

impl ValueObject for Rating {}

impl Rating {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 5.0;

    pub fn new(score: f32) -> Self {
        if score.is_nan() {
            return Self(Self::MIN);
        }
        Self(score.clamp(Self::MIN, Self::MAX))
    }

    pub fn score(self) -> f32 {
        self.0
    }
}

impl From<f32> for Rating {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<Rating> for f32 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn nan_becomes_zero() {
        assert_eq!(Rating::new(f32::NAN).score(), 0.0);
    }

    #[test]
    fn deserialization_clamps() {
        let r: Rating = serde_json::from_str("7.5").unwrap();
        assert_eq!(r.score(), 5.0);
    }

    proptest! {
        #[test]
        fn score_is_always_in_range(raw in proptest::num::f32::ANY) {
            let score = Rating::new(raw).score();
            prop_assert!((Rating::MIN..=Rating::MAX).contains(&score));
        }
    }
}
