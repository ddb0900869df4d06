use storefront_catalog::Rating;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Star {
    Full,
    Half,
    Empty,
}

/// Five-star rendering of a rating, rounded to the nearest half star.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RatingDisplay {
    stars: [Star; 5],
    halves: u8,
}

impl RatingDisplay {
    pub fn new(rating: Rating) -> Self {
        // Rating is clamped to [0, 5], so this stays within 0..=10.
        let halves = (rating.score() * 2.0).round() as u8;
        let mut stars = [Star::Empty; 5];
        for (i, star) in stars.iter_mut().enumerate() {
            let filled = halves.saturating_sub(2 * i as u8);
            *star = match filled {
                0 => Star::Empty,
                1 => Star::Half,
                _ => Star::Full,
            };
        }
        Self { stars, halves }
    }

    pub fn stars(&self) -> &[Star; 5] {
        &self.stars
    }

    /// Accessible label, e.g. "4.5 out of 5".
    pub fn label(&self) -> String {
        if self.halves % 2 == 0 {
            format!("{} out of 5", self.halves / 2)
        } else {
            format!("{}.5 out of 5", self.halves / 2)
        }
    }
}

impl From<Rating> for RatingDisplay {
    fn from(value: Rating) -> Self {
        Self::new(value)
    }
}
