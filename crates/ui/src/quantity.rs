//! Quantity selector.
//!
//! A local counter read by the enclosing add-to-cart action at submit time.
//! It never touches the cart itself.

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum SelectorSize {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
}

impl SelectorSize {
    pub fn input_class(self) -> &'static str {
        match self {
            SelectorSize::Xs => "input-xs",
            SelectorSize::Sm => "input-sm",
            SelectorSize::Md => "input-md",
            SelectorSize::Lg => "input-lg",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuantitySelector {
    value: u32,
    size: SelectorSize,
}

impl QuantitySelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: SelectorSize) -> Self {
        self.size = size;
        self
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn size(&self) -> SelectorSize {
        self.size
    }

    /// The compact variant drops the "Quantity" caption.
    pub fn shows_label(&self) -> bool {
        self.size != SelectorSize::Sm
    }

    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.value = self.value.saturating_sub(1);
    }

    /// Replace the value from raw text input. Never fails.
    pub fn set_from_input(&mut self, raw: &str) {
        self.value = parse_leading_quantity(raw);
    }
}

/// Leading-integer parse: optional whitespace, optional sign, then digits;
/// trailing text is ignored. No digits parse as 0, negatives clamp to 0,
/// and values beyond `u32::MAX` saturate.
fn parse_leading_quantity(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];

    if digits.is_empty() || negative {
        return 0;
    }

    digits.bytes().fold(0u32, |acc, d| {
        acc.saturating_mul(10).saturating_add(u32::from(d - b'0'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(QuantitySelector::new().value(), 0);
    }

    #[test]
    fn decrement_floors_at_zero() {
        let mut selector = QuantitySelector::new();
        selector.decrement();
        selector.decrement();
        assert_eq!(selector.value(), 0);
    }

    #[test]
    fn input_parsing_fails_soft() {
        let mut selector = QuantitySelector::new();

        selector.set_from_input("7");
        assert_eq!(selector.value(), 7);

        selector.set_from_input("abc");
        assert_eq!(selector.value(), 0);

        selector.set_from_input("  12 items");
        assert_eq!(selector.value(), 12);

        selector.set_from_input("-3");
        assert_eq!(selector.value(), 0);

        selector.set_from_input("");
        assert_eq!(selector.value(), 0);

        selector.set_from_input("99999999999999");
        assert_eq!(selector.value(), u32::MAX);
    }

    #[test]
    fn small_size_hides_label() {
        assert!(QuantitySelector::new().shows_label());
        let small = QuantitySelector::new().with_size(SelectorSize::Sm);
        assert!(!small.shows_label());
        assert_eq!(small.size().input_class(), "input-sm");
    }

    proptest! {
        /// Property: n increments followed by k <= n decrements land on n - k.
        #[test]
        fn increment_then_decrement_returns(start in 0u32..1000, n in 0u32..200, k in 0u32..200) {
            let k = k.min(n);
            let mut selector = QuantitySelector::new();
            selector.set_from_input(&start.to_string());

            for _ in 0..n {
                selector.increment();
            }
            for _ in 0..k {
                selector.decrement();
            }
            prop_assert_eq!(selector.value(), start + n - k);

            for _ in 0..(n - k) {
                selector.decrement();
            }
            prop_assert_eq!(selector.value(), start);
        }

        /// Property: arbitrary text never panics and round-trips plain numbers.
        #[test]
        fn any_input_is_accepted(raw in ".*", n in 0u32..100_000) {
            let mut selector = QuantitySelector::new();
            selector.set_from_input(&raw);
            selector.set_from_input(&n.to_string());
            prop_assert_eq!(selector.value(), n);
        }
    }
}
