//! Circular image carousel.

/// Indicator dot state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
}

/// Index navigator over a fixed, read-only image list (loop mode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    images: Vec<String>,
    index: usize,
}

impl Carousel {
    pub fn new<I, S>(images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            images: images.into_iter().map(Into::into).collect(),
            index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    pub fn next(&mut self) {
        if !self.images.is_empty() {
            self.index = (self.index + 1) % self.images.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.images.is_empty() {
            self.index = (self.index + self.images.len() - 1) % self.images.len();
        }
    }

    /// Jump to `index`; out-of-range requests are ignored. Returns whether the
    /// index is now `index`.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.index = index;
        true
    }

    /// In loop mode every direction is available once there is something to
    /// scroll to.
    pub fn can_scroll_prev(&self) -> bool {
        self.images.len() > 1
    }

    pub fn can_scroll_next(&self) -> bool {
        self.images.len() > 1
    }

    pub fn indicators(&self) -> Vec<Indicator> {
        (0..self.images.len())
            .map(|index| Indicator {
                index,
                active: index == self.index,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn banners(n: usize) -> Carousel {
        Carousel::new((0..n).map(|i| format!("/images/banner-{i}.jpg")))
    }

    #[test]
    fn prev_from_first_wraps_to_last() {
        let mut carousel = banners(4);
        carousel.prev();
        assert_eq!(carousel.current_index(), 3);
    }

    #[test]
    fn next_from_last_wraps_to_first() {
        let mut carousel = banners(3);
        carousel.go_to(2);
        carousel.next();
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.current_image(), Some("/images/banner-0.jpg"));
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut carousel = banners(3);
        assert!(carousel.go_to(1));
        assert!(!carousel.go_to(3));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn exactly_one_indicator_is_active() {
        let mut carousel = banners(5);
        carousel.go_to(3);
        let active: Vec<usize> = carousel
            .indicators()
            .iter()
            .filter(|i| i.active)
            .map(|i| i.index)
            .collect();
        assert_eq!(active, vec![3]);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut carousel = banners(0);
        carousel.next();
        carousel.prev();
        assert!(!carousel.go_to(0));
        assert_eq!(carousel.current_image(), None);
        assert!(carousel.indicators().is_empty());
        assert!(!carousel.can_scroll_next());
    }

    proptest! {
        /// Property: k calls to next() from i land on (i + k) mod L.
        #[test]
        fn next_is_modular(len in 1usize..20, start in 0usize..20, k in 0usize..100) {
            let start = start % len;
            let mut carousel = banners(len);
            carousel.go_to(start);
            for _ in 0..k {
                carousel.next();
            }
            prop_assert_eq!(carousel.current_index(), (start + k) % len);
        }

        /// Property: prev() undoes next().
        #[test]
        fn prev_inverts_next(len in 1usize..20, k in 0usize..50) {
            let mut carousel = banners(len);
            for _ in 0..k {
                carousel.next();
            }
            for _ in 0..k {
                carousel.prev();
            }
            prop_assert_eq!(carousel.current_index(), 0);
        }
    }
}
