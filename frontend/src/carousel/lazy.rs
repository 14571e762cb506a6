/// Tracks which deferred slide images have been requested.
///
/// Nothing loads before the slider has been on screen once. After that the
/// current slide and its neighbours are loaded as the slider moves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LazyImages {
    loaded: Vec<bool>,
    seen: bool,
}

impl LazyImages {
    pub fn new(slide_count: usize) -> Self {
        Self {
            loaded: vec![false; slide_count],
            seen: false,
        }
    }

    pub fn is_loaded(&self, index: usize) -> bool {
        self.loaded.get(index).copied().unwrap_or(false)
    }

    /// Records that the slider entered the viewport. Returns whether any new
    /// image should now load.
    pub fn mark_visible(&mut self, current: usize) -> bool {
        self.seen = true;
        self.reveal_around(current)
    }

    /// Loads `current` and its neighbours once the slider has been seen.
    pub fn reveal_around(&mut self, current: usize) -> bool {
        let count = self.loaded.len();
        if !self.seen || count == 0 {
            return false;
        }

        let mut changed = false;
        for index in [current + count - 1, current, current + 1] {
            let slot = &mut self.loaded[index % count];
            if !*slot {
                *slot = true;
                changed = true;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_loads_before_first_visibility() {
        let mut lazy = LazyImages::new(4);
        assert!(!lazy.reveal_around(1));
        assert!((0..4).all(|i| !lazy.is_loaded(i)));
    }

    #[test]
    fn visibility_loads_current_and_neighbours() {
        let mut lazy = LazyImages::new(5);
        assert!(lazy.mark_visible(0));
        let loaded: Vec<_> = (0..5).map(|i| lazy.is_loaded(i)).collect();
        assert_eq!(loaded, vec![true, true, false, false, true]);

        assert!(lazy.reveal_around(2));
        assert!(lazy.is_loaded(3));
        assert!(!lazy.reveal_around(1));
    }

    #[test]
    fn out_of_range_is_not_loaded() {
        let mut lazy = LazyImages::new(0);
        assert!(!lazy.mark_visible(0));
        assert!(!lazy.is_loaded(3));
    }
}
