/// Client coordinates of a pointer or touch, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A message posted to the slider by one of its input sources.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intent {
    Next,
    Prev,
    GoTo(usize),
    First,
    Last,
    ToggleAutoplay,
    /// Fired by the autoplay interval.
    AutoplayTick,
    /// Fired once the transition duration has elapsed.
    TransitionEnd,
    PointerEnter,
    PointerLeave,
    FocusIn,
    FocusOut,
    /// The container entered (`true`) or left the viewport.
    ViewportVisibility(bool),
    /// The page/tab was backgrounded (`true`) or brought back.
    PageHidden(bool),
    GestureStart(Point),
    GestureEnd(Point),
    GestureCancel,
}

impl Intent {
    /// Maps a `KeyboardEvent.key` value to the intent it triggers.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Prev),
            "ArrowRight" => Some(Self::Next),
            "Home" => Some(Self::First),
            "End" => Some(Self::Last),
            " " | "Spacebar" => Some(Self::ToggleAutoplay),
            _ => None,
        }
    }

    /// Maps a key press that bubbled up to the slider container. Space only
    /// toggles autoplay when the container itself is the target, so it still
    /// activates a focused button inside the slider.
    pub fn from_container_key(key: &str, on_container: bool) -> Option<Self> {
        match Self::from_key(key)? {
            Self::ToggleAutoplay if !on_container => None,
            intent => Some(intent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognised_keys() {
        assert_eq!(Intent::from_key("ArrowLeft"), Some(Intent::Prev));
        assert_eq!(Intent::from_key("ArrowRight"), Some(Intent::Next));
        assert_eq!(Intent::from_key("Home"), Some(Intent::First));
        assert_eq!(Intent::from_key("End"), Some(Intent::Last));
        assert_eq!(Intent::from_key(" "), Some(Intent::ToggleAutoplay));
        assert_eq!(Intent::from_key("ArrowUp"), None);
        assert_eq!(Intent::from_key("Enter"), None);
    }

    #[test]
    fn space_on_inner_button_is_left_to_the_button() {
        assert_eq!(Intent::from_container_key(" ", false), None);
        assert_eq!(Intent::from_container_key("Spacebar", false), None);
        assert_eq!(
            Intent::from_container_key(" ", true),
            Some(Intent::ToggleAutoplay)
        );
        assert_eq!(
            Intent::from_container_key("ArrowRight", false),
            Some(Intent::Next)
        );
        assert_eq!(Intent::from_container_key("Home", false), Some(Intent::First));
    }
}
