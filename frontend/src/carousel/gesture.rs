use super::intent::Point;

/// Minimum horizontal travel, in CSS pixels, for a drag to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left, reveal the next slide.
    Next,
    /// Finger moved right, reveal the previous slide.
    Prev,
}

/// Resolves a finished drag into a swipe, if it was one.
///
/// Horizontal travel must exceed the threshold and dominate vertical travel,
/// otherwise the user was scrolling the page.
pub fn classify(start: Point, end: Point) -> Option<SwipeDirection> {
    let dx = start.x - end.x;
    let dy = start.y - end.y;

    if dx.abs() <= SWIPE_THRESHOLD_PX || dx.abs() <= dy.abs() {
        return None;
    }

    if dx > 0.0 {
        Some(SwipeDirection::Next)
    } else {
        Some(SwipeDirection::Prev)
    }
}
