/// Scroll distance after which the header switches to its compact style.
pub const HEADER_SCROLLED_OFFSET: f64 = 100.0;
/// A section becomes active this many pixels before its top reaches the
/// top of the viewport.
pub const SECTION_ACTIVATION_OFFSET: f64 = 200.0;
pub const PARALLAX_RATE: f64 = -0.5;
pub const SCROLL_THROTTLE_MS: f64 = 100.0;

pub fn is_header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLLED_OFFSET
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
}

/// Id of the last section whose activation point has been scrolled past.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .filter(|section| scroll_y >= section.top - SECTION_ACTIVATION_OFFSET)
        .last()
        .map(|section| section.id.as_str())
}

pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_RATE
}

/// Scroll position that puts `section_top` just under a fixed header.
pub fn anchor_target(section_top: f64, header_height: f64) -> f64 {
    (section_top - header_height).max(0.0)
}

/// Lets a handler run at most once per `limit_ms`.
#[derive(Clone, Debug)]
pub struct Throttle {
    limit_ms: f64,
    last_run: Option<f64>,
}

impl Throttle {
    pub fn new(limit_ms: f64) -> Self {
        Self {
            limit_ms,
            last_run: None,
        }
    }

    /// Returns whether the handler may run at `now_ms`, recording the run.
    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last_run {
            Some(last) if now_ms - last < self.limit_ms => false,
            _ => {
                self.last_run = Some(now_ms);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        [("hero", 0.0), ("features", 800.0), ("gallery", 1600.0), ("contact", 2600.0)]
            .into_iter()
            .map(|(id, top)| SectionBounds {
                id: id.to_string(),
                top,
            })
            .collect()
    }

    #[test]
    fn header_compacts_past_threshold() {
        assert!(!is_header_scrolled(100.0));
        assert!(is_header_scrolled(101.0));
    }

    #[test]
    fn active_section_switches_early() {
        let sections = sections();
        assert_eq!(active_section(0.0, &sections), Some("hero"));
        assert_eq!(active_section(599.0, &sections), Some("hero"));
        assert_eq!(active_section(600.0, &sections), Some("features"));
        assert_eq!(active_section(5000.0, &sections), Some("contact"));
        assert_eq!(active_section(0.0, &[]), None);
    }

    #[test]
    fn parallax_moves_at_half_speed_upwards() {
        assert_eq!(parallax_offset(300.0), -150.0);
    }

    #[test]
    fn anchor_target_accounts_for_header() {
        assert_eq!(anchor_target(900.0, 80.0), 820.0);
        assert_eq!(anchor_target(20.0, 80.0), 0.0);
    }

    #[test]
    fn throttle_limits_rate() {
        let mut throttle = Throttle::new(SCROLL_THROTTLE_MS);
        assert!(throttle.ready(0.0));
        assert!(!throttle.ready(50.0));
        assert!(!throttle.ready(99.9));
        assert!(throttle.ready(100.0));
        assert!(!throttle.ready(150.0));
    }
}
