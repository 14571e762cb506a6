pub const COUNTER_FRAME_MS: u32 = 20;
pub const COUNTER_STEPS: f64 = 100.0;

/// Count-up animation for a hero stat such as `500+` or `98%`.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    suffix: String,
    current: f64,
    increment: f64,
}

impl CounterAnimation {
    /// Splits the text into its digits (the target) and everything else (the
    /// suffix). Text without digits cannot be animated.
    pub fn parse(text: &str) -> Option<Self> {
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        let target = digits.parse::<u64>().ok()?;
        let suffix = text.chars().filter(|c| !c.is_ascii_digit()).collect();
        Some(Self {
            target,
            suffix,
            current: 0.0,
            increment: target as f64 / COUNTER_STEPS,
        })
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.target as f64
    }

    /// Advances one frame and returns the text to display.
    pub fn tick(&mut self) -> String {
        self.current += self.increment;
        if self.increment <= 0.0 || self.current >= self.target as f64 {
            self.current = self.target as f64;
        }
        format!("{}{}", self.current.floor() as u64, self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_target_and_suffix() {
        let counter = CounterAnimation::parse("500+").unwrap();
        assert_eq!(counter.target, 500);
        assert_eq!(counter.suffix, "+");
        assert!(CounterAnimation::parse("∞").is_none());
    }

    #[test]
    fn reaches_target_in_one_hundred_frames() {
        let mut counter = CounterAnimation::parse("500+").unwrap();
        assert_eq!(counter.tick(), "5+");
        let mut frames = 1;
        let mut last = String::new();
        while !counter.is_finished() {
            last = counter.tick();
            frames += 1;
        }
        assert_eq!(last, "500+");
        assert!((99..=101).contains(&frames));
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut counter = CounterAnimation::parse("0%").unwrap();
        assert_eq!(counter.tick(), "0%");
        assert!(counter.is_finished());
    }
}
