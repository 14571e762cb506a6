use std::str::FromStr;

use log::warn;
use thiserror::Error;

pub const DEFAULT_AUTOPLAY_DELAY_MS: u32 = 5000;
pub const DEFAULT_TRANSITION_DURATION_MS: u32 = 600;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown transition style `{0}`")]
    UnknownTransition(String),
    #[error("`{attribute}` must be a positive number of milliseconds, got `{value}`")]
    InvalidMillis { attribute: &'static str, value: String },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransitionStyle {
    /// Translate the whole track horizontally.
    #[default]
    Slide,
    /// Cross-fade the slides in place.
    Fade,
}

impl FromStr for TransitionStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slide" => Ok(Self::Slide),
            "fade" => Ok(Self::Fade),
            other => Err(ConfigError::UnknownTransition(other.to_string())),
        }
    }
}

/// Slider options. Every field has a documented default, see [`Default`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Start the autoplay timer on mount. Default `true`.
    pub autoplay: bool,
    /// Interval between automatic advances. Default 5000 ms.
    pub autoplay_delay: u32,
    /// Wrap past the last/first slide on relative navigation. Default `true`.
    pub loop_enabled: bool,
    /// Default [`TransitionStyle::Slide`].
    pub transition_style: TransitionStyle,
    /// Animation length and navigation guard window. Default 600 ms.
    pub transition_duration: u32,
    /// Suspend autoplay while the pointer is over the slider. Default `true`.
    pub pause_on_hover: bool,
    /// Wire touch swipe and mouse drag. Default `true`.
    pub swipe_enabled: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            autoplay_delay: DEFAULT_AUTOPLAY_DELAY_MS,
            loop_enabled: true,
            transition_style: TransitionStyle::Slide,
            transition_duration: DEFAULT_TRANSITION_DURATION_MS,
            pause_on_hover: true,
            swipe_enabled: true,
        }
    }
}

impl CarouselConfig {
    /// Builds a config from `data-*` attributes of a host element.
    ///
    /// `lookup` receives the full attribute name (`data-autoplay-delay`) and
    /// returns its value if present. Flags are on unless set to `false`;
    /// invalid numbers and unknown styles are logged and replaced by defaults.
    pub fn from_attributes<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let flag = |name: &str| lookup(name).map_or(true, |value| value.trim() != "false");

        let transition_style = match lookup("data-transition") {
            Some(value) => value.parse().unwrap_or_else(|e: ConfigError| {
                warn!("slider config: {}, using slide", e);
                TransitionStyle::Slide
            }),
            None => defaults.transition_style,
        };

        Self {
            autoplay: flag("data-autoplay"),
            autoplay_delay: millis(&lookup, "data-autoplay-delay", defaults.autoplay_delay),
            loop_enabled: flag("data-loop"),
            transition_style,
            transition_duration: millis(
                &lookup,
                "data-transition-duration",
                defaults.transition_duration,
            ),
            pause_on_hover: flag("data-pause-on-hover"),
            swipe_enabled: flag("data-swipe"),
        }
    }
}

fn parse_millis(attribute: &'static str, value: &str) -> Result<u32, ConfigError> {
    match value.trim().parse::<u32>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(ConfigError::InvalidMillis {
            attribute,
            value: value.to_string(),
        }),
    }
}

fn millis<F>(lookup: &F, attribute: &'static str, default: u32) -> u32
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(attribute) {
        Some(value) => parse_millis(attribute, &value).unwrap_or_else(|e| {
            warn!("slider config: {}, using {}", e, default);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn attrs(pairs: &[(&str, &str)]) -> CarouselConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CarouselConfig::from_attributes(|name| map.get(name).cloned())
    }

    #[test]
    fn missing_attributes_give_defaults() {
        assert_eq!(attrs(&[]), CarouselConfig::default());
    }

    #[test]
    fn flags_are_only_disabled_by_literal_false() {
        let config = attrs(&[
            ("data-autoplay", "false"),
            ("data-loop", "no"),
            ("data-swipe", "false"),
            ("data-pause-on-hover", ""),
        ]);
        assert!(!config.autoplay);
        assert!(config.loop_enabled);
        assert!(!config.swipe_enabled);
        assert!(config.pause_on_hover);
    }

    #[test]
    fn numeric_attributes_fall_back_when_invalid_or_zero() {
        let config = attrs(&[
            ("data-autoplay-delay", "abc"),
            ("data-transition-duration", "0"),
        ]);
        assert_eq!(config.autoplay_delay, DEFAULT_AUTOPLAY_DELAY_MS);
        assert_eq!(config.transition_duration, DEFAULT_TRANSITION_DURATION_MS);

        let config = attrs(&[("data-autoplay-delay", " 3000 ")]);
        assert_eq!(config.autoplay_delay, 3000);
    }

    #[test]
    fn transition_style_parsing() {
        assert_eq!(attrs(&[("data-transition", "Fade")]).transition_style, TransitionStyle::Fade);
        assert_eq!(attrs(&[("data-transition", "zoom")]).transition_style, TransitionStyle::Slide);
        assert_eq!(
            "zoom".parse::<TransitionStyle>(),
            Err(ConfigError::UnknownTransition("zoom".to_string()))
        );
    }
}
