//! Render projections of a [`Carousel`]: classes, accessibility attributes,
//! labels and transition styles. Nothing here mutates the slider.

use super::config::TransitionStyle;
use super::scheduler::Scheduler;
use super::state::Carousel;

const SLIDE_EASING: &str = "cubic-bezier(0.25, 0.46, 0.45, 0.94)";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideView {
    pub index: usize,
    pub is_current: bool,
    pub class: String,
    /// `aria-hidden` value.
    pub aria_hidden: bool,
    pub tab_index: i32,
    pub label: String,
    /// Inline style for fade transitions, empty for slide transitions.
    pub style: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndicatorView {
    pub index: usize,
    pub is_active: bool,
    pub label: String,
}

impl<S: Scheduler> Carousel<S> {
    pub fn slide_views(&self) -> Vec<SlideView> {
        let count = self.slide_count();
        let current = self.current_index();
        let upcoming = (count > 1).then(|| (current + 1) % count);
        let fade = self.config().transition_style == TransitionStyle::Fade;
        let duration = self.config().transition_duration;

        (0..count)
            .map(|index| {
                let is_current = index == current;
                let mut class = String::from("slider-slide");
                if is_current {
                    class.push_str(" active");
                }
                if self.previous_index() == Some(index) && !is_current {
                    class.push_str(" prev");
                }
                if upcoming == Some(index) {
                    class.push_str(" next");
                }

                let style = if fade {
                    format!(
                        "opacity: {}; z-index: {}; transition: opacity {}ms ease;",
                        if is_current { 1 } else { 0 },
                        if is_current { 2 } else { 1 },
                        duration
                    )
                } else {
                    String::new()
                };

                SlideView {
                    index,
                    is_current,
                    class,
                    aria_hidden: !is_current,
                    tab_index: if is_current { 0 } else { -1 },
                    label: position_label(index, count),
                    style,
                }
            })
            .collect()
    }

    pub fn indicator_views(&self) -> Vec<IndicatorView> {
        let count = self.slide_count();
        (0..count)
            .map(|index| IndicatorView {
                index,
                is_active: index == self.current_index(),
                label: format!("Слайд {}", position_label(index, count)),
            })
            .collect()
    }

    /// Inline style of the sliding track.
    pub fn track_style(&self) -> String {
        match self.config().transition_style {
            TransitionStyle::Slide => format!(
                "transform: translateX(-{}%); transition: transform {}ms {};",
                self.current_index() * 100,
                self.config().transition_duration,
                SLIDE_EASING
            ),
            TransitionStyle::Fade => String::new(),
        }
    }

    pub fn prev_button_label(&self) -> String {
        format!(
            "Предыдущий слайд ({})",
            position_label(self.current_index(), self.slide_count())
        )
    }

    pub fn next_button_label(&self) -> String {
        format!(
            "Следующий слайд ({})",
            position_label(self.current_index(), self.slide_count())
        )
    }

    pub fn autoplay_button_label(&self) -> &'static str {
        if self.autoplay_enabled() {
            "Остановить автопрокрутку"
        } else {
            "Запустить автопрокрутку"
        }
    }
}

/// 1-based "N из M".
fn position_label(index: usize, count: usize) -> String {
    format!("{} из {}", index + 1, count)
}
