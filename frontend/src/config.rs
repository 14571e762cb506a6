use log::Level;

/// Id of the element in `index.html` the app mounts into. Its `data-*`
/// attributes carry the slider options.
pub const APP_ROOT_ID: &str = "app";

/// How long the simulated contact form submission takes.
pub const FORM_SUBMIT_DELAY_MS: u32 = 2_000;

pub const NOTIFICATION_TIMEOUT_MS: u32 = 5_000;
pub const NOTIFICATION_EXIT_MS: u32 = 300;

pub const LOADING_SCREEN_MS: u32 = 1_500;
pub const LOADING_FADE_MS: u32 = 500;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
