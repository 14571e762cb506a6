//! Page chrome around the slider: navigation, contact form rules, scroll
//! effects and counters. DOM-free so it can be unit tested natively.

pub mod counter;
pub mod form;
pub mod hero;
pub mod phone;
pub mod scroll;
