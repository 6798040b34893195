// lib.rs - Tourist safety core shared with the mobile and web shells

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod capabilities;
pub mod emergency;
pub mod event;
pub mod locale;
pub mod model;
pub mod navigation;
pub mod screens;
pub mod view;

pub use app::App;
pub use capabilities::{Capabilities, Effect};
pub use crux_core::{render::Render, App as CruxApp};
pub use emergency::{PanicError, PanicPhase, PanicSequencer, PanicState};
pub use event::Event;
pub use model::Model;
pub use navigation::{NavigationSource, NavigationState, Screen, ViewRouter};
pub use view::{ScreenView, ViewModel};

/// Seconds between activation and emergency notification.
pub const COUNTDOWN_SECONDS: u32 = 5;
pub const TICK_INTERVAL_MS: u64 = 1000;

pub const SAFETY_SCORE_REFRESH_MS: u64 = 10_000;
pub const INITIAL_SAFETY_SCORE: f64 = 85.0;
pub const MIN_SAFETY_SCORE: f64 = 70.0;
pub const MAX_SAFETY_SCORE: f64 = 95.0;
/// Full width of one refresh step; the score moves by at most half of it.
pub const SAFETY_JITTER_SPAN: f64 = 5.0;
pub const SAFE_SCORE_FROM: f64 = 80.0;
pub const MODERATE_SCORE_FROM: f64 = 60.0;

pub const EFIR_GENERATION_MS: u64 = 3000;

pub const DEVICE_SCAN_MS: u64 = 2000;
pub const DEVICE_CONNECT_MS: u64 = 3000;
pub const BATTERY_GOOD_ABOVE: u8 = 50;
pub const BATTERY_LOW_ABOVE: u8 = 20;

#[must_use]
pub fn get_current_time_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_is_past_2024() {
        assert!(get_current_time_ms() > 1_704_067_200_000);
    }
}
