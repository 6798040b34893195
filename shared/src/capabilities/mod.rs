//! Shell-facing capabilities: Crux's built-in `Render` plus our one-shot
//! `Timer`.

mod timer;

pub use self::timer::{
    Timer, TimerCommand, TimerId, TimerIds, TimerLease, TimerOperation, TimerOutput,
};
pub use crux_core::render::Render;

use crate::event::Event;
// The Effect derive names the app type as `App`.
use crate::App;

#[derive(crux_core::macros::Effect)]
pub struct Capabilities {
    pub render: Render<Event>,
    pub timer: Timer<Event>,
}
