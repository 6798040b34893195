use tracing::debug;

use crate::capabilities::{TimerCommand, TimerIds};
use crate::navigation::{NavigationSource, Screen, ViewRouter};
use crate::screens::ScreenState;

/// Core state. The mounted [`ScreenState`] always belongs to
/// `router.current()`.
#[derive(Debug, Default)]
pub struct Model {
    pub router: ViewRouter,
    pub screen: ScreenState,
    pub timer_ids: TimerIds,
    /// Why the last user action was rejected, if it was.
    pub notice: Option<String>,
}

impl Model {
    #[must_use]
    pub fn new() -> Self {
        Self {
            router: ViewRouter::new(),
            screen: ScreenState::Home,
            timer_ids: TimerIds::new(),
            notice: None,
        }
    }

    #[must_use]
    pub const fn current_screen(&self) -> Screen {
        self.router.current()
    }

    /// Route to `target`. When the screen changes, the old screen is torn
    /// down and a fresh one mounted; the returned commands cancel the old
    /// screen's timer and start the new one's, in that order.
    pub fn navigate(&mut self, target: Screen, source: NavigationSource) -> Vec<TimerCommand> {
        if !self.router.navigate(target, source) {
            debug!(screen = %target, "already on screen, state kept");
            return Vec::new();
        }

        let mut commands = Vec::with_capacity(2);
        commands.extend(self.screen.unmount());

        let (fresh, started) = ScreenState::mount(target, &mut self.timer_ids);
        self.screen = fresh;
        commands.extend(started);

        debug!(screen = %target, "mounted");
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::TimerId;

    #[test]
    fn test_starts_home() {
        let model = Model::new();
        assert_eq!(model.current_screen(), Screen::Home);
        assert_eq!(model.screen.screen(), Screen::Home);
    }

    #[test]
    fn test_navigate_swaps_timers() {
        let mut model = Model::new();
        let started = model.navigate(Screen::TouristDashboard, NavigationSource::Control);
        assert_eq!(
            started,
            [TimerCommand::Start {
                id: TimerId(1),
                millis: 10_000
            }]
        );

        let swapped = model.navigate(Screen::TouristPanic, NavigationSource::Control);
        assert_eq!(swapped, [TimerCommand::Cancel { id: TimerId(1) }]);
        assert_eq!(model.screen.screen(), Screen::TouristPanic);
    }

    #[test]
    fn test_same_screen_keeps_state() {
        let mut model = Model::new();
        model.navigate(Screen::TouristDashboard, NavigationSource::Control);
        assert!(model
            .navigate(Screen::TouristDashboard, NavigationSource::Control)
            .is_empty());
        assert_eq!(model.screen.screen(), Screen::TouristDashboard);
    }
}
