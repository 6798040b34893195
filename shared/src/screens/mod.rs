//! Per-screen local state.
//!
//! Exactly one [`ScreenState`] is mounted at a time, matching the router's
//! current [`Screen`]. Mounting creates fresh state; unmounting hands back
//! the screen's timer (each screen owns at most one) so the shell timer can
//! be cancelled.

pub mod authority;
pub mod dashboard;
pub mod incident_detail;
pub mod incidents;
pub mod onboarding;
pub mod settings;
pub mod wearable;

use crate::capabilities::{TimerCommand, TimerId, TimerIds};
use crate::emergency::{PanicSequencer, TickOutcome};
use crate::navigation::Screen;

use self::authority::AuthorityOverview;
use self::dashboard::SafetyDashboard;
use self::incident_detail::IncidentCase;
use self::incidents::IncidentBoard;
use self::onboarding::Onboarding;
use self::settings::TouristSettings;
use self::wearable::WearablePairing;

#[derive(Debug, Default)]
pub enum ScreenState {
    #[default]
    Home,
    TouristOnboarding(Onboarding),
    TouristDashboard(SafetyDashboard),
    TouristPanic(PanicSequencer),
    TouristSettings(TouristSettings),
    AuthorityDashboard(AuthorityOverview),
    AuthorityIncidents(IncidentBoard),
    AuthorityIncidentDetail(IncidentCase),
    Wearable(WearablePairing),
}

/// Result of routing a timer response to the mounted screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerDelivery {
    /// No live lease on the mounted screen matches the id.
    Stale,
    Applied { rearm: Option<TimerCommand> },
}

impl ScreenState {
    /// Fresh state for `screen`, plus the timer it starts on mount, if any.
    pub fn mount(screen: Screen, ids: &mut TimerIds) -> (Self, Option<TimerCommand>) {
        match screen {
            Screen::Home => (Self::Home, None),
            Screen::TouristOnboarding => (Self::TouristOnboarding(Onboarding::new()), None),
            Screen::TouristDashboard => {
                let (dashboard, command) = SafetyDashboard::mount(ids);
                (Self::TouristDashboard(dashboard), Some(command))
            }
            Screen::TouristPanic => (Self::TouristPanic(PanicSequencer::new()), None),
            Screen::TouristSettings => (Self::TouristSettings(TouristSettings::default()), None),
            Screen::AuthorityDashboard => {
                (Self::AuthorityDashboard(AuthorityOverview::default()), None)
            }
            Screen::AuthorityIncidents => (Self::AuthorityIncidents(IncidentBoard::new()), None),
            Screen::AuthorityIncidentDetail => {
                (Self::AuthorityIncidentDetail(IncidentCase::new()), None)
            }
            Screen::Wearable => (Self::Wearable(WearablePairing::new()), None),
        }
    }

    #[must_use]
    pub const fn screen(&self) -> Screen {
        match self {
            Self::Home => Screen::Home,
            Self::TouristOnboarding(_) => Screen::TouristOnboarding,
            Self::TouristDashboard(_) => Screen::TouristDashboard,
            Self::TouristPanic(_) => Screen::TouristPanic,
            Self::TouristSettings(_) => Screen::TouristSettings,
            Self::AuthorityDashboard(_) => Screen::AuthorityDashboard,
            Self::AuthorityIncidents(_) => Screen::AuthorityIncidents,
            Self::AuthorityIncidentDetail(_) => Screen::AuthorityIncidentDetail,
            Self::Wearable(_) => Screen::Wearable,
        }
    }

    /// Release the mounted screen's timer. Called on every teardown path.
    pub fn unmount(&mut self) -> Option<TimerCommand> {
        match self {
            Self::TouristDashboard(dashboard) => dashboard.release(),
            Self::TouristPanic(sequencer) => sequencer.release(),
            Self::AuthorityIncidentDetail(case) => case.release(),
            Self::Wearable(pairing) => pairing.release(),
            Self::Home
            | Self::TouristOnboarding(_)
            | Self::TouristSettings(_)
            | Self::AuthorityDashboard(_)
            | Self::AuthorityIncidents(_) => None,
        }
    }

    /// Route an elapsed timer. `sample` is only drawn when the dashboard
    /// actually applies a refresh.
    pub fn deliver<S>(&mut self, id: TimerId, sample: S) -> TimerDelivery
    where
        S: FnOnce() -> f64,
    {
        match self {
            Self::TouristPanic(sequencer) => match sequencer.tick(id) {
                TickOutcome::Stale => TimerDelivery::Stale,
                TickOutcome::Continue(command) => TimerDelivery::Applied {
                    rearm: Some(command),
                },
                TickOutcome::Committed => TimerDelivery::Applied { rearm: None },
            },
            Self::TouristDashboard(dashboard) => {
                if dashboard.live_timer() != Some(id) {
                    return TimerDelivery::Stale;
                }
                match dashboard.refresh(id, sample()) {
                    Some(command) => TimerDelivery::Applied {
                        rearm: Some(command),
                    },
                    None => TimerDelivery::Stale,
                }
            }
            Self::AuthorityIncidentDetail(case) => {
                if case.timer_elapsed(id) {
                    TimerDelivery::Applied { rearm: None }
                } else {
                    TimerDelivery::Stale
                }
            }
            Self::Wearable(pairing) => match pairing.timer_elapsed(id) {
                Some(_) => TimerDelivery::Applied { rearm: None },
                None => TimerDelivery::Stale,
            },
            Self::Home
            | Self::TouristOnboarding(_)
            | Self::TouristSettings(_)
            | Self::AuthorityDashboard(_)
            | Self::AuthorityIncidents(_) => TimerDelivery::Stale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_matches_screen() {
        let mut ids = TimerIds::new();
        for screen in Screen::ALL {
            let (state, _) = ScreenState::mount(screen, &mut ids);
            assert_eq!(state.screen(), screen);
        }
    }

    #[test]
    fn test_only_dashboard_starts_a_timer_on_mount() {
        let mut ids = TimerIds::new();
        for screen in Screen::ALL {
            let (_, command) = ScreenState::mount(screen, &mut ids);
            assert_eq!(command.is_some(), screen == Screen::TouristDashboard, "{screen}");
        }
    }

    #[test]
    fn test_unmount_releases_dashboard_timer() {
        let mut ids = TimerIds::new();
        let (mut state, command) = ScreenState::mount(Screen::TouristDashboard, &mut ids);
        let Some(TimerCommand::Start { id, .. }) = command else {
            panic!("expected start");
        };
        assert_eq!(state.unmount(), Some(TimerCommand::Cancel { id }));
        assert_eq!(state.deliver(id, || 1.0), TimerDelivery::Stale);
    }

    #[test]
    fn test_stale_dashboard_tick_does_not_draw_sample() {
        let mut ids = TimerIds::new();
        let (mut state, _) = ScreenState::mount(Screen::TouristDashboard, &mut ids);
        let delivery = state.deliver(TimerId(999), || panic!("sample drawn for stale tick"));
        assert_eq!(delivery, TimerDelivery::Stale);
    }

    #[test]
    fn test_screens_without_timers_treat_ticks_as_stale() {
        let mut ids = TimerIds::new();
        let (mut state, _) = ScreenState::mount(Screen::TouristSettings, &mut ids);
        assert_eq!(state.deliver(TimerId(1), || 0.5), TimerDelivery::Stale);
        assert_eq!(state.unmount(), None);
    }
}
