use std::fmt::Display;

use tracing::{debug, info, warn};

use crate::capabilities::{Capabilities, TimerCommand, TimerOutput};
use crate::event::Event;
use crate::get_current_time_ms;
use crate::model::Model;
use crate::navigation::{NavigationSource, Screen};
use crate::screens::{ScreenState, TimerDelivery};
use crate::view::ViewModel;

#[derive(Default)]
pub struct App;

impl App {
    fn dispatch<I>(commands: I, caps: &Capabilities)
    where
        I: IntoIterator<Item = TimerCommand>,
    {
        for command in commands {
            match command {
                TimerCommand::Start { id, millis } => {
                    debug!(%id, millis, "timer start");
                    caps.timer.start(id, millis, Event::TimerFired);
                }
                TimerCommand::Cancel { id } => {
                    debug!(%id, "timer cancel");
                    caps.timer.cancel(id);
                }
            }
        }
    }

    fn navigate(model: &mut Model, target: Screen, source: NavigationSource, caps: &Capabilities) {
        let commands = model.navigate(target, source);
        Self::dispatch(commands, caps);
    }

    fn reject<E: Display>(model: &mut Model, event: &'static str, error: &E) {
        warn!(event, %error, "action rejected");
        model.notice = Some(error.to_string());
    }

    fn off_screen(model: &Model, event: &'static str) {
        debug!(event, screen = %model.current_screen(), "ignored, target screen not mounted");
    }
}

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        let event_name = event.name();
        if event.is_user_initiated() {
            info!(event = event_name, screen = %model.current_screen(), "user action");
            model.notice = None;
        }

        match event {
            Event::Noop => return,

            Event::Navigate { target, source } => Self::navigate(model, target, source, caps),

            Event::NavigateBack => {
                let Some(target) = model.current_screen().back_target() else {
                    debug!(screen = %model.current_screen(), "no back target");
                    return;
                };
                Self::navigate(model, target, NavigationSource::Control, caps);
            }

            Event::ToggleMobileMenu => model.router.toggle_mobile_menu(),

            Event::PanicActivated => {
                let ScreenState::TouristPanic(sequencer) = &mut model.screen else {
                    return Self::off_screen(model, event_name);
                };
                match sequencer.activate(&mut model.timer_ids) {
                    Ok(command) => {
                        info!("panic countdown started");
                        Self::dispatch([command], caps);
                    }
                    Err(error) => Self::reject(model, event_name, &error),
                }
            }

            Event::PanicCancelled => {
                let ScreenState::TouristPanic(sequencer) = &mut model.screen else {
                    return Self::off_screen(model, event_name);
                };
                let command = sequencer.cancel();
                Self::dispatch(command, caps);
            }

            Event::OnboardingDocumentSelected(document_type) => {
                let ScreenState::TouristOnboarding(onboarding) = &mut model.screen else {
                    return Self::off_screen(model, event_name);
                };
                onboarding.select_document(document_type);
            }

            Event::OnboardingNationalitySelected(nationality) => {
                let ScreenState::TouristOnboarding(onboarding) = &mut model.screen else {
                    return Self::off_screen(model, event_name);
                };
                onboarding.select_nationality(nationality);
            }

            Event::OnboardingLanguageSelected(language) => {
                let ScreenState::TouristOnboarding(onboarding) = &mut model.screen else {
                    return Self::off_screen(model, event_name);
                };
                onboarding.select_language(language);
            }

            Event::OnboardingFieldEdited { field, value } => {
                let ScreenState::TouristOnboarding(onboarding) = &mut model.screen else {
                    return Self::off_screen(model, event_name);
                };
                onboarding.edit(field, value);
            }

            Event::OnboardingNext => {
                let ScreenState::TouristOnboarding(onboarding) = &mut model.screen else {
                    return Self::off_screen(model, event_name);
                };
                match onboarding.advance(get_current_time_ms()) {
                    Ok(step) => debug!(?step, "onboarding advanced"),
                    Err(error) => Self::reject(model, event_name, &error),
                }
            }

            Event::OnboardingPrevious => {
                let ScreenState::TouristOnboarding(onboarding) = &mut model.screen else {
                    return Self::off_screen(model, event_name);
                };
                if let Err(error) = onboarding.go_back() {
                    Self::reject(model, event_name, &error);
                }
            }

            Event::OnboardingCompleted => {
                let ScreenState::TouristOnboarding(onboarding) = &model.screen else {
                    return Self::off_screen(model, event_name);
                };
                match onboarding.finish() {
                    Ok(()) => Self::navigate(
                        model,
                        Screen::TouristDashboard,
                        NavigationSource::Control,
                        caps,
                    ),
                    Err(error) => Self::reject(model, event_name, &error),
                }
            }

            Event::SettingToggled(toggle) => {
                let ScreenState::TouristSettings(settings) = &mut model.screen else {
                    return Self::off_screen(model, event_name);
                };
                match settings.toggle(toggle) {
                    Ok(enabled) => debug!(?toggle, enabled, "setting toggled"),
                    Err(error) => Self::reject(model, event_name, &error),
                }
            }

            Event::SettingsLanguageSelected(language) => {
                let ScreenState::TouristSettings(settings) = &mut model.screen else {
                    return Self::off_screen(model, event_name);
                };
                settings.language = language;
            }

            Event::SettingsEmergencyContactEdited(contact) => {
                let ScreenState::TouristSettings(settings) = &mut model.screen else {
                    return Self::off_screen(model, event_name);
                };
                settings.emergency_contact = contact;
            }

            Event::IncidentSearchChanged(term) => {
                let ScreenState::AuthorityIncidents(board) = &mut model.screen else {
                    return Self::off_screen(model, event_name);
                };
                board.set_search(term);
            }

            Event::IncidentKindFilterChanged(kind) => {
                let ScreenState::AuthorityIncidents(board) = &mut model.screen else {
                    return Self::off_screen(model, event_name);
                };
                board.set_kind(kind);
            }

            Event::IncidentSeverityFilterChanged(severity) => {
                let ScreenState::AuthorityIncidents(board) = &mut model.screen else {
                    return Self::off_screen(model, event_name);
                };
                board.set_severity(severity);
            }

            Event::IncidentSelected { id } => {
                let ScreenState::AuthorityIncidents(board) = &model.screen else {
                    return Self::off_screen(model, event_name);
                };
                match board.find(&id).map(|_| ()) {
                    Ok(()) => {
                        info!(incident = %id, "incident opened");
                        Self::navigate(
                            model,
                            Screen::AuthorityIncidentDetail,
                            NavigationSource::Control,
                            caps,
                        );
                    }
                    Err(error) => Self::reject(model, event_name, &error),
                }
            }

            Event::EfirRequested => {
                let ScreenState::AuthorityIncidentDetail(case) = &mut model.screen else {
                    return Self::off_screen(model, event_name);
                };
                match case.generate_efir(&mut model.timer_ids) {
                    Ok(command) => Self::dispatch([command], caps),
                    Err(error) => Self::reject(model, event_name, &error),
                }
            }

            Event::ResponseDraftEdited(text) => {
                let ScreenState::AuthorityIncidentDetail(case) = &mut model.screen else {
                    return Self::off_screen(model, event_name);
                };
                case.edit_draft(text);
            }

            Event::ResponseSent => {
                let ScreenState::AuthorityIncidentDetail(case) = &mut model.screen else {
                    return Self::off_screen(model, event_name);
                };
                match case.send_response().map(str::len) {
                    Ok(chars) => info!(chars, "response sent"),
                    Err(error) => Self::reject(model, event_name, &error),
                }
            }

            Event::DeviceScanRequested => {
                let ScreenState::Wearable(pairing) = &mut model.screen else {
                    return Self::off_screen(model, event_name);
                };
                match pairing.scan(&mut model.timer_ids) {
                    Ok(command) => Self::dispatch([command], caps),
                    Err(error) => Self::reject(model, event_name, &error),
                }
            }

            Event::DeviceConnectRequested { device_id } => {
                let ScreenState::Wearable(pairing) = &mut model.screen else {
                    return Self::off_screen(model, event_name);
                };
                match pairing.connect(&device_id, &mut model.timer_ids) {
                    Ok(command) => Self::dispatch([command], caps),
                    Err(error) => Self::reject(model, event_name, &error),
                }
            }

            Event::TimerFired(TimerOutput::Cancelled { id }) => {
                debug!(%id, "timer cancelled by shell");
                return;
            }

            Event::TimerFired(TimerOutput::Elapsed { id }) => {
                match model.screen.deliver(id, rand::random::<f64>) {
                    TimerDelivery::Stale => {
                        debug!(%id, screen = %model.current_screen(), "stale timer ignored");
                        return;
                    }
                    TimerDelivery::Applied { rearm } => Self::dispatch(rearm, caps),
                }
            }
        }

        caps.render.render();
    }

    fn view(&self, model: &Model) -> ViewModel {
        ViewModel::build(model)
    }
}
