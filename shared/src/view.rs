//! Serializable projection of the model handed to the shell on every render.

use serde::{Deserialize, Serialize};

use crate::emergency::{PanicPhase, PanicSequencer, PanicState};
use crate::locale::{language_options, LanguageOption};
use crate::model::Model;
use crate::navigation::{NavigationState, Screen, ViewRouter};
use crate::screens::authority::AuthorityOverview;
use crate::screens::dashboard::{NearbyAlert, SafetyBand, SafetyDashboard};
use crate::screens::incident_detail::{CaseFile, EfirStatus, IncidentCase};
use crate::screens::incidents::{Incident, IncidentBoard, IncidentQuery};
use crate::screens::onboarding::{
    DigitalId, DocumentType, Nationality, Onboarding, OnboardingForm, OnboardingStep,
};
use crate::screens::settings::{SettingToggle, TouristSettings};
use crate::screens::wearable::{
    BatteryBand, HealthSnapshot, PairingActivity, WearableDevice, WearablePairing,
};
use crate::screens::ScreenState;

const PANIC_RESPONSE_TIME: &str = "8-12 minutes";
const PANIC_LOCATION: &str = "Connaught Place, New Delhi";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavEntry {
    pub screen: Screen,
    pub label: String,
    pub active: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HomeLink {
    pub screen: Screen,
    pub label: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HomeSection {
    pub title: String,
    pub links: Vec<HomeLink>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Helpline {
    pub name: String,
    pub number: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceView {
    pub device: WearableDevice,
    pub battery_band: BatteryBand,
    pub selected: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScreenView {
    Home {
        sections: Vec<HomeSection>,
    },
    TouristOnboarding {
        step: OnboardingStep,
        step_title: String,
        step_number: usize,
        total_steps: usize,
        progress_percent: u8,
        can_proceed: bool,
        can_go_back: bool,
        is_last_step: bool,
        form: OnboardingForm,
        document_types: Vec<DocumentType>,
        nationalities: Vec<Nationality>,
        languages: Vec<LanguageOption>,
        digital_id: Option<DigitalId>,
    },
    TouristDashboard {
        safety_score: f64,
        safety_band: SafetyBand,
        safety_label: String,
        location: String,
        alerts: Vec<NearbyAlert>,
    },
    TouristPanic {
        phase: PanicPhase,
        state: PanicState,
        can_activate: bool,
        can_cancel: bool,
        location: String,
        response_time: String,
        helplines: Vec<Helpline>,
    },
    TouristSettings {
        settings: TouristSettings,
        family_sharing_locked: bool,
        languages: Vec<LanguageOption>,
    },
    AuthorityDashboard {
        overview: AuthorityOverview,
        high_severity_alerts: usize,
    },
    AuthorityIncidents {
        query: IncidentQuery,
        incidents: Vec<Incident>,
        active_incidents: usize,
    },
    AuthorityIncidentDetail {
        file: CaseFile,
        efir_status: EfirStatus,
        draft: String,
        can_send: bool,
        sent_responses: Vec<String>,
    },
    Wearable {
        devices: Vec<DeviceView>,
        connected_count: usize,
        activity: Option<PairingActivity>,
        is_scanning: bool,
        is_connected: bool,
        health: Option<HealthSnapshot>,
    },
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ViewModel {
    pub screen: Screen,
    pub mobile_menu_open: bool,
    pub show_nav_bar: bool,
    pub nav: Vec<NavEntry>,
    pub back_target: Option<Screen>,
    pub notice: Option<String>,
    pub content: ScreenView,
}

impl ViewModel {
    #[must_use]
    pub fn build(model: &Model) -> Self {
        let NavigationState {
            current_screen: current,
            mobile_menu_open,
        } = model.router.state();
        let show_nav_bar = current.shows_nav_bar();
        let nav = if show_nav_bar {
            ViewRouter::menu_entries()
                .map(|screen| NavEntry {
                    screen,
                    label: screen.label().to_owned(),
                    active: screen == current,
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            screen: current,
            mobile_menu_open,
            show_nav_bar,
            nav,
            back_target: current.back_target(),
            notice: model.notice.clone(),
            content: screen_view(&model.screen),
        }
    }
}

fn screen_view(state: &ScreenState) -> ScreenView {
    match state {
        ScreenState::Home => ScreenView::Home {
            sections: home_sections(),
        },
        ScreenState::TouristOnboarding(onboarding) => onboarding_view(onboarding),
        ScreenState::TouristDashboard(dashboard) => dashboard_view(dashboard),
        ScreenState::TouristPanic(sequencer) => panic_view(sequencer),
        ScreenState::TouristSettings(settings) => ScreenView::TouristSettings {
            settings: settings.clone(),
            family_sharing_locked: settings.is_locked(SettingToggle::ShareLocationWithFamily),
            languages: language_options(),
        },
        ScreenState::AuthorityDashboard(overview) => ScreenView::AuthorityDashboard {
            overview: overview.clone(),
            high_severity_alerts: overview.high_severity_alerts(),
        },
        ScreenState::AuthorityIncidents(board) => incidents_view(board),
        ScreenState::AuthorityIncidentDetail(case) => incident_detail_view(case),
        ScreenState::Wearable(pairing) => wearable_view(pairing),
    }
}

fn home_sections() -> Vec<HomeSection> {
    let section = |title: &str, links: &[(Screen, &str)]| HomeSection {
        title: title.to_owned(),
        links: links
            .iter()
            .map(|&(screen, label)| HomeLink {
                screen,
                label: label.to_owned(),
            })
            .collect(),
    };
    vec![
        section(
            "Tourist Mobile App",
            &[
                (Screen::TouristOnboarding, "Digital ID Onboarding"),
                (Screen::TouristDashboard, "Safety Dashboard"),
                (Screen::TouristPanic, "Panic Button"),
            ],
        ),
        section(
            "Authority Dashboard",
            &[
                (Screen::AuthorityDashboard, "Live Monitoring"),
                (Screen::AuthorityIncidents, "Incident Management"),
                (Screen::AuthorityIncidentDetail, "Incident Details"),
            ],
        ),
        section("IoT Integration", &[(Screen::Wearable, "Wearable Devices")]),
    ]
}

fn onboarding_view(onboarding: &Onboarding) -> ScreenView {
    let step = onboarding.step();
    ScreenView::TouristOnboarding {
        step,
        step_title: step.title().to_owned(),
        step_number: onboarding.step_number(),
        total_steps: OnboardingStep::ALL.len(),
        progress_percent: onboarding.progress_percent(),
        can_proceed: onboarding.can_proceed(),
        can_go_back: step.previous().is_some(),
        is_last_step: step.is_last(),
        form: onboarding.form().clone(),
        document_types: DocumentType::ALL.to_vec(),
        nationalities: Nationality::ALL.to_vec(),
        languages: language_options(),
        digital_id: onboarding.digital_id().cloned(),
    }
}

fn dashboard_view(dashboard: &SafetyDashboard) -> ScreenView {
    let band = dashboard.band();
    ScreenView::TouristDashboard {
        safety_score: dashboard.score(),
        safety_band: band,
        safety_label: band.label().to_owned(),
        location: dashboard.location().to_owned(),
        alerts: dashboard.alerts().to_vec(),
    }
}

fn panic_view(sequencer: &PanicSequencer) -> ScreenView {
    let phase = sequencer.phase();
    ScreenView::TouristPanic {
        phase,
        state: sequencer.state(),
        can_activate: phase == PanicPhase::Idle,
        can_cancel: phase != PanicPhase::Idle,
        location: PANIC_LOCATION.to_owned(),
        response_time: PANIC_RESPONSE_TIME.to_owned(),
        helplines: vec![
            Helpline {
                name: "Police".into(),
                number: "100".into(),
            },
            Helpline {
                name: "Tourist Helpline".into(),
                number: "1363".into(),
            },
        ],
    }
}

fn incidents_view(board: &IncidentBoard) -> ScreenView {
    ScreenView::AuthorityIncidents {
        query: board.query().clone(),
        incidents: board.filtered().cloned().collect(),
        active_incidents: board.active_count(),
    }
}

fn incident_detail_view(case: &IncidentCase) -> ScreenView {
    ScreenView::AuthorityIncidentDetail {
        file: case.file().clone(),
        efir_status: case.efir_status(),
        draft: case.draft().to_owned(),
        can_send: case.can_send(),
        sent_responses: case.sent_responses().to_vec(),
    }
}

fn wearable_view(pairing: &WearablePairing) -> ScreenView {
    let selected = pairing.selected_device();
    ScreenView::Wearable {
        devices: pairing
            .devices()
            .iter()
            .map(|device| DeviceView {
                battery_band: device.battery_band(),
                selected: selected == Some(device.id.as_str()),
                device: device.clone(),
            })
            .collect(),
        connected_count: pairing.connected_count(),
        activity: pairing.activity(),
        is_scanning: pairing.is_scanning(),
        is_connected: pairing.is_connected(),
        health: pairing.health().cloned(),
    }
}
