use serde::{Deserialize, Serialize};

use crate::capabilities::TimerOutput;
use crate::locale::Language;
use crate::navigation::{NavigationSource, Screen};
use crate::screens::incidents::{IncidentKind, Severity};
use crate::screens::onboarding::{DocumentType, Nationality, OnboardingField};
use crate::screens::settings::SettingToggle;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum Event {
    #[default]
    Noop,

    Navigate {
        target: Screen,
        #[serde(default)]
        source: NavigationSource,
    },
    NavigateBack,
    ToggleMobileMenu,

    PanicActivated,
    PanicCancelled,

    OnboardingDocumentSelected(DocumentType),
    OnboardingNationalitySelected(Nationality),
    OnboardingLanguageSelected(Language),
    OnboardingFieldEdited {
        field: OnboardingField,
        value: String,
    },
    OnboardingNext,
    OnboardingPrevious,
    OnboardingCompleted,

    SettingToggled(SettingToggle),
    SettingsLanguageSelected(Language),
    SettingsEmergencyContactEdited(String),

    IncidentSearchChanged(String),
    IncidentKindFilterChanged(Option<IncidentKind>),
    IncidentSeverityFilterChanged(Option<Severity>),
    IncidentSelected {
        id: String,
    },

    EfirRequested,
    ResponseDraftEdited(String),
    ResponseSent,

    DeviceScanRequested,
    DeviceConnectRequested {
        device_id: String,
    },

    // Capability responses
    #[serde(skip)]
    TimerFired(TimerOutput),
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Noop => "noop",
            Self::Navigate { .. } => "navigate",
            Self::NavigateBack => "navigate_back",
            Self::ToggleMobileMenu => "toggle_mobile_menu",
            Self::PanicActivated => "panic_activated",
            Self::PanicCancelled => "panic_cancelled",
            Self::OnboardingDocumentSelected(_) => "onboarding_document_selected",
            Self::OnboardingNationalitySelected(_) => "onboarding_nationality_selected",
            Self::OnboardingLanguageSelected(_) => "onboarding_language_selected",
            Self::OnboardingFieldEdited { .. } => "onboarding_field_edited",
            Self::OnboardingNext => "onboarding_next",
            Self::OnboardingPrevious => "onboarding_previous",
            Self::OnboardingCompleted => "onboarding_completed",
            Self::SettingToggled(_) => "setting_toggled",
            Self::SettingsLanguageSelected(_) => "settings_language_selected",
            Self::SettingsEmergencyContactEdited(_) => "settings_emergency_contact_edited",
            Self::IncidentSearchChanged(_) => "incident_search_changed",
            Self::IncidentKindFilterChanged(_) => "incident_kind_filter_changed",
            Self::IncidentSeverityFilterChanged(_) => "incident_severity_filter_changed",
            Self::IncidentSelected { .. } => "incident_selected",
            Self::EfirRequested => "efir_requested",
            Self::ResponseDraftEdited(_) => "response_draft_edited",
            Self::ResponseSent => "response_sent",
            Self::DeviceScanRequested => "device_scan_requested",
            Self::DeviceConnectRequested { .. } => "device_connect_requested",
            Self::TimerFired(_) => "timer_fired",
        }
    }

    /// Everything except capability responses and `Noop` comes from a user.
    #[must_use]
    pub const fn is_user_initiated(&self) -> bool {
        !matches!(self, Self::Noop | Self::TimerFired(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::TimerId;

    #[test]
    fn test_timer_responses_are_not_user_initiated() {
        let fired = Event::TimerFired(TimerOutput::Elapsed { id: TimerId(1) });
        assert!(!fired.is_user_initiated());
        assert!(!Event::Noop.is_user_initiated());
        assert!(Event::PanicActivated.is_user_initiated());
        assert_eq!(fired.name(), "timer_fired");
    }

    #[test]
    fn test_navigate_source_defaults_to_control() {
        let event: Event =
            serde_json::from_str(r#"{"Navigate":{"target":"tourist-panic"}}"#).unwrap();
        assert_eq!(
            event,
            Event::Navigate {
                target: Screen::TouristPanic,
                source: NavigationSource::Control,
            }
        );
    }

    #[test]
    fn test_filters_deserialize_null_as_all() {
        let event: Event = serde_json::from_str(r#"{"IncidentKindFilterChanged":null}"#).unwrap();
        assert_eq!(event, Event::IncidentKindFilterChanged(None));

        let event: Event =
            serde_json::from_str(r#"{"IncidentSeverityFilterChanged":"high"}"#).unwrap();
        assert_eq!(event, Event::IncidentSeverityFilterChanged(Some(Severity::High)));
    }
}
