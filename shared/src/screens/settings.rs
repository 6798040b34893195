use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::locale::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingToggle {
    RealTimeTracking,
    LocationSharing,
    EmergencyAlerts,
    SafetyNotifications,
    ShareLocationWithFamily,
    AutoCheckIn,
    PrivateMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("{0:?} cannot be changed while private mode is on")]
    Locked(SettingToggle),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TouristSettings {
    pub real_time_tracking: bool,
    pub location_sharing: bool,
    pub emergency_alerts: bool,
    pub safety_notifications: bool,
    pub share_location_with_family: bool,
    pub auto_check_in: bool,
    pub private_mode: bool,
    pub language: Language,
    pub emergency_contact: String,
}

impl Default for TouristSettings {
    fn default() -> Self {
        Self {
            real_time_tracking: true,
            location_sharing: true,
            emergency_alerts: true,
            safety_notifications: true,
            share_location_with_family: true,
            auto_check_in: false,
            private_mode: false,
            language: Language::English,
            emergency_contact: "+91 98765 43210".into(),
        }
    }
}

impl TouristSettings {
    #[must_use]
    pub const fn get(&self, toggle: SettingToggle) -> bool {
        match toggle {
            SettingToggle::RealTimeTracking => self.real_time_tracking,
            SettingToggle::LocationSharing => self.location_sharing,
            SettingToggle::EmergencyAlerts => self.emergency_alerts,
            SettingToggle::SafetyNotifications => self.safety_notifications,
            SettingToggle::ShareLocationWithFamily => self.share_location_with_family,
            SettingToggle::AutoCheckIn => self.auto_check_in,
            SettingToggle::PrivateMode => self.private_mode,
        }
    }

    /// Family sharing is frozen (not cleared) while private mode is on.
    #[must_use]
    pub const fn is_locked(&self, toggle: SettingToggle) -> bool {
        matches!(toggle, SettingToggle::ShareLocationWithFamily) && self.private_mode
    }

    pub fn toggle(&mut self, toggle: SettingToggle) -> Result<bool, SettingsError> {
        if self.is_locked(toggle) {
            return Err(SettingsError::Locked(toggle));
        }
        let slot = match toggle {
            SettingToggle::RealTimeTracking => &mut self.real_time_tracking,
            SettingToggle::LocationSharing => &mut self.location_sharing,
            SettingToggle::EmergencyAlerts => &mut self.emergency_alerts,
            SettingToggle::SafetyNotifications => &mut self.safety_notifications,
            SettingToggle::ShareLocationWithFamily => &mut self.share_location_with_family,
            SettingToggle::AutoCheckIn => &mut self.auto_check_in,
            SettingToggle::PrivateMode => &mut self.private_mode,
        };
        *slot = !*slot;
        Ok(*slot)
    }
}
