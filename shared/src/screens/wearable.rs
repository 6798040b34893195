//! Simulated wearable pairing. Scanning and connecting are fixed-length
//! delays driven by the timer capability; no radio is involved.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::capabilities::{TimerCommand, TimerId, TimerIds, TimerLease};
use crate::{BATTERY_GOOD_ABOVE, BATTERY_LOW_ABOVE, DEVICE_CONNECT_MS, DEVICE_SCAN_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceStatus {
    Available,
    Connected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatteryBand {
    Good,
    Low,
    Critical,
}

impl BatteryBand {
    #[must_use]
    pub const fn for_level(level: u8) -> Self {
        if level > BATTERY_GOOD_ABOVE {
            Self::Good
        } else if level > BATTERY_LOW_ABOVE {
            Self::Low
        } else {
            Self::Critical
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WearableDevice {
    pub id: String,
    pub name: String,
    pub device_type: String,
    pub features: Vec<String>,
    pub battery: u8,
    pub status: DeviceStatus,
}

impl WearableDevice {
    #[must_use]
    pub const fn battery_band(&self) -> BatteryBand {
        BatteryBand::for_level(self.battery)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthSnapshot {
    pub heart_rate: u32,
    pub steps: u32,
    pub distance: String,
    pub calories: u32,
    pub last_sync: String,
}

impl Default for HealthSnapshot {
    fn default() -> Self {
        Self {
            heart_rate: 72,
            steps: 8543,
            distance: "6.2 km".into(),
            calories: 284,
            last_sync: "2 min ago".into(),
        }
    }
}

fn seeded_devices() -> Vec<WearableDevice> {
    let device = |id: &str, name: &str, device_type: &str, features: &[&str], battery, status| {
        WearableDevice {
            id: id.into(),
            name: name.into(),
            device_type: device_type.into(),
            features: features.iter().map(|f| (*f).to_owned()).collect(),
            battery,
            status,
        }
    };
    vec![
        device(
            "smart-band-1",
            "SafeTrack Smart Band Pro",
            "Smart Band",
            &["Heart Rate", "GPS", "SOS Button", "Fall Detection"],
            85,
            DeviceStatus::Available,
        ),
        device(
            "safety-tag-1",
            "TouristGuard Safety Tag",
            "Safety Tag",
            &["Location Tracking", "Panic Button", "Geofencing"],
            92,
            DeviceStatus::Available,
        ),
        device(
            "smart-watch-1",
            "SecureWatch Series X",
            "Smart Watch",
            &["Health Monitoring", "Emergency Calls", "Real-time Alerts"],
            67,
            DeviceStatus::Connected,
        ),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WearableError {
    #[error("a scan or connection is already in progress")]
    Busy,
    #[error("unknown device: {0}")]
    UnknownDevice(String),
    #[error("device {0} is already connected")]
    AlreadyConnected(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairingActivity {
    Scanning,
    Connecting,
}

#[derive(Debug)]
struct Pending {
    activity: PairingActivity,
    lease: TimerLease,
}

#[derive(Debug)]
pub struct WearablePairing {
    devices: Vec<WearableDevice>,
    selected: Option<String>,
    connected: bool,
    pending: Option<Pending>,
    health: HealthSnapshot,
}

impl Default for WearablePairing {
    fn default() -> Self {
        Self {
            devices: seeded_devices(),
            selected: None,
            connected: false,
            pending: None,
            health: HealthSnapshot::default(),
        }
    }
}

impl WearablePairing {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn devices(&self) -> &[WearableDevice] {
        &self.devices
    }

    #[must_use]
    pub fn selected_device(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.connected
    }

    /// Shown as "Scanning..." / "Connecting..." while any timer is live.
    #[must_use]
    pub fn is_scanning(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn activity(&self) -> Option<PairingActivity> {
        self.pending.as_ref().map(|pending| pending.activity)
    }

    #[must_use]
    pub fn connected_count(&self) -> usize {
        self.devices
            .iter()
            .filter(|device| device.status == DeviceStatus::Connected)
            .count()
    }

    /// Health data is only exposed once a pairing has completed.
    #[must_use]
    pub fn health(&self) -> Option<&HealthSnapshot> {
        self.connected.then_some(&self.health)
    }

    pub fn scan(&mut self, ids: &mut TimerIds) -> Result<TimerCommand, WearableError> {
        if self.pending.is_some() {
            return Err(WearableError::Busy);
        }
        Ok(self.begin(PairingActivity::Scanning, ids.issue(DEVICE_SCAN_MS)))
    }

    pub fn connect(
        &mut self,
        device_id: &str,
        ids: &mut TimerIds,
    ) -> Result<TimerCommand, WearableError> {
        if self.pending.is_some() {
            return Err(WearableError::Busy);
        }
        let device = self
            .devices
            .iter()
            .find(|device| device.id == device_id)
            .ok_or_else(|| WearableError::UnknownDevice(device_id.to_owned()))?;
        if device.status == DeviceStatus::Connected {
            return Err(WearableError::AlreadyConnected(device_id.to_owned()));
        }

        self.selected = Some(device_id.to_owned());
        Ok(self.begin(PairingActivity::Connecting, ids.issue(DEVICE_CONNECT_MS)))
    }

    fn begin(&mut self, activity: PairingActivity, lease: TimerLease) -> TimerCommand {
        let command = TimerCommand::start(&lease);
        self.pending = Some(Pending { activity, lease });
        command
    }

    /// Finish whatever `id` was timing. Returns the finished activity.
    pub fn timer_elapsed(&mut self, id: TimerId) -> Option<PairingActivity> {
        if !self.pending.as_ref().is_some_and(|pending| pending.lease.owns(id)) {
            return None;
        }
        let finished = self.pending.take()?.activity;
        if finished == PairingActivity::Connecting {
            self.connected = true;
        }
        Some(finished)
    }

    pub fn release(&mut self) -> Option<TimerCommand> {
        self.pending
            .take()
            .map(|pending| TimerCommand::cancel(pending.lease))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(command: TimerCommand) -> (TimerId, u64) {
        match command {
            TimerCommand::Start { id, millis } => (id, millis),
            TimerCommand::Cancel { .. } => panic!("expected start"),
        }
    }

    #[test]
    fn test_seeded_devices() {
        let pairing = WearablePairing::new();
        assert_eq!(pairing.devices().len(), 3);
        assert_eq!(pairing.connected_count(), 1);
        assert!(!pairing.is_connected());
        assert!(pairing.health().is_none());
    }

    #[test]
    fn test_battery_bands() {
        assert_eq!(BatteryBand::for_level(85), BatteryBand::Good);
        assert_eq!(BatteryBand::for_level(50), BatteryBand::Low);
        assert_eq!(BatteryBand::for_level(21), BatteryBand::Low);
        assert_eq!(BatteryBand::for_level(20), BatteryBand::Critical);
    }

    #[test]
    fn test_scan_runs_for_two_seconds() {
        let mut ids = TimerIds::new();
        let mut pairing = WearablePairing::new();
        let (id, millis) = started(pairing.scan(&mut ids).unwrap());
        assert_eq!(millis, 2000);
        assert!(pairing.is_scanning());
        assert_eq!(pairing.scan(&mut ids), Err(WearableError::Busy));

        assert_eq!(pairing.timer_elapsed(id), Some(PairingActivity::Scanning));
        assert!(!pairing.is_scanning());
        assert!(!pairing.is_connected());
    }

    #[test]
    fn test_connect_selects_and_pairs() {
        let mut ids = TimerIds::new();
        let mut pairing = WearablePairing::new();
        let (id, millis) = started(pairing.connect("safety-tag-1", &mut ids).unwrap());
        assert_eq!(millis, 3000);
        assert_eq!(pairing.selected_device(), Some("safety-tag-1"));
        assert_eq!(pairing.activity(), Some(PairingActivity::Connecting));

        assert_eq!(pairing.timer_elapsed(id), Some(PairingActivity::Connecting));
        assert!(pairing.is_connected());
        assert_eq!(pairing.health().unwrap().heart_rate, 72);
    }

    #[test]
    fn test_connect_rejections() {
        let mut ids = TimerIds::new();
        let mut pairing = WearablePairing::new();
        assert_eq!(
            pairing.connect("pager-9", &mut ids),
            Err(WearableError::UnknownDevice("pager-9".into()))
        );
        assert_eq!(
            pairing.connect("smart-watch-1", &mut ids),
            Err(WearableError::AlreadyConnected("smart-watch-1".into()))
        );
        pairing.connect("smart-band-1", &mut ids).unwrap();
        assert_eq!(
            pairing.connect("safety-tag-1", &mut ids),
            Err(WearableError::Busy)
        );
        assert_eq!(pairing.selected_device(), Some("smart-band-1"));
    }

    #[test]
    fn test_stale_timer_after_release() {
        let mut ids = TimerIds::new();
        let mut pairing = WearablePairing::new();
        let (id, _) = started(pairing.connect("smart-band-1", &mut ids).unwrap());
        assert_eq!(pairing.release(), Some(TimerCommand::Cancel { id }));
        assert_eq!(pairing.timer_elapsed(id), None);
        assert!(!pairing.is_connected());
    }
}
