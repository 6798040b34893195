//! Single-incident case file: e-FIR generation and responder messaging.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::incidents::{IncidentKind, IncidentStatus, Severity};
use crate::capabilities::{TimerCommand, TimerId, TimerIds, TimerLease};
use crate::EFIR_GENERATION_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EfirStatus {
    #[default]
    Pending,
    Generating,
    Generated,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseFileError {
    #[error("e-FIR already {0:?}")]
    EfirNotPending(EfirStatus),
    #[error("response message is empty")]
    EmptyResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TouristIdentity {
    pub name: String,
    pub nationality: String,
    pub age: u8,
    pub digital_id: String,
    pub phone_number: String,
    pub emergency_contact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastKnownLocation {
    pub current: String,
    pub coordinates: String,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentReport {
    pub trigger: String,
    pub severity: Severity,
    pub reported_at: String,
    pub description: String,
    pub status: IncidentStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripDetails {
    pub arrival_date: String,
    pub planned_departure: String,
    pub accommodation: String,
    pub itinerary: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseTeam {
    pub officer: String,
    pub unit: String,
    pub eta: String,
    pub vehicle_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseFile {
    pub id: String,
    pub kind: IncidentKind,
    pub tourist: TouristIdentity,
    pub location: LastKnownLocation,
    pub report: IncidentReport,
    pub trip: TripDetails,
    pub team: ResponseTeam,
}

impl Default for CaseFile {
    fn default() -> Self {
        Self {
            id: "INC-2025-001".into(),
            kind: IncidentKind::Emergency,
            tourist: TouristIdentity {
                name: "John Smith".into(),
                nationality: "United States".into(),
                age: 34,
                digital_id: "TIN-12345678".into(),
                phone_number: "+1 555-0123".into(),
                emergency_contact: "+1 555-9876".into(),
            },
            location: LastKnownLocation {
                current: "Red Fort, Delhi".into(),
                coordinates: "28.6562° N, 77.2410° E".into(),
                last_updated: "2 minutes ago".into(),
            },
            report: IncidentReport {
                trigger: "Panic Button Activated".into(),
                severity: Severity::High,
                reported_at: "2025-01-14 14:30:25".into(),
                description: "Tourist activated panic button reporting feeling unsafe in crowded area near Red Fort entrance".into(),
                status: IncidentStatus::Responding,
            },
            trip: TripDetails {
                arrival_date: "2025-01-12".into(),
                planned_departure: "2025-01-20".into(),
                accommodation: "The Imperial Hotel, New Delhi".into(),
                itinerary: vec!["Red Fort".into(), "India Gate".into(), "Humayuns Tomb".into()],
            },
            team: ResponseTeam {
                officer: "Inspector Raj Kumar".into(),
                unit: "Tourist Police Unit 3".into(),
                eta: "6 minutes".into(),
                vehicle_number: "DL-01-TP-3456".into(),
            },
        }
    }
}

#[derive(Debug, Default)]
pub struct IncidentCase {
    file: CaseFile,
    efir: EfirStatus,
    efir_timer: Option<TimerLease>,
    draft: String,
    sent: Vec<String>,
}

impl IncidentCase {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn file(&self) -> &CaseFile {
        &self.file
    }

    #[must_use]
    pub const fn efir_status(&self) -> EfirStatus {
        self.efir
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub fn sent_responses(&self) -> &[String] {
        &self.sent
    }

    pub fn generate_efir(&mut self, ids: &mut TimerIds) -> Result<TimerCommand, CaseFileError> {
        if self.efir != EfirStatus::Pending {
            return Err(CaseFileError::EfirNotPending(self.efir));
        }
        let lease = ids.issue(EFIR_GENERATION_MS);
        let command = TimerCommand::start(&lease);
        self.efir = EfirStatus::Generating;
        self.efir_timer = Some(lease);
        Ok(command)
    }

    /// Returns `true` when `id` finished the e-FIR.
    pub fn timer_elapsed(&mut self, id: TimerId) -> bool {
        if !self.efir_timer.as_ref().is_some_and(|lease| lease.owns(id)) {
            return false;
        }
        self.efir_timer = None;
        self.efir = EfirStatus::Generated;
        true
    }

    pub fn edit_draft(&mut self, text: String) {
        self.draft = text;
    }

    #[must_use]
    pub fn can_send(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    pub fn send_response(&mut self) -> Result<&str, CaseFileError> {
        if !self.can_send() {
            return Err(CaseFileError::EmptyResponse);
        }
        let message = std::mem::take(&mut self.draft);
        self.sent.push(message);
        Ok(self.sent.last().map_or("", String::as_str))
    }

    pub fn release(&mut self) -> Option<TimerCommand> {
        self.efir_timer.take().map(TimerCommand::cancel)
    }
}
