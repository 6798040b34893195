//! Incident catalogue and the authority-side search/filter.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentKind {
    Emergency,
    Medical,
    Suspicious,
    Lost,
    Theft,
}

impl IncidentKind {
    pub const ALL: [Self; 5] = [
        Self::Emergency,
        Self::Medical,
        Self::Suspicious,
        Self::Lost,
        Self::Theft,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Emergency => "emergency",
            Self::Medical => "medical",
            Self::Suspicious => "suspicious",
            Self::Lost => "lost",
            Self::Theft => "theft",
        }
    }

    /// Heading used on incident cards, e.g. "Medical Incident".
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Emergency => "Emergency Incident",
            Self::Medical => "Medical Incident",
            Self::Suspicious => "Suspicious Incident",
            Self::Lost => "Lost Incident",
            Self::Theft => "Theft Incident",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentStatus {
    Responding,
    Dispatched,
    Investigating,
    Resolved,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IncidentError {
    #[error("unknown incident type filter: {0}")]
    UnknownKind(String),
    #[error("unknown severity filter: {0}")]
    UnknownSeverity(String),
    #[error("no incident with id {0}")]
    NotFound(String),
}

impl FromStr for IncidentKind {
    type Err = IncidentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| IncidentError::UnknownKind(s.to_owned()))
    }
}

impl FromStr for Severity {
    type Err = IncidentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::High, Self::Medium, Self::Low]
            .into_iter()
            .find(|severity| severity.as_str() == s)
            .ok_or_else(|| IncidentError::UnknownSeverity(s.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    pub id: String,
    pub kind: IncidentKind,
    pub tourist: String,
    pub nationality: String,
    pub location: String,
    pub time: String,
    pub severity: Severity,
    pub status: IncidentStatus,
    pub description: String,
}

struct Seed(
    &'static str,
    IncidentKind,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    Severity,
    IncidentStatus,
    &'static str,
);

const SEEDS: [Seed; 5] = [
    Seed(
        "INC-2025-001",
        IncidentKind::Emergency,
        "John Smith",
        "US",
        "Red Fort, Delhi",
        "2 min ago",
        Severity::High,
        IncidentStatus::Responding,
        "Tourist reported feeling unsafe, requesting immediate assistance",
    ),
    Seed(
        "INC-2025-002",
        IncidentKind::Medical,
        "Maria Garcia",
        "Spain",
        "India Gate",
        "15 min ago",
        Severity::High,
        IncidentStatus::Dispatched,
        "Medical emergency reported via panic button",
    ),
    Seed(
        "INC-2025-003",
        IncidentKind::Suspicious,
        "David Chen",
        "Canada",
        "Connaught Place",
        "32 min ago",
        Severity::Medium,
        IncidentStatus::Investigating,
        "Suspicious activity reported in tourist area",
    ),
    Seed(
        "INC-2025-004",
        IncidentKind::Lost,
        "Emma Johnson",
        "Australia",
        "Chandni Chowk",
        "45 min ago",
        Severity::Low,
        IncidentStatus::Resolved,
        "Tourist reported being lost, provided directions",
    ),
    Seed(
        "INC-2025-005",
        IncidentKind::Theft,
        "Hans Mueller",
        "Germany",
        "Karol Bagh",
        "1 hour ago",
        Severity::Medium,
        IncidentStatus::Investigating,
        "Reported theft of personal belongings",
    ),
];

#[must_use]
pub fn incident_catalogue() -> Vec<Incident> {
    SEEDS
        .iter()
        .map(|Seed(id, kind, tourist, nationality, location, time, severity, status, description)| {
            Incident {
                id: (*id).to_owned(),
                kind: *kind,
                tourist: (*tourist).to_owned(),
                nationality: (*nationality).to_owned(),
                location: (*location).to_owned(),
                time: (*time).to_owned(),
                severity: *severity,
                status: *status,
                description: (*description).to_owned(),
            }
        })
        .collect()
}

/// `None` on either filter means "all".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct IncidentQuery {
    pub search: String,
    pub kind: Option<IncidentKind>,
    pub severity: Option<Severity>,
}

impl IncidentQuery {
    #[must_use]
    pub fn matches(&self, incident: &Incident) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = [&incident.tourist, &incident.location, &incident.id]
            .iter()
            .any(|haystack| haystack.to_lowercase().contains(&needle));
        let matches_kind = self.kind.map_or(true, |kind| incident.kind == kind);
        let matches_severity = self.severity.map_or(true, |severity| incident.severity == severity);
        matches_search && matches_kind && matches_severity
    }
}

#[derive(Debug, Clone)]
pub struct IncidentBoard {
    incidents: Vec<Incident>,
    query: IncidentQuery,
}

impl Default for IncidentBoard {
    fn default() -> Self {
        Self {
            incidents: incident_catalogue(),
            query: IncidentQuery::default(),
        }
    }
}

impl IncidentBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn query(&self) -> &IncidentQuery {
        &self.query
    }

    pub fn set_search(&mut self, term: String) {
        self.query.search = term;
    }

    pub fn set_kind(&mut self, kind: Option<IncidentKind>) {
        self.query.kind = kind;
    }

    pub fn set_severity(&mut self, severity: Option<Severity>) {
        self.query.severity = severity;
    }

    /// Unresolved incidents across the whole catalogue, ignoring the query.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.incidents
            .iter()
            .filter(|incident| incident.status != IncidentStatus::Resolved)
            .count()
    }

    pub fn filtered(&self) -> impl Iterator<Item = &Incident> {
        self.incidents.iter().filter(|incident| self.query.matches(incident))
    }

    pub fn find(&self, id: &str) -> Result<&Incident, IncidentError> {
        self.incidents
            .iter()
            .find(|incident| incident.id == id)
            .ok_or_else(|| IncidentError::NotFound(id.to_owned()))
    }
}
