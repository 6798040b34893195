//! Tourist safety dashboard with a periodically jittered safety score.

use serde::{Deserialize, Serialize};

use crate::capabilities::{TimerCommand, TimerId, TimerIds, TimerLease};
use crate::{
    INITIAL_SAFETY_SCORE, MAX_SAFETY_SCORE, MIN_SAFETY_SCORE, MODERATE_SCORE_FROM,
    SAFETY_JITTER_SPAN, SAFETY_SCORE_REFRESH_MS, SAFE_SCORE_FROM,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyBand {
    Safe,
    Moderate,
    HighRisk,
}

impl SafetyBand {
    #[must_use]
    pub fn for_score(score: f64) -> Self {
        if score >= SAFE_SCORE_FROM {
            Self::Safe
        } else if score >= MODERATE_SCORE_FROM {
            Self::Moderate
        } else {
            Self::HighRisk
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Safe => "Safe",
            Self::Moderate => "Moderate",
            Self::HighRisk => "High Risk",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Traffic,
    Weather,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearbyAlert {
    pub id: u32,
    pub kind: AlertKind,
    pub message: String,
    pub time: String,
}

fn seeded_alerts() -> Vec<NearbyAlert> {
    vec![
        NearbyAlert {
            id: 1,
            kind: AlertKind::Traffic,
            message: "Heavy traffic on Ring Road".into(),
            time: "5 min ago".into(),
        },
        NearbyAlert {
            id: 2,
            kind: AlertKind::Weather,
            message: "Rain expected in 30 minutes".into(),
            time: "10 min ago".into(),
        },
    ]
}

/// Move `score` by `(sample - 0.5) * span` and clamp into the display range.
#[must_use]
pub fn jitter_score(score: f64, sample: f64) -> f64 {
    let sample = if sample.is_finite() { sample.clamp(0.0, 1.0) } else { 0.5 };
    (score + (sample - 0.5) * SAFETY_JITTER_SPAN).clamp(MIN_SAFETY_SCORE, MAX_SAFETY_SCORE)
}

#[derive(Debug)]
pub struct SafetyDashboard {
    score: f64,
    location: String,
    alerts: Vec<NearbyAlert>,
    refresh: Option<TimerLease>,
}

impl Default for SafetyDashboard {
    fn default() -> Self {
        Self {
            score: INITIAL_SAFETY_SCORE,
            location: "Connaught Place, New Delhi".into(),
            alerts: seeded_alerts(),
            refresh: None,
        }
    }
}

impl SafetyDashboard {
    /// Mount the dashboard and start its refresh timer.
    pub fn mount(ids: &mut TimerIds) -> (Self, TimerCommand) {
        let lease = ids.issue(SAFETY_SCORE_REFRESH_MS);
        let command = TimerCommand::start(&lease);
        let dashboard = Self {
            refresh: Some(lease),
            ..Self::default()
        };
        (dashboard, command)
    }

    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }

    #[must_use]
    pub fn band(&self) -> SafetyBand {
        SafetyBand::for_score(self.score)
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn alerts(&self) -> &[NearbyAlert] {
        &self.alerts
    }

    #[must_use]
    pub fn live_timer(&self) -> Option<TimerId> {
        self.refresh.as_ref().map(TimerLease::id)
    }

    /// Apply one refresh if `id` is our timer; returns the re-arm command.
    pub fn refresh(&mut self, id: TimerId, sample: f64) -> Option<TimerCommand> {
        let lease = self.refresh.as_ref().filter(|lease| lease.owns(id))?;
        self.score = jitter_score(self.score, sample);
        Some(TimerCommand::start(lease))
    }

    pub fn release(&mut self) -> Option<TimerCommand> {
        self.refresh.take().map(TimerCommand::cancel)
    }
}
