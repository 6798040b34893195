//! Authority live-monitoring overview. Every figure here is static.

use serde::{Deserialize, Serialize};

use super::incidents::Severity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitoringMetrics {
    pub active_alerts: u32,
    pub total_tourists: u32,
    pub average_response_time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertCategory {
    Emergency,
    Suspicious,
    Medical,
    Lost,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentAlert {
    pub id: u32,
    pub category: AlertCategory,
    pub location: String,
    pub time: String,
    pub severity: Severity,
}

/// Risk for a tourist cluster; same three levels as incident severity.
pub type RiskLevel = Severity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TouristCluster {
    pub area: String,
    pub count: u32,
    pub risk_level: RiskLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorityOverview {
    pub metrics: MonitoringMetrics,
    pub alerts: Vec<RecentAlert>,
    pub clusters: Vec<TouristCluster>,
}

impl Default for AuthorityOverview {
    fn default() -> Self {
        let alert = |id, category, location: &str, time: &str, severity| RecentAlert {
            id,
            category,
            location: location.into(),
            time: time.into(),
            severity,
        };
        let cluster = |area: &str, count, risk_level| TouristCluster {
            area: area.into(),
            count,
            risk_level,
        };

        Self {
            metrics: MonitoringMetrics {
                active_alerts: 12,
                total_tourists: 2847,
                average_response_time: "8.5 min".into(),
            },
            alerts: vec![
                alert(1, AlertCategory::Emergency, "Red Fort Area", "2 min ago", Severity::High),
                alert(2, AlertCategory::Suspicious, "Connaught Place", "15 min ago", Severity::Medium),
                alert(3, AlertCategory::Medical, "India Gate", "23 min ago", Severity::High),
                alert(4, AlertCategory::Lost, "Chandni Chowk", "45 min ago", Severity::Low),
            ],
            clusters: vec![
                cluster("Red Fort", 156, Severity::Low),
                cluster("India Gate", 234, Severity::Medium),
                cluster("Connaught Place", 189, Severity::High),
                cluster("Chandni Chowk", 98, Severity::Medium),
            ],
        }
    }
}

impl AuthorityOverview {
    #[must_use]
    pub fn high_severity_alerts(&self) -> usize {
        self.alerts
            .iter()
            .filter(|alert| alert.severity == Severity::High)
            .count()
    }
}
