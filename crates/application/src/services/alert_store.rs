//! In-memory store for active security alerts
//!
//! Plain single-threaded container; the owning monitor serializes access.
//! Counters are monotonic for the lifetime of the store and are not
//! decremented when alerts are cleared.

use domain::{SecurityAlert, ThreatLevel};
use uuid::Uuid;

/// Active alerts plus lifetime counters
#[derive(Debug, Default)]
pub struct AlertStore {
    alerts: Vec<SecurityAlert>,
    total_detected_threats: u64,
    total_blocked_threats: u64,
}

impl AlertStore {
    /// Create an empty store
    #[must_use]
    pub const fn new() -> Self {
        Self {
            alerts: Vec::new(),
            total_detected_threats: 0,
            total_blocked_threats: 0,
        }
    }

    /// Record one detection
    pub fn add_alert(&mut self, alert: SecurityAlert) {
        self.total_detected_threats += 1;
        self.alerts.push(alert);
    }

    /// Record a batch of detections from one scan
    ///
    /// All alerts land adjacently; a concurrent reader never observes a
    /// partial batch because the owning monitor holds the lock for the
    /// whole call.
    pub fn extend_alerts(&mut self, alerts: impl IntoIterator<Item = SecurityAlert>) {
        for alert in alerts {
            self.add_alert(alert);
        }
    }

    /// Mark an alert as acknowledged; returns whether the id was found
    pub fn acknowledge_alert(&mut self, id: Uuid) -> bool {
        match self.alerts.iter_mut().find(|a| a.id == id) {
            Some(alert) => {
                alert.acknowledge();
                true
            }
            None => false,
        }
    }

    /// Remove an alert entirely; returns whether the id was found
    pub fn clear_alert(&mut self, id: Uuid) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|a| a.id != id);
        self.alerts.len() != before
    }

    /// Remove every acknowledged alert, preserving the order of the rest
    ///
    /// Returns how many were removed.
    pub fn clear_acknowledged_alerts(&mut self) -> usize {
        let before = self.alerts.len();
        self.alerts.retain(|a| !a.is_acknowledged);
        before - self.alerts.len()
    }

    /// Count one blocked delivery
    pub fn record_blocked_threat(&mut self) {
        self.total_blocked_threats += 1;
    }

    /// All stored alerts in insertion order
    #[must_use]
    pub fn active_alerts(&self) -> &[SecurityAlert] {
        &self.alerts
    }

    /// Highest severity among unacknowledged alerts, normal when none
    #[must_use]
    pub fn current_threat_level(&self) -> ThreatLevel {
        self.alerts
            .iter()
            .filter(|a| !a.is_acknowledged)
            .map(|a| a.severity)
            .max()
            .unwrap_or(ThreatLevel::Normal)
    }

    /// Lifetime count of detections
    #[must_use]
    pub const fn total_detected_threats(&self) -> u64 {
        self.total_detected_threats
    }

    /// Lifetime count of blocked deliveries
    #[must_use]
    pub const fn total_blocked_threats(&self) -> u64 {
        self.total_blocked_threats
    }
}
