//! Citizen service applications registry

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::table::PageCursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplicationStatus::Pending => write!(f, "Pending"),
            ApplicationStatus::Approved => write!(f, "Approved"),
            ApplicationStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

/// A service application filed by a citizen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceApplication {
    pub application_id: String,
    pub service_name: String,
    pub applicant_name: String,
    pub applied_date: chrono::NaiveDate,
    pub status: ApplicationStatus,
}

/// Registry of service applications
#[derive(Debug, Default)]
pub struct ApplicationRegistry {
    applications: Vec<ServiceApplication>,
}

impl ApplicationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        let mk = |id: &str, service: &str, applicant: &str, date: &str, status| {
            ServiceApplication {
                application_id: id.to_string(),
                service_name: service.to_string(),
                applicant_name: applicant.to_string(),
                applied_date: date.parse().expect("fixture date"),
                status,
            }
        };

        Self {
            applications: vec![
                mk(
                    "APP-8001",
                    "Passport Renewal",
                    "Rahul Kumar",
                    "2026-02-20",
                    ApplicationStatus::Pending,
                ),
                mk(
                    "APP-8002",
                    "Voter ID Correction",
                    "Priya Sharma",
                    "2026-02-18",
                    ApplicationStatus::Approved,
                ),
                mk(
                    "APP-8003",
                    "New Ration Card",
                    "Amit Singh",
                    "2026-02-15",
                    ApplicationStatus::Rejected,
                ),
                mk(
                    "APP-8004",
                    "Driving License Renewal",
                    "Neha Gupta",
                    "2026-02-25",
                    ApplicationStatus::Pending,
                ),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.applications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ServiceApplication> {
        self.applications.iter().find(|a| a.application_id == id)
    }

    pub fn all(&self) -> &[ServiceApplication] {
        &self.applications
    }

    pub fn approved_count(&self) -> usize {
        self.applications
            .iter()
            .filter(|a| a.status == ApplicationStatus::Approved)
            .count()
    }

    pub fn pending_count(&self) -> usize {
        self.applications
            .iter()
            .filter(|a| a.status == ApplicationStatus::Pending)
            .count()
    }

    pub fn page(&self, page: u32, per_page: usize) -> (Vec<ServiceApplication>, PageCursor) {
        super::page_of(&self.applications, page, per_page)
    }

    /// Approve a pending application
    pub fn approve(&mut self, id: &str) -> Result<&ServiceApplication> {
        self.transition(id, ApplicationStatus::Approved)
    }

    /// Reject a pending application
    pub fn reject(&mut self, id: &str) -> Result<&ServiceApplication> {
        self.transition(id, ApplicationStatus::Rejected)
    }

    fn transition(&mut self, id: &str, to: ApplicationStatus) -> Result<&ServiceApplication> {
        let app = self
            .applications
            .iter_mut()
            .find(|a| a.application_id == id)
            .ok_or_else(|| Error::ApplicationNotFound(id.to_string()))?;

        if app.status != ApplicationStatus::Pending {
            return Err(Error::ApplicationNotPending(id.to_string()));
        }

        app.status = to;
        Ok(app)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approve_pending() {
        let mut registry = ApplicationRegistry::seeded();
        let app = registry.approve("APP-8001").unwrap();
        assert_eq!(app.status, ApplicationStatus::Approved);
        assert_eq!(registry.approved_count(), 2);
    }

    #[test]
    fn test_reject_pending() {
        let mut registry = ApplicationRegistry::seeded();
        let app = registry.reject("APP-8004").unwrap();
        assert_eq!(app.status, ApplicationStatus::Rejected);
    }

    #[test]
    fn test_cannot_approve_decided_application() {
        let mut registry = ApplicationRegistry::seeded();
        let err = registry.approve("APP-8002").unwrap_err();
        assert!(matches!(err, Error::ApplicationNotPending(_)));
    }

    #[test]
    fn test_unknown_application() {
        let mut registry = ApplicationRegistry::seeded();
        let err = registry.approve("APP-9999").unwrap_err();
        assert!(matches!(err, Error::ApplicationNotFound(_)));
    }
}
