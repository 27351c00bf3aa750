// Guest service requests (housekeeping, room service, ...)

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BookingError;
use crate::guest::GuestId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ServiceRequestId(pub usize);

impl fmt::Display for ServiceRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "service-{}", self.0)
    }
}

// Pending -> Completed, one way only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ServiceStatus {
    #[default]
    Pending,
    Completed,
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceStatus::Pending => f.write_str("Pending"),
            ServiceStatus::Completed => f.write_str("Completed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRequest {
    id: ServiceRequestId,
    guest: GuestId,
    service_type: String,
    status: ServiceStatus,
}

impl ServiceRequest {
    pub fn new(id: ServiceRequestId, guest: GuestId, service_type: impl Into<String>) -> Self {
        Self {
            id,
            guest,
            service_type: service_type.into(),
            status: ServiceStatus::Pending,
        }
    }

    pub fn id(&self) -> ServiceRequestId {
        self.id
    }

    pub fn guest(&self) -> GuestId {
        self.guest
    }

    pub fn service_type(&self) -> &str {
        &self.service_type
    }

    pub fn status(&self) -> ServiceStatus {
        self.status
    }

    pub fn complete(&mut self) -> Result<(), BookingError> {
        match self.status {
            ServiceStatus::Pending => {
                self.status = ServiceStatus::Completed;
                Ok(())
            }
            ServiceStatus::Completed => Err(BookingError::ServiceAlreadyCompleted(self.id)),
        }
    }

    pub fn summary(&self, guest_name: &str) -> String {
        format!(
            "Service Request: {} for {} - Status: {}",
            self.service_type, guest_name, self.status
        )
    }
}
