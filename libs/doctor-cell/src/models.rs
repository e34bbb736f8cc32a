use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    doctor_id: u32,
    name: String,
    specialty: String,
    availability: Vec<String>, // opaque slot descriptors, e.g. "Mon 09:00-12:00"
}

impl Doctor {
    pub fn new(doctor_id: u32, name: impl Into<String>, specialty: impl Into<String>) -> Self {
        Self::with_availability(doctor_id, name, specialty, Vec::new())
    }

    /// Takes ownership of an existing slot list.
    pub fn with_availability(
        doctor_id: u32,
        name: impl Into<String>,
        specialty: impl Into<String>,
        availability: Vec<String>,
    ) -> Self {
        Self {
            doctor_id,
            name: name.into(),
            specialty: specialty.into(),
            availability,
        }
    }

    pub fn doctor_id(&self) -> u32 {
        self.doctor_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn specialty(&self) -> &str {
        &self.specialty
    }

    pub fn availability(&self) -> &[String] {
        &self.availability
    }

    pub fn add_availability(&mut self, slot: impl Into<String>) {
        let slot = slot.into();
        debug!("Adding availability {} for doctor {}", slot, self.doctor_id);
        self.availability.push(slot);
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Doctor ID: {}, Name: {}, Specialty: {}",
            self.doctor_id, self.name, self.specialty
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDoctorRequest {
    pub doctor_id: u32,
    pub name: String,
    pub specialty: String,
    pub availability: Option<Vec<String>>,
}

impl From<CreateDoctorRequest> for Doctor {
    fn from(request: CreateDoctorRequest) -> Self {
        Doctor::with_availability(
            request.doctor_id,
            request.name,
            request.specialty,
            request.availability.unwrap_or_default(),
        )
    }
}
