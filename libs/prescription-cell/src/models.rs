use std::fmt;

use serde::{Deserialize, Serialize};

/// A single issued prescription. Fields are fixed once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    prescription_id: u32,
    medication: String,
    dosage: String,
}

impl Prescription {
    pub fn new(prescription_id: u32, medication: impl Into<String>, dosage: impl Into<String>) -> Self {
        Self {
            prescription_id,
            medication: medication.into(),
            dosage: dosage.into(),
        }
    }

    pub fn prescription_id(&self) -> u32 {
        self.prescription_id
    }

    pub fn medication(&self) -> &str {
        &self.medication
    }

    pub fn dosage(&self) -> &str {
        &self.dosage
    }
}

impl fmt::Display for Prescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Prescription ID: {}, Medication: {}, Dosage: {}",
            self.prescription_id, self.medication, self.dosage
        )
    }
}
