use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use prescription_cell::Prescription;
use shared_models::Stack;

/// Patient record. The prescription stack is created with the patient and
/// is only ever reached through the patient; the most recent prescription
/// sits on top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    patient_id: u32,
    name: String,
    age: u32,
    gender: String,
    medical_history: Vec<String>,
    current_condition: String,
    appointment: Option<String>,
    prescriptions: Stack<Prescription>,
}

impl Patient {
    pub fn new(patient_id: u32, name: impl Into<String>, age: u32, gender: impl Into<String>) -> Self {
        Self {
            patient_id,
            name: name.into(),
            age,
            gender: gender.into(),
            medical_history: Vec::new(),
            current_condition: String::new(),
            appointment: None,
            prescriptions: Stack::new(),
        }
    }

    // Getters

    pub fn patient_id(&self) -> u32 {
        self.patient_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn medical_history(&self) -> &[String] {
        &self.medical_history
    }

    pub fn current_condition(&self) -> &str {
        &self.current_condition
    }

    pub fn appointment(&self) -> Option<&str> {
        self.appointment.as_deref()
    }

    pub fn prescriptions(&self) -> &Stack<Prescription> {
        &self.prescriptions
    }

    /// Mutable access to the owned stack, e.g. to pop the latest
    /// prescription. The stack itself cannot be swapped out.
    pub fn prescriptions_mut(&mut self) -> &mut Stack<Prescription> {
        &mut self.prescriptions
    }

    // Setters

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_age(&mut self, age: u32) {
        self.age = age;
    }

    pub fn set_gender(&mut self, gender: impl Into<String>) {
        self.gender = gender.into();
    }

    pub fn set_medical_history(&mut self, medical_history: Vec<String>) {
        self.medical_history = medical_history;
    }

    pub fn set_current_condition(&mut self, current_condition: impl Into<String>) {
        self.current_condition = current_condition.into();
    }

    pub fn set_appointment(&mut self, appointment: Option<String>) {
        self.appointment = appointment;
    }

    // Record updates

    pub fn update_medical_history(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        debug!("Appending medical history entry for patient {}", self.patient_id);
        self.medical_history.push(entry);
    }

    /// Replaces the current condition; the previous value is discarded.
    pub fn update_condition(&mut self, new_condition: impl Into<String>) {
        self.current_condition = new_condition.into();
    }

    pub fn schedule_appointment(&mut self, appointment: impl Into<String>) {
        let appointment = appointment.into();
        debug!("Scheduling appointment {} for patient {}", appointment, self.patient_id);
        self.appointment = Some(appointment);
    }

    pub fn add_prescription(&mut self, prescription: Prescription) {
        debug!(
            "Adding prescription {} for patient {}",
            prescription.prescription_id(),
            self.patient_id
        );
        self.prescriptions.push(prescription);
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Patient ID: {}, Name: {}, Age: {}, Gender: {}",
            self.patient_id, self.name, self.age, self.gender
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePatientRequest {
    pub patient_id: u32,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub medical_history: Option<Vec<String>>,
    pub current_condition: Option<String>,
    pub appointment: Option<String>,
}

impl From<CreatePatientRequest> for Patient {
    fn from(request: CreatePatientRequest) -> Self {
        let mut patient = Patient::new(request.patient_id, request.name, request.age, request.gender);
        patient.medical_history = request.medical_history.unwrap_or_default();
        patient.current_condition = request.current_condition.unwrap_or_default();
        patient.appointment = request.appointment;
        patient
    }
}
