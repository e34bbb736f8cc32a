use std::collections::HashMap;

use shared_config::AppConfig;

pub struct TestConfig {
    pub vars: HashMap<String, String>,
}

impl Default for TestConfig {
    fn default() -> Self {
        let mut vars = HashMap::new();
        vars.insert("CLINIC_NAME".to_string(), "Test Clinic".to_string());
        vars.insert("RUST_LOG".to_string(), "debug".to_string());
        vars.insert("CLINIC_PRESCRIPTION_CAPACITY".to_string(), "4".to_string());
        Self { vars }
    }
}

impl TestConfig {
    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    pub fn without_var(mut self, key: &str) -> Self {
        self.vars.remove(key);
        self
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig::from_lookup(|key| self.vars.get(key).cloned())
    }
}

/// Plain patient identity data. Cells turn it into their own record types.
#[derive(Debug, Clone)]
pub struct TestPatient {
    pub patient_id: u32,
    pub name: String,
    pub age: u32,
    pub gender: String,
}

impl Default for TestPatient {
    fn default() -> Self {
        Self::alice()
    }
}

impl TestPatient {
    pub fn new(patient_id: u32, name: &str, age: u32, gender: &str) -> Self {
        Self {
            patient_id,
            name: name.to_string(),
            age,
            gender: gender.to_string(),
        }
    }

    pub fn alice() -> Self {
        Self::new(1, "Alice", 30, "F")
    }

    pub fn bob() -> Self {
        Self::new(2, "Bob", 45, "M")
    }
}

#[derive(Debug, Clone)]
pub struct TestDoctor {
    pub doctor_id: u32,
    pub name: String,
    pub specialty: String,
}

impl Default for TestDoctor {
    fn default() -> Self {
        Self::new(10, "Dr. Smith", "General Practice")
    }
}

impl TestDoctor {
    pub fn new(doctor_id: u32, name: &str, specialty: &str) -> Self {
        Self {
            doctor_id,
            name: name.to_string(),
            specialty: specialty.to_string(),
        }
    }

    pub fn cardiologist() -> Self {
        Self::new(11, "Dr. Jones", "Cardiology")
    }
}

/// (prescription_id, medication, dosage) rows in the order they are issued.
pub struct TestPrescriptions;

impl TestPrescriptions {
    pub fn ibuprofen() -> (u32, &'static str, &'static str) {
        (101, "Ibuprofen", "200mg")
    }

    pub fn amoxicillin() -> (u32, &'static str, &'static str) {
        (102, "Amoxicillin", "500mg")
    }

    pub fn course() -> Vec<(u32, &'static str, &'static str)> {
        vec![
            Self::ibuprofen(),
            Self::amoxicillin(),
            (103, "Paracetamol", "1g"),
            (104, "Omeprazole", "20mg"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = TestConfig::default().to_app_config();

        assert_eq!(config.clinic_name, "Test Clinic");
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.prescription_capacity, 4);
        assert!(!config.render_json);
    }

    #[test]
    fn test_config_overrides() {
        let config = TestConfig::default()
            .with_var("CLINIC_RENDER_JSON", "true")
            .without_var("CLINIC_NAME")
            .to_app_config();

        assert!(config.render_json);
        assert_eq!(config.clinic_name, AppConfig::default().clinic_name);
    }

    #[test]
    fn test_fixture_identities_are_distinct() {
        assert_ne!(TestPatient::alice().patient_id, TestPatient::bob().patient_id);
        assert_ne!(TestDoctor::default().doctor_id, TestDoctor::cardiologist().doctor_id);

        let ids: Vec<u32> = TestPrescriptions::course().iter().map(|p| p.0).collect();
        assert_eq!(ids, vec![101, 102, 103, 104]);
    }
}
