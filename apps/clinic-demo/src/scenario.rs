use tracing::{debug, info};

use doctor_cell::Doctor;
use patient_cell::{CreatePatientRequest, Patient};
use prescription_cell::Prescription;
use shared_config::AppConfig;
use shared_models::{ClinicError, Queue};

/// One clinic session: patients wait in check-in order, each is seen,
/// prescribed for, and their prescriptions are dispensed latest first into
/// the pharmacy pickup queue. Returns the lines to print.
pub fn run(config: &AppConfig) -> Result<Vec<String>, ClinicError> {
    let mut report = vec![format!("== {} ==", config.clinic_name)];

    let mut doctor = Doctor::new(1, "Dr. Smith", "General Practice");
    doctor.add_availability("Mon 09:00-12:00");
    doctor.add_availability("Thu 13:00-17:00");
    report.push(doctor.to_string());

    let mut waiting_room = Queue::with_capacity(2);
    waiting_room.enqueue(Patient::new(1, "Alice", 30, "F"));
    waiting_room.enqueue(Patient::from(CreatePatientRequest {
        patient_id: 2,
        name: "Bob".to_string(),
        age: 45,
        gender: "M".to_string(),
        medical_history: Some(vec!["Hypertension".to_string()]),
        current_condition: Some("Under observation".to_string()),
        appointment: None,
    }));
    info!(waiting = waiting_room.size(), "Patients checked in");

    let mut pickup: Queue<Prescription> = Queue::with_capacity(config.prescription_capacity);
    let mut next_prescription_id = 101;

    while let Some(mut patient) = waiting_room.dequeue() {
        report.push(format!("Seeing {}", patient));

        for (medication, dosage) in [("Ibuprofen", "200mg"), ("Amoxicillin", "500mg")] {
            patient.add_prescription(Prescription::new(next_prescription_id, medication, dosage));
            next_prescription_id += 1;
        }
        patient.update_medical_history(format!("Seen by {}", doctor.name()));
        patient.update_condition("Stable");
        if let Some(slot) = doctor.availability().last() {
            patient.schedule_appointment(slot.clone());
        }

        if config.render_json {
            report.push(serde_json::to_string_pretty(&patient)?);
        }

        let prescriptions = patient.prescriptions_mut();
        while !prescriptions.is_empty() {
            let prescription = prescriptions.try_pop()?;
            debug!("Dispensing prescription {}", prescription.prescription_id());
            pickup.enqueue(prescription);
        }
        report.push(format!(
            "{} is {} with follow-up {}",
            patient.name(),
            patient.current_condition(),
            patient.appointment().unwrap_or("none")
        ));
    }

    while let Some(prescription) = pickup.dequeue() {
        report.push(format!("Pickup: {}", prescription));
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_dispenses_latest_prescription_first() {
        let report = run(&AppConfig::default()).unwrap();

        let pickups: Vec<&str> = report
            .iter()
            .filter(|line| line.starts_with("Pickup: "))
            .map(String::as_str)
            .collect();

        assert_eq!(
            pickups,
            vec![
                "Pickup: Prescription ID: 102, Medication: Amoxicillin, Dosage: 500mg",
                "Pickup: Prescription ID: 101, Medication: Ibuprofen, Dosage: 200mg",
                "Pickup: Prescription ID: 104, Medication: Amoxicillin, Dosage: 500mg",
                "Pickup: Prescription ID: 103, Medication: Ibuprofen, Dosage: 200mg",
            ]
        );
    }

    #[test]
    fn test_session_sees_patients_in_check_in_order() {
        let report = run(&AppConfig::default()).unwrap();

        assert_eq!(report[0], "== Clinic ==");
        assert_eq!(report[1], "Doctor ID: 1, Name: Dr. Smith, Specialty: General Practice");
        assert_eq!(report[2], "Seeing Patient ID: 1, Name: Alice, Age: 30, Gender: F");
        assert_eq!(report[3], "Alice is Stable with follow-up Thu 13:00-17:00");
        assert_eq!(report[4], "Seeing Patient ID: 2, Name: Bob, Age: 45, Gender: M");
    }

    #[test]
    fn test_json_rendering_is_optional() {
        let config = AppConfig {
            render_json: true,
            ..AppConfig::default()
        };

        let plain = run(&AppConfig::default()).unwrap();
        let with_json = run(&config).unwrap();

        assert_eq!(with_json.len(), plain.len() + 2);
        assert!(with_json.iter().any(|line| line.contains("\"medication\": \"Amoxicillin\"")));
    }
}
