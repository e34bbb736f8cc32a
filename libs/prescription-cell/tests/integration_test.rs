use prescription_cell::Prescription;
use shared_utils::test_utils::TestPrescriptions;

#[test]
fn test_prescription_exposes_constructed_fields() {
    let (id, medication, dosage) = TestPrescriptions::ibuprofen();
    let prescription = Prescription::new(id, medication, dosage);

    assert_eq!(prescription.prescription_id(), 101);
    assert_eq!(prescription.medication(), "Ibuprofen");
    assert_eq!(prescription.dosage(), "200mg");
}

#[test]
fn test_prescription_display_lists_all_fields() {
    let prescription = Prescription::new(102, "Amoxicillin", "500mg");

    assert_eq!(
        prescription.to_string(),
        "Prescription ID: 102, Medication: Amoxicillin, Dosage: 500mg"
    );
}

#[test]
fn test_duplicate_ids_are_not_rejected() {
    let first = Prescription::new(7, "Ibuprofen", "200mg");
    let second = Prescription::new(7, "Cetirizine", "10mg");

    assert_eq!(first.prescription_id(), second.prescription_id());
    assert_ne!(first, second);
}

#[test]
fn test_prescription_json_uses_field_names() {
    let prescription = Prescription::new(103, "Paracetamol", "1g");
    let value = serde_json::to_value(&prescription).unwrap();

    assert_eq!(value["prescription_id"], 103);
    assert_eq!(value["medication"], "Paracetamol");
    assert_eq!(value["dosage"], "1g");
}
