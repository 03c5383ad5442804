use dcmdeid_anonymize::{
  AnonymizationConfig, Anonymizer, DataSetAnonymizeExtensions,
};
use dcmdeid_core::{
  DataElementTag, DataElementValue, DataSet, ValueRepresentation, dictionary,
};

/// A record with a patient name, a Patient ID, an overlay element, and a
/// private element.
fn test_record() -> DataSet {
  let mut data_set = DataSet::new();

  data_set.insert_string(
    dictionary::PATIENT_NAME.tag,
    ValueRepresentation::PersonName,
    "Doe^John",
  );
  data_set.insert_string(
    dictionary::PATIENT_ID.tag,
    ValueRepresentation::LongString,
    "12345",
  );
  data_set.insert_string(
    dictionary::MODALITY.tag,
    ValueRepresentation::CodeString,
    "MR",
  );
  data_set.insert(
    dictionary::OVERLAY_DATA.tag,
    DataElementValue::new_binary(
      ValueRepresentation::OtherWordString,
      vec![0; 64],
    ),
  );
  data_set.insert_string(
    DataElementTag::new(0x0009, 0x0010),
    ValueRepresentation::LongString,
    "vendor data",
  );

  data_set
}

#[test]
fn default_config_scenario() {
  let mut data_set = test_record();

  let audit = data_set
    .anonymize(&AnonymizationConfig::default().emit_audit(true))
    .unwrap();

  // Person names and the Patient ID carry the substitute identifier
  assert_eq!(
    data_set.get_string(dictionary::PATIENT_NAME.tag),
    Ok("anonymous")
  );
  assert_eq!(
    data_set.get_string(dictionary::PATIENT_ID.tag),
    Ok("anonymous")
  );

  // The overlay element is gone, the private element is kept
  assert!(!data_set.has(dictionary::OVERLAY_DATA.tag));
  assert!(data_set.has(DataElementTag::new(0x0009, 0x0010)));

  // Clinical content is untouched
  assert_eq!(data_set.get_string(dictionary::MODALITY.tag), Ok("MR"));

  assert_eq!(audit.patient_name().len(), 1);
  assert_eq!(
    audit.patient_name().get("(0010,0010)"),
    Some(&"\"Doe^John\"".to_string())
  );
  assert_eq!(audit.misc().len(), 1);
  assert_eq!(
    audit.misc().get("(6000,3000)"),
    Some(&"[64 bytes]".to_string())
  );
  assert!(audit.removed_private().is_empty());
}

#[test]
fn anonymization_is_idempotent() {
  let config = AnonymizationConfig::default().substitute_identifier("subject");

  let mut data_set = test_record();
  data_set.insert_string(
    dictionary::STUDY_DATE.tag,
    ValueRepresentation::Date,
    "20240101",
  );
  data_set.insert_string(
    dictionary::INSTITUTION_NAME.tag,
    ValueRepresentation::LongString,
    "General Hospital",
  );

  data_set.anonymize(&config).unwrap();
  let first_output = data_set.clone();

  data_set.anonymize(&config).unwrap();

  assert_eq!(data_set, first_output);
}

#[test]
fn audit_has_one_entry_per_mutation() {
  let mut data_set = test_record();
  data_set.insert_string(
    dictionary::INSTITUTION_NAME.tag,
    ValueRepresentation::LongString,
    "General Hospital",
  );
  data_set.insert_string(
    dictionary::STUDY_DATE.tag,
    ValueRepresentation::Date,
    "20240101",
  );
  data_set.insert(
    dictionary::CURVE_DATA.tag,
    DataElementValue::new_binary(
      ValueRepresentation::OtherByteString,
      vec![1, 2, 3, 4],
    ),
  );

  let audit = data_set
    .anonymize(
      &AnonymizationConfig::default()
        .remove_private_tags(true)
        .emit_audit(true),
    )
    .unwrap();

  // One patient name substitution
  assert_eq!(audit.patient_name().len(), 1);

  // One named removal: Institution Name
  assert_eq!(audit.removed_public().len(), 1);

  // Two named blankings: Study Date and Patient ID
  assert_eq!(audit.blank_public().len(), 2);
  assert_eq!(
    audit.blank_public().get("(0010,0020)"),
    Some(&"\"12345\"".to_string())
  );

  // One curve and one overlay element
  assert_eq!(audit.misc().len(), 2);

  // One private element
  assert_eq!(audit.removed_private().len(), 1);
  assert_eq!(
    audit.removed_private().get("(0009,0010)"),
    Some(&"\"vendor data\"".to_string())
  );

  // The diffusion bucket is reserved and stays empty
  assert!(audit.diffusion().is_empty());
}

#[test]
fn disabled_audit_does_not_change_mutations() {
  let mut audited = test_record();
  let mut unaudited = test_record();

  let audit_on = audited
    .anonymize(&AnonymizationConfig::default().emit_audit(true))
    .unwrap();
  let audit_off =
    unaudited.anonymize(&AnonymizationConfig::default()).unwrap();

  assert_eq!(audited, unaudited);
  assert!(!audit_on.is_empty());
  assert!(audit_off.is_empty());
}

#[test]
fn audit_report_json_has_six_buckets() {
  let mut data_set = test_record();

  let audit = data_set
    .anonymize(&AnonymizationConfig::default().emit_audit(true))
    .unwrap();

  let json: serde_json::Value =
    serde_json::from_str(&audit.to_json().unwrap()).unwrap();

  let object = json.as_object().unwrap();
  assert_eq!(object.len(), 6);
  for bucket in [
    "removed_private",
    "removed_public",
    "blank_public",
    "diffusion",
    "patient_name",
    "misc",
  ] {
    assert!(object.contains_key(bucket), "missing bucket '{}'", bucket);
  }

  assert_eq!(
    json["patient_name"]["(0010,0010)"],
    serde_json::json!("\"Doe^John\"")
  );
}

#[test]
fn custom_policy_applies_to_nested_sequences() {
  let policy = dcmdeid_anonymize::AnonymizationPolicy::new(
    &[("InstitutionName", DataElementTag::new(0x0008, 0x0080))],
    &[("PatientID", DataElementTag::new(0x0010, 0x0020))],
  )
  .unwrap();

  let mut item = DataSet::new();
  item.insert_string(
    dictionary::INSTITUTION_NAME.tag,
    ValueRepresentation::LongString,
    "General Hospital",
  );

  let mut data_set = DataSet::new();
  data_set.insert_string(
    dictionary::PATIENT_ID.tag,
    ValueRepresentation::LongString,
    "12345",
  );
  data_set.insert(
    dictionary::REFERENCED_IMAGE_SEQUENCE.tag,
    DataElementValue::new_sequence(vec![item]),
  );

  let anonymizer = Anonymizer::with_policy(policy);
  anonymizer
    .anonymize(&mut data_set, &AnonymizationConfig::default())
    .unwrap();

  let items = data_set
    .get(dictionary::REFERENCED_IMAGE_SEQUENCE.tag)
    .unwrap()
    .sequence_items()
    .unwrap();

  assert!(!items[0].has(dictionary::INSTITUTION_NAME.tag));
}
