//! Anonymization of data sets by substituting, blanking, or removing data
//! elements that identify the patient, or potentially contribute to
//! identification of the patient.
//!
//! The engine consumes an already-parsed [`DataSet`] along with an
//! [`AnonymizationConfig`], mutates the data set in place, and returns an
//! [`AuditReport`] mapping every affected data element to its original value.
//! Reading and writing DICOM P10 bytes is the responsibility of an external
//! codec.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(not(feature = "std"))]
use alloc::{
  format,
  string::{String, ToString},
  vec,
  vec::Vec,
};

pub mod audit;
pub mod config;
pub mod policy;
pub mod tag_classifier;
pub mod walker;

pub use audit::{AuditBucket, AuditReport};
pub use config::AnonymizationConfig;
pub use policy::{AnonymizationPolicy, PolicyEntry, PolicyError};

use dcmdeid_core::{
  DataElementValue, DataSet, DcmDeidError, dictionary,
};

/// The group swept by the unconditional procedure-information blanking pass.
const PROCEDURE_GROUP: u16 = 0x0040;

/// The first repetition of the repeating curve groups.
const CURVE_GROUP: u16 = 0x5000;

/// Anonymizes data sets using a validated de-identification policy.
///
/// The policy is validated once when the anonymizer is constructed. Each call
/// to [`Anonymizer::anonymize`] then runs the following passes over the data
/// set, in order, visiting data elements nested in sequences as well:
///
/// 1. Substitute all person name values with the substitute identifier.
/// 2. Blank the value of every data element in group `0x0040`.
/// 3. Delete the data elements named in the policy's remove table.
/// 4. Blank the data elements named in the policy's blank table.
/// 5. Set the Patient ID to the substitute identifier.
/// 6. Delete curve data elements, if enabled.
/// 7. Delete overlay data elements, if enabled.
/// 8. Delete private data elements, if enabled.
///
/// The original value of every affected element is recorded in the audit
/// report before the element is mutated.
///
pub struct Anonymizer {
  policy: AnonymizationPolicy,
}

impl Anonymizer {
  /// Creates a new anonymizer with the standard de-identification policy.
  ///
  pub fn new() -> Result<Self, PolicyError> {
    Ok(Self {
      policy: AnonymizationPolicy::standard()?,
    })
  }

  /// Creates a new anonymizer with a custom de-identification policy.
  ///
  pub fn with_policy(policy: AnonymizationPolicy) -> Self {
    Self { policy }
  }

  /// The active de-identification policy.
  ///
  pub fn policy(&self) -> &AnonymizationPolicy {
    &self.policy
  }

  /// Anonymizes the given data set in place and returns the audit report for
  /// the run. The report is populated only when
  /// [`AnonymizationConfig::emit_audit`] is enabled.
  ///
  /// Identical inputs always produce an identical mutated data set and an
  /// identical audit report.
  ///
  pub fn anonymize(
    &self,
    data_set: &mut DataSet,
    config: &AnonymizationConfig,
  ) -> Result<AuditReport, AnonymizeError> {
    // A record with no Patient ID at all is not a valid subject record.
    // Checked up front so that no partial mutation is possible.
    if !data_set.has(dictionary::PATIENT_ID.tag) {
      return Err(AnonymizeError::InvalidRecord {
        details: "Data set has no Patient ID data element".to_string(),
      });
    }

    let mut audit = AuditReport::new(config.emit_audit);

    substitute_person_names(
      data_set,
      &config.substitute_identifier,
      &mut audit,
    );

    blank_procedure_group(data_set, &mut audit);

    apply_named_removals(data_set, &self.policy, &mut audit);
    apply_named_blanking(data_set, &self.policy, &mut audit);

    // The Patient ID is in the blank table, so this has to happen after the
    // blanking pass for the substitute identifier to survive
    data_set.insert_string(
      dictionary::PATIENT_ID.tag,
      dictionary::PATIENT_ID.vr,
      &config.substitute_identifier,
    );

    if config.remove_curves {
      remove_curves(data_set, &mut audit);
    }

    if config.remove_overlays {
      remove_overlays(data_set, &mut audit);
    }

    if config.remove_private_tags {
      remove_private_data_elements(data_set, &mut audit);
    }

    Ok(audit)
  }
}

/// Replaces the value of every `PersonName` data element, including those
/// nested in sequences, with the substitute identifier.
///
fn substitute_person_names(
  data_set: &mut DataSet,
  substitute_identifier: &str,
  audit: &mut AuditReport,
) {
  walker::walk(data_set, &mut |data_set, tag| {
    let Some(value) = data_set.get(tag) else {
      return;
    };

    if tag_classifier::is_person_name(value.value_representation()) {
      audit.record(AuditBucket::PatientName, tag, value);

      data_set
        .insert(tag, DataElementValue::new_person_name(substitute_identifier));
    }
  });
}

/// Empties the value of every data element in group `0x0040`, which carries
/// procedure and scheduling information. The elements themselves are kept.
///
fn blank_procedure_group(data_set: &mut DataSet, audit: &mut AuditReport) {
  walker::walk(data_set, &mut |data_set, tag| {
    if !tag_classifier::is_group(tag, PROCEDURE_GROUP) {
      return;
    }

    if let Some(value) = data_set.get(tag) {
      audit.record(AuditBucket::RemovedPublic, tag, value);

      let emptied = value.emptied();
      data_set.insert(tag, emptied);
    }
  });
}

/// Deletes every data element named in the policy's remove table. Elements
/// absent from the data set are skipped.
///
fn apply_named_removals(
  data_set: &mut DataSet,
  policy: &AnonymizationPolicy,
  audit: &mut AuditReport,
) {
  walker::walk(data_set, &mut |data_set, tag| {
    if !policy.is_removed(tag) {
      return;
    }

    if let Some(value) = data_set.get(tag) {
      audit.record(AuditBucket::RemovedPublic, tag, value);
      data_set.delete(tag);
    }
  });
}

/// Empties the value of every data element named in the policy's blank
/// table, keeping the element itself. Elements absent from the data set are
/// skipped.
///
fn apply_named_blanking(
  data_set: &mut DataSet,
  policy: &AnonymizationPolicy,
  audit: &mut AuditReport,
) {
  walker::walk(data_set, &mut |data_set, tag| {
    if !policy.is_blanked(tag) {
      return;
    }

    if let Some(value) = data_set.get(tag) {
      audit.record(AuditBucket::BlankPublic, tag, value);

      let emptied = value.emptied();
      data_set.insert(tag, emptied);
    }
  });
}

/// Deletes every data element in the first repeating curve group.
///
fn remove_curves(data_set: &mut DataSet, audit: &mut AuditReport) {
  walker::walk(data_set, &mut |data_set, tag| {
    if !tag_classifier::is_group(tag, CURVE_GROUP) {
      return;
    }

    if let Some(value) = data_set.get(tag) {
      audit.record(AuditBucket::Misc, tag, value);
      data_set.delete(tag);
    }
  });
}

/// Deletes every data element whose dictionary name identifies it as an
/// overlay.
///
fn remove_overlays(data_set: &mut DataSet, audit: &mut AuditReport) {
  walker::walk(data_set, &mut |data_set, tag| {
    if !tag_classifier::is_overlay(tag) {
      return;
    }

    if let Some(value) = data_set.get(tag) {
      audit.record(AuditBucket::Misc, tag, value);
      data_set.delete(tag);
    }
  });
}

/// Deletes every private data element, i.e. every element with an odd group
/// number.
///
fn remove_private_data_elements(
  data_set: &mut DataSet,
  audit: &mut AuditReport,
) {
  walker::walk(data_set, &mut |data_set, tag| {
    if !tag_classifier::is_private(tag) {
      return;
    }

    if let Some(value) = data_set.get(tag) {
      audit.record(AuditBucket::RemovedPrivate, tag, value);
      data_set.delete(tag);
    }
  });
}

/// An error that occurred during an anonymization run.
///
#[derive(Clone, Debug, PartialEq)]
pub enum AnonymizeError {
  /// The input data set lacks the minimal structure needed to anonymize it.
  /// No mutation has been applied when this error is returned.
  InvalidRecord { details: String },

  /// The de-identification policy failed validation.
  InvalidPolicy(PolicyError),
}

impl core::fmt::Display for AnonymizeError {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    match self {
      AnonymizeError::InvalidRecord { details } => {
        write!(f, "Invalid record, details: {}", details)
      }
      AnonymizeError::InvalidPolicy(e) => e.fmt(f),
    }
  }
}

impl DcmDeidError for AnonymizeError {
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    vec![
      format!("Anonymization error {}", task_description),
      "".to_string(),
      format!("  Details: {}", self),
    ]
  }
}

/// Adds functions to [`DataSet`] to perform anonymization.
///
pub trait DataSetAnonymizeExtensions {
  /// Anonymizes a data set in place using the standard de-identification
  /// policy and the given configuration.
  ///
  fn anonymize(
    &mut self,
    config: &AnonymizationConfig,
  ) -> Result<AuditReport, AnonymizeError>;
}

impl DataSetAnonymizeExtensions for DataSet {
  fn anonymize(
    &mut self,
    config: &AnonymizationConfig,
  ) -> Result<AuditReport, AnonymizeError> {
    let anonymizer =
      Anonymizer::new().map_err(AnonymizeError::InvalidPolicy)?;

    anonymizer.anonymize(self, config)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use dcmdeid_core::{DataElementTag, ValueRepresentation};

  fn test_data_set() -> DataSet {
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

    data_set
  }

  #[test]
  fn person_name_substitution_test() {
    let mut data_set = test_data_set();

    let audit = data_set
      .anonymize(&AnonymizationConfig::default().emit_audit(true))
      .unwrap();

    assert_eq!(
      data_set.get_string(dictionary::PATIENT_NAME.tag),
      Ok("anonymous")
    );
    assert_eq!(
      audit.patient_name().get("(0010,0010)"),
      Some(&"\"Doe^John\"".to_string())
    );
  }

  #[test]
  fn person_name_substitution_in_sequence_test() {
    // The same tag recurring at a different nesting depth is classified and
    // mutated independently
    let mut item = DataSet::new();
    item.insert_string(
      dictionary::PATIENT_NAME.tag,
      ValueRepresentation::PersonName,
      "Smith^Jane",
    );

    let mut data_set = test_data_set();
    data_set.insert(
      dictionary::REFERENCED_IMAGE_SEQUENCE.tag,
      DataElementValue::new_sequence(vec![item]),
    );

    let audit = data_set
      .anonymize(&AnonymizationConfig::default().emit_audit(true))
      .unwrap();

    let items = data_set
      .get(dictionary::REFERENCED_IMAGE_SEQUENCE.tag)
      .unwrap()
      .sequence_items()
      .unwrap();

    assert_eq!(
      items[0].get_string(dictionary::PATIENT_NAME.tag),
      Ok("anonymous")
    );

    // Both occurrences were substituted, but the audit keys collide because
    // the rendered tag identity carries no path information
    assert_eq!(audit.patient_name().len(), 1);
  }

  #[test]
  fn procedure_group_blanking_test() {
    let mut data_set = test_data_set();
    data_set.insert_string(
      dictionary::PERFORMED_PROCEDURE_STEP_START_DATE.tag,
      ValueRepresentation::Date,
      "20240101",
    );

    let audit = data_set
      .anonymize(&AnonymizationConfig::default().emit_audit(true))
      .unwrap();

    let value = data_set
      .get(dictionary::PERFORMED_PROCEDURE_STEP_START_DATE.tag)
      .unwrap();
    assert!(value.is_empty());
    assert_eq!(value.value_representation(), ValueRepresentation::Date);

    assert_eq!(
      audit.removed_public().get("(0040,0244)"),
      Some(&"\"20240101\"".to_string())
    );
  }

  #[test]
  fn patient_id_override_test() {
    let mut data_set = test_data_set();

    data_set
      .anonymize(&AnonymizationConfig::default())
      .unwrap();

    assert_eq!(
      data_set.get_string(dictionary::PATIENT_ID.tag),
      Ok("anonymous")
    );
  }

  #[test]
  fn named_removal_test() {
    let mut data_set = test_data_set();
    data_set.insert_string(
      dictionary::INSTITUTION_NAME.tag,
      ValueRepresentation::LongString,
      "General Hospital",
    );

    let audit = data_set
      .anonymize(&AnonymizationConfig::default().emit_audit(true))
      .unwrap();

    assert!(!data_set.has(dictionary::INSTITUTION_NAME.tag));
    assert_eq!(
      audit.removed_public().get("(0008,0080)"),
      Some(&"\"General Hospital\"".to_string())
    );
  }

  #[test]
  fn named_blanking_test() {
    let mut data_set = test_data_set();
    data_set.insert_string(
      dictionary::STUDY_DATE.tag,
      ValueRepresentation::Date,
      "20240101",
    );

    let audit = data_set
      .anonymize(&AnonymizationConfig::default().emit_audit(true))
      .unwrap();

    let value = data_set.get(dictionary::STUDY_DATE.tag).unwrap();
    assert!(value.is_empty());
    assert_eq!(value.value_representation(), ValueRepresentation::Date);

    assert_eq!(
      audit.blank_public().get("(0008,0020)"),
      Some(&"\"20240101\"".to_string())
    );
  }

  #[test]
  fn curve_removal_test() {
    let mut data_set = test_data_set();
    data_set.insert(
      dictionary::CURVE_DATA.tag,
      DataElementValue::new_binary(
        ValueRepresentation::OtherByteString,
        vec![0; 16],
      ),
    );

    let audit = data_set
      .anonymize(&AnonymizationConfig::default().emit_audit(true))
      .unwrap();

    assert!(!data_set.has(dictionary::CURVE_DATA.tag));
    assert_eq!(
      audit.misc().get("(5000,3000)"),
      Some(&"[16 bytes]".to_string())
    );
  }

  #[test]
  fn curves_kept_when_disabled_test() {
    let mut data_set = test_data_set();
    data_set.insert(
      dictionary::CURVE_DATA.tag,
      DataElementValue::new_binary(
        ValueRepresentation::OtherByteString,
        vec![0; 16],
      ),
    );

    data_set
      .anonymize(&AnonymizationConfig::default().remove_curves(false))
      .unwrap();

    assert!(data_set.has(dictionary::CURVE_DATA.tag));
  }

  #[test]
  fn overlay_removal_deletes_the_element_test() {
    let mut data_set = test_data_set();

    // Overlay elements in a repetition other than the first
    let overlay_rows_tag = dictionary::OVERLAY_ROWS.tag.with_group(0x6002);
    data_set.insert(
      overlay_rows_tag,
      DataElementValue::new_binary(ValueRepresentation::UnsignedShort, vec![
        0x00, 0x04,
      ]),
    );

    let audit = data_set
      .anonymize(&AnonymizationConfig::default().emit_audit(true))
      .unwrap();

    assert!(!data_set.has(overlay_rows_tag));
    assert_eq!(
      audit.misc().get("(6002,0010)"),
      Some(&"1024".to_string())
    );
  }

  #[test]
  fn private_data_elements_kept_by_default_test() {
    let private_tag = DataElementTag::new(0x0009, 0x0001);

    let mut data_set = test_data_set();
    data_set.insert_string(
      private_tag,
      ValueRepresentation::LongString,
      "vendor data",
    );

    let audit = data_set
      .anonymize(&AnonymizationConfig::default().emit_audit(true))
      .unwrap();

    assert!(data_set.has(private_tag));
    assert!(audit.removed_private().is_empty());
  }

  #[test]
  fn private_data_element_removal_test() {
    let private_tag = DataElementTag::new(0x0009, 0x0001);

    let mut data_set = test_data_set();
    data_set.insert_string(
      private_tag,
      ValueRepresentation::LongString,
      "vendor data",
    );

    let audit = data_set
      .anonymize(
        &AnonymizationConfig::default()
          .remove_private_tags(true)
          .emit_audit(true),
      )
      .unwrap();

    assert!(!data_set.has(private_tag));
    assert_eq!(
      audit.removed_private().get("(0009,0001)"),
      Some(&"\"vendor data\"".to_string())
    );
  }

  #[test]
  fn invalid_record_test() {
    let mut data_set = DataSet::new();
    data_set.insert_string(
      dictionary::PATIENT_NAME.tag,
      ValueRepresentation::PersonName,
      "Doe^John",
    );

    let result = data_set.anonymize(&AnonymizationConfig::default());

    assert_eq!(
      result,
      Err(AnonymizeError::InvalidRecord {
        details: "Data set has no Patient ID data element".to_string()
      })
    );

    // No mutation was applied
    assert_eq!(
      data_set.get_string(dictionary::PATIENT_NAME.tag),
      Ok("Doe^John")
    );
  }

  #[test]
  fn no_audit_content_when_disabled_test() {
    let mut data_set = test_data_set();
    let mut expected = test_data_set();

    let audit =
      data_set.anonymize(&AnonymizationConfig::default()).unwrap();
    let audit_enabled = expected
      .anonymize(&AnonymizationConfig::default().emit_audit(true))
      .unwrap();

    // Mutations are identical, only the report content differs
    assert_eq!(data_set, expected);
    assert!(audit.is_empty());
    assert!(!audit_enabled.is_empty());
  }
}
