//! The de-identification policy: which named data elements are removed
//! outright and which are blanked but retained.

#[cfg(not(feature = "std"))]
use alloc::{
  format,
  string::{String, ToString},
  vec,
  vec::Vec,
};

use dcmdeid_core::{DataElementTag, DcmDeidError, dictionary};

/// Optional (type 3) data elements that carry identifying information and are
/// deleted outright.
///
const DATA_ELEMENTS_TO_REMOVE: [(&str, DataElementTag); 19] = [
  ("AcquisitionDate", DataElementTag::new(0x0008, 0x0022)),
  ("OperatorsName", DataElementTag::new(0x0008, 0x1070)),
  ("PerformingPhysicianName", DataElementTag::new(0x0008, 0x1050)),
  ("InstitutionalDepartmentName", DataElementTag::new(0x0008, 0x1040)),
  ("PhysiciansOfRecord", DataElementTag::new(0x0008, 0x1048)),
  (
    "PhysiciansOfRecordIdentificationSequence",
    DataElementTag::new(0x0008, 0x1049),
  ),
  (
    "PerformingPhysicianIdentificationSequence",
    DataElementTag::new(0x0008, 0x1052),
  ),
  (
    "OperatorIdentificationSequence",
    DataElementTag::new(0x0008, 0x1072),
  ),
  ("ReferringPhysicianAddress", DataElementTag::new(0x0008, 0x0092)),
  (
    "ReferringPhysicianTelephoneNumbers",
    DataElementTag::new(0x0008, 0x0094),
  ),
  (
    "ReferringPhysicianIdentificationSequence",
    DataElementTag::new(0x0008, 0x0096),
  ),
  ("InstitutionName", DataElementTag::new(0x0008, 0x0080)),
  ("InstitutionAddress", DataElementTag::new(0x0008, 0x0081)),
  ("InstanceCreationDate", DataElementTag::new(0x0008, 0x0012)),
  ("OtherPatientIDs", DataElementTag::new(0x0010, 0x1000)),
  ("OtherPatientNames", DataElementTag::new(0x0010, 0x1001)),
  ("PatientComments", DataElementTag::new(0x0010, 0x4000)),
  ("DateOfSecondaryCapture", DataElementTag::new(0x0018, 0x1012)),
  ("RequestingService", DataElementTag::new(0x0032, 0x1033)),
];

/// Mandatory (type 2) data elements that carry identifying information. These
/// must stay present in the data set, so their values are blanked instead of
/// the element being deleted.
///
const DATA_ELEMENTS_TO_BLANK: [(&str, DataElementTag); 35] = [
  (
    "ClinicalTrialCoordinatingCenterName",
    DataElementTag::new(0x0012, 0x0060),
  ),
  ("PatientIdentityRemoved", DataElementTag::new(0x0012, 0x0062)),
  (
    "ClinicalTrialSubjectReadingID",
    DataElementTag::new(0x0012, 0x0042),
  ),
  ("ClinicalTrialSponsorName", DataElementTag::new(0x0012, 0x0010)),
  ("ClinicalTrialSubjectID", DataElementTag::new(0x0012, 0x0040)),
  ("ClinicalTrialSiteName", DataElementTag::new(0x0012, 0x0031)),
  ("ClinicalTrialSiteID", DataElementTag::new(0x0012, 0x0030)),
  ("AdditionalPatientHistory", DataElementTag::new(0x0010, 0x21B0)),
  ("PatientReligiousPreference", DataElementTag::new(0x0010, 0x21F0)),
  ("ResponsiblePerson", DataElementTag::new(0x0010, 0x2297)),
  ("ResponsiblePersonRole", DataElementTag::new(0x0010, 0x2298)),
  ("ResponsibleOrganization", DataElementTag::new(0x0010, 0x2299)),
  ("BranchOfService", DataElementTag::new(0x0010, 0x1081)),
  ("MedicalRecordLocator", DataElementTag::new(0x0010, 0x1090)),
  ("MedicalAlerts", DataElementTag::new(0x0010, 0x2000)),
  ("Allergies", DataElementTag::new(0x0010, 0x2110)),
  ("CountryOfResidence", DataElementTag::new(0x0010, 0x2150)),
  ("RegionOfResidence", DataElementTag::new(0x0010, 0x2152)),
  ("PatientTelephoneNumbers", DataElementTag::new(0x0010, 0x2154)),
  ("MilitaryRank", DataElementTag::new(0x0010, 0x1080)),
  ("PatientMotherBirthName", DataElementTag::new(0x0010, 0x1060)),
  ("PatientAddress", DataElementTag::new(0x0010, 0x1040)),
  ("PatientBirthName", DataElementTag::new(0x0010, 0x1005)),
  ("IssuerOfPatientID", DataElementTag::new(0x0010, 0x0021)),
  ("ReferringPhysicianName", DataElementTag::new(0x0008, 0x0090)),
  ("ContentDate", DataElementTag::new(0x0008, 0x0023)),
  ("AcquisitionDateTime", DataElementTag::new(0x0008, 0x002A)),
  ("SeriesDate", DataElementTag::new(0x0008, 0x0021)),
  ("StudyDate", DataElementTag::new(0x0008, 0x0020)),
  ("PatientBirthDate", DataElementTag::new(0x0010, 0x0030)),
  ("StationName", DataElementTag::new(0x0008, 0x1010)),
  ("PatientID", DataElementTag::new(0x0010, 0x0020)),
  ("StudyDescription", DataElementTag::new(0x0008, 0x1030)),
  ("ManufacturerModelName", DataElementTag::new(0x0008, 0x1090)),
  ("DeviceSerialNumber", DataElementTag::new(0x0018, 0x1000)),
];

/// A single validated policy entry: a dictionary keyword and the tag it
/// resolves to.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolicyEntry {
  pub name: &'static str,
  pub tag: DataElementTag,
}

/// The validated de-identification policy. Holds the ordered list of named
/// data elements to remove and the ordered list to blank. A name never
/// appears in both lists.
///
/// Construction validates every entry against the data element dictionary,
/// so an invalid policy fails engine startup rather than surfacing during a
/// run.
///
#[derive(Clone, Debug, PartialEq)]
pub struct AnonymizationPolicy {
  remove: Vec<PolicyEntry>,
  blank: Vec<PolicyEntry>,
}

impl AnonymizationPolicy {
  /// Creates the standard de-identification policy from the built-in remove
  /// and blank tables.
  ///
  pub fn standard() -> Result<Self, PolicyError> {
    Self::new(&DATA_ELEMENTS_TO_REMOVE, &DATA_ELEMENTS_TO_BLANK)
  }

  /// Creates a policy from custom remove and blank tables, validating that
  /// every name resolves in the dictionary to its stated tag and that no
  /// name appears in both tables.
  ///
  pub fn new(
    remove: &[(&'static str, DataElementTag)],
    blank: &[(&'static str, DataElementTag)],
  ) -> Result<Self, PolicyError> {
    let remove = validate_entries(remove)?;
    let blank = validate_entries(blank)?;

    for entry in remove.iter() {
      if blank.iter().any(|other| other.name == entry.name) {
        return Err(PolicyError::DuplicateName {
          name: entry.name.to_string(),
        });
      }
    }

    Ok(Self { remove, blank })
  }

  /// The data elements that are deleted outright.
  ///
  pub fn remove_entries(&self) -> &[PolicyEntry] {
    &self.remove
  }

  /// The data elements whose values are blanked.
  ///
  pub fn blank_entries(&self) -> &[PolicyEntry] {
    &self.blank
  }

  /// Returns whether the given tag is in the remove table.
  ///
  pub fn is_removed(&self, tag: DataElementTag) -> bool {
    self.remove.iter().any(|entry| entry.tag == tag)
  }

  /// Returns whether the given tag is in the blank table.
  ///
  pub fn is_blanked(&self, tag: DataElementTag) -> bool {
    self.blank.iter().any(|entry| entry.tag == tag)
  }
}

fn validate_entries(
  entries: &[(&'static str, DataElementTag)],
) -> Result<Vec<PolicyEntry>, PolicyError> {
  let mut validated = Vec::with_capacity(entries.len());

  for &(name, tag) in entries.iter() {
    let item = dictionary::find_by_keyword(name).ok_or_else(|| {
      PolicyError::UnresolvedName {
        name: name.to_string(),
      }
    })?;

    if item.tag != tag {
      return Err(PolicyError::TagMismatch {
        name: name.to_string(),
        configured: tag,
        resolved: item.tag,
      });
    }

    validated.push(PolicyEntry { name, tag });
  }

  Ok(validated)
}

/// An error in the de-identification policy configuration, detected when the
/// policy is constructed.
///
#[derive(Clone, Debug, PartialEq)]
pub enum PolicyError {
  /// A policy entry's name does not resolve to any data element in the
  /// dictionary.
  UnresolvedName { name: String },

  /// A policy entry's name resolves in the dictionary to a different tag
  /// than the one configured for it.
  TagMismatch {
    name: String,
    configured: DataElementTag,
    resolved: DataElementTag,
  },

  /// A name appears in both the remove table and the blank table.
  DuplicateName { name: String },
}

impl core::fmt::Display for PolicyError {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    match self {
      PolicyError::UnresolvedName { name } => {
        write!(f, "Policy entry '{}' is not in the dictionary", name)
      }

      PolicyError::TagMismatch {
        name,
        configured,
        resolved,
      } => write!(
        f,
        "Policy entry '{}' is configured with tag {} but resolves to {}",
        name, configured, resolved,
      ),

      PolicyError::DuplicateName { name } => write!(
        f,
        "Policy entry '{}' is in both the remove and blank tables",
        name,
      ),
    }
  }
}

impl DcmDeidError for PolicyError {
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    vec![
      format!("De-identification policy error {}", task_description),
      "".to_string(),
      format!("  Details: {}", self),
    ]
  }
}
