//! Provides a dictionary of the data elements defined by the DICOM standard
//! that are relevant to de-identification, along with the subset of common
//! elements used by tests and diagnostics.
//!
//! Lookup by tag canonicalizes the repeating curve (`0x50xx`) and overlay
//! (`0x60xx`) groups so that all repetitions resolve to the same dictionary
//! item.

#[cfg(not(feature = "std"))]
use alloc::{
  format,
  string::{String, ToString},
};

use crate::{DataElementTag, ValueRepresentation};

/// A single data element in the DICOM data element dictionary.
///
pub struct Item {
  pub tag: DataElementTag,
  pub name: &'static str,
  pub keyword: &'static str,
  pub vr: ValueRepresentation,
}

macro_rules! dictionary_item {
  ($const_name:ident, $group:expr, $element:expr, $name:expr, $keyword:expr, $vr:ident) => {
    pub const $const_name: Item = Item {
      tag: DataElementTag {
        group: $group,
        element: $element,
      },
      name: $name,
      keyword: $keyword,
      vr: ValueRepresentation::$vr,
    };
  };
}

dictionary_item!(
  SPECIFIC_CHARACTER_SET,
  0x0008,
  0x0005,
  "Specific Character Set",
  "SpecificCharacterSet",
  CodeString
);
dictionary_item!(
  INSTANCE_CREATION_DATE,
  0x0008,
  0x0012,
  "Instance Creation Date",
  "InstanceCreationDate",
  Date
);
dictionary_item!(
  SOP_CLASS_UID,
  0x0008,
  0x0016,
  "SOP Class UID",
  "SOPClassUID",
  UniqueIdentifier
);
dictionary_item!(
  SOP_INSTANCE_UID,
  0x0008,
  0x0018,
  "SOP Instance UID",
  "SOPInstanceUID",
  UniqueIdentifier
);
dictionary_item!(
  STUDY_DATE,
  0x0008,
  0x0020,
  "Study Date",
  "StudyDate",
  Date
);
dictionary_item!(
  SERIES_DATE,
  0x0008,
  0x0021,
  "Series Date",
  "SeriesDate",
  Date
);
dictionary_item!(
  ACQUISITION_DATE,
  0x0008,
  0x0022,
  "Acquisition Date",
  "AcquisitionDate",
  Date
);
dictionary_item!(
  CONTENT_DATE,
  0x0008,
  0x0023,
  "Content Date",
  "ContentDate",
  Date
);
dictionary_item!(
  ACQUISITION_DATE_TIME,
  0x0008,
  0x002A,
  "Acquisition DateTime",
  "AcquisitionDateTime",
  DateTime
);
dictionary_item!(
  MODALITY,
  0x0008,
  0x0060,
  "Modality",
  "Modality",
  CodeString
);
dictionary_item!(
  INSTITUTION_NAME,
  0x0008,
  0x0080,
  "Institution Name",
  "InstitutionName",
  LongString
);
dictionary_item!(
  INSTITUTION_ADDRESS,
  0x0008,
  0x0081,
  "Institution Address",
  "InstitutionAddress",
  ShortText
);
dictionary_item!(
  REFERRING_PHYSICIAN_NAME,
  0x0008,
  0x0090,
  "Referring Physician's Name",
  "ReferringPhysicianName",
  PersonName
);
dictionary_item!(
  REFERRING_PHYSICIAN_ADDRESS,
  0x0008,
  0x0092,
  "Referring Physician's Address",
  "ReferringPhysicianAddress",
  ShortText
);
dictionary_item!(
  REFERRING_PHYSICIAN_TELEPHONE_NUMBERS,
  0x0008,
  0x0094,
  "Referring Physician's Telephone Numbers",
  "ReferringPhysicianTelephoneNumbers",
  ShortString
);
dictionary_item!(
  REFERRING_PHYSICIAN_IDENTIFICATION_SEQUENCE,
  0x0008,
  0x0096,
  "Referring Physician Identification Sequence",
  "ReferringPhysicianIdentificationSequence",
  Sequence
);
dictionary_item!(
  STATION_NAME,
  0x0008,
  0x1010,
  "Station Name",
  "StationName",
  ShortString
);
dictionary_item!(
  STUDY_DESCRIPTION,
  0x0008,
  0x1030,
  "Study Description",
  "StudyDescription",
  LongString
);
dictionary_item!(
  INSTITUTIONAL_DEPARTMENT_NAME,
  0x0008,
  0x1040,
  "Institutional Department Name",
  "InstitutionalDepartmentName",
  LongString
);
dictionary_item!(
  PHYSICIANS_OF_RECORD,
  0x0008,
  0x1048,
  "Physician(s) of Record",
  "PhysiciansOfRecord",
  PersonName
);
dictionary_item!(
  PHYSICIANS_OF_RECORD_IDENTIFICATION_SEQUENCE,
  0x0008,
  0x1049,
  "Physician(s) of Record Identification Sequence",
  "PhysiciansOfRecordIdentificationSequence",
  Sequence
);
dictionary_item!(
  PERFORMING_PHYSICIAN_NAME,
  0x0008,
  0x1050,
  "Performing Physician's Name",
  "PerformingPhysicianName",
  PersonName
);
dictionary_item!(
  PERFORMING_PHYSICIAN_IDENTIFICATION_SEQUENCE,
  0x0008,
  0x1052,
  "Performing Physician Identification Sequence",
  "PerformingPhysicianIdentificationSequence",
  Sequence
);
dictionary_item!(
  OPERATORS_NAME,
  0x0008,
  0x1070,
  "Operators' Name",
  "OperatorsName",
  PersonName
);
dictionary_item!(
  OPERATOR_IDENTIFICATION_SEQUENCE,
  0x0008,
  0x1072,
  "Operator Identification Sequence",
  "OperatorIdentificationSequence",
  Sequence
);
dictionary_item!(
  MANUFACTURER_MODEL_NAME,
  0x0008,
  0x1090,
  "Manufacturer's Model Name",
  "ManufacturerModelName",
  LongString
);
dictionary_item!(
  REFERENCED_IMAGE_SEQUENCE,
  0x0008,
  0x1140,
  "Referenced Image Sequence",
  "ReferencedImageSequence",
  Sequence
);
dictionary_item!(
  PATIENT_NAME,
  0x0010,
  0x0010,
  "Patient's Name",
  "PatientName",
  PersonName
);
dictionary_item!(
  PATIENT_ID,
  0x0010,
  0x0020,
  "Patient ID",
  "PatientID",
  LongString
);
dictionary_item!(
  ISSUER_OF_PATIENT_ID,
  0x0010,
  0x0021,
  "Issuer of Patient ID",
  "IssuerOfPatientID",
  LongString
);
dictionary_item!(
  PATIENT_BIRTH_DATE,
  0x0010,
  0x0030,
  "Patient's Birth Date",
  "PatientBirthDate",
  Date
);
dictionary_item!(
  PATIENT_SEX,
  0x0010,
  0x0040,
  "Patient's Sex",
  "PatientSex",
  CodeString
);
dictionary_item!(
  OTHER_PATIENT_IDS,
  0x0010,
  0x1000,
  "Other Patient IDs",
  "OtherPatientIDs",
  LongString
);
dictionary_item!(
  OTHER_PATIENT_NAMES,
  0x0010,
  0x1001,
  "Other Patient Names",
  "OtherPatientNames",
  PersonName
);
dictionary_item!(
  PATIENT_BIRTH_NAME,
  0x0010,
  0x1005,
  "Patient's Birth Name",
  "PatientBirthName",
  PersonName
);
dictionary_item!(
  PATIENT_AGE,
  0x0010,
  0x1010,
  "Patient's Age",
  "PatientAge",
  AgeString
);
dictionary_item!(
  PATIENT_WEIGHT,
  0x0010,
  0x1030,
  "Patient's Weight",
  "PatientWeight",
  DecimalString
);
dictionary_item!(
  PATIENT_ADDRESS,
  0x0010,
  0x1040,
  "Patient's Address",
  "PatientAddress",
  LongString
);
dictionary_item!(
  PATIENT_MOTHER_BIRTH_NAME,
  0x0010,
  0x1060,
  "Patient's Mother's Birth Name",
  "PatientMotherBirthName",
  PersonName
);
dictionary_item!(
  MILITARY_RANK,
  0x0010,
  0x1080,
  "Military Rank",
  "MilitaryRank",
  LongString
);
dictionary_item!(
  BRANCH_OF_SERVICE,
  0x0010,
  0x1081,
  "Branch of Service",
  "BranchOfService",
  LongString
);
dictionary_item!(
  MEDICAL_RECORD_LOCATOR,
  0x0010,
  0x1090,
  "Medical Record Locator",
  "MedicalRecordLocator",
  LongString
);
dictionary_item!(
  MEDICAL_ALERTS,
  0x0010,
  0x2000,
  "Medical Alerts",
  "MedicalAlerts",
  LongString
);
dictionary_item!(
  ALLERGIES,
  0x0010,
  0x2110,
  "Allergies",
  "Allergies",
  LongString
);
dictionary_item!(
  COUNTRY_OF_RESIDENCE,
  0x0010,
  0x2150,
  "Country of Residence",
  "CountryOfResidence",
  LongString
);
dictionary_item!(
  REGION_OF_RESIDENCE,
  0x0010,
  0x2152,
  "Region of Residence",
  "RegionOfResidence",
  LongString
);
dictionary_item!(
  PATIENT_TELEPHONE_NUMBERS,
  0x0010,
  0x2154,
  "Patient's Telephone Numbers",
  "PatientTelephoneNumbers",
  ShortString
);
dictionary_item!(
  ADDITIONAL_PATIENT_HISTORY,
  0x0010,
  0x21B0,
  "Additional Patient History",
  "AdditionalPatientHistory",
  LongText
);
dictionary_item!(
  PATIENT_RELIGIOUS_PREFERENCE,
  0x0010,
  0x21F0,
  "Patient's Religious Preference",
  "PatientReligiousPreference",
  LongString
);
dictionary_item!(
  RESPONSIBLE_PERSON,
  0x0010,
  0x2297,
  "Responsible Person",
  "ResponsiblePerson",
  PersonName
);
dictionary_item!(
  RESPONSIBLE_PERSON_ROLE,
  0x0010,
  0x2298,
  "Responsible Person Role",
  "ResponsiblePersonRole",
  CodeString
);
dictionary_item!(
  RESPONSIBLE_ORGANIZATION,
  0x0010,
  0x2299,
  "Responsible Organization",
  "ResponsibleOrganization",
  LongString
);
dictionary_item!(
  PATIENT_COMMENTS,
  0x0010,
  0x4000,
  "Patient Comments",
  "PatientComments",
  LongText
);
dictionary_item!(
  CLINICAL_TRIAL_SPONSOR_NAME,
  0x0012,
  0x0010,
  "Clinical Trial Sponsor Name",
  "ClinicalTrialSponsorName",
  LongString
);
dictionary_item!(
  CLINICAL_TRIAL_SITE_ID,
  0x0012,
  0x0030,
  "Clinical Trial Site ID",
  "ClinicalTrialSiteID",
  LongString
);
dictionary_item!(
  CLINICAL_TRIAL_SITE_NAME,
  0x0012,
  0x0031,
  "Clinical Trial Site Name",
  "ClinicalTrialSiteName",
  LongString
);
dictionary_item!(
  CLINICAL_TRIAL_SUBJECT_ID,
  0x0012,
  0x0040,
  "Clinical Trial Subject ID",
  "ClinicalTrialSubjectID",
  LongString
);
dictionary_item!(
  CLINICAL_TRIAL_SUBJECT_READING_ID,
  0x0012,
  0x0042,
  "Clinical Trial Subject Reading ID",
  "ClinicalTrialSubjectReadingID",
  LongString
);
dictionary_item!(
  CLINICAL_TRIAL_COORDINATING_CENTER_NAME,
  0x0012,
  0x0060,
  "Clinical Trial Coordinating Center Name",
  "ClinicalTrialCoordinatingCenterName",
  LongString
);
dictionary_item!(
  PATIENT_IDENTITY_REMOVED,
  0x0012,
  0x0062,
  "Patient Identity Removed",
  "PatientIdentityRemoved",
  CodeString
);
dictionary_item!(
  DEVICE_SERIAL_NUMBER,
  0x0018,
  0x1000,
  "Device Serial Number",
  "DeviceSerialNumber",
  LongString
);
dictionary_item!(
  DATE_OF_SECONDARY_CAPTURE,
  0x0018,
  0x1012,
  "Date of Secondary Capture",
  "DateOfSecondaryCapture",
  Date
);
dictionary_item!(
  STUDY_INSTANCE_UID,
  0x0020,
  0x000D,
  "Study Instance UID",
  "StudyInstanceUID",
  UniqueIdentifier
);
dictionary_item!(
  SERIES_INSTANCE_UID,
  0x0020,
  0x000E,
  "Series Instance UID",
  "SeriesInstanceUID",
  UniqueIdentifier
);
dictionary_item!(ROWS, 0x0028, 0x0010, "Rows", "Rows", UnsignedShort);
dictionary_item!(
  COLUMNS,
  0x0028,
  0x0011,
  "Columns",
  "Columns",
  UnsignedShort
);
dictionary_item!(
  REQUESTING_SERVICE,
  0x0032,
  0x1033,
  "Requesting Service",
  "RequestingService",
  LongString
);
dictionary_item!(
  SCHEDULED_PERFORMING_PHYSICIAN_NAME,
  0x0040,
  0x0006,
  "Scheduled Performing Physician's Name",
  "ScheduledPerformingPhysicianName",
  PersonName
);
dictionary_item!(
  PERFORMED_PROCEDURE_STEP_START_DATE,
  0x0040,
  0x0244,
  "Performed Procedure Step Start Date",
  "PerformedProcedureStepStartDate",
  Date
);
dictionary_item!(
  PERFORMED_PROCEDURE_STEP_ID,
  0x0040,
  0x0253,
  "Performed Procedure Step ID",
  "PerformedProcedureStepID",
  ShortString
);
dictionary_item!(
  REQUEST_ATTRIBUTES_SEQUENCE,
  0x0040,
  0x0275,
  "Request Attributes Sequence",
  "RequestAttributesSequence",
  Sequence
);
dictionary_item!(
  REQUESTED_PROCEDURE_ID,
  0x0040,
  0x1001,
  "Requested Procedure ID",
  "RequestedProcedureID",
  ShortString
);
dictionary_item!(
  CURVE_DIMENSIONS,
  0x5000,
  0x0005,
  "Curve Dimensions",
  "CurveDimensions",
  UnsignedShort
);
dictionary_item!(
  NUMBER_OF_POINTS,
  0x5000,
  0x0010,
  "Number of Points",
  "NumberOfPoints",
  UnsignedShort
);
dictionary_item!(
  TYPE_OF_DATA,
  0x5000,
  0x0020,
  "Type of Data",
  "TypeOfData",
  CodeString
);
dictionary_item!(
  CURVE_DESCRIPTION,
  0x5000,
  0x0022,
  "Curve Description",
  "CurveDescription",
  LongString
);
dictionary_item!(
  CURVE_LABEL,
  0x5000,
  0x2500,
  "Curve Label",
  "CurveLabel",
  LongString
);
dictionary_item!(
  CURVE_DATA,
  0x5000,
  0x3000,
  "Curve Data",
  "CurveData",
  OtherByteString
);
dictionary_item!(
  OVERLAY_ROWS,
  0x6000,
  0x0010,
  "Overlay Rows",
  "OverlayRows",
  UnsignedShort
);
dictionary_item!(
  OVERLAY_COLUMNS,
  0x6000,
  0x0011,
  "Overlay Columns",
  "OverlayColumns",
  UnsignedShort
);
dictionary_item!(
  OVERLAY_DESCRIPTION,
  0x6000,
  0x0022,
  "Overlay Description",
  "OverlayDescription",
  LongString
);
dictionary_item!(
  OVERLAY_TYPE,
  0x6000,
  0x0040,
  "Overlay Type",
  "OverlayType",
  CodeString
);
dictionary_item!(
  OVERLAY_ORIGIN,
  0x6000,
  0x0050,
  "Overlay Origin",
  "OverlayOrigin",
  SignedShort
);
dictionary_item!(
  OVERLAY_BITS_ALLOCATED,
  0x6000,
  0x0100,
  "Overlay Bits Allocated",
  "OverlayBitsAllocated",
  UnsignedShort
);
dictionary_item!(
  OVERLAY_BIT_POSITION,
  0x6000,
  0x0102,
  "Overlay Bit Position",
  "OverlayBitPosition",
  UnsignedShort
);
dictionary_item!(
  OVERLAY_LABEL,
  0x6000,
  0x1500,
  "Overlay Label",
  "OverlayLabel",
  LongString
);
dictionary_item!(
  OVERLAY_DATA,
  0x6000,
  0x3000,
  "Overlay Data",
  "OverlayData",
  OtherWordString
);
dictionary_item!(
  PIXEL_DATA,
  0x7FE0,
  0x0010,
  "Pixel Data",
  "PixelData",
  OtherWordString
);

/// All items in the dictionary, in ascending tag order.
///
static ITEMS: &[&Item] = &[
  &SPECIFIC_CHARACTER_SET,
  &INSTANCE_CREATION_DATE,
  &SOP_CLASS_UID,
  &SOP_INSTANCE_UID,
  &STUDY_DATE,
  &SERIES_DATE,
  &ACQUISITION_DATE,
  &CONTENT_DATE,
  &ACQUISITION_DATE_TIME,
  &MODALITY,
  &INSTITUTION_NAME,
  &INSTITUTION_ADDRESS,
  &REFERRING_PHYSICIAN_NAME,
  &REFERRING_PHYSICIAN_ADDRESS,
  &REFERRING_PHYSICIAN_TELEPHONE_NUMBERS,
  &REFERRING_PHYSICIAN_IDENTIFICATION_SEQUENCE,
  &STATION_NAME,
  &STUDY_DESCRIPTION,
  &INSTITUTIONAL_DEPARTMENT_NAME,
  &PHYSICIANS_OF_RECORD,
  &PHYSICIANS_OF_RECORD_IDENTIFICATION_SEQUENCE,
  &PERFORMING_PHYSICIAN_NAME,
  &PERFORMING_PHYSICIAN_IDENTIFICATION_SEQUENCE,
  &OPERATORS_NAME,
  &OPERATOR_IDENTIFICATION_SEQUENCE,
  &MANUFACTURER_MODEL_NAME,
  &REFERENCED_IMAGE_SEQUENCE,
  &PATIENT_NAME,
  &PATIENT_ID,
  &ISSUER_OF_PATIENT_ID,
  &PATIENT_BIRTH_DATE,
  &PATIENT_SEX,
  &OTHER_PATIENT_IDS,
  &OTHER_PATIENT_NAMES,
  &PATIENT_BIRTH_NAME,
  &PATIENT_AGE,
  &PATIENT_WEIGHT,
  &PATIENT_ADDRESS,
  &PATIENT_MOTHER_BIRTH_NAME,
  &MILITARY_RANK,
  &BRANCH_OF_SERVICE,
  &MEDICAL_RECORD_LOCATOR,
  &MEDICAL_ALERTS,
  &ALLERGIES,
  &COUNTRY_OF_RESIDENCE,
  &REGION_OF_RESIDENCE,
  &PATIENT_TELEPHONE_NUMBERS,
  &ADDITIONAL_PATIENT_HISTORY,
  &PATIENT_RELIGIOUS_PREFERENCE,
  &RESPONSIBLE_PERSON,
  &RESPONSIBLE_PERSON_ROLE,
  &RESPONSIBLE_ORGANIZATION,
  &PATIENT_COMMENTS,
  &CLINICAL_TRIAL_SPONSOR_NAME,
  &CLINICAL_TRIAL_SITE_ID,
  &CLINICAL_TRIAL_SITE_NAME,
  &CLINICAL_TRIAL_SUBJECT_ID,
  &CLINICAL_TRIAL_SUBJECT_READING_ID,
  &CLINICAL_TRIAL_COORDINATING_CENTER_NAME,
  &PATIENT_IDENTITY_REMOVED,
  &DEVICE_SERIAL_NUMBER,
  &DATE_OF_SECONDARY_CAPTURE,
  &STUDY_INSTANCE_UID,
  &SERIES_INSTANCE_UID,
  &ROWS,
  &COLUMNS,
  &REQUESTING_SERVICE,
  &SCHEDULED_PERFORMING_PHYSICIAN_NAME,
  &PERFORMED_PROCEDURE_STEP_START_DATE,
  &PERFORMED_PROCEDURE_STEP_ID,
  &REQUEST_ATTRIBUTES_SEQUENCE,
  &REQUESTED_PROCEDURE_ID,
  &CURVE_DIMENSIONS,
  &NUMBER_OF_POINTS,
  &TYPE_OF_DATA,
  &CURVE_DESCRIPTION,
  &CURVE_LABEL,
  &CURVE_DATA,
  &OVERLAY_ROWS,
  &OVERLAY_COLUMNS,
  &OVERLAY_DESCRIPTION,
  &OVERLAY_TYPE,
  &OVERLAY_ORIGIN,
  &OVERLAY_BITS_ALLOCATED,
  &OVERLAY_BIT_POSITION,
  &OVERLAY_LABEL,
  &OVERLAY_DATA,
  &PIXEL_DATA,
];

/// Returns the dictionary item for the given tag, if the tag is defined in
/// the dictionary. Tags in the repeating curve and overlay groups resolve to
/// the item for the group's first repetition.
///
pub fn find(tag: DataElementTag) -> Option<&'static Item> {
  let tag = canonicalize_repeating_group(tag);

  ITEMS.iter().find(|item| item.tag == tag).copied()
}

/// Returns the dictionary item with the given keyword, e.g. `"PatientName"`.
///
pub fn find_by_keyword(keyword: &str) -> Option<&'static Item> {
  ITEMS.iter().find(|item| item.keyword == keyword).copied()
}

/// Formats a tag as its rendered identity followed by its dictionary name
/// when the tag is known, e.g. `"(0010,0010) Patient's Name"`.
///
pub fn tag_with_name(tag: DataElementTag) -> String {
  match find(tag) {
    Some(item) => format!("{} {}", tag, item.name),
    None => tag.to_string(),
  }
}

/// Maps tags in the even-numbered repeating curve group range
/// (`0x5000`–`0x50FF`) and overlay group range (`0x6000`–`0x60FF`) to the
/// first repetition of the group so they share one dictionary item.
///
fn canonicalize_repeating_group(tag: DataElementTag) -> DataElementTag {
  match tag.group {
    0x5000..=0x50FF if tag.group % 2 == 0 => tag.with_group(0x5000),
    0x6000..=0x60FF if tag.group % 2 == 0 => tag.with_group(0x6000),
    _ => tag,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn find_test() {
    assert_eq!(
      find(DataElementTag::new(0x0010, 0x0010)).map(|item| item.keyword),
      Some("PatientName")
    );

    assert!(find(DataElementTag::new(0x0009, 0x0001)).is_none());
  }

  #[test]
  fn find_repeating_group_test() {
    assert_eq!(
      find(DataElementTag::new(0x6004, 0x0010)).map(|item| item.name),
      Some("Overlay Rows")
    );

    assert_eq!(
      find(DataElementTag::new(0x5002, 0x3000)).map(|item| item.name),
      Some("Curve Data")
    );

    // Odd groups in the repeating ranges are private, not repetitions
    assert!(find(DataElementTag::new(0x6005, 0x0010)).is_none());
  }

  #[test]
  fn find_by_keyword_test() {
    assert_eq!(
      find_by_keyword("StudyDate").map(|item| item.tag),
      Some(STUDY_DATE.tag)
    );

    assert!(find_by_keyword("NotARealKeyword").is_none());
  }

  #[test]
  fn tag_with_name_test() {
    assert_eq!(tag_with_name(PATIENT_NAME.tag), "(0010,0010) Patient's Name");
    assert_eq!(
      tag_with_name(DataElementTag::new(0x0009, 0x0001)),
      "(0009,0001)"
    );
  }
}
