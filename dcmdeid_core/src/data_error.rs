//! An error that occurred when retrieving or interpreting a value in a data
//! set.

#[cfg(not(feature = "std"))]
use alloc::{
  format,
  string::{String, ToString},
  vec,
  vec::Vec,
};

use crate::{DataElementTag, DcmDeidError, dictionary};

/// An error that occurred when retrieving a value from a [`DataSet`], or when
/// interpreting the bytes of a data element value.
///
/// [`DataSet`]: crate::DataSet
///
#[derive(Clone, Debug, PartialEq)]
pub enum DataError {
  /// The requested tag is not present in the data set.
  TagNotPresent { tag: DataElementTag },

  /// The value for the requested tag is not of the expected type, e.g. a
  /// string was requested from a data element holding a sequence.
  ValueNotPresent { tag: DataElementTag },

  /// The value for the requested tag is present but its data is invalid and
  /// could not be interpreted.
  ValueInvalid { details: String, tag: DataElementTag },
}

impl DataError {
  /// Returns the tag the error occurred on.
  ///
  pub fn tag(&self) -> DataElementTag {
    match self {
      DataError::TagNotPresent { tag }
      | DataError::ValueNotPresent { tag }
      | DataError::ValueInvalid { tag, .. } => *tag,
    }
  }

  fn description(&self) -> String {
    match self {
      DataError::TagNotPresent { .. } => "Tag not present".to_string(),
      DataError::ValueNotPresent { .. } => "Value not present".to_string(),
      DataError::ValueInvalid { details, .. } => {
        format!("Invalid value, details: {}", details)
      }
    }
  }
}

impl core::fmt::Display for DataError {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    write!(
      f,
      "DICOM data error, tag: {}, details: {}",
      dictionary::tag_with_name(self.tag()),
      self.description(),
    )
  }
}

impl DcmDeidError for DataError {
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    vec![
      format!("DICOM data error {}", task_description),
      "".to_string(),
      format!("  Tag: {}", dictionary::tag_with_name(self.tag())),
      format!("  Details: {}", self.description()),
    ]
  }
}
