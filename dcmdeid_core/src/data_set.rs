//! An ordered collection of data elements, mapping data element tags to data
//! element values.

#[cfg(not(feature = "std"))]
use alloc::{
  collections::BTreeMap,
  format,
  string::{String, ToString},
  vec::Vec,
};

#[cfg(feature = "std")]
use std::collections::BTreeMap;

use crate::{
  DataElementTag, DataElementValue, DataError, ValueRepresentation, dictionary,
};

/// A DICOM data set that is an ordered mapping of data element tags to data
/// element values. A data set represents either a complete record or one item
/// of a sequence nested inside another data set.
///
/// A tag is unique within its containing data set, but the same tag may recur
/// at different nesting depths.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSet(BTreeMap<DataElementTag, DataElementValue>);

impl DataSet {
  /// Creates a new empty data set.
  ///
  pub fn new() -> Self {
    Self(BTreeMap::new())
  }

  /// Returns the number of data elements in a data set.
  ///
  pub fn len(&self) -> usize {
    self.0.len()
  }

  /// Returns whether a data set is empty.
  ///
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Returns whether a data element with the given tag exists in a data set.
  ///
  pub fn has(&self, tag: DataElementTag) -> bool {
    self.0.contains_key(&tag)
  }

  /// Inserts a data element value, replacing any existing value with the same
  /// tag. The replaced value is returned.
  ///
  pub fn insert(
    &mut self,
    tag: DataElementTag,
    value: DataElementValue,
  ) -> Option<DataElementValue> {
    self.0.insert(tag, value)
  }

  /// Inserts a data element holding UTF-8 string data with the given string
  /// VR, replacing any existing value with the same tag.
  ///
  pub fn insert_string(
    &mut self,
    tag: DataElementTag,
    vr: ValueRepresentation,
    value: &str,
  ) {
    self.0.insert(tag, DataElementValue::new_string(vr, value));
  }

  /// Deletes the data element with the given tag, returning its value, if
  /// there is one.
  ///
  pub fn delete(&mut self, tag: DataElementTag) -> Option<DataElementValue> {
    self.0.remove(&tag)
  }

  /// Returns the data element value for the given tag.
  ///
  pub fn get(&self, tag: DataElementTag) -> Option<&DataElementValue> {
    self.0.get(&tag)
  }

  /// Returns the data element value for the given tag, mutably.
  ///
  pub fn get_mut(
    &mut self,
    tag: DataElementTag,
  ) -> Option<&mut DataElementValue> {
    self.0.get_mut(&tag)
  }

  /// Returns the string data of the data element with the given tag. The
  /// element must exist and have a string VR.
  ///
  pub fn get_string(&self, tag: DataElementTag) -> Result<&str, DataError> {
    let value = self.0.get(&tag).ok_or(DataError::TagNotPresent { tag })?;

    value.get_string().map_err(|_| {
      if value.value_representation().is_string() {
        DataError::ValueInvalid {
          details: "String data is not valid UTF-8".to_string(),
          tag,
        }
      } else {
        DataError::ValueNotPresent { tag }
      }
    })
  }

  /// Returns the tags of all data elements in a data set, in ascending order.
  /// The returned list is an independent snapshot and is unaffected by
  /// subsequent changes to the data set.
  ///
  pub fn tags(&self) -> Vec<DataElementTag> {
    self.0.keys().copied().collect()
  }

  /// Returns an iterator over the data elements in a data set, in ascending
  /// tag order.
  ///
  pub fn iter(
    &self,
  ) -> impl Iterator<Item = (&DataElementTag, &DataElementValue)> {
    self.0.iter()
  }

  /// Retains only the data elements for which the predicate returns true.
  ///
  pub fn retain(
    &mut self,
    mut predicate: impl FnMut(DataElementTag, &DataElementValue) -> bool,
  ) {
    self.0.retain(|tag, value| predicate(*tag, value));
  }

  /// Formats the data elements of a data set as human-readable lines of text,
  /// one line per element. Intended for debugging and diagnostics.
  ///
  pub fn to_lines(&self) -> Vec<String> {
    self
      .0
      .iter()
      .map(|(tag, value)| {
        format!("{}: {}", dictionary::tag_with_name(*tag), value.to_string(80))
      })
      .collect()
  }
}
