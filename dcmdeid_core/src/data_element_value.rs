//! A data element value that can hold any of the DICOM value representations.
//! Data element values are usually stored in a [`DataSet`] which maps data
//! element tags to data element values.

#[cfg(not(feature = "std"))]
use alloc::{
  format,
  string::{String, ToString},
  vec,
  vec::Vec,
};

use byteorder::{ByteOrder, LittleEndian};
use unicode_segmentation::UnicodeSegmentation;

use crate::{DataSet, ValueRepresentation};

/// A DICOM data element value that holds one of the following types of data:
///
/// 1. Binary value. A data element value that holds raw bytes for a specific
///    VR. This is the most common case. When the VR is a string type then the
///    bytes are UTF-8 encoded. The data is always little endian.
///
/// 2. Sequence value. A data element value that holds a sequence, which is a
///    list of nested data sets used to create hierarchies of data elements in
///    a DICOM data set.
///
/// Ref: PS3.5 6.2.
///
#[derive(Clone, Debug, PartialEq)]
pub struct DataElementValue(RawDataElementValue);

#[derive(Clone, Debug, PartialEq)]
enum RawDataElementValue {
  BinaryValue {
    vr: ValueRepresentation,
    bytes: Vec<u8>,
  },
  SequenceValue {
    items: Vec<DataSet>,
  },
}

impl DataElementValue {
  /// Creates a new binary data element value with the given VR and bytes.
  /// The bytes of string VRs must be UTF-8 encoded.
  ///
  pub fn new_binary(vr: ValueRepresentation, bytes: Vec<u8>) -> Self {
    if vr == ValueRepresentation::Sequence {
      return Self::new_sequence(vec![]);
    }

    Self(RawDataElementValue::BinaryValue { vr, bytes })
  }

  /// Creates a new data element value holding UTF-8 string data with the
  /// given string VR.
  ///
  pub fn new_string(vr: ValueRepresentation, value: &str) -> Self {
    Self::new_binary(vr, value.as_bytes().to_vec())
  }

  /// Creates a new `PersonName` data element value.
  ///
  pub fn new_person_name(value: &str) -> Self {
    Self::new_string(ValueRepresentation::PersonName, value)
  }

  /// Creates a new `Sequence` data element value containing the given nested
  /// data sets.
  ///
  pub fn new_sequence(items: Vec<DataSet>) -> Self {
    Self(RawDataElementValue::SequenceValue { items })
  }

  /// Returns the value representation of a data element value.
  ///
  pub fn value_representation(&self) -> ValueRepresentation {
    match &self.0 {
      RawDataElementValue::BinaryValue { vr, .. } => *vr,
      RawDataElementValue::SequenceValue { .. } => {
        ValueRepresentation::Sequence
      }
    }
  }

  /// Returns the raw bytes of a binary data element value. Returns an error
  /// for sequence values as they hold no bytes.
  ///
  #[allow(clippy::result_unit_err)]
  pub fn bytes(&self) -> Result<&[u8], ()> {
    match &self.0 {
      RawDataElementValue::BinaryValue { bytes, .. } => Ok(bytes),
      RawDataElementValue::SequenceValue { .. } => Err(()),
    }
  }

  /// Returns the string data of a data element value with a string VR.
  ///
  #[allow(clippy::result_unit_err)]
  pub fn get_string(&self) -> Result<&str, ()> {
    match &self.0 {
      RawDataElementValue::BinaryValue { vr, bytes } if vr.is_string() => {
        core::str::from_utf8(bytes).map_err(|_| ())
      }
      _ => Err(()),
    }
  }

  /// Returns the nested data sets of a sequence value.
  ///
  pub fn sequence_items(&self) -> Option<&Vec<DataSet>> {
    match &self.0 {
      RawDataElementValue::SequenceValue { items } => Some(items),
      _ => None,
    }
  }

  /// Returns the nested data sets of a sequence value, mutably.
  ///
  pub fn sequence_items_mut(&mut self) -> Option<&mut Vec<DataSet>> {
    match &mut self.0 {
      RawDataElementValue::SequenceValue { items } => Some(items),
      _ => None,
    }
  }

  /// Returns whether a data element value holds no data, i.e. it has zero
  /// bytes or, for a sequence, zero items.
  ///
  pub fn is_empty(&self) -> bool {
    match &self.0 {
      RawDataElementValue::BinaryValue { bytes, .. } => bytes.is_empty(),
      RawDataElementValue::SequenceValue { items } => items.is_empty(),
    }
  }

  /// Returns a zero-length data element value with the same VR as this value.
  /// Emptying a sequence value yields a sequence with no items.
  ///
  pub fn emptied(&self) -> Self {
    match &self.0 {
      RawDataElementValue::BinaryValue { vr, .. } => {
        Self::new_binary(*vr, vec![])
      }
      RawDataElementValue::SequenceValue { .. } => Self::new_sequence(vec![]),
    }
  }

  /// Formats a data element value as a human-readable single line of text.
  /// Values longer than the output width are truncated with a trailing
  /// ellipsis.
  ///
  pub fn to_string(&self, output_width: usize) -> String {
    let result = match &self.0 {
      RawDataElementValue::BinaryValue { vr, bytes } if vr.is_string() => {
        match core::str::from_utf8(bytes) {
          Ok(value) => value
            .split('\\')
            .map(|s| format!("{:?}", s.trim_end_matches('\0')))
            .collect::<Vec<_>>()
            .join(", "),
          Err(_) => "!! Invalid UTF-8 data".to_string(),
        }
      }

      RawDataElementValue::BinaryValue { vr, bytes } => match vr {
        ValueRepresentation::AttributeTag => bytes
          .chunks_exact(4)
          .map(|chunk| {
            format!(
              "({:04X},{:04X})",
              LittleEndian::read_u16(&chunk[0..2]),
              LittleEndian::read_u16(&chunk[2..4]),
            )
          })
          .collect::<Vec<_>>()
          .join(", "),

        ValueRepresentation::SignedShort => {
          format_numeric_value(bytes, 2, |chunk| {
            LittleEndian::read_i16(chunk).to_string()
          })
        }

        ValueRepresentation::UnsignedShort => {
          format_numeric_value(bytes, 2, |chunk| {
            LittleEndian::read_u16(chunk).to_string()
          })
        }

        ValueRepresentation::SignedLong => {
          format_numeric_value(bytes, 4, |chunk| {
            LittleEndian::read_i32(chunk).to_string()
          })
        }

        ValueRepresentation::UnsignedLong => {
          format_numeric_value(bytes, 4, |chunk| {
            LittleEndian::read_u32(chunk).to_string()
          })
        }

        ValueRepresentation::SignedVeryLong => {
          format_numeric_value(bytes, 8, |chunk| {
            LittleEndian::read_i64(chunk).to_string()
          })
        }

        ValueRepresentation::UnsignedVeryLong => {
          format_numeric_value(bytes, 8, |chunk| {
            LittleEndian::read_u64(chunk).to_string()
          })
        }

        ValueRepresentation::FloatingPointSingle => {
          format_numeric_value(bytes, 4, |chunk| {
            LittleEndian::read_f32(chunk).to_string()
          })
        }

        ValueRepresentation::FloatingPointDouble => {
          format_numeric_value(bytes, 8, |chunk| {
            LittleEndian::read_f64(chunk).to_string()
          })
        }

        _ => format!("[{} bytes]", bytes.len()),
      },

      RawDataElementValue::SequenceValue { items } => {
        format!("[{} sequence items]", items.len())
      }
    };

    // Truncate on a grapheme boundary if the output width is exceeded
    let graphemes = result.graphemes(true).collect::<Vec<_>>();
    if graphemes.len() > output_width {
      let mut truncated =
        graphemes[0..output_width.saturating_sub(1)].concat();
      truncated.push('…');
      truncated
    } else {
      result
    }
  }
}

fn format_numeric_value(
  bytes: &[u8],
  item_size: usize,
  format_item: impl Fn(&[u8]) -> String,
) -> String {
  bytes
    .chunks_exact(item_size)
    .map(|chunk| format_item(chunk))
    .collect::<Vec<_>>()
    .join(", ")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_string_test() {
    let value = DataElementValue::new_person_name("Doe^John");

    assert_eq!(
      value.value_representation(),
      ValueRepresentation::PersonName
    );
    assert_eq!(value.get_string(), Ok("Doe^John"));
  }

  #[test]
  fn get_string_on_non_string_value_test() {
    let value =
      DataElementValue::new_binary(ValueRepresentation::UnsignedShort, vec![
        1, 0,
      ]);

    assert_eq!(value.get_string(), Err(()));
  }

  #[test]
  fn emptied_test() {
    let value =
      DataElementValue::new_string(ValueRepresentation::LongString, "CT Dept");
    let emptied = value.emptied();

    assert!(emptied.is_empty());
    assert_eq!(
      emptied.value_representation(),
      ValueRepresentation::LongString
    );

    let sequence = DataElementValue::new_sequence(vec![DataSet::new()]);
    assert_eq!(sequence.emptied().sequence_items(), Some(&vec![]));
  }

  #[test]
  fn to_string_test() {
    assert_eq!(
      DataElementValue::new_person_name("Doe^John").to_string(80),
      "\"Doe^John\""
    );

    assert_eq!(
      DataElementValue::new_string(
        ValueRepresentation::CodeString,
        "DERIVED\\SECONDARY"
      )
      .to_string(80),
      "\"DERIVED\", \"SECONDARY\""
    );

    assert_eq!(
      DataElementValue::new_binary(ValueRepresentation::UnsignedShort, vec![
        0x34, 0x12, 0x78, 0x56
      ])
      .to_string(80),
      "4660, 22136"
    );

    assert_eq!(
      DataElementValue::new_binary(
        ValueRepresentation::OtherWordString,
        vec![0; 128]
      )
      .to_string(80),
      "[128 bytes]"
    );

    assert_eq!(
      DataElementValue::new_sequence(vec![DataSet::new()]).to_string(80),
      "[1 sequence items]"
    );
  }

  #[test]
  fn to_string_truncation_test() {
    let value =
      DataElementValue::new_string(ValueRepresentation::LongText, "0123456789");

    assert_eq!(value.to_string(6), "\"0123…");
  }
}
