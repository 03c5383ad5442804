//! A data element tag, defined as 16-bit `group` and `element` values.

#[cfg(not(feature = "std"))]
use alloc::{
  format,
  string::{String, ToString},
};

/// A data element tag that is defined by `group` and `element` values, each
/// of which is a 16-bit unsigned integer.
///
/// Ref: PS3.5 7.1.1.
///
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DataElementTag {
  pub group: u16,
  pub element: u16,
}

impl DataElementTag {
  /// A tag with group and element values of zero.
  ///
  pub const ZERO: DataElementTag = DataElementTag {
    group: 0,
    element: 0,
  };

  /// Creates a new tag with the given group and element values.
  ///
  pub const fn new(group: u16, element: u16) -> Self {
    Self { group, element }
  }

  /// Returns a copy of this tag with its group set to the given value.
  ///
  pub const fn with_group(&self, group: u16) -> Self {
    Self {
      group,
      element: self.element,
    }
  }

  /// Returns a copy of this tag with its element set to the given value.
  ///
  pub const fn with_element(&self, element: u16) -> Self {
    Self {
      group: self.group,
      element,
    }
  }

  /// Returns whether this tag is private, which is determined by whether its
  /// group number is odd.
  ///
  pub const fn is_private(&self) -> bool {
    self.group % 2 == 1
  }

  /// Formats a tag as an 8-character uppercase hexadecimal string with no
  /// separators, e.g. `"00100010"`.
  ///
  pub fn to_hex_string(&self) -> String {
    format!("{:04X}{:04X}", self.group, self.element)
  }

  /// Parses a tag from an 8-character hexadecimal string.
  ///
  #[allow(clippy::result_unit_err)]
  pub fn from_hex_string(tag: &str) -> Result<Self, ()> {
    if tag.len() != 8 || !tag.is_ascii() {
      return Err(());
    }

    let group = u16::from_str_radix(&tag[0..4], 16).map_err(|_| ())?;
    let element = u16::from_str_radix(&tag[4..8], 16).map_err(|_| ())?;

    Ok(Self { group, element })
  }
}

impl core::fmt::Display for DataElementTag {
  /// Formats a tag as `"(gggg,eeee)"`, e.g. `"(0010,0010)"`. This rendering
  /// is stable and is used as the tag identity in audit reports.
  ///
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    write!(f, "({:04X},{:04X})", self.group, self.element)
  }
}
