//! The value representations (VRs) defined by the DICOM standard, along with
//! functions for converting them to and from their two-letter codes.

#[cfg(not(feature = "std"))]
use alloc::string::String;

/// A value representation describing how the value of a data element is
/// structured and interpreted.
///
/// Ref: PS3.5 6.2.
///
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueRepresentation {
  AgeString,
  ApplicationEntity,
  AttributeTag,
  CodeString,
  Date,
  DateTime,
  DecimalString,
  FloatingPointDouble,
  FloatingPointSingle,
  IntegerString,
  LongString,
  LongText,
  OtherByteString,
  OtherDoubleString,
  OtherFloatString,
  OtherLongString,
  OtherVeryLongString,
  OtherWordString,
  PersonName,
  Sequence,
  ShortString,
  ShortText,
  SignedLong,
  SignedShort,
  SignedVeryLong,
  Time,
  UniqueIdentifier,
  UniversalResourceIdentifier,
  Unknown,
  UnlimitedCharacters,
  UnlimitedText,
  UnsignedLong,
  UnsignedShort,
  UnsignedVeryLong,
}

impl ValueRepresentation {
  /// Converts a two-letter VR code, e.g. `b"PN"`, into a
  /// `ValueRepresentation`.
  ///
  #[allow(clippy::result_unit_err)]
  pub fn from_bytes(bytes: &[u8]) -> Result<Self, ()> {
    match bytes {
      b"AE" => Ok(ValueRepresentation::ApplicationEntity),
      b"AS" => Ok(ValueRepresentation::AgeString),
      b"AT" => Ok(ValueRepresentation::AttributeTag),
      b"CS" => Ok(ValueRepresentation::CodeString),
      b"DA" => Ok(ValueRepresentation::Date),
      b"DS" => Ok(ValueRepresentation::DecimalString),
      b"DT" => Ok(ValueRepresentation::DateTime),
      b"FD" => Ok(ValueRepresentation::FloatingPointDouble),
      b"FL" => Ok(ValueRepresentation::FloatingPointSingle),
      b"IS" => Ok(ValueRepresentation::IntegerString),
      b"LO" => Ok(ValueRepresentation::LongString),
      b"LT" => Ok(ValueRepresentation::LongText),
      b"OB" => Ok(ValueRepresentation::OtherByteString),
      b"OD" => Ok(ValueRepresentation::OtherDoubleString),
      b"OF" => Ok(ValueRepresentation::OtherFloatString),
      b"OL" => Ok(ValueRepresentation::OtherLongString),
      b"OV" => Ok(ValueRepresentation::OtherVeryLongString),
      b"OW" => Ok(ValueRepresentation::OtherWordString),
      b"PN" => Ok(ValueRepresentation::PersonName),
      b"SH" => Ok(ValueRepresentation::ShortString),
      b"SL" => Ok(ValueRepresentation::SignedLong),
      b"SQ" => Ok(ValueRepresentation::Sequence),
      b"SS" => Ok(ValueRepresentation::SignedShort),
      b"ST" => Ok(ValueRepresentation::ShortText),
      b"SV" => Ok(ValueRepresentation::SignedVeryLong),
      b"TM" => Ok(ValueRepresentation::Time),
      b"UC" => Ok(ValueRepresentation::UnlimitedCharacters),
      b"UI" => Ok(ValueRepresentation::UniqueIdentifier),
      b"UL" => Ok(ValueRepresentation::UnsignedLong),
      b"UN" => Ok(ValueRepresentation::Unknown),
      b"UR" => Ok(ValueRepresentation::UniversalResourceIdentifier),
      b"US" => Ok(ValueRepresentation::UnsignedShort),
      b"UT" => Ok(ValueRepresentation::UnlimitedText),
      b"UV" => Ok(ValueRepresentation::UnsignedVeryLong),
      _ => Err(()),
    }
  }

  /// Returns the two-letter code for a VR, e.g. `b"PN"`.
  ///
  pub fn to_bytes(&self) -> [u8; 2] {
    match self {
      ValueRepresentation::AgeString => *b"AS",
      ValueRepresentation::ApplicationEntity => *b"AE",
      ValueRepresentation::AttributeTag => *b"AT",
      ValueRepresentation::CodeString => *b"CS",
      ValueRepresentation::Date => *b"DA",
      ValueRepresentation::DateTime => *b"DT",
      ValueRepresentation::DecimalString => *b"DS",
      ValueRepresentation::FloatingPointDouble => *b"FD",
      ValueRepresentation::FloatingPointSingle => *b"FL",
      ValueRepresentation::IntegerString => *b"IS",
      ValueRepresentation::LongString => *b"LO",
      ValueRepresentation::LongText => *b"LT",
      ValueRepresentation::OtherByteString => *b"OB",
      ValueRepresentation::OtherDoubleString => *b"OD",
      ValueRepresentation::OtherFloatString => *b"OF",
      ValueRepresentation::OtherLongString => *b"OL",
      ValueRepresentation::OtherVeryLongString => *b"OV",
      ValueRepresentation::OtherWordString => *b"OW",
      ValueRepresentation::PersonName => *b"PN",
      ValueRepresentation::Sequence => *b"SQ",
      ValueRepresentation::ShortString => *b"SH",
      ValueRepresentation::ShortText => *b"ST",
      ValueRepresentation::SignedLong => *b"SL",
      ValueRepresentation::SignedShort => *b"SS",
      ValueRepresentation::SignedVeryLong => *b"SV",
      ValueRepresentation::Time => *b"TM",
      ValueRepresentation::UniqueIdentifier => *b"UI",
      ValueRepresentation::UniversalResourceIdentifier => *b"UR",
      ValueRepresentation::Unknown => *b"UN",
      ValueRepresentation::UnlimitedCharacters => *b"UC",
      ValueRepresentation::UnlimitedText => *b"UT",
      ValueRepresentation::UnsignedLong => *b"UL",
      ValueRepresentation::UnsignedShort => *b"US",
      ValueRepresentation::UnsignedVeryLong => *b"UV",
    }
  }

  /// Returns whether values of a VR hold UTF-8 string data.
  ///
  pub fn is_string(&self) -> bool {
    matches!(
      self,
      ValueRepresentation::AgeString
        | ValueRepresentation::ApplicationEntity
        | ValueRepresentation::CodeString
        | ValueRepresentation::Date
        | ValueRepresentation::DateTime
        | ValueRepresentation::DecimalString
        | ValueRepresentation::IntegerString
        | ValueRepresentation::LongString
        | ValueRepresentation::LongText
        | ValueRepresentation::PersonName
        | ValueRepresentation::ShortString
        | ValueRepresentation::ShortText
        | ValueRepresentation::Time
        | ValueRepresentation::UniqueIdentifier
        | ValueRepresentation::UniversalResourceIdentifier
        | ValueRepresentation::UnlimitedCharacters
        | ValueRepresentation::UnlimitedText
    )
  }

  /// Returns the human-readable name of a VR, e.g. `"Person Name"`.
  ///
  pub fn name(&self) -> &'static str {
    match self {
      ValueRepresentation::AgeString => "Age String",
      ValueRepresentation::ApplicationEntity => "Application Entity",
      ValueRepresentation::AttributeTag => "Attribute Tag",
      ValueRepresentation::CodeString => "Code String",
      ValueRepresentation::Date => "Date",
      ValueRepresentation::DateTime => "Date Time",
      ValueRepresentation::DecimalString => "Decimal String",
      ValueRepresentation::FloatingPointDouble => "Floating Point Double",
      ValueRepresentation::FloatingPointSingle => "Floating Point Single",
      ValueRepresentation::IntegerString => "Integer String",
      ValueRepresentation::LongString => "Long String",
      ValueRepresentation::LongText => "Long Text",
      ValueRepresentation::OtherByteString => "Other Byte String",
      ValueRepresentation::OtherDoubleString => "Other Double String",
      ValueRepresentation::OtherFloatString => "Other Float String",
      ValueRepresentation::OtherLongString => "Other Long String",
      ValueRepresentation::OtherVeryLongString => "Other Very Long String",
      ValueRepresentation::OtherWordString => "Other Word String",
      ValueRepresentation::PersonName => "Person Name",
      ValueRepresentation::Sequence => "Sequence",
      ValueRepresentation::ShortString => "Short String",
      ValueRepresentation::ShortText => "Short Text",
      ValueRepresentation::SignedLong => "Signed Long",
      ValueRepresentation::SignedShort => "Signed Short",
      ValueRepresentation::SignedVeryLong => "Signed Very Long",
      ValueRepresentation::Time => "Time",
      ValueRepresentation::UniqueIdentifier => "Unique Identifier",
      ValueRepresentation::UniversalResourceIdentifier => {
        "Universal Resource Identifier"
      }
      ValueRepresentation::Unknown => "Unknown",
      ValueRepresentation::UnlimitedCharacters => "Unlimited Characters",
      ValueRepresentation::UnlimitedText => "Unlimited Text",
      ValueRepresentation::UnsignedLong => "Unsigned Long",
      ValueRepresentation::UnsignedShort => "Unsigned Short",
      ValueRepresentation::UnsignedVeryLong => "Unsigned Very Long",
    }
  }
}

impl core::fmt::Display for ValueRepresentation {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    let bytes = self.to_bytes();

    f.write_str(core::str::from_utf8(&bytes).unwrap_or("??"))
  }
}
